//! STL export from RenderMesh and binary STL parsing.

use shape_kernel::RenderMesh;

use crate::helpers::{mesh_bounding_box, HarnessError};

/// Export a RenderMesh as a binary STL file.
///
/// Unlike the bridge export this rejects empty meshes and bad indices.
pub fn export_binary_stl(mesh: &RenderMesh, name: &str) -> Result<Vec<u8>, HarnessError> {
    validate(mesh)?;
    let mut stl = wasm_bridge::stl_export::render_mesh_to_stl(mesh);
    let header = format!("binary STL: {name}");
    let n = header.len().min(80);
    stl[..80].fill(0);
    stl[..n].copy_from_slice(&header.as_bytes()[..n]);
    Ok(stl)
}

/// Export a RenderMesh as ASCII STL.
pub fn export_ascii_stl(mesh: &RenderMesh, name: &str) -> Result<String, HarnessError> {
    validate(mesh)?;
    let mut out = format!("solid {name}\n");
    for tri in crate::helpers::triangles(mesh) {
        let [a, b, c] = tri;
        let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        let n = [
            u[1] * v[2] - u[2] * v[1],
            u[2] * v[0] - u[0] * v[2],
            u[0] * v[1] - u[1] * v[0],
        ];
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        let n = if len > 1e-12 {
            [n[0] / len, n[1] / len, n[2] / len]
        } else {
            [0.0; 3]
        };
        out.push_str(&format!("  facet normal {:e} {:e} {:e}\n    outer loop\n", n[0], n[1], n[2]));
        for p in tri {
            out.push_str(&format!("      vertex {:e} {:e} {:e}\n", p[0], p[1], p[2]));
        }
        out.push_str("    endloop\n  endfacet\n");
    }
    out.push_str(&format!("endsolid {name}\n"));
    Ok(out)
}

fn validate(mesh: &RenderMesh) -> Result<(), HarnessError> {
    if mesh.triangle_count() == 0 {
        return Err(HarnessError::StlError {
            reason: "mesh has no triangles".to_string(),
        });
    }
    let vertex_count = mesh.vertex_count();
    if let Some(idx) = mesh.indices.iter().find(|&&i| i as usize >= vertex_count) {
        return Err(HarnessError::StlError {
            reason: format!("index {idx} out of range (vertex count = {vertex_count})"),
        });
    }
    Ok(())
}

/// Summary of a parsed binary STL file.
#[derive(Debug, Clone, PartialEq)]
pub struct StlSummary {
    pub header: String,
    pub triangle_count: usize,
    pub min: [f32; 3],
    pub max: [f32; 3],
}

/// Parse a binary STL and check its length against the triangle count.
pub fn parse_binary_stl(bytes: &[u8]) -> Result<StlSummary, HarnessError> {
    let err = |reason: String| HarnessError::StlError { reason };
    if bytes.len() < 84 {
        return Err(err(format!("{} bytes is shorter than the header", bytes.len())));
    }
    let header = String::from_utf8_lossy(&bytes[..80])
        .trim_end_matches('\0')
        .to_string();
    let triangle_count = u32::from_le_bytes([bytes[80], bytes[81], bytes[82], bytes[83]]) as usize;
    let expected = 84 + triangle_count * 50;
    if bytes.len() != expected {
        return Err(err(format!(
            "{} triangles need {expected} bytes, got {}",
            triangle_count,
            bytes.len()
        )));
    }

    let mut mesh = RenderMesh::default();
    for record in bytes[84..].chunks_exact(50) {
        // skip the 12-byte normal and the trailing attribute count
        for value in record[12..48].chunks_exact(4) {
            let f = f32::from_le_bytes([value[0], value[1], value[2], value[3]]);
            if !f.is_finite() {
                return Err(err("non-finite vertex".to_string()));
            }
            mesh.vertices.push(f);
        }
    }
    let (min, max) = mesh_bounding_box(&mesh).unwrap_or(([0.0; 3], [0.0; 3]));
    Ok(StlSummary {
        header,
        triangle_count,
        min,
        max,
    })
}
