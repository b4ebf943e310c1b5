//! Helper functions: error type and mesh math.

use std::collections::HashMap;

use shape_kernel::RenderMesh;
use wheelchair_model::ModelError;

// ── Error Type ──────────────────────────────────────────────────────────────

/// Unified error type for the test harness.
#[derive(Debug, thiserror::Error)]
pub enum HarnessError {
    #[error("dispatch error ({kind}): {message}")]
    Dispatch { kind: String, message: String },

    #[error("unexpected response: expected {expected}, got {got}")]
    UnexpectedResponse { expected: &'static str, got: String },

    #[error("assertion failed: {detail}")]
    AssertionFailed { detail: String },

    #[error("oracle failure ({oracle}): {detail}")]
    OracleFailure { oracle: String, detail: String },

    #[error("STL error: {reason}")]
    StlError { reason: String },

    #[error("model error: {0}")]
    Model(#[from] ModelError),
}

// ── Mesh Math Utilities ─────────────────────────────────────────────────────

/// Axis-aligned bounding box of a RenderMesh as (min, max). None for an
/// empty mesh.
pub fn mesh_bounding_box(mesh: &RenderMesh) -> Option<([f32; 3], [f32; 3])> {
    if mesh.vertices.len() < 3 {
        return None;
    }
    let mut min = [f32::MAX; 3];
    let mut max = [f32::MIN; 3];
    for chunk in mesh.vertices.chunks_exact(3) {
        for i in 0..3 {
            min[i] = min[i].min(chunk[i]);
            max[i] = max[i].max(chunk[i]);
        }
    }
    Some((min, max))
}

/// Triangle corners as f64, skipping triangles with out-of-range indices.
pub(crate) fn triangles(mesh: &RenderMesh) -> impl Iterator<Item = [[f64; 3]; 3]> + '_ {
    let vertex_count = mesh.vertex_count();
    mesh.indices.chunks_exact(3).filter_map(move |tri| {
        if tri.iter().any(|&i| i as usize >= vertex_count) {
            return None;
        }
        let v = |i: u32| {
            let i = i as usize * 3;
            [
                mesh.vertices[i] as f64,
                mesh.vertices[i + 1] as f64,
                mesh.vertices[i + 2] as f64,
            ]
        };
        Some([v(tri[0]), v(tri[1]), v(tri[2])])
    })
}

pub(crate) fn triangle_area([a, b, c]: [[f64; 3]; 3]) -> f64 {
    let u = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
    let v = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
    let n = [
        u[1] * v[2] - u[2] * v[1],
        u[2] * v[0] - u[0] * v[2],
        u[0] * v[1] - u[1] * v[0],
    ];
    (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt() / 2.0
}

/// Total surface area of a triangle mesh.
pub fn mesh_surface_area(mesh: &RenderMesh) -> f64 {
    triangles(mesh).map(triangle_area).sum()
}

/// Count mesh edges: returns (total_edges, boundary_edges).
///
/// A boundary edge is used by exactly one triangle.
pub fn count_mesh_edges(mesh: &RenderMesh) -> (usize, usize) {
    let mut edge_counts: HashMap<(u32, u32), usize> = HashMap::new();
    for tri in mesh.indices.chunks_exact(3) {
        for (a, b) in [(tri[0], tri[1]), (tri[1], tri[2]), (tri[2], tri[0])] {
            *edge_counts.entry((a.min(b), a.max(b))).or_insert(0) += 1;
        }
    }
    let boundary = edge_counts.values().filter(|&&c| c == 1).count();
    (edge_counts.len(), boundary)
}

#[cfg(test)]
pub(crate) fn unit_cube_mesh() -> RenderMesh {
    RenderMesh {
        vertices: vec![
            0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 1.0, 0.0,
            1.0, 1.0, 1.0, 1.0, 0.0, 1.0, 1.0,
        ],
        normals: vec![0.0; 24],
        indices: vec![
            0, 2, 1, 0, 3, 2, // bottom
            4, 5, 6, 4, 6, 7, // top
            0, 1, 5, 0, 5, 4, // front
            2, 3, 7, 2, 7, 6, // back
            0, 4, 7, 0, 7, 3, // left
            1, 2, 6, 1, 6, 5, // right
        ],
        color_ranges: vec![],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bounding_box_of_unit_cube_mesh() {
        let (min, max) = mesh_bounding_box(&unit_cube_mesh()).unwrap();
        assert_eq!(min, [0.0, 0.0, 0.0]);
        assert_eq!(max, [1.0, 1.0, 1.0]);
        assert!(mesh_bounding_box(&RenderMesh::default()).is_none());
    }

    #[test]
    fn surface_area_of_unit_cube() {
        let area = mesh_surface_area(&unit_cube_mesh());
        assert!((area - 6.0).abs() < 1e-10, "unit cube area should be 6, got {area}");
    }

    #[test]
    fn mesh_edge_counts_unit_cube() {
        let (total, boundary) = count_mesh_edges(&unit_cube_mesh());
        // 12 cube edges + 6 face diagonals
        assert_eq!(total, 18);
        assert_eq!(boundary, 0);
    }
}
