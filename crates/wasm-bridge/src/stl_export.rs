use shape_kernel::{ColorRange, RenderMesh};

const STL_HEADER: &[u8] = b"Wheelchair Model STL Export";

/// Concatenate meshes into one, offsetting indices and color ranges.
pub fn merge_meshes<'a>(meshes: impl IntoIterator<Item = &'a RenderMesh>) -> RenderMesh {
    let mut merged = RenderMesh::default();
    for mesh in meshes {
        let vertex_offset = merged.vertex_count() as u32;
        let index_offset = merged.indices.len() as u32;
        merged.vertices.extend_from_slice(&mesh.vertices);
        merged.normals.extend_from_slice(&mesh.normals);
        merged
            .indices
            .extend(mesh.indices.iter().map(|i| i + vertex_offset));
        merged
            .color_ranges
            .extend(mesh.color_ranges.iter().map(|r| ColorRange {
                color: r.color,
                start_index: r.start_index + index_offset,
                end_index: r.end_index + index_offset,
            }));
    }
    merged
}

/// Convert a `RenderMesh` to binary STL format.
///
/// Binary STL layout:
/// - 80 bytes: header
/// - 4 bytes: u32 LE triangle count
/// - Per triangle (50 bytes each):
///   - 12 bytes: normal vector (3 × f32 LE)
///   - 36 bytes: 3 vertices (3 × 3 × f32 LE)
///   - 2 bytes: attribute byte count (0u16)
pub fn render_mesh_to_stl(mesh: &RenderMesh) -> Vec<u8> {
    let tri_count = mesh.triangle_count();
    let mut buf = Vec::with_capacity(84 + tri_count * 50);

    buf.extend_from_slice(STL_HEADER);
    buf.resize(80, 0);
    buf.extend_from_slice(&(tri_count as u32).to_le_bytes());

    let vertex = |i: u32| {
        let i = i as usize * 3;
        [mesh.vertices[i], mesh.vertices[i + 1], mesh.vertices[i + 2]]
    };

    for tri in mesh.indices.chunks_exact(3) {
        let [v0, v1, v2] = [vertex(tri[0]), vertex(tri[1]), vertex(tri[2])];

        let e1 = [v1[0] - v0[0], v1[1] - v0[1], v1[2] - v0[2]];
        let e2 = [v2[0] - v0[0], v2[1] - v0[1], v2[2] - v0[2]];
        let n = [
            e1[1] * e2[2] - e1[2] * e2[1],
            e1[2] * e2[0] - e1[0] * e2[2],
            e1[0] * e2[1] - e1[1] * e2[0],
        ];
        let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
        // slivers from tiny bend segments get a zero normal
        let normal = if len > 1e-12 {
            [n[0] / len, n[1] / len, n[2] / len]
        } else {
            [0.0; 3]
        };

        for c in normal.iter().chain(&v0).chain(&v1).chain(&v2) {
            buf.extend_from_slice(&c.to_le_bytes());
        }
        buf.extend_from_slice(&0u16.to_le_bytes());
    }

    buf
}
