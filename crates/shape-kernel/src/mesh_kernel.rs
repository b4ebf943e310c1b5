//! MeshKernel: geometry kernel backed by `csgrs` polygon solids.
//!
//! Every handle maps to an immutable CSG body. Unions are BSP booleans, so
//! overlapping operands merge into one closed surface, and tessellation
//! triangulates the resulting polygons.

use std::collections::HashMap;

use tracing::debug;

use crate::primitives::{self, Solid};
use crate::traits::Kernel;
use crate::transform::Transform;
use crate::types::*;

/// Segment settings for curved primitives.
#[derive(Debug, Clone, Copy)]
pub struct MeshConfig {
    /// Multiplier applied to every requested segment count. Values below 1
    /// give coarser preview meshes.
    pub segment_scale: f64,
    /// Lower bound on the effective segment count.
    pub min_segments: u32,
}

impl Default for MeshConfig {
    fn default() -> Self {
        Self {
            segment_scale: 1.0,
            min_segments: 8,
        }
    }
}

impl MeshConfig {
    /// Coarse settings for interactive previews.
    pub fn preview() -> Self {
        Self {
            segment_scale: 0.5,
            ..Self::default()
        }
    }

    fn effective(&self, requested: u32) -> u32 {
        let scaled = (requested as f64 * self.segment_scale).round() as u32;
        scaled.max(self.min_segments).max(3)
    }
}

/// Real geometry kernel backed by csgrs solids.
pub struct MeshKernel {
    config: MeshConfig,
    next_handle: u64,
    solids: HashMap<u64, Solid>,
}

impl MeshKernel {
    pub fn new() -> Self {
        Self::with_config(MeshConfig::default())
    }

    pub fn with_config(config: MeshConfig) -> Self {
        Self {
            config,
            next_handle: 1,
            solids: HashMap::new(),
        }
    }

    fn store(&mut self, solid: Solid) -> KernelSolidHandle {
        let handle = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn get(&self, handle: &KernelSolidHandle) -> Result<&Solid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::SolidNotFound { id: handle.id() })
    }

    fn transformed(
        &mut self,
        solid: &KernelSolidHandle,
        t: &Transform,
    ) -> Result<KernelSolidHandle, KernelError> {
        let moved = primitives::transformed(self.get(solid)?, t);
        Ok(self.store(moved))
    }

    /// Number of solids held by this session.
    pub fn solid_count(&self) -> usize {
        self.solids.len()
    }
}

impl Default for MeshKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for MeshKernel {
    fn cuboid(&mut self, spec: &CuboidSpec) -> Result<KernelSolidHandle, KernelError> {
        primitives::validate_cuboid(spec)?;
        debug!(size = ?spec.size, center = ?spec.center, "creating cuboid");
        Ok(self.store(primitives::cuboid_solid(spec)))
    }

    fn rounded_cuboid(
        &mut self,
        spec: &RoundedCuboidSpec,
    ) -> Result<KernelSolidHandle, KernelError> {
        primitives::validate_rounded_cuboid(spec)?;
        debug!(size = ?spec.size, round_radius = spec.round_radius, "creating rounded cuboid");
        let segments = self.config.effective(spec.segments);
        Ok(self.store(primitives::rounded_cuboid_solid(spec, segments)))
    }

    fn cylinder(&mut self, spec: &CylinderSpec) -> Result<KernelSolidHandle, KernelError> {
        primitives::validate_cylinder(spec)?;
        debug!(radius = spec.radius, height = spec.height, "creating cylinder");
        let segments = self.config.effective(spec.segments);
        Ok(self.store(primitives::cylinder_solid(spec, segments)))
    }

    fn rounded_cylinder(
        &mut self,
        spec: &RoundedCylinderSpec,
    ) -> Result<KernelSolidHandle, KernelError> {
        primitives::validate_rounded_cylinder(spec)?;
        debug!(radius = spec.radius, height = spec.height, "creating rounded cylinder");
        let segments = self.config.effective(spec.segments);
        Ok(self.store(primitives::rounded_cylinder_solid(spec, segments)))
    }

    fn torus(&mut self, spec: &TorusSpec) -> Result<KernelSolidHandle, KernelError> {
        primitives::validate_torus(spec)?;
        debug!(
            inner = spec.inner_radius,
            outer = spec.outer_radius,
            rotation = spec.outer_rotation,
            "creating torus"
        );
        let inner = self.config.effective(spec.inner_segments);
        let outer = self.config.effective(spec.outer_segments);
        Ok(self.store(primitives::torus_solid(spec, inner, outer)))
    }

    fn translate(
        &mut self,
        solid: &KernelSolidHandle,
        offset: [f64; 3],
    ) -> Result<KernelSolidHandle, KernelError> {
        self.transformed(solid, &Transform::translation(offset))
    }

    fn rotate(
        &mut self,
        solid: &KernelSolidHandle,
        axis: Axis,
        angle: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.transformed(solid, &Transform::rotation(axis, angle))
    }

    fn union(&mut self, solids: &[KernelSolidHandle]) -> Result<KernelSolidHandle, KernelError> {
        let operands = solids
            .iter()
            .map(|h| self.get(h).cloned())
            .collect::<Result<Vec<_>, _>>()?;
        debug!(count = operands.len(), "boolean union");
        let merged = primitives::union_all(operands).ok_or(KernelError::EmptyUnion)?;
        Ok(self.store(merged))
    }

    fn colorize(
        &mut self,
        solid: &KernelSolidHandle,
        color: Rgb,
    ) -> Result<KernelSolidHandle, KernelError> {
        let painted = primitives::painted(self.get(solid)?, color);
        Ok(self.store(painted))
    }

    fn bounding_box(&self, solid: &KernelSolidHandle) -> Result<BoundingBox, KernelError> {
        primitives::solid_bounds(self.get(solid)?).ok_or(KernelError::TessellationFailed {
            reason: "solid has no vertices".to_string(),
        })
    }

    fn tessellate(&mut self, solid: &KernelSolidHandle) -> Result<RenderMesh, KernelError> {
        let out = primitives::render_mesh(self.get(solid)?);
        if out.indices.is_empty() {
            return Err(KernelError::TessellationFailed {
                reason: "solid produced no triangles".to_string(),
            });
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chair_types::Color;
    use std::f64::consts::FRAC_PI_2;

    fn unit_box(kernel: &mut MeshKernel) -> KernelSolidHandle {
        kernel
            .cuboid(&CuboidSpec {
                size: [2.0, 2.0, 2.0],
                center: [0.0, 0.0, 0.0],
            })
            .unwrap()
    }

    #[test]
    fn translate_moves_bounds_and_keeps_operand() {
        let mut kernel = MeshKernel::new();
        let a = unit_box(&mut kernel);
        let b = kernel.translate(&a, [10.0, 0.0, 0.0]).unwrap();

        let moved = kernel.bounding_box(&b).unwrap();
        assert!((moved.min[0] - 9.0).abs() < 1e-9);
        let original = kernel.bounding_box(&a).unwrap();
        assert!((original.min[0] + 1.0).abs() < 1e-9);
    }

    #[test]
    fn rotate_cylinder_onto_y_axis() {
        let mut kernel = MeshKernel::new();
        let cyl = kernel
            .cylinder(&CylinderSpec {
                height: 10.0,
                radius: 1.0,
                center: [0.0, 0.0, 0.0],
                segments: 32,
            })
            .unwrap();
        let turned = kernel.rotate(&cyl, Axis::X, FRAC_PI_2).unwrap();
        let bbox = kernel.bounding_box(&turned).unwrap();
        assert!((bbox.size()[1] - 10.0).abs() < 1e-9);
        assert!((bbox.size()[2] - 2.0).abs() < 0.02);
    }

    #[test]
    fn union_combines_bounds_and_color_ranges() {
        let mut kernel = MeshKernel::new();
        let a = unit_box(&mut kernel);
        let b = unit_box(&mut kernel);
        let b = kernel.translate(&b, [0.0, 0.0, 5.0]).unwrap();
        let b = kernel.colorize(&b, Color::Silver.rgb()).unwrap();
        let u = kernel.union(&[a, b]).unwrap();

        let bbox = kernel.bounding_box(&u).unwrap();
        assert!((bbox.max[2] - 6.0).abs() < 1e-9);

        let mesh = kernel.tessellate(&u).unwrap();
        assert_eq!(mesh.color_ranges.len(), 2);
        assert!(mesh.color_ranges.iter().any(|r| r.color.is_none()));
        assert!(mesh
            .color_ranges
            .iter()
            .any(|r| r.color == Some(Color::Silver.rgb())));
        assert_eq!(mesh.color_ranges[0].start_index, 0);
        assert_eq!(mesh.color_ranges[1].end_index as usize, mesh.indices.len());
    }

    fn triangle_area(mesh: &RenderMesh, tri: &[u32]) -> f64 {
        let v = |i: u32| {
            let i = i as usize * 3;
            [0, 1, 2].map(|k| mesh.vertices[i + k] as f64)
        };
        let (a, b, c) = (v(tri[0]), v(tri[1]), v(tri[2]));
        let ab = [b[0] - a[0], b[1] - a[1], b[2] - a[2]];
        let ac = [c[0] - a[0], c[1] - a[1], c[2] - a[2]];
        let n = [
            ab[1] * ac[2] - ab[2] * ac[1],
            ab[2] * ac[0] - ab[0] * ac[2],
            ab[0] * ac[1] - ab[1] * ac[0],
        ];
        (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt() / 2.0
    }

    #[test]
    fn overlapping_union_drops_interior_faces() {
        let mut kernel = MeshKernel::new();
        let a = unit_box(&mut kernel);
        let b = unit_box(&mut kernel);
        let b = kernel.translate(&b, [1.0, 0.0, 0.0]).unwrap();
        let u = kernel.union(&[a, b]).unwrap();
        let mesh = kernel.tessellate(&u).unwrap();

        // Union is the 3 x 2 x 2 box spanning x in [-1, 2].
        let bbox = kernel.bounding_box(&u).unwrap();
        assert!((bbox.min[0] + 1.0).abs() < 1e-9);
        assert!((bbox.max[0] - 2.0).abs() < 1e-9);

        let area: f64 = mesh.indices.chunks(3).map(|t| triangle_area(&mesh, t)).sum();
        assert!((area - 32.0).abs() < 1e-4, "surface area {area}");

        // No triangle may sit on the cut planes x = 0 or x = 1 inside the box.
        for tri in mesh.indices.chunks(3) {
            let c = [0, 1, 2].map(|k| {
                tri.iter()
                    .map(|&i| mesh.vertices[i as usize * 3 + k] as f64)
                    .sum::<f64>()
                    / 3.0
            });
            let on_boundary = (c[0] + 1.0).abs() < 1e-4
                || (c[0] - 2.0).abs() < 1e-4
                || (c[1].abs() - 1.0).abs() < 1e-4
                || (c[2].abs() - 1.0).abs() < 1e-4;
            assert!(on_boundary, "interior triangle centered at {c:?}");
        }
    }

    #[test]
    fn colorize_overrides_nested_colors() {
        let mut kernel = MeshKernel::new();
        let a = unit_box(&mut kernel);
        let a = kernel.colorize(&a, Color::Black.rgb()).unwrap();
        let b = unit_box(&mut kernel);
        let u = kernel.union(&[a, b]).unwrap();
        let u = kernel.colorize(&u, Color::DimGrey.rgb()).unwrap();

        let mesh = kernel.tessellate(&u).unwrap();
        assert!(mesh
            .color_ranges
            .iter()
            .all(|r| r.color == Some(Color::DimGrey.rgb())));
    }

    #[test]
    fn empty_union_is_an_error() {
        let mut kernel = MeshKernel::new();
        assert_eq!(kernel.union(&[]), Err(KernelError::EmptyUnion));
    }

    #[test]
    fn degenerate_cylinder_is_rejected() {
        let mut kernel = MeshKernel::new();
        let err = kernel
            .cylinder(&CylinderSpec {
                height: -1.0,
                radius: 1.0,
                center: [0.0; 3],
                segments: 32,
            })
            .unwrap_err();
        assert!(matches!(err, KernelError::DegenerateGeometry { primitive: "cylinder", .. }));
        assert_eq!(kernel.solid_count(), 0);
    }

    #[test]
    fn preview_config_coarsens_segments() {
        let spec = CylinderSpec {
            height: 1.0,
            radius: 1.0,
            center: [0.0; 3],
            segments: 32,
        };
        let mut fine = MeshKernel::new();
        let mut coarse = MeshKernel::with_config(MeshConfig::preview());
        let a = fine.cylinder(&spec).unwrap();
        let b = coarse.cylinder(&spec).unwrap();
        let fine_tris = fine.tessellate(&a).unwrap().triangle_count();
        let coarse_tris = coarse.tessellate(&b).unwrap().triangle_count();
        assert!(coarse_tris < fine_tris);
    }

    #[test]
    fn normals_are_unit_length() {
        let mut kernel = MeshKernel::new();
        let torus = kernel
            .torus(&TorusSpec {
                inner_radius: 1.0,
                outer_radius: 3.0,
                inner_segments: 16,
                outer_segments: 16,
                outer_rotation: std::f64::consts::TAU,
            })
            .unwrap();
        let mesh = kernel.tessellate(&torus).unwrap();
        for n in mesh.normals.chunks(3) {
            let len = (n[0] * n[0] + n[1] * n[1] + n[2] * n[2]).sqrt();
            assert!((len - 1.0).abs() < 1e-4);
        }
    }
}
