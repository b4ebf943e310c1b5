use crate::types::*;

/// Geometry kernel capability consumed by the model pipeline.
///
/// Solids are immutable: every operation returns a new handle and leaves its
/// operands untouched. Implemented by MeshKernel (tessellating) and
/// MockKernel (bounding-box test double).
pub trait Kernel {
    /// Axis-aligned box.
    fn cuboid(&mut self, spec: &CuboidSpec) -> Result<KernelSolidHandle, KernelError>;

    /// Axis-aligned box with rounded edges.
    fn rounded_cuboid(&mut self, spec: &RoundedCuboidSpec)
        -> Result<KernelSolidHandle, KernelError>;

    /// Cylinder along Z.
    fn cylinder(&mut self, spec: &CylinderSpec) -> Result<KernelSolidHandle, KernelError>;

    /// Cylinder along Z with rounded rims.
    fn rounded_cylinder(
        &mut self,
        spec: &RoundedCylinderSpec,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Full or partial torus around Z.
    fn torus(&mut self, spec: &TorusSpec) -> Result<KernelSolidHandle, KernelError>;

    /// Rigid translation.
    fn translate(
        &mut self,
        solid: &KernelSolidHandle,
        offset: [f64; 3],
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Rotation about a world axis through the origin by `angle` radians.
    fn rotate(
        &mut self,
        solid: &KernelSolidHandle,
        axis: Axis,
        angle: f64,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Boolean union of one or more solids.
    fn union(&mut self, solids: &[KernelSolidHandle]) -> Result<KernelSolidHandle, KernelError>;

    /// Apply a color to every part of a solid, replacing earlier colors.
    fn colorize(
        &mut self,
        solid: &KernelSolidHandle,
        color: Rgb,
    ) -> Result<KernelSolidHandle, KernelError>;

    /// Axis-aligned bounds of a solid.
    fn bounding_box(&self, solid: &KernelSolidHandle) -> Result<BoundingBox, KernelError>;

    /// Tessellate a solid to a triangle mesh.
    fn tessellate(&mut self, solid: &KernelSolidHandle) -> Result<RenderMesh, KernelError>;
}
