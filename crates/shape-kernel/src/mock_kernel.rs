//! MockKernel: deterministic test double implementing Kernel.
//!
//! Tracks analytic bounding boxes, colors and the primitive kinds each solid
//! was built from, plus a log of every operation. `tessellate` returns a
//! csgrs box standing in for the bounds.

use std::collections::HashMap;

use crate::primitives;
use crate::traits::Kernel;
use crate::transform::Transform;
use crate::types::*;

/// A recorded kernel call, in call order.
#[derive(Debug, Clone, PartialEq)]
pub enum MockOp {
    Primitive(&'static str),
    Translate([f64; 3]),
    Rotate(Axis, f64),
    Union(usize),
    Colorize(Rgb),
}

#[derive(Debug, Clone)]
struct MockSolid {
    bbox: BoundingBox,
    colors: Vec<Rgb>,
    primitives: Vec<&'static str>,
}

/// Deterministic test double for the geometry kernel.
pub struct MockKernel {
    next_handle: u64,
    solids: HashMap<u64, MockSolid>,
    log: Vec<MockOp>,
}

impl MockKernel {
    pub fn new() -> Self {
        Self {
            next_handle: 1,
            solids: HashMap::new(),
            log: Vec::new(),
        }
    }

    fn alloc_handle(&mut self) -> KernelSolidHandle {
        let h = KernelSolidHandle(self.next_handle);
        self.next_handle += 1;
        h
    }

    fn store(&mut self, solid: MockSolid) -> KernelSolidHandle {
        let handle = self.alloc_handle();
        self.solids.insert(handle.id(), solid);
        handle
    }

    fn get(&self, handle: &KernelSolidHandle) -> Result<&MockSolid, KernelError> {
        self.solids
            .get(&handle.id())
            .ok_or(KernelError::SolidNotFound { id: handle.id() })
    }

    fn primitive(&mut self, name: &'static str, bbox: BoundingBox) -> KernelSolidHandle {
        self.log.push(MockOp::Primitive(name));
        self.store(MockSolid {
            bbox,
            colors: Vec::new(),
            primitives: vec![name],
        })
    }

    fn transformed(
        &mut self,
        solid: &KernelSolidHandle,
        t: &Transform,
    ) -> Result<KernelSolidHandle, KernelError> {
        let mut copy = self.get(solid)?.clone();
        copy.bbox = t.transform_bbox(&copy.bbox);
        Ok(self.store(copy))
    }

    /// Every operation performed so far.
    pub fn log(&self) -> &[MockOp] {
        &self.log
    }

    /// Number of primitive constructor calls so far.
    pub fn primitive_calls(&self) -> usize {
        self.log
            .iter()
            .filter(|op| matches!(op, MockOp::Primitive(_)))
            .count()
    }

    /// Names of the primitives a solid was built from, in construction order.
    pub fn primitives_of(&self, solid: &KernelSolidHandle) -> Result<Vec<&'static str>, KernelError> {
        Ok(self.get(solid)?.primitives.clone())
    }

    /// Distinct colors present in a solid, in first-seen order.
    pub fn colors_of(&self, solid: &KernelSolidHandle) -> Result<Vec<Rgb>, KernelError> {
        Ok(self.get(solid)?.colors.clone())
    }
}

impl Default for MockKernel {
    fn default() -> Self {
        Self::new()
    }
}

impl Kernel for MockKernel {
    fn cuboid(&mut self, spec: &CuboidSpec) -> Result<KernelSolidHandle, KernelError> {
        primitives::validate_cuboid(spec)?;
        Ok(self.primitive("cuboid", primitives::cuboid_bounds(spec)))
    }

    fn rounded_cuboid(
        &mut self,
        spec: &RoundedCuboidSpec,
    ) -> Result<KernelSolidHandle, KernelError> {
        primitives::validate_rounded_cuboid(spec)?;
        Ok(self.primitive("rounded cuboid", primitives::rounded_cuboid_bounds(spec)))
    }

    fn cylinder(&mut self, spec: &CylinderSpec) -> Result<KernelSolidHandle, KernelError> {
        primitives::validate_cylinder(spec)?;
        Ok(self.primitive("cylinder", primitives::cylinder_bounds(spec)))
    }

    fn rounded_cylinder(
        &mut self,
        spec: &RoundedCylinderSpec,
    ) -> Result<KernelSolidHandle, KernelError> {
        primitives::validate_rounded_cylinder(spec)?;
        Ok(self.primitive("rounded cylinder", primitives::rounded_cylinder_bounds(spec)))
    }

    fn torus(&mut self, spec: &TorusSpec) -> Result<KernelSolidHandle, KernelError> {
        primitives::validate_torus(spec)?;
        Ok(self.primitive("torus", primitives::torus_bounds(spec)))
    }

    fn translate(
        &mut self,
        solid: &KernelSolidHandle,
        offset: [f64; 3],
    ) -> Result<KernelSolidHandle, KernelError> {
        self.log.push(MockOp::Translate(offset));
        self.transformed(solid, &Transform::translation(offset))
    }

    fn rotate(
        &mut self,
        solid: &KernelSolidHandle,
        axis: Axis,
        angle: f64,
    ) -> Result<KernelSolidHandle, KernelError> {
        self.log.push(MockOp::Rotate(axis, angle));
        self.transformed(solid, &Transform::rotation(axis, angle))
    }

    fn union(&mut self, solids: &[KernelSolidHandle]) -> Result<KernelSolidHandle, KernelError> {
        let (first, rest) = solids.split_first().ok_or(KernelError::EmptyUnion)?;
        let mut merged = self.get(first)?.clone();
        for handle in rest {
            let other = self.get(handle)?;
            merged.bbox = merged.bbox.union(&other.bbox);
            for c in &other.colors {
                if !merged.colors.contains(c) {
                    merged.colors.push(*c);
                }
            }
            merged.primitives.extend(other.primitives.iter().copied());
        }
        self.log.push(MockOp::Union(solids.len()));
        Ok(self.store(merged))
    }

    fn colorize(
        &mut self,
        solid: &KernelSolidHandle,
        color: Rgb,
    ) -> Result<KernelSolidHandle, KernelError> {
        let mut copy = self.get(solid)?.clone();
        copy.colors = vec![color];
        self.log.push(MockOp::Colorize(color));
        Ok(self.store(copy))
    }

    fn bounding_box(&self, solid: &KernelSolidHandle) -> Result<BoundingBox, KernelError> {
        Ok(self.get(solid)?.bbox)
    }

    fn tessellate(&mut self, solid: &KernelSolidHandle) -> Result<RenderMesh, KernelError> {
        let solid = self.get(solid)?;
        let spec = CuboidSpec {
            size: solid.bbox.size(),
            center: solid.bbox.center(),
        };
        let mut block = primitives::cuboid_solid(&spec);
        if let Some(&color) = solid.colors.first() {
            block = primitives::painted(&block, color);
        }
        Ok(primitives::render_mesh(&block))
    }
}
