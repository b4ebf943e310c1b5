//! Build tree for solids.
//!
//! Parts are described as plain [`ShapeNode`] values and only turned into
//! kernel solids by [`crate::eval::evaluate`]. Rotations are kept in degrees
//! until evaluation.

use chair_types::{Axis, Color};
use shape_kernel::{
    BoundingBox, CuboidSpec, CylinderSpec, RoundedCuboidSpec, RoundedCylinderSpec, TorusSpec,
    Transform,
};

/// A solid the kernel can construct directly.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Cuboid(CuboidSpec),
    RoundedCuboid(RoundedCuboidSpec),
    Cylinder(CylinderSpec),
    RoundedCylinder(RoundedCylinderSpec),
    Torus(TorusSpec),
}

impl Primitive {
    pub fn name(&self) -> &'static str {
        match self {
            Primitive::Cuboid(_) => "cuboid",
            Primitive::RoundedCuboid(_) => "rounded cuboid",
            Primitive::Cylinder(_) => "cylinder",
            Primitive::RoundedCylinder(_) => "rounded cylinder",
            Primitive::Torus(_) => "torus",
        }
    }

    /// Analytic bounds in the primitive's own frame.
    pub fn bounds(&self) -> BoundingBox {
        use shape_kernel::primitives as p;
        match self {
            Primitive::Cuboid(s) => p::cuboid_bounds(s),
            Primitive::RoundedCuboid(s) => p::rounded_cuboid_bounds(s),
            Primitive::Cylinder(s) => p::cylinder_bounds(s),
            Primitive::RoundedCylinder(s) => p::rounded_cylinder_bounds(s),
            Primitive::Torus(s) => p::torus_bounds(s),
        }
    }
}

/// A node of the build tree. Immutable; every helper returns a new node.
#[derive(Debug, Clone, PartialEq)]
pub enum ShapeNode {
    Primitive(Primitive),
    Translate {
        offset: [f64; 3],
        child: Box<ShapeNode>,
    },
    Rotate {
        axis: Axis,
        degrees: f64,
        child: Box<ShapeNode>,
    },
    Union(Vec<ShapeNode>),
    Color {
        color: Color,
        child: Box<ShapeNode>,
    },
}

impl ShapeNode {
    // ── Primitives ──────────────────────────────────────────────────────────

    pub fn cuboid(size: [f64; 3], center: [f64; 3]) -> Self {
        ShapeNode::Primitive(Primitive::Cuboid(CuboidSpec { size, center }))
    }

    pub fn rounded_cuboid(
        size: [f64; 3],
        center: [f64; 3],
        round_radius: f64,
        segments: u32,
    ) -> Self {
        ShapeNode::Primitive(Primitive::RoundedCuboid(RoundedCuboidSpec {
            size,
            center,
            round_radius,
            segments,
        }))
    }

    /// Cylinder along Z centered on the origin.
    pub fn cylinder(height: f64, radius: f64, segments: u32) -> Self {
        Self::cylinder_at(height, radius, [0.0; 3], segments)
    }

    pub fn cylinder_at(height: f64, radius: f64, center: [f64; 3], segments: u32) -> Self {
        ShapeNode::Primitive(Primitive::Cylinder(CylinderSpec {
            height,
            radius,
            center,
            segments,
        }))
    }

    pub fn rounded_cylinder(height: f64, radius: f64, round_radius: f64, segments: u32) -> Self {
        ShapeNode::Primitive(Primitive::RoundedCylinder(RoundedCylinderSpec {
            height,
            radius,
            round_radius,
            center: [0.0; 3],
            segments,
        }))
    }

    /// Torus in the XY plane swept `sweep_degrees` from +X towards +Y.
    pub fn torus(
        inner_radius: f64,
        outer_radius: f64,
        inner_segments: u32,
        outer_segments: u32,
        sweep_degrees: f64,
    ) -> Self {
        ShapeNode::Primitive(Primitive::Torus(TorusSpec {
            inner_radius,
            outer_radius,
            inner_segments,
            outer_segments,
            outer_rotation: sweep_degrees.to_radians(),
        }))
    }

    pub fn union(children: Vec<ShapeNode>) -> Self {
        ShapeNode::Union(children)
    }

    // ── Chaining ────────────────────────────────────────────────────────────

    pub fn translate(self, offset: [f64; 3]) -> Self {
        ShapeNode::Translate {
            offset,
            child: Box::new(self),
        }
    }

    pub fn rotate(self, axis: Axis, degrees: f64) -> Self {
        ShapeNode::Rotate {
            axis,
            degrees,
            child: Box::new(self),
        }
    }

    pub fn rotate_x(self, degrees: f64) -> Self {
        self.rotate(Axis::X, degrees)
    }

    pub fn rotate_y(self, degrees: f64) -> Self {
        self.rotate(Axis::Y, degrees)
    }

    pub fn rotate_z(self, degrees: f64) -> Self {
        self.rotate(Axis::Z, degrees)
    }

    pub fn colorize(self, color: Color) -> Self {
        ShapeNode::Color {
            color,
            child: Box::new(self),
        }
    }

    // ── Inspection ──────────────────────────────────────────────────────────

    /// Visit every primitive with the accumulated world transform.
    pub fn visit_placed(&self, f: &mut impl FnMut(&Primitive, &Transform)) {
        self.visit_placed_inner(&Transform::identity(), f);
    }

    fn visit_placed_inner(&self, outer: &Transform, f: &mut impl FnMut(&Primitive, &Transform)) {
        match self {
            ShapeNode::Primitive(p) => f(p, outer),
            ShapeNode::Translate { offset, child } => {
                child.visit_placed_inner(&outer.compose(&Transform::translation(*offset)), f)
            }
            ShapeNode::Rotate {
                axis,
                degrees,
                child,
            } => child.visit_placed_inner(
                &outer.compose(&Transform::rotation(*axis, degrees.to_radians())),
                f,
            ),
            ShapeNode::Union(children) => {
                for c in children {
                    c.visit_placed_inner(outer, f);
                }
            }
            ShapeNode::Color { child, .. } => child.visit_placed_inner(outer, f),
        }
    }

    /// Visit every primitive in tree order.
    pub fn visit_primitives(&self, f: &mut impl FnMut(&Primitive)) {
        self.visit_placed(&mut |p, _| f(p));
    }

    pub fn primitive_count(&self) -> usize {
        let mut n = 0;
        self.visit_primitives(&mut |_| n += 1);
        n
    }

    /// Conservative world bounds from the placed primitive bounds.
    /// None for a tree without primitives.
    pub fn bounds(&self) -> Option<BoundingBox> {
        let mut out: Option<BoundingBox> = None;
        self.visit_placed(&mut |p, t| {
            let b = t.transform_bbox(&p.bounds());
            out = Some(match out {
                Some(acc) => acc.union(&b),
                None => b,
            });
        });
        out
    }

    /// True when any coordinate, size or angle in the tree is not finite.
    pub fn has_non_finite(&self) -> bool {
        let mut bad = false;
        self.visit_placed(&mut |p, t| {
            bad |= !t.m.iter().all(|v| v.is_finite()) || !p.bounds().is_finite();
        });
        bad
    }
}
