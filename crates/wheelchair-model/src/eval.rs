use shape_kernel::{Kernel, KernelError, KernelSolidHandle};

use crate::tree::{Primitive, ShapeNode};

/// Evaluate a build tree against a kernel, bottom-up.
///
/// Children are evaluated left to right before their parent. An empty union
/// fails with `KernelError::EmptyUnion`.
pub fn evaluate(node: &ShapeNode, kernel: &mut dyn Kernel) -> Result<KernelSolidHandle, KernelError> {
    match node {
        ShapeNode::Primitive(p) => match p {
            Primitive::Cuboid(spec) => kernel.cuboid(spec),
            Primitive::RoundedCuboid(spec) => kernel.rounded_cuboid(spec),
            Primitive::Cylinder(spec) => kernel.cylinder(spec),
            Primitive::RoundedCylinder(spec) => kernel.rounded_cylinder(spec),
            Primitive::Torus(spec) => kernel.torus(spec),
        },
        ShapeNode::Translate { offset, child } => {
            let solid = evaluate(child, kernel)?;
            kernel.translate(&solid, *offset)
        }
        ShapeNode::Rotate {
            axis,
            degrees,
            child,
        } => {
            let solid = evaluate(child, kernel)?;
            kernel.rotate(&solid, *axis, degrees.to_radians())
        }
        ShapeNode::Union(children) => {
            let solids = children
                .iter()
                .map(|c| evaluate(c, kernel))
                .collect::<Result<Vec<_>, _>>()?;
            kernel.union(&solids)
        }
        ShapeNode::Color { color, child } => {
            let solid = evaluate(child, kernel)?;
            kernel.colorize(&solid, color.rgb())
        }
    }
}
