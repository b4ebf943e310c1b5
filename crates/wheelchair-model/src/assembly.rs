//! Assembler: places every part in world space and colors it.
//!
//! World frame: X runs from the back wheel axle towards the front, Y across
//! the chair with the left back wheel at `y = 0` and the right one at
//! `y = wheelBase`, Z up from the floor.

use chair_types::{Color, PartKind, Side};
use shape_kernel::{Kernel, KernelSolidHandle};
use tracing::{info, instrument};

use crate::config::{ModelConfig, ValidationMode};
use crate::derived::DerivedDimensions;
use crate::error::ModelError;
use crate::eval::evaluate;
use crate::params::{ParameterRecord, ResolvedParameters};
use crate::parts::{self, PartContext};
use crate::tree::ShapeNode;

/// One top-level part of the assembly.
#[derive(Debug, Clone, PartialEq)]
pub struct AssemblyPart {
    pub kind: PartKind,
    pub color: Color,
    /// None only for hidden armrests.
    pub node: Option<ShapeNode>,
}

/// The two placed, uncolored instances of a mirrored part.
#[derive(Debug, Clone, PartialEq)]
pub struct InstancePair {
    pub left: ShapeNode,
    pub right: ShapeNode,
}

impl InstancePair {
    fn into_part(self, kind: PartKind, color: Color) -> AssemblyPart {
        AssemblyPart {
            kind,
            color,
            node: Some(ShapeNode::union(vec![self.left, self.right]).colorize(color)),
        }
    }
}

/// The complete model: eight parts in fixed order.
#[derive(Debug, Clone, PartialEq)]
pub struct Assembly {
    pub parts: Vec<AssemblyPart>,
    pub params: ResolvedParameters,
    pub derived: DerivedDimensions,
    pub back_wheels: InstancePair,
    pub wheel_handles: InstancePair,
}

impl Assembly {
    pub fn part(&self, kind: PartKind) -> Option<&AssemblyPart> {
        self.parts.iter().find(|p| p.kind == kind)
    }

    pub fn primitive_count(&self) -> usize {
        self.parts
            .iter()
            .filter_map(|p| p.node.as_ref())
            .map(ShapeNode::primitive_count)
            .sum()
    }
}

/// An assembly evaluated by a kernel.
#[derive(Debug, Clone)]
pub struct GeneratedPart {
    pub kind: PartKind,
    pub color: Color,
    pub solid: Option<KernelSolidHandle>,
}

#[derive(Debug, Clone)]
pub struct GeneratedAssembly {
    pub parts: Vec<GeneratedPart>,
}

impl GeneratedAssembly {
    pub fn solids(&self) -> impl Iterator<Item = &KernelSolidHandle> {
        self.parts.iter().filter_map(|p| p.solid.as_ref())
    }
}

/// Validate, resolve and build the assembly tree.
#[instrument(skip(config))]
pub fn build_assembly(
    record: &ParameterRecord,
    config: &ModelConfig,
) -> Result<Assembly, ModelError> {
    if config.validation == ValidationMode::Strict {
        record.validate()?;
    }
    let c = &config.constants;
    let params = record.to_millimetres();
    let derived = DerivedDimensions::resolve(&params, c);
    let ctx = PartContext::new(&params, &derived, c);

    let (p, d) = (&params, &derived);
    let r = c.tube_radius;
    let bend = c.bend_radius;
    let wd = p.wheel_diameter;
    let camber = p.camber_angle;

    let cushion = parts::seat_cushion(&ctx).colorize(Color::Black);

    let structure_z = d.backrest_bar_length / 2.0 + wd / 2.0;
    let backrest = ShapeNode::union(vec![
        parts::backrest(&ctx),
        parts::backrest_structure(&ctx).translate([0.0, ctx.rail_y(Side::Left), structure_z]),
        parts::backrest_structure(&ctx).translate([0.0, ctx.rail_y(Side::Right), structure_z]),
    ])
    .rotate_y(90.0 - p.seat_to_backrest_angle)
    .translate([d.recline_reach / 2.0, 0.0, 0.0])
    .colorize(Color::Silver);

    let seat_x = d.seat_depth / 2.0 + r / 2.0;
    let seatrest = ShapeNode::union(vec![
        parts::seatrest_structure(&ctx).translate([seat_x, ctx.rail_y(Side::Left), p.seat_height]),
        parts::seatrest_structure(&ctx).translate([seat_x, ctx.rail_y(Side::Right), p.seat_height]),
        parts::back_wheel_structure(&ctx),
        parts::seatrest(&ctx),
    ])
    .colorize(Color::Silver);

    let back_wheels = InstancePair {
        left: parts::back_wheel(&ctx)
            .rotate_x(-camber)
            .translate([0.0, 0.0, wd / 2.0]),
        right: parts::back_wheel(&ctx)
            .rotate_x(camber)
            .translate([0.0, d.wheel_base, wd / 2.0]),
    };

    let handle_gap = (d.overall_width - d.wheel_base) / 2.0;
    let wheel_handles = InstancePair {
        left: parts::wheel_handle(&ctx)
            .rotate_x(-camber)
            .translate([0.0, -handle_gap, wd / 2.0]),
        right: parts::wheel_handle(&ctx)
            .rotate_x(camber)
            .translate([
                0.0,
                d.overall_width - c.wheel_handle_inset - handle_gap,
                wd / 2.0,
            ]),
    };

    let armrests = parts::armrest(&ctx).map(|arm| {
        let x = (d.seat_depth - bend) / 2.0;
        let z = d.armrest_height + p.seat_height;
        let lateral = d.backrest_width / 2.0 + 3.0 * r + c.armrest_gap;
        ShapeNode::union(vec![
            arm.clone().translate([x, d.wheel_base / 2.0 - lateral, z]),
            arm.translate([x, d.wheel_base / 2.0 + lateral, z]),
        ])
        .colorize(Color::Silver)
    });

    let caster_x = d.seat_depth + bend + r;
    let front_wheels = ShapeNode::union(
        Side::BOTH
            .iter()
            .map(|&side| {
                parts::front_wheel(&ctx).translate([
                    caster_x,
                    ctx.rail_y(side),
                    c.small_wheel_radius,
                ])
            })
            .collect(),
    )
    .colorize(Color::Silver);

    let link = p.footrest_link_length;
    let legrest_x = d.seat_depth + bend * 3.0 / 2.0 + r + d.legrest_hinge_reach;
    let legrests = ShapeNode::union(
        Side::BOTH
            .iter()
            .map(|&side| {
                parts::legrest(&ctx, side).translate([
                    legrest_x,
                    ctx.rail_y(side),
                    link - 2.0 * r,
                ])
            })
            .collect(),
    )
    .colorize(Color::Silver);

    let parts = vec![
        AssemblyPart {
            kind: PartKind::SeatCushion,
            color: Color::Black,
            node: Some(cushion),
        },
        AssemblyPart {
            kind: PartKind::Backrest,
            color: Color::Silver,
            node: Some(backrest),
        },
        AssemblyPart {
            kind: PartKind::Seatrest,
            color: Color::Silver,
            node: Some(seatrest),
        },
        back_wheels.clone().into_part(PartKind::BackWheels, Color::Silver),
        wheel_handles.clone().into_part(PartKind::WheelHandles, Color::DimGrey),
        AssemblyPart {
            kind: PartKind::Armrests,
            color: Color::Silver,
            node: armrests,
        },
        AssemblyPart {
            kind: PartKind::FrontWheels,
            color: Color::Silver,
            node: Some(front_wheels),
        },
        AssemblyPart {
            kind: PartKind::Legrests,
            color: Color::Silver,
            node: Some(legrests),
        },
    ];

    let assembly = Assembly {
        parts,
        params,
        derived,
        back_wheels,
        wheel_handles,
    };
    info!(
        parts = assembly.parts.len(),
        primitives = assembly.primitive_count(),
        "assembly built"
    );
    Ok(assembly)
}

/// Build the assembly and evaluate every part with `kernel`.
#[instrument(skip(config, kernel))]
pub fn generate(
    record: &ParameterRecord,
    config: &ModelConfig,
    kernel: &mut dyn Kernel,
) -> Result<GeneratedAssembly, ModelError> {
    let assembly = build_assembly(record, config)?;
    let mut parts = Vec::with_capacity(assembly.parts.len());
    for part in &assembly.parts {
        let solid = match &part.node {
            Some(node) => Some(evaluate(node, kernel).map_err(|source| {
                ModelError::DegenerateGeometry {
                    part: part.kind,
                    source,
                }
            })?),
            None => None,
        };
        parts.push(GeneratedPart {
            kind: part.kind,
            color: part.color,
            solid,
        });
    }
    info!(
        solids = parts.iter().filter(|p| p.solid.is_some()).count(),
        "assembly generated"
    );
    Ok(GeneratedAssembly { parts })
}

/// Model entry point with the default configuration.
pub fn main(record: &ParameterRecord) -> Result<Assembly, ModelError> {
    build_assembly(record, &ModelConfig::default())
}
