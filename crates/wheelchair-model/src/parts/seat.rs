use chair_types::Side;

use super::PartContext;
use crate::tree::ShapeNode;

/// Rounded cushion resting on the seat rest.
pub fn seat_cushion(ctx: &PartContext) -> ShapeNode {
    let (p, d, c) = (ctx.params, ctx.derived, ctx.constants);
    let thickness = p.seat_cushion_thickness;
    ShapeNode::rounded_cuboid(
        [d.seat_depth, p.seat_width, thickness],
        [
            d.seat_depth / 2.0 + c.tube_radius,
            d.wheel_base / 2.0,
            p.seat_height + thickness / 2.0,
        ],
        c.cushion_round_radius,
        c.segments,
    )
}

/// Flat seat panel between two sleeved side rails running front to back.
pub fn seatrest(ctx: &PartContext) -> ShapeNode {
    let (p, d, c) = (ctx.params, ctx.derived, ctx.constants);
    let x = d.seat_depth / 2.0 + c.tube_radius;
    let rail = ShapeNode::cylinder(p.seat_width, c.tube_radius + c.tube_sleeve, c.segments)
        .rotate_y(90.0);

    ShapeNode::union(vec![
        rail.clone().translate([x, ctx.rail_y(Side::Right), p.seat_height]),
        rail.translate([x, ctx.rail_y(Side::Left), p.seat_height]),
        ShapeNode::cuboid(
            [d.seat_depth, p.seat_width, c.rest_thickness],
            [x, d.wheel_base / 2.0, p.seat_height],
        ),
    ])
}

/// Seat tube of one side with the bend down towards the caster.
///
/// The tube lengthens by a quarter of the backrest's rearward reach.
pub fn seatrest_structure(ctx: &PartContext) -> ShapeNode {
    let (d, c) = (ctx.derived, ctx.constants);
    let r = c.tube_radius;
    let length = d.seat_depth + r + d.recline_reach / 4.0;

    let bar = ShapeNode::cylinder(length, r, c.segments).rotate_y(90.0);
    let bend = ShapeNode::torus(r, c.bend_radius, c.segments, c.segments, 90.0)
        .rotate_x(90.0)
        .translate([(d.seat_depth + r) / 2.0, 0.0, -c.bend_radius]);

    ShapeNode::union(vec![bar, bend])
}
