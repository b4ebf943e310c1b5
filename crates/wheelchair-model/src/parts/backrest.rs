use chair_types::Side;

use super::PartContext;
use crate::tree::ShapeNode;

/// Backrest panel between two padded posts.
pub fn backrest(ctx: &PartContext) -> ShapeNode {
    let (p, d, c) = (ctx.params, ctx.derived, ctx.constants);
    let z = p.seat_to_floor_height + d.backrest_height / 2.0;
    let post = |y: f64| {
        ShapeNode::cylinder(d.backrest_height, c.tube_radius + c.rest_thickness, c.segments)
            .translate([0.0, y, z])
    };

    ShapeNode::union(vec![
        post(ctx.rail_y(Side::Right)),
        post(ctx.rail_y(Side::Left)),
        ShapeNode::cuboid(
            [c.rest_thickness, d.backrest_width, d.backrest_height],
            [0.0, d.wheel_base / 2.0, z],
        ),
    ])
}

/// Vertical backrest tube, centered on its own origin.
///
/// With the push handle shown, a quarter bend at the top turns the tube
/// rearwards into a rounded grip. Otherwise only the tube is built.
pub fn backrest_structure(ctx: &PartContext) -> ShapeNode {
    let (p, d, c) = (ctx.params, ctx.derived, ctx.constants);
    let r = c.tube_radius;
    let length = d.backrest_bar_length;
    let bar = ShapeNode::cylinder(length, r, c.segments);

    if !p.show_push_handle {
        return bar;
    }

    let bend = ShapeNode::torus(r, c.bend_radius, c.segments, c.push_handle_bend_segments, 90.0)
        .rotate_x(90.0)
        .translate([-c.bend_radius, 0.0, length / 2.0]);
    let grip = ShapeNode::rounded_cylinder(c.push_handle_length, r + c.grip_pad, c.grip_pad, c.segments)
        .rotate_y(90.0)
        .translate([
            -c.push_handle_length / 2.0 - c.bend_radius,
            0.0,
            length / 2.0 + c.bend_radius,
        ]);

    ShapeNode::union(vec![bar, bend, grip])
}
