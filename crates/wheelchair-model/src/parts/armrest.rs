use super::PartContext;
use crate::tree::ShapeNode;

/// Arm tube with its cushion pad, or `None` when armrests are hidden.
pub fn armrest(ctx: &PartContext) -> Option<ShapeNode> {
    let (p, d, c) = (ctx.params, ctx.derived, ctx.constants);
    if !p.show_armrest {
        return None;
    }

    let r = c.tube_radius;
    let bar = ShapeNode::cylinder(d.seat_depth - c.bend_radius + d.recline_reach, r, c.segments)
        .rotate_y(90.0);
    let pad = ShapeNode::rounded_cuboid(
        [d.armrest_length, c.armrest_pad_width, c.armrest_cushion_height],
        [c.bend_radius / 2.0, 0.0, r],
        r / 2.0,
        c.segments,
    );

    Some(ShapeNode::union(vec![bar, pad]))
}
