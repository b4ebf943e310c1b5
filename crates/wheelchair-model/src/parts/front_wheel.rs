use super::PartContext;
use crate::tree::ShapeNode;

/// Caster: wheel, fork clips and plates, and the vertical caster bar.
///
/// The origin is the wheel hub. With a fork angle below 90 degrees the wheel
/// trails behind the bar by `shift` and the lower fork plates tilt with it.
/// The offsets use `cos(castorForkAngle)` only as a multiplier, so the
/// vertical fork at 90 degrees stays finite.
pub fn front_wheel(ctx: &PartContext) -> ShapeNode {
    let (p, c) = (ctx.params, ctx.constants);
    let seg = c.segments;
    let swr = c.small_wheel_radius;
    let swt = c.small_wheel_thickness;
    let grab = c.front_wheel_grab_thickness;
    let clip = c.caster_clip_radius;

    let fork = p.castor_fork_angle;
    let cos_fork = fork.to_radians().cos();
    let bar_height = p.seat_height - c.bend_radius - (2.0 * swr + 2.0 * swt);
    let shift = (swr + 2.0 * swt) * cos_fork / 2.0;
    let trail = [-shift, 0.0, 0.0];
    let clip_y = swt * 3.0 / 2.0;

    let wheel = ShapeNode::union(vec![
        ShapeNode::cylinder(c.caster_disc_thickness, swr, c.caster_disc_segments).rotate_x(90.0),
        ShapeNode::torus(swt, swr - swt, seg, seg, 360.0).rotate_x(90.0),
    ])
    .translate(trail);

    let clip_ring = |y: f64, z: f64| {
        ShapeNode::cylinder(grab, clip, seg)
            .rotate_x(90.0)
            .translate([0.0, y, z])
    };
    let lower_clips =
        ShapeNode::union(vec![clip_ring(clip_y, 0.0), clip_ring(-clip_y, 0.0)]).translate(trail);
    let ring_z = swr / 2.0 + swt - c.caster_rake * cos_fork / 2.0;
    let upper_clips = ShapeNode::union(vec![clip_ring(clip_y, ring_z), clip_ring(-clip_y, ring_z)]);

    let plate_height = (swr + 2.0 * swt + c.caster_rake * cos_fork) / 2.0;
    let plate_z = (swr / 2.0 + swt) * 3.0 / 2.0 - c.caster_rake * cos_fork / 3.0;
    let upper_plates = ShapeNode::union(vec![
        ShapeNode::cuboid(
            [swr / 2.0, 3.0 * swt, grab],
            [0.0, 0.0, swr + 2.0 * swt - grab / 2.0],
        ),
        ShapeNode::cuboid([swr / 2.0, grab, plate_height], [0.0, clip_y, plate_z]),
        ShapeNode::cuboid(
            [c.caster_plate_width, grab, plate_height],
            [0.0, -clip_y, plate_z],
        ),
    ]);

    let fork_height = (swr + 2.0 * swt) / 2.0;
    let fork_z = (swr / 2.0 + swt) / 2.0;
    let lower_plates = ShapeNode::union(vec![
        ShapeNode::cuboid([swr / 2.0, grab, fork_height], [0.0, clip_y, fork_z]),
        ShapeNode::cuboid(
            [c.caster_plate_width, grab, fork_height],
            [0.0, -clip_y, fork_z],
        ),
    ])
    .rotate_y(90.0 - fork)
    .translate(trail);

    let hub = ShapeNode::cylinder(3.0 * swt, grab, seg)
        .rotate_x(90.0)
        .translate(trail);

    let bar = ShapeNode::cylinder_at(
        bar_height,
        c.tube_radius,
        [0.0, 0.0, swr + 2.0 * swt + bar_height / 2.0],
        seg,
    );

    let grab_assembly =
        ShapeNode::union(vec![lower_clips, upper_clips, upper_plates, hub, lower_plates]);

    ShapeNode::union(vec![wheel, grab_assembly, bar])
}
