use chair_types::Side;

use super::PartContext;
use crate::tree::ShapeNode;

/// Legrest linkage for one side.
///
/// The link tube, its top bend, the lower cross tube and the footplate are
/// built hanging straight down, then swung forward about Y by
/// `90° - legrestAngle`. The hinge bar is placed afterwards so it stays
/// horizontal. The footplate extends inwards from the link: towards +Y on
/// the left side and towards -Y on the right.
pub fn legrest(ctx: &PartContext, side: Side) -> ShapeNode {
    let (p, c) = (ctx.params, ctx.constants);
    let seg = c.segments;
    let r = c.tube_radius;
    let bend = c.bend_radius;
    let link = p.footrest_link_length;
    let angle = p.legrest_angle;
    let half_plate = p.legrest_length / 2.0 + r;
    let plate_y = match side {
        Side::Left => half_plate,
        Side::Right => -half_plate,
    };

    let link_tube = ShapeNode::union(vec![
        ShapeNode::torus(r, bend, seg, seg, angle)
            .rotate_x(90.0)
            .translate([-bend, 0.0, link / 2.0]),
        ShapeNode::cylinder(link, r, seg),
    ]);
    let cross_tube = ShapeNode::cylinder(link / 2.0, r, seg)
        .rotate_y(90.0)
        .translate([link / 4.0, 0.0, -link / 2.0]);
    let plate_x = link / 2.0 - bend / 2.0;
    let footplate = ShapeNode::union(vec![
        ShapeNode::rounded_cuboid(
            [link / 2.0, p.legrest_length + r, c.footplate_thickness],
            [plate_x, plate_y, -link / 2.0],
            c.footplate_round_radius,
            seg,
        ),
        ShapeNode::cylinder(link / 2.0, r + c.tube_sleeve, seg)
            .rotate_y(90.0)
            .translate([plate_x, 0.0, -link / 2.0]),
    ]);

    let cos_angle = angle.to_radians().cos();
    let hinge_x = -ctx.derived.legrest_hinge_reach;
    let hinge_z =
        link / 2.0 + bend - ((link - 2.0 * bend - 2.0 * r) * (90.0 - angle).to_radians().sin()) / 2.0;
    let hinge = ShapeNode::cylinder(c.hinge_bar_length + c.hinge_offset * cos_angle, r, seg)
        .rotate_y(90.0)
        .translate([hinge_x, 0.0, hinge_z]);

    ShapeNode::union(vec![
        hinge,
        ShapeNode::union(vec![link_tube, cross_tube, footplate]).rotate_y(-(90.0 - angle)),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::params::ParameterRecord;
    use crate::parts::fixtures::{self, Fixture};
    use crate::tree::Primitive;

    fn footplate_center_y(node: &ShapeNode) -> f64 {
        let mut y = f64::NAN;
        node.visit_placed(&mut |p, t| {
            if let Primitive::RoundedCuboid(_) = p {
                y = t.transform_bbox(&p.bounds()).center()[1];
            }
        });
        y
    }

    #[test]
    fn sides_point_footplates_in_opposite_directions() {
        let f = fixtures::defaults();
        let left = footplate_center_y(&legrest(&f.ctx(), Side::Left));
        let right = footplate_center_y(&legrest(&f.ctx(), Side::Right));
        assert!(left > 0.0);
        assert!((left + right).abs() < 1e-9);
    }

    #[test]
    fn legrest_primitive_inventory() {
        let f = fixtures::defaults();
        // hinge, bend, link, cross tube, plate, plate tube
        assert_eq!(legrest(&f.ctx(), Side::Left).primitive_count(), 6);
    }

    #[test]
    fn bend_sweep_follows_legrest_angle() {
        let mut record = ParameterRecord::default();
        record.legrest_angle = 60.0;
        let f = Fixture::from_record(record);
        let mut sweep = 0.0;
        legrest(&f.ctx(), Side::Right).visit_primitives(&mut |p| {
            if let Primitive::Torus(t) = p {
                sweep = t.outer_rotation;
            }
        });
        assert!((sweep - 60f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn hinge_bar_sits_at_the_derived_reach() {
        for angle in [60.0, 90.0, 100.0] {
            let mut record = ParameterRecord::default();
            record.legrest_angle = angle;
            let f = Fixture::from_record(record);
            let ctx = f.ctx();
            let ShapeNode::Union(children) = legrest(&ctx, Side::Left) else {
                panic!("expected union");
            };
            let hinge = children[0].bounds().unwrap();
            assert!((hinge.center()[0] + ctx.derived.legrest_hinge_reach).abs() < 1e-9);
        }
    }

    #[test]
    fn straight_legrest_keeps_link_vertical() {
        let mut record = ParameterRecord::default();
        record.legrest_angle = 90.0;
        let f = Fixture::from_record(record);
        let node = legrest(&f.ctx(), Side::Left);
        let ShapeNode::Union(children) = &node else {
            panic!("expected union");
        };
        let ShapeNode::Rotate { degrees, .. } = &children[1] else {
            panic!("expected swung linkage");
        };
        assert_eq!(*degrees, 0.0);
    }
}
