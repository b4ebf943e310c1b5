use chair_types::Color;

use super::PartContext;
use crate::tree::ShapeNode;

/// Back wheel centered on the origin, axle along Y.
///
/// A tire torus and a silver hub of spokes. Each spoke runs from near the
/// hub to the tire and is rotated about the axle in equal steps.
pub fn back_wheel(ctx: &PartContext) -> ShapeNode {
    let (p, c) = (ctx.params, ctx.constants);
    let wd = p.wheel_diameter;
    let wt = p.wheel_thickness;

    let tire = ShapeNode::torus(wt / 2.0, wd / 2.0 - wt / 2.0, c.segments, c.segments, 360.0)
        .rotate_x(90.0);

    let step = 360.0 / c.spoke_count as f64;
    let spokes = (0..c.spoke_count)
        .map(|i| {
            ShapeNode::cylinder(wd / 2.0 - wt / 2.0, c.spoke_radius, c.segments)
                .translate([0.0, 0.0, wd / 4.0])
                .rotate_y(step * i as f64)
        })
        .collect();

    ShapeNode::union(vec![tire, ShapeNode::union(spokes).colorize(Color::Silver)])
}

/// Axle tube across the wheel base at hub height.
pub fn back_wheel_structure(ctx: &PartContext) -> ShapeNode {
    let (p, d, c) = (ctx.params, ctx.derived, ctx.constants);
    ShapeNode::cylinder(d.wheel_base + c.axle_overhang, c.axle_radius, c.segments)
        .rotate_x(90.0)
        .translate([0.0, d.wheel_base / 2.0, p.wheel_diameter / 2.0])
}

/// Push rim centered on the origin, axle along Y.
pub fn wheel_handle(ctx: &PartContext) -> ShapeNode {
    let c = ctx.constants;
    ShapeNode::torus(
        c.wheel_handle_thickness,
        c.wheel_handle_radius - c.wheel_handle_thickness,
        c.segments,
        c.segments,
        360.0,
    )
    .rotate_x(90.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::fixtures;
    use crate::tree::Primitive;
    use chair_types::MM_PER_INCH;

    #[test]
    fn wheel_has_tire_and_twenty_four_spokes() {
        let f = fixtures::defaults();
        let node = back_wheel(&f.ctx());
        let mut tori = 0;
        let mut spokes = 0;
        node.visit_primitives(&mut |p| match p {
            Primitive::Torus(_) => tori += 1,
            Primitive::Cylinder(_) => spokes += 1,
            _ => {}
        });
        assert_eq!(tori, 1);
        assert_eq!(spokes, 24);
    }

    #[test]
    fn wheel_diameter_matches_parameter() {
        let f = fixtures::defaults();
        let b = back_wheel(&f.ctx()).bounds().unwrap();
        assert!((b.size()[2] - 25.0 * MM_PER_INCH).abs() < 1e-6);
        assert!((b.size()[1] - 1.5 * MM_PER_INCH).abs() < 1e-6);
    }

    #[test]
    fn spokes_are_silver_and_tire_is_not() {
        let f = fixtures::defaults();
        let ShapeNode::Union(children) = back_wheel(&f.ctx()) else {
            panic!("expected union");
        };
        assert!(matches!(children[0], ShapeNode::Rotate { .. }));
        assert!(matches!(children[1], ShapeNode::Color { color: Color::Silver, .. }));
    }

    #[test]
    fn axle_overhangs_the_wheel_base() {
        let f = fixtures::defaults();
        let b = back_wheel_structure(&f.ctx()).bounds().unwrap();
        let wb = f.derived.wheel_base;
        assert!((b.min[1] + MM_PER_INCH).abs() < 1e-6);
        assert!((b.max[1] - (wb + MM_PER_INCH)).abs() < 1e-6);
        assert!((b.center()[2] - 12.5 * MM_PER_INCH).abs() < 1e-6);
    }

    #[test]
    fn push_rim_outer_radius() {
        let f = fixtures::defaults();
        let b = wheel_handle(&f.ctx()).bounds().unwrap();
        assert!((b.max[0] - 11.5 * MM_PER_INCH).abs() < 1e-6);
    }
}
