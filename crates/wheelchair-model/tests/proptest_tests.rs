//! Property-based tests for the assembly pipeline using the `proptest` crate.

use proptest::prelude::*;

use chair_types::{PartKind, Units, MM_PER_INCH};
use shape_kernel::{Kernel, MockKernel};
use wheelchair_model::{
    evaluate, main, ChairConstants, DerivedDimensions, ParameterRecord,
};

// ---------------------------------------------------------------------------
// Strategy helpers
// ---------------------------------------------------------------------------

/// Records inside the declared domain that also give every primitive a
/// positive size.
fn arb_record() -> impl Strategy<Value = ParameterRecord> {
    (
        (12.0f64..24.0, 14.0f64..26.0, 20.0f64..28.0, 16.0f64..26.0),
        (0.0f64..12.0, any::<bool>(), any::<bool>()),
        (2.5f64..6.0, 2.0f64..8.0, 30.0f64..=120.0),
        (90.0f64..120.0, 45.0f64..=90.0, 8.0f64..16.0, 1.0f64..2.5),
    )
        .prop_map(
            |(
                (seat_width, seat_height, wheel_diameter, seat_to_floor_height),
                (camber_angle, show_push_handle, show_armrest),
                (seat_cushion_thickness, legrest_length, legrest_angle),
                (seat_to_backrest_angle, castor_fork_angle, footrest_link_length, wheel_thickness),
            )| ParameterRecord {
                units: Units::Inch,
                seat_width,
                seat_height,
                wheel_diameter,
                seat_to_floor_height,
                camber_angle,
                show_push_handle,
                show_armrest,
                seat_cushion_thickness,
                legrest_length,
                legrest_angle,
                seat_to_backrest_angle,
                castor_fork_angle,
                footrest_link_length,
                wheel_thickness,
            },
        )
}

const TOL: f64 = 1e-6;

// ---------------------------------------------------------------------------
// 1. Determinism: same record, same tree, same bounds
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn assembly_is_deterministic(record in arb_record()) {
        let a = main(&record).unwrap();
        let b = main(&record).unwrap();
        prop_assert_eq!(&a, &b);

        for (pa, pb) in a.parts.iter().zip(&b.parts) {
            prop_assert_eq!(pa.node.is_some(), pb.node.is_some());
            if let (Some(na), Some(nb)) = (&pa.node, &pb.node) {
                let mut k1 = MockKernel::new();
                let mut k2 = MockKernel::new();
                let s1 = evaluate(na, &mut k1).unwrap();
                let s2 = evaluate(nb, &mut k2).unwrap();
                prop_assert_eq!(k1.bounding_box(&s1).unwrap(), k2.bounding_box(&s2).unwrap());
            }
        }
    }
}

// ---------------------------------------------------------------------------
// 2. Wheel base relation
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn wheel_base_relation_holds(record in arb_record()) {
        let c = ChairConstants::STANDARD;
        let p = record.to_millimetres();
        let d = DerivedDimensions::resolve(&p, &c);
        let expected = p.seat_width
            + 4.0 * c.tube_radius
            + p.wheel_thickness
            + c.wheel_base_clearance
            + p.wheel_diameter * p.camber_angle.to_radians().sin();
        prop_assert!((d.wheel_base - expected).abs() < TOL);
        prop_assert!(
            (d.overall_width - d.wheel_base - 2.0 * c.wheel_handle_thickness - c.wheel_base_clearance).abs() < TOL
        );
    }
}

// ---------------------------------------------------------------------------
// 3. Unit scaling: a record and its metric twin resolve identically
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn metric_twin_resolves_identically(record in arb_record()) {
        let mut metric = record;
        metric.units = Units::Millimetre;
        metric.seat_width *= MM_PER_INCH;
        metric.seat_height *= MM_PER_INCH;
        metric.wheel_diameter *= MM_PER_INCH;
        metric.seat_to_floor_height *= MM_PER_INCH;
        metric.seat_cushion_thickness *= MM_PER_INCH;
        metric.legrest_length *= MM_PER_INCH;
        metric.footrest_link_length *= MM_PER_INCH;
        metric.wheel_thickness *= MM_PER_INCH;

        let a = record.to_millimetres();
        let b = metric.to_millimetres();
        for ((name, x), (_, y)) in record.lengths().iter().zip(metric.lengths().iter()) {
            prop_assert!((x * MM_PER_INCH - y).abs() < TOL, "{} differs", name);
        }
        prop_assert!((a.seat_width - b.seat_width).abs() < TOL);
        prop_assert!((a.footrest_link_length - b.footrest_link_length).abs() < TOL);
    }
}

// ---------------------------------------------------------------------------
// 4. Every valid record yields eight parts and finite geometry
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn valid_records_build_finite_assemblies(record in arb_record()) {
        let assembly = main(&record).unwrap();
        prop_assert_eq!(assembly.parts.len(), 8);
        for part in &assembly.parts {
            match &part.node {
                Some(node) => prop_assert!(!node.has_non_finite(), "{} not finite", part.kind),
                None => prop_assert!(part.kind == PartKind::Armrests && !record.show_armrest),
            }
        }

        let mut kernel = MockKernel::new();
        for part in assembly.parts.iter().filter_map(|p| p.node.as_ref()) {
            prop_assert!(evaluate(part, &mut kernel).is_ok());
        }
    }
}

// ---------------------------------------------------------------------------
// 5. Back wheels mirror about y = wheelBase / 2 for any camber
// ---------------------------------------------------------------------------

proptest! {
    #[test]
    fn back_wheels_mirror(record in arb_record()) {
        let assembly = main(&record).unwrap();
        let wb = assembly.derived.wheel_base;
        let left = assembly.back_wheels.left.bounds().unwrap();
        let right = assembly.back_wheels.right.bounds().unwrap();
        prop_assert!((wb - left.max[1] - right.min[1]).abs() < TOL);
        prop_assert!((wb - left.min[1] - right.max[1]).abs() < TOL);
        prop_assert!((left.max[2] - right.max[2]).abs() < TOL);
    }
}
