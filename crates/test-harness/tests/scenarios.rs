//! End-to-end chair scenarios through the bridge with the mesh kernel.

use chair_types::{PartKind, MM_PER_INCH};
use shape_kernel::{Kernel, MockKernel};
use test_harness::assertions::{assert_all_pass, assert_bounding_box, assert_mirrored_y};
use test_harness::helpers::mesh_bounding_box;
use test_harness::ChairScenario;
use wheelchair_model::evaluate;

#[test]
fn default_inch_chair() {
    let mut scenario = ChairScenario::inches();
    let parts = scenario.generate().unwrap();
    assert_eq!(parts.len(), 8);
    assert!(parts.iter().all(|p| p.mesh.is_some()));
    assert_all_pass(&scenario.check().unwrap(), "default inch chair").unwrap();

    // the cushion is a single rounded box centered on its analytic center
    let p = scenario.record();
    let cushion = parts[0].mesh.as_ref().unwrap();
    let (min, max) = mesh_bounding_box(cushion).unwrap();
    let z = (p.seat_height + p.seat_cushion_thickness / 2.0) * MM_PER_INCH;
    assert!((((min[2] + max[2]) / 2.0) as f64 - z).abs() < 1e-2);
}

#[test]
fn metric_chair_matches_inch_chair() {
    let mut inch = ChairScenario::inches();
    let mut mm = ChairScenario::millimetres();
    let a = inch.part_mesh(PartKind::Seatrest).unwrap().unwrap();
    let b = mm.part_mesh(PartKind::Seatrest).unwrap().unwrap();
    let (min, max) = mesh_bounding_box(&a).unwrap();
    assert_bounding_box(&b, min, max, 1e-3, "metric seatrest").unwrap();
}

#[test]
fn cambered_wheels_stay_mirrored() {
    for camber in [0.0, 5.0, 12.0] {
        let scenario = ChairScenario::inches().with(|r| r.camber_angle = camber);
        let assembly = scenario.assembly().unwrap();
        let wb = assembly.derived.wheel_base;

        let mut kernel = MockKernel::new();
        let left = evaluate(&assembly.back_wheels.left, &mut kernel).unwrap();
        let right = evaluate(&assembly.back_wheels.right, &mut kernel).unwrap();
        assert_mirrored_y(
            &kernel.bounding_box(&left).unwrap(),
            &kernel.bounding_box(&right).unwrap(),
            wb / 2.0,
            1e-6,
            &format!("camber {camber}"),
        )
        .unwrap();
    }
}

#[test]
fn minimal_chair_without_extras() {
    let mut scenario = ChairScenario::inches().with(|r| {
        r.show_push_handle = false;
        r.show_armrest = false;
        r.legrest_angle = 90.0;
    });
    let report = scenario.report().unwrap();
    assert_eq!(report.failed_oracles().count(), 0, "{report}");
    assert_eq!(report.mesh_summaries.len(), 7);
}

#[test]
fn reclined_chair_with_steep_legrests() {
    let mut scenario = ChairScenario::inches().with(|r| {
        r.seat_to_backrest_angle = 115.0;
        r.legrest_angle = 40.0;
        r.castor_fork_angle = 60.0;
    });
    assert_all_pass(&scenario.check().unwrap(), "reclined").unwrap();
}
