use chair_types::{PartKind, Units};
use test_harness::assertions::assert_all_pass;
use test_harness::stl::parse_binary_stl;
use test_harness::{ChairScenario, HarnessError};

#[test]
fn definitions_round_trip_through_dispatch() {
    let mut scenario = ChairScenario::millimetres();
    let defs = scenario.definitions().unwrap();
    assert_eq!(defs.len(), 17);
    assert_eq!(scenario.history(), ["GetParameterDefinitions"]);
}

#[test]
fn generate_then_export_reuses_one_tessellation() {
    let mut scenario = ChairScenario::inches();
    let parts = scenario.generate().unwrap();
    assert!(scenario.state.is_cached(scenario.record()));

    let expected: usize = parts
        .iter()
        .filter_map(|p| p.mesh.as_ref())
        .map(|m| m.triangle_count())
        .sum();
    let stl = scenario.export_stl().unwrap();
    let summary = parse_binary_stl(&stl).unwrap();
    assert_eq!(summary.triangle_count, expected);
    assert!(summary.header.starts_with("Wheelchair Model"));
    assert_eq!(scenario.history(), ["Generate", "ExportStl"]);
}

#[test]
fn invalid_record_surfaces_dispatch_error() {
    let mut scenario = ChairScenario::inches().with(|r| r.seat_to_backrest_angle = 60.0);
    let err = scenario.generate().unwrap_err();
    let HarnessError::Dispatch { kind, message } = err else {
        panic!("expected dispatch error, got {err:?}");
    };
    assert_eq!(kind, "invalidParameter");
    assert!(message.contains("seatToBackrestAngle"));

    assert!(matches!(scenario.assembly(), Err(HarnessError::Model(_))));
}

#[test]
fn part_mesh_lookup() {
    let mut scenario = ChairScenario::new(Units::Inch).with(|r| r.show_armrest = false);
    assert!(scenario.part_mesh(PartKind::Armrests).unwrap().is_none());
    let cushion = scenario.part_mesh(PartKind::SeatCushion).unwrap().unwrap();
    assert!(cushion.triangle_count() > 0);
}

#[test]
fn check_runs_assembly_and_mesh_oracles() {
    let mut scenario = ChairScenario::inches();
    let verdicts = scenario.check().unwrap();
    assert!(verdicts.iter().any(|v| v.oracle_name == "back_wheel_mirror"));
    assert!(verdicts
        .iter()
        .any(|v| v.oracle_name == "front wheels/color_range_coverage"));
    assert_all_pass(&verdicts, "default chair").unwrap();
}
