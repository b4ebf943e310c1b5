//! Assembly-level tests against both kernels.

use chair_types::{PartKind, Units, MM_PER_INCH};
use shape_kernel::{BoundingBox, Kernel, MeshKernel, MockKernel};
use wheelchair_model::tree::Primitive;
use wheelchair_model::{
    evaluate, generate, main, ModelConfig, ModelError, ParameterRecord, ShapeNode,
};

fn scenario() -> ParameterRecord {
    ParameterRecord {
        units: Units::Inch,
        seat_width: 16.0,
        seat_height: 20.0,
        wheel_diameter: 25.0,
        seat_to_floor_height: 21.0,
        camber_angle: 0.0,
        show_push_handle: true,
        show_armrest: true,
        seat_cushion_thickness: 4.0,
        legrest_length: 4.0,
        legrest_angle: 75.0,
        seat_to_backrest_angle: 90.0,
        castor_fork_angle: 90.0,
        footrest_link_length: 12.0,
        wheel_thickness: 1.5,
    }
}

fn mock_bbox(node: &ShapeNode) -> BoundingBox {
    let mut kernel = MockKernel::new();
    let solid = evaluate(node, &mut kernel).unwrap();
    kernel.bounding_box(&solid).unwrap()
}

fn assert_close(a: f64, b: f64, tol: f64) {
    assert!((a - b).abs() < tol, "{a} != {b}");
}

#[test]
fn scenario_generates_eight_solid_parts_with_meshes() {
    let mut kernel = MeshKernel::new();
    let generated = generate(&scenario(), &ModelConfig::default(), &mut kernel).unwrap();
    assert_eq!(generated.parts.len(), 8);

    for part in &generated.parts {
        let solid = part
            .solid
            .as_ref()
            .unwrap_or_else(|| panic!("{} has no solid", part.kind));
        let bbox = kernel.bounding_box(solid).unwrap();
        assert!(bbox.is_finite(), "{} has non-finite bounds", part.kind);
        assert!(!bbox.is_degenerate(), "{} is degenerate", part.kind);
        let mesh = kernel.tessellate(solid).unwrap();
        assert!(mesh.triangle_count() > 0);
    }

    let cushion = generated.parts[0].solid.as_ref().unwrap();
    let center = kernel.bounding_box(cushion).unwrap().center();
    assert_close(center[2], (20.0 + 4.0 / 2.0) * MM_PER_INCH, 1e-3);
}

#[test]
fn generation_is_deterministic() {
    let a = main(&scenario()).unwrap();
    let b = main(&scenario()).unwrap();
    assert_eq!(a, b);

    let mut k1 = MockKernel::new();
    let mut k2 = MockKernel::new();
    let g1 = generate(&scenario(), &ModelConfig::default(), &mut k1).unwrap();
    let g2 = generate(&scenario(), &ModelConfig::default(), &mut k2).unwrap();
    for (p1, p2) in g1.parts.iter().zip(&g2.parts) {
        let b1 = k1.bounding_box(p1.solid.as_ref().unwrap()).unwrap();
        let b2 = k2.bounding_box(p2.solid.as_ref().unwrap()).unwrap();
        assert_eq!(b1, b2);
    }
}

#[test]
fn back_wheels_mirror_about_the_median_plane() {
    for camber in [0.0, 4.0, 12.0] {
        let mut record = scenario();
        record.camber_angle = camber;
        let assembly = main(&record).unwrap();
        let wb = assembly.derived.wheel_base;

        let left = mock_bbox(&assembly.back_wheels.left);
        let right = mock_bbox(&assembly.back_wheels.right);
        assert_close(wb - left.max[1], right.min[1], 1e-6);
        assert_close(wb - left.min[1], right.max[1], 1e-6);
        for axis in [0, 2] {
            assert_close(left.min[axis], right.min[axis], 1e-6);
            assert_close(left.max[axis], right.max[axis], 1e-6);
        }
    }
}

#[test]
fn wheel_handles_mirror_up_to_the_rim_inset() {
    let assembly = main(&scenario()).unwrap();
    let wb = assembly.derived.wheel_base;
    let left = mock_bbox(&assembly.wheel_handles.left);
    let right = mock_bbox(&assembly.wheel_handles.right);
    let inset = 0.25 * MM_PER_INCH;
    assert_close(wb - left.center()[1], right.center()[1] + inset, 1e-6);
}

#[test]
fn push_handle_toggle_only_changes_the_backrest() {
    let with = main(&scenario()).unwrap();
    let mut record = scenario();
    record.show_push_handle = false;
    let without = main(&record).unwrap();

    for (a, b) in with.parts.iter().zip(&without.parts) {
        if a.kind == PartKind::Backrest {
            let count = |node: &ShapeNode| {
                let mut tori = 0;
                node.visit_primitives(&mut |p| {
                    if matches!(p, Primitive::Torus(_) | Primitive::RoundedCylinder(_)) {
                        tori += 1;
                    }
                });
                tori
            };
            assert_eq!(count(a.node.as_ref().unwrap()), 4);
            assert_eq!(count(b.node.as_ref().unwrap()), 0);
        } else {
            assert_eq!(a, b);
        }
    }
}

#[test]
fn hidden_armrests_generate_no_solid() {
    let mut record = scenario();
    record.show_armrest = false;
    let mut kernel = MockKernel::new();
    let generated = generate(&record, &ModelConfig::default(), &mut kernel).unwrap();
    let armrests = generated
        .parts
        .iter()
        .find(|p| p.kind == PartKind::Armrests)
        .unwrap();
    assert!(armrests.solid.is_none());
    assert_eq!(generated.solids().count(), 7);
}

#[test]
fn vertical_castor_fork_is_finite() {
    let assembly = main(&scenario()).unwrap();
    let front = assembly.part(PartKind::FrontWheels).unwrap();
    let node = front.node.as_ref().unwrap();
    assert!(!node.has_non_finite());
    assert!(mock_bbox(node).is_finite());
}

#[test]
fn metric_record_builds_the_same_chair() {
    let inch = main(&ParameterRecord::defaults(Units::Inch)).unwrap();
    let mm = main(&ParameterRecord::defaults(Units::Millimetre)).unwrap();
    for (a, b) in inch.parts.iter().zip(&mm.parts) {
        let ba = a.node.as_ref().unwrap().bounds().unwrap();
        let bb = b.node.as_ref().unwrap().bounds().unwrap();
        for i in 0..3 {
            assert_close(ba.min[i], bb.min[i], 1e-6);
            assert_close(ba.max[i], bb.max[i], 1e-6);
        }
    }
}

#[test]
fn reclined_backrest_tilts_backwards() {
    let upright = main(&scenario()).unwrap();
    let mut record = scenario();
    record.seat_to_backrest_angle = 110.0;
    let reclined = main(&record).unwrap();

    let top = |a: &wheelchair_model::Assembly| {
        a.part(PartKind::Backrest)
            .unwrap()
            .node
            .as_ref()
            .unwrap()
            .bounds()
            .unwrap()
    };
    // the top of the backrest moves towards -X and drops
    assert!(top(&reclined).min[0] < top(&upright).min[0]);
    assert!(top(&reclined).max[2] < top(&upright).max[2]);
}

#[test]
fn obtuse_legrest_angle_builds() {
    let mut record = scenario();
    record.legrest_angle = 100.0;
    let assembly = main(&record).unwrap();
    assert!(assembly.part(PartKind::Legrests).unwrap().node.is_some());

    let mut kernel = MockKernel::new();
    let generated = generate(&record, &ModelConfig::default(), &mut kernel).unwrap();
    let legrests = generated
        .parts
        .iter()
        .find(|p| p.kind == PartKind::Legrests)
        .unwrap();
    assert!(legrests.solid.is_some());
}

#[test]
fn legrest_sweep_past_a_full_turn_is_degenerate() {
    let mut record = scenario();
    record.legrest_angle = 400.0;
    let mut kernel = MockKernel::new();
    let err = generate(&record, &ModelConfig::default(), &mut kernel).unwrap_err();
    assert!(matches!(
        err,
        ModelError::DegenerateGeometry {
            part: PartKind::Legrests,
            ..
        }
    ));
}
