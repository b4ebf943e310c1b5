//! Verification oracles: pure functions returning pass/fail verdicts.
//!
//! Each oracle returns an `OracleVerdict` with diagnostic detail, not panics,
//! so a scenario can collect every failure in one pass.

use chair_types::PartKind;
use shape_kernel::{BoundingBox, RenderMesh};
use wheelchair_model::{Assembly, ChairConstants};

use crate::helpers::{triangle_area, triangles};

/// The result of a single oracle check.
#[derive(Debug, Clone)]
pub struct OracleVerdict {
    pub oracle_name: String,
    pub passed: bool,
    pub detail: String,
    pub value: Option<f64>,
}

impl OracleVerdict {
    fn pass(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: true,
            detail,
            value: None,
        }
    }

    fn fail(name: &str, detail: String) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed: false,
            detail,
            value: None,
        }
    }

    fn check(name: &str, passed: bool, detail: String, value: f64) -> Self {
        Self {
            oracle_name: name.to_string(),
            passed,
            detail,
            value: Some(value),
        }
    }
}

// ── Mesh Oracles ────────────────────────────────────────────────────────────

/// Check that every index references an existing vertex.
pub fn check_valid_indices(mesh: &RenderMesh) -> OracleVerdict {
    let vertex_count = mesh.vertex_count();
    let bad = mesh
        .indices
        .iter()
        .filter(|&&i| i as usize >= vertex_count)
        .count();
    if mesh.indices.len() % 3 != 0 {
        OracleVerdict::fail(
            "valid_indices",
            format!("{} indices is not a multiple of 3", mesh.indices.len()),
        )
    } else if bad == 0 {
        OracleVerdict::pass(
            "valid_indices",
            format!("all {} indices < {}", mesh.indices.len(), vertex_count),
        )
    } else {
        OracleVerdict::fail(
            "valid_indices",
            format!("{bad} indices out of range (vertex count = {vertex_count})"),
        )
    }
}

/// Check that every vertex coordinate and normal component is finite.
pub fn check_finite_vertices(mesh: &RenderMesh) -> OracleVerdict {
    let bad = mesh
        .vertices
        .iter()
        .chain(&mesh.normals)
        .filter(|v| !v.is_finite())
        .count();
    if bad == 0 {
        OracleVerdict::pass(
            "finite_vertices",
            format!("{} vertices finite", mesh.vertex_count()),
        )
    } else {
        OracleVerdict::fail("finite_vertices", format!("{bad} non-finite components"))
    }
}

/// Check that the color ranges tile the index buffer without gaps.
pub fn check_color_range_coverage(mesh: &RenderMesh) -> OracleVerdict {
    let mut cursor = 0u32;
    for (i, range) in mesh.color_ranges.iter().enumerate() {
        if range.start_index != cursor || range.end_index < range.start_index {
            return OracleVerdict::fail(
                "color_range_coverage",
                format!(
                    "range {i} spans {}..{}, expected start {cursor}",
                    range.start_index, range.end_index
                ),
            );
        }
        cursor = range.end_index;
    }
    if cursor as usize == mesh.indices.len() {
        OracleVerdict::pass(
            "color_range_coverage",
            format!("{} ranges cover {} indices", mesh.color_ranges.len(), cursor),
        )
    } else {
        OracleVerdict::fail(
            "color_range_coverage",
            format!("ranges end at {cursor}, mesh has {} indices", mesh.indices.len()),
        )
    }
}

/// Check that the mesh has positive total area.
///
/// Individual zero-area triangles are allowed: boolean cuts can leave sliver
/// polygons along seams.
pub fn check_nonempty_surface(mesh: &RenderMesh) -> OracleVerdict {
    let area: f64 = triangles(mesh).map(triangle_area).sum();
    let passed = area > 0.0 && area.is_finite();
    OracleVerdict::check(
        "nonempty_surface",
        passed,
        format!("{} triangles, area {area:.1} mm²", mesh.triangle_count()),
        area,
    )
}

/// Check that the mesh bounds match `expected` within `tol` (mm). The mesh
/// of a curved primitive lies inside its analytic bounds, so the mesh box
/// may shrink by up to `tol` but never grow.
pub fn check_bounding_box(mesh: &RenderMesh, expected: &BoundingBox, tol: f64) -> OracleVerdict {
    let Some((min, max)) = crate::helpers::mesh_bounding_box(mesh) else {
        return OracleVerdict::fail("bounding_box", "empty mesh".to_string());
    };
    let mut worst = 0.0f64;
    for i in 0..3 {
        let lo = min[i] as f64 - expected.min[i];
        let hi = expected.max[i] - max[i] as f64;
        // negative means the mesh pokes outside the expected box
        if lo < -tol || hi < -tol {
            return OracleVerdict::check(
                "bounding_box",
                false,
                format!("axis {i}: mesh {:.3}..{:.3} exceeds expected {:.3}..{:.3}", min[i], max[i], expected.min[i], expected.max[i]),
                lo.min(hi),
            );
        }
        worst = worst.max(lo).max(hi);
    }
    OracleVerdict::check(
        "bounding_box",
        worst <= tol,
        format!("largest inset {worst:.4} mm (tol={tol})"),
        worst,
    )
}

// ── Assembly Oracles ────────────────────────────────────────────────────────

/// Check that the assembly holds the eight parts in output order.
pub fn check_part_order(assembly: &Assembly) -> OracleVerdict {
    let kinds: Vec<PartKind> = assembly.parts.iter().map(|p| p.kind).collect();
    if kinds == PartKind::ALL {
        OracleVerdict::pass("part_order", format!("{} parts in order", kinds.len()))
    } else {
        OracleVerdict::fail("part_order", format!("got {kinds:?}"))
    }
}

/// Check that every present part has finite, non-degenerate bounds and that
/// only armrests may be absent, and only when hidden.
pub fn check_part_geometry(assembly: &Assembly) -> OracleVerdict {
    let mut problems = Vec::new();
    for part in &assembly.parts {
        match &part.node {
            None if part.kind == PartKind::Armrests && !assembly.params.show_armrest => {}
            None => problems.push(format!("{} missing", part.kind)),
            Some(node) if node.has_non_finite() => {
                problems.push(format!("{} has non-finite values", part.kind))
            }
            Some(node) => match node.bounds() {
                Some(b) if b.is_finite() && !b.is_degenerate() => {}
                other => problems.push(format!("{} bounds {other:?}", part.kind)),
            },
        }
    }
    if problems.is_empty() {
        OracleVerdict::pass("part_geometry", "all parts finite".to_string())
    } else {
        OracleVerdict::fail("part_geometry", problems.join("; "))
    }
}

/// Check that the armrest part exists exactly when requested.
pub fn check_armrest_toggle(assembly: &Assembly) -> OracleVerdict {
    let present = assembly
        .part(PartKind::Armrests)
        .is_some_and(|p| p.node.is_some());
    let wanted = assembly.params.show_armrest;
    if present == wanted {
        OracleVerdict::pass("armrest_toggle", format!("armrests present = {present}"))
    } else {
        OracleVerdict::fail(
            "armrest_toggle",
            format!("armrests present = {present}, show_armrest = {wanted}"),
        )
    }
}

/// Check that the cushion sits on the seat: its center is at
/// `seatHeight + seatCushThick / 2`.
pub fn check_cushion_height(assembly: &Assembly, tol: f64) -> OracleVerdict {
    let p = &assembly.params;
    let expected = p.seat_height + p.seat_cushion_thickness / 2.0;
    let Some(bounds) = assembly
        .part(PartKind::SeatCushion)
        .and_then(|part| part.node.as_ref())
        .and_then(|node| node.bounds())
    else {
        return OracleVerdict::fail("cushion_height", "no cushion".to_string());
    };
    let z = bounds.center()[2];
    OracleVerdict::check(
        "cushion_height",
        (z - expected).abs() <= tol,
        format!("center z {z:.3} mm, expected {expected:.3} mm"),
        z,
    )
}

/// Check the wheel base relation
/// `seatWidth + 4·tube + wheelThickness + clearance + wheelDiameter·sin(camber)`.
pub fn check_wheel_base(assembly: &Assembly, c: &ChairConstants, tol: f64) -> OracleVerdict {
    let p = &assembly.params;
    let expected = p.seat_width
        + 4.0 * c.tube_radius
        + p.wheel_thickness
        + c.wheel_base_clearance
        + p.wheel_diameter * p.camber_angle.to_radians().sin();
    let actual = assembly.derived.wheel_base;
    OracleVerdict::check(
        "wheel_base",
        (actual - expected).abs() <= tol,
        format!("{actual:.3} mm, expected {expected:.3} mm"),
        actual,
    )
}

/// Check that the back wheel instances mirror about `y = wheelBase / 2`.
pub fn check_back_wheel_mirror(assembly: &Assembly, tol: f64) -> OracleVerdict {
    let wb = assembly.derived.wheel_base;
    let (Some(left), Some(right)) = (
        assembly.back_wheels.left.bounds(),
        assembly.back_wheels.right.bounds(),
    ) else {
        return OracleVerdict::fail("back_wheel_mirror", "empty wheel".to_string());
    };
    let error = [
        (wb - left.max[1] - right.min[1]).abs(),
        (wb - left.min[1] - right.max[1]).abs(),
        (left.min[0] - right.min[0]).abs(),
        (left.max[0] - right.max[0]).abs(),
        (left.min[2] - right.min[2]).abs(),
        (left.max[2] - right.max[2]).abs(),
    ]
    .into_iter()
    .fold(0.0f64, f64::max);
    OracleVerdict::check(
        "back_wheel_mirror",
        error <= tol,
        format!("largest mirror error {error:.2e} mm"),
        error,
    )
}

/// Check that the left back wheel hub sits at `y = 0` and axle height
/// `wheelDiameter / 2` for any camber.
pub fn check_wheel_hub(assembly: &Assembly, tol: f64) -> OracleVerdict {
    let Some(left) = assembly.back_wheels.left.bounds() else {
        return OracleVerdict::fail("wheel_hub", "empty wheel".to_string());
    };
    let [_, y, z] = left.center();
    let axle = assembly.params.wheel_diameter / 2.0;
    let error = y.abs().max((z - axle).abs());
    OracleVerdict::check(
        "wheel_hub",
        error <= tol,
        format!("hub at y {y:.3} mm, z {z:.3} mm (axle height {axle:.3} mm)"),
        error,
    )
}

// ── Composite ───────────────────────────────────────────────────────────────

/// Run every mesh oracle.
pub fn run_all_mesh_checks(mesh: &RenderMesh) -> Vec<OracleVerdict> {
    vec![
        check_valid_indices(mesh),
        check_finite_vertices(mesh),
        check_color_range_coverage(mesh),
        check_nonempty_surface(mesh),
    ]
}

/// Run every assembly oracle with the standard tolerance.
pub fn run_assembly_checks(assembly: &Assembly, constants: &ChairConstants) -> Vec<OracleVerdict> {
    const TOL: f64 = 1e-6;
    vec![
        check_part_order(assembly),
        check_part_geometry(assembly),
        check_armrest_toggle(assembly),
        check_cushion_height(assembly, TOL),
        check_wheel_base(assembly, constants, TOL),
        check_back_wheel_mirror(assembly, TOL),
        check_wheel_hub(assembly, TOL),
    ]
}
