//! Assertion helpers with diagnostic output.

use shape_kernel::{BoundingBox, RenderMesh};

use crate::helpers::HarnessError;
use crate::oracle::OracleVerdict;

/// Assert the mesh bounding box matches expected values within tolerance.
pub fn assert_bounding_box(
    mesh: &RenderMesh,
    expected_min: [f32; 3],
    expected_max: [f32; 3],
    tol: f32,
    ctx: &str,
) -> Result<(), HarnessError> {
    let Some((actual_min, actual_max)) = crate::helpers::mesh_bounding_box(mesh) else {
        return Err(HarnessError::AssertionFailed {
            detail: format!("[{ctx}] mesh is empty"),
        });
    };

    for i in 0..3 {
        for (label, actual, expected) in [
            ("min", actual_min[i], expected_min[i]),
            ("max", actual_max[i], expected_max[i]),
        ] {
            if (actual - expected).abs() > tol {
                return Err(HarnessError::AssertionFailed {
                    detail: format!(
                        "[{ctx}] bounding box {label}[{i}]: expected {expected:.3}, got {actual:.3} (tol={tol})",
                    ),
                });
            }
        }
    }
    Ok(())
}

/// Assert two boxes are mirror images about the plane `y = mirror_y`.
pub fn assert_mirrored_y(
    left: &BoundingBox,
    right: &BoundingBox,
    mirror_y: f64,
    tol: f64,
    ctx: &str,
) -> Result<(), HarnessError> {
    let pairs = [
        ("min y", 2.0 * mirror_y - left.max[1], right.min[1]),
        ("max y", 2.0 * mirror_y - left.min[1], right.max[1]),
        ("min x", left.min[0], right.min[0]),
        ("max x", left.max[0], right.max[0]),
        ("min z", left.min[2], right.min[2]),
        ("max z", left.max[2], right.max[2]),
    ];
    for (label, mirrored, actual) in pairs {
        if (mirrored - actual).abs() > tol {
            return Err(HarnessError::AssertionFailed {
                detail: format!(
                    "[{ctx}] {label}: mirrored {mirrored:.4}, got {actual:.4} (tol={tol})"
                ),
            });
        }
    }
    Ok(())
}

/// Fail with every failed verdict listed.
pub fn assert_all_pass(verdicts: &[OracleVerdict], ctx: &str) -> Result<(), HarnessError> {
    let failed: Vec<String> = verdicts
        .iter()
        .filter(|v| !v.passed)
        .map(|v| format!("{}: {}", v.oracle_name, v.detail))
        .collect();
    if failed.is_empty() {
        Ok(())
    } else {
        Err(HarnessError::OracleFailure {
            oracle: ctx.to_string(),
            detail: failed.join("; "),
        })
    }
}
