use tracing::debug;

use crate::constants::ChairConstants;
use crate::params::ResolvedParameters;

/// Secondary dimensions computed once per invocation, in millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DerivedDimensions {
    pub seat_depth: f64,
    pub backrest_height: f64,
    pub backrest_width: f64,
    pub armrest_height: f64,
    pub armrest_length: f64,
    /// Lateral distance between the two back wheel centers.
    pub wheel_base: f64,
    pub overall_width: f64,
    /// Backrest recline beyond vertical, in degrees.
    pub recline: f64,
    /// `wheelDiameter · sin(recline)`, the rearward reach of a reclined backrest.
    pub recline_reach: f64,
    /// Length of the vertical backrest structure tube.
    pub backrest_bar_length: f64,
    /// Forward distance from the legrest hinge bar to the top of the link:
    /// `bend + hingeOffset + footrestLinkLength · cos(legrestAngle) / 2`.
    pub legrest_hinge_reach: f64,
}

impl DerivedDimensions {
    pub fn resolve(p: &ResolvedParameters, c: &ChairConstants) -> Self {
        let sw = p.seat_width;
        let wheel_base = sw
            + 4.0 * c.tube_radius
            + p.wheel_thickness
            + c.wheel_base_clearance
            + p.wheel_diameter * p.camber_angle.to_radians().sin();
        let overall_width = wheel_base + 2.0 * c.wheel_handle_thickness + c.wheel_base_clearance;
        let recline = p.seat_to_backrest_angle - 90.0;
        let backrest_height = sw;

        let derived = Self {
            seat_depth: sw,
            backrest_height,
            backrest_width: sw,
            armrest_height: 0.5 * sw,
            armrest_length: 0.6 * sw,
            wheel_base,
            overall_width,
            recline,
            recline_reach: p.wheel_diameter * recline.to_radians().sin(),
            backrest_bar_length: p.seat_to_floor_height + backrest_height - p.wheel_diameter / 2.0,
            legrest_hinge_reach: c.bend_radius
                + c.hinge_offset
                + p.footrest_link_length * p.legrest_angle.to_radians().cos() / 2.0,
        };
        debug!(
            wheel_base = derived.wheel_base,
            overall_width = derived.overall_width,
            recline = derived.recline,
            "derived dimensions"
        );
        derived
    }
}
