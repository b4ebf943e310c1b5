//! Fixed physical dimensions of the chair, stored in millimetres.

use chair_types::MM_PER_INCH;

/// Frozen set of dimensions that do not depend on user parameters.
///
/// Every length is in millimetres. The standard chair is specified in inches
/// and converted once in [`ChairConstants::STANDARD`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ChairConstants {
    /// Radius of the frame tubes.
    pub tube_radius: f64,
    /// Centerline radius of the tube bends.
    pub bend_radius: f64,
    /// Length of the push handle grip.
    pub push_handle_length: f64,
    /// Radial padding of the grip beyond the tube, also its round radius.
    pub grip_pad: f64,
    /// Thickness of the back and seat rest panels.
    pub rest_thickness: f64,
    /// Radial sleeve added to rails and the footplate tube.
    pub tube_sleeve: f64,
    /// Round radius of the seat cushion.
    pub cushion_round_radius: f64,
    /// Tube radius of the push rim.
    pub wheel_handle_thickness: f64,
    /// Outer radius of the push rim.
    pub wheel_handle_radius: f64,
    /// Lateral inset of the outer push rim.
    pub wheel_handle_inset: f64,
    pub wheel_base_clearance: f64,
    pub axle_radius: f64,
    /// Axle length beyond the wheel base.
    pub axle_overhang: f64,
    pub spoke_radius: f64,
    pub spoke_count: u32,
    pub armrest_cushion_height: f64,
    pub armrest_pad_width: f64,
    /// Lateral gap between the armrest and the backrest tube.
    pub armrest_gap: f64,
    pub small_wheel_radius: f64,
    /// Tread tube radius of the caster wheel.
    pub small_wheel_thickness: f64,
    /// Thickness of the caster disc. Not scaled from inches.
    pub caster_disc_thickness: f64,
    pub front_wheel_grab_thickness: f64,
    pub caster_clip_radius: f64,
    /// Fork rake factor multiplying `cos(castorForkAngle)`.
    pub caster_rake: f64,
    pub caster_plate_width: f64,
    pub footplate_thickness: f64,
    pub footplate_round_radius: f64,
    /// Base length of the legrest hinge bar.
    pub hinge_bar_length: f64,
    /// Offset of the legrest hinge from the bend, also the bar's swing extension.
    pub hinge_offset: f64,
    /// Default segment count for circular primitives.
    pub segments: u32,
    pub caster_disc_segments: u32,
    pub push_handle_bend_segments: u32,
}

impl ChairConstants {
    pub const STANDARD: ChairConstants = ChairConstants {
        tube_radius: 0.6 * MM_PER_INCH,
        bend_radius: 2.0 * MM_PER_INCH,
        push_handle_length: 4.0 * MM_PER_INCH,
        grip_pad: 0.15 * MM_PER_INCH,
        rest_thickness: 0.1 * MM_PER_INCH,
        tube_sleeve: 0.1 * MM_PER_INCH,
        cushion_round_radius: 1.0 * MM_PER_INCH,
        wheel_handle_thickness: 0.65 * MM_PER_INCH,
        wheel_handle_radius: 11.5 * MM_PER_INCH,
        wheel_handle_inset: 0.25 * MM_PER_INCH,
        wheel_base_clearance: 1.0 * MM_PER_INCH,
        axle_radius: 0.5 * MM_PER_INCH,
        axle_overhang: 2.0 * MM_PER_INCH,
        spoke_radius: 0.15 * MM_PER_INCH,
        spoke_count: 24,
        armrest_cushion_height: 1.5 * MM_PER_INCH,
        armrest_pad_width: 2.0 * MM_PER_INCH,
        armrest_gap: 0.1 * MM_PER_INCH,
        small_wheel_radius: 4.0 * MM_PER_INCH,
        small_wheel_thickness: 0.9 * MM_PER_INCH,
        caster_disc_thickness: 0.1,
        front_wheel_grab_thickness: 0.25 * MM_PER_INCH,
        caster_clip_radius: 1.0 * MM_PER_INCH,
        caster_rake: 1.0 * MM_PER_INCH,
        caster_plate_width: 2.0 * MM_PER_INCH,
        footplate_thickness: 0.1 * MM_PER_INCH,
        footplate_round_radius: 0.01 * MM_PER_INCH,
        hinge_bar_length: 2.0 * MM_PER_INCH,
        hinge_offset: 1.0 * MM_PER_INCH,
        segments: 32,
        caster_disc_segments: 64,
        push_handle_bend_segments: 128,
    };
}

impl Default for ChairConstants {
    fn default() -> Self {
        Self::STANDARD
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_tube_radius_is_six_tenths_inch() {
        assert!((ChairConstants::STANDARD.tube_radius - 15.24).abs() < 1e-9);
    }

    #[test]
    fn spokes_divide_a_full_turn_evenly() {
        assert_eq!(360 % ChairConstants::STANDARD.spoke_count, 0);
    }
}
