//! Parameter records as the host sends them, and their millimetre form.

use chair_types::Units;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ModelError;

/// Flat parameter record. Lengths are in `units`, angles in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParameterRecord {
    #[serde(default)]
    pub units: Units,
    pub seat_width: f64,
    pub seat_height: f64,
    pub wheel_diameter: f64,
    pub seat_to_floor_height: f64,
    pub camber_angle: f64,
    pub show_push_handle: bool,
    pub show_armrest: bool,
    #[serde(rename = "seatCushThick")]
    pub seat_cushion_thickness: f64,
    pub legrest_length: f64,
    pub legrest_angle: f64,
    pub seat_to_backrest_angle: f64,
    pub castor_fork_angle: f64,
    pub footrest_link_length: f64,
    pub wheel_thickness: f64,
}

/// The record with every length converted to millimetres.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ResolvedParameters {
    pub seat_width: f64,
    pub seat_height: f64,
    pub wheel_diameter: f64,
    pub seat_to_floor_height: f64,
    pub camber_angle: f64,
    pub show_push_handle: bool,
    pub show_armrest: bool,
    pub seat_cushion_thickness: f64,
    pub legrest_length: f64,
    pub legrest_angle: f64,
    pub seat_to_backrest_angle: f64,
    pub castor_fork_angle: f64,
    pub footrest_link_length: f64,
    pub wheel_thickness: f64,
}

pub const CAMBER_RANGE: (f64, f64) = (0.0, 12.0);
pub const MIN_SEAT_TO_BACKREST_ANGLE: f64 = 90.0;
pub const MAX_CASTOR_FORK_ANGLE: f64 = 90.0;

impl ParameterRecord {
    /// Host defaults. Lengths are the inch defaults expressed in `units`.
    pub fn defaults(units: Units) -> Self {
        Self {
            units,
            seat_width: units.from_inches(16.0),
            seat_height: units.from_inches(20.0),
            wheel_diameter: units.from_inches(25.0),
            seat_to_floor_height: units.from_inches(21.0),
            camber_angle: 0.0,
            show_push_handle: true,
            show_armrest: true,
            seat_cushion_thickness: units.from_inches(4.0),
            legrest_length: units.from_inches(4.0),
            legrest_angle: 75.0,
            seat_to_backrest_angle: 90.0,
            castor_fork_angle: 90.0,
            footrest_link_length: units.from_inches(12.0),
            wheel_thickness: units.from_inches(1.5),
        }
    }

    /// Length fields with their host names.
    pub fn lengths(&self) -> [(&'static str, f64); 8] {
        [
            ("seatWidth", self.seat_width),
            ("seatHeight", self.seat_height),
            ("wheelDiameter", self.wheel_diameter),
            ("seatToFloorHeight", self.seat_to_floor_height),
            ("seatCushThick", self.seat_cushion_thickness),
            ("legrestLength", self.legrest_length),
            ("footrestLinkLength", self.footrest_link_length),
            ("wheelThickness", self.wheel_thickness),
        ]
    }

    /// Check every field against its declared domain.
    pub fn validate(&self) -> Result<(), ModelError> {
        for (name, value) in self.lengths() {
            if !value.is_finite() || value <= 0.0 {
                return Err(invalid(name, format!("must be a positive length, got {value}")));
            }
        }

        let angles = [
            ("camberAngle", self.camber_angle),
            ("legrestAngle", self.legrest_angle),
            ("seatToBackrestAngle", self.seat_to_backrest_angle),
            ("castorForkAngle", self.castor_fork_angle),
        ];
        for (name, value) in angles {
            if !value.is_finite() {
                return Err(invalid(name, format!("must be finite, got {value}")));
            }
        }

        let (camber_min, camber_max) = CAMBER_RANGE;
        if !(camber_min..=camber_max).contains(&self.camber_angle) {
            return Err(invalid(
                "camberAngle",
                format!(
                    "must lie in [{camber_min}, {camber_max}] degrees, got {}",
                    self.camber_angle
                ),
            ));
        }
        if self.seat_to_backrest_angle < MIN_SEAT_TO_BACKREST_ANGLE {
            return Err(invalid(
                "seatToBackrestAngle",
                format!(
                    "must be at least {MIN_SEAT_TO_BACKREST_ANGLE} degrees, got {}",
                    self.seat_to_backrest_angle
                ),
            ));
        }
        if !(0.0..=MAX_CASTOR_FORK_ANGLE).contains(&self.castor_fork_angle) {
            return Err(invalid(
                "castorForkAngle",
                format!(
                    "must lie in [0, {MAX_CASTOR_FORK_ANGLE}] degrees, got {}",
                    self.castor_fork_angle
                ),
            ));
        }
        if self.legrest_angle <= 0.0 {
            return Err(invalid(
                "legrestAngle",
                format!("must be positive, got {}", self.legrest_angle),
            ));
        }
        Ok(())
    }

    /// Convert every length to millimetres. Angles and toggles pass through.
    pub fn to_millimetres(&self) -> ResolvedParameters {
        let k = self.units.to_mm_factor();
        debug!(units = ?self.units, factor = k, "resolving parameters");
        ResolvedParameters {
            seat_width: self.seat_width * k,
            seat_height: self.seat_height * k,
            wheel_diameter: self.wheel_diameter * k,
            seat_to_floor_height: self.seat_to_floor_height * k,
            camber_angle: self.camber_angle,
            show_push_handle: self.show_push_handle,
            show_armrest: self.show_armrest,
            seat_cushion_thickness: self.seat_cushion_thickness * k,
            legrest_length: self.legrest_length * k,
            legrest_angle: self.legrest_angle,
            seat_to_backrest_angle: self.seat_to_backrest_angle,
            castor_fork_angle: self.castor_fork_angle,
            footrest_link_length: self.footrest_link_length * k,
            wheel_thickness: self.wheel_thickness * k,
        }
    }
}

impl Default for ParameterRecord {
    fn default() -> Self {
        Self::defaults(Units::Inch)
    }
}

fn invalid(name: &'static str, reason: String) -> ModelError {
    ModelError::InvalidParameter { name, reason }
}
