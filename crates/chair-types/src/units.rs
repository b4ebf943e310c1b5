use serde::{Deserialize, Serialize};

/// Millimetres per inch.
pub const MM_PER_INCH: f64 = 25.4;

/// Unit system a parameter record is expressed in.
///
/// Only affects the values a user types and sees. Geometry is always built in
/// millimetres. On the wire this is the host's radio value: 0 = in, 1 = mm.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub enum Units {
    #[default]
    Inch,
    Millimetre,
}

impl Units {
    /// Caption shown next to the radio button.
    pub fn caption(self) -> &'static str {
        match self {
            Units::Inch => "in",
            Units::Millimetre => "mm",
        }
    }

    /// Factor converting a length in these units to millimetres.
    pub fn to_mm_factor(self) -> f64 {
        match self {
            Units::Inch => MM_PER_INCH,
            Units::Millimetre => 1.0,
        }
    }

    /// Convert an inch value into these units.
    pub fn from_inches(self, inches: f64) -> f64 {
        match self {
            Units::Inch => inches,
            Units::Millimetre => inches * MM_PER_INCH,
        }
    }
}

impl TryFrom<u8> for Units {
    type Error = String;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(Units::Inch),
            1 => Ok(Units::Millimetre),
            other => Err(format!("unknown unit system {other}, expected 0 (in) or 1 (mm)")),
        }
    }
}

impl From<Units> for u8 {
    fn from(units: Units) -> u8 {
        match units {
            Units::Inch => 0,
            Units::Millimetre => 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn units_round_trip_through_radio_value() {
        assert_eq!(Units::try_from(0).unwrap(), Units::Inch);
        assert_eq!(Units::try_from(1).unwrap(), Units::Millimetre);
        assert!(Units::try_from(2).is_err());
        assert_eq!(u8::from(Units::Millimetre), 1);
    }

    #[test]
    fn units_deserialize_from_number() {
        let units: Units = serde_json::from_str("1").unwrap();
        assert_eq!(units, Units::Millimetre);
        assert!(serde_json::from_str::<Units>("7").is_err());
    }

    #[test]
    fn from_inches_scales_only_metric() {
        assert_eq!(Units::Inch.from_inches(16.0), 16.0);
        assert!((Units::Millimetre.from_inches(16.0) - 406.4).abs() < 1e-9);
    }
}
