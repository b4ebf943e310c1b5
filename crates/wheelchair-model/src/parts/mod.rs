//! Part builders.
//!
//! Each builder is a pure function of the resolved parameters, the derived
//! dimensions and the chair constants. Builders do not validate; degenerate
//! inputs produce trees the kernel will reject.

mod armrest;
mod back_wheel;
mod backrest;
mod front_wheel;
mod legrest;
mod seat;

pub use armrest::armrest;
pub use back_wheel::{back_wheel, back_wheel_structure, wheel_handle};
pub use backrest::{backrest, backrest_structure};
pub use front_wheel::front_wheel;
pub use legrest::legrest;
pub use seat::{seat_cushion, seatrest, seatrest_structure};

use chair_types::Side;

use crate::constants::ChairConstants;
use crate::derived::DerivedDimensions;
use crate::params::ResolvedParameters;

/// Inputs shared by every builder.
#[derive(Debug, Clone, Copy)]
pub struct PartContext<'a> {
    pub params: &'a ResolvedParameters,
    pub derived: &'a DerivedDimensions,
    pub constants: &'a ChairConstants,
}

impl<'a> PartContext<'a> {
    pub fn new(
        params: &'a ResolvedParameters,
        derived: &'a DerivedDimensions,
        constants: &'a ChairConstants,
    ) -> Self {
        Self {
            params,
            derived,
            constants,
        }
    }

    /// Lateral position of the frame rail on `side`.
    pub fn rail_y(&self, side: Side) -> f64 {
        let d = self.derived;
        d.wheel_base / 2.0 + side.sign() * (d.backrest_width / 2.0 + self.constants.tube_radius)
    }
}

#[cfg(test)]
pub(crate) mod fixtures {
    use super::*;
    use crate::params::ParameterRecord;

    /// Owned inputs for the default inch record.
    pub struct Fixture {
        pub params: ResolvedParameters,
        pub derived: DerivedDimensions,
        pub constants: ChairConstants,
    }

    impl Fixture {
        pub fn from_record(record: ParameterRecord) -> Self {
            let params = record.to_millimetres();
            let constants = ChairConstants::STANDARD;
            let derived = DerivedDimensions::resolve(&params, &constants);
            Self {
                params,
                derived,
                constants,
            }
        }

        pub fn ctx(&self) -> PartContext<'_> {
            PartContext::new(&self.params, &self.derived, &self.constants)
        }
    }

    pub fn defaults() -> Fixture {
        Fixture::from_record(ParameterRecord::default())
    }
}
