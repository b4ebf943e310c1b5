//! Parameter panel descriptors for the host.

use chair_types::{Control, GroupState, ParameterDefinition, Units};

use crate::params::{ParameterRecord, CAMBER_RANGE, MAX_CASTOR_FORK_ANGLE, MIN_SEAT_TO_BACKREST_ANGLE};

/// Ordered parameter descriptors. Length defaults are given in `units`.
pub fn parameter_definitions(units: Units) -> Vec<ParameterDefinition> {
    let d = ParameterRecord::defaults(units);
    let (camber_min, camber_max) = CAMBER_RANGE;

    vec![
        ParameterDefinition {
            name: "units".to_string(),
            caption: "Units:".to_string(),
            control: Control::Radio {
                values: vec![u8::from(Units::Inch), u8::from(Units::Millimetre)],
                captions: vec![
                    Units::Inch.caption().to_string(),
                    Units::Millimetre.caption().to_string(),
                ],
                initial: u8::from(units),
            },
        },
        ParameterDefinition::group("coreParameters", "Core Parameters", GroupState::Open),
        ParameterDefinition::float("seatWidth", "Seat Width:", d.seat_width),
        ParameterDefinition::float("seatHeight", "Seat Height:", d.seat_height),
        ParameterDefinition::float("wheelDiameter", "Wheel Diameter:", d.wheel_diameter),
        ParameterDefinition::float(
            "seatToFloorHeight",
            "Seat-to-Floor Height:",
            d.seat_to_floor_height,
        ),
        ParameterDefinition::bounded(
            "camberAngle",
            "Camber Angle:",
            d.camber_angle,
            Some(camber_min),
            Some(camber_max),
        ),
        ParameterDefinition::checkbox("showPushHandle", "Show Push Handle:", d.show_push_handle),
        ParameterDefinition::checkbox("showArmrest", "Show Armrest:", d.show_armrest),
        ParameterDefinition::group(
            "independentParameters",
            "Independent Parameters",
            GroupState::Closed,
        ),
        ParameterDefinition::float(
            "seatCushThick",
            "Seat Cushion Thickness:",
            d.seat_cushion_thickness,
        ),
        ParameterDefinition::float("legrestLength", "Legrest Length:", d.legrest_length),
        ParameterDefinition::float("legrestAngle", "Legrest Angle:", d.legrest_angle),
        ParameterDefinition::bounded(
            "seatToBackrestAngle",
            "Seat-to-Backrest Angle:",
            d.seat_to_backrest_angle,
            Some(MIN_SEAT_TO_BACKREST_ANGLE),
            None,
        ),
        ParameterDefinition::bounded(
            "castorForkAngle",
            "Castor Folk Angle:",
            d.castor_fork_angle,
            None,
            Some(MAX_CASTOR_FORK_ANGLE),
        ),
        ParameterDefinition::float(
            "footrestLinkLength",
            "Footrest Link Length:",
            d.footrest_link_length,
        ),
        ParameterDefinition::float("wheelThickness", "Back Wheel Width", d.wheel_thickness),
    ]
}
