use serde::{Deserialize, Serialize};

/// Coordinate axis for rotations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
    Z,
}

/// Lateral side of a mirrored part. Left is the side nearer the world origin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Side {
    Left,
    Right,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::Left, Side::Right];

    /// Sign applied to lateral offsets that grow away from the seat center.
    pub fn sign(self) -> f64 {
        match self {
            Side::Left => -1.0,
            Side::Right => 1.0,
        }
    }
}

/// The top-level parts of the assembly, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum PartKind {
    SeatCushion,
    Backrest,
    Seatrest,
    BackWheels,
    WheelHandles,
    Armrests,
    FrontWheels,
    Legrests,
}

impl PartKind {
    pub const ALL: [PartKind; 8] = [
        PartKind::SeatCushion,
        PartKind::Backrest,
        PartKind::Seatrest,
        PartKind::BackWheels,
        PartKind::WheelHandles,
        PartKind::Armrests,
        PartKind::FrontWheels,
        PartKind::Legrests,
    ];

    pub fn label(self) -> &'static str {
        match self {
            PartKind::SeatCushion => "seat cushion",
            PartKind::Backrest => "backrest",
            PartKind::Seatrest => "seatrest",
            PartKind::BackWheels => "back wheels",
            PartKind::WheelHandles => "wheel handles",
            PartKind::Armrests => "armrests",
            PartKind::FrontWheels => "front wheels",
            PartKind::Legrests => "legrests",
        }
    }
}

impl std::fmt::Display for PartKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}
