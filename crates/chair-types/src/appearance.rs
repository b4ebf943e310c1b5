use serde::{Deserialize, Serialize};

/// Linear RGB color in [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgb(pub [f32; 3]);

/// Named colors used by the model. Values follow the CSS color table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Silver,
    DimGrey,
}

impl Color {
    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Silver => "silver",
            Color::DimGrey => "dimgrey",
        }
    }

    pub fn rgb(self) -> Rgb {
        let [r, g, b] = match self {
            Color::Black => [0u8, 0, 0],
            Color::Silver => [192, 192, 192],
            Color::DimGrey => [105, 105, 105],
        };
        Rgb([r as f32 / 255.0, g as f32 / 255.0, b as f32 / 255.0])
    }
}
