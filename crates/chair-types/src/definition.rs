use serde::{Deserialize, Serialize};

/// One entry of the parameter panel shown by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterDefinition {
    pub name: String,
    pub caption: String,
    #[serde(flatten)]
    pub control: Control,
}

/// The UI control for a parameter, tagged the way the host expects.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Control {
    Radio {
        values: Vec<u8>,
        captions: Vec<String>,
        initial: u8,
    },
    Group {
        initial: GroupState,
    },
    Float {
        initial: f64,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        min: Option<f64>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        max: Option<f64>,
    },
    Checkbox {
        checked: bool,
    },
}

/// Whether a parameter group starts expanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupState {
    Open,
    Closed,
}

impl ParameterDefinition {
    pub fn float(name: &str, caption: &str, initial: f64) -> Self {
        Self {
            name: name.to_string(),
            caption: caption.to_string(),
            control: Control::Float {
                initial,
                min: None,
                max: None,
            },
        }
    }

    pub fn bounded(name: &str, caption: &str, initial: f64, min: Option<f64>, max: Option<f64>) -> Self {
        Self {
            name: name.to_string(),
            caption: caption.to_string(),
            control: Control::Float { initial, min, max },
        }
    }

    pub fn checkbox(name: &str, caption: &str, checked: bool) -> Self {
        Self {
            name: name.to_string(),
            caption: caption.to_string(),
            control: Control::Checkbox { checked },
        }
    }

    pub fn group(name: &str, caption: &str, initial: GroupState) -> Self {
        Self {
            name: name.to_string(),
            caption: caption.to_string(),
            control: Control::Group { initial },
        }
    }

    /// Initial numeric value, if this is a float control.
    pub fn initial_float(&self) -> Option<f64> {
        match self.control {
            Control::Float { initial, .. } => Some(initial),
            _ => None,
        }
    }
}
