use chair_types::{Color, ParameterDefinition, PartKind, Rgb, Units};
use serde::{Deserialize, Serialize};
use shape_kernel::RenderMesh;
use wheelchair_model::ParameterRecord;

/// Messages sent from the host to the model.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum HostToModel {
    /// Ask for the parameter panel, with length defaults in `units`.
    GetParameterDefinitions {
        #[serde(default)]
        units: Units,
    },
    /// Build and tessellate every part.
    Generate { params: ParameterRecord },
    /// Build the whole assembly and return it as binary STL.
    ExportStl { params: ParameterRecord },
}

/// Messages sent from the model back to the host.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ModelToHost {
    ParameterDefinitions {
        definitions: Vec<ParameterDefinition>,
    },
    /// One entry per part in assembly order.
    ModelGenerated { parts: Vec<PartMesh> },
    StlReady {
        /// Base64-encoded binary STL.
        data: String,
        triangle_count: usize,
    },
    Error {
        message: String,
        /// Machine-readable error class.
        kind: String,
    },
}

/// A tessellated part. `mesh` is absent for hidden armrests.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartMesh {
    pub kind: PartKind,
    pub color: Color,
    pub rgb: Rgb,
    pub mesh: Option<RenderMesh>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn host_messages_are_type_tagged() {
        let msg: HostToModel =
            serde_json::from_str(r#"{"type":"GetParameterDefinitions","units":1}"#).unwrap();
        assert!(matches!(
            msg,
            HostToModel::GetParameterDefinitions {
                units: Units::Millimetre
            }
        ));

        let msg: HostToModel = serde_json::from_str(r#"{"type":"GetParameterDefinitions"}"#).unwrap();
        assert!(matches!(
            msg,
            HostToModel::GetParameterDefinitions { units: Units::Inch }
        ));
    }

    #[test]
    fn error_response_shape() {
        let json = serde_json::to_value(ModelToHost::Error {
            message: "bad".into(),
            kind: "parse".into(),
        })
        .unwrap();
        assert_eq!(json["type"], "Error");
        assert_eq!(json["kind"], "parse");
    }
}
