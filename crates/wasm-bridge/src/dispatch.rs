use base64::Engine as _;
use tracing::warn;
use wheelchair_model::parameter_definitions;

use crate::engine_state::{BridgeError, BridgeState};
use crate::messages::{HostToModel, ModelToHost};
use crate::stl_export::render_mesh_to_stl;

/// Dispatch a host message and return a response.
///
/// Any error is turned into a `ModelToHost::Error`.
pub fn dispatch(state: &mut BridgeState, msg: HostToModel) -> ModelToHost {
    match handle_message(state, msg) {
        Ok(response) => response,
        Err(e) => error_response(&e),
    }
}

/// Parse a JSON message, dispatch it and serialize the response.
pub fn process_json(state: &mut BridgeState, json_input: &str) -> String {
    let response = match serde_json::from_str::<HostToModel>(json_input) {
        Ok(msg) => dispatch(state, msg),
        Err(e) => error_response(&BridgeError::Parse {
            reason: e.to_string(),
        }),
    };
    to_json(&response)
}

pub(crate) fn to_json(response: &ModelToHost) -> String {
    serde_json::to_string(response).unwrap_or_else(|e| {
        let err = BridgeError::Serialization {
            reason: e.to_string(),
        };
        serde_json::json!({
            "type": "Error",
            "message": err.to_string(),
            "kind": err.kind(),
        })
        .to_string()
    })
}

fn error_response(e: &BridgeError) -> ModelToHost {
    warn!(kind = e.kind(), "{e}");
    ModelToHost::Error {
        message: e.to_string(),
        kind: e.kind().to_string(),
    }
}

fn handle_message(state: &mut BridgeState, msg: HostToModel) -> Result<ModelToHost, BridgeError> {
    match msg {
        HostToModel::GetParameterDefinitions { units } => Ok(ModelToHost::ParameterDefinitions {
            definitions: parameter_definitions(units),
        }),

        HostToModel::Generate { params } => Ok(ModelToHost::ModelGenerated {
            parts: state.generate(&params)?.to_vec(),
        }),

        HostToModel::ExportStl { params } => {
            let mesh = state.assembly_mesh(&params)?;
            let stl = render_mesh_to_stl(&mesh);
            Ok(ModelToHost::StlReady {
                data: base64::engine::general_purpose::STANDARD.encode(stl),
                triangle_count: mesh.triangle_count(),
            })
        }
    }
}
