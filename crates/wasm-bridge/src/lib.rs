//! Host bridge for the wheelchair model.
//!
//! The host (a web worker in the browser build) talks to the model with JSON
//! messages tagged by `type`. [`dispatch::process_json`] is the native
//! equivalent of the `process_message` export in [`wasm_api`].

pub mod dispatch;
pub mod engine_state;
pub mod messages;
pub mod stl_export;

#[cfg(target_arch = "wasm32")]
pub mod wasm_api;

pub use dispatch::{dispatch, process_json};
pub use engine_state::{BridgeError, BridgeState};
pub use messages::{HostToModel, ModelToHost, PartMesh};
