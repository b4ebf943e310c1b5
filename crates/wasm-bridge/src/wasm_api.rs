//! WASM entry points for the web worker.
//!
//! Only compiled for `wasm32`.

use std::cell::RefCell;

use chair_types::Units;
use wasm_bindgen::prelude::*;

use crate::dispatch::{self, to_json};
use crate::engine_state::BridgeState;
use crate::messages::ModelToHost;

// The web worker is single-threaded.
thread_local! {
    static BRIDGE_STATE: RefCell<Option<BridgeState>> = const { RefCell::new(None) };
}

fn with_state<R>(f: impl FnOnce(&mut BridgeState) -> R) -> R {
    BRIDGE_STATE.with(|cell| f(cell.borrow_mut().get_or_insert_with(BridgeState::new)))
}

/// Install the panic hook and reset the bridge state.
#[wasm_bindgen]
pub fn init() {
    console_error_panic_hook::set_once();
    BRIDGE_STATE.with(|cell| *cell.borrow_mut() = Some(BridgeState::new()));
}

/// Process a JSON `HostToModel` message and return a JSON `ModelToHost`.
#[wasm_bindgen]
pub fn process_message(json_input: &str) -> String {
    with_state(|state| dispatch::process_json(state, json_input))
}

/// Parameter panel as JSON. `units` is the radio value: 0 = in, 1 = mm.
#[wasm_bindgen]
pub fn get_parameter_definitions(units: u8) -> String {
    let response = match Units::try_from(units) {
        Ok(units) => ModelToHost::ParameterDefinitions {
            definitions: wheelchair_model::parameter_definitions(units),
        },
        Err(message) => ModelToHost::Error {
            message,
            kind: "parse".to_string(),
        },
    };
    to_json(&response)
}
