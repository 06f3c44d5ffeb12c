//! WASM bindings for Netgrid Core.
//!
//! The editor front-end runs both conversion directions in the browser;
//! these bindings expose them over JSON strings so no custom marshalling is
//! needed on the JavaScript side.
//!
//! ## Usage (JavaScript)
//!
//! ```javascript
//! import init, { netlist_to_graph, graph_to_netlist } from 'netgrid_core';
//!
//! await init();
//!
//! const { nodes, edges } = JSON.parse(netlist_to_graph(netlistText));
//! // ... user edits the graph ...
//! const text = graph_to_netlist(JSON.stringify({ nodes, edges }), 'my_circuit');
//! ```

use wasm_bindgen::prelude::*;

use crate::graph::{build_graph, Graph};
use crate::{emit_netlist, netlist};

/// Initialize panic hook for better error messages in browser console.
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Convert netlist text into the editor's graph JSON.
///
/// Never fails on malformed netlist text - unparsable lines simply
/// contribute no nodes, matching the library behavior.
#[wasm_bindgen]
pub fn netlist_to_graph(netlist_text: &str) -> Result<String, JsValue> {
    let graph = build_graph(&netlist::parse(netlist_text));
    serde_json::to_string(&graph).map_err(|e| JsValue::from_str(&e.to_string()))
}

/// Convert editor graph JSON back into netlist text.
///
/// # Arguments
/// * `graph_json` - `{nodes, edges}` in the editor's wire format
/// * `circuit_name` - Name for the leading CIRCUIT line
#[wasm_bindgen]
pub fn graph_to_netlist(graph_json: &str, circuit_name: &str) -> Result<String, JsValue> {
    let graph: Graph =
        serde_json::from_str(graph_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
    Ok(emit_netlist(&graph, circuit_name))
}

/// Get the library version.
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}
