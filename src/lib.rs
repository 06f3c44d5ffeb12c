//! # Netgrid Core
//!
//! Bidirectional translator between a textual circuit netlist and a
//! positioned node-and-wire graph, for a digital logic circuit editor.
//!
//! This library provides:
//! - A line-oriented netlist DSL parser for gate-level circuits
//! - A deterministic, cycle-tolerant layered layout of the parsed circuit
//! - A graph IR (nodes with positions, edges with input-port handles)
//!   matching the editor's JSON wire format
//! - A netlist emitter that turns an edited graph back into text
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`netlist`] - Parser for the netlist description language
//! - [`graph`] - Graph IR, dependency layering, and positioned graph building
//! - [`emit`] - Netlist text regeneration from a graph
//! - [`sim`] - Request/response types for the external simulator service
//!
//! ## Usage
//!
//! ```
//! use netgrid_core::{emit_netlist, graph, netlist};
//!
//! let text = "CIRCUIT demo\nINPUT a b\nOUTPUT y\nGATE g1 AND a b y";
//! let table = netlist::parse(text);
//! let g = graph::build_graph(&table);
//! let regenerated = emit_netlist(&g, "demo");
//! assert!(regenerated.contains("GATE g1 AND a b y"));
//! ```
//!
//! ## Conversion model
//!
//! Both directions are pure, synchronous functions that rebuild their result
//! wholesale on every call; the translator holds no state between
//! invocations. Malformed netlist lines and dangling signal references never
//! abort a conversion - they simply contribute no component or no edge, and
//! the result is a partial graph or partial netlist. Strict syntax error
//! reporting belongs to the editor's separate validator pass.
//!
//! The two directions are not byte-for-byte inverses (the emitter renumbers
//! gate ids and may synthesize internal wire names) but are semantically
//! equivalent: re-parsing emitted text yields the same component kinds and
//! the same resolved-signal connectivity.

pub mod emit;
pub mod error;
pub mod graph;
pub mod netlist;
pub mod sim;

// Re-export main types for convenience
pub use emit::emit_netlist;
pub use error::{NetgridError, Result};
pub use graph::{build_graph, Graph};
pub use netlist::ComponentTable;

// WASM bindings
#[cfg(feature = "wasm")]
mod wasm;

/// Circuit name used when the caller does not supply one.
pub const DEFAULT_CIRCUIT_NAME: &str = "my_circuit";
