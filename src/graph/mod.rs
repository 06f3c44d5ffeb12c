//! Graph IR, dependency layering, and positioned graph construction.
//!
//! This module owns the node-and-wire representation the editor consumes.
//! [`build_graph`] turns a parsed [`ComponentTable`](crate::ComponentTable)
//! into nodes with deterministic canvas positions and edges tagged with
//! input-port handles. The layering step ([`assign_layers`]) is standalone:
//! it works on plain id/producer pairs and has no dependency on the parser.

mod build;
mod ir;
mod layering;

pub use build::{build_graph, X_SPACING, Y_SPACING};
pub use ir::{Edge, Graph, Node, NodeData, NodeType, Position};
pub use layering::{assign_layers, LayerMap};
