//! Graph IR exchanged with the editor.
//!
//! These types mirror the editor's JSON wire format field for field
//! (camelCase on the wire, e.g. `targetHandle`, `dutyCycle`). Positions are
//! display coordinates only; the emitter and the simulator never read them.

use serde::{Deserialize, Serialize};

/// A positioned circuit graph: the value exchanged with the editor.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Graph {
    /// One node per circuit component.
    pub nodes: Vec<Node>,
    /// One edge per resolved input-to-producer connection.
    pub edges: Vec<Edge>,
}

/// A single node in the editor graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Node {
    /// Stable component id.
    pub id: String,
    /// Which editor widget renders this node.
    #[serde(rename = "type")]
    pub node_type: NodeType,
    /// Display position.
    pub position: Position,
    /// Display label and source attributes.
    #[serde(default)]
    pub data: NodeData,
}

/// Editor widget kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum NodeType {
    /// Primary input pin
    Input,
    /// Terminal output pin
    Output,
    /// Clock source
    Clock,
    /// AND gate (dedicated shape in the editor)
    AndGate,
    /// Any other gate or a DFF (generic box; DFFs carry the label `DFF`)
    Default,
}

/// A node's canvas position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
}

/// Node payload: label plus clock attributes where applicable.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NodeData {
    /// Signal name for sources/outputs, gate keyword or `DFF` otherwise.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Clock period (opaque string, clock nodes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub period: Option<String>,
    /// Clock duty cycle (opaque string, clock nodes only).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duty_cycle: Option<String>,
}

impl NodeData {
    /// Label-only payload, the common case.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            label: Some(label.into()),
            ..Self::default()
        }
    }
}

/// A directed edge from a producer node to a consumer node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Edge {
    pub id: String,
    /// Producer node id.
    pub source: String,
    /// Consumer node id.
    pub target: String,
    /// Input port on the consumer: `a` for the first declared input, `b`
    /// for the second. Absent on edges into output nodes (single port).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub target_handle: Option<String>,
}
