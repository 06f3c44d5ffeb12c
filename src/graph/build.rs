//! Positioned graph construction from a parsed component table.

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use super::ir::{Edge, Graph, Node, NodeData, NodeType, Position};
use super::layering::assign_layers;
use crate::netlist::{Component, ComponentTable, GateKind};

/// Horizontal distance between adjacent layers.
pub const X_SPACING: f32 = 220.0;
/// Minimum vertical distance between nodes in the same layer.
pub const Y_SPACING: f32 = 100.0;

/// Build a positioned editor graph from a component table.
///
/// Every component becomes one node; every input signal slot whose producer
/// resolves becomes one edge tagged with the consumer's port handle (`a`,
/// `b`, ... in declared input order). Dangling signal references are
/// silently dropped. Output components land in one terminal layer after
/// everything else, each aligned to its producer.
///
/// Placement is a pure function of the table: the same netlist text always
/// yields identical coordinates. Coordinates are display-only - nothing
/// downstream reads them back.
pub fn build_graph(table: &ComponentTable) -> Graph {
    let sources: HashSet<String> = table
        .components()
        .iter()
        .filter(|c| c.is_source())
        .map(|c| c.id().to_string())
        .collect();

    // Resolve each non-output component's input signals to producer ids and
    // layer the result. Outputs are excluded here; they get the terminal
    // layer below.
    let deps: Vec<(String, Vec<String>)> = table
        .components()
        .iter()
        .filter(|c| !c.is_output())
        .map(|c| (c.id().to_string(), resolve_producers(table, c)))
        .collect();
    let layers = assign_layers(&deps, &sources);

    // Group components per layer, keeping declaration order within a layer.
    let max_layer = layers.max_layer() as usize;
    let mut by_layer: Vec<Vec<&Component>> = vec![Vec::new(); max_layer + 1];
    for component in table.components().iter().filter(|c| !c.is_output()) {
        if let Some(layer) = layers.get(component.id()) {
            by_layer[layer as usize].push(component);
        }
    }

    let mut positions: HashMap<&str, Position> = HashMap::new();
    let mut nodes = Vec::with_capacity(table.len());

    for (layer, members) in by_layer.iter().enumerate() {
        // Desired Y: average of already-placed producers, else a stacked
        // default. Computed for the whole layer before anything in it is
        // placed, so same-layer neighbors never attract each other.
        let desired: Vec<(&Component, f32)> = members
            .iter()
            .enumerate()
            .map(|(index, component)| {
                let mut y = index as f32 * Y_SPACING + 50.0;
                if layer > 0 {
                    let placed: Vec<f32> = resolve_producers(table, component)
                        .iter()
                        .filter_map(|id| positions.get(id.as_str()))
                        .map(|p| p.y)
                        .collect();
                    if !placed.is_empty() {
                        y = placed.iter().sum::<f32>() / placed.len() as f32;
                    }
                }
                (*component, y)
            })
            .collect();

        for (component, y) in spaced(desired) {
            let position = Position {
                x: layer as f32 * X_SPACING,
                y,
            };
            positions.insert(component.id(), position);
            nodes.push(make_node(component, position));
        }
    }

    // Terminal layer: outputs aligned to their single producer.
    let output_x = (max_layer + 1) as f32 * X_SPACING;
    let desired: Vec<(&Component, f32)> = table
        .components()
        .iter()
        .filter(|c| c.is_output())
        .map(|component| {
            let y = table
                .producer_of(component.label())
                .and_then(|id| positions.get(id))
                .map(|p| p.y)
                .unwrap_or(0.0);
            (component, y)
        })
        .collect();
    for (component, y) in spaced(desired) {
        nodes.push(make_node(component, Position { x: output_x, y }));
    }

    Graph {
        nodes,
        edges: build_edges(table),
    }
}

/// Producer component ids for each of `component`'s input signals, dropping
/// dangling references.
fn resolve_producers(table: &ComponentTable, component: &Component) -> Vec<String> {
    component
        .input_signals()
        .iter()
        .filter_map(|signal| table.producer_of(signal))
        .map(str::to_string)
        .collect()
}

/// Sort by desired Y and greedily push down to enforce the minimum vertical
/// spacing, preserving relative order among ties.
fn spaced(mut desired: Vec<(&Component, f32)>) -> Vec<(&Component, f32)> {
    desired.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(Ordering::Equal));
    let mut last_y = f32::NEG_INFINITY;
    for slot in &mut desired {
        slot.1 = slot.1.max(last_y + Y_SPACING);
        last_y = slot.1;
    }
    desired
}

fn make_node(component: &Component, position: Position) -> Node {
    let (node_type, data) = match component {
        Component::Input { name, .. } => (NodeType::Input, NodeData::labeled(name)),
        Component::Output { name, .. } => (NodeType::Output, NodeData::labeled(name)),
        Component::Clock {
            name,
            period,
            duty_cycle,
            ..
        } => (
            NodeType::Clock,
            NodeData {
                label: Some(name.clone()),
                period: Some(period.clone()),
                duty_cycle: Some(duty_cycle.clone()),
            },
        ),
        Component::Gate { kind, .. } => {
            let node_type = if *kind == GateKind::And {
                NodeType::AndGate
            } else {
                NodeType::Default
            };
            (node_type, NodeData::labeled(kind.keyword()))
        }
        Component::Dff { .. } => (NodeType::Default, NodeData::labeled("DFF")),
    };

    Node {
        id: component.id().to_string(),
        node_type,
        position,
        data,
    }
}

fn build_edges(table: &ComponentTable) -> Vec<Edge> {
    let mut edges = Vec::new();

    for component in table.components().iter().filter(|c| !c.is_output()) {
        for (index, signal) in component.input_signals().iter().enumerate() {
            let Some(source) = table.producer_of(signal) else {
                continue;
            };
            let handle = port_handle(index);
            edges.push(Edge {
                id: format!("e-{source}-{}-{handle}", component.id()),
                source: source.to_string(),
                target: component.id().to_string(),
                target_handle: Some(handle),
            });
        }
    }

    // Output nodes have a single implicit port, so no handle.
    for component in table.components().iter().filter(|c| c.is_output()) {
        let Some(source) = table.producer_of(component.label()) else {
            continue;
        };
        edges.push(Edge {
            id: format!("e-{source}-{}", component.id()),
            source: source.to_string(),
            target: component.id().to_string(),
            target_handle: None,
        });
    }

    edges
}

/// Port handles are letters in declared input order: 0 -> `a`, 1 -> `b`.
fn port_handle(index: usize) -> String {
    char::from(b'a' + index as u8).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::netlist::parse;
    use approx::assert_relative_eq;

    const DEMO: &str = "CIRCUIT demo\nINPUT a\nINPUT b\nOUTPUT y\nGATE g1 AND a b y";

    fn node<'g>(graph: &'g Graph, id: &str) -> &'g Node {
        graph
            .nodes
            .iter()
            .find(|n| n.id == id)
            .unwrap_or_else(|| panic!("node {id} missing"))
    }

    #[test]
    fn demo_circuit_layout() {
        let graph = build_graph(&parse(DEMO));

        assert_eq!(graph.nodes.len(), 4);
        assert_eq!(graph.edges.len(), 3);

        let a = node(&graph, "input-a");
        let b = node(&graph, "input-b");
        let g1 = node(&graph, "g1");
        let y = node(&graph, "output-y");

        assert_eq!(a.node_type, NodeType::Input);
        assert_eq!(g1.node_type, NodeType::AndGate);
        assert_eq!(y.node_type, NodeType::Output);

        // Inputs in layer 0, gate in layer 1, output in the terminal layer
        assert_eq!(a.position.x, 0.0);
        assert_eq!(b.position.x, 0.0);
        assert_eq!(g1.position.x, X_SPACING);
        assert_eq!(y.position.x, 2.0 * X_SPACING);

        // Gate centers on its producers, output aligns with the gate
        assert_relative_eq!(a.position.y, 50.0);
        assert_relative_eq!(b.position.y, 150.0);
        assert_relative_eq!(g1.position.y, (a.position.y + b.position.y) / 2.0);
        assert_relative_eq!(y.position.y, g1.position.y);
    }

    #[test]
    fn port_handles_follow_declared_input_order() {
        let graph = build_graph(&parse(DEMO));

        let from_a = graph.edges.iter().find(|e| e.source == "input-a").unwrap();
        let from_b = graph.edges.iter().find(|e| e.source == "input-b").unwrap();
        assert_eq!(from_a.target_handle.as_deref(), Some("a"));
        assert_eq!(from_b.target_handle.as_deref(), Some("b"));

        // Swapping the operand order swaps the handles
        let swapped = build_graph(&parse("INPUT a\nINPUT b\nGATE g1 AND b a y"));
        let from_a = swapped.edges.iter().find(|e| e.source == "input-a").unwrap();
        assert_eq!(from_a.target_handle.as_deref(), Some("b"));
    }

    #[test]
    fn output_edge_has_no_handle() {
        let graph = build_graph(&parse(DEMO));
        let into_y = graph.edges.iter().find(|e| e.target == "output-y").unwrap();
        assert_eq!(into_y.source, "g1");
        assert_eq!(into_y.target_handle, None);
    }

    #[test]
    fn dangling_references_produce_no_edge() {
        let graph = build_graph(&parse("INPUT a\nGATE g1 AND a ghost y"));
        assert_eq!(graph.edges.len(), 1);
        assert_eq!(graph.edges[0].source, "input-a");
    }

    #[test]
    fn build_is_deterministic() {
        let text = "CIRCUIT c\nINPUT a b c d\nCLOCK clk PERIOD 4 DUTY 0.5\n\
                    GATE g1 AND a b w1\nGATE g2 OR c d w2\nGATE g3 XOR w1 w2 y\n\
                    DFF dff1 y clk q\nOUTPUT q";
        let first = serde_json::to_string(&build_graph(&parse(text))).unwrap();
        let second = serde_json::to_string(&build_graph(&parse(text))).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn minimum_spacing_is_enforced_within_a_layer() {
        // Both gates consume the same inputs, so they want the same Y
        let graph = build_graph(&parse(
            "INPUT a b\nGATE g1 AND a b x\nGATE g2 OR a b y",
        ));
        let g1 = node(&graph, "g1");
        let g2 = node(&graph, "g2");
        assert!((g2.position.y - g1.position.y).abs() >= Y_SPACING);
    }

    #[test]
    fn cycle_nodes_share_a_column() {
        let graph = build_graph(&parse(
            "INPUT a\nGATE g1 NAND a q2 q1\nGATE g2 NAND a q1 q2",
        ));
        let g1 = node(&graph, "g1");
        let g2 = node(&graph, "g2");
        assert_eq!(g1.position.x, g2.position.x);
        assert!(g1.position.x > 0.0);
    }

    #[test]
    fn clock_attributes_reach_node_data() {
        let graph = build_graph(&parse("CLOCK clk PERIOD 8 DUTY 0.25"));
        let clk = node(&graph, "clock-clk");
        assert_eq!(clk.node_type, NodeType::Clock);
        assert_eq!(clk.data.period.as_deref(), Some("8"));
        assert_eq!(clk.data.duty_cycle.as_deref(), Some("0.25"));
    }
}
