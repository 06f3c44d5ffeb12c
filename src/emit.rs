//! Netlist text regeneration from an editor graph.
//!
//! The emitter walks graph nodes and edges and produces canonical netlist
//! text: declarations first (clocks, inputs, outputs, synthesized internal
//! signals), then one GATE or DFF line per logic node. Gate and flip-flop
//! ids are renumbered (`g1`, `dff1`, ...) and internal wires are named
//! `w1`, `w2`, ... - all counters live inside one emit call, so repeated
//! calls are independent.
//!
//! Incomplete graphs degrade instead of failing: a gate with no resolved
//! inputs or a DFF missing either port is simply left out of the text.

use std::collections::HashMap;

use crate::graph::{Edge, Graph, Node, NodeType};

/// Default clock attributes when an edited clock node carries none.
const DEFAULT_CLOCK_PERIOD: &str = "2";
const DEFAULT_CLOCK_DUTY: &str = "0.5";

/// Fresh-name counter scoped to a single emit call.
struct WireNamer {
    next: u32,
}

impl WireNamer {
    fn new() -> Self {
        Self { next: 1 }
    }

    fn fresh(&mut self) -> String {
        let name = format!("w{}", self.next);
        self.next += 1;
        name
    }
}

/// Regenerate netlist text from a graph.
///
/// The result always parses back through [`crate::netlist::parse`] into a
/// component table structurally equivalent to the graph (same component
/// kinds, same resolved-signal connectivity), independent of the cosmetic
/// names chosen for synthesized wires.
pub fn emit_netlist(graph: &Graph, circuit_name: &str) -> String {
    let mut lines = vec![format!("CIRCUIT {circuit_name}")];
    let mut wires = WireNamer::new();

    // Node id -> name of the signal that node drives.
    let mut signal_map: HashMap<&str, String> = HashMap::new();
    let mut internal_signals: Vec<String> = Vec::new();

    let is_dff = |n: &Node| {
        n.node_type == NodeType::Default
            && n.data
                .label
                .as_deref()
                .is_some_and(|l| l.eq_ignore_ascii_case("DFF"))
    };
    let is_gate = |n: &Node| {
        matches!(n.node_type, NodeType::AndGate | NodeType::Default) && !is_dff(n)
    };

    let clocks: Vec<&Node> = select(graph, |n| n.node_type == NodeType::Clock);
    let inputs: Vec<&Node> = select(graph, |n| n.node_type == NodeType::Input);
    let outputs: Vec<&Node> = select(graph, |n| n.node_type == NodeType::Output);
    let gates: Vec<&Node> = select(graph, is_gate);
    let dffs: Vec<&Node> = select(graph, is_dff);

    for node in &clocks {
        let name = named_or_fresh(node, &mut wires);
        let period = node.data.period.as_deref().unwrap_or(DEFAULT_CLOCK_PERIOD);
        let duty = node.data.duty_cycle.as_deref().unwrap_or(DEFAULT_CLOCK_DUTY);
        lines.push(format!("CLOCK {name} PERIOD {period} DUTY {duty}"));
        signal_map.insert(&node.id, name);
    }

    for node in &inputs {
        let name = named_or_fresh(node, &mut wires);
        lines.push(format!("INPUT {name}"));
        signal_map.insert(&node.id, name);
    }

    // Output sinks consume a signal named after them; remember the resolved
    // name so a directly-wired gate can reuse it below.
    let mut output_names: HashMap<&str, String> = HashMap::new();
    for node in &outputs {
        let name = named_or_fresh(node, &mut wires);
        lines.push(format!("OUTPUT {name}"));
        output_names.insert(&node.id, name);
    }

    // Name every gate/DFF output: reuse the OUTPUT name when any outgoing
    // edge reaches an output sink, otherwise synthesize a wire. A fan-out
    // node may feed other gates as well; those consumers resolve through
    // the same name either way.
    for node in gates.iter().chain(&dffs) {
        let wired_output = graph
            .edges
            .iter()
            .filter(|e| e.source == node.id)
            .find_map(|e| output_names.get(e.target.as_str()));

        let name = match wired_output {
            Some(name) => name.clone(),
            None => {
                let wire = wires.fresh();
                internal_signals.push(wire.clone());
                wire
            }
        };
        signal_map.insert(&node.id, name);
    }

    for wire in &internal_signals {
        lines.push(format!("SIGNAL {wire}"));
    }

    lines.push(String::new());

    let mut gate_counter = 1u32;
    for node in &gates {
        let gate_id = format!("g{gate_counter}");
        gate_counter += 1;

        // Without a label there is no gate type to emit
        let Some(gate_type) = node.data.label.as_deref() else {
            continue;
        };

        let mut input_edges: Vec<&Edge> =
            graph.edges.iter().filter(|e| e.target == node.id).collect();
        input_edges.sort_by(|a, b| a.target_handle.cmp(&b.target_handle));
        let input_signals: Vec<&str> = input_edges
            .iter()
            .filter_map(|e| signal_map.get(e.source.as_str()))
            .map(String::as_str)
            .collect();

        // A gate with zero resolved inputs is dropped from the text
        if input_signals.is_empty() {
            continue;
        }
        let output = &signal_map[node.id.as_str()];
        lines.push(format!(
            "GATE {gate_id} {} {} {output}",
            gate_type.to_ascii_uppercase(),
            input_signals.join(" "),
        ));
    }

    let mut dff_counter = 1u32;
    for node in &dffs {
        let dff_id = format!("dff{dff_counter}");
        dff_counter += 1;

        let data = resolve_port(graph, &signal_map, &node.id, "a");
        let clock = resolve_port(graph, &signal_map, &node.id, "b");
        let (Some(data), Some(clock)) = (data, clock) else {
            continue;
        };
        let output = &signal_map[node.id.as_str()];
        lines.push(format!("DFF {dff_id} {data} {clock} {output}"));
    }

    lines.join("\n")
}

fn select<'g>(graph: &'g Graph, pred: impl Fn(&Node) -> bool) -> Vec<&'g Node> {
    graph.nodes.iter().filter(|n| pred(n)).collect()
}

/// A node's label, or a fresh internal name when the editor left it blank.
fn named_or_fresh(node: &Node, wires: &mut WireNamer) -> String {
    match node.data.label.as_deref() {
        Some(label) if !label.is_empty() => label.to_string(),
        _ => wires.fresh(),
    }
}

/// Signal name feeding the given port of `target`, if the edge exists and
/// its source drives a known signal.
fn resolve_port<'m>(
    graph: &Graph,
    signal_map: &'m HashMap<&str, String>,
    target: &str,
    handle: &str,
) -> Option<&'m str> {
    let edge = graph
        .edges
        .iter()
        .find(|e| e.target == target && e.target_handle.as_deref() == Some(handle))?;
    signal_map.get(edge.source.as_str()).map(String::as_str)
}
