//! Component table types for parsed netlists.

use std::collections::HashMap;
use std::fmt;

/// Gate types supported by the netlist DSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GateKind {
    And,
    Or,
    Not,
    Nand,
    Nor,
    Xor,
    Xnor,
}

impl GateKind {
    /// Parse a gate kind from its netlist keyword (case-insensitive).
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_ascii_uppercase().as_str() {
            "AND" => Some(Self::And),
            "OR" => Some(Self::Or),
            "NOT" => Some(Self::Not),
            "NAND" => Some(Self::Nand),
            "NOR" => Some(Self::Nor),
            "XOR" => Some(Self::Xor),
            "XNOR" => Some(Self::Xnor),
            _ => None,
        }
    }

    /// Number of input signals this gate kind takes.
    pub fn input_count(&self) -> usize {
        match self {
            Self::Not => 1,
            _ => 2,
        }
    }

    /// The canonical netlist keyword for this gate kind.
    pub fn keyword(&self) -> &'static str {
        match self {
            Self::And => "AND",
            Self::Or => "OR",
            Self::Not => "NOT",
            Self::Nand => "NAND",
            Self::Nor => "NOR",
            Self::Xor => "XOR",
            Self::Xnor => "XNOR",
        }
    }
}

impl fmt::Display for GateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// A circuit component declared by the netlist.
///
/// Each variant owns the signal names it reads and produces; the component
/// id is distinct from those names. Inputs and clocks are source components
/// (no incoming dependencies), outputs are terminal sinks.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    /// Primary input, produces the signal named after it.
    Input { id: String, name: String },
    /// Terminal sink, consumes the signal named after it.
    Output { id: String, name: String },
    /// Clock source. Period and duty cycle are carried as opaque strings;
    /// they are interpreted by the simulator, not by the translator.
    Clock {
        id: String,
        name: String,
        period: String,
        duty_cycle: String,
    },
    /// Logic gate with one (NOT) or two input signals.
    Gate {
        id: String,
        kind: GateKind,
        inputs: Vec<String>,
        output: String,
    },
    /// D flip-flop: data and clock in, one output.
    Dff {
        id: String,
        data: String,
        clock: String,
        output: String,
    },
}

impl Component {
    /// The component's stable id (declared for gates/DFFs, synthesized
    /// `input-<name>`/`clock-<name>`/`output-<name>` otherwise).
    pub fn id(&self) -> &str {
        match self {
            Self::Input { id, .. }
            | Self::Output { id, .. }
            | Self::Clock { id, .. }
            | Self::Gate { id, .. }
            | Self::Dff { id, .. } => id,
        }
    }

    /// Display label: the signal name for sources and outputs, the gate
    /// keyword for gates, `DFF` for flip-flops.
    pub fn label(&self) -> &str {
        match self {
            Self::Input { name, .. } | Self::Output { name, .. } | Self::Clock { name, .. } => name,
            Self::Gate { kind, .. } => kind.keyword(),
            Self::Dff { .. } => "DFF",
        }
    }

    /// Input signal names in declared port order.
    pub fn input_signals(&self) -> Vec<&str> {
        match self {
            Self::Input { .. } | Self::Clock { .. } => Vec::new(),
            Self::Output { name, .. } => vec![name.as_str()],
            Self::Gate { inputs, .. } => inputs.iter().map(String::as_str).collect(),
            Self::Dff { data, clock, .. } => vec![data.as_str(), clock.as_str()],
        }
    }

    /// The signal this component produces, if any.
    pub fn output_signal(&self) -> Option<&str> {
        match self {
            Self::Input { name, .. } | Self::Clock { name, .. } => Some(name),
            Self::Gate { output, .. } | Self::Dff { output, .. } => Some(output),
            Self::Output { .. } => None,
        }
    }

    /// Whether this is a source component (primary input or clock).
    pub fn is_source(&self) -> bool {
        matches!(self, Self::Input { .. } | Self::Clock { .. })
    }

    /// Whether this is a terminal output sink.
    pub fn is_output(&self) -> bool {
        matches!(self, Self::Output { .. })
    }
}

/// Ordered table of parsed components plus the signal→producer index.
///
/// Components keep declaration order. Re-declaring a component id replaces
/// the earlier declaration in place; re-declaring a signal producer lets the
/// later declaration win (the earlier producer is shadowed). Neither case is
/// an error here - flagging them is the validator's job.
#[derive(Debug, Clone, Default)]
pub struct ComponentTable {
    /// Name from the CIRCUIT declaration, if present.
    pub circuit_name: Option<String>,
    components: Vec<Component>,
    index: HashMap<String, usize>,
    producers: HashMap<String, String>,
}

impl ComponentTable {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a component, replacing any earlier declaration of the same id.
    pub fn push(&mut self, component: Component) {
        let id = component.id().to_string();
        match self.index.get(&id) {
            Some(&slot) => self.components[slot] = component,
            None => {
                self.index.insert(id, self.components.len());
                self.components.push(component);
            }
        }
    }

    /// Record `id` as the producer of `signal`. Last registration wins.
    pub fn record_producer(&mut self, signal: &str, id: &str) {
        self.producers.insert(signal.to_string(), id.to_string());
    }

    /// Components in declaration order.
    pub fn components(&self) -> &[Component] {
        &self.components
    }

    /// Look up a component by id.
    pub fn get(&self, id: &str) -> Option<&Component> {
        self.index.get(id).map(|&slot| &self.components[slot])
    }

    /// The id of the component producing `signal`, if any.
    pub fn producer_of(&self, signal: &str) -> Option<&str> {
        self.producers.get(signal).map(String::as_str)
    }

    /// Number of components in the table.
    pub fn len(&self) -> usize {
        self.components.len()
    }

    /// Whether the table holds no components.
    pub fn is_empty(&self) -> bool {
        self.components.is_empty()
    }
}
