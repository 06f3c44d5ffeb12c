//! Parser for the netlist DSL.

use super::table::{Component, ComponentTable, GateKind};

/// Default clock period, in simulation steps, when a CLOCK line omits PERIOD.
const DEFAULT_CLOCK_PERIOD: &str = "2";
/// Default clock duty cycle when a CLOCK line omits DUTY.
const DEFAULT_CLOCK_DUTY: &str = "0.5";

/// Parse netlist text into a [`ComponentTable`].
///
/// This is a pure function of the text and never fails: lines that do not
/// match any directive shape contribute no component (the editor's
/// validator reports them with line numbers). Comments start with `--` and
/// may trail a directive; blank lines are skipped.
pub fn parse(text: &str) -> ComponentTable {
    let mut table = ComponentTable::new();

    for raw in text.lines() {
        let line = strip_comment(raw).trim();
        if line.is_empty() {
            continue;
        }

        let tokens = tokenize(line);
        let Some((directive, args)) = tokens.split_first() else {
            continue;
        };

        match directive.to_ascii_uppercase().as_str() {
            "CIRCUIT" => {
                // First declaration names the circuit; later ones are ignored
                if table.circuit_name.is_none() {
                    if let Some(name) = args.first() {
                        table.circuit_name = Some((*name).to_string());
                    }
                }
            }
            "INPUT" => {
                for name in args {
                    let id = format!("input-{name}");
                    table.record_producer(name, &id);
                    table.push(Component::Input {
                        id,
                        name: (*name).to_string(),
                    });
                }
            }
            "OUTPUT" => {
                for name in args {
                    table.push(Component::Output {
                        id: format!("output-{name}"),
                        name: (*name).to_string(),
                    });
                }
            }
            "CLOCK" => parse_clock(&mut table, args),
            "GATE" => parse_gate(&mut table, args),
            "DFF" => parse_dff(&mut table, args),
            // Internal wire declarations carry no structure of their own
            "SIGNAL" => {}
            _ => {}
        }
    }

    table
}

/// Drop everything from the first `--` onward.
fn strip_comment(line: &str) -> &str {
    match line.find("--") {
        Some(pos) => &line[..pos],
        None => line,
    }
}

/// Split a line on whitespace and commas, dropping empty tokens.
fn tokenize(line: &str) -> Vec<&str> {
    line.split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .collect()
}

/// `CLOCK <name> [PERIOD <p>] [DUTY <d>]`
///
/// Attribute values are kept as opaque strings; unknown keywords are
/// skipped so a newer editor can add attributes without breaking older
/// parsers.
fn parse_clock(table: &mut ComponentTable, args: &[&str]) {
    let Some((name, rest)) = args.split_first() else {
        return;
    };

    let mut period = DEFAULT_CLOCK_PERIOD.to_string();
    let mut duty_cycle = DEFAULT_CLOCK_DUTY.to_string();
    let mut pairs = rest.chunks_exact(2);
    for pair in &mut pairs {
        match pair[0].to_ascii_uppercase().as_str() {
            "PERIOD" => period = pair[1].to_string(),
            "DUTY" => duty_cycle = pair[1].to_string(),
            _ => {}
        }
    }

    let id = format!("clock-{name}");
    table.record_producer(name, &id);
    table.push(Component::Clock {
        id,
        name: (*name).to_string(),
        period,
        duty_cycle,
    });
}

/// `GATE <id> <type> <in...> <out>` - input count fixed by gate type.
fn parse_gate(table: &mut ComponentTable, args: &[&str]) {
    let (Some(id), Some(kind_token)) = (args.first(), args.get(1)) else {
        return;
    };
    let Some(kind) = GateKind::from_keyword(kind_token) else {
        return;
    };

    let n = kind.input_count();
    if args.len() != 2 + n + 1 {
        return;
    }

    let inputs: Vec<String> = args[2..2 + n].iter().map(|s| (*s).to_string()).collect();
    let output = args[2 + n].to_string();
    table.record_producer(&output, id);
    table.push(Component::Gate {
        id: (*id).to_string(),
        kind,
        inputs,
        output,
    });
}

/// `DFF <id> <data> <clock> <out>`
fn parse_dff(table: &mut ComponentTable, args: &[&str]) {
    let [id, data, clock, output] = args else {
        return;
    };

    table.record_producer(output, id);
    table.push(Component::Dff {
        id: (*id).to_string(),
        data: (*data).to_string(),
        clock: (*clock).to_string(),
        output: (*output).to_string(),
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_basic_circuit() {
        let table = parse("CIRCUIT demo\nINPUT a b\nOUTPUT y\nGATE g1 AND a b y");

        assert_eq!(table.circuit_name.as_deref(), Some("demo"));
        assert_eq!(table.len(), 4);
        assert_eq!(table.producer_of("a"), Some("input-a"));
        assert_eq!(table.producer_of("b"), Some("input-b"));
        assert_eq!(table.producer_of("y"), Some("g1"));

        let Some(Component::Gate { kind, inputs, output, .. }) = table.get("g1") else {
            panic!("g1 should be a gate");
        };
        assert_eq!(*kind, GateKind::And);
        assert_eq!(inputs, &["a", "b"]);
        assert_eq!(output, "y");
    }

    #[test]
    fn directives_are_case_insensitive_names_are_not() {
        let table = parse("circuit demo\ninput A a\ngate G1 nand A a Y");
        assert_eq!(table.producer_of("A"), Some("input-A"));
        assert_eq!(table.producer_of("a"), Some("input-a"));
        assert_eq!(table.producer_of("Y"), Some("G1"));
    }

    #[test]
    fn commas_are_separators() {
        let table = parse("INPUT a, b, c");
        assert_eq!(table.len(), 3);
        assert_eq!(table.producer_of("c"), Some("input-c"));
    }

    #[test]
    fn comments_and_blanks_are_skipped() {
        let table = parse("-- a whole comment line\n\nINPUT a -- trailing comment\n");
        assert_eq!(table.len(), 1);
        assert_eq!(table.producer_of("a"), Some("input-a"));
    }

    #[test]
    fn clock_attributes_are_opaque_strings() {
        let table = parse("CLOCK clk PERIOD 10 DUTY 0.25");
        let Some(Component::Clock { period, duty_cycle, .. }) = table.get("clock-clk") else {
            panic!("clock-clk should be a clock");
        };
        assert_eq!(period, "10");
        assert_eq!(duty_cycle, "0.25");
        assert_eq!(table.producer_of("clk"), Some("clock-clk"));
    }

    #[test]
    fn clock_defaults_apply_when_attributes_omitted() {
        let table = parse("CLOCK clk");
        let Some(Component::Clock { period, duty_cycle, .. }) = table.get("clock-clk") else {
            panic!("clock-clk should be a clock");
        };
        assert_eq!(period, "2");
        assert_eq!(duty_cycle, "0.5");
    }

    #[test]
    fn not_gate_takes_one_input() {
        let table = parse("GATE n1 NOT a y");
        let Some(Component::Gate { inputs, .. }) = table.get("n1") else {
            panic!("n1 should be a gate");
        };
        assert_eq!(inputs, &["a"]);
    }

    #[test]
    fn malformed_lines_contribute_nothing() {
        let table = parse(
            "GATE g1 AND a y\n\
             GATE g2 FROB a b y\n\
             DFF d1 too few\n\
             WHAT is this\n\
             GATE g3 AND a b y",
        );
        // Only g3 has a valid shape
        assert_eq!(table.len(), 1);
        assert!(table.get("g3").is_some());
        assert!(table.get("g1").is_none());
    }

    #[test]
    fn dff_line_parses() {
        let table = parse("DFF dff1 d clk q");
        let Some(Component::Dff { data, clock, output, .. }) = table.get("dff1") else {
            panic!("dff1 should be a DFF");
        };
        assert_eq!(data, "d");
        assert_eq!(clock, "clk");
        assert_eq!(output, "q");
        assert_eq!(table.producer_of("q"), Some("dff1"));
    }

    #[test]
    fn forward_references_resolve_after_the_full_pass() {
        // g1 consumes a signal produced later in the document
        let table = parse("GATE g1 NOT w y\nGATE g2 NOT x w");
        assert_eq!(table.producer_of("w"), Some("g2"));
    }
}
