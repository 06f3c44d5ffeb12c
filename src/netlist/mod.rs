//! Netlist DSL parsing.
//!
//! The netlist language is line-oriented and human-editable. Directives are
//! matched case-insensitively; signal and component names are
//! case-sensitive. Tokens are separated by whitespace and/or commas, and
//! `--` starts a comment that runs to the end of the line.
//!
//! # Grammar Overview
//!
//! ```text
//! netlist     = { line }
//! line        = comment | directive | empty
//! comment     = '--' { any_char }
//!
//! directive   = circuit | input | output | signal | gate | clock | dff
//! circuit     = "CIRCUIT" name
//! input       = "INPUT"   name { name }
//! output      = "OUTPUT"  name { name }
//! signal      = "SIGNAL"  name { name }
//! gate        = "GATE" id gate_type input { input } output_signal
//! clock       = "CLOCK" name [ "PERIOD" value ] [ "DUTY" value ]
//! dff         = "DFF" id data_signal clock_signal output_signal
//!
//! gate_type   = "AND" | "OR" | "NOT" | "NAND" | "NOR" | "XOR" | "XNOR"
//! ```
//!
//! `NOT` gates take one input signal, all other gate types take two; the
//! last token of a GATE line is always the output signal.
//!
//! # Example
//!
//! ```text
//! CIRCUIT half_adder
//! INPUT a b
//! OUTPUT sum carry
//!
//! GATE g1 XOR a b sum    -- sum bit
//! GATE g2 AND a b carry  -- carry bit
//! ```
//!
//! Parsing is permissive by design: a line that does not match any
//! directive shape is skipped. The editor runs a separate validator pass
//! for line-numbered error reporting.

mod parser;
mod table;

pub use parser::parse;
pub use table::{Component, ComponentTable, GateKind};

/// Parse a netlist file.
#[cfg(feature = "cli")]
pub fn parse_file(path: &std::path::Path) -> crate::error::Result<ComponentTable> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| crate::error::NetgridError::file_read(path.display().to_string(), e))?;
    Ok(parse(&content))
}
