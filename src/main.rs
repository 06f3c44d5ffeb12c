//! Netgrid - netlist/graph translator CLI
//!
//! Converts between the textual netlist format and the editor's graph JSON.
//!
//! # Usage
//!
//! ```bash
//! netgrid to-graph circuit.net > circuit.graph.json
//! netgrid to-netlist circuit.graph.json --name my_circuit > circuit.net
//! ```

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use netgrid_core::{
    emit_netlist,
    error::{NetgridError, Result},
    graph::{build_graph, Graph},
    netlist, DEFAULT_CIRCUIT_NAME,
};

/// Netlist/graph translator for the circuit editor
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse a netlist file and print the positioned graph as JSON
    ToGraph {
        /// Path to the netlist file
        #[arg(value_name = "NETLIST_FILE")]
        netlist_file: PathBuf,
        /// Pretty-print the JSON output
        #[arg(short, long)]
        pretty: bool,
    },
    /// Read a graph JSON file and print the regenerated netlist
    ToNetlist {
        /// Path to the graph JSON file
        #[arg(value_name = "GRAPH_FILE")]
        graph_file: PathBuf,
        /// Circuit name for the CIRCUIT line
        #[arg(short, long, default_value = DEFAULT_CIRCUIT_NAME)]
        name: String,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();

    match args.command {
        Command::ToGraph {
            netlist_file,
            pretty,
        } => {
            let table = netlist::parse_file(&netlist_file)?;
            let graph = build_graph(&table);
            let json = if pretty {
                serde_json::to_string_pretty(&graph)?
            } else {
                serde_json::to_string(&graph)?
            };
            println!("{json}");
        }
        Command::ToNetlist { graph_file, name } => {
            let content = std::fs::read_to_string(&graph_file)
                .map_err(|e| NetgridError::file_read(graph_file.display().to_string(), e))?;
            let graph: Graph = serde_json::from_str(&content)?;
            println!("{}", emit_netlist(&graph, &name));
        }
    }

    Ok(())
}
