use anyhow::Result;
use cflow_carver::commands;
use clap::{Parser, Subcommand};

/// Call-graph partitioning CLI.
///
/// This CLI is a thin wrapper around `carver-core` (exposed in code as
/// `carver_core`). All substantive logic lives in the library so it can be
/// tested thoroughly and reused from other frontends.
#[derive(Parser, Debug)]
#[command(
    name = "cflow-carver",
    version,
    about = "Split cflow call graphs into per-entry-point DOT subgraphs",
    long_about = None
)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Convert a cflow text trace into a DOT edge list.
    Convert {
        /// Path to the cflow trace.
        trace: String,

        /// Write the DOT output here instead of stdout.
        #[arg(long)]
        output: Option<String>,
    },

    /// Drop edges touching internal/library symbols from a graph description.
    ///
    /// Edges naming `main` are always kept and moved to the front of the
    /// output; edge lines where either endpoint starts with a lowercase
    /// letter (or names the assertion helper) are removed; every other line
    /// passes through untouched.
    Filter {
        /// Path to the graph description.
        graph: String,

        /// Write the filtered output here instead of stdout.
        #[arg(long)]
        output: Option<String>,
    },

    /// Split a graph description into per-entry-point subgraphs.
    ///
    /// Writes one `<ROOT>.dot` file per root candidate (`main` or `*Main`),
    /// each containing the nodes reachable within three hops of the root.
    Split {
        /// Path to the graph description.
        graph: String,

        /// Directory receiving the per-root files. Defaults to the current
        /// working directory.
        #[arg(long, default_value = ".")]
        out_dir: String,
    },

    /// List root candidates and their subgraph sizes without writing files.
    Roots {
        /// Path to the graph description.
        graph: String,

        /// Emit JSON instead of human-readable text.
        #[arg(long, default_value_t = false)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Convert { trace, output } => {
            commands::convert_command(&trace, output.as_deref())?
        }
        Command::Filter { graph, output } => commands::filter_command(&graph, output.as_deref())?,
        Command::Split { graph, out_dir } => commands::split_command(&graph, &out_dir)?,
        Command::Roots { graph, json } => commands::roots_command(&graph, json)?,
    }

    Ok(())
}
