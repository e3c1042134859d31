//! Command-line interface orchestration for the sollin MST engine.
//!
//! The `run` command loads an edge-list file, computes its minimum spanning
//! tree with the configured worker group, and summarises the result.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExecutionSummary, RunCommand, SelectedEdge, TreeWeight, WeightKind,
    render_summary, run_cli,
};
