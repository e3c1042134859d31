//! Property-based tests for the Sollin worker loop.
//!
//! Runs the full engine on generated graphs and checks it against a
//! sequential Kruskal oracle, validates the structure of the returned tree,
//! and verifies that the result does not depend on the worker count or on
//! repeated execution.

mod determinism;
mod equivalence;
mod oracle;
mod strategies;
mod structural;
mod types;
