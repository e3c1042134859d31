//! Edge-list provider for whitespace-separated graph files.
//!
//! The format is a `V E` header followed by `E` edges, each written as
//! `source target weight`. Tokens may be split across lines freely; line
//! numbers are only used for error reporting.

mod errors;
mod provider;

pub use crate::{errors::EdgeListError, provider::EdgeListProvider};
