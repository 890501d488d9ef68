//! CLI module
//!
//! Command-line interface over the typed resource layer.
//!
//! # Commands
//!
//! - `communities` / `projects` / `documents` / `translations` - stream
//!   a collection to stdout as JSON lines
//! - `community` / `document` / `status` - fetch a single entity
//! - `upload` / `add-translation` - create documents and translation
//!   requests
//! - `download` - save translated content to a file

mod commands;
mod runner;

pub use commands::{Cli, Commands};
pub use runner::Runner;
