//! # CLI Layer
//!
//! This is **one possible UI client** for proclip. It is the only place that
//! knows about terminal I/O, exit codes and output formatting.
//!
//! - `setup`: argument parsing via clap
//! - `commands`: context setup and per-command handlers
//! - `render`: message and listing output
//! - `logging`: tracing subscriber installation

mod commands;
mod logging;
mod render;
mod setup;

pub use commands::run;
