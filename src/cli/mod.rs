//! CLI command handlers for ScaleKeys.
//!
//! The binary is one possible renderer for the scale engine: it resolves
//! where the settings live, drives the engine, and prints the result.

pub mod common;
pub mod config;
pub mod scales;
pub mod selection;

// Re-export types used by main.rs
pub use common::{CliResult, ExitCode, HostContext};
pub use config::ConfigArgs;
pub use scales::ScalesArgs;
pub use selection::{RootArgs, ScaleArgs, ShowArgs};
