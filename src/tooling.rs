//! Tooling & Integration Layer
//!
//! Command-line interface and the interactive menu session.

pub mod cli;
pub mod menu;

pub use cli::{Cli, CliContext, Commands};
pub use menu::{MenuChoice, MenuSession, TokenReader};
