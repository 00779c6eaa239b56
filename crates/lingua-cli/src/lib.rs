//! Command line host for the Lingua localization resolver.
//!
//! Wires configuration, logging and the resolver together the way an
//! application does at startup, and exposes a few inspection commands.

pub mod app;
pub mod cli;
pub mod commands;

pub use app::{build_registry, bootstrap};
pub use cli::{Args, Command};
pub use commands::{execute, Outcome};
