//! # CLI Layer
//!
//! One possible UI client for stockroom. This is the only place that knows about
//! stdout/stderr, exit codes and terminal formatting.
//!
//! - `setup.rs`: clap definitions
//! - `commands.rs`: context wiring, dispatch to the API, logging setup
//! - `print.rs`: turns `CmdResult`s into terminal output
//!
//! Running `stockroom` with no subcommand is `stockroom list`.

mod commands;
mod print;
mod setup;

pub use commands::run;
