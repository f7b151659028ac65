//! Command-line front end for the todo server.
//!
//! Requests are built and parsed by [`todo_core::ItemClient`]; this crate
//! only supplies the argument parsing, the ureq transport and the output.

pub mod cli;
pub mod commands;
pub mod transport;

pub use cli::{Cli, Command};
pub use transport::{Transport, TransportError};
