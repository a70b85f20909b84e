//! Strikechat is a terminal chat client for security work that can fold
//! remote command output into the conversation before the model sees it.
//!
//! The crate is organized around a small set of collaborating layers:
//! - [`core`] owns the conversation transcript, command detection, the
//!   session turn protocol, and configuration.
//! - [`api`] defines the Messages API payloads and the HTTP backend behind
//!   the `ChatBackend` seam.
//! - [`exec`] adapts the remote MCP execution server (health probe, command
//!   dispatch, output combining).
//! - [`commands`] parses the REPL meta-commands.
//! - [`ui`] renders output through a plain/styled printer and runs the
//!   interactive loop.
//!
//! Runtime entrypoints live in the binary crate (`src/main.rs`) and route
//! through [`crate::cli::main`].

pub mod api;
pub mod auth;
pub mod cli;
pub mod commands;
pub mod core;
pub mod exec;
pub mod ui;
pub mod utils;
