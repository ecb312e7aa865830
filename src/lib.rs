//! # Tasq - Task Queue
//!
//! A command-line task tracker: add, update, list, complete and delete
//! tasks from the terminal, persisted to a single JSON file.
//!
//! ## Features
//!
//! - **Middleware Pipeline**: Every action runs validate → handle → print
//!   through a linear, composable step chain
//! - **Rule-Driven Validation**: Per-action rule tables with defaults and
//!   allowed-value sets; all violations reported at once
//! - **Durable Store**: File-backed task list with full rewrite on every
//!   mutation and self-healing reads
//! - **Filtered Listings**: Status filters including a "not done"
//!   complement, rendered as terminal tables
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasq::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
