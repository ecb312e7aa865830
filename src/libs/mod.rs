//! Core library modules for the tasq application.
//!
//! Serves as the main entry point for all tasq library components:
//!
//! - **Request pipeline**: argument parsing, rule validation, the
//!   middleware engine and its step factories
//! - **Core Infrastructure**: static configuration, data storage paths,
//!   error types, messaging
//! - **User Interface**: console rendering
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tasq::libs::config::Action;
//! use tasq::libs::parser::Params;
//! use tasq::libs::validation;
//!
//! let validated = validation::build_params(Action::List, &Params::new())?;
//! assert_eq!(validated.get("status").map(String::as_str), Some("all"));
//! # Ok::<(), tasq::libs::errors::CliError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod errors;
pub mod messages;
pub mod middlewares;
pub mod parser;
pub mod pipeline;
pub mod task;
pub mod validation;
pub mod view;
