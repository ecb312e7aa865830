//! CLI surface: argument capture, command lookup, pipeline assembly.
//!
//! [`Cli::menu`] is the process entry point: it reads argv, shows the help
//! listing when there are no arguments, and otherwise runs exactly one
//! command through its pipeline. Failure handling is centralized here:
//! one ❌ line on the error channel and exit code 1, nothing retried.

pub mod controller;
pub mod registry;

use crate::db::tasks::TaskStore;
use crate::libs::errors::CliError;
use crate::libs::middlewares;
use crate::libs::parser;
use crate::libs::pipeline::{MiddlewareContext, Pipeline, Step};
use crate::libs::view::View;
use crate::msg_error;
use controller::CommandController;
use registry::{Command, CommandRegistry};
use std::env;
use std::process;
use tracing_subscriber::EnvFilter;

pub struct Cli;

impl Cli {
    /// Process entry point: dispatches argv to a command, or prints the
    /// help listing when invoked bare.
    pub async fn menu() -> anyhow::Result<()> {
        Self::init_tracing();

        let args: Vec<String> = env::args().skip(1).collect();
        if args.is_empty() {
            View::help();
            return Ok(());
        }

        if let Err(err) = Self::run(args).await {
            msg_error!(err);
            process::exit(1);
        }
        Ok(())
    }

    /// Parses the argument vector and runs the matching command's
    /// pipeline over a fresh store and context.
    pub async fn run(args: Vec<String>) -> Result<(), CliError> {
        let parsed = parser::parse(&args)?;

        let store = TaskStore::new().await?;
        let controller = CommandController::new(store);
        let registry = CommandRegistry::new();

        let command = registry
            .get(parsed.action.name())
            .ok_or_else(|| CliError::message(format!("Unknown command: {}", parsed.action)))?;

        let pipeline = Self::build_pipeline(command);
        let mut context =
            MiddlewareContext::new(parsed.action, parsed.params, Box::new(controller));
        pipeline.run(&mut context).await
    }

    /// Binds a command's step sequence into a runnable pipeline; `Print`
    /// gets the command's own render function.
    fn build_pipeline(command: &Command) -> Pipeline {
        command
            .steps
            .iter()
            .fold(Pipeline::new(), |app, step| match step {
                Step::Validate => app.using(middlewares::validate()),
                Step::Handle(handler) => app.using(middlewares::handle(*handler)),
                Step::Print => app.using(middlewares::print(command.render)),
            })
    }

    /// Structured log output is only wired up in debug mode; normal runs
    /// keep stdout clean for the views.
    fn init_tracing() {
        if crate::libs::messages::macros::is_debug_mode() {
            let filter =
                EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
            tracing_subscriber::fmt().with_env_filter(filter).init();
        }
    }
}
