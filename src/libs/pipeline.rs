//! Linear middleware pipeline.
//!
//! Each CLI invocation assembles one [`Pipeline`] from its command's step
//! sequence and runs it once over a [`MiddlewareContext`]. A middleware is
//! an async step from the context to a [`Flow`] decision: return
//! `Flow::Continue` to hand control to the next step, `Flow::Halt` to stop
//! the chain cleanly, or an error to abort it. The driver loop below is
//! the whole execution model: strictly linear composition with no
//! branching and no retry, and nothing runs after a failure.
//!
//! Handlers are dispatched through the [`TaskController`] seam by a tagged
//! [`Handler`] kind bound at composition time, so the pipeline never has
//! to ask whether an operation exists.

use crate::libs::config::Action;
use crate::libs::errors::CliError;
use crate::libs::parser::Params;
use crate::libs::task::Task;
use async_trait::async_trait;

/// Operation kinds the controller can dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Handler {
    CreateTask,
    UpdateTask,
    DeleteTask,
    ListTasks,
    MarkInProgress,
    MarkDone,
}

/// One named stage of a command's step sequence.
///
/// `Print` is unbound here; the registry binds it to the command's render
/// function when the pipeline is assembled.
#[derive(Debug, Clone, Copy)]
pub enum Step {
    Validate,
    Handle(Handler),
    Print,
}

/// Continuation decision returned by a middleware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Halt,
}

/// Result envelope written into the context by the handler step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Task(Task),
    Tasks(Vec<Task>),
    Removed { id: String, removed: bool },
}

/// Renders a handler outcome to the console.
pub type RenderFn = fn(&Outcome);

/// Dispatch seam between the pipeline and the command controller.
#[async_trait]
pub trait TaskController: Send {
    async fn dispatch(&mut self, handler: Handler, params: &Params) -> Result<Outcome, CliError>;
}

/// Per-invocation envelope flowing through the pipeline.
///
/// Created once per CLI invocation and discarded after the run. `params`
/// holds the raw input and is only read; `validated` is written by the
/// validate step, `result` by the handler step.
pub struct MiddlewareContext {
    pub action: Action,
    pub params: Params,
    pub validated: Option<Params>,
    pub result: Option<Outcome>,
    pub controller: Box<dyn TaskController>,
}

impl MiddlewareContext {
    pub fn new(action: Action, params: Params, controller: Box<dyn TaskController>) -> Self {
        Self {
            action,
            params,
            validated: None,
            result: None,
            controller,
        }
    }
}

/// One executable pipeline step.
///
/// Morally a function from the context to continue-or-halt; the trait
/// form is what lets steps capture their composition-time configuration
/// (a handler kind, a render function) and still be stored uniformly.
#[async_trait]
pub trait MiddlewareStep: Send + Sync {
    async fn apply(&self, context: &mut MiddlewareContext) -> Result<Flow, CliError>;
}

/// A boxed pipeline step.
pub type Middleware = Box<dyn MiddlewareStep>;

/// An ordered chain of middleware steps.
pub struct Pipeline {
    stack: Vec<Middleware>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self { stack: Vec::new() }
    }

    /// Appends a step; steps execute in append order.
    pub fn using(mut self, middleware: Middleware) -> Self {
        self.stack.push(middleware);
        self
    }

    /// Executes all appended steps once, in order.
    ///
    /// Stops at the first `Flow::Halt` (without error) or the first `Err`
    /// (propagated to the caller); no step after either point runs.
    pub async fn run(&self, context: &mut MiddlewareContext) -> Result<(), CliError> {
        for middleware in &self.stack {
            match middleware.apply(context).await? {
                Flow::Continue => continue,
                Flow::Halt => break,
            }
        }
        Ok(())
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new()
    }
}
