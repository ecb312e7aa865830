//! Middleware step factories.
//!
//! Each factory returns one boxed pipeline step. The three of them cover
//! the whole step vocabulary: [`validate`] runs the rule engine over the
//! raw parameters, [`handle`] dispatches a tagged handler kind through the
//! controller, [`print`] renders whatever the handler produced.

use crate::libs::errors::CliError;
use crate::libs::pipeline::{Flow, Handler, Middleware, MiddlewareContext, MiddlewareStep, RenderFn};
use crate::libs::validation;
use async_trait::async_trait;

struct Validate;

#[async_trait]
impl MiddlewareStep for Validate {
    async fn apply(&self, context: &mut MiddlewareContext) -> Result<Flow, CliError> {
        let validated = validation::build_params(context.action, &context.params)?;
        context.validated = Some(validated);
        Ok(Flow::Continue)
    }
}

/// Step that validates `context.params` and stores the validated map.
pub fn validate() -> Middleware {
    Box::new(Validate)
}

struct Handle(Handler);

#[async_trait]
impl MiddlewareStep for Handle {
    async fn apply(&self, context: &mut MiddlewareContext) -> Result<Flow, CliError> {
        // A pipeline assembled without a validate step still runs the
        // handler, just with an empty parameter map.
        let params = context.validated.clone().unwrap_or_default();
        let outcome = context.controller.dispatch(self.0, &params).await?;
        context.result = Some(outcome);
        Ok(Flow::Continue)
    }
}

/// Step that dispatches `handler` through the controller and stores its
/// outcome.
pub fn handle(handler: Handler) -> Middleware {
    Box::new(Handle(handler))
}

struct Print(RenderFn);

#[async_trait]
impl MiddlewareStep for Print {
    async fn apply(&self, context: &mut MiddlewareContext) -> Result<Flow, CliError> {
        match &context.result {
            Some(outcome) => {
                (self.0)(outcome);
                Ok(Flow::Continue)
            }
            None => Err(CliError::message("Print error: no result to render")),
        }
    }
}

/// Step that renders the handler outcome with the command's render
/// function.
pub fn print(render: RenderFn) -> Middleware {
    Box::new(Print(render))
}
