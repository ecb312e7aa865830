#[cfg(test)]
mod tests {
    use async_trait::async_trait;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};
    use tasq::libs::config::Action;
    use tasq::libs::errors::CliError;
    use tasq::libs::middlewares;
    use tasq::libs::parser::Params;
    use tasq::libs::pipeline::{
        Flow, Handler, Middleware, MiddlewareContext, MiddlewareStep, Outcome, Pipeline,
        TaskController,
    };

    /// Shared call log so tests can observe dispatches after the context
    /// has swallowed the controller.
    #[derive(Clone, Default)]
    struct CallLog(Arc<Mutex<Vec<Handler>>>);

    impl CallLog {
        fn calls(&self) -> Vec<Handler> {
            self.0.lock().unwrap().clone()
        }
    }

    struct StubController {
        log: CallLog,
        fail: bool,
    }

    #[async_trait]
    impl TaskController for StubController {
        async fn dispatch(
            &mut self,
            handler: Handler,
            _params: &Params,
        ) -> Result<Outcome, CliError> {
            self.log.0.lock().unwrap().push(handler);
            if self.fail {
                return Err(CliError::message("handler exploded"));
            }
            Ok(Outcome::Removed {
                id: "t1".to_string(),
                removed: true,
            })
        }
    }

    fn context(action: Action, params: Params, log: CallLog, fail: bool) -> MiddlewareContext {
        MiddlewareContext::new(action, params, Box::new(StubController { log, fail }))
    }

    fn params(pairs: &[(&str, &str)]) -> Params {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    struct Halt;

    #[async_trait]
    impl MiddlewareStep for Halt {
        async fn apply(&self, _context: &mut MiddlewareContext) -> Result<Flow, CliError> {
            Ok(Flow::Halt)
        }
    }

    fn halting() -> Middleware {
        Box::new(Halt)
    }

    #[tokio::test]
    async fn test_steps_run_in_append_order() {
        static RENDERED: AtomicUsize = AtomicUsize::new(0);
        fn render(_outcome: &Outcome) {
            RENDERED.fetch_add(1, Ordering::SeqCst);
        }

        let log = CallLog::default();
        let pipeline = Pipeline::new()
            .using(middlewares::validate())
            .using(middlewares::handle(Handler::CreateTask))
            .using(middlewares::print(render));

        let mut cx = context(
            Action::Add,
            params(&[("description", "buy milk")]),
            log.clone(),
            false,
        );
        pipeline.run(&mut cx).await.unwrap();

        assert_eq!(log.calls(), vec![Handler::CreateTask]);
        assert_eq!(RENDERED.load(Ordering::SeqCst), 1);
        assert!(cx.validated.is_some());
        assert!(cx.result.is_some());
    }

    #[tokio::test]
    async fn test_invalid_input_never_reaches_handler_or_render() {
        static RENDERED: AtomicUsize = AtomicUsize::new(0);
        fn render(_outcome: &Outcome) {
            RENDERED.fetch_add(1, Ordering::SeqCst);
        }

        let log = CallLog::default();
        let pipeline = Pipeline::new()
            .using(middlewares::validate())
            .using(middlewares::handle(Handler::UpdateTask))
            .using(middlewares::print(render));

        let mut cx = context(Action::Update, Params::new(), log.clone(), false);
        let err = pipeline.run(&mut cx).await.unwrap_err();

        assert!(err.is_validation());
        assert!(log.calls().is_empty());
        assert_eq!(RENDERED.load(Ordering::SeqCst), 0);
        assert!(cx.result.is_none());
    }

    #[tokio::test]
    async fn test_failing_handler_skips_later_steps() {
        static RENDERED: AtomicUsize = AtomicUsize::new(0);
        fn render(_outcome: &Outcome) {
            RENDERED.fetch_add(1, Ordering::SeqCst);
        }

        let log = CallLog::default();
        let pipeline = Pipeline::new()
            .using(middlewares::validate())
            .using(middlewares::handle(Handler::DeleteTask))
            .using(middlewares::print(render));

        let mut cx = context(Action::Delete, params(&[("id", "t1")]), log.clone(), true);
        let err = pipeline.run(&mut cx).await.unwrap_err();

        assert_eq!(err.to_string(), "handler exploded");
        assert_eq!(log.calls(), vec![Handler::DeleteTask]);
        assert_eq!(RENDERED.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_halt_stops_the_chain_without_error() {
        let log = CallLog::default();
        let pipeline = Pipeline::new()
            .using(halting())
            .using(middlewares::handle(Handler::ListTasks));

        let mut cx = context(Action::List, Params::new(), log.clone(), false);
        pipeline.run(&mut cx).await.unwrap();

        assert!(log.calls().is_empty());
        assert!(cx.result.is_none());
    }

    #[tokio::test]
    async fn test_print_without_result_is_an_error() {
        fn render(_outcome: &Outcome) {}

        let log = CallLog::default();
        let pipeline = Pipeline::new().using(middlewares::print(render));

        let mut cx = context(Action::List, Params::new(), log, false);
        let err = pipeline.run(&mut cx).await.unwrap_err();
        assert!(err.to_string().contains("no result to render"));
    }
}
