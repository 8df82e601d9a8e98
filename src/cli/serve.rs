use hello_lambda::{Handler, Response, Settings};
use lambda_runtime::{run, service_fn, Error, LambdaEvent};
use serde_json::Value;
use std::sync::Arc;

/// Run the handler under the Lambda runtime loop.
#[derive(Debug, clap::Args)]
pub struct Cmd {}

impl Cmd {
    pub async fn run(&self, settings: &Settings) -> Result<(), Error> {
        super::init_tracing(settings);

        let handler = Arc::new(Handler::from_settings(settings));
        tracing::debug!("starting with {:?}", handler);

        let service_fn = service_fn(move |event| {
            let handler = Arc::clone(&handler);
            async move { handler_fn(event, handler).await }
        });
        run(service_fn).await?;

        Ok(())
    }
}

async fn handler_fn(event: LambdaEvent<Value>, handler: Arc<Handler>) -> Result<Response, Error> {
    Ok(handler.as_ref().handle(event).await?)
}
