use crate::{json, response::Response, Result, Settings, PROJECT_NAME, RUNTIME};
use lambda_runtime::{Context, LambdaEvent};
use serde::Serialize;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct Handler {
    project_name: String,
    log_context: bool,
}

#[derive(Debug, Serialize)]
struct Greeting<'a> {
    message: &'a str,
}

/// The parts of the invocation context worth logging.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct ContextSummary<'a> {
    request_id: &'a str,
    deadline: u64,
    invoked_function_arn: &'a str,
    xray_trace_id: Option<&'a str>,
}

impl Handler {
    pub fn new(project_name: impl Into<String>) -> Self {
        Self {
            project_name: project_name.into(),
            log_context: false,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        Self::new(PROJECT_NAME).with_context_logging(settings.log_context)
    }

    pub fn with_context_logging(mut self, enabled: bool) -> Self {
        self.log_context = enabled;
        self
    }

    pub fn greeting(&self) -> String {
        format!("Hello from {} in {}", self.project_name, RUNTIME)
    }

    /// Logs the event and answers with the fixed greeting. The payload is
    /// never inspected.
    pub async fn handle(&self, event: LambdaEvent<Value>) -> Result<Response> {
        let (payload, context) = event.into_parts();
        tracing::info!("{}", event_log_line(&payload)?);
        if self.log_context {
            tracing::info!("{}", context_log_line(&context)?);
        }

        let message = self.greeting();
        Response::ok(&Greeting { message: &message })
    }
}

pub fn event_log_line(event: &Value) -> Result<String> {
    Ok(format!("Event: {}", json::to_string_pretty(event)?))
}

pub fn context_log_line(context: &Context) -> Result<String> {
    let summary = ContextSummary {
        request_id: &context.request_id,
        deadline: context.deadline,
        invoked_function_arn: &context.invoked_function_arn,
        xray_trace_id: context.xray_trace_id.as_deref(),
    };
    Ok(format!("Context: {}", json::to_string_pretty(&summary)?))
}
