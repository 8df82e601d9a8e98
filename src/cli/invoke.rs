use anyhow::{Context as _, Result};
use hello_lambda::{Handler, Settings};
use lambda_runtime::{Context, LambdaEvent};
use serde_json::Value;
use std::{fs, io::Read, path::PathBuf};

/// Invoke the handler once, locally, and print the response.
#[derive(Debug, clap::Args)]
pub struct Cmd {
    /// JSON event file. Read from stdin when omitted.
    #[clap(long)]
    event: Option<PathBuf>,
    #[clap(long, default_value = "local-invoke")]
    request_id: String,
}

impl Cmd {
    pub async fn run(&self, settings: &Settings) -> Result<()> {
        super::init_tracing(settings);

        let payload = match &self.event {
            Some(path) => {
                let file = fs::File::open(path)
                    .with_context(|| format!("opening event file {}", path.display()))?;
                read_event(file)?
            }
            None => read_event(std::io::stdin().lock())?,
        };

        let mut context = Context::default();
        context.request_id = self.request_id.clone();

        let handler = Handler::from_settings(settings);
        let response = handler.handle(LambdaEvent::new(payload, context)).await?;
        println!("{}", serde_json::to_string_pretty(&response)?);

        Ok(())
    }
}

pub fn read_event<R: Read>(mut reader: R) -> Result<Value> {
    let mut raw = String::new();
    reader
        .read_to_string(&mut raw)
        .context("reading event")?;
    serde_json::from_str(&raw).context("event is not valid json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn reads_json_event() {
        let event = read_event(&b"{\"a\": 1, \"b\": [true]}"[..]).unwrap();
        assert_eq!(event, json!({"a": 1, "b": [true]}));
    }

    #[test]
    fn rejects_invalid_json() {
        let err = read_event(&b"{not json"[..]).unwrap_err();
        assert_eq!(err.to_string(), "event is not valid json");
    }

    #[test]
    fn rejects_empty_input() {
        assert!(read_event(&b""[..]).is_err());
    }

    #[tokio::test]
    async fn event_file_round_trips_through_handler() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        std::io::Write::write_all(&mut file, b"{\"a\": 1}").unwrap();

        let payload = read_event(fs::File::open(file.path()).unwrap()).unwrap();
        let response = Handler::new("myproj")
            .handle(LambdaEvent::new(payload, Context::default()))
            .await
            .unwrap();
        assert_eq!(response.status_code, 200);
        assert_eq!(
            response.body,
            r#"{"message": "Hello from myproj in Python"}"#
        );
    }
}
