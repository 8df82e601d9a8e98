use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};
use std::path::Path;

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Settings {
    #[serde(default = "default_log")]
    pub log: String,
    /// Also log the invocation context next to the event.
    #[serde(default)]
    pub log_context: bool,
}

pub fn default_log() -> String {
    "hello_lambda=info".to_string()
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            log: default_log(),
            log_context: false,
        }
    }
}

impl Settings {
    /// Optional config file first, then `HELLO_LAMBDA_*` env vars on top.
    pub fn new<P: AsRef<Path>>(path: Option<P>) -> Result<Self, config::ConfigError> {
        Self::with_env(path, env_source())
    }

    fn with_env<P: AsRef<Path>>(
        path: Option<P>,
        env: Environment,
    ) -> Result<Self, config::ConfigError> {
        let mut builder = Config::builder();

        if let Some(file) = path {
            builder = builder
                .add_source(File::with_name(&file.as_ref().to_string_lossy()).required(false));
        }
        builder
            .add_source(env)
            .build()
            .and_then(|config| config.try_deserialize())
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("HELLO_LAMBDA")
        .prefix_separator("_")
        .separator("__")
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn toml_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::Builder::new()
            .suffix(".toml")
            .tempfile()
            .unwrap();
        writeln!(file, "{}", contents).unwrap();
        file
    }

    fn fake_env(vars: &[(&str, &str)]) -> Environment {
        env_source().source(Some(
            vars.iter()
                .map(|(k, v)| (k.to_string(), v.to_string()))
                .collect(),
        ))
    }

    #[test]
    fn missing_file_falls_back_to_defaults() {
        let settings = Settings::with_env(Some("does/not/exist.toml"), fake_env(&[])).unwrap();
        assert_eq!(settings.log, "hello_lambda=info");
        assert!(!settings.log_context);
    }

    #[test]
    fn reads_toml_file() {
        let file = toml_file("log = \"hello_lambda=debug\"\nlog_context = true");

        let settings = Settings::with_env(Some(file.path()), fake_env(&[])).unwrap();
        assert_eq!(settings.log, "hello_lambda=debug");
        assert!(settings.log_context);
    }

    #[test]
    fn env_overrides_file() {
        let file = toml_file("log = \"hello_lambda=debug\"\nlog_context = false");
        let env = fake_env(&[
            ("HELLO_LAMBDA_LOG_CONTEXT", "true"),
            ("HELLO_LAMBDA_LOG", "hello_lambda=trace"),
            ("OTHER_LOG", "ignored"),
        ]);

        let settings = Settings::with_env(Some(file.path()), env).unwrap();
        assert_eq!(settings.log, "hello_lambda=trace");
        assert!(settings.log_context);
    }

    #[test]
    fn env_alone_is_enough() {
        let env = fake_env(&[("HELLO_LAMBDA_LOG_CONTEXT", "true")]);
        let settings = Settings::with_env(None::<&str>, env).unwrap();
        assert_eq!(settings.log, "hello_lambda=info");
        assert!(settings.log_context);
    }
}
