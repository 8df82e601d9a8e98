pub mod error;
pub mod handler;
pub mod json;
pub mod response;
pub mod settings;

pub use error::{Error, Result};
pub use handler::Handler;
pub use response::Response;
pub use settings::Settings;

/// Project name baked into the greeting. Set `PROJECT_NAME` when building to
/// override the package name.
pub const PROJECT_NAME: &str = match option_env!("PROJECT_NAME") {
    Some(name) => name,
    None => env!("CARGO_PKG_NAME"),
};

/// Runtime named in the greeting. Fixed with the template, never configured.
pub const RUNTIME: &str = "Python";
