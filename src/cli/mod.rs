use hello_lambda::Settings;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

pub mod invoke;
pub mod serve;

pub fn init_tracing(settings: &Settings) {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(&settings.log))
        .with(
            tracing_subscriber::fmt::layer()
                // disable printing the name of the module in every log line.
                .with_target(false)
                // disabling time is handy because CloudWatch will add the ingestion time.
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();
}
