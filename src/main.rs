use clap::Parser;
use hello_lambda::Settings;
use lambda_runtime::Error;
use std::path::PathBuf;

mod cli;

#[derive(Debug, Parser)]
#[clap(about = "Hello world Lambda handler", version)]
struct Cli {
    /// Optional settings file, overridden by HELLO_LAMBDA_* env vars.
    #[clap(short, long)]
    config: Option<PathBuf>,
    #[clap(subcommand)]
    cmd: Option<Cmd>,
}

#[derive(Debug, clap::Subcommand)]
enum Cmd {
    Serve(cli::serve::Cmd),
    Invoke(cli::invoke::Cmd),
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    let cli = Cli::parse();
    let settings = Settings::new(cli.config.as_ref())?;

    match cli.cmd {
        Some(Cmd::Invoke(cmd)) => cmd.run(&settings).await?,
        Some(Cmd::Serve(cmd)) => cmd.run(&settings).await?,
        None => cli::serve::Cmd {}.run(&settings).await?,
    }
    Ok(())
}
