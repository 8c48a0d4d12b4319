use std::io;

use clap::Parser;
use numspiral::cli::CliArgs;

fn main() -> miette::Result<()> {
    // Logs go to stderr so stdout stays exactly the grid.
    #[cfg(feature = "tracing")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    CliArgs::parse().run(&mut io::stdout().lock())
}
