mod cli;
mod package;
mod validate;

use anyhow::Result;
use clap::Parser;
use cli::{Cli, Command};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    let cli = Cli::parse();

    std::env::set_var("RUST_LOG", &cli.log);
    // stdout is the report surface; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    match cli.command {
        Command::Package {
            model,
            output_dir,
            sample_rate,
            hop_size,
            mel_bins,
            window_size,
            input_names,
            output_names,
        } => package::run(
            model,
            output_dir,
            sample_rate,
            hop_size,
            mel_bins,
            window_size,
            input_names,
            output_names,
        ),
        Command::Validate {
            model,
            config,
            model_type,
            expected_sample_rate,
        } => validate::run(model, config, &model_type, expected_sample_rate),
    }
}
