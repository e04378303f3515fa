use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "voxport", version, about = "Package and validate voice-model ONNX artifacts")]
pub struct Cli {
    /// Log level (RUST_LOG)
    #[arg(long, global = true, default_value = "warn")]
    pub log: String,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Bundle an ONNX model with a config.json descriptor
    Package {
        /// Path to the ONNX model
        #[arg(long)]
        model: PathBuf,

        /// Directory to write model.onnx and config.json
        #[arg(long)]
        output_dir: PathBuf,

        /// Model sampling rate
        #[arg(long)]
        sample_rate: f64,

        /// Hop size in samples
        #[arg(long)]
        hop_size: u32,

        /// Number of mel bins
        #[arg(long)]
        mel_bins: u32,

        /// FFT/window size
        #[arg(long)]
        window_size: u32,

        /// Comma-separated ONNX input names (defaults to model IO)
        #[arg(long)]
        input_names: Option<String>,

        /// Comma-separated ONNX output names (defaults to model IO)
        #[arg(long)]
        output_names: Option<String>,
    },

    /// Check a packaged model's IO signature against its config.json
    Validate {
        /// Path to model.onnx
        #[arg(long)]
        model: PathBuf,

        /// Path to config.json
        #[arg(long)]
        config: PathBuf,

        /// Model type (rmvpe, fcpe, or nsfhifigan)
        #[arg(long)]
        model_type: String,

        /// Expected sampling rate to compare against config.json
        #[arg(long)]
        expected_sample_rate: Option<f64>,
    },
}
