use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use tracing::info;
use voxport_core::{resolve_names, ModelConfig};

#[allow(clippy::too_many_arguments)]
pub fn run(
    model: PathBuf,
    output_dir: PathBuf,
    sample_rate: f64,
    hop_size: u32,
    mel_bins: u32,
    window_size: u32,
    input_names: Option<String>,
    output_names: Option<String>,
) -> Result<()> {
    require_onnx_model(&model)?;

    let signature = voxport_onnx::load_signature(&model)?;

    fs::create_dir_all(&output_dir)
        .with_context(|| format!("failed to create output directory: {}", output_dir.display()))?;

    let model_dest = output_dir.join("model.onnx");
    fs::copy(&model, &model_dest)
        .with_context(|| format!("failed to copy model to {}", model_dest.display()))?;

    let config = ModelConfig {
        sampling_rate: Some(sample_rate),
        hop_size: Some(hop_size),
        mel_bins: Some(mel_bins),
        window_size: Some(window_size),
        expected_inputs: resolve_names(input_names.as_deref(), signature.input_names()),
        expected_outputs: resolve_names(output_names.as_deref(), signature.output_names()),
    };

    let config_dest = output_dir.join("config.json");
    config
        .write(&config_dest)
        .with_context(|| format!("failed to write {}", config_dest.display()))?;

    info!(
        model = %model_dest.display(),
        config = %config_dest.display(),
        "packaged model"
    );
    Ok(())
}

fn require_onnx_model(path: &Path) -> Result<()> {
    let is_onnx = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("onnx"));

    if !is_onnx {
        bail!("expected an ONNX model, got: {}", path.display());
    }
    Ok(())
}
