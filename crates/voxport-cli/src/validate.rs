use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing::debug;
use voxport_core::{run_checks, ModelConfig, ModelType};

pub fn run(
    model: PathBuf,
    config: PathBuf,
    model_type: &str,
    expected_sample_rate: Option<f64>,
) -> Result<()> {
    let model_type = parse_model_type(model_type)?;

    let config = ModelConfig::load(&config)
        .with_context(|| format!("failed to load config: {}", config.display()))?;
    let signature = voxport_onnx::load_signature(&model)?;

    debug!(model_type = model_type.as_str(), "running validation");
    let issues = run_checks(&config, &signature, model_type, expected_sample_rate);

    if !issues.is_empty() {
        for issue in &issues {
            println!("ERROR: {issue}");
        }
        std::process::exit(1);
    }

    println!("Validation passed.");
    Ok(())
}

fn parse_model_type(raw: &str) -> Result<ModelType> {
    match raw {
        "rmvpe" => Ok(ModelType::Rmvpe),
        "fcpe" => Ok(ModelType::Fcpe),
        "nsfhifigan" => Ok(ModelType::NsfHifigan),
        other => {
            anyhow::bail!("unsupported model type: {other} (expected rmvpe, fcpe, or nsfhifigan)")
        }
    }
}
