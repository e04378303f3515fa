use std::path::Path;

use anyhow::{Context, Result};
use ort::{
    session::{builder::GraphOptimizationLevel, Session},
    value::ValueType,
};
use tracing::debug;
use voxport_core::{IOName, ModelSignature, TensorInfo};

/// Open an ONNX model for introspection. CPU execution provider only;
/// no inference is ever run through the session.
pub fn open_session(path: &Path) -> Result<Session> {
    let builder = Session::builder()
        .context("failed to create ORT session builder")?
        .with_optimization_level(GraphOptimizationLevel::Level3)
        .context("failed to configure ORT session builder")?;

    builder
        .commit_from_file(path)
        .with_context(|| format!("failed to load ONNX model: {}", path.display()))
}

/// Load a model and read its live IO signature, in graph declaration order.
pub fn load_signature(path: &Path) -> Result<ModelSignature> {
    let session = open_session(path)?;
    let signature = signature_from_session(&session);

    debug!(
        model = %path.display(),
        inputs = signature.inputs.len(),
        outputs = signature.outputs.len(),
        "read model signature"
    );

    Ok(signature)
}

fn signature_from_session(session: &Session) -> ModelSignature {
    let inputs = session
        .inputs
        .iter()
        .map(|input| tensor_info(&input.name, &input.input_type))
        .collect();

    let outputs = session
        .outputs
        .iter()
        .map(|output| tensor_info(&output.name, &output.output_type))
        .collect();

    ModelSignature { inputs, outputs }
}

fn tensor_info(name: &str, value_type: &ValueType) -> TensorInfo {
    let dims = match value_type {
        ValueType::Tensor { shape, .. } => Some(
            shape
                .iter()
                .map(|d| if *d < 0 { None } else { Some(*d as usize) })
                .collect::<Vec<_>>(),
        ),
        // Non-tensor IO carries no shape to check against.
        _ => None,
    };

    TensorInfo {
        name: IOName(name.to_string()),
        dims,
    }
}
