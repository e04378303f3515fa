use crate::checks::check_rank;
use crate::{ModelSignature, ValidationIssue};

/// The closed set of model families voxport packages.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ModelType {
    Rmvpe,
    Fcpe,
    NsfHifigan,
}

impl ModelType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rmvpe => "rmvpe",
            Self::Fcpe => "fcpe",
            Self::NsfHifigan => "nsfhifigan",
        }
    }
}

/// Structural contract for the selected model family.
pub fn structural_issues(model_type: ModelType, signature: &ModelSignature) -> Vec<ValidationIssue> {
    match model_type {
        ModelType::Rmvpe => validate_rmvpe(signature),
        ModelType::Fcpe => validate_fcpe(signature),
        ModelType::NsfHifigan => validate_nsf_hifigan(signature),
    }
}

fn validate_rmvpe(signature: &ModelSignature) -> Vec<ValidationIssue> {
    let Some(first_input) = signature.inputs.first() else {
        return vec![ValidationIssue::new("RMVPE model has no inputs")];
    };

    let mut issues = check_rank("rmvpe input", first_input, 3);

    if signature.outputs.is_empty() {
        issues.push(ValidationIssue::new("RMVPE model has no outputs"));
    }
    issues
}

// Same contract as RMVPE today; the families are packaged separately and
// their checks are expected to diverge.
fn validate_fcpe(signature: &ModelSignature) -> Vec<ValidationIssue> {
    let Some(first_input) = signature.inputs.first() else {
        return vec![ValidationIssue::new("FCPE model has no inputs")];
    };

    let mut issues = check_rank("fcpe input", first_input, 3);

    if signature.outputs.is_empty() {
        issues.push(ValidationIssue::new("FCPE model has no outputs"));
    }
    issues
}

fn validate_nsf_hifigan(signature: &ModelSignature) -> Vec<ValidationIssue> {
    if signature.inputs.len() < 2 {
        return vec![ValidationIssue::new(
            "NSF-HiFiGAN model should expose at least two inputs",
        )];
    }

    let mut issues = Vec::new();
    for tensor in &signature.inputs {
        // Only acoustic-feature inputs carry the rank-3 contract; auxiliary
        // inputs (speaker embeddings etc.) may have any rank.
        let lower = tensor.name.0.to_lowercase();
        if lower.contains("mel") || lower.contains("f0") || lower.contains("pitch") {
            issues.extend(check_rank(
                &format!("nsfhifigan input {}", tensor.name.0),
                tensor,
                3,
            ));
        }
    }

    if signature.outputs.is_empty() {
        issues.push(ValidationIssue::new("NSF-HiFiGAN model has no outputs"));
    }
    issues
}
