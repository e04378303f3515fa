use crate::checks::{check_expected_names, check_sample_rate};
use crate::policy::{structural_issues, ModelType};
use crate::{ModelConfig, ModelSignature, ValidationIssue};

/// Run every check in fixed order and concatenate the issues.
/// Any issue at all fails the run; there is no partial success.
pub fn run_checks(
    config: &ModelConfig,
    signature: &ModelSignature,
    model_type: ModelType,
    expected_sample_rate: Option<f64>,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();
    issues.extend(check_expected_names(config, signature));
    issues.extend(check_sample_rate(config, expected_sample_rate));
    issues.extend(structural_issues(model_type, signature));
    issues
}
