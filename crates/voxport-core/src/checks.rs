use crate::{ModelConfig, ModelSignature, TensorInfo, ValidationIssue};

/// Every name the config expects must exist in the live signature.
/// Inputs are checked before outputs, in config order.
pub fn check_expected_names(
    config: &ModelConfig,
    signature: &ModelSignature,
) -> Vec<ValidationIssue> {
    let mut issues = Vec::new();

    for name in &config.expected_inputs {
        if !signature.has_input(name) {
            issues.push(ValidationIssue::new(format!(
                "Missing expected input name: {name}"
            )));
        }
    }

    for name in &config.expected_outputs {
        if !signature.has_output(name) {
            issues.push(ValidationIssue::new(format!(
                "Missing expected output name: {name}"
            )));
        }
    }

    issues
}

/// Compare the config's sampling rate against an external expectation.
/// The rate is a fixed design constant, so the comparison is exact.
pub fn check_sample_rate(config: &ModelConfig, expected: Option<f64>) -> Vec<ValidationIssue> {
    let Some(expected) = expected else {
        return Vec::new();
    };

    let Some(actual) = config.sampling_rate else {
        return vec![ValidationIssue::new("Config missing sampling_rate")];
    };

    if actual != expected {
        return vec![ValidationIssue::new(format!(
            "sampling_rate {actual} does not match expected {expected}"
        ))];
    }

    Vec::new()
}

/// Rank check against a known shape. A tensor with no shape annotation at
/// all passes: some exporters omit shapes, and their absence is not an
/// inconsistency the loader can be blamed for.
pub fn check_rank(label: &str, tensor: &TensorInfo, expected_rank: usize) -> Vec<ValidationIssue> {
    match tensor.rank() {
        None => Vec::new(),
        Some(rank) if rank == expected_rank => Vec::new(),
        Some(rank) => vec![ValidationIssue::new(format!(
            "{label} has rank {rank} (expected {expected_rank})"
        ))],
    }
}
