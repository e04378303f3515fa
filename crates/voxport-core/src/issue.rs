use std::fmt;

/// One detected inconsistency between a packaged model and its metadata.
/// Pure data; issues never carry errors.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ValidationIssue(pub String);

impl ValidationIssue {
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }
}

impl fmt::Display for ValidationIssue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}
