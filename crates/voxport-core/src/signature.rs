#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct IOName(pub String);

impl IOName {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TensorInfo {
    pub name: IOName,
    /// None = the exporter provided no shape annotation at all.
    /// Some entries of None = dynamic dimension.
    pub dims: Option<Vec<Option<usize>>>,
}

impl TensorInfo {
    pub fn rank(&self) -> Option<usize> {
        self.dims.as_ref().map(Vec::len)
    }
}

/// A model's live IO signature, in graph declaration order.
/// Read once per run from the loaded session; never persisted.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ModelSignature {
    pub inputs: Vec<TensorInfo>,
    pub outputs: Vec<TensorInfo>,
}

impl ModelSignature {
    pub fn has_input(&self, name: &str) -> bool {
        self.inputs.iter().any(|t| t.name.0 == name)
    }

    pub fn has_output(&self, name: &str) -> bool {
        self.outputs.iter().any(|t| t.name.0 == name)
    }

    pub fn input_names(&self) -> Vec<String> {
        self.inputs.iter().map(|t| t.name.0.clone()).collect()
    }

    pub fn output_names(&self) -> Vec<String> {
        self.outputs.iter().map(|t| t.name.0.clone()).collect()
    }
}
