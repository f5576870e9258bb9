use thiserror::Error;

/// Errors that can occur while loading artifacts or running inference.
#[derive(Error, Debug)]
pub enum ModelError {
    /// Failed to read an artifact file.
    #[error("Failed to read artifact '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    /// Failed to parse artifact JSON.
    #[error("Failed to parse artifact: {0}")]
    Parse(#[from] serde_json::Error),

    /// Artifact content fails validation.
    #[error("Invalid artifact '{name}': {reason}")]
    Schema { name: String, reason: String },

    /// A categorical cell holds a value the preprocessor was not fitted on.
    #[error("Column '{column}' has no encoding for value '{value}'")]
    UnknownCategory { column: String, value: String },

    /// Inference failed after the artifacts loaded cleanly.
    #[error("Inference failed: {0}")]
    Inference(String),
}

impl ModelError {
    /// Creates an IO error with path context.
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { path: path.into(), source }
    }

    /// Creates a schema error naming the offending artifact.
    pub fn schema(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Schema {
            name: name.into(),
            reason: reason.into(),
        }
    }
}
