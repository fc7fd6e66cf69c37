//! Error types for metadata inspection

use thiserror::Error;

/// Errors that can occur while building or configuring an inspector chain
///
/// Resolving an unknown type name is not an error; it yields no metadata.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InspectorError {
    /// Type name failed validation
    #[error("Invalid type name '{name}': {reason}")]
    InvalidTypeName { name: String, reason: String },

    /// Descriptor did not have the inspection-result shape
    #[error("Invalid metadata descriptor: {0}")]
    InvalidDescriptor(String),

    /// JSON parsing error
    #[error("JSON parsing error: {0}")]
    JsonParse(String),

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlParse(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(String),

    /// Metadata table file with an unrecognized extension
    #[error("Unsupported metadata file format: {0}")]
    UnsupportedFormat(String),
}

impl InspectorError {
    pub(crate) fn invalid_type_name(name: &str, reason: impl Into<String>) -> Self {
        InspectorError::InvalidTypeName {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

impl From<serde_json::Error> for InspectorError {
    fn from(e: serde_json::Error) -> Self {
        InspectorError::JsonParse(e.to_string())
    }
}

#[cfg(feature = "yaml")]
impl From<serde_yaml::Error> for InspectorError {
    fn from(e: serde_yaml::Error) -> Self {
        InspectorError::YamlParse(e.to_string())
    }
}

impl From<std::io::Error> for InspectorError {
    fn from(e: std::io::Error) -> Self {
        InspectorError::Io(e.to_string())
    }
}

/// Result type for inspector construction
pub type InspectorResult<T> = Result<T, InspectorError>;
