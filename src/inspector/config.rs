//! Configuration for reflective property inspection

use serde::{Deserialize, Serialize};

/// Configuration for [`PropertyTypeInspector`](super::PropertyTypeInspector)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct InspectorConfig {
    /// Attach format hints (date, email, uri, ...) to string properties
    pub detect_formats: bool,

    /// Maximum number of path segments followed into the context, not
    /// counting the root segment that names the context itself
    pub max_depth: usize,

    /// Emit properties whose live value is null (without a type)
    pub include_nulls: bool,

    /// Strings longer than this many characters are marked `large`
    pub large_text_threshold: usize,
}

impl Default for InspectorConfig {
    fn default() -> Self {
        Self {
            detect_formats: true,
            max_depth: 10,
            include_nulls: true,
            large_text_threshold: 255,
        }
    }
}

impl InspectorConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder for custom configuration
    pub fn builder() -> InspectorConfigBuilder {
        InspectorConfigBuilder::default()
    }
}

/// Builder for InspectorConfig
#[derive(Debug, Default)]
pub struct InspectorConfigBuilder {
    config: InspectorConfig,
}

impl InspectorConfigBuilder {
    /// Enable or disable format hints
    pub fn detect_formats(mut self, detect: bool) -> Self {
        self.config.detect_formats = detect;
        self
    }

    /// Set the maximum traversal depth (at least 1)
    pub fn max_depth(mut self, depth: usize) -> Self {
        self.config.max_depth = depth.max(1);
        self
    }

    /// Include null-valued properties
    pub fn include_nulls(mut self, include: bool) -> Self {
        self.config.include_nulls = include;
        self
    }

    /// Set the length above which strings are treated as large text
    pub fn large_text_threshold(mut self, threshold: usize) -> Self {
        self.config.large_text_threshold = threshold;
        self
    }

    /// Build the configuration
    pub fn build(self) -> InspectorConfig {
        self.config
    }
}
