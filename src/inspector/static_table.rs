//! Fixed lookup table of hand-authored metadata

use std::collections::HashMap;
use std::path::Path;
use std::sync::Arc;

use serde_json::{Map, Value};
use tracing::{debug, info};

use super::Inspector;
use crate::error::{InspectorError, InspectorResult};
use crate::types::{MetadataDescriptor, TypeName};

/// Inspector answering only for an allow-list of exact type names
///
/// The live context is ignored, so table entries always override whatever a
/// later inspector would derive. Several names may share one descriptor.
///
/// Tables can be loaded from JSON or YAML. Each key is a type name; each
/// value is either a descriptor or the name of another key to share its
/// descriptor:
///
/// ```yaml
/// person:
///   properties:
///     name: { type: string, required: true }
/// person.manager: person
/// ```
#[derive(Debug, Clone)]
pub struct StaticInspector {
    name: String,
    entries: HashMap<TypeName, Arc<MetadataDescriptor>>,
}

impl StaticInspector {
    /// Create an empty table
    pub fn new() -> Self {
        Self::named("static")
    }

    /// Create an empty table with a custom inspector name
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            entries: HashMap::new(),
        }
    }

    /// Add an entry, replacing any previous entry for the same name
    pub fn with_entry(mut self, type_name: TypeName, descriptor: MetadataDescriptor) -> Self {
        self.insert(type_name, Arc::new(descriptor));
        self
    }

    /// Add an entry sharing an already allocated descriptor
    pub fn with_shared(
        mut self,
        type_name: TypeName,
        descriptor: Arc<MetadataDescriptor>,
    ) -> Self {
        self.insert(type_name, descriptor);
        self
    }

    /// Make `alias` answer with the descriptor registered for `target`
    pub fn with_alias(mut self, alias: TypeName, target: &TypeName) -> InspectorResult<Self> {
        let descriptor = self.entries.get(target).cloned().ok_or_else(|| {
            InspectorError::invalid_type_name(
                alias.as_str(),
                format!("alias target '{}' is not registered", target),
            )
        })?;
        self.insert(alias, descriptor);
        Ok(self)
    }

    pub fn insert(&mut self, type_name: TypeName, descriptor: Arc<MetadataDescriptor>) {
        self.entries.insert(type_name, descriptor);
    }

    /// Descriptor registered for an exact type name
    pub fn get(&self, type_name: &str) -> Option<&MetadataDescriptor> {
        self.entries.get(type_name).map(Arc::as_ref)
    }

    pub fn contains(&self, type_name: &str) -> bool {
        self.entries.contains_key(type_name)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Registered type names, sorted
    pub fn type_names(&self) -> Vec<&TypeName> {
        let mut names: Vec<&TypeName> = self.entries.keys().collect();
        names.sort();
        names
    }

    /// Load a table from JSON text
    pub fn from_json_str(json: &str) -> InspectorResult<Self> {
        let table: Map<String, Value> = serde_json::from_str(json)?;
        Self::from_table(table)
    }

    /// Load a table from YAML text
    #[cfg(feature = "yaml")]
    pub fn from_yaml_str(yaml: &str) -> InspectorResult<Self> {
        let table: Map<String, Value> = serde_yaml::from_str(yaml)?;
        Self::from_table(table)
    }

    /// Load a table from a `.json`, `.yaml` or `.yml` file
    pub fn from_path(path: impl AsRef<Path>) -> InspectorResult<Self> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();
        let content = std::fs::read_to_string(path)?;

        let inspector = match extension.as_str() {
            "json" => Self::from_json_str(&content)?,
            #[cfg(feature = "yaml")]
            "yaml" | "yml" => Self::from_yaml_str(&content)?,
            other => return Err(InspectorError::UnsupportedFormat(other.to_string())),
        };

        info!(
            path = %path.display(),
            entries = inspector.len(),
            "Loaded static metadata table"
        );
        Ok(inspector)
    }

    fn from_table(table: Map<String, Value>) -> InspectorResult<Self> {
        let mut inspector = Self::new();
        let mut aliases = Vec::new();

        for (key, value) in table {
            let type_name = TypeName::parse(&key)?;
            match value {
                Value::String(target) => aliases.push((type_name, TypeName::parse(&target)?)),
                other => {
                    let descriptor = MetadataDescriptor::from_json_value(other).map_err(|e| {
                        InspectorError::InvalidDescriptor(format!("{}: {}", type_name, e))
                    })?;
                    inspector.insert(type_name, Arc::new(descriptor));
                }
            }
        }

        // Aliases resolve against descriptors only, never other aliases
        let mut resolved = Vec::with_capacity(aliases.len());
        for (alias, target) in aliases {
            let descriptor = inspector.entries.get(&target).cloned().ok_or_else(|| {
                InspectorError::invalid_type_name(
                    alias.as_str(),
                    format!("alias target '{}' is not a descriptor entry", target),
                )
            })?;
            resolved.push((alias, descriptor));
        }
        for (alias, descriptor) in resolved {
            inspector.insert(alias, descriptor);
        }

        debug!(entries = inspector.len(), "Built static metadata table");
        Ok(inspector)
    }
}

impl Default for StaticInspector {
    fn default() -> Self {
        Self::new()
    }
}

impl Inspector for StaticInspector {
    fn name(&self) -> &str {
        &self.name
    }

    fn inspect(
        &self,
        _context: Option<&Value>,
        type_name: &TypeName,
    ) -> Option<MetadataDescriptor> {
        self.get(type_name.as_str()).cloned()
    }
}
