//! Reflective inspection of live JSON objects

use serde_json::Value;
use tracing::{trace, warn};

use super::Inspector;
use super::config::InspectorConfig;
use crate::formats::detect_format;
use crate::types::{MetadataDescriptor, PropertyKind, PropertyMetadata, TypeName};

/// Derives metadata from the shape of the object being inspected
///
/// The first segment of the type name names the root binding and is matched
/// by the context itself; each following segment steps into an object key or
/// an array index. Properties come out in the object's own key order.
#[derive(Debug, Clone, Default)]
pub struct PropertyTypeInspector {
    config: InspectorConfig,
}

impl PropertyTypeInspector {
    /// Create an inspector with default configuration
    pub fn new() -> Self {
        Self::with_config(InspectorConfig::default())
    }

    /// Create an inspector with custom configuration
    pub fn with_config(config: InspectorConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &InspectorConfig {
        &self.config
    }

    /// Find the value a (possibly dotted) type name refers to within the context
    pub fn locate<'a>(&self, context: &'a Value, type_name: &TypeName) -> Option<&'a Value> {
        // The root segment is the context itself and is never followed
        let followed = type_name.depth() - 1;
        if followed > self.config.max_depth {
            warn!(
                type_name = %type_name,
                followed,
                max_depth = self.config.max_depth,
                "Type name exceeds maximum inspection depth"
            );
            return None;
        }

        let mut current = context;
        for segment in type_name.segments().skip(1) {
            current = match current {
                Value::Object(map) => map.get(segment)?,
                Value::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                _ => return None,
            };
        }
        Some(current)
    }

    /// Describe a live value
    ///
    /// Objects produce one property per key; scalars and arrays produce a
    /// descriptor carrying only their kind. Null and empty objects have
    /// nothing to render.
    pub fn describe(&self, value: &Value) -> Option<MetadataDescriptor> {
        match value {
            Value::Null => None,
            Value::Object(map) if map.is_empty() => None,
            Value::Object(map) => Some(MetadataDescriptor::object(
                map.iter()
                    .filter_map(|(name, value)| self.describe_property(name, value))
                    .collect(),
            )),
            other => PropertyKind::of_value(other).map(MetadataDescriptor::of_kind),
        }
    }

    fn describe_property(&self, name: &str, value: &Value) -> Option<PropertyMetadata> {
        let kind = PropertyKind::of_value(value);
        if kind.is_none() && !self.config.include_nulls {
            return None;
        }

        let mut property = PropertyMetadata::new(name, kind);
        if let Value::String(text) = value {
            if self.config.detect_formats {
                property.format = detect_format(text);
            }
            property.large =
                text.contains('\n') || text.chars().count() > self.config.large_text_threshold;
        }
        Some(property)
    }
}

impl Inspector for PropertyTypeInspector {
    fn name(&self) -> &str {
        "property-type"
    }

    fn inspect(&self, context: Option<&Value>, type_name: &TypeName) -> Option<MetadataDescriptor> {
        let Some(context) = context else {
            trace!(type_name = %type_name, "No context to inspect");
            return None;
        };
        let target = self.locate(context, type_name)?;
        self.describe(target)
    }
}
