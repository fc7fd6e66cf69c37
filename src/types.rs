//! Type names and metadata descriptors

use std::borrow::Borrow;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{InspectorError, InspectorResult};
use crate::formats::Format;

/// Validated key naming a data shape to inspect
///
/// Either a top-level binding (`allWidgets`) or a dotted path to a nested
/// field (`allWidgets.nestedWidgets`). Segments are never empty.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeName(String);

impl TypeName {
    /// Parse and validate a type name
    pub fn parse(name: &str) -> InspectorResult<Self> {
        if name.is_empty() {
            return Err(InspectorError::invalid_type_name(name, "must not be empty"));
        }
        if name.trim() != name {
            return Err(InspectorError::invalid_type_name(
                name,
                "must not have leading or trailing whitespace",
            ));
        }
        if name.split('.').any(str::is_empty) {
            return Err(InspectorError::invalid_type_name(
                name,
                "contains an empty segment",
            ));
        }
        Ok(TypeName(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Dotted path segments, root first
    pub fn segments(&self) -> impl Iterator<Item = &str> {
        self.0.split('.')
    }

    /// The top-level binding this name starts from
    pub fn root(&self) -> &str {
        self.segments().next().unwrap_or(self.0.as_str())
    }

    /// Number of segments (1 for a top-level name)
    pub fn depth(&self) -> usize {
        self.segments().count()
    }

    /// Name of the enclosing type, if this is a nested path
    pub fn parent(&self) -> Option<TypeName> {
        self.0
            .rsplit_once('.')
            .map(|(parent, _)| TypeName(parent.to_string()))
    }

    /// Name of a field nested under this type
    pub fn child(&self, field: &str) -> InspectorResult<TypeName> {
        TypeName::parse(&format!("{}.{}", self.0, field))
    }
}

impl fmt::Display for TypeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for TypeName {
    type Err = InspectorError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TypeName::parse(s)
    }
}

impl TryFrom<String> for TypeName {
    type Error = InspectorError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        TypeName::parse(&value)
    }
}

impl TryFrom<&str> for TypeName {
    type Error = InspectorError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        TypeName::parse(value)
    }
}

impl From<TypeName> for String {
    fn from(name: TypeName) -> Self {
        name.0
    }
}

impl AsRef<str> for TypeName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for TypeName {
    fn borrow(&self) -> &str {
        &self.0
    }
}

/// Semantic type of a property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PropertyKind {
    Boolean,
    Integer,
    Number,
    String,
    Array,
    Object,
    /// An action rather than a value; rendered as a button
    Function,
}

impl PropertyKind {
    /// Kind of a live JSON value, `None` for null
    pub fn of_value(value: &Value) -> Option<PropertyKind> {
        match value {
            Value::Null => None,
            Value::Bool(_) => Some(PropertyKind::Boolean),
            Value::Number(n) if n.is_i64() || n.is_u64() => Some(PropertyKind::Integer),
            Value::Number(_) => Some(PropertyKind::Number),
            Value::String(_) => Some(PropertyKind::String),
            Value::Array(_) => Some(PropertyKind::Array),
            Value::Object(_) => Some(PropertyKind::Object),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PropertyKind::Boolean => "boolean",
            PropertyKind::Integer => "integer",
            PropertyKind::Number => "number",
            PropertyKind::String => "string",
            PropertyKind::Array => "array",
            PropertyKind::Object => "object",
            PropertyKind::Function => "function",
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// Description of a single field: its name, semantic type and display hints
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct PropertyMetadata {
    /// Field name (the key in the descriptor's `properties` map)
    #[serde(skip)]
    pub name: String,
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PropertyKind>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
    /// Section heading rendered before this field
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub section: Option<String>,
    #[serde(default, skip_serializing_if = "is_false")]
    pub required: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub read_only: bool,
    /// Render nested objects as a single value instead of expanding them
    #[serde(default, skip_serializing_if = "is_false")]
    pub dont_expand: bool,
    #[serde(default, skip_serializing_if = "is_false")]
    pub hidden: bool,
    /// Multi-line text
    #[serde(default, skip_serializing_if = "is_false")]
    pub large: bool,
    /// Obscured input such as passwords
    #[serde(default, skip_serializing_if = "is_false")]
    pub masked: bool,
    /// Allowed values, rendered as a drop-down
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lookup: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub lookup_labels: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_length: Option<usize>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub minimum_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub maximum_value: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub format: Option<Format>,
}

impl PropertyMetadata {
    /// Create a property with a name and kind and no hints
    pub fn new(name: impl Into<String>, kind: Option<PropertyKind>) -> Self {
        Self {
            name: name.into(),
            kind,
            ..Default::default()
        }
    }

    pub fn with_required(mut self, required: bool) -> Self {
        self.required = required;
        self
    }

    pub fn with_read_only(mut self, read_only: bool) -> Self {
        self.read_only = read_only;
        self
    }

    pub fn with_large(mut self, large: bool) -> Self {
        self.large = large;
        self
    }

    pub fn with_format(mut self, format: Option<Format>) -> Self {
        self.format = format;
        self
    }

    pub fn with_lookup(mut self, lookup: Vec<String>) -> Self {
        self.lookup = lookup;
        self
    }
}

/// Ordered field descriptions for one type name
///
/// Serializes to the inspection-result shape:
/// `{"type": "object", "properties": {"name": {...}, ...}}`
/// with `properties` in declaration order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct MetadataDescriptor {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub kind: Option<PropertyKind>,
    #[serde(
        default,
        skip_serializing_if = "Vec::is_empty",
        with = "properties_map"
    )]
    pub properties: Vec<PropertyMetadata>,
}

impl MetadataDescriptor {
    /// Create an empty descriptor
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an object descriptor with the given properties
    pub fn object(properties: Vec<PropertyMetadata>) -> Self {
        Self {
            kind: Some(PropertyKind::Object),
            properties,
        }
    }

    /// Create a descriptor for a single scalar or collection value
    pub fn of_kind(kind: PropertyKind) -> Self {
        Self {
            kind: Some(kind),
            properties: Vec::new(),
        }
    }

    /// Append a property, replacing any existing property with the same name
    pub fn with_property(mut self, property: PropertyMetadata) -> Self {
        match self.properties.iter_mut().find(|p| p.name == property.name) {
            Some(existing) => *existing = property,
            None => self.properties.push(property),
        }
        self
    }

    /// True when the descriptor carries neither a type nor any properties
    pub fn is_empty(&self) -> bool {
        self.kind.is_none() && self.properties.is_empty()
    }

    /// Look up a property by name
    pub fn property(&self, name: &str) -> Option<&PropertyMetadata> {
        self.properties.iter().find(|p| p.name == name)
    }

    /// Property names in declaration order
    pub fn property_names(&self) -> Vec<&str> {
        self.properties.iter().map(|p| p.name.as_str()).collect()
    }

    /// Parse a descriptor from an inspection-result JSON value
    pub fn from_json_value(value: Value) -> InspectorResult<Self> {
        if !value.is_object() {
            return Err(InspectorError::InvalidDescriptor(format!(
                "expected object, found {}",
                PropertyKind::of_value(&value).map_or("null", |k| k.as_str())
            )));
        }
        serde_json::from_value(value).map_err(|e| InspectorError::InvalidDescriptor(e.to_string()))
    }

    /// Serialize to an inspection-result JSON value
    pub fn to_json_value(&self) -> InspectorResult<Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// Serializes the property list as a name-keyed map, keeping order
mod properties_map {
    use serde::de::Error as _;
    use serde::ser::SerializeMap;
    use serde::{Deserialize, Deserializer, Serializer};
    use serde_json::{Map, Value};

    use super::PropertyMetadata;

    pub fn serialize<S>(properties: &[PropertyMetadata], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(properties.len()))?;
        for property in properties {
            map.serialize_entry(&property.name, property)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<PropertyMetadata>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = Map::<String, Value>::deserialize(deserializer)?;
        raw.into_iter()
            .map(|(name, attributes)| {
                let mut property: PropertyMetadata = serde_json::from_value(attributes)
                    .map_err(|e| D::Error::custom(format!("property '{}': {}", name, e)))?;
                property.name = name;
                Ok(property)
            })
            .collect()
    }
}
