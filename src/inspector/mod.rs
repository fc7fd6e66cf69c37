//! Metadata inspectors and the chain that composes them
//!
//! An [`Inspector`] maps a [`TypeName`] (plus the live object being
//! inspected, when the host has one) to a [`MetadataDescriptor`], or to
//! nothing. A [`CompositeInspector`] tries its inspectors in order and keeps
//! the first non-empty answer.
//!
//! ## Example
//!
//! ```rust,ignore
//! use widget_inspector::inspector::{CompositeInspector, PropertyTypeInspector, StaticInspector};
//! use serde_json::json;
//!
//! let overrides = StaticInspector::from_yaml_str(include_str!("overrides.yaml"))?;
//! let chain = CompositeInspector::builder()
//!     .with(overrides)
//!     .with(PropertyTypeInspector::new())
//!     .build();
//!
//! let metadata = chain.resolve_str("person", Some(&json!({"name": "Alice"})))?;
//! ```

mod composite;
mod config;
mod function;
mod property_type;
mod static_table;

pub use composite::{CompositeInspector, CompositeInspectorBuilder, Resolution};
pub use config::{InspectorConfig, InspectorConfigBuilder};
pub use function::FnInspector;
pub use property_type::PropertyTypeInspector;
pub use static_table::StaticInspector;

use serde_json::Value;

use crate::types::{MetadataDescriptor, TypeName};

/// A single strategy for resolving a type name to metadata
///
/// Implementations must be pure with respect to their inputs so repeated
/// renders see identical metadata.
pub trait Inspector: Send + Sync {
    /// Short name used in logs and resolution reports
    fn name(&self) -> &str;

    /// Describe `type_name`, or return `None` when this strategy has no answer
    fn inspect(&self, context: Option<&Value>, type_name: &TypeName)
    -> Option<MetadataDescriptor>;
}

impl<I: Inspector + ?Sized> Inspector for Box<I> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn inspect(
        &self,
        context: Option<&Value>,
        type_name: &TypeName,
    ) -> Option<MetadataDescriptor> {
        (**self).inspect(context, type_name)
    }
}

impl<I: Inspector + ?Sized> Inspector for std::sync::Arc<I> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn inspect(
        &self,
        context: Option<&Value>,
        type_name: &TypeName,
    ) -> Option<MetadataDescriptor> {
        (**self).inspect(context, type_name)
    }
}
