//! Configuration for the all-widgets form
//!
//! The factory returns everything the rendering side needs: the name the data
//! is bound under, the data itself, and the inspector chain used to describe
//! it. Callers own the result and hand it to the renderer.

use std::sync::Arc;

use serde_json::Value;
use tracing::debug;

use crate::error::InspectorResult;
use crate::fixtures;
use crate::inspector::{
    CompositeInspector, InspectorConfig, PropertyTypeInspector, StaticInspector,
};
use crate::types::{MetadataDescriptor, TypeName};

/// Name the demo collection is bound under
pub const ALL_WIDGETS_BINDING: &str = "allWidgets";

/// Type names answered by the fixture table rather than by reflection
pub const FIXTURE_TYPE_NAMES: [&str; 4] = [
    "allWidgets",
    "allWidgets.nestedWidgets",
    "allWidgets.readOnlyNestedWidgets",
    "allWidgets.nestedWidgetsDontExpand",
];

/// Everything a form renderer needs for one bound collection
#[derive(Debug)]
pub struct WidgetConfig {
    pub binding: String,
    pub data: Value,
    pub inspector: CompositeInspector,
}

impl WidgetConfig {
    /// Resolve metadata for a type name against the bound data
    pub fn inspect(&self, type_name: &str) -> InspectorResult<Option<MetadataDescriptor>> {
        self.inspector.resolve_str(type_name, Some(&self.data))
    }
}

/// Fixture table for the four hand-described type names
pub fn all_widgets_table() -> InspectorResult<StaticInspector> {
    let nested = Arc::new(fixtures::nested_widgets_metadata()?);

    Ok(StaticInspector::named("all-widgets-fixtures")
        .with_entry(
            TypeName::parse(FIXTURE_TYPE_NAMES[0])?,
            fixtures::all_widgets_metadata()?,
        )
        .with_shared(TypeName::parse(FIXTURE_TYPE_NAMES[1])?, Arc::clone(&nested))
        .with_shared(TypeName::parse(FIXTURE_TYPE_NAMES[2])?, Arc::clone(&nested))
        .with_shared(TypeName::parse(FIXTURE_TYPE_NAMES[3])?, nested))
}

/// Build the all-widgets configuration with default reflection settings
pub fn all_widgets_config() -> InspectorResult<WidgetConfig> {
    all_widgets_config_with(InspectorConfig::default())
}

/// Build the all-widgets configuration with a custom fallback inspector
///
/// The fixture table always comes first so hand-authored metadata overrides
/// anything derived from the live data.
pub fn all_widgets_config_with(config: InspectorConfig) -> InspectorResult<WidgetConfig> {
    let inspector = CompositeInspector::builder()
        .with(all_widgets_table()?)
        .with(PropertyTypeInspector::with_config(config))
        .build();

    debug!(
        binding = ALL_WIDGETS_BINDING,
        inspectors = ?inspector.inspector_names(),
        "Built all-widgets configuration"
    );

    Ok(WidgetConfig {
        binding: ALL_WIDGETS_BINDING.to_string(),
        data: fixtures::all_widgets_data()?,
        inspector,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_covers_fixture_names() {
        let table = all_widgets_table().unwrap();
        assert_eq!(table.len(), FIXTURE_TYPE_NAMES.len());
        for name in FIXTURE_TYPE_NAMES {
            assert!(table.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_config_chain_order() {
        let config = all_widgets_config().unwrap();
        assert_eq!(config.binding, "allWidgets");
        assert_eq!(
            config.inspector.inspector_names(),
            vec!["all-widgets-fixtures", "property-type"]
        );
    }

    #[test]
    fn test_config_inspect() {
        let config = all_widgets_config().unwrap();

        let nested = config.inspect("allWidgets.readOnlyNestedWidgets").unwrap();
        assert_eq!(nested, Some(fixtures::nested_widgets_metadata().unwrap()));

        // Not in the table: derived from the bound data
        let collection = config.inspect("allWidgets.collection").unwrap().unwrap();
        assert_eq!(collection.kind, Some(crate::types::PropertyKind::Array));

        assert!(config.inspect("allWidgets.nope").unwrap().is_none());
        assert!(config.inspect("").is_err());
    }

    #[test]
    fn test_custom_fallback_config() {
        let fallback = InspectorConfig::builder().max_depth(1).build();
        let config = all_widgets_config_with(fallback).unwrap();

        // One segment below the binding is within the limit, a second is not
        assert!(config.inspect("allWidgets.textbox").unwrap().is_some());
        assert!(config.inspect("allWidgets.collection.0").unwrap().is_none());
        // Fixtures are unaffected by the fallback's depth limit
        assert!(config.inspect("allWidgets.nestedWidgets").unwrap().is_some());
    }

    #[test]
    fn test_reflection_keeps_null_fields() {
        let config = all_widgets_config().unwrap();
        let type_name = TypeName::parse("data").unwrap();

        // Outside the fixture table, reflection still lists the untyped field
        let reflected = config.inspector.resolve(&type_name, Some(&config.data)).unwrap();
        let mystery = reflected.property("mystery").unwrap();
        assert!(mystery.kind.is_none());
        assert_eq!(
            fixtures::all_widgets_metadata().unwrap().property("mystery").unwrap().kind,
            mystery.kind
        );
    }
}
