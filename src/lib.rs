//! Widget Inspector - metadata resolution for generated forms
//!
//! Provides:
//! - Validated type names and ordered metadata descriptors
//! - Inspector strategies (static tables, reflection over live JSON, closures)
//! - A first-match-wins resolver chain composing those strategies
//! - The all-widgets demo configuration and its fixtures

pub mod controller;
pub mod error;
pub mod fixtures;
pub mod formats;
pub mod inspector;
pub mod types;

// Re-export commonly used types
pub use controller::{WidgetConfig, all_widgets_config, all_widgets_config_with};
pub use error::{InspectorError, InspectorResult};
pub use formats::{Format, detect_format};
pub use inspector::{
    CompositeInspector, FnInspector, Inspector, InspectorConfig, PropertyTypeInspector,
    Resolution, StaticInspector,
};
pub use types::{MetadataDescriptor, PropertyKind, PropertyMetadata, TypeName};
