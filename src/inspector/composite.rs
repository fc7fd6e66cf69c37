//! Ordered chain of inspectors with first-match-wins resolution

use serde_json::Value;
use tracing::{debug, trace};

use super::Inspector;
use crate::error::InspectorResult;
use crate::types::{MetadataDescriptor, TypeName};

/// Which inspector in a chain produced a descriptor
#[derive(Debug, Clone, PartialEq)]
pub struct Resolution {
    /// Name of the answering inspector
    pub inspector: String,
    /// Its position in the chain, starting at 0
    pub position: usize,
    pub descriptor: MetadataDescriptor,
}

/// Resolver chain over an ordered list of inspectors
///
/// Inspectors are tried in construction order. The first one to return a
/// non-empty descriptor wins and later inspectors are not consulted. When
/// every inspector declines, there is no metadata for the type.
pub struct CompositeInspector {
    inspectors: Vec<Box<dyn Inspector>>,
}

impl CompositeInspector {
    /// Create a chain from inspectors in resolution order
    pub fn new(inspectors: Vec<Box<dyn Inspector>>) -> Self {
        Self { inspectors }
    }

    /// Create a builder for assembling a chain
    pub fn builder() -> CompositeInspectorBuilder {
        CompositeInspectorBuilder::default()
    }

    /// Resolve a type name to metadata
    pub fn resolve(
        &self,
        type_name: &TypeName,
        context: Option<&Value>,
    ) -> Option<MetadataDescriptor> {
        self.resolve_traced(type_name, context)
            .map(|resolution| resolution.descriptor)
    }

    /// Resolve a raw string type name
    ///
    /// Fails only when the name itself is invalid; an unknown but valid name
    /// resolves to `Ok(None)`.
    pub fn resolve_str(
        &self,
        type_name: &str,
        context: Option<&Value>,
    ) -> InspectorResult<Option<MetadataDescriptor>> {
        let type_name = TypeName::parse(type_name)?;
        Ok(self.resolve(&type_name, context))
    }

    /// Resolve and report which inspector answered
    pub fn resolve_traced(
        &self,
        type_name: &TypeName,
        context: Option<&Value>,
    ) -> Option<Resolution> {
        for (position, inspector) in self.inspectors.iter().enumerate() {
            trace!(
                inspector = inspector.name(),
                position,
                type_name = %type_name,
                "Trying inspector"
            );

            match inspector.inspect(context, type_name) {
                Some(descriptor) if !descriptor.is_empty() => {
                    debug!(
                        inspector = inspector.name(),
                        position,
                        type_name = %type_name,
                        properties = descriptor.properties.len(),
                        "Metadata resolved"
                    );
                    return Some(Resolution {
                        inspector: inspector.name().to_string(),
                        position,
                        descriptor,
                    });
                }
                _ => continue,
            }
        }

        debug!(type_name = %type_name, "No inspector produced metadata");
        None
    }

    /// Number of inspectors in the chain
    pub fn len(&self) -> usize {
        self.inspectors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inspectors.is_empty()
    }

    /// Inspector names in resolution order
    pub fn inspector_names(&self) -> Vec<&str> {
        self.inspectors.iter().map(|i| i.name()).collect()
    }
}

impl Inspector for CompositeInspector {
    fn name(&self) -> &str {
        "composite"
    }

    fn inspect(
        &self,
        context: Option<&Value>,
        type_name: &TypeName,
    ) -> Option<MetadataDescriptor> {
        self.resolve(type_name, context)
    }
}

impl std::fmt::Debug for CompositeInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CompositeInspector")
            .field("inspectors", &self.inspector_names())
            .finish()
    }
}

/// Builder for CompositeInspector
#[derive(Default)]
pub struct CompositeInspectorBuilder {
    inspectors: Vec<Box<dyn Inspector>>,
}

impl CompositeInspectorBuilder {
    /// Append an inspector; it will be tried after those already added
    pub fn with<I>(mut self, inspector: I) -> Self
    where
        I: Inspector + 'static,
    {
        self.inspectors.push(Box::new(inspector));
        self
    }

    /// Build the chain
    pub fn build(self) -> CompositeInspector {
        CompositeInspector::new(self.inspectors)
    }
}
