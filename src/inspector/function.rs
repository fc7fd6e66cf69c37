//! Closure-backed inspector

use serde_json::Value;

use super::Inspector;
use crate::types::{MetadataDescriptor, TypeName};

type InspectFn = dyn Fn(Option<&Value>, &TypeName) -> Option<MetadataDescriptor> + Send + Sync;

/// Inspector backed by a plain function, for ad-hoc strategies in a chain
pub struct FnInspector {
    name: String,
    inspect: Box<InspectFn>,
}

impl FnInspector {
    pub fn new<F>(name: impl Into<String>, inspect: F) -> Self
    where
        F: Fn(Option<&Value>, &TypeName) -> Option<MetadataDescriptor> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            inspect: Box::new(inspect),
        }
    }
}

impl Inspector for FnInspector {
    fn name(&self) -> &str {
        &self.name
    }

    fn inspect(
        &self,
        context: Option<&Value>,
        type_name: &TypeName,
    ) -> Option<MetadataDescriptor> {
        (self.inspect)(context, type_name)
    }
}

impl std::fmt::Debug for FnInspector {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FnInspector")
            .field("name", &self.name)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PropertyKind;

    #[test]
    fn test_switch_style_inspector() {
        let inspector = FnInspector::new("switch", |_, type_name| match type_name.as_str() {
            "known" => Some(MetadataDescriptor::of_kind(PropertyKind::Boolean)),
            _ => None,
        });

        assert_eq!(inspector.name(), "switch");
        let known = TypeName::parse("known").unwrap();
        let unknown = TypeName::parse("unknown").unwrap();
        assert_eq!(
            inspector.inspect(None, &known),
            Some(MetadataDescriptor::of_kind(PropertyKind::Boolean))
        );
        assert!(inspector.inspect(None, &unknown).is_none());
    }
}
