//! Hand-authored metadata and demo data for the all-widgets page
//!
//! The descriptors exercise every display hint the form generator supports;
//! the data is the collection bound to the generated form.

use serde_json::Value;

use crate::error::InspectorResult;
use crate::types::MetadataDescriptor;

const ALL_WIDGETS_METADATA: &str = include_str!("all_widgets_metadata.json");
const NESTED_WIDGETS_METADATA: &str = include_str!("nested_widgets_metadata.json");
const ALL_WIDGETS_DATA: &str = include_str!("all_widgets.json");

/// Metadata for the top-level `allWidgets` object
pub fn all_widgets_metadata() -> InspectorResult<MetadataDescriptor> {
    parse_descriptor(ALL_WIDGETS_METADATA)
}

/// Metadata shared by every nested widgets object
pub fn nested_widgets_metadata() -> InspectorResult<MetadataDescriptor> {
    parse_descriptor(NESTED_WIDGETS_METADATA)
}

/// The `allWidgets` collection rendered by the demo page
pub fn all_widgets_data() -> InspectorResult<Value> {
    Ok(serde_json::from_str(ALL_WIDGETS_DATA)?)
}

fn parse_descriptor(json: &str) -> InspectorResult<MetadataDescriptor> {
    MetadataDescriptor::from_json_value(serde_json::from_str(json)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::PropertyKind;

    #[test]
    fn test_all_widgets_metadata() {
        let metadata = all_widgets_metadata().unwrap();
        assert_eq!(metadata.kind, Some(PropertyKind::Object));
        assert_eq!(metadata.properties.len(), 19);
        assert_eq!(metadata.properties[0].name, "textbox");
        assert!(metadata.property("textbox").unwrap().required);
        assert_eq!(
            metadata.property("limitedTextbox").unwrap().maximum_length,
            Some(20)
        );
        assert!(metadata.property("readOnlyNestedWidgets").unwrap().read_only);
        assert!(metadata.property("nestedWidgetsDontExpand").unwrap().dont_expand);
        assert!(metadata.property("mystery").unwrap().kind.is_none());
        assert_eq!(
            metadata.property("doAction").unwrap().kind,
            Some(PropertyKind::Function)
        );
    }

    #[test]
    fn test_nested_widgets_metadata() {
        let metadata = nested_widgets_metadata().unwrap();
        assert_eq!(
            metadata.property_names(),
            vec!["nestedTextbox1", "nestedTextbox2"]
        );
    }

    #[test]
    fn test_all_widgets_data() {
        let data = all_widgets_data().unwrap();
        assert_eq!(data["textbox"], "Textbox");
        assert_eq!(data["nestedWidgets"]["nestedTextbox2"], "Nested Textbox 2");
    }
}
