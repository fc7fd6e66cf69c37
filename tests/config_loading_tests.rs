//! Loading static metadata tables from files

use std::io::Write;

use serde_json::json;
use tempfile::{Builder, NamedTempFile};
use widget_inspector::{
    CompositeInspector, Format, InspectorError, PropertyKind, PropertyTypeInspector,
    StaticInspector,
};

fn temp_file(suffix: &str, content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

mod file_loading_tests {
    use super::*;

    #[test]
    fn test_load_json_table() {
        let file = temp_file(
            ".json",
            r#"{
                "order": {
                    "type": "object",
                    "properties": {
                        "placed": {"type": "string", "format": "date", "required": true},
                        "status": {"type": "string", "lookup": ["open", "closed"]}
                    }
                },
                "order.history": "order"
            }"#,
        );

        let table = StaticInspector::from_path(file.path()).unwrap();
        assert_eq!(table.len(), 2);

        let order = table.get("order").unwrap();
        assert_eq!(order.property_names(), vec!["placed", "status"]);
        assert_eq!(order.property("placed").unwrap().format, Some(Format::Date));
        assert_eq!(table.get("order.history"), Some(order));
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_load_yaml_table_into_chain() {
        let file = temp_file(
            ".yml",
            r#"
order:
  type: object
  properties:
    total: { type: number, minimumValue: 0 }
    notes: { type: string, large: true }
"#,
        );

        let chain = CompositeInspector::builder()
            .with(StaticInspector::from_path(file.path()).unwrap())
            .with(PropertyTypeInspector::new())
            .build();

        let live = json!({"id": 7});
        let order = chain.resolve_str("order", Some(&live)).unwrap().unwrap();
        assert_eq!(order.property_names(), vec!["total", "notes"]);
        assert_eq!(order.property("total").unwrap().minimum_value, Some(0.0));
        assert!(order.property("notes").unwrap().large);

        let other = chain.resolve_str("invoice", Some(&live)).unwrap().unwrap();
        assert_eq!(other.property("id").unwrap().kind, Some(PropertyKind::Integer));
    }

    #[test]
    fn test_unsupported_extension() {
        let file = temp_file(".toml", "[order]");
        assert!(matches!(
            StaticInspector::from_path(file.path()),
            Err(InspectorError::UnsupportedFormat(ext)) if ext == "toml"
        ));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.json");
        assert!(matches!(
            StaticInspector::from_path(&missing),
            Err(InspectorError::Io(_))
        ));
    }

    #[test]
    fn test_malformed_descriptor_names_the_entry() {
        let file = temp_file(
            ".json",
            r#"{"order": {"properties": {"total": {"type": "money"}}}}"#,
        );
        match StaticInspector::from_path(file.path()) {
            Err(InspectorError::InvalidDescriptor(message)) => {
                assert!(message.contains("order"), "message: {}", message);
            }
            other => panic!("Expected InvalidDescriptor, got {:?}", other),
        }
    }

    #[test]
    fn test_misspelled_hint_is_rejected() {
        let file = temp_file(
            ".json",
            r#"{"order": {"properties": {"total": {
                "type": "number", "read_only": true, "requird": true
            }}}}"#,
        );
        match StaticInspector::from_path(file.path()) {
            Err(InspectorError::InvalidDescriptor(message)) => {
                assert!(message.contains("order"), "message: {}", message);
                assert!(message.contains("read_only"), "message: {}", message);
            }
            other => panic!("Expected InvalidDescriptor, got {:?}", other),
        }
    }

    #[cfg(feature = "yaml")]
    #[test]
    fn test_yaml_unknown_descriptor_key_is_rejected() {
        let yaml = r#"
order:
  type: object
  fields:
    total: { type: number }
"#;
        let file = temp_file(".yaml", yaml);
        assert!(matches!(
            StaticInspector::from_path(file.path()),
            Err(InspectorError::InvalidDescriptor(_))
        ));
    }
}
