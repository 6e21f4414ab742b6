//! Scene-export document loading.
//!
//! FModel dumps a cooked asset as a JSON array of exported objects. The
//! animation blueprint's node graph lives on the record whose `Type` is
//! the blueprint's generated class (`ABP_..._C`); its `Properties` map
//! holds one entry per graph node, keyed by node name, in document order.

use std::path::Path;

use serde_json::{Map, Value};

use super::{ExportError, ExportResult};

/// A parsed scene-export document: the flat list of exported records.
pub struct SceneDocument {
    records: Vec<Value>,
}

impl SceneDocument {
    /// Parse a document from JSON text. The root must be an array of
    /// records; anything else is a parse error.
    pub fn parse(content: &str) -> ExportResult<Self> {
        let records: Vec<Value> = serde_json::from_str(content)?;
        Ok(Self { records })
    }

    /// Load a document from a file on disk.
    pub fn load<P: AsRef<Path>>(path: P) -> ExportResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Find the record whose `Type` equals `class` and return its node
    /// property map.
    ///
    /// The map preserves document order; iterating it decides the order
    /// of the emitted object blocks.
    pub fn node_properties(&self, class: &str) -> ExportResult<&Map<String, Value>> {
        let record = self
            .records
            .iter()
            .find(|record| record.get("Type").and_then(Value::as_str) == Some(class))
            .ok_or_else(|| ExportError::NotFound(class.to_string()))?;

        record
            .get("Properties")
            .and_then(Value::as_object)
            .ok_or_else(|| ExportError::MissingField {
                key: class.to_string(),
                field: "Properties".to_string(),
            })
    }

    /// Scan for the animation blueprint class this document was exported
    /// from.
    ///
    /// FModel writes the generated class as an `Outer` reference ending in
    /// `_C`; the first such value names the blueprint.
    pub fn detect_blueprint_class(&self) -> Option<&str> {
        self.records
            .iter()
            .filter_map(|record| record.get("Outer").and_then(Value::as_str))
            .find(|outer| outer.ends_with("_C"))
    }

    /// Number of top-level records in the export.
    pub fn record_count(&self) -> usize {
        self.records.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_and_find_properties() {
        let content = r#"[
            { "Type": "Function", "Name": "ExecuteUbergraph" },
            {
                "Type": "ABP_Test_C",
                "Name": "Default__ABP_Test_C",
                "Properties": {
                    "Zed": {},
                    "Alpha": {},
                    "Mid": {}
                }
            }
        ]"#;

        let document = SceneDocument::parse(content).unwrap();
        assert_eq!(document.record_count(), 2);

        let props = document.node_properties("ABP_Test_C").unwrap();
        let keys: Vec<&str> = props.keys().map(String::as_str).collect();

        // Document order, not lexical order
        assert_eq!(keys, vec!["Zed", "Alpha", "Mid"]);
    }

    #[test]
    fn test_missing_class_is_not_found() {
        let document = SceneDocument::parse("[]").unwrap();

        match document.node_properties("ABP_Missing_C") {
            Err(ExportError::NotFound(class)) => assert_eq!(class, "ABP_Missing_C"),
            other => panic!("expected NotFound, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_record_without_properties() {
        let content = r#"[ { "Type": "ABP_Test_C" } ]"#;
        let document = SceneDocument::parse(content).unwrap();

        match document.node_properties("ABP_Test_C") {
            Err(ExportError::MissingField { key, field }) => {
                assert_eq!(key, "ABP_Test_C");
                assert_eq!(field, "Properties");
            }
            other => panic!("expected MissingField, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_malformed_json_is_parse_error() {
        match SceneDocument::parse("not json at all") {
            Err(ExportError::Parse(_)) => {}
            other => panic!("expected Parse, got {:?}", other.map(|_| ())),
        }

        // A non-array root is malformed too
        match SceneDocument::parse("{}") {
            Err(ExportError::Parse(_)) => {}
            other => panic!("expected Parse, got {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn test_detect_blueprint_class() {
        let content = r#"[
            { "Type": "Function", "Outer": "SomePackage" },
            { "Type": "AnimGraphNode_CopyBone", "Outer": "ABP_Ch020_C" },
            { "Type": "AnimGraphNode_ModifyBone", "Outer": "ABP_Ch021_C" }
        ]"#;

        let document = SceneDocument::parse(content).unwrap();
        assert_eq!(document.detect_blueprint_class(), Some("ABP_Ch020_C"));

        let none = SceneDocument::parse(r#"[ { "Outer": "NotAClass" } ]"#).unwrap();
        assert_eq!(none.detect_blueprint_class(), None);
    }
}
