//! Legacy constellation importer
//!
//! Parses constellation files in the original starfetch layout and checks the
//! parts of the schema that serde alone cannot express.

use serde_json::Value;
use serde_json::error::Category;
use tracing::debug;

use super::ImportError;
use crate::models::{LINE_COUNT, LegacyConstellation, line_key};

/// Legacy constellation importer
#[derive(Debug, Default)]
pub struct LegacyImporter;

impl LegacyImporter {
    /// Create a new LegacyImporter
    pub fn new() -> Self {
        Self
    }

    /// Import legacy constellation JSON
    ///
    /// # Arguments
    ///
    /// * `json_content` - The constellation JSON as a string.
    ///
    /// # Returns
    ///
    /// The parsed `LegacyConstellation`. Malformed JSON yields
    /// `ImportError::ParseError`; a missing or mistyped key yields
    /// `ImportError::SchemaError`.
    ///
    /// # Example
    ///
    /// ```rust
    /// use starfetch_convert::import::LegacyImporter;
    ///
    /// let json = r#"{"title":"T","name":"N","quadrant":1,"right ascension":0,
    ///   "declination":0,"area":0,"main stars":0,"graph":{"line1":{"4":"*"},
    ///   "line2":{},"line3":{},"line4":{},"line5":{},"line6":{},"line7":{},
    ///   "line8":{},"line9":{},"line10":{}}}"#;
    /// let constellation = LegacyImporter::new().import(json).unwrap();
    /// assert_eq!(constellation.name, "N");
    /// ```
    pub fn import(&self, json_content: &str) -> Result<LegacyConstellation, ImportError> {
        // Repeated keys keep their last value at every level.
        let document: Value = serde_json::from_str(json_content).map_err(|e| match e.classify() {
            Category::Data => ImportError::SchemaError(e.to_string()),
            Category::Syntax | Category::Eof | Category::Io => {
                ImportError::ParseError(e.to_string())
            }
        })?;
        let constellation: LegacyConstellation = serde_json::from_value(document)
            .map_err(|e| ImportError::SchemaError(e.to_string()))?;

        self.validate_graph(&constellation)?;
        debug!("Imported legacy constellation '{}'", constellation.name);
        Ok(constellation)
    }

    /// Check that `graph` carries every line and that each line is an object
    fn validate_graph(&self, constellation: &LegacyConstellation) -> Result<(), ImportError> {
        for line in 1..=LINE_COUNT {
            match constellation.graph.line(line) {
                Some(value) if value.is_object() => {}
                Some(_) => {
                    return Err(ImportError::SchemaError(format!(
                        "graph.{} must be an object",
                        line_key(line)
                    )));
                }
                None => {
                    return Err(ImportError::SchemaError(format!(
                        "missing field `graph.{}`",
                        line_key(line)
                    )));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{Value, json};

    fn legacy_json() -> Value {
        let mut graph = serde_json::Map::new();
        for line in 1..=LINE_COUNT {
            graph.insert(line_key(line), json!({}));
        }
        json!({
            "title": "T",
            "name": "N",
            "quadrant": "NQ2",
            "right ascension": "12h",
            "declination": "+40°",
            "area": 100,
            "main stars": 7,
            "graph": graph,
        })
    }

    #[test]
    fn test_import_minimal() {
        let result = LegacyImporter::new().import(&legacy_json().to_string());
        let constellation = result.unwrap();
        assert_eq!(constellation.title, "T");
        assert_eq!(constellation.right_ascension, json!("12h"));
        assert_eq!(constellation.main_stars, json!(7));
    }

    #[test]
    fn test_import_malformed_json() {
        let result = LegacyImporter::new().import("{\"title\": ");
        assert!(matches!(result, Err(ImportError::ParseError(_))));
    }

    #[test]
    fn test_import_missing_top_level_key() {
        let mut doc = legacy_json();
        doc.as_object_mut().unwrap().remove("main stars");
        let result = LegacyImporter::new().import(&doc.to_string());
        match result {
            Err(ImportError::SchemaError(msg)) => assert!(msg.contains("main stars")),
            other => panic!("Expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_import_missing_graph_line() {
        let mut doc = legacy_json();
        doc["graph"].as_object_mut().unwrap().remove("line7");
        let result = LegacyImporter::new().import(&doc.to_string());
        match result {
            Err(ImportError::SchemaError(msg)) => assert!(msg.contains("graph.line7")),
            other => panic!("Expected schema error, got {:?}", other),
        }
    }

    #[test]
    fn test_import_line_not_object() {
        let mut doc = legacy_json();
        doc["graph"]["line2"] = json!(["a"]);
        let result = LegacyImporter::new().import(&doc.to_string());
        assert!(matches!(result, Err(ImportError::SchemaError(_))));
    }

    #[test]
    fn test_import_title_must_be_string() {
        let mut doc = legacy_json();
        doc["title"] = json!(5);
        let result = LegacyImporter::new().import(&doc.to_string());
        assert!(matches!(result, Err(ImportError::SchemaError(_))));
    }

    #[test]
    fn test_import_repeated_key_keeps_last_value() {
        let mut doc = legacy_json().to_string();
        doc.insert_str(1, r#""title":"first","#);
        let constellation = LegacyImporter::new().import(&doc).unwrap();
        assert_eq!(constellation.title, "T");
    }

    #[test]
    fn test_import_non_object_document() {
        let result = LegacyImporter::new().import("[1, 2]");
        assert!(matches!(result, Err(ImportError::SchemaError(_))));
    }

    #[test]
    fn test_import_null_declination_is_present() {
        let mut doc = legacy_json();
        doc["declination"] = Value::Null;
        let constellation = LegacyImporter::new().import(&doc.to_string()).unwrap();
        assert_eq!(constellation.declination, Value::Null);
    }
}
