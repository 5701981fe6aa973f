//! Constellation exporter
//!
//! Serializes converted constellations in the renderer layout.

use crate::export::ExportError;
use crate::models::Constellation;

/// Constellation Exporter
#[derive(Debug, Default)]
pub struct ConstellationExporter {
    /// Indent the output instead of writing it on one line
    pub pretty: bool,
}

impl ConstellationExporter {
    /// Create a new ConstellationExporter producing compact JSON
    pub fn new() -> Self {
        Self { pretty: false }
    }

    /// Create a ConstellationExporter producing indented JSON
    pub fn pretty() -> Self {
        Self { pretty: true }
    }

    /// Export a constellation as JSON
    ///
    /// # Arguments
    ///
    /// * `constellation` - The converted constellation.
    ///
    /// # Returns
    ///
    /// The JSON text, keys in renderer order.
    pub fn export(&self, constellation: &Constellation) -> Result<String, ExportError> {
        let result = if self.pretty {
            serde_json::to_string_pretty(constellation)
        } else {
            serde_json::to_string(constellation)
        };
        result.map_err(|e| {
            ExportError::SerializationError(format!("Failed to serialize constellation: {}", e))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Star;
    use serde_json::json;

    fn sample() -> Constellation {
        Constellation {
            title: "T".to_string(),
            graph: vec![Star(0, 0, json!("a"))],
            name: "N".to_string(),
            quadrant: json!(1),
            right_ascension: json!(12.5),
            declination: None,
            area: json!(100),
            main_stars: json!(2),
        }
    }

    #[test]
    fn test_export_compact() {
        let json = ConstellationExporter::new().export(&sample()).unwrap();
        assert_eq!(
            json,
            r#"{"title":"T","graph":[[0,0,"a"]],"name":"N","quadrant":1,"right_ascension":12.5,"area":100,"main_stars":2}"#
        );
    }

    #[test]
    fn test_export_pretty_parses_back() {
        let mut constellation = sample();
        constellation.declination = Some(json!(-3.2));
        let json = ConstellationExporter::pretty().export(&constellation).unwrap();
        assert!(json.contains('\n'));
        let parsed: Constellation = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, constellation);
    }
}
