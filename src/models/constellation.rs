//! Constellation document structures
//!
//! Defines both layouts handled by the converter: the legacy starfetch layout
//! (`LegacyConstellation`) and the renderer layout (`Constellation`).

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Number of graph lines in a legacy constellation (`line1`..`line10`)
pub const LINE_COUNT: usize = 10;

/// Key of the graph line with the given 1-based index
pub fn line_key(line: usize) -> String {
    format!("line{}", line)
}

/// Graph table of a legacy constellation
///
/// Keyed by `line1`..`line10`; each line maps a 1-based column (as a decimal
/// string) to the star drawn there. Map order follows the source document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct LegacyGraph(pub Map<String, Value>);

impl LegacyGraph {
    /// Look up a line by its 1-based index
    pub fn line(&self, line: usize) -> Option<&Value> {
        self.0.get(&line_key(line))
    }
}

/// Legacy constellation
///
/// The layout used by the original starfetch constellation files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LegacyConstellation {
    pub title: String,
    pub name: String,
    pub quadrant: Value,
    #[serde(rename = "right ascension")]
    pub right_ascension: Value,
    pub declination: Value,
    pub area: Value,
    #[serde(rename = "main stars")]
    pub main_stars: Value,
    pub graph: LegacyGraph,
}

/// One star of a converted graph, serialized as `[col, row, value]`
///
/// `col` and `row` are 0-based.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Star(pub i64, pub u32, pub Value);

impl Star {
    pub fn col(&self) -> i64 {
        self.0
    }

    pub fn row(&self) -> u32 {
        self.1
    }

    pub fn value(&self) -> &Value {
        &self.2
    }
}

/// Constellation in the renderer layout
///
/// Field order here is the key order of the written file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Constellation {
    pub title: String,
    pub graph: Vec<Star>,
    pub name: String,
    pub quadrant: Value,
    pub right_ascension: Value,
    /// Only written when the conversion was asked to keep it
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub declination: Option<Value>,
    pub area: Value,
    pub main_stars: Value,
}
