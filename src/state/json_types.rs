use std::fmt;

use serde::Deserialize;
use serde::de::{self, Deserializer};
use serde_json::{Map, Value as JsonValue};

/// Root structure of a `*.tfstate` document.
///
/// Only the fields the generator consumes are modelled. A document missing
/// `resources`, a resource missing `module`, or an instance missing
/// `attributes` does not match the supported schema and fails the parse.
#[derive(Debug, Deserialize)]
pub struct StateFile {
    pub resources: Vec<StateResource>,
}

/// One resource entry of the state document.
#[derive(Debug, Deserialize)]
pub struct StateResource {
    /// Dotted module address, e.g. `module.key-vault`.
    pub module: String,
    #[serde(rename = "type")]
    pub resource_type: String,
    pub name: String,
    pub instances: Vec<StateInstance>,
}

impl StateResource {
    /// The output-file base name: the second dot-delimited segment of the
    /// module path (`module.key-vault` -> `key-vault`). None when the path
    /// has fewer than two segments.
    pub fn module_basename(&self) -> Option<&str> {
        self.module.split('.').filter(|s| !s.is_empty()).nth(1)
    }
}

/// One concrete deployed instance of a resource.
#[derive(Debug, Deserialize)]
pub struct StateInstance {
    #[serde(default)]
    pub index_key: Option<IndexKey>,
    /// Arbitrary attribute tree; key order follows the document.
    pub attributes: Map<String, JsonValue>,
}

/// Index key of a `count`/`for_each` instance.
#[derive(Debug, Clone, PartialEq)]
pub enum IndexKey {
    Int(i64),
    String(String),
}

// Hand-written instead of an untagged derive: with serde_json's
// arbitrary_precision feature, numbers reach untagged enums as an opaque
// map token and the derive cannot match them.
impl<'de> Deserialize<'de> for IndexKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match JsonValue::deserialize(deserializer)? {
            JsonValue::Number(n) => n
                .as_i64()
                .map(IndexKey::Int)
                .ok_or_else(|| de::Error::custom(format!("index_key is not an integer: {}", n))),
            JsonValue::String(s) => Ok(IndexKey::String(s)),
            other => Err(de::Error::custom(format!(
                "index_key must be an integer or string, got: {}",
                other
            ))),
        }
    }
}

impl fmt::Display for IndexKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IndexKey::Int(i) => write!(f, "{}", i),
            IndexKey::String(s) => write!(f, "{}", s),
        }
    }
}
