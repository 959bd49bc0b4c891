//! Tagged-union representation of a resource instance's attribute tree.
//!
//! Terraform state attributes are arbitrary JSON. Instead of inspecting
//! `serde_json::Value` kinds at every call site, the rendering engine works
//! on this closed `Value` enum so that every shape decision is an
//! exhaustive match.

use serde_json::Value as JsonValue;

/// A single node of an instance's attribute tree.
///
/// Object keys keep the order they appear in the source document; that
/// order drives the order of generated HCL lines. Numbers are carried as
/// text from the moment of parsing so rendering never reformats them.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Number(String),
    String(String),
    Array(Vec<Value>),
    Object(Vec<(String, Value)>),
}

impl Value {
    /// Builds a `Value` tree from a parsed JSON node.
    pub fn from_json(json: &JsonValue) -> Self {
        match json {
            JsonValue::Null => Value::Null,
            JsonValue::Bool(b) => Value::Bool(*b),
            JsonValue::Number(n) => Value::Number(n.to_string()),
            JsonValue::String(s) => Value::String(s.clone()),
            JsonValue::Array(elements) => {
                Value::Array(elements.iter().map(Value::from_json).collect())
            }
            JsonValue::Object(fields) => Value::Object(
                fields
                    .iter()
                    .map(|(name, value)| (name.clone(), Value::from_json(value)))
                    .collect(),
            ),
        }
    }

    /// Returns true for scalar leaves (null, bool, number, string).
    pub fn is_simple(&self) -> bool {
        !matches!(self, Value::Array(_) | Value::Object(_))
    }

    /// The node's natural scalar text: what goes between the quotes of an
    /// attribute assignment. Null has no text, which later suppresses the
    /// whole line.
    pub fn scalar_text(&self) -> String {
        match self {
            Value::Null => String::new(),
            Value::Bool(b) => b.to_string(),
            Value::Number(text) | Value::String(text) => text.clone(),
            Value::Array(_) | Value::Object(_) => self.literal(),
        }
    }

    /// The single-line bracketed/braced textual form of the node, used
    /// verbatim (unquoted) on the right-hand side of an assignment.
    pub fn literal(&self) -> String {
        match self {
            Value::Null => "null".to_string(),
            Value::Bool(b) => b.to_string(),
            Value::Number(text) => text.clone(),
            Value::String(text) => format!("\"{}\"", text),
            Value::Array(elements) => {
                let parts: Vec<String> = elements.iter().map(Value::literal).collect();
                format!("[{}]", parts.join(", "))
            }
            Value::Object(fields) => {
                let parts: Vec<String> = fields
                    .iter()
                    .map(|(name, value)| format!("\"{}\" = {}", name, value.literal()))
                    .collect();
                format!("{{{}}}", parts.join(", "))
            }
        }
    }
}
