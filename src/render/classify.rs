use crate::state::Value;

/// Shape of an attribute value, deciding how it is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Classification {
    /// Scalar leaf: null, bool, number or string.
    Simple,
    /// Array whose elements are all simple; rendered as one `name = [...]`
    /// assignment.
    ScalarArray,
    /// Array containing at least one array or object element; each element
    /// becomes its own `name { ... }` block.
    NestedArray,
    /// Object; rendered as one assignment with the braced literal.
    Object,
}

/// Classifies a value node.
///
/// An empty array classifies as `ScalarArray` (vacuously all-simple); the
/// renderer suppresses it before this distinction matters.
pub fn classify(value: &Value) -> Classification {
    match value {
        Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
            Classification::Simple
        }
        Value::Object(_) => Classification::Object,
        Value::Array(elements) => {
            if elements.iter().all(Value::is_simple) {
                Classification::ScalarArray
            } else {
                Classification::NestedArray
            }
        }
    }
}
