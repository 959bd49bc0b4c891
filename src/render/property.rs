//! Recursive descent from one named attribute to zero or more HCL lines.
//!
//! Each top-level attribute of an instance either becomes a single
//! `name = value` assignment, a run of repeated `name { ... }` blocks, or
//! nothing at all. The descent mirrors Terraform's own convention for
//! collection attributes: a list of objects turns into one nested block per
//! element, anything scalar-shaped stays an assignment.
//!
//! Rendering is a pure function of the input tree; the same tree always
//! produces byte-identical output.

use crate::state::Value;

use super::classify::{Classification, classify};
use super::exclude::ExclusionFilter;

/// Renders attribute nodes into HCL text.
pub struct PropertyRenderer<'a> {
    filter: &'a ExclusionFilter,
}

impl<'a> PropertyRenderer<'a> {
    pub fn new(filter: &'a ExclusionFilter) -> Self {
        Self { filter }
    }

    /// Renders one named attribute, appending lines to `out`.
    ///
    /// Excluded names and empty arrays produce nothing, at any depth. A
    /// nested array (some element is itself an object or array) expands
    /// into one `name { ... }` block per element; everything else goes
    /// through the leaf assignment rule.
    pub fn render_property(&self, name: &str, value: &Value, out: &mut String) {
        if self.filter.is_excluded(name) {
            return;
        }

        if let Value::Array(elements) = value {
            if elements.is_empty() {
                return;
            }

            if classify(value) == Classification::NestedArray {
                for element in elements {
                    out.push_str(name);
                    out.push_str(" {\n");
                    self.render_bare(element, out);
                    out.push_str("}\n");
                }
                return;
            }
        }

        self.append(name, value, out);
    }

    /// Renders an unnamed node reached while descending into a block.
    ///
    /// Objects contribute their properties under the usual rules; bare
    /// arrays recurse into their elements without re-applying the outer
    /// block's name. A scalar reached here carries no name to assign to and
    /// is skipped, which is also what keeps unknown state shapes from ever
    /// raising an error.
    fn render_bare(&self, value: &Value, out: &mut String) {
        match value {
            Value::Object(fields) => {
                for (name, field_value) in fields {
                    self.render_property(name, field_value, out);
                }
            }
            Value::Array(elements) => {
                for element in elements {
                    self.render_bare(element, out);
                }
            }
            _ => {}
        }
    }

    /// The leaf rule: emits `name = <value>` for a single attribute.
    ///
    /// Arrays and objects keep their literal bracketed text unquoted,
    /// booleans are always lowercase, every other scalar is double-quoted
    /// verbatim. Embedded quotes are not escaped; `terraform fmt` and a
    /// human pass are expected downstream. An empty scalar and the empty
    /// `[]` token suppress the line entirely.
    fn append(&self, name: &str, value: &Value, out: &mut String) {
        match value {
            Value::Array(_) | Value::Object(_) => {
                let literal = value.literal();
                if literal == "[]" {
                    return;
                }
                out.push_str(name);
                out.push_str(" = ");
                out.push_str(&literal);
                out.push('\n');
            }
            Value::Bool(b) => {
                out.push_str(name);
                out.push_str(" = ");
                out.push_str(if *b { "true" } else { "false" });
                out.push('\n');
            }
            _ => {
                let text = value.scalar_text();
                if text.is_empty() {
                    return;
                }
                out.push_str(name);
                out.push_str(" = \"");
                out.push_str(&text);
                out.push_str("\"\n");
            }
        }
    }
}
