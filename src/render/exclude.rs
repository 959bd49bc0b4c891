//! Attribute names dropped from the generated configuration.
//!
//! State files carry plenty of fields that have no place in hand-written
//! configuration: identifiers and computed endpoints Terraform fills in on
//! its own, and key-vault material (public key components, thumbprints,
//! version stamps) that is either non-importable or should never land in
//! source control. The filter drops those names at every nesting depth.

use std::collections::HashSet;

/// Attribute names that are always dropped, compared case-insensitively.
const EXCLUDED_NAMES: &[&str] = &[
    "id",
    "vault_uri",
    "e",
    "n",
    "x",
    "y",
    "thumbprint",
    "checksum",
    "version",
    "sku",
];

/// Families of computed output fields, matched by prefix.
const EXCLUDED_PREFIXES: &[&str] = &["primary_", "secondary_"];

/// Decides whether a named attribute is dropped from output.
///
/// The rule sets are fixed at construction; tests can pass alternate sets
/// via [`ExclusionFilter::new`].
#[derive(Debug, Clone)]
pub struct ExclusionFilter {
    exact: HashSet<String>,
    prefixes: Vec<String>,
}

impl ExclusionFilter {
    /// Creates a filter from explicit rule sets. Matching is
    /// case-insensitive for both sets.
    pub fn new<I, P>(exact: I, prefixes: P) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
        P: IntoIterator,
        P::Item: AsRef<str>,
    {
        Self {
            exact: exact
                .into_iter()
                .map(|name| name.as_ref().to_lowercase())
                .collect(),
            prefixes: prefixes
                .into_iter()
                .map(|prefix| prefix.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns true if the attribute must not appear in the output.
    pub fn is_excluded(&self, name: &str) -> bool {
        let name = name.to_lowercase();

        if self.exact.contains(&name) {
            return true;
        }

        self.prefixes.iter().any(|prefix| name.starts_with(prefix))
    }
}

impl Default for ExclusionFilter {
    fn default() -> Self {
        Self::new(EXCLUDED_NAMES.iter(), EXCLUDED_PREFIXES.iter())
    }
}
