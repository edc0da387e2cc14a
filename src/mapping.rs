//! Rename map construction.
//!
//! Identifiers are ordered by descending length with ties broken
//! lexicographically, then assigned tokens `c1`, `c2`, ... from a single
//! counter. The length ordering guarantees that no identifier which is a
//! prefix of a longer one can be matched first by a substring-based
//! replacement strategy; the rewriters here match on identifier boundaries,
//! so the ordering is kept as a safeguard rather than a requirement.

use std::collections::{BTreeSet, HashMap};

use serde_json::{Map, Value};

/// Bijective mapping from defined class identifiers to short tokens.
#[derive(Debug, Default)]
pub struct RenameMap {
    tokens: HashMap<String, String>,
    // Assignment order, for stable reporting and serialization.
    order: Vec<String>,
}

impl RenameMap {
    /// Build the map from the set of defined classes.
    ///
    /// An empty set yields an empty map; the run then proceeds with no
    /// substitutions.
    pub fn build(defined: &BTreeSet<String>) -> Self {
        let mut identifiers: Vec<&String> = defined.iter().collect();
        // BTreeSet iteration is lexicographic, and the sort is stable, so
        // equal-length identifiers keep that order deterministically.
        identifiers.sort_by_key(|identifier| std::cmp::Reverse(identifier.len()));

        let mut tokens = HashMap::with_capacity(identifiers.len());
        let mut order = Vec::with_capacity(identifiers.len());
        for (index, identifier) in identifiers.into_iter().enumerate() {
            tokens.insert(identifier.clone(), format!("c{}", index + 1));
            order.push(identifier.clone());
        }

        Self { tokens, order }
    }

    /// Look up the replacement token for `identifier`, if it was defined.
    pub fn get(&self, identifier: &str) -> Option<&str> {
        self.tokens.get(identifier).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    /// Entries in token-assignment order: `(identifier, token)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&str, &str)> {
        self.order
            .iter()
            .map(|identifier| (identifier.as_str(), self.tokens[identifier].as_str()))
    }

    /// Serialize the map as a JSON object in token-assignment order.
    pub fn to_json(&self) -> Value {
        let mut object = Map::new();
        for (identifier, token) in self.entries() {
            object.insert(identifier.to_string(), Value::String(token.to_string()));
        }
        Value::Object(object)
    }
}
