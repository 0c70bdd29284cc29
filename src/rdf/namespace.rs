//! RDF namespace and prefix management
//!
//! This module handles namespace prefixes for compact IRI notation.

use indexmap::IndexMap;
use thiserror::Error;

/// Prefix errors
#[derive(Error, Debug)]
pub enum PrefixError {
    /// Unknown prefix
    #[error("Unknown prefix: {0}")]
    UnknownPrefix(String),

    /// Invalid IRI
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),
}

pub type PrefixResult<T> = Result<T, PrefixError>;

/// Namespace (prefix → IRI mapping)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Namespace {
    /// Prefix
    pub prefix: String,
    /// IRI
    pub iri: String,
}

impl Namespace {
    /// Create a new namespace
    pub fn new(prefix: impl Into<String>, iri: impl Into<String>) -> Self {
        Self {
            prefix: prefix.into(),
            iri: iri.into(),
        }
    }
}

/// Namespace manager with common prefixes
///
/// Prefixes keep their binding order, which is the order they are written
/// in serialized output.
#[derive(Debug, Clone)]
pub struct NamespaceManager {
    /// Prefix → IRI mappings
    prefixes: IndexMap<String, String>,
}

impl NamespaceManager {
    /// Create a new namespace manager with the core RDF prefixes
    pub fn new() -> Self {
        let mut mgr = Self::empty();

        mgr.add_prefix("rdf", super::vocab::ns::RDF);
        mgr.add_prefix("rdfs", super::vocab::ns::RDFS);
        mgr.add_prefix("xsd", super::vocab::ns::XSD);
        mgr.add_prefix("owl", super::vocab::ns::OWL);

        mgr
    }

    /// Create a namespace manager with no prefixes
    pub fn empty() -> Self {
        Self {
            prefixes: IndexMap::new(),
        }
    }

    /// Add a prefix, replacing an earlier binding of the same prefix
    pub fn add_prefix(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.prefixes.insert(prefix.into(), iri.into());
    }

    /// Get IRI for a prefix
    pub fn get_iri(&self, prefix: &str) -> PrefixResult<&str> {
        self.prefixes
            .get(prefix)
            .map(|s| s.as_str())
            .ok_or_else(|| PrefixError::UnknownPrefix(prefix.to_string()))
    }

    /// Expand a compact IRI (prefix:local) to full IRI
    pub fn expand(&self, compact_iri: &str) -> PrefixResult<String> {
        match compact_iri.split_once(':') {
            Some((prefix, local)) => {
                let iri = self.get_iri(prefix)?;
                Ok(format!("{}{}", iri, local))
            }
            None => Err(PrefixError::InvalidIri(compact_iri.to_string())),
        }
    }

    /// Prefix whose namespace is the longest match for `iri`
    pub fn prefix_for(&self, iri: &str) -> Option<&str> {
        self.prefixes
            .iter()
            .filter(|(_, ns)| iri.starts_with(ns.as_str()) && iri.len() > ns.len())
            .max_by_key(|(_, ns)| ns.len())
            .map(|(prefix, _)| prefix.as_str())
    }

    /// Get all registered prefixes
    pub fn prefixes(&self) -> Vec<Namespace> {
        self.prefixes
            .iter()
            .map(|(prefix, iri)| Namespace::new(prefix.clone(), iri.clone()))
            .collect()
    }

    /// Iterate `(prefix, iri)` pairs in binding order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.prefixes.iter().map(|(p, i)| (p.as_str(), i.as_str()))
    }

    /// Merge the bindings of another manager, keeping ours on conflict
    pub fn merge(&mut self, other: &NamespaceManager) {
        for (prefix, iri) in other.iter() {
            if !self.prefixes.contains_key(prefix) {
                self.add_prefix(prefix, iri);
            }
        }
    }
}

impl Default for NamespaceManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_common_prefixes() {
        let mgr = NamespaceManager::new();

        assert_eq!(
            mgr.get_iri("rdf").unwrap(),
            "http://www.w3.org/1999/02/22-rdf-syntax-ns#"
        );
        assert_eq!(mgr.get_iri("xsd").unwrap(), "http://www.w3.org/2001/XMLSchema#");
        assert!(matches!(mgr.get_iri("dcat"), Err(PrefixError::UnknownPrefix(_))));
    }

    #[test]
    fn test_expand() {
        let mut mgr = NamespaceManager::new();
        mgr.add_prefix("dcat", "http://www.w3.org/ns/dcat#");

        let expanded = mgr.expand("dcat:Dataset").unwrap();
        assert_eq!(expanded, "http://www.w3.org/ns/dcat#Dataset");
        assert!(mgr.expand("nocolon").is_err());
    }

    #[test]
    fn test_prefix_for_uses_longest_namespace() {
        let mut mgr = NamespaceManager::empty();
        mgr.add_prefix("ex", "http://example.org/");
        mgr.add_prefix("exv", "http://example.org/vocab/");

        assert_eq!(mgr.prefix_for("http://example.org/vocab/term"), Some("exv"));
        assert_eq!(mgr.prefix_for("http://example.org/thing"), Some("ex"));
        assert_eq!(mgr.prefix_for("http://example.org/"), None);
        assert_eq!(mgr.prefix_for("http://other.org/a"), None);
    }

    #[test]
    fn test_binding_order_is_kept() {
        let mut mgr = NamespaceManager::empty();
        mgr.add_prefix("dct", "http://purl.org/dc/terms/");
        mgr.add_prefix("dcat", "http://www.w3.org/ns/dcat#");
        let prefixes: Vec<_> = mgr.iter().map(|(p, _)| p).collect();
        assert_eq!(prefixes, vec!["dct", "dcat"]);
    }
}
