//! RDF (Resource Description Framework) support
//!
//! This module is the graph collaborator used by the catalog entities:
//! - RDF terms and triples (wrappers over oxrdf)
//! - an insertion-ordered [`Graph`] with namespace bindings
//! - graph isomorphism (blank nodes matched up to renaming)
//! - serialization to Turtle, N-Triples, RDF/XML and JSON-LD
//! - parsing of Turtle, N-Triples and RDF/XML
//!
//! # Example
//!
//! ```rust
//! use datacatalog_rdf::rdf::{Graph, Literal, NamedNode, RdfFormat};
//! use datacatalog_rdf::rdf::vocab::{dct, ns};
//!
//! let mut graph = Graph::new();
//! graph.bind("dct", ns::DCT);
//!
//! let subject = NamedNode::new("http://example.org/alice").unwrap();
//! graph.add(subject, dct::TITLE, Literal::new_simple_literal("Alice"));
//!
//! let turtle = graph.serialize(RdfFormat::Turtle).unwrap();
//! let parsed = Graph::parse(&turtle, RdfFormat::Turtle).unwrap();
//! assert!(parsed.is_isomorphic(&graph));
//! ```

mod graph;
mod namespace;
mod serialization;
mod types;
pub mod vocab;

pub use types::{
    BlankNode, Literal, NamedNode, RdfError, RdfObject, RdfPredicate, RdfResult, RdfSubject,
    Triple,
};

pub use graph::Graph;

pub use namespace::{Namespace, NamespaceManager, PrefixError, PrefixResult};

pub use serialization::{
    ParseError, ParseResult, RdfFormat, RdfParser, RdfSerializer, SerializeError,
    SerializeResult, UnknownFormat,
};
