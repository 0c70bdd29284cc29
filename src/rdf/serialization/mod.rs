//! RDF serialization formats
//!
//! Supports:
//! - Turtle (TTL), written with prefixes and grouped by subject
//! - N-Triples (NT)
//! - RDF/XML
//! - JSON-LD (expanded form, write only)

mod jsonld;
mod turtle;
mod xml;

pub use jsonld::JsonLdSerializerWrapper;
pub use turtle::{NTriplesSerializerWrapper, TurtleParserWrapper, TurtleSerializerWrapper};
pub use xml::{RdfXmlParserWrapper, RdfXmlSerializerWrapper};

use super::graph::Graph;
use super::types::{BlankNode, Literal, NamedNode, RdfObject, RdfPredicate, RdfSubject, Triple};
use rio_api::formatter::TriplesFormatter;
use rio_api::model as rio;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// RDF serialization format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RdfFormat {
    /// Turtle format (.ttl)
    #[default]
    Turtle,
    /// N-Triples format (.nt)
    NTriples,
    /// RDF/XML format (.rdf)
    RdfXml,
    /// JSON-LD format (.jsonld)
    JsonLd,
}

impl RdfFormat {
    /// Media type of the format
    pub fn media_type(&self) -> &'static str {
        match self {
            RdfFormat::Turtle => "text/turtle",
            RdfFormat::NTriples => "application/n-triples",
            RdfFormat::RdfXml => "application/rdf+xml",
            RdfFormat::JsonLd => "application/ld+json",
        }
    }
}

impl fmt::Display for RdfFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            RdfFormat::Turtle => "turtle",
            RdfFormat::NTriples => "nt",
            RdfFormat::RdfXml => "xml",
            RdfFormat::JsonLd => "json-ld",
        };
        f.write_str(name)
    }
}

/// Format name not recognized
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Unknown RDF format: {0}")]
pub struct UnknownFormat(pub String);

impl FromStr for RdfFormat {
    type Err = UnknownFormat;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "turtle" | "ttl" | "text/turtle" => Ok(RdfFormat::Turtle),
            "nt" | "ntriples" | "n-triples" | "application/n-triples" => Ok(RdfFormat::NTriples),
            "xml" | "pretty-xml" | "rdf/xml" | "application/rdf+xml" => Ok(RdfFormat::RdfXml),
            "json-ld" | "jsonld" | "application/ld+json" => Ok(RdfFormat::JsonLd),
            _ => Err(UnknownFormat(s.to_string())),
        }
    }
}

/// Parse errors
#[derive(Error, Debug)]
pub enum ParseError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("Parse error: {0}")]
    Parse(String),

    /// Unsupported format
    #[error("Unsupported format: {0:?}")]
    UnsupportedFormat(RdfFormat),
}

pub type ParseResult<T> = Result<T, ParseError>;

/// Serialization errors
#[derive(Error, Debug)]
pub enum SerializeError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error
    #[error("Serialization error: {0}")]
    Serialize(String),

    /// Unsupported format
    #[error("Unsupported format: {0:?}")]
    UnsupportedFormat(RdfFormat),
}

pub type SerializeResult<T> = Result<T, SerializeError>;

/// RDF parser
pub struct RdfParser;

impl RdfParser {
    /// Parse RDF data from a string
    pub fn parse(input: &str, format: RdfFormat) -> ParseResult<Vec<Triple>> {
        match format {
            RdfFormat::Turtle | RdfFormat::NTriples => TurtleParserWrapper::parse(input),
            RdfFormat::RdfXml => RdfXmlParserWrapper::parse(input),
            RdfFormat::JsonLd => Err(ParseError::UnsupportedFormat(format)),
        }
    }
}

/// RDF serializer
pub struct RdfSerializer;

impl RdfSerializer {
    /// Serialize a graph to a string
    pub fn serialize(graph: &Graph, format: RdfFormat) -> SerializeResult<String> {
        match format {
            RdfFormat::Turtle => TurtleSerializerWrapper::serialize(graph),
            RdfFormat::NTriples => NTriplesSerializerWrapper::serialize(graph),
            RdfFormat::RdfXml => RdfXmlSerializerWrapper::serialize(graph),
            RdfFormat::JsonLd => JsonLdSerializerWrapper::serialize(graph),
        }
    }
}

/// Feed every triple of a graph to a rio formatter
pub(crate) fn format_graph<F: TriplesFormatter>(
    formatter: &mut F,
    graph: &Graph,
) -> Result<(), F::Error> {
    for triple in graph {
        let subject = match &triple.subject {
            RdfSubject::NamedNode(n) => rio::Subject::NamedNode(rio::NamedNode { iri: n.as_str() }),
            RdfSubject::BlankNode(b) => rio::Subject::BlankNode(rio::BlankNode { id: b.as_str() }),
        };
        let predicate = rio::NamedNode {
            iri: triple.predicate.as_str(),
        };
        let object = match &triple.object {
            RdfObject::NamedNode(n) => rio::Term::NamedNode(rio::NamedNode { iri: n.as_str() }),
            RdfObject::BlankNode(b) => rio::Term::BlankNode(rio::BlankNode { id: b.as_str() }),
            RdfObject::Literal(l) => rio::Term::Literal(rio_literal(l)),
        };

        formatter.format(&rio::Triple {
            subject,
            predicate,
            object,
        })?;
    }
    Ok(())
}

fn rio_literal(l: &Literal) -> rio::Literal<'_> {
    if let Some(language) = l.language() {
        rio::Literal::LanguageTaggedString {
            value: l.value(),
            language,
        }
    } else if l.is_plain() {
        rio::Literal::Simple { value: l.value() }
    } else {
        rio::Literal::Typed {
            value: l.value(),
            datatype: rio::NamedNode {
                iri: l.datatype_iri(),
            },
        }
    }
}

/// Convert a parsed rio triple into an owned triple
pub(crate) fn convert_triple(t: rio::Triple<'_>) -> ParseResult<Triple> {
    Ok(Triple::new(
        convert_subject(t.subject)?,
        convert_predicate(t.predicate)?,
        convert_object(t.object)?,
    ))
}

fn convert_subject(s: rio::Subject<'_>) -> ParseResult<RdfSubject> {
    match s {
        rio::Subject::NamedNode(n) => Ok(RdfSubject::NamedNode(
            NamedNode::new(n.iri).map_err(|e| ParseError::Parse(e.to_string()))?,
        )),
        rio::Subject::BlankNode(b) => Ok(RdfSubject::BlankNode(
            BlankNode::from_str(b.id).map_err(|e| ParseError::Parse(e.to_string()))?,
        )),
        _ => Err(ParseError::Parse("Unsupported subject type".to_string())),
    }
}

fn convert_predicate(p: rio::NamedNode<'_>) -> ParseResult<RdfPredicate> {
    RdfPredicate::new(p.iri).map_err(|e| ParseError::Parse(e.to_string()))
}

fn convert_object(o: rio::Term<'_>) -> ParseResult<RdfObject> {
    match o {
        rio::Term::NamedNode(n) => Ok(RdfObject::NamedNode(
            NamedNode::new(n.iri).map_err(|e| ParseError::Parse(e.to_string()))?,
        )),
        rio::Term::BlankNode(b) => Ok(RdfObject::BlankNode(
            BlankNode::from_str(b.id).map_err(|e| ParseError::Parse(e.to_string()))?,
        )),
        rio::Term::Literal(l) => match l {
            rio::Literal::Simple { value } => {
                Ok(RdfObject::Literal(Literal::new_simple_literal(value)))
            }
            rio::Literal::LanguageTaggedString { value, language } => Ok(RdfObject::Literal(
                Literal::new_language_tagged_literal(value, language)
                    .map_err(|e| ParseError::Parse(e.to_string()))?,
            )),
            rio::Literal::Typed { value, datatype } => {
                let dt = NamedNode::new(datatype.iri)
                    .map_err(|e| ParseError::Parse(e.to_string()))?;
                Ok(RdfObject::Literal(Literal::new_typed_literal(value, dt)))
            }
        },
        _ => Err(ParseError::Parse("Unsupported object type".to_string())),
    }
}
