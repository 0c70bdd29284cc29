//! Catalog entities and their mapping to RDF
//!
//! Every entity is a plain attribute holder. Rendering walks the populated
//! attributes and emits a fixed set of triples per attribute into a fresh
//! [`Graph`]; nothing is cached between calls except identifiers minted by
//! the [`Skolemizer`].
//!
//! The shared attribute bundle [`Resource`] is embedded in [`Dataset`] and
//! [`DataService`]; [`Catalog`] and [`DatasetSeries`] embed a [`Dataset`].
//! The bundle can only be constructed inside the crate, so only the concrete
//! kinds are instantiable.

mod agent;
mod catalog;
mod catalog_record;
mod contact;
mod data_service;
mod dataset;
mod dataset_series;
mod distribution;
mod document;
mod location;
mod period_of_time;
mod relationship;
mod resource;

pub use agent::Agent;
pub use catalog::{Catalog, DatasetEntry};
pub use catalog_record::CatalogRecord;
pub use contact::Contact;
pub use data_service::DataService;
pub use dataset::{Dataset, Spatial};
pub use dataset_series::DatasetSeries;
pub use distribution::Distribution;
pub use document::Document;
pub use location::Location;
pub use period_of_time::PeriodOfTime;
pub use relationship::Relationship;
pub use resource::{Publisher, QualifiedAttribution, Resource, ResourceRef};

use crate::error::{DcatError, DcatResult};
use crate::rdf::vocab::{ns, xsd};
use crate::rdf::{Graph, Literal, NamedNode, RdfFormat, RdfSubject};
use crate::skolem::Skolemizer;
use crate::values::{Date, LangMap, Uri};
use oxrdf::NamedNodeRef;
use once_cell::sync::OnceCell;
use std::fmt;

/// Which referenced entities an aggregate pulls into its graph
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GraphOptions {
    /// Include the full graphs of a dataset's distributions
    pub include_distributions: bool,
    /// Include the full graphs of a catalog's datasets and a series' members
    pub include_datasets: bool,
    /// Include the full graphs of a catalog's data services
    pub include_services: bool,
}

impl Default for GraphOptions {
    fn default() -> Self {
        Self {
            include_distributions: true,
            include_datasets: true,
            include_services: true,
        }
    }
}

impl GraphOptions {
    /// Only the entity's own triples
    pub fn references_only() -> Self {
        Self {
            include_distributions: false,
            include_datasets: false,
            include_services: false,
        }
    }
}

/// Rendering of an entity as RDF
pub trait ToRdf {
    /// Build a fresh graph holding the entity's triples
    fn to_graph(&self) -> DcatResult<Graph>;

    /// Serialize the entity in the given format
    fn to_rdf(&self, format: RdfFormat) -> DcatResult<String> {
        Ok(self.to_graph()?.serialize(format)?)
    }

    /// Serialize the entity as Turtle
    fn to_turtle(&self) -> DcatResult<String> {
        self.to_rdf(RdfFormat::Turtle)
    }

    /// Serialize to bytes from a format name and an optional encoding
    ///
    /// Only UTF-8 output is supported; `None` means UTF-8.
    fn to_rdf_bytes(&self, format: &str, encoding: Option<&str>) -> DcatResult<Vec<u8>> {
        let format: RdfFormat = format.parse()?;
        check_encoding(encoding)?;
        Ok(self.to_rdf(format)?.into_bytes())
    }
}

/// An entity that other entities can point at by URI
///
/// Resolving the identifier mints a skolem URI (once) when none was set.
pub trait Identified: fmt::Debug + Send + Sync {
    /// Name of the entity kind, as used in JSON documents
    fn kind(&self) -> &'static str;

    /// The entity's URI, minted on first use if unset
    fn resolve_identifier(&self) -> Uri;
}

fn check_encoding(encoding: Option<&str>) -> DcatResult<()> {
    match encoding {
        None => Ok(()),
        Some(e) if matches!(e.to_ascii_lowercase().as_str(), "utf-8" | "utf8") => Ok(()),
        Some(e) => Err(DcatError::UnsupportedEncoding(e.to_string())),
    }
}

/// Identifier that is skolemized on first need and then kept
#[derive(Debug, Clone, Default)]
pub(crate) struct SkolemIdentifier(OnceCell<Uri>);

impl SkolemIdentifier {
    pub(crate) fn get(&self) -> Option<&Uri> {
        self.0.get()
    }

    pub(crate) fn set(&mut self, uri: Uri) {
        let cell = OnceCell::new();
        let _ = cell.set(uri);
        self.0 = cell;
    }

    pub(crate) fn resolve(&self) -> &Uri {
        self.0.get_or_init(|| Skolemizer::global().add_skolemization())
    }
}

/// Subject node for an entity with an optional identifier
pub(crate) fn subject_for(identifier: Option<&Uri>) -> RdfSubject {
    match identifier {
        Some(uri) => uri_node(uri).into(),
        None => crate::rdf::BlankNode::new().into(),
    }
}

pub(crate) fn uri_node(uri: &Uri) -> NamedNode {
    NamedNode::new_unchecked(uri.as_str())
}

pub(crate) fn date_literal(date: &Date) -> Literal {
    Literal::new_typed_literal(date.as_str(), xsd::DATE)
}

pub(crate) fn decimal_literal(value: f64) -> Literal {
    let lexical = if value.fract() == 0.0 && value.is_finite() {
        format!("{:.1}", value)
    } else {
        value.to_string()
    };
    Literal::new_typed_literal(lexical, xsd::DECIMAL)
}

pub(crate) fn duration_literal(value: &str) -> Literal {
    Literal::new_typed_literal(value, xsd::DURATION)
}

pub(crate) fn add_lang_map(
    graph: &mut Graph,
    subject: &RdfSubject,
    predicate: NamedNodeRef<'static>,
    map: &LangMap,
) -> DcatResult<()> {
    for (language, text) in map {
        let literal = Literal::new_language_tagged_literal(text.as_str(), language.as_str())?;
        graph.add(subject, predicate, literal);
    }
    Ok(())
}

pub(crate) fn add_uri(
    graph: &mut Graph,
    subject: &RdfSubject,
    predicate: NamedNodeRef<'static>,
    value: Option<&Uri>,
) {
    if let Some(uri) = value {
        graph.add(subject, predicate, uri_node(uri));
    }
}

pub(crate) fn add_uris(
    graph: &mut Graph,
    subject: &RdfSubject,
    predicate: NamedNodeRef<'static>,
    values: &[Uri],
) {
    for uri in values {
        graph.add(subject, predicate, uri_node(uri));
    }
}

pub(crate) fn add_date(
    graph: &mut Graph,
    subject: &RdfSubject,
    predicate: NamedNodeRef<'static>,
    value: Option<&Date>,
) {
    if let Some(date) = value {
        graph.add(subject, predicate, date_literal(date));
    }
}

/// Graph with the prefixes every catalog entity uses
pub(crate) fn resource_graph() -> Graph {
    let mut graph = Graph::new();
    graph.bind("dct", ns::DCT);
    graph.bind("dcat", ns::DCAT);
    graph.bind("odrl", ns::ODRL);
    graph.bind("prov", ns::PROV);
    graph.bind("foaf", ns::FOAF);
    graph.bind("vcard", ns::VCARD);
    graph.bind("locn", ns::LOCN);
    graph.bind("geosparql", ns::GEOSPARQL);
    graph
}
