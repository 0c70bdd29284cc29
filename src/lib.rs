//! DCAT catalog entities rendered as RDF
//!
//! Builds catalogs, datasets, dataset series, data services, distributions
//! and their supporting descriptions (agents, contacts, documents, locations,
//! periods of time, relationships, catalog records) as plain Rust values, and
//! renders them as RDF following the DCAT-AP vocabulary.
//!
//! # Modules
//!
//! - [`values`]: validated URI and date values, language maps
//! - [`skolem`]: minting of skolem URIs for unnamed entities
//! - [`rdf`]: graph, terms, vocabulary, isomorphism, serialization
//! - [`model`]: the catalog entities and their RDF mapping
//!
//! Every URI- or date-typed attribute is validated when it is assigned; a
//! rejected value leaves the entity unchanged.
//!
//! ## Example Usage
//!
//! ```rust
//! use datacatalog_rdf::{lang_map, Catalog, Dataset, RdfFormat, ToRdf};
//!
//! let mut dataset = Dataset::with_identifier("http://example.com/datasets/1").unwrap();
//! dataset.title = lang_map([("en", "Budget data")]);
//!
//! let mut catalog = Catalog::with_identifier("http://example.com/catalogs/1").unwrap();
//! catalog.title = lang_map([("en", "A data catalog")]);
//! catalog.datasets.push(dataset.into());
//!
//! let turtle = catalog.to_turtle().unwrap();
//! assert!(turtle.contains("dcat:dataset <http://example.com/datasets/1>"));
//!
//! let xml = catalog.to_rdf(RdfFormat::RdfXml).unwrap();
//! assert!(xml.contains("http://example.com/catalogs/1"));
//! ```

#![allow(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod model;
pub mod rdf;
pub mod skolem;
pub mod values;

pub use error::{DcatError, DcatResult, IntervalEndpoint};

pub use values::{is_valid_uri, lang_map, uri_list, Date, LangMap, Uri};

pub use skolem::Skolemizer;

pub use rdf::{Graph, RdfFormat};

pub use model::{
    Agent, Catalog, CatalogRecord, Contact, DataService, Dataset, DatasetEntry, DatasetSeries,
    Distribution, Document, GraphOptions, Identified, Location, PeriodOfTime, Publisher,
    QualifiedAttribution, Relationship, Resource, ResourceRef, Spatial, ToRdf,
};

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Get version string
pub fn version() -> &'static str {
    VERSION
}
