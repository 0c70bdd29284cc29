//! dcat:Catalog

use super::{
    add_uri, add_uris, resource_graph, uri_node, CatalogRecord, DataService, Dataset,
    DatasetSeries, GraphOptions, Identified, ToRdf,
};
use crate::error::DcatResult;
use crate::rdf::vocab::{dcat, dct, foaf, ns};
use crate::rdf::{Graph, RdfFormat, RdfSubject};
use crate::values::Uri;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tracing::debug;

/// A member of a catalog's dataset list
#[derive(Debug, Clone)]
pub enum DatasetEntry {
    Dataset(Arc<Dataset>),
    Series(Arc<DatasetSeries>),
}

impl DatasetEntry {
    pub fn resolve_identifier(&self) -> Uri {
        match self {
            DatasetEntry::Dataset(dataset) => Identified::resolve_identifier(dataset.as_ref()),
            DatasetEntry::Series(series) => Identified::resolve_identifier(series.as_ref()),
        }
    }

    fn emit(&self, graph: &mut Graph, options: &GraphOptions) -> DcatResult<RdfSubject> {
        match self {
            DatasetEntry::Dataset(dataset) => dataset.emit(graph, options),
            DatasetEntry::Series(series) => series.emit(graph, options),
        }
    }
}

impl From<Dataset> for DatasetEntry {
    fn from(dataset: Dataset) -> Self {
        DatasetEntry::Dataset(Arc::new(dataset))
    }
}

impl From<Arc<Dataset>> for DatasetEntry {
    fn from(dataset: Arc<Dataset>) -> Self {
        DatasetEntry::Dataset(dataset)
    }
}

impl From<DatasetSeries> for DatasetEntry {
    fn from(series: DatasetSeries) -> Self {
        DatasetEntry::Series(Arc::new(series))
    }
}

impl From<Arc<DatasetSeries>> for DatasetEntry {
    fn from(series: Arc<DatasetSeries>) -> Self {
        DatasetEntry::Series(series)
    }
}

/// A curated collection of metadata about datasets and data services
///
/// By default the full graphs of the listed datasets (series included) and
/// services are rendered along with the catalog; see [`GraphOptions`].
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    dataset: Dataset,
    pub homepage: Option<Uri>,
    pub themes: Vec<Uri>,
    pub has_parts: Vec<Arc<Catalog>>,
    pub datasets: Vec<DatasetEntry>,
    pub services: Vec<Arc<DataService>>,
    pub catalogs: Vec<Arc<Catalog>>,
    pub catalog_records: Vec<Arc<CatalogRecord>>,
}

impl Catalog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier(identifier: impl AsRef<str>) -> DcatResult<Self> {
        let mut catalog = Self::new();
        catalog.set_identifier(identifier)?;
        Ok(catalog)
    }

    pub fn to_graph_with(&self, options: &GraphOptions) -> DcatResult<Graph> {
        let mut graph = resource_graph();
        graph.bind("modelldcatno", ns::MODELLDCATNO);
        graph.bind("dcatno", ns::DCATNO);
        self.emit(&mut graph, options)?;
        debug!(
            "Catalog graph for {} has {} triples ({} datasets, {} services)",
            Identified::resolve_identifier(self),
            graph.len(),
            self.datasets.len(),
            self.services.len()
        );
        Ok(graph)
    }

    pub fn to_rdf_with(&self, format: RdfFormat, options: &GraphOptions) -> DcatResult<String> {
        Ok(self.to_graph_with(options)?.serialize(format)?)
    }

    fn emit(&self, graph: &mut Graph, options: &GraphOptions) -> DcatResult<RdfSubject> {
        let subject = self.dataset.emit_as(graph, dcat::CATALOG_CLASS, options)?;

        add_uri(graph, &subject, foaf::HOMEPAGE, self.homepage.as_ref());
        add_uris(graph, &subject, dcat::THEME_TAXONOMY, &self.themes);
        for part in &self.has_parts {
            graph.add(&subject, dct::HAS_PART, uri_node(&Identified::resolve_identifier(part.as_ref())));
        }
        for entry in &self.datasets {
            graph.add(&subject, dcat::DATASET, uri_node(&entry.resolve_identifier()));
        }
        for service in &self.services {
            graph.add(&subject, dcat::SERVICE, uri_node(&service.resolve_identifier()));
        }
        for catalog in &self.catalogs {
            graph.add(&subject, dcat::CATALOG, uri_node(&Identified::resolve_identifier(catalog.as_ref())));
        }
        for record in &self.catalog_records {
            graph.add(&subject, dcat::RECORD, uri_node(&record.resolve_identifier()));
        }

        if options.include_datasets {
            for entry in &self.datasets {
                entry.emit(graph, options)?;
            }
        }
        if options.include_services {
            for service in &self.services {
                service.emit(graph)?;
            }
        }

        Ok(subject)
    }
}

impl Deref for Catalog {
    type Target = Dataset;

    fn deref(&self) -> &Dataset {
        &self.dataset
    }
}

impl DerefMut for Catalog {
    fn deref_mut(&mut self) -> &mut Dataset {
        &mut self.dataset
    }
}

impl Identified for Catalog {
    fn kind(&self) -> &'static str {
        "Catalog"
    }

    fn resolve_identifier(&self) -> Uri {
        Identified::resolve_identifier(&self.dataset)
    }
}

impl ToRdf for Catalog {
    fn to_graph(&self) -> DcatResult<Graph> {
        self.to_graph_with(&GraphOptions::default())
    }
}
