//! dcat:DatasetSeries

use super::{resource_graph, uri_node, Dataset, GraphOptions, Identified, ToRdf};
use crate::error::DcatResult;
use crate::rdf::vocab::{dcat, ns};
use crate::rdf::{Graph, RdfFormat, RdfSubject};
use crate::values::Uri;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tracing::debug;

/// An ordered series of datasets
///
/// Members are linked through [`Dataset::prev`]; `first` and `last` point at
/// the ends of that chain. Rendering with `include_datasets` walks the chain
/// backwards from `last`. The chain is assumed to be finite.
#[derive(Debug, Clone, Default)]
pub struct DatasetSeries {
    dataset: Dataset,
    pub first: Option<Arc<Dataset>>,
    pub last: Option<Arc<Dataset>>,
}

impl DatasetSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier(identifier: impl AsRef<str>) -> DcatResult<Self> {
        let mut series = Self::new();
        series.set_identifier(identifier)?;
        Ok(series)
    }

    pub fn to_graph_with(&self, options: &GraphOptions) -> DcatResult<Graph> {
        let mut graph = resource_graph();
        graph.bind("dcatno", ns::DCATNO);
        self.emit(&mut graph, options)?;
        Ok(graph)
    }

    pub fn to_rdf_with(&self, format: RdfFormat, options: &GraphOptions) -> DcatResult<String> {
        Ok(self.to_graph_with(options)?.serialize(format)?)
    }

    pub(crate) fn emit(&self, graph: &mut Graph, options: &GraphOptions) -> DcatResult<RdfSubject> {
        let subject = self
            .dataset
            .emit_as(graph, dcat::DATASET_SERIES_CLASS, options)?;

        if let Some(first) = &self.first {
            graph.add(&subject, dcat::FIRST, uri_node(&first.resolve_identifier()));
        }
        if let Some(last) = &self.last {
            graph.add(&subject, dcat::LAST, uri_node(&last.resolve_identifier()));
        }

        if options.include_datasets {
            let mut members = 0usize;
            let mut current = self.last.as_deref();
            while let Some(member) = current {
                member.emit(graph, options)?;
                members += 1;
                current = member.prev.as_deref();
            }
            debug!("Dataset series {} included {} member datasets", subject, members);
        }

        Ok(subject)
    }
}

impl Deref for DatasetSeries {
    type Target = Dataset;

    fn deref(&self) -> &Dataset {
        &self.dataset
    }
}

impl DerefMut for DatasetSeries {
    fn deref_mut(&mut self) -> &mut Dataset {
        &mut self.dataset
    }
}

impl Identified for DatasetSeries {
    fn kind(&self) -> &'static str {
        "DatasetSeries"
    }

    fn resolve_identifier(&self) -> Uri {
        Identified::resolve_identifier(&self.dataset)
    }
}

impl ToRdf for DatasetSeries {
    fn to_graph(&self) -> DcatResult<Graph> {
        self.to_graph_with(&GraphOptions::default())
    }
}
