//! dcat:Dataset

use super::{
    add_uri, add_uris, decimal_literal, duration_literal, resource_graph, uri_node, DatasetSeries,
    Distribution, GraphOptions, Identified, Location, PeriodOfTime, Resource, ToRdf,
};
use crate::error::DcatResult;
use crate::rdf::vocab::{dcat, dcatno, dct, ns, prov, rdf};
use crate::rdf::{Graph, Literal, RdfFormat, RdfSubject};
use crate::values::Uri;
use oxrdf::NamedNodeRef;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;
use tracing::debug;

/// Spatial coverage given as a URI or as an inlined location
#[derive(Debug, Clone, PartialEq)]
pub enum Spatial {
    Uri(Uri),
    Location(Location),
}

impl From<Uri> for Spatial {
    fn from(uri: Uri) -> Self {
        Spatial::Uri(uri)
    }
}

impl From<Location> for Spatial {
    fn from(location: Location) -> Self {
        Spatial::Location(location)
    }
}

/// A collection of data published by a single agent
///
/// The shared resource attributes (title, publisher, ...) are reached
/// through `Deref` to [`Resource`].
#[derive(Debug, Clone)]
pub struct Dataset {
    resource: Resource,
    pub distributions: Vec<Distribution>,
    pub frequency: Option<Uri>,
    pub spatial: Vec<Spatial>,
    pub spatial_resolution_in_meters: Vec<f64>,
    pub temporal: Vec<PeriodOfTime>,
    pub temporal_resolution: Vec<String>,
    pub was_generated_by: Option<Uri>,
    pub access_rights_comments: Vec<Uri>,
    pub dct_identifier: Option<String>,
    pub in_series: Option<Uri>,
    pub prev: Option<Arc<Dataset>>,
}

impl Default for Dataset {
    fn default() -> Self {
        Self::new()
    }
}

impl Dataset {
    pub fn new() -> Self {
        Self {
            resource: Resource::new(),
            distributions: Vec::new(),
            frequency: None,
            spatial: Vec::new(),
            spatial_resolution_in_meters: Vec::new(),
            temporal: Vec::new(),
            temporal_resolution: Vec::new(),
            was_generated_by: None,
            access_rights_comments: Vec::new(),
            dct_identifier: None,
            in_series: None,
            prev: None,
        }
    }

    /// Dataset with a validated identifier
    pub fn with_identifier(identifier: impl AsRef<str>) -> DcatResult<Self> {
        let mut dataset = Self::new();
        dataset.set_identifier(identifier)?;
        Ok(dataset)
    }

    /// Mark the dataset as a member of `series`, skolemizing the series if needed
    pub fn set_in_series(&mut self, series: &DatasetSeries) {
        self.in_series = Some(Identified::resolve_identifier(series));
    }

    /// Build the graph, choosing which referenced entities to include
    pub fn to_graph_with(&self, options: &GraphOptions) -> DcatResult<Graph> {
        let mut graph = resource_graph();
        graph.bind("dcatno", ns::DCATNO);
        self.emit(&mut graph, options)?;
        debug!("Dataset graph for {} has {} triples", self.resolve_identifier(), graph.len());
        Ok(graph)
    }

    pub fn to_rdf_with(&self, format: RdfFormat, options: &GraphOptions) -> DcatResult<String> {
        Ok(self.to_graph_with(options)?.serialize(format)?)
    }

    pub(crate) fn emit(&self, graph: &mut Graph, options: &GraphOptions) -> DcatResult<RdfSubject> {
        self.emit_as(graph, dcat::DATASET_CLASS, options)
    }

    /// Emit the dataset attributes under the given class
    pub(crate) fn emit_as(
        &self,
        graph: &mut Graph,
        class: NamedNodeRef<'static>,
        options: &GraphOptions,
    ) -> DcatResult<RdfSubject> {
        let subject = self.resource.subject();
        graph.add(&subject, rdf::TYPE, class);
        self.resource.emit(graph, &subject)?;

        if let Some(id) = &self.dct_identifier {
            graph.add(&subject, dct::IDENTIFIER, Literal::new_simple_literal(id.as_str()));
        }
        for distribution in &self.distributions {
            graph.add(&subject, dcat::DISTRIBUTION, uri_node(distribution.resolve_identifier()));
        }
        add_uri(graph, &subject, dct::ACCRUAL_PERIODICITY, self.frequency.as_ref());

        for spatial in &self.spatial {
            match spatial {
                Spatial::Uri(uri) => {
                    graph.add(&subject, dct::SPATIAL, uri_node(uri));
                }
                Spatial::Location(location) => {
                    let node = location.emit(graph)?;
                    graph.add(&subject, dct::SPATIAL, node);
                }
            }
        }
        for resolution in &self.spatial_resolution_in_meters {
            graph.add(&subject, dcat::SPATIAL_RESOLUTION_IN_METERS, decimal_literal(*resolution));
        }
        for period in &self.temporal {
            let node = period.emit(graph)?;
            graph.add(&subject, dct::TEMPORAL, node);
        }
        for resolution in &self.temporal_resolution {
            graph.add(&subject, dcat::TEMPORAL_RESOLUTION, duration_literal(resolution));
        }

        add_uri(graph, &subject, prov::WAS_GENERATED_BY, self.was_generated_by.as_ref());
        add_uris(graph, &subject, dcatno::ACCESS_RIGHTS_COMMENT, &self.access_rights_comments);
        add_uri(graph, &subject, dcat::IN_SERIES, self.in_series.as_ref());
        if let Some(prev) = &self.prev {
            graph.add(&subject, dcat::PREV, uri_node(&prev.resolve_identifier()));
        }

        if options.include_distributions {
            for distribution in &self.distributions {
                distribution.emit(graph)?;
            }
        }

        Ok(subject)
    }
}

impl Deref for Dataset {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.resource
    }
}

impl DerefMut for Dataset {
    fn deref_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }
}

impl Identified for Dataset {
    fn kind(&self) -> &'static str {
        "Dataset"
    }

    fn resolve_identifier(&self) -> Uri {
        self.resource.resolve_identifier().clone()
    }
}

impl ToRdf for Dataset {
    fn to_graph(&self) -> DcatResult<Graph> {
        self.to_graph_with(&GraphOptions::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::values::{lang_map, Date};

    fn uri(s: &str) -> Uri {
        Uri::new(s).unwrap()
    }

    #[test]
    fn test_only_type_triple_when_empty() {
        let dataset = Dataset::with_identifier("http://example.com/datasets/1").unwrap();
        let graph = dataset.to_graph().unwrap();
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn test_dataset_attributes() {
        let mut location = Location::new();
        location.centroid = Some("POINT(4.88412 52.37509)".into());

        let mut period = PeriodOfTime::new();
        period.set_start_date("2019-12-31").unwrap();
        period.set_end_date("2020-12-31").unwrap();

        let mut dataset = Dataset::with_identifier("http://example.com/datasets/1").unwrap();
        dataset.title = lang_map([("nb", "Tittel 1"), ("en", "Title 1")]);
        dataset.release_date = Some(Date::new("2020-03-24").unwrap());
        dataset.dct_identifier = Some("123456789".into());
        dataset.frequency = Some(uri("http://purl.org/cld/freq/daily"));
        dataset.spatial = vec![uri("http://www.geonames.org/3162656").into(), location.into()];
        dataset.spatial_resolution_in_meters = vec![30.0];
        dataset.temporal = vec![period];
        dataset.temporal_resolution = vec!["PT15M".into()];
        dataset.was_generated_by = Some(uri("http://example.com/activities/1"));
        dataset.access_rights_comments = vec![uri("http://example.com/hjemmel/1")];

        let expected = r#"
            @prefix dct: <http://purl.org/dc/terms/> .
            @prefix dcat: <http://www.w3.org/ns/dcat#> .
            @prefix dcatno: <https://data.norge.no/vocabulary/dcatno#> .
            @prefix prov: <http://www.w3.org/ns/prov#> .
            @prefix locn: <http://www.w3.org/ns/locn#> .
            @prefix geosparql: <http://www.opengis.net/ont/geosparql#> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

            <http://example.com/datasets/1> a dcat:Dataset ;
                dct:title "Tittel 1"@nb, "Title 1"@en ;
                dct:issued "2020-03-24"^^xsd:date ;
                dct:identifier "123456789" ;
                dct:accrualPeriodicity <http://purl.org/cld/freq/daily> ;
                dct:spatial <http://www.geonames.org/3162656>, [
                    a dct:Location ;
                    dcat:centroid "POINT(4.88412 52.37509)"^^geosparql:asWKT
                ] ;
                dcat:spatialResolutionInMeters "30.0"^^xsd:decimal ;
                dct:temporal [
                    a dct:PeriodOfTime ;
                    dcat:startDate "2019-12-31"^^xsd:date ;
                    dcat:endDate "2020-12-31"^^xsd:date
                ] ;
                dcat:temporalResolution "PT15M"^^xsd:duration ;
                prov:wasGeneratedBy <http://example.com/activities/1> ;
                dcatno:accessRightsComment <http://example.com/hjemmel/1> .
        "#;
        let expected = Graph::parse(expected, RdfFormat::Turtle).unwrap();
        assert!(dataset.to_graph().unwrap().is_isomorphic(&expected));
    }

    #[test]
    fn test_distribution_graphs_follow_options() {
        let mut distribution = Distribution::new();
        distribution.set_identifier("http://example.com/distributions/1").unwrap();
        distribution.title = lang_map([("en", "CSV")]);

        let mut dataset = Dataset::with_identifier("http://example.com/datasets/1").unwrap();
        dataset.distributions.push(distribution);

        let full = dataset.to_graph().unwrap();
        assert_eq!(full.len(), 4);

        let references = dataset.to_graph_with(&GraphOptions::references_only()).unwrap();
        assert_eq!(references.len(), 2);
    }

    #[test]
    fn test_anonymous_dataset_is_skolemized_once() {
        let dataset = Dataset::new();
        let first = dataset.to_turtle().unwrap();
        assert_eq!(dataset.to_turtle().unwrap(), first);
        assert!(dataset.identifier().is_some());
    }

    #[test]
    fn test_prev_and_in_series() {
        let series = DatasetSeries::with_identifier("http://example.com/series/1").unwrap();
        let previous = Arc::new(Dataset::with_identifier("http://example.com/datasets/0").unwrap());

        let mut dataset = Dataset::with_identifier("http://example.com/datasets/1").unwrap();
        dataset.set_in_series(&series);
        dataset.prev = Some(previous);

        let expected = r#"
            @prefix dcat: <http://www.w3.org/ns/dcat#> .
            <http://example.com/datasets/1> a dcat:Dataset ;
                dcat:inSeries <http://example.com/series/1> ;
                dcat:prev <http://example.com/datasets/0> .
        "#;
        let expected = Graph::parse(expected, RdfFormat::Turtle).unwrap();
        assert!(dataset.to_graph().unwrap().is_isomorphic(&expected));
    }
}
