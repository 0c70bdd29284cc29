//! dcat:Distribution

use super::{
    add_date, add_lang_map, add_uri, add_uris, decimal_literal, duration_literal, resource_graph,
    uri_node, DataService, Identified, SkolemIdentifier, ToRdf,
};
use crate::error::DcatResult;
use crate::rdf::vocab::{dcat, dct, odrl, rdf, xsd};
use crate::rdf::{Graph, Literal, RdfSubject};
use crate::values::{Date, LangMap, Uri};
use std::sync::Arc;

/// A specific representation of a dataset, such as a downloadable file
#[derive(Debug, Clone, Default)]
pub struct Distribution {
    identifier: SkolemIdentifier,
    pub title: LangMap,
    pub description: LangMap,
    pub release_date: Option<Date>,
    pub modification_date: Option<Date>,
    pub license: Option<Uri>,
    pub access_rights: Option<Uri>,
    pub rights: Option<Uri>,
    pub has_policy: Option<Uri>,
    pub access_url: Option<Uri>,
    pub access_service: Option<Arc<DataService>>,
    pub download_url: Option<Uri>,
    pub byte_size: Option<u64>,
    pub spatial_resolution_in_meters: Vec<f64>,
    pub temporal_resolution: Vec<String>,
    pub conforms_to: Vec<Uri>,
    pub media_types: Vec<Uri>,
    pub formats: Vec<Uri>,
    pub compression_format: Option<Uri>,
    pub package_format: Option<Uri>,
}

impl Distribution {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn identifier(&self) -> Option<&Uri> {
        self.identifier.get()
    }

    pub fn set_identifier(&mut self, identifier: impl AsRef<str>) -> DcatResult<()> {
        self.identifier.set(Uri::new(identifier.as_ref())?);
        Ok(())
    }

    pub fn resolve_identifier(&self) -> &Uri {
        self.identifier.resolve()
    }

    pub(crate) fn emit(&self, graph: &mut Graph) -> DcatResult<RdfSubject> {
        let subject: RdfSubject = uri_node(self.resolve_identifier()).into();
        graph.add(&subject, rdf::TYPE, dcat::DISTRIBUTION_CLASS);

        add_lang_map(graph, &subject, dct::TITLE, &self.title)?;
        add_lang_map(graph, &subject, dct::DESCRIPTION, &self.description)?;
        add_date(graph, &subject, dct::ISSUED, self.release_date.as_ref());
        add_date(graph, &subject, dct::MODIFIED, self.modification_date.as_ref());
        add_uri(graph, &subject, dct::LICENSE, self.license.as_ref());
        add_uri(graph, &subject, dct::ACCESS_RIGHTS, self.access_rights.as_ref());
        add_uri(graph, &subject, dct::RIGHTS, self.rights.as_ref());
        add_uri(graph, &subject, odrl::HAS_POLICY, self.has_policy.as_ref());
        add_uri(graph, &subject, dcat::ACCESS_URL, self.access_url.as_ref());
        if let Some(service) = &self.access_service {
            graph.add(&subject, dcat::ACCESS_SERVICE, uri_node(&service.resolve_identifier()));
        }
        add_uri(graph, &subject, dcat::DOWNLOAD_URL, self.download_url.as_ref());
        if let Some(size) = self.byte_size {
            graph.add(&subject, dcat::BYTE_SIZE, Literal::new_typed_literal(size.to_string(), xsd::DECIMAL));
        }
        for resolution in &self.spatial_resolution_in_meters {
            graph.add(&subject, dcat::SPATIAL_RESOLUTION_IN_METERS, decimal_literal(*resolution));
        }
        for resolution in &self.temporal_resolution {
            graph.add(&subject, dcat::TEMPORAL_RESOLUTION, duration_literal(resolution));
        }
        add_uris(graph, &subject, dct::CONFORMS_TO, &self.conforms_to);
        add_uris(graph, &subject, dcat::MEDIA_TYPE, &self.media_types);
        add_uris(graph, &subject, dct::FORMAT, &self.formats);
        add_uri(graph, &subject, dcat::COMPRESS_FORMAT, self.compression_format.as_ref());
        add_uri(graph, &subject, dcat::PACKAGE_FORMAT, self.package_format.as_ref());

        Ok(subject)
    }
}

impl Identified for Distribution {
    fn kind(&self) -> &'static str {
        "Distribution"
    }

    fn resolve_identifier(&self) -> Uri {
        self.identifier.resolve().clone()
    }
}

impl ToRdf for Distribution {
    fn to_graph(&self) -> DcatResult<Graph> {
        let mut graph = resource_graph();
        self.emit(&mut graph)?;
        Ok(graph)
    }
}
