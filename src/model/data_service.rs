//! dcat:DataService

use super::{add_uri, add_uris, resource_graph, uri_node, Dataset, Identified, Resource, ToRdf};
use crate::error::DcatResult;
use crate::rdf::vocab::{dcat, rdf};
use crate::rdf::{Graph, RdfSubject};
use crate::values::Uri;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// A collection of operations providing access to datasets
#[derive(Debug, Clone)]
pub struct DataService {
    resource: Resource,
    pub endpoint_url: Option<Uri>,
    pub endpoint_description: Option<Uri>,
    pub serves_datasets: Vec<Arc<Dataset>>,
    pub media_types: Vec<Uri>,
}

impl Default for DataService {
    fn default() -> Self {
        Self::new()
    }
}

impl DataService {
    pub fn new() -> Self {
        Self {
            resource: Resource::new(),
            endpoint_url: None,
            endpoint_description: None,
            serves_datasets: Vec::new(),
            media_types: Vec::new(),
        }
    }

    pub fn with_identifier(identifier: impl AsRef<str>) -> DcatResult<Self> {
        let mut service = Self::new();
        service.set_identifier(identifier)?;
        Ok(service)
    }

    pub(crate) fn emit(&self, graph: &mut Graph) -> DcatResult<RdfSubject> {
        let subject = self.resource.subject();
        graph.add(&subject, rdf::TYPE, dcat::DATA_SERVICE_CLASS);
        self.resource.emit(graph, &subject)?;

        add_uri(graph, &subject, dcat::ENDPOINT_URL, self.endpoint_url.as_ref());
        add_uri(graph, &subject, dcat::ENDPOINT_DESCRIPTION, self.endpoint_description.as_ref());
        for dataset in &self.serves_datasets {
            graph.add(&subject, dcat::SERVES_DATASET, uri_node(&dataset.resolve_identifier()));
        }
        add_uris(graph, &subject, dcat::MEDIA_TYPE, &self.media_types);

        Ok(subject)
    }
}

impl Deref for DataService {
    type Target = Resource;

    fn deref(&self) -> &Resource {
        &self.resource
    }
}

impl DerefMut for DataService {
    fn deref_mut(&mut self) -> &mut Resource {
        &mut self.resource
    }
}

impl Identified for DataService {
    fn kind(&self) -> &'static str {
        "DataService"
    }

    fn resolve_identifier(&self) -> Uri {
        self.resource.resolve_identifier().clone()
    }
}

impl ToRdf for DataService {
    fn to_graph(&self) -> DcatResult<Graph> {
        let mut graph = resource_graph();
        self.emit(&mut graph)?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::RdfFormat;
    use crate::values::lang_map;

    #[test]
    fn test_data_service_to_graph() {
        let dataset = Arc::new(Dataset::with_identifier("http://example.com/datasets/1").unwrap());

        let mut service = DataService::with_identifier("http://example.com/dataservices/1").unwrap();
        service.title = lang_map([("nb", "Dataservice 1"), ("en", "Dataservice 1")]);
        service.endpoint_url = Some(Uri::new("http://example.com/endpoints/1").unwrap());
        service.endpoint_description = Some(Uri::new("http://example.com/endpoint/description/1").unwrap());
        service.serves_datasets = vec![dataset];
        service.media_types = vec![Uri::new("https://www.iana.org/assignments/media-types/application/json").unwrap()];

        let expected = r#"
            @prefix dct: <http://purl.org/dc/terms/> .
            @prefix dcat: <http://www.w3.org/ns/dcat#> .

            <http://example.com/dataservices/1> a dcat:DataService ;
                dct:title "Dataservice 1"@nb, "Dataservice 1"@en ;
                dcat:endpointURL <http://example.com/endpoints/1> ;
                dcat:endpointDescription <http://example.com/endpoint/description/1> ;
                dcat:servesDataset <http://example.com/datasets/1> ;
                dcat:mediaType <https://www.iana.org/assignments/media-types/application/json> .
        "#;
        let expected = Graph::parse(expected, RdfFormat::Turtle).unwrap();
        assert!(service.to_graph().unwrap().is_isomorphic(&expected));
    }

    #[test]
    fn test_served_dataset_is_skolemized() {
        let dataset = Arc::new(Dataset::new());
        let mut service = DataService::with_identifier("http://example.com/dataservices/2").unwrap();
        service.serves_datasets.push(dataset.clone());

        let turtle = service.to_turtle().unwrap();
        let minted = dataset.identifier().unwrap();
        assert!(turtle.contains(minted.as_str()));
    }
}
