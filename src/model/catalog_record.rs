//! dcat:CatalogRecord

use super::{
    add_date, add_lang_map, add_uris, uri_node, Catalog, DataService, Dataset, DatasetSeries,
    Identified, SkolemIdentifier, ToRdf,
};
use crate::error::{DcatError, DcatResult};
use crate::rdf::vocab::{dcat, dct, foaf, ns, rdf};
use crate::rdf::{Graph, RdfSubject};
use crate::values::{uri_list, Date, LangMap, Uri};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

const KIND: &str = "CatalogRecord";

/// A record in a catalog describing the registration of a single resource
///
/// Always rendered under a URI; a skolem identifier is minted on first use.
/// `listing_date` and `modification_date` are independent of each other.
#[derive(Debug, Clone, Default)]
pub struct CatalogRecord {
    identifier: SkolemIdentifier,
    pub title: LangMap,
    pub description: LangMap,
    pub listing_date: Option<Date>,
    pub modification_date: Option<Date>,
    pub primary_topic: Option<Arc<dyn Identified>>,
    pub conforms_to: Vec<Uri>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TopicDocument {
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct CatalogRecordDocument {
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(default, skip_serializing_if = "LangMap::is_empty")]
    title: LangMap,
    #[serde(default, skip_serializing_if = "LangMap::is_empty")]
    description: LangMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    listing_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    modification_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    primary_topic: Option<TopicDocument>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    conforms_to: Vec<String>,
}

impl CatalogRecord {
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

    pub fn set_listing_date(&mut self, value: &str) -> DcatResult<()> {
        self.listing_date = Some(Date::new(value)?);
        Ok(())
    }

    pub fn set_modification_date(&mut self, value: &str) -> DcatResult<()> {
        self.modification_date = Some(Date::new(value)?);
        Ok(())
    }

    pub(crate) fn emit(&self, graph: &mut Graph) -> DcatResult<RdfSubject> {
        let subject: RdfSubject = uri_node(self.resolve_identifier()).into();
        graph.add(&subject, rdf::TYPE, dcat::CATALOG_RECORD_CLASS);

        add_lang_map(graph, &subject, dct::TITLE, &self.title)?;
        add_lang_map(graph, &subject, dct::DESCRIPTION, &self.description)?;
        add_date(graph, &subject, dct::ISSUED, self.listing_date.as_ref());
        add_date(graph, &subject, dct::MODIFIED, self.modification_date.as_ref());
        if let Some(topic) = &self.primary_topic {
            graph.add(&subject, foaf::PRIMARY_TOPIC, uri_node(&topic.resolve_identifier()));
        }
        add_uris(graph, &subject, dct::CONFORMS_TO, &self.conforms_to);

        Ok(subject)
    }

    /// Export as a JSON object tagged with `"_type": "CatalogRecord"`
    ///
    /// The primary topic is exported by kind and identifier only. The record's
    /// identifier is always written: an anonymous record mints and keeps its
    /// skolem URI here, and so does an anonymous primary topic.
    pub fn to_json(&self) -> DcatResult<Value> {
        let document = CatalogRecordDocument {
            kind: Some(KIND.to_string()),
            identifier: Some(self.resolve_identifier().to_string()),
            title: self.title.clone(),
            description: self.description.clone(),
            listing_date: self.listing_date.as_ref().map(Date::to_string),
            modification_date: self.modification_date.as_ref().map(Date::to_string),
            primary_topic: self.primary_topic.as_ref().map(|topic| TopicDocument {
                kind: Some(topic.kind().to_string()),
                identifier: Some(topic.resolve_identifier().into_string()),
            }),
            conforms_to: self.conforms_to.iter().map(Uri::to_string).collect(),
        };
        Ok(serde_json::to_value(document)?)
    }

    /// Rebuild a record from its JSON form, validating every attribute
    pub fn from_json(value: &Value) -> DcatResult<Self> {
        let document: CatalogRecordDocument = serde_json::from_value(value.clone())?;
        if let Some(kind) = document.kind.as_deref().filter(|k| *k != KIND) {
            return Err(DcatError::InvalidDocument(format!("expected _type {}, found {}", KIND, kind)));
        }

        let mut record = CatalogRecord::new();
        if let Some(identifier) = document.identifier {
            record.set_identifier(identifier)?;
        }
        record.title = document.title;
        record.description = document.description;
        if let Some(date) = document.listing_date {
            record.set_listing_date(&date)?;
        }
        if let Some(date) = document.modification_date {
            record.set_modification_date(&date)?;
        }
        record.primary_topic = document.primary_topic.map(topic_from_document).transpose()?;
        record.conforms_to = uri_list(&document.conforms_to)?;
        Ok(record)
    }
}

/// Rebuild a primary topic as the kind its `_type` names
fn topic_from_document(document: TopicDocument) -> DcatResult<Arc<dyn Identified>> {
    let identifier = document.identifier.as_deref();
    let topic: Arc<dyn Identified> = match document.kind.as_deref() {
        Some("Catalog") => Arc::new(with_identifier(Catalog::new(), identifier, |c, id| c.set_identifier(id))?),
        Some("DatasetSeries") => Arc::new(with_identifier(DatasetSeries::new(), identifier, |s, id| {
            s.set_identifier(id)
        })?),
        Some("DataService") => Arc::new(with_identifier(DataService::new(), identifier, |s, id| {
            s.set_identifier(id)
        })?),
        _ => Arc::new(with_identifier(Dataset::new(), identifier, |d, id| d.set_identifier(id))?),
    };
    Ok(topic)
}

fn with_identifier<T>(
    mut entity: T,
    identifier: Option<&str>,
    set: impl FnOnce(&mut T, &str) -> DcatResult<()>,
) -> DcatResult<T> {
    if let Some(identifier) = identifier {
        set(&mut entity, identifier)?;
    }
    Ok(entity)
}

impl Identified for CatalogRecord {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn resolve_identifier(&self) -> Uri {
        self.identifier.resolve().clone()
    }
}

impl ToRdf for CatalogRecord {
    fn to_graph(&self) -> DcatResult<Graph> {
        let mut graph = Graph::new();
        graph.bind("dct", ns::DCT);
        graph.bind("dcat", ns::DCAT);
        graph.bind("foaf", ns::FOAF);
        self.emit(&mut graph)?;
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::RdfFormat;
    use crate::skolem::Skolemizer;
    use crate::values::lang_map;
    use serde_json::json;

    fn full_record() -> CatalogRecord {
        let dataset = Dataset::with_identifier("http://example.com/datasets/1").unwrap();

        let mut record = CatalogRecord::new();
        record.set_identifier("http://example.com/catalogrecords/1").unwrap();
        record.title = lang_map([("en", "Title of catalogrecord")]);
        record.description = lang_map([("en", "Description of catalogrecord")]);
        record.set_listing_date("2020-03-24").unwrap();
        record.set_modification_date("2020-03-25").unwrap();
        record.primary_topic = Some(Arc::new(dataset));
        record.conforms_to = vec![Uri::new("http://example.com/standards/1").unwrap()];
        record
    }

    #[test]
    fn test_catalog_record_to_graph() {
        let expected = r#"
            @prefix dct: <http://purl.org/dc/terms/> .
            @prefix dcat: <http://www.w3.org/ns/dcat#> .
            @prefix foaf: <http://xmlns.com/foaf/0.1/> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

            <http://example.com/catalogrecords/1> a dcat:CatalogRecord ;
                dct:title "Title of catalogrecord"@en ;
                dct:description "Description of catalogrecord"@en ;
                dct:issued "2020-03-24"^^xsd:date ;
                dct:modified "2020-03-25"^^xsd:date ;
                foaf:primaryTopic <http://example.com/datasets/1> ;
                dct:conformsTo <http://example.com/standards/1> .
        "#;
        let expected = Graph::parse(expected, RdfFormat::Turtle).unwrap();
        assert!(full_record().to_graph().unwrap().is_isomorphic(&expected));
    }

    #[test]
    fn test_dates_are_independent() {
        let mut record = CatalogRecord::new();
        record.set_listing_date("2021-01-01").unwrap();
        record.set_modification_date("2020-01-01").unwrap();
        assert!(record.set_listing_date("2021-13-01").is_err());
        assert_eq!(record.listing_date.as_ref().map(Date::as_str), Some("2021-01-01"));
    }

    #[test]
    fn test_anonymous_record_is_skolemized_once() {
        let record = CatalogRecord::new();
        let first = record.to_turtle().unwrap();
        assert_eq!(record.to_turtle().unwrap(), first);
        let identifier = record.identifier().unwrap();
        assert!(Skolemizer::global().has_skolemization_morfologi(identifier.as_str()));
    }

    #[test]
    fn test_json_export_shape() {
        let value = full_record().to_json().unwrap();
        assert_eq!(value["_type"], json!("CatalogRecord"));
        assert_eq!(value["listing_date"], json!("2020-03-24"));
        assert_eq!(
            value["primary_topic"],
            json!({"_type": "Dataset", "identifier": "http://example.com/datasets/1"})
        );
        assert_eq!(value["conforms_to"], json!(["http://example.com/standards/1"]));
    }

    #[test]
    fn test_json_round_trip() {
        let record = full_record();
        let rebuilt = CatalogRecord::from_json(&record.to_json().unwrap()).unwrap();
        assert!(rebuilt.to_graph().unwrap().is_isomorphic(&record.to_graph().unwrap()));
        assert_eq!(rebuilt.primary_topic.as_ref().map(|t| t.kind()), Some("Dataset"));
    }

    #[test]
    fn test_primary_topic_kind_is_kept() {
        let value = json!({
            "_type": "CatalogRecord",
            "primary_topic": {"_type": "DataService", "identifier": "http://example.com/dataservices/1"}
        });
        let record = CatalogRecord::from_json(&value).unwrap();
        let topic = record.primary_topic.unwrap();
        assert_eq!(topic.kind(), "DataService");
        assert_eq!(topic.resolve_identifier().as_str(), "http://example.com/dataservices/1");
    }

    #[test]
    fn test_from_json_rejects_bad_date() {
        let value = json!({"_type": "CatalogRecord", "modification_date": "2020-02-30"});
        assert!(matches!(CatalogRecord::from_json(&value), Err(DcatError::InvalidDate { .. })));
    }
}
