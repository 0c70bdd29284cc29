//! Attributes shared by every dcat:Resource kind

use super::{
    add_date, add_lang_map, add_uri, add_uris, uri_node, Agent, Contact, Identified,
    Relationship, SkolemIdentifier,
};
use crate::error::DcatResult;
use crate::rdf::vocab::{dcat, dct, odrl, prov, rdf};
use crate::rdf::{BlankNode, Graph, RdfSubject};
use crate::values::{Date, LangMap, Uri};
use std::sync::Arc;

/// Publisher given either as a URI or as an inlined agent description
#[derive(Debug, Clone)]
pub enum Publisher {
    /// Reference to an agent described elsewhere
    Uri(Uri),
    /// Agent whose own triples are emitted with the resource
    Agent(Agent),
}

impl From<Uri> for Publisher {
    fn from(uri: Uri) -> Self {
        Publisher::Uri(uri)
    }
}

impl From<Agent> for Publisher {
    fn from(agent: Agent) -> Self {
        Publisher::Agent(agent)
    }
}

/// An agent with a role in the resource (prov:Attribution)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QualifiedAttribution {
    pub agent: Uri,
    pub had_role: Uri,
}

impl QualifiedAttribution {
    pub fn new(agent: Uri, had_role: Uri) -> Self {
        Self { agent, had_role }
    }
}

/// Reference to a resource known only by its URI
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRef {
    kind: &'static str,
    identifier: Uri,
}

impl ResourceRef {
    /// Reference to a generic resource
    pub fn new(identifier: Uri) -> Self {
        Self {
            kind: "Resource",
            identifier,
        }
    }

    /// Reference that remembers which kind it points at
    pub fn with_kind(kind: &'static str, identifier: Uri) -> Self {
        Self { kind, identifier }
    }
}

impl Identified for ResourceRef {
    fn kind(&self) -> &'static str {
        self.kind
    }

    fn resolve_identifier(&self) -> Uri {
        self.identifier.clone()
    }
}

/// Shared attribute bundle of the dcat:Resource kinds
///
/// Embedded by [`super::Dataset`] and [`super::DataService`]; it cannot be
/// built on its own outside this crate.
#[derive(Debug, Clone)]
pub struct Resource {
    identifier: SkolemIdentifier,
    pub publisher: Option<Publisher>,
    pub title: LangMap,
    pub description: LangMap,
    pub access_rights: Option<Uri>,
    pub conforms_to: Vec<Uri>,
    pub theme: Vec<Uri>,
    pub contact_point: Option<Contact>,
    pub creator: Option<Uri>,
    pub has_policy: Option<Uri>,
    pub is_referenced_by: Vec<Arc<dyn Identified>>,
    pub release_date: Option<Date>,
    pub modification_date: Option<Date>,
    pub type_genre: Option<Uri>,
    pub qualified_attributions: Vec<QualifiedAttribution>,
    pub landing_page: Vec<Uri>,
    pub license: Option<Uri>,
    pub language: Vec<Uri>,
    pub resource_relation: Vec<Uri>,
    pub rights: Option<Uri>,
    pub keyword: LangMap,
    pub qualified_relation: Vec<Relationship>,
}

impl Resource {
    pub(crate) fn new() -> Self {
        Self {
            identifier: SkolemIdentifier::default(),
            publisher: None,
            title: LangMap::new(),
            description: LangMap::new(),
            access_rights: None,
            conforms_to: Vec::new(),
            theme: Vec::new(),
            contact_point: None,
            creator: None,
            has_policy: None,
            is_referenced_by: Vec::new(),
            release_date: None,
            modification_date: None,
            type_genre: None,
            qualified_attributions: Vec::new(),
            landing_page: Vec::new(),
            license: None,
            language: Vec::new(),
            resource_relation: Vec::new(),
            rights: None,
            keyword: LangMap::new(),
            qualified_relation: Vec::new(),
        }
    }

    /// Explicitly assigned or previously minted identifier
    pub fn identifier(&self) -> Option<&Uri> {
        self.identifier.get()
    }

    /// Validate and assign the identifier
    pub fn set_identifier(&mut self, identifier: impl AsRef<str>) -> DcatResult<()> {
        self.identifier.set(Uri::new(identifier.as_ref())?);
        Ok(())
    }

    /// Identifier, minting a skolem URI on first use
    pub fn resolve_identifier(&self) -> &Uri {
        self.identifier.resolve()
    }

    pub(crate) fn subject(&self) -> RdfSubject {
        uri_node(self.resolve_identifier()).into()
    }

    /// Emit the shared attributes about `subject` (no type triple)
    pub(crate) fn emit(&self, graph: &mut Graph, subject: &RdfSubject) -> DcatResult<()> {
        match &self.publisher {
            Some(Publisher::Uri(uri)) => {
                graph.add(subject, dct::PUBLISHER, uri_node(uri));
            }
            Some(Publisher::Agent(agent)) => {
                let agent_node = agent.emit(graph)?;
                graph.add(subject, dct::PUBLISHER, agent_node);
            }
            None => {}
        }

        add_lang_map(graph, subject, dct::TITLE, &self.title)?;
        add_uri(graph, subject, dct::ACCESS_RIGHTS, self.access_rights.as_ref());
        add_uris(graph, subject, dct::CONFORMS_TO, &self.conforms_to);
        add_lang_map(graph, subject, dct::DESCRIPTION, &self.description)?;
        add_uris(graph, subject, dcat::THEME, &self.theme);

        if let Some(contact) = &self.contact_point {
            let contact_node = contact.emit_blank(graph)?;
            graph.add(subject, dcat::CONTACT_POINT, contact_node);
        }

        add_uri(graph, subject, dct::CREATOR, self.creator.as_ref());
        add_uri(graph, subject, odrl::HAS_POLICY, self.has_policy.as_ref());

        for referenced in &self.is_referenced_by {
            graph.add(subject, dct::IS_REFERENCED_BY, uri_node(&referenced.resolve_identifier()));
        }

        add_date(graph, subject, dct::ISSUED, self.release_date.as_ref());
        add_date(graph, subject, dct::MODIFIED, self.modification_date.as_ref());
        add_uri(graph, subject, dct::TYPE, self.type_genre.as_ref());

        for attribution in &self.qualified_attributions {
            let node = BlankNode::new();
            graph.add(node.clone(), rdf::TYPE, prov::ATTRIBUTION);
            graph.add(node.clone(), prov::AGENT, uri_node(&attribution.agent));
            graph.add(node.clone(), dcat::HAD_ROLE, uri_node(&attribution.had_role));
            graph.add(subject, prov::QUALIFIED_ATTRIBUTION, node);
        }

        add_uris(graph, subject, dcat::LANDING_PAGE, &self.landing_page);
        add_uri(graph, subject, dct::LICENSE, self.license.as_ref());
        add_uris(graph, subject, dct::LANGUAGE, &self.language);
        add_uris(graph, subject, dct::RELATION, &self.resource_relation);
        add_uri(graph, subject, dct::RIGHTS, self.rights.as_ref());
        add_lang_map(graph, subject, dcat::KEYWORD, &self.keyword)?;

        for relationship in &self.qualified_relation {
            let node = relationship.emit_blank(graph)?;
            graph.add(subject, dcat::QUALIFIED_RELATION, node);
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::resource_graph;
    use crate::rdf::RdfFormat;
    use crate::values::lang_map;

    fn uri(s: &str) -> Uri {
        Uri::new(s).unwrap()
    }

    fn emit(resource: &Resource) -> Graph {
        let mut graph = resource_graph();
        resource.emit(&mut graph, &resource.subject()).unwrap();
        graph
    }

    #[test]
    fn test_identifier_validated() {
        let mut resource = Resource::new();
        assert!(resource.set_identifier("http://example.com/a b").is_err());
        assert!(resource.identifier().is_none());
        resource.set_identifier("http://example.com/resources/1").unwrap();
        assert_eq!(resource.resolve_identifier().as_str(), "http://example.com/resources/1");
    }

    #[test]
    fn test_empty_resource_emits_nothing() {
        let mut resource = Resource::new();
        resource.set_identifier("http://example.com/resources/1").unwrap();
        assert!(emit(&resource).is_empty());
    }

    #[test]
    fn test_shared_attributes() {
        let mut resource = Resource::new();
        resource.set_identifier("http://example.com/resources/1").unwrap();
        resource.publisher = Some(uri("https://example.com/publishers/1").into());
        resource.title = lang_map([("nb", "Tittel"), ("en", "Title")]);
        resource.access_rights = Some(uri("http://publications.europa.eu/resource/authority/access-right/PUBLIC"));
        resource.conforms_to = vec![uri("https://example.com/standards/1")];
        resource.description = lang_map([("en", "A description")]);
        resource.theme = vec![uri("http://example.com/themes/1"), uri("http://example.com/themes/2")];
        resource.creator = Some(uri("https://example.com/creators/1"));
        resource.has_policy = Some(uri("https://example.com/policies/1"));
        resource.is_referenced_by =
            vec![Arc::new(ResourceRef::new(uri("https://example.com/docs/1"))) as Arc<dyn Identified>];
        resource.release_date = Some(Date::new("2020-03-24").unwrap());
        resource.modification_date = Some(Date::new("2020-03-25").unwrap());
        resource.type_genre = Some(uri("https://example.com/types/1"));
        resource.landing_page = vec![uri("https://example.com/landing")];
        resource.license = Some(uri("http://example.com/licenses/1"));
        resource.language = vec![uri("http://id.loc.gov/vocabulary/iso639-1/en")];
        resource.resource_relation = vec![uri("https://example.com/related/1")];
        resource.rights = Some(uri("https://example.com/rights/1"));
        resource.keyword = lang_map([("nb", "Nøkkelord")]);

        let expected = r#"
            @prefix dct: <http://purl.org/dc/terms/> .
            @prefix dcat: <http://www.w3.org/ns/dcat#> .
            @prefix odrl: <http://www.w3.org/ns/odrl/2/> .
            @prefix xsd: <http://www.w3.org/2001/XMLSchema#> .

            <http://example.com/resources/1>
                dct:publisher <https://example.com/publishers/1> ;
                dct:title "Tittel"@nb, "Title"@en ;
                dct:accessRights <http://publications.europa.eu/resource/authority/access-right/PUBLIC> ;
                dct:conformsTo <https://example.com/standards/1> ;
                dct:description "A description"@en ;
                dcat:theme <http://example.com/themes/1>, <http://example.com/themes/2> ;
                dct:creator <https://example.com/creators/1> ;
                odrl:hasPolicy <https://example.com/policies/1> ;
                dct:isReferencedBy <https://example.com/docs/1> ;
                dct:issued "2020-03-24"^^xsd:date ;
                dct:modified "2020-03-25"^^xsd:date ;
                dct:type <https://example.com/types/1> ;
                dcat:landingPage <https://example.com/landing> ;
                dct:license <http://example.com/licenses/1> ;
                dct:language <http://id.loc.gov/vocabulary/iso639-1/en> ;
                dct:relation <https://example.com/related/1> ;
                dct:rights <https://example.com/rights/1> ;
                dcat:keyword "Nøkkelord"@nb .
        "#;
        let expected = Graph::parse(expected, RdfFormat::Turtle).unwrap();
        assert!(emit(&resource).is_isomorphic(&expected));
    }

    #[test]
    fn test_qualified_attributions_get_one_node_each() {
        let mut resource = Resource::new();
        resource.set_identifier("http://example.com/resources/1").unwrap();
        resource.qualified_attributions = vec![
            QualifiedAttribution::new(uri("https://example.com/agents/1"), uri("http://example.com/roles/owner")),
            QualifiedAttribution::new(uri("https://example.com/agents/2"), uri("http://example.com/roles/editor")),
        ];

        let expected = r#"
            @prefix dcat: <http://www.w3.org/ns/dcat#> .
            @prefix prov: <http://www.w3.org/ns/prov#> .

            <http://example.com/resources/1> prov:qualifiedAttribution _:a1, _:a2 .
            _:a1 a prov:Attribution ;
                prov:agent <https://example.com/agents/1> ;
                dcat:hadRole <http://example.com/roles/owner> .
            _:a2 a prov:Attribution ;
                prov:agent <https://example.com/agents/2> ;
                dcat:hadRole <http://example.com/roles/editor> .
        "#;
        let expected = Graph::parse(expected, RdfFormat::Turtle).unwrap();
        assert!(emit(&resource).is_isomorphic(&expected));
    }

    #[test]
    fn test_inlined_agent_publisher() {
        let mut agent = Agent::new();
        agent.name = lang_map([("en", "Publisher")]);
        agent.organization_id = Some("123456789".to_string());

        let mut resource = Resource::new();
        resource.set_identifier("http://example.com/resources/1").unwrap();
        resource.publisher = Some(agent.into());

        let expected = r#"
            @prefix dct: <http://purl.org/dc/terms/> .
            @prefix foaf: <http://xmlns.com/foaf/0.1/> .

            <http://example.com/resources/1> dct:publisher [
                a foaf:Agent ;
                foaf:name "Publisher"@en ;
                dct:identifier "123456789"
            ] .
        "#;
        let expected = Graph::parse(expected, RdfFormat::Turtle).unwrap();
        assert!(emit(&resource).is_isomorphic(&expected));
    }

    #[test]
    fn test_contact_point_and_qualified_relation_are_blank() {
        let mut contact = Contact::new();
        contact.set_identifier("http://example.com/contacts/1").unwrap();
        contact.set_email("data@example.com").unwrap();

        let mut relationship = Relationship::new();
        relationship.identifier = Some(uri("http://example.com/relations/1"));
        relationship.relation = Some(Arc::new(ResourceRef::new(uri("http://example.com/datasets/2"))));
        relationship.had_role = Some(uri("http://www.iana.org/assignments/relation/original"));

        let mut resource = Resource::new();
        resource.set_identifier("http://example.com/resources/1").unwrap();
        resource.contact_point = Some(contact);
        resource.qualified_relation.push(relationship);

        let expected = r#"
            @prefix dct: <http://purl.org/dc/terms/> .
            @prefix dcat: <http://www.w3.org/ns/dcat#> .
            @prefix vcard: <http://www.w3.org/2006/vcard/ns#> .

            <http://example.com/resources/1>
                dcat:contactPoint [
                    a vcard:Organization ;
                    vcard:hasEmail <mailto:data@example.com>
                ] ;
                dcat:qualifiedRelation [
                    a dcat:Relationship ;
                    dct:relation <http://example.com/datasets/2> ;
                    dcat:hadRole <http://www.iana.org/assignments/relation/original>
                ] .
        "#;
        let expected = Graph::parse(expected, RdfFormat::Turtle).unwrap();
        assert!(emit(&resource).is_isomorphic(&expected));
    }

    #[test]
    fn test_anonymous_contact_point_mints_nothing() {
        let mut contact = Contact::new();
        contact.name = lang_map([("nb", "Kontakt")]);

        let mut resource = Resource::new();
        resource.set_identifier("http://example.com/resources/1").unwrap();
        resource.contact_point = Some(contact);

        let graph = emit(&resource);
        assert_eq!(graph.len(), 3);
        assert!(resource.contact_point.as_ref().unwrap().identifier().is_none());
    }
}
