//! vcard:Organization contact point

use super::{add_lang_map, add_uri, uri_node, Identified, SkolemIdentifier, ToRdf};
use crate::error::{DcatError, DcatResult};
use crate::rdf::vocab::{ns, rdf, vcard};
use crate::rdf::{BlankNode, Graph, NamedNode, RdfSubject};
use crate::values::{LangMap, Uri};
use serde::{Deserialize, Serialize};
use serde_json::Value;

const KIND: &str = "Contact";

/// Contact information for a resource
///
/// Rendered on its own under a URI, minting a skolem identifier on first use
/// when none was assigned. As a contact point it is inlined on a blank node.
#[derive(Debug, Clone, Default)]
pub struct Contact {
    identifier: SkolemIdentifier,
    pub name: LangMap,
    email: Option<String>,
    telephone: Option<String>,
    pub url: Option<Uri>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct ContactDocument {
    #[serde(rename = "_type", default, skip_serializing_if = "Option::is_none")]
    kind: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    identifier: Option<String>,
    #[serde(default, skip_serializing_if = "LangMap::is_empty")]
    name: LangMap,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    telephone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
}

impl Contact {
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

    pub fn email(&self) -> Option<&str> {
        self.email.as_deref()
    }

    /// Set the e-mail address; it must form a valid `mailto:` URI
    pub fn set_email(&mut self, email: impl Into<String>) -> DcatResult<()> {
        let email = email.into();
        Uri::with_scheme("mailto:", &email)?;
        self.email = Some(email);
        Ok(())
    }

    pub fn telephone(&self) -> Option<&str> {
        self.telephone.as_deref()
    }

    /// Set the phone number; it must form a valid `tel:` URI
    pub fn set_telephone(&mut self, telephone: impl Into<String>) -> DcatResult<()> {
        let telephone = telephone.into();
        Uri::with_scheme("tel:", &telephone)?;
        self.telephone = Some(telephone);
        Ok(())
    }

    pub(crate) fn emit(&self, graph: &mut Graph) -> DcatResult<RdfSubject> {
        let subject: RdfSubject = uri_node(self.identifier.resolve()).into();
        self.emit_about(graph, &subject)?;
        Ok(subject)
    }

    /// Emit as a contact point: the vcard triples go on a fresh blank node,
    /// whatever identifier the contact carries
    pub(crate) fn emit_blank(&self, graph: &mut Graph) -> DcatResult<RdfSubject> {
        let subject: RdfSubject = BlankNode::new().into();
        self.emit_about(graph, &subject)?;
        Ok(subject)
    }

    fn emit_about(&self, graph: &mut Graph, subject: &RdfSubject) -> DcatResult<()> {
        graph.add(subject, rdf::TYPE, vcard::ORGANIZATION);

        add_lang_map(graph, subject, vcard::HAS_ORGANIZATION_NAME, &self.name)?;
        if let Some(email) = &self.email {
            graph.add(subject, vcard::HAS_EMAIL, NamedNode::new_unchecked(format!("mailto:{}", email)));
        }
        if let Some(telephone) = &self.telephone {
            graph.add(subject, vcard::HAS_TELEPHONE, NamedNode::new_unchecked(format!("tel:{}", telephone)));
        }
        add_uri(graph, subject, vcard::HAS_URL, self.url.as_ref());
        Ok(())
    }

    /// Export as a JSON object tagged with `"_type": "Contact"`
    ///
    /// The identifier is always written. An anonymous contact mints and keeps
    /// its skolem URI here, so a later import yields the same node.
    pub fn to_json(&self) -> DcatResult<Value> {
        let document = ContactDocument {
            kind: Some(KIND.to_string()),
            identifier: Some(self.identifier.resolve().to_string()),
            name: self.name.clone(),
            email: self.email.clone(),
            telephone: self.telephone.clone(),
            url: self.url.as_ref().map(Uri::to_string),
        };
        Ok(serde_json::to_value(document)?)
    }

    /// Rebuild a contact from its JSON form, validating every attribute
    pub fn from_json(value: &Value) -> DcatResult<Self> {
        let document: ContactDocument = serde_json::from_value(value.clone())?;
        if let Some(kind) = document.kind.as_deref().filter(|k| *k != KIND) {
            return Err(DcatError::InvalidDocument(format!("expected _type {}, found {}", KIND, kind)));
        }

        let mut contact = Contact::new();
        if let Some(identifier) = document.identifier {
            contact.set_identifier(identifier)?;
        }
        contact.name = document.name;
        if let Some(email) = document.email {
            contact.set_email(email)?;
        }
        if let Some(telephone) = document.telephone {
            contact.set_telephone(telephone)?;
        }
        contact.url = document.url.map(Uri::new).transpose()?;
        Ok(contact)
    }
}

impl Identified for Contact {
    fn kind(&self) -> &'static str {
        KIND
    }

    fn resolve_identifier(&self) -> Uri {
        self.identifier.resolve().clone()
    }
}

impl ToRdf for Contact {
    fn to_graph(&self) -> DcatResult<Graph> {
        let mut graph = Graph::new();
        graph.bind("vcard", ns::VCARD);
        self.emit(&mut graph)?;
        Ok(graph)
    }
}
