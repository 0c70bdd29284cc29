//! dcat:Relationship

use super::{add_uri, subject_for, uri_node, Identified, ToRdf};
use crate::error::DcatResult;
use crate::rdf::vocab::{dcat, dct, ns, rdf};
use crate::rdf::{BlankNode, Graph, RdfSubject};
use crate::values::Uri;
use std::sync::Arc;

/// A qualified link from a resource to another resource, with a role
#[derive(Debug, Clone, Default)]
pub struct Relationship {
    pub identifier: Option<Uri>,
    pub relation: Option<Arc<dyn Identified>>,
    pub had_role: Option<Uri>,
}

impl Relationship {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn emit(&self, graph: &mut Graph) -> DcatResult<RdfSubject> {
        let subject = subject_for(self.identifier.as_ref());
        self.emit_about(graph, &subject);
        Ok(subject)
    }

    /// Emit as a qualified relation: always on a fresh blank node
    pub(crate) fn emit_blank(&self, graph: &mut Graph) -> DcatResult<RdfSubject> {
        let subject: RdfSubject = BlankNode::new().into();
        self.emit_about(graph, &subject);
        Ok(subject)
    }

    fn emit_about(&self, graph: &mut Graph, subject: &RdfSubject) {
        graph.add(subject, rdf::TYPE, dcat::RELATIONSHIP_CLASS);

        if let Some(related) = &self.relation {
            graph.add(subject, dct::RELATION, uri_node(&related.resolve_identifier()));
        }
        add_uri(graph, subject, dcat::HAD_ROLE, self.had_role.as_ref());
    }
}

impl ToRdf for Relationship {
    fn to_graph(&self) -> DcatResult<Graph> {
        let mut graph = Graph::new();
        graph.bind("dct", ns::DCT);
        graph.bind("dcat", ns::DCAT);
        self.emit(&mut graph)?;
        Ok(graph)
    }
}
