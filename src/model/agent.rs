//! foaf:Agent

use super::{add_lang_map, add_uri, subject_for, ToRdf};
use crate::error::DcatResult;
use crate::rdf::vocab::{dct, foaf, ns, owl, rdf};
use crate::rdf::{Graph, Literal, RdfSubject};
use crate::values::{LangMap, Uri};

/// An organization or person, typically a publisher
///
/// Emitted as a blank node when no identifier is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Agent {
    pub identifier: Option<Uri>,
    pub name: LangMap,
    pub organization_id: Option<String>,
    pub organization_type: Option<Uri>,
    pub same_as: Option<Uri>,
}

impl Agent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier(identifier: Uri) -> Self {
        Self {
            identifier: Some(identifier),
            ..Self::default()
        }
    }

    /// Emit the agent's triples, returning its subject node
    pub(crate) fn emit(&self, graph: &mut Graph) -> DcatResult<RdfSubject> {
        let subject = subject_for(self.identifier.as_ref());
        graph.add(&subject, rdf::TYPE, foaf::AGENT);

        add_lang_map(graph, &subject, foaf::NAME, &self.name)?;
        if let Some(id) = &self.organization_id {
            graph.add(&subject, dct::IDENTIFIER, Literal::new_simple_literal(id.as_str()));
        }
        add_uri(graph, &subject, dct::TYPE, self.organization_type.as_ref());
        add_uri(graph, &subject, owl::SAME_AS, self.same_as.as_ref());

        Ok(subject)
    }
}

impl ToRdf for Agent {
    fn to_graph(&self) -> DcatResult<Graph> {
        let mut graph = Graph::new();
        graph.bind("dct", ns::DCT);
        graph.bind("foaf", ns::FOAF);
        self.emit(&mut graph)?;
        Ok(graph)
    }
}
