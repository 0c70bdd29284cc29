//! foaf:Document

use super::{add_lang_map, subject_for, ToRdf};
use crate::error::DcatResult;
use crate::rdf::vocab::{dct, foaf, ns, rdf};
use crate::rdf::{Graph, Literal, RdfSubject};
use crate::values::{LangMap, Uri};

/// A document, for instance a page describing a dataset
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Document {
    pub identifier: Option<Uri>,
    pub title: LangMap,
    pub language: Option<Uri>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_identifier(identifier: Uri) -> Self {
        Self {
            identifier: Some(identifier),
            ..Self::default()
        }
    }

    pub(crate) fn emit(&self, graph: &mut Graph) -> DcatResult<RdfSubject> {
        let subject = subject_for(self.identifier.as_ref());
        graph.add(&subject, rdf::TYPE, foaf::DOCUMENT);

        add_lang_map(graph, &subject, dct::TITLE, &self.title)?;
        // the language is written as a literal typed dct:LinguisticSystem
        if let Some(language) = &self.language {
            graph.add(
                &subject,
                dct::LANGUAGE,
                Literal::new_typed_literal(language.as_str(), dct::LINGUISTIC_SYSTEM),
            );
        }

        Ok(subject)
    }
}

impl ToRdf for Document {
    fn to_graph(&self) -> DcatResult<Graph> {
        let mut graph = Graph::new();
        graph.bind("dct", ns::DCT);
        graph.bind("foaf", ns::FOAF);
        self.emit(&mut graph)?;
        Ok(graph)
    }
}
