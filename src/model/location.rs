//! dct:Location

use super::{subject_for, ToRdf};
use crate::error::DcatResult;
use crate::rdf::vocab::{dcat, dct, geosparql, locn, ns, rdf};
use crate::rdf::{Graph, Literal, RdfSubject};
use crate::values::Uri;

/// A spatial region, each shape given as well-known text
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Location {
    pub identifier: Option<Uri>,
    pub geometry: Option<String>,
    pub bounding_box: Option<String>,
    pub centroid: Option<String>,
}

impl Location {
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
        graph.add(&subject, rdf::TYPE, dct::LOCATION);

        let shapes = [
            (locn::GEOMETRY, &self.geometry),
            (dcat::BBOX, &self.bounding_box),
            (dcat::CENTROID, &self.centroid),
        ];
        for (predicate, wkt) in shapes {
            if let Some(wkt) = wkt {
                graph.add(&subject, predicate, Literal::new_typed_literal(wkt.as_str(), geosparql::AS_WKT));
            }
        }

        Ok(subject)
    }
}

impl ToRdf for Location {
    fn to_graph(&self) -> DcatResult<Graph> {
        let mut graph = Graph::new();
        graph.bind("dct", ns::DCT);
        graph.bind("dcat", ns::DCAT);
        graph.bind("locn", ns::LOCN);
        graph.bind("geosparql", ns::GEOSPARQL);
        self.emit(&mut graph)?;
        Ok(graph)
    }
}
