//! Turtle and N-Triples implementation

use super::{convert_triple, format_graph, ParseError, ParseResult, SerializeError, SerializeResult};
use crate::rdf::vocab;
use crate::rdf::{Graph, RdfObject, RdfSubject, Triple};
use indexmap::{IndexMap, IndexSet};
use oxttl::TurtleSerializer;
use rio_api::parser::TriplesParser;
use rio_turtle::{NTriplesFormatter, TurtleParser};
use std::io::{BufReader, Cursor};

/// Turtle parser (also reads N-Triples, which is a subset)
pub struct TurtleParserWrapper;

impl TurtleParserWrapper {
    /// Parse Turtle string to Triples
    pub fn parse(input: &str) -> ParseResult<Vec<Triple>> {
        let cursor = Cursor::new(input);
        let mut reader = BufReader::new(cursor);
        let mut parser = TurtleParser::new(&mut reader, None);

        let mut triples = Vec::new();

        let res: Result<(), rio_turtle::TurtleError> = parser.parse_all(&mut |t| {
            let triple = convert_triple(t).map_err(|e| {
                std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
            })?;
            triples.push(triple);
            Ok(())
        });

        match res {
            Ok(_) => Ok(triples),
            Err(e) => Err(ParseError::Parse(e.to_string())),
        }
    }
}

/// Turtle serializer
///
/// Prefixes are declared for the bound namespaces the graph uses. Triples are
/// fed subject by subject in first-seen order with `rdf:type` first, so the
/// writer can group them.
pub struct TurtleSerializerWrapper;

impl TurtleSerializerWrapper {
    /// Serialize a graph to a Turtle string
    pub fn serialize(graph: &Graph) -> SerializeResult<String> {
        let mut serializer = TurtleSerializer::new();
        for (prefix, iri) in used_prefixes(graph) {
            serializer = serializer
                .with_prefix(prefix, iri)
                .map_err(|e| SerializeError::Serialize(e.to_string()))?;
        }

        let mut writer = serializer.for_writer(Vec::new());
        for triple in grouped(graph) {
            writer.serialize_triple(triple.as_oxrdf())?;
        }
        let output = writer.finish()?;

        String::from_utf8(output).map_err(|e| SerializeError::Serialize(e.to_string()))
    }
}

fn grouped(graph: &Graph) -> Vec<&Triple> {
    let mut blocks: IndexMap<&RdfSubject, IndexMap<&str, Vec<&Triple>>> = IndexMap::new();
    for triple in graph {
        blocks
            .entry(&triple.subject)
            .or_default()
            .entry(triple.predicate.as_str())
            .or_default()
            .push(triple);
    }

    let mut ordered = Vec::with_capacity(graph.len());
    for (_, mut predicates) in blocks {
        if let Some(types) = predicates.shift_remove(vocab::rdf::TYPE.as_str()) {
            ordered.extend(types);
        }
        ordered.extend(predicates.into_values().flatten());
    }
    ordered
}

fn used_prefixes(graph: &Graph) -> Vec<(&str, &str)> {
    let namespaces = graph.namespaces();
    let mut used = IndexSet::new();
    for triple in graph {
        if let RdfSubject::NamedNode(n) = &triple.subject {
            used.extend(namespaces.prefix_for(n.as_str()));
        }
        used.extend(namespaces.prefix_for(triple.predicate.as_str()));
        match &triple.object {
            RdfObject::NamedNode(n) => used.extend(namespaces.prefix_for(n.as_str())),
            RdfObject::Literal(l) if l.language().is_none() && !l.is_plain() => {
                used.extend(namespaces.prefix_for(l.datatype_iri()))
            }
            _ => {}
        }
    }
    namespaces.iter().filter(|(prefix, _)| used.contains(prefix)).collect()
}

/// N-Triples serializer
pub struct NTriplesSerializerWrapper;

impl NTriplesSerializerWrapper {
    /// Serialize a graph to an N-Triples string
    pub fn serialize(graph: &Graph) -> SerializeResult<String> {
        let mut output = Vec::new();
        let mut formatter = NTriplesFormatter::new(&mut output);

        format_graph(&mut formatter, graph)?;
        formatter.finish()?;

        String::from_utf8(output).map_err(|e| SerializeError::Serialize(e.to_string()))
    }
}
