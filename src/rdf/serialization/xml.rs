//! RDF/XML format implementation

use super::{convert_triple, format_graph, ParseError, ParseResult, SerializeError, SerializeResult};
use crate::rdf::{Graph, Triple};
use rio_api::parser::TriplesParser;
use rio_xml::{RdfXmlFormatter, RdfXmlParser};
use std::io::{BufReader, Cursor};

/// RDF/XML parser
pub struct RdfXmlParserWrapper;

impl RdfXmlParserWrapper {
    /// Parse an RDF/XML document to Triples
    pub fn parse(input: &str) -> ParseResult<Vec<Triple>> {
        let reader = BufReader::new(Cursor::new(input));
        let mut parser = RdfXmlParser::new(reader, None);

        let mut triples = Vec::new();
        let res: Result<(), rio_xml::RdfXmlError> = parser.parse_all(&mut |t| {
            let triple = convert_triple(t).map_err(|e| {
                std::io::Error::new(std::io::ErrorKind::InvalidData, e.to_string())
            })?;
            triples.push(triple);
            Ok(())
        });

        res.map(|_| triples)
            .map_err(|e| ParseError::Parse(e.to_string()))
    }
}

/// RDF/XML serializer
pub struct RdfXmlSerializerWrapper;

impl RdfXmlSerializerWrapper {
    /// Serialize a graph to an indented RDF/XML string
    pub fn serialize(graph: &Graph) -> SerializeResult<String> {
        let mut output = Vec::new();
        let mut formatter = RdfXmlFormatter::with_indentation(&mut output, 2)?;

        format_graph(&mut formatter, graph)?;
        formatter.finish()?;

        String::from_utf8(output).map_err(|e| SerializeError::Serialize(e.to_string()))
    }
}
