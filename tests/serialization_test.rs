//! Output formats and encodings

mod common;

use common::uri;
use datacatalog_rdf::{lang_map, DcatError, Distribution, Graph, RdfFormat, ToRdf};

fn distribution() -> Distribution {
    let mut distribution = Distribution::new();
    distribution.set_identifier("http://example.com/distributions/1").unwrap();
    distribution.title = lang_map([("en", "CSV file")]);
    distribution.download_url = Some(uri("http://example.com/data.csv"));
    distribution
}

#[test]
fn test_turtle_is_default() {
    let distribution = distribution();
    assert_eq!(RdfFormat::default(), RdfFormat::Turtle);
    let bytes = distribution.to_rdf_bytes("turtle", None).unwrap();
    assert_eq!(String::from_utf8(bytes).unwrap(), distribution.to_turtle().unwrap());
}

#[test]
fn test_xml_round_trip() {
    let distribution = distribution();
    let xml = distribution.to_rdf(RdfFormat::RdfXml).unwrap();
    let parsed = Graph::parse(&xml, RdfFormat::RdfXml).unwrap();
    assert!(parsed.is_isomorphic(&distribution.to_graph().unwrap()));
}

#[test]
fn test_json_ld_output() {
    let bytes = distribution().to_rdf_bytes("json-ld", Some("utf-8")).unwrap();
    let document: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
    let nodes = document.as_array().unwrap();
    assert_eq!(nodes.len(), 1);
    assert_eq!(nodes[0]["@id"], "http://example.com/distributions/1");
    assert_eq!(nodes[0]["@type"][0], "http://www.w3.org/ns/dcat#Distribution");
}

#[test]
fn test_format_names() {
    for name in ["turtle", "ttl", "text/turtle", "xml", "pretty-xml", "json-ld", "nt"] {
        assert!(distribution().to_rdf_bytes(name, None).is_ok(), "{}", name);
    }
    assert!(matches!(
        distribution().to_rdf_bytes("n3-ish", None),
        Err(DcatError::UnsupportedFormat(_))
    ));
    assert!(matches!(
        distribution().to_rdf_bytes("turtle", Some("latin-1")),
        Err(DcatError::UnsupportedEncoding(_))
    ));
}
