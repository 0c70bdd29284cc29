//! Shared helpers for the integration tests

#![allow(dead_code)]

use datacatalog_rdf::{Graph, RdfFormat, Uri};
use tracing_subscriber::EnvFilter;

/// Route `tracing` output to the test harness (RUST_LOG=debug to see it)
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn uri(value: &str) -> Uri {
    Uri::new(value).unwrap()
}

/// Parse `turtle` and compare it with `actual` up to blank node renaming
pub fn assert_isomorphic(actual: &Graph, turtle: &str) {
    let expected = Graph::parse(turtle, RdfFormat::Turtle).expect("expected graph must parse");
    if !actual.is_isomorphic(&expected) {
        let mut report = String::new();
        report.push_str("only in actual:\n");
        for t in actual.difference(&expected) {
            report.push_str(&format!("  {}\n", t));
        }
        report.push_str("only in expected:\n");
        for t in expected.difference(actual) {
            report.push_str(&format!("  {}\n", t));
        }
        panic!("graphs are not isomorphic\n{}", report);
    }
}

/// Round-trip the Turtle output through the parser before comparing
pub fn assert_turtle_isomorphic(turtle_out: &str, turtle: &str) {
    let actual = Graph::parse(turtle_out, RdfFormat::Turtle).expect("output must parse");
    assert_isomorphic(&actual, turtle);
}
