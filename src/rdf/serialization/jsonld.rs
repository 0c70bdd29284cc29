//! JSON-LD format implementation (expanded form)

use super::{SerializeError, SerializeResult};
use crate::rdf::vocab;
use crate::rdf::{Graph, RdfObject, RdfSubject};
use indexmap::IndexMap;
use serde_json::{json, Map, Value};

/// JSON-LD serializer
pub struct JsonLdSerializerWrapper;

impl JsonLdSerializerWrapper {
    /// Serialize a graph to an expanded JSON-LD document
    ///
    /// One node object per subject in first-seen order. `rdf:type` objects
    /// become `@type`; all other values are arrays of value or node objects.
    pub fn serialize(graph: &Graph) -> SerializeResult<String> {
        let mut nodes: IndexMap<String, Map<String, Value>> = IndexMap::new();

        for triple in graph {
            let id = subject_id(&triple.subject);
            let node = nodes.entry(id.clone()).or_insert_with(|| {
                let mut node = Map::new();
                node.insert("@id".to_string(), Value::String(id));
                node
            });

            let (key, value) = if triple.predicate.as_str() == vocab::rdf::TYPE.as_str() {
                let type_value = match &triple.object {
                    RdfObject::NamedNode(n) => Value::String(n.as_str().to_string()),
                    RdfObject::BlankNode(b) => Value::String(b.to_string()),
                    RdfObject::Literal(_) => {
                        // a literal rdf:type is kept as an ordinary property
                        push_value(node, triple.predicate.as_str(), object_value(&triple.object));
                        continue;
                    }
                };
                ("@type".to_string(), type_value)
            } else {
                (triple.predicate.as_str().to_string(), object_value(&triple.object))
            };
            push_value(node, &key, value);
        }

        let document: Vec<Value> = nodes.into_iter().map(|(_, node)| Value::Object(node)).collect();
        serde_json::to_string_pretty(&document)
            .map_err(|e| SerializeError::Serialize(e.to_string()))
    }
}

fn subject_id(subject: &RdfSubject) -> String {
    match subject {
        RdfSubject::NamedNode(n) => n.as_str().to_string(),
        RdfSubject::BlankNode(b) => b.to_string(),
    }
}

fn object_value(object: &RdfObject) -> Value {
    match object {
        RdfObject::NamedNode(n) => json!({ "@id": n.as_str() }),
        RdfObject::BlankNode(b) => json!({ "@id": b.to_string() }),
        RdfObject::Literal(l) => {
            if let Some(lang) = l.language() {
                json!({ "@value": l.value(), "@language": lang })
            } else if l.is_plain() {
                json!({ "@value": l.value() })
            } else {
                json!({ "@value": l.value(), "@type": l.datatype_iri() })
            }
        }
    }
}

fn push_value(node: &mut Map<String, Value>, key: &str, value: Value) {
    match node.get_mut(key) {
        Some(Value::Array(values)) => values.push(value),
        _ => {
            node.insert(key.to_string(), Value::Array(vec![value]));
        }
    }
}
