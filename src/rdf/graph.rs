//! In-memory RDF graph
//!
//! An insertion-ordered set of triples plus the namespace bindings used when
//! the graph is written out. Insertion order only affects output text; two
//! graphs are compared with [`Graph::is_isomorphic`].

use super::namespace::NamespaceManager;
use super::serialization::{
    ParseResult, RdfFormat, RdfParser, RdfSerializer, SerializeResult,
};
use super::types::{BlankNode, RdfObject, RdfPredicate, RdfSubject, Triple};
use indexmap::{IndexMap, IndexSet};
use oxrdf::NamedNodeRef;
use std::collections::hash_map::DefaultHasher;
use std::collections::{HashMap, HashSet};
use std::hash::{Hash, Hasher};

/// RDF graph with prefix bindings
#[derive(Debug, Clone, Default)]
pub struct Graph {
    /// All triples, deduplicated, in insertion order
    triples: IndexSet<Triple>,

    /// Prefixes used for serialization
    namespaces: NamespaceManager,
}

impl Graph {
    /// Create an empty graph with the core RDF prefixes bound
    pub fn new() -> Self {
        Self {
            triples: IndexSet::new(),
            namespaces: NamespaceManager::new(),
        }
    }

    /// Bind a namespace prefix
    pub fn bind(&mut self, prefix: impl Into<String>, iri: impl Into<String>) {
        self.namespaces.add_prefix(prefix, iri);
    }

    /// Namespace bindings
    pub fn namespaces(&self) -> &NamespaceManager {
        &self.namespaces
    }

    /// Insert a triple, returning `false` if it was already present
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.triples.insert(triple)
    }

    /// Insert a triple built from its parts
    pub fn add(
        &mut self,
        subject: impl Into<RdfSubject>,
        predicate: impl Into<RdfPredicate>,
        object: impl Into<RdfObject>,
    ) -> bool {
        self.insert(Triple::new(subject, predicate, object))
    }

    /// Add all triples and prefix bindings of another graph
    pub fn merge(&mut self, other: Graph) {
        self.namespaces.merge(&other.namespaces);
        self.triples.extend(other.triples);
    }

    /// Number of triples
    pub fn len(&self) -> usize {
        self.triples.len()
    }

    /// True if the graph has no triples
    pub fn is_empty(&self) -> bool {
        self.triples.is_empty()
    }

    /// Check whether a triple is present
    pub fn contains(&self, triple: &Triple) -> bool {
        self.triples.contains(triple)
    }

    /// Iterate triples in insertion order
    pub fn iter(&self) -> impl Iterator<Item = &Triple> {
        self.triples.iter()
    }

    /// All triples with the given subject
    pub fn triples_with_subject(&self, subject: &RdfSubject) -> Vec<&Triple> {
        self.triples.iter().filter(|t| &t.subject == subject).collect()
    }

    /// Objects of `(subject, predicate, ?)`
    pub fn objects(&self, subject: &RdfSubject, predicate: NamedNodeRef<'_>) -> Vec<&RdfObject> {
        self.triples
            .iter()
            .filter(|t| &t.subject == subject && t.predicate.as_str() == predicate.as_str())
            .map(|t| &t.object)
            .collect()
    }

    /// Subjects in first-seen order
    pub fn subjects(&self) -> Vec<&RdfSubject> {
        let mut seen = IndexSet::new();
        for t in &self.triples {
            seen.insert(&t.subject);
        }
        seen.into_iter().collect()
    }

    /// Triples of `self` with no exact counterpart in `other`
    ///
    /// Blank nodes are compared by label, so this is only a diagnostic aid.
    pub fn difference<'a>(&'a self, other: &Graph) -> Vec<&'a Triple> {
        self.triples.iter().filter(|t| !other.contains(t)).collect()
    }

    /// Serialize in the given format
    pub fn serialize(&self, format: RdfFormat) -> SerializeResult<String> {
        RdfSerializer::serialize(self, format)
    }

    /// Parse a document into a new graph
    pub fn parse(input: &str, format: RdfFormat) -> ParseResult<Graph> {
        let mut graph = Graph::new();
        for triple in RdfParser::parse(input, format)? {
            graph.insert(triple);
        }
        Ok(graph)
    }

    /// Graph isomorphism up to blank node renaming
    pub fn is_isomorphic(&self, other: &Graph) -> bool {
        if self.len() != other.len() {
            return false;
        }

        let (self_ground, self_blank): (Vec<&Triple>, Vec<&Triple>) =
            self.triples.iter().partition(|t| t.is_ground());
        let (other_ground, other_blank): (Vec<&Triple>, Vec<&Triple>) =
            other.triples.iter().partition(|t| t.is_ground());

        if self_ground.len() != other_ground.len()
            || self_ground.iter().any(|t| !other.contains(t))
        {
            return false;
        }
        if self_blank.is_empty() {
            return true;
        }

        let left = BlankView::new(&self_blank);
        let right = BlankView::new(&other_blank);
        if left.nodes.len() != right.nodes.len() {
            return false;
        }

        let left_colors = left.colors();
        let right_colors = right.colors();

        let mut left_hist: HashMap<u64, usize> = HashMap::new();
        let mut right_hist: HashMap<u64, usize> = HashMap::new();
        for c in left_colors.values() {
            *left_hist.entry(*c).or_default() += 1;
        }
        for c in right_colors.values() {
            *right_hist.entry(*c).or_default() += 1;
        }
        if left_hist != right_hist {
            return false;
        }

        // Most constrained nodes first
        let mut order: Vec<&BlankNode> = left.nodes.iter().copied().collect();
        order.sort_by_key(|b| left_hist[&left_colors[b]]);

        let target: HashSet<&Triple> = other_blank.iter().copied().collect();
        let mut matcher = Matcher {
            left: &left,
            right: &right,
            left_colors: &left_colors,
            right_colors: &right_colors,
            target: &target,
            mapping: HashMap::new(),
            used: HashSet::new(),
        };
        matcher.search(&order, 0)
    }
}

impl<'a> IntoIterator for &'a Graph {
    type Item = &'a Triple;
    type IntoIter = indexmap::set::Iter<'a, Triple>;

    fn into_iter(self) -> Self::IntoIter {
        self.triples.iter()
    }
}

impl Extend<Triple> for Graph {
    fn extend<I: IntoIterator<Item = Triple>>(&mut self, iter: I) {
        self.triples.extend(iter);
    }
}

impl PartialEq for Graph {
    /// Equality is isomorphism
    fn eq(&self, other: &Self) -> bool {
        self.is_isomorphic(other)
    }
}

const MAX_REFINEMENT_ROUNDS: usize = 16;

/// Blank-node-bearing triples of one graph, indexed by blank node
struct BlankView<'a> {
    nodes: IndexSet<&'a BlankNode>,
    occurrences: IndexMap<&'a BlankNode, Vec<&'a Triple>>,
}

impl<'a> BlankView<'a> {
    fn new(triples: &[&'a Triple]) -> Self {
        let mut nodes = IndexSet::new();
        let mut occurrences: IndexMap<&BlankNode, Vec<&Triple>> = IndexMap::new();
        for &t in triples {
            if let RdfSubject::BlankNode(b) = &t.subject {
                nodes.insert(b);
                occurrences.entry(b).or_default().push(t);
            }
            if let RdfObject::BlankNode(b) = &t.object {
                nodes.insert(b);
                let entry = occurrences.entry(b).or_default();
                if !entry.iter().any(|seen| std::ptr::eq(*seen, t)) {
                    entry.push(t);
                }
            }
        }
        Self { nodes, occurrences }
    }

    /// Colour refinement: a node's colour summarizes its neighbourhood
    ///
    /// Runs a round count fixed by the node count, so colours of two graphs
    /// with the same number of blank nodes are comparable.
    fn colors(&self) -> HashMap<&'a BlankNode, u64> {
        let mut colors: HashMap<&BlankNode, u64> =
            self.nodes.iter().map(|b| (*b, 0u64)).collect();

        for _ in 0..self.nodes.len().clamp(1, MAX_REFINEMENT_ROUNDS) {
            let mut next = HashMap::with_capacity(colors.len());
            for b in &self.nodes {
                let mut edges: Vec<u64> = self.occurrences[b]
                    .iter()
                    .map(|t| edge_signature(t, b, &colors))
                    .collect();
                edges.sort_unstable();
                let mut hasher = DefaultHasher::new();
                colors[b].hash(&mut hasher);
                edges.hash(&mut hasher);
                next.insert(*b, hasher.finish());
            }
            colors = next;
        }
        colors
    }
}

fn edge_signature(triple: &Triple, node: &BlankNode, colors: &HashMap<&BlankNode, u64>) -> u64 {
    let mut hasher = DefaultHasher::new();
    triple.predicate.as_str().hash(&mut hasher);

    let as_subject = matches!(&triple.subject, RdfSubject::BlankNode(b) if b == node);
    let as_object = matches!(&triple.object, RdfObject::BlankNode(b) if b == node);
    as_subject.hash(&mut hasher);
    as_object.hash(&mut hasher);

    match &triple.subject {
        RdfSubject::NamedNode(n) => n.as_str().hash(&mut hasher),
        RdfSubject::BlankNode(b) => colors.get(b).copied().unwrap_or_default().hash(&mut hasher),
    }
    match &triple.object {
        RdfObject::NamedNode(n) => n.as_str().hash(&mut hasher),
        RdfObject::Literal(l) => l.to_string().hash(&mut hasher),
        RdfObject::BlankNode(b) => colors.get(b).copied().unwrap_or_default().hash(&mut hasher),
    }
    hasher.finish()
}

struct Matcher<'m, 'a> {
    left: &'m BlankView<'a>,
    right: &'m BlankView<'a>,
    left_colors: &'m HashMap<&'a BlankNode, u64>,
    right_colors: &'m HashMap<&'a BlankNode, u64>,
    target: &'m HashSet<&'a Triple>,
    mapping: HashMap<&'a BlankNode, &'a BlankNode>,
    used: HashSet<&'a BlankNode>,
}

impl<'m, 'a> Matcher<'m, 'a> {
    fn search(&mut self, order: &[&'a BlankNode], depth: usize) -> bool {
        let Some(node) = order.get(depth).copied() else {
            return true;
        };
        let color = self.left_colors[node];

        let candidates: Vec<&'a BlankNode> = self
            .right
            .nodes
            .iter()
            .copied()
            .filter(|c| self.right_colors[c] == color && !self.used.contains(c))
            .collect();

        for candidate in candidates {
            self.mapping.insert(node, candidate);
            self.used.insert(candidate);

            if self.consistent(node) && self.search(order, depth + 1) {
                return true;
            }

            self.mapping.remove(node);
            self.used.remove(candidate);
        }
        false
    }

    // Every fully mapped triple touching `node` must exist on the other side
    fn consistent(&self, node: &'a BlankNode) -> bool {
        for t in &self.left.occurrences[node] {
            let subject = match &t.subject {
                RdfSubject::BlankNode(b) => match self.mapping.get(b) {
                    Some(m) => RdfSubject::BlankNode((*m).clone()),
                    None => continue,
                },
                s => s.clone(),
            };
            let object = match &t.object {
                RdfObject::BlankNode(b) => match self.mapping.get(b) {
                    Some(m) => RdfObject::BlankNode((*m).clone()),
                    None => continue,
                },
                o => o.clone(),
            };
            let image = Triple {
                subject,
                predicate: t.predicate.clone(),
                object,
            };
            if !self.target.contains(&image) {
                return false;
            }
        }
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rdf::{Literal, NamedNode};
    use crate::rdf::vocab::{dcat, dct, rdf};

    fn ex(local: &str) -> NamedNode {
        NamedNode::new(&format!("http://example.org/{}", local)).unwrap()
    }

    #[test]
    fn test_insert_dedups() {
        let mut g = Graph::new();
        assert!(g.add(ex("a"), rdf::TYPE, dcat::DATASET_CLASS));
        assert!(!g.add(ex("a"), rdf::TYPE, dcat::DATASET_CLASS));
        assert_eq!(g.len(), 1);
    }

    #[test]
    fn test_objects_and_subjects() {
        let mut g = Graph::new();
        g.add(ex("a"), dct::TITLE, Literal::new_language_tagged_literal("A", "en").unwrap());
        g.add(ex("a"), dct::TITLE, Literal::new_language_tagged_literal("A", "nb").unwrap());
        g.add(ex("b"), dct::TITLE, Literal::new_simple_literal("B"));

        let a: RdfSubject = ex("a").into();
        assert_eq!(g.objects(&a, dct::TITLE).len(), 2);
        assert_eq!(g.subjects().len(), 2);
        assert_eq!(g.triples_with_subject(&a).len(), 2);
    }

    #[test]
    fn test_isomorphic_with_renamed_blank_nodes() {
        let mut g1 = Graph::new();
        let b1 = BlankNode::new();
        g1.add(ex("d"), dct::TEMPORAL, b1.clone());
        g1.add(b1, rdf::TYPE, dct::PERIOD_OF_TIME);

        let mut g2 = Graph::new();
        let b2 = BlankNode::new();
        g2.add(b2.clone(), rdf::TYPE, dct::PERIOD_OF_TIME);
        g2.add(ex("d"), dct::TEMPORAL, b2);

        assert!(g1.is_isomorphic(&g2));
        assert_eq!(g1, g2);
    }

    #[test]
    fn test_not_isomorphic_when_blank_structure_differs() {
        // Two periods each with one date vs one period with both dates
        let start = Literal::new_simple_literal("start");
        let end = Literal::new_simple_literal("end");

        let mut g1 = Graph::new();
        let p1 = BlankNode::new();
        let p2 = BlankNode::new();
        g1.add(ex("d"), dct::TEMPORAL, p1.clone());
        g1.add(ex("d"), dct::TEMPORAL, p2.clone());
        g1.add(p1.clone(), dcat::START_DATE, start.clone());
        g1.add(p2.clone(), dcat::END_DATE, end.clone());

        let mut g2 = Graph::new();
        let q1 = BlankNode::new();
        let q2 = BlankNode::new();
        g2.add(ex("d"), dct::TEMPORAL, q1.clone());
        g2.add(ex("d"), dct::TEMPORAL, q2.clone());
        g2.add(q1.clone(), dcat::START_DATE, start);
        g2.add(q1, dcat::END_DATE, end);

        assert!(!g1.is_isomorphic(&g2));
    }

    #[test]
    fn test_symmetric_blank_nodes_need_backtracking() {
        // A blank cycle of length 2 against two blank self-loops
        let mut g1 = Graph::new();
        let a = BlankNode::new();
        let b = BlankNode::new();
        g1.add(a.clone(), dct::RELATION, b.clone());
        g1.add(b, dct::RELATION, a);

        let mut g2 = Graph::new();
        let c = BlankNode::new();
        let d = BlankNode::new();
        g2.add(c.clone(), dct::RELATION, c);
        g2.add(d.clone(), dct::RELATION, d);

        assert!(!g1.is_isomorphic(&g2));

        let mut g3 = Graph::new();
        let e = BlankNode::new();
        let f = BlankNode::new();
        g3.add(f.clone(), dct::RELATION, e.clone());
        g3.add(e, dct::RELATION, f);
        assert!(g1.is_isomorphic(&g3));
    }

    #[test]
    fn test_ground_mismatch() {
        let mut g1 = Graph::new();
        g1.add(ex("a"), rdf::TYPE, dcat::DATASET_CLASS);
        let mut g2 = Graph::new();
        g2.add(ex("a"), rdf::TYPE, dcat::CATALOG_CLASS);
        assert!(!g1.is_isomorphic(&g2));
        assert_eq!(g1.difference(&g2).len(), 1);
    }

    #[test]
    fn test_merge_keeps_prefixes() {
        let mut g1 = Graph::new();
        g1.bind("dcat", "http://www.w3.org/ns/dcat#");
        let mut g2 = Graph::new();
        g2.bind("dct", "http://purl.org/dc/terms/");
        g2.add(ex("a"), rdf::TYPE, dcat::DATASET_CLASS);

        g1.merge(g2);
        assert_eq!(g1.len(), 1);
        assert!(g1.namespaces().get_iri("dct").is_ok());
        assert!(g1.namespaces().get_iri("dcat").is_ok());
    }
}
