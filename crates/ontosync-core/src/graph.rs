//! # Triple Store
//!
//! The in-memory triple graph, backed by `oxrdf::Graph`.
//!
//! `oxrdf` interns terms under a randomly seeded hasher, so its iteration
//! order differs between runs. Every query here collects into ordered
//! collections before returning, so the same graph always answers in the
//! same order.

use crate::primitives::BLANK_PREFIX;
use crate::vocab::rdf;
use crate::{BlankNode, Iri, Resource, Term, Triple};
use oxrdf::{NamedNodeRef, TripleRef};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

// =============================================================================
// GRAPH IMPLEMENTATION
// =============================================================================

/// A mutable set of triples.
///
/// Storage and the subject/predicate/object access paths are `oxrdf`'s.
/// This wrapper adds deterministic ordering and engine-allocated blank
/// nodes. Duplicate inserts collapse. Equality compares the triple sets only.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    store: oxrdf::Graph,
    /// Next candidate suffix for engine-allocated blank nodes.
    next_blank_id: u64,
}

impl PartialEq for Graph {
    fn eq(&self, other: &Self) -> bool {
        self.store == other.store
    }
}

impl Eq for Graph {}

fn vocab_node(iri: &str) -> NamedNodeRef<'_> {
    NamedNodeRef::new_unchecked(iri)
}

impl Graph {
    /// Create a new empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a graph from a collection of triples.
    pub fn from_triples(triples: impl IntoIterator<Item = Triple>) -> Self {
        let mut graph = Self::new();
        for triple in triples {
            graph.insert(triple);
        }
        graph
    }

    /// Insert a triple. Returns `true` if it was not already present.
    pub fn insert(&mut self, triple: Triple) -> bool {
        self.store.insert(&triple)
    }

    /// Remove a triple. Returns `true` if it was present.
    pub fn remove(&mut self, triple: &Triple) -> bool {
        self.store.remove(triple)
    }

    /// Check if the graph contains a triple.
    #[must_use]
    pub fn contains(&self, triple: &Triple) -> bool {
        self.store.contains(triple)
    }

    /// Get the total number of triples.
    #[must_use]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    /// Check if the graph has no triples.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Iterate all triples in subject-major order.
    pub fn triples(&self) -> impl Iterator<Item = Triple> + '_ {
        sorted(self.store.iter()).into_iter()
    }

    /// Find all triples matching a pattern. `None` positions are wildcards.
    ///
    /// The most selective `oxrdf` index for the bound positions is used.
    pub fn matching(
        &self,
        subject: Option<&Resource>,
        predicate: Option<&Iri>,
        object: Option<&Term>,
    ) -> Vec<Triple> {
        match (subject, predicate, object) {
            (Some(s), Some(p), Some(o)) => {
                let triple = Triple::new(s.clone(), p.clone(), o.clone());
                if self.contains(&triple) {
                    vec![triple]
                } else {
                    Vec::new()
                }
            }
            (Some(s), Some(p), None) => self
                .store
                .objects_for_subject_predicate(s, p)
                .map(|o| Triple::new(s.clone(), p.clone(), Term::from(o)))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            (Some(s), None, Some(o)) => self
                .store
                .predicates_for_subject_object(s, o)
                .map(|p| Triple::new(s.clone(), Iri::from(p), o.clone()))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            (Some(s), None, None) => sorted(self.store.triples_for_subject(s)),
            (None, Some(p), Some(o)) => self
                .store
                .subjects_for_predicate_object(p, o)
                .map(|s| Triple::new(Resource::from(s), p.clone(), o.clone()))
                .collect::<BTreeSet<_>>()
                .into_iter()
                .collect(),
            (None, Some(p), None) => sorted(self.store.triples_for_predicate(p)),
            (None, None, Some(o)) => sorted(self.store.triples_for_object(o)),
            (None, None, None) => self.triples().collect(),
        }
    }

    /// All triples using a given vocabulary predicate.
    pub fn with_predicate(&self, predicate: &str) -> Vec<Triple> {
        sorted(self.store.triples_for_predicate(vocab_node(predicate)))
    }

    /// All objects of `(subject, predicate, ?)`.
    pub fn objects(&self, subject: &Resource, predicate: &str) -> Vec<Term> {
        self.store
            .objects_for_subject_predicate(subject, vocab_node(predicate))
            .map(Term::from)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All subjects of `(?, predicate, object)`.
    pub fn subjects(&self, predicate: &str, object: &Term) -> Vec<Resource> {
        self.store
            .subjects_for_predicate_object(vocab_node(predicate), object)
            .map(Resource::from)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// All resources typed with the given vocabulary type.
    pub fn instances_of(&self, type_iri: &str) -> Vec<Resource> {
        self.store
            .subjects_for_predicate_object(vocab_node(rdf::TYPE), vocab_node(type_iri))
            .map(Resource::from)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// Check whether `resource rdf:type type_iri` is asserted.
    #[must_use]
    pub fn has_type(&self, resource: &Resource, type_iri: &str) -> bool {
        self.store.contains(TripleRef::new(
            resource,
            vocab_node(rdf::TYPE),
            vocab_node(type_iri),
        ))
    }

    /// Check whether a resource appears as the subject of any triple.
    #[must_use]
    pub fn has_subject(&self, resource: &Resource) -> bool {
        self.store.triples_for_subject(resource).next().is_some()
    }

    /// Check whether a term appears in object position of any triple.
    #[must_use]
    pub fn has_object(&self, term: &Term) -> bool {
        self.store.triples_for_object(term).next().is_some()
    }

    /// All predicates used in the graph.
    pub fn predicates(&self) -> BTreeSet<Iri> {
        self.store.iter().map(|t| Iri::from(t.predicate)).collect()
    }

    /// Allocate a blank node whose label is not used anywhere in the graph.
    pub fn fresh_blank(&mut self) -> BlankNode {
        loop {
            let node = BlankNode::new(format!("{BLANK_PREFIX}{}", self.next_blank_id));
            self.next_blank_id = self.next_blank_id.saturating_add(1);
            let as_subject = Resource::Blank(node.clone());
            let as_object = Term::Blank(node.clone());
            if !self.has_subject(&as_subject) && !self.has_object(&as_object) {
                return node;
            }
        }
    }

    /// Get the next blank node suffix that would be tried.
    #[must_use]
    pub fn next_blank_id(&self) -> u64 {
        self.next_blank_id
    }
}

/// Convert borrowed `oxrdf` triples into an ordered list.
fn sorted<'a>(triples: impl Iterator<Item = TripleRef<'a>>) -> Vec<Triple> {
    triples
        .map(Triple::from)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

// =============================================================================
// SERIALIZATION SUPPORT
// =============================================================================

/// Serializable representation of the graph for persistence.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SerializableGraph {
    pub triples: Vec<Triple>,
    pub next_blank_id: u64,
}

impl From<&Graph> for SerializableGraph {
    fn from(graph: &Graph) -> Self {
        Self {
            triples: graph.triples().collect(),
            next_blank_id: graph.next_blank_id,
        }
    }
}

impl From<SerializableGraph> for Graph {
    fn from(sg: SerializableGraph) -> Self {
        let mut graph = Graph::from_triples(sg.triples);
        graph.next_blank_id = sg.next_blank_id;
        graph
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Literal;

    fn iri(local: &str) -> Iri {
        Iri::new(format!("http://example.org/{local}")).expect("iri")
    }

    fn t(s: &str, p: &str, o: &str) -> Triple {
        Triple::new(iri(s), iri(p), iri(o))
    }

    #[test]
    fn duplicate_insert_collapses() {
        let mut graph = Graph::new();
        assert!(graph.insert(t("a", "p", "b")));
        assert!(!graph.insert(t("a", "p", "b")));
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn remove_clears_every_access_path() {
        let mut graph = Graph::new();
        graph.insert(t("a", "p", "b"));
        assert!(graph.remove(&t("a", "p", "b")));
        assert!(!graph.remove(&t("a", "p", "b")));
        assert!(graph.is_empty());
        assert!(!graph.has_subject(&Resource::Iri(iri("a"))));
        assert!(!graph.has_object(&Term::Iri(iri("b"))));
        assert!(graph.predicates().is_empty());
    }

    #[test]
    fn matching_uses_every_access_path() {
        let mut graph = Graph::new();
        graph.insert(t("a", "p", "b"));
        graph.insert(t("a", "q", "c"));
        graph.insert(t("d", "p", "b"));

        let a = Resource::Iri(iri("a"));
        let p = iri("p");
        let b = Term::Iri(iri("b"));

        assert_eq!(graph.matching(Some(&a), None, None).len(), 2);
        assert_eq!(graph.matching(None, Some(&p), None).len(), 2);
        assert_eq!(graph.matching(None, None, Some(&b)).len(), 2);
        assert_eq!(graph.matching(Some(&a), Some(&p), None).len(), 1);
        assert_eq!(graph.matching(None, Some(&p), Some(&b)).len(), 2);
        assert_eq!(graph.matching(Some(&a), None, Some(&b)).len(), 1);
        assert_eq!(graph.matching(Some(&a), Some(&p), Some(&b)).len(), 1);
        assert_eq!(graph.matching(None, None, None).len(), 3);
    }

    #[test]
    fn triples_iterate_deterministically() {
        let mut g1 = Graph::new();
        g1.insert(t("b", "p", "c"));
        g1.insert(t("a", "p", "c"));
        let mut g2 = Graph::new();
        g2.insert(t("a", "p", "c"));
        g2.insert(t("b", "p", "c"));

        let v1: Vec<_> = g1.triples().collect();
        let v2: Vec<_> = g2.triples().collect();
        assert_eq!(v1, v2);
        assert_eq!(g1, g2);
    }

    #[test]
    fn fresh_blank_skips_labels_in_use() {
        let mut graph = Graph::new();
        graph.insert(Triple::new(
            BlankNode::new("genid0"),
            iri("p"),
            Literal::simple("x"),
        ));
        let fresh = graph.fresh_blank();
        assert_ne!(fresh.as_str(), "genid0");
        let again = graph.fresh_blank();
        assert_ne!(fresh, again);
    }

    #[test]
    fn type_helpers() {
        let mut graph = Graph::new();
        let a = Resource::Iri(iri("a"));
        graph.insert(Triple::new(
            a.clone(),
            Iri::from_vocab(rdf::TYPE),
            Iri::from_vocab(crate::vocab::owl::CLASS),
        ));
        assert!(graph.has_type(&a, crate::vocab::owl::CLASS));
        assert_eq!(graph.instances_of(crate::vocab::owl::CLASS), vec![a]);
    }

    #[test]
    fn serializable_graph_roundtrip() {
        let mut graph = Graph::new();
        graph.insert(t("a", "p", "b"));
        graph.insert(Triple::new(iri("a"), iri("label"), Literal::lang("A", "en")));
        let _ = graph.fresh_blank();

        let serializable = SerializableGraph::from(&graph);
        let restored = Graph::from(serializable);

        assert_eq!(graph, restored);
        assert_eq!(graph.next_blank_id(), restored.next_blank_id());
    }
}
