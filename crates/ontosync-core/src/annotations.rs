//! # Annotation Resolver
//!
//! Encodes and decodes annotations on statements.
//!
//! An annotated statement `(s, p, o)` gets a blank reification node `R`:
//!
//! ```text
//! R rdf:type owl:Axiom ;
//!   owl:annotatedSource s ; owl:annotatedProperty p ; owl:annotatedTarget o ;
//!   rdfs:label "an annotation" .
//! ```
//!
//! Each annotation triple `(R, ap, v)` may itself be reified, this time
//! with an `owl:Annotation` node, and so on. Bulk statements and the
//! ontology header carry their annotations directly instead.
//!
//! Reading is an explicit worklist: no call-stack recursion, a visited set
//! over reification nodes, and a hard depth ceiling.

use crate::model::{Annotation, AnnotationValue};
use crate::translate::{Emitter, vocab_triple};
use crate::vocab::{self, owl, rdf};
use crate::{BlankNode, Graph, Iri, Resource, SyncError, Term, Triple};
use std::collections::BTreeSet;

/// Annotations read from the graph and the triples that encode them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolved {
    pub annotations: BTreeSet<Annotation>,
    pub triples: BTreeSet<Triple>,
}

/// Whether a predicate can carry an annotation.
#[must_use]
pub fn is_annotation_predicate(predicate: &Iri) -> bool {
    !vocab::is_reserved_predicate(predicate.as_str())
}

/// Blank nodes reifying exactly `base` with the given marker type.
#[must_use]
pub fn find_reifiers(graph: &Graph, base: &Triple, marker: &str) -> Vec<BlankNode> {
    let source = Term::from(base.subject.clone());
    graph
        .subjects(owl::ANNOTATED_SOURCE, &source)
        .into_iter()
        .filter(|node| {
            graph.contains(&vocab_triple(
                node.clone(),
                owl::ANNOTATED_PROPERTY,
                base.predicate.clone(),
            )) && graph.contains(&vocab_triple(
                node.clone(),
                owl::ANNOTATED_TARGET,
                base.object.clone(),
            )) && graph.has_type(node, marker)
        })
        .filter_map(|node| match node {
            Resource::Blank(blank) => Some(blank),
            Resource::Iri(_) => None,
        })
        .collect()
}

// =============================================================================
// READING
// =============================================================================

struct Pending {
    host: Resource,
    property: Iri,
    value: Term,
    parent: Option<usize>,
    depth: usize,
}

/// Read the annotations of an axiom whose main triple is `base`.
///
/// Every `owl:Axiom` node reifying `base` contributes; several nodes for
/// the same triple merge into one annotation set.
pub fn read_reified(graph: &Graph, base: &Triple, max_depth: usize) -> Result<Resolved, SyncError> {
    read_through(graph, base, owl::AXIOM, 1, max_depth)
}

/// Read the sub-annotations of a top-level annotation triple, such as an
/// annotation on the ontology header.
pub fn read_nested(
    graph: &Graph,
    annotation: &Triple,
    max_depth: usize,
) -> Result<Resolved, SyncError> {
    read_through(graph, annotation, owl::ANNOTATION, 2, max_depth)
}

fn read_through(
    graph: &Graph,
    base: &Triple,
    marker: &str,
    depth: usize,
    max_depth: usize,
) -> Result<Resolved, SyncError> {
    let mut resolved = Resolved::default();
    let mut visited = BTreeSet::new();
    let mut hosts = Vec::new();
    for reifier in find_reifiers(graph, base, marker) {
        if depth > max_depth {
            return Err(SyncError::RecursionGuard {
                limit: max_depth,
                context: format!("annotations on {base} nest deeper than {max_depth}"),
            });
        }
        let node = Resource::Blank(reifier);
        visited.insert(node.clone());
        record_reifier(&node, base, marker, &mut resolved.triples);
        hosts.push(node);
    }
    resolved.annotations = collect(
        graph,
        &hosts,
        depth,
        max_depth,
        &mut visited,
        &mut resolved.triples,
    )?;
    Ok(resolved)
}

/// Read the annotations attached directly to `node` (a bulk statement
/// node or the ontology header).
pub fn read_direct(graph: &Graph, node: &Resource, max_depth: usize) -> Result<Resolved, SyncError> {
    let mut resolved = Resolved::default();
    let mut visited = BTreeSet::new();
    resolved.annotations = collect(
        graph,
        std::slice::from_ref(node),
        1,
        max_depth,
        &mut visited,
        &mut resolved.triples,
    )?;
    Ok(resolved)
}

fn collect(
    graph: &Graph,
    hosts: &[Resource],
    depth: usize,
    max_depth: usize,
    visited: &mut BTreeSet<Resource>,
    triples: &mut BTreeSet<Triple>,
) -> Result<BTreeSet<Annotation>, SyncError> {
    let mut arena: Vec<Pending> = Vec::new();
    for host in hosts {
        push_direct(graph, host, None, depth, &mut arena, triples);
    }

    let mut cursor = 0;
    while let Some(pending) = arena.get(cursor) {
        let base = Triple::new(
            pending.host.clone(),
            pending.property.clone(),
            pending.value.clone(),
        );
        let depth = pending.depth;
        for reifier in find_reifiers(graph, &base, owl::ANNOTATION) {
            let node = Resource::Blank(reifier);
            if !visited.insert(node.clone()) {
                return Err(SyncError::RecursionGuard {
                    limit: depth,
                    context: format!("annotation reification {node} is reached twice"),
                });
            }
            if depth >= max_depth {
                return Err(SyncError::RecursionGuard {
                    limit: max_depth,
                    context: format!("annotations nest deeper than {max_depth} at {node}"),
                });
            }
            record_reifier(&node, &base, owl::ANNOTATION, triples);
            push_direct(graph, &node, Some(cursor), depth.saturating_add(1), &mut arena, triples);
        }
        cursor = cursor.saturating_add(1);
    }

    // Children always sit after their parent in the arena, so one reverse
    // sweep assembles every level bottom-up.
    let mut children: Vec<BTreeSet<Annotation>> = vec![BTreeSet::new(); arena.len()];
    let mut top = BTreeSet::new();
    for (index, pending) in arena.into_iter().enumerate().rev() {
        let nested = children
            .get_mut(index)
            .map(std::mem::take)
            .unwrap_or_default();
        let annotation = Annotation {
            property: pending.property,
            value: AnnotationValue::from(pending.value),
            annotations: nested,
        };
        match pending.parent.and_then(|parent| children.get_mut(parent)) {
            Some(siblings) => {
                siblings.insert(annotation);
            }
            None => {
                top.insert(annotation);
            }
        }
    }
    Ok(top)
}

fn push_direct(
    graph: &Graph,
    host: &Resource,
    parent: Option<usize>,
    depth: usize,
    arena: &mut Vec<Pending>,
    triples: &mut BTreeSet<Triple>,
) {
    for triple in graph.matching(Some(host), None, None) {
        if !is_annotation_predicate(&triple.predicate) {
            continue;
        }
        arena.push(Pending {
            host: host.clone(),
            property: triple.predicate.clone(),
            value: triple.object.clone(),
            parent,
            depth,
        });
        triples.insert(triple);
    }
}

fn record_reifier(node: &Resource, base: &Triple, marker: &str, triples: &mut BTreeSet<Triple>) {
    triples.insert(vocab_triple(node.clone(), rdf::TYPE, Iri::unchecked(marker)));
    triples.insert(vocab_triple(
        node.clone(),
        owl::ANNOTATED_SOURCE,
        base.subject.clone(),
    ));
    triples.insert(vocab_triple(
        node.clone(),
        owl::ANNOTATED_PROPERTY,
        base.predicate.clone(),
    ));
    triples.insert(vocab_triple(
        node.clone(),
        owl::ANNOTATED_TARGET,
        base.object.clone(),
    ));
}

// =============================================================================
// WRITING
// =============================================================================

/// Reify `base` (already in the graph) and attach `annotations`.
///
/// An existing `owl:Axiom` node for the same triple is reused.
pub fn write_reified(
    out: &mut Emitter<'_>,
    base: &Triple,
    annotations: &BTreeSet<Annotation>,
) -> Result<(), SyncError> {
    write_reified_at(out, base, annotations, owl::AXIOM, 1)
}

/// Attach `annotations` directly to `node`.
pub fn write_direct(
    out: &mut Emitter<'_>,
    node: &Resource,
    annotations: &BTreeSet<Annotation>,
) -> Result<(), SyncError> {
    for annotation in annotations {
        write_one(out, node, annotation, 1)?;
    }
    Ok(())
}

fn write_reified_at(
    out: &mut Emitter<'_>,
    base: &Triple,
    annotations: &BTreeSet<Annotation>,
    marker: &str,
    depth: usize,
) -> Result<(), SyncError> {
    if annotations.is_empty() {
        return Ok(());
    }
    let ceiling = out.config().max_annotation_depth;
    if depth > ceiling {
        return Err(SyncError::RecursionGuard {
            limit: ceiling,
            context: format!("annotations on {base} nest too deeply to write"),
        });
    }

    let existing = find_reifiers(out.graph(), base, marker).into_iter().next();
    let node = match existing {
        Some(blank) => Resource::Blank(blank),
        None => {
            let node = Resource::Blank(out.fresh());
            out.emit(vocab_triple(node.clone(), rdf::TYPE, Iri::unchecked(marker)));
            out.emit(vocab_triple(
                node.clone(),
                owl::ANNOTATED_SOURCE,
                base.subject.clone(),
            ));
            out.emit(vocab_triple(
                node.clone(),
                owl::ANNOTATED_PROPERTY,
                base.predicate.clone(),
            ));
            out.emit(vocab_triple(
                node.clone(),
                owl::ANNOTATED_TARGET,
                base.object.clone(),
            ));
            node
        }
    };

    for annotation in annotations {
        write_one(out, &node, annotation, depth)?;
    }
    Ok(())
}

fn write_one(
    out: &mut Emitter<'_>,
    host: &Resource,
    annotation: &Annotation,
    depth: usize,
) -> Result<(), SyncError> {
    if !is_annotation_predicate(&annotation.property) {
        return Err(SyncError::UnsupportedConstruct(format!(
            "{} is reserved vocabulary and cannot annotate",
            annotation.property
        )));
    }
    let triple = out.emit(Triple::new(
        host.clone(),
        annotation.property.clone(),
        annotation.value.to_term(),
    ));
    write_reified_at(
        out,
        &triple,
        &annotation.annotations,
        owl::ANNOTATION,
        depth.saturating_add(1),
    )
}

// =============================================================================
// TESTS
// =============================================================================
