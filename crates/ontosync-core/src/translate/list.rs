//! RDF collections (`rdf:first` / `rdf:rest` chains).

use super::Emitter;
use super::vocab_triple;
use crate::vocab::rdf;
use crate::{Graph, Iri, Resource, SyncError, Term, Triple};
use std::collections::BTreeSet;

/// Walk a well-founded RDF list starting at `head`.
///
/// Every cell must carry exactly one `rdf:first` and one `rdf:rest`, and
/// the chain must end at `rdf:nil`. The cell triples (and any
/// `rdf:type rdf:List` on a cell) are added to `triples`.
///
/// A revisited cell or a list longer than `max_len` trips the recursion
/// guard; any other structural defect is a malformed graph.
pub fn walk_list(
    graph: &Graph,
    head: &Term,
    max_len: usize,
    triples: &mut BTreeSet<Triple>,
) -> Result<Vec<Term>, SyncError> {
    let mut items = Vec::new();
    let mut visited: BTreeSet<Resource> = BTreeSet::new();
    let mut node = head.clone();

    loop {
        if node.is_iri(rdf::NIL) {
            return Ok(items);
        }
        let Some(cell) = node.as_resource() else {
            return Err(SyncError::MalformedGraph(format!(
                "list cell is a literal: {node}"
            )));
        };
        if !visited.insert(cell.clone()) {
            return Err(SyncError::RecursionGuard {
                limit: items.len(),
                context: format!("cyclic RDF list revisits {cell}"),
            });
        }
        if items.len() >= max_len {
            return Err(SyncError::RecursionGuard {
                limit: max_len,
                context: format!("RDF list at {head} is longer than the list ceiling"),
            });
        }

        let first = single(graph, &cell, rdf::FIRST)?;
        let rest = single(graph, &cell, rdf::REST)?;

        triples.insert(Triple::new(cell.clone(), Iri::unchecked(rdf::FIRST), first.clone()));
        triples.insert(Triple::new(cell.clone(), Iri::unchecked(rdf::REST), rest.clone()));
        let typed = vocab_triple(cell.clone(), rdf::TYPE, Iri::unchecked(rdf::LIST));
        if graph.contains(&typed) {
            triples.insert(typed);
        }

        items.push(first);
        node = rest;
    }
}

fn single(graph: &Graph, cell: &Resource, predicate: &str) -> Result<Term, SyncError> {
    let mut values = graph.objects(cell, predicate);
    match values.len() {
        1 => Ok(values.remove(0)),
        0 if predicate == rdf::REST => Err(SyncError::MalformedGraph(format!(
            "unterminated RDF list at {cell}"
        ))),
        0 => Err(SyncError::MalformedGraph(format!(
            "list cell {cell} has no rdf:first"
        ))),
        n => Err(SyncError::MalformedGraph(format!(
            "list cell {cell} branches into {n} values of <{predicate}>"
        ))),
    }
}

/// Write `items` as a fresh RDF list and return its head.
pub fn write_list(out: &mut Emitter<'_>, items: &[Term]) -> Term {
    let cells: Vec<Resource> = items.iter().map(|_| Resource::Blank(out.fresh())).collect();
    for (index, (cell, item)) in cells.iter().zip(items).enumerate() {
        let rest = cells
            .get(index.saturating_add(1))
            .map(|next| Term::from(next.clone()))
            .unwrap_or_else(|| Term::Iri(Iri::unchecked(rdf::NIL)));
        out.emit(vocab_triple(cell.clone(), rdf::FIRST, item.clone()));
        out.emit(vocab_triple(cell.clone(), rdf::REST, rest));
    }
    cells
        .into_iter()
        .next()
        .map(Term::from)
        .unwrap_or_else(|| Term::Iri(Iri::unchecked(rdf::NIL)))
}
