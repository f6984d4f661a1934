//! # Axiom Translators
//!
//! One translator per [`AxiomKind`]. A translator reads every occurrence
//! of its kind out of a canonical graph (with the exact triples that
//! justify each occurrence) and writes axiom values back as canonical
//! triples.
//!
//! ## Footprints
//!
//! The *defining* triples of an occurrence are those that exist only
//! because of that axiom: its main triple plus any anonymous expression,
//! list and bulk-node triples. Annotation triples (reification nodes and
//! the annotations on them) are kept apart so they can be cleared without
//! touching the base fact. Entity declarations are never part of a
//! footprint of another axiom.

use crate::annotations;
use crate::config::SyncConfig;
use crate::model::{Axiom, AxiomBody, AxiomKind};
use crate::vocab::{self, owl, rdf};
use crate::{Graph, Iri, Resource, SyncError, Term, Triple};
use std::collections::BTreeSet;
use tracing::warn;

mod characteristics;
mod class_axioms;
mod context;
mod declaration;
mod emitter;
mod expression;
mod individual_axioms;
pub mod list;
mod nary;
mod property_axioms;
pub mod registry;

pub use context::{ReadContext, is_structural_node};
pub(crate) use declaration::declaration_triple;
pub use emitter::Emitter;
pub use expression::{read_class_expr, read_individual, write_class_expr};
pub use registry::translator;

// =============================================================================
// OCCURRENCES
// =============================================================================

/// The triples that assert one axiom occurrence.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct Footprint {
    /// Base triples: removing the axiom removes exactly these.
    pub defining: BTreeSet<Triple>,
    /// Reification and annotation triples.
    pub annotations: BTreeSet<Triple>,
}

impl Footprint {
    /// Every triple of the footprint.
    pub fn iter(&self) -> impl Iterator<Item = &Triple> + '_ {
        self.defining.iter().chain(self.annotations.iter())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.defining.len().saturating_add(self.annotations.len())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.defining.is_empty() && self.annotations.is_empty()
    }
}

/// One axiom found in the graph, with its footprint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occurrence {
    pub axiom: Axiom,
    pub footprint: Footprint,
}

// =============================================================================
// TRANSLATOR TRAIT
// =============================================================================

/// Reads and writes the triples of one axiom kind.
pub trait AxiomTranslator: Send + Sync {
    /// The kind this translator handles.
    fn kind(&self) -> AxiomKind;

    /// Vocabulary predicates whose triples this kind reads.
    ///
    /// `rdf:type`, list cells, reification and triples about blank nodes
    /// are always considered relevant.
    fn predicates(&self) -> &'static [&'static str];

    /// Whether this kind reads triples with arbitrary user predicates.
    fn reads_open_predicates(&self) -> bool {
        false
    }

    /// Scan the graph for every occurrence of this kind.
    ///
    /// Deterministic for a given graph. Constructs with no model
    /// counterpart are skipped with a warning; structural errors abort.
    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError>;

    /// Emit the canonical triples for `axiom`, including annotations.
    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError>;

    /// Whether adding or removing `triple` can change what `read` returns.
    fn touches(&self, triple: &Triple) -> bool {
        let predicate = triple.predicate.as_str();
        predicate == rdf::TYPE
            || predicate == rdf::FIRST
            || predicate == rdf::REST
            || predicate == owl::ANNOTATED_SOURCE
            || predicate == owl::ANNOTATED_PROPERTY
            || predicate == owl::ANNOTATED_TARGET
            || triple.subject.is_blank()
            || self.predicates().contains(&predicate)
            || (self.reads_open_predicates() && !vocab::is_reserved_predicate(predicate))
    }

    /// Delete every occurrence of `axiom` from the graph.
    ///
    /// Triples that another occurrence of the same kind still needs are
    /// kept. Returns the triples actually removed.
    fn remove(
        &self,
        axiom: &Axiom,
        graph: &mut Graph,
        config: &SyncConfig,
    ) -> Result<Vec<Triple>, SyncError> {
        let doomed = {
            let ctx = ReadContext::new(graph, config);
            removable(&self.read(&ctx)?, axiom, |footprint| footprint.iter())
        };
        Ok(doomed.into_iter().filter(|triple| graph.remove(triple)).collect())
    }
}

// =============================================================================
// SHARED HELPERS
// =============================================================================

/// Build a triple whose predicate is a vocabulary constant.
pub(crate) fn vocab_triple(
    subject: impl Into<Resource>,
    predicate: &str,
    object: impl Into<Term>,
) -> Triple {
    Triple::new(subject, Iri::unchecked(predicate), object)
}

/// Occurrence of an axiom whose main triple `base` is annotated by
/// reification.
pub(crate) fn reified_occurrence(
    ctx: &ReadContext<'_>,
    body: AxiomBody,
    base: Triple,
    mut defining: BTreeSet<Triple>,
) -> Result<Occurrence, SyncError> {
    let resolved =
        annotations::read_reified(ctx.graph(), &base, ctx.config().max_annotation_depth)?;
    defining.insert(base);
    Ok(Occurrence {
        axiom: Axiom::new(body).with_annotations(resolved.annotations),
        footprint: Footprint {
            defining,
            annotations: resolved.triples,
        },
    })
}

/// Occurrence of a bulk statement annotated directly on its node.
pub(crate) fn bulk_occurrence(
    ctx: &ReadContext<'_>,
    body: AxiomBody,
    node: &Resource,
    defining: BTreeSet<Triple>,
) -> Result<Occurrence, SyncError> {
    let resolved =
        annotations::read_direct(ctx.graph(), node, ctx.config().max_annotation_depth)?;
    Ok(Occurrence {
        axiom: Axiom::new(body).with_annotations(resolved.annotations),
        footprint: Footprint {
            defining,
            annotations: resolved.triples,
        },
    })
}

/// Emit `base` and reify it with the axiom's annotations.
pub(crate) fn emit_reified(
    out: &mut Emitter<'_>,
    base: Triple,
    axiom: &Axiom,
) -> Result<(), SyncError> {
    let base = out.emit(base);
    annotations::write_reified(out, &base, &axiom.annotations)
}

/// Turn an `UnsupportedConstruct` raised while reading into a skip.
pub(crate) fn skip_unsupported<T>(
    kind: AxiomKind,
    result: Result<T, SyncError>,
) -> Result<Option<T>, SyncError> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(SyncError::UnsupportedConstruct(reason)) => {
            warn!(kind = %kind, reason = %reason, "skipping unreadable construct");
            Ok(None)
        }
        Err(other) => Err(other),
    }
}

/// Error for an axiom handed to the wrong translator.
pub(crate) fn kind_mismatch(expected: AxiomKind, axiom: &Axiom) -> SyncError {
    SyncError::UnsupportedConstruct(format!(
        "{expected} translator cannot write a {} axiom",
        axiom.kind()
    ))
}

/// Triples of the occurrences of `axiom` that no other occurrence uses.
///
/// `part` picks which footprint triples are candidates: the whole
/// footprint for a removal, only the annotations for a clear.
pub(crate) fn removable<'o, I>(
    occurrences: &'o [Occurrence],
    axiom: &Axiom,
    part: impl Fn(&'o Footprint) -> I,
) -> BTreeSet<Triple>
where
    I: Iterator<Item = &'o Triple>,
{
    let (matching, others): (Vec<&Occurrence>, Vec<&Occurrence>) = occurrences
        .iter()
        .partition(|occurrence| &occurrence.axiom == axiom);
    let shared: BTreeSet<&Triple> = others.iter().flat_map(|o| o.footprint.iter()).collect();
    matching
        .iter()
        .flat_map(|o| part(&o.footprint))
        .filter(|triple| !shared.contains(triple))
        .cloned()
        .collect()
}

/// Sort occurrences so reads are independent of scan order.
pub(crate) fn sorted(mut occurrences: Vec<Occurrence>) -> Vec<Occurrence> {
    occurrences.sort_by(|a, b| {
        a.axiom
            .cmp(&b.axiom)
            .then_with(|| a.footprint.cmp(&b.footprint))
    });
    occurrences
}
