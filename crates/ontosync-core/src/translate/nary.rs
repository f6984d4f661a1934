//! Symmetric n-ary axioms: pairwise binary triples and bulk list nodes.
//!
//! Two members are written as one binary triple. More members are written
//! as a single bulk node (`owl:AllDisjointClasses` and friends) whose
//! member list is an RDF list, when the kind has a bulk form at all.

use super::expression::{read_class_expr, read_individual, write_class_expr};
use super::list::{walk_list, write_list};
use super::{
    AxiomTranslator, Emitter, Occurrence, ReadContext, bulk_occurrence, emit_reified,
    kind_mismatch, reified_occurrence, skip_unsupported, sorted, vocab_triple,
};
use crate::annotations;
use crate::model::{Axiom, AxiomBody, AxiomKind, ClassExpr, EntityKind, Individual};
use crate::vocab::rdf;
use crate::{Iri, Resource, SyncError, Term, Triple};
use std::collections::BTreeSet;

/// A component of a symmetric n-ary axiom.
pub(crate) trait Member: Clone + Ord + Sized {
    fn read(
        ctx: &ReadContext<'_>,
        term: &Term,
        triples: &mut BTreeSet<Triple>,
    ) -> Result<Self, SyncError>;

    fn write(out: &mut Emitter<'_>, member: &Self) -> Result<Resource, SyncError>;
}

impl Member for ClassExpr {
    fn read(
        ctx: &ReadContext<'_>,
        term: &Term,
        triples: &mut BTreeSet<Triple>,
    ) -> Result<Self, SyncError> {
        read_class_expr(ctx, term, triples)
    }

    fn write(out: &mut Emitter<'_>, member: &Self) -> Result<Resource, SyncError> {
        write_class_expr(out, member)
    }
}

/// Object properties.
impl Member for Iri {
    fn read(
        ctx: &ReadContext<'_>,
        term: &Term,
        _triples: &mut BTreeSet<Triple>,
    ) -> Result<Self, SyncError> {
        let Some(iri) = term.as_iri() else {
            return Err(SyncError::UnsupportedConstruct(format!(
                "anonymous property expression {term}"
            )));
        };
        let kind = ctx.property_kind_or_object(iri)?;
        if kind != EntityKind::ObjectProperty {
            return Err(SyncError::UnsupportedConstruct(format!(
                "{iri} is a {kind}, not an object property"
            )));
        }
        Ok(iri.clone())
    }

    fn write(_out: &mut Emitter<'_>, member: &Self) -> Result<Resource, SyncError> {
        Ok(Resource::Iri(member.clone()))
    }
}

impl Member for Individual {
    fn read(
        ctx: &ReadContext<'_>,
        term: &Term,
        _triples: &mut BTreeSet<Triple>,
    ) -> Result<Self, SyncError> {
        read_individual(ctx, term)
    }

    fn write(_out: &mut Emitter<'_>, member: &Self) -> Result<Resource, SyncError> {
        Ok(member.to_resource())
    }
}

/// The bulk encoding of an n-ary kind.
#[derive(Debug)]
pub(crate) struct BulkForm {
    /// `rdf:type` of the bulk node.
    pub marker: &'static str,
    /// Member-list predicate used when writing.
    pub members: &'static str,
    /// Older member-list predicate still accepted on read.
    pub legacy: Option<&'static str>,
}

/// Translator for one symmetric n-ary kind.
pub(crate) struct NaryTranslator<M: 'static> {
    pub kind: AxiomKind,
    pub pairwise: &'static str,
    pub bulk: Option<BulkForm>,
    pub predicates: &'static [&'static str],
    pub extract: fn(&AxiomBody) -> Option<&BTreeSet<M>>,
    pub build: fn(BTreeSet<M>) -> AxiomBody,
}

impl<M: Member> NaryTranslator<M> {
    fn read_pair(&self, ctx: &ReadContext<'_>, triple: Triple) -> Result<Occurrence, SyncError> {
        let mut defining = BTreeSet::new();
        let first = M::read(ctx, &Term::from(triple.subject.clone()), &mut defining)?;
        let second = M::read(ctx, &triple.object, &mut defining)?;
        let body = (self.build)(BTreeSet::from([first, second]));
        reified_occurrence(ctx, body, triple, defining)
    }

    fn read_bulk(
        &self,
        ctx: &ReadContext<'_>,
        bulk: &BulkForm,
        node: &Resource,
    ) -> Result<Occurrence, SyncError> {
        let graph = ctx.graph();
        let heads: Vec<(&'static str, Term)> = std::iter::once(bulk.members)
            .chain(bulk.legacy)
            .flat_map(|predicate| {
                graph
                    .objects(node, predicate)
                    .into_iter()
                    .map(move |head| (predicate, head))
            })
            .collect();
        let (predicate, head) = match heads.as_slice() {
            [(predicate, head)] => (*predicate, head.clone()),
            [] => {
                return Err(SyncError::MalformedGraph(format!(
                    "{} node {node} has no member list",
                    self.kind
                )));
            }
            _ => {
                return Err(SyncError::MalformedGraph(format!(
                    "{} node {node} has {} member lists",
                    self.kind,
                    heads.len()
                )));
            }
        };

        let mut defining = BTreeSet::new();
        let items = walk_list(graph, &head, ctx.config().max_list_length, &mut defining)?;
        let mut members = BTreeSet::new();
        for item in &items {
            members.insert(M::read(ctx, item, &mut defining)?);
        }
        defining.insert(vocab_triple(
            node.clone(),
            rdf::TYPE,
            Iri::unchecked(bulk.marker),
        ));
        defining.insert(vocab_triple(node.clone(), predicate, head));
        bulk_occurrence(ctx, (self.build)(members), node, defining)
    }
}

impl<M: Member> AxiomTranslator for NaryTranslator<M> {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn predicates(&self) -> &'static [&'static str] {
        self.predicates
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        let mut found = Vec::new();
        for triple in ctx.graph().with_predicate(self.pairwise) {
            if let Some(occurrence) = skip_unsupported(self.kind, self.read_pair(ctx, triple))? {
                found.push(occurrence);
            }
        }
        if let Some(bulk) = &self.bulk {
            for node in ctx.graph().instances_of(bulk.marker) {
                let result = self.read_bulk(ctx, bulk, &node);
                if let Some(occurrence) = skip_unsupported(self.kind, result)? {
                    found.push(occurrence);
                }
            }
        }
        Ok(sorted(found))
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let members = (self.extract)(&axiom.body).ok_or_else(|| kind_mismatch(self.kind, axiom))?;
        let mut iter = members.iter();
        match (members.len(), iter.next(), iter.next()) {
            (2, Some(first), Some(second)) => {
                let subject = M::write(out, first)?;
                let object = M::write(out, second)?;
                emit_reified(out, vocab_triple(subject, self.pairwise, object), axiom)
            }
            (n, ..) if n < 2 => Err(SyncError::UnsupportedConstruct(format!(
                "{} needs at least two members, got {n}",
                self.kind
            ))),
            (n, ..) => {
                let Some(bulk) = &self.bulk else {
                    return Err(SyncError::UnsupportedConstruct(format!(
                        "{} with {n} members has no canonical encoding",
                        self.kind
                    )));
                };
                let items = members
                    .iter()
                    .map(|member| M::write(out, member).map(Term::from))
                    .collect::<Result<Vec<_>, _>>()?;
                let node = Resource::Blank(out.fresh());
                out.emit(vocab_triple(
                    node.clone(),
                    rdf::TYPE,
                    Iri::unchecked(bulk.marker),
                ));
                let head = write_list(out, &items);
                out.emit(vocab_triple(node.clone(), bulk.members, head));
                annotations::write_direct(out, &node, &axiom.annotations)
            }
        }
    }
}
