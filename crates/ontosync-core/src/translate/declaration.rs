//! `Declaration(Kind(iri))` as `iri rdf:type <kind type>`.

use super::{
    AxiomTranslator, Emitter, Occurrence, ReadContext, emit_reified, kind_mismatch,
    reified_occurrence, sorted, vocab_triple,
};
use crate::model::{Axiom, AxiomBody, AxiomKind, Entity, EntityKind};
use crate::vocab::rdf;
use crate::{Iri, Resource, SyncError, Term};
use std::collections::BTreeSet;

#[derive(Debug)]
pub struct DeclarationTranslator;

impl AxiomTranslator for DeclarationTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::Declaration
    }

    fn predicates(&self) -> &'static [&'static str] {
        &[]
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        let mut found = Vec::new();
        for triple in ctx.graph().with_predicate(rdf::TYPE) {
            let (Resource::Iri(subject), Term::Iri(type_iri)) = (&triple.subject, &triple.object)
            else {
                continue;
            };
            let Some(kind) = EntityKind::from_type_iri(type_iri.as_str()) else {
                continue;
            };
            let body = AxiomBody::Declaration(Entity::new(kind, subject.clone()));
            found.push(reified_occurrence(ctx, body, triple, BTreeSet::new())?);
        }
        Ok(sorted(found))
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let AxiomBody::Declaration(entity) = &axiom.body else {
            return Err(kind_mismatch(self.kind(), axiom));
        };
        emit_reified(out, declaration_triple(entity), axiom)
    }
}

/// The triple that declares `entity`.
pub(crate) fn declaration_triple(entity: &Entity) -> crate::Triple {
    vocab_triple(
        entity.iri.clone(),
        rdf::TYPE,
        Iri::unchecked(entity.kind.type_iri()),
    )
}
