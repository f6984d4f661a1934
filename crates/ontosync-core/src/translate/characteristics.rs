//! Property characteristics, written as `p rdf:type owl:XProperty`.
//!
//! `owl:FunctionalProperty` is shared between object and data properties;
//! the declared kind of `p` decides which of the two kinds reads it.

use super::{
    AxiomTranslator, Emitter, Occurrence, ReadContext, emit_reified, kind_mismatch,
    reified_occurrence, skip_unsupported, sorted, vocab_triple,
};
use crate::model::{Axiom, AxiomBody, AxiomKind, Characteristic};
use crate::vocab::rdf;
use crate::{Iri, Resource, SyncError, Term, Triple};
use std::collections::BTreeSet;
use tracing::warn;

#[derive(Debug)]
pub struct CharacteristicTranslator(pub Characteristic);

pub(crate) static FUNCTIONAL: CharacteristicTranslator =
    CharacteristicTranslator(Characteristic::Functional);
pub(crate) static INVERSE_FUNCTIONAL: CharacteristicTranslator =
    CharacteristicTranslator(Characteristic::InverseFunctional);
pub(crate) static TRANSITIVE: CharacteristicTranslator =
    CharacteristicTranslator(Characteristic::Transitive);
pub(crate) static SYMMETRIC: CharacteristicTranslator =
    CharacteristicTranslator(Characteristic::Symmetric);
pub(crate) static ASYMMETRIC: CharacteristicTranslator =
    CharacteristicTranslator(Characteristic::Asymmetric);
pub(crate) static REFLEXIVE: CharacteristicTranslator =
    CharacteristicTranslator(Characteristic::Reflexive);
pub(crate) static IRREFLEXIVE: CharacteristicTranslator =
    CharacteristicTranslator(Characteristic::Irreflexive);
pub(crate) static FUNCTIONAL_DATA: CharacteristicTranslator =
    CharacteristicTranslator(Characteristic::FunctionalData);

impl CharacteristicTranslator {
    fn read_one(
        &self,
        ctx: &ReadContext<'_>,
        property: Iri,
        base: Triple,
    ) -> Result<Option<Occurrence>, SyncError> {
        if ctx.property_kind_or_object(&property)? != self.0.property_kind() {
            return Ok(None);
        }
        let body = AxiomBody::Characteristic {
            characteristic: self.0,
            property,
        };
        reified_occurrence(ctx, body, base, BTreeSet::new()).map(Some)
    }
}

impl AxiomTranslator for CharacteristicTranslator {
    fn kind(&self) -> AxiomKind {
        self.0.kind()
    }

    fn predicates(&self) -> &'static [&'static str] {
        &[]
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        let type_iri = Term::Iri(Iri::unchecked(self.0.type_iri()));
        let mut found = Vec::new();
        for subject in ctx.graph().subjects(rdf::TYPE, &type_iri) {
            let Resource::Iri(property) = &subject else {
                warn!(
                    kind = %self.kind(),
                    subject = %subject,
                    "skipping characteristic of anonymous property"
                );
                continue;
            };
            let base = vocab_triple(subject.clone(), rdf::TYPE, type_iri.clone());
            let result = self.read_one(ctx, property.clone(), base);
            if let Some(Some(occurrence)) = skip_unsupported(self.kind(), result)? {
                found.push(occurrence);
            }
        }
        Ok(sorted(found))
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let AxiomBody::Characteristic {
            characteristic,
            property,
        } = &axiom.body
        else {
            return Err(kind_mismatch(self.kind(), axiom));
        };
        if *characteristic != self.0 {
            return Err(kind_mismatch(self.kind(), axiom));
        }
        emit_reified(
            out,
            vocab_triple(
                property.clone(),
                rdf::TYPE,
                Iri::unchecked(characteristic.type_iri()),
            ),
            axiom,
        )
    }
}
