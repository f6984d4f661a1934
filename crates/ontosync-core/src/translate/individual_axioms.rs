//! Assertions about individuals, plus annotation assertions.
//!
//! Object, data and annotation assertions all look like `s p o` with a
//! user predicate. The declared kind of `p` routes each triple to exactly
//! one of them; triples whose predicate the graph never declares are left
//! alone.

use super::expression::{read_class_expr, read_individual, write_class_expr};
use super::nary::{BulkForm, NaryTranslator};
use super::{
    AxiomTranslator, Emitter, Occurrence, ReadContext, emit_reified, kind_mismatch,
    reified_occurrence, skip_unsupported, sorted, vocab_triple,
};
use crate::model::{Axiom, AxiomBody, AxiomKind, EntityKind, Individual};
use crate::vocab::{self, owl, rdf};
use crate::{SyncError, Term, Triple};
use std::collections::BTreeSet;

// =============================================================================
// CLASS ASSERTIONS
// =============================================================================

#[derive(Debug)]
pub struct ClassAssertionTranslator;

/// Whether an `rdf:type` object can name the class of an individual.
fn is_assertable_type(object: &Term) -> bool {
    match object {
        Term::Literal(_) => false,
        Term::Blank(_) => true,
        Term::Iri(iri) => {
            EntityKind::from_type_iri(iri.as_str()).is_none()
                && (!vocab::is_reserved(iri.as_str()) || iri.is(owl::THING) || iri.is(owl::NOTHING))
        }
    }
}

impl ClassAssertionTranslator {
    fn read_one(&self, ctx: &ReadContext<'_>, triple: Triple) -> Result<Occurrence, SyncError> {
        let individual = read_individual(ctx, &Term::from(triple.subject.clone()))?;
        let mut defining = BTreeSet::new();
        let class = read_class_expr(ctx, &triple.object, &mut defining)?;
        reified_occurrence(
            ctx,
            AxiomBody::ClassAssertion { class, individual },
            triple,
            defining,
        )
    }
}

impl AxiomTranslator for ClassAssertionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::ClassAssertion
    }

    fn predicates(&self) -> &'static [&'static str] {
        &[]
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        let mut found = Vec::new();
        for triple in ctx.graph().with_predicate(rdf::TYPE) {
            if !is_assertable_type(&triple.object) || ctx.is_structural(&triple.subject) {
                continue;
            }
            if let Some(occurrence) = skip_unsupported(self.kind(), self.read_one(ctx, triple))? {
                found.push(occurrence);
            }
        }
        Ok(sorted(found))
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let AxiomBody::ClassAssertion { class, individual } = &axiom.body else {
            return Err(kind_mismatch(self.kind(), axiom));
        };
        let class = write_class_expr(out, class)?;
        emit_reified(
            out,
            vocab_triple(individual.to_resource(), rdf::TYPE, class),
            axiom,
        )
    }
}

// =============================================================================
// PROPERTY AND ANNOTATION ASSERTIONS
// =============================================================================

/// `s p o` where `p` is a declared object, data or annotation property.
#[derive(Debug)]
pub struct AssertionTranslator {
    kind: AxiomKind,
    property_kind: EntityKind,
}

pub(crate) static OBJECT_PROPERTY_ASSERTION: AssertionTranslator = AssertionTranslator {
    kind: AxiomKind::ObjectPropertyAssertion,
    property_kind: EntityKind::ObjectProperty,
};

pub(crate) static DATA_PROPERTY_ASSERTION: AssertionTranslator = AssertionTranslator {
    kind: AxiomKind::DataPropertyAssertion,
    property_kind: EntityKind::DataProperty,
};

pub(crate) static ANNOTATION_ASSERTION: AssertionTranslator = AssertionTranslator {
    kind: AxiomKind::AnnotationAssertion,
    property_kind: EntityKind::AnnotationProperty,
};

impl AssertionTranslator {
    fn read_one(&self, ctx: &ReadContext<'_>, triple: Triple) -> Result<Occurrence, SyncError> {
        let property = triple.predicate.clone();
        let body = match self.property_kind {
            EntityKind::ObjectProperty => {
                let structural_object = triple.object.is_blank()
                    && triple
                        .object
                        .as_resource()
                        .is_some_and(|node| ctx.is_structural(&node));
                if structural_object {
                    return Err(SyncError::UnsupportedConstruct(format!(
                        "object of {property} is graph structure"
                    )));
                }
                AxiomBody::ObjectPropertyAssertion {
                    property,
                    subject: read_individual(ctx, &Term::from(triple.subject.clone()))?,
                    object: read_individual(ctx, &triple.object)?,
                }
            }
            EntityKind::DataProperty => {
                let Some(value) = triple.object.as_literal().cloned() else {
                    return Err(SyncError::UnsupportedConstruct(format!(
                        "data property {property} with non-literal value {}",
                        triple.object
                    )));
                };
                AxiomBody::DataPropertyAssertion {
                    property,
                    subject: read_individual(ctx, &Term::from(triple.subject.clone()))?,
                    value,
                }
            }
            _ => AxiomBody::AnnotationAssertion {
                property,
                subject: triple.subject.clone(),
                value: triple.object.clone().into(),
            },
        };
        reified_occurrence(ctx, body, triple, BTreeSet::new())
    }

    fn main_triple(&self, axiom: &Axiom) -> Result<Triple, SyncError> {
        let (property, triple) = match (&axiom.body, self.property_kind) {
            (
                AxiomBody::ObjectPropertyAssertion {
                    property,
                    subject,
                    object,
                },
                EntityKind::ObjectProperty,
            ) => (
                property,
                Triple::new(subject.to_resource(), property.clone(), object.to_term()),
            ),
            (
                AxiomBody::DataPropertyAssertion {
                    property,
                    subject,
                    value,
                },
                EntityKind::DataProperty,
            ) => (
                property,
                Triple::new(subject.to_resource(), property.clone(), value.clone()),
            ),
            (
                AxiomBody::AnnotationAssertion {
                    property,
                    subject,
                    value,
                },
                EntityKind::AnnotationProperty,
            ) => (
                property,
                Triple::new(subject.clone(), property.clone(), value.to_term()),
            ),
            _ => return Err(kind_mismatch(self.kind, axiom)),
        };
        if vocab::is_reserved_predicate(property.as_str()) {
            return Err(SyncError::UnsupportedConstruct(format!(
                "{property} is reserved vocabulary, not a {}",
                self.property_kind
            )));
        }
        Ok(triple)
    }
}

impl AxiomTranslator for AssertionTranslator {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn predicates(&self) -> &'static [&'static str] {
        &[]
    }

    fn reads_open_predicates(&self) -> bool {
        true
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        let mut found = Vec::new();
        for triple in ctx.graph().triples() {
            if vocab::is_reserved_predicate(triple.predicate.as_str())
                || ctx.is_structural(&triple.subject)
            {
                continue;
            }
            if ctx.property_kind(&triple.predicate)? != Some(self.property_kind) {
                continue;
            }
            if let Some(occurrence) = skip_unsupported(self.kind, self.read_one(ctx, triple))? {
                found.push(occurrence);
            }
        }
        Ok(sorted(found))
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let base = self.main_triple(axiom)?;
        emit_reified(out, base, axiom)
    }
}

// =============================================================================
// SAME / DIFFERENT INDIVIDUALS
// =============================================================================

fn same_individuals(body: &AxiomBody) -> Option<&BTreeSet<Individual>> {
    match body {
        AxiomBody::SameIndividual(members) => Some(members),
        _ => None,
    }
}

fn different_individuals(body: &AxiomBody) -> Option<&BTreeSet<Individual>> {
    match body {
        AxiomBody::DifferentIndividuals(members) => Some(members),
        _ => None,
    }
}

/// `owl:sameAs`; no bulk form.
pub(crate) static SAME_INDIVIDUAL: NaryTranslator<Individual> = NaryTranslator {
    kind: AxiomKind::SameIndividual,
    pairwise: owl::SAME_AS,
    bulk: None,
    predicates: &[owl::SAME_AS],
    extract: same_individuals,
    build: AxiomBody::SameIndividual,
};

/// `owl:differentFrom` or `owl:AllDifferent` with `owl:members`
/// (`owl:distinctMembers` is accepted on read).
pub(crate) static DIFFERENT_INDIVIDUALS: NaryTranslator<Individual> = NaryTranslator {
    kind: AxiomKind::DifferentIndividuals,
    pairwise: owl::DIFFERENT_FROM,
    bulk: Some(BulkForm {
        marker: owl::ALL_DIFFERENT,
        members: owl::MEMBERS,
        legacy: Some(owl::DISTINCT_MEMBERS),
    }),
    predicates: &[owl::DIFFERENT_FROM, owl::MEMBERS, owl::DISTINCT_MEMBERS],
    extract: different_individuals,
    build: AxiomBody::DifferentIndividuals,
};
