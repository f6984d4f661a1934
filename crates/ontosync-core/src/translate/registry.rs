//! Kind → translator lookup.
//!
//! The set of kinds is closed, so the registry is a `match` over static
//! translators rather than a runtime map.

use super::AxiomTranslator;
use super::characteristics::{
    ASYMMETRIC, FUNCTIONAL, FUNCTIONAL_DATA, INVERSE_FUNCTIONAL, IRREFLEXIVE, REFLEXIVE,
    SYMMETRIC, TRANSITIVE,
};
use super::class_axioms::{
    DISJOINT_CLASSES, DisjointUnionTranslator, EQUIVALENT_CLASSES, SubClassOfTranslator,
};
use super::declaration::DeclarationTranslator;
use super::individual_axioms::{
    ANNOTATION_ASSERTION, ClassAssertionTranslator, DATA_PROPERTY_ASSERTION, DIFFERENT_INDIVIDUALS,
    OBJECT_PROPERTY_ASSERTION, SAME_INDIVIDUAL,
};
use super::property_axioms::{
    DATA_PROPERTY_DOMAIN, DISJOINT_OBJECT_PROPERTIES, DataPropertyRangeTranslator,
    EQUIVALENT_OBJECT_PROPERTIES, InverseObjectPropertiesTranslator, OBJECT_PROPERTY_DOMAIN,
    ObjectPropertyRangeTranslator, SUB_DATA_PROPERTY, SUB_OBJECT_PROPERTY,
    SubPropertyChainTranslator,
};
use crate::model::AxiomKind;

/// The translator responsible for `kind`.
#[must_use]
pub fn translator(kind: AxiomKind) -> &'static dyn AxiomTranslator {
    match kind {
        AxiomKind::Declaration => &DeclarationTranslator,
        AxiomKind::SubClassOf => &SubClassOfTranslator,
        AxiomKind::EquivalentClasses => &EQUIVALENT_CLASSES,
        AxiomKind::DisjointClasses => &DISJOINT_CLASSES,
        AxiomKind::DisjointUnion => &DisjointUnionTranslator,
        AxiomKind::SubObjectPropertyOf => &SUB_OBJECT_PROPERTY,
        AxiomKind::SubDataPropertyOf => &SUB_DATA_PROPERTY,
        AxiomKind::EquivalentObjectProperties => &EQUIVALENT_OBJECT_PROPERTIES,
        AxiomKind::DisjointObjectProperties => &DISJOINT_OBJECT_PROPERTIES,
        AxiomKind::InverseObjectProperties => &InverseObjectPropertiesTranslator,
        AxiomKind::SubPropertyChainOf => &SubPropertyChainTranslator,
        AxiomKind::FunctionalObjectProperty => &FUNCTIONAL,
        AxiomKind::InverseFunctionalObjectProperty => &INVERSE_FUNCTIONAL,
        AxiomKind::TransitiveObjectProperty => &TRANSITIVE,
        AxiomKind::SymmetricObjectProperty => &SYMMETRIC,
        AxiomKind::AsymmetricObjectProperty => &ASYMMETRIC,
        AxiomKind::ReflexiveObjectProperty => &REFLEXIVE,
        AxiomKind::IrreflexiveObjectProperty => &IRREFLEXIVE,
        AxiomKind::FunctionalDataProperty => &FUNCTIONAL_DATA,
        AxiomKind::ObjectPropertyDomain => &OBJECT_PROPERTY_DOMAIN,
        AxiomKind::ObjectPropertyRange => &ObjectPropertyRangeTranslator,
        AxiomKind::DataPropertyDomain => &DATA_PROPERTY_DOMAIN,
        AxiomKind::DataPropertyRange => &DataPropertyRangeTranslator,
        AxiomKind::ClassAssertion => &ClassAssertionTranslator,
        AxiomKind::ObjectPropertyAssertion => &OBJECT_PROPERTY_ASSERTION,
        AxiomKind::DataPropertyAssertion => &DATA_PROPERTY_ASSERTION,
        AxiomKind::SameIndividual => &SAME_INDIVIDUAL,
        AxiomKind::DifferentIndividuals => &DIFFERENT_INDIVIDUALS,
        AxiomKind::AnnotationAssertion => &ANNOTATION_ASSERTION,
    }
}

/// Every translator, in [`AxiomKind::ALL`] order.
pub fn all() -> impl Iterator<Item = &'static dyn AxiomTranslator> {
    AxiomKind::ALL.into_iter().map(translator)
}
