//! Axioms: a closed set of kinds, each with a typed body.

use super::{Annotation, ClassExpr, Entity, EntityKind, Individual};
use crate::vocab::owl;
use crate::{Iri, Literal, Resource};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

// =============================================================================
// AXIOM KINDS
// =============================================================================

/// The supported axiom types. Each kind has exactly one translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AxiomKind {
    Declaration,
    SubClassOf,
    EquivalentClasses,
    DisjointClasses,
    DisjointUnion,
    SubObjectPropertyOf,
    SubDataPropertyOf,
    EquivalentObjectProperties,
    DisjointObjectProperties,
    InverseObjectProperties,
    SubPropertyChainOf,
    FunctionalObjectProperty,
    InverseFunctionalObjectProperty,
    TransitiveObjectProperty,
    SymmetricObjectProperty,
    AsymmetricObjectProperty,
    ReflexiveObjectProperty,
    IrreflexiveObjectProperty,
    FunctionalDataProperty,
    ObjectPropertyDomain,
    ObjectPropertyRange,
    DataPropertyDomain,
    DataPropertyRange,
    ClassAssertion,
    ObjectPropertyAssertion,
    DataPropertyAssertion,
    SameIndividual,
    DifferentIndividuals,
    AnnotationAssertion,
}

impl AxiomKind {
    pub const ALL: [Self; 29] = [
        Self::Declaration,
        Self::SubClassOf,
        Self::EquivalentClasses,
        Self::DisjointClasses,
        Self::DisjointUnion,
        Self::SubObjectPropertyOf,
        Self::SubDataPropertyOf,
        Self::EquivalentObjectProperties,
        Self::DisjointObjectProperties,
        Self::InverseObjectProperties,
        Self::SubPropertyChainOf,
        Self::FunctionalObjectProperty,
        Self::InverseFunctionalObjectProperty,
        Self::TransitiveObjectProperty,
        Self::SymmetricObjectProperty,
        Self::AsymmetricObjectProperty,
        Self::ReflexiveObjectProperty,
        Self::IrreflexiveObjectProperty,
        Self::FunctionalDataProperty,
        Self::ObjectPropertyDomain,
        Self::ObjectPropertyRange,
        Self::DataPropertyDomain,
        Self::DataPropertyRange,
        Self::ClassAssertion,
        Self::ObjectPropertyAssertion,
        Self::DataPropertyAssertion,
        Self::SameIndividual,
        Self::DifferentIndividuals,
        Self::AnnotationAssertion,
    ];

    /// Parse a kind from its name, e.g. `"SubClassOf"`.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Declaration => "Declaration",
            Self::SubClassOf => "SubClassOf",
            Self::EquivalentClasses => "EquivalentClasses",
            Self::DisjointClasses => "DisjointClasses",
            Self::DisjointUnion => "DisjointUnion",
            Self::SubObjectPropertyOf => "SubObjectPropertyOf",
            Self::SubDataPropertyOf => "SubDataPropertyOf",
            Self::EquivalentObjectProperties => "EquivalentObjectProperties",
            Self::DisjointObjectProperties => "DisjointObjectProperties",
            Self::InverseObjectProperties => "InverseObjectProperties",
            Self::SubPropertyChainOf => "SubPropertyChainOf",
            Self::FunctionalObjectProperty => "FunctionalObjectProperty",
            Self::InverseFunctionalObjectProperty => "InverseFunctionalObjectProperty",
            Self::TransitiveObjectProperty => "TransitiveObjectProperty",
            Self::SymmetricObjectProperty => "SymmetricObjectProperty",
            Self::AsymmetricObjectProperty => "AsymmetricObjectProperty",
            Self::ReflexiveObjectProperty => "ReflexiveObjectProperty",
            Self::IrreflexiveObjectProperty => "IrreflexiveObjectProperty",
            Self::FunctionalDataProperty => "FunctionalDataProperty",
            Self::ObjectPropertyDomain => "ObjectPropertyDomain",
            Self::ObjectPropertyRange => "ObjectPropertyRange",
            Self::DataPropertyDomain => "DataPropertyDomain",
            Self::DataPropertyRange => "DataPropertyRange",
            Self::ClassAssertion => "ClassAssertion",
            Self::ObjectPropertyAssertion => "ObjectPropertyAssertion",
            Self::DataPropertyAssertion => "DataPropertyAssertion",
            Self::SameIndividual => "SameIndividual",
            Self::DifferentIndividuals => "DifferentIndividuals",
            Self::AnnotationAssertion => "AnnotationAssertion",
        }
    }
}

impl fmt::Display for AxiomKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// =============================================================================
// PROPERTY CHARACTERISTICS
// =============================================================================

/// A characteristic asserted by typing a property.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Characteristic {
    Functional,
    InverseFunctional,
    Transitive,
    Symmetric,
    Asymmetric,
    Reflexive,
    Irreflexive,
    FunctionalData,
}

impl Characteristic {
    pub const ALL: [Self; 8] = [
        Self::Functional,
        Self::InverseFunctional,
        Self::Transitive,
        Self::Symmetric,
        Self::Asymmetric,
        Self::Reflexive,
        Self::Irreflexive,
        Self::FunctionalData,
    ];

    #[must_use]
    pub fn type_iri(self) -> &'static str {
        match self {
            Self::Functional | Self::FunctionalData => owl::FUNCTIONAL_PROPERTY,
            Self::InverseFunctional => owl::INVERSE_FUNCTIONAL_PROPERTY,
            Self::Transitive => owl::TRANSITIVE_PROPERTY,
            Self::Symmetric => owl::SYMMETRIC_PROPERTY,
            Self::Asymmetric => owl::ASYMMETRIC_PROPERTY,
            Self::Reflexive => owl::REFLEXIVE_PROPERTY,
            Self::Irreflexive => owl::IRREFLEXIVE_PROPERTY,
        }
    }

    #[must_use]
    pub fn kind(self) -> AxiomKind {
        match self {
            Self::Functional => AxiomKind::FunctionalObjectProperty,
            Self::InverseFunctional => AxiomKind::InverseFunctionalObjectProperty,
            Self::Transitive => AxiomKind::TransitiveObjectProperty,
            Self::Symmetric => AxiomKind::SymmetricObjectProperty,
            Self::Asymmetric => AxiomKind::AsymmetricObjectProperty,
            Self::Reflexive => AxiomKind::ReflexiveObjectProperty,
            Self::Irreflexive => AxiomKind::IrreflexiveObjectProperty,
            Self::FunctionalData => AxiomKind::FunctionalDataProperty,
        }
    }

    /// The kind of property this characteristic applies to.
    #[must_use]
    pub fn property_kind(self) -> EntityKind {
        match self {
            Self::FunctionalData => EntityKind::DataProperty,
            _ => EntityKind::ObjectProperty,
        }
    }
}

// =============================================================================
// AXIOM BODIES
// =============================================================================

/// The logical content of an axiom.
///
/// Symmetric n-ary components are sets; ordered components (sub/super
/// pairs, property chains) keep their order.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AxiomBody {
    Declaration(Entity),
    SubClassOf {
        sub: ClassExpr,
        sup: ClassExpr,
    },
    EquivalentClasses(BTreeSet<ClassExpr>),
    DisjointClasses(BTreeSet<ClassExpr>),
    DisjointUnion {
        class: Iri,
        members: BTreeSet<ClassExpr>,
    },
    SubObjectPropertyOf {
        sub: Iri,
        sup: Iri,
    },
    SubDataPropertyOf {
        sub: Iri,
        sup: Iri,
    },
    EquivalentObjectProperties(BTreeSet<Iri>),
    DisjointObjectProperties(BTreeSet<Iri>),
    InverseObjectProperties {
        first: Iri,
        second: Iri,
    },
    SubPropertyChainOf {
        chain: Vec<Iri>,
        sup: Iri,
    },
    Characteristic {
        characteristic: Characteristic,
        property: Iri,
    },
    ObjectPropertyDomain {
        property: Iri,
        domain: ClassExpr,
    },
    ObjectPropertyRange {
        property: Iri,
        range: ClassExpr,
    },
    DataPropertyDomain {
        property: Iri,
        domain: ClassExpr,
    },
    DataPropertyRange {
        property: Iri,
        datatype: Iri,
    },
    ClassAssertion {
        class: ClassExpr,
        individual: Individual,
    },
    ObjectPropertyAssertion {
        property: Iri,
        subject: Individual,
        object: Individual,
    },
    DataPropertyAssertion {
        property: Iri,
        subject: Individual,
        value: Literal,
    },
    SameIndividual(BTreeSet<Individual>),
    DifferentIndividuals(BTreeSet<Individual>),
    AnnotationAssertion {
        property: Iri,
        subject: Resource,
        value: super::AnnotationValue,
    },
}

impl AxiomBody {
    #[must_use]
    pub fn kind(&self) -> AxiomKind {
        match self {
            Self::Declaration(_) => AxiomKind::Declaration,
            Self::SubClassOf { .. } => AxiomKind::SubClassOf,
            Self::EquivalentClasses(_) => AxiomKind::EquivalentClasses,
            Self::DisjointClasses(_) => AxiomKind::DisjointClasses,
            Self::DisjointUnion { .. } => AxiomKind::DisjointUnion,
            Self::SubObjectPropertyOf { .. } => AxiomKind::SubObjectPropertyOf,
            Self::SubDataPropertyOf { .. } => AxiomKind::SubDataPropertyOf,
            Self::EquivalentObjectProperties(_) => AxiomKind::EquivalentObjectProperties,
            Self::DisjointObjectProperties(_) => AxiomKind::DisjointObjectProperties,
            Self::InverseObjectProperties { .. } => AxiomKind::InverseObjectProperties,
            Self::SubPropertyChainOf { .. } => AxiomKind::SubPropertyChainOf,
            Self::Characteristic { characteristic, .. } => characteristic.kind(),
            Self::ObjectPropertyDomain { .. } => AxiomKind::ObjectPropertyDomain,
            Self::ObjectPropertyRange { .. } => AxiomKind::ObjectPropertyRange,
            Self::DataPropertyDomain { .. } => AxiomKind::DataPropertyDomain,
            Self::DataPropertyRange { .. } => AxiomKind::DataPropertyRange,
            Self::ClassAssertion { .. } => AxiomKind::ClassAssertion,
            Self::ObjectPropertyAssertion { .. } => AxiomKind::ObjectPropertyAssertion,
            Self::DataPropertyAssertion { .. } => AxiomKind::DataPropertyAssertion,
            Self::SameIndividual(_) => AxiomKind::SameIndividual,
            Self::DifferentIndividuals(_) => AxiomKind::DifferentIndividuals,
            Self::AnnotationAssertion { .. } => AxiomKind::AnnotationAssertion,
        }
    }
}

// =============================================================================
// AXIOM
// =============================================================================

/// An immutable axiom value: a typed body plus a set of annotations.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Axiom {
    pub body: AxiomBody,
    pub annotations: BTreeSet<Annotation>,
}

impl Axiom {
    /// Create an unannotated axiom.
    #[must_use]
    pub fn new(body: AxiomBody) -> Self {
        Self {
            body,
            annotations: BTreeSet::new(),
        }
    }

    /// Attach an annotation.
    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.insert(annotation);
        self
    }

    #[must_use]
    pub fn with_annotations(mut self, annotations: BTreeSet<Annotation>) -> Self {
        self.annotations = annotations;
        self
    }

    #[must_use]
    pub fn kind(&self) -> AxiomKind {
        self.body.kind()
    }

    /// The same axiom with no annotations.
    #[must_use]
    pub fn without_annotations(&self) -> Self {
        Self::new(self.body.clone())
    }

    #[must_use]
    pub fn is_annotated(&self) -> bool {
        !self.annotations.is_empty()
    }

    /// Every entity the axiom body mentions, with the kind its position
    /// requires. Annotation values and subjects are not entities.
    #[must_use]
    pub fn signature(&self) -> BTreeSet<Entity> {
        let mut out = BTreeSet::new();
        let op = |iri: &Iri| Entity::object_property(iri.clone());
        let dp = |iri: &Iri| Entity::data_property(iri.clone());
        let named = |ind: &Individual| ind.as_iri().map(|iri| Entity::individual(iri.clone()));

        match &self.body {
            AxiomBody::Declaration(entity) => {
                out.insert(entity.clone());
            }
            AxiomBody::SubClassOf { sub, sup } => {
                sub.collect_signature(&mut out);
                sup.collect_signature(&mut out);
            }
            AxiomBody::EquivalentClasses(exprs) | AxiomBody::DisjointClasses(exprs) => {
                for expr in exprs {
                    expr.collect_signature(&mut out);
                }
            }
            AxiomBody::DisjointUnion { class, members } => {
                out.insert(Entity::class(class.clone()));
                for expr in members {
                    expr.collect_signature(&mut out);
                }
            }
            AxiomBody::SubObjectPropertyOf { sub, sup } => {
                out.insert(op(sub));
                out.insert(op(sup));
            }
            AxiomBody::SubDataPropertyOf { sub, sup } => {
                out.insert(dp(sub));
                out.insert(dp(sup));
            }
            AxiomBody::EquivalentObjectProperties(props)
            | AxiomBody::DisjointObjectProperties(props) => {
                out.extend(props.iter().map(op));
            }
            AxiomBody::InverseObjectProperties { first, second } => {
                out.insert(op(first));
                out.insert(op(second));
            }
            AxiomBody::SubPropertyChainOf { chain, sup } => {
                out.extend(chain.iter().map(op));
                out.insert(op(sup));
            }
            AxiomBody::Characteristic {
                characteristic,
                property,
            } => {
                out.insert(Entity::new(characteristic.property_kind(), property.clone()));
            }
            AxiomBody::ObjectPropertyDomain { property, domain } => {
                out.insert(op(property));
                domain.collect_signature(&mut out);
            }
            AxiomBody::ObjectPropertyRange { property, range } => {
                out.insert(op(property));
                range.collect_signature(&mut out);
            }
            AxiomBody::DataPropertyDomain { property, domain } => {
                out.insert(dp(property));
                domain.collect_signature(&mut out);
            }
            AxiomBody::DataPropertyRange { property, datatype } => {
                out.insert(dp(property));
                out.insert(Entity::new(EntityKind::Datatype, datatype.clone()));
            }
            AxiomBody::ClassAssertion { class, individual } => {
                class.collect_signature(&mut out);
                out.extend(named(individual));
            }
            AxiomBody::ObjectPropertyAssertion {
                property,
                subject,
                object,
            } => {
                out.insert(op(property));
                out.extend(named(subject));
                out.extend(named(object));
            }
            AxiomBody::DataPropertyAssertion {
                property, subject, ..
            } => {
                out.insert(dp(property));
                out.extend(named(subject));
            }
            AxiomBody::SameIndividual(members) | AxiomBody::DifferentIndividuals(members) => {
                out.extend(members.iter().filter_map(named));
            }
            AxiomBody::AnnotationAssertion { property, .. } => {
                out.insert(Entity::annotation_property(property.clone()));
            }
        }
        out
    }
}

impl From<AxiomBody> for Axiom {
    fn from(body: AxiomBody) -> Self {
        Self::new(body)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn iri(local: &str) -> Iri {
        Iri::new(format!("http://example.org/{local}")).expect("iri")
    }

    #[test]
    fn kind_names_roundtrip() {
        for kind in AxiomKind::ALL {
            assert_eq!(AxiomKind::from_name(kind.name()), Some(kind));
        }
        assert_eq!(AxiomKind::from_name("Nonsense"), None);
    }

    #[test]
    fn characteristic_kinds_are_distinct() {
        let kinds: BTreeSet<_> = Characteristic::ALL.iter().map(|c| c.kind()).collect();
        assert_eq!(kinds.len(), Characteristic::ALL.len());
    }

    #[test]
    fn symmetric_components_ignore_order() {
        let ab = AxiomBody::DisjointClasses(BTreeSet::from([
            ClassExpr::class(iri("A")),
            ClassExpr::class(iri("B")),
        ]));
        let ba = AxiomBody::DisjointClasses(BTreeSet::from([
            ClassExpr::class(iri("B")),
            ClassExpr::class(iri("A")),
        ]));
        assert_eq!(Axiom::new(ab), Axiom::new(ba));
    }

    #[test]
    fn annotations_participate_in_equality() {
        let body = AxiomBody::SubClassOf {
            sub: ClassExpr::class(iri("A")),
            sup: ClassExpr::class(iri("B")),
        };
        let plain = Axiom::new(body.clone());
        let labelled = Axiom::new(body).annotated(Annotation::new(
            Iri::from_vocab(crate::vocab::rdfs::LABEL),
            Literal::simple("test"),
        ));
        assert_ne!(plain, labelled);
        assert_eq!(plain, labelled.without_annotations());
    }

    #[test]
    fn signature_types_positions() {
        let axiom = Axiom::new(AxiomBody::DataPropertyRange {
            property: iri("age"),
            datatype: Iri::from_vocab(crate::vocab::xsd::INTEGER),
        });
        let sig = axiom.signature();
        assert!(sig.contains(&Entity::data_property(iri("age"))));
        assert!(sig.iter().any(|e| e.kind == EntityKind::Datatype));
    }
}
