//! Entities and individuals.

use crate::vocab::{owl, rdfs};
use crate::{BlankNode, Iri, Resource, Term};
use serde::{Deserialize, Serialize};
use std::fmt;

/// The six OWL 2 entity kinds.
///
/// Variant order is the lax-profile precedence used when one IRI is
/// declared as several property kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum EntityKind {
    Class,
    Datatype,
    ObjectProperty,
    DataProperty,
    AnnotationProperty,
    NamedIndividual,
}

impl EntityKind {
    pub const ALL: [Self; 6] = [
        Self::Class,
        Self::Datatype,
        Self::ObjectProperty,
        Self::DataProperty,
        Self::AnnotationProperty,
        Self::NamedIndividual,
    ];

    /// The `rdf:type` object that declares an entity of this kind.
    #[must_use]
    pub fn type_iri(self) -> &'static str {
        match self {
            Self::Class => owl::CLASS,
            Self::Datatype => rdfs::DATATYPE,
            Self::ObjectProperty => owl::OBJECT_PROPERTY,
            Self::DataProperty => owl::DATATYPE_PROPERTY,
            Self::AnnotationProperty => owl::ANNOTATION_PROPERTY,
            Self::NamedIndividual => owl::NAMED_INDIVIDUAL,
        }
    }

    /// Map a declaration type back to its kind.
    #[must_use]
    pub fn from_type_iri(iri: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.type_iri() == iri)
    }

    #[must_use]
    pub fn is_property(self) -> bool {
        matches!(
            self,
            Self::ObjectProperty | Self::DataProperty | Self::AnnotationProperty
        )
    }

    /// Whether one IRI may not be both `self` and `other`.
    ///
    /// Class/Datatype punning and punning between property kinds are
    /// ambiguous; every other combination is legal OWL 2 punning.
    #[must_use]
    pub fn conflicts_with(self, other: Self) -> bool {
        if self == other {
            return false;
        }
        let class_like = |k: Self| matches!(k, Self::Class | Self::Datatype);
        (class_like(self) && class_like(other)) || (self.is_property() && other.is_property())
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Class => "Class",
            Self::Datatype => "Datatype",
            Self::ObjectProperty => "ObjectProperty",
            Self::DataProperty => "DataProperty",
            Self::AnnotationProperty => "AnnotationProperty",
            Self::NamedIndividual => "NamedIndividual",
        };
        f.write_str(name)
    }
}

/// A typed, named entity.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Entity {
    pub kind: EntityKind,
    pub iri: Iri,
}

impl Entity {
    #[must_use]
    pub fn new(kind: EntityKind, iri: Iri) -> Self {
        Self { kind, iri }
    }

    #[must_use]
    pub fn class(iri: Iri) -> Self {
        Self::new(EntityKind::Class, iri)
    }

    #[must_use]
    pub fn object_property(iri: Iri) -> Self {
        Self::new(EntityKind::ObjectProperty, iri)
    }

    #[must_use]
    pub fn data_property(iri: Iri) -> Self {
        Self::new(EntityKind::DataProperty, iri)
    }

    #[must_use]
    pub fn annotation_property(iri: Iri) -> Self {
        Self::new(EntityKind::AnnotationProperty, iri)
    }

    #[must_use]
    pub fn individual(iri: Iri) -> Self {
        Self::new(EntityKind::NamedIndividual, iri)
    }
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.kind, self.iri)
    }
}

/// A named or anonymous individual.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Individual {
    Named(Iri),
    Anonymous(BlankNode),
}

impl Individual {
    /// Read an individual from a term. Literals are not individuals.
    #[must_use]
    pub fn from_term(term: &Term) -> Option<Self> {
        match term {
            Term::Iri(iri) => Some(Self::Named(iri.clone())),
            Term::Blank(node) => Some(Self::Anonymous(node.clone())),
            Term::Literal(_) => None,
        }
    }

    #[must_use]
    pub fn to_resource(&self) -> Resource {
        match self {
            Self::Named(iri) => Resource::Iri(iri.clone()),
            Self::Anonymous(node) => Resource::Blank(node.clone()),
        }
    }

    #[must_use]
    pub fn to_term(&self) -> Term {
        Term::from(self.to_resource())
    }

    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Self::Named(iri) => Some(iri),
            Self::Anonymous(_) => None,
        }
    }
}

impl From<Iri> for Individual {
    fn from(iri: Iri) -> Self {
        Self::Named(iri)
    }
}

impl From<Resource> for Individual {
    fn from(resource: Resource) -> Self {
        match resource {
            Resource::Iri(iri) => Self::Named(iri),
            Resource::Blank(node) => Self::Anonymous(node),
        }
    }
}
