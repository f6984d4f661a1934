//! Class expressions.

use super::{Entity, Individual};
use crate::Iri;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A named class or an anonymous class expression.
///
/// Restrictions range over object properties. Operands of the boolean
/// constructors are sets, so operand order never affects equality.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ClassExpr {
    Class(Iri),
    IntersectionOf(BTreeSet<ClassExpr>),
    UnionOf(BTreeSet<ClassExpr>),
    ComplementOf(Box<ClassExpr>),
    SomeValuesFrom { property: Iri, filler: Box<ClassExpr> },
    AllValuesFrom { property: Iri, filler: Box<ClassExpr> },
    HasValue { property: Iri, value: Individual },
    OneOf(BTreeSet<Individual>),
}

impl ClassExpr {
    #[must_use]
    pub fn class(iri: Iri) -> Self {
        Self::Class(iri)
    }

    #[must_use]
    pub fn some(property: Iri, filler: ClassExpr) -> Self {
        Self::SomeValuesFrom {
            property,
            filler: Box::new(filler),
        }
    }

    #[must_use]
    pub fn only(property: Iri, filler: ClassExpr) -> Self {
        Self::AllValuesFrom {
            property,
            filler: Box::new(filler),
        }
    }

    #[must_use]
    pub fn not(operand: ClassExpr) -> Self {
        Self::ComplementOf(Box::new(operand))
    }

    /// The named class, if this is not an anonymous expression.
    #[must_use]
    pub fn as_class(&self) -> Option<&Iri> {
        match self {
            Self::Class(iri) => Some(iri),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        !matches!(self, Self::Class(_))
    }

    /// Nesting depth; a named class has depth 0.
    #[must_use]
    pub fn depth(&self) -> usize {
        let nested = match self {
            Self::Class(_) | Self::HasValue { .. } | Self::OneOf(_) => return 0,
            Self::IntersectionOf(ops) | Self::UnionOf(ops) => {
                ops.iter().map(Self::depth).max().unwrap_or(0)
            }
            Self::ComplementOf(op) => op.depth(),
            Self::SomeValuesFrom { filler, .. } | Self::AllValuesFrom { filler, .. } => {
                filler.depth()
            }
        };
        nested.saturating_add(1)
    }

    /// Collect every entity mentioned by the expression.
    pub fn collect_signature(&self, out: &mut BTreeSet<Entity>) {
        match self {
            Self::Class(iri) => {
                out.insert(Entity::class(iri.clone()));
            }
            Self::IntersectionOf(ops) | Self::UnionOf(ops) => {
                for op in ops {
                    op.collect_signature(out);
                }
            }
            Self::ComplementOf(op) => op.collect_signature(out),
            Self::SomeValuesFrom { property, filler } | Self::AllValuesFrom { property, filler } => {
                out.insert(Entity::object_property(property.clone()));
                filler.collect_signature(out);
            }
            Self::HasValue { property, value } => {
                out.insert(Entity::object_property(property.clone()));
                if let Some(iri) = value.as_iri() {
                    out.insert(Entity::individual(iri.clone()));
                }
            }
            Self::OneOf(members) => {
                out.extend(
                    members
                        .iter()
                        .filter_map(Individual::as_iri)
                        .map(|iri| Entity::individual(iri.clone())),
                );
            }
        }
    }
}

impl From<Iri> for ClassExpr {
    fn from(iri: Iri) -> Self {
        Self::Class(iri)
    }
}
