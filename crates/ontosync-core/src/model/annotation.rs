//! Annotations and their values.

use crate::{BlankNode, Iri, Literal, Term};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// The value of an annotation.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum AnnotationValue {
    Iri(Iri),
    Literal(Literal),
    Anonymous(BlankNode),
}

impl AnnotationValue {
    #[must_use]
    pub fn to_term(&self) -> Term {
        match self {
            Self::Iri(iri) => Term::Iri(iri.clone()),
            Self::Literal(lit) => Term::Literal(lit.clone()),
            Self::Anonymous(node) => Term::Blank(node.clone()),
        }
    }
}

impl From<Term> for AnnotationValue {
    fn from(term: Term) -> Self {
        match term {
            Term::Iri(iri) => Self::Iri(iri),
            Term::Literal(lit) => Self::Literal(lit),
            Term::Blank(node) => Self::Anonymous(node),
        }
    }
}

impl From<Literal> for AnnotationValue {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

impl From<Iri> for AnnotationValue {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

/// An annotation with optional annotations of its own.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Annotation {
    pub property: Iri,
    pub value: AnnotationValue,
    pub annotations: BTreeSet<Annotation>,
}

impl Annotation {
    #[must_use]
    pub fn new(property: Iri, value: impl Into<AnnotationValue>) -> Self {
        Self {
            property,
            value: value.into(),
            annotations: BTreeSet::new(),
        }
    }

    /// Attach a sub-annotation.
    #[must_use]
    pub fn annotated(mut self, annotation: Annotation) -> Self {
        self.annotations.insert(annotation);
        self
    }

    /// Nesting depth; a plain annotation has depth 1.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.annotations
            .iter()
            .map(Self::depth)
            .max()
            .unwrap_or(0)
            .saturating_add(1)
    }
}
