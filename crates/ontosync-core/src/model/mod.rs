//! # Axiom Model
//!
//! Typed OWL 2 values produced by reading the graph and consumed when
//! writing it: entities, class expressions, annotations and axioms.
//!
//! Every value is immutable, ordered and compares structurally.

mod annotation;
mod axiom;
mod entity;
mod expression;

pub use annotation::{Annotation, AnnotationValue};
pub use axiom::{Axiom, AxiomBody, AxiomKind, Characteristic};
pub use entity::{Entity, EntityKind, Individual};
pub use expression::ClassExpr;
