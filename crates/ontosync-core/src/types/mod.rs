//! # Core Type Definitions
//!
//! This module contains the term-level types shared by every part of the engine:
//! - Identifiers (`Iri`, `BlankNode`)
//! - Triple positions (`Resource` for subjects, `Term` for objects, `Literal`)
//! - Statements (`Triple`)
//! - Error types (`SyncError`)
//!
//! Terms wrap the `oxrdf` term model and convert to its borrowed views
//! (`NamedNodeRef`, `TermRef`, `TripleRef`, ...) so they can be handed to
//! an `oxrdf::Graph` directly.
//!
//! ## Determinism Guarantees
//!
//! All types in this module:
//! - Implement `Ord` for deterministic ordering in `BTreeMap`/`BTreeSet`
//! - Compare structurally by their lexical content, never by interned id

use oxrdf::{BlankNodeRef, LiteralRef, NamedNodeRef, NamedOrBlankNodeRef, TermRef, TripleRef};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

// =============================================================================
// IDENTIFIERS
// =============================================================================

/// An absolute IRI naming a resource.
///
/// Construction through [`Iri::new`] validates the text with `oxrdf`.
/// Vocabulary constants skip validation (they are known-good).
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Iri(oxrdf::NamedNode);

impl Iri {
    /// Validate and wrap an IRI.
    pub fn new(value: impl Into<String>) -> Result<Self, SyncError> {
        let value = value.into();
        oxrdf::NamedNode::new(value.as_str())
            .map(Self)
            .map_err(|e| SyncError::InvalidIri(format!("{value}: {e}")))
    }

    /// Wrap a vocabulary constant.
    #[must_use]
    pub fn from_vocab(value: &'static str) -> Self {
        Self::unchecked(value)
    }

    /// Wrap a string already known to be a valid IRI.
    pub(crate) fn unchecked(value: &str) -> Self {
        Self(oxrdf::NamedNode::new_unchecked(value))
    }

    /// Get the IRI as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }

    /// Check whether this IRI equals the given vocabulary term.
    #[must_use]
    pub fn is(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

impl TryFrom<String> for Iri {
    type Error = SyncError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Iri> for String {
    fn from(iri: Iri) -> Self {
        iri.0.into_string()
    }
}

impl From<NamedNodeRef<'_>> for Iri {
    fn from(node: NamedNodeRef<'_>) -> Self {
        Self(node.into_owned())
    }
}

impl<'a> From<&'a Iri> for NamedNodeRef<'a> {
    fn from(iri: &'a Iri) -> Self {
        iri.0.as_ref()
    }
}

impl fmt::Display for Iri {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// A graph-local anonymous node.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct BlankNode(oxrdf::BlankNode);

impl BlankNode {
    /// Create a blank node with the given label.
    ///
    /// Labels are graph-local and produced by the engine or an upstream
    /// parser; deserialized labels are validated instead.
    #[must_use]
    pub fn new(label: impl Into<String>) -> Self {
        Self(oxrdf::BlankNode::new_unchecked(label))
    }

    /// Get the label as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}

impl Ord for BlankNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.as_str().cmp(other.as_str())
    }
}

impl PartialOrd for BlankNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl TryFrom<String> for BlankNode {
    type Error = SyncError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        oxrdf::BlankNode::new(value.as_str())
            .map(Self)
            .map_err(|e| SyncError::DeserializationError(format!("blank node {value:?}: {e}")))
    }
}

impl From<BlankNode> for String {
    fn from(node: BlankNode) -> Self {
        node.0.into_string()
    }
}

impl From<BlankNodeRef<'_>> for BlankNode {
    fn from(node: BlankNodeRef<'_>) -> Self {
        Self(node.into_owned())
    }
}

impl fmt::Display for BlankNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// LITERALS
// =============================================================================

/// A literal value: lexical form plus optional language tag or datatype.
///
/// A literal typed `xsd:string` is the same value as the simple literal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "LiteralParts", into = "LiteralParts")]
pub struct Literal(oxrdf::Literal);

impl Literal {
    /// A plain literal with neither language nor datatype.
    #[must_use]
    pub fn simple(lexical: impl Into<String>) -> Self {
        Self(oxrdf::Literal::new_simple_literal(lexical))
    }

    /// A language-tagged literal. The tag is lower-cased.
    #[must_use]
    pub fn lang(lexical: impl Into<String>, language: impl Into<String>) -> Self {
        let language = language.into().to_ascii_lowercase();
        Self(oxrdf::Literal::new_language_tagged_literal_unchecked(
            lexical, language,
        ))
    }

    /// A typed literal.
    #[must_use]
    pub fn typed(lexical: impl Into<String>, datatype: Iri) -> Self {
        Self(oxrdf::Literal::new_typed_literal(lexical, datatype.0))
    }

    /// The lexical form.
    #[must_use]
    pub fn lexical(&self) -> &str {
        self.0.value()
    }

    /// The language tag, if any.
    #[must_use]
    pub fn language(&self) -> Option<&str> {
        self.0.language()
    }

    /// The explicit datatype. Simple and language-tagged literals have none.
    #[must_use]
    pub fn datatype(&self) -> Option<Iri> {
        let datatype = self.0.datatype();
        if datatype == oxrdf::vocab::xsd::STRING || datatype == oxrdf::vocab::rdf::LANG_STRING {
            None
        } else {
            Some(Iri::from(datatype))
        }
    }

    fn key(&self) -> (&str, Option<&str>, &str) {
        (self.lexical(), self.language(), self.0.datatype().as_str())
    }
}

impl Ord for Literal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.key().cmp(&other.key())
    }
}

impl PartialOrd for Literal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl From<LiteralRef<'_>> for Literal {
    fn from(literal: LiteralRef<'_>) -> Self {
        Self(literal.into_owned())
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Serialized shape of a [`Literal`].
#[derive(Serialize, Deserialize)]
struct LiteralParts {
    lexical: String,
    language: Option<String>,
    datatype: Option<Iri>,
}

impl TryFrom<LiteralParts> for Literal {
    type Error = SyncError;

    fn try_from(parts: LiteralParts) -> Result<Self, Self::Error> {
        match (parts.language, parts.datatype) {
            (Some(language), _) => {
                oxrdf::Literal::new_language_tagged_literal(parts.lexical, language)
                    .map(Self)
                    .map_err(|e| SyncError::DeserializationError(e.to_string()))
            }
            (None, Some(datatype)) => Ok(Self::typed(parts.lexical, datatype)),
            (None, None) => Ok(Self::simple(parts.lexical)),
        }
    }
}

impl From<Literal> for LiteralParts {
    fn from(literal: Literal) -> Self {
        let datatype = literal.datatype();
        let (lexical, _, language) = literal.0.destruct();
        Self {
            lexical,
            language,
            datatype,
        }
    }
}

// =============================================================================
// TRIPLE POSITIONS
// =============================================================================

/// Subject position: a named or anonymous resource.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Resource {
    Iri(Iri),
    Blank(BlankNode),
}

impl Resource {
    /// The IRI, if this resource is named.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Self::Iri(iri) => Some(iri),
            Self::Blank(_) => None,
        }
    }

    /// Check if this resource is anonymous.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank(_))
    }
}

impl From<Iri> for Resource {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl From<BlankNode> for Resource {
    fn from(node: BlankNode) -> Self {
        Self::Blank(node)
    }
}

impl From<NamedOrBlankNodeRef<'_>> for Resource {
    fn from(node: NamedOrBlankNodeRef<'_>) -> Self {
        match node {
            NamedOrBlankNodeRef::NamedNode(iri) => Self::Iri(iri.into()),
            NamedOrBlankNodeRef::BlankNode(blank) => Self::Blank(blank.into()),
        }
    }
}

impl<'a> From<&'a Resource> for NamedOrBlankNodeRef<'a> {
    fn from(resource: &'a Resource) -> Self {
        match resource {
            Resource::Iri(iri) => Self::NamedNode(iri.0.as_ref()),
            Resource::Blank(node) => Self::BlankNode(node.0.as_ref()),
        }
    }
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => iri.fmt(f),
            Self::Blank(node) => node.fmt(f),
        }
    }
}

/// Object position: a resource or a literal.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Term {
    Iri(Iri),
    Blank(BlankNode),
    Literal(Literal),
}

impl Term {
    /// Convert to a subject-position resource (fails for literals).
    #[must_use]
    pub fn as_resource(&self) -> Option<Resource> {
        match self {
            Self::Iri(iri) => Some(Resource::Iri(iri.clone())),
            Self::Blank(node) => Some(Resource::Blank(node.clone())),
            Self::Literal(_) => None,
        }
    }

    /// The IRI, if this term is named.
    #[must_use]
    pub fn as_iri(&self) -> Option<&Iri> {
        match self {
            Self::Iri(iri) => Some(iri),
            _ => None,
        }
    }

    /// The literal, if this term is one.
    #[must_use]
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Self::Literal(lit) => Some(lit),
            _ => None,
        }
    }

    /// Check if this term is an anonymous node.
    #[must_use]
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Blank(_))
    }

    /// Check if this term is the given vocabulary IRI.
    #[must_use]
    pub fn is_iri(&self, iri: &str) -> bool {
        self.as_iri().is_some_and(|i| i.is(iri))
    }
}

impl From<Iri> for Term {
    fn from(iri: Iri) -> Self {
        Self::Iri(iri)
    }
}

impl From<BlankNode> for Term {
    fn from(node: BlankNode) -> Self {
        Self::Blank(node)
    }
}

impl From<Literal> for Term {
    fn from(lit: Literal) -> Self {
        Self::Literal(lit)
    }
}

impl From<Resource> for Term {
    fn from(resource: Resource) -> Self {
        match resource {
            Resource::Iri(iri) => Self::Iri(iri),
            Resource::Blank(node) => Self::Blank(node),
        }
    }
}

impl From<TermRef<'_>> for Term {
    fn from(term: TermRef<'_>) -> Self {
        match term {
            TermRef::NamedNode(iri) => Self::Iri(iri.into()),
            TermRef::BlankNode(blank) => Self::Blank(blank.into()),
            TermRef::Literal(literal) => Self::Literal(literal.into()),
        }
    }
}

impl<'a> From<&'a Term> for TermRef<'a> {
    fn from(term: &'a Term) -> Self {
        match term {
            Term::Iri(iri) => Self::NamedNode(iri.0.as_ref()),
            Term::Blank(node) => Self::BlankNode(node.0.as_ref()),
            Term::Literal(lit) => Self::Literal(lit.0.as_ref()),
        }
    }
}

impl fmt::Display for Term {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Iri(iri) => iri.fmt(f),
            Self::Blank(node) => node.fmt(f),
            Self::Literal(lit) => lit.fmt(f),
        }
    }
}

// =============================================================================
// TRIPLE
// =============================================================================

/// An immutable (subject, predicate, object) statement.
///
/// Ordering is subject-major so a `BTreeSet<Triple>` groups statements
/// about the same resource together.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Triple {
    pub subject: Resource,
    pub predicate: Iri,
    pub object: Term,
}

impl Triple {
    /// Create a new triple.
    #[must_use]
    pub fn new(subject: impl Into<Resource>, predicate: Iri, object: impl Into<Term>) -> Self {
        Self {
            subject: subject.into(),
            predicate,
            object: object.into(),
        }
    }
}

impl From<TripleRef<'_>> for Triple {
    fn from(triple: TripleRef<'_>) -> Self {
        Self {
            subject: triple.subject.into(),
            predicate: triple.predicate.into(),
            object: triple.object.into(),
        }
    }
}

impl<'a> From<&'a Triple> for TripleRef<'a> {
    fn from(triple: &'a Triple) -> Self {
        TripleRef::new(&triple.subject, &triple.predicate, &triple.object)
    }
}

impl fmt::Display for Triple {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} {} .", self.subject, self.predicate, self.object)
    }
}

// =============================================================================
// ERROR TYPES
// =============================================================================

/// Errors that can occur in the synchronization engine.
///
/// - No silent failures
/// - Every variant is raised synchronously by the operation that hit it
/// - Nothing is retried internally
#[derive(Debug, Error)]
pub enum SyncError {
    /// A structural precondition of the graph cannot be satisfied.
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    /// The axiom has no canonical triple encoding under the active profile.
    #[error("Unsupported construct: {0}")]
    UnsupportedConstruct(String),

    /// A traversal exceeded its safety bound or revisited a node.
    #[error("Recursion guard tripped after {limit} steps: {context}")]
    RecursionGuard { limit: usize, context: String },

    /// Ambiguous punning or conflicting declarations under the strict profile.
    #[error("Consistency violation: {0}")]
    ConsistencyViolation(String),

    /// A string could not be parsed as an IRI.
    #[error("Invalid IRI: {0}")]
    InvalidIri(String),

    /// The shared model lock was poisoned by a panicking writer.
    #[error("Model lock poisoned")]
    LockPoisoned,

    /// A serialization error occurred.
    #[error("Serialization error: {0}")]
    SerializationError(String),

    /// A deserialization error occurred.
    #[error("Deserialization error: {0}")]
    DeserializationError(String),

    /// Configuration could not be parsed.
    #[error("Configuration error: {0}")]
    Config(String),

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(String),
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn iri_validation_rejects_garbage() {
        assert!(Iri::new("http://example.org/A").is_ok());
        assert!(matches!(
            Iri::new("not an iri"),
            Err(SyncError::InvalidIri(_))
        ));
    }

    #[test]
    fn language_tags_are_lowercased() {
        let lit = Literal::lang("chat", "FR");
        assert_eq!(lit.language(), Some("fr"));
    }

    #[test]
    fn literal_is_not_a_resource() {
        let term = Term::from(Literal::simple("x"));
        assert!(term.as_resource().is_none());

        let blank = Term::from(BlankNode::new("b0"));
        assert!(matches!(blank.as_resource(), Some(Resource::Blank(_))));
    }

    #[test]
    fn triples_order_subject_major() {
        let a = Iri::new("http://example.org/a").expect("iri");
        let b = Iri::new("http://example.org/b").expect("iri");
        let p = Iri::new("http://example.org/p").expect("iri");

        let t1 = Triple::new(b.clone(), p.clone(), a.clone());
        let t2 = Triple::new(a.clone(), p.clone(), b.clone());
        let mut sorted = vec![t1.clone(), t2.clone()];
        sorted.sort();
        assert_eq!(sorted, vec![t2, t1]);
    }

    #[test]
    fn display_is_ntriples_like() {
        let s = Iri::new("http://example.org/s").expect("iri");
        let p = Iri::new("http://example.org/p").expect("iri");
        let t = Triple::new(s, p, Literal::lang("hi", "en"));
        assert_eq!(
            t.to_string(),
            "<http://example.org/s> <http://example.org/p> \"hi\"@en ."
        );
    }

    #[test]
    fn string_typed_literal_is_simple() {
        let xsd_string = Iri::from_vocab(crate::vocab::xsd::STRING);
        let typed = Literal::typed("x", xsd_string);
        assert_eq!(typed, Literal::simple("x"));
        assert_eq!(typed.datatype(), None);

        let integer = Iri::from_vocab(crate::vocab::xsd::INTEGER);
        let number = Literal::typed("7", integer.clone());
        assert_eq!(number.datatype(), Some(integer));
        assert_eq!(number.lexical(), "7");
        assert_eq!(Literal::lang("hi", "en").datatype(), None);
    }

    #[test]
    fn triples_convert_through_oxrdf() {
        let s = BlankNode::new("genid3");
        let p = Iri::new("http://example.org/p").expect("iri");
        let triple = Triple::new(s, p, Literal::lang("hi", "en"));

        let borrowed = TripleRef::from(&triple);
        assert_eq!(Triple::from(borrowed), triple);
    }

    #[test]
    fn deserialized_blank_labels_are_validated() {
        let good = postcard::to_stdvec("b0").expect("encode");
        let node: BlankNode = postcard::from_bytes(&good).expect("valid label");
        assert_eq!(node, BlankNode::new("b0"));

        let bad = postcard::to_stdvec("not a label").expect("encode");
        assert!(postcard::from_bytes::<BlankNode>(&bad).is_err());
    }
}
