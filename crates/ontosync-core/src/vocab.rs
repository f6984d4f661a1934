//! RDF, RDFS, OWL 2 and XSD vocabulary used by the pipeline and translators.
//!
//! RDF, RDFS and XSD terms come from `oxrdf::vocab`; `oxrdf` has no OWL
//! vocabulary, so the `owl` module is spelled out here.
//!
//! - `rdf:` (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs:` (http://www.w3.org/2000/01/rdf-schema#)
//! - `owl:` (http://www.w3.org/2002/07/owl#)
//! - `xsd:` (http://www.w3.org/2001/XMLSchema#)

pub mod rdf {
    use oxrdf::vocab::rdf;

    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    pub const TYPE: &str = rdf::TYPE.as_str();
    pub const PROPERTY: &str = rdf::PROPERTY.as_str();
    pub const LIST: &str = rdf::LIST.as_str();
    pub const FIRST: &str = rdf::FIRST.as_str();
    pub const REST: &str = rdf::REST.as_str();
    pub const NIL: &str = rdf::NIL.as_str();
    pub const LANG_STRING: &str = rdf::LANG_STRING.as_str();
    /// OWL 2's datatype for untyped literals; not part of the RDF 1.1 vocabulary.
    pub const PLAIN_LITERAL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#PlainLiteral";
}

pub mod rdfs {
    use oxrdf::vocab::rdfs;

    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    pub const CLASS: &str = rdfs::CLASS.as_str();
    pub const DATATYPE: &str = rdfs::DATATYPE.as_str();
    pub const LITERAL: &str = rdfs::LITERAL.as_str();
    pub const SUB_CLASS_OF: &str = rdfs::SUB_CLASS_OF.as_str();
    pub const SUB_PROPERTY_OF: &str = rdfs::SUB_PROPERTY_OF.as_str();
    pub const DOMAIN: &str = rdfs::DOMAIN.as_str();
    pub const RANGE: &str = rdfs::RANGE.as_str();
    pub const LABEL: &str = rdfs::LABEL.as_str();
    pub const COMMENT: &str = rdfs::COMMENT.as_str();
    pub const SEE_ALSO: &str = rdfs::SEE_ALSO.as_str();
    pub const IS_DEFINED_BY: &str = rdfs::IS_DEFINED_BY.as_str();
}

pub mod owl {
    pub const NS: &str = "http://www.w3.org/2002/07/owl#";

    // Entity and header types
    pub const ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    pub const CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    pub const THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    pub const NOTHING: &str = "http://www.w3.org/2002/07/owl#Nothing";
    pub const OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ObjectProperty";
    pub const DATATYPE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#DatatypeProperty";
    pub const ANNOTATION_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AnnotationProperty";
    pub const NAMED_INDIVIDUAL: &str = "http://www.w3.org/2002/07/owl#NamedIndividual";
    pub const TOP_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topObjectProperty";
    pub const BOTTOM_OBJECT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomObjectProperty";
    pub const TOP_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#topDataProperty";
    pub const BOTTOM_DATA_PROPERTY: &str = "http://www.w3.org/2002/07/owl#bottomDataProperty";

    // Header predicates
    pub const IMPORTS: &str = "http://www.w3.org/2002/07/owl#imports";
    pub const VERSION_IRI: &str = "http://www.w3.org/2002/07/owl#versionIRI";
    pub const VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
    pub const PRIOR_VERSION: &str = "http://www.w3.org/2002/07/owl#priorVersion";
    pub const BACKWARD_COMPATIBLE_WITH: &str =
        "http://www.w3.org/2002/07/owl#backwardCompatibleWith";
    pub const INCOMPATIBLE_WITH: &str = "http://www.w3.org/2002/07/owl#incompatibleWith";
    pub const DEPRECATED: &str = "http://www.w3.org/2002/07/owl#deprecated";

    // Reification
    pub const AXIOM: &str = "http://www.w3.org/2002/07/owl#Axiom";
    pub const ANNOTATION: &str = "http://www.w3.org/2002/07/owl#Annotation";
    pub const ANNOTATED_SOURCE: &str = "http://www.w3.org/2002/07/owl#annotatedSource";
    pub const ANNOTATED_PROPERTY: &str = "http://www.w3.org/2002/07/owl#annotatedProperty";
    pub const ANNOTATED_TARGET: &str = "http://www.w3.org/2002/07/owl#annotatedTarget";

    // Class axioms and expressions
    pub const EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    pub const DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#disjointWith";
    pub const ALL_DISJOINT_CLASSES: &str = "http://www.w3.org/2002/07/owl#AllDisjointClasses";
    pub const DISJOINT_UNION_OF: &str = "http://www.w3.org/2002/07/owl#disjointUnionOf";
    pub const MEMBERS: &str = "http://www.w3.org/2002/07/owl#members";
    pub const INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
    pub const UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    pub const COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#complementOf";
    pub const ONE_OF: &str = "http://www.w3.org/2002/07/owl#oneOf";
    pub const RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    pub const ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    pub const SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
    pub const ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
    pub const HAS_VALUE: &str = "http://www.w3.org/2002/07/owl#hasValue";

    // Property axioms
    pub const EQUIVALENT_PROPERTY: &str = "http://www.w3.org/2002/07/owl#equivalentProperty";
    pub const PROPERTY_DISJOINT_WITH: &str = "http://www.w3.org/2002/07/owl#propertyDisjointWith";
    pub const ALL_DISJOINT_PROPERTIES: &str =
        "http://www.w3.org/2002/07/owl#AllDisjointProperties";
    pub const INVERSE_OF: &str = "http://www.w3.org/2002/07/owl#inverseOf";
    pub const PROPERTY_CHAIN_AXIOM: &str = "http://www.w3.org/2002/07/owl#propertyChainAxiom";
    pub const FUNCTIONAL_PROPERTY: &str = "http://www.w3.org/2002/07/owl#FunctionalProperty";
    pub const INVERSE_FUNCTIONAL_PROPERTY: &str =
        "http://www.w3.org/2002/07/owl#InverseFunctionalProperty";
    pub const TRANSITIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#TransitiveProperty";
    pub const SYMMETRIC_PROPERTY: &str = "http://www.w3.org/2002/07/owl#SymmetricProperty";
    pub const ASYMMETRIC_PROPERTY: &str = "http://www.w3.org/2002/07/owl#AsymmetricProperty";
    pub const REFLEXIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#ReflexiveProperty";
    pub const IRREFLEXIVE_PROPERTY: &str = "http://www.w3.org/2002/07/owl#IrreflexiveProperty";

    // Individual axioms
    pub const SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";
    pub const DIFFERENT_FROM: &str = "http://www.w3.org/2002/07/owl#differentFrom";
    pub const ALL_DIFFERENT: &str = "http://www.w3.org/2002/07/owl#AllDifferent";
    pub const DISTINCT_MEMBERS: &str = "http://www.w3.org/2002/07/owl#distinctMembers";
}

pub mod xsd {
    use oxrdf::vocab::xsd;

    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";
    pub const STRING: &str = xsd::STRING.as_str();
    pub const BOOLEAN: &str = xsd::BOOLEAN.as_str();
    pub const INTEGER: &str = xsd::INTEGER.as_str();
}

/// Predicates whose object is an RDF list.
pub const LIST_PREDICATES: &[&str] = &[
    owl::MEMBERS,
    owl::DISTINCT_MEMBERS,
    owl::INTERSECTION_OF,
    owl::UNION_OF,
    owl::ONE_OF,
    owl::DISJOINT_UNION_OF,
    owl::PROPERTY_CHAIN_AXIOM,
];

/// Types that mark a blank node as structural (never an individual).
const STRUCTURAL_TYPES: &[&str] = &[
    owl::AXIOM,
    owl::ANNOTATION,
    owl::RESTRICTION,
    owl::ALL_DISJOINT_CLASSES,
    owl::ALL_DISJOINT_PROPERTIES,
    owl::ALL_DIFFERENT,
    rdf::LIST,
];

const BUILTIN_ANNOTATION_PROPERTIES: &[&str] = &[
    rdfs::LABEL,
    rdfs::COMMENT,
    rdfs::SEE_ALSO,
    rdfs::IS_DEFINED_BY,
    owl::DEPRECATED,
    owl::VERSION_INFO,
    owl::PRIOR_VERSION,
    owl::BACKWARD_COMPATIBLE_WITH,
    owl::INCOMPATIBLE_WITH,
];

/// Check whether an IRI belongs to one of the reserved namespaces.
#[must_use]
pub fn is_reserved(iri: &str) -> bool {
    iri.starts_with(rdf::NS)
        || iri.starts_with(rdfs::NS)
        || iri.starts_with(owl::NS)
        || iri.starts_with(xsd::NS)
}

/// Check whether a type marks its subject as a structural blank node.
#[must_use]
pub fn is_structural_type(iri: &str) -> bool {
    STRUCTURAL_TYPES.contains(&iri)
}

/// Check whether a predicate is one of the built-in annotation properties.
#[must_use]
pub fn is_builtin_annotation_property(iri: &str) -> bool {
    BUILTIN_ANNOTATION_PROPERTIES.contains(&iri)
}

/// Check whether a predicate carries OWL/RDF structure (never an annotation).
#[must_use]
pub fn is_reserved_predicate(iri: &str) -> bool {
    is_reserved(iri) && !is_builtin_annotation_property(iri)
}

/// Check whether an IRI is a built-in datatype.
#[must_use]
pub fn is_builtin_datatype(iri: &str) -> bool {
    iri.starts_with(xsd::NS)
        || iri == rdfs::LITERAL
        || iri == rdf::PLAIN_LITERAL
        || iri == rdf::LANG_STRING
}

/// Check whether an IRI is a built-in entity that needs no declaration.
#[must_use]
pub fn is_builtin_entity(iri: &str) -> bool {
    matches!(
        iri,
        owl::THING
            | owl::NOTHING
            | owl::TOP_OBJECT_PROPERTY
            | owl::BOTTOM_OBJECT_PROPERTY
            | owl::TOP_DATA_PROPERTY
            | owl::BOTTOM_DATA_PROPERTY
    ) || is_builtin_datatype(iri)
        || is_builtin_annotation_property(iri)
}
