//! The standard normalization passes.

use super::GraphPass;
use crate::config::SyncConfig;
use crate::model::{Entity, EntityKind};
use crate::translate::declaration_triple;
use crate::translate::is_structural_node;
use crate::translate::list::walk_list;
use crate::vocab::{self, LIST_PREDICATES, owl, rdf, rdfs};
use crate::{Graph, Iri, Resource, SyncError, Term, Triple};
use std::collections::BTreeSet;

// =============================================================================
// HELPERS
// =============================================================================

/// A user IRI that may need a declaration.
fn user_iri(term: &Term) -> Option<&Iri> {
    term.as_iri()
        .filter(|iri| !vocab::is_reserved(iri.as_str()) && !vocab::is_builtin_entity(iri.as_str()))
}

fn user_subject(resource: &Resource) -> Option<&Iri> {
    resource
        .as_iri()
        .filter(|iri| !vocab::is_reserved(iri.as_str()) && !vocab::is_builtin_entity(iri.as_str()))
}

fn is_declared(graph: &Graph, iri: &Iri, kinds: &[EntityKind]) -> bool {
    let resource = Resource::Iri(iri.clone());
    kinds
        .iter()
        .any(|kind| graph.has_type(&resource, kind.type_iri()))
}

fn is_declared_data_property(graph: &Graph, iri: &Iri) -> bool {
    is_declared(graph, iri, &[EntityKind::DataProperty])
}

/// Items of every list hanging off `predicate`.
fn list_members(
    graph: &Graph,
    predicate: &str,
    config: &SyncConfig,
) -> Result<Vec<(Resource, Term)>, SyncError> {
    let mut scratch = BTreeSet::new();
    let mut out = Vec::new();
    for triple in graph.with_predicate(predicate) {
        for item in walk_list(graph, &triple.object, config.max_list_length, &mut scratch)? {
            out.push((triple.subject.clone(), item));
        }
    }
    Ok(out)
}

/// Subjects and objects of every triple with `predicate`.
fn both_ends(graph: &Graph, predicate: &str) -> Vec<Term> {
    graph
        .with_predicate(predicate)
        .into_iter()
        .flat_map(|t| [Term::from(t.subject), t.object])
        .collect()
}

/// Whether the restriction node constrains a declared data property.
fn is_data_restriction(graph: &Graph, node: &Resource) -> bool {
    graph
        .objects(node, owl::ON_PROPERTY)
        .iter()
        .filter_map(Term::as_iri)
        .any(|property| is_declared_data_property(graph, property))
}

/// Insert declarations for `candidates` lacking every kind in `unless`.
fn declare_missing(
    graph: &mut Graph,
    candidates: BTreeSet<Iri>,
    kind: EntityKind,
    unless: &[EntityKind],
) -> usize {
    let missing: Vec<Iri> = candidates
        .into_iter()
        .filter(|iri| !is_declared(graph, iri, unless))
        .collect();
    missing
        .into_iter()
        .filter(|iri| graph.insert(declaration_triple(&Entity::new(kind, iri.clone()))))
        .count()
}

// =============================================================================
// LIST INTEGRITY
// =============================================================================

/// Validates every list reachable from a list-valued OWL predicate.
///
/// Changes nothing; cyclic lists trip the recursion guard and branching or
/// unterminated lists are malformed.
#[derive(Debug, Clone, Copy)]
pub struct ListIntegrity;

impl GraphPass for ListIntegrity {
    fn name(&self) -> &'static str {
        "list-integrity"
    }

    fn precedence(&self) -> u32 {
        10
    }

    fn apply(&self, graph: &mut Graph, config: &SyncConfig) -> Result<usize, SyncError> {
        for predicate in LIST_PREDICATES {
            list_members(graph, predicate, config)?;
        }
        Ok(0)
    }
}

// =============================================================================
// SELF-TYPE CLEANUP
// =============================================================================

/// Removes `x rdf:type x`, which no OWL construct produces.
#[derive(Debug, Clone, Copy)]
pub struct SelfTypeCleanup;

impl GraphPass for SelfTypeCleanup {
    fn name(&self) -> &'static str {
        "self-type-cleanup"
    }

    fn precedence(&self) -> u32 {
        20
    }

    fn apply(&self, graph: &mut Graph, _config: &SyncConfig) -> Result<usize, SyncError> {
        let doomed: Vec<Triple> = graph
            .with_predicate(rdf::TYPE)
            .into_iter()
            .filter(|t| {
                Term::from(t.subject.clone()) == t.object
                    && t.subject
                        .as_iri()
                        .is_none_or(|iri| !vocab::is_reserved(iri.as_str()))
            })
            .collect();
        Ok(doomed.iter().filter(|t| graph.remove(t)).count())
    }
}

// =============================================================================
// RDFS VOCABULARY
// =============================================================================

/// `x rdf:type rdfs:Class` gains `x rdf:type owl:Class`.
#[derive(Debug, Clone, Copy)]
pub struct RdfsVocabulary;

impl GraphPass for RdfsVocabulary {
    fn name(&self) -> &'static str {
        "rdfs-vocabulary"
    }

    fn precedence(&self) -> u32 {
        30
    }

    fn apply(&self, graph: &mut Graph, _config: &SyncConfig) -> Result<usize, SyncError> {
        let classes: BTreeSet<Iri> = graph
            .instances_of(rdfs::CLASS)
            .iter()
            .filter_map(user_subject)
            .cloned()
            .collect();
        Ok(declare_missing(
            graph,
            classes,
            EntityKind::Class,
            &[EntityKind::Class],
        ))
    }
}

// =============================================================================
// PROPERTY DECLARATIONS
// =============================================================================

/// Untyped properties gain exactly one property declaration.
///
/// Evidence, strongest first: used on a reification, bulk or header node
/// makes an annotation property; used with a literal object or with a
/// datatype range makes a data property. Otherwise a property linked by
/// `rdfs:subPropertyOf`/`owl:equivalentProperty` (in either direction,
/// transitively) to a data property is a data property, and anything else
/// is an object property.
///
/// A linked property counts as a data property when it is declared one or
/// when it is untyped and its own uses say so. Declarations this pass
/// infers never change that answer, so the result is the same whether a
/// neighbour's declaration was in the input or inferred.
#[derive(Debug, Clone, Copy)]
pub struct PropertyDeclarations;

const PROPERTY_KINDS: &[EntityKind] = &[
    EntityKind::ObjectProperty,
    EntityKind::DataProperty,
    EntityKind::AnnotationProperty,
];

/// Predicates that make two properties the same kind.
const PROPERTY_LINK_PREDICATES: &[&str] = &[rdfs::SUB_PROPERTY_OF, owl::EQUIVALENT_PROPERTY];

/// Predicates relating two properties.
const PROPERTY_PAIR_PREDICATES: &[&str] = &[
    rdfs::SUB_PROPERTY_OF,
    owl::EQUIVALENT_PROPERTY,
    owl::PROPERTY_DISJOINT_WITH,
    owl::INVERSE_OF,
];

const CHARACTERISTIC_TYPES: &[&str] = &[
    owl::FUNCTIONAL_PROPERTY,
    owl::INVERSE_FUNCTIONAL_PROPERTY,
    owl::TRANSITIVE_PROPERTY,
    owl::SYMMETRIC_PROPERTY,
    owl::ASYMMETRIC_PROPERTY,
    owl::REFLEXIVE_PROPERTY,
    owl::IRREFLEXIVE_PROPERTY,
];

impl PropertyDeclarations {
    fn positions(graph: &Graph, config: &SyncConfig) -> Result<BTreeSet<Iri>, SyncError> {
        let mut found: BTreeSet<Iri> = graph
            .predicates()
            .into_iter()
            .filter(|p| !vocab::is_reserved(p.as_str()))
            .collect();

        let mut terms: Vec<Term> = Vec::new();
        for predicate in PROPERTY_PAIR_PREDICATES {
            terms.extend(both_ends(graph, predicate));
        }
        terms.extend(graph.with_predicate(owl::ON_PROPERTY).into_iter().map(|t| t.object));
        for predicate in [rdfs::DOMAIN, rdfs::RANGE, owl::PROPERTY_CHAIN_AXIOM] {
            terms.extend(
                graph
                    .with_predicate(predicate)
                    .into_iter()
                    .map(|t| Term::from(t.subject)),
            );
        }
        for type_iri in CHARACTERISTIC_TYPES {
            terms.extend(graph.instances_of(type_iri).into_iter().map(Term::from));
        }
        terms.extend(
            list_members(graph, owl::PROPERTY_CHAIN_AXIOM, config)?
                .into_iter()
                .map(|(_, item)| item),
        );
        for node in graph.instances_of(owl::ALL_DISJOINT_PROPERTIES) {
            for head in graph.objects(&node, owl::MEMBERS) {
                let mut scratch = BTreeSet::new();
                terms.extend(walk_list(graph, &head, config.max_list_length, &mut scratch)?);
            }
        }

        found.extend(terms.iter().filter_map(user_iri).cloned());
        found.retain(|iri| !vocab::is_builtin_entity(iri.as_str()));
        Ok(found)
    }

    /// Evidence from the property's own uses and range.
    fn direct_evidence(graph: &Graph, property: &Iri) -> Option<EntityKind> {
        let uses = graph.matching(None, Some(property), None);
        if uses.iter().any(|t| is_structural_node(graph, &t.subject)) {
            return Some(EntityKind::AnnotationProperty);
        }
        if uses.iter().any(|t| t.object.as_literal().is_some()) {
            return Some(EntityKind::DataProperty);
        }
        let subject = Resource::Iri(property.clone());
        let datatype_range = graph.objects(&subject, rdfs::RANGE).iter().any(|range| {
            range.as_iri().is_some_and(|iri| {
                vocab::is_builtin_datatype(iri.as_str())
                    || graph.has_type(&Resource::Iri(iri.clone()), rdfs::DATATYPE)
            })
        });
        datatype_range.then_some(EntityKind::DataProperty)
    }

    fn is_data_witness(graph: &Graph, iri: &Iri) -> bool {
        if iri.is(owl::TOP_DATA_PROPERTY) || iri.is(owl::BOTTOM_DATA_PROPERTY) {
            return true;
        }
        if is_declared_data_property(graph, iri) {
            return true;
        }
        !is_declared(graph, iri, PROPERTY_KINDS)
            && Self::direct_evidence(graph, iri) == Some(EntityKind::DataProperty)
    }

    /// Every property reachable over subproperty and equivalence links.
    ///
    /// Built-in properties end a walk; `owl:topDataProperty` would
    /// otherwise link every data property in the graph.
    fn linked(graph: &Graph, property: &Iri) -> BTreeSet<Iri> {
        let mut seen = BTreeSet::from([property.clone()]);
        let mut pending = vec![property.clone()];
        while let Some(current) = pending.pop() {
            let node = Resource::Iri(current.clone());
            let term = Term::Iri(current);
            let mut neighbours: Vec<Iri> = Vec::new();
            for predicate in PROPERTY_LINK_PREDICATES {
                neighbours.extend(
                    graph
                        .objects(&node, predicate)
                        .iter()
                        .filter_map(Term::as_iri)
                        .cloned(),
                );
                neighbours.extend(
                    graph
                        .subjects(predicate, &term)
                        .iter()
                        .filter_map(Resource::as_iri)
                        .cloned(),
                );
            }
            for neighbour in neighbours {
                let walkable = !vocab::is_reserved(neighbour.as_str())
                    && !vocab::is_builtin_entity(neighbour.as_str());
                if seen.insert(neighbour.clone()) && walkable {
                    pending.push(neighbour);
                }
            }
        }
        seen.remove(property);
        seen
    }

    fn evidence(graph: &Graph, property: &Iri) -> EntityKind {
        if let Some(kind) = Self::direct_evidence(graph, property) {
            return kind;
        }
        let data_linked = Self::linked(graph, property)
            .iter()
            .any(|iri| Self::is_data_witness(graph, iri));
        if data_linked {
            EntityKind::DataProperty
        } else {
            EntityKind::ObjectProperty
        }
    }
}

impl GraphPass for PropertyDeclarations {
    fn name(&self) -> &'static str {
        "property-declarations"
    }

    fn precedence(&self) -> u32 {
        40
    }

    fn apply(&self, graph: &mut Graph, config: &SyncConfig) -> Result<usize, SyncError> {
        let untyped: Vec<(Iri, EntityKind)> = Self::positions(graph, config)?
            .into_iter()
            .filter(|iri| !is_declared(graph, iri, PROPERTY_KINDS))
            .map(|iri| {
                let kind = Self::evidence(graph, &iri);
                (iri, kind)
            })
            .collect();
        Ok(untyped
            .into_iter()
            .filter(|(iri, kind)| {
                graph.insert(declaration_triple(&Entity::new(*kind, iri.clone())))
            })
            .count())
    }
}

// =============================================================================
// CLASS DECLARATIONS
// =============================================================================

/// Untyped IRIs in class positions gain `owl:Class`; untyped IRIs in
/// datatype positions (ranges and restriction fillers of data
/// properties) gain `rdfs:Datatype`.
#[derive(Debug, Clone, Copy)]
pub struct ClassDeclarations;

/// Predicates whose subject and object are both classes.
const CLASS_PAIR_PREDICATES: &[&str] = &[
    rdfs::SUB_CLASS_OF,
    owl::EQUIVALENT_CLASS,
    owl::DISJOINT_WITH,
];

impl ClassDeclarations {
    fn positions(
        graph: &Graph,
        config: &SyncConfig,
    ) -> Result<(BTreeSet<Iri>, BTreeSet<Iri>), SyncError> {
        let mut classes: Vec<Term> = Vec::new();
        let mut datatypes: Vec<Term> = Vec::new();

        classes.extend(graph.with_predicate(rdf::TYPE).into_iter().map(|t| t.object));
        for predicate in CLASS_PAIR_PREDICATES {
            classes.extend(both_ends(graph, predicate));
        }
        classes.extend(graph.with_predicate(owl::COMPLEMENT_OF).into_iter().map(|t| t.object));
        classes.extend(graph.with_predicate(rdfs::DOMAIN).into_iter().map(|t| t.object));
        classes.extend(
            graph
                .with_predicate(owl::DISJOINT_UNION_OF)
                .into_iter()
                .map(|t| Term::from(t.subject)),
        );

        for predicate in [owl::INTERSECTION_OF, owl::UNION_OF] {
            for (node, item) in list_members(graph, predicate, config)? {
                if graph.has_type(&node, rdfs::DATATYPE) {
                    datatypes.push(item);
                } else {
                    classes.push(item);
                }
            }
        }
        classes.extend(
            list_members(graph, owl::DISJOINT_UNION_OF, config)?
                .into_iter()
                .map(|(_, item)| item),
        );
        for node in graph.instances_of(owl::ALL_DISJOINT_CLASSES) {
            for head in graph.objects(&node, owl::MEMBERS) {
                let mut scratch = BTreeSet::new();
                classes.extend(walk_list(graph, &head, config.max_list_length, &mut scratch)?);
            }
        }

        for predicate in [owl::SOME_VALUES_FROM, owl::ALL_VALUES_FROM] {
            for triple in graph.with_predicate(predicate) {
                if is_data_restriction(graph, &triple.subject) {
                    datatypes.push(triple.object);
                } else {
                    classes.push(triple.object);
                }
            }
        }
        for triple in graph.with_predicate(rdfs::RANGE) {
            let data = triple
                .subject
                .as_iri()
                .is_some_and(|property| is_declared_data_property(graph, property));
            if data {
                datatypes.push(triple.object);
            } else {
                classes.push(triple.object);
            }
        }

        let collect = |terms: Vec<Term>| -> BTreeSet<Iri> {
            terms.iter().filter_map(user_iri).cloned().collect()
        };
        Ok((collect(classes), collect(datatypes)))
    }
}

impl GraphPass for ClassDeclarations {
    fn name(&self) -> &'static str {
        "class-declarations"
    }

    fn precedence(&self) -> u32 {
        50
    }

    fn apply(&self, graph: &mut Graph, config: &SyncConfig) -> Result<usize, SyncError> {
        let (classes, datatypes) = Self::positions(graph, config)?;
        let class_like = [EntityKind::Class, EntityKind::Datatype];
        let added = declare_missing(graph, classes, EntityKind::Class, &class_like);
        Ok(added.saturating_add(declare_missing(
            graph,
            datatypes,
            EntityKind::Datatype,
            &class_like,
        )))
    }
}

// =============================================================================
// INDIVIDUAL DECLARATIONS
// =============================================================================

/// Untyped IRIs in individual positions gain `owl:NamedIndividual`.
#[derive(Debug, Clone, Copy)]
pub struct IndividualDeclarations;

impl IndividualDeclarations {
    fn positions(graph: &Graph, config: &SyncConfig) -> Result<BTreeSet<Iri>, SyncError> {
        let mut terms: Vec<Term> = Vec::new();

        for triple in graph.with_predicate(rdf::TYPE) {
            let names_class = match &triple.object {
                Term::Iri(iri) => {
                    !vocab::is_reserved(iri.as_str()) || iri.is(owl::THING) || iri.is(owl::NOTHING)
                }
                Term::Blank(_) => true,
                Term::Literal(_) => false,
            };
            if names_class && !is_structural_node(graph, &triple.subject) {
                terms.push(Term::from(triple.subject));
            }
        }

        for triple in graph.triples() {
            if vocab::is_reserved(triple.predicate.as_str())
                || is_structural_node(graph, &triple.subject)
            {
                continue;
            }
            if is_declared(graph, &triple.predicate, &[EntityKind::ObjectProperty]) {
                terms.push(Term::from(triple.subject.clone()));
                terms.push(triple.object);
            } else if is_declared_data_property(graph, &triple.predicate) {
                terms.push(Term::from(triple.subject));
            }
        }

        for predicate in [owl::SAME_AS, owl::DIFFERENT_FROM] {
            terms.extend(both_ends(graph, predicate));
        }
        for predicate in [owl::ONE_OF, owl::DISTINCT_MEMBERS] {
            terms.extend(
                list_members(graph, predicate, config)?
                    .into_iter()
                    .map(|(_, item)| item),
            );
        }
        for node in graph.instances_of(owl::ALL_DIFFERENT) {
            for head in graph.objects(&node, owl::MEMBERS) {
                let mut scratch = BTreeSet::new();
                terms.extend(walk_list(graph, &head, config.max_list_length, &mut scratch)?);
            }
        }
        for triple in graph.with_predicate(owl::HAS_VALUE) {
            if !is_data_restriction(graph, &triple.subject) {
                terms.push(triple.object);
            }
        }

        Ok(terms.iter().filter_map(user_iri).cloned().collect())
    }
}

impl GraphPass for IndividualDeclarations {
    fn name(&self) -> &'static str {
        "individual-declarations"
    }

    fn precedence(&self) -> u32 {
        60
    }

    fn apply(&self, graph: &mut Graph, config: &SyncConfig) -> Result<usize, SyncError> {
        let individuals = Self::positions(graph, config)?;
        Ok(declare_missing(
            graph,
            individuals,
            EntityKind::NamedIndividual,
            &[EntityKind::NamedIndividual],
        ))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::BlankNode;
    use crate::translate::vocab_triple;

    fn iri(local: &str) -> Iri {
        Iri::new(format!("http://example.org/{local}")).expect("iri")
    }

    fn declared(graph: &Graph, local: &str, kind: EntityKind) -> bool {
        graph.contains(&declaration_triple(&Entity::new(kind, iri(local))))
    }

    fn run(pass: &dyn GraphPass, graph: &mut Graph) -> usize {
        pass.apply(graph, &SyncConfig::default()).expect("pass")
    }

    #[test]
    fn self_type_is_removed() {
        let mut graph = Graph::new();
        graph.insert(vocab_triple(iri("X"), rdf::TYPE, iri("X")));
        graph.insert(vocab_triple(iri("Y"), rdf::TYPE, iri("X")));
        assert_eq!(run(&SelfTypeCleanup, &mut graph), 1);
        assert_eq!(graph.len(), 1);
    }

    #[test]
    fn rdfs_class_becomes_owl_class() {
        let mut graph = Graph::new();
        graph.insert(vocab_triple(iri("A"), rdf::TYPE, Iri::from_vocab(rdfs::CLASS)));
        assert_eq!(run(&RdfsVocabulary, &mut graph), 1);
        assert!(declared(&graph, "A", EntityKind::Class));
        assert_eq!(run(&RdfsVocabulary, &mut graph), 0);
    }

    #[test]
    fn property_evidence() {
        let mut graph = Graph::new();
        graph.insert(Triple::new(iri("a"), iri("knows"), iri("b")));
        graph.insert(Triple::new(iri("a"), iri("age"), crate::Literal::simple("3")));
        graph.insert(vocab_triple(
            iri("height"),
            rdfs::RANGE,
            Iri::from_vocab(crate::vocab::xsd::INTEGER),
        ));
        let reifier = Resource::Blank(BlankNode::new("r"));
        graph.insert(vocab_triple(reifier.clone(), rdf::TYPE, Iri::from_vocab(owl::AXIOM)));
        graph.insert(Triple::new(reifier, iri("note"), crate::Literal::simple("x")));

        assert_eq!(run(&PropertyDeclarations, &mut graph), 4);
        assert!(declared(&graph, "knows", EntityKind::ObjectProperty));
        assert!(declared(&graph, "age", EntityKind::DataProperty));
        assert!(declared(&graph, "height", EntityKind::DataProperty));
        assert!(declared(&graph, "note", EntityKind::AnnotationProperty));
    }

    #[test]
    fn declared_and_inferred_neighbours_agree() {
        let mut inferred = Graph::new();
        inferred.insert(vocab_triple(iri("p"), rdfs::SUB_PROPERTY_OF, iri("q")));
        inferred.insert(Triple::new(iri("x"), iri("q"), crate::Literal::simple("7")));
        let mut stated = inferred.clone();
        stated.insert(declaration_triple(&Entity::data_property(iri("q"))));

        assert_eq!(run(&PropertyDeclarations, &mut inferred), 2);
        assert_eq!(run(&PropertyDeclarations, &mut stated), 1);
        for graph in [&inferred, &stated] {
            assert!(declared(graph, "p", EntityKind::DataProperty));
            assert!(!declared(graph, "p", EntityKind::ObjectProperty));
        }
        assert_eq!(inferred, stated);
    }

    #[test]
    fn data_evidence_follows_property_chains() {
        let mut graph = Graph::new();
        graph.insert(vocab_triple(iri("p"), rdfs::SUB_PROPERTY_OF, iri("q")));
        graph.insert(vocab_triple(iri("q"), rdfs::SUB_PROPERTY_OF, iri("r")));
        graph.insert(vocab_triple(iri("s"), owl::EQUIVALENT_PROPERTY, iri("p")));
        graph.insert(Triple::new(iri("x"), iri("r"), crate::Literal::simple("7")));
        graph.insert(vocab_triple(iri("t"), rdfs::SUB_PROPERTY_OF, iri("u")));

        assert_eq!(run(&PropertyDeclarations, &mut graph), 6);
        for local in ["p", "q", "r", "s"] {
            assert!(declared(&graph, local, EntityKind::DataProperty), "{local}");
        }
        assert!(declared(&graph, "t", EntityKind::ObjectProperty));
        assert!(declared(&graph, "u", EntityKind::ObjectProperty));
    }

    #[test]
    fn declared_object_neighbour_is_not_data_evidence() {
        let mut graph = Graph::new();
        graph.insert(declaration_triple(&Entity::object_property(iri("q"))));
        graph.insert(vocab_triple(iri("p"), rdfs::SUB_PROPERTY_OF, iri("q")));
        graph.insert(Triple::new(iri("x"), iri("q"), crate::Literal::simple("7")));

        assert_eq!(run(&PropertyDeclarations, &mut graph), 1);
        assert!(declared(&graph, "p", EntityKind::ObjectProperty));
    }

    #[test]
    fn data_range_is_a_datatype_position() {
        let mut graph = Graph::new();
        graph.insert(declaration_triple(&Entity::data_property(iri("p"))));
        graph.insert(declaration_triple(&Entity::object_property(iri("q"))));
        graph.insert(vocab_triple(iri("p"), rdfs::RANGE, iri("Celsius")));
        graph.insert(vocab_triple(iri("q"), rdfs::RANGE, iri("Place")));
        assert_eq!(run(&ClassDeclarations, &mut graph), 2);
        assert!(declared(&graph, "Celsius", EntityKind::Datatype));
        assert!(declared(&graph, "Place", EntityKind::Class));
    }

    #[test]
    fn typed_subject_becomes_individual() {
        let mut graph = Graph::new();
        graph.insert(vocab_triple(iri("rex"), rdf::TYPE, iri("Dog")));
        graph.insert(declaration_triple(&Entity::class(iri("Dog"))));
        assert_eq!(run(&IndividualDeclarations, &mut graph), 1);
        assert!(declared(&graph, "rex", EntityKind::NamedIndividual));
        assert!(!declared(&graph, "Dog", EntityKind::NamedIndividual));
    }

    #[test]
    fn cyclic_list_trips_the_guard() {
        let mut graph = Graph::new();
        let node = Resource::Blank(BlankNode::new("all"));
        let cell = BlankNode::new("cell");
        graph.insert(vocab_triple(
            node.clone(),
            rdf::TYPE,
            Iri::from_vocab(owl::ALL_DISJOINT_CLASSES),
        ));
        graph.insert(vocab_triple(node, owl::MEMBERS, cell.clone()));
        graph.insert(vocab_triple(cell.clone(), rdf::FIRST, iri("A")));
        graph.insert(vocab_triple(cell.clone(), rdf::REST, cell));

        let result = ListIntegrity.apply(&mut graph, &SyncConfig::default());
        assert!(matches!(result, Err(SyncError::RecursionGuard { .. })));
    }
}
