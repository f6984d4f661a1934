//! # Validation Tier Tests (T0-T5)
//!
//! If ANY tier fails, the engine is INVALID.
//!
//! ## Tiers
//! - T0: Graph Normalization
//! - T1: Axiom Round-Trip
//! - T2: Annotations
//! - T3: Footprint Ownership
//! - T4: Punning Profiles
//! - T5: Shared Mode

use ontosync_core::vocab::{owl, rdf, rdfs, xsd};
use ontosync_core::{
    Annotation, Axiom, AxiomBody, AxiomKind, BlankNode, Characteristic, ClassExpr, Entity,
    EntityKind, Graph, Individual, InternalModel, Iri, Literal, Resource, SyncConfig, SyncError,
    Term, Triple,
};
use std::collections::BTreeSet;

fn iri(local: &str) -> Iri {
    Iri::new(format!("http://example.org/{local}")).expect("iri")
}

fn class(local: &str) -> ClassExpr {
    ClassExpr::class(iri(local))
}

fn named(local: &str) -> Individual {
    Individual::Named(iri(local))
}

fn triple(
    subject: impl Into<Resource>,
    predicate: &'static str,
    object: impl Into<Term>,
) -> Triple {
    Triple::new(subject, Iri::from_vocab(predicate), object)
}

fn sub_class(sub: &str, sup: &str) -> Axiom {
    Axiom::new(AxiomBody::SubClassOf {
        sub: class(sub),
        sup: class(sup),
    })
}

fn label(text: &str) -> Annotation {
    Annotation::new(Iri::from_vocab(rdfs::LABEL), Literal::simple(text))
}

fn empty_model() -> InternalModel {
    InternalModel::empty(SyncConfig::default()).expect("model")
}

/// `_:x rdf:type owl:AllDisjointClasses ; owl:members ( A B ... )`
fn bulk_disjoint(graph: &mut Graph, members: &[&str]) {
    let node = BlankNode::new("bulk");
    graph.insert(triple(node.clone(), rdf::TYPE, Iri::from_vocab(owl::ALL_DISJOINT_CLASSES)));
    graph.insert(triple(node, owl::MEMBERS, BlankNode::new("cell0")));
    for (i, member) in members.iter().enumerate() {
        let cell = BlankNode::new(format!("cell{i}"));
        graph.insert(triple(cell.clone(), rdf::FIRST, iri(member)));
        let rest: Term = if i + 1 == members.len() {
            Iri::from_vocab(rdf::NIL).into()
        } else {
            BlankNode::new(format!("cell{}", i + 1)).into()
        };
        graph.insert(triple(cell, rdf::REST, rest));
    }
}

// =============================================================================
// TIER T0: GRAPH NORMALIZATION
// =============================================================================

mod t0_normalization {
    use super::*;
    use ontosync_core::transform;

    /// T0.1: Transforming twice equals transforming once.
    #[test]
    fn transform_is_idempotent() {
        let mut graph = Graph::new();
        graph.insert(triple(iri("A"), rdfs::SUB_CLASS_OF, iri("B")));
        graph.insert(Triple::new(iri("x"), iri("knows"), iri("y")));
        graph.insert(Triple::new(iri("x"), iri("age"), Literal::simple("7")));
        graph.insert(triple(iri("C"), rdf::TYPE, Iri::from_vocab(rdfs::CLASS)));
        let config = SyncConfig::default();

        transform(&mut graph, &config).expect("first");
        let once = graph.clone();
        let report = transform(&mut graph, &config).expect("second");

        assert!(report.is_noop());
        assert_eq!(graph, once);
    }

    /// T0.2: Untyped entities gain declarations by position.
    #[test]
    fn missing_declarations_are_inferred() {
        let mut graph = Graph::new();
        graph.insert(Triple::new(iri("x"), iri("knows"), iri("y")));
        graph.insert(Triple::new(iri("x"), iri("age"), Literal::simple("7")));
        let model = InternalModel::load(graph, SyncConfig::default()).expect("load");
        let g = model.graph();

        let declared = |local: &str, kind: EntityKind| {
            g.contains(&triple(iri(local), rdf::TYPE, Iri::from_vocab(kind.type_iri())))
        };
        assert!(declared("knows", EntityKind::ObjectProperty));
        assert!(declared("age", EntityKind::DataProperty));
        assert!(declared("x", EntityKind::NamedIndividual));
        assert!(declared("y", EntityKind::NamedIndividual));
    }

    /// T0.3: `x rdf:type x` is provably malformed and dropped.
    #[test]
    fn self_typing_is_removed() {
        let mut graph = Graph::new();
        let malformed = triple(iri("A"), rdf::TYPE, iri("A"));
        graph.insert(malformed.clone());
        transform(&mut graph, &SyncConfig::default()).expect("transform");
        assert!(!graph.contains(&malformed));
    }

    /// T0.4: A cyclic list under a bulk statement is rejected, not walked
    /// forever.
    #[test]
    fn cyclic_bulk_list_is_rejected() {
        let mut graph = Graph::new();
        let node = BlankNode::new("bulk");
        let first = BlankNode::new("l1");
        let second = BlankNode::new("l2");
        graph.insert(triple(node.clone(), rdf::TYPE, Iri::from_vocab(owl::ALL_DISJOINT_CLASSES)));
        graph.insert(triple(node, owl::MEMBERS, first.clone()));
        graph.insert(triple(first.clone(), rdf::FIRST, iri("A")));
        graph.insert(triple(first.clone(), rdf::REST, second.clone()));
        graph.insert(triple(second.clone(), rdf::FIRST, iri("B")));
        graph.insert(triple(second, rdf::REST, first));

        let loaded = InternalModel::load(graph.clone(), SyncConfig::default());
        assert!(matches!(loaded, Err(SyncError::RecursionGuard { .. })));

        let mut raw = InternalModel::raw(graph, SyncConfig::default()).expect("raw");
        let read = raw.axioms(AxiomKind::DisjointClasses);
        assert!(matches!(read, Err(SyncError::RecursionGuard { .. })));
    }

    /// T0.5: Raw mode leaves the graph untouched.
    #[test]
    fn raw_mode_is_passthrough() {
        let mut graph = Graph::new();
        graph.insert(triple(iri("A"), rdfs::SUB_CLASS_OF, iri("B")));
        let config = SyncConfig {
            transform: false,
            ..SyncConfig::default()
        };
        let model = InternalModel::load(graph.clone(), config).expect("load");
        assert_eq!(model.graph(), &graph);
        assert!(model.pipeline_report().is_none());
    }

    /// T0.6: Stating a declaration the pipeline would infer changes nothing.
    #[test]
    fn declared_neighbour_matches_inferred_neighbour() {
        let mut inferred = Graph::new();
        inferred.insert(triple(iri("p"), rdfs::SUB_PROPERTY_OF, iri("q")));
        inferred.insert(Triple::new(iri("x"), iri("q"), Literal::simple("7")));
        let mut declared = inferred.clone();
        declared.insert(triple(iri("q"), rdf::TYPE, Iri::from_vocab(owl::DATATYPE_PROPERTY)));
        let config = SyncConfig::default();

        transform(&mut inferred, &config).expect("inferred");
        transform(&mut declared, &config).expect("declared");

        assert_eq!(inferred, declared);
        let data_p = triple(iri("p"), rdf::TYPE, Iri::from_vocab(owl::DATATYPE_PROPERTY));
        let object_p = triple(iri("p"), rdf::TYPE, Iri::from_vocab(owl::OBJECT_PROPERTY));
        assert!(inferred.contains(&data_p));
        assert!(!inferred.contains(&object_p));
    }
}

// =============================================================================
// TIER T1: AXIOM ROUND-TRIP
// =============================================================================

mod t1_round_trip {
    use super::*;

    fn samples() -> Vec<Axiom> {
        let p = || iri("p");
        let q = || iri("q");
        let d = || iri("d");
        let mut bodies = vec![
            AxiomBody::Declaration(Entity::class(iri("A"))),
            AxiomBody::SubClassOf {
                sub: class("A"),
                sup: ClassExpr::some(p(), class("B")),
            },
            AxiomBody::EquivalentClasses(BTreeSet::from([
                class("A"),
                ClassExpr::IntersectionOf(BTreeSet::from([class("B"), class("C")])),
            ])),
            AxiomBody::DisjointClasses(BTreeSet::from([class("A"), class("B"), class("C")])),
            AxiomBody::DisjointUnion {
                class: iri("A"),
                members: BTreeSet::from([class("B"), class("C")]),
            },
            AxiomBody::SubObjectPropertyOf { sub: p(), sup: q() },
            AxiomBody::SubDataPropertyOf {
                sub: d(),
                sup: iri("e"),
            },
            AxiomBody::EquivalentObjectProperties(BTreeSet::from([p(), q()])),
            AxiomBody::DisjointObjectProperties(BTreeSet::from([p(), q(), iri("r")])),
            AxiomBody::InverseObjectProperties {
                first: p(),
                second: q(),
            },
            AxiomBody::SubPropertyChainOf {
                chain: vec![p(), q()],
                sup: iri("r"),
            },
            AxiomBody::ObjectPropertyDomain {
                property: p(),
                domain: class("A"),
            },
            AxiomBody::ObjectPropertyRange {
                property: p(),
                range: ClassExpr::not(class("A")),
            },
            AxiomBody::DataPropertyDomain {
                property: d(),
                domain: class("A"),
            },
            AxiomBody::DataPropertyRange {
                property: d(),
                datatype: Iri::from_vocab(xsd::STRING),
            },
            AxiomBody::ClassAssertion {
                class: class("A"),
                individual: named("x"),
            },
            AxiomBody::ObjectPropertyAssertion {
                property: p(),
                subject: named("x"),
                object: named("y"),
            },
            AxiomBody::DataPropertyAssertion {
                property: d(),
                subject: named("x"),
                value: Literal::typed("42", Iri::from_vocab(xsd::INTEGER)),
            },
            AxiomBody::SameIndividual(BTreeSet::from([named("x"), named("y")])),
            AxiomBody::DifferentIndividuals(BTreeSet::from([
                named("x"),
                named("y"),
                named("z"),
            ])),
            AxiomBody::AnnotationAssertion {
                property: Iri::from_vocab(rdfs::COMMENT),
                subject: Resource::Iri(iri("A")),
                value: Literal::lang("a thing", "en").into(),
            },
        ];
        bodies.extend(
            [
                Characteristic::Functional,
                Characteristic::InverseFunctional,
                Characteristic::Transitive,
                Characteristic::Symmetric,
                Characteristic::Asymmetric,
                Characteristic::Reflexive,
                Characteristic::Irreflexive,
            ]
            .map(|characteristic| AxiomBody::Characteristic {
                characteristic,
                property: p(),
            }),
        );
        bodies.push(AxiomBody::Characteristic {
            characteristic: Characteristic::FunctionalData,
            property: d(),
        });
        bodies.into_iter().map(Axiom::new).collect()
    }

    /// T1.1: Every kind reads back exactly what was written.
    #[test]
    fn every_kind_round_trips() {
        let axioms = samples();
        let kinds: BTreeSet<AxiomKind> = axioms.iter().map(Axiom::kind).collect();
        assert_eq!(kinds.len(), AxiomKind::ALL.len());

        for axiom in axioms {
            for annotated in [axiom.clone(), axiom.clone().annotated(label("note"))] {
                let mut model = empty_model();
                model.add(&annotated).expect("add");
                assert_eq!(
                    model.axioms(annotated.kind()).expect("read"),
                    BTreeSet::from([annotated.clone()]),
                    "round trip of {}",
                    annotated.kind()
                );
            }
        }
    }

    /// T1.2: A plain subclass axiom adds one defining triple plus the two
    /// missing declarations.
    #[test]
    fn subclass_adds_one_defining_triple() {
        let mut model = empty_model();
        let axiom = sub_class("Sub", "Super");
        model.add(&axiom).expect("add");

        assert_eq!(model.graph().len(), 3);
        let footprint = model.footprint(&axiom).expect("footprint").expect("present");
        assert_eq!(
            footprint.defining,
            BTreeSet::from([triple(iri("Sub"), rdfs::SUB_CLASS_OF, iri("Super"))])
        );
        assert!(footprint.annotations.is_empty());
        assert_eq!(
            model.axioms(AxiomKind::SubClassOf).expect("read"),
            BTreeSet::from([axiom])
        );
    }

    /// T1.3: A three-way disjointness is one bulk statement and reads as
    /// one axiom.
    #[test]
    fn three_way_disjointness_is_one_axiom() {
        let mut model = empty_model();
        let axiom = Axiom::new(AxiomBody::DisjointClasses(BTreeSet::from([
            class("A"),
            class("B"),
            class("C"),
        ])));
        model.add(&axiom).expect("add");

        assert_eq!(
            model
                .graph()
                .instances_of(owl::ALL_DISJOINT_CLASSES)
                .len(),
            1
        );
        assert!(model.graph().with_predicate(owl::DISJOINT_WITH).is_empty());
        assert_eq!(
            model.axioms(AxiomKind::DisjointClasses).expect("read"),
            BTreeSet::from([axiom])
        );
    }

    /// T1.4: Pairwise and bulk encodings of the same pair read identically.
    #[test]
    fn pairwise_and_bulk_read_alike() {
        let mut pairwise = Graph::new();
        pairwise.insert(triple(iri("A"), owl::DISJOINT_WITH, iri("B")));
        let mut bulk = Graph::new();
        bulk_disjoint(&mut bulk, &["A", "B"]);

        let mut left = InternalModel::load(pairwise, SyncConfig::default()).expect("load");
        let mut right = InternalModel::load(bulk.clone(), SyncConfig::default()).expect("load");
        let expected = BTreeSet::from([Axiom::new(AxiomBody::DisjointClasses(BTreeSet::from(
            [class("A"), class("B")],
        )))]);
        assert_eq!(left.axioms(AxiomKind::DisjointClasses).expect("read"), expected);
        assert_eq!(right.axioms(AxiomKind::DisjointClasses).expect("read"), expected);

        // Both encodings at once still collapse to one axiom.
        let mut both = bulk;
        both.insert(triple(iri("A"), owl::DISJOINT_WITH, iri("B")));
        let mut model = InternalModel::load(both, SyncConfig::default()).expect("load");
        assert_eq!(model.axioms(AxiomKind::DisjointClasses).expect("read"), expected);
    }

    /// T1.5: Reading the same graph twice yields the same axioms.
    #[test]
    fn reads_are_deterministic() {
        let mut model = empty_model();
        for axiom in samples() {
            model.add(&axiom).expect("add");
        }
        let graph = model.graph().clone();
        let first = model.all_axioms().expect("all");
        let mut again = InternalModel::raw(graph, SyncConfig::default()).expect("raw");
        assert_eq!(again.all_axioms().expect("all"), first);
    }
}

// =============================================================================
// TIER T2: ANNOTATIONS
// =============================================================================

mod t2_annotations {
    use super::*;

    /// T2.1: Annotating an axiom reifies its base triple; clearing the
    /// annotation removes exactly the reification.
    #[test]
    fn annotation_is_reified_and_cleared() {
        let mut model = empty_model();
        model.add(&sub_class("Sub", "Super")).expect("add");
        let before = model.graph().clone();

        let annotated = sub_class("Sub", "Super").annotated(label("test"));
        model.add(&annotated).expect("annotate");
        let added: Vec<Triple> = model
            .graph()
            .triples()
            .filter(|t| !before.contains(t))
            .collect();
        let annotated_star = added
            .iter()
            .filter(|t| {
                t.predicate.is(owl::ANNOTATED_SOURCE)
                    || t.predicate.is(owl::ANNOTATED_PROPERTY)
                    || t.predicate.is(owl::ANNOTATED_TARGET)
            })
            .count();
        assert_eq!(annotated_star, 3);
        assert_eq!(added.iter().filter(|t| t.predicate.is(rdfs::LABEL)).count(), 1);
        assert_eq!(added.len(), 5);
        assert_eq!(
            model.axioms(AxiomKind::SubClassOf).expect("read"),
            BTreeSet::from([annotated.clone()])
        );

        let plain = model.clear_annotations(&annotated).expect("clear");
        assert_eq!(model.graph(), &before);
        assert_eq!(
            model.axioms(AxiomKind::SubClassOf).expect("read"),
            BTreeSet::from([plain])
        );
    }

    /// T2.2: Annotations on annotations round-trip and clear together.
    #[test]
    fn nested_annotations_round_trip() {
        let mut model = empty_model();
        let nested = label("outer").annotated(label("inner").annotated(label("innermost")));
        let axiom = sub_class("A", "B").annotated(nested);
        model.add(&axiom).expect("add");
        assert_eq!(
            model.axioms(AxiomKind::SubClassOf).expect("read"),
            BTreeSet::from([axiom.clone()])
        );

        model.clear_annotations(&axiom).expect("clear");
        assert_eq!(model.graph().len(), 3);
    }

    /// T2.3: Annotations nested past the configured depth are refused.
    #[test]
    fn annotation_depth_is_bounded() {
        let config = SyncConfig {
            max_annotation_depth: 2,
            ..SyncConfig::default()
        };
        let mut model = InternalModel::empty(config).expect("model");
        let deep = label("1").annotated(label("2").annotated(label("3")));
        let result = model.add(&sub_class("A", "B").annotated(deep));
        assert!(matches!(result, Err(SyncError::RecursionGuard { limit: 2, .. })));
        assert!(model.graph().is_empty());
    }

    /// T2.4: Two reification nodes for one triple merge on read.
    #[test]
    fn split_reifications_merge() {
        let mut graph = Graph::new();
        graph.insert(triple(iri("A"), rdfs::SUB_CLASS_OF, iri("B")));
        for (node, text) in [("r1", "one"), ("r2", "two")] {
            let r = BlankNode::new(node);
            graph.insert(triple(r.clone(), rdf::TYPE, Iri::from_vocab(owl::AXIOM)));
            graph.insert(triple(r.clone(), owl::ANNOTATED_SOURCE, iri("A")));
            graph.insert(triple(
                r.clone(),
                owl::ANNOTATED_PROPERTY,
                Iri::from_vocab(rdfs::SUB_CLASS_OF),
            ));
            graph.insert(triple(r.clone(), owl::ANNOTATED_TARGET, iri("B")));
            graph.insert(triple(r, rdfs::LABEL, Literal::simple(text)));
        }
        let mut model = InternalModel::load(graph, SyncConfig::default()).expect("load");
        let expected = sub_class("A", "B")
            .annotated(label("one"))
            .annotated(label("two"));
        assert_eq!(
            model.axioms(AxiomKind::SubClassOf).expect("read"),
            BTreeSet::from([expected])
        );
    }
}

// =============================================================================
// TIER T3: FOOTPRINT OWNERSHIP
// =============================================================================

mod t3_ownership {
    use super::*;

    /// T3.1: Removing one axiom keeps declarations another axiom needs.
    #[test]
    fn shared_declaration_survives_removal() {
        let mut model = empty_model();
        let first = sub_class("A", "E");
        let second = sub_class("B", "E");
        model.add(&first).expect("add");
        model.add(&second).expect("add");

        model.remove(&first).expect("remove");
        let declaration = triple(iri("E"), rdf::TYPE, Iri::from_vocab(owl::CLASS));
        assert!(model.graph().contains(&declaration));
        assert_eq!(
            model.axioms(AxiomKind::SubClassOf).expect("read"),
            BTreeSet::from([second])
        );
    }

    /// T3.2: Distinct axioms of one kind never share a defining triple.
    #[test]
    fn defining_triples_are_disjoint() {
        let mut model = empty_model();
        let axioms = [
            sub_class("A", "B"),
            sub_class("A", "C"),
            Axiom::new(AxiomBody::SubClassOf {
                sub: class("A"),
                sup: ClassExpr::some(iri("p"), class("B")),
            }),
            Axiom::new(AxiomBody::SubClassOf {
                sub: class("A"),
                sup: ClassExpr::some(iri("p"), class("C")),
            }),
        ];
        for axiom in &axioms {
            model.add(axiom).expect("add");
        }

        let occurrences = model.occurrences(AxiomKind::SubClassOf).expect("read");
        assert_eq!(occurrences.len(), axioms.len());
        let mut seen = BTreeSet::new();
        for occurrence in occurrences {
            for t in &occurrence.footprint.defining {
                assert!(seen.insert(t.clone()), "{t} is defining for two axioms");
            }
        }
    }

    /// T3.3: Removing an axiom with an anonymous expression removes the
    /// expression's triples and nothing else.
    #[test]
    fn remove_takes_anonymous_structure() {
        let mut model = empty_model();
        model.add(&sub_class("A", "B")).expect("add");
        let before = model.graph().clone();

        let complex = Axiom::new(AxiomBody::SubClassOf {
            sub: class("A"),
            sup: ClassExpr::some(iri("p"), class("B")),
        });
        model.add(&complex).expect("add");
        model.remove(&complex).expect("remove");

        let p_declared = triple(iri("p"), rdf::TYPE, Iri::from_vocab(owl::OBJECT_PROPERTY));
        let mut expected = before;
        expected.insert(p_declared);
        assert_eq!(model.graph(), &expected);
    }
}

// =============================================================================
// TIER T4: PUNNING PROFILES
// =============================================================================

mod t4_punning {
    use super::*;

    fn punned_graph() -> Graph {
        let mut graph = Graph::new();
        graph.insert(triple(iri("A"), rdf::TYPE, Iri::from_vocab(owl::CLASS)));
        graph.insert(triple(iri("A"), rdf::TYPE, Iri::from_vocab(rdfs::DATATYPE)));
        graph.insert(triple(iri("x"), rdf::TYPE, Iri::from_vocab(owl::NAMED_INDIVIDUAL)));
        graph.insert(triple(iri("x"), rdf::TYPE, iri("A")));
        graph
    }

    /// T4.1: Lax profile reads the class-typed axiom.
    #[test]
    fn lax_profile_accepts_class_datatype_pun() {
        let mut model = InternalModel::load(punned_graph(), SyncConfig::default()).expect("load");
        let expected = Axiom::new(AxiomBody::ClassAssertion {
            class: class("A"),
            individual: named("x"),
        });
        assert_eq!(
            model.axioms(AxiomKind::ClassAssertion).expect("read"),
            BTreeSet::from([expected])
        );
    }

    /// T4.2: Strict profile rejects the same graph.
    #[test]
    fn strict_profile_rejects_class_datatype_pun() {
        let mut model = InternalModel::load(punned_graph(), SyncConfig::strict()).expect("load");
        let result = model.axioms(AxiomKind::ClassAssertion);
        assert!(matches!(result, Err(SyncError::ConsistencyViolation(_))));
    }

    /// T4.3: Class/individual punning is legal under both profiles.
    #[test]
    fn class_individual_pun_is_legal() {
        let mut graph = Graph::new();
        graph.insert(triple(iri("A"), rdf::TYPE, Iri::from_vocab(owl::CLASS)));
        graph.insert(triple(iri("A"), rdf::TYPE, Iri::from_vocab(owl::NAMED_INDIVIDUAL)));
        graph.insert(triple(iri("A"), rdf::TYPE, iri("Meta")));
        let mut model = InternalModel::load(graph, SyncConfig::strict()).expect("load");
        assert_eq!(model.axioms(AxiomKind::ClassAssertion).expect("read").len(), 1);
    }
}

// =============================================================================
// TIER T5: SHARED MODE
// =============================================================================

mod t5_shared {
    use super::*;
    use ontosync_core::{AxiomStore, ConcurrencyMode, SharedModel, open};
    use std::thread;

    /// T5.1: Readers and writers on clones of one handle see every write.
    #[test]
    fn concurrent_access_is_consistent() {
        let model = SharedModel::new(empty_model());
        let writers: Vec<_> = (0..4)
            .map(|w| {
                let model = model.clone();
                thread::spawn(move || {
                    for i in 0..25 {
                        let axiom = sub_class(&format!("W{w}N{i}"), "Top");
                        model.add(&axiom).expect("add");
                    }
                })
            })
            .collect();
        let readers: Vec<_> = (0..2)
            .map(|_| {
                let model = model.clone();
                thread::spawn(move || {
                    for _ in 0..25 {
                        let found = model.axioms(AxiomKind::SubClassOf).expect("read");
                        assert!(found.len() <= 100);
                    }
                })
            })
            .collect();
        for handle in writers.into_iter().chain(readers) {
            handle.join().expect("thread");
        }
        assert_eq!(model.axioms(AxiomKind::SubClassOf).expect("read").len(), 100);
    }

    /// T5.2: The configured mode is honoured behind the uniform interface.
    #[test]
    fn open_in_shared_mode() {
        let config = SyncConfig {
            mode: ConcurrencyMode::Shared,
            ..SyncConfig::default()
        };
        let mut model = open(Graph::new(), config).expect("open");
        assert!(model.is_shared());
        model.add(&sub_class("A", "B")).expect("add");
        model.add_import(iri("other")).expect("import");
        assert_eq!(model.axioms(AxiomKind::SubClassOf).expect("read").len(), 1);
        assert_eq!(model.imports().expect("imports"), BTreeSet::from([iri("other")]));
    }
}
