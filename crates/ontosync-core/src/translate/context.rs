//! Read-side context: declarations, entity resolution and punning policy.

use crate::config::SyncConfig;
use crate::model::{Entity, EntityKind};
use crate::vocab::{self, owl, rdf};
use crate::{Graph, Iri, Resource, SyncError, Term};
use std::collections::{BTreeMap, BTreeSet};
use tracing::warn;

/// Predicates whose presence marks a blank node as graph structure.
const STRUCTURAL_PREDICATES: &[&str] = &[
    rdf::FIRST,
    owl::INTERSECTION_OF,
    owl::UNION_OF,
    owl::COMPLEMENT_OF,
    owl::ONE_OF,
    owl::ON_PROPERTY,
    owl::ANNOTATED_SOURCE,
    owl::MEMBERS,
    owl::DISTINCT_MEMBERS,
];

/// Whether a resource is structure rather than an individual: a
/// reification, bulk, list, restriction or class-expression node, or the
/// ontology header.
#[must_use]
pub fn is_structural_node(graph: &Graph, resource: &Resource) -> bool {
    let typed_structural = graph.objects(resource, rdf::TYPE).iter().any(|t| {
        t.as_iri().is_some_and(|iri| {
            iri.is(owl::ONTOLOGY)
                || (resource.is_blank()
                    && (vocab::is_structural_type(iri.as_str()) || iri.is(owl::CLASS)))
        })
    });
    if typed_structural {
        return true;
    }
    resource.is_blank()
        && STRUCTURAL_PREDICATES
            .iter()
            .any(|p| !graph.objects(resource, p).is_empty())
}

/// Everything a translator needs to read one graph.
///
/// Declarations are indexed once per read.
#[derive(Debug)]
pub struct ReadContext<'g> {
    graph: &'g Graph,
    config: &'g SyncConfig,
    declared: BTreeMap<Iri, BTreeSet<EntityKind>>,
}

impl<'g> ReadContext<'g> {
    pub fn new(graph: &'g Graph, config: &'g SyncConfig) -> Self {
        let mut declared: BTreeMap<Iri, BTreeSet<EntityKind>> = BTreeMap::new();
        for triple in graph.with_predicate(rdf::TYPE) {
            let (Resource::Iri(subject), Term::Iri(object)) = (&triple.subject, &triple.object)
            else {
                continue;
            };
            if let Some(kind) = EntityKind::from_type_iri(object.as_str()) {
                declared.entry(subject.clone()).or_default().insert(kind);
            }
        }
        Self {
            graph,
            config,
            declared,
        }
    }

    #[must_use]
    pub fn graph(&self) -> &'g Graph {
        self.graph
    }

    #[must_use]
    pub fn config(&self) -> &'g SyncConfig {
        self.config
    }

    /// Kinds the graph declares for an IRI, including built-in kinds.
    #[must_use]
    pub fn declared_kinds(&self, iri: &Iri) -> BTreeSet<EntityKind> {
        let mut kinds = self.declared.get(iri).cloned().unwrap_or_default();
        if let Some(builtin) = builtin_kind(iri.as_str()) {
            kinds.insert(builtin);
        }
        kinds
    }

    /// Resolve an IRI as an entity of the kind its position requires.
    ///
    /// Conflicting declarations are a `ConsistencyViolation` under the
    /// strict profile. Under the lax profile the position's kind wins.
    pub fn resolve(&self, iri: &Iri, kind: EntityKind) -> Result<Entity, SyncError> {
        let conflicts: Vec<EntityKind> = self
            .declared_kinds(iri)
            .into_iter()
            .filter(|other| kind.conflicts_with(*other))
            .collect();
        if !conflicts.is_empty() {
            self.punned(iri, kind, &conflicts)?;
        }
        Ok(Entity::new(kind, iri.clone()))
    }

    /// The kind of a property, or `None` if the graph never declares it.
    ///
    /// Under the lax profile multiple property declarations resolve by
    /// precedence: object, then data, then annotation property.
    pub fn property_kind(&self, iri: &Iri) -> Result<Option<EntityKind>, SyncError> {
        let kinds: Vec<EntityKind> = self
            .declared_kinds(iri)
            .into_iter()
            .filter(|k| k.is_property())
            .collect();
        match kinds.as_slice() {
            [] => Ok(None),
            [only] => Ok(Some(*only)),
            [winner, rest @ ..] => {
                self.punned(iri, *winner, rest)?;
                Ok(Some(*winner))
            }
        }
    }

    /// The kind of a property in a position that defaults to object
    /// properties when the graph is silent.
    pub fn property_kind_or_object(&self, iri: &Iri) -> Result<EntityKind, SyncError> {
        Ok(self
            .property_kind(iri)?
            .unwrap_or(EntityKind::ObjectProperty))
    }

    /// Whether a resource is graph structure rather than an individual.
    #[must_use]
    pub fn is_structural(&self, resource: &Resource) -> bool {
        is_structural_node(self.graph, resource)
    }

    fn punned(&self, iri: &Iri, chosen: EntityKind, others: &[EntityKind]) -> Result<(), SyncError> {
        if self.config.is_strict() {
            return Err(SyncError::ConsistencyViolation(format!(
                "{iri} is used as {chosen} but also declared as {}",
                join_kinds(others)
            )));
        }
        warn!(
            iri = %iri,
            chosen = %chosen,
            also = %join_kinds(others),
            "ambiguous punning resolved by precedence"
        );
        Ok(())
    }
}

fn join_kinds(kinds: &[EntityKind]) -> String {
    kinds
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

fn builtin_kind(iri: &str) -> Option<EntityKind> {
    match iri {
        owl::THING | owl::NOTHING => Some(EntityKind::Class),
        owl::TOP_OBJECT_PROPERTY | owl::BOTTOM_OBJECT_PROPERTY => Some(EntityKind::ObjectProperty),
        owl::TOP_DATA_PROPERTY | owl::BOTTOM_DATA_PROPERTY => Some(EntityKind::DataProperty),
        _ if vocab::is_builtin_datatype(iri) => Some(EntityKind::Datatype),
        _ if vocab::is_builtin_annotation_property(iri) => Some(EntityKind::AnnotationProperty),
        _ => None,
    }
}
