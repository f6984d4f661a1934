//! Property axioms: hierarchy, equivalence, disjointness, inverses,
//! chains, domains and ranges.
//!
//! `rdfs:subPropertyOf`, `rdfs:domain` and `rdfs:range` are shared by
//! object and data properties. The declared kind of the property decides
//! which translator reports a triple, so no triple is read twice.

use super::expression::{read_class_expr, write_class_expr};
use super::list::{walk_list, write_list};
use super::nary::{BulkForm, NaryTranslator};
use super::{
    AxiomTranslator, Emitter, Occurrence, ReadContext, emit_reified, kind_mismatch,
    reified_occurrence, skip_unsupported, sorted, vocab_triple,
};
use crate::model::{Axiom, AxiomBody, AxiomKind, EntityKind};
use crate::vocab::{owl, rdfs};
use crate::{Iri, Resource, SyncError, Term, Triple};
use std::collections::BTreeSet;

fn named_subject(triple: &Triple) -> Result<Iri, SyncError> {
    triple.subject.as_iri().cloned().ok_or_else(|| {
        SyncError::UnsupportedConstruct(format!(
            "anonymous property expression {}",
            triple.subject
        ))
    })
}

fn named_object(triple: &Triple) -> Result<Iri, SyncError> {
    triple.object.as_iri().cloned().ok_or_else(|| {
        SyncError::UnsupportedConstruct(format!(
            "non-IRI object {} of <{}>",
            triple.object,
            triple.predicate.as_str()
        ))
    })
}

/// Read every triple with `predicate` whose subject property has `kind`.
fn read_by_property_kind(
    ctx: &ReadContext<'_>,
    axiom_kind: AxiomKind,
    predicate: &str,
    kind: EntityKind,
    read_one: impl Fn(Iri, Triple) -> Result<Occurrence, SyncError>,
) -> Result<Vec<Occurrence>, SyncError> {
    let mut found = Vec::new();
    for triple in ctx.graph().with_predicate(predicate) {
        let Some(property) = skip_unsupported(axiom_kind, named_subject(&triple))? else {
            continue;
        };
        if ctx.property_kind_or_object(&property)? != kind {
            continue;
        }
        if let Some(occurrence) = skip_unsupported(axiom_kind, read_one(property, triple))? {
            found.push(occurrence);
        }
    }
    Ok(sorted(found))
}

// =============================================================================
// SUB-PROPERTY
// =============================================================================

/// `rdfs:subPropertyOf` between object or between data properties.
#[derive(Debug)]
pub struct SubPropertyTranslator {
    kind: AxiomKind,
    property_kind: EntityKind,
}

pub(crate) static SUB_OBJECT_PROPERTY: SubPropertyTranslator = SubPropertyTranslator {
    kind: AxiomKind::SubObjectPropertyOf,
    property_kind: EntityKind::ObjectProperty,
};

pub(crate) static SUB_DATA_PROPERTY: SubPropertyTranslator = SubPropertyTranslator {
    kind: AxiomKind::SubDataPropertyOf,
    property_kind: EntityKind::DataProperty,
};

impl AxiomTranslator for SubPropertyTranslator {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn predicates(&self) -> &'static [&'static str] {
        &[rdfs::SUB_PROPERTY_OF]
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        read_by_property_kind(
            ctx,
            self.kind,
            rdfs::SUB_PROPERTY_OF,
            self.property_kind,
            |sub, triple| {
                let sup = named_object(&triple)?;
                ctx.resolve(&sup, self.property_kind)?;
                let body = if self.property_kind == EntityKind::DataProperty {
                    AxiomBody::SubDataPropertyOf { sub, sup }
                } else {
                    AxiomBody::SubObjectPropertyOf { sub, sup }
                };
                reified_occurrence(ctx, body, triple, BTreeSet::new())
            },
        )
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let (sub, sup) = match (&axiom.body, self.property_kind) {
            (AxiomBody::SubObjectPropertyOf { sub, sup }, EntityKind::ObjectProperty)
            | (AxiomBody::SubDataPropertyOf { sub, sup }, EntityKind::DataProperty) => (sub, sup),
            _ => return Err(kind_mismatch(self.kind, axiom)),
        };
        emit_reified(
            out,
            vocab_triple(sub.clone(), rdfs::SUB_PROPERTY_OF, sup.clone()),
            axiom,
        )
    }
}

// =============================================================================
// EQUIVALENT / DISJOINT OBJECT PROPERTIES
// =============================================================================

fn equivalent_properties(body: &AxiomBody) -> Option<&BTreeSet<Iri>> {
    match body {
        AxiomBody::EquivalentObjectProperties(members) => Some(members),
        _ => None,
    }
}

fn disjoint_properties(body: &AxiomBody) -> Option<&BTreeSet<Iri>> {
    match body {
        AxiomBody::DisjointObjectProperties(members) => Some(members),
        _ => None,
    }
}

/// `owl:equivalentProperty`; no bulk form.
pub(crate) static EQUIVALENT_OBJECT_PROPERTIES: NaryTranslator<Iri> = NaryTranslator {
    kind: AxiomKind::EquivalentObjectProperties,
    pairwise: owl::EQUIVALENT_PROPERTY,
    bulk: None,
    predicates: &[owl::EQUIVALENT_PROPERTY],
    extract: equivalent_properties,
    build: AxiomBody::EquivalentObjectProperties,
};

/// `owl:propertyDisjointWith` or `owl:AllDisjointProperties`.
pub(crate) static DISJOINT_OBJECT_PROPERTIES: NaryTranslator<Iri> = NaryTranslator {
    kind: AxiomKind::DisjointObjectProperties,
    pairwise: owl::PROPERTY_DISJOINT_WITH,
    bulk: Some(BulkForm {
        marker: owl::ALL_DISJOINT_PROPERTIES,
        members: owl::MEMBERS,
        legacy: None,
    }),
    predicates: &[owl::PROPERTY_DISJOINT_WITH, owl::MEMBERS],
    extract: disjoint_properties,
    build: AxiomBody::DisjointObjectProperties,
};

// =============================================================================
// INVERSES
// =============================================================================

#[derive(Debug)]
pub struct InverseObjectPropertiesTranslator;

impl AxiomTranslator for InverseObjectPropertiesTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::InverseObjectProperties
    }

    fn predicates(&self) -> &'static [&'static str] {
        &[owl::INVERSE_OF]
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        read_by_property_kind(
            ctx,
            self.kind(),
            owl::INVERSE_OF,
            EntityKind::ObjectProperty,
            |first, triple| {
                let second = named_object(&triple)?;
                ctx.resolve(&second, EntityKind::ObjectProperty)?;
                let body = AxiomBody::InverseObjectProperties { first, second };
                reified_occurrence(ctx, body, triple, BTreeSet::new())
            },
        )
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let AxiomBody::InverseObjectProperties { first, second } = &axiom.body else {
            return Err(kind_mismatch(self.kind(), axiom));
        };
        emit_reified(
            out,
            vocab_triple(first.clone(), owl::INVERSE_OF, second.clone()),
            axiom,
        )
    }
}

// =============================================================================
// PROPERTY CHAINS
// =============================================================================

#[derive(Debug)]
pub struct SubPropertyChainTranslator;

impl AxiomTranslator for SubPropertyChainTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::SubPropertyChainOf
    }

    fn predicates(&self) -> &'static [&'static str] {
        &[owl::PROPERTY_CHAIN_AXIOM]
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        read_by_property_kind(
            ctx,
            self.kind(),
            owl::PROPERTY_CHAIN_AXIOM,
            EntityKind::ObjectProperty,
            |sup, triple| {
                let mut defining = BTreeSet::new();
                let items = walk_list(
                    ctx.graph(),
                    &triple.object,
                    ctx.config().max_list_length,
                    &mut defining,
                )?;
                let mut chain = Vec::with_capacity(items.len());
                for item in &items {
                    let Some(link) = item.as_iri() else {
                        return Err(SyncError::UnsupportedConstruct(format!(
                            "anonymous link {item} in property chain of {sup}"
                        )));
                    };
                    ctx.resolve(link, EntityKind::ObjectProperty)?;
                    chain.push(link.clone());
                }
                let body = AxiomBody::SubPropertyChainOf { chain, sup };
                reified_occurrence(ctx, body, triple, defining)
            },
        )
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let AxiomBody::SubPropertyChainOf { chain, sup } = &axiom.body else {
            return Err(kind_mismatch(self.kind(), axiom));
        };
        if chain.len() < 2 {
            return Err(SyncError::UnsupportedConstruct(format!(
                "property chain for {sup} needs at least two links"
            )));
        }
        let inner = chain
            .get(1..chain.len().saturating_sub(1))
            .unwrap_or_default();
        if out.config().is_strict() && inner.contains(sup) {
            return Err(SyncError::UnsupportedConstruct(format!(
                "property chain mentions its super-property {sup} in an inner position"
            )));
        }
        let items: Vec<Term> = chain.iter().cloned().map(Term::from).collect();
        let head = write_list(out, &items);
        emit_reified(
            out,
            vocab_triple(sup.clone(), owl::PROPERTY_CHAIN_AXIOM, head),
            axiom,
        )
    }
}

// =============================================================================
// DOMAINS
// =============================================================================

/// `rdfs:domain` of an object or data property.
#[derive(Debug)]
pub struct DomainTranslator {
    kind: AxiomKind,
    property_kind: EntityKind,
}

pub(crate) static OBJECT_PROPERTY_DOMAIN: DomainTranslator = DomainTranslator {
    kind: AxiomKind::ObjectPropertyDomain,
    property_kind: EntityKind::ObjectProperty,
};

pub(crate) static DATA_PROPERTY_DOMAIN: DomainTranslator = DomainTranslator {
    kind: AxiomKind::DataPropertyDomain,
    property_kind: EntityKind::DataProperty,
};

impl AxiomTranslator for DomainTranslator {
    fn kind(&self) -> AxiomKind {
        self.kind
    }

    fn predicates(&self) -> &'static [&'static str] {
        &[rdfs::DOMAIN]
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        read_by_property_kind(
            ctx,
            self.kind,
            rdfs::DOMAIN,
            self.property_kind,
            |property, triple| {
                let mut defining = BTreeSet::new();
                let domain = read_class_expr(ctx, &triple.object, &mut defining)?;
                let body = if self.property_kind == EntityKind::DataProperty {
                    AxiomBody::DataPropertyDomain { property, domain }
                } else {
                    AxiomBody::ObjectPropertyDomain { property, domain }
                };
                reified_occurrence(ctx, body, triple, defining)
            },
        )
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let (property, domain) = match (&axiom.body, self.property_kind) {
            (AxiomBody::ObjectPropertyDomain { property, domain }, EntityKind::ObjectProperty)
            | (AxiomBody::DataPropertyDomain { property, domain }, EntityKind::DataProperty) => {
                (property, domain)
            }
            _ => return Err(kind_mismatch(self.kind, axiom)),
        };
        let domain = write_class_expr(out, domain)?;
        emit_reified(
            out,
            vocab_triple(property.clone(), rdfs::DOMAIN, domain),
            axiom,
        )
    }
}

// =============================================================================
// RANGES
// =============================================================================

#[derive(Debug)]
pub struct ObjectPropertyRangeTranslator;

impl AxiomTranslator for ObjectPropertyRangeTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::ObjectPropertyRange
    }

    fn predicates(&self) -> &'static [&'static str] {
        &[rdfs::RANGE]
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        read_by_property_kind(
            ctx,
            self.kind(),
            rdfs::RANGE,
            EntityKind::ObjectProperty,
            |property, triple| {
                let mut defining = BTreeSet::new();
                let range = read_class_expr(ctx, &triple.object, &mut defining)?;
                let body = AxiomBody::ObjectPropertyRange { property, range };
                reified_occurrence(ctx, body, triple, defining)
            },
        )
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let AxiomBody::ObjectPropertyRange { property, range } = &axiom.body else {
            return Err(kind_mismatch(self.kind(), axiom));
        };
        let range = write_class_expr(out, range)?;
        emit_reified(out, vocab_triple(property.clone(), rdfs::RANGE, range), axiom)
    }
}

/// `rdfs:range` of a data property; only named datatypes are supported.
#[derive(Debug)]
pub struct DataPropertyRangeTranslator;

impl AxiomTranslator for DataPropertyRangeTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DataPropertyRange
    }

    fn predicates(&self) -> &'static [&'static str] {
        &[rdfs::RANGE]
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        read_by_property_kind(
            ctx,
            self.kind(),
            rdfs::RANGE,
            EntityKind::DataProperty,
            |property, triple| {
                let datatype = named_object(&triple)?;
                ctx.resolve(&datatype, EntityKind::Datatype)?;
                let body = AxiomBody::DataPropertyRange { property, datatype };
                reified_occurrence(ctx, body, triple, BTreeSet::new())
            },
        )
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let AxiomBody::DataPropertyRange { property, datatype } = &axiom.body else {
            return Err(kind_mismatch(self.kind(), axiom));
        };
        emit_reified(
            out,
            vocab_triple(
                Resource::Iri(property.clone()),
                rdfs::RANGE,
                datatype.clone(),
            ),
            axiom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Entity;
    use crate::translate::declaration::declaration_triple;
    use crate::vocab::xsd;
    use crate::{Graph, SyncConfig};

    fn iri(local: &str) -> Iri {
        Iri::new(format!("http://example.org/{local}")).expect("iri")
    }

    #[test]
    fn sub_property_is_split_by_declared_kind() {
        let mut graph = Graph::new();
        graph.insert(vocab_triple(iri("p"), rdfs::SUB_PROPERTY_OF, iri("q")));
        graph.insert(vocab_triple(iri("d"), rdfs::SUB_PROPERTY_OF, iri("e")));
        graph.insert(declaration_triple(&Entity::data_property(iri("d"))));
        graph.insert(declaration_triple(&Entity::data_property(iri("e"))));

        let config = SyncConfig::default();
        let ctx = ReadContext::new(&graph, &config);
        let objects = SUB_OBJECT_PROPERTY.read(&ctx).expect("read");
        let data = SUB_DATA_PROPERTY.read(&ctx).expect("read");

        assert_eq!(objects.len(), 1);
        assert_eq!(data.len(), 1);
        assert!(matches!(
            data[0].axiom.body,
            AxiomBody::SubDataPropertyOf { .. }
        ));
    }

    #[test]
    fn data_range_requires_named_datatype() {
        let mut graph = Graph::new();
        let config = SyncConfig::default();
        graph.insert(declaration_triple(&Entity::data_property(iri("age"))));
        let axiom = Axiom::new(AxiomBody::DataPropertyRange {
            property: iri("age"),
            datatype: Iri::from_vocab(xsd::INTEGER),
        });
        {
            let mut out = Emitter::new(&mut graph, &config);
            DataPropertyRangeTranslator.write(&axiom, &mut out).expect("write");
        }
        let ctx = ReadContext::new(&graph, &config);
        let found = DataPropertyRangeTranslator.read(&ctx).expect("read");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].axiom, axiom);
        assert!(ObjectPropertyRangeTranslator.read(&ctx).expect("read").is_empty());
    }

    #[test]
    fn short_chain_is_unsupported() {
        let mut graph = Graph::new();
        let config = SyncConfig::default();
        let mut out = Emitter::new(&mut graph, &config);
        let axiom = Axiom::new(AxiomBody::SubPropertyChainOf {
            chain: vec![iri("p")],
            sup: iri("q"),
        });
        assert!(matches!(
            SubPropertyChainTranslator.write(&axiom, &mut out),
            Err(SyncError::UnsupportedConstruct(_))
        ));
    }

    #[test]
    fn strict_rejects_inner_self_reference_in_chain() {
        let axiom = Axiom::new(AxiomBody::SubPropertyChainOf {
            chain: vec![iri("a"), iri("q"), iri("b")],
            sup: iri("q"),
        });

        let mut graph = Graph::new();
        let strict = SyncConfig::strict();
        let mut out = Emitter::new(&mut graph, &strict);
        assert!(SubPropertyChainTranslator.write(&axiom, &mut out).is_err());

        let mut graph = Graph::new();
        let lax = SyncConfig::default();
        {
            let mut out = Emitter::new(&mut graph, &lax);
            SubPropertyChainTranslator.write(&axiom, &mut out).expect("lax write");
        }
        let ctx = ReadContext::new(&graph, &lax);
        let found = SubPropertyChainTranslator.read(&ctx).expect("read");
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].axiom, axiom);
    }

    #[test]
    fn recursive_chain_at_the_ends_is_fine_under_strict() {
        let mut graph = Graph::new();
        let strict = SyncConfig::strict();
        let mut out = Emitter::new(&mut graph, &strict);
        let axiom = Axiom::new(AxiomBody::SubPropertyChainOf {
            chain: vec![iri("q"), iri("p")],
            sup: iri("q"),
        });
        assert!(SubPropertyChainTranslator.write(&axiom, &mut out).is_ok());
    }
}
