//! Class axioms: subclass, equivalence, disjointness, disjoint union.

use super::expression::{read_class_expr, write_class_expr};
use super::list::{walk_list, write_list};
use super::nary::{BulkForm, NaryTranslator};
use super::{
    AxiomTranslator, Emitter, Occurrence, ReadContext, emit_reified, kind_mismatch,
    reified_occurrence, skip_unsupported, sorted, vocab_triple,
};
use crate::model::{Axiom, AxiomBody, AxiomKind, ClassExpr, EntityKind};
use crate::vocab::{owl, rdfs};
use crate::{SyncError, Term, Triple};
use std::collections::BTreeSet;

// =============================================================================
// SUBCLASS
// =============================================================================

#[derive(Debug)]
pub struct SubClassOfTranslator;

impl SubClassOfTranslator {
    fn read_one(&self, ctx: &ReadContext<'_>, triple: Triple) -> Result<Occurrence, SyncError> {
        let mut defining = BTreeSet::new();
        let sub = read_class_expr(ctx, &Term::from(triple.subject.clone()), &mut defining)?;
        let sup = read_class_expr(ctx, &triple.object, &mut defining)?;
        reified_occurrence(ctx, AxiomBody::SubClassOf { sub, sup }, triple, defining)
    }
}

impl AxiomTranslator for SubClassOfTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::SubClassOf
    }

    fn predicates(&self) -> &'static [&'static str] {
        &[rdfs::SUB_CLASS_OF]
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        let mut found = Vec::new();
        for triple in ctx.graph().with_predicate(rdfs::SUB_CLASS_OF) {
            if let Some(occurrence) = skip_unsupported(self.kind(), self.read_one(ctx, triple))? {
                found.push(occurrence);
            }
        }
        Ok(sorted(found))
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let AxiomBody::SubClassOf { sub, sup } = &axiom.body else {
            return Err(kind_mismatch(self.kind(), axiom));
        };
        let sub = write_class_expr(out, sub)?;
        let sup = write_class_expr(out, sup)?;
        emit_reified(out, vocab_triple(sub, rdfs::SUB_CLASS_OF, sup), axiom)
    }
}

// =============================================================================
// EQUIVALENT / DISJOINT CLASSES
// =============================================================================

fn equivalent_classes(body: &AxiomBody) -> Option<&BTreeSet<ClassExpr>> {
    match body {
        AxiomBody::EquivalentClasses(members) => Some(members),
        _ => None,
    }
}

fn disjoint_classes(body: &AxiomBody) -> Option<&BTreeSet<ClassExpr>> {
    match body {
        AxiomBody::DisjointClasses(members) => Some(members),
        _ => None,
    }
}

/// `owl:equivalentClass`; no bulk form.
pub(crate) static EQUIVALENT_CLASSES: NaryTranslator<ClassExpr> = NaryTranslator {
    kind: AxiomKind::EquivalentClasses,
    pairwise: owl::EQUIVALENT_CLASS,
    bulk: None,
    predicates: &[owl::EQUIVALENT_CLASS],
    extract: equivalent_classes,
    build: AxiomBody::EquivalentClasses,
};

/// `owl:disjointWith` or `owl:AllDisjointClasses` + `owl:members`.
pub(crate) static DISJOINT_CLASSES: NaryTranslator<ClassExpr> = NaryTranslator {
    kind: AxiomKind::DisjointClasses,
    pairwise: owl::DISJOINT_WITH,
    bulk: Some(BulkForm {
        marker: owl::ALL_DISJOINT_CLASSES,
        members: owl::MEMBERS,
        legacy: None,
    }),
    predicates: &[owl::DISJOINT_WITH, owl::MEMBERS],
    extract: disjoint_classes,
    build: AxiomBody::DisjointClasses,
};

// =============================================================================
// DISJOINT UNION
// =============================================================================

#[derive(Debug)]
pub struct DisjointUnionTranslator;

impl DisjointUnionTranslator {
    fn read_one(&self, ctx: &ReadContext<'_>, triple: Triple) -> Result<Occurrence, SyncError> {
        let Some(class) = triple.subject.as_iri().cloned() else {
            return Err(SyncError::UnsupportedConstruct(format!(
                "disjoint union on anonymous class {}",
                triple.subject
            )));
        };
        ctx.resolve(&class, EntityKind::Class)?;
        let mut defining = BTreeSet::new();
        let items = walk_list(
            ctx.graph(),
            &triple.object,
            ctx.config().max_list_length,
            &mut defining,
        )?;
        let mut members = BTreeSet::new();
        for item in &items {
            members.insert(read_class_expr(ctx, item, &mut defining)?);
        }
        reified_occurrence(
            ctx,
            AxiomBody::DisjointUnion { class, members },
            triple,
            defining,
        )
    }
}

impl AxiomTranslator for DisjointUnionTranslator {
    fn kind(&self) -> AxiomKind {
        AxiomKind::DisjointUnion
    }

    fn predicates(&self) -> &'static [&'static str] {
        &[owl::DISJOINT_UNION_OF]
    }

    fn read(&self, ctx: &ReadContext<'_>) -> Result<Vec<Occurrence>, SyncError> {
        let mut found = Vec::new();
        for triple in ctx.graph().with_predicate(owl::DISJOINT_UNION_OF) {
            if let Some(occurrence) = skip_unsupported(self.kind(), self.read_one(ctx, triple))? {
                found.push(occurrence);
            }
        }
        Ok(sorted(found))
    }

    fn write(&self, axiom: &Axiom, out: &mut Emitter<'_>) -> Result<(), SyncError> {
        let AxiomBody::DisjointUnion { class, members } = &axiom.body else {
            return Err(kind_mismatch(self.kind(), axiom));
        };
        if members.len() < 2 {
            return Err(SyncError::UnsupportedConstruct(format!(
                "disjoint union of {class} needs at least two members"
            )));
        }
        let items = members
            .iter()
            .map(|member| write_class_expr(out, member).map(Term::from))
            .collect::<Result<Vec<_>, _>>()?;
        let head = write_list(out, &items);
        emit_reified(
            out,
            vocab_triple(class.clone(), owl::DISJOINT_UNION_OF, head),
            axiom,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Graph, Iri, SyncConfig};

    fn class(local: &str) -> ClassExpr {
        ClassExpr::class(Iri::new(format!("http://example.org/{local}")).expect("iri"))
    }

    fn write_then_read(translator: &dyn AxiomTranslator, axiom: &Axiom) -> Vec<Occurrence> {
        let mut graph = Graph::new();
        let config = SyncConfig::default();
        {
            let mut out = Emitter::new(&mut graph, &config);
            translator.write(axiom, &mut out).expect("write");
        }
        let ctx = ReadContext::new(&graph, &config);
        translator.read(&ctx).expect("read")
    }

    #[test]
    fn subclass_with_anonymous_superclass() {
        let axiom = Axiom::new(AxiomBody::SubClassOf {
            sub: class("A"),
            sup: ClassExpr::some(
                Iri::new("http://example.org/p").expect("iri"),
                class("B"),
            ),
        });
        let found = write_then_read(&SubClassOfTranslator, &axiom);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].axiom, axiom);
        // main triple + restriction type, onProperty, someValuesFrom
        assert_eq!(found[0].footprint.defining.len(), 4);
    }

    #[test]
    fn two_disjoint_classes_are_pairwise() {
        let axiom = Axiom::new(AxiomBody::DisjointClasses(BTreeSet::from([
            class("A"),
            class("B"),
        ])));
        let found = write_then_read(&DISJOINT_CLASSES, &axiom);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].footprint.defining.len(), 1);
    }

    #[test]
    fn three_equivalent_classes_are_unsupported() {
        let mut graph = Graph::new();
        let config = SyncConfig::default();
        let mut out = Emitter::new(&mut graph, &config);
        let axiom = Axiom::new(AxiomBody::EquivalentClasses(BTreeSet::from([
            class("A"),
            class("B"),
            class("C"),
        ])));
        assert!(matches!(
            EQUIVALENT_CLASSES.write(&axiom, &mut out),
            Err(SyncError::UnsupportedConstruct(_))
        ));
    }

    #[test]
    fn disjoint_union_roundtrip() {
        let axiom = Axiom::new(AxiomBody::DisjointUnion {
            class: Iri::new("http://example.org/Animal").expect("iri"),
            members: BTreeSet::from([class("Cat"), class("Dog")]),
        });
        let found = write_then_read(&DisjointUnionTranslator, &axiom);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].axiom, axiom);
    }
}
