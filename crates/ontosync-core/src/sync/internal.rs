//! The single-writer synchronized model.
//!
//! Owns the canonical graph and a lazily populated cache of occurrences
//! per axiom kind. Any triple edit drops every cache slot whose pattern
//! space the edit touches; the next query re-reads that slot from the
//! graph.

use crate::annotations;
use crate::config::SyncConfig;
use crate::model::{Annotation, Axiom, AxiomKind};
use crate::pipeline::{self, PipelineReport};
use crate::translate::{
    Emitter, Footprint, Occurrence, ReadContext, declaration_triple, removable, translator,
    vocab_triple,
};
use crate::vocab::{self, owl, rdf};
use crate::{Graph, Iri, Resource, SyncError, Term, Triple};
use std::collections::{BTreeMap, BTreeSet};
use tracing::debug;

/// A cache slot of the model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Slot {
    /// Occurrences of one axiom kind.
    Axioms(AxiomKind),
    /// Annotations on the ontology header.
    Annotations,
    /// `owl:imports` of the ontology header.
    Imports,
}

/// Graph plus derived axiom cache, for callers that serialize access
/// themselves.
#[derive(Debug, Clone)]
pub struct InternalModel {
    graph: Graph,
    config: SyncConfig,
    axioms: BTreeMap<AxiomKind, Vec<Occurrence>>,
    annotations: Option<BTreeSet<Annotation>>,
    imports: Option<BTreeSet<Iri>>,
    report: Option<PipelineReport>,
}

impl InternalModel {
    /// Take ownership of `graph`, normalizing it first when
    /// `config.transform` is set.
    pub fn load(mut graph: Graph, config: SyncConfig) -> Result<Self, SyncError> {
        config.validate()?;
        let report = if config.transform {
            Some(pipeline::transform(&mut graph, &config)?)
        } else {
            None
        };
        Ok(Self::assemble(graph, config, report))
    }

    /// Take ownership of a graph already known to be canonical.
    pub fn raw(graph: Graph, config: SyncConfig) -> Result<Self, SyncError> {
        config.validate()?;
        Ok(Self::assemble(graph, config, None))
    }

    /// An empty ontology.
    pub fn empty(config: SyncConfig) -> Result<Self, SyncError> {
        Self::raw(Graph::new(), config)
    }

    fn assemble(graph: Graph, config: SyncConfig, report: Option<PipelineReport>) -> Self {
        debug!(triples = graph.len(), "model loaded");
        Self {
            graph,
            config,
            axioms: BTreeMap::new(),
            annotations: None,
            imports: None,
            report,
        }
    }

    // =========================================================================
    // ACCESSORS
    // =========================================================================

    #[must_use]
    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Give the graph back, dropping the cache.
    #[must_use]
    pub fn into_graph(self) -> Graph {
        self.graph
    }

    #[must_use]
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// What the load-time pipeline did, if it ran.
    #[must_use]
    pub fn pipeline_report(&self) -> Option<&PipelineReport> {
        self.report.as_ref()
    }

    /// Whether a slot currently holds a cached value.
    #[must_use]
    pub fn is_loaded(&self, slot: Slot) -> bool {
        match slot {
            Slot::Axioms(kind) => self.axioms.contains_key(&kind),
            Slot::Annotations => self.annotations.is_some(),
            Slot::Imports => self.imports.is_some(),
        }
    }

    /// The cached axioms of `kind`, without loading.
    #[must_use]
    pub fn cached_axioms(&self, kind: AxiomKind) -> Option<BTreeSet<Axiom>> {
        self.axioms
            .get(&kind)
            .map(|found| found.iter().map(|o| o.axiom.clone()).collect())
    }

    /// The cached header annotations, without loading.
    #[must_use]
    pub fn cached_annotations(&self) -> Option<BTreeSet<Annotation>> {
        self.annotations.clone()
    }

    /// The cached imports, without loading.
    #[must_use]
    pub fn cached_imports(&self) -> Option<BTreeSet<Iri>> {
        self.imports.clone()
    }

    // =========================================================================
    // AXIOM QUERIES
    // =========================================================================

    /// Every occurrence of `kind`, loading the slot if needed.
    pub fn occurrences(&mut self, kind: AxiomKind) -> Result<&[Occurrence], SyncError> {
        if !self.axioms.contains_key(&kind) {
            let ctx = ReadContext::new(&self.graph, &self.config);
            let found = translator(kind).read(&ctx)?;
            debug!(kind = %kind, occurrences = found.len(), "slot loaded");
            self.axioms.insert(kind, found);
        }
        Ok(self
            .axioms
            .get(&kind)
            .map(Vec::as_slice)
            .unwrap_or_default())
    }

    /// The axioms of `kind`. Structurally equal occurrences collapse.
    pub fn axioms(&mut self, kind: AxiomKind) -> Result<BTreeSet<Axiom>, SyncError> {
        Ok(self
            .occurrences(kind)?
            .iter()
            .map(|o| o.axiom.clone())
            .collect())
    }

    /// Every axiom of every kind.
    pub fn all_axioms(&mut self) -> Result<BTreeSet<Axiom>, SyncError> {
        let mut all = BTreeSet::new();
        for kind in AxiomKind::ALL {
            all.extend(self.axioms(kind)?);
        }
        Ok(all)
    }

    /// Number of distinct axioms across all kinds.
    pub fn axiom_count(&mut self) -> Result<usize, SyncError> {
        Ok(self.all_axioms()?.len())
    }

    pub fn contains(&mut self, axiom: &Axiom) -> Result<bool, SyncError> {
        Ok(self
            .occurrences(axiom.kind())?
            .iter()
            .any(|o| &o.axiom == axiom))
    }

    /// The triples asserting `axiom`, merged over all its occurrences.
    pub fn footprint(&mut self, axiom: &Axiom) -> Result<Option<Footprint>, SyncError> {
        let mut merged: Option<Footprint> = None;
        for occurrence in self.occurrences(axiom.kind())? {
            if &occurrence.axiom != axiom {
                continue;
            }
            let entry = merged.get_or_insert_with(Footprint::default);
            entry
                .defining
                .extend(occurrence.footprint.defining.iter().cloned());
            entry
                .annotations
                .extend(occurrence.footprint.annotations.iter().cloned());
        }
        Ok(merged)
    }

    // =========================================================================
    // AXIOM MUTATION
    // =========================================================================

    /// Write `axiom` into the graph.
    ///
    /// Entities of its signature that the graph does not declare gain a
    /// declaration. Returns `false` if the axiom was already present.
    pub fn add(&mut self, axiom: &Axiom) -> Result<bool, SyncError> {
        if self.contains(axiom)? {
            return Ok(false);
        }
        let signature = axiom.signature();
        if self.config.is_strict() {
            let ctx = ReadContext::new(&self.graph, &self.config);
            for entity in &signature {
                ctx.resolve(&entity.iri, entity.kind)?;
            }
        }

        let inserted = {
            let mut out = Emitter::new(&mut self.graph, &self.config);
            if let Err(err) = translator(axiom.kind()).write(axiom, &mut out) {
                out.rollback();
                return Err(err);
            }
            for entity in &signature {
                let iri = entity.iri.as_str();
                if !vocab::is_builtin_entity(iri) && !vocab::is_reserved(iri) {
                    out.emit(declaration_triple(entity));
                }
            }
            out.into_inserted()
        };

        debug!(kind = %axiom.kind(), triples = inserted.len(), "axiom added");
        self.invalidate(&inserted);
        Ok(!inserted.is_empty())
    }

    /// Delete `axiom` and its annotations.
    ///
    /// Declarations of the entities it mentions stay; they are removed
    /// only by removing the declaration axiom itself. Returns `false` if
    /// the axiom was not present.
    pub fn remove(&mut self, axiom: &Axiom) -> Result<bool, SyncError> {
        let doomed = removable(self.occurrences(axiom.kind())?, axiom, |f| f.iter());
        let removed = self.delete(doomed);
        debug!(kind = %axiom.kind(), triples = removed, "axiom removed");
        Ok(removed > 0)
    }

    /// Strip every annotation from `axiom`, keeping its base triples.
    ///
    /// Returns the unannotated axiom as it now reads from the graph.
    pub fn clear_annotations(&mut self, axiom: &Axiom) -> Result<Axiom, SyncError> {
        let doomed = removable(self.occurrences(axiom.kind())?, axiom, |f| {
            f.annotations.iter()
        });
        let removed = self.delete(doomed);
        debug!(kind = %axiom.kind(), triples = removed, "annotations cleared");
        Ok(axiom.without_annotations())
    }

    // =========================================================================
    // ONTOLOGY HEADER
    // =========================================================================

    /// The ontology header resource, preferring a named one.
    #[must_use]
    pub fn header(&self) -> Option<Resource> {
        self.graph.instances_of(owl::ONTOLOGY).into_iter().next()
    }

    #[must_use]
    pub fn ontology_iri(&self) -> Option<Iri> {
        match self.header()? {
            Resource::Iri(iri) => Some(iri),
            Resource::Blank(_) => None,
        }
    }

    #[must_use]
    pub fn version_iri(&self) -> Option<Iri> {
        let header = self.header()?;
        self.graph
            .objects(&header, owl::VERSION_IRI)
            .into_iter()
            .find_map(|term| term.as_iri().cloned())
    }

    /// Annotations on the ontology header.
    pub fn annotations(&mut self) -> Result<BTreeSet<Annotation>, SyncError> {
        if let Some(cached) = &self.annotations {
            return Ok(cached.clone());
        }
        let found = match self.header() {
            Some(header) => {
                annotations::read_direct(&self.graph, &header, self.config.max_annotation_depth)?
                    .annotations
            }
            None => BTreeSet::new(),
        };
        debug!(annotations = found.len(), "header annotations loaded");
        self.annotations = Some(found.clone());
        Ok(found)
    }

    /// Annotate the ontology, creating an anonymous header if needed.
    pub fn add_annotation(&mut self, annotation: Annotation) -> Result<bool, SyncError> {
        if self.annotations()?.contains(&annotation) {
            return Ok(false);
        }
        let existing = self.header();
        let inserted = {
            let mut out = Emitter::new(&mut self.graph, &self.config);
            let header = header_in(&mut out, existing);
            let single = BTreeSet::from([annotation]);
            if let Err(err) = annotations::write_direct(&mut out, &header, &single) {
                out.rollback();
                return Err(err);
            }
            out.into_inserted()
        };
        self.invalidate(&inserted);
        Ok(!inserted.is_empty())
    }

    /// Remove one ontology annotation together with its sub-annotations.
    pub fn remove_annotation(&mut self, annotation: &Annotation) -> Result<bool, SyncError> {
        if !self.annotations()?.contains(annotation) {
            return Ok(false);
        }
        let Some(header) = self.header() else {
            return Ok(false);
        };
        let direct = Triple::new(header, annotation.property.clone(), annotation.value.to_term());
        let mut doomed =
            annotations::read_nested(&self.graph, &direct, self.config.max_annotation_depth)?
                .triples;
        doomed.insert(direct);
        Ok(self.delete(doomed) > 0)
    }

    /// Ontologies imported by the header.
    pub fn imports(&mut self) -> Result<BTreeSet<Iri>, SyncError> {
        if let Some(cached) = &self.imports {
            return Ok(cached.clone());
        }
        let found: BTreeSet<Iri> = match self.header() {
            Some(header) => self
                .graph
                .objects(&header, owl::IMPORTS)
                .into_iter()
                .filter_map(|term| term.as_iri().cloned())
                .collect(),
            None => BTreeSet::new(),
        };
        self.imports = Some(found.clone());
        Ok(found)
    }

    pub fn add_import(&mut self, iri: Iri) -> Result<bool, SyncError> {
        if self.imports()?.contains(&iri) {
            return Ok(false);
        }
        let existing = self.header();
        let inserted = {
            let mut out = Emitter::new(&mut self.graph, &self.config);
            let header = header_in(&mut out, existing);
            out.emit(vocab_triple(header, owl::IMPORTS, iri));
            out.into_inserted()
        };
        self.invalidate(&inserted);
        Ok(!inserted.is_empty())
    }

    pub fn remove_import(&mut self, iri: &Iri) -> Result<bool, SyncError> {
        let Some(header) = self.header() else {
            return Ok(false);
        };
        let doomed = BTreeSet::from([vocab_triple(header, owl::IMPORTS, iri.clone())]);
        Ok(self.delete(doomed) > 0)
    }

    // =========================================================================
    // DIRECT GRAPH EDITS
    // =========================================================================

    /// Insert raw triples. Returns how many were new.
    pub fn insert_triples(&mut self, triples: impl IntoIterator<Item = Triple>) -> usize {
        let inserted: Vec<Triple> = triples
            .into_iter()
            .filter(|triple| self.graph.insert(triple.clone()))
            .collect();
        self.invalidate(&inserted);
        inserted.len()
    }

    /// Remove raw triples. Returns how many were present.
    pub fn remove_triples(&mut self, triples: impl IntoIterator<Item = Triple>) -> usize {
        self.delete(triples.into_iter().collect())
    }

    fn delete(&mut self, doomed: BTreeSet<Triple>) -> usize {
        let removed: Vec<Triple> = doomed
            .into_iter()
            .filter(|triple| self.graph.remove(triple))
            .collect();
        self.invalidate(&removed);
        removed.len()
    }

    /// Drop every slot whose pattern space one of `changed` touches.
    fn invalidate(&mut self, changed: &[Triple]) {
        if changed.is_empty() {
            return;
        }
        let header = self.header();
        let before = self.axioms.len();
        for triple in changed {
            self.axioms
                .retain(|kind, _| !translator(*kind).touches(triple));
            if touches_header(triple, header.as_ref()) {
                self.annotations = None;
            }
            if triple.predicate.is(owl::IMPORTS) || triple.predicate.is(rdf::TYPE) {
                self.imports = None;
            }
        }
        debug!(
            triples = changed.len(),
            dropped = before.saturating_sub(self.axioms.len()),
            "cache invalidated"
        );
    }
}

/// The header to write to: the existing one, or a fresh anonymous one
/// emitted through `out` so a failed write rolls it back too.
fn header_in(out: &mut Emitter<'_>, existing: Option<Resource>) -> Resource {
    if let Some(header) = existing {
        return header;
    }
    let node = Resource::Blank(out.fresh());
    out.emit(vocab_triple(
        node.clone(),
        rdf::TYPE,
        Term::Iri(Iri::unchecked(owl::ONTOLOGY)),
    ));
    node
}

/// Whether a triple can change what the header annotations read.
///
/// Typing a new ontology node can move the header; reification nodes
/// are blank.
fn touches_header(triple: &Triple, header: Option<&Resource>) -> bool {
    triple.predicate.is(rdf::TYPE)
        || triple.subject.is_blank()
        || header.is_some_and(|h| h == &triple.subject)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AxiomBody, ClassExpr, Entity};
    use crate::vocab::rdfs;
    use crate::{Literal, SyncConfig};

    fn iri(local: &str) -> Iri {
        Iri::new(format!("http://example.org/{local}")).expect("iri")
    }

    fn sub_class(sub: &str, sup: &str) -> Axiom {
        Axiom::new(AxiomBody::SubClassOf {
            sub: ClassExpr::class(iri(sub)),
            sup: ClassExpr::class(iri(sup)),
        })
    }

    fn label(text: &str) -> Annotation {
        Annotation::new(Iri::from_vocab(rdfs::LABEL), Literal::simple(text))
    }

    fn empty() -> InternalModel {
        InternalModel::empty(SyncConfig::default()).expect("model")
    }

    #[test]
    fn add_declares_signature_and_is_idempotent() {
        let mut model = empty();
        let axiom = sub_class("Sub", "Super");
        assert!(model.add(&axiom).expect("add"));
        assert_eq!(model.graph().len(), 3);
        assert!(model.graph().contains(&declaration_triple(&Entity::class(iri("Sub")))));

        assert!(!model.add(&axiom).expect("second add"));
        assert_eq!(model.graph().len(), 3);
        assert_eq!(
            model.axioms(AxiomKind::SubClassOf).expect("read"),
            BTreeSet::from([axiom])
        );
    }

    #[test]
    fn mutations_invalidate_touched_slots_only() {
        let mut model = empty();
        model.add(&sub_class("A", "B")).expect("add");
        model.axioms(AxiomKind::SubClassOf).expect("read");
        model.axioms(AxiomKind::SubObjectPropertyOf).expect("read");
        assert!(model.is_loaded(Slot::Axioms(AxiomKind::SubClassOf)));

        model.add(&sub_class("C", "D")).expect("add");
        assert!(!model.is_loaded(Slot::Axioms(AxiomKind::SubClassOf)));
        assert_eq!(model.cached_axioms(AxiomKind::SubClassOf), None);
        assert_eq!(model.axioms(AxiomKind::SubClassOf).expect("read").len(), 2);
    }

    #[test]
    fn remove_keeps_declarations() {
        let mut model = empty();
        let axiom = sub_class("A", "B");
        model.add(&axiom).expect("add");
        assert!(model.remove(&axiom).expect("remove"));
        assert!(!model.remove(&axiom).expect("second remove"));
        assert!(model.axioms(AxiomKind::SubClassOf).expect("read").is_empty());
        assert_eq!(model.axioms(AxiomKind::Declaration).expect("read").len(), 2);
    }

    #[test]
    fn clear_annotations_keeps_base_triple() {
        let mut model = empty();
        let annotated = sub_class("A", "B").annotated(label("test"));
        model.add(&annotated).expect("add");
        let footprint = model.footprint(&annotated).expect("footprint").expect("present");
        assert_eq!(footprint.defining.len(), 1);
        assert_eq!(footprint.annotations.len(), 5);

        let plain = model.clear_annotations(&annotated).expect("clear");
        assert_eq!(plain, sub_class("A", "B"));
        assert!(model.graph().contains(footprint.defining.iter().next().expect("base")));
        assert_eq!(
            model.axioms(AxiomKind::SubClassOf).expect("read"),
            BTreeSet::from([plain])
        );
    }

    #[test]
    fn header_annotations_and_imports() {
        let mut model = empty();
        assert!(model.header().is_none());
        assert!(model.add_annotation(label("onto")).expect("annotate"));
        assert!(!model.add_annotation(label("onto")).expect("again"));
        assert!(model.header().is_some_and(|h| h.is_blank()));
        assert!(model.ontology_iri().is_none());

        assert!(model.add_import(iri("other")).expect("import"));
        assert_eq!(model.imports().expect("imports"), BTreeSet::from([iri("other")]));
        assert_eq!(
            model.annotations().expect("annotations"),
            BTreeSet::from([label("onto")])
        );

        assert!(model.remove_annotation(&label("onto")).expect("remove"));
        assert!(model.annotations().expect("annotations").is_empty());
        assert!(model.remove_import(&iri("other")).expect("remove import"));
        assert!(model.imports().expect("imports").is_empty());
        // Only the header typing survives.
        assert_eq!(model.graph().len(), 1);
    }

    #[test]
    fn nested_header_annotation_is_removed_whole() {
        let mut model = empty();
        let nested = label("onto").annotated(label("source"));
        model.add_annotation(nested.clone()).expect("annotate");
        assert_eq!(
            model.annotations().expect("annotations"),
            BTreeSet::from([nested.clone()])
        );
        model.remove_annotation(&nested).expect("remove");
        assert_eq!(model.graph().len(), 1);
    }

    #[test]
    fn named_header_supplies_iris() {
        let graph = Graph::from_triples([
            Triple::new(
                iri("onto"),
                Iri::from_vocab(rdf::TYPE),
                Iri::from_vocab(owl::ONTOLOGY),
            ),
            Triple::new(
                iri("onto"),
                Iri::from_vocab(owl::VERSION_IRI),
                iri("onto/1.0"),
            ),
        ]);
        let model = InternalModel::load(graph, SyncConfig::default()).expect("load");
        assert_eq!(model.ontology_iri(), Some(iri("onto")));
        assert_eq!(model.version_iri(), Some(iri("onto/1.0")));
    }

    #[test]
    fn direct_edits_invalidate() {
        let mut model = empty();
        assert!(model.axioms(AxiomKind::SubClassOf).expect("read").is_empty());
        let triple = Triple::new(iri("A"), Iri::from_vocab(rdfs::SUB_CLASS_OF), iri("B"));
        assert_eq!(model.insert_triples([triple.clone()]), 1);
        assert_eq!(model.axioms(AxiomKind::SubClassOf).expect("read").len(), 1);
        assert_eq!(model.remove_triples([triple]), 1);
        assert!(model.axioms(AxiomKind::SubClassOf).expect("read").is_empty());
    }

    #[test]
    fn strict_add_rejects_conflicting_pun() {
        let mut model = InternalModel::empty(SyncConfig::strict()).expect("model");
        model
            .insert_triples([declaration_triple(&Entity::new(
                crate::model::EntityKind::Datatype,
                iri("A"),
            ))]);
        let before = model.graph().clone();
        let result = model.add(&sub_class("A", "B"));
        assert!(matches!(result, Err(SyncError::ConsistencyViolation(_))));
        assert_eq!(model.graph(), &before);
    }

    #[test]
    fn failed_write_rolls_back() {
        let mut model = empty();
        let chain = Axiom::new(AxiomBody::SubPropertyChainOf {
            chain: vec![iri("p")],
            sup: iri("q"),
        });
        assert!(matches!(
            model.add(&chain),
            Err(SyncError::UnsupportedConstruct(_))
        ));
        assert!(model.graph().is_empty());
    }
}
