//! The shared synchronized model: one read-write lock per ontology.
//!
//! Queries take the read lock and answer from the cache when the slot is
//! loaded; a miss upgrades to the write lock to populate it. Every
//! mutation runs its triple edit and cache invalidation under one write
//! lock, so other callers never observe a half-applied change.
//!
//! The lock is not reentrant. No method calls back into the model while
//! holding it.

use super::internal::{InternalModel, Slot};
use crate::config::SyncConfig;
use crate::model::{Annotation, Axiom, AxiomKind};
use crate::translate::Footprint;
use crate::{Graph, Iri, SyncError, Triple};
use std::collections::BTreeSet;
use std::sync::{Arc, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// A cloneable handle to a model guarded by a read-write lock.
#[derive(Debug, Clone)]
pub struct SharedModel {
    inner: Arc<RwLock<InternalModel>>,
}

impl SharedModel {
    #[must_use]
    pub fn new(model: InternalModel) -> Self {
        Self {
            inner: Arc::new(RwLock::new(model)),
        }
    }

    /// Load `graph` and share it. The pipeline runs before any other
    /// handle exists.
    pub fn load(graph: Graph, config: SyncConfig) -> Result<Self, SyncError> {
        InternalModel::load(graph, config).map(Self::new)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, InternalModel>, SyncError> {
        self.inner.read().map_err(|_| SyncError::LockPoisoned)
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, InternalModel>, SyncError> {
        self.inner.write().map_err(|_| SyncError::LockPoisoned)
    }

    /// Run `f` against the model under the read lock.
    pub fn with_model<T>(&self, f: impl FnOnce(&InternalModel) -> T) -> Result<T, SyncError> {
        Ok(f(&*self.read()?))
    }

    /// A copy of the current graph.
    pub fn graph_snapshot(&self) -> Result<Graph, SyncError> {
        self.with_model(|model| model.graph().clone())
    }

    pub fn is_loaded(&self, slot: Slot) -> Result<bool, SyncError> {
        self.with_model(|model| model.is_loaded(slot))
    }

    // =========================================================================
    // QUERIES
    // =========================================================================

    pub fn axioms(&self, kind: AxiomKind) -> Result<BTreeSet<Axiom>, SyncError> {
        if let Some(cached) = self.read()?.cached_axioms(kind) {
            return Ok(cached);
        }
        self.write()?.axioms(kind)
    }

    pub fn all_axioms(&self) -> Result<BTreeSet<Axiom>, SyncError> {
        self.write()?.all_axioms()
    }

    pub fn axiom_count(&self) -> Result<usize, SyncError> {
        self.write()?.axiom_count()
    }

    pub fn contains(&self, axiom: &Axiom) -> Result<bool, SyncError> {
        if let Some(cached) = self.read()?.cached_axioms(axiom.kind()) {
            return Ok(cached.contains(axiom));
        }
        self.write()?.contains(axiom)
    }

    pub fn footprint(&self, axiom: &Axiom) -> Result<Option<Footprint>, SyncError> {
        self.write()?.footprint(axiom)
    }

    pub fn annotations(&self) -> Result<BTreeSet<Annotation>, SyncError> {
        if let Some(cached) = self.read()?.cached_annotations() {
            return Ok(cached);
        }
        self.write()?.annotations()
    }

    pub fn imports(&self) -> Result<BTreeSet<Iri>, SyncError> {
        if let Some(cached) = self.read()?.cached_imports() {
            return Ok(cached);
        }
        self.write()?.imports()
    }

    // =========================================================================
    // MUTATIONS
    // =========================================================================

    pub fn add(&self, axiom: &Axiom) -> Result<bool, SyncError> {
        self.write()?.add(axiom)
    }

    pub fn remove(&self, axiom: &Axiom) -> Result<bool, SyncError> {
        self.write()?.remove(axiom)
    }

    pub fn clear_annotations(&self, axiom: &Axiom) -> Result<Axiom, SyncError> {
        self.write()?.clear_annotations(axiom)
    }

    pub fn add_annotation(&self, annotation: Annotation) -> Result<bool, SyncError> {
        self.write()?.add_annotation(annotation)
    }

    pub fn remove_annotation(&self, annotation: &Annotation) -> Result<bool, SyncError> {
        self.write()?.remove_annotation(annotation)
    }

    pub fn add_import(&self, iri: Iri) -> Result<bool, SyncError> {
        self.write()?.add_import(iri)
    }

    pub fn remove_import(&self, iri: &Iri) -> Result<bool, SyncError> {
        self.write()?.remove_import(iri)
    }

    pub fn insert_triples(
        &self,
        triples: impl IntoIterator<Item = Triple>,
    ) -> Result<usize, SyncError> {
        Ok(self.write()?.insert_triples(triples))
    }

    pub fn remove_triples(
        &self,
        triples: impl IntoIterator<Item = Triple>,
    ) -> Result<usize, SyncError> {
        Ok(self.write()?.remove_triples(triples))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AxiomBody, ClassExpr};
    use std::thread;

    fn iri(local: &str) -> Iri {
        Iri::new(format!("http://example.org/{local}")).expect("iri")
    }

    fn sub_class(sub: &str, sup: &str) -> Axiom {
        Axiom::new(AxiomBody::SubClassOf {
            sub: ClassExpr::class(iri(sub)),
            sup: ClassExpr::class(iri(sup)),
        })
    }

    fn shared() -> SharedModel {
        SharedModel::new(InternalModel::empty(SyncConfig::default()).expect("model"))
    }

    #[test]
    fn read_hit_after_load() {
        let model = shared();
        model.add(&sub_class("A", "B")).expect("add");
        assert!(!model.is_loaded(Slot::Axioms(AxiomKind::SubClassOf)).expect("lock"));
        assert_eq!(model.axioms(AxiomKind::SubClassOf).expect("read").len(), 1);
        assert!(model.is_loaded(Slot::Axioms(AxiomKind::SubClassOf)).expect("lock"));
        assert!(model.contains(&sub_class("A", "B")).expect("contains"));
    }

    #[test]
    fn clones_share_one_model() {
        let model = shared();
        let other = model.clone();
        other.add(&sub_class("A", "B")).expect("add");
        assert!(model.contains(&sub_class("A", "B")).expect("contains"));
    }

    #[test]
    fn concurrent_writers_and_readers() {
        let model = shared();
        let handles: Vec<_> = (0..4)
            .map(|worker| {
                let model = model.clone();
                thread::spawn(move || {
                    for step in 0..10 {
                        let axiom = sub_class(&format!("C{worker}_{step}"), "Root");
                        model.add(&axiom).expect("add");
                        assert!(model.contains(&axiom).expect("contains"));
                        model.axioms(AxiomKind::Declaration).expect("read");
                    }
                })
            })
            .collect();
        for handle in handles {
            handle.join().expect("worker");
        }
        assert_eq!(model.axioms(AxiomKind::SubClassOf).expect("read").len(), 40);
    }
}
