//! # Synchronized Model
//!
//! The mutable object the rest of the system talks to: a canonical graph
//! plus a derived cache of axioms per kind, kept consistent as either
//! side changes.
//!
//! ## Cache discipline
//!
//! Each axiom kind is one slot, and the ontology header has two more
//! (annotations and imports). A slot starts unloaded, is loaded by the
//! first query, and is dropped wholesale by any triple edit inside its
//! pattern space. Slots are never patched incrementally.
//!
//! ## Declarations
//!
//! Adding an axiom declares the entities it mentions. Removing an axiom
//! never removes declarations; callers remove dependent axioms first and
//! the `Declaration` axiom last.
//!
//! ## Modes
//!
//! - `SingleWriter`: [`InternalModel`], no locking, the caller serializes
//! - `Shared`: [`SharedModel`], one read-write lock per ontology
//!
//! Both implement [`AxiomStore`].

mod internal;
mod shared;

pub use internal::{InternalModel, Slot};
pub use shared::SharedModel;

use crate::config::{ConcurrencyMode, SyncConfig};
use crate::model::{Annotation, Axiom, AxiomKind};
use crate::{Graph, Iri, SyncError};
use std::collections::BTreeSet;

// =============================================================================
// STORE TRAIT
// =============================================================================

/// The axiom-level interface common to both concurrency modes.
pub trait AxiomStore {
    fn axioms(&mut self, kind: AxiomKind) -> Result<BTreeSet<Axiom>, SyncError>;

    /// Returns `false` if the axiom was already present.
    fn add(&mut self, axiom: &Axiom) -> Result<bool, SyncError>;

    /// Returns `false` if the axiom was not present.
    fn remove(&mut self, axiom: &Axiom) -> Result<bool, SyncError>;

    fn annotations(&mut self) -> Result<BTreeSet<Annotation>, SyncError>;

    fn add_annotation(&mut self, annotation: Annotation) -> Result<bool, SyncError>;

    fn remove_annotation(&mut self, annotation: &Annotation) -> Result<bool, SyncError>;

    fn imports(&mut self) -> Result<BTreeSet<Iri>, SyncError>;

    fn add_import(&mut self, iri: Iri) -> Result<bool, SyncError>;

    fn remove_import(&mut self, iri: &Iri) -> Result<bool, SyncError>;

    /// Every axiom of every kind.
    fn all_axioms(&mut self) -> Result<BTreeSet<Axiom>, SyncError> {
        let mut all = BTreeSet::new();
        for kind in AxiomKind::ALL {
            all.extend(self.axioms(kind)?);
        }
        Ok(all)
    }
}

impl AxiomStore for InternalModel {
    fn axioms(&mut self, kind: AxiomKind) -> Result<BTreeSet<Axiom>, SyncError> {
        InternalModel::axioms(self, kind)
    }

    fn add(&mut self, axiom: &Axiom) -> Result<bool, SyncError> {
        InternalModel::add(self, axiom)
    }

    fn remove(&mut self, axiom: &Axiom) -> Result<bool, SyncError> {
        InternalModel::remove(self, axiom)
    }

    fn annotations(&mut self) -> Result<BTreeSet<Annotation>, SyncError> {
        InternalModel::annotations(self)
    }

    fn add_annotation(&mut self, annotation: Annotation) -> Result<bool, SyncError> {
        InternalModel::add_annotation(self, annotation)
    }

    fn remove_annotation(&mut self, annotation: &Annotation) -> Result<bool, SyncError> {
        InternalModel::remove_annotation(self, annotation)
    }

    fn imports(&mut self) -> Result<BTreeSet<Iri>, SyncError> {
        InternalModel::imports(self)
    }

    fn add_import(&mut self, iri: Iri) -> Result<bool, SyncError> {
        InternalModel::add_import(self, iri)
    }

    fn remove_import(&mut self, iri: &Iri) -> Result<bool, SyncError> {
        InternalModel::remove_import(self, iri)
    }
}

impl AxiomStore for SharedModel {
    fn axioms(&mut self, kind: AxiomKind) -> Result<BTreeSet<Axiom>, SyncError> {
        SharedModel::axioms(self, kind)
    }

    fn add(&mut self, axiom: &Axiom) -> Result<bool, SyncError> {
        SharedModel::add(self, axiom)
    }

    fn remove(&mut self, axiom: &Axiom) -> Result<bool, SyncError> {
        SharedModel::remove(self, axiom)
    }

    fn annotations(&mut self) -> Result<BTreeSet<Annotation>, SyncError> {
        SharedModel::annotations(self)
    }

    fn add_annotation(&mut self, annotation: Annotation) -> Result<bool, SyncError> {
        SharedModel::add_annotation(self, annotation)
    }

    fn remove_annotation(&mut self, annotation: &Annotation) -> Result<bool, SyncError> {
        SharedModel::remove_annotation(self, annotation)
    }

    fn imports(&mut self) -> Result<BTreeSet<Iri>, SyncError> {
        SharedModel::imports(self)
    }

    fn add_import(&mut self, iri: Iri) -> Result<bool, SyncError> {
        SharedModel::add_import(self, iri)
    }

    fn remove_import(&mut self, iri: &Iri) -> Result<bool, SyncError> {
        SharedModel::remove_import(self, iri)
    }
}

// =============================================================================
// MODE SELECTION
// =============================================================================

/// A model in the mode the configuration asked for.
#[derive(Debug)]
pub enum SyncModel {
    /// Caller-serialized access.
    Single(InternalModel),
    /// Lock-guarded access; clone the handle to share it.
    Shared(SharedModel),
}

impl SyncModel {
    #[must_use]
    pub fn is_shared(&self) -> bool {
        matches!(self, Self::Shared(_))
    }

    /// A copy of the current graph.
    pub fn graph_snapshot(&self) -> Result<Graph, SyncError> {
        match self {
            Self::Single(model) => Ok(model.graph().clone()),
            Self::Shared(model) => model.graph_snapshot(),
        }
    }

    fn store(&mut self) -> &mut dyn AxiomStore {
        match self {
            Self::Single(model) => model,
            Self::Shared(model) => model,
        }
    }
}

impl AxiomStore for SyncModel {
    fn axioms(&mut self, kind: AxiomKind) -> Result<BTreeSet<Axiom>, SyncError> {
        self.store().axioms(kind)
    }

    fn add(&mut self, axiom: &Axiom) -> Result<bool, SyncError> {
        self.store().add(axiom)
    }

    fn remove(&mut self, axiom: &Axiom) -> Result<bool, SyncError> {
        self.store().remove(axiom)
    }

    fn annotations(&mut self) -> Result<BTreeSet<Annotation>, SyncError> {
        self.store().annotations()
    }

    fn add_annotation(&mut self, annotation: Annotation) -> Result<bool, SyncError> {
        self.store().add_annotation(annotation)
    }

    fn remove_annotation(&mut self, annotation: &Annotation) -> Result<bool, SyncError> {
        self.store().remove_annotation(annotation)
    }

    fn imports(&mut self) -> Result<BTreeSet<Iri>, SyncError> {
        self.store().imports()
    }

    fn add_import(&mut self, iri: Iri) -> Result<bool, SyncError> {
        self.store().add_import(iri)
    }

    fn remove_import(&mut self, iri: &Iri) -> Result<bool, SyncError> {
        self.store().remove_import(iri)
    }
}

/// Load `graph` into the model `config.mode` selects.
pub fn open(graph: Graph, config: SyncConfig) -> Result<SyncModel, SyncError> {
    let mode = config.mode;
    let model = InternalModel::load(graph, config)?;
    Ok(match mode {
        ConcurrencyMode::SingleWriter => SyncModel::Single(model),
        ConcurrencyMode::Shared => SyncModel::Shared(SharedModel::new(model)),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AxiomBody, Entity};

    fn declaration(local: &str) -> Axiom {
        let iri = Iri::new(format!("http://example.org/{local}")).expect("iri");
        Axiom::new(AxiomBody::Declaration(Entity::class(iri)))
    }

    fn exercise(store: &mut dyn AxiomStore) {
        assert!(store.add(&declaration("A")).expect("add"));
        assert!(!store.add(&declaration("A")).expect("add again"));
        assert_eq!(store.all_axioms().expect("all").len(), 1);
        assert!(store.remove(&declaration("A")).expect("remove"));
        assert!(store.axioms(AxiomKind::Declaration).expect("read").is_empty());
    }

    #[test]
    fn open_honours_mode() {
        let single = open(Graph::new(), SyncConfig::default()).expect("open");
        assert!(!single.is_shared());

        let config = SyncConfig {
            mode: ConcurrencyMode::Shared,
            ..SyncConfig::default()
        };
        let shared = open(Graph::new(), config).expect("open");
        assert!(shared.is_shared());
    }

    #[test]
    fn both_modes_behave_alike() {
        for mode in [ConcurrencyMode::SingleWriter, ConcurrencyMode::Shared] {
            let config = SyncConfig {
                mode,
                ..SyncConfig::default()
            };
            let mut model = open(Graph::new(), config).expect("open");
            exercise(&mut model);
            assert!(model.graph_snapshot().expect("snapshot").is_empty());
        }
    }
}
