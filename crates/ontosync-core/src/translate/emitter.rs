//! Write-side sink: inserts triples and remembers what it inserted.

use crate::config::SyncConfig;
use crate::{BlankNode, Graph, Triple};

/// Inserts triples into a graph on behalf of a translator.
///
/// Tracks the triples that were actually new so a failed write can be
/// rolled back and an idempotent add can be detected.
#[derive(Debug)]
pub struct Emitter<'g> {
    graph: &'g mut Graph,
    config: &'g SyncConfig,
    inserted: Vec<Triple>,
}

impl<'g> Emitter<'g> {
    pub fn new(graph: &'g mut Graph, config: &'g SyncConfig) -> Self {
        Self {
            graph,
            config,
            inserted: Vec::new(),
        }
    }

    /// Insert a triple, returning it for further use.
    pub fn emit(&mut self, triple: Triple) -> Triple {
        if self.graph.insert(triple.clone()) {
            self.inserted.push(triple.clone());
        }
        triple
    }

    /// Allocate a blank node unused anywhere in the graph.
    pub fn fresh(&mut self) -> BlankNode {
        self.graph.fresh_blank()
    }

    #[must_use]
    pub fn graph(&self) -> &Graph {
        &*self.graph
    }

    #[must_use]
    pub fn config(&self) -> &'g SyncConfig {
        self.config
    }

    /// Triples this emitter added that were not already present.
    #[must_use]
    pub fn inserted(&self) -> &[Triple] {
        &self.inserted
    }

    pub fn into_inserted(self) -> Vec<Triple> {
        self.inserted
    }

    /// Undo every insertion made through this emitter.
    pub fn rollback(self) {
        for triple in &self.inserted {
            self.graph.remove(triple);
        }
    }
}
