//! # Graph Transformation Pipeline
//!
//! Rewrites a graph of unknown provenance into the canonical shape the
//! translators expect: lists are well-founded, every entity an axiom
//! mentions carries a declaration.
//!
//! Passes run in precedence order, and the whole sequence repeats until a
//! round changes nothing. The result is a fixed point, so running the
//! pipeline on its own output is a no-op.
//!
//! Every pass only adds declarations, except `self-type-cleanup`, which
//! deletes `x rdf:type x` triples. That pass runs first so no declaration
//! pass ever sees the malformed triple.

use crate::config::SyncConfig;
use crate::primitives::MAX_PIPELINE_ROUNDS;
use crate::{Graph, SyncError};
use std::collections::BTreeMap;
use tracing::{debug, info};

mod passes;

pub use passes::{
    ClassDeclarations, IndividualDeclarations, ListIntegrity, PropertyDeclarations,
    RdfsVocabulary, SelfTypeCleanup,
};

/// One normalization rewrite.
pub trait GraphPass: Send + Sync {
    /// Stable name, used in logs and reports.
    fn name(&self) -> &'static str;

    /// Lower runs earlier within a round.
    fn precedence(&self) -> u32;

    /// Apply the pass once. Returns the number of triples added or removed.
    fn apply(&self, graph: &mut Graph, config: &SyncConfig) -> Result<usize, SyncError>;
}

/// What a pipeline run did.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PipelineReport {
    /// Rounds executed, including the final round that changed nothing.
    pub rounds: usize,
    /// Triples changed per pass, summed over all rounds.
    pub changes: BTreeMap<&'static str, usize>,
}

impl PipelineReport {
    /// Total triples added or removed.
    #[must_use]
    pub fn total_changes(&self) -> usize {
        self.changes.values().copied().fold(0, usize::saturating_add)
    }

    #[must_use]
    pub fn is_noop(&self) -> bool {
        self.total_changes() == 0
    }
}

/// An ordered set of passes.
pub struct Pipeline {
    passes: Vec<Box<dyn GraphPass>>,
}

impl std::fmt::Debug for Pipeline {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list()
            .entries(self.passes.iter().map(|p| p.name()))
            .finish()
    }
}

impl Pipeline {
    /// A pipeline with no passes.
    #[must_use]
    pub fn empty() -> Self {
        Self { passes: Vec::new() }
    }

    /// The standard normalization passes.
    #[must_use]
    pub fn standard() -> Self {
        let mut pipeline = Self::empty();
        pipeline.register(ListIntegrity);
        pipeline.register(SelfTypeCleanup);
        pipeline.register(RdfsVocabulary);
        pipeline.register(PropertyDeclarations);
        pipeline.register(ClassDeclarations);
        pipeline.register(IndividualDeclarations);
        pipeline
    }

    /// Add a pass, keeping passes sorted by precedence.
    ///
    /// Passes with equal precedence keep registration order.
    pub fn register<P: GraphPass + 'static>(&mut self, pass: P) {
        let at = self
            .passes
            .iter()
            .position(|existing| existing.precedence() > pass.precedence())
            .unwrap_or(self.passes.len());
        self.passes.insert(at, Box::new(pass));
    }

    /// Pass names in execution order.
    pub fn pass_names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.passes.iter().map(|p| p.name())
    }

    /// Run every pass until a full round changes nothing.
    ///
    /// A graph that keeps changing after `MAX_PIPELINE_ROUNDS` rounds is
    /// rejected as malformed.
    pub fn run(&self, graph: &mut Graph, config: &SyncConfig) -> Result<PipelineReport, SyncError> {
        let mut report = PipelineReport::default();

        for round in 1..=MAX_PIPELINE_ROUNDS {
            report.rounds = round;
            let mut changed = 0usize;

            for pass in &self.passes {
                let count = pass.apply(graph, config)?;
                if count > 0 {
                    debug!(pass = pass.name(), round, changes = count, "pass applied");
                }
                let entry = report.changes.entry(pass.name()).or_default();
                *entry = entry.saturating_add(count);
                changed = changed.saturating_add(count);
            }

            if changed == 0 {
                info!(
                    rounds = round,
                    changes = report.total_changes(),
                    triples = graph.len(),
                    "pipeline reached fixed point"
                );
                return Ok(report);
            }
        }

        Err(SyncError::MalformedGraph(format!(
            "normalization did not converge within {MAX_PIPELINE_ROUNDS} rounds"
        )))
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::standard()
    }
}

/// Normalize `graph` with the standard passes.
pub fn transform(graph: &mut Graph, config: &SyncConfig) -> Result<PipelineReport, SyncError> {
    Pipeline::standard().run(graph, config)
}
