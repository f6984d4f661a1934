//! # ontosync-core
//!
//! The synchronization engine for ontosync: keeps an OWL 2 triple graph
//! and its typed axiom model consistent in both directions.
//!
//! ## Data Flow
//!
//! ```text
//! raw graph -> pipeline -> canonical graph -> translators -> axiom cache
//! axiom add/remove -> translator -> triple edits -> cache invalidation
//! ```
//!
//! ## Architectural Constraints
//!
//! The engine:
//! - Has NO async, NO network or file I/O (pure Rust)
//! - Is deterministic: ordered collections only, sorted read results
//! - Bounds every traversal of graph structure with a hard ceiling
//! - Has a closed set of axiom kinds, each bound to one static translator

// =============================================================================
// MODULES
// =============================================================================

pub mod annotations;
pub mod config;
pub mod formats;
pub mod graph;
pub mod model;
pub mod pipeline;
pub mod primitives;
pub mod sync;
pub mod translate;
pub mod types;
pub mod vocab;

// =============================================================================
// RE-EXPORTS: Core Types (from types module)
// =============================================================================

pub use types::{BlankNode, Iri, Literal, Resource, SyncError, Term, Triple};

// =============================================================================
// RE-EXPORTS: Engine
// =============================================================================

pub use config::{ConcurrencyMode, Profile, SyncConfig};
pub use graph::{Graph, SerializableGraph};
pub use model::{
    Annotation, AnnotationValue, Axiom, AxiomBody, AxiomKind, Characteristic, ClassExpr, Entity,
    EntityKind, Individual,
};
pub use pipeline::{GraphPass, Pipeline, PipelineReport, transform};
pub use sync::{AxiomStore, InternalModel, SharedModel, Slot, SyncModel, open};
pub use translate::{AxiomTranslator, Footprint, Occurrence, translator};

// =============================================================================
// RE-EXPORTS: Formats (from formats module)
// =============================================================================

pub use formats::{SnapshotHeader, graph_from_bytes, graph_to_bytes};
