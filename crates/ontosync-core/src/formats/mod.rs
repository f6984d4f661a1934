//! # Formats
//!
//! Byte-level encodings of the triple graph.

pub mod persistence;

pub use persistence::{
    MAX_SNAPSHOT_PAYLOAD_SIZE, SnapshotHeader, graph_from_bytes, graph_to_bytes,
};
