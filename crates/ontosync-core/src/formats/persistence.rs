//! # Snapshot Format
//!
//! Binary snapshots of a triple graph.
//!
//! File I/O lives in the app layer; this module only maps between a
//! [`Graph`] and bytes.
//!
//! Format: Header (5 bytes) + postcard-serialized triples.
//! - 4 bytes: Magic ("ONTO")
//! - 1 byte: Version
//!
//! The header and payload size are validated before the payload is parsed.

use crate::graph::SerializableGraph;
use crate::{Graph, SyncError, primitives};

/// Maximum allowed snapshot size in bytes.
pub const MAX_SNAPSHOT_PAYLOAD_SIZE: usize = 256 * 1024 * 1024;

const HEADER_LEN: usize = 5;

// =============================================================================
// FILE HEADER
// =============================================================================

/// The snapshot header precedes all graph data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnapshotHeader {
    pub magic: [u8; 4],
    pub version: u8,
}

impl SnapshotHeader {
    /// Create a header for the current format version.
    #[must_use]
    pub fn new() -> Self {
        Self {
            magic: *primitives::MAGIC_BYTES,
            version: primitives::FORMAT_VERSION,
        }
    }

    /// Validate magic bytes and version.
    pub fn validate(&self) -> Result<(), SyncError> {
        if &self.magic != primitives::MAGIC_BYTES {
            return Err(SyncError::DeserializationError(
                "invalid magic bytes".to_string(),
            ));
        }
        if self.version != primitives::FORMAT_VERSION {
            return Err(SyncError::DeserializationError(format!(
                "unsupported snapshot version {} (expected {})",
                self.version,
                primitives::FORMAT_VERSION
            )));
        }
        Ok(())
    }

    /// Write the header to bytes.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; HEADER_LEN] {
        let [m0, m1, m2, m3] = self.magic;
        [m0, m1, m2, m3, self.version]
    }

    /// Read the header from the start of a byte slice.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, SyncError> {
        match bytes {
            [m0, m1, m2, m3, version, ..] => Ok(Self {
                magic: [*m0, *m1, *m2, *m3],
                version: *version,
            }),
            _ => Err(SyncError::DeserializationError(
                "header too short".to_string(),
            )),
        }
    }
}

impl Default for SnapshotHeader {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// SERIALIZATION FUNCTIONS
// =============================================================================

/// Serialize a graph to bytes (header + payload).
pub fn graph_to_bytes(graph: &Graph) -> Result<Vec<u8>, SyncError> {
    let header = SnapshotHeader::new();
    let serializable = SerializableGraph::from(graph);

    let payload = postcard::to_stdvec(&serializable)
        .map_err(|e| SyncError::SerializationError(e.to_string()))?;

    let mut result = Vec::with_capacity(HEADER_LEN.saturating_add(payload.len()));
    result.extend_from_slice(&header.to_bytes());
    result.extend_from_slice(&payload);
    Ok(result)
}

/// Deserialize a graph from bytes.
///
/// Size and header are checked before any payload parsing. IRIs in the
/// payload are re-validated on the way in.
pub fn graph_from_bytes(bytes: &[u8]) -> Result<Graph, SyncError> {
    if bytes.len() > MAX_SNAPSHOT_PAYLOAD_SIZE {
        return Err(SyncError::DeserializationError(format!(
            "snapshot size {} bytes exceeds maximum {} bytes",
            bytes.len(),
            MAX_SNAPSHOT_PAYLOAD_SIZE
        )));
    }

    let header = SnapshotHeader::from_bytes(bytes)?;
    header.validate()?;

    let payload = bytes.get(HEADER_LEN..).unwrap_or_default();
    let serializable: SerializableGraph = postcard::from_bytes(payload).map_err(|e| {
        SyncError::DeserializationError(format!("failed to decode graph data: {e}"))
    })?;

    Ok(Graph::from(serializable))
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{BlankNode, Iri, Literal, Triple};

    fn sample() -> Graph {
        let a = Iri::new("http://example.org/A").expect("iri");
        let p = Iri::new("http://example.org/p").expect("iri");
        let mut graph = Graph::new();
        graph.insert(Triple::new(a.clone(), p.clone(), BlankNode::new("b0")));
        graph.insert(Triple::new(a, p, Literal::lang("hello", "en")));
        graph
    }

    #[test]
    fn header_roundtrip() {
        let header = SnapshotHeader::new();
        let restored = SnapshotHeader::from_bytes(&header.to_bytes()).expect("parse header");
        assert_eq!(header, restored);
    }

    #[test]
    fn bytes_roundtrip_bit_exact() {
        let graph = sample();
        let bytes1 = graph_to_bytes(&graph).expect("first serialize");
        let restored = graph_from_bytes(&bytes1).expect("deserialize");
        let bytes2 = graph_to_bytes(&restored).expect("second serialize");

        assert_eq!(graph, restored);
        assert_eq!(
            bytes1, bytes2,
            "save -> load -> save must produce identical bytes"
        );
    }

    #[test]
    fn invalid_magic_rejected() {
        let mut bytes = vec![0u8; 10];
        bytes[0..4].copy_from_slice(b"XXXX");
        assert!(matches!(
            graph_from_bytes(&bytes),
            Err(SyncError::DeserializationError(_))
        ));
    }

    #[test]
    fn truncated_header_rejected() {
        assert!(graph_from_bytes(b"ONT").is_err());
    }

    #[test]
    fn wrong_version_rejected() {
        let mut bytes = graph_to_bytes(&sample()).expect("serialize");
        bytes[4] = primitives::FORMAT_VERSION.wrapping_add(1);
        assert!(graph_from_bytes(&bytes).is_err());
    }
}
