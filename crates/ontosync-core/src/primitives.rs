//! # Engine Primitives
//!
//! Hardcoded safety bounds and format constants for the engine.
//!
//! Every traversal of attacker-controlled graph structure (RDF lists,
//! nested class expressions, annotation reification chains, pipeline
//! rounds) is bounded by one of these constants. Configuration may lower
//! the traversal bounds but the defaults are what a load uses unless told
//! otherwise.

/// Maximum nesting depth of annotations-on-annotations.
///
/// Depth 1 is a plain axiom annotation; each reified sub-annotation
/// adds one level.
pub const MAX_ANNOTATION_DEPTH: usize = 32;

/// Maximum number of cells walked in a single RDF list.
pub const MAX_LIST_LENGTH: usize = 10_000;

/// Maximum nesting depth of anonymous class expressions.
pub const MAX_EXPRESSION_DEPTH: usize = 64;

/// Maximum number of full rounds the normalization pipeline may run.
///
/// Every pass is monotone, so a graph reaches its fixed point in a
/// handful of rounds; hitting this bound means a pass is oscillating.
pub const MAX_PIPELINE_ROUNDS: usize = 16;

/// Magic bytes for the snapshot format header.
pub const MAGIC_BYTES: &[u8; 4] = b"ONTO";

/// Current snapshot format version.
///
/// Increment this when making breaking changes to the serialization format.
pub const FORMAT_VERSION: u8 = 1;

/// Prefix used for blank nodes allocated by the engine.
pub const BLANK_PREFIX: &str = "genid";

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn magic_bytes_correct() {
        assert_eq!(MAGIC_BYTES, b"ONTO");
    }

    #[test]
    fn bounds_are_nonzero() {
        assert!(MAX_ANNOTATION_DEPTH > 1);
        assert!(MAX_LIST_LENGTH > 2);
        assert!(MAX_EXPRESSION_DEPTH > 1);
        assert!(MAX_PIPELINE_ROUNDS > 1);
    }
}
