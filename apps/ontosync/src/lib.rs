//! # ontosync
//!
//! Library half of the ontosync binary: argument parsing, file loading and
//! command implementations, exposed for integration tests.

pub mod cli;
