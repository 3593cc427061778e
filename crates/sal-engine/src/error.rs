//! Error types for the aggregation engine.

use thiserror::Error;

/// Contract-violation errors raised by the engine.
///
/// Data-shape problems (empty snapshots, malformed records) never surface
/// here; they degrade to zero values at the fold boundary.
#[derive(Error, Debug)]
pub enum EngineError {
    #[error("invalid level ladder: {0}")]
    InvalidLadder(String),
}

/// Failure reported by a domain snapshot source.
///
/// Absorbed by the fetch fan-in: the failing domain degrades to an empty
/// snapshot and the error is logged, never propagated.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SnapshotError {
    #[error("domain unavailable: {0}")]
    Unavailable(String),

    #[error("snapshot fetch timed out after {0}ms")]
    Timeout(u64),

    #[error("malformed snapshot: {0}")]
    Malformed(String),
}
