//! Error types for the hull pipeline and the compass label helpers.

use thiserror::Error;

use crate::compass::DirectionPair;

/// Precondition violations surfaced by the geometry helpers and the pipeline.
///
/// Degenerate geometry (coincident or collinear points) is not an error: the
/// reducer drops such candidates instead.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum HullError {
    /// An operation that needs at least one point received none.
    #[error("point set is empty")]
    EmptyPointSet,
    /// A two-axis tie-break was requested with an absent component.
    #[error("tie-break needs two directions, got {0:?}")]
    MissingAxis(DirectionPair),
}

/// Failure to parse a compass label such as `"NW"`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseDirectionError {
    #[error("direction label {label:?} must have one or two letters")]
    BadLength { label: String },
    #[error("unknown direction letter {letter:?} in label {label:?}")]
    BadLetter { label: String, letter: char },
}
