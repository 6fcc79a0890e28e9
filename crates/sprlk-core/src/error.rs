//! Error types for the round engine.

use thiserror::Error;

use crate::gesture::MoveKind;

/// Result type for round engine operations.
pub type SprlkResult<T> = Result<T, SprlkError>;

/// Errors that can occur while playing a session.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SprlkError {
    /// The move cannot be played (only the five real gestures can).
    #[error("invalid move: {0} is not a playable gesture")]
    InvalidMove(MoveKind),

    /// Text that does not name any gesture.
    #[error("unknown move: {0}")]
    UnknownMove(String),

    /// More than one gesture was selected for a single round.
    #[error("ambiguous selection: {0} gestures selected, expected one")]
    AmbiguousSelection(usize),
}
