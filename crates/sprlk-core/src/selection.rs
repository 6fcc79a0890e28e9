//! Turning a frontend's gesture selection into a single move.

use crate::error::{SprlkError, SprlkResult};
use crate::gesture::MoveKind;

/// Reduce the gestures a frontend has selected to the one to play.
///
/// Nothing selected gives [`MoveKind::None`], which the resolver rejects.
/// Selecting the same gesture twice counts once.
pub fn select(selected: &[MoveKind]) -> SprlkResult<MoveKind> {
    let mut chosen: Vec<MoveKind> = Vec::new();
    for &gesture in selected.iter().filter(|m| m.is_playable()) {
        if !chosen.contains(&gesture) {
            chosen.push(gesture);
        }
    }
    match chosen.as_slice() {
        [] => Ok(MoveKind::None),
        [single] => Ok(*single),
        many => Err(SprlkError::AmbiguousSelection(many.len())),
    }
}
