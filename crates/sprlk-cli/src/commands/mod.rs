pub mod play;
pub mod rules;
pub mod simulate;

use sprlk_core::{MoveKind, SprlkResult, select};

/// Parse a line of gesture names into the single gesture to play.
///
/// Several names on one line count as several selections.
fn parse_selection(input: &str) -> SprlkResult<MoveKind> {
    let selected = input
        .split_whitespace()
        .map(str::parse::<MoveKind>)
        .collect::<SprlkResult<Vec<_>>>()?;
    select(&selected)
}
