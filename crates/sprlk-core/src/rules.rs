//! The rules guide shown to players.

use crate::gesture::MoveKind;

/// Every winning pair in the order the rules are usually recited.
pub const RULES: [(MoveKind, MoveKind); 10] = [
    (MoveKind::Scissors, MoveKind::Paper),
    (MoveKind::Paper, MoveKind::Rock),
    (MoveKind::Rock, MoveKind::Lizard),
    (MoveKind::Lizard, MoveKind::Spock),
    (MoveKind::Spock, MoveKind::Scissors),
    (MoveKind::Scissors, MoveKind::Lizard),
    (MoveKind::Lizard, MoveKind::Paper),
    (MoveKind::Paper, MoveKind::Spock),
    (MoveKind::Spock, MoveKind::Rock),
    (MoveKind::Rock, MoveKind::Scissors),
];

/// Render the rules as a bulleted list.
pub fn rules_guide() -> String {
    let mut out =
        String::from("The basic rules of Scissors-Paper-Rock-Lizard-Spock are as follows:\n");
    for (winner, loser) in RULES {
        let verb = winner.verb_against(loser).unwrap_or("beats");
        out.push_str(&format!("\n- {winner} {verb} {loser}"));
    }
    out
}
