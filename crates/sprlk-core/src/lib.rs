//! Round engine and adaptive opponent for Scissors-Paper-Rock-Lizard-Spock.
//!
//! The opponent keeps a tally of the moves the human has thrown, treats the
//! most frequent one as the human's preference and answers with one of the
//! two moves that beat it. The resolver applies the outcome matrix, keeps
//! session statistics and feeds each human move back to the opponent.
//!
//! Everything else (windows, prompts, icons) belongs to the caller, which
//! only needs [`RoundResolver::play_round`] and
//! [`RoundResolver::formatted_summary`].

pub mod config;
pub mod error;
pub mod gesture;
pub mod outcome;
pub mod predictor;
pub mod resolver;
pub mod rules;
pub mod selection;
pub mod stats;
pub mod tally;

pub use config::GameConfig;
pub use error::{SprlkError, SprlkResult};
pub use gesture::MoveKind;
pub use outcome::{RoundOutcome, Verdict, judge};
pub use predictor::Predictor;
pub use resolver::RoundResolver;
pub use rules::rules_guide;
pub use selection::select;
pub use stats::SessionStats;
pub use tally::MoveTally;
