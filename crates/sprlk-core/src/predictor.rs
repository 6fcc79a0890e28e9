//! The adaptive opponent.
//!
//! The predictor tallies every gesture the human throws, treats the most
//! thrown one as the human's preference and answers with one of the two
//! gestures that beat it, picked 50/50. Before any history exists it throws a
//! uniformly random gesture.
//!
//! Ties between equally thrown gestures always resolve in the order
//! Scissors, Paper, Rock, Lizard, Spock. A player who knows this and keeps
//! their own count can tell which two gestures the opponent is choosing
//! between, and throw the one gesture that beats both.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::gesture::MoveKind;
use crate::tally::MoveTally;

/// Frequency-based opponent with an injected random source.
#[derive(Debug, Clone)]
pub struct Predictor<R = StdRng> {
    tally: MoveTally,
    rng: R,
}

impl Predictor<StdRng> {
    /// A predictor whose random choices are reproducible from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// A predictor seeded from the operating system.
    pub fn from_os_rng() -> Self {
        Self::new(StdRng::from_os_rng())
    }
}

impl<R: Rng> Predictor<R> {
    /// Create a predictor with an empty tally drawing from `rng`.
    pub fn new(rng: R) -> Self {
        Self {
            tally: MoveTally::new(),
            rng,
        }
    }

    /// The gestures seen so far.
    pub fn tally(&self) -> &MoveTally {
        &self.tally
    }

    /// Record the human's gesture once its round has been resolved.
    pub fn record_human_move(&mut self, gesture: MoveKind) {
        self.tally.record(gesture);
    }

    /// Guess the human's preferred gesture given the number of rounds played
    /// before the one being predicted.
    ///
    /// Returns [`MoveKind::None`] when no round has been played. Otherwise the
    /// most thrown gesture wins, ties broken by [`MoveKind::PLAYABLE`] order.
    pub fn infer_preference(&self, rounds_played: u32) -> MoveKind {
        if rounds_played == 0 {
            return MoveKind::None;
        }
        self.tally.preferred()
    }

    /// Pick the opponent's gesture against `preferred`.
    ///
    /// Without a guess every playable gesture is equally likely; with one,
    /// each of the two gestures that beat it is.
    pub fn choose_counter_move(&mut self, preferred: MoveKind) -> MoveKind {
        let candidates: &[MoveKind] = if preferred.is_playable() {
            preferred.beaten_by()
        } else {
            &MoveKind::PLAYABLE
        };
        candidates[self.rng.random_range(0..candidates.len())]
    }

    /// Infer the preference and choose a counter to it in one step.
    pub fn next_move(&mut self, rounds_played: u32) -> MoveKind {
        let preferred = self.infer_preference(rounds_played);
        let chosen = self.choose_counter_move(preferred);
        log::debug!("predicted preference {preferred}, throwing {chosen}");
        chosen
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use super::*;

    const TRIALS: u32 = 10_000;

    fn frequencies(predictor: &mut Predictor, preferred: MoveKind) -> HashMap<MoveKind, u32> {
        let mut seen = HashMap::new();
        for _ in 0..TRIALS {
            *seen.entry(predictor.choose_counter_move(preferred)).or_insert(0) += 1;
        }
        seen
    }

    #[test]
    fn no_history_no_guess() {
        let mut p = Predictor::seeded(1);
        assert_eq!(p.infer_preference(0), MoveKind::None);
        p.record_human_move(MoveKind::Rock);
        assert_eq!(p.infer_preference(0), MoveKind::None);
    }

    #[test]
    fn single_gesture_history_is_the_preference() {
        for m in MoveKind::PLAYABLE {
            let mut p = Predictor::seeded(7);
            for _ in 0..4 {
                p.record_human_move(m);
            }
            assert_eq!(p.infer_preference(4), m);
        }
    }

    #[test]
    fn mixed_history_uses_max_with_priority() {
        let mut p = Predictor::seeded(7);
        for m in [
            MoveKind::Spock,
            MoveKind::Spock,
            MoveKind::Lizard,
            MoveKind::Lizard,
            MoveKind::Paper,
        ] {
            p.record_human_move(m);
        }
        assert_eq!(p.infer_preference(5), MoveKind::Lizard);
    }

    #[test]
    fn random_first_move_is_uniform() {
        let mut p = Predictor::seeded(42);
        let seen = frequencies(&mut p, MoveKind::None);
        assert_eq!(seen.len(), 5);
        for m in MoveKind::PLAYABLE {
            let n = seen[&m];
            assert!((1750..=2250).contains(&n), "{m}: {n}");
        }
        assert!(!seen.contains_key(&MoveKind::None));
    }

    #[test]
    fn counter_move_is_one_of_two_winners() {
        let mut p = Predictor::seeded(42);
        for preferred in MoveKind::PLAYABLE {
            let seen = frequencies(&mut p, preferred);
            assert_eq!(seen.len(), 2, "{preferred}");
            for (m, n) in &seen {
                assert!(m.beats(preferred), "{m} does not beat {preferred}");
                assert!((4700..=5300).contains(n), "{m}: {n}");
            }
        }
    }

    #[test]
    fn same_seed_same_moves() {
        let mut a = Predictor::seeded(99);
        let mut b = Predictor::seeded(99);
        for round in 0..20 {
            assert_eq!(a.next_move(round), b.next_move(round));
            a.record_human_move(MoveKind::Paper);
            b.record_human_move(MoveKind::Paper);
        }
    }

    #[test]
    fn next_move_counters_preference() {
        let mut p = Predictor::seeded(3);
        for _ in 0..3 {
            p.record_human_move(MoveKind::Scissors);
        }
        for _ in 0..50 {
            let m = p.next_move(3);
            assert!(m == MoveKind::Spock || m == MoveKind::Rock, "{m}");
        }
    }
}
