//! Per-gesture counts of what the human has thrown.

use serde::{Deserialize, Serialize};

use crate::gesture::MoveKind;

/// How many times the human has thrown each playable gesture.
///
/// Every recorded round increments exactly one entry, so the entries always
/// sum to the number of rounds recorded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoveTally {
    counts: [u32; 5],
}

impl MoveTally {
    /// Create a tally with every count at zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Count one more throw of `gesture`. The sentinel is ignored.
    pub fn record(&mut self, gesture: MoveKind) {
        if let Some(i) = gesture.index() {
            self.counts[i] += 1;
        }
    }

    /// How many times `gesture` has been thrown.
    pub fn count(&self, gesture: MoveKind) -> u32 {
        gesture.index().map_or(0, |i| self.counts[i])
    }

    /// Total number of throws recorded.
    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }

    /// The most thrown gesture, ties going to the earlier gesture in
    /// [`MoveKind::PLAYABLE`]. [`MoveKind::None`] while the tally is empty.
    pub fn preferred(&self) -> MoveKind {
        let mut best = MoveKind::None;
        let mut best_count = 0;
        for (gesture, count) in self.iter() {
            if count > best_count {
                best = gesture;
                best_count = count;
            }
        }
        best
    }

    /// Iterate over `(gesture, count)` in priority order.
    pub fn iter(&self) -> impl Iterator<Item = (MoveKind, u32)> + '_ {
        MoveKind::PLAYABLE.into_iter().zip(self.counts.iter().copied())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_tally() {
        let t = MoveTally::new();
        assert_eq!(t.total(), 0);
        assert_eq!(t.preferred(), MoveKind::None);
        for m in MoveKind::PLAYABLE {
            assert_eq!(t.count(m), 0);
        }
    }

    #[test]
    fn record_counts_one_entry() {
        let mut t = MoveTally::new();
        t.record(MoveKind::Rock);
        t.record(MoveKind::Rock);
        t.record(MoveKind::Spock);
        assert_eq!(t.count(MoveKind::Rock), 2);
        assert_eq!(t.count(MoveKind::Spock), 1);
        assert_eq!(t.total(), 3);
    }

    #[test]
    fn sentinel_is_ignored() {
        let mut t = MoveTally::new();
        t.record(MoveKind::None);
        assert_eq!(t.total(), 0);
        assert_eq!(t.count(MoveKind::None), 0);
    }

    #[test]
    fn preferred_is_most_thrown() {
        let mut t = MoveTally::new();
        t.record(MoveKind::Paper);
        t.record(MoveKind::Lizard);
        t.record(MoveKind::Lizard);
        assert_eq!(t.preferred(), MoveKind::Lizard);
    }

    #[test]
    fn ties_go_to_priority_order() {
        let mut t = MoveTally::new();
        t.record(MoveKind::Spock);
        t.record(MoveKind::Rock);
        assert_eq!(t.preferred(), MoveKind::Rock);
        t.record(MoveKind::Spock);
        t.record(MoveKind::Paper);
        t.record(MoveKind::Paper);
        // Paper and Spock both at 2; Paper comes first.
        assert_eq!(t.preferred(), MoveKind::Paper);
    }

    #[test]
    fn iter_is_in_priority_order() {
        let mut t = MoveTally::new();
        t.record(MoveKind::Lizard);
        let entries: Vec<_> = t.iter().collect();
        assert_eq!(entries.len(), 5);
        assert_eq!(entries[0], (MoveKind::Scissors, 0));
        assert_eq!(entries[3], (MoveKind::Lizard, 1));
    }
}
