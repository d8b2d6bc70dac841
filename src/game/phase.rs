//! Turn phases

use crate::core::PlayerId;
use serde::{Deserialize, Serialize};

/// Phases of a Dominion turn, in order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    Start,
    Action,
    Treasure,
    Buy,
    Cleanup,
}

impl Phase {
    /// Get the next phase in turn order
    ///
    /// Cleanup wraps to Start; the player change happens in the cleanup
    /// handler itself.
    pub fn next(&self) -> Phase {
        match self {
            Phase::Start => Phase::Action,
            Phase::Action => Phase::Treasure,
            Phase::Treasure => Phase::Buy,
            Phase::Buy => Phase::Cleanup,
            Phase::Cleanup => Phase::Start,
        }
    }

    /// Can the active player buy cards, Events or Projects in this phase?
    pub fn can_buy(&self) -> bool {
        matches!(self, Phase::Buy)
    }
}

/// Represents the current turn structure
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TurnStructure {
    /// Current round number (starts at 1, increments when play wraps to the first seat)
    pub turn_number: u32,

    /// Current phase
    pub phase: Phase,

    /// Active player (whose turn it is)
    pub active_player: PlayerId,
}

impl TurnStructure {
    pub fn new(starting_player: PlayerId) -> Self {
        TurnStructure {
            turn_number: 1,
            phase: Phase::Start,
            active_player: starting_player,
        }
    }

    /// Advance to the next phase of the same player's turn
    pub fn advance_phase(&mut self) {
        self.phase = self.phase.next();
    }

    /// Hand the turn to `next`, counting a new round when play wraps to seat 0
    pub fn pass_turn(&mut self, next: PlayerId) {
        if next.index() == 0 {
            self.turn_number += 1;
        }
        self.active_player = next;
        self.phase = Phase::Start;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_progression() {
        let mut phase = Phase::Start;
        let mut seen = vec![phase];
        for _ in 0..4 {
            phase = phase.next();
            seen.push(phase);
        }
        assert_eq!(
            seen,
            vec![
                Phase::Start,
                Phase::Action,
                Phase::Treasure,
                Phase::Buy,
                Phase::Cleanup
            ]
        );
        assert_eq!(Phase::Cleanup.next(), Phase::Start);
        assert!(Phase::Buy.can_buy());
        assert!(!Phase::Action.can_buy());
    }

    #[test]
    fn test_pass_turn_wraps_round() {
        let mut turn = TurnStructure::new(PlayerId::new(0));
        turn.advance_phase();
        assert_eq!(turn.phase, Phase::Action);

        turn.pass_turn(PlayerId::new(1));
        assert_eq!(turn.turn_number, 1);
        assert_eq!(turn.phase, Phase::Start);

        turn.pass_turn(PlayerId::new(0));
        assert_eq!(turn.turn_number, 2);
        assert_eq!(turn.active_player, PlayerId::new(0));
    }
}
