//! Round orchestration: the commit, choose, reveal state machine.

use crate::crypto::{Commitment, KeyProvider, OsKeyProvider, SecretKey};
use crate::error::GameError;
use crate::rules::{determine_winner, MoveSet, Verdict};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// Phase of a round, for reporting and phase checks.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RoundPhase {
    Init,
    Committed,
    AwaitingChoice,
    Resolved,
    Cancelled,
}

/// Disclosed state of a resolved round.
///
/// The key disclosure lets any observer recompute the commitment and
/// check it against the one published before the human chose.
#[derive(Clone, Debug, Serialize)]
pub struct RoundOutcome {
    pub verdict: Verdict,
    pub player_move: String,
    pub computer_move: String,
    pub key: SecretKey,
}

impl RoundOutcome {
    /// Recompute the commitment from the disclosed key and move.
    pub fn verify(&self, published: &Commitment) -> bool {
        published.verify(&self.key, &self.computer_move)
    }
}

/// Per-phase round data.
///
/// The key and the computer's pick only exist between commit and
/// resolution; the tagged representation makes that window explicit
/// instead of a bundle of `Option`s.
#[derive(Debug)]
enum RoundState {
    Init,
    Committed {
        key: SecretKey,
        pick: usize,
        commitment: Commitment,
    },
    AwaitingChoice {
        key: SecretKey,
        pick: usize,
        commitment: Commitment,
    },
    Resolved {
        outcome: RoundOutcome,
        commitment: Commitment,
    },
    Cancelled,
}

impl RoundState {
    fn phase(&self) -> RoundPhase {
        match self {
            RoundState::Init => RoundPhase::Init,
            RoundState::Committed { .. } => RoundPhase::Committed,
            RoundState::AwaitingChoice { .. } => RoundPhase::AwaitingChoice,
            RoundState::Resolved { .. } => RoundPhase::Resolved,
            RoundState::Cancelled => RoundPhase::Cancelled,
        }
    }
}

/// A single round of the game.
///
/// Owns its MoveSet snapshot and secret key; nothing is shared across
/// rounds. The commitment is computed exactly once, at start.
#[derive(Debug)]
pub struct GameRound {
    moves: MoveSet,
    state: RoundState,
}

impl GameRound {
    pub fn new(moves: MoveSet) -> Self {
        Self {
            moves,
            state: RoundState::Init,
        }
    }

    /// Generate the key, pick the computer's move uniformly, and commit.
    ///
    /// Transitions `Init -> Committed` and returns the commitment to
    /// publish. Starting an already started round is rejected rather
    /// than re-committing.
    pub fn start(&mut self) -> Result<Commitment, GameError> {
        self.start_with(&mut OsKeyProvider, &mut rand::thread_rng())
    }

    /// [`start`](Self::start) with injected key and move randomness.
    pub fn start_with<R: Rng>(
        &mut self,
        keys: &mut dyn KeyProvider,
        rng: &mut R,
    ) -> Result<Commitment, GameError> {
        if !matches!(self.state, RoundState::Init) {
            return Err(self.wrong_phase(RoundPhase::Init));
        }
        let key = keys.generate_key()?;
        let pick = rng.gen_range(0..self.moves.len());
        let commitment = Commitment::new(&key, &self.moves.names()[pick]);
        self.state = RoundState::Committed {
            key,
            pick,
            commitment,
        };
        Ok(commitment)
    }

    /// Mark the round as blocked on the human's selection.
    ///
    /// Transitions `Committed -> AwaitingChoice`.
    pub fn await_choice(&mut self) -> Result<(), GameError> {
        let state = std::mem::replace(&mut self.state, RoundState::Init);
        match state {
            RoundState::Committed {
                key,
                pick,
                commitment,
            } => {
                self.state = RoundState::AwaitingChoice {
                    key,
                    pick,
                    commitment,
                };
                Ok(())
            }
            other => {
                self.state = other;
                Err(self.wrong_phase(RoundPhase::Committed))
            }
        }
    }

    /// Resolve the round against the human's selection.
    ///
    /// A name outside the MoveSet fails with the recoverable
    /// [`GameError::InvalidChoice`] and leaves the round awaiting a new
    /// selection; a valid name transitions to `Resolved` and discloses
    /// the key.
    pub fn play(&mut self, choice: &str) -> Result<RoundOutcome, GameError> {
        let pick = match &self.state {
            RoundState::AwaitingChoice { pick, .. } => *pick,
            _ => return Err(self.wrong_phase(RoundPhase::AwaitingChoice)),
        };

        let player_move = match self.moves.index_of(choice) {
            Some(index) => self.moves.names()[index].clone(),
            None => return Err(GameError::InvalidChoice(choice.to_string())),
        };

        // Resolve the verdict before dismantling the state, so no error
        // path can leave the round part-way torn down.
        let computer_move = self.moves.names()[pick].clone();
        let verdict = determine_winner(&self.moves, &player_move, &computer_move)?;

        let state = std::mem::replace(&mut self.state, RoundState::Cancelled);
        let (key, commitment) = match state {
            RoundState::AwaitingChoice {
                key, commitment, ..
            } => (key, commitment),
            other => {
                self.state = other;
                return Err(self.wrong_phase(RoundPhase::AwaitingChoice));
            }
        };

        let outcome = RoundOutcome {
            verdict,
            player_move,
            computer_move,
            key,
        };
        self.state = RoundState::Resolved {
            outcome: outcome.clone(),
            commitment,
        };
        Ok(outcome)
    }

    /// Abandon the round without a verdict.
    ///
    /// Transitions `Committed | AwaitingChoice -> Cancelled`; the key is
    /// never disclosed on this path.
    pub fn cancel(&mut self) -> Result<(), GameError> {
        match self.state {
            RoundState::Committed { .. } | RoundState::AwaitingChoice { .. } => {
                self.state = RoundState::Cancelled;
                Ok(())
            }
            _ => Err(self.wrong_phase(RoundPhase::AwaitingChoice)),
        }
    }

    pub fn phase(&self) -> RoundPhase {
        self.state.phase()
    }

    /// The published commitment, available from `Committed` onwards.
    pub fn commitment(&self) -> Option<&Commitment> {
        match &self.state {
            RoundState::Committed { commitment, .. }
            | RoundState::AwaitingChoice { commitment, .. }
            | RoundState::Resolved { commitment, .. } => Some(commitment),
            _ => None,
        }
    }

    /// The reveal, once resolved.
    pub fn outcome(&self) -> Option<&RoundOutcome> {
        match &self.state {
            RoundState::Resolved { outcome, .. } => Some(outcome),
            _ => None,
        }
    }

    pub fn moves(&self) -> &MoveSet {
        &self.moves
    }

    fn wrong_phase(&self, expected: RoundPhase) -> GameError {
        GameError::WrongPhase {
            expected,
            actual: self.phase(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn move_set() -> MoveSet {
        MoveSet::new(vec![
            "Rock".to_string(),
            "Paper".to_string(),
            "Scissors".to_string(),
        ])
        .unwrap()
    }

    #[test]
    fn test_phases_in_order() {
        let mut round = GameRound::new(move_set());
        assert_eq!(round.phase(), RoundPhase::Init);
        round.start().unwrap();
        assert_eq!(round.phase(), RoundPhase::Committed);
        round.await_choice().unwrap();
        assert_eq!(round.phase(), RoundPhase::AwaitingChoice);
        round.play("Rock").unwrap();
        assert_eq!(round.phase(), RoundPhase::Resolved);
    }

    #[test]
    fn test_start_twice_rejected() {
        let mut round = GameRound::new(move_set());
        let first = round.start().unwrap();
        assert!(matches!(
            round.start(),
            Err(GameError::WrongPhase { .. })
        ));
        // The published commitment is unchanged.
        assert_eq!(round.commitment(), Some(&first));
    }

    #[test]
    fn test_play_before_awaiting_rejected() {
        let mut round = GameRound::new(move_set());
        assert!(matches!(
            round.play("Rock"),
            Err(GameError::WrongPhase { .. })
        ));
        round.start().unwrap();
        assert!(matches!(
            round.play("Rock"),
            Err(GameError::WrongPhase { .. })
        ));
    }

    #[test]
    fn test_await_choice_requires_committed() {
        let mut round = GameRound::new(move_set());
        assert!(matches!(
            round.await_choice(),
            Err(GameError::WrongPhase { .. })
        ));
        assert_eq!(round.phase(), RoundPhase::Init);

        round.start().unwrap();
        round.await_choice().unwrap();
        round.play("Rock").unwrap();
        assert!(matches!(
            round.await_choice(),
            Err(GameError::WrongPhase { .. })
        ));
        assert_eq!(round.phase(), RoundPhase::Resolved);
    }

    #[test]
    fn test_failed_play_leaves_phase_untouched() {
        // A rejected selection, from any phase, must never reset the
        // round or drop its commitment.
        let mut round = GameRound::new(move_set());
        round.play("Rock").unwrap_err();
        assert_eq!(round.phase(), RoundPhase::Init);

        let commitment = round.start().unwrap();
        round.play("Rock").unwrap_err();
        assert_eq!(round.phase(), RoundPhase::Committed);

        round.await_choice().unwrap();
        round.play("Lizard").unwrap_err();
        assert_eq!(round.phase(), RoundPhase::AwaitingChoice);
        assert_eq!(round.commitment(), Some(&commitment));
    }

    #[test]
    fn test_invalid_choice_is_recoverable() {
        let mut round = GameRound::new(move_set());
        let commitment = round.start().unwrap();
        round.await_choice().unwrap();

        let err = round.play("Lizard").unwrap_err();
        assert!(err.is_recoverable());
        assert_eq!(round.phase(), RoundPhase::AwaitingChoice);
        assert_eq!(round.commitment(), Some(&commitment));

        // The round still resolves afterwards.
        let outcome = round.play("Paper").unwrap();
        assert_eq!(outcome.player_move, "Paper");
        assert!(outcome.verify(&commitment));
    }

    #[test]
    fn test_cancel_is_terminal() {
        let mut round = GameRound::new(move_set());
        round.start().unwrap();
        round.await_choice().unwrap();
        round.cancel().unwrap();
        assert_eq!(round.phase(), RoundPhase::Cancelled);
        assert!(round.outcome().is_none());
        assert!(matches!(
            round.play("Rock"),
            Err(GameError::WrongPhase { .. })
        ));
        assert!(matches!(round.cancel(), Err(GameError::WrongPhase { .. })));
    }

    #[test]
    fn test_reveal_matches_commitment() {
        let mut round = GameRound::new(move_set());
        let commitment = round.start().unwrap();
        round.await_choice().unwrap();
        let outcome = round.play("Scissors").unwrap();
        assert!(outcome.verify(&commitment));
        assert_eq!(
            Commitment::new(&outcome.key, &outcome.computer_move),
            commitment
        );
    }

    #[test]
    fn test_computer_pick_is_from_move_set() {
        for _ in 0..20 {
            let mut round = GameRound::new(move_set());
            round.start().unwrap();
            round.await_choice().unwrap();
            let outcome = round.play("Rock").unwrap();
            assert!(round.moves().index_of(&outcome.computer_move).is_some());
        }
    }
}
