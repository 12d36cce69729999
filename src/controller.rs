//! Timed round transitions.
//!
//! The controller wraps [`GameState`] and is the only place that knows about
//! delays. It never sleeps or schedules anything itself: a pick returns a
//! [`PendingTransition`] describing the fire-once timer the embedding layer
//! should arm, and [`RoundController::fire`] applies it later. Each pending
//! transition carries the epoch it was scheduled under; commands that move
//! the game to a new round bump the epoch, so a timer from a superseded round
//! fires into a no-op instead of clobbering fresh state.

use rand::Rng;

use crate::game::{Difficulty, GameState, PickOutcome, PickResult};

/// Delay before a correct pick advances to the next round.
pub const CORRECT_ADVANCE_MS: u32 = 550;
/// Delay before an incorrect pick unlocks the board for a retry.
pub const INCORRECT_UNLOCK_MS: u32 = 500;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TransitionKind {
    /// Advance the round counter and deal a new round.
    AdvanceRound,
    /// Unlock the current round for another guess.
    Unlock,
}

/// A fire-once timer the embedding layer should schedule.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PendingTransition {
    pub kind: TransitionKind,
    pub delay_ms: u32,
    pub epoch: u64,
}

/// Orchestrates picks, commands and deferred transitions over a [`GameState`].
pub struct RoundController {
    state: GameState,
    epoch: u64,
}

impl RoundController {
    pub fn new(rng: &mut impl Rng) -> Self {
        Self {
            state: GameState::new(rng),
            epoch: 0,
        }
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Resolves a pick and, when it locked the board, describes the timer
    /// that will move the game on. Ignored picks schedule nothing; the lock
    /// guarantees at most one pending transition is live at a time.
    pub fn pick(&mut self, index: usize) -> (PickResult, Option<PendingTransition>) {
        let result = self.state.resolve_pick(index);
        let pending = match result.outcome {
            PickOutcome::Correct => Some(PendingTransition {
                kind: TransitionKind::AdvanceRound,
                delay_ms: CORRECT_ADVANCE_MS,
                epoch: self.epoch,
            }),
            PickOutcome::Incorrect => Some(PendingTransition {
                kind: TransitionKind::Unlock,
                delay_ms: INCORRECT_UNLOCK_MS,
                epoch: self.epoch,
            }),
            PickOutcome::Ignored => None,
        };
        (result, pending)
    }

    /// Applies a previously scheduled transition. Returns false when the
    /// transition is stale: the round it was armed for is no longer current.
    pub fn fire(&mut self, transition: PendingTransition, rng: &mut impl Rng) -> bool {
        if transition.epoch != self.epoch {
            return false;
        }
        match transition.kind {
            TransitionKind::AdvanceRound => {
                self.epoch += 1;
                self.state.round += 1;
                self.state.new_round(rng);
            }
            TransitionKind::Unlock => {
                self.state.locked = false;
            }
        }
        true
    }

    /// User-triggered re-roll: always allowed, even mid-round or while a
    /// transition is pending. Keeps score and streak, advances the counter.
    pub fn request_new_round(&mut self, rng: &mut impl Rng) {
        self.epoch += 1;
        self.state.round += 1;
        self.state.new_round(rng);
    }

    /// Always allowed; invalidates any pending transition.
    pub fn reset(&mut self, rng: &mut impl Rng) {
        self.epoch += 1;
        self.state.reset_game(rng);
    }

    /// Always allowed; invalidates any pending transition.
    pub fn set_difficulty(&mut self, difficulty: Difficulty, rng: &mut impl Rng) {
        self.epoch += 1;
        self.state.set_difficulty(difficulty, rng);
    }
}
