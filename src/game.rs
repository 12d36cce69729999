//! Game state and pick resolution.
//!
//! All mutation funnels through the methods here; the wasm layer and the
//! round controller never poke fields directly from the outside. The state is
//! plain data so native tests can drive it with a seeded RNG.

use rand::Rng;
use serde::Serialize;

use crate::round::{Round, build_round};

/// Points for a correct pick before the streak bonus.
pub const BASE_POINTS: u32 = 10;
/// The streak bonus never exceeds this many extra points.
pub const STREAK_BONUS_CAP: u32 = 10;

const PROMPT_MESSAGE: &str = "Pick the exact match.";

/// How close decoys sit to the target. Smaller spread means decoys are more
/// similar to the target and the round is harder.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Decoy jitter radius for this difficulty.
    pub fn spread(self) -> i32 {
        match self {
            Difficulty::Easy => 90,
            Difficulty::Medium => 45,
            Difficulty::Hard => 22,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "easy" => Some(Difficulty::Easy),
            "medium" => Some(Difficulty::Medium),
            "hard" => Some(Difficulty::Hard),
            _ => None,
        }
    }
}

/// Styling channel for the message line ("good" turns it green, "bad" red).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageKind {
    Neutral,
    Good,
    Bad,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PickOutcome {
    Correct,
    Incorrect,
    /// The pick was dropped: board locked or index out of range. Nothing
    /// changed; the caller may log it but must not surface it to the player.
    Ignored,
}

/// Feedback handed to the frontend after every pick.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PickResult {
    pub outcome: PickOutcome,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub points_awarded: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub correct_hex: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub picked_hex: Option<String>,
}

impl PickResult {
    pub fn ignored() -> Self {
        Self {
            outcome: PickOutcome::Ignored,
            points_awarded: None,
            correct_hex: None,
            picked_hex: None,
        }
    }
}

/// Snapshot of everything the frontend renders. Tile colors are exposed as
/// ordered hex strings only; which one is correct stays server-side of the
/// boundary.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BoardView {
    pub target_hex: String,
    pub tiles: Vec<String>,
    pub score: u32,
    pub streak: u32,
    pub round: u32,
    pub locked: bool,
    pub difficulty: Difficulty,
    pub message: String,
    pub message_kind: MessageKind,
}

/// Full mutable game state. `current` is replaced wholesale each round; the
/// counters persist across rounds and reset only on [`GameState::reset_game`].
#[derive(Clone, Debug)]
pub struct GameState {
    pub difficulty: Difficulty,
    pub score: u32,
    pub streak: u32,
    pub round: u32,
    pub locked: bool,
    pub message: String,
    pub message_kind: MessageKind,
    pub current: Round,
}

impl GameState {
    pub fn new(rng: &mut impl Rng) -> Self {
        let difficulty = Difficulty::default();
        Self {
            difficulty,
            score: 0,
            streak: 0,
            round: 1,
            locked: false,
            message: PROMPT_MESSAGE.to_string(),
            message_kind: MessageKind::Neutral,
            current: build_round(difficulty, rng),
        }
    }

    fn set_message(&mut self, message: impl Into<String>, kind: MessageKind) {
        self.message = message.into();
        self.message_kind = kind;
    }

    /// Installs a fresh round at the current difficulty and unlocks the
    /// board. Score, streak and the round counter are untouched; whoever
    /// triggers the new round decides whether the counter advances.
    pub fn new_round(&mut self, rng: &mut impl Rng) {
        self.current = build_round(self.difficulty, rng);
        self.locked = false;
        self.set_message(PROMPT_MESSAGE, MessageKind::Neutral);
    }

    /// Resolves a player pick.
    ///
    /// Picks while locked, or with an out-of-range index, are dropped without
    /// touching any state; the lock is what keeps a rapid double-click from
    /// scoring twice.
    pub fn resolve_pick(&mut self, index: usize) -> PickResult {
        if self.locked {
            return PickResult::ignored();
        }
        let Some(tile) = self.current.tiles.get(index).copied() else {
            return PickResult::ignored();
        };

        self.locked = true;
        let correct_hex = self.current.target.hex();
        let picked_hex = tile.color.hex();

        if tile.is_correct {
            // Bonus reflects the streak built up before this win.
            let points = BASE_POINTS + self.streak.min(STREAK_BONUS_CAP);
            self.score += points;
            self.streak += 1;
            self.set_message(format!("✅ Correct! +{points} points"), MessageKind::Good);
            PickResult {
                outcome: PickOutcome::Correct,
                points_awarded: Some(points),
                correct_hex: Some(correct_hex),
                picked_hex: Some(picked_hex),
            }
        } else {
            self.streak = 0;
            self.set_message(
                format!("❌ Wrong — that was {picked_hex}. Try again!"),
                MessageKind::Bad,
            );
            PickResult {
                outcome: PickOutcome::Incorrect,
                points_awarded: None,
                correct_hex: Some(correct_hex),
                picked_hex: Some(picked_hex),
            }
        }
    }

    /// Zeroes the counters and deals a fresh round 1.
    pub fn reset_game(&mut self, rng: &mut impl Rng) {
        self.score = 0;
        self.streak = 0;
        self.round = 1;
        self.new_round(rng);
    }

    /// Switches difficulty and re-rolls the board. Score, streak and round
    /// survive the switch. The confirmation message is set after the new
    /// round so it is what the player actually sees.
    pub fn set_difficulty(&mut self, difficulty: Difficulty, rng: &mut impl Rng) {
        self.difficulty = difficulty;
        self.new_round(rng);
        self.set_message(
            format!("Difficulty: {}", difficulty.label().to_uppercase()),
            MessageKind::Neutral,
        );
    }

    pub fn view(&self) -> BoardView {
        BoardView {
            target_hex: self.current.target.hex(),
            tiles: self.current.tiles.iter().map(|t| t.color.hex()).collect(),
            score: self.score,
            streak: self.streak,
            round: self.round,
            locked: self.locked,
            difficulty: self.difficulty,
            message: self.message.clone(),
            message_kind: self.message_kind,
        }
    }
}
