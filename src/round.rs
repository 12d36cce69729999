//! Round assembly: one correct tile plus fifteen unique decoys, shuffled.

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use crate::color::{Color, make_decoy, pick_target};
use crate::game::Difficulty;

/// Tiles per round (the frontend lays them out 4x4).
pub const TILE_COUNT: usize = 16;

/// Rejection-sampling budget per decoy slot before falling back to the
/// deterministic probe in [`next_decoy`].
const DECOY_ATTEMPTS: usize = 64;

/// One clickable board cell.
#[derive(Clone, Copy, Debug)]
pub struct Tile {
    pub color: Color,
    pub is_correct: bool,
}

/// A full round: the color to match plus the shuffled tile set.
///
/// Invariants: exactly [`TILE_COUNT`] tiles, exactly one with `is_correct`,
/// pairwise-distinct colors, and the correct tile's color equals `target`.
#[derive(Clone, Debug)]
pub struct Round {
    pub target: Color,
    pub tiles: Vec<Tile>,
}

impl Round {
    /// Index of the correct tile in the shuffled order.
    pub fn correct_index(&self) -> usize {
        self.tiles.iter().position(|t| t.is_correct).unwrap_or(0)
    }
}

/// Builds a round at the given difficulty: samples a target, surrounds it
/// with unique near-target decoys, and shuffles tile order so the correct
/// position is unpredictable.
pub fn build_round(difficulty: Difficulty, rng: &mut impl Rng) -> Round {
    let spread = difficulty.spread();
    let target = pick_target(rng);

    let mut tiles = Vec::with_capacity(TILE_COUNT);
    tiles.push(Tile { color: target, is_correct: true });

    let mut seen: HashSet<Color> = HashSet::with_capacity(TILE_COUNT);
    seen.insert(target);

    while tiles.len() < TILE_COUNT {
        let decoy = next_decoy(target, spread, &seen, rng);
        seen.insert(decoy);
        tiles.push(Tile { color: decoy, is_correct: false });
    }

    tiles.shuffle(rng);
    Round { target, tiles }
}

/// Samples a decoy not yet on the board.
///
/// Rejection sampling can starve when the spread neighborhood is nearly
/// exhausted, so after `DECOY_ATTEMPTS` misses we probe the red channel
/// outward from the target and take the nearest unused color. The probe
/// visits 256 distinct colors against at most 15 occupied slots, so it
/// always finds one.
fn next_decoy(target: Color, spread: i32, seen: &HashSet<Color>, rng: &mut impl Rng) -> Color {
    for _ in 0..DECOY_ATTEMPTS {
        let decoy = make_decoy(target, spread, rng);
        if !seen.contains(&decoy) {
            return decoy;
        }
    }
    (1..=255i32)
        .flat_map(|distance| [distance, -distance])
        .filter_map(|offset| {
            let r = i32::from(target.r) + offset;
            (0..=255).contains(&r).then(|| Color::new(r as u8, target.g, target.b))
        })
        .find(|candidate| !seen.contains(candidate))
        .unwrap_or(target)
}
