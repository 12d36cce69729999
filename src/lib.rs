//! Color Match core crate.
//!
//! Round generation, scoring and lock/unlock timing for the color-matching
//! game, compiled to wasm. Rendering and DOM wiring live in the JS frontend:
//! it calls the exported functions below for every player event and polls
//! [`view`] each animation frame to redraw, which is also how it observes
//! timer-driven transitions (round advance after a hit, unlock after a miss).

use std::cell::RefCell;

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;

pub mod color;
pub mod controller;
pub mod game;
pub mod round;

pub use controller::{PendingTransition, RoundController, TransitionKind};
pub use game::{BoardView, Difficulty, GameState, PickOutcome, PickResult};

// Optional small allocator for size (feature gated)
#[cfg(feature = "wee_alloc")]
#[global_allocator]
static ALLOC: wee_alloc::WeeAlloc = wee_alloc::WeeAlloc::INIT;

#[wasm_bindgen(start)]
pub fn wasm_start() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

thread_local! {
    static GAME: RefCell<Option<RoundController>> = RefCell::new(None);
}

/// Creates (or recreates) the game. Must be called before any other export.
#[wasm_bindgen]
pub fn start_game() {
    let mut rng = rand::thread_rng();
    let controller = RoundController::new(&mut rng);
    GAME.with(|game| game.replace(Some(controller)));
}

/// Resolves a click on tile `index` and returns the [`PickResult`] as JSON.
/// A hit or miss arms the matching deferred transition; picks before
/// [`start_game`], while the board is locked, or out of range come back as
/// `{"outcome":"ignored"}`.
#[wasm_bindgen]
pub fn pick(index: usize) -> String {
    let (result, pending) = GAME.with(|game| {
        game.borrow_mut()
            .as_mut()
            .map(|ctl| ctl.pick(index))
            .unwrap_or((PickResult::ignored(), None))
    });
    if let Some(transition) = pending {
        schedule_transition(transition);
    }
    to_json(&result)
}

/// Re-rolls the board immediately, keeping score and streak.
#[wasm_bindgen]
pub fn request_new_round() {
    with_game(|ctl, rng| ctl.request_new_round(rng));
}

/// Back to round 1 with zeroed score and streak.
#[wasm_bindgen]
pub fn request_reset() {
    with_game(|ctl, rng| ctl.reset(rng));
}

/// Switches difficulty ("easy" | "medium" | "hard") and deals a new round.
#[wasm_bindgen]
pub fn set_difficulty(name: &str) -> Result<(), JsValue> {
    let difficulty =
        Difficulty::from_name(name).ok_or_else(|| JsValue::from_str("unknown difficulty"))?;
    with_game(|ctl, rng| ctl.set_difficulty(difficulty, rng));
    Ok(())
}

/// Current [`BoardView`] as JSON, or the empty string before [`start_game`].
#[wasm_bindgen]
pub fn view() -> String {
    GAME.with(|game| {
        game.borrow()
            .as_ref()
            .map(|ctl| to_json(&ctl.state().view()))
            .unwrap_or_default()
    })
}

fn with_game(f: impl FnOnce(&mut RoundController, &mut rand::rngs::ThreadRng)) {
    let mut rng = rand::thread_rng();
    GAME.with(|game| {
        if let Some(ctl) = game.borrow_mut().as_mut() {
            f(ctl, &mut rng);
        }
    });
}

fn to_json<T: serde::Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_default()
}

/// Arms a fire-once `setTimeout` for a deferred transition. The callback
/// goes back through [`RoundController::fire`], which rejects a stale epoch,
/// so a timer that outlives its round does nothing.
fn schedule_transition(transition: PendingTransition) {
    let Some(win) = web_sys::window() else {
        return; // no Window (e.g. the Node test runner): nothing to arm
    };
    let callback = Closure::once_into_js(move || {
        let mut rng = rand::thread_rng();
        GAME.with(|game| {
            if let Some(ctl) = game.borrow_mut().as_mut() {
                ctl.fire(transition, &mut rng);
            }
        });
    });
    let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(
        callback.unchecked_ref(),
        transition.delay_ms as i32,
    );
}
