#![deny(
    warnings,
    missing_copy_implementations,
    missing_debug_implementations,
    missing_docs
)]
//! Local feature extraction for reinforcement learning agents playing a
//! multi-snake candy game on a square grid.
//! The goal is to turn a game state plus a candidate action into a fixed
//! width feature vector that a linear value/policy function can score.
//! you will likely be most interested in the [features::FeatureExtractor]
//! type, which builds its index tables once and can then be used to collect
//! observations and materialize them as dense or sparse vectors:
//! ```plain
//! | candy1 | candy2 | adv-head | adv-tail | my-tail | x | y | trapped |
//! ```
//! Game state is read through the traits in [types], so any game
//! representation can be observed; [wire_representation] provides a json
//! deserializable one.

use wire_representation::Game;

pub mod error;
pub mod features;
pub mod types;
pub mod wire_representation;

/// Loads a game from a json string
pub fn game_fixture(game_fixture: &str) -> Game {
    let g: Result<Game, _> = serde_json::from_str(game_fixture);
    g.expect("the json literal is valid")
}
