//! Engine abstraction layer used by the protocol and console front ends.
//!
//! Defines common input parameters and output payloads so different engine
//! strategies can be selected at runtime behind a single trait interface.

use crate::game_state::chess_types::{Color, Move};
use crate::game_state::game_state::GameState;

#[derive(Debug, Clone, Default)]
pub struct GoParams {
    /// Overrides the engine's configured search depth for one call.
    pub depth: Option<u8>,
}

#[derive(Debug, Clone, Default)]
pub struct EngineOutput {
    pub best_move: Option<Move>,
    pub info_lines: Vec<String>,
}

pub trait Engine {
    fn name(&self) -> &str;

    fn new_game(&mut self) {}

    /// Pick a move for `side`. The board may be used as scratch space but is
    /// returned unchanged; the caller applies the chosen move.
    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        side: Color,
        params: &GoParams,
    ) -> Result<EngineOutput, String>;
}
