//! Game session: the board plus whose turn it is.
//!
//! Front ends (XBoard adapter, console modes) talk to the engine only through
//! this type. It validates turn order on top of `make_move` and exposes the
//! search as a move suggestion that the caller then plays.

use crate::game_state::chess_types::*;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::{make_move, MoveRejection};
use crate::move_generation::legal_move_checks::{is_checkmate, is_king_in_check, is_stalemate};
use crate::search::board_scoring::ReferenceScorer;
use crate::search::negamax::{best_move, SearchConfig, SearchResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    InProgress,
    Checkmate { winner: Color },
    Stalemate,
}

#[derive(Debug, Clone)]
pub struct GameSession {
    game_state: GameState,
    side_to_move: Color,
    scorer: ReferenceScorer,
    config: SearchConfig,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl GameSession {
    pub fn new(config: SearchConfig) -> Self {
        Self {
            game_state: GameState::new_game(),
            side_to_move: Color::Light,
            scorer: ReferenceScorer::default(),
            config,
        }
    }

    /// Start from an arbitrary position instead of the opening array.
    ///
    /// `game_over` is derived from the position, so a side to move that is
    /// already checkmated yields a finished game.
    pub fn from_position(
        mut game_state: GameState,
        side_to_move: Color,
        config: SearchConfig,
    ) -> Self {
        game_state.game_over = is_checkmate(&mut game_state, side_to_move);
        Self {
            game_state,
            side_to_move,
            scorer: ReferenceScorer::default(),
            config,
        }
    }

    pub fn reset(&mut self) {
        self.game_state.reset();
        self.side_to_move = Color::Light;
    }

    #[inline]
    pub fn game_state(&self) -> &GameState {
        &self.game_state
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Validated move for `side`; the turn passes only on success.
    pub fn make_move(&mut self, side: Color, from: i32, to: i32) -> Result<Move, MoveRejection> {
        if side != self.side_to_move {
            return Err(MoveRejection::OutOfTurn(side));
        }
        let mv = make_move(&mut self.game_state, side, from, to)?;
        self.side_to_move = side.opposite();
        Ok(mv)
    }

    /// `make_move` for whichever side is on move.
    pub fn play_move(&mut self, mv: Move) -> Result<Move, MoveRejection> {
        self.make_move(self.side_to_move, mv.from as i32, mv.to as i32)
    }

    /// Search result for the side to move. The board is not changed.
    pub fn search(&mut self) -> SearchResult {
        best_move(
            &mut self.game_state,
            self.side_to_move,
            &self.scorer,
            self.config,
        )
    }

    pub fn best_move(&mut self) -> Option<Move> {
        self.search().best_move
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.game_state.game_over
    }

    #[inline]
    pub fn is_in_check(&self, side: Color) -> bool {
        is_king_in_check(&self.game_state, side)
    }

    pub fn status(&mut self) -> GameStatus {
        if self.game_state.game_over {
            return GameStatus::Checkmate {
                winner: self.side_to_move.opposite(),
            };
        }
        if is_stalemate(&mut self.game_state, self.side_to_move) {
            GameStatus::Stalemate
        } else {
            GameStatus::InProgress
        }
    }
}
