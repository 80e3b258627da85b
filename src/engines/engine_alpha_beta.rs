//! Fixed-depth alpha-beta engine over the reference evaluator.

use crate::engines::engine_trait::{Engine, EngineOutput, GoParams};
use crate::game_state::chess_types::Color;
use crate::game_state::game_state::GameState;
use crate::search::board_scoring::{BoardScorer, ReferenceScorer};
use crate::search::negamax::{best_move, SearchConfig};

pub struct AlphaBetaEngine<S: BoardScorer = ReferenceScorer> {
    scorer: S,
    config: SearchConfig,
}

impl AlphaBetaEngine<ReferenceScorer> {
    pub fn new(config: SearchConfig) -> Self {
        Self::with_scorer(ReferenceScorer::default(), config)
    }
}

impl<S: BoardScorer> AlphaBetaEngine<S> {
    pub fn with_scorer(scorer: S, config: SearchConfig) -> Self {
        Self { scorer, config }
    }
}

impl Default for AlphaBetaEngine<ReferenceScorer> {
    fn default() -> Self {
        Self::new(SearchConfig::default())
    }
}

impl<S: BoardScorer> Engine for AlphaBetaEngine<S> {
    fn name(&self) -> &str {
        "x88 AlphaBeta"
    }

    fn choose_move(
        &mut self,
        game_state: &mut GameState,
        side: Color,
        params: &GoParams,
    ) -> Result<EngineOutput, String> {
        let config = SearchConfig {
            depth: params.depth.unwrap_or(self.config.depth),
        };
        let result = best_move(game_state, side, &self.scorer, config);

        let mut out = EngineOutput::default();
        out.info_lines.push(format!(
            "info depth {} score {} nodes {}",
            config.depth, result.score, result.nodes
        ));
        out.best_move = result.best_move;
        Ok(out)
    }
}
