// Copyright © triblind 2025-present
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//   https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Alpha-beta pruned minimax over the full game tree.
//!
//! Values live in {+1, 0, -1}: player one forced win, draw, player two
//! forced win. Player one maximizes. Because both decks are open
//! information and every enumeration is a deterministic function of the
//! state, the search always returns the same value for the same decks.
//!
//! See <https://en.wikipedia.org/wiki/Alpha-beta_pruning>

use std::collections::HashMap;

use data::core::primitives::PlayerName;
use data::game_states::game_phase::GamePhase;
use data::game_states::game_state::GameState;
use data::game_states::state_hash;
use rules::action_handlers::actions;
use rules::legality::legal_actions;
use tracing::debug;

/// Search value for a forced player-one win.
pub const WIN_FOR_ONE: i32 = 1;
/// Search value for a draw or stalemate.
pub const DRAW: i32 = 0;
/// Search value for a forced player-two win.
pub const WIN_FOR_TWO: i32 = -1;

/// Mutable search state scoped to a single matchup.
///
/// The transposition table must never be shared across matchups: permanent
/// id counters restart per game, so identical keys from different matchups
/// would collide.
pub struct SearchContext {
    transposition: HashMap<String, i32>,
    pub nodes_explored: u64,
    pub max_depth_reached: u32,
    pub terminated_by_depth_limit: bool,
}

impl SearchContext {
    pub fn new() -> Self {
        Self {
            transposition: HashMap::new(),
            nodes_explored: 0,
            max_depth_reached: 0,
            terminated_by_depth_limit: false,
        }
    }
}

impl Default for SearchContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Evaluates a game to its optimal-play value.
pub fn run(game: &GameState, max_depth: u32, context: &mut SearchContext) -> i32 {
    let value = search(game, 0, max_depth, i32::MIN, i32::MAX, context);
    debug!(
        "Search finished with value {} after {} nodes",
        value, context.nodes_explored
    );
    value
}

fn search(
    game: &GameState,
    depth: u32,
    max_depth: u32,
    alpha: i32,
    beta: i32,
    context: &mut SearchContext,
) -> i32 {
    context.nodes_explored += 1;
    context.max_depth_reached = context.max_depth_reached.max(depth);

    let life_one = game.player(PlayerName::One).life;
    let life_two = game.player(PlayerName::Two).life;
    if life_one <= 0 || life_two <= 0 {
        return if life_one <= 0 && life_two <= 0 {
            DRAW
        } else if life_one <= 0 {
            WIN_FOR_TWO
        } else {
            WIN_FOR_ONE
        };
    }
    if depth >= max_depth {
        context.terminated_by_depth_limit = true;
        return DRAW;
    }

    // Pre-combat main is the once-per-turn checkpoint for both repetition
    // detection and the transposition table.
    if game.phase == GamePhase::PreCombatMain {
        let key = state_hash::canonical(game);
        if game.state_history.contains(&key) {
            // The position recurred with the same player to move, so
            // neither side could improve it: stalemate.
            return DRAW;
        }
        if let Some(&cached) = context.transposition.get(&key) {
            return cached;
        }
        let mut checkpoint = game.clone();
        checkpoint.state_history.insert(key.clone());
        let value = search_children(&checkpoint, depth, max_depth, alpha, beta, context);
        context.transposition.insert(key, value);
        return value;
    }

    search_children(game, depth, max_depth, alpha, beta, context)
}

fn search_children(
    game: &GameState,
    depth: u32,
    max_depth: u32,
    mut alpha: i32,
    mut beta: i32,
    context: &mut SearchContext,
) -> i32 {
    let legal = legal_actions::compute(game);
    if legal.is_empty() {
        return DRAW;
    }
    let maximizing = legal_actions::decision_maker(game) == PlayerName::One;
    let mut best = if maximizing { i32::MIN } else { i32::MAX };
    for action in legal {
        let child = actions::apply(game, &action);
        let value = search(&child, depth + 1, max_depth, alpha, beta, context);
        if maximizing {
            best = best.max(value);
            alpha = alpha.max(value);
        } else {
            best = best.min(value);
            beta = beta.min(value);
        }
        if beta <= alpha {
            break;
        }
    }
    best
}
