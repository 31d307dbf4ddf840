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

use data::core::primitives::PlayerName;
use data::decks::deck::Deck;
use data::game_states::game_state::GameState;
use serde::{Deserialize, Serialize};
use tracing::instrument;

use crate::tree_search::alpha_beta;
use crate::tree_search::alpha_beta::SearchContext;

/// Recursion cap for the game-tree search. Reaching it reports a draw with
/// [MatchupStats::terminated_by_depth_limit] set.
pub const DEFAULT_MAX_DEPTH: u32 = 200;

/// Result of evaluating one matchup under optimal two-sided play.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub enum MatchupOutcome {
    Win(PlayerName),
    Draw,
    /// One of the decks contains text the parser refused to classify; the
    /// matchup is handed to an external judge instead of being simulated.
    Unresolved { reason: String },
}

/// Search statistics for one matchup.
#[derive(Debug, Clone, Copy, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct MatchupStats {
    pub nodes_explored: u64,
    pub max_depth_reached: u32,
    pub terminated_by_depth_limit: bool,
}

/// Evaluates a matchup between two decks, assuming both players play
/// optimally with full information.
///
/// Deterministic: the same decks always produce the same outcome and the
/// same statistics. Each call owns all of its search state, so concurrent
/// calls on independent inputs are safe.
#[instrument(
    name = "simulate_matchup",
    level = "debug",
    skip_all,
    fields(deck_one = %deck_one.name, deck_two = %deck_two.name)
)]
pub fn simulate(deck_one: &Deck, deck_two: &Deck, max_depth: u32) -> (MatchupOutcome, MatchupStats) {
    if let Some(reason) = preflight_unresolved(deck_one, deck_two) {
        return (MatchupOutcome::Unresolved { reason }, MatchupStats::default());
    }
    let game = GameState::initial(deck_one, deck_two);
    let mut context = SearchContext::new();
    let value = alpha_beta::run(&game, max_depth, &mut context);
    let outcome = if value > alpha_beta::DRAW {
        MatchupOutcome::Win(PlayerName::One)
    } else if value < alpha_beta::DRAW {
        MatchupOutcome::Win(PlayerName::Two)
    } else {
        MatchupOutcome::Draw
    };
    let stats = MatchupStats {
        nodes_explored: context.nodes_explored,
        max_depth_reached: context.max_depth_reached,
        terminated_by_depth_limit: context.terminated_by_depth_limit,
    };
    (outcome, stats)
}

/// Collects the names of all cards which cannot be simulated. Each name
/// appears once, in deck order, joined for the judge-facing reason string.
fn preflight_unresolved(deck_one: &Deck, deck_two: &Deck) -> Option<String> {
    let mut names: Vec<&str> = Vec::new();
    for name in deck_one
        .unresolved_card_names()
        .into_iter()
        .chain(deck_two.unresolved_card_names())
    {
        if !names.contains(&name) {
            names.push(name);
        }
    }
    if names.is_empty() {
        None
    } else {
        Some(format!("cards with unresolved abilities: {}", names.join(", ")))
    }
}
