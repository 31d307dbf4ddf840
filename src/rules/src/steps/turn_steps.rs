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
use data::game_states::game_phase::GamePhase;
use data::game_states::game_state::GameState;

/// Hands the turn to the other player.
///
/// Collapses the untap/upkeep/draw bookkeeping of a full turn structure:
/// the incoming player's permanents untap and shed summoning sickness,
/// marked damage clears everywhere, and play resumes at pre-combat main.
/// The observed-state history is deliberately carried forward — it feeds
/// stalemate detection across turns.
pub fn advance_turn(game: &mut GameState) {
    let next = game.active_player.opponent();
    if next == PlayerName::One {
        game.turn += 1;
    }
    game.active_player = next;
    for permanent in &mut game.player_mut(next).battlefield {
        permanent.tapped = false;
        permanent.summoning_sick = false;
    }
    for name in [PlayerName::One, PlayerName::Two] {
        for permanent in &mut game.player_mut(name).battlefield {
            permanent.damage = 0;
        }
    }
    game.phase = GamePhase::PreCombatMain;
    game.combat = None;
}
