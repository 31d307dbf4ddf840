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

use data::actions::game_action::GameAction;
use data::core::primitives::{PermanentId, PlayerName};
use data::game_states::game_phase::GamePhase;
use data::game_states::game_state::GameState;
use itertools::Itertools;
use tracing::instrument;

use crate::combat::block_enumeration;
use crate::queries::combat_queries;

/// List of all legal actions in the current game state, in a deterministic
/// order.
///
/// The choosing player is given by [decision_maker]; every other aspect of
/// the enumeration depends only on the state itself.
#[instrument(name = "legal_actions_compute", level = "trace", skip(game))]
pub fn compute(game: &GameState) -> Vec<GameAction> {
    match game.phase {
        GamePhase::PreCombatMain | GamePhase::PostCombatMain => casts(game),
        GamePhase::DeclareAttackers => attack_declarations(game),
        GamePhase::DeclareBlockers => block_declarations(game),
        GamePhase::FirstStrikeDamage | GamePhase::CombatDamage | GamePhase::Cleanup => {
            vec![GameAction::Pass]
        }
    }
}

/// The player who chooses among the legal actions at this node: the
/// defender while blocks are declared, the active player everywhere else.
pub fn decision_maker(game: &GameState) -> PlayerName {
    match game.phase {
        GamePhase::DeclareBlockers => game.active_player.opponent(),
        _ => game.active_player,
    }
}

/// One `Cast` per subset of the hand, the empty set included. Mana is
/// unlimited by format convention, so membership is the whole decision.
fn casts(game: &GameState) -> Vec<GameAction> {
    let hand_size = game.player(game.active_player).hand.len();
    (0..hand_size).powerset().map(GameAction::Cast).collect()
}

fn attack_declarations(game: &GameState) -> Vec<GameAction> {
    let candidates: Vec<PermanentId> = game
        .battlefield(game.active_player)
        .iter()
        .filter(|permanent| combat_queries::can_attack(game, permanent.id))
        .map(|permanent| permanent.id)
        .collect();
    candidates.into_iter().powerset().map(GameAction::DeclareAttackers).collect()
}

fn block_declarations(game: &GameState) -> Vec<GameAction> {
    let combat = game
        .combat
        .as_ref()
        .unwrap_or_else(|| panic!("Declare blockers phase with no combat state"));
    let defender = game.active_player.opponent();
    let potential_blockers: Vec<PermanentId> = game
        .battlefield(defender)
        .iter()
        .filter(|permanent| !permanent.tapped && permanent.card.is_creature())
        .map(|permanent| permanent.id)
        .collect();
    block_enumeration::enumerate(game, &combat.attackers, &potential_blockers)
        .into_iter()
        .map(GameAction::DeclareBlockers)
        .collect()
}
