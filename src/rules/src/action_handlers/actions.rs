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

use std::collections::HashSet;

use data::actions::game_action::GameAction;
use data::core::primitives::PermanentId;
use data::game_states::combat_state::{BlockAssignment, CombatState};
use data::game_states::game_phase::GamePhase;
use data::game_states::game_state::GameState;
use data::game_states::permanent::Permanent;
use tracing::instrument;

use crate::combat::damage_resolution;
use crate::queries::card_queries;
use crate::steps::turn_steps;

/// Applies an action, producing the successor state.
///
/// The input state is never mutated: every branch of the search owns its
/// own copy, so siblings cannot observe one another.
#[instrument(name = "actions_apply", level = "debug", skip(game))]
pub fn apply(game: &GameState, action: &GameAction) -> GameState {
    let mut next = game.clone();
    execute(&mut next, action);
    next
}

fn execute(game: &mut GameState, action: &GameAction) {
    match action {
        GameAction::Cast(indices) => cast(game, indices),
        GameAction::DeclareAttackers(attackers) => declare_attackers(game, attackers),
        GameAction::DeclareBlockers(assignment) => declare_blockers(game, assignment),
        GameAction::Pass => pass(game),
    }
}

/// Moves the chosen hand cards onto the battlefield as new permanents.
///
/// There is no mana accounting. Pre-combat casting leads into attacker
/// declaration; post-combat casting leads to cleanup (one combat per turn).
fn cast(game: &mut GameState, indices: &[usize]) {
    let next_phase = match game.phase {
        GamePhase::PreCombatMain => GamePhase::DeclareAttackers,
        GamePhase::PostCombatMain => GamePhase::Cleanup,
        other => panic!("Cast is not legal during {other:?}"),
    };
    let active = game.active_player;
    let mut cards = Vec::with_capacity(indices.len());
    for &index in indices.iter().rev() {
        cards.push(game.player_mut(active).hand.remove(index));
    }
    // Removal ran high-to-low to keep indices stable; arrival order is the
    // ascending hand order.
    cards.reverse();
    for card in cards {
        let id = game.new_permanent_id();
        let permanent = Permanent::new(id, card);
        game.player_mut(active).battlefield.push(permanent);
    }
    game.phase = next_phase;
}

fn declare_attackers(game: &mut GameState, attackers: &[PermanentId]) {
    if game.phase != GamePhase::DeclareAttackers {
        panic!("DeclareAttackers is not legal during {:?}", game.phase);
    }
    if attackers.is_empty() {
        game.combat = None;
        turn_steps::advance_turn(game);
        return;
    }
    for &id in attackers {
        let vigilant = card_queries::has_vigilance(&game.permanent(id).card);
        let permanent = game.permanent_mut(id);
        if !vigilant {
            permanent.tapped = true;
        }
        // Already cleared by the most recent turn advance; kept as a safety
        // invariant.
        permanent.summoning_sick = false;
    }
    game.combat = Some(CombatState::new(attackers.to_vec()));
    game.phase = GamePhase::DeclareBlockers;
}

fn declare_blockers(game: &mut GameState, assignment: &BlockAssignment) {
    if game.phase != GamePhase::DeclareBlockers {
        panic!("DeclareBlockers is not legal during {:?}", game.phase);
    }
    {
        let combat = game
            .combat
            .as_mut()
            .unwrap_or_else(|| panic!("Declare blockers with no combat state"));
        combat.blocks = assignment.clone();
    }
    let combat = game.combat.as_ref().expect("combat state was just updated");
    let needs_first_strike_step = combat.participants().any(|id| {
        let card = &game.permanent(id).card;
        card_queries::has_first_strike(card) || card_queries::has_double_strike(card)
    });
    game.phase = if needs_first_strike_step {
        GamePhase::FirstStrikeDamage
    } else {
        GamePhase::CombatDamage
    };
}

fn pass(game: &mut GameState) {
    match game.phase {
        GamePhase::FirstStrikeDamage => {
            run_damage_step(game, true);
            game.phase = GamePhase::CombatDamage;
        }
        GamePhase::CombatDamage => {
            run_damage_step(game, false);
            game.combat = None;
            turn_steps::advance_turn(game);
        }
        GamePhase::PostCombatMain | GamePhase::Cleanup => turn_steps::advance_turn(game),
        other => panic!("Pass is not legal during {other:?}"),
    }
}

/// Runs one damage step and applies its results: marks damage, routes
/// destroyed cards to graveyards, applies life changes, and drops the dead
/// from the combat state so only survivors fight in a following step.
fn run_damage_step(game: &mut GameState, first_strike: bool) {
    let combat = game
        .combat
        .clone()
        .unwrap_or_else(|| panic!("Damage step with no combat state"));
    let outcome = damage_resolution::resolve(game, &combat, game.active_player, first_strike);
    for &(id, total) in &outcome.marked_damage {
        game.permanent_mut(id).damage = total;
    }
    for &id in &outcome.destroyed {
        destroy(game, id);
    }
    game.players.one.life += outcome.life_delta[0];
    game.players.two.life += outcome.life_delta[1];
    let destroyed: HashSet<PermanentId> = outcome.destroyed.iter().copied().collect();
    if let Some(combat) = game.combat.as_mut() {
        combat.retain_surviving(|id| !destroyed.contains(&id));
    }
}

fn destroy(game: &mut GameState, id: PermanentId) {
    let controller = game.controller(id);
    let battlefield = &mut game.player_mut(controller).battlefield;
    let position = battlefield
        .iter()
        .position(|permanent| permanent.id == id)
        .expect("destroyed permanent must be on its controller's battlefield");
    let permanent = battlefield.remove(position);
    // Tokens cease to exist; real cards go to their owner's graveyard.
    if !permanent.token {
        game.player_mut(controller).graveyard.push(permanent.card);
    }
}
