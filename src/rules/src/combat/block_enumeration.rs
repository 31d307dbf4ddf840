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

use data::game_states::combat_state::{AttackerId, BlockAssignment, BlockerId};
use data::game_states::game_state::GameState;
use itertools::Itertools;

use crate::queries::{card_queries, combat_queries};

/// Enumerates every legal blocking arrangement.
///
/// Each potential blocker independently chooses "no block" or one attacker
/// it can legally block; the cartesian product of those choices is then
/// filtered for menace (a blocked menace attacker needs at least two
/// blockers). Within an attacker, blockers keep the order in which they
/// were assigned — that order is the attacker's damage-assignment order.
///
/// Output order is a deterministic function of the input orders.
pub fn enumerate(
    game: &GameState,
    attackers: &[AttackerId],
    potential_blockers: &[BlockerId],
) -> Vec<BlockAssignment> {
    let choice_sets: Vec<Vec<Option<AttackerId>>> = potential_blockers
        .iter()
        .map(|&blocker| {
            let mut choices = vec![None];
            choices.extend(
                attackers
                    .iter()
                    .copied()
                    .filter(|&attacker| combat_queries::can_block(game, blocker, attacker))
                    .map(Some),
            );
            choices
        })
        .collect();
    if choice_sets.is_empty() {
        // The product of zero choice sets is the single empty assignment.
        return vec![Vec::new()];
    }
    choice_sets
        .into_iter()
        .multi_cartesian_product()
        .map(|combo| build_assignment(attackers, potential_blockers, &combo))
        .filter(|assignment| menace_satisfied(game, assignment))
        .collect()
}

fn build_assignment(
    attackers: &[AttackerId],
    potential_blockers: &[BlockerId],
    combo: &[Option<AttackerId>],
) -> BlockAssignment {
    let mut assignment: BlockAssignment = Vec::new();
    for (&blocker, &choice) in potential_blockers.iter().zip(combo) {
        let Some(attacker) = choice else {
            continue;
        };
        match assignment.iter_mut().find(|(id, _)| *id == attacker) {
            Some((_, blockers)) => blockers.push(blocker),
            None => assignment.push((attacker, vec![blocker])),
        }
    }
    // Entries follow attacker declaration order; blocker order within an
    // entry is untouched.
    assignment.sort_by_key(|(attacker, _)| {
        attackers.iter().position(|id| id == attacker).expect("assignment references an undeclared attacker")
    });
    assignment
}

fn menace_satisfied(game: &GameState, assignment: &BlockAssignment) -> bool {
    assignment.iter().all(|(attacker, blockers)| {
        blockers.len() >= 2 || !card_queries::has_menace(&game.permanent(*attacker).card)
    })
}
