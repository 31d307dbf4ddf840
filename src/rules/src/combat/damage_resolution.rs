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

use data::core::numerics::{LifeValue, Toughness};
use data::core::primitives::{PermanentId, PlayerName};
use data::game_states::combat_state::CombatState;
use data::game_states::game_state::GameState;

use crate::queries::card_queries;

/// The result of one combat damage step.
#[derive(Debug, Clone, Default)]
pub struct CombatDamageOutcome {
    /// Permanents destroyed by this step's damage, in accumulator order.
    pub destroyed: Vec<PermanentId>,
    /// Life change per player, indexed by [PlayerName::index].
    pub life_delta: [LifeValue; 2],
    /// Total damage now marked on every permanent this step touched,
    /// including marks carried over from an earlier step this turn. The
    /// caller writes these back before running the next step.
    pub marked_damage: Vec<(PermanentId, Toughness)>,
}

struct DamageEntry {
    total: Toughness,
    from_deathtouch: bool,
}

/// Resolves a single damage step (first-strike or regular) without mutating
/// the game.
///
/// Damage accumulates on top of marks left by an earlier step this turn, so
/// a creature that survived first strike at two marked damage needs that
/// much less to die in the regular step. Destruction is decided only after
/// both sides' damage is summed: a permanent dies if it lacks
/// indestructible and either its accumulated damage reaches its toughness
/// or any of this step's damage came from a deathtouch source.
pub fn resolve(
    game: &GameState,
    combat: &CombatState,
    active_player: PlayerName,
    first_strike: bool,
) -> CombatDamageOutcome {
    let defender = active_player.opponent();
    let mut life_delta: [LifeValue; 2] = [0, 0];
    let mut damage: Vec<(PermanentId, DamageEntry)> = Vec::new();

    for &attacker_id in &combat.attackers {
        let attacker = game.permanent(attacker_id);
        if !card_queries::deals_damage_in_step(&attacker.card, first_strike) {
            continue;
        }
        let power = card_queries::power(game, attacker_id);
        if power <= 0 {
            continue;
        }
        let deathtouch = card_queries::has_deathtouch(&attacker.card);
        let lifelink = card_queries::has_lifelink(&attacker.card);
        match combat.blockers_of(attacker_id) {
            None => {
                life_delta[defender.index()] -= power;
                if lifelink {
                    life_delta[active_player.index()] += power;
                }
            }
            Some(blockers) => {
                let mut remaining = power;
                let mut dealt = 0;
                for &blocker_id in blockers {
                    if remaining <= 0 {
                        break;
                    }
                    let blocker_toughness = card_queries::toughness(game, blocker_id);
                    let entry = entry(&mut damage, game, blocker_id);
                    let lethal =
                        if deathtouch { 1 } else { (blocker_toughness - entry.total).max(0) };
                    let assigned = remaining.min(lethal);
                    if assigned > 0 {
                        entry.total += assigned;
                        entry.from_deathtouch |= deathtouch;
                        remaining -= assigned;
                        dealt += assigned;
                    }
                }
                if remaining > 0 {
                    if card_queries::has_trample(&attacker.card) {
                        life_delta[defender.index()] -= remaining;
                        dealt += remaining;
                    } else if let Some(&last) = blockers.last() {
                        let entry = entry(&mut damage, game, last);
                        entry.total += remaining;
                        entry.from_deathtouch |= deathtouch;
                        dealt += remaining;
                    }
                    // A blocked attacker whose blockers all died in the
                    // first-strike step has nothing left to damage.
                }
                if lifelink {
                    life_delta[active_player.index()] += dealt;
                }
            }
        }
    }

    for (attacker_id, blockers) in &combat.blocks {
        for &blocker_id in blockers {
            let blocker = game.permanent(blocker_id);
            if !card_queries::deals_damage_in_step(&blocker.card, first_strike) {
                continue;
            }
            let power = card_queries::power(game, blocker_id);
            if power <= 0 {
                continue;
            }
            let deathtouch = card_queries::has_deathtouch(&blocker.card);
            let entry = entry(&mut damage, game, *attacker_id);
            entry.total += power;
            entry.from_deathtouch |= deathtouch;
            if card_queries::has_lifelink(&blocker.card) {
                life_delta[defender.index()] += power;
            }
        }
    }

    let mut destroyed = Vec::new();
    for (id, entry) in &damage {
        if card_queries::has_indestructible(&game.permanent(*id).card) {
            continue;
        }
        if entry.total >= card_queries::toughness(game, *id) || entry.from_deathtouch {
            destroyed.push(*id);
        }
    }

    CombatDamageOutcome {
        destroyed,
        life_delta,
        marked_damage: damage.into_iter().map(|(id, entry)| (id, entry.total)).collect(),
    }
}

/// Finds or seeds the accumulator entry for `id`. New entries start from
/// the damage already marked on the permanent, so earlier steps this turn
/// count toward lethality.
fn entry<'a>(
    damage: &'a mut Vec<(PermanentId, DamageEntry)>,
    game: &GameState,
    id: PermanentId,
) -> &'a mut DamageEntry {
    if let Some(position) = damage.iter().position(|(existing, _)| *existing == id) {
        return &mut damage[position].1;
    }
    damage.push((
        id,
        DamageEntry { total: game.permanent(id).damage, from_deathtouch: false },
    ));
    &mut damage.last_mut().expect("entry was just inserted").1
}
