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

use data::abilities::ability::{Ability, KeywordAbility, ModifierTarget};
use data::cards::card::Card;
use data::core::numerics::{Power, Toughness};
use data::core::primitives::PermanentId;
use data::game_states::game_state::GameState;

fn has_keyword(card: &Card, predicate: impl Fn(&KeywordAbility) -> bool) -> bool {
    card.abilities
        .iter()
        .any(|ability| matches!(ability, Ability::Keyword(keyword) if predicate(keyword)))
}

pub fn has_flying(card: &Card) -> bool {
    has_keyword(card, |k| matches!(k, KeywordAbility::Flying))
}

pub fn has_first_strike(card: &Card) -> bool {
    has_keyword(card, |k| matches!(k, KeywordAbility::FirstStrike))
}

pub fn has_double_strike(card: &Card) -> bool {
    has_keyword(card, |k| matches!(k, KeywordAbility::DoubleStrike))
}

pub fn has_trample(card: &Card) -> bool {
    has_keyword(card, |k| matches!(k, KeywordAbility::Trample))
}

pub fn has_deathtouch(card: &Card) -> bool {
    has_keyword(card, |k| matches!(k, KeywordAbility::Deathtouch))
}

pub fn has_lifelink(card: &Card) -> bool {
    has_keyword(card, |k| matches!(k, KeywordAbility::Lifelink))
}

pub fn has_reach(card: &Card) -> bool {
    has_keyword(card, |k| matches!(k, KeywordAbility::Reach))
}

pub fn has_menace(card: &Card) -> bool {
    has_keyword(card, |k| matches!(k, KeywordAbility::Menace))
}

pub fn has_defender(card: &Card) -> bool {
    has_keyword(card, |k| matches!(k, KeywordAbility::Defender))
}

pub fn has_vigilance(card: &Card) -> bool {
    has_keyword(card, |k| matches!(k, KeywordAbility::Vigilance))
}

pub fn has_indestructible(card: &Card) -> bool {
    has_keyword(card, |k| matches!(k, KeywordAbility::Indestructible))
}

pub fn has_haste(card: &Card) -> bool {
    has_keyword(card, |k| matches!(k, KeywordAbility::Haste))
}

/// Whether a creature deals combat damage in the given step.
///
/// First strikers hit only in the first-strike step, double strikers hit in
/// both, everything else hits only in the regular step.
pub fn deals_damage_in_step(card: &Card, first_strike_step: bool) -> bool {
    let first_strike = has_first_strike(card);
    let double_strike = has_double_strike(card);
    if first_strike_step {
        first_strike || double_strike
    } else {
        !first_strike || double_strike
    }
}

/// Effective power of a permanent: printed power plus every applicable
/// static modifier on its controller's battlefield.
pub fn power(game: &GameState, id: PermanentId) -> Power {
    let base = game.permanent(id).card.power.unwrap_or(0);
    base + modifier_sum(game, id).0
}

/// Effective toughness, under the same modifier rules as [power].
pub fn toughness(game: &GameState, id: PermanentId) -> Toughness {
    let base = game.permanent(id).card.toughness.unwrap_or(0);
    base + modifier_sum(game, id).1
}

fn modifier_sum(game: &GameState, id: PermanentId) -> (Power, Toughness) {
    let controller = game.controller(id);
    let recipient_is_creature = game.permanent(id).card.is_creature();
    let mut power = 0;
    let mut toughness = 0;
    for source in game.battlefield(controller) {
        for ability in &source.card.abilities {
            let Ability::StaticPtModifier {
                power: p,
                toughness: t,
                target,
                condition,
            } = ability
            else {
                continue;
            };
            // Conditional modifiers are conservatively inactive: the engine
            // cannot evaluate arbitrary "as long as" riders.
            if condition.is_some() {
                continue;
            }
            let applies = match target {
                ModifierTarget::Own => source.id == id,
                ModifierTarget::CreaturesYouControl => recipient_is_creature,
                ModifierTarget::OtherCreaturesYouControl => {
                    source.id != id && recipient_is_creature
                }
                // No attachment model: nothing is ever enchanted or
                // equipped in this simulation.
                ModifierTarget::EnchantedCreature | ModifierTarget::EquippedCreature => false,
            };
            if applies {
                power += p;
                toughness += t;
            }
        }
    }
    (power, toughness)
}
