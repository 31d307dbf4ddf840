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

use enumset::EnumSet;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::abilities::ability::Ability;
use crate::core::numerics::{Loyalty, ManaValue, Power, Toughness};
use crate::core::primitives::{CardType, Color};

/// The immutable printed characteristics of one card, as lifted from a card
/// catalog by the oracle parser.
///
/// A `Card` carries no in-game identity; the same value can back any number
/// of [crate::game_states::permanent::Permanent] instances, each of which
/// has its own id.
#[derive(Debug, Clone, Eq, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Card name, also the stable key used in matchup diagnostics.
    pub name: String,
    /// The printed mana cost string, e.g. `{1}{G}`. Display only; casting in
    /// this engine is free by convention.
    pub mana_cost: String,
    /// Converted cost of the printed mana cost.
    pub mana_value: ManaValue,
    pub colors: EnumSet<Color>,
    pub card_types: EnumSet<CardType>,
    pub supertypes: Vec<String>,
    pub subtypes: Vec<String>,
    /// The original rules text, kept for display and diagnostics.
    pub oracle_text: String,
    /// Printed power. Variable printings (`*`) normalize to 0 at build time.
    pub power: Option<Power>,
    /// Printed toughness. Variable printings (`*`) normalize to 0.
    pub toughness: Option<Toughness>,
    pub loyalty: Option<Loyalty>,
    /// Parsed abilities, one or more per line of oracle text.
    pub abilities: Vec<Ability>,
    /// Stable external identifier supplied by the card catalog.
    pub id: Uuid,
}

impl Card {
    pub fn is_creature(&self) -> bool {
        self.card_types.contains(CardType::Creature)
    }

    /// True if any line of this card's text failed to parse. Such a card
    /// poisons every matchup it appears in.
    pub fn has_unresolved_abilities(&self) -> bool {
        self.abilities.iter().any(Ability::is_unresolved)
    }
}
