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

use serde::{Deserialize, Serialize};

use crate::core::numerics::{Power, Toughness};

/// Evergreen keyword abilities with uniform rules-text semantics.
///
/// `Ward` and `Protection` carry the printed qualifier with them; everything
/// else is a bare marker whose meaning lives in the combat rules.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum KeywordAbility {
    Flying,
    FirstStrike,
    DoubleStrike,
    Trample,
    Deathtouch,
    Lifelink,
    Reach,
    Menace,
    Defender,
    Vigilance,
    Indestructible,
    Haste,
    Hexproof,
    Flash,
    Ward { cost: String },
    Protection { from: String },
}

/// Who a static power/toughness modifier applies to.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum ModifierTarget {
    /// The permanent carrying the ability.
    Own,
    EnchantedCreature,
    EquippedCreature,
    OtherCreaturesYouControl,
    CreaturesYouControl,
}

/// Targets for a damage-dealing triggered or activated ability.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum DamageTarget {
    AnyTarget,
    Creature,
    Player,
    Opponent,
}

/// One parsed clause of a card's oracle text.
///
/// This is a closed sum: every consumer is expected to match exhaustively so
/// that adding a variant forces every rules decision to be revisited. Text
/// the parser refuses to classify becomes [Ability::Unresolved], which
/// poisons any matchup the card appears in (the outer system routes those to
/// a human judge).
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum Ability {
    Keyword(KeywordAbility),

    /// A continuously-applied power/toughness adjustment, e.g. an anthem.
    StaticPtModifier {
        power: Power,
        toughness: Toughness,
        target: ModifierTarget,
        /// Raw text of an "as long as ..." rider. A modifier with a
        /// condition is conservatively treated as inactive by stat queries.
        condition: Option<String>,
    },

    /// "When this creature enters, it deals N damage to <target>."
    EtbDamage { amount: u64, target: DamageTarget },

    /// "When this creature enters, you gain N life."
    EtbLifeGain { amount: u64 },

    /// "When this permanent enters, create N P/T creature tokens."
    EtbCreateToken {
        count: u64,
        power: Power,
        toughness: Toughness,
        keywords: Vec<KeywordAbility>,
    },

    /// "{T}: this deals N damage to <target>."
    ActivatedTapDamage { amount: u64, target: DamageTarget },

    /// "{T}: you gain N life."
    ActivatedTapLifeGain { amount: u64 },

    /// Printed text with no matching parser rule. Carries the original line
    /// and a diagnostic reason.
    Unresolved { text: String, reason: String },
}

impl Ability {
    pub fn is_unresolved(&self) -> bool {
        matches!(self, Ability::Unresolved { .. })
    }
}
