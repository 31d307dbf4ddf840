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

use crate::cards::card::Card;
use crate::core::numerics::Toughness;
use crate::core::primitives::PermanentId;

/// A card on the battlefield.
///
/// Wraps an immutable [Card] with the mutable in-game state that only
/// exists while the card is in play. The [PermanentId] gives the instance
/// an identity the card value does not have.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Permanent {
    pub id: PermanentId,
    pub card: Card,
    pub tapped: bool,
    /// True until the start of its controller's next turn; blocks attacking
    /// unless the creature has haste.
    pub summoning_sick: bool,
    /// Damage marked this turn. Cleared when the turn advances.
    pub damage: Toughness,
    /// Token permanents cease to exist instead of going to a graveyard.
    pub token: bool,
}

impl Permanent {
    pub fn new(id: PermanentId, card: Card) -> Self {
        Self { id, card, tapped: false, summoning_sick: true, damage: 0, token: false }
    }
}
