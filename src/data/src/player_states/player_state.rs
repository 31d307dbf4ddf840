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
use crate::core::numerics::LifeValue;
use crate::core::primitives::PlayerName;
use crate::game_states::permanent::Permanent;

pub const STARTING_LIFE: LifeValue = 20;

/// One player's zones and life total.
///
/// There is no library zone: in three-card-blind the deck *is* the opening
/// hand, and drawing from an empty library does not cause a loss.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlayerState {
    pub life: LifeValue,
    pub hand: Vec<Card>,
    pub battlefield: Vec<Permanent>,
    pub graveyard: Vec<Card>,
}

impl PlayerState {
    pub fn new(hand: Vec<Card>) -> Self {
        Self { life: STARTING_LIFE, hand, battlefield: Vec::new(), graveyard: Vec::new() }
    }
}

/// State for both players within this game.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Players {
    pub one: PlayerState,
    pub two: PlayerState,
}

impl Players {
    pub fn player(&self, name: PlayerName) -> &PlayerState {
        match name {
            PlayerName::One => &self.one,
            PlayerName::Two => &self.two,
        }
    }

    pub fn player_mut(&mut self, name: PlayerName) -> &mut PlayerState {
        match name {
            PlayerName::One => &mut self.one,
            PlayerName::Two => &mut self.two,
        }
    }
}
