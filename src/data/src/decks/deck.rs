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

/// A three-card-blind deck.
///
/// By format convention a deck holds exactly three cards; the engine does
/// not enforce the count (submission-time structural checks are the outer
/// system's job) and simulates whatever it is handed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Deck {
    pub name: String,
    pub cards: Vec<Card>,
}

impl Deck {
    pub fn new(name: impl Into<String>, cards: Vec<Card>) -> Self {
        Self { name: name.into(), cards }
    }

    /// Names of cards carrying at least one unresolved ability, in deck
    /// order. Non-empty means this deck cannot be simulated.
    pub fn unresolved_card_names(&self) -> Vec<&str> {
        self.cards
            .iter()
            .filter(|card| card.has_unresolved_abilities())
            .map(|card| card.name.as_str())
            .collect()
    }
}
