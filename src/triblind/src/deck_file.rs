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

use std::fs;
use std::path::Path;

use color_eyre::eyre::WrapErr;
use color_eyre::Result;
use data::decks::deck::Deck;
use oracle::card_builder;
use oracle::card_builder::ExternalCard;
use serde::{Deserialize, Serialize};

/// On-disk shape of one submitted deck.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalDeck {
    pub name: String,
    pub cards: Vec<ExternalCard>,
}

/// Loads a deck file and lifts every card through the oracle parser.
pub fn load(path: &Path) -> Result<Vec<Deck>> {
    let raw = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read deck file {}", path.display()))?;
    let decks: Vec<ExternalDeck> = serde_json::from_str(&raw)
        .wrap_err_with(|| format!("Failed to parse deck file {}", path.display()))?;
    Ok(decks
        .into_iter()
        .map(|deck| Deck::new(deck.name, deck.cards.iter().map(card_builder::build).collect()))
        .collect())
}
