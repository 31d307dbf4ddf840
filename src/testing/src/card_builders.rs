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

//! Builders for cards, decks, and mid-game board states used across the
//! test suites. Cards go through the real oracle parser so tests exercise
//! the same pipeline as production callers.

use data::cards::card::Card;
use data::core::numerics::{Power, Toughness};
use data::core::primitives::PlayerName;
use data::decks::deck::Deck;
use data::game_states::game_state::GameState;
use data::game_states::permanent::Permanent;
use oracle::card_builder;
use oracle::card_builder::ExternalCard;
use uuid::Uuid;

/// A vanilla creature with no rules text.
pub fn creature(name: &str, power: Power, toughness: Toughness) -> Card {
    creature_with_text(name, power, toughness, "")
}

/// A creature whose oracle text runs through the real parser, so keyword
/// lines behave exactly as they would for catalog cards.
pub fn creature_with_text(
    name: &str,
    power: Power,
    toughness: Toughness,
    oracle_text: &str,
) -> Card {
    card_builder::build(&ExternalCard {
        id: Uuid::new_v4(),
        name: name.to_string(),
        mana_cost: "{2}".to_string(),
        type_line: "Creature — Beast".to_string(),
        oracle_text: oracle_text.to_string(),
        power: Some(power.to_string()),
        toughness: Some(toughness.to_string()),
        loyalty: None,
    })
}

pub fn deck(name: &str, cards: Vec<Card>) -> Deck {
    Deck::new(name, cards)
}

/// A game with the given cards already on the battlefield, past summoning
/// sickness, hands empty. Useful for driving combat directly.
pub fn game_with_battlefields(one: Vec<Card>, two: Vec<Card>) -> GameState {
    let mut game =
        GameState::initial(&Deck::new("one", Vec::new()), &Deck::new("two", Vec::new()));
    for (player, cards) in [(PlayerName::One, one), (PlayerName::Two, two)] {
        for card in cards {
            let id = game.new_permanent_id();
            let mut permanent = Permanent::new(id, card);
            permanent.summoning_sick = false;
            game.player_mut(player).battlefield.push(permanent);
        }
    }
    game
}
