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

//! Turns a raw catalog card into an engine [Card].
//!
//! This is the card-provider boundary: callers fetch card data however they
//! like (the fields mirror the common catalog JSON shape) and the builder
//! lifts it into the immutable value the engine consumes, running the
//! ability parser over the rules text on the way.

use data::abilities::ability::Ability;
use data::cards::card::Card;
use data::core::numerics::{Loyalty, ManaValue, Power};
use data::core::primitives::{CardType, Color};
use enumset::EnumSet;
use serde::{Deserialize, Serialize};
use tracing::debug;
use uuid::Uuid;

use crate::ability_parser;

/// A card as supplied by an external catalog, prior to parsing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExternalCard {
    /// Stable catalog identifier.
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub mana_cost: String,
    /// Full printed type line, e.g. `Legendary Creature — Elf Warrior`.
    #[serde(default)]
    pub type_line: String,
    #[serde(default)]
    pub oracle_text: String,
    /// Printed power as a string; `*` and friends normalize to 0.
    #[serde(default)]
    pub power: Option<String>,
    #[serde(default)]
    pub toughness: Option<String>,
    #[serde(default)]
    pub loyalty: Option<String>,
}

/// Builds the immutable engine card from raw catalog data.
pub fn build(input: &ExternalCard) -> Card {
    let (supertypes, card_types, subtypes) = parse_type_line(&input.type_line);
    let abilities = ability_parser::parse(&input.oracle_text);
    if abilities.iter().any(Ability::is_unresolved) {
        debug!("Oracle text for {} contains unresolved lines", input.name);
    }
    Card {
        name: input.name.clone(),
        mana_cost: input.mana_cost.clone(),
        mana_value: mana_value_of(&input.mana_cost),
        colors: colors_of(&input.mana_cost),
        card_types,
        supertypes,
        subtypes,
        oracle_text: input.oracle_text.clone(),
        power: input.power.as_deref().map(printed_stat),
        toughness: input.toughness.as_deref().map(printed_stat),
        loyalty: input.loyalty.as_deref().and_then(|text| text.trim().parse::<Loyalty>().ok()),
        abilities,
        id: input.id,
    }
}

/// Variable printings (`*`, `1+*`, ...) normalize to 0.
fn printed_stat(text: &str) -> Power {
    text.trim().parse::<Power>().unwrap_or(0)
}

fn parse_type_line(line: &str) -> (Vec<String>, EnumSet<CardType>, Vec<String>) {
    let (left, right) = match line.split_once('—') {
        Some((left, right)) => (left, right),
        None => (line, ""),
    };
    let mut supertypes = Vec::new();
    let mut card_types = EnumSet::empty();
    for word in left.split_whitespace() {
        match card_type_of(word) {
            Some(card_type) => {
                card_types |= card_type;
            }
            None => supertypes.push(word.to_string()),
        }
    }
    let subtypes = right.split_whitespace().map(str::to_string).collect();
    (supertypes, card_types, subtypes)
}

fn card_type_of(word: &str) -> Option<CardType> {
    Some(match word.to_lowercase().as_str() {
        "artifact" => CardType::Artifact,
        "battle" => CardType::Battle,
        "creature" => CardType::Creature,
        "enchantment" => CardType::Enchantment,
        "instant" => CardType::Instant,
        "land" => CardType::Land,
        "planeswalker" => CardType::Planeswalker,
        "sorcery" => CardType::Sorcery,
        _ => return None,
    })
}

fn colors_of(mana_cost: &str) -> EnumSet<Color> {
    let mut colors = EnumSet::empty();
    for ch in mana_cost.chars() {
        match ch.to_ascii_uppercase() {
            'W' => colors |= Color::White,
            'U' => colors |= Color::Blue,
            'B' => colors |= Color::Black,
            'R' => colors |= Color::Red,
            'G' => colors |= Color::Green,
            _ => {}
        }
    }
    colors
}

/// Converted cost of a printed mana cost: generic symbols contribute their
/// value, `X` contributes zero, every other symbol contributes one.
fn mana_value_of(mana_cost: &str) -> ManaValue {
    let mut total = 0;
    let mut symbol = String::new();
    let mut in_symbol = false;
    for ch in mana_cost.chars() {
        match ch {
            '{' => {
                in_symbol = true;
                symbol.clear();
            }
            '}' => {
                if in_symbol {
                    total += symbol_value(&symbol);
                    in_symbol = false;
                }
            }
            _ if in_symbol => symbol.push(ch),
            _ => {}
        }
    }
    total
}

fn symbol_value(symbol: &str) -> ManaValue {
    if let Ok(generic) = symbol.parse::<ManaValue>() {
        generic
    } else if symbol.eq_ignore_ascii_case("x") {
        0
    } else {
        1
    }
}

#[cfg(test)]
mod tests {
    use data::abilities::ability::{Ability, KeywordAbility};

    use super::*;

    fn external(name: &str, type_line: &str, text: &str) -> ExternalCard {
        ExternalCard {
            id: Uuid::new_v4(),
            name: name.to_string(),
            mana_cost: "{1}{G}".to_string(),
            type_line: type_line.to_string(),
            oracle_text: text.to_string(),
            power: Some("2".to_string()),
            toughness: Some("2".to_string()),
            loyalty: None,
        }
    }

    #[test]
    fn builds_a_vanilla_creature() {
        let card = build(&external("Grizzly Bears", "Creature — Bear", ""));
        assert!(card.is_creature());
        assert_eq!(card.power, Some(2));
        assert_eq!(card.toughness, Some(2));
        assert_eq!(card.mana_value, 2);
        assert_eq!(card.colors, EnumSet::only(Color::Green));
        assert_eq!(card.subtypes, vec!["Bear".to_string()]);
        assert!(card.abilities.is_empty());
    }

    #[test]
    fn supertypes_are_kept_as_strings() {
        let card = build(&external("Kodiak", "Legendary Creature — Bear", "Vigilance"));
        assert_eq!(card.supertypes, vec!["Legendary".to_string()]);
        assert_eq!(card.abilities, vec![Ability::Keyword(KeywordAbility::Vigilance)]);
    }

    #[test]
    fn variable_power_normalizes_to_zero() {
        let mut input = external("Tarmogoyf", "Creature — Lhurgoyf", "");
        input.power = Some("*".to_string());
        input.toughness = Some("1+*".to_string());
        let card = build(&input);
        assert_eq!(card.power, Some(0));
        assert_eq!(card.toughness, Some(0));
    }

    #[test]
    fn hybrid_and_x_costs_convert() {
        let mut input = external("Reaper King", "Artifact Creature — Scarecrow", "");
        input.mana_cost = "{2/W}{2/U}{2/B}{2/R}{2/G}".to_string();
        assert_eq!(build(&input).mana_value, 5);
        input.mana_cost = "{X}{R}{R}".to_string();
        assert_eq!(build(&input).mana_value, 2);
    }

    #[test]
    fn builds_from_catalog_json() {
        let raw = r#"{
            "id": "9a842cdb-28c9-4be2-b3e7-52bc9a1c4a3f",
            "name": "Serra Angel",
            "mana_cost": "{3}{W}{W}",
            "type_line": "Creature — Angel",
            "oracle_text": "Flying, vigilance",
            "power": "4",
            "toughness": "4"
        }"#;
        let input: ExternalCard = serde_json::from_str(raw).expect("valid card json");
        let card = build(&input);
        assert_eq!(card.name, "Serra Angel");
        assert_eq!(card.mana_value, 5);
        assert_eq!(
            card.abilities,
            vec![
                Ability::Keyword(KeywordAbility::Flying),
                Ability::Keyword(KeywordAbility::Vigilance)
            ]
        );
        assert!(!card.has_unresolved_abilities());
    }
}
