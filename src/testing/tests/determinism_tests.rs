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

use data::actions::game_action::GameAction;
use data::core::primitives::PlayerName;
use data::decks::deck::Deck;
use data::game_states::game_state::GameState;
use rand::prelude::SliceRandom;
use rand::SeedableRng;
use rand_xoshiro::SplitMix64;
use rules::action_handlers::actions;
use rules::legality::legal_actions;
use testing::card_builders::{creature, creature_with_text, deck};

fn mixed_decks() -> (Deck, Deck) {
    (
        deck(
            "Sky Pair",
            vec![
                creature_with_text("Wind Drake", 2, 2, "Flying"),
                creature("Grizzly Bears", 2, 2),
                creature_with_text("Youthful Knight", 2, 2, "First strike"),
            ],
        ),
        deck(
            "Ground Pair",
            vec![
                creature_with_text("Giant Spider", 2, 4, "Reach"),
                creature_with_text("Venom Stalker", 2, 2, "Deathtouch"),
                creature("Pack Wolf", 3, 2),
            ],
        ),
    )
}

/// Plays out up to 300 random-but-seeded actions and records them.
fn playout(seed: u64) -> Vec<GameAction> {
    let (deck_one, deck_two) = mixed_decks();
    let mut game = GameState::initial(&deck_one, &deck_two);
    let mut rng = SplitMix64::seed_from_u64(seed);
    let mut recorded = Vec::new();
    for _ in 0..300 {
        if game.player(PlayerName::One).life <= 0 || game.player(PlayerName::Two).life <= 0 {
            break;
        }
        let legal = legal_actions::compute(&game);
        let action = legal.choose(&mut rng).expect("every phase has a legal action").clone();
        recorded.push(action.clone());
        game = actions::apply(&game, &action);
    }
    recorded
}

#[test]
fn seeded_playouts_are_reproducible() {
    let baseline = playout(156562599311216480);
    for _ in 0..10 {
        assert_eq!(baseline, playout(156562599311216480));
    }
}

#[test]
fn different_seeds_explore_different_lines() {
    // Not a strict requirement of the engine, but a sanity check that the
    // playout above actually exercises branching.
    assert_ne!(playout(1), playout(2));
}

#[test]
fn legal_action_enumeration_is_stable() {
    let (deck_one, deck_two) = mixed_decks();
    let game = GameState::initial(&deck_one, &deck_two);
    let first = legal_actions::compute(&game);
    for _ in 0..5 {
        assert_eq!(first, legal_actions::compute(&game));
    }
    // Three hand cards produce the full power set of casts.
    assert_eq!(first.len(), 8);
}
