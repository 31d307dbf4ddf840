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
use data::game_states::game_phase::GamePhase;
use data::game_states::game_state::GameState;
use data::game_states::state_hash;
use rules::action_handlers::actions;
use rules::legality::legal_actions;
use rules::queries::{card_queries, combat_queries};
use testing::card_builders::{creature, creature_with_text, deck, game_with_battlefields};

#[test]
fn initial_state_sets_up_both_sides() {
    let one = deck("Bears", vec![creature("Grizzly Bears", 2, 2)]);
    let two = deck(
        "Pair",
        vec![creature("Pack Wolf", 3, 2), creature("Giant Spider", 2, 4)],
    );
    let game = GameState::initial(&one, &two);

    assert_eq!(game.active_player, PlayerName::One);
    assert_eq!(game.turn, 1);
    assert_eq!(game.phase, GamePhase::PreCombatMain);
    assert_eq!(game.player(PlayerName::One).life, 20);
    assert_eq!(game.player(PlayerName::Two).life, 20);
    assert_eq!(game.player(PlayerName::One).hand.len(), 1);
    assert_eq!(game.player(PlayerName::Two).hand.len(), 2);
    assert!(game.battlefield(PlayerName::One).is_empty());
    assert!(game.battlefield(PlayerName::Two).is_empty());
    assert!(game.state_history.is_empty());
    assert!(game.combat.is_none());
}

#[test]
fn hash_ignores_battlefield_and_hand_ordering() {
    let bear = creature("Grizzly Bears", 2, 2);
    let wolf = creature("Pack Wolf", 3, 2);
    let forward = game_with_battlefields(vec![bear.clone(), wolf.clone()], vec![]);
    let reversed = game_with_battlefields(vec![wolf, bear], vec![]);
    assert_eq!(state_hash::canonical(&forward), state_hash::canonical(&reversed));
}

#[test]
fn hash_distinguishes_tapped_permanents() {
    let bear = creature("Grizzly Bears", 2, 2);
    let untapped = game_with_battlefields(vec![bear.clone()], vec![]);
    let mut tapped = game_with_battlefields(vec![bear], vec![]);
    tapped.players.one.battlefield[0].tapped = true;
    assert_ne!(state_hash::canonical(&untapped), state_hash::canonical(&tapped));
}

#[test]
fn casting_assigns_fresh_permanent_ids() {
    let decks = deck(
        "Pair",
        vec![creature("Grizzly Bears", 2, 2), creature("Pack Wolf", 3, 2)],
    );
    let empty = deck("Empty", vec![]);
    let game = GameState::initial(&decks, &empty);
    let game = actions::apply(&game, &GameAction::Cast(vec![0, 1]));

    let battlefield = game.battlefield(PlayerName::One);
    assert_eq!(battlefield.len(), 2);
    assert_ne!(battlefield[0].id, battlefield[1].id);
    assert_eq!(game.next_permanent_id, 3);
    // Arrival order follows hand order.
    assert_eq!(battlefield[0].card.name, "Grizzly Bears");
    assert_eq!(battlefield[1].card.name, "Pack Wolf");
}

#[test]
fn ids_of_destroyed_permanents_are_never_reissued() {
    let one = deck("Elephant", vec![creature("War Elephant", 5, 5)]);
    let two = deck("Chump", vec![creature("Chump", 1, 1)]);
    let mut game = GameState::initial(&one, &two);
    // Both sides deploy; the elephant runs over the chump.
    game = actions::apply(&game, &GameAction::Cast(vec![0]));
    game = actions::apply(&game, &GameAction::DeclareAttackers(vec![]));
    game = actions::apply(&game, &GameAction::Cast(vec![0]));
    game = actions::apply(&game, &GameAction::DeclareAttackers(vec![]));
    let elephant = game.battlefield(PlayerName::One)[0].id;
    let chump = game.battlefield(PlayerName::Two)[0].id;
    game = actions::apply(&game, &GameAction::Cast(vec![]));
    game = actions::apply(&game, &GameAction::DeclareAttackers(vec![elephant]));
    game = actions::apply(&game, &GameAction::DeclareBlockers(vec![(elephant, vec![chump])]));
    game = actions::apply(&game, &GameAction::Pass);

    assert!(game.find_permanent(chump).is_none());
    // The dead chump's id stays retired.
    assert!(game.next_permanent_id > chump.as_u64());
    assert_ne!(elephant, chump);
}

#[test]
fn apply_never_mutates_its_input() {
    let decks = deck("Solo", vec![creature("Grizzly Bears", 2, 2)]);
    let empty = deck("Empty", vec![]);
    let game = GameState::initial(&decks, &empty);
    let _ = actions::apply(&game, &GameAction::Cast(vec![0]));
    assert_eq!(game.player(PlayerName::One).hand.len(), 1);
    assert!(game.battlefield(PlayerName::One).is_empty());
}

#[test]
fn empty_turns_alternate_the_active_player() {
    let empty_one = deck("Empty A", vec![]);
    let empty_two = deck("Empty B", vec![]);
    let mut game = GameState::initial(&empty_one, &empty_two);
    let mut expected = PlayerName::One;
    let mut turn = 1;
    for _ in 0..6 {
        assert_eq!(game.active_player, expected);
        assert_eq!(game.turn, turn);
        assert_eq!(game.phase, GamePhase::PreCombatMain);
        game = actions::apply(&game, &GameAction::Cast(vec![]));
        game = actions::apply(&game, &GameAction::DeclareAttackers(vec![]));
        if expected == PlayerName::Two {
            turn += 1;
        }
        expected = expected.opponent();
    }
}

#[test]
fn vigilant_attackers_do_not_tap() {
    let game = game_with_battlefields(
        vec![
            creature_with_text("Watchful Sentry", 2, 2, "Vigilance"),
            creature("Grizzly Bears", 2, 2),
        ],
        vec![],
    );
    let sentry = game.battlefield(PlayerName::One)[0].id;
    let bear = game.battlefield(PlayerName::One)[1].id;
    let game = actions::apply(&game, &GameAction::Cast(vec![]));
    let game = actions::apply(&game, &GameAction::DeclareAttackers(vec![sentry, bear]));

    assert!(!game.permanent(sentry).tapped);
    assert!(game.permanent(bear).tapped);
}

#[test]
fn summoning_sickness_gates_attacks_but_haste_ignores_it() {
    let haste = creature_with_text("Rushing Raider", 2, 2, "Haste");
    let bear = creature("Grizzly Bears", 2, 2);
    let mut game = game_with_battlefields(vec![haste, bear], vec![]);
    for permanent in &mut game.players.one.battlefield {
        permanent.summoning_sick = true;
    }
    let raider = game.battlefield(PlayerName::One)[0].id;
    let sick_bear = game.battlefield(PlayerName::One)[1].id;

    assert!(combat_queries::can_attack(&game, raider));
    assert!(!combat_queries::can_attack(&game, sick_bear));
}

#[test]
fn defenders_never_attack() {
    let game = game_with_battlefields(
        vec![creature_with_text("Steel Wall", 0, 7, "Defender")],
        vec![],
    );
    let wall = game.battlefield(PlayerName::One)[0].id;
    assert!(!combat_queries::can_attack(&game, wall));
}

#[test]
fn anthems_apply_to_other_creatures() {
    let anthem_bearer = creature_with_text(
        "Standard Bearer",
        2,
        2,
        "Other creatures you control get +1/+1.",
    );
    let bear = creature("Grizzly Bears", 2, 2);
    let game = game_with_battlefields(vec![anthem_bearer, bear], vec![]);
    let bearer_id = game.battlefield(PlayerName::One)[0].id;
    let bear_id = game.battlefield(PlayerName::One)[1].id;

    assert_eq!(card_queries::power(&game, bearer_id), 2);
    assert_eq!(card_queries::power(&game, bear_id), 3);
    assert_eq!(card_queries::toughness(&game, bear_id), 3);
}

#[test]
fn conditional_modifiers_are_inert() {
    let conditional = creature_with_text(
        "Hopeful Banner",
        2,
        2,
        "Creatures you control get +2/+2 as long as you control a Plains.",
    );
    let bear = creature("Grizzly Bears", 2, 2);
    let game = game_with_battlefields(vec![conditional, bear], vec![]);
    let bear_id = game.battlefield(PlayerName::One)[1].id;
    assert_eq!(card_queries::power(&game, bear_id), 2);
}

#[test]
fn blocker_decisions_belong_to_the_defender() {
    let game = game_with_battlefields(
        vec![creature("Raider", 2, 2)],
        vec![creature("Guard", 2, 2)],
    );
    let raider = game.battlefield(PlayerName::One)[0].id;
    let game = actions::apply(&game, &GameAction::Cast(vec![]));
    assert_eq!(legal_actions::decision_maker(&game), PlayerName::One);
    let game = actions::apply(&game, &GameAction::DeclareAttackers(vec![raider]));
    assert_eq!(game.phase, GamePhase::DeclareBlockers);
    assert_eq!(legal_actions::decision_maker(&game), PlayerName::Two);
}
