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

use ai::matchups::run_matchup;
use ai::matchups::run_matchup::{MatchupOutcome, MatchupStats, DEFAULT_MAX_DEPTH};
use ai::matchups::run_tournament;
use data::core::primitives::PlayerName;
use testing::card_builders::{creature, creature_with_text, deck};

#[test]
fn bigger_stats_win_unopposed() {
    let elephant = deck("Elephant", vec![creature("Elephant", 5, 5)]);
    let bear = deck("Bear", vec![creature("Grizzly Bears", 2, 2)]);
    let (outcome, stats) = run_matchup::simulate(&elephant, &bear, DEFAULT_MAX_DEPTH);
    assert_eq!(outcome, MatchupOutcome::Win(PlayerName::One));
    assert!(!stats.terminated_by_depth_limit);
    assert!(stats.nodes_explored > 0);
}

#[test]
fn mirror_bears_stalemate() {
    let one = deck("Bear A", vec![creature("Grizzly Bears", 2, 2)]);
    let two = deck("Bear B", vec![creature("Grizzly Bears", 2, 2)]);
    let (outcome, stats) = run_matchup::simulate(&one, &two, DEFAULT_MAX_DEPTH);
    assert_eq!(outcome, MatchupOutcome::Draw);
    assert!(!stats.terminated_by_depth_limit);
}

#[test]
fn first_strike_loses_the_toughness_race() {
    let striker = deck(
        "First Strike",
        vec![creature_with_text("Youthful Knight", 2, 2, "First strike")],
    );
    let tough = deck("Tough", vec![creature("Watchwolf Runt", 2, 3)]);
    let (outcome, _) = run_matchup::simulate(&striker, &tough, DEFAULT_MAX_DEPTH);
    assert_eq!(outcome, MatchupOutcome::Win(PlayerName::Two));
}

#[test]
fn flying_evades_ground_blockers() {
    let eagle = deck("Eagle", vec![creature_with_text("Wind Drake", 3, 3, "Flying")]);
    let bear = deck("Bear", vec![creature("Grizzly Bears", 2, 2)]);
    let (outcome, _) = run_matchup::simulate(&eagle, &bear, DEFAULT_MAX_DEPTH);
    assert_eq!(outcome, MatchupOutcome::Win(PlayerName::One));
}

#[test]
fn reach_answers_flying_at_parity() {
    let eagle = deck("Eagle", vec![creature_with_text("Sky Eagle", 2, 2, "Flying")]);
    let spider = deck("Spider", vec![creature_with_text("Giant Spider", 2, 2, "Reach")]);
    let (outcome, _) = run_matchup::simulate(&eagle, &spider, DEFAULT_MAX_DEPTH);
    assert_eq!(outcome, MatchupOutcome::Draw);
}

#[test]
fn unresolved_card_short_circuits_preflight() {
    let complex = deck(
        "Complex",
        vec![creature_with_text(
            "Rashmi, Eternities Crafter",
            2,
            3,
            "Flash\nWhenever you cast your first spell during each opponent's turn, draw a card.",
        )],
    );
    let bear = deck("Bear", vec![creature("Grizzly Bears", 2, 2)]);
    let (outcome, stats) = run_matchup::simulate(&complex, &bear, DEFAULT_MAX_DEPTH);
    match outcome {
        MatchupOutcome::Unresolved { reason } => {
            assert!(reason.starts_with("cards with unresolved abilities: "));
            assert!(reason.contains("Rashmi, Eternities Crafter"));
        }
        other => panic!("Expected an unresolved outcome, got {other:?}"),
    }
    assert_eq!(stats, MatchupStats::default());
}

#[test]
fn preflight_dominates_regardless_of_which_side_is_poisoned() {
    let bear = deck("Bear", vec![creature("Grizzly Bears", 2, 2)]);
    let poisoned = deck(
        "Poisoned",
        vec![creature_with_text("Opalescence Husk", 3, 3, "Each enchantment is a creature.")],
    );
    let (outcome, _) = run_matchup::simulate(&bear, &poisoned, DEFAULT_MAX_DEPTH);
    assert!(matches!(outcome, MatchupOutcome::Unresolved { .. }));
}

#[test]
fn simulation_is_deterministic_across_calls() {
    let one = deck("Eagle", vec![creature_with_text("Sky Eagle", 2, 2, "Flying")]);
    let two = deck("Spider", vec![creature_with_text("Giant Spider", 2, 2, "Reach")]);
    let first = run_matchup::simulate(&one, &two, DEFAULT_MAX_DEPTH);
    for _ in 0..3 {
        assert_eq!(run_matchup::simulate(&one, &two, DEFAULT_MAX_DEPTH), first);
    }
}

#[test]
fn haste_lands_a_free_hit_but_parity_still_draws() {
    let hasty = deck("Hasty", vec![creature_with_text("Rushing Raider", 2, 2, "Haste")]);
    let bear = deck("Bear", vec![creature("Grizzly Bears", 2, 2)]);
    // The raider connects once before the bear arrives, but identical
    // bodies stalemate from then on.
    let (outcome, _) = run_matchup::simulate(&hasty, &bear, DEFAULT_MAX_DEPTH);
    assert_eq!(outcome, MatchupOutcome::Draw);
}

#[test]
fn round_robin_rewards_the_flyer() {
    let decks = vec![
        deck("Flyer", vec![creature_with_text("Wind Drake", 3, 3, "Flying")]),
        deck("Bear", vec![creature("Grizzly Bears", 2, 2)]),
        deck("Wall", vec![creature_with_text("Steel Wall", 0, 7, "Defender")]),
    ];
    let results = run_tournament::round_robin(&decks, DEFAULT_MAX_DEPTH);

    // Three decks, each unordered pair twice.
    assert_eq!(results.matches.len(), 6);
    // Flyer beats both other decks from either seat; bear and wall draw.
    assert_eq!(results.scores, vec![12, 2, 2]);
    let top = results.scores.iter().max().expect("non-empty scores");
    assert_eq!(results.scores.iter().filter(|&score| score == top).count(), 1);
}
