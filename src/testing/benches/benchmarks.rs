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
use ai::matchups::run_matchup::DEFAULT_MAX_DEPTH;
use criterion::{criterion_group, criterion_main, Criterion};
use data::actions::game_action::GameAction;
use rules::action_handlers::actions;
use rules::legality::legal_actions;
use testing::card_builders::{creature, creature_with_text, deck, game_with_battlefields};

criterion_main!(benches);
criterion_group!(benches, legal_action_enumeration, matchup_simulation);

pub fn legal_action_enumeration(c: &mut Criterion) {
    let game = game_with_battlefields(
        vec![
            creature("Bear A", 2, 2),
            creature("Bear B", 2, 2),
            creature_with_text("Wind Drake", 2, 2, "Flying"),
        ],
        vec![
            creature("Bear C", 2, 2),
            creature_with_text("Giant Spider", 2, 4, "Reach"),
        ],
    );
    // Attack declarations over three candidates: the full power set.
    let game = actions::apply(&game, &GameAction::Cast(vec![]));
    assert_eq!(legal_actions::compute(&game).len(), 8);

    let mut group = c.benchmark_group("legal_actions");
    group.bench_function("legal_actions", |b| {
        b.iter(|| legal_actions::compute(&game))
    });
}

pub fn matchup_simulation(c: &mut Criterion) {
    let striker = deck(
        "First Strike",
        vec![creature_with_text("Youthful Knight", 2, 2, "First strike")],
    );
    let tough = deck("Tough", vec![creature("Watchwolf Runt", 2, 3)]);

    let mut group = c.benchmark_group("simulate_matchup");
    group.sample_size(20);
    group.bench_function("first_strike_race", |b| {
        b.iter(|| run_matchup::simulate(&striker, &tough, DEFAULT_MAX_DEPTH))
    });
}
