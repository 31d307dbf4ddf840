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

use std::fmt::Write;

use crate::core::primitives::PlayerName;
use crate::game_states::game_state::GameState;
use crate::player_states::player_state::PlayerState;

/// Produces the canonical key for a game state.
///
/// The key covers the active player, phase, life totals, and per-player
/// sorted bags of battlefield `(name, tapped, sick)` triples and hand card
/// names. Battlefield and hand bags are sorted so that boards reached
/// through different action orderings collide; permanent ids and the turn
/// number are deliberately excluded for the same reason.
///
/// Used both for stalemate-by-repetition detection and as the transposition
/// table key, always at pre-combat-main checkpoints.
pub fn canonical(game: &GameState) -> String {
    let mut key = String::new();
    write!(
        key,
        "{:?}|{:?}|{}|{}",
        game.active_player,
        game.phase,
        game.player(PlayerName::One).life,
        game.player(PlayerName::Two).life
    )
    .expect("writing to a String cannot fail");
    for name in [PlayerName::One, PlayerName::Two] {
        push_player(&mut key, game.player(name));
    }
    key
}

fn push_player(key: &mut String, player: &PlayerState) {
    let mut battlefield = player
        .battlefield
        .iter()
        .map(|p| format!("{}/{}/{}", p.card.name, p.tapped, p.summoning_sick))
        .collect::<Vec<_>>();
    battlefield.sort();
    let mut hand = player.hand.iter().map(|card| card.name.clone()).collect::<Vec<_>>();
    hand.sort();
    write!(key, "|b:{}|h:{}", battlefield.join(","), hand.join(","))
        .expect("writing to a String cannot fail");
}
