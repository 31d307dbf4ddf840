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

use data::core::primitives::PermanentId;
use data::game_states::game_state::GameState;

use crate::queries::card_queries;

/// Whether this permanent can be declared as an attacker.
///
/// Tapped permanents, non-creatures, and defenders never attack. Summoning
/// sickness blocks attacking unless the creature has haste; vigilance has no
/// bearing on sickness, it only controls whether attacking taps.
pub fn can_attack(game: &GameState, id: PermanentId) -> bool {
    let permanent = game.permanent(id);
    if permanent.tapped || !permanent.card.is_creature() {
        return false;
    }
    if card_queries::has_defender(&permanent.card) {
        return false;
    }
    !permanent.summoning_sick || card_queries::has_haste(&permanent.card)
}

/// Whether `blocker` can legally block `attacker`.
///
/// Menace is not checked here: it constrains whole assignments (two or more
/// blockers), so it is enforced by the assignment enumerator.
pub fn can_block(game: &GameState, blocker: PermanentId, attacker: PermanentId) -> bool {
    let blocking = game.permanent(blocker);
    if blocking.tapped || !blocking.card.is_creature() {
        return false;
    }
    let attacking = game.permanent(attacker);
    if card_queries::has_flying(&attacking.card)
        && !card_queries::has_flying(&blocking.card)
        && !card_queries::has_reach(&blocking.card)
    {
        return false;
    }
    true
}
