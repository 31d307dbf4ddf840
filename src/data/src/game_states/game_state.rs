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

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::core::numerics::TurnNumber;
use crate::core::primitives::{PermanentId, PlayerName};
use crate::decks::deck::Deck;
use crate::game_states::combat_state::CombatState;
use crate::game_states::game_phase::GamePhase;
use crate::game_states::permanent::Permanent;
use crate::player_states::player_state::{PlayerState, Players};

/// The state of a single simulated game.
///
/// Values of this type are treated as immutable by the search: action
/// application clones the state and mutates the clone, so sibling branches
/// of the game tree can never observe each other's changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameState {
    pub active_player: PlayerName,

    /// Turn number, incremented each time the active player wraps back to
    /// player one.
    pub turn: TurnNumber,

    pub phase: GamePhase,

    pub players: Players,

    /// Declared combat for this turn, present between attacker declaration
    /// and the end of the damage steps.
    pub combat: Option<CombatState>,

    /// Canonical hashes observed at pre-combat-main checkpoints along this
    /// branch of the search. A repeat means neither side could improve the
    /// position and the game is a stalemate.
    pub state_history: HashSet<String>,

    /// Monotonic counter backing [PermanentId] allocation. Never decreases,
    /// so ids are unique for the lifetime of the game.
    pub next_permanent_id: u64,
}

impl GameState {
    /// Sets up a fresh game: each deck becomes its owner's hand, life totals
    /// at twenty, empty battlefields, player one to act at pre-combat main
    /// of turn one.
    pub fn initial(deck_one: &Deck, deck_two: &Deck) -> Self {
        Self {
            active_player: PlayerName::One,
            turn: 1,
            phase: GamePhase::PreCombatMain,
            players: Players {
                one: PlayerState::new(deck_one.cards.clone()),
                two: PlayerState::new(deck_two.cards.clone()),
            },
            combat: None,
            state_history: HashSet::new(),
            next_permanent_id: 1,
        }
    }

    pub fn player(&self, name: PlayerName) -> &PlayerState {
        self.players.player(name)
    }

    pub fn player_mut(&mut self, name: PlayerName) -> &mut PlayerState {
        self.players.player_mut(name)
    }

    pub fn battlefield(&self, name: PlayerName) -> &[Permanent] {
        &self.players.player(name).battlefield
    }

    /// Allocates the next [PermanentId].
    pub fn new_permanent_id(&mut self) -> PermanentId {
        let id = PermanentId(self.next_permanent_id);
        self.next_permanent_id += 1;
        id
    }

    /// Looks up a permanent on either battlefield.
    pub fn find_permanent(&self, id: PermanentId) -> Option<&Permanent> {
        self.players
            .one
            .battlefield
            .iter()
            .chain(self.players.two.battlefield.iter())
            .find(|permanent| permanent.id == id)
    }

    /// Looks up a permanent which combat bookkeeping guarantees to exist.
    /// A miss is an internal invariant breach and aborts the simulation.
    pub fn permanent(&self, id: PermanentId) -> &Permanent {
        self.find_permanent(id)
            .unwrap_or_else(|| panic!("Permanent {id:?} is not on any battlefield"))
    }

    pub fn find_permanent_mut(&mut self, id: PermanentId) -> Option<&mut Permanent> {
        self.players
            .one
            .battlefield
            .iter_mut()
            .chain(self.players.two.battlefield.iter_mut())
            .find(|permanent| permanent.id == id)
    }

    /// Mutable counterpart of [Self::permanent], under the same contract.
    pub fn permanent_mut(&mut self, id: PermanentId) -> &mut Permanent {
        self.find_permanent_mut(id)
            .unwrap_or_else(|| panic!("Permanent {id:?} is not on any battlefield"))
    }

    /// The player whose battlefield holds `id`, under the same contract as
    /// [Self::permanent].
    pub fn controller(&self, id: PermanentId) -> PlayerName {
        if self.players.one.battlefield.iter().any(|p| p.id == id) {
            PlayerName::One
        } else if self.players.two.battlefield.iter().any(|p| p.id == id) {
            PlayerName::Two
        } else {
            panic!("Permanent {id:?} is not on any battlefield")
        }
    }
}
