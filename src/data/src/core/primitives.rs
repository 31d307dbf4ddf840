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

use enum_iterator::Sequence;
use enumset::EnumSetType;
use serde::{Deserialize, Serialize};

/// The five canonical colors of magic.
#[derive(Debug, Hash, Serialize, Deserialize, EnumSetType, Sequence)]
pub enum Color {
    White,
    Blue,
    Black,
    Red,
    Green,
}

/// Types for a card.
///
/// This is the subset of printed card types which can appear in a
/// three-card-blind pod; un-set and supplemental-product types are not
/// modeled.
#[derive(Debug, Hash, Serialize, Deserialize, EnumSetType, Sequence)]
pub enum CardType {
    Artifact,
    Battle,
    Creature,
    Enchantment,
    Instant,
    Land,
    Planeswalker,
    Sorcery,
}

/// Identifies one of the players in a game.
#[derive(Debug, Hash, Serialize, Deserialize, EnumSetType, Ord, PartialOrd, Sequence)]
pub enum PlayerName {
    /// The player who plays first, who is "on the play".
    One,
    /// The player who plays second, who is "on the draw".
    Two,
}

impl PlayerName {
    /// Returns the other player.
    pub fn opponent(self) -> PlayerName {
        match self {
            PlayerName::One => PlayerName::Two,
            PlayerName::Two => PlayerName::One,
        }
    }

    /// Zero-based index for this player, used for per-player arrays such as
    /// combat life deltas.
    pub fn index(self) -> usize {
        match self {
            PlayerName::One => 0,
            PlayerName::Two => 1,
        }
    }
}

/// An identifier for a permanent on the battlefield.
///
/// Ids are allocated from a monotonic per-game counter and are never reused
/// within one game, so a destroyed creature's id can never be confused with
/// a later arrival.
#[derive(
    Debug, Clone, Copy, Default, Eq, PartialEq, Hash, Ord, PartialOrd, Serialize, Deserialize,
)]
pub struct PermanentId(pub u64);

impl PermanentId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}
