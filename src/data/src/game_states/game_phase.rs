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
use serde::{Deserialize, Serialize};

/// The turn structure of a simulated game.
///
/// This is the three-card-blind reduction of the full phase sequence:
/// untap/upkeep/draw collapse into the turn-advance bookkeeping, and there
/// is no end step because nothing in the modeled rules triggers there.
///
/// `FirstStrikeDamage` is only entered when a first- or double-striker is
/// present in the declared combat on either side.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, Serialize, Deserialize, Sequence)]
pub enum GamePhase {
    PreCombatMain,
    DeclareAttackers,
    DeclareBlockers,
    FirstStrikeDamage,
    CombatDamage,
    PostCombatMain,
    Cleanup,
}
