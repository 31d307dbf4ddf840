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

use serde::{Deserialize, Serialize};

use crate::game_states::combat_state::{AttackerId, BlockAssignment};

/// One legal choice at the current phase.
///
/// This is a closed sum; `apply` and the search match on it exhaustively so
/// a new action kind cannot be added without deciding its semantics
/// everywhere.
#[derive(Debug, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
pub enum GameAction {
    /// Put the chosen hand cards (by ascending index) onto the battlefield.
    /// Mana is unlimited by format convention, so the only decision is
    /// membership; simultaneous casting collapses within-side ordering.
    Cast(Vec<usize>),

    /// Declare the listed permanents as attackers. The empty declaration
    /// skips combat entirely.
    DeclareAttackers(Vec<AttackerId>),

    /// Declare a full blocking arrangement. Chosen by the *defending*
    /// player.
    DeclareBlockers(BlockAssignment),

    /// The only action in damage-resolution and cleanup phases.
    Pass,
}
