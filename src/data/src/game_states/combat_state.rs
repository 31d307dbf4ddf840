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

use crate::core::primitives::PermanentId;

pub type AttackerId = PermanentId;
pub type BlockerId = PermanentId;

/// A complete blocking arrangement: one entry per blocked attacker, each
/// holding that attacker's blockers in damage-assignment order.
///
/// The inner order is load-bearing: excess non-trample damage falls on the
/// *last* blocker in the list, so enumeration and action application must
/// both preserve insertion order.
pub type BlockAssignment = Vec<(AttackerId, Vec<BlockerId>)>;

/// State of the declared combat within one turn.
#[derive(Debug, Clone, Default, Eq, PartialEq, Serialize, Deserialize)]
pub struct CombatState {
    /// Attackers in declaration order.
    pub attackers: Vec<AttackerId>,
    /// Block assignment, empty until the declare-blockers step resolves.
    pub blocks: BlockAssignment,
}

impl CombatState {
    pub fn new(attackers: Vec<AttackerId>) -> Self {
        Self { attackers, blocks: Vec::new() }
    }

    /// The blockers assigned to `attacker`, if it is blocked.
    pub fn blockers_of(&self, attacker: AttackerId) -> Option<&[BlockerId]> {
        self.blocks
            .iter()
            .find(|(id, _)| *id == attacker)
            .map(|(_, blockers)| blockers.as_slice())
    }

    /// All creatures participating in this combat on either side.
    pub fn participants(&self) -> impl Iterator<Item = PermanentId> + '_ {
        self.attackers
            .iter()
            .copied()
            .chain(self.blocks.iter().flat_map(|(_, blockers)| blockers.iter().copied()))
    }

    /// Drops participants which are no longer on any battlefield, keeping
    /// declaration order for everything that survives. Used between the
    /// first-strike and regular damage steps.
    pub fn retain_surviving(&mut self, is_alive: impl Fn(PermanentId) -> bool) {
        self.attackers.retain(|&id| is_alive(id));
        self.blocks.retain(|(attacker, _)| is_alive(*attacker));
        for (_, blockers) in &mut self.blocks {
            blockers.retain(|&id| is_alive(id));
        }
    }
}
