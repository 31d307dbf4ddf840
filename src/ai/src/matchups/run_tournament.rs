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

use data::core::primitives::PlayerName;
use data::decks::deck::Deck;
use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::matchups::run_matchup;
use crate::matchups::run_matchup::{MatchupOutcome, MatchupStats};

pub const WIN_POINTS: i64 = 3;
pub const DRAW_POINTS: i64 = 1;

/// One simulated game within a round robin. Deck indices refer to the
/// caller's deck slice; `deck_one` had the first turn.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MatchResult {
    pub deck_one: usize,
    pub deck_two: usize,
    pub outcome: MatchupOutcome,
    pub stats: MatchupStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoundRobinResults {
    /// Points per deck, indexed like the input slice.
    pub scores: Vec<i64>,
    pub matches: Vec<MatchResult>,
}

/// Runs every unordered pair of decks twice, once with each deck on the
/// play, to offset first-player advantage. Wins score three points, draws
/// one each; unresolved matchups score nothing until an external judge
/// adjudicates them.
pub fn round_robin(decks: &[Deck], max_depth: u32) -> RoundRobinResults {
    let mut scores = vec![0; decks.len()];
    let mut matches = Vec::new();
    for pair in (0..decks.len()).combinations(2) {
        for (one, two) in [(pair[0], pair[1]), (pair[1], pair[0])] {
            debug!("Running matchup {} vs {}", decks[one].name, decks[two].name);
            let (outcome, stats) = run_matchup::simulate(&decks[one], &decks[two], max_depth);
            match &outcome {
                MatchupOutcome::Win(PlayerName::One) => scores[one] += WIN_POINTS,
                MatchupOutcome::Win(PlayerName::Two) => scores[two] += WIN_POINTS,
                MatchupOutcome::Draw => {
                    scores[one] += DRAW_POINTS;
                    scores[two] += DRAW_POINTS;
                }
                MatchupOutcome::Unresolved { .. } => {}
            }
            matches.push(MatchResult { deck_one: one, deck_two: two, outcome, stats });
        }
    }
    RoundRobinResults { scores, matches }
}
