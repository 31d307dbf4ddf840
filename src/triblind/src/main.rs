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

use std::path::PathBuf;

use ai::matchups::run_matchup::{MatchupOutcome, DEFAULT_MAX_DEPTH};
use ai::matchups::run_tournament;
use clap::Parser;
use color_eyre::Result;
use tracing::info;

mod deck_file;
mod logging;

/// Runs a three-card-blind round robin over a deck file and prints the
/// standings.
#[derive(Parser)]
#[clap()]
struct Args {
    /// Path to a JSON file holding an array of decks.
    decks: PathBuf,
    /// Recursion cap for the game-tree search.
    #[arg(long, default_value_t = DEFAULT_MAX_DEPTH)]
    max_depth: u32,
}

fn main() -> Result<()> {
    color_eyre::install()?;
    logging::initialize();
    let args = Args::parse();

    let decks = deck_file::load(&args.decks)?;
    info!("Loaded {} decks from {}", decks.len(), args.decks.display());
    let results = run_tournament::round_robin(&decks, args.max_depth);

    println!("Standings:");
    let mut standings = results.scores.iter().enumerate().collect::<Vec<_>>();
    standings.sort_by_key(|(_, score)| std::cmp::Reverse(**score));
    for (index, score) in standings {
        println!("  {} scored {}", decks[index].name, score);
    }

    let unresolved = results
        .matches
        .iter()
        .filter_map(|result| match &result.outcome {
            MatchupOutcome::Unresolved { reason } => Some((result, reason)),
            _ => None,
        })
        .collect::<Vec<_>>();
    if !unresolved.is_empty() {
        println!("\nAwaiting adjudication:");
        for (result, reason) in unresolved {
            println!(
                "  {} vs {}: {}",
                decks[result.deck_one].name, decks[result.deck_two].name, reason
            );
        }
    }
    Ok(())
}
