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

//! Lifts printed oracle text into structured [Ability] values.
//!
//! Each line of text runs through an ordered rule list; the first rule that
//! matches wins, and a line no rule claims becomes a single
//! [Ability::Unresolved]. The rules are deliberately conservative: a false
//! positive silently miscomputes a matchup, while an `Unresolved` surfaces
//! in the outcome and gets routed to a judge upstream.

use data::abilities::ability::{Ability, DamageTarget, KeywordAbility, ModifierTarget};
use data::core::numerics::{Power, Toughness};
use once_cell::sync::Lazy;
use regex::Regex;

const NO_MATCHING_RULE: &str = "no matching parser rule";
const MALFORMED_NUMBER: &str = "numeric field failed to convert";

/// Parses a card's full oracle text into its ability list.
///
/// Pure: empty or whitespace input yields an empty list, and identical text
/// always yields identical abilities.
pub fn parse(oracle_text: &str) -> Vec<Ability> {
    oracle_text
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .flat_map(parse_line)
        .collect()
}

fn parse_line(line: &str) -> Vec<Ability> {
    let lower = line.to_lowercase();
    let rules: [fn(&str, &str) -> Option<Vec<Ability>>; 9] = [
        keyword_line,
        ward,
        protection,
        etb_damage,
        etb_life_gain,
        etb_create_token,
        activated_tap_damage,
        activated_tap_life_gain,
        static_pt_modifier,
    ];
    for rule in rules {
        if let Some(abilities) = rule(line, &lower) {
            return abilities;
        }
    }
    vec![unresolved(line, NO_MATCHING_RULE)]
}

fn unresolved(line: &str, reason: &str) -> Ability {
    Ability::Unresolved { text: line.to_string(), reason: reason.to_string() }
}

fn keyword_from_token(token: &str) -> Option<KeywordAbility> {
    Some(match token {
        "flying" => KeywordAbility::Flying,
        "first strike" => KeywordAbility::FirstStrike,
        "double strike" => KeywordAbility::DoubleStrike,
        "trample" => KeywordAbility::Trample,
        "deathtouch" => KeywordAbility::Deathtouch,
        "lifelink" => KeywordAbility::Lifelink,
        "reach" => KeywordAbility::Reach,
        "menace" => KeywordAbility::Menace,
        "defender" => KeywordAbility::Defender,
        "vigilance" => KeywordAbility::Vigilance,
        "indestructible" => KeywordAbility::Indestructible,
        "haste" => KeywordAbility::Haste,
        "hexproof" => KeywordAbility::Hexproof,
        "flash" => KeywordAbility::Flash,
        _ => return None,
    })
}

/// Derives a damage target from the tail of a damage clause. Checked by
/// substring containment, most specific first.
fn damage_target(text: &str) -> Option<DamageTarget> {
    if text.contains("creature") {
        Some(DamageTarget::Creature)
    } else if text.contains("opponent") {
        Some(DamageTarget::Opponent)
    } else if text.contains("player") {
        Some(DamageTarget::Player)
    } else if text.contains("any") {
        Some(DamageTarget::AnyTarget)
    } else {
        None
    }
}

static REMINDER_TEXT: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\s*\([^)]*\)").expect("invalid reminder-text regex"));

/// Rule 1: a comma-separated list where *every* token is a known keyword.
/// Reminder text is stripped here and only here; other rules see the raw
/// line so embedded parentheticals cannot disrupt their captures.
fn keyword_line(_line: &str, lower: &str) -> Option<Vec<Ability>> {
    let stripped = REMINDER_TEXT.replace_all(lower, "");
    let stripped = stripped.trim().trim_end_matches('.');
    if stripped.is_empty() {
        return None;
    }
    stripped
        .split(',')
        .map(|token| keyword_from_token(token.trim()).map(Ability::Keyword))
        .collect()
}

static WARD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^ward (\{[^}]+\})").expect("invalid ward regex"));

/// Rule 2: `ward {cost}`.
fn ward(_line: &str, lower: &str) -> Option<Vec<Ability>> {
    let captures = WARD.captures(lower)?;
    Some(vec![Ability::Keyword(KeywordAbility::Ward { cost: captures[1].to_string() })])
}

static PROTECTION: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^protection from ([^(]+)").expect("invalid protection regex"));

/// Rule 3: `protection from <qualifier>`, optionally followed by reminder
/// text.
fn protection(_line: &str, lower: &str) -> Option<Vec<Ability>> {
    let captures = PROTECTION.captures(lower)?;
    let qualifier = captures[1].trim().trim_end_matches('.').to_string();
    if qualifier.is_empty() {
        return None;
    }
    Some(vec![Ability::Keyword(KeywordAbility::Protection { from: qualifier })])
}

static ETB_DAMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^when [^,]+ enters(?: the battlefield)?, (?:[\w' ]+ )?deals (\d+) damage to ([^.]+)\.?$")
        .expect("invalid etb damage regex")
});

/// Rule 4: enters-the-battlefield damage trigger.
fn etb_damage(line: &str, lower: &str) -> Option<Vec<Ability>> {
    let captures = ETB_DAMAGE.captures(lower)?;
    let target = damage_target(&captures[2])?;
    let amount = match captures[1].parse::<u64>() {
        Ok(amount) => amount,
        Err(_) => return Some(vec![unresolved(line, MALFORMED_NUMBER)]),
    };
    Some(vec![Ability::EtbDamage { amount, target }])
}

static ETB_LIFE_GAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^when [^,]+ enters(?: the battlefield)?, (?:you )?gain (\d+) life\.?$")
        .expect("invalid etb life gain regex")
});

/// Rule 5: enters-the-battlefield life gain trigger.
fn etb_life_gain(line: &str, lower: &str) -> Option<Vec<Ability>> {
    let captures = ETB_LIFE_GAIN.captures(lower)?;
    let amount = match captures[1].parse::<u64>() {
        Ok(amount) => amount,
        Err(_) => return Some(vec![unresolved(line, MALFORMED_NUMBER)]),
    };
    Some(vec![Ability::EtbLifeGain { amount }])
}

static ETB_CREATE_TOKEN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^when [^,]+ enters(?: the battlefield)?, create (?:(a|an|one|two|three|four|five|six) )?(\d+)/(\d+)((?: [a-z]+)*) tokens?( with [a-z, ]+)?\.?$",
    )
    .expect("invalid etb token regex")
});

fn token_count(word: Option<&str>) -> u64 {
    match word {
        Some("two") => 2,
        Some("three") => 3,
        Some("four") => 4,
        Some("five") => 5,
        Some("six") => 6,
        // "a", "an", "one", or no count word at all.
        _ => 1,
    }
}

/// Rule 6: enters-the-battlefield token creation. A `with ...` clause must
/// name only known keywords or the whole line is left unresolved.
fn etb_create_token(line: &str, lower: &str) -> Option<Vec<Ability>> {
    let captures = ETB_CREATE_TOKEN.captures(lower)?;
    let mut keywords = Vec::new();
    if let Some(with_clause) = captures.get(5) {
        let listed = with_clause.as_str().trim_start_matches(" with ");
        for token in listed.split(',').flat_map(|part| part.split(" and ")) {
            let token = token.trim();
            if token.is_empty() {
                continue;
            }
            keywords.push(keyword_from_token(token)?);
        }
    }
    let count = token_count(captures.get(1).map(|m| m.as_str()));
    let (power, toughness) =
        match (captures[2].parse::<Power>(), captures[3].parse::<Toughness>()) {
            (Ok(power), Ok(toughness)) => (power, toughness),
            _ => return Some(vec![unresolved(line, MALFORMED_NUMBER)]),
        };
    Some(vec![Ability::EtbCreateToken { count, power, toughness, keywords }])
}

static TAP_DAMAGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{t\}[^:]*: (?:[\w' ]+ )?deals (\d+) damage to ([^.]+)\.?$")
        .expect("invalid tap damage regex")
});

/// Rule 7: tap-activated damage.
fn activated_tap_damage(line: &str, lower: &str) -> Option<Vec<Ability>> {
    let captures = TAP_DAMAGE.captures(lower)?;
    let target = damage_target(&captures[2])?;
    let amount = match captures[1].parse::<u64>() {
        Ok(amount) => amount,
        Err(_) => return Some(vec![unresolved(line, MALFORMED_NUMBER)]),
    };
    Some(vec![Ability::ActivatedTapDamage { amount, target }])
}

static TAP_LIFE_GAIN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\{t\}[^:]*: (?:you )?gain (\d+) life\.?$")
        .expect("invalid tap life gain regex")
});

/// Rule 8: tap-activated life gain.
fn activated_tap_life_gain(line: &str, lower: &str) -> Option<Vec<Ability>> {
    let captures = TAP_LIFE_GAIN.captures(lower)?;
    let amount = match captures[1].parse::<u64>() {
        Ok(amount) => amount,
        Err(_) => return Some(vec![unresolved(line, MALFORMED_NUMBER)]),
    };
    Some(vec![Ability::ActivatedTapLifeGain { amount }])
}

static STATIC_PT: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^(other creatures you control|enchanted creature|equipped creature|creatures you control) gets? ([+-]\d+)/([+-]\d+)(?: as long as ([^.]+))?\.?$",
    )
    .expect("invalid static pt regex")
});

/// Rule 9: continuous power/toughness modifier.
fn static_pt_modifier(line: &str, lower: &str) -> Option<Vec<Ability>> {
    let captures = STATIC_PT.captures(lower)?;
    let target = match &captures[1] {
        "other creatures you control" => ModifierTarget::OtherCreaturesYouControl,
        "enchanted creature" => ModifierTarget::EnchantedCreature,
        "equipped creature" => ModifierTarget::EquippedCreature,
        "creatures you control" => ModifierTarget::CreaturesYouControl,
        _ => return None,
    };
    let (power, toughness) =
        match (captures[2].parse::<Power>(), captures[3].parse::<Toughness>()) {
            (Ok(power), Ok(toughness)) => (power, toughness),
            _ => return Some(vec![unresolved(line, MALFORMED_NUMBER)]),
        };
    let condition = captures.get(4).map(|m| m.as_str().to_string());
    Some(vec![Ability::StaticPtModifier { power, toughness, target, condition }])
}
