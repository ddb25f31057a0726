//! Timeline normalization.
//!
//! Two shapes exist: flat `{scenario, estimate}` and rich
//! `{scenario, team_size, commitment, duration, milestones}`. When any entry carries a
//! team size the list is treated as rich: deduplicated by team size (first wins) and
//! sorted ascending by team size, with size-less entries last.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::display::{first_text, lookup, string_list};

static FIRST_NUMBER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d+").expect("valid number regex"));

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TimelineScenario {
    pub scenario: String,
    pub team_size: Option<u32>,
    pub commitment: String,
    pub duration: String,
    pub milestones: Vec<String>,
}

/// Reads a team size given as a number (`3`) or as text containing one (`"2-3 developers"` -> 2).
pub fn parse_team_size(value: &Value) -> Option<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .and_then(|n| u32::try_from(n).ok()),
        Value::String(s) => FIRST_NUMBER_RE
            .find(s)
            .and_then(|m| m.as_str().parse().ok()),
        _ => None,
    }
}

fn to_scenario(entry: &Value) -> Option<TimelineScenario> {
    match entry {
        Value::Object(o) => Some(TimelineScenario {
            scenario: first_text(o, &["scenario", "name"]),
            team_size: lookup(o, &["team_size", "teamSize"]).and_then(parse_team_size),
            commitment: first_text(o, &["commitment"]),
            duration: first_text(o, &["duration", "estimate"]),
            milestones: string_list(lookup(o, &["milestones"])),
        }),
        Value::String(s) if !s.trim().is_empty() => Some(TimelineScenario {
            scenario: s.trim().to_string(),
            ..Default::default()
        }),
        _ => None,
    }
}

pub fn normalize_timeline(entries: &[Value]) -> Vec<TimelineScenario> {
    let scenarios: Vec<TimelineScenario> = entries.iter().filter_map(to_scenario).collect();

    if scenarios.iter().all(|s| s.team_size.is_none()) {
        return scenarios;
    }

    let mut seen = HashSet::new();
    let mut deduped: Vec<TimelineScenario> = scenarios
        .into_iter()
        .filter(|s| s.team_size.map_or(true, |size| seen.insert(size)))
        .collect();

    // Stable: ties keep model order, entries without a size go last.
    deduped.sort_by_key(|s| (s.team_size.is_none(), s.team_size));
    deduped
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_flat_shape_is_left_in_order() {
        let timeline = normalize_timeline(&[
            json!({"scenario": "Agency", "estimate": "6 weeks"}),
            json!({"scenario": "Solo", "estimate": "6 months"}),
        ]);
        assert_eq!(timeline.len(), 2);
        assert_eq!(timeline[0].scenario, "Agency");
        assert_eq!(timeline[0].duration, "6 weeks");
        assert_eq!(timeline[1].team_size, None);
    }

    #[test]
    fn test_duplicate_team_sizes_collapse() {
        let timeline = normalize_timeline(&[
            json!({"scenario": "Pair, full-time", "team_size": 2, "duration": "10 weeks"}),
            json!({"scenario": "Pair, part-time", "team_size": 2, "duration": "20 weeks"}),
        ]);
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline[0].scenario, "Pair, full-time");
    }

    #[test]
    fn test_rich_shape_is_sorted_ascending() {
        let timeline = normalize_timeline(&[
            json!({"scenario": "Large", "team_size": 10}),
            json!({"scenario": "Unknown"}),
            json!({"scenario": "Solo", "team_size": "1 developer"}),
            json!({"scenario": "Small", "team_size": 3.0}),
        ]);
        let order: Vec<&str> = timeline.iter().map(|s| s.scenario.as_str()).collect();
        assert_eq!(order, vec!["Solo", "Small", "Large", "Unknown"]);
    }

    #[test]
    fn test_milestones_accept_single_string() {
        let timeline = normalize_timeline(&[json!({
            "scenario": "Solo",
            "team_size": 1,
            "commitment": 20,
            "milestones": "MVP in week 4"
        })]);
        assert_eq!(timeline[0].milestones, vec!["MVP in week 4"]);
        assert_eq!(timeline[0].commitment, "20");
    }

    #[test]
    fn test_parse_team_size_variants() {
        assert_eq!(parse_team_size(&json!(4)), Some(4));
        assert_eq!(parse_team_size(&json!("2-3 developers")), Some(2));
        assert_eq!(parse_team_size(&json!("solo")), None);
        assert_eq!(parse_team_size(&json!(-1)), None);
        assert_eq!(parse_team_size(&json!(null)), None);
    }
}
