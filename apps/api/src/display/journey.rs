//! User-journey step parsing.
//!
//! Grammar: `Step N: <action> - <benefit> | Competitors: <competitors> | Value: <value>`.
//! Every segment is optional.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::display::{first_text, scalar_text};

static STEP_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Step (\d+): ([^-]+) - ([^|]+)").expect("valid step regex"));
static STEP_PREFIX_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\s*Step (\d+):\s*").expect("valid step prefix regex"));
static COMPETITORS_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Competitors: ([^|]+)").expect("valid competitors regex"));
static VALUE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Value: (.+)$").expect("valid value regex"));

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct JourneyStep {
    pub number: u32,
    pub action: String,
    pub benefit: String,
    pub competitors: String,
    pub value: String,
}

fn capture(re: &Regex, text: &str) -> String {
    re.captures(text)
        .and_then(|c| c.get(1))
        .map(|m| m.as_str().trim().to_string())
        .unwrap_or_default()
}

/// Parses one journey string. `position` is the 1-based index used when no step number is given.
pub fn parse_journey_step(step: &str, position: u32) -> JourneyStep {
    let competitors = capture(&COMPETITORS_RE, step);
    let value = capture(&VALUE_RE, step);

    if let Some(caps) = STEP_RE.captures(step) {
        return JourneyStep {
            number: caps[1].parse().unwrap_or(position),
            action: caps[2].trim().to_string(),
            benefit: caps[3].trim().to_string(),
            competitors,
            value,
        };
    }

    // No full "Step N: action - benefit" match: fall back to the text before the first '|'.
    let head = step.split('|').next().unwrap_or_default();
    let (number, head) = match STEP_PREFIX_RE.captures(head) {
        Some(caps) => (
            caps[1].parse().unwrap_or(position),
            &head[caps.get(0).map_or(0, |m| m.end())..],
        ),
        None => (position, head),
    };
    let (action, benefit) = match head.split_once(" - ") {
        Some((action, benefit)) => (action.trim(), benefit.trim()),
        None => (head.trim(), ""),
    };

    JourneyStep {
        number,
        action: action.to_string(),
        benefit: benefit.to_string(),
        competitors,
        value,
    }
}

/// Accepts journey strings and already-parsed step objects.
pub fn normalize_journey(entries: &[Value]) -> Vec<JourneyStep> {
    entries
        .iter()
        .enumerate()
        .filter_map(|(index, entry)| {
            let position = index as u32 + 1;
            match entry {
                Value::String(s) => Some(parse_journey_step(s, position)),
                Value::Object(o) => Some(JourneyStep {
                    number: o
                        .get("number")
                        .and_then(scalar_text)
                        .and_then(|n| n.parse().ok())
                        .unwrap_or(position),
                    action: first_text(o, &["action"]),
                    benefit: first_text(o, &["benefit"]),
                    competitors: first_text(o, &["competitors"]),
                    value: first_text(o, &["value"]),
                }),
                _ => None,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_full_step_is_parsed() {
        let step = parse_journey_step(
            "Step 2: Upload photos - Listings look trustworthy | Competitors: Craigslist, eBay | Value: Gear condition grading",
            9,
        );
        assert_eq!(
            step,
            JourneyStep {
                number: 2,
                action: "Upload photos".to_string(),
                benefit: "Listings look trustworthy".to_string(),
                competitors: "Craigslist, eBay".to_string(),
                value: "Gear condition grading".to_string(),
            }
        );
    }

    #[test]
    fn test_missing_competitors_segment() {
        let step = parse_journey_step("Step 1: Sign up - Fast start | Value: One-click", 1);
        assert_eq!(step.competitors, "");
        assert_eq!(step.value, "One-click");
        assert_eq!(step.benefit, "Fast start");
    }

    #[test]
    fn test_free_text_becomes_action() {
        let step = parse_journey_step("Browse the catalogue", 3);
        assert_eq!(step.number, 3);
        assert_eq!(step.action, "Browse the catalogue");
        assert_eq!(step.benefit, "");
    }

    #[test]
    fn test_hyphenated_action_falls_back_to_split() {
        // "Sign-up" defeats the strict grammar; the fallback still separates the benefit.
        let step = parse_journey_step("Step 4: Sign-up flow - Low friction | Competitors: None", 1);
        assert_eq!(step.number, 4);
        assert_eq!(step.action, "Sign-up flow");
        assert_eq!(step.benefit, "Low friction");
        assert_eq!(step.competitors, "None");
    }

    #[test]
    fn test_objects_are_accepted() {
        let steps = normalize_journey(&[
            json!({"action": "Checkout", "benefit": "Secure"}),
            json!("Step 7: Review - Trust"),
            json!(42),
        ]);
        assert_eq!(steps.len(), 2);
        assert_eq!(steps[0].number, 1);
        assert_eq!(steps[0].action, "Checkout");
        assert_eq!(steps[1].number, 7);
    }
}
