//! Display normalization: one canonical blueprint shape for every historical variant.
//!
//! The model's output drifts between prompt versions (renamed fields, strings where
//! objects were expected, flat vs rich timelines). `normalize_blueprint` is the single
//! conversion boundary; each sub-module owns the adapters for one concept.
//!
//! The canonical serialization is itself an accepted input, so normalization is idempotent.

pub mod assets;
pub mod handlers;
pub mod journey;
pub mod timeline;
pub mod todo;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::display::assets::{
    normalize_ai_suggestions, normalize_challenges, normalize_colors, normalize_features,
    normalize_fonts, normalize_tech_stack, AiTool, Challenge, ColorSwatch, Feature, FontItem,
    TechItem,
};
use crate::display::journey::{normalize_journey, JourneyStep};
use crate::display::timeline::{normalize_timeline, TimelineScenario};
use crate::display::todo::{categories, normalize_todo_list, TodoItem};

/// The canonical, fully-populated blueprint handed to renderers.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DisplayBlueprint {
    pub project_name: String,
    pub user_journey: Vec<JourneyStep>,
    pub to_do_list: Vec<TodoItem>,
    /// Distinct to-do categories in first-seen order.
    pub to_do_categories: Vec<String>,
    pub tech_stack: Vec<TechItem>,
    pub main_features: Vec<Feature>,
    pub api_reference: String,
    pub ai_suggestions: Vec<AiTool>,
    pub estimated_timeline: Vec<TimelineScenario>,
    pub potential_challenges: Vec<Challenge>,
    pub suggested_color_schema: Vec<ColorSwatch>,
    pub fonts: Vec<FontItem>,
    pub additional_notes: Vec<String>,
}

/// Normalizes a raw blueprint of any known shape. Missing fields become empty.
pub fn normalize_blueprint(raw: &Value) -> DisplayBlueprint {
    let Some(object) = raw.as_object() else {
        return DisplayBlueprint::default();
    };

    let to_do_list = normalize_todo_list(items(object, &["to_do_list"]));
    let to_do_categories = categories(&to_do_list)
        .into_iter()
        .map(str::to_string)
        .collect();

    DisplayBlueprint {
        project_name: first_text(object, &["project_name"]),
        user_journey: normalize_journey(items(object, &["user_journey"])),
        to_do_list,
        to_do_categories,
        tech_stack: normalize_tech_stack(items(object, &["tech_stack"])),
        main_features: normalize_features(items(object, &["main_features"])),
        api_reference: api_reference_text(object.get("api_reference")),
        ai_suggestions: normalize_ai_suggestions(items(object, &["ai_suggestions"])),
        estimated_timeline: normalize_timeline(items(object, &["estimated_timeline"])),
        potential_challenges: normalize_challenges(items(object, &["potential_challenges"])),
        suggested_color_schema: normalize_colors(items(
            object,
            &["suggested_color_schema", "Suggested_color_schema"],
        )),
        fonts: normalize_fonts(items(object, &["fonts", "Fonts_to_use"])),
        additional_notes: string_list(lookup(object, &["additional_notes"])),
    }
}

/// First value present under any of `names`, in order. Nulls count as absent.
pub(crate) fn lookup<'a>(object: &'a Map<String, Value>, names: &[&str]) -> Option<&'a Value> {
    names
        .iter()
        .filter_map(|name| object.get(*name))
        .find(|value| !value.is_null())
}

/// Text under the first name that carries non-blank text. Numbers and booleans are rendered;
/// other shapes are skipped like blanks.
pub(crate) fn first_text(object: &Map<String, Value>, names: &[&str]) -> String {
    names
        .iter()
        .filter_map(|name| object.get(*name))
        .filter_map(scalar_text)
        .find(|text| !text.is_empty())
        .unwrap_or_default()
}

pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.trim().to_string()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

/// Array items under the first matching name; anything else yields no items.
pub(crate) fn items<'a>(object: &'a Map<String, Value>, names: &[&str]) -> &'a [Value] {
    lookup(object, names)
        .and_then(Value::as_array)
        .map(Vec::as_slice)
        .unwrap_or(&[])
}

/// A list of strings from either a single string or a sequence of scalars.
pub(crate) fn string_list(value: Option<&Value>) -> Vec<String> {
    match value {
        Some(Value::Array(entries)) => entries
            .iter()
            .filter_map(|entry| match entry {
                Value::Null => None,
                Value::Array(_) | Value::Object(_) => Some(entry.to_string()),
                scalar => scalar_text(scalar),
            })
            .filter(|s| !s.is_empty())
            .collect(),
        Some(other) => scalar_text(other)
            .filter(|s| !s.is_empty())
            .into_iter()
            .collect(),
        None => Vec::new(),
    }
}

fn api_reference_text(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Null) | None => String::new(),
        Some(other) => serde_json::to_string_pretty(other).unwrap_or_default(),
    }
}
