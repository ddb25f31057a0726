//! Adapters for the list-of-object blueprint sections: tech stack, features, AI tools,
//! challenges, colors and fonts.

use serde::Serialize;
use serde_json::Value;

use crate::display::{first_text, scalar_text};

const GOOGLE_FONTS_SPECIMEN_URL: &str = "https://fonts.google.com/specimen/";

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TechItem {
    pub name: String,
    pub reason: String,
    #[serde(rename = "imageLink")]
    pub image_link: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Feature {
    pub feature: String,
    pub explanation: String,
    pub vision: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AiTool {
    pub name: String,
    pub reason: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Challenge {
    pub challenge: String,
    pub impact: String,
    pub solution: String,
    pub contingency: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ColorSwatch {
    pub hex: String,
    pub name: String,
    pub usage: String,
    pub accessibility: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct FontItem {
    pub name: String,
    #[serde(rename = "type")]
    pub font_type: String,
    pub url: String,
    pub pairings: String,
}

/// Google Fonts specimen page for a family name, e.g. `Fira Code` -> `.../Fira+Code`.
pub fn google_fonts_url(family: &str) -> String {
    let joined = family.split_whitespace().collect::<Vec<_>>().join("+");
    format!("{GOOGLE_FONTS_SPECIMEN_URL}{joined}")
}

/// Accepts `{name|technology, reason|description, imageLink|imageUrl, link}`.
/// A bare string is taken as the technology name.
pub fn normalize_tech_stack(entries: &[Value]) -> Vec<TechItem> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(o) => Some(TechItem {
                name: first_text(o, &["name", "technology"]),
                reason: first_text(o, &["reason", "description"]),
                image_link: first_text(o, &["imageLink", "imageUrl", "image_link"]),
                link: first_text(o, &["link", "url"]),
            }),
            other => scalar_text(other).map(|name| TechItem {
                name,
                ..Default::default()
            }),
        })
        .filter(|item| !item.name.is_empty())
        .collect()
}

pub fn normalize_features(entries: &[Value]) -> Vec<Feature> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(o) => Some(Feature {
                feature: first_text(o, &["feature", "name", "title"]),
                explanation: first_text(o, &["explanation", "description"]),
                vision: first_text(o, &["vision"]),
            }),
            other => scalar_text(other).map(|feature| Feature {
                feature,
                ..Default::default()
            }),
        })
        .filter(|f| !f.feature.is_empty())
        .collect()
}

/// Accepts `{name|tool, reason, link}`.
pub fn normalize_ai_suggestions(entries: &[Value]) -> Vec<AiTool> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(o) => Some(AiTool {
                name: first_text(o, &["name", "tool"]),
                reason: first_text(o, &["reason", "description"]),
                link: first_text(o, &["link", "url"]),
            }),
            other => scalar_text(other).map(|name| AiTool {
                name,
                ..Default::default()
            }),
        })
        .filter(|tool| !tool.name.is_empty())
        .collect()
}

/// Accepts the short `{challenge, solution}` shape and the full four-field shape.
pub fn normalize_challenges(entries: &[Value]) -> Vec<Challenge> {
    entries
        .iter()
        .filter_map(Value::as_object)
        .map(|o| Challenge {
            challenge: first_text(o, &["challenge"]),
            impact: first_text(o, &["impact"]),
            solution: first_text(o, &["solution"]),
            contingency: first_text(o, &["contingency"]),
        })
        .filter(|c| !c.challenge.is_empty())
        .collect()
}

/// Accepts `{hex, use}` and `{hex, name, usage, accessibility}`. A bare string is the hex.
pub fn normalize_colors(entries: &[Value]) -> Vec<ColorSwatch> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(o) => Some(ColorSwatch {
                hex: first_text(o, &["hex", "color"]),
                name: first_text(o, &["name"]),
                usage: first_text(o, &["usage", "use"]),
                accessibility: first_text(o, &["accessibility"]),
            }),
            other => scalar_text(other).map(|hex| ColorSwatch {
                hex,
                ..Default::default()
            }),
        })
        .filter(|swatch| !swatch.hex.is_empty())
        .collect()
}

/// Accepts plain strings, `{font, style}` and `{name, type, url, pairings}`.
/// A missing URL falls back to the Google Fonts specimen page.
pub fn normalize_fonts(entries: &[Value]) -> Vec<FontItem> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::Object(o) => Some(FontItem {
                name: first_text(o, &["name", "font"]),
                font_type: first_text(o, &["type", "style"]),
                url: first_text(o, &["url"]),
                pairings: first_text(o, &["pairings"]),
            }),
            other => scalar_text(other).map(|name| FontItem {
                name,
                ..Default::default()
            }),
        })
        .filter(|font| !font.name.is_empty())
        .map(|mut font| {
            if font.url.is_empty() {
                font.url = google_fonts_url(&font.name);
            }
            font
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_google_fonts_url_joins_words() {
        assert_eq!(
            google_fonts_url("Fira  Code"),
            "https://fonts.google.com/specimen/Fira+Code"
        );
    }

    #[test]
    fn test_font_shapes_all_resolve() {
        let fonts = normalize_fonts(&[
            json!("Inter"),
            json!({"font": "Roboto Mono", "style": "Monospace"}),
            json!({"name": "Lora", "type": "Display", "url": "https://example.com/lora", "pairings": "Inter"}),
        ]);

        assert_eq!(
            fonts,
            vec![
                FontItem {
                    name: "Inter".to_string(),
                    font_type: String::new(),
                    url: "https://fonts.google.com/specimen/Inter".to_string(),
                    pairings: String::new(),
                },
                FontItem {
                    name: "Roboto Mono".to_string(),
                    font_type: "Monospace".to_string(),
                    url: "https://fonts.google.com/specimen/Roboto+Mono".to_string(),
                    pairings: String::new(),
                },
                FontItem {
                    name: "Lora".to_string(),
                    font_type: "Display".to_string(),
                    url: "https://example.com/lora".to_string(),
                    pairings: "Inter".to_string(),
                },
            ]
        );
    }

    #[test]
    fn test_tech_stack_legacy_and_current_agree() {
        let legacy = normalize_tech_stack(&[json!({
            "id": 3,
            "technology": "PostgreSQL",
            "description": "Relational integrity",
            "imageUrl": "https://example.com/pg.svg"
        })]);
        let current = normalize_tech_stack(&[json!({
            "name": "PostgreSQL",
            "reason": "Relational integrity",
            "imageLink": "https://example.com/pg.svg"
        })]);
        assert_eq!(legacy, current);
    }

    #[test]
    fn test_nameless_entries_are_dropped() {
        let stack = normalize_tech_stack(&[json!({"reason": "no name"}), json!(null)]);
        assert!(stack.is_empty());
    }

    #[test]
    fn test_blank_name_falls_through_to_alias() {
        let stack = normalize_tech_stack(&[json!({
            "name": "",
            "technology": "Rust",
            "reason": "  ",
            "description": "Memory safety"
        })]);
        assert_eq!(stack.len(), 1);
        assert_eq!(stack[0].name, "Rust");
        assert_eq!(stack[0].reason, "Memory safety");

        let tools = normalize_ai_suggestions(&[json!({"name": null, "tool": "Cursor"})]);
        assert_eq!(tools[0].name, "Cursor");
    }

    #[test]
    fn test_color_use_alias() {
        let colors = normalize_colors(&[json!({"hex": "#FFFFFF", "use": "Background"})]);
        assert_eq!(colors[0].usage, "Background");
        assert_eq!(colors[0].name, "");
    }

    #[test]
    fn test_ai_tool_alias() {
        let tools = normalize_ai_suggestions(&[json!({"tool": "Cursor", "reason": "Refactors"})]);
        assert_eq!(tools[0].name, "Cursor");
        assert_eq!(tools[0].reason, "Refactors");
    }

    #[test]
    fn test_short_challenge_shape() {
        let challenges =
            normalize_challenges(&[json!({"challenge": "Scaling", "solution": "Read replicas"})]);
        assert_eq!(challenges[0].impact, "");
        assert_eq!(challenges[0].solution, "Read replicas");
    }
}
