//! Blueprint schema audit: checks model output against the 12-field blueprint schema.
//!
//! The audit is advisory. It never modifies the blueprint and never blocks a response;
//! it turns "the model returned a different shape" into typed, loggable issues.

use serde::Serialize;
use serde_json::Value;

/// Minimum number of timeline scenarios the prompt asks for.
pub const EXPECTED_SCENARIOS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum JsonKind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Object,
}

impl JsonKind {
    pub fn of(value: &Value) -> Self {
        match value {
            Value::Null => JsonKind::Null,
            Value::Bool(_) => JsonKind::Bool,
            Value::Number(_) => JsonKind::Number,
            Value::String(_) => JsonKind::String,
            Value::Array(_) => JsonKind::Array,
            Value::Object(_) => JsonKind::Object,
        }
    }
}

/// A top-level blueprint field, with the names earlier prompt versions used for it.
#[derive(Debug)]
pub struct CanonicalField {
    pub name: &'static str,
    pub expected: JsonKind,
    pub aliases: &'static [&'static str],
}

const fn field(
    name: &'static str,
    expected: JsonKind,
    aliases: &'static [&'static str],
) -> CanonicalField {
    CanonicalField {
        name,
        expected,
        aliases,
    }
}

pub const CANONICAL_FIELDS: &[CanonicalField] = &[
    field("project_name", JsonKind::String, &[]),
    field("user_journey", JsonKind::Array, &[]),
    field("to_do_list", JsonKind::Array, &[]),
    field("tech_stack", JsonKind::Array, &[]),
    field("main_features", JsonKind::Array, &[]),
    field("api_reference", JsonKind::String, &[]),
    field("ai_suggestions", JsonKind::Array, &[]),
    field("estimated_timeline", JsonKind::Array, &[]),
    field("potential_challenges", JsonKind::Array, &[]),
    field("suggested_color_schema", JsonKind::Array, &["Suggested_color_schema"]),
    field("fonts", JsonKind::Array, &["Fonts_to_use"]),
    field("additional_notes", JsonKind::Array, &[]),
];

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SchemaIssueKind {
    NotAnObject { found: JsonKind },
    Missing,
    LegacyName { found: String },
    WrongType { expected: JsonKind, found: JsonKind },
    TooFewScenarios { expected: usize, found: usize },
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SchemaIssue {
    pub field: String,
    #[serde(flatten)]
    pub kind: SchemaIssueKind,
}

#[derive(Debug, Clone, Default, Serialize)]
pub struct SchemaAudit {
    pub issues: Vec<SchemaIssue>,
    /// Canonical fields present under their canonical name or an alias.
    pub fields_present: usize,
}

impl SchemaAudit {
    pub fn is_conformant(&self) -> bool {
        self.issues.is_empty()
    }

    /// Loose check: at least half of the canonical fields are present in some form.
    pub fn resembles_blueprint(&self) -> bool {
        self.fields_present * 2 >= CANONICAL_FIELDS.len()
    }

    pub fn summary(&self) -> String {
        self.issues
            .iter()
            .map(|issue| match &issue.kind {
                SchemaIssueKind::NotAnObject { found } => format!("root is {found:?}"),
                SchemaIssueKind::Missing => format!("{} missing", issue.field),
                SchemaIssueKind::LegacyName { found } => {
                    format!("{} found as legacy '{found}'", issue.field)
                }
                SchemaIssueKind::WrongType { expected, found } => {
                    format!("{} is {found:?}, expected {expected:?}", issue.field)
                }
                SchemaIssueKind::TooFewScenarios { expected, found } => {
                    format!("{} has {found} scenarios, expected {expected}", issue.field)
                }
            })
            .collect::<Vec<_>>()
            .join("; ")
    }
}

/// Audits a blueprint value against the canonical schema.
pub fn audit_blueprint(value: &Value) -> SchemaAudit {
    let Some(object) = value.as_object() else {
        return SchemaAudit {
            issues: vec![SchemaIssue {
                field: "$".to_string(),
                kind: SchemaIssueKind::NotAnObject {
                    found: JsonKind::of(value),
                },
            }],
            fields_present: 0,
        };
    };

    let mut audit = SchemaAudit::default();

    for field in CANONICAL_FIELDS {
        let Some(found) = object.get(field.name) else {
            match field.aliases.iter().find(|alias| object.contains_key(**alias)) {
                Some(alias) => {
                    audit.fields_present += 1;
                    audit.issues.push(SchemaIssue {
                        field: field.name.to_string(),
                        kind: SchemaIssueKind::LegacyName {
                            found: alias.to_string(),
                        },
                    });
                }
                None => audit.issues.push(SchemaIssue {
                    field: field.name.to_string(),
                    kind: SchemaIssueKind::Missing,
                }),
            }
            continue;
        };

        audit.fields_present += 1;

        let kind = JsonKind::of(found);
        if kind != field.expected {
            audit.issues.push(SchemaIssue {
                field: field.name.to_string(),
                kind: SchemaIssueKind::WrongType {
                    expected: field.expected,
                    found: kind,
                },
            });
            continue;
        }

        if field.name == "estimated_timeline" {
            let scenarios = found.as_array().map(Vec::len).unwrap_or(0);
            if scenarios < EXPECTED_SCENARIOS {
                audit.issues.push(SchemaIssue {
                    field: field.name.to_string(),
                    kind: SchemaIssueKind::TooFewScenarios {
                        expected: EXPECTED_SCENARIOS,
                        found: scenarios,
                    },
                });
            }
        }
    }

    audit
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn conformant_blueprint() -> Value {
        json!({
            "project_name": "Gear Swap",
            "user_journey": ["Step 1: Sign up - Quick onboarding | Competitors: eBay | Value: Niche focus"],
            "to_do_list": ["Backend - Set up listings API (Priority: High)"],
            "tech_stack": [{"name": "Rust", "reason": "Fast", "imageLink": "", "link": ""}],
            "main_features": [{"feature": "Listings", "explanation": "CRUD", "vision": "Auctions"}],
            "api_reference": "openapi: 3.0.3",
            "ai_suggestions": [{"name": "Copilot", "reason": "Speed", "link": ""}],
            "estimated_timeline": [
                {"scenario": "Solo", "team_size": 1},
                {"scenario": "Pair", "team_size": 2},
                {"scenario": "Small", "team_size": 3},
                {"scenario": "Medium", "team_size": 5},
                {"scenario": "Large", "team_size": 8}
            ],
            "potential_challenges": [],
            "suggested_color_schema": [],
            "fonts": [],
            "additional_notes": []
        })
    }

    #[test]
    fn test_conformant_blueprint_has_no_issues() {
        let audit = audit_blueprint(&conformant_blueprint());
        assert!(audit.is_conformant(), "unexpected issues: {}", audit.summary());
        assert_eq!(audit.fields_present, CANONICAL_FIELDS.len());
        assert!(audit.resembles_blueprint());
    }

    #[test]
    fn test_legacy_names_are_reported() {
        let mut blueprint = conformant_blueprint();
        let object = blueprint.as_object_mut().unwrap();
        let colors = object.remove("suggested_color_schema").unwrap();
        object.insert("Suggested_color_schema".to_string(), colors);
        let fonts = object.remove("fonts").unwrap();
        object.insert("Fonts_to_use".to_string(), fonts);

        let audit = audit_blueprint(&blueprint);
        assert_eq!(audit.issues.len(), 2);
        assert_eq!(
            audit.issues[0],
            SchemaIssue {
                field: "suggested_color_schema".to_string(),
                kind: SchemaIssueKind::LegacyName {
                    found: "Suggested_color_schema".to_string()
                },
            }
        );
        assert_eq!(audit.fields_present, CANONICAL_FIELDS.len());
    }

    #[test]
    fn test_wrong_type_and_missing_are_reported() {
        let mut blueprint = conformant_blueprint();
        let object = blueprint.as_object_mut().unwrap();
        object.insert("additional_notes".to_string(), json!("One long note"));
        object.remove("api_reference");

        let audit = audit_blueprint(&blueprint);
        assert!(audit.issues.contains(&SchemaIssue {
            field: "api_reference".to_string(),
            kind: SchemaIssueKind::Missing,
        }));
        assert!(audit.issues.contains(&SchemaIssue {
            field: "additional_notes".to_string(),
            kind: SchemaIssueKind::WrongType {
                expected: JsonKind::Array,
                found: JsonKind::String,
            },
        }));
    }

    #[test]
    fn test_short_timeline_is_reported() {
        let mut blueprint = conformant_blueprint();
        blueprint["estimated_timeline"] = json!([{"scenario": "Solo", "team_size": 1}]);

        let audit = audit_blueprint(&blueprint);
        assert_eq!(
            audit.issues,
            vec![SchemaIssue {
                field: "estimated_timeline".to_string(),
                kind: SchemaIssueKind::TooFewScenarios {
                    expected: EXPECTED_SCENARIOS,
                    found: 1
                },
            }]
        );
    }

    #[test]
    fn test_non_object_root() {
        let audit = audit_blueprint(&json!(["not", "a", "blueprint"]));
        assert_eq!(audit.issues.len(), 1);
        assert!(matches!(
            audit.issues[0].kind,
            SchemaIssueKind::NotAnObject {
                found: JsonKind::Array
            }
        ));
        assert!(!audit.resembles_blueprint());
    }

    #[test]
    fn test_arbitrary_object_does_not_resemble_blueprint() {
        let audit = audit_blueprint(&json!({"title": "Todo app", "notes": "none"}));
        assert_eq!(audit.fields_present, 0);
        assert!(!audit.resembles_blueprint());
    }

    #[test]
    fn test_issue_serializes_flat() {
        let issue = SchemaIssue {
            field: "fonts".to_string(),
            kind: SchemaIssueKind::LegacyName {
                found: "Fonts_to_use".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(&issue).unwrap(),
            json!({"field": "fonts", "kind": "legacy_name", "found": "Fonts_to_use"})
        );
    }
}
