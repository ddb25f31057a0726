//! To-do list parsing and the board helpers (categories, filtering, sorting).
//!
//! Grammar: `<category> - <task> (Priority: <High|Medium|Low>)`.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;
use serde_json::Value;

use crate::display::first_text;

pub const DEFAULT_CATEGORY: &str = "General";

static CATEGORY_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^-]+) - ").expect("valid category regex"));
static PRIORITY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\(Priority: (High|Medium|Low)\)$").expect("valid priority regex")
});

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Priority {
    High,
    #[default]
    Medium,
    Low,
}

impl Priority {
    /// Case-insensitive; anything unrecognised is `Medium`.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_ascii_lowercase().as_str() {
            "high" => Priority::High,
            "low" => Priority::Low,
            _ => Priority::Medium,
        }
    }

    pub fn rank(self) -> u8 {
        match self {
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TodoItem {
    pub category: String,
    pub task: String,
    pub priority: Priority,
}

pub fn parse_todo_item(item: &str) -> TodoItem {
    let item = item.trim();

    let category = CATEGORY_RE
        .captures(item)
        .map(|c| c[1].trim().to_string())
        .unwrap_or_else(|| DEFAULT_CATEGORY.to_string());
    let priority = PRIORITY_RE
        .captures(item)
        .map(|c| Priority::parse(&c[1]))
        .unwrap_or_default();

    let task = CATEGORY_RE.replace(item, "");
    let task = PRIORITY_RE.replace(&task, "");

    TodoItem {
        category,
        task: task.trim().to_string(),
        priority,
    }
}

/// Accepts to-do strings and already-parsed item objects.
pub fn normalize_todo_list(entries: &[Value]) -> Vec<TodoItem> {
    entries
        .iter()
        .filter_map(|entry| match entry {
            Value::String(s) => Some(parse_todo_item(s)),
            Value::Object(o) => {
                let category = first_text(o, &["category"]);
                Some(TodoItem {
                    category: if category.is_empty() {
                        DEFAULT_CATEGORY.to_string()
                    } else {
                        category
                    },
                    task: first_text(o, &["task"]),
                    priority: Priority::parse(&first_text(o, &["priority"])),
                })
            }
            _ => None,
        })
        .collect()
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
    Priority,
    Category,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Ascending,
    Descending,
}

/// Distinct categories in first-seen order.
pub fn categories(items: &[TodoItem]) -> Vec<&str> {
    let mut seen: Vec<&str> = Vec::new();
    for item in items {
        if !seen.contains(&item.category.as_str()) {
            seen.push(&item.category);
        }
    }
    seen
}

/// Items in the given category; `None` keeps everything.
pub fn filter_by_category<'a>(items: &'a [TodoItem], category: Option<&str>) -> Vec<&'a TodoItem> {
    items
        .iter()
        .filter(|item| category.map_or(true, |c| item.category == c))
        .collect()
}

/// Stable sort: items that compare equal keep their original order in both directions.
/// Categories compare case-insensitively.
pub fn sort_items(items: &mut [&TodoItem], key: SortKey, direction: SortDirection) {
    items.sort_by(|a, b| {
        let ordering = match key {
            SortKey::Priority => a.priority.rank().cmp(&b.priority.rank()),
            SortKey::Category => a
                .category
                .to_lowercase()
                .cmp(&b.category.to_lowercase()),
        };
        match direction {
            SortDirection::Ascending => ordering,
            SortDirection::Descending => ordering.reverse(),
        }
    });
}

/// Convenience for the common board view: optional filter, then sort.
pub fn board_view<'a>(
    items: &'a [TodoItem],
    category: Option<&str>,
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a TodoItem> {
    let mut view = filter_by_category(items, category);
    sort_items(&mut view, key, direction);
    view
}
