//! Axum route handlers for the Display API.

use axum::{
    extract::{
        rejection::{JsonRejection, QueryRejection},
        Query,
    },
    Json,
};
use serde::Deserialize;
use serde_json::Value;

use crate::display::todo::{board_view, filter_by_category, SortDirection, SortKey};
use crate::display::{normalize_blueprint, DisplayBlueprint};
use crate::errors::AppError;

/// Optional to-do board view applied to the normalized `to_do_list`.
#[derive(Debug, Default, Deserialize)]
pub struct BoardQuery {
    pub category: Option<String>,
    pub sort: Option<String>,
    pub direction: Option<String>,
}

impl BoardQuery {
    fn sort_key(&self) -> Result<Option<SortKey>, AppError> {
        match self.sort.as_deref() {
            None => Ok(None),
            Some("priority") => Ok(Some(SortKey::Priority)),
            Some("category") => Ok(Some(SortKey::Category)),
            Some(other) => Err(AppError::Validation(format!(
                "Unknown sort '{other}', expected 'priority' or 'category'"
            ))),
        }
    }

    fn direction(&self) -> Result<SortDirection, AppError> {
        match self.direction.as_deref() {
            None | Some("desc") => Ok(SortDirection::Descending),
            Some("asc") => Ok(SortDirection::Ascending),
            Some(other) => Err(AppError::Validation(format!(
                "Unknown direction '{other}', expected 'asc' or 'desc'"
            ))),
        }
    }
}

/// POST /api/normalize
///
/// Converts a raw blueprint of any known shape into the canonical display shape.
/// `?category=&sort=priority|category&direction=asc|desc` reshapes the to-do list.
pub async fn handle_normalize(
    query: Result<Query<BoardQuery>, QueryRejection>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<DisplayBlueprint>, AppError> {
    let Query(query) = query.map_err(|rejection| {
        AppError::Validation(format!("Invalid board query: {}", rejection.body_text()))
    })?;

    let Json(raw) = payload.map_err(|rejection| {
        tracing::debug!("Unreadable normalize body: {rejection}");
        AppError::Validation("Blueprint JSON body is required".to_string())
    })?;

    if !raw.is_object() {
        return Err(AppError::Validation(
            "Blueprint must be a JSON object".to_string(),
        ));
    }

    let mut display = normalize_blueprint(&raw);

    let sort_key = query.sort_key()?;
    let direction = query.direction()?;
    if query.category.is_some() || sort_key.is_some() {
        display.to_do_list = match sort_key {
            Some(key) => {
                board_view(&display.to_do_list, query.category.as_deref(), key, direction)
            }
            None => filter_by_category(&display.to_do_list, query.category.as_deref()),
        }
        .into_iter()
        .cloned()
        .collect();
    }

    Ok(Json(display))
}
