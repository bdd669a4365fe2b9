use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Query},
    http::request::Parts,
};
use fitpulse_core::domain::common::query::{
    ConditionOperator, FieldCondition, ListQuery, SortDirection, SortKey,
};
use serde::Deserialize;
use utoipa::IntoParams;

use super::server::api_entities::api_error::ApiError;

pub const DEFAULT_PAGE_LIMIT: usize = 20;
pub const MAX_PAGE_LIMIT: usize = 100;

/// Documented list parameters. `filter[field]=value` and
/// `filter[field][op]=value` (eq, ne, gt, gte, lt, lte, in, contains) are also accepted.
#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ListQueryParams {
    /// Free-text match on the entity's searchable fields
    pub search: Option<String>,
    /// Comma-separated fields, `-` prefix for descending, e.g. `-calories,name`
    pub sort: Option<String>,
    pub offset: Option<usize>,
    /// Defaults to 20, capped at 100
    pub limit: Option<usize>,
}

pub fn parse_operator(s: &str) -> Option<ConditionOperator> {
    match s {
        "eq" => Some(ConditionOperator::Eq),
        "ne" => Some(ConditionOperator::Ne),
        "gt" => Some(ConditionOperator::Gt),
        "gte" => Some(ConditionOperator::Gte),
        "lt" => Some(ConditionOperator::Lt),
        "lte" => Some(ConditionOperator::Lte),
        "in" => Some(ConditionOperator::In),
        "contains" | "like" => Some(ConditionOperator::Contains),
        _ => None,
    }
}

/// Parse sort string like "field1,-field2,field3"
pub fn parse_sort(s: &str) -> Vec<SortKey> {
    s.split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| match part.strip_prefix('-') {
            Some(stripped) => SortKey {
                field: stripped.to_string(),
                direction: SortDirection::Desc,
            },
            None => SortKey {
                field: part.to_string(),
                direction: SortDirection::Asc,
            },
        })
        .collect()
}

fn parse_filter_key(key: &str, value: &str) -> Result<Option<FieldCondition>, ApiError> {
    let Some(filter_key) = key.strip_prefix("filter[") else {
        return Ok(None);
    };
    let Some(end_bracket) = filter_key.find(']') else {
        return Err(ApiError::BadRequest(format!("malformed filter '{}'", key)));
    };

    let field = filter_key[..end_bracket].to_string();
    let remaining = &filter_key[end_bracket + 1..];

    let operator = if remaining.is_empty() {
        ConditionOperator::Eq
    } else if let Some(operator_str) = remaining
        .strip_prefix('[')
        .and_then(|r| r.strip_suffix(']'))
    {
        parse_operator(operator_str).ok_or_else(|| {
            ApiError::BadRequest(format!("unknown filter operator '{}'", operator_str))
        })?
    } else {
        return Err(ApiError::BadRequest(format!("malformed filter '{}'", key)));
    };

    Ok(Some(FieldCondition {
        field,
        operator,
        value: value.to_string(),
    }))
}

fn parse_count(key: &str, value: &str) -> Result<usize, ApiError> {
    value
        .trim()
        .parse::<usize>()
        .map_err(|_| ApiError::BadRequest(format!("'{}' must be a non-negative integer", key)))
}

/// Builds a [`ListQuery`] from a raw query map.
/// Handles formats like:
/// - filter[field]=value (defaults to eq)
/// - filter[field][operator]=value
/// - sort=field or sort=-field
/// - search=term
/// - offset=0, limit=20
pub fn list_query_from_map(query_map: &HashMap<String, String>) -> Result<ListQuery, ApiError> {
    let mut query = ListQuery {
        limit: Some(DEFAULT_PAGE_LIMIT),
        ..Default::default()
    };

    // Deterministic condition order regardless of map iteration order.
    let mut keys: Vec<&String> = query_map.keys().collect();
    keys.sort();

    for key in keys {
        let value = &query_map[key];
        match key.as_str() {
            "sort" => query.sort = parse_sort(value),
            "search" => {
                query.search = Some(value.trim().to_string()).filter(|s| !s.is_empty());
            }
            "offset" => query.offset = parse_count(key, value)?,
            "limit" => query.limit = Some(parse_count(key, value)?.clamp(1, MAX_PAGE_LIMIT)),
            _ => {
                if let Some(condition) = parse_filter_key(key, value)? {
                    query.conditions.push(condition);
                }
            }
        }
    }

    Ok(query)
}

/// Extractor for list endpoints supporting filter, sort, search and pagination.
#[derive(Debug, Clone)]
pub struct ListQueryExtractor(pub ListQuery);

impl<S> FromRequestParts<S> for ListQueryExtractor
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let Query(query_map) = Query::<HashMap<String, String>>::try_from_uri(&parts.uri)
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        Ok(ListQueryExtractor(list_query_from_map(&query_map)?))
    }
}
