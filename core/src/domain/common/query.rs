use std::cmp::Ordering;

use crate::domain::common::entities::app_errors::CoreError;

/// Value of a named entity field, as seen by list filters and sorting.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldValue {
    Text(String),
    Number(f64),
    List(Vec<String>),
}

/// Exposes entity fields by name so a [`ListQuery`] can filter and sort them.
pub trait Filterable {
    /// Fields accepted in `filter[...]` and `sort`.
    const FIELDS: &'static [&'static str];
    /// Fields scanned by the free-text `search` term.
    const SEARCH_FIELDS: &'static [&'static str];

    fn field_value(&self, field: &str) -> Option<FieldValue>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConditionOperator {
    Eq,
    Ne,
    Gt,
    Gte,
    Lt,
    Lte,
    In,
    Contains,
}

#[derive(Debug, Clone, PartialEq)]
pub struct FieldCondition {
    pub field: String,
    pub operator: ConditionOperator,
    pub value: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SortKey {
    pub field: String,
    pub direction: SortDirection,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListQuery {
    pub search: Option<String>,
    pub conditions: Vec<FieldCondition>,
    pub sort: Vec<SortKey>,
    pub offset: usize,
    pub limit: Option<usize>,
}

impl ListQuery {
    pub fn with_condition(
        mut self,
        field: impl Into<String>,
        operator: ConditionOperator,
        value: impl Into<String>,
    ) -> Self {
        self.conditions.push(FieldCondition {
            field: field.into(),
            operator,
            value: value.into(),
        });
        self
    }

    pub fn sorted_by(mut self, field: impl Into<String>, direction: SortDirection) -> Self {
        self.sort.push(SortKey {
            field: field.into(),
            direction,
        });
        self
    }

    /// Rejects filters or sort keys naming fields the entity does not expose.
    pub fn validate<T: Filterable>(&self) -> Result<(), CoreError> {
        let unknown = self
            .conditions
            .iter()
            .map(|c| c.field.as_str())
            .chain(self.sort.iter().map(|s| s.field.as_str()))
            .find(|field| !T::FIELDS.contains(field));

        match unknown {
            Some(field) => Err(CoreError::Invalid(format!("unknown field '{}'", field))),
            None => Ok(()),
        }
    }

    /// Filters, sorts (stable) and paginates a snapshot of the store.
    pub fn apply<T: Filterable + Clone>(&self, items: &[T]) -> Vec<T> {
        let search = self
            .search
            .as_ref()
            .map(|s| s.trim().to_lowercase())
            .filter(|s| !s.is_empty());

        let mut selected: Vec<T> = items
            .iter()
            .filter(|item| match &search {
                Some(term) => matches_search(*item, term),
                None => true,
            })
            .filter(|item| self.conditions.iter().all(|c| c.matches(*item)))
            .cloned()
            .collect();

        if !self.sort.is_empty() {
            selected.sort_by(|a, b| {
                self.sort
                    .iter()
                    .map(|key| {
                        let ordering =
                            compare_values(a.field_value(&key.field), b.field_value(&key.field));
                        match key.direction {
                            SortDirection::Asc => ordering,
                            SortDirection::Desc => ordering.reverse(),
                        }
                    })
                    .find(|o| *o != Ordering::Equal)
                    .unwrap_or(Ordering::Equal)
            });
        }

        let paged = selected.into_iter().skip(self.offset);
        match self.limit {
            Some(limit) => paged.take(limit).collect(),
            None => paged.collect(),
        }
    }
}

impl FieldCondition {
    pub fn matches<T: Filterable + ?Sized>(&self, item: &T) -> bool {
        let Some(actual) = item.field_value(&self.field) else {
            return false;
        };
        let expected = self.value.trim().to_lowercase();

        match actual {
            FieldValue::Text(text) => match_text(&text.to_lowercase(), self.operator, &expected),
            FieldValue::Number(number) => match_number(number, self.operator, &expected),
            FieldValue::List(values) => {
                let values: Vec<String> = values.iter().map(|v| v.to_lowercase()).collect();
                match self.operator {
                    ConditionOperator::Ne => !values.iter().any(|v| *v == expected),
                    ConditionOperator::In => split_list(&expected)
                        .iter()
                        .any(|wanted| values.iter().any(|v| v == wanted)),
                    ConditionOperator::Contains => values.iter().any(|v| v.contains(&expected)),
                    _ => values.iter().any(|v| *v == expected),
                }
            }
        }
    }
}

fn matches_search<T: Filterable + ?Sized>(item: &T, term: &str) -> bool {
    T::SEARCH_FIELDS
        .iter()
        .filter_map(|field| item.field_value(field))
        .any(|value| match value {
            FieldValue::Text(text) => text.to_lowercase().contains(term),
            FieldValue::List(values) => values.iter().any(|v| v.to_lowercase().contains(term)),
            FieldValue::Number(_) => false,
        })
}

fn split_list(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .collect()
}

fn match_text(actual: &str, operator: ConditionOperator, expected: &str) -> bool {
    match operator {
        ConditionOperator::Eq => actual == expected,
        ConditionOperator::Ne => actual != expected,
        ConditionOperator::Gt => actual > expected,
        ConditionOperator::Gte => actual >= expected,
        ConditionOperator::Lt => actual < expected,
        ConditionOperator::Lte => actual <= expected,
        ConditionOperator::In => split_list(expected).iter().any(|v| v == actual),
        ConditionOperator::Contains => actual.contains(expected),
    }
}

fn match_number(actual: f64, operator: ConditionOperator, expected: &str) -> bool {
    if operator == ConditionOperator::In {
        return split_list(expected)
            .iter()
            .filter_map(|v| v.parse::<f64>().ok())
            .any(|v| v == actual);
    }

    let Ok(expected) = expected.parse::<f64>() else {
        return false;
    };

    match operator {
        ConditionOperator::Eq | ConditionOperator::Contains => actual == expected,
        ConditionOperator::Ne => actual != expected,
        ConditionOperator::Gt => actual > expected,
        ConditionOperator::Gte => actual >= expected,
        ConditionOperator::Lt => actual < expected,
        ConditionOperator::Lte => actual <= expected,
        ConditionOperator::In => false,
    }
}

fn compare_values(a: Option<FieldValue>, b: Option<FieldValue>) -> Ordering {
    match (a, b) {
        (Some(FieldValue::Number(a)), Some(FieldValue::Number(b))) => {
            a.partial_cmp(&b).unwrap_or(Ordering::Equal)
        }
        (Some(FieldValue::Text(a)), Some(FieldValue::Text(b))) => {
            a.to_lowercase().cmp(&b.to_lowercase())
        }
        (Some(FieldValue::List(a)), Some(FieldValue::List(b))) => a.len().cmp(&b.len()),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        _ => Ordering::Equal,
    }
}
