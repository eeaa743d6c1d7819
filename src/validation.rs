//! Validation rules for project description values

use crate::constants::{
    ERROR_COMPLETION_BEFORE_START, ERROR_MAX_BUDGET_POSITIVE, ERROR_MAX_BUDGET_REQUIRED, ERROR_START_DATE_REQUIRED,
};
use chrono::NaiveDate;

/// Field values of one phase, as read from the wizard
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PhaseValues {
    pub start_date: Option<NaiveDate>,
    pub completion_date: Option<NaiveDate>,
    pub max_budget: Option<f64>,
}

/// Error messages for each field of a phase
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PhaseErrors {
    pub start_date: Vec<String>,
    pub completion_date: Vec<String>,
    pub max_budget: Vec<String>,
}

impl PhaseErrors {
    pub fn is_empty(&self) -> bool {
        self.start_date.is_empty() && self.completion_date.is_empty() && self.max_budget.is_empty()
    }

    /// Total number of messages across the three fields
    pub fn count(&self) -> usize {
        self.start_date.len() + self.completion_date.len() + self.max_budget.len()
    }
}

pub fn validate_start_date(value: Option<NaiveDate>) -> Vec<String> {
    match value {
        Some(_) => Vec::new(),
        None => vec![ERROR_START_DATE_REQUIRED.to_string()],
    }
}

pub fn validate_completion_date(start: Option<NaiveDate>, completion: Option<NaiveDate>) -> Vec<String> {
    match (start, completion) {
        (Some(start), Some(completion)) if completion < start => vec![ERROR_COMPLETION_BEFORE_START.to_string()],
        _ => Vec::new(),
    }
}

pub fn validate_max_budget(value: Option<f64>) -> Vec<String> {
    match value {
        None => vec![ERROR_MAX_BUDGET_REQUIRED.to_string()],
        Some(budget) if budget <= 0.0 || !budget.is_finite() => vec![ERROR_MAX_BUDGET_POSITIVE.to_string()],
        Some(_) => Vec::new(),
    }
}

/// Validate every field of a phase
pub fn validate_phase(values: &PhaseValues) -> PhaseErrors {
    PhaseErrors {
        start_date: validate_start_date(values.start_date),
        completion_date: validate_completion_date(values.start_date, values.completion_date),
        max_budget: validate_max_budget(values.max_budget),
    }
}
