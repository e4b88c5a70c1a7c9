//! Query-parameter coercion shared by the tool handlers.
//!
//! Handlers extract the raw query string into a map and coerce each field
//! here, so a missing or malformed parameter is rejected with a field-level
//! validation error before the tool function ever runs.

use crate::error::{AppError, Result};
use std::collections::HashMap;

pub type RawParams = HashMap<String, String>;

/// Required string parameter.
pub fn require<'a>(params: &'a RawParams, field: &str) -> Result<&'a str> {
    params
        .get(field)
        .map(String::as_str)
        .ok_or_else(|| AppError::validation(field, "required parameter is missing"))
}

/// Optional string parameter with a default.
pub fn optional<'a>(params: &'a RawParams, field: &str, default: &'a str) -> &'a str {
    params.get(field).map(String::as_str).unwrap_or(default)
}

/// Required integer parameter.
pub fn require_i64(params: &RawParams, field: &str) -> Result<i64> {
    let raw = require(params, field)?;
    raw.parse().map_err(|_| {
        AppError::validation(field, format!("expected an integer, got '{}'", raw))
    })
}

/// Required floating-point parameter. Rejects NaN/infinity spellings since
/// no tool has a meaningful answer for them.
pub fn require_f64(params: &RawParams, field: &str) -> Result<f64> {
    let raw = require(params, field)?;
    let value: f64 = raw
        .parse()
        .map_err(|_| AppError::validation(field, format!("expected a number, got '{}'", raw)))?;
    if !value.is_finite() {
        return Err(AppError::validation(field, "expected a finite number"));
    }
    Ok(value)
}
