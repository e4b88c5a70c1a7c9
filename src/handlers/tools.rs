//! One axum handler per tool.
//!
//! # Flow
//! 1. Extract the raw query map
//! 2. Coerce parameters (422 with field name on failure)
//! 3. Call the pure tool function
//! 4. Bump the invocation counter and serialize the result
//!
//! The `sqrt` domain error (negative input) is a payload-level result and
//! still returns 200 with an invocation counted.

use crate::error::Result;
use crate::handlers::params::{self, RawParams};
use crate::tools;
use axum::{extract::Query, Json};

fn count_invocation(tool: &'static str) {
    metrics::counter!("tool_invocations_total", "tool" => tool).increment(1);
}

/// GET /tools/hello - Greeting with an optional `name` (default "Student").
pub async fn hello_handler(Query(raw): Query<RawParams>) -> Json<tools::HelloResult> {
    let name = params::optional(&raw, "name", "Student");
    let result = tools::hello(name);
    count_invocation("hello");
    Json(result)
}

/// GET /tools/add - Integer addition of `a` and `b`.
pub async fn add_handler(Query(raw): Query<RawParams>) -> Result<Json<tools::AddResult>> {
    let a = params::require_i64(&raw, "a")?;
    let b = params::require_i64(&raw, "b")?;
    count_invocation("add");
    Ok(Json(tools::add(a, b)))
}

/// GET /tools/multiply - Floating-point multiplication of `a` and `b`.
pub async fn multiply_handler(Query(raw): Query<RawParams>) -> Result<Json<tools::MultiplyResult>> {
    let a = params::require_f64(&raw, "a")?;
    let b = params::require_f64(&raw, "b")?;
    count_invocation("multiply");
    Ok(Json(tools::multiply(a, b)))
}

/// GET /tools/temp-convert - Celsius to Fahrenheit and Kelvin.
pub async fn temp_convert_handler(
    Query(raw): Query<RawParams>,
) -> Result<Json<tools::TempConvertResult>> {
    let celsius = params::require_f64(&raw, "celsius")?;
    count_invocation("temp-convert");
    Ok(Json(tools::temp_convert(celsius)))
}

/// GET /tools/analyze-text - Character/word statistics for `text`.
pub async fn analyze_text_handler(
    Query(raw): Query<RawParams>,
) -> Result<Json<tools::TextStats>> {
    let text = params::require(&raw, "text")?;
    let stats = tools::analyze_text(text);
    count_invocation("analyze-text");
    Ok(Json(stats))
}

/// GET /tools/sqrt - Principal square root of `number`.
pub async fn sqrt_handler(Query(raw): Query<RawParams>) -> Result<Json<tools::SqrtResult>> {
    let number = params::require_f64(&raw, "number")?;
    count_invocation("sqrt");
    Ok(Json(tools::sqrt(number)))
}
