//! The tool functions themselves.
//!
//! Every tool is a pure function from typed parameters to a small
//! serializable result. Nothing here touches the network or shared state;
//! `hello` is the only one with a side effect (it reads the wall clock).

use chrono::Utc;
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct HelloResult {
    pub message: String,
    /// RFC 3339 timestamp taken at call time.
    pub timestamp: String,
}

#[derive(Debug, Serialize)]
pub struct AddResult {
    pub operation: &'static str,
    pub a: i64,
    pub b: i64,
    pub result: i64,
}

#[derive(Debug, Serialize)]
pub struct MultiplyResult {
    pub operation: &'static str,
    pub a: f64,
    pub b: f64,
    pub result: f64,
}

#[derive(Debug, Serialize)]
pub struct TempConvertResult {
    pub celsius: f64,
    pub fahrenheit: f64,
    pub kelvin: f64,
}

#[derive(Debug, Serialize)]
pub struct TextStats {
    pub text: String,
    pub character_count: usize,
    pub word_count: usize,
    pub uppercase_count: usize,
    pub lowercase_count: usize,
    pub digit_count: usize,
}

/// Square root either succeeds or reports a domain error in the payload.
/// The error case is a valid result, not an HTTP failure.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum SqrtResult {
    Ok { number: f64, square_root: f64 },
    Err { error: String },
}

/// Greeting with the caller's name (default "Student") and the current time.
pub fn hello(name: &str) -> HelloResult {
    HelloResult {
        message: format!("Hello, {}! This is your tool server speaking.", name),
        timestamp: Utc::now().to_rfc3339(),
    }
}

pub fn add(a: i64, b: i64) -> AddResult {
    AddResult {
        operation: "addition",
        a,
        b,
        result: a + b,
    }
}

pub fn multiply(a: f64, b: f64) -> MultiplyResult {
    MultiplyResult {
        operation: "multiplication",
        a,
        b,
        result: a * b,
    }
}

/// Celsius to Fahrenheit and Kelvin, both rounded to 2 decimals.
pub fn temp_convert(celsius: f64) -> TempConvertResult {
    TempConvertResult {
        celsius,
        fahrenheit: round2(celsius * 9.0 / 5.0 + 32.0),
        kelvin: round2(celsius + 273.15),
    }
}

/// Character-level statistics over a string.
///
/// Definitions (see DESIGN.md):
/// - `character_count`: Unicode scalar values, not bytes
/// - `word_count`: maximal non-whitespace runs per `split_whitespace`
///   (Unicode `White_Space`)
/// - case counts: full Unicode `is_uppercase` / `is_lowercase`
/// - `digit_count`: ASCII decimal digits only
///
/// The classifications are non-exclusive, so the counts need not sum to
/// `character_count`.
pub fn analyze_text(text: &str) -> TextStats {
    let mut uppercase_count = 0;
    let mut lowercase_count = 0;
    let mut digit_count = 0;
    let mut character_count = 0;

    for c in text.chars() {
        character_count += 1;
        if c.is_uppercase() {
            uppercase_count += 1;
        }
        if c.is_lowercase() {
            lowercase_count += 1;
        }
        if c.is_ascii_digit() {
            digit_count += 1;
        }
    }

    TextStats {
        text: text.to_string(),
        character_count,
        word_count: text.split_whitespace().count(),
        uppercase_count,
        lowercase_count,
        digit_count,
    }
}

/// Principal square root rounded to 4 decimals. A negative input is a
/// domain error carried in the payload, not a rejected request.
pub fn sqrt(number: f64) -> SqrtResult {
    if number < 0.0 {
        SqrtResult::Err {
            error: "Cannot calculate square root of negative number".to_string(),
        }
    } else {
        SqrtResult::Ok {
            number,
            square_root: round4(number.sqrt()),
        }
    }
}

/// Round to 2 decimal places, half away from zero.
#[inline]
fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Round to 4 decimal places, half away from zero.
#[inline]
fn round4(x: f64) -> f64 {
    (x * 10_000.0).round() / 10_000.0
}
