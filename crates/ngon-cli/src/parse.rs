//! Argument conversion for command tokens.
//!
//! Tokens arrive already split and lower-cased. The accepted grammar is
//! deliberately narrow: integers are plain digit strings, decimals are digits
//! with an optional leading '-' and at most one inner '.'.

use std::fmt;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ArgError {
    NotInteger(String),
    NotDecimal(String),
    UnknownFigure(String),
}

impl fmt::Display for ArgError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgError::NotInteger(s) => write!(f, "argument \"{s}\" is not a positive integer"),
            ArgError::NotDecimal(s) => write!(f, "argument \"{s}\" is not a double"),
            ArgError::UnknownFigure(s) => write!(f, "unknown figure {s}"),
        }
    }
}

impl std::error::Error for ArgError {}

/// Non-negative integer made of ASCII digits only.
pub fn to_int(s: &str) -> Result<usize, ArgError> {
    let bad = || ArgError::NotInteger(s.to_string());
    if s.is_empty() {
        return Err(bad());
    }
    s.bytes().try_fold(0usize, |n, b| {
        if !b.is_ascii_digit() {
            return Err(bad());
        }
        n.checked_mul(10)
            .and_then(|n| n.checked_add(usize::from(b - b'0')))
            .ok_or_else(bad)
    })
}

/// Decimal number: '-' only as the first character, at most one '.', never last.
pub fn to_double(s: &str) -> Result<f64, ArgError> {
    let bad = || ArgError::NotDecimal(s.to_string());
    let mut points = 0;
    for (i, b) in s.bytes().enumerate() {
        match b {
            b'-' if i == 0 => {}
            b'.' => {
                points += 1;
                if points > 1 || i == s.len() - 1 {
                    return Err(bad());
                }
            }
            b'0'..=b'9' => {}
            _ => return Err(bad()),
        }
    }
    s.parse().map_err(|_| bad())
}

/// Figure name → vertex count.
pub fn figure_from_name(s: &str) -> Result<usize, ArgError> {
    match s {
        "tri" => Ok(3),
        "squ" => Ok(4),
        "oct" => Ok(8),
        _ => Err(ArgError::UnknownFigure(s.to_string())),
    }
}
