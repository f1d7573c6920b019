//! Plain-text persistence for a figure collection.
//!
//! Format
//! ```text
//! <figure count>
//! <vertex count> <center x> <center y> <vertex0 x> <vertex0 y>   (one line per figure)
//! ```
//! - Writing emits exactly this layout; centers are the figures' centroids.
//! - Reading is token based: any whitespace layout is accepted. A missing or
//!   non-numeric token, an unsupported vertex count, or leftover tokens fail
//!   the whole read. Nothing is returned on failure.

use std::fmt;
use std::io::{self, Read, Write};

use crate::factory;
use crate::ngon::{GeomError, Ngon};

/// Errors from `read_figures`.
#[derive(Debug)]
pub enum DecodeError {
    Io(io::Error),
    /// Input ended before the expected field.
    MissingToken { expected: &'static str },
    /// A token did not parse as the expected field.
    BadToken { token: String, expected: &'static str },
    /// A record parsed but does not describe a valid figure.
    Figure { record: usize, source: GeomError },
    /// Tokens left over after the last declared record.
    TrailingData { token: String },
}

impl fmt::Display for DecodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecodeError::Io(e) => write!(f, "read failed: {e}"),
            DecodeError::MissingToken { expected } => {
                write!(f, "unexpected end of data, expected {expected}")
            }
            DecodeError::BadToken { token, expected } => {
                write!(f, "malformed token \"{token}\", expected {expected}")
            }
            DecodeError::Figure { record, source } => write!(f, "figure {record}: {source}"),
            DecodeError::TrailingData { token } => {
                write!(f, "unexpected data after last figure: \"{token}\"")
            }
        }
    }
}

impl std::error::Error for DecodeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            DecodeError::Io(e) => Some(e),
            DecodeError::Figure { source, .. } => Some(source),
            _ => None,
        }
    }
}

impl From<io::Error> for DecodeError {
    fn from(e: io::Error) -> Self {
        DecodeError::Io(e)
    }
}

/// Write the collection in the text format above.
pub fn write_figures<W: Write>(out: &mut W, figures: &[Ngon]) -> io::Result<()> {
    writeln!(out, "{}", figures.len())?;
    for fig in figures {
        let c = fig.centroid();
        let v = fig.first_vertex();
        writeln!(out, "{} {} {} {} {}", fig.vertex_count(), c.x, c.y, v.x, v.y)?;
    }
    out.flush()
}

/// Read a collection, rebuilding each record through the factory.
pub fn read_figures<R: Read>(mut input: R) -> Result<Vec<Ngon>, DecodeError> {
    let mut text = String::new();
    input.read_to_string(&mut text)?;
    decode(&text)
}

/// Parse the text format from a string.
pub fn decode(text: &str) -> Result<Vec<Ngon>, DecodeError> {
    let mut tokens = Tokens(text.split_whitespace());
    let count: usize = tokens.next_parsed("figure count")?;
    // A hostile count must not drive the allocation.
    let mut figures = Vec::with_capacity(count.min(1024));
    for record in 0..count {
        let n: usize = tokens.next_parsed("vertex count")?;
        let ox: f64 = tokens.next_parsed("center x")?;
        let oy: f64 = tokens.next_parsed("center y")?;
        let ax: f64 = tokens.next_parsed("vertex x")?;
        let ay: f64 = tokens.next_parsed("vertex y")?;
        let fig = factory::create(n, ox, oy, ax, ay)
            .map_err(|source| DecodeError::Figure { record, source })?;
        figures.push(fig);
    }
    if let Some(token) = tokens.0.next() {
        return Err(DecodeError::TrailingData {
            token: token.to_string(),
        });
    }
    Ok(figures)
}

struct Tokens<'a>(std::str::SplitWhitespace<'a>);

impl Tokens<'_> {
    fn next_parsed<T: std::str::FromStr>(&mut self, expected: &'static str) -> Result<T, DecodeError> {
        let token = self.0.next().ok_or(DecodeError::MissingToken { expected })?;
        token.parse().map_err(|_| DecodeError::BadToken {
            token: token.to_string(),
            expected,
        })
    }
}
