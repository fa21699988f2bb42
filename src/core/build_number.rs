//! iOS build number parsing and increment
//!
//! Build numbers are parsed leniently: the whole string first, then the last
//! dot-separated segment, then zero. The parse is kept as a tagged value so
//! callers can log which rule applied.

use crate::error::{BumpError, Result};
use serde_json::Value;
use std::num::IntErrorKind;
use tracing::debug;

/// Build number used when the descriptor has none
pub const DEFAULT_BUILD_NUMBER: &str = "0";

/// How a build number was read
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildNumberParse {
    /// The whole value is an integer
    Whole(i128),
    /// Only the segment after the last `.` is an integer
    TrailingSegment(i128),
    /// Nothing numeric was found; counts as zero
    Fallback,
}

/// Parse a signed integer, ignoring surrounding whitespace.
///
/// `Ok(None)` means the text is not an integer at all. An integer outside the
/// 128-bit range is an error rather than "not an integer".
fn parse_integer(raw: &str) -> Result<Option<i128>> {
    match raw.trim().parse::<i128>() {
        Ok(n) => Ok(Some(n)),
        Err(e) if matches!(e.kind(), IntErrorKind::PosOverflow | IntErrorKind::NegOverflow) => {
            Err(BumpError::invalid_build_number(raw, "integer is out of range"))
        }
        Err(_) => Ok(None),
    }
}

impl BuildNumberParse {
    /// Parse a raw build number string
    pub fn parse(raw: &str) -> Result<Self> {
        if let Some(n) = parse_integer(raw)? {
            return Ok(Self::Whole(n));
        }

        // `rsplit` always yields at least one item
        let last = raw.rsplit('.').next().unwrap_or(raw);
        Ok(match parse_integer(last)? {
            Some(n) => Self::TrailingSegment(n),
            None => Self::Fallback,
        })
    }

    /// Parse a build number as stored in the descriptor.
    ///
    /// Strings go through [`BuildNumberParse::parse`]. Integral numbers are
    /// taken as-is and other numbers are truncated toward zero. Anything else
    /// is parsed from its JSON text.
    pub fn from_json(value: &Value) -> Result<Self> {
        match value {
            Value::String(s) => Self::parse(s),
            Value::Number(n) => {
                let text = n.to_string();
                if let Some(whole) = parse_integer(&text)? {
                    return Ok(Self::Whole(whole));
                }
                match n.as_f64().filter(|f| f.is_finite()) {
                    Some(f) if f.abs() < i128::MAX as f64 => Ok(Self::Whole(f.trunc() as i128)),
                    Some(_) => Err(BumpError::invalid_build_number(text, "number is out of range")),
                    None => Self::parse(&text),
                }
            }
            other => Self::parse(&other.to_string()),
        }
    }

    /// Numeric value of the parse
    pub fn value(self) -> i128 {
        match self {
            Self::Whole(n) | Self::TrailingSegment(n) => n,
            Self::Fallback => 0,
        }
    }

    /// Value of the next build
    pub fn next(self) -> Result<i128> {
        let next = self.value().checked_add(1).ok_or_else(|| {
            BumpError::invalid_build_number(self.value().to_string(), "cannot be incremented")
        })?;
        debug!("Build number {:?} advances to {}", self, next);
        Ok(next)
    }
}
