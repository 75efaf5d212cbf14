// Copyright (c) 2025 - Cowboy AI, Inc.
//! Inclusive Range Value Object
//!
//! Used for connection ports and machine CPU/RAM bounds. A port is a
//! degenerate range whose endpoints are equal.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{StitchError, StitchResult};

/// Inclusive numeric interval `[min, max]`
///
/// # Invariants
/// - `min <= max`
///
/// The zero range `{0, 0}` is the default and means "unspecified" for
/// machine attributes.
///
/// # Examples
///
/// ```rust
/// use cim_stitch::domain::Range;
///
/// let ports = Range::new(1000, 65535).unwrap();
/// assert!(!ports.is_port());
/// assert!(Range::port(8080).is_port());
/// assert!(Range::new(10, 1).is_err());
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RangeRepr")]
pub struct Range {
    min: u32,
    max: u32,
}

impl Range {
    /// The unspecified range `{0, 0}`
    pub const ZERO: Range = Range { min: 0, max: 0 };

    /// Create a new range with validation
    pub fn new(min: u32, max: u32) -> StitchResult<Self> {
        if min > max {
            return Err(StitchError::InvalidRange { min, max });
        }
        Ok(Self { min, max })
    }

    /// Single port range
    pub fn port(port: u32) -> Self {
        Self {
            min: port,
            max: port,
        }
    }

    pub fn min(&self) -> u32 {
        self.min
    }

    pub fn max(&self) -> u32 {
        self.max
    }

    /// True when the range covers exactly one value
    pub fn is_port(&self) -> bool {
        self.min == self.max
    }

    /// Check whether `x` falls inside the range.
    ///
    /// A zero `max` means no upper bound, so the default range accepts
    /// every value.
    pub fn accepts(&self, x: u32) -> bool {
        self.min <= x && (self.max == 0 || x <= self.max)
    }
}

/// Unchecked wire form, validated through [`Range::new`]
#[derive(Deserialize)]
struct RangeRepr {
    min: u32,
    max: u32,
}

impl TryFrom<RangeRepr> for Range {
    type Error = StitchError;

    fn try_from(repr: RangeRepr) -> Result<Self, Self::Error> {
        Range::new(repr.min, repr.max)
    }
}

impl From<u32> for Range {
    fn from(port: u32) -> Self {
        Range::port(port)
    }
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_port() {
            write!(f, "{}", self.min)
        } else {
            write!(f, "{}-{}", self.min, self.max)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test]
    fn test_range_validation() {
        assert!(Range::new(1, 100).is_ok());
        assert!(Range::new(5, 5).is_ok());
        assert_eq!(
            Range::new(100, 1),
            Err(StitchError::InvalidRange { min: 100, max: 1 })
        );
    }

    #[test]
    fn test_port_boxing() {
        let range: Range = 8080u32.into();
        assert_eq!(range.min(), 8080);
        assert_eq!(range.max(), 8080);
        assert!(range.is_port());
        assert_eq!(range, Range::port(8080));
    }

    #[test_case(Range::ZERO, 0, true ; "zero range accepts zero")]
    #[test_case(Range::ZERO, 64, true ; "zero range is unbounded")]
    #[test_case(Range::port(4), 4, true ; "port accepts itself")]
    #[test_case(Range::port(4), 5, false ; "port rejects above")]
    #[test_case(Range::port(4), 3, false ; "port rejects below")]
    fn test_accepts(range: Range, x: u32, expected: bool) {
        assert_eq!(range.accepts(x), expected);
    }

    #[test]
    fn test_accepts_bounded() {
        let range = Range::new(2, 8).unwrap();
        assert!(range.accepts(2));
        assert!(range.accepts(8));
        assert!(!range.accepts(1));
        assert!(!range.accepts(9));
    }

    #[test]
    fn test_deserialize_validates() {
        let range: Range = serde_json::from_str(r#"{"min":1000,"max":65535}"#).unwrap();
        assert_eq!(range, Range::new(1000, 65535).unwrap());

        let err = serde_json::from_str::<Range>(r#"{"min":5,"max":1}"#).unwrap_err();
        assert!(err.to_string().contains("min 5 is greater than max 1"));
    }

    #[test]
    fn test_display() {
        assert_eq!(Range::port(80).to_string(), "80");
        assert_eq!(Range::new(1000, 65535).unwrap().to_string(), "1000-65535");
    }
}
