//! Operand and result model.

use std::fmt;
use std::ops::Neg;

use serde::{Deserialize, Serialize};

/// A numeric operand or result.
///
/// Integers stay integral while the result fits in `i64`; anything touching a
/// `Float` is computed in `f64`. Equality is exact and numeric, so
/// `Int(2) == Float(2.0)` while `Int(i64::MAX)` equals no `Float` at all.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// Returns the value as `f64`. Integers beyond 2^53 lose precision.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_f64(self) -> f64 {
        match self {
            Self::Int(v) => v as f64,
            Self::Float(v) => v,
        }
    }

    /// True for integer zero and for floating zero of either sign.
    #[must_use]
    pub fn is_zero(self) -> bool {
        match self {
            Self::Int(v) => v == 0,
            Self::Float(v) => v == 0.0,
        }
    }

    #[must_use]
    pub fn is_float(self) -> bool {
        matches!(self, Self::Float(_))
    }
}

/// 2^63, the first `f64` above the `i64` range.
const I64_END: f64 = 9_223_372_036_854_775_808.0;

/// Exact comparison without rounding `i` through `f64`.
#[allow(clippy::cast_possible_truncation)]
fn int_eq_float(i: i64, f: f64) -> bool {
    if !f.is_finite() || f.fract() != 0.0 || !(-I64_END..I64_END).contains(&f) {
        return false;
    }
    f as i64 == i
}

impl PartialEq for Number {
    #[allow(clippy::float_cmp)]
    fn eq(&self, other: &Self) -> bool {
        match (*self, *other) {
            (Self::Int(a), Self::Int(b)) => a == b,
            (Self::Float(a), Self::Float(b)) => a == b,
            (Self::Int(i), Self::Float(f)) | (Self::Float(f), Self::Int(i)) => int_eq_float(i, f),
        }
    }
}

impl Neg for Number {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Int(v) => v
                .checked_neg()
                .map_or_else(|| Self::Float(-self.as_f64()), Self::Int),
            Self::Float(v) => Self::Float(-v),
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => fmt::Display::fmt(v, f),
        }
    }
}

impl From<i32> for Number {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Number {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f64> for Number {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}
