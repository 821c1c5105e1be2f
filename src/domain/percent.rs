//! Percentage-of-baseline arithmetic with explicit sentinel values.

use serde::Serialize;

use crate::domain::state::round2;

/// Sign carried by an unbounded percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sign {
    Positive,
    Negative,
}

/// Result of a percentage-of-baseline computation.
///
/// A zero baseline has no finite relative change, and JSON cannot carry
/// IEEE infinities, so the edge cases are tagged explicitly instead of
/// letting non-finite floats leak into serialized output.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum PnlPercent {
    /// Baseline and current balance are both zero.
    Zero,
    /// Baseline was zero while the current balance is not.
    Infinite(Sign),
    /// Relative change against the baseline, rounded to 2 decimals.
    ///
    /// A current balance of exactly zero against a nonzero baseline is the
    /// `-1` sentinel ("-100%").
    Value(f64),
}

impl PnlPercent {
    /// Percentage change from `base` to `current`.
    pub fn compute(base: f64, current: f64) -> Self {
        if base == 0.0 {
            return if current == 0.0 {
                PnlPercent::Zero
            } else if current > 0.0 {
                PnlPercent::Infinite(Sign::Positive)
            } else {
                PnlPercent::Infinite(Sign::Negative)
            };
        }
        if current == 0.0 {
            return PnlPercent::Value(-1.0);
        }
        PnlPercent::Value(round2((current - base) / base.abs()))
    }

    /// Collapse to a plain float, mapping the tagged edges onto IEEE values.
    pub fn as_f64(&self) -> f64 {
        match self {
            PnlPercent::Zero => 0.0,
            PnlPercent::Infinite(Sign::Positive) => f64::INFINITY,
            PnlPercent::Infinite(Sign::Negative) => f64::NEG_INFINITY,
            PnlPercent::Value(v) => *v,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_base_zero_current() {
        assert_eq!(PnlPercent::compute(0.0, 0.0), PnlPercent::Zero);
        assert_eq!(PnlPercent::compute(0.0, 0.0).as_f64(), 0.0);
    }

    #[test]
    fn test_zero_base_positive_current() {
        let pct = PnlPercent::compute(0.0, 5.0);
        assert_eq!(pct, PnlPercent::Infinite(Sign::Positive));
        assert_eq!(pct.as_f64(), f64::INFINITY);
    }

    #[test]
    fn test_zero_base_negative_current() {
        let pct = PnlPercent::compute(0.0, -5.0);
        assert_eq!(pct, PnlPercent::Infinite(Sign::Negative));
        assert_eq!(pct.as_f64(), f64::NEG_INFINITY);
    }

    #[test]
    fn test_zero_current_is_minus_one_sentinel() {
        assert_eq!(PnlPercent::compute(10.0, 0.0), PnlPercent::Value(-1.0));
    }

    #[test]
    fn test_fifty_percent_gain() {
        assert_eq!(PnlPercent::compute(100.0, 150.0), PnlPercent::Value(0.5));
    }

    #[test]
    fn test_negative_base_uses_absolute_value() {
        assert_eq!(PnlPercent::compute(-10.0, -5.0), PnlPercent::Value(0.5));
    }

    #[test]
    fn test_rounds_to_two_decimals() {
        assert_eq!(PnlPercent::compute(3.0, 4.0), PnlPercent::Value(0.33));
    }

    #[test]
    fn test_serialization_shape() {
        let json = serde_json::to_string(&PnlPercent::Zero).unwrap();
        assert_eq!(json, r#"{"kind":"zero"}"#);

        let json = serde_json::to_string(&PnlPercent::Infinite(Sign::Positive)).unwrap();
        assert_eq!(json, r#"{"kind":"infinite","value":"positive"}"#);

        let json = serde_json::to_string(&PnlPercent::Value(0.5)).unwrap();
        assert_eq!(json, r#"{"kind":"value","value":0.5}"#);
    }
}
