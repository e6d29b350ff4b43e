//! Proper time along a parametrised worldline.

use serde::{Deserialize, Serialize};

use crate::{CoreError, Scalar};

/// Linear map between the normalised curve parameter t ∈ [0, 1] and proper
/// time τ ∈ [start, end].
///
/// Deserialisation goes through [`ProperTimeScale::new`], so an empty or
/// non-finite interval is rejected there as well.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "ScaleBounds")]
pub struct ProperTimeScale {
    pub start: Scalar,
    pub end: Scalar,
}

#[derive(Deserialize)]
struct ScaleBounds {
    start: Scalar,
    end: Scalar,
}

impl TryFrom<ScaleBounds> for ProperTimeScale {
    type Error = CoreError;

    fn try_from(b: ScaleBounds) -> Result<Self, CoreError> {
        ProperTimeScale::new(b.start, b.end)
    }
}

impl ProperTimeScale {
    pub fn new(start: Scalar, end: Scalar) -> Result<Self, CoreError> {
        if !(start.is_finite() && end.is_finite()) || start == end {
            return Err(CoreError::EmptyInterval { start, end });
        }
        Ok(Self { start, end })
    }

    #[inline]
    pub fn span(&self) -> Scalar {
        self.end - self.start
    }

    #[inline]
    pub fn tau(&self, t: Scalar) -> Scalar {
        self.start + t * self.span()
    }

    #[inline]
    pub fn t(&self, tau: Scalar) -> Scalar {
        (tau - self.start) / self.span()
    }

    /// Every integer τ inside the interval with its curve parameter, in
    /// increasing τ order.
    pub fn integer_ticks(&self) -> Vec<(i64, Scalar)> {
        let (lo, hi) = if self.start <= self.end { (self.start, self.end) } else { (self.end, self.start) };
        let first = lo.ceil() as i64;
        let last = hi.floor() as i64;
        (first..=last).map(|tau| (tau, self.t(tau as Scalar))).collect()
    }
}

impl Default for ProperTimeScale {
    fn default() -> Self {
        Self { start: -10.0, end: 10.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scale_centres_tau_zero() {
        let s = ProperTimeScale::default();
        assert_eq!(s.tau(0.5), 0.0);
        assert_eq!(s.t(-10.0), 0.0);
        assert_eq!(s.integer_ticks().len(), 21);
    }

    #[test]
    fn empty_interval_is_rejected() {
        assert!(ProperTimeScale::new(3.0, 3.0).is_err());
        assert!(ProperTimeScale::new(0.0, Scalar::NAN).is_err());
    }

    #[test]
    fn deserialising_checks_the_interval() {
        let s: ProperTimeScale = serde_json::from_str(r#"{"start": -2.0, "end": 6.0}"#).unwrap();
        assert_eq!(s, ProperTimeScale::new(-2.0, 6.0).unwrap());
        let err = serde_json::from_str::<ProperTimeScale>(r#"{"start": 3.0, "end": 3.0}"#).unwrap_err();
        assert!(err.to_string().contains("invalid proper-time interval"), "{err}");
    }
}
