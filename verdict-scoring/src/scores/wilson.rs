//! Wilson score interval for a Bernoulli proportion via `statrs`.
//!
//! `yes` helpful votes out of `n = yes + no` are treated as Bernoulli trials.
//! The lower bound of the two-sided interval is the ranking score: it
//! rewards a high helpful ratio and penalizes small vote counts, so 99 of
//! 100 outranks 1 of 1.
//!
//! ```text
//! z     = Φ⁻¹(1 - (1 - confidence) / 2)
//! phat  = yes / n
//! bound = (phat + z²/2n ∓ z·√((phat(1 - phat) + z²/4n) / n)) / (1 + z²/n)
//! ```

use serde::{Deserialize, Serialize};
use statrs::distribution::{ContinuousCDF, Normal};
use verdict_core::errors::ScoreError;

/// Both ends of a Wilson score interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WilsonInterval {
    pub lower: f64,
    pub upper: f64,
}

/// Two-sided critical value of the standard normal for `confidence`.
///
/// `confidence` must lie strictly inside (0, 1).
pub fn critical_value(confidence: f64) -> Result<f64, ScoreError> {
    if !(confidence > 0.0 && confidence < 1.0) {
        return Err(ScoreError::InvalidConfidence { value: confidence });
    }
    let normal = Normal::new(0.0, 1.0).map_err(|e| ScoreError::Distribution {
        message: e.to_string(),
    })?;
    Ok(normal.inverse_cdf(1.0 - (1.0 - confidence) / 2.0))
}

/// Wilson lower bound at the given confidence. 0 when there are no votes.
pub fn lower_bound(yes: u64, no: u64, confidence: f64) -> Result<f64, ScoreError> {
    let z = critical_value(confidence)?;
    Ok(interval_with_z(yes, no, z).lower)
}

/// Full Wilson interval at the given confidence.
pub fn interval(yes: u64, no: u64, confidence: f64) -> Result<WilsonInterval, ScoreError> {
    let z = critical_value(confidence)?;
    Ok(interval_with_z(yes, no, z))
}

/// Wilson interval for a precomputed critical value `z`.
///
/// With no votes the lower bound is 0 and the upper bound 1.
pub fn interval_with_z(yes: u64, no: u64, z: f64) -> WilsonInterval {
    let n = yes as f64 + no as f64;
    if n == 0.0 {
        return WilsonInterval {
            lower: 0.0,
            upper: 1.0,
        };
    }

    let phat = yes as f64 / n;
    let z2 = z * z;
    let center = phat + z2 / (2.0 * n);
    let margin = z * ((phat * (1.0 - phat) + z2 / (4.0 * n)) / n).sqrt();
    let denom = 1.0 + z2 / n;

    // With yes == 0 the bound is analytically 0; the float form leaves ±1e-17 residue.
    let lower = if yes == 0 {
        0.0
    } else {
        ((center - margin) / denom).clamp(0.0, 1.0)
    };
    let upper = ((center + margin) / denom).clamp(0.0, 1.0);

    WilsonInterval { lower, upper }
}
