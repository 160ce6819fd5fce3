//! Maps a performance deviation on a single (direction normalized) criterion to a partial
//! preference degree in `[0, 1]`.

#[cfg(test)]
#[path = "../../tests/unit/preference/generalized_test.rs"]
mod generalized_test;

use crate::models::GeneralizedCriterion;
use crate::utils::Float;

impl GeneralizedCriterion {
    /// Returns preference degree for deviation `d = performance(i) - performance(j)`.
    /// Thresholds are assumed to be validated (p > q for linear and level shapes).
    pub fn preference(&self, deviation: Float) -> Float {
        let d = deviation;
        match *self {
            Self::Usual => step(d, 0.),
            Self::UShape { q } => step(d, q),
            Self::VShape { p } => {
                if d <= 0. {
                    0.
                } else if d <= p {
                    d / p
                } else {
                    1.
                }
            }
            Self::Level { q, p } => {
                if d <= q {
                    0.
                } else if d <= p {
                    0.5
                } else {
                    1.
                }
            }
            Self::VShapeIndifference { q, p } => {
                if d <= q {
                    0.
                } else if d <= p {
                    (d - q) / (p - q)
                } else {
                    1.
                }
            }
            Self::Gaussian { s } => {
                if d <= 0. {
                    0.
                } else {
                    1. - (-(d * d) / (2. * s * s)).exp()
                }
            }
        }
    }
}

#[inline]
fn step(deviation: Float, threshold: Float) -> Float {
    if deviation <= threshold { 0. } else { 1. }
}
