//! Phase wrapping utilities.
use serde::{Deserialize, Serialize};

use crate::{CANONICAL_PHASE_MODULUS, DEFAULT_PHASE_MODULUS};

/// The rule used to bring phases back into a bounded range after every step.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum PhaseWrap {
    /// Truncated remainder by π (C `fmod` semantics): the result keeps the sign
    /// of the phase and lies in (-π, π).
    #[default]
    Literal,
    /// Euclidean remainder by 2π: the result lies in [0, 2π).
    Canonical,
}

impl PhaseWrap {
    /// The modulus of the wrapping rule.
    pub fn modulus(&self) -> f64 {
        match self {
            PhaseWrap::Literal => DEFAULT_PHASE_MODULUS,
            PhaseWrap::Canonical => CANONICAL_PHASE_MODULUS,
        }
    }

    /// Wrap a single phase.
    pub fn apply(&self, phase: f64) -> f64 {
        match self {
            PhaseWrap::Literal => fmod(phase, self.modulus()),
            PhaseWrap::Canonical => {
                // rem_euclid rounds tiny negative phases up to the modulus itself
                let wrapped = phase.rem_euclid(self.modulus());
                if wrapped < self.modulus() {
                    wrapped
                } else {
                    0.0
                }
            }
        }
    }
}

/// Truncated floating point remainder, the result has the sign of `x`.
pub fn fmod(x: f64, modulo: f64) -> f64 {
    x % modulo
}
