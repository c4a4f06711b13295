//! Order parameters quantifying the synchronization of a population of phases.
//!
//! Two definitions are provided:
//! - [`OrderParameter::Literal`] averages the *real* exponential of every phase, `(1/N) Σ exp(φᵢ)`.
//!   The result is always real and its magnitude is not bounded by one.
//! - [`OrderParameter::Canonical`] averages points on the unit circle, `(1/N) Σ exp(ⅈφᵢ)`.
//!   Its magnitude lies in [0, 1] and reaches one for perfectly synchronized phases.
//!
//! Both divide by the number of phases, so an empty population yields NaN.
use nalgebra::Complex;
use serde::{Deserialize, Serialize};

/// The definition of order parameter to evaluate.
#[derive(Debug, Default, PartialEq, Eq, Clone, Copy, Serialize, Deserialize)]
pub enum OrderParameter {
    /// Mean of the real exponential of the phases.
    #[default]
    Literal,
    /// Mean of the complex exponential of the phases.
    Canonical,
}

impl OrderParameter {
    /// Evaluate the order parameter over the given phases.
    pub fn evaluate(&self, phases: &[f64]) -> Complex<f64> {
        match self {
            OrderParameter::Literal => literal_order_param(phases),
            OrderParameter::Canonical => canonical_order_param(phases),
        }
    }
}

/// Returns `(1/N) Σᵢ exp(φᵢ)`, with the real exponential of every phase promoted to a complex number.
pub fn literal_order_param(phases: &[f64]) -> Complex<f64> {
    let sum = phases.iter().fold(0.0, |sum, p| sum + p.exp());
    Complex::new(sum, 0.0) / phases.len() as f64
}

/// Returns `(1/N) Σᵢ exp(ⅈφᵢ)`.
pub fn canonical_order_param(phases: &[f64]) -> Complex<f64> {
    let sum = phases
        .iter()
        .fold(Complex::new(0.0, 0.0), |sum, &p| sum + Complex::cis(p));
    sum / phases.len() as f64
}

/// Returns the magnitude and the argument (in (-π, π]) of a complex number.
pub fn polar(z: Complex<f64>) -> (f64, f64) {
    (z.norm(), z.im.atan2(z.re))
}

/// Returns the cartesian coordinates `(cos φᵢ, sin φᵢ)` of every phase on the unit circle.
pub fn rectangular(phases: &[f64]) -> (Vec<f64>, Vec<f64>) {
    phases.iter().map(|p| (p.cos(), p.sin())).unzip()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn test_literal_order_param_identical_zero_phases() {
        assert_eq!(literal_order_param(&[0.0; 5]), Complex::new(1.0, 0.0));
    }

    #[test]
    fn test_literal_order_param_is_unbounded() {
        let order = literal_order_param(&[0.0, 3.0, -3.0]);
        assert_eq!(order.im, 0.0);
        assert!(order.norm() > 1.0);
        assert!((order.re - (1.0 + 3.0_f64.exp() + (-3.0_f64).exp()) / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_canonical_order_param() {
        let order = canonical_order_param(&[0.3; 4]);
        assert!((order.norm() - 1.0).abs() < 1e-12);
        assert!((order.arg() - 0.3).abs() < 1e-12);

        let order = canonical_order_param(&[0.0, PI / 2.0, PI, 3.0 * PI / 2.0]);
        assert!(order.norm() < 1e-12);
    }

    #[test]
    fn test_empty_population() {
        let order = literal_order_param(&[]);
        assert!(order.re.is_nan());
        assert!(canonical_order_param(&[]).re.is_nan());
    }

    #[test]
    fn test_polar() {
        assert_eq!(polar(Complex::new(2.0, 0.0)), (2.0, 0.0));

        let (r, theta) = polar(Complex::new(0.0, -3.0));
        assert_eq!(r, 3.0);
        assert!((theta + PI / 2.0).abs() < 1e-15);

        let (r, theta) = polar(Complex::new(-1.0, 0.0));
        assert_eq!(r, 1.0);
        assert_eq!(theta, PI);
    }

    #[test]
    fn test_rectangular() {
        let (x, y) = rectangular(&[0.0, PI / 2.0]);
        assert_eq!(x.len(), 2);
        assert_eq!((x[0], y[0]), (1.0, 0.0));
        assert!(x[1].abs() < 1e-15);
        assert_eq!(y[1], 1.0);
    }

    #[test]
    fn test_evaluate_dispatch() {
        let phases = [0.1, 0.2];
        assert_eq!(OrderParameter::default().evaluate(&phases), literal_order_param(&phases));
        assert_eq!(
            OrderParameter::Canonical.evaluate(&phases),
            canonical_order_param(&phases)
        );
    }
}
