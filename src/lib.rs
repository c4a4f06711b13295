//! This crate provides tools for simulating the Kuramoto model in Rust, i.e., a population of phase oscillators
//! with individual natural frequencies and mutual sinusoidal coupling.
//!
//! # Creating Networks
//!
//! ## From Scratch
//!
//! ```rust
//! use kuramoto::network::OscillatorNetwork;
//!
//! // Two oscillators with the same coupling strength, step size 0.01
//! let network = OscillatorNetwork::build_uniform(2, 0.01, 0.5, vec![0.0, 1.0], vec![1.0, 1.2]).unwrap();
//! assert_eq!(network.size(), 2);
//!
//! // Every per-oscillator vector must match the network size
//! assert!(OscillatorNetwork::build(3, 0.01, vec![0.5; 3], vec![0.0; 2], vec![1.0; 3]).is_err());
//! ```
//!
//! ## At Random
//!
//! ```rust
//! use kuramoto::network::OscillatorNetwork;
//!
//! // 200 oscillators with coupling 4/200, phases uniform in [0, 2π) and standard normal natural frequencies
//! let network = OscillatorNetwork::rand(200, 0.05, 4.0 / 200.0, (0.0, 1.0), 42).unwrap();
//! assert_eq!(network.phases().len(), 200);
//! ```
//!
//! # Simulating Networks
//!
//! ```rust
//! use kuramoto::network::OscillatorNetwork;
//! use kuramoto::order::{polar, OrderParameter};
//! use kuramoto::utils::PhaseWrap;
//!
//! let mut network = OscillatorNetwork::rand(50, 0.05, 0.08, (0.0, 1.0), 42).unwrap();
//!
//! // One explicit Euler step
//! network.make_step();
//! let (magnitude, argument) = polar(network.calculate_order_param());
//! assert!(magnitude > 0.0);
//! assert_eq!(argument, 0.0);
//!
//! // The magnitude of the order parameter after each of 100 steps
//! let magnitudes = network.run(100);
//! assert_eq!(magnitudes.len(), 100);
//!
//! // Phases wrapped on [0, 2π) and order parameter on the unit circle
//! let mut network = network.with_phase_wrap(PhaseWrap::Canonical);
//! let order_params = network.run_order_params(100, OrderParameter::Canonical);
//! assert!(order_params.iter().all(|&(r, _)| r <= 1.0 + 1e-12));
//! ```

use std::f64::consts::PI;

pub mod error;
pub mod network;
pub mod order;
pub mod utils;

/// The modulus used to wrap the phases after every step by default.
pub const DEFAULT_PHASE_MODULUS: f64 = PI;
/// The period of a phase on the unit circle.
pub const CANONICAL_PHASE_MODULUS: f64 = 2.0 * PI;
