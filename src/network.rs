//! Module implementing a network of coupled phase oscillators.
use itertools::izip;
use log;
use nalgebra::{Complex, DMatrix};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal, Uniform};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use crate::error::KuramotoError;
use crate::order::{canonical_order_param, literal_order_param, polar, OrderParameter};
use crate::utils::PhaseWrap;

/// The coupling strengths between the oscillators of a network.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub enum Coupling {
    /// One weight per source oscillator. The weight of oscillator `j` scales its pull on every
    /// oscillator, i.e., `drive[i] = Σⱼ c[j] sin(φⱼ - φᵢ)`. No normalization is applied.
    PerSource(Vec<f64>),
    /// Full pairwise matrix, normalized by the network size, i.e., `drive[i] = (1/N) Σⱼ K[i, j] sin(φⱼ - φᵢ)`.
    Pairwise(DMatrix<f64>),
}

impl Coupling {
    /// Per-source coupling with the same strength for every oscillator.
    pub fn uniform(size: usize, strength: f64) -> Self {
        Coupling::PerSource(vec![strength; size])
    }

    fn check_size(&self, size: usize) -> Result<(), KuramotoError> {
        match self {
            Coupling::PerSource(weights) => {
                if weights.len() != size {
                    return Err(KuramotoError::size_mismatch("coupling", size, weights.len()));
                }
            }
            Coupling::Pairwise(matrix) => {
                if matrix.nrows() != size {
                    return Err(KuramotoError::size_mismatch(
                        "coupling matrix row",
                        size,
                        matrix.nrows(),
                    ));
                }
                if matrix.ncols() != size {
                    return Err(KuramotoError::size_mismatch(
                        "coupling matrix column",
                        size,
                        matrix.ncols(),
                    ));
                }
            }
        }
        Ok(())
    }

    /// Returns the coupling drive of every oscillator for the given phases.
    /// All drives are computed from the same phases, nothing is updated in place.
    /// The phases must match the size the coupling was validated against.
    pub(crate) fn drives(&self, phases: &[f64]) -> Vec<f64> {
        match self {
            Coupling::PerSource(weights) => phases
                .iter()
                .map(|phase| {
                    weights
                        .iter()
                        .zip(phases)
                        .fold(0.0, |drive, (c, p)| drive + c * (p - phase).sin())
                })
                .collect(),
            Coupling::Pairwise(matrix) => {
                let n = phases.len() as f64;
                phases
                    .iter()
                    .enumerate()
                    .map(|(i, phase)| {
                        matrix
                            .row(i)
                            .iter()
                            .zip(phases)
                            .fold(0.0, |drive, (c, p)| drive + c * (p - phase).sin())
                            / n
                    })
                    .collect()
            }
        }
    }
}

/// A population of phase oscillators with natural frequencies and mutual sinusoidal coupling,
/// integrated with a first order explicit (forward) Euler scheme.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct OscillatorNetwork {
    /// The number of oscillators.
    size: usize,
    /// The integration time step.
    stepsize: f64,
    /// The number of integration steps performed so far.
    stepcount: usize,
    couplings: Coupling,
    phases: Vec<f64>,
    nat_frequencies: Vec<f64>,
    /// The rule applied to the phases after every step.
    phase_wrap: PhaseWrap,
}

impl OscillatorNetwork {
    /// Create a network with one coupling strength per (source) oscillator.
    /// Returns an error if any of the vectors does not have exactly `network_size` entries.
    pub fn build(
        network_size: usize,
        stepsize: f64,
        couplings: Vec<f64>,
        phases: Vec<f64>,
        nat_frequencies: Vec<f64>,
    ) -> Result<Self, KuramotoError> {
        Self::from_parts(
            network_size,
            stepsize,
            Coupling::PerSource(couplings),
            phases,
            nat_frequencies,
        )
    }

    /// Create a network where every oscillator has the same coupling strength.
    /// Returns an error if the phases or the natural frequencies do not have exactly `network_size` entries.
    pub fn build_uniform(
        network_size: usize,
        stepsize: f64,
        coupling_strength: f64,
        phases: Vec<f64>,
        nat_frequencies: Vec<f64>,
    ) -> Result<Self, KuramotoError> {
        Self::build(
            network_size,
            stepsize,
            vec![coupling_strength; network_size],
            phases,
            nat_frequencies,
        )
    }

    /// Create a network with a full pairwise coupling matrix, where entry `(i, j)` weighs the pull of oscillator `j` on oscillator `i`.
    /// Returns an error if the matrix is not `network_size` x `network_size` or if any vector does not have exactly `network_size` entries.
    pub fn build_pairwise(
        network_size: usize,
        stepsize: f64,
        couplings: DMatrix<f64>,
        phases: Vec<f64>,
        nat_frequencies: Vec<f64>,
    ) -> Result<Self, KuramotoError> {
        Self::from_parts(
            network_size,
            stepsize,
            Coupling::Pairwise(couplings),
            phases,
            nat_frequencies,
        )
    }

    /// Returns a random network with uniform coupling strength.
    /// The phases are drawn uniformly in [0, 2π) and the natural frequencies from a normal distribution with the given (mean, standard deviation).
    ///
    /// # Examples
    ///
    /// ```
    /// use kuramoto::network::OscillatorNetwork;
    ///
    /// let network = OscillatorNetwork::rand(200, 0.05, 4.0 / 200.0, (0.0, 1.0), 42).unwrap();
    /// assert_eq!(network.size(), 200);
    /// ```
    pub fn rand(
        network_size: usize,
        stepsize: f64,
        coupling_strength: f64,
        lim_frequencies: (f64, f64),
        seed: u64,
    ) -> Result<Self, KuramotoError> {
        let (mean, std_dev) = lim_frequencies;
        if !(std_dev >= 0.0) || !std_dev.is_finite() {
            return Err(KuramotoError::InvalidParameter(format!(
                "Frequency standard deviation must be finite and non-negative, got {}",
                std_dev
            )));
        }
        let frequency_dist = Normal::new(mean, std_dev).map_err(|e| {
            KuramotoError::InvalidParameter(format!("Invalid frequency distribution: {}", e))
        })?;
        let phase_dist = Uniform::new(0.0, 2.0 * PI);

        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        let phases: Vec<f64> = (0..network_size).map(|_| phase_dist.sample(&mut rng)).collect();
        let nat_frequencies: Vec<f64> = (0..network_size)
            .map(|_| frequency_dist.sample(&mut rng))
            .collect();

        Self::build_uniform(
            network_size,
            stepsize,
            coupling_strength,
            phases,
            nat_frequencies,
        )
    }

    fn from_parts(
        network_size: usize,
        stepsize: f64,
        couplings: Coupling,
        phases: Vec<f64>,
        nat_frequencies: Vec<f64>,
    ) -> Result<Self, KuramotoError> {
        couplings.check_size(network_size)?;
        if phases.len() != network_size {
            return Err(KuramotoError::size_mismatch("phase", network_size, phases.len()));
        }
        if nat_frequencies.len() != network_size {
            return Err(KuramotoError::size_mismatch(
                "frequency",
                network_size,
                nat_frequencies.len(),
            ));
        }

        log::debug!(
            "New network of {} oscillators with step size {}",
            network_size,
            stepsize
        );

        Ok(OscillatorNetwork {
            size: network_size,
            stepsize,
            stepcount: 0,
            couplings,
            phases,
            nat_frequencies,
            phase_wrap: PhaseWrap::default(),
        })
    }

    /// Set the rule used to wrap the phases after every step.
    pub fn with_phase_wrap(mut self, phase_wrap: PhaseWrap) -> Self {
        self.phase_wrap = phase_wrap;
        self
    }

    /// Returns the number of oscillators in the network.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the integration time step.
    pub fn stepsize(&self) -> f64 {
        self.stepsize
    }

    /// Returns the number of integration steps performed so far.
    pub fn stepcount(&self) -> usize {
        self.stepcount
    }

    /// Returns a slice of the current phases.
    pub fn phases(&self) -> &[f64] {
        &self.phases[..]
    }

    /// Returns a slice of the natural frequencies.
    pub fn nat_frequencies(&self) -> &[f64] {
        &self.nat_frequencies[..]
    }

    pub fn couplings(&self) -> &Coupling {
        &self.couplings
    }

    pub fn phase_wrap(&self) -> PhaseWrap {
        self.phase_wrap
    }

    /// Returns the coupling drive of every oscillator for the current phases.
    pub fn drives(&self) -> Vec<f64> {
        self.couplings.drives(&self.phases)
    }

    /// Make one explicit Euler step: `φᵢ += stepsize * (ωᵢ + drive[i])` for all oscillators, then wrap every phase.
    /// The drives are fully evaluated on the previous phases before any phase is updated.
    pub fn make_step(&mut self) {
        let drives = self.drives();
        for (phase, frequency, drive) in izip!(
            self.phases.iter_mut(),
            self.nat_frequencies.iter(),
            drives.iter()
        ) {
            *phase += self.stepsize * (frequency + drive);
        }

        self.stepcount += 1;

        let phase_wrap = self.phase_wrap;
        self.phases
            .iter_mut()
            .for_each(|phase| *phase = phase_wrap.apply(*phase));
    }

    /// Returns the order parameter `(1/N) Σᵢ exp(φᵢ)`, with the *real* exponential of every phase.
    /// See [`crate::order`] for the difference with [`Self::canonical_order_param`].
    pub fn calculate_order_param(&self) -> Complex<f64> {
        literal_order_param(&self.phases)
    }

    /// Returns the order parameter `(1/N) Σᵢ exp(ⅈφᵢ)`, whose magnitude lies in [0, 1].
    pub fn canonical_order_param(&self) -> Complex<f64> {
        canonical_order_param(&self.phases)
    }

    /// Make `steps` integration steps and return the magnitude of the (literal) order parameter after each of them.
    pub fn run(&mut self, steps: usize) -> Vec<f64> {
        self.run_order_params(steps, OrderParameter::Literal)
            .into_iter()
            .map(|(magnitude, _)| magnitude)
            .collect()
    }

    /// Make `steps` integration steps and return the magnitude and argument of the chosen order parameter after each of them.
    pub fn run_order_params(&mut self, steps: usize, kind: OrderParameter) -> Vec<(f64, f64)> {
        log::info!("Starting simulation of {} steps...", steps);

        let mut order_params = Vec::with_capacity(steps);
        for _ in 0..steps {
            self.make_step();
            let (magnitude, argument) = polar(kind.evaluate(&self.phases));
            log::trace!(
                "Step {}: order parameter magnitude is {}",
                self.stepcount,
                magnitude
            );
            order_params.push((magnitude, argument));
        }

        log::info!("Simulation completed successfully!");
        order_params
    }

    /// Save the network to a file.
    pub fn save_to<P: AsRef<Path>>(&self, path: P) -> Result<(), KuramotoError> {
        let file = File::create(path).map_err(|e| KuramotoError::IOError(e.to_string()))?;
        let mut writer = BufWriter::new(file);
        serde_json::to_writer_pretty(&mut writer, self)
            .map_err(|e| KuramotoError::IOError(e.to_string()))?;
        writer.flush().map_err(|e| KuramotoError::IOError(e.to_string()))
    }

    /// Load a network from a file.
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, KuramotoError> {
        let file = File::open(path).map_err(|e| KuramotoError::IOError(e.to_string()))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| KuramotoError::IOError(e.to_string()))
    }
}
