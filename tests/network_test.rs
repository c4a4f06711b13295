use std::f64::consts::PI;

use kuramoto::error::KuramotoError;
use kuramoto::network::OscillatorNetwork;
use kuramoto::order::{polar, OrderParameter};
use kuramoto::utils::PhaseWrap;

#[test]
fn test_construction_validation() {
    for n in 0..5 {
        assert!(OscillatorNetwork::build(n, 0.1, vec![1.0; n], vec![0.0; n], vec![1.0; n]).is_ok());
        assert!(matches!(
            OscillatorNetwork::build(n, 0.1, vec![1.0; n + 1], vec![0.0; n], vec![1.0; n]),
            Err(KuramotoError::SizeMismatch { .. })
        ));
        assert!(matches!(
            OscillatorNetwork::build_uniform(n, 0.1, 1.0, vec![0.0; n], vec![1.0; n + 2]),
            Err(KuramotoError::SizeMismatch { .. })
        ));
    }
}

#[test]
fn test_determinism() {
    let phases = vec![0.1, 1.3, 2.9, 0.7, 2.2];
    let frequencies = vec![0.5, -0.3, 1.1, 0.0, 0.8];
    let couplings = vec![0.2, 0.4, 0.1, 0.3, 0.5];

    let mut network_1 =
        OscillatorNetwork::build(5, 0.05, couplings.clone(), phases.clone(), frequencies.clone())
            .unwrap();
    let mut network_2 = OscillatorNetwork::build(5, 0.05, couplings, phases, frequencies).unwrap();

    for _ in 0..200 {
        network_1.make_step();
        network_2.make_step();
        assert_eq!(network_1.phases(), network_2.phases());
    }
    assert_eq!(network_1.run(50), network_2.run(50));
}

#[test]
fn test_phases_stay_bounded() {
    let mut network = OscillatorNetwork::rand(30, 0.1, 2.0, (5.0, 3.0), 11).unwrap();
    for _ in 0..500 {
        network.make_step();
        assert!(network.phases().iter().all(|p| p.abs() < PI));
    }

    let mut network = OscillatorNetwork::rand(30, 0.1, 2.0, (-5.0, 3.0), 11)
        .unwrap()
        .with_phase_wrap(PhaseWrap::Canonical);
    for _ in 0..500 {
        network.make_step();
        assert!(network.phases().iter().all(|p| (0.0..2.0 * PI).contains(p)));
    }
}

#[test]
fn test_run_counts_steps() {
    let mut network = OscillatorNetwork::rand(10, 0.05, 0.1, (0.0, 1.0), 5).unwrap();
    for steps in [1, 7, 20] {
        let before = network.stepcount();
        assert_eq!(network.run(steps).len(), steps);
        assert_eq!(network.stepcount(), before + steps);
    }
}

#[test]
fn test_identical_phases_literal_order_param() {
    let mut network =
        OscillatorNetwork::build_uniform(6, 0.1, 1.0, vec![0.0; 6], vec![0.0; 6]).unwrap();
    assert_eq!(polar(network.calculate_order_param()), (1.0, 0.0));

    // identical phases and frequencies stay identical, the drive vanishes
    network.make_step();
    assert_eq!(network.phases(), &[0.0; 6]);
    assert_eq!(network.run(3), vec![1.0; 3]);
}

#[test]
fn test_strong_coupling_synchronizes() {
    let size = 200;
    let mut network = OscillatorNetwork::rand(size, 0.05, 4.0 / size as f64, (0.0, 1.0), 42)
        .unwrap()
        .with_phase_wrap(PhaseWrap::Canonical);
    let order_params = network.run_order_params(1000, OrderParameter::Canonical);
    let (r_final, _) = order_params[order_params.len() - 1];
    assert!(r_final > 0.6);
}

#[test]
fn test_uncoupled_stays_incoherent() {
    let mut network = OscillatorNetwork::rand(200, 0.05, 0.0, (0.0, 1.0), 42)
        .unwrap()
        .with_phase_wrap(PhaseWrap::Canonical);
    let order_params = network.run_order_params(1000, OrderParameter::Canonical);
    assert!(order_params.iter().all(|&(r, _)| r < 0.3));
}
