use clap::Parser;
use log;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;

use kuramoto::error::KuramotoError;
use kuramoto::network::OscillatorNetwork;
use kuramoto::order::OrderParameter;
use kuramoto::utils::PhaseWrap;

#[derive(Parser, Debug)]
struct Args {
    /// The seed used for sampling the initial phases and natural frequencies
    #[arg(long, default_value = "0")]
    seed: u64,
    /// The number of oscillators
    #[arg(short = 'N', long, default_value = "200")]
    size: usize,
    /// The total coupling strength, shared equally between the oscillators
    #[arg(short = 'J', long, default_value = "4.0")]
    coupling: f64,
    /// The integration step size
    #[arg(long, default_value = "0.05")]
    stepsize: f64,
    /// The number of integration steps
    #[arg(long, default_value = "1000")]
    steps: usize,
    /// The number of steps between two log records
    #[arg(long, default_value = "100")]
    log_every: usize,
    /// Wrap the phases on [0, 2π) and use the order parameter on the unit circle
    #[arg(long)]
    canonical: bool,
}

fn main() -> Result<(), KuramotoError> {
    let args = Args::parse();

    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build();

    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(LevelFilter::Info))
        .map_err(|e| KuramotoError::IOError(e.to_string()))?;

    log4rs::init_config(config).map_err(|e| KuramotoError::IOError(e.to_string()))?;

    log::info!("{:?}", args);

    let (phase_wrap, order_parameter) = if args.canonical {
        (PhaseWrap::Canonical, OrderParameter::Canonical)
    } else {
        (PhaseWrap::Literal, OrderParameter::Literal)
    };

    let mut network = OscillatorNetwork::rand(
        args.size,
        args.stepsize,
        args.coupling / args.size as f64,
        (0.0, 1.0),
        args.seed,
    )?
    .with_phase_wrap(phase_wrap);
    log::info!("Network sampling: done!");

    let order_params = network.run_order_params(args.steps, order_parameter);
    for (i, (magnitude, argument)) in order_params.iter().enumerate() {
        if (i + 1) % args.log_every.max(1) == 0 {
            log::info!(
                "Step {}: order parameter magnitude is {:.3} (argument {:.3})",
                i + 1,
                magnitude,
                argument
            );
        }
    }

    Ok(())
}
