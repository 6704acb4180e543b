use std::process::ExitCode;

use clap::Parser;
use frac_gen::{generator::time_seed, FracConfig, FracRng, FractionResult};
use itertools::Itertools;
use log::{error, info};

/// Print random fractions next to an equal and an inequal one.
#[derive(Parser, Debug)]
struct Args {
    /// How many fractions to print
    #[clap(short, long, default_value = "5")]
    pub count: usize,

    /// Seed for a reproducible run, defaults to the current UTC time
    #[clap(short, long)]
    pub seed: Option<u64>,

    /// Redraw improper-branch fractions until numerator >= denominator
    #[clap(long)]
    pub improper: bool,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> FractionResult<()> {
    let config = FracConfig {
        enforce_improper: args.improper,
        ..Default::default()
    };
    let seed = args.seed.unwrap_or_else(time_seed);
    let mut rng = FracRng::with_config(seed, config)?;
    info!("printing {} fraction(s), seed {}", args.count, rng.seed());

    for _ in 0..args.count {
        let frac = rng.random_fraction();
        let equal = frac.get_equal_fraction_with(&mut rng);
        let inequal = frac.get_inequal_fraction_with(&mut rng)?;
        let factors = frac.get_common_factors();
        let factors = match factors.is_empty() {
            true => "-".to_string(),
            false => factors.iter().join(", "),
        };
        println!(
            "{}\t= {}\t!= {}\tcommon factors: {}",
            frac, equal, inequal, factors
        );
    }
    Ok(())
}
