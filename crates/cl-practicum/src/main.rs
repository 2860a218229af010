mod cli;

use std::{io, process::ExitCode};

use clap::Parser;
use cl_practicum::{
    exercises::{check, devices, gauss, matmul, parabola, platforms, sum, vector_add},
    ClError,
};

use crate::cli::{CliArgs, Exercise};

fn main() -> ExitCode {
    let args = CliArgs::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(args.log_filter()))
        .init();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &CliArgs) -> Result<(), ClError> {
    let settings = args.settings();
    match args.exercise {
        Exercise::Check => print!("{}", check::run(&settings)?),
        Exercise::Platforms => print!("{}", platforms::run()?),
        Exercise::Devices => print!("{}", devices::run()?),
        Exercise::VectorAdd { len } => print!("{}", vector_add::run(&settings, len)?),
        Exercise::Parabola { a, b, c, points } => {
            let params = parabola::ParabolaParams { a, b, c, points };
            let (a, b, c, n) = params.resolve(&mut io::stdin().lock(), &mut io::stdout())?;
            print!("{}", parabola::run(&settings, a, b, c, n)?);
        }
        Exercise::Sum { len } => print!("{}", sum::run(&settings, len)?),
        Exercise::Matmul { dim } => print!("{}", matmul::run(&settings, dim)?),
        Exercise::Gauss { dim } => print!("{}", gauss::run(&settings, dim)?),
    }

    #[cfg(feature = "metrics")]
    cl_practicum::summary();

    Ok(())
}
