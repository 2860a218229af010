use std::fmt;

use log::info;
use rand::Rng;

use super::{verify_with, Timing, SHOWN};
use crate::{
    args::Arg, config::Settings, kernels, range::NdRange, reference, timing::time_it, ClError,
};

pub const MIN_VALUE: f32 = 0.0;
pub const MAX_VALUE: f32 = 10.0;

#[derive(Debug, Clone)]
pub struct VectorAddReport {
    pub device: String,
    pub a: Vec<f32>,
    pub b: Vec<f32>,
    pub c: Vec<f32>,
    pub timing: Timing,
}

/// `c = a + b` auf dem Gerät, exakt gegen die CPU geprüft
pub fn run(settings: &Settings, len: usize) -> Result<VectorAddReport, ClError> {
    if len == 0 {
        return Err(ClError::InvalidInput("vector length must be positive".into()));
    }
    let mut rng = settings.rng();
    let a: Vec<f32> = (0..len).map(|_| rng.gen_range(MIN_VALUE..MAX_VALUE)).collect();
    let b: Vec<f32> = (0..len).map(|_| rng.gen_range(MIN_VALUE..MAX_VALUE)).collect();
    let mut c = vec![0.0_f32; len];

    let job = settings.job(&kernels::VECTOR_ADD)?;
    info!("vector_add: {len} elements on {}", job.device_name());

    let (res, gpu_ms) = time_it(|| {
        job.run(
            &mut [Arg::input(&a), Arg::input(&b), Arg::output(&mut c)],
            &NdRange::linear(len),
        )
    });
    res?;

    let (expected, cpu_ms) = time_it(|| reference::vector_add(&a, &b));
    verify(&c, &expected)?;

    Ok(VectorAddReport { device: job.device_name(), a, b, c, timing: Timing { gpu_ms, cpu_ms } })
}

/// Ein einzelnes f32‑Add pro Element: Ergebnis muss bitgleich sein
pub fn verify(got: &[f32], expected: &[f32]) -> Result<(), ClError> {
    verify_with(got, expected, |x, y| x == y)
}

impl fmt::Display for VectorAddReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Vector addition on {} successful and verified!", self.device)?;
        writeln!(f, "First {SHOWN} results of vector addition:")?;
        for ((a, b), c) in self.a.iter().zip(&self.b).zip(&self.c).take(SHOWN) {
            writeln!(f, "{a} + {b} = {c}")?;
        }
        write!(f, "{}", self.timing)
    }
}
