//! Gauß‑Elimination: pro Spalte Pivotsuche auf dem Host, dann ein
//! Kernel‑Start `to_triangular`; Rückwärtseinsetzen auf dem Host.

use std::fmt;

use log::{debug, info};
use rand::Rng;

use super::{check_matrix_size, close, first_mismatch, write_comparison, Timing, SHOWN};
use crate::{
    args::Arg,
    config::Settings,
    job::Job,
    kernels,
    matrix::Matrix,
    range::NdRange,
    reference::gauss,
    timing::time_it,
    ClError,
};

/// relative Toleranz beim Vergleich GPU ↔ CPU
pub const TOLERANCE: f32 = 1e-3;

#[derive(Debug, Clone)]
pub struct GaussReport {
    pub device: String,
    pub triangular: Matrix<f32>,
    pub gpu: Vec<f32>,
    pub cpu: Vec<f32>,
    /// max |A·x − b| der GPU‑Lösung
    pub residual: f32,
    pub timing: Timing,
}

impl GaussReport {
    pub fn equal(&self) -> bool {
        first_mismatch(&self.gpu, &self.cpu, |g, c| close(*g, *c, TOLERANCE)).is_none()
    }
}

/// Zufällige erweiterte Matrix `dim × (dim + 1)`, Einträge in [-10, 10], Schritt 0.01
pub fn random_system(dim: usize, rng: &mut impl Rng) -> Matrix<f32> {
    Matrix::from_fn(dim, dim + 1, |_, _| rng.gen_range(-1000..=1000) as f32 / 100.0)
}

pub fn run(settings: &Settings, dim: usize) -> Result<GaussReport, ClError> {
    check_matrix_size(dim, dim.saturating_add(1))?;
    let system = random_system(dim, &mut settings.rng());
    solve(settings, &system)
}

pub fn solve(settings: &Settings, system: &Matrix<f32>) -> Result<GaussReport, ClError> {
    let dim = system.rows();
    if system.cols() != dim + 1 {
        return Err(ClError::InvalidInput(format!(
            "augmented matrix must be {dim}x{}, got {dim}x{}",
            dim + 1,
            system.cols()
        )));
    }
    check_matrix_size(dim, dim + 1)?;

    let job = settings.job(&kernels::GAUSS)?;
    info!("gauss: {dim} unknowns on {}", job.device_name());

    let mut triangular = system.clone();
    let (gpu, gpu_ms) = time_it(|| -> Result<Vec<f32>, ClError> {
        to_triangular(&job, &mut triangular)?;
        gauss::back_substitute(&triangular)
    });
    let gpu = gpu?;

    let (cpu, cpu_ms) = time_it(|| gauss::solve(system.clone()));
    let cpu = cpu?;

    Ok(GaussReport {
        device: job.device_name(),
        residual: residual(system, &gpu),
        triangular,
        gpu,
        cpu,
        timing: Timing { gpu_ms, cpu_ms },
    })
}

/// Obere Dreiecksform auf dem Gerät, ein Kernel‑Start je Pivotspalte
pub fn to_triangular(job: &Job, m: &mut Matrix<f32>) -> Result<(), ClError> {
    let dim = m.rows();
    for k in 0..dim {
        gauss::pivot(m, k)?;
        if k + 1 == dim {
            break;
        }
        debug!("elimination step {k}");
        job.run(
            &mut [Arg::in_out(m.as_mut_slice()), Arg::int(dim as i32), Arg::int(k as i32)],
            &NdRange::linear(dim),
        )?;
    }
    Ok(())
}

/// max_i |Σ_j A[i][j]·x[j] − b[i]|
pub fn residual(system: &Matrix<f32>, x: &[f32]) -> f32 {
    let n = system.rows();
    (0..n)
        .map(|i| {
            let ax: f32 = (0..n).map(|j| system[(i, j)] * x[j]).sum();
            (ax - system[(i, n)]).abs()
        })
        .fold(0.0, f32::max)
}

impl fmt::Display for GaussReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n~~~~~ Let's go with OpenCL ({})", self.device)?;
        writeln!(f, "Triangular matrix:")?;
        write!(f, "{}", self.triangular.preview(|v| format!("{v:10.2}")))?;
        writeln!(f, "First {SHOWN} unknowns:")?;
        for (i, (g, c)) in self.gpu.iter().zip(&self.cpu).enumerate().take(SHOWN) {
            writeln!(f, "x[{i}] = {g:12.6}   (CPU {c:12.6})")?;
        }
        writeln!(f, "Max residual |Ax - b|: {:e}", self.residual)?;
        write_comparison(f, self.equal())?;
        write!(f, "{}", self.timing)?;
        writeln!(f, "\n~~~~~ Bye!")
    }
}
