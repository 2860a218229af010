use std::fmt;

use log::info;

use super::{check_matrix_size, write_comparison, Timing};
use crate::{
    args::Arg, config::Settings, kernels, matrix::Matrix, range::NdRange, reference,
    timing::time_it, ClError,
};

pub const MIN_VALUE: i32 = -100;
pub const MAX_VALUE: i32 = 100;

#[derive(Debug, Clone)]
pub struct MatmulReport {
    pub device: String,
    pub gpu: Matrix<i32>,
    pub cpu: Matrix<i32>,
    pub timing: Timing,
}

impl MatmulReport {
    pub fn equal(&self) -> bool {
        self.gpu == self.cpu
    }
}

/// `C = A·B` für zufällige quadratische int‑Matrizen `dim × dim`
pub fn run(settings: &Settings, dim: usize) -> Result<MatmulReport, ClError> {
    check_matrix_size(dim, dim)?;
    let mut rng = settings.rng();
    let a = Matrix::random(dim, dim, MIN_VALUE, MAX_VALUE, &mut rng);
    let b = Matrix::random(dim, dim, MIN_VALUE, MAX_VALUE, &mut rng);
    multiply(settings, &a, &b)
}

pub fn multiply(settings: &Settings, a: &Matrix<i32>, b: &Matrix<i32>) -> Result<MatmulReport, ClError> {
    let dim = a.rows();
    if a.cols() != dim || b.rows() != dim || b.cols() != dim {
        return Err(ClError::InvalidInput("matrices must be square and of equal size".into()));
    }
    check_matrix_size(dim, dim)?;

    let job = settings.job(&kernels::MUL)?;
    info!("matmul: {dim}x{dim} on {}", job.device_name());

    let mut gpu = Matrix::zeros(dim, dim);
    let (res, gpu_ms) = time_it(|| {
        job.run(
            &mut [
                Arg::input(a.as_slice()),
                Arg::input(b.as_slice()),
                Arg::output(gpu.as_mut_slice()),
                Arg::int(dim as i32),
            ],
            &NdRange::grid(&[dim, dim]),
        )
    });
    res?;

    let (cpu, cpu_ms) = time_it(|| reference::matmul(a, b));
    Ok(MatmulReport { device: job.device_name(), gpu, cpu, timing: Timing { gpu_ms, cpu_ms } })
}

impl fmt::Display for MatmulReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n~~~~~ Let's go with OpenCL ({})", self.device)?;
        writeln!(f, "OpenCL result:")?;
        write!(f, "{}", self.gpu.preview(|v| format!("{v:4}")))?;
        writeln!(f, "\n~~~~~ Let's go without OpenCL")?;
        writeln!(f, "CPU result:")?;
        write!(f, "{}", self.cpu.preview(|v| format!("{v:4}")))?;
        write_comparison(f, self.equal())?;
        write!(f, "{}", self.timing)?;
        writeln!(f, "\n~~~~~ Bye!")
    }
}
