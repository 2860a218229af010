use std::fmt;

use log::info;

use super::{write_comparison, Timing, SHOWN};
use crate::{
    args::Arg, config::Settings, kernels, range::NdRange, reference, timing::time_it, ClError,
};

#[derive(Debug, Clone)]
pub struct SumReport {
    pub device: String,
    pub gpu: Vec<i32>,
    pub cpu: Vec<i32>,
    pub equal: bool,
    pub timing: Timing,
}

/// Eingaben `a[i] = 2i`, `b[i] = -i`; Ergebnis sollte `i` sein
pub fn inputs(len: usize) -> (Vec<i32>, Vec<i32>) {
    let a = (0..len).map(|i| 2 * i as i32).collect();
    let b = (0..len).map(|i| -(i as i32)).collect();
    (a, b)
}

pub fn run(settings: &Settings, len: usize) -> Result<SumReport, ClError> {
    if len == 0 || len > (i32::MAX / 2) as usize {
        return Err(ClError::InvalidInput(format!("array size {len} out of range")));
    }
    let (a, b) = inputs(len);

    let job = settings.job(&kernels::SUM)?;
    info!("sum: {len} elements on {}", job.device_name());

    let mut gpu = vec![0_i32; len];
    let (res, gpu_ms) = time_it(|| {
        job.run(
            &mut [Arg::input(&a), Arg::input(&b), Arg::output(&mut gpu), Arg::int(len as i32)],
            &NdRange::linear(len),
        )
    });
    res?;

    let (cpu, cpu_ms) = time_it(|| reference::sum(&a, &b));
    let equal = gpu == cpu;

    Ok(SumReport { device: job.device_name(), gpu, cpu, equal, timing: Timing { gpu_ms, cpu_ms } })
}

impl fmt::Display for SumReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "\n~~~~~ Let's go with OpenCL ({})", self.device)?;
        writeln!(f, "First {SHOWN} results:")?;
        for (i, v) in self.gpu.iter().enumerate().take(SHOWN) {
            writeln!(f, "result[{i}] = {v}")?;
        }
        writeln!(f, "\n~~~~~ Let's go without OpenCL")?;
        writeln!(f, "First {SHOWN} results:")?;
        for (i, v) in self.cpu.iter().enumerate().take(SHOWN) {
            writeln!(f, "result[{i}] = {v}")?;
        }
        write_comparison(f, self.equal)?;
        write!(f, "{}", self.timing)?;
        writeln!(f, "\n~~~~~ Bye!")
    }
}
