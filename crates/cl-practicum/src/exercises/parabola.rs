//! Parabel `y(x) = a·x² + b·x + c` an N Punkten auf `[-1, 1]`.

use std::{
    fmt,
    io::{BufRead, Write},
    str::FromStr,
};

use log::info;

use super::{close, verify_with, Timing, SHOWN};
use crate::{
    args::Arg, config::Settings, kernels, range::NdRange, reference, timing::time_it, ClError,
};

pub const X_MIN: f32 = -1.0;
pub const X_MAX: f32 = 1.0;
pub const TOLERANCE: f32 = 1e-5;

/// Koeffizienten und Punktzahl; fehlende Werte werden abgefragt
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ParabolaParams {
    pub a: Option<f32>,
    pub b: Option<f32>,
    pub c: Option<f32>,
    pub points: Option<usize>,
}

impl ParabolaParams {
    /// Fragt jeden fehlenden Wert wie `a = ` ab und liefert (a, b, c, n)
    pub fn resolve(
        self,
        input: &mut impl BufRead,
        output: &mut impl Write,
    ) -> Result<(f32, f32, f32, usize), ClError> {
        let a = match self.a {
            Some(v) => v,
            None => prompt("a = ", input, output)?,
        };
        let b = match self.b {
            Some(v) => v,
            None => prompt("b = ", input, output)?,
        };
        let c = match self.c {
            Some(v) => v,
            None => prompt("c = ", input, output)?,
        };
        let n = match self.points {
            Some(v) => v,
            None => prompt("Number of points = ", input, output)?,
        };
        Ok((a, b, c, n))
    }
}

pub fn prompt<T: FromStr>(
    label: &str,
    input: &mut impl BufRead,
    output: &mut impl Write,
) -> Result<T, ClError> {
    write!(output, "{label}")?;
    output.flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(ClError::InvalidInput(format!("no value for `{}`", label.trim_end_matches([' ', '=']))));
    }
    let text = line.trim();
    text.parse()
        .map_err(|_| ClError::InvalidInput(format!("cannot parse `{text}`")))
}

#[derive(Debug, Clone)]
pub struct ParabolaReport {
    pub device: String,
    pub points: usize,
    pub y: Vec<f32>,
    pub timing: Timing,
}

pub fn run(settings: &Settings, a: f32, b: f32, c: f32, points: usize) -> Result<ParabolaReport, ClError> {
    if points < 2 {
        return Err(ClError::InvalidInput(format!("need at least 2 points, got {points}")));
    }
    let n = i32::try_from(points)
        .map_err(|_| ClError::InvalidInput(format!("{points} points exceed the kernel's int range")))?;

    let job = settings.job(&kernels::PARABOLA)?;
    info!("parabola: {a}x² + {b}x + {c} at {points} points on {}", job.device_name());

    let mut y = vec![0.0_f32; points];
    let (res, gpu_ms) = time_it(|| {
        job.run(
            &mut [
                Arg::float(a),
                Arg::float(b),
                Arg::float(c),
                Arg::float(X_MIN),
                Arg::float(X_MAX),
                Arg::int(n),
                Arg::output(&mut y),
            ],
            &NdRange::linear(points),
        )
    });
    res?;

    let (expected, cpu_ms) = time_it(|| reference::parabola(a, b, c, X_MIN, X_MAX, points));
    verify(&y, &expected)?;

    Ok(ParabolaReport { device: job.device_name(), points, y, timing: Timing { gpu_ms, cpu_ms } })
}

pub fn verify(got: &[f32], expected: &[f32]) -> Result<(), ClError> {
    verify_with(got, expected, |g, e| close(*g, *e, TOLERANCE))
}

impl fmt::Display for ParabolaReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Parabola calculation on {} successful and verified!", self.device)?;
        writeln!(f, "First {SHOWN} results of parabola calculation:")?;
        for (i, y) in self.y.iter().enumerate().take(SHOWN) {
            let x = reference::parabola_x(i, self.points, X_MIN, X_MAX);
            writeln!(f, "{x} -> {y}")?;
        }
        write!(f, "{}", self.timing)
    }
}
