use std::time::{Duration, Instant};

/// Millisekunden‑Stoppuhr für die "with / without OpenCL"‑Vergleiche
#[derive(Clone, Copy, Debug)]
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self { start: Instant::now() }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    pub fn elapsed_ms(&self) -> u128 {
        self.elapsed().as_millis()
    }
}

/// Führt `f` aus und liefert Ergebnis plus Laufzeit in ms
pub fn time_it<T>(f: impl FnOnce() -> T) -> (T, u128) {
    let sw = Stopwatch::start();
    let out = f();
    (out, sw.elapsed_ms())
}
