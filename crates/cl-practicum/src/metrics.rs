#![cfg(feature = "metrics")]

use once_cell::sync::Lazy;
use std::{
    collections::BTreeMap,
    sync::{
        Mutex,
        atomic::{AtomicUsize, Ordering},
    },
    time::Instant,
};

/* ───────────── Roh‑Latenzen ─────────────────────────── */

static TIMES: Lazy<Mutex<Vec<(&'static str, u128)>>> = Lazy::new(|| Mutex::new(Vec::new()));

/// Im Wrapper aufrufen: `record("upload", t)`
pub fn record(name: &'static str, start: Instant) {
    let dur = start.elapsed().as_micros();
    if let Ok(mut times) = TIMES.lock() {
        times.push((name, dur));
    }
}

/* ───────────── Buffer‑Allokationen ───────────────────── */

pub static ALLOCS: AtomicUsize = AtomicUsize::new(0);
pub static ALLOC_BYTES: AtomicUsize = AtomicUsize::new(0);

/* ───────────── Zusammenfassung ─────────────────────── */

/// mean und p95 je Phase in µs
pub fn stats() -> Vec<(&'static str, u128, u128, usize)> {
    let mut map: BTreeMap<&'static str, Vec<u128>> = BTreeMap::new();
    if let Ok(mut times) = TIMES.lock() {
        for (name, us) in times.drain(..) {
            map.entry(name).or_default().push(us);
        }
    }
    map.into_iter()
        .map(|(name, mut v)| {
            v.sort_unstable();
            let mean = v.iter().sum::<u128>() / v.len() as u128;
            let p95 = v[((v.len() * 95) / 100).saturating_sub(1)];
            (name, mean, p95, v.len())
        })
        .collect()
}

/// Am Programmende aufrufen, z. B. in `main()`
pub fn summary() {
    println!("── metrics summary ──");
    for (name, mean, p95, n) in stats() {
        println!("{:<10} n={:<5} mean={:>7} µs   p95={:>7} µs", name, n, mean, p95);
    }
    let allocs = ALLOCS.load(Ordering::Relaxed);
    let bytes = ALLOC_BYTES.load(Ordering::Relaxed);
    println!("GPU allocations: {}   ({} MiB)", allocs, bytes / 1024 / 1024);
}
