// ─── Feature‑Module ───────────────────────────────────────────────────
#[cfg(feature = "metrics")]
pub mod metrics;
#[cfg(feature = "metrics")]
pub use metrics::summary;

// ─── Module ───────────────────────────────────────────────────────────
mod error;
pub(crate) use error::cl_try;
pub use error::ClError;

pub mod args;
pub mod buffer;
pub mod config;
pub mod exercises;
pub mod job;
pub mod kernels;
pub mod matrix;
pub mod platform;
pub mod range;
pub mod reference;
pub mod timing;

// ─── Re‑Exports ───────────────────────────────────────────────────────
pub use args::{Arg, ArgKind};
pub use buffer::{Access, DeviceBuffer, InFlight, Queued, Ready};
pub use config::Settings;
pub use job::Job;
pub use kernels::KernelDef;
pub use matrix::Matrix;
pub use platform::{select_device, DeviceKind, Selection};
pub use range::NdRange;
pub use timing::{time_it, Stopwatch};
