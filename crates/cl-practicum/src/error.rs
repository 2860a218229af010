// ─── Fehler‑Typ & cl_try! ─────────────────────────────────────────────

use std::{io, path::PathBuf};

#[derive(thiserror::Error, Debug)]
pub enum ClError {
    #[error("OpenCL error during {operation}: {code}")]
    Api { operation: &'static str, code: i32 },

    #[error("Build error in kernel `{kernel}`:\n{log}")]
    Build { kernel: String, log: String },

    #[error("Failed to load kernel file {}: {source}", path.display())]
    KernelSource {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("No OpenCL platform at index {index}")]
    NoPlatform { index: usize },

    #[error("No {kind} device found on platform `{platform}`")]
    NoDevice { platform: String, kind: String },

    #[error("Invalid kernel argument #{index}: {reason}")]
    InvalidArg { index: usize, reason: String },

    #[error("Invalid ND-range: {0}")]
    InvalidRange(String),

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Result verification failed at index {index}")]
    Verification { index: usize },

    #[error("Matrix is singular: zero pivot in column {column}")]
    SingularMatrix { column: usize },

    #[error(transparent)]
    Io(#[from] io::Error),
}

/// Makro: hängt den Namen des OpenCL‑Aufrufs an ein opencl3‑Result
///
/// `cl_try!(Context::from_device(&device), "clCreateContext")`
macro_rules! cl_try {
    ($expr:expr, $op:expr) => {
        $expr.map_err(|e: opencl3::error_codes::ClError| crate::ClError::Api {
            operation: $op,
            code: e.0,
        })?
    };
}
pub(crate) use cl_try;

impl From<opencl3::error_codes::ClError> for ClError {
    fn from(err: opencl3::error_codes::ClError) -> Self {
        ClError::Api { operation: "OpenCL call", code: err.0 }
    }
}
