//! OpenCL‑C‑Quellen der Übungen.
//!
//! Eingebettet per `include_str!`; mit `--kernel-dir` wird stattdessen
//! `<dir>/<file>` von der Platte gelesen.

use std::{
    fs,
    path::{Path, PathBuf},
};

use crate::ClError;

#[derive(Clone, Copy, Debug)]
pub struct KernelDef {
    pub file: &'static str,
    pub name: &'static str,
    pub source: &'static str,
}

pub const VECTOR_ADD: KernelDef = KernelDef {
    file: "vector_add.cl",
    name: "vector_add",
    source: include_str!("../kernels/vector_add.cl"),
};

pub const PARABOLA: KernelDef = KernelDef {
    file: "parabola.cl",
    name: "compute_parabola",
    source: include_str!("../kernels/parabola.cl"),
};

pub const SUM: KernelDef = KernelDef {
    file: "sum.cl",
    name: "sum",
    source: include_str!("../kernels/sum.cl"),
};

pub const MUL: KernelDef = KernelDef {
    file: "mul.cl",
    name: "mul",
    source: include_str!("../kernels/mul.cl"),
};

pub const GAUSS: KernelDef = KernelDef {
    file: "gauss.cl",
    name: "to_triangular",
    source: include_str!("../kernels/gauss.cl"),
};

pub const ALL: [KernelDef; 5] = [VECTOR_ADD, PARABOLA, SUM, MUL, GAUSS];

impl KernelDef {
    pub fn path_in(&self, dir: &Path) -> PathBuf {
        dir.join(self.file)
    }

    pub fn load(&self, dir: Option<&Path>) -> Result<String, ClError> {
        match dir {
            Some(dir) => load_kernel_source(self.path_in(dir)),
            None => Ok(self.source.to_owned()),
        }
    }
}

pub fn load_kernel_source(path: impl AsRef<Path>) -> Result<String, ClError> {
    let path = path.as_ref();
    fs::read_to_string(path).map_err(|source| ClError::KernelSource { path: path.to_path_buf(), source })
}
