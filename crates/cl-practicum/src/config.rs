use std::path::PathBuf;

use rand::{rngs::StdRng, SeedableRng};

use crate::{job::Job, kernels::KernelDef, platform::Selection, ClError};

/// Laufzeit‑Einstellungen aller Übungen (aus CLI‑Flags bzw. Umgebungsvariablen)
#[derive(Clone, Debug, Default)]
pub struct Settings {
    pub selection: Selection,
    /// `None`: eingebettete Kernel‑Quellen
    pub kernel_dir: Option<PathBuf>,
    /// `None`: zufälliger Seed
    pub seed: Option<u64>,
}

impl Settings {
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        }
    }

    pub fn job(&self, def: &KernelDef) -> Result<Job, ClError> {
        Job::from_def(def, self.kernel_dir.as_deref(), &self.selection)
    }
}
