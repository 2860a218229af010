use crate::ClError;

/// Globaler (und optional lokaler) Arbeitsbereich eines Kernel‑Starts, 1–3 Dimensionen.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NdRange {
    global: Vec<usize>,
    local: Option<Vec<usize>>,
}

impl NdRange {
    pub fn linear(n: usize) -> Self {
        Self { global: vec![n], local: None }
    }

    pub fn grid(global: &[usize]) -> Self {
        Self { global: global.to_vec(), local: None }
    }

    pub fn with_local(mut self, local: &[usize]) -> Self {
        self.local = Some(local.to_vec());
        self
    }

    pub fn dims(&self) -> usize {
        self.global.len()
    }

    pub fn global(&self) -> &[usize] {
        &self.global
    }

    pub fn local(&self) -> Option<&[usize]> {
        self.local.as_deref()
    }

    /// Anzahl aller Work‑Items
    pub fn work_items(&self) -> usize {
        self.global.iter().product()
    }

    pub fn validate(&self) -> Result<(), ClError> {
        let dims = self.global.len();
        if !(1..=3).contains(&dims) {
            return Err(ClError::InvalidRange(format!("{dims} dimensions, expected 1 to 3")));
        }
        if let Some(d) = self.global.iter().position(|&g| g == 0) {
            return Err(ClError::InvalidRange(format!("global size of dimension {d} is zero")));
        }
        let Some(local) = &self.local else {
            return Ok(());
        };
        if local.len() != dims {
            return Err(ClError::InvalidRange(format!(
                "local range has {} dimensions, global has {dims}",
                local.len()
            )));
        }
        for (d, (&g, &l)) in self.global.iter().zip(local).enumerate() {
            if l == 0 || g % l != 0 {
                return Err(ClError::InvalidRange(format!(
                    "local size {l} does not divide global size {g} in dimension {d}"
                )));
            }
        }
        Ok(())
    }
}
