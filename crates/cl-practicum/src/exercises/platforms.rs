use std::fmt;

use super::{RULE, THIN_RULE};
use crate::{
    platform::{list_platforms, PlatformInfo},
    ClError,
};

#[derive(Debug, Clone)]
pub struct PlatformsReport {
    pub platforms: Vec<PlatformInfo>,
}

pub fn run() -> Result<PlatformsReport, ClError> {
    let platforms = list_platforms()?.into_iter().map(|(_, info)| info).collect();
    Ok(PlatformsReport { platforms })
}

impl fmt::Display for PlatformsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Platforms Count: {}", self.platforms.len())?;
        writeln!(f, "{RULE}")?;
        for (i, info) in self.platforms.iter().enumerate() {
            writeln!(f, "Platform {}:", i + 1)?;
            write!(f, "{info}")?;
            writeln!(f, "{THIN_RULE}")?;
        }
        Ok(())
    }
}
