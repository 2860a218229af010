use std::fmt;

use super::{RULE, THIN_RULE};
use crate::{
    platform::{list_devices, DeviceInfo, DeviceKind, PlatformInfo},
    ClError,
};

#[derive(Debug, Clone)]
pub struct DevicesReport {
    pub platforms: Vec<(PlatformInfo, Vec<DeviceInfo>)>,
}

impl DevicesReport {
    pub fn device_count(&self) -> usize {
        self.platforms.iter().map(|(_, d)| d.len()).sum()
    }
}

/// Alle Geräte (`DeviceKind::All`) aller Plattformen
pub fn run() -> Result<DevicesReport, ClError> {
    Ok(DevicesReport { platforms: list_devices(DeviceKind::All)? })
}

impl fmt::Display for DevicesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Platforms Count: {}", self.platforms.len())?;
        writeln!(f, "{RULE}")?;
        for (i, (info, devices)) in self.platforms.iter().enumerate() {
            writeln!(f, "Platform {}:", i + 1)?;
            write!(f, "{info}")?;
            if devices.is_empty() {
                writeln!(f, "No devices found for this platform")?;
            } else {
                writeln!(f, "Devices Count: {}", devices.len())?;
            }
            for (j, device) in devices.iter().enumerate() {
                writeln!(f, "{THIN_RULE}")?;
                writeln!(f, "  Device {}:", j + 1)?;
                write!(f, "{device}")?;
            }
            writeln!(f, "{RULE}")?;
        }
        Ok(())
    }
}
