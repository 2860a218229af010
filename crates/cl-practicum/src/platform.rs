//! Plattform‑ und Geräte‑Enumeration plus Bootstrap
//! ("erste Plattform → erstes Gerät").

use std::fmt;

use log::{debug, warn};
use opencl3::{
    device::{
        Device, CL_DEVICE_TYPE_ACCELERATOR, CL_DEVICE_TYPE_ALL, CL_DEVICE_TYPE_CPU,
        CL_DEVICE_TYPE_DEFAULT, CL_DEVICE_TYPE_GPU,
    },
    platform::{get_platforms, Platform},
    types::{cl_device_id, cl_device_type},
};

use crate::ClError;

/// Statuscode von clGetDeviceIDs, wenn kein Gerät des Typs existiert
const CL_DEVICE_NOT_FOUND: i32 = -1;
/// Statuscode des ICD‑Loaders, wenn kein Treiber installiert ist
const CL_PLATFORM_NOT_FOUND_KHR: i32 = -1001;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum DeviceKind {
    #[default]
    Gpu,
    Cpu,
    Accelerator,
    Default,
    All,
}

impl DeviceKind {
    pub fn bits(self) -> cl_device_type {
        match self {
            DeviceKind::Gpu => CL_DEVICE_TYPE_GPU,
            DeviceKind::Cpu => CL_DEVICE_TYPE_CPU,
            DeviceKind::Accelerator => CL_DEVICE_TYPE_ACCELERATOR,
            DeviceKind::Default => CL_DEVICE_TYPE_DEFAULT,
            DeviceKind::All => CL_DEVICE_TYPE_ALL,
        }
    }
}

impl fmt::Display for DeviceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            DeviceKind::Gpu => "GPU",
            DeviceKind::Cpu => "CPU",
            DeviceKind::Accelerator => "accelerator",
            DeviceKind::Default => "default",
            DeviceKind::All => "OpenCL",
        };
        f.write_str(s)
    }
}

/// Welches Gerät der Bootstrap auswählt
#[derive(Clone, Debug, Default)]
pub struct Selection {
    pub kind: DeviceKind,
    pub platform: usize,
    pub device: usize,
    pub build_options: String,
}

/// Alle Plattformen; ohne installierten Treiber eine leere Liste
fn platforms() -> Result<Vec<Platform>, ClError> {
    match get_platforms() {
        Ok(platforms) => Ok(platforms),
        Err(e) if e.0 == CL_PLATFORM_NOT_FOUND_KHR => {
            debug!("ICD loader reports no OpenCL platform");
            Ok(Vec::new())
        }
        Err(e) => Err(ClError::Api { operation: "clGetPlatformIDs", code: e.0 }),
    }
}

/// Plattform wählen, Geräte des gewünschten Typs holen, indiziertes Gerät zurückgeben
pub fn select_device(sel: &Selection) -> Result<Device, ClError> {
    let platforms = platforms()?;
    debug!("{} OpenCL platform(s) found", platforms.len());

    let platform = platforms
        .get(sel.platform)
        .ok_or(ClError::NoPlatform { index: sel.platform })?;
    let platform_name = platform.name().unwrap_or_default();

    let no_device = || ClError::NoDevice {
        platform: platform_name.clone(),
        kind: sel.kind.to_string(),
    };

    let ids = match platform.get_devices(sel.kind.bits()) {
        Ok(ids) => ids,
        Err(e) if e.0 == CL_DEVICE_NOT_FOUND => return Err(no_device()),
        Err(e) => return Err(ClError::Api { operation: "clGetDeviceIDs", code: e.0 }),
    };
    let id = *ids.get(sel.device).ok_or_else(no_device)?;

    let device = Device::new(id);
    debug!(
        "selected device #{} `{}` on platform `{}`",
        sel.device,
        device.name().unwrap_or_default(),
        platform_name
    );
    Ok(device)
}

// ─── Inventar ────────────────────────────────────────────────────────

/// Einzelnes Info‑Feld; Fehler bleibt als Statuscode erhalten
pub type Field<T> = Result<T, i32>;

fn field<T>(r: Result<T, opencl3::error_codes::ClError>) -> Field<T> {
    r.map_err(|e| e.0)
}

/// `subject` steht nur in der Fehlermeldung: "Error getting device name"
fn write_field<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    indent: &str,
    subject: &str,
    label: &str,
    value: &Field<T>,
) -> fmt::Result {
    match value {
        Ok(v) => writeln!(f, "{indent}{label}: {v}"),
        Err(code) => writeln!(f, "{indent}Error getting {subject}{}: {code}", label.to_lowercase()),
    }
}

#[derive(Debug, Clone)]
pub struct PlatformInfo {
    pub name: Field<String>,
    pub profile: Field<String>,
    pub vendor: Field<String>,
    pub version: Field<String>,
    pub extensions: Field<String>,
}

impl PlatformInfo {
    pub fn query(platform: &Platform) -> Self {
        Self {
            name: field(platform.name()),
            profile: field(platform.profile()),
            vendor: field(platform.vendor()),
            version: field(platform.version()),
            extensions: field(platform.extensions()),
        }
    }
}

impl fmt::Display for PlatformInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_field(f, "", "", "Platform Name", &self.name)?;
        write_field(f, "", "", "Platform Profile", &self.profile)?;
        write_field(f, "", "", "Platform Vendor", &self.vendor)?;
        write_field(f, "", "", "Platform Version", &self.version)?;
        write_field(f, "", "", "Platform Extensions", &self.extensions)
    }
}

/// Lesbare Bezeichner für ein cl_device_type‑Bitset
pub fn device_type_labels(bits: cl_device_type) -> Vec<&'static str> {
    let mut labels = Vec::new();
    if bits & CL_DEVICE_TYPE_CPU != 0 {
        labels.push("CPU");
    }
    if bits & CL_DEVICE_TYPE_GPU != 0 {
        labels.push("GPU");
    }
    if bits & CL_DEVICE_TYPE_ACCELERATOR != 0 {
        labels.push("Accelerator");
    }
    labels
}

#[derive(Debug, Clone)]
pub struct DeviceInfo {
    pub name: Field<String>,
    pub vendor: Field<String>,
    pub version: Field<String>,
    pub driver_version: Field<String>,
    pub profile: Field<String>,
    pub device_type: Field<cl_device_type>,
    pub address_bits: Field<u32>,
    pub available: Field<bool>,
    pub compiler_available: Field<bool>,
    pub global_mem_cacheline_size: Field<u32>,
    pub global_mem_size: Field<u64>,
    pub vendor_id: Field<u32>,
    pub max_compute_units: Field<u32>,
    pub max_work_group_size: Field<usize>,
    pub extensions: Field<String>,
}

impl DeviceInfo {
    pub fn query(device: &Device) -> Self {
        Self {
            name: field(device.name()),
            vendor: field(device.vendor()),
            version: field(device.version()),
            driver_version: field(device.driver_version()),
            profile: field(device.profile()),
            device_type: field(device.dev_type()),
            address_bits: field(device.address_bits()),
            available: field(device.available()),
            compiler_available: field(device.compiler_available()),
            global_mem_cacheline_size: field(device.global_mem_cacheline_size()),
            global_mem_size: field(device.global_mem_size()),
            vendor_id: field(device.vendor_id()),
            max_compute_units: field(device.max_compute_units()),
            max_work_group_size: field(device.max_work_group_size()),
            extensions: field(device.extensions()),
        }
    }
}

fn yes_no(v: bool) -> &'static str {
    if v { "True" } else { "False" }
}

impl fmt::Display for DeviceInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        const IND: &str = "    ";
        const DEV: &str = "device ";
        write_field(f, IND, DEV, "Name", &self.name)?;
        let kind = self.device_type.map(|bits| device_type_labels(bits).join(" "));
        write_field(f, IND, DEV, "Type", &kind)?;
        write_field(f, IND, DEV, "Vendor", &self.vendor)?;
        write_field(f, IND, DEV, "Version", &self.version)?;
        write_field(f, IND, DEV, "Driver version", &self.driver_version)?;
        write_field(f, IND, DEV, "Profile", &self.profile)?;
        write_field(f, IND, DEV, "Address bits", &self.address_bits)?;
        write_field(f, IND, DEV, "Available", &self.available.map(yes_no))?;
        write_field(f, IND, DEV, "Compiler available", &self.compiler_available.map(yes_no))?;
        write_field(f, IND, DEV, "Global mem cacheline size", &self.global_mem_cacheline_size)?;
        let mib = self.global_mem_size.map(|b| format!("{} MiB", b / 1024 / 1024));
        write_field(f, IND, DEV, "Global mem size", &mib)?;
        write_field(f, IND, DEV, "Vendor id", &self.vendor_id)?;
        write_field(f, IND, DEV, "Max compute units", &self.max_compute_units)?;
        write_field(f, IND, DEV, "Max work group size", &self.max_work_group_size)?;
        write_field(f, IND, DEV, "Extensions", &self.extensions)
    }
}

/// Alle Plattformen mit ihren Infos
pub fn list_platforms() -> Result<Vec<(Platform, PlatformInfo)>, ClError> {
    Ok(platforms()?
        .into_iter()
        .map(|p| {
            let info = PlatformInfo::query(&p);
            (p, info)
        })
        .collect())
}

/// Plattformen samt Geräten des Typs `kind`.
///
/// Eine Plattform, deren Geräteabfrage scheitert, erscheint mit leerer Liste.
pub fn list_devices(kind: DeviceKind) -> Result<Vec<(PlatformInfo, Vec<DeviceInfo>)>, ClError> {
    let mut inventory = Vec::new();
    for (platform, info) in list_platforms()? {
        let devices = device_infos(&info, platform.get_devices(kind.bits()));
        inventory.push((info, devices));
    }
    Ok(inventory)
}

/// Scheitert die Geräteabfrage, bleibt die Liste leer und die Aufzählung läuft weiter
fn device_infos(
    platform: &PlatformInfo,
    ids: Result<Vec<cl_device_id>, opencl3::error_codes::ClError>,
) -> Vec<DeviceInfo> {
    match ids {
        Ok(ids) => ids.into_iter().map(|id| DeviceInfo::query(&Device::new(id))).collect(),
        Err(e) => {
            if e.0 != CL_DEVICE_NOT_FOUND {
                warn!("clGetDeviceIDs failed on platform {:?}: {}", platform.name, e.0);
            }
            Vec::new()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn unnamed_platform() -> PlatformInfo {
        PlatformInfo {
            name: Err(-30),
            profile: Err(-30),
            vendor: Err(-30),
            version: Err(-30),
            extensions: Err(-30),
        }
    }

    #[test]
    fn failed_device_query_yields_empty_list() {
        let platform = unnamed_platform();
        let not_found = opencl3::error_codes::ClError(CL_DEVICE_NOT_FOUND);
        assert!(device_infos(&platform, Err(not_found)).is_empty());
        let invalid = opencl3::error_codes::ClError(-32);
        assert!(device_infos(&platform, Err(invalid)).is_empty());
        assert!(device_infos(&platform, Ok(Vec::new())).is_empty());
    }
}
