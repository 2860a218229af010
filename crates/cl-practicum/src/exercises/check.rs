//! Rauchtest: gibt es OpenCL, lässt sich ein Kontext anlegen?

use std::fmt;

use opencl3::context::Context;

use crate::{
    cl_try,
    config::Settings,
    platform::{list_platforms, select_device},
    ClError,
};

#[derive(Debug, Clone)]
pub struct CheckReport {
    pub platforms: usize,
    pub device: String,
}

pub fn run(settings: &Settings) -> Result<CheckReport, ClError> {
    let platforms = list_platforms()?.len();
    if platforms == 0 {
        return Err(ClError::NoPlatform { index: 0 });
    }
    let device = select_device(&settings.selection)?;
    let _context = cl_try!(Context::from_device(&device), "clCreateContext");
    Ok(CheckReport { platforms, device: device.name().unwrap_or_default() })
}

impl fmt::Display for CheckReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "OpenCL platforms found: {}", self.platforms)?;
        writeln!(f, "Device: {}", self.device)?;
        writeln!(f, "Context successfully created")
    }
}
