use std::path::PathBuf;

use clap::{Parser, Subcommand};

use cl_practicum::{DeviceKind, Selection, Settings};

/// OpenCL practicum: device inventory and small kernels next to CPU references.
#[derive(Parser, Debug)]
#[command(name = "cl-practicum", version, about)]
pub struct CliArgs {
    /// Device type picked by the bootstrap
    #[arg(long, value_enum, default_value = "gpu", env = "PRACTICUM_DEVICE_TYPE", global = true)]
    pub device_type: DeviceKind,

    /// Platform index
    #[arg(long, default_value_t = 0, env = "PRACTICUM_PLATFORM", global = true)]
    pub platform: usize,

    /// Device index on the chosen platform
    #[arg(long, default_value_t = 0, env = "PRACTICUM_DEVICE", global = true)]
    pub device: usize,

    /// Load `<dir>/<kernel>.cl` instead of the embedded kernel sources
    #[arg(long, env = "PRACTICUM_KERNEL_DIR", global = true)]
    pub kernel_dir: Option<PathBuf>,

    /// Options passed to the OpenCL compiler
    #[arg(long, default_value = "", env = "PRACTICUM_BUILD_OPTIONS", global = true)]
    pub build_options: String,

    /// Seed for the random number generator (RNG)
    #[arg(short, long, global = true)]
    pub seed: Option<u64>,

    /// More log output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub exercise: Exercise,
}

#[derive(Subcommand, Debug)]
pub enum Exercise {
    /// Check that OpenCL is present and a context can be created
    Check,
    /// List platforms and their properties
    Platforms,
    /// List all devices of all platforms
    Devices,
    /// Vector addition c = a + b, verified against the CPU
    VectorAdd {
        #[arg(short, long, default_value_t = 1024)]
        len: usize,
    },
    /// Parabola y = ax² + bx + c on [-1, 1]; missing values are prompted
    Parabola {
        #[arg(short, long, allow_negative_numbers = true)]
        a: Option<f32>,
        #[arg(short, long, allow_negative_numbers = true)]
        b: Option<f32>,
        #[arg(short, long, allow_negative_numbers = true)]
        c: Option<f32>,
        #[arg(short = 'n', long)]
        points: Option<usize>,
    },
    /// Element-wise int array sum, GPU against CPU
    Sum {
        #[arg(short, long, default_value_t = 10_000_000)]
        len: usize,
    },
    /// Square int matrix multiplication, GPU against CPU
    Matmul {
        #[arg(short, long, default_value_t = 100)]
        dim: usize,
    },
    /// Gaussian elimination of a random linear system, GPU against CPU
    Gauss {
        #[arg(short, long, default_value_t = 100)]
        dim: usize,
    },
}

impl CliArgs {
    pub fn settings(&self) -> Settings {
        Settings {
            selection: Selection {
                kind: self.device_type,
                platform: self.platform,
                device: self.device,
                build_options: self.build_options.clone(),
            },
            kernel_dir: self.kernel_dir.clone(),
            seed: self.seed,
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }
}
