//! `Job`: Kontext, Queue, Programm und Kernel für genau eine Kernel‑Funktion.
//!
//! ```no_run
//! use cl_practicum::{Arg, Job, NdRange, Selection, kernels};
//!
//! let job = Job::from_source(kernels::SUM.source, kernels::SUM.name, &Selection::default())?;
//! let a = vec![1_i32; 16];
//! let b = vec![2_i32; 16];
//! let mut out = vec![0_i32; 16];
//! job.run(
//!     &mut [Arg::input(&a), Arg::input(&b), Arg::output(&mut out), Arg::int(16)],
//!     &NdRange::linear(16),
//! )?;
//! assert!(out.iter().all(|&x| x == 3));
//! # Ok::<(), cl_practicum::ClError>(())
//! ```

use std::{path::Path, ptr};

use log::{debug, trace};
use opencl3::{
    command_queue::CommandQueue, context::Context, device::Device, kernel::Kernel,
    program::Program, types::cl_uint,
};

#[cfg(feature = "metrics")]
use crate::metrics::record;
#[cfg(feature = "metrics")]
use std::time::Instant;

use crate::{
    args::Arg,
    buffer::{Access, DeviceBuffer, EventGuard, InFlight, Ready},
    cl_try,
    kernels::{load_kernel_source, KernelDef},
    platform::{select_device, Selection},
    range::NdRange,
    ClError,
};

/// Buffer eines Arguments während `run`
enum Slot {
    Scalar,
    Input(DeviceBuffer<Ready>),
    Output(DeviceBuffer<InFlight>),
}

// Felder werden in Deklarationsreihenfolge freigegeben: Kernel zuerst, Kontext zuletzt.
pub struct Job {
    kernel: Kernel,
    _program: Program,
    queue: CommandQueue,
    context: Context,
    device: Device,
    kernel_name: String,
}

impl Job {
    pub fn from_source(source: &str, kernel_name: &str, sel: &Selection) -> Result<Self, ClError> {
        let device = select_device(sel)?;
        let context = cl_try!(Context::from_device(&device), "clCreateContext");
        let queue = cl_try!(
            CommandQueue::create(&context, device.id(), 0),
            "clCreateCommandQueueWithProperties"
        );

        let program = Program::create_and_build_from_source(&context, source, &sel.build_options)
            .map_err(|log| ClError::Build { kernel: kernel_name.to_owned(), log })?;
        let kernel = cl_try!(Kernel::create(&program, kernel_name), "clCreateKernel");

        debug!(
            "kernel `{kernel_name}` built for `{}`",
            device.name().unwrap_or_default()
        );
        Ok(Self {
            kernel,
            _program: program,
            queue,
            context,
            device,
            kernel_name: kernel_name.to_owned(),
        })
    }

    pub fn from_file(
        path: impl AsRef<Path>,
        kernel_name: &str,
        sel: &Selection,
    ) -> Result<Self, ClError> {
        let source = load_kernel_source(path)?;
        Self::from_source(&source, kernel_name, sel)
    }

    /// Eingebettete Quelle oder `<dir>/<file>`
    pub fn from_def(def: &KernelDef, dir: Option<&Path>, sel: &Selection) -> Result<Self, ClError> {
        let source = def.load(dir)?;
        Self::from_source(&source, def.name, sel)
    }

    pub fn kernel_name(&self) -> &str {
        &self.kernel_name
    }

    pub fn device_name(&self) -> String {
        self.device.name().unwrap_or_else(|_| "unknown device".into())
    }

    /// Buffer anlegen, Argumente binden, Kernel ausführen, Ergebnisse zurücklesen.
    ///
    /// Alle Device‑Buffer werden beim Verlassen freigegeben, auch im Fehlerfall.
    pub fn run(&self, args: &mut [Arg<'_>], range: &NdRange) -> Result<(), ClError> {
        range.validate()?;

        // 1. Buffer
        let mut slots = Vec::with_capacity(args.len());
        for (index, arg) in args.iter().enumerate() {
            slots.push(self.allocate(index, arg)?);
        }

        // 2. Argumente
        for (index, (arg, slot)) in args.iter().zip(&slots).enumerate() {
            let i = index as cl_uint;
            match (arg, slot) {
                (Arg::Int(v), _) => cl_try!(self.kernel.set_arg(i, v), "clSetKernelArg"),
                (Arg::Float(v), _) => cl_try!(self.kernel.set_arg(i, v), "clSetKernelArg"),
                (_, Slot::Input(buf)) => {
                    cl_try!(self.kernel.set_arg(i, buf.raw()), "clSetKernelArg")
                }
                (_, Slot::Output(buf)) => {
                    cl_try!(self.kernel.set_arg(i, buf.raw()), "clSetKernelArg")
                }
                (_, Slot::Scalar) => {
                    return Err(ClError::InvalidArg { index, reason: "buffer without device slot".into() });
                }
            }
        }

        // 3. Kernel
        #[cfg(feature = "metrics")]
        let t = Instant::now();

        trace!(
            "launching `{}` over {:?} ({} work items)",
            self.kernel_name,
            range.global(),
            range.work_items()
        );
        let local = range.local().map_or(ptr::null(), <[usize]>::as_ptr);
        let evt = cl_try!(
            self.queue.enqueue_nd_range_kernel(
                self.kernel.get(),
                range.dims() as cl_uint,
                ptr::null(),
                range.global().as_ptr(),
                local,
                &[],
            ),
            "clEnqueueNDRangeKernel"
        );
        let done = EventGuard::new(evt).wait()?;

        #[cfg(feature = "metrics")]
        record("launch", t);

        // 4. Ergebnisse
        for (index, (arg, slot)) in args.iter_mut().zip(slots).enumerate() {
            if !arg.kind().reads_back() {
                continue;
            }
            match (arg, slot) {
                (Arg::Out(host) | Arg::InOut(host), Slot::Output(buf)) => {
                    buf.into_ready(&done).read_into(&self.queue, host)?
                }
                _ => {
                    return Err(ClError::InvalidArg { index, reason: "no device buffer to read back".into() });
                }
            }
        }
        Ok(())
    }

    fn allocate(&self, index: usize, arg: &Arg<'_>) -> Result<Slot, ClError> {
        if arg.kind().is_buffer() && arg.byte_len() == 0 {
            return Err(ClError::InvalidArg { index, reason: "empty host slice".into() });
        }
        let slot = match arg {
            Arg::Int(_) | Arg::Float(_) => Slot::Scalar,
            Arg::In(host) => Slot::Input(self.upload(Access::ReadOnly, host)?),
            Arg::InOut(host) => Slot::Output(self.upload(Access::ReadWrite, host)?.launch()),
            Arg::Out(host) => {
                Slot::Output(DeviceBuffer::new(&self.context, Access::WriteOnly, host.len())?.launch())
            }
        };
        Ok(slot)
    }

    fn upload(&self, access: Access, host: &[u8]) -> Result<DeviceBuffer<Ready>, ClError> {
        let (in_flight, guard) =
            DeviceBuffer::new(&self.context, access, host.len())?.upload(&self.queue, host)?;
        let done = guard.wait()?;
        Ok(in_flight.into_ready(&done))
    }
}
