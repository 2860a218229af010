// ─── Device‑Buffer mit Typ‑State ─────────────────────────────────────
//
// Queued   : angelegt, Inhalt undefiniert
// InFlight : Transfer oder Kernel, der den Buffer schreibt, ist eingereiht
// Ready    : Inhalt auf dem Gerät gültig

use opencl3::{
    command_queue::CommandQueue,
    context::Context,
    event::Event,
    memory::{Buffer, CL_MEM_READ_ONLY, CL_MEM_READ_WRITE, CL_MEM_WRITE_ONLY},
    types::{cl_mem_flags, CL_BLOCKING, CL_NON_BLOCKING},
};
use std::{marker::PhantomData, ptr};

#[cfg(feature = "metrics")]
use crate::metrics::{record, ALLOCS, ALLOC_BYTES};
#[cfg(feature = "metrics")]
use std::{sync::atomic::Ordering, time::Instant};

use crate::{cl_try, ClError};

mod sealed {
    pub trait Sealed {}
}

pub trait State: sealed::Sealed {}

pub struct Queued;
impl sealed::Sealed for Queued {}
impl State for Queued {}

pub struct InFlight;
impl sealed::Sealed for InFlight {}
impl State for InFlight {}

pub struct Ready;
impl sealed::Sealed for Ready {}
impl State for Ready {}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    ReadOnly,
    WriteOnly,
    ReadWrite,
}

impl Access {
    fn flags(self) -> cl_mem_flags {
        match self {
            Access::ReadOnly => CL_MEM_READ_ONLY,
            Access::WriteOnly => CL_MEM_WRITE_ONLY,
            Access::ReadWrite => CL_MEM_READ_WRITE,
        }
    }
}

pub struct DeviceBuffer<S: State> {
    buf: Buffer<u8>,
    len: usize,
    _state: PhantomData<S>,
}

impl<S: State> DeviceBuffer<S> {
    fn into_state<T: State>(self) -> DeviceBuffer<T> {
        DeviceBuffer { buf: self.buf, len: self.len, _state: PhantomData }
    }

    /// Zugriff auf den internen OpenCL‑Buffer (z. B. für `set_arg`)
    pub fn raw(&self) -> &Buffer<u8> {
        &self.buf
    }

    /// Länge in Bytes (nie 0)
    pub fn byte_len(&self) -> usize {
        self.len
    }
}

// ── Queued ───────────────────────────────────────────────────────────
impl DeviceBuffer<Queued> {
    /// legt einen neuen Buffer an, noch **nicht** befüllt
    pub fn new(ctx: &Context, access: Access, len: usize) -> Result<Self, ClError> {
        if len == 0 {
            return Err(ClError::InvalidArg { index: 0, reason: "zero-sized buffer".into() });
        }

        #[cfg(feature = "metrics")]
        let t = Instant::now();

        let buf = cl_try!(
            Buffer::<u8>::create(ctx, access.flags(), len, ptr::null_mut()),
            "clCreateBuffer"
        );

        #[cfg(feature = "metrics")]
        {
            ALLOCS.fetch_add(1, Ordering::Relaxed);
            ALLOC_BYTES.fetch_add(len, Ordering::Relaxed);
            record("alloc", t);
        }

        log::trace!("allocated {len} B device buffer ({access:?})");
        Ok(Self { buf, len, _state: PhantomData })
    }

    /// Host → Device, nicht blockierend; der Guard wartet auf das Ende
    pub fn upload(
        mut self,
        queue: &CommandQueue,
        host: &[u8],
    ) -> Result<(DeviceBuffer<InFlight>, EventGuard), ClError> {
        if host.len() != self.len {
            return Err(ClError::InvalidArg {
                index: 0,
                reason: format!("host slice is {} B, buffer is {} B", host.len(), self.len),
            });
        }

        #[cfg(feature = "metrics")]
        let t = Instant::now();

        let evt = cl_try!(
            queue.enqueue_write_buffer(&mut self.buf, CL_NON_BLOCKING, 0, host, &[]),
            "clEnqueueWriteBuffer"
        );

        #[cfg(feature = "metrics")]
        record("upload", t);

        Ok((self.into_state(), EventGuard { evt }))
    }

    /// Ziel eines Kernels: Queued → InFlight ohne Transfer
    pub fn launch(self) -> DeviceBuffer<InFlight> {
        self.into_state()
    }
}

// ── InFlight ─────────────────────────────────────────────────────────
impl DeviceBuffer<InFlight> {
    /// erst nach `EventGuard::wait` möglich
    pub fn into_ready(self, _done: &Completed) -> DeviceBuffer<Ready> {
        self.into_state()
    }
}

// ── Ready ────────────────────────────────────────────────────────────
impl DeviceBuffer<Ready> {
    /// Kernel überschreibt den Inhalt wieder (InOut‑Argumente)
    pub fn launch(self) -> DeviceBuffer<InFlight> {
        self.into_state()
    }

    /// Device → Host, blockierend
    pub fn read_into(&self, queue: &CommandQueue, host_out: &mut [u8]) -> Result<(), ClError> {
        if host_out.len() != self.len {
            return Err(ClError::InvalidArg {
                index: 0,
                reason: format!("host slice is {} B, buffer is {} B", host_out.len(), self.len),
            });
        }

        #[cfg(feature = "metrics")]
        let t = Instant::now();

        cl_try!(
            queue.enqueue_read_buffer(&self.buf, CL_BLOCKING, 0, host_out, &[]),
            "clEnqueueReadBuffer"
        );

        #[cfg(feature = "metrics")]
        record("read", t);

        Ok(())
    }
}

// ── Guard (wartet bei Drop auf Event) ────────────────────────────────

/// Nachweis, dass ein Event abgeschlossen ist
pub struct Completed(());

pub struct EventGuard {
    evt: Event,
}

impl EventGuard {
    pub(crate) fn new(evt: Event) -> Self {
        Self { evt }
    }

    /// explizites Warten mit Fehlerrückgabe
    pub fn wait(self) -> Result<Completed, ClError> {
        cl_try!(self.evt.wait(), "clWaitForEvents");
        Ok(Completed(()))
    }
}

impl Drop for EventGuard {
    fn drop(&mut self) {
        let _ = self.evt.wait();
    }
}
