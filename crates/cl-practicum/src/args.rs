//! Argument‑Deskriptoren für `Job::run`.
//!
//! Jeder Eintrag beschreibt ein Kernel‑Argument an seiner Position:
//! Skalar oder Buffer, und für Buffer die Transferrichtung.

use bytemuck::{cast_slice, cast_slice_mut, Pod};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ArgKind {
    Int,
    Float,
    In,
    Out,
    InOut,
}

impl ArgKind {
    pub fn is_buffer(self) -> bool {
        matches!(self, ArgKind::In | ArgKind::Out | ArgKind::InOut)
    }

    /// Wird nach dem Kernel zurückgelesen
    pub fn reads_back(self) -> bool {
        matches!(self, ArgKind::Out | ArgKind::InOut)
    }
}

#[derive(Debug)]
pub enum Arg<'a> {
    Int(i32),
    Float(f32),
    /// nur lesen: Host → Device
    In(&'a [u8]),
    /// nur schreiben: Device → Host
    Out(&'a mut [u8]),
    /// Host → Device, Kernel, Device → Host
    InOut(&'a mut [u8]),
}

impl<'a> Arg<'a> {
    pub fn int(v: i32) -> Self {
        Arg::Int(v)
    }

    pub fn float(v: f32) -> Self {
        Arg::Float(v)
    }

    pub fn input<T: Pod>(host: &'a [T]) -> Self {
        Arg::In(cast_slice(host))
    }

    pub fn output<T: Pod>(host: &'a mut [T]) -> Self {
        Arg::Out(cast_slice_mut(host))
    }

    pub fn in_out<T: Pod>(host: &'a mut [T]) -> Self {
        Arg::InOut(cast_slice_mut(host))
    }

    pub fn kind(&self) -> ArgKind {
        match self {
            Arg::Int(_) => ArgKind::Int,
            Arg::Float(_) => ArgKind::Float,
            Arg::In(_) => ArgKind::In,
            Arg::Out(_) => ArgKind::Out,
            Arg::InOut(_) => ArgKind::InOut,
        }
    }

    /// Größe in Bytes: Buffer‑Länge bzw. Skalargröße
    pub fn byte_len(&self) -> usize {
        match self {
            Arg::Int(_) => size_of::<i32>(),
            Arg::Float(_) => size_of::<f32>(),
            Arg::In(h) => h.len(),
            Arg::Out(h) | Arg::InOut(h) => h.len(),
        }
    }
}
