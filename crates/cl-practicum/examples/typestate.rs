// Device‑Buffer von Hand durch die Zustände führen:
// Queued → (upload) InFlight → Ready → read_into

use bytemuck::{cast_slice, cast_slice_mut};
use cl_practicum::{select_device, Access, ClError, DeviceBuffer, Queued, Selection};
use opencl3::{command_queue::CommandQueue, context::Context};

fn main() -> Result<(), ClError> {
    /* ---------- OpenCL Setup ---------- */
    let device  = select_device(&Selection::default())?;
    let context = Context::from_device(&device)?;
    let queue   = CommandQueue::create(&context, device.id(), 0)?;

    /* ---------- Host → Device ---------- */
    let host: Vec<i32> = (0..256).collect();
    let n_bytes = host.len() * size_of::<i32>();
    let (in_flight, guard) = DeviceBuffer::<Queued>::new(&context, Access::ReadWrite, n_bytes)?
        .upload(&queue, cast_slice(&host))?;
    let done  = guard.wait()?;
    let ready = in_flight.into_ready(&done);

    /* ---------- Device → Host ---------- */
    let mut back = vec![0_i32; host.len()];
    ready.read_into(&queue, cast_slice_mut(&mut back))?;

    assert_eq!(host, back);
    println!("round trip OK, {} bytes", ready.byte_len());
    Ok(())
}
