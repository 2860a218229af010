// 2025 Thomas Bicanic – MIT License
// Vektoraddition direkt über `Job` – ohne die Übungs‑Reports

use cl_practicum::{kernels, Arg, ClError, Job, NdRange, Selection};

fn main() -> Result<(), ClError> {
    /* ---------- 1. Gerät, Kontext, Kernel ------------------------ */
    let job = Job::from_source(kernels::VECTOR_ADD.source, kernels::VECTOR_ADD.name, &Selection::default())?;
    println!("device: {}", job.device_name());

    /* ---------- 2. Hostdaten ------------------------------------- */
    let n         = 1 << 20;
    let h_a       = vec![1.0_f32; n];
    let h_b       = vec![2.0_f32; n];
    let mut h_out = vec![0.0_f32; n];

    /* ---------- 3. Buffer, Kernel, Rücklesen --------------------- */
    job.run(
        &mut [Arg::input(&h_a), Arg::input(&h_b), Arg::output(&mut h_out)],
        &NdRange::linear(n),
    )?;

    /* ---------- 4. Verifizieren ---------------------------------- */
    assert!(h_out.iter().all(|&x| (x - 3.0).abs() < 1e-6));
    println!("vec_add OK, first element = {}", h_out[0]);

    #[cfg(feature = "metrics")]
    cl_practicum::summary();

    Ok(())
}
