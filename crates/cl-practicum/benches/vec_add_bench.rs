use criterion::{criterion_group, criterion_main, BatchSize, Criterion, Throughput};
use cl_practicum::{kernels, reference, Arg, Job, NdRange, Selection};

const SIZES: [usize; 3] = [1 << 10, 1 << 16, 1 << 20];

fn bench_vec_add(c: &mut Criterion) {
    let job = match Job::from_source(kernels::VECTOR_ADD.source, kernels::VECTOR_ADD.name, &Selection::default()) {
        Ok(job) => job,
        Err(e) => {
            eprintln!("skipping vec_add bench: {e}");
            return;
        }
    };

    let mut g = c.benchmark_group("vector_add");
    for n in SIZES {
        // 2 Uploads + 1 Rücklesen je Iteration
        g.throughput(Throughput::Bytes((n * size_of::<f32>() * 3) as u64));

        let h_a = vec![1.0_f32; n];
        let h_b = vec![2.0_f32; n];

        g.bench_function(format!("opencl_{n}"), |b| {
            b.iter_batched(
                || vec![0.0_f32; n],
                |mut out| {
                    job.run(
                        &mut [Arg::input(&h_a), Arg::input(&h_b), Arg::output(&mut out)],
                        &NdRange::linear(n),
                    )
                    .unwrap();
                    out
                },
                BatchSize::LargeInput,
            )
        });
        g.bench_function(format!("cpu_{n}"), |b| b.iter(|| reference::vector_add(&h_a, &h_b)));
    }
    g.finish();
}

criterion_group!(benches, bench_vec_add);
criterion_main!(benches);
