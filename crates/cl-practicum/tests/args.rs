use cl_practicum::{Arg, ArgKind};

#[test]
fn typed_slices_become_byte_views() {
    let ints = [1_i32, 2, 3];
    let arg = Arg::input(&ints);
    assert_eq!(arg.kind(), ArgKind::In);
    assert_eq!(arg.byte_len(), 12);
    match arg {
        Arg::In(bytes) => assert_eq!(bytemuck::cast_slice::<u8, i32>(bytes), &ints),
        other => panic!("unexpected {other:?}"),
    }
}

#[test]
fn output_writes_reach_the_host_slice() {
    let mut host = [0.0_f32; 4];
    {
        let mut arg = Arg::output(&mut host);
        assert_eq!(arg.kind(), ArgKind::Out);
        if let Arg::Out(bytes) = &mut arg {
            bytes[..4].copy_from_slice(&1.5_f32.to_ne_bytes());
        }
    }
    assert_eq!(host, [1.5, 0.0, 0.0, 0.0]);
}

#[test]
fn scalar_sizes() {
    assert_eq!(Arg::int(7).byte_len(), 4);
    assert_eq!(Arg::float(0.5).byte_len(), 4);
    assert!(!Arg::int(7).kind().is_buffer());
}

#[test]
fn read_back_only_for_out_and_in_out() {
    let mut v = [0_u32; 2];
    assert!(Arg::in_out(&mut v).kind().reads_back());
    assert!(Arg::output(&mut v).kind().reads_back());
    assert!(!Arg::input(&v).kind().reads_back());
    assert!(!Arg::float(1.0).kind().reads_back());
}
