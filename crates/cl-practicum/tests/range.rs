use cl_practicum::{ClError, NdRange};

fn invalid(r: &NdRange) -> bool {
    matches!(r.validate(), Err(ClError::InvalidRange(_)))
}

#[test]
fn linear_and_grid_ranges_are_valid() {
    assert!(NdRange::linear(1024).validate().is_ok());
    let g = NdRange::grid(&[100, 100]);
    assert!(g.validate().is_ok());
    assert_eq!(g.dims(), 2);
    assert_eq!(g.work_items(), 10_000);
    assert_eq!(g.local(), None);
}

#[test]
fn dimension_count_is_one_to_three() {
    assert!(invalid(&NdRange::grid(&[])));
    assert!(invalid(&NdRange::grid(&[2, 2, 2, 2])));
    assert!(NdRange::grid(&[2, 2, 2]).validate().is_ok());
}

#[test]
fn zero_sized_dimension_is_rejected() {
    assert!(invalid(&NdRange::linear(0)));
    assert!(invalid(&NdRange::grid(&[4, 0])));
}

#[test]
fn local_size_must_divide_global() {
    assert!(NdRange::grid(&[100, 100, 101]).with_local(&[1, 1, 101]).validate().is_ok());
    assert!(invalid(&NdRange::linear(100).with_local(&[3])));
    assert!(invalid(&NdRange::linear(100).with_local(&[0])));
    assert!(invalid(&NdRange::grid(&[8, 8]).with_local(&[4])));
}
