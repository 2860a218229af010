use std::io::Cursor;

use cl_practicum::{
    exercises::{
        close, first_mismatch, gauss, matmul,
        parabola::{self, ParabolaParams},
        vector_add, Timing,
    },
    reference, ClError, Settings,
};

#[test]
fn missing_parabola_values_are_prompted() {
    let params = ParabolaParams { a: Some(2.0), b: None, c: None, points: None };
    let mut input = Cursor::new("-1.5\n 0\n11\n");
    let mut output = Vec::new();

    let resolved = params.resolve(&mut input, &mut output).unwrap();
    assert_eq!(resolved, (2.0, -1.5, 0.0, 11));
    assert_eq!(String::from_utf8(output).unwrap(), "b = c = Number of points = ");
}

#[test]
fn prompt_rejects_garbage_and_eof() {
    let mut out = Vec::new();
    let r: Result<f32, _> = parabola::prompt("a = ", &mut Cursor::new("abc\n"), &mut out);
    assert!(matches!(r, Err(ClError::InvalidInput(_))));
    let r: Result<usize, _> = parabola::prompt("n = ", &mut Cursor::new(""), &mut out);
    assert!(matches!(r, Err(ClError::InvalidInput(_))));
}

#[test]
fn parabola_needs_two_points() {
    let err = parabola::run(&Settings::default(), 1.0, 0.0, 0.0, 1).unwrap_err();
    assert!(matches!(err, ClError::InvalidInput(_)));
}

#[test]
fn mismatch_search() {
    assert_eq!(first_mismatch(&[1, 2, 3], &[1, 2, 3], |a, b| a == b), None);
    assert_eq!(first_mismatch(&[1, 9, 3], &[1, 2, 3], |a, b| a == b), Some(1));
    assert_eq!(first_mismatch(&[1, 2], &[1, 2, 3], |a, b| a == b), Some(2));
}

#[test]
fn relative_tolerance() {
    assert!(close(1000.001, 1000.0, 1e-5));
    assert!(!close(1000.1, 1000.0, 1e-5));
    assert!(close(1e-7, 0.0, 1e-5));
}

#[test]
fn timing_section_layout() {
    let text = Timing { gpu_ms: 12, cpu_ms: 340 }.to_string();
    assert!(text.contains("~~~~~ Execution time"));
    assert!(text.contains("     with OpenCL: 12 ms"));
    assert!(text.contains("  without OpenCL: 340 ms"));
}

#[test]
fn vector_add_mismatch_names_the_index() {
    let a: Vec<f32> = (0..32).map(|i| i as f32 * 0.3).collect();
    let b: Vec<f32> = (0..32).map(|i| 10.0 - i as f32 * 0.1).collect();
    let expected = reference::vector_add(&a, &b);
    assert!(vector_add::verify(&expected, &expected).is_ok());

    let mut corrupted = expected.clone();
    corrupted[17] = f32::from_bits(corrupted[17].to_bits() + 1);
    assert!(matches!(
        vector_add::verify(&corrupted, &expected),
        Err(ClError::Verification { index: 17 })
    ));
    assert!(matches!(
        vector_add::verify(&expected[..31], &expected),
        Err(ClError::Verification { index: 31 })
    ));
}

#[test]
fn parabola_check_tolerates_rounding_only() {
    let expected = reference::parabola(300.0, -2.0, 1.0, parabola::X_MIN, parabola::X_MAX, 9);
    let mut got = expected.clone();
    got[0] *= 1.0 + 1e-6;
    assert!(parabola::verify(&got, &expected).is_ok());

    got[4] += 0.5;
    assert!(matches!(parabola::verify(&got, &expected), Err(ClError::Verification { index: 4 })));
}

#[test]
fn matrix_sizes_must_fit_int_indexing() {
    let s = Settings::default();
    // 46_341² > i32::MAX, 46_340·46_341 still fits
    assert!(matches!(matmul::run(&s, 46_341), Err(ClError::InvalidInput(_))));
    assert!(matches!(matmul::run(&s, 0), Err(ClError::InvalidInput(_))));
    assert!(matches!(gauss::run(&s, 46_341), Err(ClError::InvalidInput(_))));
    assert!(matches!(gauss::run(&s, 0), Err(ClError::InvalidInput(_))));
    assert!(matches!(gauss::run(&s, usize::MAX), Err(ClError::InvalidInput(_))));
}
