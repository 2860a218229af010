use cl_practicum::ClError;

#[test]
fn messages_name_the_failing_part() {
    let api = ClError::Api { operation: "clCreateBuffer", code: -61 };
    assert_eq!(api.to_string(), "OpenCL error during clCreateBuffer: -61");

    let build = ClError::Build { kernel: "mul".into(), log: "line 3: error".into() };
    assert!(build.to_string().starts_with("Build error in kernel `mul`"));

    assert_eq!(
        ClError::SingularMatrix { column: 4 }.to_string(),
        "Matrix is singular: zero pivot in column 4"
    );
}

#[test]
fn opencl_status_converts() {
    let err: ClError = opencl3::error_codes::ClError(-5).into();
    assert!(matches!(err, ClError::Api { code: -5, .. }));
}
