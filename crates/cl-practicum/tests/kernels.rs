use std::fs;

use cl_practicum::{
    kernels::{self, load_kernel_source},
    ClError, Job, Selection,
};

#[test]
fn embedded_sources_declare_their_kernel() {
    for def in kernels::ALL {
        assert!(def.source.contains("__kernel"), "{}", def.file);
        assert!(def.source.contains(&format!("void {}", def.name)), "{}", def.file);
    }
}

#[test]
fn load_prefers_kernel_dir() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join(kernels::SUM.file), "// patched\n").unwrap();

    assert_eq!(kernels::SUM.load(Some(dir.path())).unwrap(), "// patched\n");
    assert_eq!(kernels::SUM.load(None).unwrap(), kernels::SUM.source);
}

#[test]
fn missing_kernel_file_is_reported_with_path() {
    let dir = tempfile::tempdir().unwrap();
    let err = kernels::MUL.load(Some(dir.path())).unwrap_err();
    match err {
        ClError::KernelSource { path, .. } => assert!(path.ends_with("mul.cl")),
        other => panic!("unexpected {other}"),
    }
}

#[test]
fn job_from_missing_file_fails_before_touching_opencl() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nope.cl");
    assert!(matches!(
        Job::from_file(&path, "nope", &Selection::default()),
        Err(ClError::KernelSource { .. })
    ));
    assert!(load_kernel_source(&path).is_err());
}
