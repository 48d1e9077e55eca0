use std::process::Command;

#[test]
fn test_help_lists_core_flags() {
    let bin = env!("CARGO_BIN_EXE_rasterpack");

    let output = Command::new(bin).arg("--help").output().unwrap();

    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    for flag in ["--input", "--output", "--watch", "--dry-run", "--json"] {
        assert!(stdout.contains(flag), "help should mention {flag}; got:\n{stdout}");
    }
    assert!(
        stdout.contains("<OUTPUT>/1x"),
        "help should describe the density folders; got:\n{stdout}"
    );
}

#[test]
fn test_version_flag() {
    let bin = env!("CARGO_BIN_EXE_rasterpack");

    let output = Command::new(bin).arg("--version").output().unwrap();

    assert!(output.status.success());
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("rasterpack "));
}
