//! Runs the `vecdraw` binary on small scripts.

use std::{
    io::Write,
    process::{Command, Output},
};

use tempfile::NamedTempFile;

fn run(script: &str, env: &[(&str, &str)]) -> Output {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(script.as_bytes()).unwrap();
    file.flush().unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_vecdraw"));
    cmd.arg(file.path())
        .args(["--seed", "7"])
        .env_remove("VECDRAW_BUFFER_CAPACITY")
        .env_remove("VECDRAW_CANVAS_SIZE")
        .env_remove("RUST_LOG");
    for (name, value) in env {
        cmd.env(name, value);
    }
    cmd.output().unwrap()
}

#[test]
fn prints_final_draw_list() {
    let out = run(
        "
        mode triangles
        click 0 0
        click 200 0
        click 100 200
        mode line-strip
        color 0 0 255
        click 0 100
        click 200 100
        random
        ",
        &[("VECDRAW_CANVAS_SIZE", "200x200"), ("VECDRAW_BUFFER_CAPACITY", "16")],
    );
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(out.status.success(), "{stderr}");
    assert_eq!(
        String::from_utf8_lossy(&out.stdout),
        "triangles 0 3\ntriangles 3 3\nline-strip 6 2\n"
    );
}

#[test]
fn empty_script_draws_only_the_swatch() {
    let out = run("# nothing to do\n", &[]);
    assert!(out.status.success());
    assert_eq!(String::from_utf8_lossy(&out.stdout), "triangles 0 3\npoints 3 0\n");
}

#[test]
fn bad_script_line_fails() {
    let out = run("reset\nclick 1\n", &[]);
    assert!(!out.status.success());
    assert!(out.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("line 2"), "{stderr}");
}

#[test]
fn bad_environment_fails() {
    let out = run("reset\n", &[("VECDRAW_BUFFER_CAPACITY", "18446744073709551615")]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("VECDRAW_BUFFER_CAPACITY"), "{stderr}");

    let out = run("reset\n", &[("VECDRAW_CANVAS_SIZE", "wide")]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("VECDRAW_CANVAS_SIZE"), "{stderr}");
}
