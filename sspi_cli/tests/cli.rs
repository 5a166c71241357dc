/// End-to-end tests that run the built binaries against scratch files.
use std::fs;
use std::path::Path;
use std::process::{Command, Output};

const PACK: &str = env!("CARGO_BIN_EXE_sspi-img-pack");
const UNPACK: &str = env!("CARGO_BIN_EXE_sspi-img-unpack");

const EXAMPLE_IMAGE: &[u8] = b"\x03\x00\x00\x00\x02\x00\x00\x00\x01\x02\x03\xAA\xBB";

fn run(bin: &str, cwd: &Path, args: &[&str]) -> Output {
    Command::new(bin)
        .current_dir(cwd)
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to spawn binary")
}

fn write_inputs(dir: &Path) {
    fs::write(dir.join("fw.sea"), b"\x01\x02\x03").unwrap();
    fs::write(dir.join("fw.sed"), b"\xAA\xBB").unwrap();
}

#[test]
fn test_pack_writes_default_image_file() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let out = run(PACK, dir.path(), &["fw.sea", "fw.sed"]);
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));
    assert_eq!(
        fs::read(dir.path().join("ecp5_sspi_fw.img")).unwrap(),
        EXAMPLE_IMAGE
    );
}

#[test]
fn test_pack_honours_image_file_flag() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let out = run(PACK, dir.path(), &["fw.sea", "fw.sed", "-i", "short.img"]);
    assert!(out.status.success());
    let out = run(
        PACK,
        dir.path(),
        &["fw.sea", "fw.sed", "--image_file", "long.img"],
    );
    assert!(out.status.success());

    assert_eq!(fs::read(dir.path().join("short.img")).unwrap(), EXAMPLE_IMAGE);
    assert_eq!(fs::read(dir.path().join("long.img")).unwrap(), EXAMPLE_IMAGE);
    assert!(!dir.path().join("ecp5_sspi_fw.img").exists());
}

#[test]
fn test_pack_twice_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    assert!(run(PACK, dir.path(), &["fw.sea", "fw.sed"]).status.success());
    let first = fs::read(dir.path().join("ecp5_sspi_fw.img")).unwrap();
    assert!(run(PACK, dir.path(), &["fw.sea", "fw.sed"]).status.success());
    let second = fs::read(dir.path().join("ecp5_sspi_fw.img")).unwrap();

    assert_eq!(first, second);
}

#[test]
fn test_missing_input_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fw.sea"), b"algo").unwrap();

    let out = run(PACK, dir.path(), &["fw.sea", "missing.sed"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("missing.sed"), "stderr: {stderr}");
    assert!(stderr.contains("data"), "stderr: {stderr}");
    assert!(!dir.path().join("ecp5_sspi_fw.img").exists());
}

#[test]
fn test_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());

    let out = run(
        PACK,
        dir.path(),
        &["fw.sea", "fw.sed", "-i", "no_such_dir/fw.img"],
    );
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("no_such_dir"), "stderr: {stderr}");
}

#[test]
fn test_missing_positional_is_usage_error() {
    let dir = tempfile::tempdir().unwrap();
    let out = run(PACK, dir.path(), &["only_one.sea"]);
    assert!(!out.status.success());
}

#[test]
fn test_unpack_splits_image_back() {
    let dir = tempfile::tempdir().unwrap();
    write_inputs(dir.path());
    assert!(run(PACK, dir.path(), &["fw.sea", "fw.sed"]).status.success());

    let out = run(
        UNPACK,
        dir.path(),
        &["ecp5_sspi_fw.img", "-a", "out.sea", "--data_file", "out.sed"],
    );
    assert!(out.status.success(), "stderr: {}", String::from_utf8_lossy(&out.stderr));

    let stdout = String::from_utf8_lossy(&out.stdout);
    assert!(stdout.contains("algo_size      : 3"), "stdout: {stdout}");
    assert!(stdout.contains("data_size      : 2"), "stdout: {stdout}");
    assert!(stdout.contains("image length   : 13"), "stdout: {stdout}");
    assert_eq!(fs::read(dir.path().join("out.sea")).unwrap(), b"\x01\x02\x03");
    assert_eq!(fs::read(dir.path().join("out.sed")).unwrap(), b"\xAA\xBB");
}

#[test]
fn test_unpack_rejects_trailing_bytes() {
    let dir = tempfile::tempdir().unwrap();
    let mut image = EXAMPLE_IMAGE.to_vec();
    image.push(0xFF);
    fs::write(dir.path().join("bad.img"), &image).unwrap();

    let out = run(UNPACK, dir.path(), &["bad.img", "-a", "out.sea"]);
    assert!(!out.status.success());
    let stderr = String::from_utf8_lossy(&out.stderr);
    assert!(stderr.contains("trailing bytes"), "stderr: {stderr}");
    assert!(!dir.path().join("out.sea").exists());
}

#[test]
fn test_unpack_keeps_algo_when_data_write_fails() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(dir.path().join("fw.img"), EXAMPLE_IMAGE).unwrap();

    let out = run(
        UNPACK,
        dir.path(),
        &["fw.img", "-a", "out.sea", "-d", "no_such_dir/out.sed"],
    );
    assert!(!out.status.success());
    assert_eq!(fs::read(dir.path().join("out.sea")).unwrap(), b"\x01\x02\x03");
    assert!(!dir.path().join("no_such_dir").exists());
}
