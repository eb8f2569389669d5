//! End-to-end tests for the ansi-preview binary.
//!
//! These tests run the compiled binary and verify:
//! - Help and version exit codes
//! - Option validation messages and exit codes
//! - Multi-file rendering with per-file failures

use std::path::{Path, PathBuf};
use std::process::{Command, Output};

fn write_png(dir: &Path, name: &str, width: u32, height: u32, rgb: [u8; 3]) -> PathBuf {
    let path = dir.join(name);
    image::RgbImage::from_pixel(width, height, image::Rgb(rgb))
        .save(&path)
        .unwrap();
    path
}

/// Run the binary with an 80-column terminal and no user config.
fn preview(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_ansi-preview"))
        .args(["-c", "/nonexistent/ansi-preview.toml"])
        .args(args)
        .env("COLUMNS", "80")
        .env("LINES", "24")
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run ansi-preview")
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn stderr(output: &Output) -> String {
    String::from_utf8(output.stderr.clone()).unwrap()
}

// ==================== Early Exit Tests ====================

#[test]
fn test_help_exits_zero() {
    let output = preview(&["-h"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains("--scale"));
}

#[test]
fn test_version_exits_zero() {
    let output = preview(&["-v"]);
    assert_eq!(output.status.code(), Some(0));
    assert!(stdout(&output).contains(env!("CARGO_PKG_VERSION")));
}

// ==================== Validation Tests ====================

#[test]
fn test_scale_out_of_range() {
    for scale in ["0", "101", "-5", "4294967296"] {
        let output = preview(&["-s", scale, "image.png"]);
        assert_eq!(output.status.code(), Some(1));
        assert!(output.stdout.is_empty());
        assert_eq!(stderr(&output), "error: scale should be between 0..100.\n");
    }
}

#[test]
fn test_invalid_position() {
    let output = preview(&["-p", "middle", "image.png"]);
    assert_eq!(output.status.code(), Some(1));
    let err = stderr(&output);
    assert!(err.starts_with("error: invalid value 'middle'"), "stderr: {}", err);
}

#[test]
fn test_unknown_option() {
    let output = preview(&["--bogus", "image.png"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_missing_option_value() {
    let output = preview(&["image.png", "-p"]);
    assert_eq!(output.status.code(), Some(1));
}

#[test]
fn test_no_input_files() {
    let output = preview(&[]);
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stderr(&output), "error: no input files.\n");
}

// ==================== Rendering Tests ====================

#[test]
fn test_renders_single_image_centered() {
    let dir = tempfile::tempdir().unwrap();
    let png = write_png(dir.path(), "wide.png", 8, 4, [255, 255, 0]);

    let output = preview(&["-p", "center", png.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stderr.is_empty());

    // 80 columns at 50% -> 40x20 pixels -> 10 lines padded by 20
    let text = stdout(&output);
    assert_eq!(text.lines().count(), 10);
    for line in text.lines() {
        assert!(line.starts_with(&" ".repeat(20)));
        assert_eq!(line.matches('▀').count(), 40);
    }
    // Yellow is cube index 16 + 36*5 + 6*5 = 226
    assert!(text.contains("\x1b[38;5;226m"));
}

#[test]
fn test_missing_first_file_still_renders_second() {
    let dir = tempfile::tempdir().unwrap();
    let missing = dir.path().join("missing.png");
    let png = write_png(dir.path(), "ok.png", 2, 2, [0, 0, 255]);

    let output = preview(&[missing.to_str().unwrap(), png.to_str().unwrap()]);
    assert_eq!(output.status.code(), Some(1));

    let err = stderr(&output);
    assert_eq!(err.lines().count(), 1);
    assert!(err.starts_with("error: cannot decode"));

    let text = stdout(&output);
    assert!(text.contains("\x1b[38;5;21m"));
    assert!(text.contains('▀'));
}

#[test]
fn test_images_print_in_argument_order() {
    let dir = tempfile::tempdir().unwrap();
    let red = write_png(dir.path(), "red.png", 2, 2, [255, 0, 0]);
    let green = write_png(dir.path(), "green.png", 2, 2, [0, 255, 0]);

    let output = preview(&[
        "-s",
        "5",
        green.to_str().unwrap(),
        red.to_str().unwrap(),
    ]);
    assert_eq!(output.status.code(), Some(0));

    let text = stdout(&output);
    let green_at = text.find("\x1b[38;5;46m").unwrap();
    let red_at = text.find("\x1b[38;5;196m").unwrap();
    assert!(green_at < red_at);
}

#[test]
fn test_all_files_failing() {
    let dir = tempfile::tempdir().unwrap();
    let bogus = dir.path().join("bogus.png");
    std::fs::write(&bogus, b"definitely not a png").unwrap();

    let output = preview(&[bogus.to_str().unwrap(), "/no/such/file.jpg"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    assert_eq!(stderr(&output).lines().count(), 2);
}
