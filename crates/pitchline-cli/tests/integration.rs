//! Integration tests for pitchline CLI commands.
//!
//! These tests run the actual binary and verify end-to-end behavior.

use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn run(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_pitchline"))
        .args(args)
        .output()
        .expect("Failed to execute command")
}

/// Scratch file path unique to this test process.
fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("pitchline-{}-{}", std::process::id(), name))
}

#[test]
fn no_arguments_runs_demo() {
    let output = run(&[]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("group 0: (0, 0) (2.75, 2.75) (5.5, 5.5) (8.25, 8.25) (11, 11)"));
    assert!(stdout.contains("group 1: (3, 3) (5.75, 5.75) (8.5, 8.5) (11.25, 11.25) (14, 14)"));
    assert_eq!(stdout.lines().filter(|l| l.starts_with("group ")).count(), 4);
}

#[test]
fn group_command_produces_json() {
    let output = run(&["group", "--from", "0,0", "--to", "10,10", "-n", "5", "-s", "2", "-g", "1", "--json"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).expect("stdout should be JSON");

    let groups = value["groups"].as_array().unwrap();
    assert_eq!(groups.len(), 4);
    assert!(groups.iter().all(|g| g.as_array().unwrap().len() == 5));
    assert_eq!(groups[0][1]["x"], 2.75);
    assert_eq!(groups[1][4]["y"], 14.0);
}

#[test]
fn group_command_produces_svg() {
    let output = run(&["group", "--from", "0,0", "--to", "10,10", "-f", "svg"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("<?xml"), "Should have XML declaration");
    assert!(stdout.contains("<svg"), "Should have SVG element");
    assert_eq!(stdout.matches("<circle").count(), 20);
    assert!(stdout.contains("</svg>"), "Should close SVG element");
}

#[test]
fn group_command_yaml_output() {
    let output = run(&["group", "--from", "0,0", "--to", "10,0", "-n", "2", "-s", "3", "-g", "0.5", "-f", "yaml"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("group_size: 2"));
    assert!(stdout.contains("groups:"));
}

#[test]
fn single_point_groups_do_not_crash() {
    let output = run(&["group", "--from", "0,0", "--to", "10,10", "-n", "1"]);
    assert!(output.status.success());

    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("group 0: (0, 0)\n"));
    assert!(stdout.contains("group 3: (9, 9)\n"));
}

#[test]
fn zero_pitch_is_rejected() {
    let output = run(&["group", "--from", "0,0", "--to", "10,10", "-s", "1", "-g", "-1"]);
    assert!(!output.status.success());
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("spacing + gap must be positive"), "stderr: {}", stderr);
}

#[test]
fn zero_group_size_is_rejected() {
    let output = run(&["group", "--from", "0,0", "--to", "10,10", "-n", "0"]);
    assert_eq!(output.status.code(), Some(1));

    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("invalid group size 0"), "stderr: {}", stderr);
}

#[test]
fn short_segment_prints_nothing() {
    let output = run(&["group", "--from", "0,0", "--to", "1,0", "-s", "5"]);
    assert!(output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn unknown_command_fails() {
    let output = run(&["frobnicate"]);
    assert_eq!(output.status.code(), Some(1));
    assert!(String::from_utf8_lossy(&output.stderr).contains("Unknown command: frobnicate"));
}

#[test]
fn recipe_example_round_trip() {
    let example = run(&["recipe", "--example"]);
    assert!(example.status.success());

    let recipe_path = temp_path("recipe.yaml");
    fs::write(&recipe_path, &example.stdout).unwrap();

    let output = run(&["recipe", recipe_path.to_str().unwrap(), "-f", "json"]);
    let _ = fs::remove_file(&recipe_path);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let value: serde_json::Value =
        serde_json::from_slice(&output.stdout).expect("stdout should be JSON");
    let segments = value["segments"].as_array().unwrap();
    assert_eq!(segments.len(), 2);
    assert_eq!(segments[0]["name"], "north");
    assert_eq!(segments[0]["groups"].as_array().unwrap().len(), 4);
}

#[test]
fn png_preview_is_written() {
    let png_path = temp_path("preview.png");
    let svg_path = temp_path("preview.svg");

    let output = run(&[
        "group", "--from", "0,0", "--to", "10,10",
        "-f", "svg", "-o", svg_path.to_str().unwrap(),
        "--png", png_path.to_str().unwrap(), "--scale", "4",
    ]);
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));

    let png = fs::read(&png_path).expect("PNG should exist");
    let svg = fs::read_to_string(&svg_path).expect("SVG should exist");
    let _ = fs::remove_file(&png_path);
    let _ = fs::remove_file(&svg_path);

    assert_eq!(&png[1..4], b"PNG");
    assert!(svg.contains("<circle"));
}
