use std::fs;
use std::path::PathBuf;
use std::process::{Command, Output};

fn get_binary_path() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_beacon-scan"))
}

fn example_input() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("inputs")
        .join("example.txt")
}

fn run(args: &[&str]) -> Output {
    Command::new(get_binary_path())
        .args(args)
        .output()
        .expect("Failed to execute beacon-scan")
}

fn assert_success(output: &Output) -> String {
    assert!(
        output.status.success(),
        "Command failed with status: {:?}\nstderr: {}\nstdout: {}",
        output.status,
        String::from_utf8_lossy(&output.stderr),
        String::from_utf8_lossy(&output.stdout)
    );
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_count_example_row() {
    let input = example_input();
    let output = run(&["count", input.to_str().unwrap(), "--row", "10"]);
    let stdout = assert_success(&output);
    assert_eq!(stdout.trim(), "26");
}

#[test]
fn test_count_including_beacons() {
    let input = example_input();
    let output = run(&[
        "count",
        input.to_str().unwrap(),
        "--row",
        "10",
        "--include-beacons",
    ]);
    let stdout = assert_success(&output);
    assert_eq!(stdout.trim(), "27");
}

#[test]
fn test_search_example() {
    let input = example_input();
    let output = run(&[
        "search",
        input.to_str().unwrap(),
        "--range-max",
        "20",
        "-j",
        "4",
        "--stats",
    ]);
    let stdout = assert_success(&output);

    assert!(
        stdout.contains("Position: (14, 11)"),
        "Should report the gap position"
    );
    assert!(
        stdout.contains("Tuning frequency: 56000011"),
        "Should report the tuning frequency"
    );
    assert!(
        stdout.contains("Search Statistics:"),
        "Should print statistics when requested"
    );
    assert!(stdout.contains("Worker 3:"), "Should list every worker");
}

#[test]
fn test_solve_example() {
    let input = example_input();
    let output = run(&[
        "solve",
        input.to_str().unwrap(),
        "--row",
        "10",
        "--range-max",
        "20",
        "-j",
        "2",
    ]);
    let stdout = assert_success(&output);

    assert!(stdout.contains("First star answer: 26"));
    assert!(stdout.contains("Second star answer: 56000011"));
}

#[test]
fn test_search_without_gap_fails() {
    let dir = std::env::temp_dir().join(format!("beacon-scan-cli-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("covered.txt");
    fs::write(
        &input,
        "Sensor at x=10, y=10: closest beacon is at x=10, y=40\n",
    )
    .unwrap();

    let output = run(&["search", input.to_str().unwrap(), "--range-max", "20"]);
    let _ = fs::remove_dir_all(&dir);

    assert!(!output.status.success(), "Search should fail without a gap");
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("no gap found"), "stderr: {}", stderr);
}

#[test]
fn test_malformed_input_reports_line() {
    let dir = std::env::temp_dir().join(format!("beacon-scan-bad-{}", std::process::id()));
    fs::create_dir_all(&dir).unwrap();
    let input = dir.join("bad.txt");
    fs::write(
        &input,
        "Sensor at x=1, y=1: closest beacon is at x=2, y=2\nSensor at x=oops\n",
    )
    .unwrap();

    let output = run(&["count", input.to_str().unwrap(), "--row", "1"]);
    let _ = fs::remove_dir_all(&dir);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("line 2"), "stderr: {}", stderr);
}

#[test]
fn test_missing_input_file() {
    let output = run(&["count", "does/not/exist.txt"]);
    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("failed to read"), "stderr: {}", stderr);
}
