use std::fs;
use std::path::Path;

const VALID_INPUT: &str = "North\nalpha, beta\nSouth\nbeta, gamma\nEast\nalpha, gamma\n\n\n";

fn saved_filename(line: &str, prefix: &str) -> String {
    let name = line
        .strip_prefix("Saved: ")
        .unwrap_or_else(|| panic!("not a Saved line: {line}"));
    let id = name
        .strip_prefix(&format!("{prefix}_venn_"))
        .and_then(|rest| rest.strip_suffix(".png"))
        .unwrap_or_else(|| panic!("unexpected filename shape: {name}"));
    assert_eq!(id.len(), 32, "random id is not 32 hex chars: {name}");
    assert!(
        id.chars().all(|c| c.is_ascii_hexdigit()),
        "random id is not hex: {name}"
    );
    name.to_string()
}

fn assert_is_png(path: &Path) {
    let bytes = fs::read(path).expect("read png");
    assert!(
        bytes.starts_with(b"\x89PNG\r\n\x1a\n"),
        "output is not a PNG: {}",
        path.display()
    );
}

fn run_in(dir: &Path, input: &str) -> assert_cmd::assert::Assert {
    let exe = assert_cmd::cargo_bin!("trivenn-cli");
    assert_cmd::Command::new(exe)
        .current_dir(dir)
        .write_stdin(input)
        .assert()
}

#[test]
fn generates_both_venn_pngs() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let assert = run_in(tmp.path(), VALID_INPUT).success();

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let mut lines = stdout.lines();
    assert_eq!(
        lines.next(),
        Some("Fill out the input table to generate Venn diagrams.")
    );
    let center = saved_filename(lines.next().expect("center line"), "center");
    let function = saved_filename(lines.next().expect("function line"), "function");
    assert_eq!(lines.next(), None);

    assert_is_png(&tmp.path().join(center));
    assert_is_png(&tmp.path().join(function));
}

#[test]
fn successive_runs_use_distinct_filenames() {
    let tmp = tempfile::tempdir().expect("tempdir");
    run_in(tmp.path(), VALID_INPUT).success();
    run_in(tmp.path(), VALID_INPUT).success();

    let mut names: Vec<String> = fs::read_dir(tmp.path())
        .expect("read dir")
        .map(|e| e.expect("entry").file_name().to_string_lossy().to_string())
        .filter(|n| n.ends_with(".png"))
        .collect();
    names.sort();
    names.dedup();
    assert_eq!(names.len(), 4, "expected 4 distinct PNG files: {names:?}");
}

#[test]
fn fewer_than_three_centers_fails_before_saving() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let assert = run_in(
        tmp.path(),
        "North\nalpha, beta, gamma\nSouth\ndelta\n\n\n",
    )
    .failure()
    .code(1);

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(
        stderr.contains("3 distinct center labels"),
        "missing precondition message: {stderr}"
    );

    let pngs = fs::read_dir(tmp.path())
        .expect("read dir")
        .filter(|e| {
            e.as_ref()
                .expect("entry")
                .file_name()
                .to_string_lossy()
                .ends_with(".png")
        })
        .count();
    assert_eq!(pngs, 0, "no diagram may be saved on failure");
}

#[test]
fn failed_function_diagram_keeps_the_saved_center_diagram() {
    // 3 centers but a single shared function: the center diagram renders,
    // the function diagram cannot, and the first file stays on disk.
    let tmp = tempfile::tempdir().expect("tempdir");
    let assert = run_in(tmp.path(), "North\nalpha\nSouth\nalpha\nEast\nalpha\n\n\n")
        .failure()
        .code(1);

    let stdout = String::from_utf8_lossy(&assert.get_output().stdout).to_string();
    let center_line = stdout
        .lines()
        .find(|l| l.starts_with("Saved: center_venn_"))
        .expect("center diagram saved");
    let center = saved_filename(center_line, "center");
    assert_is_png(&tmp.path().join(center));

    let stderr = String::from_utf8_lossy(&assert.get_output().stderr).to_string();
    assert!(
        stderr.contains("3 distinct function labels"),
        "missing precondition message: {stderr}"
    );
}

#[test]
fn empty_input_fails_with_the_same_precondition() {
    let tmp = tempfile::tempdir().expect("tempdir");
    run_in(tmp.path(), "\n\n").failure().code(1);
}

#[test]
fn any_argument_is_a_usage_error() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let exe = assert_cmd::cargo_bin!("trivenn-cli");
    assert_cmd::Command::new(exe)
        .current_dir(tmp.path())
        .arg("--frobnicate")
        .assert()
        .failure()
        .code(2);
}
