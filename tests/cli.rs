use std::process::{Command, Output};

fn matops(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_matops"))
        .args(args)
        .env_remove("RUST_LOG")
        .output()
        .expect("failed to run matops binary")
}

fn matops_with_log(rust_log: &str, args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_matops"))
        .args(args)
        .env("RUST_LOG", rust_log)
        .output()
        .expect("failed to run matops binary")
}

fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

#[test]
fn test_default_run_prints_five_matrices() {
    let output = matops(&["--seed", "3"]);
    assert!(output.status.success(), "stderr: {}", stderr(&output));

    let text = stdout(&output);
    for label in ["Matrix A:", "Matrix B:", "Sum:", "Difference:", "Product:"] {
        assert_eq!(text.matches(label).count(), 1, "{}", label);
    }
    // Label, 20 rows and a blank line per matrix.
    assert_eq!(text.lines().count(), 5 * (1 + 20 + 1));
}

#[test]
fn test_explicit_size() {
    let output = matops(&["3", "--seed", "1", "--workers", "2"]);
    assert!(output.status.success());

    let text = stdout(&output);
    let sum_block: Vec<&str> = text
        .lines()
        .skip_while(|line| *line != "Sum:")
        .skip(1)
        .take(3)
        .collect();
    assert_eq!(sum_block.len(), 3);
    assert!(sum_block.iter().all(|row| row.split_whitespace().count() == 3));
}

#[test]
fn test_invalid_size_warns_and_uses_default() {
    let output = matops(&["abc", "--seed", "9"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("falling back to default size 20"));
    assert_eq!(stdout(&output).lines().count(), 5 * 22);
}

#[test]
fn test_non_positive_size_warns() {
    let output = matops(&["-4"]);
    assert!(output.status.success());
    assert!(stderr(&output).contains("invalid matrix size"));
}

#[test]
fn test_warning_survives_silenced_log_filter() {
    for rust_log in ["off", "error", "matops=off"] {
        let output = matops_with_log(rust_log, &["0", "--seed", "2"]);
        assert!(output.status.success());
        assert!(
            stderr(&output).contains("falling back to default size 20"),
            "RUST_LOG={}: {}",
            rust_log,
            stderr(&output)
        );
    }
}

#[test]
fn test_fatal_error_survives_silenced_log_filter() {
    let huge = (usize::MAX / 2).to_string();
    let output = matops_with_log("off", &[&huge]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("failed to allocate"));
}

#[test]
fn test_two_positionals_is_usage_error() {
    let output = matops(&["4", "5"]);
    assert!(!output.status.success());
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("Usage"));
}
