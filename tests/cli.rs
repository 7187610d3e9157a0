//! End-to-end runs of the `pikegrep` binary: stdin in, stdout and exit status out.

use std::io::Write;
use std::process::{Command, Output, Stdio};

fn pikegrep(args: &[&str], stdin: &str) -> Output {
    let mut child = Command::new(env!("CARGO_BIN_EXE_pikegrep"))
        .args(args)
        .env_remove("PIKEGREP_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("spawn pikegrep");
    // the child may exit on a usage error before reading anything
    let _ = child.stdin.take().unwrap().write_all(stdin.as_bytes());
    child.wait_with_output().unwrap()
}

fn stdout(output: &Output) -> &str {
    std::str::from_utf8(&output.stdout).unwrap()
}

#[test]
fn matching_line_exits_zero_and_is_printed() {
    let output = pikegrep(&["-E", "bcd$"], "abcd\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "abcd\n");
}

#[test]
fn no_match_exits_one() {
    let output = pikegrep(&["-E", "^bcd$"], "abcde\n");
    assert_eq!(output.status.code(), Some(1));
    assert_eq!(stdout(&output), "");
}

#[test]
fn every_line_is_searched() {
    let output = pikegrep(&["-E", "(.*)"], "(abc)\nabc\n(x)\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "(abc)\n(x)\n");
}

#[test]
fn inverted_count() {
    let output = pikegrep(&["-v", "-c", "-E", "a"], "a\nb\nc\n");
    assert_eq!(output.status.code(), Some(0));
    assert_eq!(stdout(&output), "2\n");
}

#[test]
fn quiet_only_sets_status() {
    let output = pikegrep(&["-q", "-E", "..."], "abc\n");
    assert_eq!(output.status.code(), Some(0));
    assert!(output.stdout.is_empty());
}

#[test]
fn usage_errors_exit_two() {
    let output = pikegrep(&[], "abc\n");
    assert_eq!(output.status.code(), Some(2));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("-E <PATTERN>"), "stderr: {stderr}");

    let output = pikegrep(&["-z", "-E", "a"], "abc\n");
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn bad_log_level_exits_two() {
    let output = Command::new(env!("CARGO_BIN_EXE_pikegrep"))
        .args(["-E", "a"])
        .env("PIKEGREP_LOG", "chatty")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(2));
}

#[test]
fn log_flag_overrides_the_environment() {
    let output = Command::new(env!("CARGO_BIN_EXE_pikegrep"))
        .args(["-E", "x", "--log", "debug"])
        .env("PIKEGREP_LOG", "off")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("selected 0 line(s)"), "stderr: {stderr}");
}

#[test]
fn debug_logging_goes_to_stderr() {
    let output = Command::new(env!("CARGO_BIN_EXE_pikegrep"))
        .args(["-E", "x"])
        .env("PIKEGREP_LOG", "debug")
        .stdin(Stdio::null())
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(1));
    assert!(output.stdout.is_empty());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("selected 0 line(s)"), "stderr: {stderr}");
}
