//! Common test utilities for black-box `lox` binary tests.
//!
//! Every test here spawns the actual built binary and inspects its real
//! stdout/stderr/exit code, the way the teacher repo's integration suite
//! builds and runs an actual executable rather than calling library
//! functions directly — `print` sends bytes to the process's real stdout,
//! and nothing short of a subprocess observes that faithfully.

#![allow(dead_code)]

use std::io::Write;
use std::path::PathBuf;
use std::process::{Command, Output, Stdio};
use std::sync::atomic::{AtomicU64, Ordering};

/// Path to the `lox` binary built by cargo for this test run.
pub fn lox_binary() -> String {
    env!("CARGO_BIN_EXE_lox").to_string()
}

static COUNTER: AtomicU64 = AtomicU64::new(0);

/// Writes `source` to a fresh temporary `.lox` file and returns its path.
///
/// Each call gets a unique name (pid + a process-local counter), so tests
/// run concurrently without colliding on the same file.
fn write_source_file(source: &str) -> PathBuf {
    let id = COUNTER.fetch_add(1, Ordering::Relaxed);
    let mut path = std::env::temp_dir();
    path.push(format!("lox-test-{}-{id}.lox", std::process::id()));
    let mut file = std::fs::File::create(&path).expect("failed to create temp source file");
    file.write_all(source.as_bytes()).expect("failed to write temp source file");
    path
}

/// The result of running a script through the `lox` binary.
pub struct RunResult {
    pub stdout: String,
    pub stderr: String,
    pub exit_code: i32,
}

impl RunResult {
    fn from_output(output: Output) -> Self {
        RunResult {
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            exit_code: output.status.code().unwrap_or(-1),
        }
    }
}

/// Runs `source` as a script file through `lox <path>` and returns the
/// captured result. The temporary file is removed afterward regardless of
/// outcome.
pub fn run_script(source: &str) -> RunResult {
    let path = write_source_file(source);
    let output = Command::new(lox_binary())
        .arg(&path)
        .output()
        .expect("failed to run lox binary");
    let _ = std::fs::remove_file(&path);
    RunResult::from_output(output)
}

/// Runs `lox` with the given raw CLI arguments (no source file plumbing),
/// for exercising argument-handling behavior directly.
pub fn run_with_args(args: &[&str]) -> RunResult {
    let output = Command::new(lox_binary())
        .args(args)
        .output()
        .expect("failed to run lox binary");
    RunResult::from_output(output)
}

/// Feeds `input` to a REPL session (`lox` with no arguments) over stdin and
/// returns the captured result once the process exits.
pub fn run_repl(input: &str) -> RunResult {
    let mut child = Command::new(lox_binary())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("failed to spawn lox binary");

    child
        .stdin
        .take()
        .expect("child stdin was not piped")
        .write_all(input.as_bytes())
        .expect("failed to write to child stdin");

    let output = child.wait_with_output().expect("failed to wait on child");
    RunResult::from_output(output)
}
