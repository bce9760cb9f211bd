//! Helpers shared by the integration tests: spawn the shell with piped stdio
//! inside a scratch directory.

#![allow(dead_code)] // Not every helper is used by every test file

use std::io::{Read, Write};
use std::path::{Path, PathBuf};
use std::process::{Child, ChildStdout, Command, Output, Stdio};

pub const TIDESH: &str = env!("CARGO_BIN_EXE_tidesh");
pub const MYINT: &str = env!("CARGO_BIN_EXE_myint");
pub const MYSTOP: &str = env!("CARGO_BIN_EXE_mystop");

/// A scratch directory plus its canonical path, which is what the prompt shows.
pub fn scratch_dir() -> (tempfile::TempDir, PathBuf) {
    let dir = tempfile::TempDir::new().unwrap();
    let path = dir.path().canonicalize().unwrap();
    (dir, path)
}

pub fn prompt(dir: &Path) -> String {
    format!("{} > ", dir.display())
}

pub fn spawn_shell(dir: &Path) -> Child {
    Command::new(TIDESH)
        .current_dir(dir)
        .env_remove("RUST_LOG")
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to start tidesh")
}

/// Feeds `input` to a fresh shell, closes stdin and collects everything.
pub fn run_shell(dir: &Path, input: &str) -> Output {
    let mut child = spawn_shell(dir);
    child
        .stdin
        .take()
        .unwrap()
        .write_all(input.as_bytes())
        .unwrap();
    child.wait_with_output().unwrap()
}

/// Reads from the shell's stdout until the bytes read so far end with `pat`.
pub fn read_until(stdout: &mut ChildStdout, pat: &[u8]) -> String {
    let mut seen = Vec::new();
    let mut byte = [0u8; 1];
    while !seen.ends_with(pat) {
        let n = stdout.read(&mut byte).unwrap();
        assert!(n > 0, "stdout closed before {:?} appeared; got {:?}", pat, seen);
        seen.push(byte[0]);
    }
    String::from_utf8(seen).unwrap()
}

pub fn text(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).into_owned()
}
