use nix::errno::Errno;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong inside the shell.
///
/// Only `Alloc` and `SignalInstall` end the process; every other variant is
/// printed as a one-line diagnostic and the loop carries on.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error("expected argument to \"{0}\"")]
    MissingArgument(&'static str),
    #[error("{}: {}", .path.display(), .errno.desc())]
    ChangeDir { path: PathBuf, errno: Errno },
    #[error("fork failed: {}", .0.desc())]
    Fork(Errno),
    #[error("{}: {}", .command, .errno.desc())]
    Exec { command: String, errno: Errno },
    #[error("{0}: argument contains a NUL byte")]
    NulByte(String),
    #[error("waitpid failed: {}", .0.desc())]
    Wait(Errno),
    #[error("allocation error")]
    Alloc(#[from] std::collections::TryReserveError),
    #[error("duplicate built-in command \"{0}\"")]
    DuplicateBuiltin(&'static str),
    #[error("cannot install SIGINT handler: {0}")]
    SignalInstall(#[from] std::io::Error),
}

/// Writes a diagnostic in the shell's single-line format.
pub fn report(err: &mut dyn std::io::Write, e: &ShellError) {
    // Nothing sensible to do if stderr itself is gone.
    let _ = writeln!(err, "tidesh: {}", e);
}
