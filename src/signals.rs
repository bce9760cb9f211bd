use crate::error::ShellError;
use nix::libc::STDOUT_FILENO;
use nix::unistd::write;
use signal_hook::consts::signal::SIGINT;
use signal_hook::low_level;

/// Written straight to stdout when the operator presses Ctrl-C.
pub const INTERRUPT_NOTICE: &[u8] = b"\nInterrupted.\n> ";

/// Installs the SIGINT handler for the shell.
///
/// The handler only issues one `write(2)` of a static buffer: no allocation,
/// no locks, no formatting. It leaves the loop alone, so a blocked read simply
/// resumes and the operator gets a fresh prompt marker. Children get the
/// default disposition back when they exec.
pub fn install_signal_handlers() -> Result<(), ShellError> {
    // SAFETY: the action is async-signal-safe, it only calls write(2).
    unsafe {
        low_level::register(SIGINT, || {
            let _ = write(STDOUT_FILENO, INTERRUPT_NOTICE);
        })?;
    }
    Ok(())
}
