use crate::error::{report, ShellError};
use crate::parser::{display, Tokens};
use log::debug;
use nix::errno::Errno;
use nix::sys::wait::{waitpid, WaitPidFlag, WaitStatus};
use nix::unistd::{execvp, fork, ForkResult, Pid};
use std::ffi::CString;
use std::io::{self, Write};
use std::process;

/// Runs a command that is not a built-in.
///
/// Implementations report their own failures and return the continuation
/// signal; a failed program never stops the shell.
pub trait Launcher {
    fn launch(&mut self, tokens: &Tokens<'_>) -> bool;
}

/// Forks, execs the program found on `PATH` in the child and waits for it.
#[derive(Debug, Default)]
pub struct ForkExec;

impl Launcher for ForkExec {
    fn launch(&mut self, tokens: &Tokens<'_>) -> bool {
        if let Err(e) = execute_command(tokens) {
            report(&mut io::stderr(), &e);
        }
        true
    }
}

/// Executes an external command in the foreground.
/// - Builds the argument vector before forking.
/// - In the child, replaces the image with `execvp`; if that fails the child
///   reports and exits with status 1.
/// - In the parent, waits until the child exits or is killed.
fn execute_command(tokens: &Tokens<'_>) -> Result<(), ShellError> {
    let argv = to_argv(tokens)?;
    let Some(program) = argv.first() else {
        return Ok(());
    };
    debug!("launching {:?}", argv);

    // Anything still buffered would otherwise be written twice.
    let _ = io::stdout().flush();

    // SAFETY: the shell is single-threaded, and the child only execs or exits.
    match unsafe { fork() } {
        Ok(ForkResult::Child) => {
            let errno = match execvp(program, &argv) {
                Ok(never) => match never {},
                Err(errno) => errno,
            };
            let command = display(program.as_bytes()).into_owned();
            report(&mut io::stderr(), &ShellError::Exec { command, errno });
            process::exit(1);
        }
        Ok(ForkResult::Parent { child }) => wait_for(child),
        Err(errno) => Err(ShellError::Fork(errno)),
    }
}

fn to_argv(tokens: &Tokens<'_>) -> Result<Vec<CString>, ShellError> {
    tokens
        .argv()
        .iter()
        .map(|word| CString::new(*word).map_err(|_| ShellError::NulByte(display(word).into_owned())))
        .collect()
}

/// Blocks until `child` has exited or been killed by a signal. A stopped
/// child is not finished, so the wait goes on.
fn wait_for(child: Pid) -> Result<(), ShellError> {
    loop {
        match waitpid(child, Some(WaitPidFlag::WUNTRACED)) {
            Ok(WaitStatus::Exited(pid, code)) => {
                debug!("child {} exited with status {}", pid, code);
                return Ok(());
            }
            Ok(WaitStatus::Signaled(pid, signal, _)) => {
                debug!("child {} terminated by {}", pid, signal);
                return Ok(());
            }
            Ok(WaitStatus::Stopped(pid, signal)) => {
                debug!("child {} stopped by {}, still waiting", pid, signal);
            }
            Ok(status) => debug!("child status {:?}, still waiting", status),
            Err(Errno::EINTR) => {}
            Err(errno) => return Err(ShellError::Wait(errno)),
        }
    }
}
