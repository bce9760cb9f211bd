use crate::builtins::BUILTINS;
use crate::exec::Launcher;
use crate::parser::{display, split_line, Tokens};
use crate::reader::read_line;
use crate::utils::fatal;
use log::debug;
use nix::unistd::getcwd;
use std::io::{self, Write};

/// Printed after the working directory.
pub static PROMPT: &str = " > ";

/// Options picked up from the command line.
#[derive(Debug, Clone, Copy)]
pub struct ShellConfig {
    /// Print a prompt before each read.
    pub emit_prompt: bool,
    /// Log at debug level unless `RUST_LOG` says otherwise.
    pub verbose: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        ShellConfig {
            emit_prompt: true,
            verbose: false,
        }
    }
}

/// Runs a built-in if the first word names one, otherwise hands the words to
/// `launcher`. A blank line is a no-op that keeps the loop going.
pub fn execute<L: Launcher>(
    tokens: &Tokens<'_>,
    launcher: &mut L,
    out: &mut dyn Write,
    err: &mut dyn Write,
) -> bool {
    let Some(command) = tokens.command() else {
        return true;
    };
    match BUILTINS.lookup(command) {
        Some(builtin) => {
            debug!("running built-in {:?}", builtin);
            builtin.run(tokens, out, err)
        }
        None => {
            debug!("no built-in named {}, launching", display(command));
            launcher.launch(tokens)
        }
    }
}

fn print_prompt(out: &mut dyn Write) {
    let _ = match getcwd() {
        Ok(cwd) => write!(out, "{}{}", cwd.display(), PROMPT),
        Err(_) => write!(out, "{}", PROMPT.trim_start()),
    };
    let _ = out.flush();
}

/// Runs the main shell loop: prints the prompt (if enabled), reads a line,
/// splits it and dispatches it, until a command returns `false` or input ends.
pub fn run_shell<L: Launcher>(config: ShellConfig, launcher: &mut L) {
    let stdin = io::stdin();
    let mut input = stdin.lock();
    let mut out = io::stdout();
    let mut err = io::stderr();

    loop {
        if config.emit_prompt {
            print_prompt(&mut out);
        }

        let line = read_line(&mut input).unwrap_or_else(|e| fatal(&e));
        let tokens = split_line(line.as_bytes()).unwrap_or_else(|e| fatal(&e));
        let keep_going = execute(&tokens, launcher, &mut out, &mut err);

        if !keep_going {
            debug!("exit requested");
            break;
        }
        if line.at_eof() {
            debug!("end of input");
            break;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builtins::CWD_LOCK;

    /// Counts launches instead of forking.
    #[derive(Default)]
    struct CountingLauncher {
        launched: Vec<Vec<String>>,
    }

    impl Launcher for CountingLauncher {
        fn launch(&mut self, tokens: &Tokens<'_>) -> bool {
            self.launched
                .push(tokens.argv().iter().map(|w| display(w).into_owned()).collect());
            true
        }
    }

    fn dispatch(line: &str, launcher: &mut CountingLauncher) -> (bool, Vec<u8>, Vec<u8>) {
        let tokens = split_line(line.as_bytes()).unwrap();
        let mut out = Vec::new();
        let mut err = Vec::new();
        let keep_going = execute(&tokens, launcher, &mut out, &mut err);
        (keep_going, out, err)
    }

    #[test]
    fn test_blank_lines_do_nothing() {
        let mut launcher = CountingLauncher::default();
        for line in ["", " ", "\t\t", " \r \x07 "] {
            let (keep_going, out, err) = dispatch(line, &mut launcher);
            assert!(keep_going);
            assert!(out.is_empty());
            assert!(err.is_empty());
        }
        assert!(launcher.launched.is_empty());
    }

    #[test]
    fn test_builtins_never_launch() {
        let _guard = CWD_LOCK.lock().unwrap();
        let mut launcher = CountingLauncher::default();
        for (name, _) in crate::builtins::DEFAULT_BUILTINS {
            dispatch(name, &mut launcher);
            dispatch(&format!("{} /nonexistent-tidesh-dir extra", name), &mut launcher);
        }
        assert!(launcher.launched.is_empty());
    }

    #[test]
    fn test_exit_returns_false() {
        let mut launcher = CountingLauncher::default();
        let (keep_going, out, _) = dispatch("exit now", &mut launcher);
        assert!(!keep_going);
        assert!(out.is_empty());
    }

    #[test]
    fn test_unknown_command_goes_to_launcher() {
        let mut launcher = CountingLauncher::default();
        let (keep_going, _, _) = dispatch("  echo hello\tworld ", &mut launcher);
        assert!(keep_going);
        assert_eq!(launcher.launched, vec![vec!["echo", "hello", "world"]]);
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let mut launcher = CountingLauncher::default();
        let (keep_going, _, _) = dispatch("EXIT", &mut launcher);
        assert!(keep_going);
        assert_eq!(launcher.launched, vec![vec!["EXIT"]]);
    }

    #[test]
    fn test_prompt_shows_working_directory() {
        let _guard = CWD_LOCK.lock().unwrap();
        let mut out = Vec::new();
        print_prompt(&mut out);
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            format!("{} > ", cwd.display())
        );
    }
}
