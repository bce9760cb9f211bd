use crate::error::{report, ShellError};
use crate::parser::Tokens;
use crate::utils::fatal;
use log::debug;
use nix::unistd::chdir;
use once_cell::sync::Lazy;
use std::ffi::OsStr;
use std::io::Write;
use std::os::unix::ffi::OsStrExt;
use std::path::Path;

/// A command the shell runs itself instead of spawning a process.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Builtin {
    Cd,
    Help,
    Exit,
}

/// Built-in names in the order `help` lists them and lookup scans them.
pub const DEFAULT_BUILTINS: [(&str, Builtin); 3] = [
    ("cd", Builtin::Cd),
    ("help", Builtin::Help),
    ("exit", Builtin::Exit),
];

/// The process-wide built-in table.
pub static BUILTINS: Lazy<BuiltinTable> =
    Lazy::new(|| BuiltinTable::new(&DEFAULT_BUILTINS).unwrap_or_else(|e| fatal(&e)));

/// Ordered name to built-in mapping. Names are unique.
#[derive(Debug)]
pub struct BuiltinTable {
    entries: Vec<(&'static str, Builtin)>,
}

impl BuiltinTable {
    pub fn new(entries: &[(&'static str, Builtin)]) -> Result<Self, ShellError> {
        for (i, &(name, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|&(seen, _)| seen == name) {
                return Err(ShellError::DuplicateBuiltin(name));
            }
        }
        Ok(BuiltinTable {
            entries: entries.to_vec(),
        })
    }

    /// Linear scan in table order; exact, case-sensitive.
    pub fn lookup(&self, name: &[u8]) -> Option<Builtin> {
        self.entries
            .iter()
            .find(|(n, _)| n.as_bytes() == name)
            .map(|&(_, b)| b)
    }

    pub fn names(&self) -> impl Iterator<Item = &'static str> + '_ {
        self.entries.iter().map(|&(n, _)| n)
    }
}

impl Builtin {
    /// Runs the built-in. Returns `false` only for `exit`.
    pub fn run(self, tokens: &Tokens<'_>, out: &mut dyn Write, err: &mut dyn Write) -> bool {
        match self {
            Builtin::Cd => {
                if let Err(e) = change_dir(tokens.args()) {
                    report(err, &e);
                }
                true
            }
            Builtin::Help => {
                help(&BUILTINS, out);
                true
            }
            Builtin::Exit => false,
        }
    }
}

/// Changes to the first argument; any further arguments are ignored.
fn change_dir(args: &[&[u8]]) -> Result<(), ShellError> {
    let target = args.first().ok_or(ShellError::MissingArgument("cd"))?;
    chdir(*target).map_err(|errno| ShellError::ChangeDir {
        path: Path::new(OsStr::from_bytes(target)).to_path_buf(),
        errno,
    })?;
    debug!("changed directory to {}", OsStr::from_bytes(target).to_string_lossy());
    Ok(())
}

fn help(table: &BuiltinTable, out: &mut dyn Write) {
    let _ = writeln!(out, "tidesh - a very soggy shell.");
    let _ = writeln!(out, "Built-in commands:");
    for name in table.names() {
        let _ = writeln!(out, "  {}", name);
    }
    let _ = out.flush();
}

/// Serialises tests that move the process working directory.
#[cfg(test)]
pub static CWD_LOCK: std::sync::Mutex<()> = std::sync::Mutex::new(());
