use crate::error::ShellError;
use std::process;

pub fn print_usage() {
    println!("Usage: tidesh [-hvp]");
    println!("   -h   Print this help message");
    println!("   -v   Enable verbose mode (debug logging)");
    println!("   -p   Do not print a command prompt");
    process::exit(1);
}

/// Makes room for one more element, growing capacity by exactly `step`
/// slots when the buffer is full.
pub fn grow<T>(buf: &mut Vec<T>, step: usize) -> Result<(), ShellError> {
    if buf.len() == buf.capacity() {
        buf.try_reserve_exact(step)?;
    }
    Ok(())
}

/// Reports an unrecoverable error and terminates the shell.
pub fn fatal(e: &ShellError) -> ! {
    eprintln!("tidesh: {}", e);
    process::exit(1);
}
