/*
 * mystop.rs - Test helper for tidesh
 *
 * usage: mystop
 * Prints its pid, stops itself with SIGSTOP, and once continued prints
 * "resumed <pid>" and exits. The shell must keep waiting while it is stopped.
 */

use nix::sys::signal::{self, Signal};
use std::io::{self, Write};
use std::process;

fn main() {
    let pid = process::id();
    println!("stopping {}", pid);
    let _ = io::stdout().flush();

    // Stop only ourselves, never the whole process group.
    if let Err(err) = signal::raise(Signal::SIGSTOP) {
        eprintln!("raise (stop) error: {}", err);
        process::exit(1);
    }

    println!("resumed {}", pid);
}
