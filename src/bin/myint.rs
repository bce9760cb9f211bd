/*
 * myint.rs - Test helper for tidesh
 *
 * usage: myint <n>
 * Sleeps for <n> seconds and then kills itself with SIGINT, so the shell
 * sees a child that was terminated by a signal rather than one that exited.
 */

use nix::sys::signal::{self, Signal};
use nix::unistd::Pid;
use std::env;
use std::process;
use std::thread;
use std::time::Duration;

fn main() {
    let args: Vec<String> = env::args().collect();

    if args.len() != 2 {
        eprintln!("Usage: {} <n>", args[0]);
        process::exit(0);
    }

    let secs = args[1].parse::<u64>().unwrap_or_else(|_| {
        eprintln!("Error: <n> must be a positive integer");
        process::exit(1);
    });

    thread::sleep(Duration::from_secs(secs));

    // Only this process: the shell shares our process group.
    let pid = Pid::from_raw(process::id() as i32);
    if let Err(err) = signal::kill(pid, Signal::SIGINT) {
        eprintln!("kill (int) error: {}", err);
        process::exit(1);
    }

    // SIGINT has the default disposition here, so this is not reached.
    thread::sleep(Duration::from_secs(5));
    process::exit(0);
}
