mod builtins;
mod error;
mod exec;
mod parser;
mod reader;
mod shell;
mod signals;
mod utils;

use exec::ForkExec;
use shell::ShellConfig;
use std::env;

fn main() {
    // Parse command-line arguments.
    let mut config = ShellConfig::default();
    for arg in env::args().skip(1) {
        match arg.as_str() {
            "-h" => utils::print_usage(),
            "-v" => config.verbose = true,
            "-p" => config.emit_prompt = false,
            _ => {}
        }
    }

    let default_filter = if config.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    // Install the Ctrl-C handler before the first prompt.
    if let Err(e) = signals::install_signal_handlers() {
        utils::fatal(&e);
    }

    // Run the main shell loop with the options.
    shell::run_shell(config, &mut ForkExec);
}
