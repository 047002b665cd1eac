// src/main.rs: levellog entry point

use clap::Parser;

use levellog::cli::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let args = Cli::parse();
    levellog::cli::run(&args)
}
