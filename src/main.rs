//! CLI entry point for lstree

use std::io::{self, BufWriter};
use std::path::Path;
use std::process;

use clap::Parser;
use lstree::TreeWalker;

/// The walk always starts here and is printed as the first line.
const ROOT: &str = ".";

#[derive(Parser, Debug)]
#[command(name = "lstree")]
#[command(about = "Print the current directory as a tree, skipping node_modules, .git, build output and friends")]
#[command(version)]
struct Args {}

fn main() {
    // Logs go to stderr; warn by default, RUST_LOG=debug for the walk summary
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .try_init()
        .ok();

    let _args = Args::parse();

    // `print` flushes before returning, so lines written ahead of a fatal
    // error are not lost to `process::exit`
    let walker = TreeWalker::new();
    if let Err(e) = walker.print(Path::new(ROOT), BufWriter::new(io::stdout().lock())) {
        eprintln!("lstree: {}", e);
        process::exit(1);
    }
}
