mod annotate;
mod cli;
mod consts;
mod error;
mod matcher;

use clap::Parser;

use cli::Cli;

fn main() {
    let cli = Cli::parse();

    println!("input directory: {}", cli.directory.display());

    if let Err(e) = annotate::run(&cli.directory) {
        eprintln!("{e}");
        std::process::exit(1);
    }
}
