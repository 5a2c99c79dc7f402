//! CLI argument definitions

use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(name = "titlemeta")]
#[command(about = "Prepend derived title front matter to numbered files", version)]
pub(crate) struct Cli {
    /// Root directory to scan for files named <digits>_<rest>
    pub(crate) directory: PathBuf,
}
