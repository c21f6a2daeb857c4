use std::io;
use std::path::PathBuf;
use std::process;

use clap::Parser;
use podfp_cli::commands::status;

#[derive(Parser)]
#[command(name = "pfpstatus")]
#[command(about = "Print collected node status files as a JSON array", long_about = None)]
struct Cli {
    /// Directory scanned for *.json status files when no targets are given.
    #[arg(long, default_value = podfp_persistence::BASE_DIRECTORY)]
    base_dir: PathBuf,

    /// Status files to print; defaults to every status file in the base
    /// directory.
    targets: Vec<PathBuf>,
}

fn main() {
    podfp_cli::init_logging();
    let cli = Cli::parse();

    let mut stdout = io::stdout().lock();
    process::exit(status::execute(&mut stdout, &cli.base_dir, &cli.targets));
}
