// to use: kubectl get pods --field-selector spec.nodeName=$NODE -A --no-headers [-o wide] | pfp

use std::io;

use clap::Parser;
use podfp_cli::commands::fingerprint;

#[derive(Parser)]
#[command(name = "pfp")]
#[command(about = "Fingerprint the pod set read from standard input", long_about = None)]
struct Cli {
    /// Enable tracing: dump the full comparison record as JSON on stderr.
    #[arg(short = 'T', long = "trace")]
    trace: bool,
}

fn main() -> anyhow::Result<()> {
    podfp_cli::init_logging();
    let cli = Cli::parse();

    let stdin = io::stdin();
    let (signature, status) = fingerprint::run(stdin.lock(), cli.trace)?;
    println!("{signature}");

    if let Some(status) = status {
        serde_json::to_writer(io::stderr(), &status)?;
        eprintln!();
    }
    Ok(())
}
