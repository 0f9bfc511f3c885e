// shred - overwrite a file with random data, then delete it.
// Usage:
//   shred <file> [--passes N] [--confirm] [-v]

mod cli;
mod log;

use std::time::Instant;

use clap::Parser;
use shred::{PassProgress, ShredRequest, Shredder};

use crate::cli::{ask_confirm, Cli};

fn main() {
    let cli = Cli::parse();
    log::init_tracing(cli.verbose);

    if cli.confirm {
        let prompt = format!("Securely delete file '{}' ?", cli.path.display());
        match ask_confirm(&prompt) {
            Ok(true) => {}
            Ok(false) => {
                println!("Skipping {}", cli.path.display());
                return;
            }
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(2);
            }
        }
    }

    let request = ShredRequest::new(&cli.path, cli.passes);
    let t0 = Instant::now();
    let mut bytes_written_total: u64 = 0;
    let mut report = |p: PassProgress| {
        bytes_written_total += p.bytes;
        eprintln!(
            "Pass {}/{} completed (elapsed: {:.1}s). Total bytes written: {}",
            p.pass,
            p.passes,
            t0.elapsed().as_secs_f64(),
            bytes_written_total
        );
    };

    if let Err(e) = Shredder::new().execute_with(&request, &mut report) {
        eprintln!("Error: {}", e);
        std::process::exit(2);
    }
    println!("Removed {}", cli.path.display());
}
