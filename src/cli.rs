use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use clap::{ArgAction, Parser};
use shred::DEFAULT_PASSES;

/// Overwrite a file with random data several times, then delete it.
#[derive(Parser, Debug)]
#[command(name = "shred", version, about)]
pub struct Cli {
    /// File to destroy
    pub path: PathBuf,

    /// Number of overwrite passes
    #[arg(short, long, default_value_t = DEFAULT_PASSES)]
    pub passes: u32,

    /// Ask before shredding
    #[arg(short, long)]
    pub confirm: bool,

    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Prompts on stdout and reads one answer from stdin. Closed input is an
/// error, not a "no".
pub fn ask_confirm(prompt: &str) -> io::Result<bool> {
    print!("{} [y/N]: ", prompt);
    io::stdout().flush()?;
    read_answer(io::stdin().lock())
}

fn read_answer(mut input: impl BufRead) -> io::Result<bool> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(io::Error::new(io::ErrorKind::UnexpectedEof, "no answer to confirmation prompt"));
    }
    Ok(matches!(line.trim().to_ascii_lowercase().as_str(), "y" | "yes"))
}
