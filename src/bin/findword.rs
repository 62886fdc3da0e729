use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;
use wordtree::dictionary::Dictionary;
use wordtree::discover::discover;
use wordtree::letters::{Letters, MAX_LETTERS, MIN_LETTERS};

/// Prints every dictionary word that can be spelled from the given letters, using each letter at
/// most once.
#[derive(Parser, Debug)]
#[command(version)]
struct Cli {
    /// Dictionary file with one word per line.
    #[arg(value_name = "DICTIONARY")]
    dictionary: PathBuf,

    /// Letters to spell words from. Prompted for on stdin when omitted.
    #[arg(value_name = "LETTERS")]
    letters: Option<String>,

    /// Log more; repeat for even more. `RUST_LOG` takes precedence when set.
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let default_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    let dictionary = Dictionary::open(&cli.dictionary).context("loading dictionary")?;
    info!(words = dictionary.len(), "dictionary loaded");

    let input = match cli.letters {
        Some(letters) => letters,
        None => prompt()?,
    };
    let letters = Letters::parse(&input).context("invalid letters")?;

    let words = discover(&dictionary, &letters);
    info!(found = words.len(), "search finished");

    let mut stdout = io::stdout().lock();
    writeln!(stdout)?;
    writeln!(stdout, "Words found in the dictionary")?;
    writeln!(stdout, "-----------------------------")?;
    for word in words {
        writeln!(stdout, "{word}")?;
    }

    Ok(())
}

/// Asks for the letters on stdout and reads one line of stdin.
fn prompt() -> anyhow::Result<String> {
    println!("Enter a string of letters ({MIN_LETTERS}-{MAX_LETTERS} characters):");

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("reading letters from stdin")?;
    Ok(line)
}
