use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use memmap2::Mmap;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use zfind::{output, search, zarray};

#[derive(Parser)]
#[command(name = "zfind")]
#[command(about = "Linear-time exact substring search built on the Z-array")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find all occurrences of a pattern in a file (or stdin)
    Find {
        /// Pattern to match byte for byte
        pattern: String,

        /// File to search; reads stdin when omitted
        file: Option<PathBuf>,

        /// Emit matches as JSON records
        #[arg(long)]
        json: bool,

        /// Only print the number of matches
        #[arg(short, long)]
        count: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },
    /// Print the Z-array of a string
    Zarray {
        /// Input string
        input: String,
    },
}

/// Text to search, memory-mapped when it comes from a file.
enum Input {
    Mapped(Mmap),
    Buffered(Vec<u8>),
}

impl Input {
    fn bytes(&self) -> &[u8] {
        match self {
            Input::Mapped(mmap) => mmap,
            Input::Buffered(buf) => buf,
        }
    }
}

fn read_input(file: Option<&Path>) -> Result<Input> {
    match file {
        Some(path) => {
            let file = File::open(path)
                .with_context(|| format!("Failed to open {}", path.display()))?;
            let mmap = unsafe { Mmap::map(&file) }
                .with_context(|| format!("Failed to map {}", path.display()))?;
            Ok(Input::Mapped(mmap))
        }
        None => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("Failed to read stdin")?;
            Ok(Input::Buffered(buf))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Find {
            pattern,
            file,
            json,
            count,
            no_color,
        } => {
            let input = read_input(file.as_deref())?;
            let text = input.bytes();
            let offsets = search::find_all(text, pattern.as_bytes())?;

            if count {
                println!("{}", offsets.len());
            } else if json {
                let matches = output::resolve_matches(text, &offsets);
                output::print_matches_json(&matches)?;
            } else {
                let matches = output::resolve_matches(text, &offsets);
                output::print_matches(&matches, !no_color)?;
            }
        }
        Commands::Zarray { input } => {
            let zs = zarray::z_array(input.as_bytes());
            let rendered: Vec<String> = zs.iter().map(|z| z.to_string()).collect();
            println!("[{}]", rendered.join(", "));
        }
    }

    Ok(())
}
