use anyhow::{Context, Result};
use clap::error::ErrorKind;
use clap::Parser;
use embedres::{convert, derive_identifier};
use std::fs;
use std::path::PathBuf;
use std::process;

const USAGE: &str = "Usage: embed [-v] [--name <IDENT>] <input-file> <output-file>";

#[derive(Parser)]
#[command(
    name = "embed",
    version,
    about = "Convert a binary file into a C++ source file embedding its bytes"
)]
struct Cli {
    /// Binary file to embed
    #[arg(allow_hyphen_values = true)]
    input: PathBuf,

    /// Source file to generate (overwritten if present)
    #[arg(allow_hyphen_values = true)]
    output: PathBuf,

    /// Array identifier to use instead of one derived from the input file name
    #[arg(short, long, value_name = "IDENT")]
    name: Option<String>,

    /// Report progress on standard error
    #[arg(short, long)]
    verbose: bool,
}

fn parse_cli() -> Cli {
    match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(_) => {
            println!("{USAGE}");
            process::exit(1);
        }
    }
}

fn main() -> Result<()> {
    let cli = parse_cli();

    if !cli.input.exists() {
        println!("Error: Input file '{}' not found", cli.input.display());
        process::exit(1);
    }

    let identifier = match cli.name {
        Some(name) => name,
        None => derive_identifier(&cli.input)?,
    };

    if cli.verbose {
        let size = fs::metadata(&cli.input)
            .with_context(|| format!("cannot stat '{}'", cli.input.display()))?
            .len();
        eprintln!(
            "verbose: embedding '{}' ({size} bytes) as '{identifier}'",
            cli.input.display()
        );
        eprintln!("verbose: writing '{}'", cli.output.display());
    }

    convert(&cli.input, &cli.output, &identifier)
        .with_context(|| format!("cannot generate '{}'", cli.output.display()))?;

    println!(
        "Generated {} with variable '{identifier}'",
        cli.output.display()
    );

    Ok(())
}
