#![deny(missing_docs)]
//! A command-line interface for the classical cipher library.

use clap::{Args, Parser, Subcommand};
use cipher_core::format::strip_filler;
use cipher_core::{Digraph, caesar, playfair, vigenere};
use log::{error, info};
use std::path::PathBuf;

mod input;
mod report;

use input::{CliError, read_key, read_text};
use report::{Operation, Report};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[command(
    after_help = "EXAMPLES:\n  \n# Caesar shift by 3\ncipher-cli caesar encrypt --shift 3 \"HELLO WORLD\"\n\n# Vigenère with a keyword, output in 5-letter groups\ncipher-cli --group 5 vigenere encrypt --key LEMON \"ATTACK AT DAWN\"\n\n# Playfair from a file, showing the key matrix\ncipher-cli playfair encrypt --key PLAYFAIREXAMPLE --input ./message.txt --show-matrix\n\n# Print the Playfair key matrix only\ncipher-cli matrix --key PLAYFAIREXAMPLE"
)]
struct Cli {
    /// Also print the output in groups of SIZE letters.
    #[arg(long, global = true, value_name = "SIZE")]
    group: Option<usize>,

    /// Print a single JSON object instead of labelled lines.
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Shift every letter by a fixed amount
    Caesar {
        /// Whether to encrypt or decrypt
        #[arg(value_enum)]
        operation: Operation,

        /// The shift amount. Any integer; values wrap around the alphabet.
        #[arg(short, long, allow_negative_numbers = true)]
        shift: i64,

        #[command(flatten)]
        source: TextSource,
    },
    /// Shift letters by a repeating alphabetic key
    Vigenere {
        /// Whether to encrypt or decrypt
        #[arg(value_enum)]
        operation: Operation,

        /// The alphabetic key.
        #[arg(short, long)]
        key: String,

        #[command(flatten)]
        source: TextSource,
    },
    /// Encipher letter pairs with a 5x5 key matrix
    Playfair {
        /// Whether to encrypt or decrypt
        #[arg(value_enum)]
        operation: Operation,

        /// The alphabetic key used to build the matrix.
        #[arg(short, long)]
        key: String,

        /// Print the key matrix before the result.
        #[arg(long)]
        show_matrix: bool,

        /// [DECRYPT] Remove filler X letters from the output.
        #[arg(long)]
        strip_filler: bool,

        #[command(flatten)]
        source: TextSource,
    },
    /// Print the Playfair key matrix for a key
    Matrix {
        /// The alphabetic key used to build the matrix.
        #[arg(short, long)]
        key: String,
    },
}

/// Where the text to process comes from.
#[derive(Args)]
struct TextSource {
    /// The text to process. If omitted, --input or standard input is read.
    #[arg()]
    text: Option<String>,

    /// Path to a file holding the text to process.
    #[arg(short, long, value_name = "FILE", conflicts_with = "text")]
    input: Option<PathBuf>,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let report = run(&cli.command).unwrap_or_else(|e| {
        error!("{e}");
        std::process::exit(1);
    });

    let report = match cli.group {
        Some(size) => report.grouped(size),
        None => report,
    };

    if cli.json {
        match serde_json::to_string_pretty(&report) {
            Ok(json) => println!("{json}"),
            Err(e) => {
                error!("Failed to serialize result: {e}");
                std::process::exit(1);
            }
        }
    } else {
        report.print();
    }
}

fn run(command: &Commands) -> Result<Report, CliError> {
    match command {
        Commands::Caesar {
            operation,
            shift,
            source,
        } => {
            let text = read_text(source)?;
            info!("Running Caesar {operation} with shift {shift}.");
            let output = match operation {
                Operation::Encrypt => caesar::encrypt(&text, *shift),
                Operation::Decrypt => caesar::decrypt(&text, *shift),
            };
            Ok(Report::new("caesar", *operation, text, output).with_shift(*shift))
        }
        Commands::Vigenere {
            operation,
            key,
            source,
        } => {
            let text = read_text(source)?;
            let key = read_key(key)?;
            info!("Running Vigenère {operation} with a {}-letter key.", key.len());
            let output = match operation {
                Operation::Encrypt => vigenere::encrypt(&text, &key)?,
                Operation::Decrypt => vigenere::decrypt(&text, &key)?,
            };
            Ok(Report::new("vigenere", *operation, text, output).with_key(key))
        }
        Commands::Playfair {
            operation,
            key,
            show_matrix,
            strip_filler: strip,
            source,
        } => {
            let text = read_text(source)?;
            let key = read_key(key)?;
            let matrix = playfair::build_matrix(&key)?;
            info!("Running Playfair {operation}.");

            let report = match operation {
                Operation::Encrypt => {
                    let prepared: String = playfair::prepare_text(&text)
                        .iter()
                        .map(Digraph::to_string)
                        .collect();
                    let output = playfair::encrypt(&text, &key)?;
                    Report::new("playfair", *operation, text, output).with_prepared(prepared)
                }
                Operation::Decrypt => {
                    let mut output = playfair::decrypt(&text, &key)?;
                    if *strip {
                        output = strip_filler(&output);
                    }
                    Report::new("playfair", *operation, text, output)
                }
            };
            let report = report.with_key(key);
            Ok(if *show_matrix {
                report.with_matrix(matrix)
            } else {
                report
            })
        }
        Commands::Matrix { key } => {
            let key = read_key(key)?;
            let matrix = playfair::build_matrix(&key)?;
            info!("Built Playfair matrix for key '{key}'.");
            Ok(Report::matrix_only(key, matrix))
        }
    }
}
