use std::env;
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::exit;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use anyhow::Context;

use koine_backend::{logger, NESTLE_ROOT_XML, SWETE_VERSIFICATION_CSV, SWETE_WORDS_CSV};
use koine_backend::nestle::build_nestle;
use koine_backend::section_names::{NameLanguage, SectionNames};
use koine_backend::septuagint::{format_swete, SweteOptions, TextColumn};
use koine_backend::tabular::load_tsv;

#[derive(Parser, Debug)]
#[command(author, version, about = "Plain text dumps of the Swete Septuagint and the Nestle 1904 Greek New Testament", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Directory for log files.
    /// If not provided, the KOINE_DIR environment variable or the user data directory is used.
    #[arg(long, global = true, value_name = "DIRECTORY_PATH", env = "KOINE_DIR")]
    koine_dir: Option<PathBuf>,

    /// Log level: silent, error, warn, info or debug.
    /// Overrides the LOG_LEVEL environment variable.
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,

    /// Don't write log.txt in the koine directory.
    #[arg(long, global = true, default_value_t = false)]
    no_log_file: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Septuagint text from the tab-delimited versification and word tables
    Swete {
        /// Versification table: start word index and verse reference per row
        #[arg(long, value_name = "FILE_PATH", default_value = SWETE_VERSIFICATION_CSV)]
        versification: PathBuf,

        /// Word table: one word per row, in reading order
        #[arg(long, value_name = "FILE_PATH", default_value = SWETE_WORDS_CSV)]
        words: PathBuf,

        /// The first row of the word table is a header row
        #[arg(long, default_value_t = false)]
        words_headers: bool,

        /// Column of the word table with the word text: an index,
        /// or a header name when --words-headers is given
        #[arg(long, value_name = "INDEX_OR_NAME", default_value_t = TextColumn::Index(1))]
        text_column: TextColumn,

        /// Language of the book names in the banners: english, greek or transliterated
        #[arg(long, value_name = "LANGUAGE", default_value_t = NameLanguage::English)]
        names: NameLanguage,

        /// JSON file replacing the built-in book names,
        /// e.g. {"Gen": ["Genesis", "Γένεσις", "Genesis"]}
        #[arg(long, value_name = "FILE_PATH")]
        section_names: Option<PathBuf>,

        /// Write the text to this file instead of stdout
        #[arg(long, short, value_name = "FILE_PATH")]
        output: Option<PathBuf>,
    },

    /// New Testament text from the XML edition
    Nestle {
        /// Root document including the book files
        #[arg(long, value_name = "FILE_PATH", default_value = NESTLE_ROOT_XML)]
        root: PathBuf,

        /// Write the text to this file instead of stdout
        #[arg(long, short, value_name = "FILE_PATH")]
        output: Option<PathBuf>,
    },
}

/// Stdout, or a file when a path is given. Called once with the complete text.
fn write_output(text: &str, output: Option<&Path>) -> anyhow::Result<()> {
    match output {
        Some(path) => {
            fs::write(path, text)
                .with_context(|| format!("Failed to write {:?}", path))?;
            logger::info(&format!("Wrote {} bytes to {:?}", text.len(), path));
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(text.as_bytes())?;
            stdout.flush()?;
        }
    }
    Ok(())
}

fn swete(
    versification_path: &Path,
    words_path: &Path,
    words_headers: bool,
    options: SweteOptions,
    section_names: Option<&Path>,
    output: Option<&Path>,
) -> Result<(), String> {
    let names = match section_names {
        Some(path) => SectionNames::from_json_file(path).map_err(|e| format!("{:#}", e))?,
        None => SectionNames::swete(),
    };
    if names.is_empty() {
        logger::warn("No section names, banners show the book abbreviations");
    } else {
        logger::debug(&format!("{} section names", names.len()));
    }

    let versification = load_tsv(versification_path, false);
    let words = load_tsv(words_path, words_headers);

    let text = format_swete(&versification, &words, &names, &options)
        .map_err(|e| e.to_string())?;

    write_output(&text, output).map_err(|e| format!("{:#}", e))
}

fn nestle(root: &Path, output: Option<&Path>) -> Result<(), String> {
    let mut text = build_nestle(root).map_err(|e| format!("{:#}", e))?;
    text.push('\n');

    write_output(&text, output).map_err(|e| format!("{:#}", e))
}

fn main() {
    if dotenv().is_err() {
        eprintln!("Info: No .env file found or failed to load.");
    }

    let cli = Cli::parse();

    // The logger reads KOINE_DIR when first used, set it before any logging.
    if let Some(dir) = &cli.koine_dir {
        unsafe { env::set_var("KOINE_DIR", dir); }
    }

    if cli.no_log_file {
        logger::disable_file_log();
    }

    if let Some(level) = &cli.log_level
        && !logger::set_log_level_str(level) {
        eprintln!("Warning: Unknown log level: {}", level);
    }

    let command_result = match cli.command {
        Commands::Swete { versification, words, words_headers, text_column, names, section_names, output } => {
            logger::info(&format!("Swete text from {:?} and {:?}", versification, words));
            let options = SweteOptions {
                language: names,
                text_column,
            };
            swete(&versification, &words, words_headers, options, section_names.as_deref(), output.as_deref())
        }

        Commands::Nestle { root, output } => {
            logger::info(&format!("Nestle 1904 text from {:?}", root));
            nestle(&root, output.as_deref())
        }
    };

    if let Err(e) = command_result {
        logger::error(&e);
        eprintln!("Error executing command: {}", e);
        exit(1);
    }
}
