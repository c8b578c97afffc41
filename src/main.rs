//! Word Ladder Solver - CLI
//!
//! Solves word ladders against the embedded demo dictionary or a word list file.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use word_ladder::{
    commands::{SolveConfig, analyze_word, run_benchmark, sample_pairs, solve_ladder},
    core::Word,
    output::{print_analysis_result, print_benchmark_result, print_solve_result},
    wordlists::{DEMO, loader::words_from_slice},
};

#[derive(Parser)]
#[command(
    name = "word_ladder",
    about = "Shortest word ladders through a dictionary, one letter at a time",
    version,
    author
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Wordlist: 'embedded' (default, small demo list) or path to a file with one word per line
    #[arg(short = 'w', long, global = true, default_value = "embedded")]
    wordlist: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Find a shortest ladder between two words
    Solve {
        /// First word of the ladder
        start: String,

        /// Last word of the ladder
        end: String,

        /// Show index size and timing
        #[arg(short, long)]
        verbose: bool,
    },

    /// Show the neighbors of a word
    Analyze {
        /// Word to analyze
        word: String,
    },

    /// Solve random word pairs from the dictionary
    Benchmark {
        /// Number of random pairs to solve
        #[arg(short = 'n', long, default_value = "50")]
        count: usize,

        /// Seed for a reproducible sample
        #[arg(long)]
        seed: Option<u64>,
    },
}

/// Load the dictionary selected by the -w flag
fn load_wordlist(wordlist: &str) -> Result<Vec<Word>> {
    use word_ladder::wordlists::loader::load_from_file;

    match wordlist {
        "embedded" => Ok(words_from_slice(DEMO)),
        path => load_from_file(path).with_context(|| format!("failed to read wordlist {path}")),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let dictionary = load_wordlist(&cli.wordlist)?;

    match cli.command {
        Commands::Solve {
            start,
            end,
            verbose,
        } => {
            let result = solve_ladder(SolveConfig::new(start, end), &dictionary)?;
            print_solve_result(&result, verbose);
        }
        Commands::Analyze { word } => {
            let result = analyze_word(&word, &dictionary)?;
            print_analysis_result(&result);
        }
        Commands::Benchmark { count, seed } => {
            println!("Solving {count} random word pairs...");
            let pairs = sample_pairs(&dictionary, count, seed);
            let result = run_benchmark(&dictionary, &pairs);
            print_benchmark_result(&result);
        }
    }

    Ok(())
}
