//! tfidx — build a TF-IDF word index over a document collection and query it.

use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{ArgAction, Parser, Subcommand};

use tfidf_index::config::{DEFAULT_COLLECTION_FILE, DEFAULT_DUMP_FILE};
use tfidf_index::{IndexConfig, IndexResult, InvertedIndex, RankedList};

#[derive(Parser)]
#[command(name = "tfidx", version, about = "Build and query a TF-IDF word index")]
struct Cli {
    /// File listing the document paths to index
    #[arg(
        short,
        long,
        global = true,
        env = "TFIDX_COLLECTION",
        default_value = DEFAULT_COLLECTION_FILE
    )]
    collection: PathBuf,

    /// Directory relative document paths are resolved against
    #[arg(long, global = true, env = "TFIDX_BASE_DIR")]
    base_dir: Option<PathBuf>,

    /// Skip unreadable documents instead of failing
    #[arg(long, global = true)]
    skip_unreadable: bool,

    /// More logging (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Build the index and write the word dump
    Build {
        /// Dump destination, "-" for stdout
        #[arg(short, long, env = "TFIDX_DUMP", default_value = DEFAULT_DUMP_FILE)]
        output: PathBuf,
    },

    /// Rank documents for the given query words
    Search {
        /// Query words; normalized like document words
        #[arg(required = true)]
        words: Vec<String>,

        /// Show at most this many documents
        #[arg(short = 'n', long)]
        limit: Option<usize>,

        /// Hide documents scoring below this
        #[arg(long)]
        min_score: Option<f64>,

        /// Print results as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print index statistics
    Stats {
        /// Print statistics as JSON
        #[arg(long)]
        json: bool,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            log::error!("{err}");
            eprintln!("error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();
}

fn run(cli: Cli) -> IndexResult<()> {
    let mut config = IndexConfig {
        collection_file: cli.collection,
        base_dir: cli.base_dir,
        skip_unreadable: cli.skip_unreadable,
        ..IndexConfig::default()
    };
    if let Command::Build { output } = &cli.command {
        config.dump_file = output.clone();
    }

    let index = InvertedIndex::from_config(&config)?;

    match cli.command {
        Command::Build { .. } => write_dump(&index, &config.dump_file),
        Command::Search {
            words,
            limit,
            min_score,
            json,
        } => {
            let mut ranked = index.search(&words.join(" "));
            if let Some(min_score) = min_score {
                ranked.retain_min_score(min_score);
            }
            if let Some(limit) = limit {
                ranked.truncate(limit);
            }
            print_ranked(&ranked, json)
        }
        Command::Stats { json } => {
            let stats = index.stats();
            let mut out = io::stdout().lock();
            if json {
                serde_json::to_writer_pretty(&mut out, &stats)?;
                writeln!(out)?;
            } else {
                writeln!(out, "documents:   {}", stats.documents)?;
                writeln!(out, "words:       {}", stats.words)?;
                writeln!(out, "postings:    {}", stats.postings)?;
                writeln!(out, "tree height: {}", stats.tree_height)?;
            }
            Ok(())
        }
    }
}

fn write_dump(index: &InvertedIndex, output: &Path) -> IndexResult<()> {
    if output == Path::new("-") {
        let mut out = io::stdout().lock();
        index.write_dump(&mut out)?;
        out.flush()?;
        Ok(())
    } else {
        index.dump_to_file(output)
    }
}

fn print_ranked(ranked: &RankedList, json: bool) -> IndexResult<()> {
    let mut out = io::stdout().lock();
    if json {
        serde_json::to_writer_pretty(&mut out, ranked)?;
        writeln!(out)?;
    } else if ranked.is_empty() {
        writeln!(out, "no matching documents")?;
    } else {
        for hit in ranked {
            writeln!(out, "{:.6}  {}", hit.score, hit.document)?;
        }
    }
    Ok(())
}
