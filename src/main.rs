use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use structopt::StructOpt;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use grid_words::{EnumerationConfig, Grid, QueryRunner, Wordlist};

/// Find which query strings can be spelled by walking adjacent grid cells.
#[derive(StructOpt)]
struct Cli {
    /// Grid file, one row per line
    #[structopt(parse(from_os_str))]
    grid: PathBuf,
    /// Query file, one query per line
    #[structopt(parse(from_os_str))]
    queries: PathBuf,
    /// Longest path to walk, in cells
    #[structopt(long, env = "GRID_WORDS_MAX_PATH_LEN")]
    max_path_len: Option<usize>,
    /// Shortest path string to record, in characters
    #[structopt(long, env = "GRID_WORDS_MIN_WORD_LEN", default_value = "1")]
    min_word_len: usize,
    /// Print every grid word with this prefix instead of matching queries
    #[structopt(long)]
    prefix: Option<String>,
    /// Write every grid word to this file as JSON
    #[structopt(long, parse(from_os_str))]
    dump: Option<PathBuf>,
}

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "grid_words=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let args = Cli::from_args();

    let text = fs::read_to_string(&args.grid)
        .with_context(|| format!("reading grid {:?}", args.grid))?;
    let grid = Grid::parse(&text).with_context(|| format!("parsing grid {:?}", args.grid))?;

    let config = EnumerationConfig {
        max_path_len: args.max_path_len,
        min_word_len: args.min_word_len,
    };
    let runner = QueryRunner::new(&grid, config);

    if let Some(path) = &args.dump {
        Wordlist::save_trie_json(runner.trie(), path)
            .with_context(|| format!("writing {:?}", path))?;
    }

    if let Some(prefix) = &args.prefix {
        runner.with_prefix(prefix).iter().for_each(|word| println!("{}", word));
        return Ok(());
    }

    let queries = fs::read_to_string(&args.queries)
        .with_context(|| format!("reading queries {:?}", args.queries))?;
    let queries = queries.lines().map(str::trim).filter(|q| !q.is_empty());
    runner.matches(queries).iter().for_each(|word| println!("{}", word));
    Ok(())
}
