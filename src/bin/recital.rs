//! Command-line front end: load or generate a recital, enumerate its
//! programs, and print them.

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing_subscriber::EnvFilter;
use u_recital::report::{report, ResultSet};
use u_recital::sample::{generate, SampleConfig};
use u_recital::search::{SearchConfig, Searcher};
use u_recital::text::{load_file, render_programs, render_sequences, render_summary};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "Lists every recital program that gives dancers enough rest.",
    long_about = None
)]
struct Cli {
    /// Recital description file. A random recital is generated when omitted.
    file: Option<PathBuf>,

    /// Maximum total number of dancers shared between back-to-back sequences.
    #[arg(short = 'm', long, default_value_t = 0)]
    max_overlap: usize,

    /// Show only programs that would be valid if exact orders were ignored.
    #[arg(short, long)]
    almost: bool,

    /// Stop after visiting this many search nodes.
    #[arg(long)]
    node_limit: Option<u64>,

    /// Stop after this many milliseconds.
    #[arg(long)]
    time_limit_ms: Option<u64>,

    /// Explore first-level branches on all cores.
    #[arg(short, long)]
    parallel: bool,

    /// Seed for the generated recital.
    #[arg(long)]
    seed: Option<u64>,

    /// Print one line per program instead of full listings.
    #[arg(short, long)]
    summary: bool,

    /// Do not echo the input sequences.
    #[arg(short, long)]
    quiet: bool,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let sequences = match &cli.file {
        Some(path) => match load_file(path) {
            Ok(sequences) => sequences,
            Err(e) => {
                eprintln!("{}: {e}", path.display());
                return ExitCode::from(2);
            }
        },
        None => {
            let mut config = SampleConfig::default();
            if let Some(seed) = cli.seed {
                config = config.with_seed(seed);
            }
            match generate(&config) {
                Ok(sequences) => sequences,
                Err(e) => {
                    eprintln!("could not generate a recital: {e}");
                    return ExitCode::from(2);
                }
            }
        }
    };

    let mut config = SearchConfig::default()
        .with_max_overlap(cli.max_overlap)
        .with_exact_order(!cli.almost)
        .with_parallel(cli.parallel);
    if let Some(nodes) = cli.node_limit {
        config = config.with_node_limit(nodes);
    }
    if let Some(ms) = cli.time_limit_ms {
        config = config.with_time_limit_ms(ms);
    }
    if !cli.quiet {
        match render_sequences(&sequences) {
            Ok(text) => println!("{text}"),
            Err(e) => tracing::warn!(error = %e, "input echo skipped"),
        }
    }

    let result = match Searcher::run(&sequences, &config) {
        Ok(result) => result,
        Err(e) => {
            eprintln!("invalid options: {e}");
            return ExitCode::from(2);
        }
    };
    let mut programs: ResultSet = result.programs;
    if cli.almost {
        programs.retain(|p| !p.respects_ordering());
    }
    let programs = programs.indexed();

    if cli.summary {
        print!("{}", render_summary(&report(programs.as_slice())));
    } else {
        print!("{}", render_programs(programs.as_slice()));
    }

    if let Some(cutoff) = result.cutoff {
        eprintln!(
            "search stopped early ({cutoff:?}) after {} nodes; the list above is incomplete",
            result.nodes
        );
        return ExitCode::from(3);
    }
    ExitCode::SUCCESS
}
