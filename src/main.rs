use anyhow::{Context, Result};
use clap::{ArgAction, CommandFactory, Parser};
use clap_complete::{generate, Shell};
use env_logger::{Env, TimestampPrecision};
use log::LevelFilter;
use namemut::cli::output::{self, OutputFormat};
use namemut::config::Overrides;
use namemut::{Config, Mutator};
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser, Debug)]
#[command(name = "namemut")]
#[command(version, about = "Generate username mutations from a file of names", long_about = None)]
struct Cli {
    /// Input file containing names, one person per line ("-" for stdin)
    #[arg(value_name = "FILE", required_unless_present = "completion")]
    file: Option<PathBuf>,

    /// Add versions with periods between name segments
    #[arg(short, long)]
    periods: bool,

    /// Add numeric suffixes from 1 to N
    #[arg(short, long, value_name = "N")]
    digits: Option<u32>,

    /// Add @DOMAIN to all usernames
    #[arg(short = 'a', long = "add-domain", value_name = "DOMAIN")]
    domain: Option<String>,

    /// Output format (text, json)
    #[arg(short, long)]
    format: Option<OutputFormat>,

    /// Skip lines with more than N names (0 disables the limit)
    #[arg(long, value_name = "N")]
    max_tokens: Option<usize>,

    /// Worker threads used to generate mutations
    #[arg(short, long, value_name = "N")]
    jobs: Option<usize>,

    /// Config file (default: .namemut.toml if present)
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Print a summary to stderr when done
    #[arg(long)]
    stats: bool,

    /// Disable colored output
    #[arg(long)]
    no_color: bool,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Generate shell completion script
    #[arg(long, value_name = "SHELL")]
    completion: Option<Shell>,
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        // Reader went away (e.g. piped into `head`)
        Err(e) if is_broken_pipe(&e) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    // Handle shell completion generation
    if let Some(shell) = cli.completion {
        let mut cmd = Cli::command();
        generate(shell, &mut cmd, "namemut", &mut io::stdout());
        return Ok(());
    }

    let file = cli
        .file
        .context("No input file specified. Use --help for usage information.")?;

    let config = Config::load(
        cli.config.as_deref(),
        Overrides {
            periods: cli.periods.then_some(true),
            digits: cli.digits,
            domain: cli.domain,
            max_tokens: cli.max_tokens,
            format: cli.format,
        },
    )?;

    if let Some(jobs) = cli.jobs {
        rayon::ThreadPoolBuilder::new()
            .num_threads(jobs)
            .build_global()
            .context("Failed to configure worker threads")?;
    }

    let mutator = Mutator::new(&config);
    let stdout = io::stdout();
    let mut out = BufWriter::new(stdout.lock());

    let result = mutator.run(&file, &mut out)?;

    if cli.stats {
        output::print_summary(&result, !cli.no_color);
    }

    Ok(())
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };

    let _ = env_logger::Builder::from_env(Env::default().default_filter_or(level.as_str()))
        .format_timestamp(Some(TimestampPrecision::Seconds))
        .try_init();
}

fn is_broken_pipe(err: &anyhow::Error) -> bool {
    err.chain().any(|cause| {
        cause
            .downcast_ref::<io::Error>()
            .is_some_and(|e| e.kind() == io::ErrorKind::BrokenPipe)
    })
}
