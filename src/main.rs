use anyhow::Result;
use clap::Parser;
use dirdiff::areas::session::Session;
use dirdiff::commands::compare::DisplayOptions;
use dirdiff::{ColorMode, CompareOptions, OutputFormat, ReportFilter};
use is_terminal::IsTerminal;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

const LOG_ENV: &str = "DIRDIFF_LOG";

#[derive(Parser)]
#[command(
    name = "dirdiff",
    version = "0.1.0",
    author = "Sami Barbut-Dica",
    about = "Compare two directory trees",
    long_about = "Walks two directory trees side by side and reports files found only \
    in the first, only in the second, files that differ and files that are identical. \
    By default files are compared by size and modification time; use --content for \
    a byte-by-byte comparison.",
    help_template = r"
{name} {version} - {about}

USAGE:
    {usage}

OPTIONS:
    {all-args}
"
)]
struct Cli {
    #[arg(index = 1, help = "The first directory")]
    first: PathBuf,
    #[arg(index = 2, help = "The second directory")]
    second: PathBuf,
    #[arg(
        short,
        long,
        help = "Compare file contents byte by byte instead of size and modification time"
    )]
    content: bool,
    #[arg(
        short,
        long,
        value_name = "N",
        help = "Compare sibling subdirectories on N worker threads"
    )]
    jobs: Option<usize>,
    #[arg(
        long,
        help = "Print one '<status> <path>' line per entry (statuses: < > M =)"
    )]
    porcelain: bool,
    #[arg(
        long,
        value_name = "BUCKETS",
        value_parser = parse_filter,
        help = "Only show the given buckets: 1 (only in first), 2 (only in second), D (different), I (identical)"
    )]
    filter: Option<ReportFilter>,
    #[arg(long, value_enum, default_value_t = ColorMode::Auto, help = "When to use colors")]
    color: ColorMode,
    #[arg(short, long, help = "Enable debug logging")]
    verbose: bool,
    #[arg(short, long, conflicts_with = "verbose", help = "Only log errors")]
    quiet: bool,
}

fn parse_filter(s: &str) -> Result<ReportFilter, String> {
    ReportFilter::try_parse(s)
        .ok_or_else(|| format!("'{}' is not a valid filter, expected letters from 1, 2, D, I", s))
}

fn setup_logging(verbose: bool, quiet: bool) {
    let filter = if quiet {
        "error"
    } else if verbose {
        "debug"
    } else {
        "warn"
    };

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new(filter)))
        .init();
}

fn setup_colors(mode: ColorMode, porcelain: bool) {
    match mode {
        _ if porcelain => colored::control::set_override(false),
        ColorMode::Always => colored::control::set_override(true),
        ColorMode::Never => colored::control::set_override(false),
        // colored reads NO_COLOR, CLICOLOR and CLICOLOR_FORCE on its own
        ColorMode::Auto
            if std::io::stdout().is_terminal() || std::env::var_os("CLICOLOR_FORCE").is_some() =>
        {
            colored::control::unset_override()
        }
        ColorMode::Auto => colored::control::set_override(false),
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    setup_logging(cli.verbose, cli.quiet);
    setup_colors(cli.color, cli.porcelain);

    let options = CompareOptions::new(cli.content, cli.jobs);
    let session = Session::new(
        &cli.first,
        &cli.second,
        options,
        Box::new(std::io::stdout()),
    )
    .map_err(|e| {
        if e.is_validation() {
            anyhow::Error::new(e).context("Invalid input, nothing was compared")
        } else {
            e.into()
        }
    })?;

    let format = if cli.porcelain {
        OutputFormat::Porcelain
    } else {
        OutputFormat::Human
    };

    session.compare(&DisplayOptions {
        format,
        filter: cli.filter.unwrap_or_default(),
    })?;

    Ok(())
}
