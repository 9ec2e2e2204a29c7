use std::io::{self, IsTerminal, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::builder::BoolishValueParser;
use clap::Parser;

use imgsniff::batch::sniff_paths;
use imgsniff::io::DEFAULT_PREFIX_LEN;
use imgsniff::logging::{init_logging, LogConfig};
use imgsniff::report::SniffSummary;
use imgsniff::{OutputFormat, SniffConfig};

#[derive(Parser, Debug)]
#[command(name = "imgsniff")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Identify image files by their magic numbers, ignoring extensions")]
struct Cli {
    /// Files to classify
    #[arg(required = true)]
    paths: Vec<PathBuf>,

    /// Bytes read from the start of each file
    #[arg(long, env = "IMGSNIFF_PREFIX_LEN", default_value_t = DEFAULT_PREFIX_LEN)]
    prefix_len: usize,

    /// Print one JSON object per file
    #[arg(long)]
    json: bool,

    /// Classify files one at a time
    #[arg(long)]
    sequential: bool,

    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Emit logs as JSON on stderr
    #[arg(long, env = "IMGSNIFF_LOG_JSON", value_parser = BoolishValueParser::new())]
    log_json: bool,
}

impl Cli {
    fn sniff_config(&self) -> SniffConfig {
        let output = if self.json {
            OutputFormat::Json
        } else {
            OutputFormat::Text
        };
        let config = SniffConfig::new()
            .with_prefix_len(self.prefix_len)
            .with_output(output);
        if self.sequential {
            config.sequential()
        } else {
            config
        }
    }
}

/// Sniffs every path, writes the reports to `out` and returns the exit status:
/// 0 when every file was recognised, 1 otherwise.
fn run(cli: &Cli, out: &mut impl Write) -> Result<u8> {
    let config = cli.sniff_config();
    config.validate()?;

    let reports = sniff_paths(&cli.paths, &config);
    let summary = SniffSummary::from_reports(&reports);

    for report in &reports {
        match config.output {
            OutputFormat::Json => writeln!(out, "{}", report.to_json_line()?)?,
            OutputFormat::Text => writeln!(out, "{report}")?,
        }
    }
    if config.output == OutputFormat::Text && reports.len() > 1 {
        writeln!(out, "\n{summary}")?;
    }
    out.flush().context("Failed to flush output")?;

    Ok(if summary.all_recognized() { 0 } else { 1 })
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();

    let log_config = LogConfig::from_verbosity(cli.verbose)
        .with_json(cli.log_json)
        .with_ansi(io::stderr().is_terminal());
    init_logging(&log_config).context("Failed to initialise logging")?;

    let stdout = io::stdout();
    let status = run(&cli, &mut stdout.lock())?;
    Ok(ExitCode::from(status))
}
