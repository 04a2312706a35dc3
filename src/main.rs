//! Pocketcalc CLI: drive the calculator from the terminal
//!
//! ## Usage
//!
//! ```bash
//! pocketcalc 7 + 3 =              # press keys, print each screen
//! pocketcalc --json 6 / 2 =       # one JSON frame per screen
//! pocketcalc                      # read keys from stdin, `q` quits
//! ```

use clap::Parser;
use pocketcalc::core::{ExpressionPolicy, PhaseTrace, DEFAULT_PRECISION};
use pocketcalc::dispatch::{Dispatch, Frame, InputDispatcher, RenderSink};
use pocketcalc::{logging, BuildError, CalculatorBuilder, DispatchError};
use std::io::{self, BufRead};
use std::process::ExitCode;
use thiserror::Error;

#[derive(Debug, Parser)]
#[command(name = "pocketcalc", version, about = "Four-function keypad calculator")]
struct Cli {
    /// Keys to press in order, e.g. `7 + 3 =`. Reads stdin when omitted.
    keys: Vec<String>,

    /// Fractional digits kept when a result is displayed
    #[arg(long, default_value_t = DEFAULT_PRECISION)]
    precision: u32,

    /// Keep the expression log free of rejected decimal points
    #[arg(long)]
    strict_expression: bool,

    /// Print screens as JSON lines
    #[arg(long)]
    json: bool,

    /// Print the phase trace after the last key
    #[arg(long)]
    trace: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, env = "POCKETCALC_LOG", default_value = "warn")]
    log_level: String,
}

#[derive(Debug, Error)]
enum CliError {
    #[error(transparent)]
    Build(#[from] BuildError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error("Failed to read input: {0}")]
    Io(#[from] io::Error),

    #[error("Failed to encode JSON: {0}")]
    Json(#[from] serde_json::Error),
}

type CliResult<T> = Result<T, CliError>;

/// Writes every screen to stdout.
struct StdoutSink {
    json: bool,
}

impl RenderSink for StdoutSink {
    fn render(&mut self, display: &str, expression: &str) {
        let frame = Frame::new(display, expression);
        if !self.json {
            println!("{frame}");
            return;
        }
        match serde_json::to_string(&frame) {
            Ok(line) => println!("{line}"),
            Err(err) => tracing::error!(error = %err, "failed to encode frame"),
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Err(err) = logging::init(&cli.log_level) {
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> CliResult<()> {
    let policy = if cli.strict_expression {
        ExpressionPolicy::Strict
    } else {
        ExpressionPolicy::Faithful
    };

    let mut dispatcher = CalculatorBuilder::new()
        .precision(cli.precision)
        .expression_policy(policy)
        .build(StdoutSink { json: cli.json })?;
    dispatcher.render_now();

    if cli.keys.is_empty() {
        run_interactive(&mut dispatcher, io::stdin().lock())?;
    } else {
        for key in &cli.keys {
            press(&mut dispatcher, key)?;
        }
    }

    if cli.trace {
        print_trace(dispatcher.trace(), cli.json)?;
    }
    Ok(())
}

fn press<R: RenderSink>(dispatcher: &mut InputDispatcher<R>, key: &str) -> CliResult<()> {
    if dispatcher.dispatch_label(key)? == Dispatch::Ignored {
        tracing::warn!(key, "not a calculator key, skipped");
    }
    Ok(())
}

/// Press whitespace-separated keys line by line until EOF or `q`.
/// A bad key is reported and the session continues.
fn run_interactive<R: RenderSink>(
    dispatcher: &mut InputDispatcher<R>,
    input: impl BufRead,
) -> CliResult<()> {
    for line in input.lines() {
        let line = line?;
        for key in line.split_whitespace() {
            if matches!(key, "q" | "quit") {
                return Ok(());
            }
            if let Err(err) = press(dispatcher, key) {
                eprintln!("Error: {err}");
            }
        }
    }
    Ok(())
}

fn print_trace(trace: &PhaseTrace, json: bool) -> CliResult<()> {
    if json {
        println!("{}", serde_json::to_string(trace)?);
        return Ok(());
    }

    for change in trace.changes() {
        println!(
            "{} {:<8} {} -> {}",
            change.at.format("%H:%M:%S%.3f"),
            change.trigger,
            change.from,
            change.to
        );
    }
    Ok(())
}
