// ============================================================================
// Command Line Shell
// Argument parsing, interactive prompts and result rendering
// ============================================================================

use crate::domain::{
    CalculationReport, CalculatorConfig, CalculatorError, ReferenceComparison,
    DEFAULT_MARGIN_DIGITS, KNOWN_PI,
};
use crate::engine::{ConvergencePoint, PiSeriesCalculator};
use crate::interfaces::LoggingEventHandler;
use crate::numeric::RoundingMode;
use clap::{Parser, ValueEnum};
use serde::Serialize;
use std::fmt;
use std::io::{self, BufRead, Write};
use std::sync::Arc;

/// Rounding mode names accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum RoundingArg {
    HalfEven,
    HalfUp,
    Down,
}

impl From<RoundingArg> for RoundingMode {
    fn from(arg: RoundingArg) -> Self {
        match arg {
            RoundingArg::HalfEven => RoundingMode::HalfEven,
            RoundingArg::HalfUp => RoundingMode::HalfUp,
            RoundingArg::Down => RoundingMode::Down,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "ramanujan-pi")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Compute pi with Ramanujan's series", long_about = None)]
pub struct Args {
    /// Number of series terms (prompted for when omitted)
    #[arg(short, long, allow_hyphen_values = true)]
    pub iterations: Option<String>,

    /// Digits after the decimal point (prompted for when omitted)
    #[arg(short, long, allow_hyphen_values = true)]
    pub precision: Option<String>,

    /// Guard digits carried beyond the requested precision
    #[arg(long, default_value_t = DEFAULT_MARGIN_DIGITS)]
    pub margin: u32,

    /// Rounding applied to intermediate and final results
    #[arg(long, value_enum, default_value_t = RoundingArg::HalfEven)]
    pub rounding: RoundingArg,

    /// Print accuracy for every term count from 1 to --iterations
    #[arg(long)]
    pub table: bool,

    /// Worker threads used by --table
    #[arg(long, default_value_t = 1)]
    pub workers: usize,

    /// Emit JSON instead of text
    #[arg(long)]
    pub json: bool,
}

// ============================================================================
// Errors
// ============================================================================

/// Errors reported to the user by the shell
#[derive(Debug)]
pub enum CliError {
    /// Input is not a base-10 integer
    Parse { field: &'static str, input: String },
    /// Integer below 1
    OutOfRange { field: &'static str, value: i64 },
    /// Stdin closed before a value was entered
    InputClosed(&'static str),
    Calculator(CalculatorError),
    Io(io::Error),
    Json(serde_json::Error),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Parse { field, input } => write!(
                f,
                "Invalid input for {}: {:?}. Please enter an integer number.",
                field,
                input.trim()
            ),
            CliError::OutOfRange { field, value } => {
                write!(f, "The {} must be at least 1 (got {}).", field, value)
            },
            CliError::InputClosed(field) => write!(f, "No value entered for {}.", field),
            CliError::Calculator(err) => write!(f, "Calculation failed: {}", err),
            CliError::Io(err) => write!(f, "I/O error: {}", err),
            CliError::Json(err) => write!(f, "Could not encode JSON: {}", err),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Calculator(err) => Some(err),
            CliError::Io(err) => Some(err),
            CliError::Json(err) => Some(err),
            _ => None,
        }
    }
}

impl From<CalculatorError> for CliError {
    fn from(err: CalculatorError) -> Self {
        CliError::Calculator(err)
    }
}

impl From<io::Error> for CliError {
    fn from(err: io::Error) -> Self {
        CliError::Io(err)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(err: serde_json::Error) -> Self {
        CliError::Json(err)
    }
}

// ============================================================================
// Input
// ============================================================================

/// Parse a strictly positive integer.
///
/// Surrounding whitespace is ignored; decimals, exponents and words are
/// rejected rather than truncated.
pub fn parse_count(field: &'static str, input: &str) -> Result<i64, CliError> {
    let value: i64 = input.trim().parse().map_err(|_| CliError::Parse {
        field,
        input: input.to_string(),
    })?;

    if value < 1 {
        return Err(CliError::OutOfRange { field, value });
    }
    Ok(value)
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    message: &str,
    field: &'static str,
) -> Result<String, CliError> {
    write!(output, "{}", message)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Err(CliError::InputClosed(field));
    }
    Ok(line)
}

fn read_count<R: BufRead, W: Write>(
    given: Option<&str>,
    input: &mut R,
    output: &mut W,
    message: &str,
    field: &'static str,
) -> Result<i64, CliError> {
    match given {
        Some(text) => parse_count(field, text),
        None => parse_count(field, &prompt(input, output, message, field)?),
    }
}

// ============================================================================
// Entry Point
// ============================================================================

/// Run the shell against arbitrary input/output streams.
pub fn run<R: BufRead, W: Write>(args: &Args, input: &mut R, output: &mut W) -> Result<(), CliError> {
    let config = CalculatorConfig::default()
        .with_margin_digits(args.margin)
        .with_rounding(args.rounding.into());
    let calculator =
        PiSeriesCalculator::new(config)?.with_event_handler(Arc::new(LoggingEventHandler));

    let interactive = args.iterations.is_none() || args.precision.is_none();
    if interactive && !args.json {
        writeln!(output, "--- Pi Calculator using Ramanujan's Formula ---")?;
        writeln!(output, "Each series term adds roughly eight correct digits.")?;
    }

    // Iterations are validated before precision is requested.
    let iterations = read_count(
        args.iterations.as_deref(),
        input,
        output,
        "\nEnter the number of iterations (e.g., 1, 2, 5): ",
        "iterations",
    )?;
    let precision = read_count(
        args.precision.as_deref(),
        input,
        output,
        "Enter the desired precision (number of decimal places, e.g., 50, 100, 200): ",
        "precision",
    )?;

    if args.table {
        let points = if args.workers > 1 {
            calculator.convergence_parallel(iterations, precision, args.workers)?
        } else {
            calculator.convergence(iterations, precision)?
        };
        return if args.json {
            write_json(output, &points)
        } else {
            render_table(output, &points)
        };
    }

    let request = calculator.validate(iterations, precision)?;
    let report = calculator.evaluate(&request)?;
    let comparison = report.compare_with_reference();

    if args.json {
        write_json(
            output,
            &JsonReport {
                report: &report,
                comparison: &comparison,
            },
        )
    } else {
        render_report(output, &report, &comparison)
    }
}

/// Install the tracing subscriber; `RUST_LOG` overrides the default `warn` level.
pub fn init_logging() {
    use tracing_subscriber::EnvFilter;

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

// ============================================================================
// Output
// ============================================================================

#[derive(Serialize)]
struct JsonReport<'a> {
    report: &'a CalculationReport,
    comparison: &'a ReferenceComparison,
}

fn write_json<W: Write, T: Serialize>(output: &mut W, value: &T) -> Result<(), CliError> {
    serde_json::to_writer_pretty(&mut *output, value)?;
    writeln!(output)?;
    Ok(())
}

fn render_report<W: Write>(
    output: &mut W,
    report: &CalculationReport,
    comparison: &ReferenceComparison,
) -> Result<(), CliError> {
    writeln!(output, "\n--- Results ---")?;
    writeln!(
        output,
        "Pi approximated with {} iterations and {} digits of precision:",
        report.request.iterations, report.request.precision
    )?;
    writeln!(output, "Calculated Pi  : {}", report.value)?;
    writeln!(output, "Known Pi       : {}", comparison.reference)?;
    writeln!(output, "Absolute Error : {}", comparison.absolute_error)?;
    writeln!(output, "Matching digits: {}", comparison.matching_digits)?;
    if comparison.reference_exhausted {
        writeln!(
            output,
            "(reference holds {} digits; comparison covers those only)",
            KNOWN_PI.len() - 2
        )?;
    }
    Ok(())
}

fn render_table<W: Write>(output: &mut W, points: &[ConvergencePoint]) -> Result<(), CliError> {
    writeln!(output, "{:>6}  {:>8}  {:>10}", "terms", "matching", "error")?;
    for point in points {
        let error = if point.absolute_error.is_zero() {
            "0".to_string()
        } else {
            format!("~1e{}", point.absolute_error.adjusted_exponent())
        };
        writeln!(
            output,
            "{:>6}  {:>8}  {:>10}",
            point.iterations, point.matching_digits, error
        )?;
    }
    Ok(())
}
