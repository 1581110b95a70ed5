use bcalc::{evaluate, GeneralFloat};
use clap::error::ErrorKind;
use clap::{ArgAction, CommandFactory, Parser, ValueEnum};
use reader::{Fragments, MAX_LINE_LEN};
use std::io::{self, BufRead, Write};
use std::process::ExitCode;

mod reader;

/// What to do after a line fails to evaluate.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum OnError {
    /// Report the error and exit with status 1
    Halt,
    /// Report the error and keep reading
    Continue,
}

/// A basic calculator. Reads one expression per line from standard input
/// and prints its value.
#[derive(Parser, Debug)]
#[command(
    name = "bcalc",
    version,
    disable_help_flag = true,
    disable_version_flag = true
)]
struct Args {
    /// Print this usage and exit
    #[arg(short, long, action = ArgAction::Help)]
    help: Option<bool>,

    /// Use the predefined math routines
    #[arg(short = 'l', long)]
    mathlib: bool,

    /// Don't print the initial banner
    #[arg(short, long)]
    quiet: bool,

    /// Print version information and exit
    #[arg(short = 'v', long, action = ArgAction::Version)]
    version: Option<bool>,

    /// What to do when a line fails to evaluate
    #[arg(long, env = "BCALC_ON_ERROR", value_enum, default_value_t = OnError::Halt)]
    on_error: OnError,
}

#[derive(Debug)]
enum Outcome {
    /// Input ran out.
    Finished,
    /// Stopped at the first bad line.
    Halted,
}

#[mutants::skip] // Process glue; the read loop is tested through `evaluate_lines`.
fn main() -> ExitCode {
    match run() {
        Ok(code) => code,
        Err(err) => {
            eprintln!("bcalc: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> anyhow::Result<ExitCode> {
    // Only the first argument is inspected; the rest are ignored.
    let argv: Vec<String> = std::env::args().take(2).collect();
    let args = match Args::try_parse_from(&argv) {
        Ok(args) => args,
        Err(e) => {
            let arg = argv.get(1).map(String::as_str);
            return Ok(usage_error(e, arg, &mut io::stdout(), &mut io::stderr())?);
        }
    };

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_banner(&mut out, &args)?;

    let stdin = io::stdin();
    let outcome = evaluate_lines(stdin.lock(), &mut out, &mut io::stderr(), args.on_error)?;
    Ok(match outcome {
        Outcome::Finished => ExitCode::SUCCESS,
        Outcome::Halted => ExitCode::FAILURE,
    })
}

fn print_banner(out: &mut impl Write, args: &Args) -> io::Result<()> {
    if !args.quiet {
        writeln!(out, "bcalc {}", env!("CARGO_PKG_VERSION"))?;
        writeln!(out, "Press Ctrl+C to quit...")?;
    }
    if args.mathlib {
        // No routines are registered yet.
        writeln!(out, "Mathlib Initialized...")?;
    }
    Ok(())
}

/// Report a rejected command line. Help and version requests succeed; an
/// unknown option gets the full usage text.
fn usage_error(
    e: clap::Error,
    arg: Option<&str>,
    out: &mut impl Write,
    err: &mut impl Write,
) -> io::Result<ExitCode> {
    match e.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => {
            write!(out, "{}", e.render())?;
            Ok(ExitCode::SUCCESS)
        }
        ErrorKind::UnknownArgument => {
            writeln!(out, "Invalid option: {}", arg.unwrap_or(""))?;
            write!(out, "{}", Args::command().render_help())?;
            Ok(ExitCode::FAILURE)
        }
        _ => {
            write!(err, "{}", e.render())?;
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Evaluate every line (or line fragment) of `input`, printing values to
/// `out` and diagnostics to `err`.
fn evaluate_lines(
    input: impl BufRead,
    out: &mut impl Write,
    err: &mut impl Write,
    on_error: OnError,
) -> io::Result<Outcome> {
    for line in Fragments::new(input, MAX_LINE_LEN) {
        match evaluate(&line?) {
            Ok(value) => writeln!(out, "{}", GeneralFloat(value))?,
            Err(diag) => {
                out.flush()?;
                writeln!(err, "Error: {diag}")?;
                if on_error == OnError::Halt {
                    return Ok(Outcome::Halted);
                }
            }
        }
    }
    Ok(Outcome::Finished)
}
