//! regex-eval command line entry point.

use std::env;
use std::io::{self, BufWriter};
use std::path::PathBuf;
use std::process::exit;

use regex_eval::{EvalConfig, EvalError, Flags, evaluate_path, logging, write_records};

const USAGE: &str = "\
usage:
  regex-eval <file> [flags]     Evaluate the regex test file

  regex-eval -h | --help        Print this help message
  regex-eval -V | --version     Print version information

The first line of <file> is the pattern, the rest is the text to search.
flags: m (multiline), i (case-insensitive), d (dot matches newline)
";

struct Args {
    file: PathBuf,
    flags: Flags,
}

fn main() {
    let args = match parse_args(env::args().skip(1)) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("regex-eval: {e}\n\n{USAGE}");
            exit(e.exit_code());
        }
    };

    if let Err(e) = run(&args) {
        eprintln!("regex-eval: {e}");
        exit(e.exit_code());
    }
}

fn run(args: &Args) -> Result<(), EvalError> {
    let config = EvalConfig::load()?;
    logging::init(&config)?;

    let records = evaluate_path(&args.file, args.flags, config)?;

    let mut out = BufWriter::new(io::stdout().lock());
    write_records(&mut out, &records).map_err(EvalError::Output)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Args, EvalError> {
    let file = match args.next().as_deref() {
        None => return Err(EvalError::usage("no test file provided")),
        Some("-h" | "--help") => show_help(),
        Some("-V" | "--version") => show_version_info(),
        Some(file) => PathBuf::from(file),
    };
    let flags = args.next().map(|f| Flags::parse(&f)).unwrap_or_default();

    if let Some(extra) = args.next() {
        return Err(EvalError::usage(format!("unexpected argument '{extra}'")));
    }

    Ok(Args { file, flags })
}

fn show_help() -> ! {
    println!("regex-eval v{}", env!("CARGO_PKG_VERSION"));
    println!("\nEvaluate a regex test file and print match offsets\n");
    println!("{USAGE}");
    exit(0);
}

fn show_version_info() -> ! {
    println!("regex-eval v{}", env!("CARGO_PKG_VERSION"));
    exit(0);
}
