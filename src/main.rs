use std::path::PathBuf;
use std::process;

use clap::error::ErrorKind;
use clap::Parser;
use ztrip::{check_file, report_failure, FailureAction};

/// Round-trip a file through zstd and fail on any corruption.
#[derive(Parser)]
struct Args {
    /// Input file to check
    input: PathBuf,
}

const MISSING_ARGUMENT: i32 = 9;

fn main() {
    let action = FailureAction::from_build();
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(err) if err.kind() == ErrorKind::MissingRequiredArgument => {
            eprintln!("Error: no argument: need input file");
            process::exit(MISSING_ARGUMENT);
        }
        Err(err) => err.exit(),
    };

    match check_file(&args.input) {
        Ok(()) => eprintln!("no pb detected"),
        Err(err) => report_failure(action, &err),
    }
}
