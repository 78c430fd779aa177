use std::env;
use std::process::ExitCode;

use set_timestamps::{run, USAGE};

fn main() -> ExitCode {
    let args: Vec<String> = env::args().skip(1).collect();

    if args.is_empty() {
        print!("{USAGE}");
        return ExitCode::SUCCESS;
    }

    if let Err(error) = run(&args) {
        eprintln!("{error}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
