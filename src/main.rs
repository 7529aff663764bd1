mod cli;
mod logging;
mod run;

use std::process;

use clap::Parser;

use chronogen_generate::GeneratorError;

use crate::cli::Cli;

/// Exit code for user-facing configuration and format errors.
const CONFIG_ERROR_EXIT: i32 = 2;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run::run(cli) {
        eprintln!("Error: {e:#}");
        let code = match e.downcast_ref::<GeneratorError>() {
            Some(err) if err.is_config_error() => CONFIG_ERROR_EXIT,
            _ => 1,
        };
        process::exit(code);
    }
}
