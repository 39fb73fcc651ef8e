// rlox: Lox expression front end (scan, parse, print)

use std::io::{self, IsTerminal};

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use lox_syntax::config::{directive_for_verbosity, Cli};
use lox_syntax::diagnostics::constants::{EX_DATAERR, EX_IOERR, EX_OK, EX_USAGE};
use lox_syntax::driver::Session;

fn main() {
    std::process::exit(run());
}

fn run() -> i32 {
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            // --help and --version are not usage errors
            let code = if err.use_stderr() { EX_USAGE } else { EX_OK };
            let _ = err.print();
            return code;
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(directive_for_verbosity(cli.verbose))),
        )
        .with_writer(io::stderr)
        .init();

    let color = !cli.no_color && io::stderr().is_terminal();
    let mut session = Session::new(io::stdout(), io::stderr(), cli.emit).with_color(color);

    let result = match &cli.script {
        Some(path) => session.run_file(path).map(|had_error| {
            if had_error {
                EX_DATAERR
            } else {
                EX_OK
            }
        }),
        None => session.run_prompt(io::stdin().lock()).map(|()| EX_OK),
    };

    match result {
        Ok(code) => code,
        Err(err) => {
            error!(%err, "driver failed");
            eprintln!("Error: {}", err);
            EX_IOERR
        }
    }
}
