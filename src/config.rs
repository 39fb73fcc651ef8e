//! Command-line configuration for the `rlox` binary

use clap::{ArgAction, Parser, ValueEnum};
use std::path::PathBuf;

/// What a successful run writes to standard output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum EmitMode {
    /// The parsed expression in parenthesized prefix form
    #[default]
    Ast,
    /// One scanned token per line
    Tokens,
}

/// Lox expression front end: scan and parse a script or an interactive prompt.
#[derive(Debug, Parser)]
#[command(name = "rlox", version, about)]
pub struct Cli {
    /// Script to run; starts an interactive prompt when omitted
    pub script: Option<PathBuf>,

    /// Output produced for each successfully compiled input
    #[arg(long, value_enum, default_value_t = EmitMode::Ast)]
    pub emit: EmitMode,

    /// Never color diagnostics
    #[arg(long)]
    pub no_color: bool,

    /// Increase logging verbosity (-v: debug, -vv+: trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

/// Default `tracing` filter when `RUST_LOG` is not set.
pub fn directive_for_verbosity(v: u8) -> &'static str {
    match v {
        0 => "lox_syntax=warn,rlox=warn",
        1 => "lox_syntax=debug,rlox=debug",
        _ => "lox_syntax=trace,rlox=trace",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments_means_prompt() {
        let cli = Cli::try_parse_from(["rlox"]).unwrap();
        assert!(cli.script.is_none());
        assert_eq!(cli.emit, EmitMode::Ast);
        assert!(!cli.no_color);
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_script_and_flags() {
        let cli =
            Cli::try_parse_from(["rlox", "--emit", "tokens", "-vv", "--no-color", "demo.lox"])
                .unwrap();
        assert_eq!(cli.script, Some(PathBuf::from("demo.lox")));
        assert_eq!(cli.emit, EmitMode::Tokens);
        assert!(cli.no_color);
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_extra_positional_is_rejected() {
        assert!(Cli::try_parse_from(["rlox", "a.lox", "b.lox"]).is_err());
    }

    #[test]
    fn test_directives() {
        assert_eq!(directive_for_verbosity(0), "lox_syntax=warn,rlox=warn");
        assert_eq!(directive_for_verbosity(1), "lox_syntax=debug,rlox=debug");
        assert_eq!(directive_for_verbosity(7), "lox_syntax=trace,rlox=trace");
    }
}
