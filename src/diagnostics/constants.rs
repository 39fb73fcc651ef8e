// Process exit codes used by the `rlox` binary (sysexits.h values)

/// Clean run
pub const EX_OK: i32 = 0;

/// Invalid command-line invocation
pub const EX_USAGE: i32 = 64;

/// A compile (lexical or syntax) error was reported
pub const EX_DATAERR: i32 = 65;

/// A runtime error occurred in a downstream evaluator.
///
/// Reserved for an evaluator built on this crate; `rlox` never exits with it.
pub const EX_SOFTWARE: i32 = 70;

/// The script file could not be read
pub const EX_IOERR: i32 = 74;
