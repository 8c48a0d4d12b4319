//! Error types for the command line, with miette diagnostics.
//!
//! The walk and the renderer cannot fail on a non-negative count, so the only
//! errors are about turning `argv` into one. Flag syntax and `--help` belong to
//! clap; these cover the positional number.

use miette::Diagnostic;
use thiserror::Error;

// ============================================================================
// Argument Errors
// ============================================================================

/// Errors that occur while validating the positional number
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
pub enum ArgsError {
    #[error("bad number of arguments: expected 1, got {found}")]
    #[diagnostic(
        code(numspiral::args::argument_count),
        help("pass exactly one non-negative integer\nusage: numspiral [OPTIONS] <number>")
    )]
    ArgumentCount { found: usize },

    #[error("{value} - not a number")]
    #[diagnostic(
        code(numspiral::args::not_a_number),
        help("the argument must be a whole number such as 24\nusage: numspiral [OPTIONS] <number>")
    )]
    NotANumber { value: String },

    #[error("number should be non-negative: {value}")]
    #[diagnostic(
        code(numspiral::args::negative_number),
        help("usage: numspiral [OPTIONS] <number>")
    )]
    NegativeNumber { value: String },

    #[error("number too large: {value}")]
    #[diagnostic(
        code(numspiral::args::too_large),
        help("the largest accepted number is 4294967295\nusage: numspiral [OPTIONS] <number>")
    )]
    TooLarge { value: String },
}

// ============================================================================
// Layout Tags
// ============================================================================

/// A layout tag that is not one of `cw`, `ccw`, `top-down`, `bottom-up`
#[derive(Error, Diagnostic, Debug, Clone, PartialEq, Eq)]
#[error("unknown layout tag: {tag}")]
#[diagnostic(code(numspiral::options::unknown_tag))]
pub struct UnknownTag {
    pub tag: String,
}
