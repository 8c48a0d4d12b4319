//! Command-line front end.
//!
//! clap owns flag syntax, `--help` and unknown options. The positional number
//! is validated here, before anything is written to the output.

use std::io;
use std::num::{IntErrorKind, ParseIntError};

use clap::Parser;
use miette::{IntoDiagnostic, WrapErr};

use crate::errors::ArgsError;
use crate::log::debug;
use crate::types::{Rotation, RowOrder, SpiralOptions};

/// Largest count accepted on the command line.
pub const MAX_NUMBER: usize = u32::MAX as usize;

/// Prints the integers 0..=<number> laid out in a square spiral.
#[derive(Debug, Parser)]
#[command(name = "numspiral", version, about, long_about = None)]
pub struct CliArgs {
    /// Largest integer to place; exactly one non-negative integer is expected.
    ///
    /// Collected loosely so a missing, repeated or negative number is reported
    /// by this program rather than by clap.
    #[arg(value_name = "number", num_args = 0.., allow_negative_numbers = true)]
    pub positionals: Vec<String>,

    /// Turn clockwise (default)
    #[arg(long, overrides_with = "counter_clockwise")]
    pub clockwise: bool,

    /// Turn counter-clockwise
    #[arg(long, overrides_with = "clockwise")]
    pub counter_clockwise: bool,

    /// Print the largest row first (default)
    #[arg(long, overrides_with = "bottom_up")]
    pub top_down: bool,

    /// Print the smallest row first
    #[arg(long, overrides_with = "top_down")]
    pub bottom_up: bool,
}

/// A validated request to print one spiral.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Request {
    pub number: usize,
    pub options: SpiralOptions,
}

impl CliArgs {
    /// Layout picked by the flags. Of each conflicting pair the last one wins.
    pub fn options(&self) -> SpiralOptions {
        let rotation = if self.counter_clockwise {
            Rotation::CounterClockwise
        } else {
            Rotation::Clockwise
        };
        let row_order = if self.bottom_up {
            RowOrder::BottomUp
        } else {
            RowOrder::TopDown
        };
        SpiralOptions::new().rotation(rotation).row_order(row_order)
    }

    /// Check that exactly one valid number was given.
    pub fn request(&self) -> Result<Request, ArgsError> {
        let [value] = self.positionals.as_slice() else {
            return Err(ArgsError::ArgumentCount {
                found: self.positionals.len(),
            });
        };
        let request = Request {
            number: parse_number(value)?,
            options: self.options(),
        };
        debug!(number = request.number, options = ?request.options, "parsed arguments");
        Ok(request)
    }

    /// Validate, then write the spiral to `out`.
    pub fn run<W: io::Write>(&self, out: &mut W) -> miette::Result<()> {
        let Request { number, options } = self.request()?;
        crate::write_spiral(out, number, &options)
            .into_diagnostic()
            .wrap_err("failed to write spiral")
    }
}

/// Parse a non-negative count, telling apart garbage, negatives and overflow.
pub fn parse_number(value: &str) -> Result<usize, ArgsError> {
    let number: i128 = value
        .trim()
        .parse()
        .map_err(|e: ParseIntError| match e.kind() {
            IntErrorKind::PosOverflow => ArgsError::TooLarge {
                value: value.to_string(),
            },
            IntErrorKind::NegOverflow => ArgsError::NegativeNumber {
                value: value.to_string(),
            },
            _ => ArgsError::NotANumber {
                value: value.to_string(),
            },
        })?;

    if number < 0 {
        return Err(ArgsError::NegativeNumber {
            value: value.to_string(),
        });
    }
    usize::try_from(number)
        .ok()
        .filter(|n| *n <= MAX_NUMBER)
        .ok_or_else(|| ArgsError::TooLarge {
            value: value.to_string(),
        })
}

/// Parse a full `argv` (program name first) and run it against `out`.
///
/// clap failures, `--help` included, come back as errors here; the binary
/// goes through [`CliArgs::parse`] instead so clap can print and exit itself.
pub fn run<I, T, W>(args: I, out: &mut W) -> miette::Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    W: io::Write,
{
    CliArgs::try_parse_from(args).into_diagnostic()?.run(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use clap::error::ErrorKind;

    fn parse(args: &[&str]) -> CliArgs {
        CliArgs::try_parse_from(args).expect("clap should accept these arguments")
    }

    fn request(args: &[&str]) -> Result<Request, ArgsError> {
        parse(args).request()
    }

    #[test]
    fn command_is_well_formed() {
        CliArgs::command().debug_assert();
    }

    #[test]
    fn good_argument() {
        let req = request(&["prog", "24"]).unwrap();
        assert_eq!(req.number, 24);
        assert_eq!(req.options, SpiralOptions::default());
        assert_eq!(request(&["prog", "0"]).unwrap().number, 0);
        assert_eq!(request(&["prog", " 7 "]).unwrap().number, 7);
        assert_eq!(request(&["prog", "+3"]).unwrap().number, 3);
    }

    #[test]
    fn too_few_arguments() {
        assert_eq!(request(&["prog"]), Err(ArgsError::ArgumentCount { found: 0 }));
    }

    #[test]
    fn too_many_arguments() {
        assert_eq!(
            request(&["prog", "42", "42"]),
            Err(ArgsError::ArgumentCount { found: 2 })
        );
    }

    #[test]
    fn bad_argument() {
        for value in ["foo", "", "4.5", "0x10", "1e3"] {
            assert_eq!(
                request(&["prog", value]),
                Err(ArgsError::NotANumber {
                    value: value.to_string()
                }),
                "{value:?}"
            );
        }
    }

    #[test]
    fn negative_argument_reaches_validation() {
        assert_eq!(
            request(&["prog", "-1"]),
            Err(ArgsError::NegativeNumber { value: "-1".into() })
        );
        let huge_negative = format!("-{}0", i128::MAX);
        assert!(matches!(
            parse_number(&huge_negative),
            Err(ArgsError::NegativeNumber { .. })
        ));
    }

    #[test]
    fn negative_zero_is_zero() {
        assert_eq!(parse_number("-0"), Ok(0));
    }

    #[test]
    fn largest_count_is_capped() {
        assert_eq!(parse_number(&MAX_NUMBER.to_string()), Ok(MAX_NUMBER));
        for value in [
            (MAX_NUMBER as u128 + 1).to_string(),
            (usize::MAX as u128 + 1).to_string(),
            format!("{}0", u128::MAX),
        ] {
            assert!(
                matches!(parse_number(&value), Err(ArgsError::TooLarge { .. })),
                "{value}"
            );
        }
    }

    #[test]
    fn options_anywhere() {
        let req = request(&["prog", "--counter-clockwise", "5", "--bottom-up"]).unwrap();
        assert_eq!(req.number, 5);
        assert_eq!(req.options.rotation, Rotation::CounterClockwise);
        assert_eq!(req.options.row_order, RowOrder::BottomUp);
    }

    #[test]
    fn last_option_wins() {
        let opts = parse(&["prog", "--counter-clockwise", "--clockwise", "5"]).options();
        assert_eq!(opts.rotation, Rotation::Clockwise);
        let opts = parse(&["prog", "--top-down", "--bottom-up", "5"]).options();
        assert_eq!(opts.row_order, RowOrder::BottomUp);
    }

    #[test]
    fn options_do_not_count_as_positionals() {
        assert_eq!(
            request(&["prog", "--bottom-up"]),
            Err(ArgsError::ArgumentCount { found: 0 })
        );
    }

    #[test]
    fn unknown_option_is_rejected_by_clap() {
        let err = CliArgs::try_parse_from(["prog", "--sideways", "3"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::UnknownArgument);
    }

    #[test]
    fn help_is_handled_by_clap() {
        let err = CliArgs::try_parse_from(["prog", "--help"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DisplayHelp);
    }

    #[test]
    fn run_writes_nothing_on_error() {
        let mut out = Vec::new();
        assert!(run(["prog", "-5"], &mut out).is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn run_writes_grid() {
        let mut out = Vec::new();
        run(["prog", "2"], &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "0 1\n  2\n");
    }
}
