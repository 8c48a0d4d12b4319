//! Debug logging for the walk and the command line.
//!
//! Built with `--features tracing`, `debug!` is `tracing::debug!` and obeys
//! `RUST_LOG`. In the default build it swallows its arguments, so turn logging
//! inside the step loop compiles away.

#[cfg(feature = "tracing")]
pub(crate) use tracing::debug;

#[cfg(not(feature = "tracing"))]
macro_rules! debug {
    ($($field:tt)*) => {};
}

#[cfg(not(feature = "tracing"))]
pub(crate) use debug;
