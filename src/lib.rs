//! # u-statutil
//!
//! Descriptive statistics and combinatorics over in-memory `f64` slices.
//!
//! Every function is pure: it borrows its input, never mutates it, and
//! touches no global state. The only allocations are the sorted scratch
//! copy used by median, mode and percentile, and the vector returned by
//! normalization.
//!
//! ## Modules
//!
//! - [`combinatorics`]: combinations, permutations, binomial PMF
//! - [`stats`]: mean, median, variance, standard deviation, range, mode,
//!   percentile
//! - [`transform`]: min-max normalization, z-score
//! - [`summary`]: all descriptive statistics of one dataset at once
//! - [`error`]: [`StatsError`] for the checked API
//!
//! ## Invalid input
//!
//! The plain functions keep a sentinel contract instead of returning
//! errors, and the sentinel differs per function:
//!
//! - `0.0`: combinatorics, binomial probability, mean, median, variance,
//!   standard deviation, and `z_score` with a zero standard deviation
//! - `-1.0`: range, mode, percentile
//! - `None`: normalize
//!
//! A sentinel can collide with a legitimate result (a constant dataset has
//! variance `0.0`). Each plain function has a `try_*` twin returning
//! `Result<_, StatsError>` for callers that need to know why a value could
//! not be computed.
//!
//! ```
//! use u_statutil::stats::{variance, try_variance};
//! use u_statutil::StatsError;
//!
//! assert_eq!(variance(&[]), 0.0);
//! assert_eq!(variance(&[2.0, 2.0]), 0.0);
//! assert_eq!(try_variance(&[]), Err(StatsError::EmptyData));
//! assert_eq!(try_variance(&[2.0, 2.0]), Ok(0.0));
//! ```

pub mod combinatorics;
pub mod error;
pub mod stats;
pub mod summary;
pub mod transform;

pub use error::StatsError;
