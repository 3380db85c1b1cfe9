//! Pure, platform-agnostic core logic. Everything in here is synchronous,
//! side-effect-free (except `storage`) and unit-tested in isolation.

pub mod dates;
pub mod expiry;
pub mod format;
pub mod ingredients;
pub mod platform;
pub mod schedule;
pub mod storage;
pub mod streak;

use thiserror::Error;

/// Error taxonomy for the core modules. Empty histories and missing data
/// are sentinel values, not errors; only genuinely bad input or failed
/// persistence lands here.
#[derive(Debug, Error)]
pub enum CoreError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
    #[error("storage failure: {0}")]
    Storage(String),
}
