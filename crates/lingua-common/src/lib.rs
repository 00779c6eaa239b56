//! # Lingua Common
//!
//! Shared error type, logging setup and test helpers used across the
//! Lingua workspace.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]

pub mod error;
pub mod logging;

#[cfg(any(test, feature = "testing"))]
pub mod test_utils;

pub use error::{LinguaError, Result};
pub use logging::{init_logging, LogFormat, LoggingConfig};
