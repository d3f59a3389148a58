pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::cli::CliConfig;

pub use crate::adapters::digit_source::{FixedDigitSource, SeededDigitSource, ThreadRngDigitSource};
pub use crate::app::runner::{Runner, Task};
pub use crate::core::math_operations::{multiply_if_positive, MathOperations};
pub use crate::domain::ports::{DigitSource, DIGIT_UPPER_BOUND};
pub use crate::utils::error::{MathError, Result};
