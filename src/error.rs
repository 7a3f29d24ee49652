//! # Error Handling
//!
//! Provides the unified `AppError` enum used across the crate.

use derive_more::{Display, From};

/// The crate-wide error enum.
///
/// We use `derive_more` for boilerplate.
/// Note: String errors default to `General`.
#[derive(Debug, Display, From)]
pub enum AppError {
    /// A raw example literal could not be coerced into its declared type.
    /// Carries the offending value and the target type name for diagnostics.
    /// We ignore this for `From` so the two fields stay explicit at the call site.
    #[from(ignore)]
    #[display("Value '{value}' cannot be converted to '{target_type}'")]
    Conversion {
        /// The raw value that failed to parse.
        value: String,
        /// The declared target type name (e.g. "integer").
        target_type: String,
    },

    /// Generic errors.
    #[display("General Error: {_0}")]
    General(String),
}

/// Manual implementation of the standard Error trait.
impl std::error::Error for AppError {}

/// Helper type alias for Result using AppError.
pub type AppResult<T> = Result<T, AppError>;
