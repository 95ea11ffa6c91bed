//! Error types for theme processing.
//!
//! Most lookups in this crate never fail: a color path that misses the theme
//! yields [`Color::invalid`](crate::types::Color::invalid) instead. Errors are
//! reserved for malformed input and for asking the class registry about a
//! style sheet it has never seen.

use thiserror::Error;

/// Errors that can occur while parsing theme values or resolving classes.
///
/// # Examples
///
/// ```rust
/// use themekit::types::color::hex_color_to_int;
///
/// assert!(hex_color_to_int("#zzzzzz").is_err());
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ThemeError {
    /// A color string could not be parsed.
    #[error("Invalid color: {0}")]
    InvalidColor(String),

    /// The class registry has no entry for the requested style sheet.
    #[error("Classes not found for style sheet `{0}`")]
    ClassesNotFound(String),
}

pub type Result<T> = std::result::Result<T, ThemeError>;
