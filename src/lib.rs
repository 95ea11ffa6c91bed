//! Workspace facade re-exporting [`themekit`].

pub use themekit::*;
