//! # themekit - theme helpers for component styling
//!
//! Small building blocks that component style functions lean on:
//!
//! - **Colors**: resolve `:`-separated palette paths against a theme tree,
//!   falling back to an invalid sentinel instead of failing
//! - **Breakpoints**: named media queries and the `value@Breakpoint`
//!   responsive list syntax
//! - **Direction**: `before`/`after` sides that follow LTR/RTL
//! - **Merging**: deep merge of theme trees, with style overrides that stack
//!   instead of replacing each other
//!
//! ## Quick Start
//!
//! ```rust
//! use themekit::{Color, Dir, StyleUtils, ThemeValue};
//!
//! let theme = ThemeValue::map([(
//!     "primary",
//!     ThemeValue::map([
//!         ("default", Color::from_int(0x6200ee).into()),
//!         ("contrast", Color::from_int(0xffffff).into()),
//!     ]),
//! )]);
//! let utils = StyleUtils::new("minima-light")
//!     .with_direction(Dir::Rtl)
//!     .with_theme(theme.as_map().cloned().unwrap_or_default());
//!
//! assert_eq!(utils.color_of("primary", Some("contrast")).to_string(), "#ffffff");
//! assert_eq!(utils.before().as_str(), "right");
//! assert_eq!(utils.get_breakpoint("XSmall"), "@media (max-width: 599px)");
//! ```
//!
//! ## Modules
//!
//! - [`utils`]: [`StyleUtils`], direction and breakpoint helpers
//! - [`media`]: responsive value lists
//! - [`merge`]: theme tree merging
//! - [`style`]: style templates, collections and the class registry
//! - [`types`]: colors and the untyped theme tree
//! - [`error`]: error types

pub mod error;
pub mod media;
pub mod merge;
pub mod style;
pub mod types;
pub mod utils;

pub use error::{Result, ThemeError};
pub use media::{MediaValue, each_media, each_media_collect};
pub use merge::{merge_deep, merge_themes};
pub use style::{Classes, StyleCollection, StyleRegistry, StyleTemplate};
pub use types::{Color, ThemeMap, ThemeValue};
pub use utils::{Dir, DirAlias, DirPosition, StyleUtils, Typography};
