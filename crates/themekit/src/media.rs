//! Responsive value lists.
//!
//! Component inputs accept a compact syntax for values that change with the
//! viewport: whitespace separates items, `@` attaches breakpoint names.
//!
//! ```text
//! 1 2@Small 3@Medium@Large
//! ```
//!
//! reads as: `1` everywhere, `2` on `Small`, `3` on both `Medium` and `Large`.
//! [`each_media`] walks such a list and calls back once per (value, media)
//! pair; [`each_media_collect`] also gathers the returned style templates.

use std::fmt;

use log::trace;

use crate::style::{StyleCollection, StyleTemplate};
use crate::types::number::{format_number, parse_number};

/// A single value from a responsive list.
#[derive(Clone, Debug, PartialEq)]
pub enum MediaValue {
    Number(f64),
    Str(String),
}

impl MediaValue {
    /// Tokens that read as numbers become numbers, the rest stay strings.
    fn from_token(token: &str) -> Self {
        match parse_number(token) {
            Some(n) => MediaValue::Number(n),
            None => MediaValue::Str(token.to_string()),
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            MediaValue::Number(n) => Some(*n),
            MediaValue::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            MediaValue::Str(s) => Some(s),
            MediaValue::Number(_) => None,
        }
    }
}

impl fmt::Display for MediaValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MediaValue::Number(n) => f.write_str(&format_number(*n)),
            MediaValue::Str(s) => f.write_str(s),
        }
    }
}

impl From<&str> for MediaValue {
    fn from(value: &str) -> Self {
        MediaValue::Str(value.to_string())
    }
}

impl From<String> for MediaValue {
    fn from(value: String) -> Self {
        MediaValue::Str(value)
    }
}

impl From<f64> for MediaValue {
    fn from(value: f64) -> Self {
        MediaValue::Number(value)
    }
}

impl From<i32> for MediaValue {
    fn from(value: i32) -> Self {
        MediaValue::Number(value as f64)
    }
}

/// One whitespace-separated item of a responsive list.
#[derive(Clone, Debug, PartialEq)]
pub struct MediaItem {
    pub value: MediaValue,
    /// Breakpoint names following the value, in source order.
    pub medias: Vec<String>,
    /// Position of the item in the list.
    pub index: usize,
}

/// Splits a responsive list into its items.
///
/// Every whitespace character separates two items, so runs of whitespace
/// yield empty items, and an empty item reads as the number `0`.
pub fn parse_media_list(input: &str) -> Vec<MediaItem> {
    input
        .split(char::is_whitespace)
        .enumerate()
        .map(|(index, token)| {
            let mut parts = token.split('@');
            let value = parts.next().unwrap_or_default();
            MediaItem {
                value: MediaValue::from_token(value),
                medias: parts.map(str::to_string).collect(),
                index,
            }
        })
        .collect()
}

/// Calls `f(value, media, index)` for every value/media pair in `input`.
///
/// A plain number calls back once with no media and index `0`. Items without
/// an `@` call back once with no media.
pub fn each_media<F>(input: impl Into<MediaValue>, mut f: F)
where
    F: FnMut(&MediaValue, Option<&str>, usize),
{
    let input = input.into();
    let s = match &input {
        MediaValue::Number(_) => {
            f(&input, None, 0);
            return;
        }
        MediaValue::Str(s) => s,
    };

    for item in parse_media_list(s) {
        trace!("each_media: {} {:?} #{}", item.value, item.medias, item.index);
        if item.medias.is_empty() {
            f(&item.value, None, item.index);
        } else {
            for media in &item.medias {
                f(&item.value, Some(media), item.index);
            }
        }
    }
}

/// Like [`each_media`], collecting the template each call returns.
///
/// The result renders every collected template in call order.
pub fn each_media_collect<F>(input: impl Into<MediaValue>, mut f: F) -> StyleTemplate
where
    F: FnMut(&MediaValue, Option<&str>, usize) -> StyleTemplate,
{
    let mut collection = StyleCollection::new();
    each_media(input, |value, media, index| {
        collection.add(f(value, media, index));
    });
    collection.css()
}
