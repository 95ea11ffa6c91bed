//! Deep merging of theme trees.
//!
//! Two flavors exist:
//!
//! - [`merge_deep`]: plain recursive merge. Maps merge key by key, anything
//!   else in the source replaces what the target had.
//! - [`merge_themes`]: the same walk, except a style function landing on a
//!   [`StyleCollection`](crate::style::StyleCollection) is appended to it
//!   instead of replacing it. This is how a theme extension adds component
//!   overrides on top of the base theme's.
//!
//! Both mutate the target in place and apply sources left to right. Source
//! values are cloned into the target.

use log::trace;

use crate::types::value::{ThemeMap, ThemeValue};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum MergeMode {
    Deep,
    Themes,
}

/// Recursively merges `sources` into `target`.
///
/// Nothing happens unless both `target` and a source are maps. A map in the
/// source replaces a missing or falsy target entry with a fresh map before
/// merging into it; a truthy non-map entry in the target is left alone.
///
/// ```
/// use themekit::merge::merge_deep;
/// use themekit::types::ThemeValue;
///
/// let mut target = ThemeValue::map([("a", ThemeValue::map([("x", 1.into())]))]);
/// let source = ThemeValue::map([("a", ThemeValue::map([("y", 2.into())]))]);
/// merge_deep(&mut target, [&source]);
///
/// assert_eq!(target.get_path("a:x"), Some(&ThemeValue::from(1)));
/// assert_eq!(target.get_path("a:y"), Some(&ThemeValue::from(2)));
/// ```
pub fn merge_deep<'a>(target: &mut ThemeValue, sources: impl IntoIterator<Item = &'a ThemeValue>) {
    merge_all(target, sources, MergeMode::Deep);
}

/// Like [`merge_deep`], appending style functions to style collections.
pub fn merge_themes<'a>(
    target: &mut ThemeValue,
    sources: impl IntoIterator<Item = &'a ThemeValue>,
) {
    merge_all(target, sources, MergeMode::Themes);
}

/// [`merge_themes`] over bare maps.
pub fn merge_theme_maps<'a>(target: &mut ThemeMap, sources: impl IntoIterator<Item = &'a ThemeMap>) {
    for source in sources {
        merge_map(target, source, MergeMode::Themes);
    }
}

fn merge_all<'a>(
    target: &mut ThemeValue,
    sources: impl IntoIterator<Item = &'a ThemeValue>,
    mode: MergeMode,
) {
    for source in sources {
        match (target.as_map_mut(), source.as_map()) {
            (Some(target), Some(source)) => merge_map(target, source, mode),
            _ => trace!("{mode:?} merge skipped: target or source is not a map"),
        }
    }
}

fn merge_map(target: &mut ThemeMap, source: &ThemeMap, mode: MergeMode) {
    for (key, value) in source {
        if let ThemeValue::Map(source_child) = value {
            let slot = target.entry(key.clone()).or_default();
            if !slot.is_truthy() {
                *slot = ThemeValue::object();
            }
            match slot {
                ThemeValue::Map(target_child) => merge_map(target_child, source_child, mode),
                _ => trace!("{mode:?} merge kept `{key}`: target is not a map"),
            }
            continue;
        }

        match (mode, target.get_mut(key), value) {
            (MergeMode::Themes, Some(ThemeValue::Styles(styles)), ThemeValue::Style(template)) => {
                trace!("appending style to `{key}`");
                styles.add(template.clone());
            }
            _ => {
                target.insert(key.clone(), value.clone());
            }
        }
    }
}
