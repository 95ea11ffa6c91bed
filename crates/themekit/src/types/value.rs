//! The untyped theme tree.
//!
//! Themes are loosely structured: a palette entry may be a plain color, a map
//! of shades with a `default` key, a style override for a component, or any
//! nested combination. [`ThemeValue`] models that tree, with maps that keep
//! keys in insertion order.

use indexmap::IndexMap;

use crate::style::{StyleCollection, StyleTemplate};
use crate::types::color::Color;

/// A string-keyed, insertion-ordered theme object.
pub type ThemeMap = IndexMap<String, ThemeValue>;

/// Separator between segments of a theme path such as `primary:contrast`.
pub const PATH_SEPARATOR: char = ':';

#[derive(Clone, Debug, Default, PartialEq)]
pub enum ThemeValue {
    #[default]
    Null,
    Bool(bool),
    Number(f64),
    Str(String),
    Color(Color),
    /// Style overrides that later themes append to.
    Styles(StyleCollection),
    /// A single style function.
    Style(StyleTemplate),
    List(Vec<ThemeValue>),
    Map(ThemeMap),
}

impl ThemeValue {
    /// Builds a map value from key/value pairs.
    ///
    /// ```
    /// use themekit::types::{Color, ThemeValue};
    ///
    /// let primary = ThemeValue::map([
    ///     ("default", ThemeValue::from(Color::from_int(0x6200ee))),
    ///     ("contrast", ThemeValue::from(Color::from_int(0xffffff))),
    /// ]);
    /// assert!(primary.get("contrast").is_some());
    /// ```
    pub fn map<K, I>(pairs: I) -> Self
    where
        K: Into<String>,
        I: IntoIterator<Item = (K, ThemeValue)>,
    {
        Self::Map(pairs.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }

    /// An empty map.
    pub fn object() -> Self {
        Self::Map(ThemeMap::new())
    }

    /// Truthiness as a dynamic language sees it.
    ///
    /// `Null`, `false`, `0`, `NaN` and `""` are falsy. Colors, styles, lists
    /// and maps are always truthy, even when empty or invalid.
    pub fn is_truthy(&self) -> bool {
        match self {
            ThemeValue::Null => false,
            ThemeValue::Bool(b) => *b,
            ThemeValue::Number(n) => *n != 0.0 && !n.is_nan(),
            ThemeValue::Str(s) => !s.is_empty(),
            ThemeValue::Color(_)
            | ThemeValue::Styles(_)
            | ThemeValue::Style(_)
            | ThemeValue::List(_)
            | ThemeValue::Map(_) => true,
        }
    }

    /// Only maps are plain objects; lists, colors and styles are not.
    pub fn is_object(&self) -> bool {
        matches!(self, ThemeValue::Map(_))
    }

    pub fn as_map(&self) -> Option<&ThemeMap> {
        match self {
            ThemeValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_map_mut(&mut self) -> Option<&mut ThemeMap> {
        match self {
            ThemeValue::Map(map) => Some(map),
            _ => None,
        }
    }

    pub fn as_color(&self) -> Option<&Color> {
        match self {
            ThemeValue::Color(color) => Some(color),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            ThemeValue::Str(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            ThemeValue::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_styles(&self) -> Option<&StyleCollection> {
        match self {
            ThemeValue::Styles(styles) => Some(styles),
            _ => None,
        }
    }

    /// Looks up `key` when this value is a map.
    pub fn get(&self, key: &str) -> Option<&ThemeValue> {
        self.as_map().and_then(|map| map.get(key))
    }

    pub fn get_mut(&mut self, key: &str) -> Option<&mut ThemeValue> {
        self.as_map_mut().and_then(|map| map.get_mut(key))
    }

    /// Walks a `:`-separated path through nested maps.
    pub fn get_path(&self, path: &str) -> Option<&ThemeValue> {
        path.split(PATH_SEPARATOR)
            .try_fold(self, |node, segment| node.get(segment))
    }
}

impl From<&str> for ThemeValue {
    fn from(value: &str) -> Self {
        ThemeValue::Str(value.to_string())
    }
}

impl From<String> for ThemeValue {
    fn from(value: String) -> Self {
        ThemeValue::Str(value)
    }
}

impl From<f64> for ThemeValue {
    fn from(value: f64) -> Self {
        ThemeValue::Number(value)
    }
}

impl From<i32> for ThemeValue {
    fn from(value: i32) -> Self {
        ThemeValue::Number(value as f64)
    }
}

impl From<bool> for ThemeValue {
    fn from(value: bool) -> Self {
        ThemeValue::Bool(value)
    }
}

impl From<Color> for ThemeValue {
    fn from(value: Color) -> Self {
        ThemeValue::Color(value)
    }
}

impl From<StyleCollection> for ThemeValue {
    fn from(value: StyleCollection) -> Self {
        ThemeValue::Styles(value)
    }
}

impl From<StyleTemplate> for ThemeValue {
    fn from(value: StyleTemplate) -> Self {
        ThemeValue::Style(value)
    }
}

impl From<ThemeMap> for ThemeValue {
    fn from(value: ThemeMap) -> Self {
        ThemeValue::Map(value)
    }
}

impl From<Vec<ThemeValue>> for ThemeValue {
    fn from(value: Vec<ThemeValue>) -> Self {
        ThemeValue::List(value)
    }
}
