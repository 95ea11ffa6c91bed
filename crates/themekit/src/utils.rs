//! Theme-aware helpers used while writing component styles.
//!
//! [`StyleUtils`] bundles what a style function needs from the active theme:
//! palette lookups, breakpoint media queries, typography conversion and
//! direction-aware side names.
//!
//! ## Color Paths
//!
//! Colors are addressed with `:`-separated paths into the theme tree. A path
//! may stop at a color or at a map of shades:
//!
//! | Path                  | Resolves to                                    |
//! |-----------------------|------------------------------------------------|
//! | `primary`             | `primary.default`                              |
//! | `primary`, `contrast` | `primary.contrast`, else `primary.default`     |
//! | `background:tertiary` | the color stored there                         |
//! | `transparent`         | `rgba(0, 0, 0, 0)`                             |
//! | `#2196f3`             | parsed literally                               |
//!
//! Anything that misses yields [`Color::invalid`].
//!
//! ## Direction
//!
//! `before` and `after` name the start and end sides of the reading order, so
//! styles written with them flip automatically under [`Dir::Rtl`].

use std::collections::HashMap;
use std::fmt;
use std::str::FromStr;

use log::{debug, trace, warn};
use phf::phf_map;

use crate::error::Result;
use crate::merge::merge_theme_maps;
use crate::style::{Classes, StyleRegistry};
use crate::types::color::{Color, hex_color_to_int};
use crate::types::number::format_number;
use crate::types::value::{PATH_SEPARATOR, ThemeMap, ThemeValue};

/// Media queries for the standard breakpoint names.
pub static DEFAULT_BREAKPOINTS: phf::Map<&'static str, &'static str> = phf_map! {
    "XSmall" => "(max-width: 599px)",
    "Small" => "(min-width: 600px) and (max-width: 959px)",
    "Medium" => "(min-width: 960px) and (max-width: 1279px)",
    "Large" => "(min-width: 1280px) and (max-width: 1919px)",
    "XLarge" => "(min-width: 1920px)",

    "Handset" => "(max-width: 599px) and (orientation: portrait), (max-width: 959px) and (orientation: landscape)",
    "Tablet" => "(min-width: 600px) and (max-width: 839px) and (orientation: portrait), (min-width: 960px) and (max-width: 1279px) and (orientation: landscape)",
    "Web" => "(min-width: 840px) and (orientation: portrait), (min-width: 1280px) and (orientation: landscape)",

    "HandsetPortrait" => "(max-width: 599px) and (orientation: portrait)",
    "TabletPortrait" => "(min-width: 600px) and (max-width: 839px) and (orientation: portrait)",
    "WebPortrait" => "(min-width: 840px) and (orientation: portrait)",

    "HandsetLandscape" => "(max-width: 959px) and (orientation: landscape)",
    "TabletLandscape" => "(min-width: 960px) and (max-width: 1279px) and (orientation: landscape)",
    "WebLandscape" => "(min-width: 1280px) and (orientation: landscape)",
};

/// Font sizes that px/rem conversion is based on.
#[derive(Clone, Debug, PartialEq)]
pub struct Typography {
    pub font_family: Option<String>,
    /// Root font size of the document, in px.
    pub html_font_size: f64,
    /// Base font size of the theme, in px. `14` means no scaling.
    pub font_size: f64,
}

impl Default for Typography {
    fn default() -> Self {
        Self {
            font_family: None,
            html_font_size: 16.0,
            font_size: 14.0,
        }
    }
}

/// Text direction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Dir {
    #[default]
    Ltr,
    Rtl,
}

impl Dir {
    pub fn as_str(&self) -> &'static str {
        match self {
            Dir::Ltr => "ltr",
            Dir::Rtl => "rtl",
        }
    }
}

impl fmt::Display for Dir {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Dir {
    type Err = ();

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "ltr" => Ok(Dir::Ltr),
            "rtl" => Ok(Dir::Rtl),
            _ => Err(()),
        }
    }
}

/// Logical sides that depend on the text direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirAlias {
    Before,
    After,
}

impl DirAlias {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirAlias::Before => "before",
            DirAlias::After => "after",
        }
    }
}

/// Physical horizontal sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum DirPosition {
    Left,
    Right,
}

impl DirPosition {
    pub fn as_str(&self) -> &'static str {
        match self {
            DirPosition::Left => "left",
            DirPosition::Right => "right",
        }
    }
}

impl fmt::Display for DirPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Input accepted by [`StyleUtils::color_of`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ColorRef<'a> {
    /// A `0xRRGGBB` integer.
    Int(u32),
    /// A theme path or a `#RRGGBB` literal.
    Path(&'a str),
}

impl From<u32> for ColorRef<'_> {
    fn from(value: u32) -> Self {
        ColorRef::Int(value)
    }
}

impl<'a> From<&'a str> for ColorRef<'a> {
    fn from(value: &'a str) -> Self {
        ColorRef::Path(value)
    }
}

/// Theme-aware style helpers.
#[derive(Clone, Debug, Default)]
pub struct StyleUtils {
    /// Theme name, used to pick themed classes from the registry.
    pub name: String,
    pub typography: Typography,
    /// Breakpoints overriding or extending [`DEFAULT_BREAKPOINTS`].
    pub breakpoints: HashMap<String, String>,
    pub direction: Dir,
    /// The theme tree color paths resolve against.
    pub theme: ThemeMap,
}

impl StyleUtils {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Default::default()
        }
    }

    pub fn with_direction(mut self, direction: Dir) -> Self {
        self.direction = direction;
        self
    }

    pub fn with_typography(mut self, typography: Typography) -> Self {
        self.typography = typography;
        self
    }

    pub fn with_breakpoint(mut self, name: impl Into<String>, query: impl Into<String>) -> Self {
        self.breakpoints.insert(name.into(), query.into());
        self
    }

    pub fn with_theme(mut self, theme: ThemeMap) -> Self {
        self.theme = theme;
        self
    }

    /// Layers `extensions` over the current theme with [`merge_theme_maps`].
    pub fn extend_theme<'a>(&mut self, extensions: impl IntoIterator<Item = &'a ThemeMap>) {
        merge_theme_maps(&mut self.theme, extensions);
    }

    /// `left` or `right`, whichever side reading starts from.
    pub fn before(&self) -> DirPosition {
        self.get_direction(DirAlias::Before)
    }

    /// `left` or `right`, whichever side reading ends at.
    pub fn after(&self) -> DirPosition {
        self.get_direction(DirAlias::After)
    }

    /// Always `top`.
    pub fn above(&self) -> &'static str {
        "top"
    }

    /// Always `bottom`.
    pub fn below(&self) -> &'static str {
        "bottom"
    }

    pub fn get_direction(&self, alias: DirAlias) -> DirPosition {
        match (alias, self.direction) {
            (DirAlias::Before, Dir::Ltr) | (DirAlias::After, Dir::Rtl) => DirPosition::Left,
            (DirAlias::Before, Dir::Rtl) | (DirAlias::After, Dir::Ltr) => DirPosition::Right,
        }
    }

    /// Resolves a side name, passing through anything that is not an alias.
    ///
    /// ```
    /// use themekit::{Dir, StyleUtils};
    ///
    /// let utils = StyleUtils::new("light").with_direction(Dir::Rtl);
    /// assert_eq!(utils.resolve_direction("before"), "right");
    /// assert_eq!(utils.resolve_direction("below"), "bottom");
    /// assert_eq!(utils.resolve_direction("left"), "left");
    /// ```
    pub fn resolve_direction<'a>(&self, side: &'a str) -> &'a str {
        match side {
            "before" => self.before().as_str(),
            "after" => self.after().as_str(),
            "above" => self.above(),
            "below" => self.below(),
            other => other,
        }
    }

    /// Converts px to rem, scaled by the theme's base font size.
    ///
    /// The number is printed in CSS form, see [`format_number`].
    pub fn px_to_rem(&self, px: f64) -> String {
        let size = self.typography.font_size / 14.0;
        format!("{}rem", format_number(px / self.typography.html_font_size * size))
    }

    /// Resolves a color from an integer, a `#RRGGBB` literal or a theme path.
    ///
    /// `optional` names a sibling of `default` to prefer when the path ends
    /// at a map of shades, e.g. `color_of("primary", Some("contrast"))`.
    pub fn color_of<'a>(&self, value: impl Into<ColorRef<'a>>, optional: Option<&str>) -> Color {
        match value.into() {
            ColorRef::Int(int) => Color::from_int(int),
            ColorRef::Path(path) if path.contains('#') && path.chars().count() == 7 => {
                match hex_color_to_int(path) {
                    Ok(int) => Color::from_int(int),
                    Err(err) => {
                        warn!("color_of: {err}");
                        Color::invalid()
                    }
                }
            }
            ColorRef::Path(path) => self.lookup_color(path, optional),
        }
    }

    fn lookup_color(&self, path: &str, optional: Option<&str>) -> Color {
        if path == "transparent" {
            return Color::transparent();
        }

        let mut segments = path.split(PATH_SEPARATOR);
        let first = segments.next().unwrap_or_default();
        let Some(mut node) = self.theme.get(first).filter(|v| v.is_truthy()) else {
            trace!("color_of: `{path}` not found");
            return Color::invalid();
        };
        for segment in segments {
            match node.get(segment).filter(|v| v.is_truthy()) {
                Some(next) => node = next,
                None => {
                    trace!("color_of: `{path}` not found at `{segment}`");
                    return Color::invalid();
                }
            }
        }

        if let ThemeValue::Color(color) = node {
            return *color;
        }

        let picked = optional
            .and_then(|key| node.get(key))
            .filter(|v| v.is_truthy())
            .or_else(|| node.get("default"));
        match picked {
            Some(ThemeValue::Color(color)) => *color,
            _ => {
                trace!("color_of: `{path}` has no usable default");
                Color::invalid()
            }
        }
    }

    /// Returns the `@media` rule for a breakpoint name.
    ///
    /// Unknown names are used as the query itself, so raw queries pass
    /// through. An empty override also falls back to the name.
    pub fn get_breakpoint(&self, key: &str) -> String {
        let query = match self.breakpoints.get(key) {
            Some(query) if query.is_empty() => key,
            Some(query) => query.as_str(),
            None => DEFAULT_BREAKPOINTS.get(key).copied().unwrap_or_else(|| {
                debug!("get_breakpoint: `{key}` is not a named breakpoint");
                key
            }),
        };
        format!("@media {query}")
    }

    /// Returns the classes generated for `sheet` under this theme.
    pub fn selectors_of<'r>(&self, registry: &'r StyleRegistry, sheet: &str) -> Result<&'r Classes> {
        registry.classes(sheet, &self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ThemeError;

    fn palette() -> ThemeMap {
        let theme = ThemeValue::map([
            (
                "primary",
                ThemeValue::map([
                    ("default", Color::from_int(0x6200ee).into()),
                    ("contrast", Color::from_int(0xffffff).into()),
                    ("unused", ThemeValue::Null),
                ]),
            ),
            (
                "background",
                ThemeValue::map([(
                    "tertiary",
                    ThemeValue::from(Color::from_int(0xefefef)),
                )]),
            ),
            ("accent", Color::from_int(0xff2997).into()),
            ("label", "not a color".into()),
            ("blank", ThemeValue::map([("default", "".into())])),
        ]);
        match theme {
            ThemeValue::Map(map) => map,
            _ => unreachable!(),
        }
    }

    fn utils() -> StyleUtils {
        StyleUtils::new("minima-light").with_theme(palette())
    }

    #[test]
    fn test_direction_ltr() {
        let utils = StyleUtils::new("t");
        assert_eq!(utils.before(), DirPosition::Left);
        assert_eq!(utils.after(), DirPosition::Right);
        assert_eq!(utils.above(), "top");
        assert_eq!(utils.below(), "bottom");
    }

    #[test]
    fn test_direction_rtl() {
        let utils = StyleUtils::new("t").with_direction(Dir::Rtl);
        assert_eq!(utils.before(), DirPosition::Right);
        assert_eq!(utils.after(), DirPosition::Left);
        assert_eq!(utils.resolve_direction("after"), "left");
        assert_eq!(utils.resolve_direction("above"), "top");
        assert_eq!(utils.resolve_direction("center"), "center");
    }

    #[test]
    fn test_dir_from_str() {
        assert_eq!("rtl".parse::<Dir>(), Ok(Dir::Rtl));
        assert_eq!(Dir::Ltr.to_string(), "ltr");
        assert!("RTL".parse::<Dir>().is_err());
    }

    #[test]
    fn test_px_to_rem_defaults() {
        let utils = StyleUtils::new("t");
        assert_eq!(utils.px_to_rem(16.0), "1rem");
        assert_eq!(utils.px_to_rem(8.0), "0.5rem");
    }

    #[test]
    fn test_px_to_rem_scaled() {
        let utils = StyleUtils::new("t").with_typography(Typography {
            font_size: 28.0,
            ..Default::default()
        });
        assert_eq!(utils.px_to_rem(16.0), "2rem");
    }

    #[test]
    fn test_px_to_rem_extremes() {
        let utils = StyleUtils::new("t").with_typography(Typography {
            html_font_size: 1.0,
            ..Default::default()
        });
        assert_eq!(utils.px_to_rem(1e21), "1e+21rem");
        assert_eq!(utils.px_to_rem(1e-7), "1e-7rem");

        let broken = StyleUtils::new("t").with_typography(Typography {
            html_font_size: 0.0,
            ..Default::default()
        });
        assert_eq!(broken.px_to_rem(16.0), "Infinityrem");
    }

    #[test]
    fn test_color_of_int_and_hex() {
        let utils = utils();
        assert_eq!(utils.color_of(0x112233u32, None), Color::rgb(0x11, 0x22, 0x33));
        assert_eq!(utils.color_of("#112233", None), Color::rgb(0x11, 0x22, 0x33));
    }

    #[test]
    fn test_color_of_bad_hex_is_invalid() {
        assert!(!utils().color_of("#11223g", None).is_valid());
    }

    #[test]
    fn test_short_hex_goes_through_theme_lookup() {
        // Only seven-character literals are parsed directly.
        assert!(!utils().color_of("#fff", None).is_valid());
    }

    #[test]
    fn test_color_of_default_and_optional() {
        let utils = utils();
        assert_eq!(utils.color_of("primary", None), Color::from_int(0x6200ee));
        assert_eq!(
            utils.color_of("primary", Some("contrast")),
            Color::from_int(0xffffff)
        );
        assert_eq!(
            utils.color_of("primary", Some("missing")),
            Color::from_int(0x6200ee)
        );
        assert_eq!(
            utils.color_of("primary", Some("unused")),
            Color::from_int(0x6200ee)
        );
    }

    #[test]
    fn test_color_of_nested_path() {
        assert_eq!(
            utils().color_of("background:tertiary", None),
            Color::from_int(0xefefef)
        );
    }

    #[test]
    fn test_color_of_direct_color() {
        assert_eq!(utils().color_of("accent", Some("contrast")), Color::from_int(0xff2997));
    }

    #[test]
    fn test_color_of_transparent() {
        assert_eq!(utils().color_of("transparent", None), Color::transparent());
    }

    #[test]
    fn test_color_of_misses_are_invalid() {
        let utils = utils();
        assert!(!utils.color_of("secondary", None).is_valid());
        assert!(!utils.color_of("background:quaternary", None).is_valid());
        assert!(!utils.color_of("label", None).is_valid());
        assert!(!utils.color_of("blank", None).is_valid());
        assert!(!utils.color_of("primary:unused", None).is_valid());
    }

    #[test]
    fn test_extend_theme_overrides_palette() {
        let mut utils = utils();
        let mut extension = ThemeMap::new();
        extension.insert(
            "primary".into(),
            ThemeValue::map([("default", Color::from_int(0x2196f3).into())]),
        );
        utils.extend_theme([&extension]);

        assert_eq!(utils.color_of("primary", None), Color::from_int(0x2196f3));
        assert_eq!(
            utils.color_of("primary", Some("contrast")),
            Color::from_int(0xffffff)
        );
    }

    #[test]
    fn test_get_breakpoint() {
        let utils = StyleUtils::new("t").with_breakpoint("Tiny", "(max-width: 320px)");
        assert_eq!(utils.get_breakpoint("XSmall"), "@media (max-width: 599px)");
        assert_eq!(utils.get_breakpoint("Tiny"), "@media (max-width: 320px)");
        assert_eq!(utils.get_breakpoint("print"), "@media print");
    }

    #[test]
    fn test_breakpoint_override_wins() {
        let utils = StyleUtils::new("t").with_breakpoint("Small", "(max-width: 700px)");
        assert_eq!(utils.get_breakpoint("Small"), "@media (max-width: 700px)");
    }

    #[test]
    fn test_empty_breakpoint_override_falls_back_to_key() {
        let utils = StyleUtils::new("t")
            .with_breakpoint("Small", "")
            .with_breakpoint("Custom", "");
        assert_eq!(utils.get_breakpoint("Small"), "@media Small");
        assert_eq!(utils.get_breakpoint("Custom"), "@media Custom");
        assert_eq!(utils.get_breakpoint("Medium"), "@media (min-width: 960px) and (max-width: 1279px)");
    }

    #[test]
    fn test_selectors_of() {
        let mut registry = StyleRegistry::new();
        let mut classes = Classes::new();
        classes.insert("root".into(), "btn-0".into());
        registry.register_for_theme("button", "minima-light", classes);

        let utils = utils();
        assert_eq!(utils.selectors_of(&registry, "button").unwrap()["root"], "btn-0");
        assert!(matches!(
            utils.selectors_of(&registry, "card"),
            Err(ThemeError::ClassesNotFound(_))
        ));
    }
}
