//! Composable style templates and the class-name registry.
//!
//! A [`StyleTemplate`] is a function from a generated class name to CSS text.
//! Themes keep per-component overrides as a [`StyleCollection`] so that later
//! themes can append to earlier ones instead of replacing them (see
//! [`merge_themes`](crate::merge::merge_themes)).

use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;

use indexmap::IndexMap;

use crate::error::{Result, ThemeError};

/// Style key to generated class name, in declaration order.
pub type Classes = IndexMap<String, String>;

type TemplateFn = dyn Fn(&str) -> String + Send + Sync;

/// A shareable style function. Cloning only bumps a reference count.
#[derive(Clone)]
pub struct StyleTemplate(Arc<TemplateFn>);

impl StyleTemplate {
    pub fn new(f: impl Fn(&str) -> String + Send + Sync + 'static) -> Self {
        Self(Arc::new(f))
    }

    /// A template that ignores the class name and always yields `css`.
    pub fn fixed(css: impl Into<String>) -> Self {
        let css = css.into();
        Self::new(move |_| css.clone())
    }

    pub fn render(&self, class_name: &str) -> String {
        (self.0)(class_name)
    }
}

impl fmt::Debug for StyleTemplate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("StyleTemplate")
            .field(&Arc::as_ptr(&self.0).cast::<()>())
            .finish()
    }
}

impl PartialEq for StyleTemplate {
    /// Templates are equal only when they share the same function.
    fn eq(&self, other: &Self) -> bool {
        std::ptr::addr_eq(Arc::as_ptr(&self.0), Arc::as_ptr(&other.0))
    }
}

/// An ordered list of style templates rendered back to back.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct StyleCollection {
    templates: Vec<StyleTemplate>,
}

impl StyleCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a template.
    pub fn add(&mut self, template: StyleTemplate) -> &mut Self {
        self.templates.push(template);
        self
    }

    /// Builder form of [`add`](Self::add).
    pub fn with(mut self, template: StyleTemplate) -> Self {
        self.templates.push(template);
        self
    }

    pub fn len(&self) -> usize {
        self.templates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.templates.is_empty()
    }

    /// Collapses the collection into one template.
    ///
    /// The returned template captures the templates added so far; later
    /// additions to the collection do not affect it.
    pub fn css(&self) -> StyleTemplate {
        let templates = self.templates.clone();
        StyleTemplate::new(move |class_name| {
            templates
                .iter()
                .map(|template| template.render(class_name))
                .collect()
        })
    }
}

impl FromIterator<StyleTemplate> for StyleCollection {
    fn from_iter<I: IntoIterator<Item = StyleTemplate>>(iter: I) -> Self {
        Self {
            templates: iter.into_iter().collect(),
        }
    }
}

#[derive(Debug, Default)]
struct StyleMapEntry {
    shared: Option<Classes>,
    per_theme: HashMap<String, Classes>,
}

/// Remembers which classes were generated for each style sheet.
///
/// A sheet that does not depend on the theme registers one set of classes.
/// Themed sheets register a set per theme name.
#[derive(Debug, Default)]
pub struct StyleRegistry {
    sheets: HashMap<String, StyleMapEntry>,
}

impl StyleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers theme-independent classes for `sheet`.
    pub fn register(&mut self, sheet: impl Into<String>, classes: Classes) {
        self.sheets.entry(sheet.into()).or_default().shared = Some(classes);
    }

    /// Registers the classes generated for `sheet` under `theme`.
    pub fn register_for_theme(
        &mut self,
        sheet: impl Into<String>,
        theme: impl Into<String>,
        classes: Classes,
    ) {
        self.sheets
            .entry(sheet.into())
            .or_default()
            .per_theme
            .insert(theme.into(), classes);
    }

    /// Looks up the classes for `sheet`, preferring theme-independent ones.
    pub fn classes(&self, sheet: &str, theme: &str) -> Result<&Classes> {
        let entry = self
            .sheets
            .get(sheet)
            .ok_or_else(|| ThemeError::ClassesNotFound(sheet.to_string()))?;

        entry
            .shared
            .as_ref()
            .or_else(|| entry.per_theme.get(theme))
            .ok_or_else(|| ThemeError::ClassesNotFound(format!("{sheet} ({theme})")))
    }
}
