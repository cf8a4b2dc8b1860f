//! A shared registry of named declaration blocks.
//!
//! Components register their rules under stable class names once, at
//! startup, and reference them by [`StyleId`] afterward. Composition is a
//! set union of ids; declaration text is never concatenated by hand.

use std::collections::HashMap;
use std::sync::RwLock;

use tracing::debug;

use crate::style::Style;

/// A handle to one registered rule.
///
/// Wraps the class name the rule was registered under. Components carry ids,
/// not declaration text, so the same rule is shared across every use site.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StyleId(String);

impl StyleId {
    /// Wrap a class name.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    /// The class name this id refers to.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StyleId {
    fn from(name: &str) -> Self {
        Self(name.to_string())
    }
}

impl From<String> for StyleId {
    fn from(name: String) -> Self {
        Self(name)
    }
}

impl AsRef<str> for StyleId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for StyleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

#[derive(Debug, Default)]
struct Inner {
    rules: HashMap<String, Style>,
    // (scope selector, class name, style); kept in insertion order so
    // scoped overrides always emit after the base rules they refine.
    scoped: Vec<(String, String, Style)>,
}

/// A thread-safe registry of named rules.
#[derive(Debug, Default)]
pub struct StyleSheet {
    inner: RwLock<Inner>,
}

impl StyleSheet {
    /// Create an empty sheet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a rule under a class name, replacing any previous rule.
    pub fn define(&self, name: impl Into<String>, style: Style) -> StyleId {
        let name = name.into();
        let mut inner = self.inner.write().expect("StyleSheet lock poisoned");
        debug!(class = %name, decls = style.len(), "rule defined");
        inner.rules.insert(name.clone(), style);
        StyleId(name)
    }

    /// Register a rule that only applies under a scope selector.
    ///
    /// Used for per-scheme refinements, e.g. softer tone backgrounds under
    /// `[data-theme="light"]`. The scoped rule does not replace the base
    /// rule of the same name.
    pub fn define_in_scope(
        &self,
        scope_selector: impl Into<String>,
        name: impl Into<String>,
        style: Style,
    ) -> StyleId {
        let scope = scope_selector.into();
        let name = name.into();
        let mut inner = self.inner.write().expect("StyleSheet lock poisoned");
        inner.scoped.push((scope, name.clone(), style));
        StyleId(name)
    }

    /// Look up a registered rule.
    #[must_use]
    pub fn get(&self, id: &StyleId) -> Option<Style> {
        let inner = self.inner.read().expect("StyleSheet lock poisoned");
        inner.rules.get(id.as_str()).cloned()
    }

    /// Look up a rule, or an empty style when unregistered.
    #[must_use]
    pub fn get_or_default(&self, id: &StyleId) -> Style {
        self.get(id).unwrap_or_default()
    }

    /// Whether a class name has a base rule.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        let inner = self.inner.read().expect("StyleSheet lock poisoned");
        inner.rules.contains_key(name)
    }

    /// Number of base rules.
    #[must_use]
    pub fn len(&self) -> usize {
        let inner = self.inner.read().expect("StyleSheet lock poisoned");
        inner.rules.len()
    }

    /// Whether the sheet has no base rules.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Registered class names, sorted.
    #[must_use]
    pub fn names(&self) -> Vec<String> {
        let inner = self.inner.read().expect("StyleSheet lock poisoned");
        let mut names: Vec<String> = inner.rules.keys().cloned().collect();
        names.sort();
        names
    }

    /// Flatten a list of ids into one effective style, later ids winning.
    ///
    /// Unregistered ids contribute nothing; use [`compose_strict`] when a
    /// missing rule is a bug.
    ///
    /// [`compose_strict`]: StyleSheet::compose_strict
    #[must_use]
    pub fn compose(&self, ids: &[StyleId]) -> Style {
        let mut out = Style::new();
        for id in ids {
            if let Some(style) = self.get(id) {
                out = style.merge(&out);
            }
        }
        out
    }

    /// Like [`compose`](StyleSheet::compose), but fails on the first
    /// unregistered id.
    pub fn compose_strict(&self, ids: &[StyleId]) -> Result<Style, StyleId> {
        let mut out = Style::new();
        for id in ids {
            let style = self.get(id).ok_or_else(|| id.clone())?;
            out = style.merge(&out);
        }
        Ok(out)
    }

    /// Remove every rule.
    pub fn clear(&self) {
        let mut inner = self.inner.write().expect("StyleSheet lock poisoned");
        inner.rules.clear();
        inner.scoped.clear();
    }

    /// Emit the whole sheet as CSS text.
    ///
    /// Base rules come first, sorted by class name; scoped rules follow in
    /// registration order under their scope selector.
    #[must_use]
    pub fn to_css(&self) -> String {
        let inner = self.inner.read().expect("StyleSheet lock poisoned");
        let mut out = String::new();
        let mut names: Vec<&String> = inner.rules.keys().collect();
        names.sort();
        for name in names {
            let style = &inner.rules[name];
            out.push_str(&format!(".{name} {{\n{}}}\n", style.to_css_body()));
        }
        for (scope, name, style) in &inner.scoped {
            out.push_str(&format!(
                "{scope} .{name} {{\n{}}}\n",
                style.to_css_body()
            ));
        }
        out
    }
}

impl Clone for StyleSheet {
    fn clone(&self) -> Self {
        let inner = self.inner.read().expect("StyleSheet lock poisoned");
        Self {
            inner: RwLock::new(Inner {
                rules: inner.rules.clone(),
                scoped: inner.scoped.clone(),
            }),
        }
    }
}
