//! Declaration blocks: ordered property/value pairs.

use std::borrow::Cow;

/// An ordered set of CSS declarations.
///
/// Properties keep first-insertion order; re-setting a property updates the
/// value in place. Values referencing theme tokens should go through
/// [`TokenPath::css_var`](crate::token::TokenPath::css_var) so they stay on
/// the contract's generated names.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Style {
    decls: Vec<(Cow<'static, str>, String)>,
}

impl Style {
    /// Create an empty style.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a declaration. Re-setting a property keeps its position.
    #[must_use]
    pub fn prop(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.decls.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.decls.push((name, value));
        }
        self
    }

    /// The value of a property, if set.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&str> {
        self.decls
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Whether the style has no declarations.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.decls.is_empty()
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.decls.len()
    }

    /// Iterate declarations in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.decls.iter().map(|(n, v)| (n.as_ref(), v.as_str()))
    }

    /// Combine with an older style; `self` wins on conflicts.
    #[must_use]
    pub fn merge(&self, older: &Style) -> Style {
        let mut out = older.clone();
        for (name, value) in &self.decls {
            out = out.prop(name.clone(), value.clone());
        }
        out
    }

    /// Combine with an overriding style; `over` wins on conflicts.
    #[must_use]
    pub fn patch(&self, over: &Style) -> Style {
        over.merge(self)
    }

    /// Render as declaration lines, one per property, two-space indent.
    #[must_use]
    pub fn to_css_body(&self) -> String {
        let mut out = String::new();
        for (name, value) in &self.decls {
            out.push_str(&format!("  {name}: {value};\n"));
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_keep_insertion_order() {
        let style = Style::new()
            .prop("display", "inline-flex")
            .prop("gap", "8px")
            .prop("color", "var(--tctm-text)");
        let names: Vec<&str> = style.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["display", "gap", "color"]);
    }

    #[test]
    fn resetting_updates_in_place() {
        let style = Style::new()
            .prop("gap", "6px")
            .prop("color", "red")
            .prop("gap", "8px");
        assert_eq!(style.get("gap"), Some("8px"));
        assert_eq!(style.len(), 2);
        let names: Vec<&str> = style.iter().map(|(n, _)| n).collect();
        assert_eq!(names, ["gap", "color"]);
    }

    #[test]
    fn merge_prefers_self() {
        let older = Style::new().prop("color", "red").prop("gap", "4px");
        let newer = Style::new().prop("color", "blue");
        let merged = newer.merge(&older);
        assert_eq!(merged.get("color"), Some("blue"));
        assert_eq!(merged.get("gap"), Some("4px"));
    }

    #[test]
    fn patch_prefers_override() {
        let base = Style::new().prop("color", "red").prop("gap", "4px");
        let over = Style::new().prop("color", "blue");
        let patched = base.patch(&over);
        assert_eq!(patched.get("color"), Some("blue"));
        assert_eq!(patched.get("gap"), Some("4px"));
    }

    #[test]
    fn body_renders_in_order() {
        let style = Style::new().prop("height", "20px").prop("padding", "0 8px");
        assert_eq!(style.to_css_body(), "  height: 20px;\n  padding: 0 8px;\n");
    }

    #[test]
    fn empty_style() {
        let style = Style::new();
        assert!(style.is_empty());
        assert_eq!(style.to_css_body(), "");
        assert_eq!(style.get("color"), None);
    }
}
