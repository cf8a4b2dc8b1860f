//! The markup tree components render into.
//!
//! An [`Element`] is a tag plus classes, attributes, and children. Classes
//! are a set: adding a class twice is a no-op, and composing two class lists
//! is a union, never string concatenation. Attribute order is insertion
//! order, so serialized output is stable for a given build sequence.

use std::borrow::Cow;

use smallvec::SmallVec;

/// One node in the markup tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with tag, attributes, and children.
    Element(Element),
    /// A text run, escaped at serialization time.
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Self::Element(element)
    }
}

impl From<&str> for Node {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<String> for Node {
    fn from(text: String) -> Self {
        Self::Text(text)
    }
}

/// An element under construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: Cow<'static, str>,
    classes: SmallVec<[String; 4]>,
    attrs: Vec<(Cow<'static, str>, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag.
    #[must_use]
    pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
        Self {
            tag: tag.into(),
            classes: SmallVec::new(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    /// The element's tag name.
    #[must_use]
    pub fn tag(&self) -> &str {
        &self.tag
    }

    /// Add one class. Duplicates are dropped; order is first insertion.
    #[must_use]
    pub fn class(mut self, name: impl AsRef<str>) -> Self {
        let name = name.as_ref();
        if !self.classes.iter().any(|c| c == name) {
            self.classes.push(name.to_string());
        }
        self
    }

    /// Union in a list of classes.
    #[must_use]
    pub fn classes<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for name in names {
            self = self.class(name);
        }
        self
    }

    /// Set an attribute. Re-setting a name keeps its position.
    #[must_use]
    pub fn attr(mut self, name: impl Into<Cow<'static, str>>, value: impl Into<String>) -> Self {
        let name = name.into();
        let value = value.into();
        if let Some(slot) = self.attrs.iter_mut().find(|(n, _)| *n == name) {
            slot.1 = value;
        } else {
            self.attrs.push((name, value));
        }
        self
    }

    /// Set an attribute only when `value` is `Some`.
    #[must_use]
    pub fn attr_opt(
        self,
        name: impl Into<Cow<'static, str>>,
        value: Option<impl Into<String>>,
    ) -> Self {
        match value {
            Some(value) => self.attr(name, value),
            None => self,
        }
    }

    /// Set a boolean attribute (`disabled="disabled"` form).
    #[must_use]
    pub fn flag(self, name: &'static str) -> Self {
        self.attr(name, name)
    }

    /// Set a `data-*` attribute.
    #[must_use]
    pub fn data(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("data-{name}"), value)
    }

    /// Set an `aria-*` attribute.
    #[must_use]
    pub fn aria(self, name: &str, value: impl Into<String>) -> Self {
        self.attr(format!("aria-{name}"), value)
    }

    /// Append a child node.
    #[must_use]
    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Append a child only when present.
    #[must_use]
    pub fn child_opt(self, node: Option<impl Into<Node>>) -> Self {
        match node {
            Some(node) => self.child(node),
            None => self,
        }
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    /// Whether the element carries a class.
    #[must_use]
    pub fn has_class(&self, name: &str) -> bool {
        self.classes.iter().any(|c| c == name)
    }

    /// Classes in insertion order.
    #[must_use]
    pub fn class_list(&self) -> &[String] {
        &self.classes
    }

    /// The value of an attribute, if set.
    #[must_use]
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Attributes in insertion order.
    pub fn attrs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.attrs.iter().map(|(n, v)| (n.as_ref(), v.as_str()))
    }

    /// Child nodes in order.
    #[must_use]
    pub fn children(&self) -> &[Node] {
        &self.children
    }
}
