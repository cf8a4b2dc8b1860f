//! Example card: a minimal framed region used by demos and smoke tests.

use tactum_render::{Element, Node};

use crate::Component;

/// A titled, token-styled card with free-form body content.
#[derive(Debug, Clone)]
pub struct ExampleCard {
    title: String,
    body: Option<Node>,
}

impl Default for ExampleCard {
    fn default() -> Self {
        Self {
            title: "Tactum".to_string(),
            body: None,
        }
    }
}

impl ExampleCard {
    /// A card with the default title.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the header title, also used as the region label.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the body content.
    #[must_use]
    pub fn body(mut self, body: impl Into<Node>) -> Self {
        self.body = Some(body.into());
        self
    }
}

impl Component for ExampleCard {
    fn render(&self) -> Element {
        let body = self
            .body
            .clone()
            .unwrap_or_else(|| Node::Text("Hello from Tactum".to_string()));
        Element::new("section")
            .class("example-card")
            .attr("role", "region")
            .aria("label", self.title.clone())
            .child(
                Element::new("header")
                    .class("example-card-header")
                    .text(self.title.clone()),
            )
            .child(Element::new("div").child(body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_region_with_title_label() {
        let el = ExampleCard::new().title("Wallet").render();
        assert_eq!(el.tag(), "section");
        assert_eq!(el.get_attr("role"), Some("region"));
        assert_eq!(el.get_attr("aria-label"), Some("Wallet"));
    }

    #[test]
    fn default_body_is_the_greeting() {
        let el = ExampleCard::new().render();
        let Node::Element(body) = &el.children()[1] else {
            panic!("expected body wrapper");
        };
        assert!(matches!(&body.children()[0], Node::Text(t) if t == "Hello from Tactum"));
    }

    #[test]
    fn custom_body_replaces_the_greeting() {
        let el = ExampleCard::new()
            .body(Element::new("p").text("balance: 3 ETH"))
            .render();
        let Node::Element(body) = &el.children()[1] else {
            panic!("expected body wrapper");
        };
        assert!(matches!(&body.children()[0], Node::Element(p) if p.tag() == "p"));
    }
}
