//! Serialization of the markup tree to HTML text.

use crate::element::{Element, Node};

// Elements that never take children and close with `/>`.
const VOID_TAGS: &[&str] = &["img", "input", "br", "hr", "source"];

/// Serialize a node to HTML.
///
/// Text and attribute values are escaped; class lists join with single
/// spaces in insertion order. Output carries no insignificant whitespace,
/// so trees compare byte-for-byte in tests.
#[must_use]
pub fn render(node: &Node) -> String {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("render");
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let mut out = String::new();
    write_node(&mut out, node);

    #[cfg(feature = "tracing")]
    tracing::trace!(bytes = out.len(), "markup serialized");
    out
}

/// Serialize an element to HTML.
#[must_use]
pub fn render_element(element: &Element) -> String {
    #[cfg(feature = "tracing")]
    let _span = tracing::trace_span!("render_element", tag = element.tag());
    #[cfg(feature = "tracing")]
    let _guard = _span.enter();

    let mut out = String::new();
    write_element(&mut out, element);

    #[cfg(feature = "tracing")]
    tracing::trace!(bytes = out.len(), "markup serialized");
    out
}

fn write_node(out: &mut String, node: &Node) {
    match node {
        Node::Element(element) => write_element(out, element),
        Node::Text(text) => out.push_str(&escape_text(text)),
    }
}

fn write_element(out: &mut String, element: &Element) {
    out.push('<');
    out.push_str(element.tag());
    if !element.class_list().is_empty() {
        out.push_str(" class=\"");
        out.push_str(&escape_attr(&element.class_list().join(" ")));
        out.push('"');
    }
    for (name, value) in element.attrs() {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attr(value));
        out.push('"');
    }
    if VOID_TAGS.contains(&element.tag()) {
        out.push_str(" />");
        return;
    }
    out.push('>');
    for child in element.children() {
        write_node(out, child);
    }
    out.push_str("</");
    out.push_str(element.tag());
    out.push('>');
}

/// Escape a text run for element content.
#[must_use]
pub fn escape_text(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape a value for a double-quoted attribute.
#[must_use]
pub fn escape_attr(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn renders_tag_classes_attrs_children() {
        let el = Element::new("span")
            .classes(["chip", "chip-success"])
            .data("color", "success")
            .text("Minted");
        assert_eq!(
            render_element(&el),
            "<span class=\"chip chip-success\" data-color=\"success\">Minted</span>"
        );
    }

    #[test]
    fn void_elements_self_close() {
        let el = Element::new("img").attr("src", "/a.png").attr("alt", "");
        assert_eq!(render_element(&el), "<img src=\"/a.png\" alt=\"\" />");
    }

    #[test]
    fn text_is_escaped() {
        assert_eq!(render(&Node::Text("<b> & co".to_string())), "&lt;b&gt; &amp; co");
    }

    #[test]
    fn attr_values_are_escaped() {
        let el = Element::new("a").attr("href", "/q?a=1&b=\"2\"");
        assert_eq!(
            render_element(&el),
            "<a href=\"/q?a=1&amp;b=&quot;2&quot;\"></a>"
        );
    }

    #[test]
    fn nested_children_render_in_order() {
        let el = Element::new("div")
            .class("card")
            .child(Element::new("span").text("a"))
            .child(Element::new("span").text("b"));
        assert_eq!(
            render_element(&el),
            "<div class=\"card\"><span>a</span><span>b</span></div>"
        );
    }

    #[test]
    fn element_without_classes_omits_the_attribute() {
        assert_eq!(render_element(&Element::new("div")), "<div></div>");
    }

    // Output must not change when span instrumentation is compiled in.
    #[cfg(feature = "tracing")]
    #[test]
    fn instrumented_render_output_is_unchanged() {
        let el = Element::new("span").class("chip").text("ok");
        assert_eq!(render_element(&el), "<span class=\"chip\">ok</span>");
        assert_eq!(render(&Node::Element(el)), "<span class=\"chip\">ok</span>");
    }

    proptest! {
        #[test]
        fn escaped_text_never_contains_raw_markup(text in ".{0,64}") {
            let escaped = escape_text(&text);
            prop_assert!(!escaped.contains('<'));
            prop_assert!(!escaped.contains('>'));
        }

        #[test]
        fn escaped_attr_never_breaks_quoting(value in ".{0,64}") {
            prop_assert!(!escape_attr(&value).contains('"'));
        }
    }
}
