//! Assembly of the gallery page: theme CSS, component CSS, and every story
//! rendered under the selected scheme scopes.

use tracing::info;

use tactum_render::{render, Element, Node};
use tactum_style::{StyleSheet, ThemeRegistry};
use tactum_ui::register_all_styles;

use crate::stories::Story;

/// Which scheme wrappers each story renders under.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemeFilter {
    /// Light only.
    Light,
    /// Dark only.
    Dark,
    /// Side by side.
    Both,
}

impl SchemeFilter {
    /// Parse the `--theme` value. Unknown values fall back to `Both`.
    #[must_use]
    pub fn from_flag(flag: &str) -> Self {
        match flag {
            "light" => Self::Light,
            "dark" => Self::Dark,
            _ => Self::Both,
        }
    }

    fn schemes(self) -> &'static [&'static str] {
        match self {
            Self::Light => &["light"],
            Self::Dark => &["dark"],
            Self::Both => &["light", "dark"],
        }
    }
}

/// A complete, self-contained gallery document.
pub struct GalleryPage {
    registry: ThemeRegistry,
    sheet: StyleSheet,
    stories: Vec<Story>,
    filter: SchemeFilter,
}

impl GalleryPage {
    /// Build a page over the shipped theme setup.
    #[must_use]
    pub fn new(stories: Vec<Story>, filter: SchemeFilter) -> Self {
        let sheet = StyleSheet::new();
        register_all_styles(&sheet);
        Self {
            registry: ThemeRegistry::standard(),
            sheet,
            stories,
            filter,
        }
    }

    /// Keep only the named story. Returns `false` when no story matches.
    pub fn select(&mut self, name: &str) -> bool {
        self.stories.retain(|s| s.name == name);
        !self.stories.is_empty()
    }

    /// Story names in display order.
    #[must_use]
    pub fn story_names(&self) -> Vec<&'static str> {
        self.stories.iter().map(|s| s.name).collect()
    }

    /// Render the full document.
    #[must_use]
    pub fn to_html(&self) -> String {
        let mut body = Element::new("main").class("gallery");
        for story in &self.stories {
            let mut section = Element::new("section")
                .class("gallery-story")
                .attr("id", story.name)
                .child(Element::new("h2").text(story.name))
                .child(Element::new("p").text(story.description));
            for scheme in self.filter.schemes() {
                section = section.child(
                    Element::new("div")
                        .class("gallery-scheme")
                        .attr("data-theme", *scheme)
                        .child(story.node.clone()),
                );
            }
            body = body.child(section);
        }

        info!(stories = self.stories.len(), "gallery page assembled");

        let mut out = String::from("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
        out.push_str("<meta charset=\"utf-8\" />\n<title>Tactum Gallery</title>\n");
        out.push_str("<style>\n");
        out.push_str(&self.registry.to_css());
        out.push_str(&self.sheet.to_css());
        out.push_str(GALLERY_CHROME_CSS);
        out.push_str("</style>\n</head>\n<body class=\"tactum\">\n");
        out.push_str(&render(&Node::Element(body)));
        out.push_str("\n</body>\n</html>\n");
        out
    }
}

// Layout for the gallery chrome itself; fonts and colors come from the
// theme's scope-level base styles, since <body> carries the tactum class.
const GALLERY_CHROME_CSS: &str = "\
body { margin: 0; padding: 24px; }
.gallery { display: grid; gap: 24px; max-width: 720px; margin: 0 auto; }
.gallery-story { display: grid; gap: 8px; }
.gallery-scheme { background: var(--tctm-bg); border: 1px solid var(--tctm-border); \
border-radius: 12px; padding: 16px; }
.gallery-row { display: flex; gap: 8px; flex-wrap: wrap; align-items: center; }
";

#[cfg(test)]
mod tests {
    use super::*;
    use crate::stories;

    #[test]
    fn page_is_a_complete_document() {
        let page = GalleryPage::new(stories::all(), SchemeFilter::Both);
        let html = page.to_html();
        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.contains(":root {"));
        assert!(html.contains(".chip {"));
        assert!(html.ends_with("</html>\n"));
    }

    #[test]
    fn both_filter_renders_each_story_twice() {
        let page = GalleryPage::new(stories::all(), SchemeFilter::Both);
        let html = page.to_html();
        assert!(html.contains("data-theme=\"light\""));
        assert!(html.contains("data-theme=\"dark\""));

        let dark_only = GalleryPage::new(stories::all(), SchemeFilter::Dark).to_html();
        // The theme CSS still mentions the light selector; the markup must not.
        assert!(!dark_only.contains("class=\"gallery-scheme\" data-theme=\"light\""));
    }

    #[test]
    fn select_filters_to_one_story() {
        let mut page = GalleryPage::new(stories::all(), SchemeFilter::Light);
        assert!(page.select("chip-tones"));
        assert_eq!(page.story_names(), ["chip-tones"]);
        assert!(page.to_html().contains("id=\"chip-tones\""));
    }

    #[test]
    fn select_rejects_unknown_names() {
        let mut page = GalleryPage::new(stories::all(), SchemeFilter::Light);
        assert!(!page.select("no-such-story"));
    }

    #[test]
    fn scheme_filter_parses_flags() {
        assert_eq!(SchemeFilter::from_flag("light"), SchemeFilter::Light);
        assert_eq!(SchemeFilter::from_flag("dark"), SchemeFilter::Dark);
        assert_eq!(SchemeFilter::from_flag("both"), SchemeFilter::Both);
        assert_eq!(SchemeFilter::from_flag("???"), SchemeFilter::Both);
    }
}
