//! NFT card: a display-only card for a token's media and market facts.
//!
//! Pure presentation; callers fetch and format everything. Layout reserves
//! space up front (square media box, fixed-height rows) so late-arriving
//! data never shifts the page.

use std::fmt;

use tactum_render::{Element, Node};

use crate::StatefulComponent;

/// What the media box should show.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MediaKind {
    /// Try an image; a load failure flips to the fallback.
    #[default]
    Auto,
    /// Always an image.
    Image,
    /// A muted, metadata-preloaded video. Load failures are not tracked.
    Video,
}

/// A media source for the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Media {
    /// Source URL.
    pub src: String,
    /// Alternative text; falls back to the card title.
    pub alt: Option<String>,
    /// How to present the source.
    pub kind: MediaKind,
}

impl Media {
    /// An image (or auto-detected) source.
    #[must_use]
    pub fn image(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
            kind: MediaKind::Auto,
        }
    }

    /// A video source.
    #[must_use]
    pub fn video(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
            kind: MediaKind::Video,
        }
    }

    /// Set the alternative text.
    #[must_use]
    pub fn alt(mut self, alt: impl Into<String>) -> Self {
        self.alt = Some(alt.into());
        self
    }
}

/// A pre-formatted money amount (`"1.24 ETH"`). No arithmetic happens here.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Money {
    /// Display text, already localized and unit-suffixed by the caller.
    pub formatted: Option<String>,
    /// Optional fiat equivalent, carried for consumers that show both.
    pub fiat: Option<Fiat>,
}

/// A fiat equivalent for a [`Money`] amount.
#[derive(Debug, Clone, PartialEq)]
pub struct Fiat {
    /// Numeric value.
    pub value: f64,
    /// ISO currency code.
    pub currency: String,
}

impl Money {
    /// A formatted amount.
    #[must_use]
    pub fn formatted(text: impl Into<String>) -> Self {
        Self {
            formatted: Some(text.into()),
            fiat: None,
        }
    }
}

/// One trait row (`label: value`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trait {
    /// Trait name.
    pub label: String,
    /// Trait value, pre-stringified.
    pub value: String,
}

impl Trait {
    /// Build a trait row.
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
        }
    }
}

/// Media load tracking for one rendered card.
///
/// The transition is one-directional: once failed, a card never returns to
/// the image presentation (matching how image loads actually behave). The
/// host environment calls [`NftCard::notify_media_error`] when its image
/// element errors.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MediaState {
    failed: bool,
}

impl MediaState {
    /// Fresh state: nothing failed yet.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the media failed to load.
    #[must_use]
    pub fn failed(&self) -> bool {
        self.failed
    }

    /// Record a failure. Returns `true` only on the first transition.
    pub fn mark_failed(&mut self) -> bool {
        !std::mem::replace(&mut self.failed, true)
    }
}

type MediaErrorHandler = Box<dyn Fn() + Send + Sync>;

/// The card itself. Build with setters, render via [`StatefulComponent`].
#[derive(Default)]
pub struct NftCard {
    media: Option<Media>,
    title: Option<String>,
    owner: Option<String>,
    price: Option<Money>,
    floor: Option<Money>,
    traits: Vec<Trait>,
    badges: Vec<String>,
    compact: bool,
    loading: bool,
    errored: bool,
    on_media_error: Option<MediaErrorHandler>,
    action_slot: Option<Node>,
    footer_slot: Option<Node>,
    extra_classes: Vec<String>,
}

impl fmt::Debug for NftCard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NftCard")
            .field("media", &self.media)
            .field("title", &self.title)
            .field("owner", &self.owner)
            .field("compact", &self.compact)
            .field("loading", &self.loading)
            .field("errored", &self.errored)
            .finish_non_exhaustive()
    }
}

const BADGE_LIMIT: usize = 3;
const TRAIT_LIMIT: usize = 4;
const PLACEHOLDER: &str = "\u{2014}";

impl NftCard {
    /// An empty card. Every row renders a placeholder until data arrives.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media source.
    #[must_use]
    pub fn media(mut self, media: Media) -> Self {
        self.media = Some(media);
        self
    }

    /// Set the title.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the owner line.
    #[must_use]
    pub fn owner(mut self, owner: impl Into<String>) -> Self {
        self.owner = Some(owner.into());
        self
    }

    /// Set the current price (or last sale).
    #[must_use]
    pub fn price(mut self, price: Money) -> Self {
        self.price = Some(price);
        self
    }

    /// Set the collection floor.
    #[must_use]
    pub fn floor(mut self, floor: Money) -> Self {
        self.floor = Some(floor);
        self
    }

    /// Set the trait rows. Only the first four render.
    #[must_use]
    pub fn traits(mut self, traits: impl IntoIterator<Item = Trait>) -> Self {
        self.traits = traits.into_iter().collect();
        self
    }

    /// Set the badge labels. Only the first three render.
    #[must_use]
    pub fn badges<I, S>(mut self, badges: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.badges = badges.into_iter().map(Into::into).collect();
        self
    }

    /// Trim secondary rows (owner, badges, traits, floor).
    #[must_use]
    pub fn compact(mut self, compact: bool) -> Self {
        self.compact = compact;
        self
    }

    /// Show the skeleton instead of content.
    #[must_use]
    pub fn loading(mut self, loading: bool) -> Self {
        self.loading = loading;
        self
    }

    /// Force the media fallback regardless of load state.
    #[must_use]
    pub fn errored(mut self, errored: bool) -> Self {
        self.errored = errored;
        self
    }

    /// Register a callback fired once when the media first fails.
    #[must_use]
    pub fn on_media_error(mut self, handler: impl Fn() + Send + Sync + 'static) -> Self {
        self.on_media_error = Some(Box::new(handler));
        self
    }

    /// Content for the actions row (buy, list, transfer).
    #[must_use]
    pub fn action_slot(mut self, node: impl Into<Node>) -> Self {
        self.action_slot = Some(node.into());
        self
    }

    /// Free-form content after the actions row.
    #[must_use]
    pub fn footer_slot(mut self, node: impl Into<Node>) -> Self {
        self.footer_slot = Some(node.into());
        self
    }

    /// Merge an extra class onto the root element.
    #[must_use]
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.extra_classes.push(name.into());
        self
    }

    /// Report a media load failure from the host environment.
    ///
    /// Flips the state to failed and, on the first transition only, invokes
    /// the registered callback. Subsequent reports are ignored.
    pub fn notify_media_error(&self, state: &mut MediaState) {
        if state.mark_failed() {
            if let Some(handler) = &self.on_media_error {
                handler();
            }
        }
    }

    fn has_media_error(&self, state: &MediaState) -> bool {
        let video = self
            .media
            .as_ref()
            .is_some_and(|m| m.kind == MediaKind::Video);
        self.errored || (!video && state.failed())
    }

    fn media_box(&self, state: &MediaState) -> Element {
        let el = Element::new("div").class("nft-media").aria("label", "Media");
        let Some(media) = self.media.as_ref().filter(|m| !m.src.is_empty()) else {
            return el.child(Self::fallback());
        };
        if self.has_media_error(state) {
            return el.child(Self::fallback());
        }
        let label = media
            .alt
            .clone()
            .or_else(|| self.title.clone());
        match media.kind {
            MediaKind::Video => el.child(
                Element::new("video")
                    .class("nft-video")
                    .attr("src", media.src.clone())
                    .flag("muted")
                    .flag("playsinline")
                    .attr("preload", "metadata")
                    .aria("label", label.unwrap_or_else(|| "NFT video".to_string())),
            ),
            MediaKind::Image | MediaKind::Auto => el.child(
                Element::new("img")
                    .class("nft-img")
                    .attr("src", media.src.clone())
                    .attr("alt", label.unwrap_or_else(|| "NFT image".to_string()))
                    .attr("loading", "lazy")
                    .attr("decoding", "async"),
            ),
        }
    }

    fn fallback() -> Element {
        Element::new("div")
            .class("nft-media-fallback")
            .attr("role", "img")
            .aria("label", "Media unavailable")
            .text("Media unavailable")
    }

    fn skeleton(&self) -> Element {
        let bar = |class: &str| Element::new("div").class("skel").class(class).aria("hidden", "true");
        Element::new("section")
            .class("nft-card")
            .classes(&self.extra_classes)
            .aria("busy", "true")
            .aria("live", "polite")
            .child(
                Element::new("div")
                    .class("nft-media")
                    .child(bar("skel-media")),
            )
            .child(
                Element::new("div")
                    .class("nft-header")
                    .child(bar("skel-line-wide"))
                    .child(bar("skel-line")),
            )
            .child(
                Element::new("div")
                    .class("nft-price-row")
                    .child(bar("skel-line"))
                    .child(bar("skel-line")),
            )
            .child(
                Element::new("div")
                    .class("nft-traits")
                    .child(bar("skel-chip"))
                    .child(bar("skel-chip"))
                    .child(bar("skel-chip")),
            )
            .child(Element::new("div").class("nft-actions").child(bar("skel-chip")))
    }

    fn header(&self) -> Element {
        let title = self.title.clone().unwrap_or_else(|| PLACEHOLDER.to_string());
        let mut header = Element::new("div").class("nft-header").child(
            Element::new("div")
                .class("nft-title")
                .attr_opt("title", self.title.clone())
                .text(title),
        );
        if !self.compact && !self.badges.is_empty() {
            let mut row = Element::new("div").class("nft-badges").aria("label", "Badges");
            for badge in self.badges.iter().take(BADGE_LIMIT) {
                row = row.child(Element::new("span").class("nft-badge").text(badge.clone()));
            }
            header = header.child(row);
        }
        header
    }

    fn price_row(&self) -> Element {
        let price = self
            .price
            .as_ref()
            .and_then(|m| m.formatted.clone())
            .unwrap_or_else(|| PLACEHOLDER.to_string());
        let mut row = Element::new("div").class("nft-price-row").child(
            Element::new("div")
                .class("nft-price")
                .aria("label", "Price")
                .text(price),
        );
        if !self.compact {
            if let Some(floor) = self.floor.as_ref().and_then(|m| m.formatted.clone()) {
                row = row.child(
                    Element::new("div")
                        .class("nft-floor")
                        .aria("label", "Floor")
                        .text(format!("Floor {floor}")),
                );
            }
        }
        row
    }
}

impl StatefulComponent for NftCard {
    type State = MediaState;

    fn render(&self, state: &mut MediaState) -> Element {
        if self.loading {
            return self.skeleton();
        }

        let mut card = Element::new("section")
            .class("nft-card")
            .classes(&self.extra_classes)
            .attr("role", "region")
            .aria(
                "label",
                self.title.clone().unwrap_or_else(|| "NFT".to_string()),
            )
            .child(self.media_box(state))
            .child(self.header());

        if !self.compact {
            card = card.child(
                Element::new("div")
                    .class("nft-owner")
                    .attr_opt("title", self.owner.clone())
                    .aria("label", "Owner")
                    .text(self.owner.clone().unwrap_or_else(|| PLACEHOLDER.to_string())),
            );
        }

        card = card.child(self.price_row());

        if !self.compact && !self.traits.is_empty() {
            let mut row = Element::new("div").class("nft-traits").aria("label", "Traits");
            for t in self.traits.iter().take(TRAIT_LIMIT) {
                row = row.child(
                    Element::new("span")
                        .class("nft-trait")
                        .text(format!("{}: {}", t.label, t.value)),
                );
            }
            card = card.child(row);
        }

        card = card.child(
            Element::new("div")
                .class("nft-actions")
                .aria("label", "Actions")
                .child_opt(self.action_slot.clone()),
        );
        card.child_opt(self.footer_slot.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    fn find_class<'a>(el: &'a Element, class: &str) -> Option<&'a Element> {
        if el.has_class(class) {
            return Some(el);
        }
        el.children().iter().find_map(|n| match n {
            Node::Element(e) => find_class(e, class),
            Node::Text(_) => None,
        })
    }

    #[test]
    fn loading_renders_only_the_skeleton() {
        let card = NftCard::new()
            .title("Cool Cat #1")
            .media(Media::image("/cat.png"))
            .loading(true);
        let el = card.render(&mut MediaState::new());
        assert_eq!(el.get_attr("aria-busy"), Some("true"));
        assert_eq!(el.get_attr("aria-live"), Some("polite"));
        assert!(find_class(&el, "skel-media").is_some());
        assert!(find_class(&el, "nft-title").is_none());
        assert!(find_class(&el, "nft-img").is_none());
    }

    #[test]
    fn renders_image_media_with_lazy_loading() {
        let card = NftCard::new()
            .title("Cool Cat #1")
            .media(Media::image("/cat.png"));
        let el = card.render(&mut MediaState::new());
        let img = find_class(&el, "nft-img").unwrap();
        assert_eq!(img.get_attr("src"), Some("/cat.png"));
        assert_eq!(img.get_attr("alt"), Some("Cool Cat #1"));
        assert_eq!(img.get_attr("loading"), Some("lazy"));
    }

    #[test]
    fn missing_media_shows_the_fallback() {
        let el = NftCard::new().render(&mut MediaState::new());
        let fallback = find_class(&el, "nft-media-fallback").unwrap();
        assert_eq!(fallback.get_attr("role"), Some("img"));
        assert_eq!(fallback.get_attr("aria-label"), Some("Media unavailable"));
    }

    #[test]
    fn media_failure_is_one_directional() {
        let card = NftCard::new().media(Media::image("/cat.png"));
        let mut state = MediaState::new();
        assert!(find_class(&card.render(&mut state), "nft-img").is_some());

        card.notify_media_error(&mut state);
        assert!(find_class(&card.render(&mut state), "nft-media-fallback").is_some());

        // Reporting again never reverts and keeps showing the fallback.
        card.notify_media_error(&mut state);
        assert!(find_class(&card.render(&mut state), "nft-media-fallback").is_some());
        assert!(find_class(&card.render(&mut state), "nft-img").is_none());
    }

    #[test]
    fn media_error_callback_fires_exactly_once() {
        let calls = Arc::new(AtomicUsize::new(0));
        let seen = Arc::clone(&calls);
        let card = NftCard::new()
            .media(Media::image("/cat.png"))
            .on_media_error(move || {
                seen.fetch_add(1, Ordering::SeqCst);
            });
        let mut state = MediaState::new();
        card.notify_media_error(&mut state);
        card.notify_media_error(&mut state);
        card.notify_media_error(&mut state);
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn video_media_ignores_image_failures() {
        let card = NftCard::new().media(Media::video("/clip.mp4"));
        let mut state = MediaState::new();
        state.mark_failed();
        let el = card.render(&mut state);
        let video = find_class(&el, "nft-video").unwrap();
        assert_eq!(video.get_attr("muted"), Some("muted"));
        assert_eq!(video.get_attr("preload"), Some("metadata"));
    }

    #[test]
    fn errored_forces_the_fallback() {
        let card = NftCard::new().media(Media::image("/cat.png")).errored(true);
        let el = card.render(&mut MediaState::new());
        assert!(find_class(&el, "nft-media-fallback").is_some());
    }

    #[test]
    fn badges_and_traits_are_limited() {
        let card = NftCard::new()
            .badges(["a", "b", "c", "d", "e"])
            .traits((0..6).map(|i| Trait::new(format!("t{i}"), i.to_string())));
        let el = card.render(&mut MediaState::new());
        let badges = find_class(&el, "nft-badges").unwrap();
        assert_eq!(badges.children().len(), BADGE_LIMIT);
        let traits = find_class(&el, "nft-traits").unwrap();
        assert_eq!(traits.children().len(), TRAIT_LIMIT);
    }

    #[test]
    fn compact_hides_secondary_rows() {
        let card = NftCard::new()
            .owner("0xabc")
            .floor(Money::formatted("0.9 ETH"))
            .badges(["verified"])
            .traits([Trait::new("Fur", "Gold")])
            .compact(true);
        let el = card.render(&mut MediaState::new());
        assert!(find_class(&el, "nft-owner").is_none());
        assert!(find_class(&el, "nft-floor").is_none());
        assert!(find_class(&el, "nft-badges").is_none());
        assert!(find_class(&el, "nft-trait").is_none());
    }

    #[test]
    fn missing_fields_render_placeholders() {
        let el = NftCard::new().render(&mut MediaState::new());
        let title = find_class(&el, "nft-title").unwrap();
        assert!(matches!(&title.children()[0], Node::Text(t) if t == PLACEHOLDER));
        let price = find_class(&el, "nft-price").unwrap();
        assert!(matches!(&price.children()[0], Node::Text(t) if t == PLACEHOLDER));
    }

    #[test]
    fn slots_render_in_place() {
        let el = NftCard::new()
            .action_slot(Element::new("button").text("Buy"))
            .footer_slot(Element::new("div").class("footer").text("fine print"))
            .render(&mut MediaState::new());
        let actions = find_class(&el, "nft-actions").unwrap();
        assert_eq!(actions.children().len(), 1);
        assert!(find_class(&el, "footer").is_some());
    }

    #[test]
    fn region_label_falls_back() {
        let el = NftCard::new().render(&mut MediaState::new());
        assert_eq!(el.get_attr("aria-label"), Some("NFT"));
        let titled = NftCard::new().title("Punk").render(&mut MediaState::new());
        assert_eq!(titled.get_attr("aria-label"), Some("Punk"));
    }
}
