//! Chip: a themeable status pill.
//!
//! The chip is polymorphic over its host element: a plain `span` for pure
//! status, a `button` for actions, an `a` for navigation. The host is a
//! tagged sum, so a destination only exists on the anchor case and a native
//! disabled flag only on the button case; rendering dispatches with one
//! exhaustive match.
//!
//! Presentation comes entirely from the variant tables: a (color, size)
//! lookup yields class names registered in the shared stylesheet, and tone
//! colors resolve through theme variables, so the same chip adapts to light
//! and dark without any branching here.

use std::sync::OnceLock;

use ahash::AHashMap;
use smallvec::SmallVec;

use tactum_render::{Element, Node};
use tactum_style::StyleId;

use crate::Component;

/// Visual color role of the chip.
///
/// `Error` maps to the theme's `danger` tokens; the role keeps the name
/// callers use in UI copy.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChipColor {
    /// Positive status.
    Success,
    /// Failure status.
    Error,
    /// Cautionary status.
    Warning,
    /// Informational or inactive status.
    #[default]
    Neutral,
}

impl ChipColor {
    /// Every role, for totality checks and table construction.
    pub const ALL: [Self; 4] = [Self::Success, Self::Error, Self::Warning, Self::Neutral];

    /// The value written into the `data-color` marker.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Warning => "warning",
            Self::Neutral => "neutral",
        }
    }
}

/// Compactness of the chip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum ChipSize {
    /// Tuned for dense tables.
    Sm,
    /// General-purpose.
    #[default]
    Md,
}

impl ChipSize {
    /// Every size, for totality checks and table construction.
    pub const ALL: [Self; 2] = [Self::Sm, Self::Md];
}

/// Placement of the optional icon relative to the label.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum IconPosition {
    /// Before the label.
    #[default]
    Start,
    /// After the label.
    End,
}

/// ARIA live politeness for chips whose text changes after first render.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AriaLive {
    /// No live region (the default; emits no attribute).
    #[default]
    Off,
    /// Announce at the next graceful opportunity.
    Polite,
    /// Announce immediately.
    Assertive,
}

impl AriaLive {
    #[must_use]
    const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Polite => "polite",
            Self::Assertive => "assertive",
        }
    }
}

/// The element a chip renders as.
///
/// Each case carries only the fields valid for that host: a span has
/// neither a destination nor a disabled flag, a button cannot have a
/// destination, an anchor cannot be natively disabled.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum ChipHost {
    /// Non-interactive container (the default).
    #[default]
    Span,
    /// Actionable control.
    Button {
        /// Native disabled state.
        disabled: bool,
    },
    /// Navigational link.
    Anchor {
        /// Destination URL.
        href: String,
    },
}

/// Precomputed variant tables for the chip.
///
/// Both tables are total over their enum by construction; a lookup can
/// never miss. Composition of the two dimensions is a set union of the
/// looked-up class names, so adding a size never duplicates tone rules.
#[derive(Debug)]
pub struct ChipVariants {
    tones: AHashMap<ChipColor, StyleId>,
    sizes: AHashMap<ChipSize, StyleId>,
}

impl ChipVariants {
    /// Build the shipped tables.
    #[must_use]
    pub fn standard() -> Self {
        let mut tones = AHashMap::with_capacity(ChipColor::ALL.len());
        for color in ChipColor::ALL {
            tones.insert(color, StyleId::new(format!("chip-{}", color.as_str())));
        }
        let mut sizes = AHashMap::with_capacity(ChipSize::ALL.len());
        sizes.insert(ChipSize::Sm, StyleId::from("chip-sm"));
        sizes.insert(ChipSize::Md, StyleId::from("chip-md"));
        Self { tones, sizes }
    }

    /// The process-wide tables, built on first use.
    #[must_use]
    pub fn shared() -> &'static Self {
        static SHARED: OnceLock<ChipVariants> = OnceLock::new();
        SHARED.get_or_init(Self::standard)
    }

    /// The tone class for a color role.
    #[must_use]
    pub fn tone(&self, color: ChipColor) -> &StyleId {
        self.tones.get(&color).expect("tone table is total")
    }

    /// The size class for a size.
    #[must_use]
    pub fn size(&self, size: ChipSize) -> &StyleId {
        self.sizes.get(&size).expect("size table is total")
    }

    /// The class set for a (color, size) pair.
    #[must_use]
    pub fn classes(&self, color: ChipColor, size: ChipSize) -> SmallVec<[StyleId; 2]> {
        let mut out = SmallVec::new();
        out.push(self.tone(color).clone());
        out.push(self.size(size).clone());
        out
    }

    /// The overlay tint class used by the shiny highlight.
    #[must_use]
    pub fn overlay_tone(&self, color: ChipColor) -> StyleId {
        StyleId::new(format!("chip-overlay-{}", color.as_str()))
    }
}

/// A status pill.
#[derive(Debug, Clone, Default)]
pub struct Chip {
    text: String,
    color: ChipColor,
    size: ChipSize,
    icon: Option<Node>,
    icon_position: IconPosition,
    truncate: bool,
    shiny: bool,
    aria_live: AriaLive,
    title: Option<String>,
    host: ChipHost,
    // Caller-supplied pass-through attributes, forwarded verbatim.
    attrs: Vec<(String, String)>,
    extra_classes: Vec<String>,
}

impl Chip {
    /// Create a neutral, medium, span-hosted chip with the given label.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Self::default()
        }
    }

    /// Set the color role.
    #[must_use]
    pub fn color(mut self, color: ChipColor) -> Self {
        self.color = color;
        self
    }

    /// Set the size.
    #[must_use]
    pub fn size(mut self, size: ChipSize) -> Self {
        self.size = size;
        self
    }

    /// Attach a decorative icon. Always hidden from assistive technology;
    /// meaning the icon conveys belongs in the label or `title`.
    #[must_use]
    pub fn icon(mut self, icon: impl Into<Node>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Place the icon before or after the label.
    #[must_use]
    pub fn icon_position(mut self, position: IconPosition) -> Self {
        self.icon_position = position;
        self
    }

    /// Ellipsize the label on overflow. Pair with [`title`](Chip::title)
    /// so the full value stays reachable.
    #[must_use]
    pub fn truncate(mut self, truncate: bool) -> Self {
        self.truncate = truncate;
        self
    }

    /// Enable the static highlight overlay. Purely visual.
    #[must_use]
    pub fn shiny(mut self, shiny: bool) -> Self {
        self.shiny = shiny;
        self
    }

    /// Set live-region politeness for chips whose text changes.
    #[must_use]
    pub fn aria_live(mut self, live: AriaLive) -> Self {
        self.aria_live = live;
        self
    }

    /// Native tooltip text.
    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Choose the host element explicitly.
    #[must_use]
    pub fn host(mut self, host: ChipHost) -> Self {
        self.host = host;
        self
    }

    /// Render as a `button`.
    #[must_use]
    pub fn as_button(self, disabled: bool) -> Self {
        self.host(ChipHost::Button { disabled })
    }

    /// Render as an `a` with the given destination.
    #[must_use]
    pub fn as_anchor(self, href: impl Into<String>) -> Self {
        self.host(ChipHost::Anchor { href: href.into() })
    }

    /// Forward an arbitrary attribute to the host element unmodified.
    #[must_use]
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.push((name.into(), value.into()));
        self
    }

    /// Merge an extra class onto the host element.
    #[must_use]
    pub fn class(mut self, name: impl Into<String>) -> Self {
        self.extra_classes.push(name.into());
        self
    }

    fn passthrough(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .rev()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    fn is_interactive(&self) -> bool {
        match &self.host {
            ChipHost::Span => false,
            ChipHost::Button { disabled } => !disabled,
            ChipHost::Anchor { .. } => self.passthrough("aria-disabled") != Some("true"),
        }
    }

    fn slot(icon: &Node) -> Element {
        Element::new("span")
            .class("chip-icon")
            .aria("hidden", "true")
            .child(icon.clone())
    }
}

impl Component for Chip {
    fn render(&self) -> Element {
        let variants = ChipVariants::shared();
        let interactive = self.is_interactive();

        let mut el = match &self.host {
            ChipHost::Span => Element::new("span"),
            ChipHost::Button { disabled } => {
                let mut el = Element::new("button");
                // Never submit forms by accident; callers may still pass
                // an explicit type through.
                el = el.attr("type", self.passthrough("type").unwrap_or("button"));
                if *disabled {
                    el = el.flag("disabled");
                }
                el
            }
            ChipHost::Anchor { href } => Element::new("a").attr("href", href.clone()),
        };

        el = el
            .class("chip")
            .classes(variants.classes(self.color, self.size))
            .classes(&self.extra_classes);
        if self.shiny {
            el = el.class("chip-shiny");
        }

        for (name, value) in &self.attrs {
            // `type` on buttons was already merged above.
            if matches!(self.host, ChipHost::Button { .. }) && name == "type" {
                continue;
            }
            el = el.attr(name.clone(), value.clone());
        }

        el = el.data("color", self.color.as_str());
        if interactive {
            el = el.data("interactive", "true");
        }
        if self.truncate {
            el = el.data("truncate", "true");
        }
        el = el.attr_opt("title", self.title.clone());
        if self.aria_live != AriaLive::Off {
            el = el.aria("live", self.aria_live.as_str());
        }

        if let (Some(icon), IconPosition::Start) = (&self.icon, self.icon_position) {
            el = el.child(Self::slot(icon));
        }
        el = el.child(Element::new("span").class("chip-text").text(self.text.clone()));
        if let (Some(icon), IconPosition::End) = (&self.icon, self.icon_position) {
            el = el.child(Self::slot(icon));
        }

        if self.shiny {
            // Inert presentation layer; pointer events are disabled in its
            // rule and it carries no semantics.
            el = el.child(
                Element::new("span")
                    .class("chip-overlay")
                    .class(variants.overlay_tone(self.color))
                    .aria("hidden", "true"),
            );
        }

        el
    }
}
