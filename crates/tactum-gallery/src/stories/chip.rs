//! Chip stories: tones, sizes, hosts, and the shiny overlay.

use tactum_render::Element;
use tactum_ui::{AriaLive, Chip, ChipColor, ChipSize, Component, IconPosition};

use super::Story;

fn row(chips: impl IntoIterator<Item = Chip>) -> Element {
    let mut row = Element::new("div").class("gallery-row");
    for chip in chips {
        row = row.child(chip.render());
    }
    row
}

pub(super) fn stories() -> Vec<Story> {
    vec![
        Story::new(
            "chip-tones",
            "All four color roles at the default size.",
            row([
                Chip::new("Success").color(ChipColor::Success),
                Chip::new("Failed").color(ChipColor::Error),
                Chip::new("Pending").color(ChipColor::Warning),
                Chip::new("Archived"),
            ]),
        ),
        Story::new(
            "chip-sizes",
            "Small chips for dense tables next to the medium default.",
            row([
                Chip::new("sm").size(ChipSize::Sm),
                Chip::new("md").size(ChipSize::Md),
            ]),
        ),
        Story::new(
            "chip-icons",
            "Decorative icons at the start and end slots.",
            row([
                Chip::new("Verified").color(ChipColor::Success).icon("\u{2713}"),
                Chip::new("Outbound")
                    .icon("\u{2192}")
                    .icon_position(IconPosition::End),
            ]),
        ),
        Story::new(
            "chip-shiny",
            "The static highlight overlay on each tone.",
            row(ChipColor::ALL.map(|c| Chip::new(c.as_str()).color(c).shiny(true))),
        ),
        Story::new(
            "chip-button",
            "Actionable chips, enabled and natively disabled.",
            row([
                Chip::new("Filter").as_button(false),
                Chip::new("Unavailable").as_button(true),
            ]),
        ),
        Story::new(
            "chip-anchor",
            "Link chips, including one disabled through aria-disabled.",
            row([
                Chip::new("View tx")
                    .color(ChipColor::Success)
                    .as_anchor("https://example.com/tx/0xabc"),
                Chip::new("No link")
                    .as_anchor("#")
                    .attr("aria-disabled", "true"),
            ]),
        ),
        Story::new(
            "chip-nested-scopes",
            "Nearest theme attribute wins: a light island inside a dark region.",
            Element::new("div")
                .class("gallery-row")
                .attr("data-theme", "dark")
                .child(Chip::new("Dark context").color(ChipColor::Success).render())
                .child(
                    Element::new("div")
                        .attr("data-theme", "light")
                        .child(Chip::new("Light island").color(ChipColor::Success).render()),
                ),
        ),
        Story::new(
            "chip-live",
            "A polite live region for status text that changes in place.",
            row([Chip::new("Pending")
                .color(ChipColor::Warning)
                .aria_live(AriaLive::Polite)
                .truncate(true)
                .title("Pending confirmation")]),
        ),
    ]
}
