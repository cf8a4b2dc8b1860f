//! NFT card stories: the full card, its states, and the compact cut.

use tactum_render::{Element, Node};
use tactum_ui::{Chip, ChipColor, Component, Media, MediaState, Money, NftCard, StatefulComponent, Trait};

use super::Story;

fn full_card() -> NftCard {
    NftCard::new()
        .media(Media::image("https://example.com/punk.png").alt("Pixelated punk"))
        .title("Punk #7804")
        .owner("0x6b3A…9f21")
        .price(Money::formatted("42.69 ETH"))
        .floor(Money::formatted("38.10 ETH"))
        .badges(["Verified", "Top 10"])
        .traits([
            Trait::new("Type", "Alien"),
            Trait::new("Accessory", "Pipe"),
            Trait::new("Headwear", "Cap Forward"),
        ])
        .action_slot(Chip::new("Buy").color(ChipColor::Success).as_button(false).render())
}

fn render(card: NftCard, state: &mut MediaState) -> Node {
    Node::Element(card.render(state))
}

pub(super) fn stories() -> Vec<Story> {
    let mut fresh = MediaState::new();
    let mut failed = MediaState::new();
    failed.mark_failed();

    vec![
        Story::new(
            "nft-card-full",
            "Every row populated, with a buy action.",
            render(full_card(), &mut fresh),
        ),
        Story::new(
            "nft-card-loading",
            "The skeleton shown while data is in flight.",
            render(full_card().loading(true), &mut MediaState::new()),
        ),
        Story::new(
            "nft-card-media-failed",
            "The one-way fallback after the image errors.",
            render(full_card(), &mut failed),
        ),
        Story::new(
            "nft-card-compact",
            "Compact cut: owner, floor, badges, and traits trimmed.",
            render(full_card().compact(true), &mut MediaState::new()),
        ),
        Story::new(
            "nft-card-video",
            "A muted video source in place of the image.",
            render(
                full_card().media(Media::video("https://example.com/punk.mp4")),
                &mut MediaState::new(),
            ),
        ),
        Story::new(
            "nft-card-empty",
            "No data at all: placeholders everywhere.",
            render(NftCard::new(), &mut MediaState::new()),
        ),
        Story::new(
            "nft-card-footer",
            "A free-form footer slot below the actions row.",
            render(
                full_card().footer_slot(
                    Element::new("small").text("Last sale 40.00 ETH"),
                ),
                &mut MediaState::new(),
            ),
        ),
    ]
}
