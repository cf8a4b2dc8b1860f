#![forbid(unsafe_code)]

//! Tactum components: Chip, NFT card, and the example card.
//!
//! Components are leaf consumers of the theme layer: they look up class
//! names in precomputed variant tables and emit markup; every color they
//! show resolves through theme variables at display time. Register the
//! component rules once at startup with [`register_all_styles`], bind
//! palettes with [`tactum_style::ThemeRegistry`], and render.

pub mod chip;
pub mod example_card;
pub mod nft_card;
pub mod styles;

pub use chip::{AriaLive, Chip, ChipColor, ChipHost, ChipSize, ChipVariants, IconPosition};
pub use example_card::ExampleCard;
pub use nft_card::{Fiat, Media, MediaKind, MediaState, Money, NftCard, Trait};
pub use styles::register_all_styles;

use tactum_render::Element;

/// A renderable component.
pub trait Component {
    /// Render the component into a markup element.
    fn render(&self) -> Element;
}

/// A component whose presentation depends on host-driven state.
pub trait StatefulComponent {
    /// The state tracked across renders.
    type State;

    /// Render the component with its current state.
    fn render(&self, state: &mut Self::State) -> Element;
}
