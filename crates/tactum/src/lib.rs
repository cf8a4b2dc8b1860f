#![forbid(unsafe_code)]

//! Tactum public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports common types from internal crates and offers a lightweight
//! prelude for day-to-day usage.

// --- Style re-exports ------------------------------------------------------

pub use tactum_style::{
    ColorError, ContractBuilder, Palette, PaletteBuilder, Rgba, Scope, Style, StyleId, StyleSheet,
    ThemeError, ThemeMode, ThemeRegistry, TokenContract, TokenPath, TokenValue,
};

// --- Render re-exports -----------------------------------------------------

pub use tactum_render::{render, render_element, Element, Node};

// --- Component re-exports --------------------------------------------------

pub use tactum_ui::{
    register_all_styles, AriaLive, Chip, ChipColor, ChipHost, ChipSize, ChipVariants, Component,
    ExampleCard, Fiat, IconPosition, Media, MediaKind, MediaState, Money, NftCard,
    StatefulComponent, Trait,
};

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        register_all_styles, Chip, ChipColor, ChipHost, ChipSize, Component, Element, ExampleCard,
        Media, MediaState, NftCard, Palette, Scope, StatefulComponent, StyleSheet, ThemeMode,
        ThemeRegistry, TokenContract,
    };

    pub use crate::{markup, style, ui};
}

pub use tactum_render as markup;
pub use tactum_style as style;
pub use tactum_ui as ui;
