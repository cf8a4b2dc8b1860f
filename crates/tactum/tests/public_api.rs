//! End-to-end exercise of the public surface: theme emission, style
//! registration, and component rendering against the shipped palettes.

use tactum::prelude::*;
use tactum::{render_element, Money, Scope};

#[test]
fn theme_css_and_component_markup_agree_on_variable_names() {
    let registry = ThemeRegistry::standard();
    let theme_css = registry.to_css();

    let sheet = StyleSheet::new();
    register_all_styles(&sheet);
    let component_css = sheet.to_css();

    // Every variable a component rule consumes is one the theme defines.
    for var in ["--tctm-success", "--tctm-danger-contrast", "--tctm-surface-3", "--tctm-border"] {
        assert!(component_css.contains(&format!("var({var})")), "{var} unused");
        assert!(theme_css.contains(&format!("{var}:")), "{var} undefined");
    }
}

#[test]
fn chip_renders_to_stable_markup() {
    let chip = Chip::new("Success")
        .color(ChipColor::Success)
        .size(ChipSize::Sm)
        .as_anchor("https://example.com/tx/0xabc")
        .attr("data-testid", "tx-chip");
    let html = render_element(&chip.render());
    assert!(html.starts_with("<a class=\"chip chip-success chip-sm\""));
    assert!(html.contains("href=\"https://example.com/tx/0xabc\""));
    assert!(html.contains("data-testid=\"tx-chip\""));
    assert!(html.contains("<span class=\"chip-text\">Success</span>"));
}

#[test]
fn card_under_dark_scope_resolves_dark_values() {
    let registry = ThemeRegistry::standard();
    // A card nested under a dark ancestor sees dark surfaces even though
    // its own markup is scheme-agnostic.
    let card = NftCard::new().title("Punk #7804").price(Money::formatted("42 ETH"));
    let mut state = MediaState::new();
    let html = render_element(&card.render(&mut state));
    assert!(!html.contains("#0A0A0A"));

    let surface = registry
        .computed(&[ThemeMode::Dark], "surface.1")
        .expect("contract path");
    assert_eq!(surface.to_css(), "#0A0A0A");
    assert_eq!(
        registry.computed(&[], "surface.1").expect("contract path").to_css(),
        "#FFFFFF"
    );
}

#[test]
fn custom_scope_bindings_extend_the_standard_setup() {
    let mut registry = ThemeRegistry::new(TokenContract::standard());
    registry
        .bind(Scope::Class("embed".to_string()), Palette::dark())
        .expect("dark palette is complete");
    let css = registry.to_css();
    assert!(css.starts_with(".embed {"));
    assert!(css.contains("--tctm-bg: #000000;"));
}

#[test]
fn example_card_round_trips_through_the_facade() {
    let html = render_element(&ExampleCard::new().title("Demo").render());
    assert!(html.contains("role=\"region\""));
    assert!(html.contains("aria-label=\"Demo\""));
}

#[cfg(feature = "serde")]
mod serde_surface {
    use tactum::{Rgba, TokenValue};

    #[test]
    fn token_values_serialize_round_trip() {
        let value = TokenValue::Color(Rgba::rgba(37, 99, 235, 115));
        let json = serde_json::to_string(&value).unwrap();
        let back: TokenValue = serde_json::from_str(&json).unwrap();
        assert_eq!(back, value);
    }
}
