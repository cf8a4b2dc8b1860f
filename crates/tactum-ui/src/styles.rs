//! Registration of every component rule into a shared stylesheet.
//!
//! Components emit class names only; this module gives those names their
//! declarations. All colors route through theme variables (directly or via
//! `color-mix`), so none of these rules change when palettes do.

use tracing::debug;

use tactum_style::{Style, StyleSheet, TokenPath};

use crate::chip::{ChipColor, ChipVariants};

const LIGHT_SCOPE: &str = "[data-theme=\"light\"]";
const RADIUS_PILL: &str = "9999px";

fn var(dotted: &str) -> String {
    TokenPath::new(dotted).css_var()
}

fn mix(dotted: &str, pct: u8) -> String {
    format!("color-mix(in srgb, {} {pct}%, transparent)", var(dotted))
}

/// Register every rule the shipped components reference.
///
/// Idempotent: re-registering replaces rules with identical content.
pub fn register_all_styles(sheet: &StyleSheet) {
    register_chip_styles(sheet);
    register_nft_card_styles(sheet);
    register_example_card_styles(sheet);
    debug!(rules = sheet.len(), "component styles registered");
}

fn register_chip_styles(sheet: &StyleSheet) {
    sheet.define(
        "chip",
        Style::new()
            .prop("position", "relative")
            .prop("display", "inline-flex")
            .prop("align-items", "center")
            .prop("vertical-align", "middle")
            .prop("user-select", "none")
            .prop("border-radius", RADIUS_PILL)
            .prop("border-width", "1px")
            .prop("border-style", "solid")
            .prop("line-height", "1")
            .prop("white-space", "nowrap")
            .prop(
                "transition",
                "background-color .15s ease, border-color .15s ease, \
                 box-shadow .15s ease, filter .15s ease",
            ),
    );

    sheet.define(
        "chip-sm",
        Style::new()
            .prop("height", "20px")
            .prop("padding-inline", "8px")
            .prop("font-size", "12px")
            .prop("font-weight", var("font.weight.medium"))
            .prop("gap", "6px"),
    );
    sheet.define(
        "chip-md",
        Style::new()
            .prop("height", "28px")
            .prop("padding-inline", "12px")
            .prop("font-size", "13px")
            .prop("font-weight", var("font.weight.medium"))
            .prop("gap", "8px"),
    );

    sheet.define(
        "chip-icon",
        Style::new()
            .prop("display", "inline-flex")
            .prop("align-items", "center")
            .prop("justify-content", "center")
            .prop("flex", "0 0 auto"),
    );
    sheet.define(
        "chip-text",
        Style::new()
            .prop("overflow", "hidden")
            .prop("text-overflow", "ellipsis"),
    );

    // Dark-first tone defaults; the light scope softens them below.
    let dark_inset = "inset 0 1px 0 rgba(255, 255, 255, 0.04), \
                      inset 0 -6px 18px rgba(0, 0, 0, 0.35)";
    let tone = |role: &str, text: String| {
        Style::new()
            .prop("background", mix(role, 18))
            .prop("border-color", mix(role, 38))
            .prop("color", text)
            .prop("box-shadow", dark_inset)
    };
    sheet.define("chip-success", tone("success.base", var("success.contrast")));
    sheet.define("chip-error", tone("danger.base", var("danger.contrast")));
    sheet.define("chip-warning", tone("warning.base", var("warning.contrast")));
    sheet.define(
        "chip-neutral",
        Style::new()
            .prop("background", mix("text.muted", 14))
            .prop("border-color", mix("text.muted", 28))
            .prop("color", var("text.secondary"))
            .prop("box-shadow", dark_inset),
    );

    let light_tone = |role: &str| {
        Style::new()
            .prop("background", var(&format!("{role}.soft")))
            .prop(
                "border-color",
                format!("color-mix(in srgb, {} 22%, #FFFFFF)", var(&format!("{role}.base"))),
            )
            .prop("color", var(&format!("{role}.base")))
    };
    sheet.define_in_scope(LIGHT_SCOPE, "chip-success", light_tone("success"));
    sheet.define_in_scope(LIGHT_SCOPE, "chip-error", light_tone("danger"));
    sheet.define_in_scope(LIGHT_SCOPE, "chip-warning", light_tone("warning"));
    sheet.define_in_scope(
        LIGHT_SCOPE,
        "chip-neutral",
        Style::new()
            .prop("background", var("surface.3"))
            .prop("border-color", var("border"))
            .prop("color", var("text.muted")),
    );

    sheet.define(
        "chip-shiny",
        Style::new()
            .prop("isolation", "isolate")
            .prop("position", "relative"),
    );
    sheet.define(
        "chip-overlay",
        Style::new()
            .prop("pointer-events", "none")
            .prop("position", "absolute")
            .prop("inset", "0")
            .prop("border-radius", RADIUS_PILL)
            .prop("overflow", "hidden")
            .prop("mix-blend-mode", "screen")
            .prop("opacity", "0.7"),
    );
    for color in ChipColor::ALL {
        let (role, pct) = match color {
            ChipColor::Success => ("success.base", 60),
            ChipColor::Error => ("danger.base", 60),
            ChipColor::Warning => ("warning.base", 60),
            ChipColor::Neutral => ("text.muted", 55),
        };
        sheet.define(
            ChipVariants::shared().overlay_tone(color).as_str(),
            Style::new().prop(
                "background",
                format!(
                    "radial-gradient(120% 160% at 50% 0%, {} 0%, transparent 70%)",
                    mix(role, pct)
                ),
            ),
        );
    }
}

fn register_nft_card_styles(sheet: &StyleSheet) {
    sheet.define(
        "nft-card",
        Style::new()
            .prop("display", "grid")
            .prop("grid-template-rows", "auto 1fr auto")
            .prop("gap", "10px")
            .prop("border-radius", "12px")
            .prop("border", format!("1px solid {}", var("border")))
            .prop("background", var("surface.1"))
            .prop("color", var("text.base"))
            .prop("padding", "12px")
            .prop("box-shadow", format!("0 1px 2px {}", var("shadow"))),
    );
    sheet.define(
        "nft-media",
        Style::new()
            // Reserved square box: the media loads into fixed space.
            .prop("aspect-ratio", "1 / 1")
            .prop("width", "100%")
            .prop("border-radius", "10px")
            .prop("overflow", "hidden")
            .prop("background", var("surface.2"))
            .prop("position", "relative"),
    );
    let cover = Style::new()
        .prop("width", "100%")
        .prop("height", "100%")
        .prop("object-fit", "cover")
        .prop("display", "block");
    sheet.define("nft-img", cover.clone());
    sheet.define("nft-video", cover);
    sheet.define(
        "nft-media-fallback",
        Style::new()
            .prop("position", "absolute")
            .prop("inset", "0")
            .prop("display", "grid")
            .prop("place-items", "center")
            .prop("font-size", "12px")
            .prop("color", var("text.muted")),
    );
    sheet.define(
        "nft-header",
        Style::new()
            .prop("display", "flex")
            .prop("align-items", "center")
            .prop("justify-content", "space-between")
            .prop("gap", "8px")
            .prop("min-height", "18px"),
    );
    sheet.define(
        "nft-title",
        Style::new()
            .prop("font-weight", var("font.weight.semibold"))
            .prop("font-size", "14px")
            .prop("text-overflow", "ellipsis")
            .prop("white-space", "nowrap")
            .prop("overflow", "hidden"),
    );
    sheet.define(
        "nft-owner",
        Style::new()
            .prop("font-size", "12px")
            .prop("color", var("text.muted"))
            .prop("text-overflow", "ellipsis")
            .prop("white-space", "nowrap")
            .prop("overflow", "hidden"),
    );
    let wrap_row = Style::new()
        .prop("display", "flex")
        .prop("flex-wrap", "wrap")
        .prop("gap", "6px");
    sheet.define("nft-badges", wrap_row.clone());
    sheet.define("nft-traits", wrap_row);
    sheet.define(
        "nft-badge",
        Style::new()
            .prop("border-radius", "999px")
            .prop("font-size", "11px")
            .prop("padding", "2px 8px")
            .prop("background", var("accent.soft"))
            .prop("color", var("accent.base")),
    );
    sheet.define(
        "nft-trait",
        Style::new()
            .prop("font-size", "11px")
            .prop("border-radius", "6px")
            .prop("padding", "2px 6px")
            .prop("border", format!("1px solid {}", var("border")))
            .prop("background", var("surface.2"))
            .prop("color", var("text.secondary")),
    );
    sheet.define(
        "nft-price-row",
        Style::new()
            .prop("display", "flex")
            .prop("align-items", "center")
            .prop("justify-content", "space-between")
            .prop("gap", "8px")
            .prop("min-height", "18px"),
    );
    sheet.define(
        "nft-price",
        Style::new()
            .prop("font-weight", var("font.weight.semibold"))
            .prop("font-size", "13px"),
    );
    sheet.define(
        "nft-floor",
        Style::new()
            .prop("font-size", "12px")
            .prop("color", var("text.muted")),
    );
    sheet.define(
        "nft-actions",
        Style::new()
            .prop("display", "flex")
            .prop("align-items", "center")
            .prop("justify-content", "space-between")
            .prop("gap", "8px"),
    );

    sheet.define(
        "skel",
        Style::new()
            .prop(
                "background",
                "linear-gradient(90deg, rgba(0, 0, 0, 0.06), rgba(0, 0, 0, 0.12), \
                 rgba(0, 0, 0, 0.06))",
            )
            .prop("background-size", "200% 100%"),
    );
    sheet.define(
        "skel-line",
        Style::new().prop("height", "12px").prop("border-radius", "6px"),
    );
    sheet.define(
        "skel-line-wide",
        Style::new().prop("height", "14px").prop("border-radius", "6px"),
    );
    sheet.define(
        "skel-chip",
        Style::new()
            .prop("height", "16px")
            .prop("width", "60px")
            .prop("border-radius", "8px"),
    );
    sheet.define(
        "skel-media",
        Style::new().prop("height", "100%").prop("width", "100%"),
    );
}

fn register_example_card_styles(sheet: &StyleSheet) {
    sheet.define(
        "example-card",
        Style::new()
            .prop("display", "grid")
            .prop("gap", "8px")
            .prop("border-radius", "12px")
            .prop("padding", "12px")
            .prop("border", format!("1px solid {}", var("border")))
            .prop("background", var("surface.1"))
            .prop("color", var("text.base"))
            .prop("box-shadow", format!("0 1px 2px {}", var("shadow"))),
    );
    sheet.define(
        "example-card-header",
        Style::new().prop("font-weight", var("font.weight.semibold")),
    );
}
