//! Palettes: concrete values for every path the contract defines.

use std::collections::BTreeMap;
use std::fmt;

use tracing::debug;

use crate::color::Rgba;
use crate::contract::TokenContract;
use crate::error::ThemeError;

/// A concrete value assigned to one token path.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TokenValue {
    /// A color literal.
    Color(Rgba),
    /// A font-family stack, serialized verbatim.
    FontStack(String),
    /// A numeric font weight.
    Weight(u16),
}

impl TokenValue {
    /// Serialize to the CSS value text written after the colon.
    #[must_use]
    pub fn to_css(&self) -> String {
        match self {
            Self::Color(c) => c.to_css(),
            Self::FontStack(stack) => stack.clone(),
            Self::Weight(w) => w.to_string(),
        }
    }
}

impl fmt::Display for TokenValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

impl From<Rgba> for TokenValue {
    fn from(color: Rgba) -> Self {
        Self::Color(color)
    }
}

/// A named, complete assignment of values to token paths.
///
/// Keys are dotted paths. A palette is only usable once it validates against
/// a contract: every contract path present, no extras. Validation never
/// fills gaps with defaults; a partial palette is a construction error.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Palette {
    name: String,
    values: BTreeMap<String, TokenValue>,
}

impl Palette {
    /// Start building a palette.
    #[must_use]
    pub fn builder(name: impl Into<String>) -> PaletteBuilder {
        PaletteBuilder::new(name)
    }

    /// The palette's name, used in error messages and logs.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Look up the value for a dotted path.
    #[must_use]
    pub fn value(&self, dotted: &str) -> Option<&TokenValue> {
        self.values.get(dotted)
    }

    /// Number of assigned paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the palette assigns nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Check this palette covers the contract exactly.
    ///
    /// Reports the first missing contract path, then the first extra path.
    /// Paths are checked in contract order so failures are deterministic.
    pub fn validate(&self, contract: &TokenContract) -> Result<(), ThemeError> {
        for path in contract.paths() {
            let dotted = path.dotted();
            if !self.values.contains_key(&dotted) {
                return Err(ThemeError::MissingToken {
                    palette: self.name.clone(),
                    path: dotted,
                });
            }
        }
        for dotted in self.values.keys() {
            if !contract.contains(dotted) {
                return Err(ThemeError::UnknownToken {
                    palette: self.name.clone(),
                    path: dotted.clone(),
                });
            }
        }
        debug!(palette = %self.name, tokens = self.values.len(), "palette validated");
        Ok(())
    }

    /// The shipped light palette.
    #[must_use]
    pub fn light() -> Self {
        Self::builder("light")
            .color("bg", Rgba::hex(0xFAFAFA))
            .color("surface.1", Rgba::hex(0xFFFFFF))
            .color("surface.2", Rgba::hex(0xFAFAFA))
            .color("surface.3", Rgba::hex(0xF5F5F5))
            .color("surfaceAlias", Rgba::hex(0xFFFFFF))
            .color("border", Rgba::hex(0xE5E5E5))
            .color("text.base", Rgba::hex(0x171717))
            .color("text.secondary", Rgba::hex(0x404040))
            .color("text.muted", Rgba::hex(0x525252))
            .color("text.inverse", Rgba::hex(0xFFFFFF))
            .color("accent.base", Rgba::hex(0x2563EB))
            .color("accent.contrast", Rgba::hex(0xFFFFFF))
            .color("accent.soft", Rgba::hex(0xEFF6FF))
            .color("success.base", Rgba::hex(0x16A34A))
            .color("success.contrast", Rgba::hex(0xFFFFFF))
            .color("success.soft", Rgba::hex(0xF0FDF4))
            .color("warning.base", Rgba::hex(0xEA580C))
            .color("warning.contrast", Rgba::hex(0xFFFFFF))
            .color("warning.soft", Rgba::hex(0xFFF7ED))
            .color("danger.base", Rgba::hex(0xDC2626))
            .color("danger.contrast", Rgba::hex(0xFFFFFF))
            .color("danger.soft", Rgba::hex(0xFEF2F2))
            .color("info.base", Rgba::hex(0x0891B2))
            .color("info.contrast", Rgba::hex(0xFFFFFF))
            .color("info.soft", Rgba::hex(0xECFEFF))
            .color("ring", Rgba::rgba(37, 99, 235, 115))
            .color("overlay", Rgba::rgba(0, 0, 0, 153))
            .color("shadow", Rgba::rgba(0, 0, 0, 77))
            .fonts()
            .build()
    }

    /// The shipped dark palette.
    #[must_use]
    pub fn dark() -> Self {
        Self::builder("dark")
            .color("bg", Rgba::hex(0x000000))
            .color("surface.1", Rgba::hex(0x0A0A0A))
            .color("surface.2", Rgba::hex(0x171717))
            .color("surface.3", Rgba::hex(0x262626))
            .color("surfaceAlias", Rgba::hex(0x0A0A0A))
            .color("border", Rgba::rgba(255, 255, 255, 41))
            .color("text.base", Rgba::hex(0xF5F5F5))
            .color("text.secondary", Rgba::hex(0xD4D4D4))
            .color("text.muted", Rgba::hex(0xA3A3A3))
            .color("text.inverse", Rgba::hex(0x000000))
            .color("accent.base", Rgba::hex(0x2563EB))
            .color("accent.contrast", Rgba::hex(0xFFFFFF))
            .color("accent.soft", Rgba::hex(0x172554))
            .color("success.base", Rgba::hex(0x16A34A))
            .color("success.contrast", Rgba::hex(0xFFFFFF))
            .color("success.soft", Rgba::hex(0x052E16))
            .color("warning.base", Rgba::hex(0xEA580C))
            .color("warning.contrast", Rgba::hex(0xFFFFFF))
            .color("warning.soft", Rgba::hex(0x431407))
            .color("danger.base", Rgba::hex(0xDC2626))
            .color("danger.contrast", Rgba::hex(0xFFFFFF))
            .color("danger.soft", Rgba::hex(0x450A0A))
            .color("info.base", Rgba::hex(0x0891B2))
            .color("info.contrast", Rgba::hex(0xFFFFFF))
            .color("info.soft", Rgba::hex(0x083344))
            .color("ring", Rgba::rgba(37, 99, 235, 115))
            .color("overlay", Rgba::rgba(0, 0, 0, 153))
            .color("shadow", Rgba::rgba(0, 0, 0, 128))
            .fonts()
            .build()
    }
}

const SANS_STACK: &str = "InterVariable, ui-sans-serif, system-ui, -apple-system, \
Segoe UI, Roboto, Helvetica, Arial, \"Apple Color Emoji\", \"Segoe UI Emoji\"";

const MONO_STACK: &str = "ui-monospace, SFMono-Regular, Menlo, Monaco, Consolas, \
\"Liberation Mono\", \"Courier New\", monospace";

/// Builder for [`Palette`].
#[derive(Debug)]
pub struct PaletteBuilder {
    name: String,
    values: BTreeMap<String, TokenValue>,
}

impl PaletteBuilder {
    /// Create an empty builder for a named palette.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            values: BTreeMap::new(),
        }
    }

    /// Assign any token value. Later assignments to the same path win.
    #[must_use]
    pub fn set(mut self, dotted: impl Into<String>, value: impl Into<TokenValue>) -> Self {
        self.values.insert(dotted.into(), value.into());
        self
    }

    /// Assign a color.
    #[must_use]
    pub fn color(self, dotted: impl Into<String>, color: Rgba) -> Self {
        self.set(dotted, TokenValue::Color(color))
    }

    /// Assign a font-family stack.
    #[must_use]
    pub fn font(self, dotted: impl Into<String>, stack: impl Into<String>) -> Self {
        self.set(dotted, TokenValue::FontStack(stack.into()))
    }

    /// Assign a numeric font weight.
    #[must_use]
    pub fn weight(self, dotted: impl Into<String>, weight: u16) -> Self {
        self.set(dotted, TokenValue::Weight(weight))
    }

    /// Assign the shared font stacks and weight scale.
    #[must_use]
    pub fn fonts(self) -> Self {
        self.font("font.sans", SANS_STACK)
            .font("font.mono", MONO_STACK)
            .weight("font.weight.regular", 400)
            .weight("font.weight.medium", 500)
            .weight("font.weight.semibold", 600)
            .weight("font.weight.bold", 700)
    }

    /// Finish the palette. Validation happens separately, at bind time.
    #[must_use]
    pub fn build(self) -> Palette {
        Palette {
            name: self.name,
            values: self.values,
        }
    }
}
