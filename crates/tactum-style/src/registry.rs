//! Scope bindings: attaching palettes to selector scopes.
//!
//! A theme registry holds one contract and an ordered list of
//! (scope, palette) bindings. Emission walks bindings in order, so later
//! bindings override earlier ones under normal cascade rules; `computed`
//! models the same resolution for a chain of nested mode scopes without a
//! browser in the loop.

use std::fmt;

use tracing::debug;

use crate::contract::TokenContract;
use crate::error::ThemeError;
use crate::palette::{Palette, TokenValue};
use crate::token::TokenPath;

/// The two shipped color schemes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ThemeMode {
    /// Light scheme.
    Light,
    /// Dark scheme.
    Dark,
}

impl ThemeMode {
    /// The value written into `data-theme` attributes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl fmt::Display for ThemeMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A selector scope a palette can be bound to.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Scope {
    /// The document root (`:root`).
    Root,
    /// A class scope (`.name`).
    Class(String),
    /// An explicit mode scope (`[data-theme="..."]`).
    Mode(ThemeMode),
}

impl Scope {
    /// The CSS selector text for this scope.
    #[must_use]
    pub fn selector(&self) -> String {
        match self {
            Self::Root => ":root".to_string(),
            Self::Class(name) => format!(".{name}"),
            Self::Mode(mode) => format!("[data-theme=\"{mode}\"]"),
        }
    }
}

impl fmt::Display for Scope {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.selector())
    }
}

/// A validated set of palette bindings over one contract.
#[derive(Debug, Clone)]
pub struct ThemeRegistry {
    contract: TokenContract,
    bindings: Vec<(Scope, Palette)>,
}

impl ThemeRegistry {
    /// Create an empty registry over a contract.
    #[must_use]
    pub fn new(contract: TokenContract) -> Self {
        Self {
            contract,
            bindings: Vec::new(),
        }
    }

    /// The shipped registry: light everywhere by default, dark opt-in.
    ///
    /// Light binds to `:root`, `.tactum`, and `[data-theme="light"]`; dark
    /// binds only to `[data-theme="dark"]`, so a subtree flips scheme by
    /// setting the attribute and flips back the same way.
    #[must_use]
    pub fn standard() -> Self {
        let mut registry = Self::new(TokenContract::standard());
        let bindings = [
            (Scope::Root, Palette::light()),
            (Scope::Class("tactum".to_string()), Palette::light()),
            (Scope::Mode(ThemeMode::Light), Palette::light()),
            (Scope::Mode(ThemeMode::Dark), Palette::dark()),
        ];
        for (scope, palette) in bindings {
            registry
                .bind(scope, palette)
                .expect("builtin palettes satisfy the builtin contract");
        }
        registry
    }

    /// Bind a palette to a scope.
    ///
    /// The palette is validated against the contract first; a structural
    /// mismatch rejects the binding and leaves the registry untouched.
    pub fn bind(&mut self, scope: Scope, palette: Palette) -> Result<&mut Self, ThemeError> {
        palette.validate(&self.contract)?;
        debug!(scope = %scope, palette = palette.name(), "palette bound");
        self.bindings.push((scope, palette));
        Ok(self)
    }

    /// The contract the registry validates against.
    #[must_use]
    pub fn contract(&self) -> &TokenContract {
        &self.contract
    }

    /// Bound scopes in binding order.
    pub fn scopes(&self) -> impl Iterator<Item = &Scope> {
        self.bindings.iter().map(|(scope, _)| scope)
    }

    /// The palette bound to a scope, latest binding winning.
    #[must_use]
    pub fn palette(&self, scope: &Scope) -> Option<&Palette> {
        self.bindings
            .iter()
            .rev()
            .find(|(s, _)| s == scope)
            .map(|(_, p)| p)
    }

    /// Resolve one token for an element under a chain of ancestor modes.
    ///
    /// `ancestors` lists `data-theme` values outermost first; the nearest
    /// ancestor wins. With no mode ancestors the root binding applies.
    /// Returns `None` when the path is outside the contract or the needed
    /// scope has no binding.
    #[must_use]
    pub fn computed(&self, ancestors: &[ThemeMode], dotted: &str) -> Option<&TokenValue> {
        if !self.contract.contains(dotted) {
            return None;
        }
        let palette = ancestors
            .iter()
            .rev()
            .find_map(|mode| self.palette(&Scope::Mode(*mode)))
            .or_else(|| self.palette(&Scope::Root))?;
        palette.value(dotted)
    }

    /// Emit one `selector { declarations }` rule per binding, in order,
    /// followed by the scope-level base styles.
    ///
    /// Declarations follow contract definition order, one variable per line,
    /// so output is byte-stable for a given registry.
    #[must_use]
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for (scope, palette) in &self.bindings {
            out.push_str(&scope.selector());
            out.push_str(" {\n");
            for path in self.contract.paths() {
                if let Some(value) = palette.value(&path.dotted()) {
                    out.push_str(&format!("  {}: {};\n", path.var_name(), value.to_css()));
                }
            }
            out.push_str("}\n");
        }
        out.push_str(&self.base_css());
        out
    }

    /// The base styles every themed scope carries, independent of palette.
    ///
    /// Applies only inside Tactum scopes, never to the page at large: the
    /// sans stack, tabular numerals so metric columns never shift, token
    /// text and background colors, and form controls inheriting the font.
    #[must_use]
    pub fn base_css(&self) -> String {
        let font = TokenPath::new("font.sans").css_var();
        let text = TokenPath::new("text.base").css_var();
        let bg = TokenPath::new("bg").css_var();
        format!(
            ".tactum, [data-theme] {{\n\
             \x20 font-family: {font};\n\
             \x20 font-variant-numeric: tabular-nums lining-nums;\n\
             \x20 -webkit-font-smoothing: antialiased;\n\
             \x20 -moz-osx-font-smoothing: grayscale;\n\
             \x20 text-rendering: optimizeLegibility;\n\
             \x20 color: {text};\n\
             \x20 background: {bg};\n\
             }}\n\
             :where(.tactum, [data-theme]) :where(button, input, select, textarea) {{\n\
             \x20 font: inherit;\n\
             }}\n"
        )
    }
}
