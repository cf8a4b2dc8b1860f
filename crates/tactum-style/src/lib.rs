//! Token-contract theming for Tactum.
//!
//! The pipeline is: a [`TokenContract`] fixes the closed set of token paths
//! and their generated variable names; [`Palette`]s assign values and are
//! validated strictly against the contract; a [`ThemeRegistry`] binds
//! palettes to selector scopes and emits the custom-property rules;
//! component rules live in a [`StyleSheet`] and reference tokens through
//! `var(...)` indirection, so re-theming never touches component CSS.
//!
//! ```
//! use tactum_style::{ThemeRegistry, ThemeMode};
//!
//! let registry = ThemeRegistry::standard();
//! let css = registry.to_css();
//! assert!(css.contains("--tctm-accent: #2563EB;"));
//!
//! let bg = registry.computed(&[ThemeMode::Dark], "bg").unwrap();
//! assert_eq!(bg.to_css(), "#000000");
//! ```

#![forbid(unsafe_code)]

pub mod color;
pub mod contract;
pub mod error;
pub mod palette;
pub mod registry;
pub mod style;
pub mod stylesheet;
pub mod token;

pub use color::{ColorError, Rgba};
pub use contract::{ContractBuilder, TokenContract};
pub use error::ThemeError;
pub use palette::{Palette, PaletteBuilder, TokenValue};
pub use registry::{Scope, ThemeMode, ThemeRegistry};
pub use style::Style;
pub use stylesheet::{StyleId, StyleSheet};
pub use token::{TokenPath, DEFAULT_SEGMENT, VAR_PREFIX};
