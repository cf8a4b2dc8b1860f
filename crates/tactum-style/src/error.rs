//! Structural errors for contracts and palettes.

use thiserror::Error;

/// Error raised while building a contract or validating a palette.
///
/// Structural mismatches are construction-time failures. They are never
/// patched with defaults: a palette that does not cover the contract fails
/// at bind time, before anything renders.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThemeError {
    /// A palette omits a path the contract defines.
    #[error("palette `{palette}` is missing token `{path}`")]
    MissingToken {
        /// Name of the offending palette.
        palette: String,
        /// Dotted path of the absent token.
        path: String,
    },

    /// A palette supplies a path the contract does not define.
    #[error("palette `{palette}` defines `{path}` which is not in the contract")]
    UnknownToken {
        /// Name of the offending palette.
        palette: String,
        /// Dotted path of the unexpected token.
        path: String,
    },

    /// The same path was added to a contract twice.
    #[error("duplicate token path `{path}` in contract")]
    DuplicateToken {
        /// Dotted path added more than once.
        path: String,
    },

    /// Two distinct paths generate the same variable name.
    #[error("token paths `{first}` and `{second}` both generate variable `{var}`")]
    VariableCollision {
        /// First path, in contract order.
        first: String,
        /// Second path, in contract order.
        second: String,
        /// The shared generated name.
        var: String,
    },
}
