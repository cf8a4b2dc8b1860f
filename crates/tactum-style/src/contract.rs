//! The token contract: the closed, value-free schema of token paths.

use ahash::AHashMap;
use tracing::debug;

use crate::error::ThemeError;
use crate::token::TokenPath;

/// An ordered, closed set of token paths with no values attached.
///
/// Built once at startup and immutable afterward. The contract is the single
/// source of truth for which paths exist and what each path's external
/// variable name is; palettes are validated against it and stylesheets
/// reference variables through it, so the generated names can never diverge.
#[derive(Debug, Clone)]
pub struct TokenContract {
    paths: Vec<TokenPath>,
    index: AHashMap<String, usize>,
}

impl TokenContract {
    /// Start building a contract.
    #[must_use]
    pub fn builder() -> ContractBuilder {
        ContractBuilder::new()
    }

    /// The Tactum contract shipped with the library.
    ///
    /// Color roles (`accent`, `success`, `warning`, `danger`, `info`) each
    /// carry `base`/`contrast`/`soft` leaves; surfaces are a numbered scale;
    /// font tokens cover the two stacks and four weights.
    #[must_use]
    pub fn standard() -> Self {
        Self::builder()
            .leaf("bg")
            .group("surface", &["1", "2", "3"])
            .leaf("surfaceAlias")
            .leaf("border")
            .group("text", &["base", "secondary", "muted", "inverse"])
            .group("accent", &["base", "contrast", "soft"])
            .group("success", &["base", "contrast", "soft"])
            .group("warning", &["base", "contrast", "soft"])
            .group("danger", &["base", "contrast", "soft"])
            .group("info", &["base", "contrast", "soft"])
            .leaf("ring")
            .leaf("overlay")
            .leaf("shadow")
            .group("font", &["sans", "mono"])
            .group("font.weight", &["regular", "medium", "semibold", "bold"])
            .build()
            .expect("builtin contract is well formed")
    }

    /// Whether the contract defines the given dotted path.
    #[must_use]
    pub fn contains(&self, dotted: &str) -> bool {
        self.index.contains_key(dotted)
    }

    /// Look up a path by its dotted form.
    #[must_use]
    pub fn path(&self, dotted: &str) -> Option<&TokenPath> {
        self.index.get(dotted).map(|&i| &self.paths[i])
    }

    /// The generated variable name for a dotted path, if defined.
    #[must_use]
    pub fn var_name(&self, dotted: &str) -> Option<String> {
        self.path(dotted).map(TokenPath::var_name)
    }

    /// All paths, in definition order.
    #[must_use]
    pub fn paths(&self) -> &[TokenPath] {
        &self.paths
    }

    /// Number of defined paths.
    #[must_use]
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether the contract is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

/// Builder for [`TokenContract`].
#[derive(Debug, Default)]
pub struct ContractBuilder {
    paths: Vec<TokenPath>,
}

impl ContractBuilder {
    /// Create an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a single leaf path.
    #[must_use]
    pub fn leaf(mut self, dotted: &str) -> Self {
        self.paths.push(TokenPath::new(dotted));
        self
    }

    /// Add one leaf per entry under a common prefix.
    #[must_use]
    pub fn group(mut self, prefix: &str, leaves: &[&str]) -> Self {
        for leaf in leaves {
            self.paths.push(TokenPath::new(&format!("{prefix}.{leaf}")));
        }
        self
    }

    /// Finish the contract.
    ///
    /// Fails on a duplicate path, or when two distinct paths generate the
    /// same variable name (the sentinel-stripping rule makes this possible,
    /// e.g. `text` vs `text.base`; such a contract is a defect, not a
    /// runtime condition).
    pub fn build(self) -> Result<TokenContract, ThemeError> {
        let mut index = AHashMap::with_capacity(self.paths.len());
        let mut by_var: AHashMap<String, usize> = AHashMap::with_capacity(self.paths.len());

        for (i, path) in self.paths.iter().enumerate() {
            if index.insert(path.dotted(), i).is_some() {
                return Err(ThemeError::DuplicateToken {
                    path: path.dotted(),
                });
            }
            let var = path.var_name();
            if let Some(&first) = by_var.get(&var) {
                return Err(ThemeError::VariableCollision {
                    first: self.paths[first].dotted(),
                    second: path.dotted(),
                    var,
                });
            }
            by_var.insert(var, i);
        }

        debug!(paths = self.paths.len(), "token contract built");
        Ok(TokenContract {
            paths: self.paths,
            index,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn standard_contract_has_thirty_four_paths() {
        let contract = TokenContract::standard();
        assert_eq!(contract.len(), 34);
        assert!(!contract.is_empty());
    }

    #[test]
    fn standard_contract_defines_expected_paths() {
        let contract = TokenContract::standard();
        for dotted in [
            "bg",
            "surface.1",
            "surface.2",
            "surface.3",
            "surfaceAlias",
            "border",
            "text.base",
            "text.secondary",
            "text.muted",
            "text.inverse",
            "accent.base",
            "accent.contrast",
            "accent.soft",
            "success.base",
            "success.contrast",
            "success.soft",
            "warning.base",
            "warning.contrast",
            "warning.soft",
            "danger.base",
            "danger.contrast",
            "danger.soft",
            "info.base",
            "info.contrast",
            "info.soft",
            "ring",
            "overlay",
            "shadow",
            "font.sans",
            "font.mono",
        ] {
            assert!(contract.contains(dotted), "missing {dotted}");
        }
        for weight in ["regular", "medium", "semibold", "bold"] {
            assert!(contract.contains(&format!("font.weight.{weight}")));
        }
        assert!(!contract.contains("accent"));
        assert!(!contract.contains("nope"));
    }

    #[test]
    fn standard_names_are_stable() {
        let contract = TokenContract::standard();
        assert_eq!(contract.var_name("bg").as_deref(), Some("--tctm-bg"));
        assert_eq!(
            contract.var_name("surface.2").as_deref(),
            Some("--tctm-surface-2")
        );
        assert_eq!(
            contract.var_name("surfaceAlias").as_deref(),
            Some("--tctm-surfaceAlias")
        );
        assert_eq!(contract.var_name("text.base").as_deref(), Some("--tctm-text"));
        assert_eq!(
            contract.var_name("danger.soft").as_deref(),
            Some("--tctm-danger-soft")
        );
        assert_eq!(
            contract.var_name("font.weight.semibold").as_deref(),
            Some("--tctm-font-weight-semibold")
        );
        assert_eq!(contract.var_name("missing"), None);
    }

    #[test]
    fn duplicate_path_is_rejected() {
        let err = TokenContract::builder()
            .leaf("bg")
            .leaf("bg")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ThemeError::DuplicateToken {
                path: "bg".to_string()
            }
        );
    }

    #[test]
    fn variable_collision_is_rejected() {
        // `text` and `text.base` generate the same variable name.
        let err = TokenContract::builder()
            .leaf("text")
            .leaf("text.base")
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            ThemeError::VariableCollision {
                first: "text".to_string(),
                second: "text.base".to_string(),
                var: "--tctm-text".to_string(),
            }
        );
    }

    #[test]
    fn paths_preserve_definition_order() {
        let contract = TokenContract::builder()
            .leaf("b")
            .leaf("a")
            .build()
            .unwrap();
        let order: Vec<String> = contract.paths().iter().map(TokenPath::dotted).collect();
        assert_eq!(order, ["b", "a"]);
    }

    #[test]
    fn group_expands_under_prefix() {
        let contract = TokenContract::builder()
            .group("accent", &["base", "soft"])
            .build()
            .unwrap();
        assert!(contract.contains("accent.base"));
        assert!(contract.contains("accent.soft"));
        assert_eq!(contract.len(), 2);
    }
}
