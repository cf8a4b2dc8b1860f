//! Token paths and stable variable-name generation.
//!
//! A token path is a dotted identifier (`text.secondary`,
//! `font.weight.bold`) locating one design value in the contract. Every path
//! maps to exactly one external custom-property name; that name is a public
//! contract and must be stable across releases, so the generation rule lives
//! here and nowhere else.

use std::fmt;

use smallvec::SmallVec;

/// Prefix shared by every generated variable name.
pub const VAR_PREFIX: &str = "--tctm";

/// Sentinel segment that is stripped from generated names.
///
/// A leaf named `base` is the "default" value of its group: `accent.base`
/// names the variable `--tctm-accent`, leaving `accent.contrast` and
/// `accent.soft` as suffixed siblings. The match is segment-exact — a
/// segment merely containing the sentinel (`baseline`) is kept.
pub const DEFAULT_SEGMENT: &str = "base";

/// A dotted identifier locating one design value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TokenPath {
    segments: SmallVec<[String; 4]>,
}

impl TokenPath {
    /// Parse a dotted path. Empty segments are discarded.
    #[must_use]
    pub fn new(dotted: &str) -> Self {
        Self {
            segments: dotted
                .split('.')
                .filter(|s| !s.is_empty())
                .map(str::to_owned)
                .collect(),
        }
    }

    /// Build a path from individual segments.
    #[must_use]
    pub fn from_segments<I, S>(segments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            segments: segments.into_iter().map(Into::into).collect(),
        }
    }

    /// The path's segments in order.
    #[must_use]
    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    /// The dotted form (`text.secondary`).
    #[must_use]
    pub fn dotted(&self) -> String {
        self.segments.join(".")
    }

    /// The stable external variable name for this path.
    ///
    /// Segments equal to [`DEFAULT_SEGMENT`] are dropped (at any depth, every
    /// occurrence), the rest are joined with `-` under [`VAR_PREFIX`].
    /// Because empty segments never enter the join, the result contains no
    /// duplicate or trailing delimiters. A path made entirely of sentinel
    /// segments collapses to the bare prefix.
    #[must_use]
    pub fn var_name(&self) -> String {
        let kept: Vec<&str> = self
            .segments
            .iter()
            .map(String::as_str)
            .filter(|s| *s != DEFAULT_SEGMENT)
            .collect();
        if kept.is_empty() {
            VAR_PREFIX.to_string()
        } else {
            format!("{VAR_PREFIX}-{}", kept.join("-"))
        }
    }

    /// The `var(...)` reference for this path, for use in style declarations.
    #[must_use]
    pub fn css_var(&self) -> String {
        format!("var({})", self.var_name())
    }
}

impl fmt::Display for TokenPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.dotted())
    }
}

impl From<&str> for TokenPath {
    fn from(dotted: &str) -> Self {
        Self::new(dotted)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn plain_path_joins_segments() {
        assert_eq!(TokenPath::new("bg").var_name(), "--tctm-bg");
        assert_eq!(
            TokenPath::new("accent.contrast").var_name(),
            "--tctm-accent-contrast"
        );
        assert_eq!(
            TokenPath::new("font.weight.bold").var_name(),
            "--tctm-font-weight-bold"
        );
    }

    #[test]
    fn trailing_sentinel_is_stripped() {
        assert_eq!(TokenPath::new("text.base").var_name(), "--tctm-text");
        assert_eq!(TokenPath::new("accent.base").var_name(), "--tctm-accent");
    }

    #[test]
    fn stripped_path_matches_its_shorter_twin() {
        // `text.base` and a hypothetical `text` leaf agree on the name.
        assert_eq!(
            TokenPath::new("text.base").var_name(),
            TokenPath::new("text").var_name()
        );
    }

    #[test]
    fn mid_path_sentinel_leaves_no_duplicate_delimiter() {
        assert_eq!(TokenPath::new("a.base.b").var_name(), "--tctm-a-b");
        assert_eq!(TokenPath::new("base.x").var_name(), "--tctm-x");
    }

    #[test]
    fn sentinel_match_is_segment_exact() {
        assert_eq!(TokenPath::new("baseline").var_name(), "--tctm-baseline");
        assert_eq!(
            TokenPath::new("text.baseline").var_name(),
            "--tctm-text-baseline"
        );
    }

    #[test]
    fn all_sentinel_path_collapses_to_prefix() {
        assert_eq!(TokenPath::new("base").var_name(), "--tctm");
        assert_eq!(TokenPath::new("base.base").var_name(), "--tctm");
    }

    #[test]
    fn numeric_segments_are_ordinary() {
        assert_eq!(TokenPath::new("surface.1").var_name(), "--tctm-surface-1");
    }

    #[test]
    fn css_var_wraps_the_name() {
        assert_eq!(TokenPath::new("ring").css_var(), "var(--tctm-ring)");
        assert_eq!(TokenPath::new("text.base").css_var(), "var(--tctm-text)");
    }

    #[test]
    fn empty_segments_are_discarded() {
        assert_eq!(TokenPath::new("a..b").dotted(), "a.b");
        assert_eq!(TokenPath::new("a..b").var_name(), "--tctm-a-b");
    }

    #[test]
    fn from_segments_round_trips() {
        let path = TokenPath::from_segments(["font", "weight", "medium"]);
        assert_eq!(path.dotted(), "font.weight.medium");
        assert_eq!(path, TokenPath::new("font.weight.medium"));
    }

    #[test]
    fn display_is_dotted() {
        assert_eq!(TokenPath::new("text.muted").to_string(), "text.muted");
    }

    proptest! {
        #[test]
        fn names_have_no_duplicate_or_trailing_delimiters(
            segs in proptest::collection::vec("[a-z][a-z0-9]{0,7}", 1..5)
        ) {
            let path = TokenPath::from_segments(segs);
            let name = path.var_name();
            prop_assert!(name.starts_with(VAR_PREFIX));
            // Skip the literal double dash that opens every custom property.
            prop_assert!(!name[2..].contains("--"));
            prop_assert!(!name.ends_with('-'));
        }

        #[test]
        fn sentinel_free_paths_join_verbatim(
            segs in proptest::collection::vec("[a-df-z][a-z0-9]{0,7}", 1..5)
        ) {
            // First letter excludes `b`, so no segment can equal the sentinel.
            let path = TokenPath::from_segments(segs.clone());
            prop_assert_eq!(
                path.var_name(),
                format!("{VAR_PREFIX}-{}", segs.join("-"))
            );
        }
    }
}
