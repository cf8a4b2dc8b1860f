//! The story catalogue: one rendered example per component state worth
//! eyeballing.

mod chip;
mod example_card;
mod nft_card;

use tactum_render::Node;

/// One named example.
pub struct Story {
    /// Stable kebab-case identifier, used by `--story`.
    pub name: &'static str,
    /// One-line description shown above the rendering.
    pub description: &'static str,
    /// The rendered example.
    pub node: Node,
}

impl Story {
    fn new(name: &'static str, description: &'static str, node: impl Into<Node>) -> Self {
        Self {
            name,
            description,
            node: node.into(),
        }
    }
}

/// Every story, in display order.
#[must_use]
pub fn all() -> Vec<Story> {
    let mut stories = chip::stories();
    stories.extend(nft_card::stories());
    stories.extend(example_card::stories());
    stories
}
