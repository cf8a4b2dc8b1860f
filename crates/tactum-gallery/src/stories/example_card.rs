//! Example card stories.

use tactum_render::Element;
use tactum_ui::{Component, ExampleCard};

use super::Story;

pub(super) fn stories() -> Vec<Story> {
    vec![
        Story::new(
            "example-card",
            "The default greeting card.",
            ExampleCard::new().render(),
        ),
        Story::new(
            "example-card-custom",
            "A custom title and body.",
            ExampleCard::new()
                .title("Wallet")
                .body(Element::new("p").text("Balance: 3.2 ETH"))
                .render(),
        ),
    ]
}
