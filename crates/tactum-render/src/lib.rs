#![forbid(unsafe_code)]

//! Markup kernel: the element tree components render into, and its
//! HTML serialization.

pub mod element;
pub mod writer;

pub use element::{Element, Node};
pub use writer::{escape_attr, escape_text, render, render_element};
