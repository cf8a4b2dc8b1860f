#![forbid(unsafe_code)]

//! Static gallery for the Tactum component set.
//!
//! Renders every story into one self-contained HTML page with the shipped
//! theme CSS inlined, so the components can be inspected under both schemes
//! without a build pipeline.

pub mod cli;
pub mod page;
pub mod stories;
