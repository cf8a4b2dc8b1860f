#![forbid(unsafe_code)]

//! Command-line argument parsing for the gallery.
//!
//! Parses args manually (no external dependencies) to keep the binary lean.
//! Supports environment variable overrides via `TACTUM_GALLERY_*` prefix.

use std::env;
use std::path::PathBuf;
use std::process;

const VERSION: &str = env!("CARGO_PKG_VERSION");

const HELP_TEXT: &str = "\
Tactum Gallery — static showcase of every shipped component

USAGE:
    tactum-gallery [OPTIONS]

OPTIONS:
    --story=NAME       Render only the named story (see --list)
    --theme=SCHEME     Scheme to showcase: 'light', 'dark', or 'both' (default: both)
    --out=PATH         Write the page to PATH instead of stdout
    --list             List story names and exit
    --help, -h         Show this help message
    --version, -V      Show version

ENVIRONMENT VARIABLES:
    TACTUM_GALLERY_THEME   Override --theme (light|dark|both)
    TACTUM_GALLERY_OUT     Override --out";

/// Parsed command-line options.
pub struct Opts {
    /// Render only this story, when set.
    pub story: Option<String>,
    /// Scheme selection: "light", "dark", or "both".
    pub theme: String,
    /// Output path; stdout when unset.
    pub out: Option<PathBuf>,
    /// List stories instead of rendering.
    pub list: bool,
}

impl Default for Opts {
    fn default() -> Self {
        Self {
            story: None,
            theme: "both".into(),
            out: None,
            list: false,
        }
    }
}

impl Opts {
    /// Parse command-line arguments and environment variables.
    ///
    /// Environment variables take precedence over defaults but are overridden
    /// by explicit command-line flags.
    pub fn parse() -> Self {
        let mut opts = Self::default();

        if let Ok(val) = env::var("TACTUM_GALLERY_THEME") {
            opts.theme = val;
        }
        if let Ok(val) = env::var("TACTUM_GALLERY_OUT") {
            opts.out = Some(PathBuf::from(val));
        }

        for arg in env::args().skip(1) {
            match arg.as_str() {
                "--help" | "-h" => {
                    println!("{HELP_TEXT}");
                    process::exit(0);
                }
                "--version" | "-V" => {
                    println!("tactum-gallery {VERSION}");
                    process::exit(0);
                }
                "--list" => {
                    opts.list = true;
                }
                other => {
                    if let Some(val) = other.strip_prefix("--story=") {
                        opts.story = Some(val.to_string());
                    } else if let Some(val) = other.strip_prefix("--theme=") {
                        match val {
                            "light" | "dark" | "both" => opts.theme = val.to_string(),
                            _ => {
                                eprintln!("Invalid --theme value: {val}");
                                process::exit(1);
                            }
                        }
                    } else if let Some(val) = other.strip_prefix("--out=") {
                        opts.out = Some(PathBuf::from(val));
                    } else {
                        eprintln!("Unknown argument: {other}");
                        eprintln!("Run with --help for usage information.");
                        process::exit(1);
                    }
                }
            }
        }

        opts
    }
}
