#![forbid(unsafe_code)]

//! Tactum gallery binary entry point.

use std::fs;
use std::process;

use tracing_subscriber::EnvFilter;

use tactum_gallery::cli;
use tactum_gallery::page::{GalleryPage, SchemeFilter};
use tactum_gallery::stories;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let opts = cli::Opts::parse();
    let mut page = GalleryPage::new(stories::all(), SchemeFilter::from_flag(&opts.theme));

    if opts.list {
        for name in page.story_names() {
            println!("{name}");
        }
        return;
    }

    if let Some(story) = &opts.story {
        if !page.select(story) {
            eprintln!("Unknown story: {story}");
            eprintln!("Run with --list to see available stories.");
            process::exit(1);
        }
    }

    let html = page.to_html();
    match &opts.out {
        Some(path) => {
            if let Err(e) = fs::write(path, html) {
                eprintln!("Failed to write {}: {e}", path.display());
                process::exit(1);
            }
        }
        None => print!("{html}"),
    }
}
