use anyhow::Result;
use hangout_core::link::{LinkOpener, go_to_external_link};
use owo_colors::OwoColorize;

/// Opens links in the default browser as a separate process.
pub struct SystemOpener;

impl LinkOpener for SystemOpener {
    fn open(&self, url: &str) -> std::io::Result<()> {
        open::that_detached(url)
    }
}

/// Open `link` if it is (or can be made into) a URL. Anything else is ignored.
pub fn run(link: &str) -> Result<()> {
    if let Some(url) = go_to_external_link(link, &SystemOpener) {
        println!("  Opened {}", url.dimmed());
    }
    Ok(())
}
