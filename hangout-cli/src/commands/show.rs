use anyhow::{Context, Result};
use hangout_core::{Hangout, Route, ViewState, Viewer};
use owo_colors::OwoColorize;

use crate::commands::open_link::SystemOpener;
use crate::render::Render;

pub fn run(hangout: &Hangout, target: &str, json: bool, open_link: Option<usize>) -> Result<()> {
    let id = event_id(target);
    let store = hangout.store()?;

    if json {
        let raw = match id.as_deref() {
            Some(id) => store.get_raw(id)?,
            None => None,
        };
        let raw = raw.with_context(|| format!("No event stored for '{}'", target))?;
        match serde_json::from_str::<serde_json::Value>(&raw) {
            Ok(value) => println!("{}", serde_json::to_string_pretty(&value)?),
            Err(_) => println!("{}", raw),
        }
        return Ok(());
    }

    let mut viewer = Viewer::new();
    let state = viewer.load(&store, id.as_deref());
    println!("{}", state.render());

    if let (Some(n), ViewState::Loaded(view)) = (open_link, state) {
        let opened = n
            .checked_sub(1)
            .and_then(|index| view.open_link(index, &SystemOpener));
        if let Some(url) = opened {
            println!();
            println!("  Opened {}", url.dimmed());
        }
    }

    Ok(())
}

/// Accept either a bare id or an event page path.
fn event_id(target: &str) -> Option<String> {
    let target = target.trim();

    if target.starts_with('/') {
        return Route::parse(target).and_then(|r| r.event_id().map(str::to_string));
    }

    (!target.is_empty()).then(|| target.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bare_ids_and_paths() {
        assert_eq!(event_id("abc").as_deref(), Some("abc"));
        assert_eq!(event_id("/events/abc").as_deref(), Some("abc"));
        assert_eq!(event_id("/").as_deref(), None);
        assert_eq!(event_id("/elsewhere").as_deref(), None);
        assert_eq!(event_id("  ").as_deref(), None);
    }
}
