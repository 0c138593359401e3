//! The two pages and their paths.

use std::fmt;

const EVENTS_PREFIX: &str = "/events/";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Route {
    /// `/`, the creation form.
    Editor,
    /// `/events/{id}`, the view of one stored event.
    Event(String),
}

impl Route {
    pub fn event(id: impl Into<String>) -> Self {
        Route::Event(id.into())
    }

    /// Match a path against the known pages.
    pub fn parse(path: &str) -> Option<Self> {
        if path == "/" || path.is_empty() {
            return Some(Route::Editor);
        }

        let id = path.strip_prefix(EVENTS_PREFIX)?.trim_end_matches('/');
        if id.is_empty() || id.contains('/') {
            return None;
        }

        Some(Route::Event(id.to_string()))
    }

    pub fn path(&self) -> String {
        match self {
            Route::Editor => "/".to_string(),
            Route::Event(id) => format!("{}{}", EVENTS_PREFIX, id),
        }
    }

    /// Identifier carried by the route, if it is an event page.
    pub fn event_id(&self) -> Option<&str> {
        match self {
            Route::Editor => None,
            Route::Event(id) => Some(id),
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}
