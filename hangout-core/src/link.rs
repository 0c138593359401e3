//! External links typed by event creators.

use url::Url;

/// Something that can show a URL to the user outside the app.
pub trait LinkOpener {
    fn open(&self, url: &str) -> std::io::Result<()>;
}

/// Make free text openable: add `https://` when no http(s) scheme is given,
/// then keep it only if it parses as a URL.
///
/// The returned text is the candidate as built, not the parser's normalized
/// form, so `http://already.com` stays `http://already.com`.
pub fn sanitize_link(text: &str) -> Option<String> {
    let candidate = if text.starts_with("https://") || text.starts_with("http://") {
        text.to_string()
    } else {
        format!("https://{}", text)
    };

    Url::parse(&candidate).ok().map(|_| candidate)
}

/// Open `text` if it sanitizes to a URL. Invalid input is ignored.
///
/// Returns the URL that was handed to the opener.
pub fn go_to_external_link(text: &str, opener: &dyn LinkOpener) -> Option<String> {
    let Some(url) = sanitize_link(text) else {
        tracing::debug!(text, "ignoring link that is not a URL");
        return None;
    };

    if let Err(e) = opener.open(&url) {
        tracing::warn!(%url, error = %e, "could not open link");
        return None;
    }

    Some(url)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        opened: RefCell<Vec<String>>,
    }

    impl LinkOpener for Recorder {
        fn open(&self, url: &str) -> std::io::Result<()> {
            self.opened.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    #[test]
    fn adds_https_to_bare_hosts() {
        assert_eq!(
            sanitize_link("example.com/x").as_deref(),
            Some("https://example.com/x")
        );
    }

    #[test]
    fn keeps_existing_scheme_unchanged() {
        assert_eq!(
            sanitize_link("http://already.com").as_deref(),
            Some("http://already.com")
        );
        assert_eq!(
            sanitize_link("https://secure.example.org/a?b=c").as_deref(),
            Some("https://secure.example.org/a?b=c")
        );
    }

    #[test]
    fn rejects_text_that_is_not_a_url() {
        assert_eq!(sanitize_link("not a url"), None);
        assert_eq!(sanitize_link(""), None);
    }

    #[test]
    fn opens_valid_links() {
        let recorder = Recorder::default();
        let opened = go_to_external_link("example.com/x", &recorder);

        assert_eq!(opened.as_deref(), Some("https://example.com/x"));
        assert_eq!(*recorder.opened.borrow(), vec!["https://example.com/x".to_string()]);
    }

    #[test]
    fn invalid_links_open_nothing() {
        let recorder = Recorder::default();
        assert_eq!(go_to_external_link("not a url", &recorder), None);
        assert!(recorder.opened.borrow().is_empty());
    }
}
