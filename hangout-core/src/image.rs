//! Turning picked image files into embeddable `data:` URLs.
//!
//! Reads run on the async runtime and are never cancelled. When a user picks
//! twice in quick succession, whichever read finishes last is the one applied
//! to the draft.

use std::fmt;
use std::path::Path;

use base64::Engine;
use base64::engine::general_purpose::STANDARD;

use crate::error::ImageError;

/// Which of the two page images a file is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageSlot {
    Foreground,
    Background,
}

impl fmt::Display for ImageSlot {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ImageSlot::Foreground => write!(f, "image"),
            ImageSlot::Background => write!(f, "background"),
        }
    }
}

/// Read an image file into `data:<mime>;base64,<payload>`.
pub async fn read_as_data_url(path: impl AsRef<Path>) -> Result<String, ImageError> {
    let path = path.as_ref();
    let mime = image_mime(path)?;
    let bytes = tokio::fs::read(path).await?;

    tracing::debug!(path = %path.display(), mime, bytes = bytes.len(), "read image");
    Ok(encode_data_url(mime, &bytes))
}

/// MIME type for `path`, guessed from its extension. Only `image/*` passes.
fn image_mime(path: &Path) -> Result<&'static str, ImageError> {
    mime_guess::from_path(path)
        .first_raw()
        .filter(|mime| mime.starts_with("image/"))
        .ok_or_else(|| ImageError::NotAnImage(path.display().to_string()))
}

pub fn encode_data_url(mime: &str, bytes: &[u8]) -> String {
    format!("data:{};base64,{}", mime, STANDARD.encode(bytes))
}

/// The parts of a base64 `data:` URL that are worth showing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DataUrl {
    pub mime: String,
    pub bytes: Vec<u8>,
}

impl DataUrl {
    pub fn parse(url: &str) -> Result<Self, ImageError> {
        let rest = url.strip_prefix("data:").ok_or(ImageError::MalformedDataUrl)?;
        let (header, payload) = rest.split_once(',').ok_or(ImageError::MalformedDataUrl)?;
        let mime = header
            .strip_suffix(";base64")
            .ok_or(ImageError::MalformedDataUrl)?;
        let bytes = STANDARD
            .decode(payload)
            .map_err(|_| ImageError::MalformedDataUrl)?;

        Ok(DataUrl {
            mime: mime.to_string(),
            bytes,
        })
    }
}
