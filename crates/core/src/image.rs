//! Image-load fallback
//!
//! An image element starts on its primary source. The first load error swaps
//! it to a placeholder; any later error is ignored so a broken placeholder
//! cannot trigger an endless error/reload cycle.

use url::form_urlencoded;

/// Host serving generated placeholder images
pub const PLACEHOLDER_HOST: &str = "https://via.placeholder.com";

/// Builds a placeholder image URL carrying descriptive text
///
/// The text is form-urlencoded, so spaces become `+`.
///
/// # Examples
///
/// ```
/// use delta_core::image::placeholder_url;
///
/// assert_eq!(
///     placeholder_url(600, 400, "studio photo"),
///     "https://via.placeholder.com/600x400?text=studio+photo"
/// );
/// ```
#[must_use]
pub fn placeholder_url(width: u32, height: u32, text: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(text.as_bytes()).collect();
    format!("{PLACEHOLDER_HOST}/{width}x{height}?text={encoded}")
}

/// Which source an image element currently shows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageState {
    Primary,
    Fallback,
}

/// Image source with a one-shot fallback
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FallbackImage {
    primary: String,
    placeholder: String,
    state: ImageState,
}

impl FallbackImage {
    pub fn new(primary: impl Into<String>, placeholder: impl Into<String>) -> Self {
        Self {
            primary: primary.into(),
            placeholder: placeholder.into(),
            state: ImageState::Primary,
        }
    }

    /// URL the element should currently load
    #[must_use]
    pub fn current_src(&self) -> &str {
        match self.state {
            ImageState::Primary => &self.primary,
            ImageState::Fallback => &self.placeholder,
        }
    }

    #[must_use]
    pub const fn state(&self) -> ImageState {
        self.state
    }

    /// Handles a load error
    ///
    /// Returns the placeholder URL the first time; `None` afterwards.
    pub fn on_error(&mut self) -> Option<&str> {
        match self.state {
            ImageState::Primary => {
                tracing::debug!(primary = %self.primary, "image failed to load, using placeholder");
                self.state = ImageState::Fallback;
                Some(&self.placeholder)
            }
            ImageState::Fallback => None,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;

    #[test]
    fn test_placeholder_url_encodes_hebrew_text() {
        let url = placeholder_url(300, 200, "ציוד צילום");
        assert!(url.starts_with("https://via.placeholder.com/300x200?text="));
        assert!(url.contains('+'));
        assert!(!url.contains(' '));
    }

    #[test]
    fn test_fallback_swaps_once() {
        let mut image = FallbackImage::new("/images/studio-main.jpg", "https://example.com/p.png");
        assert_eq!(image.current_src(), "/images/studio-main.jpg");

        assert_eq!(image.on_error(), Some("https://example.com/p.png"));
        assert_eq!(image.state(), ImageState::Fallback);
        assert_eq!(image.current_src(), "https://example.com/p.png");

        assert_eq!(image.on_error(), None);
        assert_eq!(image.current_src(), "https://example.com/p.png");
    }
}
