//! Site configuration
//!
//! Every field has a default, so a configuration file only needs to name the
//! values it overrides. Both TOML and JSON are accepted.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::carousel::DEFAULT_AUTO_PLAY_INTERVAL;
use crate::catalog;
use crate::error::Error;
use crate::models::BusinessHours;
use crate::result::Result;

/// Default embed URL for the studio map
pub const DEFAULT_MAP_EMBED_URL: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3381.0223352426196!2d34.7818!3d32.0853!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x0%3A0x0!2zMzLCsDA1JzA3LjEiTiAzNMKwNDYnNTQuNSJF!5e0!3m2!1sen!2sil!4v1620000000000!5m2!1sen!2sil";

/// Referrer policy applied to the map frame
pub const MAP_REFERRER_POLICY: &str = "no-referrer-when-downgrade";

/// Sandbox flags applied to the map frame
pub const MAP_FRAME_SANDBOX: &str = "allow-scripts allow-same-origin allow-popups";

/// Testimonials carousel settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CarouselConfig {
    /// Milliseconds between automatic advances
    pub auto_play_interval_ms: u64,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            auto_play_interval_ms: 5000,
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub const fn auto_play_interval(&self) -> Duration {
        Duration::from_millis(self.auto_play_interval_ms)
    }
}

/// What the map slot renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapView {
    /// Embedded third-party map
    Frame { url: String },
    /// Instructions for adding a map URL; no network request is made
    Placeholder,
}

/// Location and contact block settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocationConfig {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub business_hours: Vec<BusinessHours>,
    pub map_embed_url: Option<String>,
}

impl Default for LocationConfig {
    fn default() -> Self {
        Self {
            address: "רחוב הרצל 123, תל אביב".to_string(),
            phone: "03-1234567".to_string(),
            email: "info@photostudio.co.il".to_string(),
            business_hours: catalog::business_hours(),
            map_embed_url: Some(DEFAULT_MAP_EMBED_URL.to_string()),
        }
    }
}

impl LocationConfig {
    /// Builder pattern: set address
    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = address.into();
        self
    }

    /// Builder pattern: set phone
    pub fn with_phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = phone.into();
        self
    }

    /// Builder pattern: set email
    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Builder pattern: set opening hours
    #[must_use]
    pub fn with_business_hours(mut self, business_hours: Vec<BusinessHours>) -> Self {
        self.business_hours = business_hours;
        self
    }

    /// Builder pattern: set map embed URL
    pub fn with_map_embed_url(mut self, url: impl Into<String>) -> Self {
        self.map_embed_url = Some(url.into());
        self
    }

    /// Builder pattern: render the placeholder instead of a map
    #[must_use]
    pub fn without_map(mut self) -> Self {
        self.map_embed_url = None;
        self
    }

    /// Map slot contents; a blank URL counts as no URL
    #[must_use]
    pub fn map_view(&self) -> MapView {
        match self.map_embed_url.as_deref().map(str::trim) {
            Some(url) if !url.is_empty() => MapView::Frame {
                url: url.to_string(),
            },
            _ => MapView::Placeholder,
        }
    }
}

/// Whole-site configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    pub carousel: CarouselConfig,
    pub location: LocationConfig,
}

impl SiteConfig {
    /// Parses and validates a TOML document
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParseFailed`] on malformed input and
    /// [`Error::InvalidConfig`] if validation fails.
    pub fn from_toml_str(input: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(input).map_err(|e| Error::config_parse_failed("TOML", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Parses and validates a JSON document
    ///
    /// # Errors
    ///
    /// Returns [`Error::ConfigParseFailed`] on malformed input and
    /// [`Error::InvalidConfig`] if validation fails.
    pub fn from_json_str(input: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(input)
            .map_err(|e| Error::config_parse_failed("JSON", e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] for a zero autoplay interval.
    pub fn validate(&self) -> Result<()> {
        if self.carousel.auto_play_interval_ms == 0 {
            return Err(Error::invalid_config(
                "carousel.auto_play_interval_ms must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Default autoplay period as a plain millisecond count, for component props
#[must_use]
pub fn default_auto_play_interval_ms() -> u64 {
    u64::try_from(DEFAULT_AUTO_PLAY_INTERVAL.as_millis()).unwrap_or(5000)
}
