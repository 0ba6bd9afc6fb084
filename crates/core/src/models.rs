//! Content records shown on the site

use serde::{Deserialize, Serialize};

/// A photography service card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Service {
    pub id: u32,
    pub title: String,
    pub description: String,
    /// SVG path data for the card icon (24x24 viewBox)
    pub icon: String,
}

impl Service {
    /// Creates a service with an empty description and icon
    pub fn new(id: u32, title: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            icon: String::new(),
        }
    }

    /// Builder pattern: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder pattern: set icon path data
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = icon.into();
        self
    }
}

/// A product sold by the studio
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Product {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub image_url: String,
    pub category: String,
}

impl Product {
    /// Creates a product in the given category
    pub fn new(id: u32, title: impl Into<String>, category: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            description: String::new(),
            image_url: String::new(),
            category: category.into(),
        }
    }

    /// Builder pattern: set description
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Builder pattern: set image URL
    pub fn with_image_url(mut self, image_url: impl Into<String>) -> Self {
        self.image_url = image_url.into();
        self
    }

    /// Text shown in the image slot until real product photos exist
    #[must_use]
    pub fn image_caption(&self) -> String {
        format!("תמונה: {}", self.title)
    }
}

/// A customer quote
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Testimonial {
    pub id: u32,
    pub name: String,
    pub quote: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

impl Testimonial {
    /// Creates a testimonial without an avatar
    pub fn new(id: u32, name: impl Into<String>, quote: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            quote: quote.into(),
            avatar: None,
        }
    }

    /// Builder pattern: set avatar image
    pub fn with_avatar(mut self, avatar: impl Into<String>) -> Self {
        self.avatar = Some(avatar.into());
        self
    }

    /// First character of the name, shown when there is no avatar
    #[must_use]
    pub fn initial(&self) -> String {
        self.name.chars().next().map(String::from).unwrap_or_default()
    }
}

/// Opening hours for a range of days
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BusinessHours {
    pub day: String,
    pub hours: String,
}

impl BusinessHours {
    pub fn new(day: impl Into<String>, hours: impl Into<String>) -> Self {
        Self {
            day: day.into(),
            hours: hours.into(),
        }
    }

    /// "day: hours" line used in the footer
    #[must_use]
    pub fn summary(&self) -> String {
        format!("{}: {}", self.day, self.hours)
    }
}

/// Headline figure on the about section ("15+ שנות ניסיון")
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stat {
    pub value: String,
    pub label: String,
}

impl Stat {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }
}

/// Captioned photo with a placeholder used when the photo fails to load
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub src: String,
    pub alt: String,
    pub caption: String,
    pub fallback: String,
}

/// Footer navigation entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    pub fn new(href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            href: href.into(),
            label: label.into(),
        }
    }
}

/// Social network a footer icon links to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialKind {
    Facebook,
    Instagram,
    Twitter,
    WhatsApp,
}

impl SocialKind {
    /// Short glyph rendered inside the round icon button
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::Facebook => "f",
            Self::Instagram => "ig",
            Self::Twitter => "x",
            Self::WhatsApp => "wa",
        }
    }
}

/// Footer social icon
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLink {
    pub kind: SocialKind,
    pub href: String,
    pub label: String,
}

impl SocialLink {
    pub fn new(kind: SocialKind, href: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            kind,
            href: href.into(),
            label: label.into(),
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
    fn test_product_builder_pattern() {
        let product = Product::new(1, "אלבום", "אלבומים")
            .with_description("כריכת עור")
            .with_image_url("/images/album.jpg");

        assert_eq!(product.category, "אלבומים");
        assert_eq!(product.description, "כריכת עור");
        assert_eq!(product.image_url, "/images/album.jpg");
        assert_eq!(product.image_caption(), "תמונה: אלבום");
    }

    #[test]
    fn test_testimonial_initial() {
        let testimonial = Testimonial::new(1, "שרה לוי", "מדהים");
        assert_eq!(testimonial.initial(), "ש");
        assert!(testimonial.avatar.is_none());

        let anonymous = Testimonial::new(2, "", "ללא שם");
        assert_eq!(anonymous.initial(), "");
    }

    #[test]
    fn test_testimonial_serialization_skips_missing_avatar() -> Result<(), Box<dyn std::error::Error>> {
        let json = serde_json::to_string(&Testimonial::new(3, "דוד", "טוב"))?;
        assert!(!json.contains("avatar"));

        let with_avatar: Testimonial = serde_json::from_str(
            r#"{"id": 4, "name": "מיכל", "quote": "נהדר", "avatar": "/avatars/a.jpg"}"#,
        )?;
        assert_eq!(with_avatar.avatar.as_deref(), Some("/avatars/a.jpg"));
        Ok(())
    }

    #[test]
    fn test_business_hours_summary() {
        let hours = BusinessHours::new("שישי", "09:00 - 14:00");
        assert_eq!(hours.summary(), "שישי: 09:00 - 14:00");
    }

    #[test]
    fn test_social_kind_serialization() -> Result<(), Box<dyn std::error::Error>> {
        assert_eq!(serde_json::to_string(&SocialKind::WhatsApp)?, r#""whatsapp""#);
        Ok(())
    }
}
