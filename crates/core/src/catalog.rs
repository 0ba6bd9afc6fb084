//! Static site content
//!
//! Every list here is rebuilt on each call; components take ownership of the
//! copy they render.

use crate::image::placeholder_url;
use crate::models::{
    BusinessHours, GalleryImage, NavLink, Product, Service, SocialKind, SocialLink, Stat,
    Testimonial,
};

/// Studio name shown in the hero, about and footer sections
pub const STUDIO_NAME: &str = "סטודיו לצילום דלתא";

/// Hero headline, split so the accent part can be coloured
pub const HEADLINE_ACCENT: &str = "סטודיו לצילום";
pub const HEADLINE_REST: &str = "מוביל בישראל";

pub const TAGLINE: &str = "חווית לקוח מושלמת בכל ביקור";

/// Short studio description shared by hero, about and footer
pub const STUDIO_BLURB: &str = "אנחנו סטודיו לצילום מוביל בתחום עם ניסיון של שנים רבות. אנחנו מתמחים במתן שירות מקצועי ואיכותי ללקוחותינו.";

pub const BOOKING_CTA: &str = "קבע תור עכשיו";

/// Hero background photo
pub const HERO_IMAGE: &str = "/photography-studio.jpg";

pub const ABOUT_QUOTE: &str = "אנו מאמינים שכל רגע ראוי להנצחה, וזו המשימה שלנו - לתפוס את הרגעים המיוחדים שלכם באיכות הגבוהה ביותר.";

/// Static services list
#[must_use]
pub fn services() -> Vec<Service> {
    vec![
        Service::new(1, "צילומי פורטרט")
            .with_description("צילומי פורטרט מקצועיים המדגישים את האישיות והייחודיות שלך. מתאים ליחידים, משפחות וקבוצות.")
            .with_icon("M10 9a3 3 0 100-6 3 3 0 000 6zm-7 9a7 7 0 1114 0H3z"),
        Service::new(2, "צילומי מוצר")
            .with_description("צילומי מוצר באיכות גבוהה לחנויות אונליין, קטלוגים ופרסום. מציג את המוצרים שלך בצורה המושכת ביותר.")
            .with_icon("M5 3a2 2 0 00-2 2v2a2 2 0 002 2h2a2 2 0 002-2V5a2 2 0 00-2-2H5zM5 11a2 2 0 00-2 2v2a2 2 0 002 2h2a2 2 0 002-2v-2a2 2 0 00-2-2H5zM11 5a2 2 0 012-2h2a2 2 0 012 2v2a2 2 0 01-2 2h-2a2 2 0 01-2-2V5zM11 13a2 2 0 012-2h2a2 2 0 012 2v2a2 2 0 01-2 2h-2a2 2 0 01-2-2v-2z"),
        Service::new(3, "צילומי אירועים")
            .with_description("הנצחת רגעים מיוחדים באירועים שלך - חתונות, בר/בת מצווה, ימי הולדת ואירועים עסקיים.")
            .with_icon("M17.38 10.79l-2.2-2.2c-.28-.28-.36-.67-.25-1.02.37-1.12.57-2.32.57-3.57 0-.55.45-1 1-1H20c.55 0 1 .45 1 1 0 9.39-7.61 17-17 17-.55 0-1-.45-1-1v-3.49c0-.55.45-1 1-1 1.24 0 2.45-.2 3.57-.57.35-.12.75-.03 1.02.24l2.2 2.2c2.83-1.45 5.15-3.76 6.59-6.59z"),
        Service::new(4, "צילומי נדל\"ן")
            .with_description("צילומי נכסים מקצועיים המדגישים את היתרונות של הנכס שלך. מושלם למכירה, השכרה או פרסום.")
            .with_icon("M3 12l2-2m0 0l7-7 7 7M5 10v10a1 1 0 001 1h3m10-11l2 2m-2-2v10a1 1 0 01-1 1h-3m-6 0a1 1 0 001-1v-4a1 1 0 011-1h2a1 1 0 011 1v4a1 1 0 001 1m-6 0h6"),
        Service::new(5, "צילומי תדמית")
            .with_description("צילומים מקצועיים לעסקים, פרופילים תאגידיים וקמפיינים שיווקיים. מעצב את התדמית העסקית שלך.")
            .with_icon("M21 13.255A23.931 23.931 0 0112 15c-3.183 0-6.22-.62-9-1.745M16 6V4a2 2 0 00-2-2h-4a2 2 0 00-2 2v2m4 6h.01M5 20h14a2 2 0 002-2V8a2 2 0 00-2-2H5a2 2 0 00-2 2v10a2 2 0 002 2z"),
    ]
}

/// Static product list, in display order
#[must_use]
pub fn products() -> Vec<Product> {
    vec![
        Product::new(1, "אלבום תמונות משפחתי", "אלבומים")
            .with_description("אלבום איכותי בכריכת עור לשמירת זכרונות משפחתיים")
            .with_image_url("/images/album.jpg"),
        Product::new(2, "הדפסות קנבס", "הדפסות")
            .with_description("הדפסות איכותיות על קנבס בגדלים שונים")
            .with_image_url("/images/canvas.jpg"),
        Product::new(3, "מסגרות עץ מעוצבות", "מסגרות")
            .with_description("מסגרות עץ בעבודת יד בסגנונות שונים")
            .with_image_url("/images/frame.jpg"),
        Product::new(4, "הדפסות פרימיום", "הדפסות")
            .with_description("הדפסות באיכות גבוהה על נייר ארכיוני")
            .with_image_url("/images/print.jpg"),
        Product::new(5, "אלבום חתונה יוקרתי", "אלבומים")
            .with_description("אלבום חתונה מפואר בעיצוב אישי")
            .with_image_url("/images/wedding-album.jpg"),
        Product::new(6, "קולאז' תמונות", "עיצובים מיוחדים")
            .with_description("עיצוב קולאז' תמונות אישי בגדלים שונים")
            .with_image_url("/images/collage.jpg"),
        Product::new(7, "מגנטים לאירועים", "מוצרים לאירועים")
            .with_description("מגנטים מעוצבים לאירועים ומסיבות")
            .with_image_url("/images/magnets.jpg"),
        Product::new(8, "לוח תמונות משפחתי", "עיצובים מיוחדים")
            .with_description("לוח תמונות משפחתי מעוצב לתלייה")
            .with_image_url("/images/photo-board.jpg"),
    ]
}

/// Static testimonial list
#[must_use]
pub fn testimonials() -> Vec<Testimonial> {
    vec![
        Testimonial::new(1, "שרה לוי", "הצילומים שקיבלנו מהסטודיו היו מדהימים! הצלם ידע בדיוק איך לתפוס את הרגעים המיוחדים שלנו. ממליצה בחום!")
            .with_avatar("/avatars/avatar1.jpg"),
        Testimonial::new(2, "יוסי כהן", "שירות מקצועי ברמה הגבוהה ביותר. הצוות היה קשוב לכל הבקשות שלנו והתוצאות עלו על כל הציפיות.")
            .with_avatar("/avatars/avatar2.jpg"),
        Testimonial::new(3, "מיכל אברהם", "הסטודיו הזה הוא פשוט מהטובים שעבדתי איתם. האיכות של התמונות והיחס האישי הם ברמה אחרת לגמרי.")
            .with_avatar("/avatars/avatar3.jpg"),
        Testimonial::new(4, "דוד ישראלי", "בחרנו בסטודיו לצילום האירוע המשפחתי שלנו וזו הייתה החלטה מצוינת. התמונות מרגשות ומקצועיות.")
            .with_avatar("/avatars/avatar4.jpg"),
        Testimonial::new(5, "רונית שמעוני", "הצלמים בסטודיו יודעים איך לגרום לך להרגיש בנוח מול המצלמה. התוצאות היו טבעיות ומדהימות!")
            .with_avatar("/avatars/avatar5.jpg"),
    ]
}

/// Default opening hours for the location block
#[must_use]
pub fn business_hours() -> Vec<BusinessHours> {
    vec![
        BusinessHours::new("ראשון - חמישי", "09:00 - 20:00"),
        BusinessHours::new("שישי", "09:00 - 14:00"),
        BusinessHours::new("שבת", "סגור"),
    ]
}

/// Opening hours as listed in the footer
#[must_use]
pub fn footer_hours() -> Vec<BusinessHours> {
    vec![
        BusinessHours::new("ראשון - חמישי", "09:00 - 19:00"),
        BusinessHours::new("שישי", "09:00 - 14:00"),
        BusinessHours::new("שבת", "סגור"),
    ]
}

/// Areas of expertise listed on the about section
#[must_use]
pub fn expertise() -> Vec<&'static str> {
    vec![
        "צילומי פורטרט מקצועיים",
        "צילומי אירועים וחתונות",
        "צילומי מוצר לעסקים",
        "עריכת תמונות מתקדמת",
    ]
}

#[must_use]
pub fn stats() -> Vec<Stat> {
    vec![
        Stat::new("15+", "שנות ניסיון"),
        Stat::new("1000+", "לקוחות מרוצים"),
        Stat::new("5000+", "פרויקטים"),
    ]
}

/// Photos on the about section: the wide studio shot, then two tiles
#[must_use]
pub fn about_images() -> Vec<GalleryImage> {
    vec![
        GalleryImage {
            src: "/images/studio-main.jpg".to_string(),
            alt: "סטודיו צילום מקצועי".to_string(),
            caption: "הסטודיו שלנו".to_string(),
            fallback: placeholder_url(600, 400, "סטודיו צילום"),
        },
        GalleryImage {
            src: "/images/camera-equipment.jpg".to_string(),
            alt: "ציוד צילום מתקדם".to_string(),
            caption: "ציוד מתקדם".to_string(),
            fallback: placeholder_url(300, 200, "ציוד צילום"),
        },
        GalleryImage {
            src: "/images/team-working.jpg".to_string(),
            alt: "צוות מקצועי בעבודה".to_string(),
            caption: "הצוות שלנו".to_string(),
            fallback: placeholder_url(300, 200, "צוות מקצועי"),
        },
    ]
}

#[must_use]
pub fn footer_links() -> Vec<NavLink> {
    vec![
        NavLink::new("/", "דף הבית"),
        NavLink::new("/services", "שירותים"),
        NavLink::new("/gallery", "גלריה"),
        NavLink::new("/about", "אודות"),
        NavLink::new("/contact", "צור קשר"),
        NavLink::new("/pricing", "מחירון"),
    ]
}

#[must_use]
pub fn social_links() -> Vec<SocialLink> {
    vec![
        SocialLink::new(SocialKind::Facebook, "https://facebook.com", "פייסבוק"),
        SocialLink::new(SocialKind::Instagram, "https://instagram.com", "אינסטגרם"),
        SocialLink::new(SocialKind::Twitter, "https://twitter.com", "טוויטר"),
        SocialLink::new(SocialKind::WhatsApp, "https://wa.me/9721234567", "וואטסאפ"),
    ]
}

/// Contact lines printed in the footer
pub mod footer_contact {
    pub const ADDRESS: &str = "רחוב הצלמים 123, תל אביב";
    pub const PHONE: &str = "03-1234567";
    pub const WHATSAPP: &str = "050-1234567";
    pub const EMAIL: &str = "info@deltastudio.co.il";
}

/// Copyright line for the given year
#[must_use]
pub fn copyright(year: u32) -> String {
    format!("© {year} {STUDIO_NAME}. כל הזכויות שמורות.")
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    #![allow(clippy::expect_used)]
    #![allow(clippy::panic)]

    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_fixed_list_sizes() {
        assert_eq!(services().len(), 5);
        assert_eq!(products().len(), 8);
        assert_eq!(testimonials().len(), 5);
        assert_eq!(business_hours().len(), 3);
    }

    #[test]
    fn test_ids_are_unique() {
        let product_ids: HashSet<_> = products().iter().map(|p| p.id).collect();
        assert_eq!(product_ids.len(), 8);

        let service_ids: HashSet<_> = services().iter().map(|s| s.id).collect();
        assert_eq!(service_ids.len(), 5);
    }

    #[test]
    fn test_products_span_five_categories() {
        let categories: HashSet<_> = products().into_iter().map(|p| p.category).collect();
        assert_eq!(categories.len(), 5);
    }

    #[test]
    fn test_every_service_has_an_icon() {
        assert!(services().iter().all(|s| !s.icon.is_empty()));
    }

    #[test]
    fn test_about_images_have_placeholders() {
        assert!(
            about_images()
                .iter()
                .all(|image| image.fallback.starts_with("https://via.placeholder.com/"))
        );
    }

    #[test]
    fn test_copyright_line() {
        assert_eq!(copyright(2025), "© 2025 סטודיו לצילום דלתא. כל הזכויות שמורות.");
    }
}
