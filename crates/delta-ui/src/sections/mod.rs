//! Page sections, top to bottom

pub mod about;
pub mod contact_form;
pub mod footer;
pub mod gallery;
pub mod hero;
pub mod location;
pub mod services;
pub mod testimonials;

pub use about::AboutSection;
pub use contact_form::ContactForm;
pub use footer::FooterSection;
pub use gallery::ProductsGallery;
pub use hero::HeroSection;
pub use location::LocationMap;
pub use services::ServicesSection;
pub use testimonials::TestimonialsCarousel;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_compile() {
        let _ = HeroSection;
        let _ = AboutSection;
        let _ = ServicesSection;
        let _ = ProductsGallery;
        let _ = TestimonialsCarousel;
        let _ = LocationMap;
        let _ = ContactForm;
        let _ = FooterSection;
    }
}
