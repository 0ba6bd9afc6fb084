//! Single-page home layout

use delta_core::config::SiteConfig;
use leptos::prelude::*;

use crate::sections::{
    AboutSection, ContactForm, FooterSection, HeroSection, LocationMap, ProductsGallery,
    ServicesSection, TestimonialsCarousel,
};

/// Every section in page order
#[component]
pub fn Home(config: SiteConfig) -> impl IntoView {
    view! {
        <main dir="rtl" lang="he">
            <HeroSection />
            <AboutSection />
            <ServicesSection />
            <ProductsGallery />
            <TestimonialsCarousel auto_play_interval=config.carousel.auto_play_interval_ms />
            <LocationMap config=config.location />
            <ContactForm />
            <FooterSection />
        </main>
    }
}
