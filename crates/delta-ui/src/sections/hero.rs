//! Full-screen hero with staggered headline reveals

use delta_core::catalog::{
    BOOKING_CTA, HEADLINE_ACCENT, HEADLINE_REST, HERO_IMAGE, STUDIO_BLURB, STUDIO_NAME, TAGLINE,
};
use delta_core::image::placeholder_url;
use leptos::prelude::*;

use crate::components::{FallbackImg, Reveal};

#[component]
pub fn HeroSection() -> impl IntoView {
    let label = format!("{STUDIO_NAME} - {HEADLINE_ACCENT} {HEADLINE_REST}");

    view! {
        <section
            class="relative h-screen w-full overflow-hidden bg-black text-right"
            dir="rtl"
            aria-label=label
        >
            <div class="absolute inset-0 z-0">
                <FallbackImg
                    src=HERO_IMAGE
                    fallback=placeholder_url(1920, 1080, STUDIO_NAME)
                    alt=STUDIO_NAME
                    class="h-full w-full object-cover"
                />
                <div class="absolute inset-0 bg-black bg-opacity-50"></div>
            </div>

            <div class="relative z-10 h-full w-full flex flex-col justify-center items-end px-6 md:px-12 lg:px-24">
                <div class="max-w-2xl">
                    <Reveal delay=0 class="mb-4">
                        <h2 class="text-lg md:text-xl text-white font-light tracking-wider">
                            {STUDIO_NAME}
                        </h2>
                    </Reveal>

                    <Reveal delay=200 class="mb-6">
                        <h1 class="text-4xl md:text-5xl lg:text-6xl font-bold text-white leading-tight">
                            <span class="text-[#96CEB4]">{HEADLINE_ACCENT}</span>
                            " "
                            {HEADLINE_REST}
                        </h1>
                    </Reveal>

                    <Reveal delay=400 class="mb-8">
                        <p class="text-xl md:text-2xl text-white/90 font-light">{TAGLINE}</p>
                    </Reveal>

                    <Reveal delay=600 class="mb-10">
                        <p class="text-white/80 text-base md:text-lg max-w-md">{STUDIO_BLURB}</p>
                    </Reveal>

                    <Reveal delay=800>
                        <a
                            href="#contact"
                            class="inline-block px-8 py-4 bg-[#96CEB4] hover:bg-[#588C7E] text-white font-medium rounded-md transition-all duration-300 transform hover:scale-105 focus:outline-none focus:ring-2 focus:ring-[#96CEB4] focus:ring-opacity-50"
                            aria-label=format!("{BOOKING_CTA} ב{STUDIO_NAME}")
                        >
                            {BOOKING_CTA}
                        </a>
                    </Reveal>
                </div>
            </div>

            <Reveal delay=1000 class="absolute bottom-10 left-10 z-10">
                <div class="w-24 h-24 border-2 border-[#96CEB4] opacity-50 rounded-full animate-pulse"></div>
            </Reveal>
            <Reveal delay=1200 class="absolute top-20 right-20 z-10">
                <div class="w-16 h-16 border-2 border-[#588C7E] opacity-30 rounded-full animate-ping"></div>
            </Reveal>
        </section>
    }
}
