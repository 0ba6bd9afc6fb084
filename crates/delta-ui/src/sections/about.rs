//! About section: studio story, expertise, stats and photo grid

use delta_core::catalog::{self, ABOUT_QUOTE, STUDIO_BLURB};
use delta_core::models::GalleryImage;
use leptos::prelude::*;

use crate::components::{FallbackImg, Reveal};

/// Placement of one photo in the about grid
#[derive(Clone, Copy)]
struct Tile {
    delay: u64,
    span: &'static str,
    height: &'static str,
    caption: &'static str,
}

const WIDE: Tile = Tile {
    delay: 0,
    span: "col-span-2",
    height: "h-64",
    caption: "text-white p-4 font-medium",
};

const fn small(delay: u64) -> Tile {
    Tile {
        delay,
        span: "",
        height: "h-48",
        caption: "text-white p-3 text-sm",
    }
}

/// Tiles in display order, matching `catalog::about_images`
const PHOTO_TILES: [Tile; 3] = [WIDE, small(300), small(500)];

#[component]
pub fn AboutSection() -> impl IntoView {
    let expertise = catalog::expertise()
        .into_iter()
        .map(|item| {
            view! {
                <li class="flex items-center">
                    <span class="inline-block w-2 h-2 rounded-full bg-[#96CEB4] ml-2"></span>
                    <span>{item}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let stats = catalog::stats()
        .into_iter()
        .map(|stat| {
            view! {
                <div class="flex items-center bg-white py-3 px-5 rounded-full shadow-sm">
                    <span class="text-2xl font-bold text-[#96CEB4] ml-2">{stat.value}</span>
                    <span class="text-gray-700">{stat.label}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let photos = catalog::about_images()
        .into_iter()
        .zip(PHOTO_TILES)
        .map(|(image, tile)| {
            view! {
                <Reveal delay=tile.delay class=tile.span>
                    <AboutPhoto image=image tile=tile />
                </Reveal>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section
            id="about"
            class="py-16 bg-gradient-to-br from-white to-gray-100"
            dir="rtl"
            aria-labelledby="about-heading"
        >
            <div class="container mx-auto px-4 md:px-8">
                <div class="grid grid-cols-1 md:grid-cols-2 gap-12 items-center">
                    <div class="order-2 md:order-1">
                        <Reveal>
                            <h2 id="about-heading" class="text-3xl md:text-4xl font-bold mb-6 text-[#588C7E]">
                                "אודות סטודיו לצילום דלתא"
                            </h2>
                        </Reveal>

                        <Reveal delay=200>
                            <p class="text-lg mb-6 leading-relaxed text-gray-700">{STUDIO_BLURB}</p>
                        </Reveal>

                        <Reveal delay=400>
                            <div class="bg-white p-6 rounded-lg shadow-md border-r-4 border-[#96CEB4] mb-6">
                                <h3 class="text-xl font-semibold mb-3 text-[#588C7E]">"המומחיות שלנו"</h3>
                                <ul class="space-y-2">{expertise}</ul>
                            </div>
                        </Reveal>

                        <Reveal delay=600>
                            <div class="flex flex-wrap gap-4">{stats}</div>
                        </Reveal>
                    </div>

                    <div class="order-1 md:order-2">
                        <div class="grid grid-cols-2 gap-4 relative">
                            {photos}
                            <Reveal delay=700 class="col-span-2">
                                <div class="bg-[#588C7E]/10 p-4 rounded-lg border border-[#588C7E]/30">
                                    <blockquote class="italic text-gray-700">
                                        <span class="text-4xl text-[#96CEB4]">"\""</span>
                                        {ABOUT_QUOTE}
                                        <span class="text-4xl text-[#96CEB4]">"\""</span>
                                    </blockquote>
                                    <p class="text-left mt-2 text-sm text-gray-600">"- צוות סטודיו דלתא"</p>
                                </div>
                            </Reveal>
                        </div>
                    </div>
                </div>

                <Reveal delay=800 class="mt-16 text-center">
                    <div class="bg-[#588C7E] text-white p-8 rounded-lg shadow-lg max-w-3xl mx-auto">
                        <h3 class="text-2xl font-bold mb-4">"מעוניינים לשמוע עוד?"</h3>
                        <p class="mb-6">
                            "אנחנו כאן כדי להפוך את החזון שלכם למציאות מצולמת. צרו איתנו קשר עוד היום!"
                        </p>
                        <a
                            href="#contact"
                            class="inline-block bg-white text-[#588C7E] px-6 py-3 rounded-full font-medium hover:bg-gray-100 transition-colors duration-300 shadow-md"
                            aria-label="צור קשר עם הסטודיו"
                        >
                            "צרו קשר עכשיו"
                        </a>
                    </div>
                </Reveal>
            </div>
        </section>
    }
}

#[component]
fn AboutPhoto(image: GalleryImage, tile: Tile) -> impl IntoView {
    view! {
        <div class=format!("relative {} overflow-hidden rounded-lg shadow-lg", tile.height)>
            <FallbackImg
                src=image.src
                fallback=image.fallback
                alt=image.alt
                class="absolute inset-0 h-full w-full object-cover"
            />
            <div class="absolute inset-0 bg-gradient-to-t from-black/60 to-transparent flex items-end">
                <p class=tile.caption>{image.caption}</p>
            </div>
        </div>
    }
}
