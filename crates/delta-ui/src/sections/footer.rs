//! Site footer

use delta_core::catalog::{self, STUDIO_BLURB, STUDIO_NAME, footer_contact};
use delta_core::contact::{mailto_href, tel_href, whatsapp_href};
use delta_core::models::SocialLink;
use leptos::prelude::*;

/// Current calendar year from the browser clock
fn current_year() -> u32 {
    js_sys::Date::new_0().get_full_year()
}

#[component]
pub fn FooterSection() -> impl IntoView {
    let links = catalog::footer_links()
        .into_iter()
        .map(|link| {
            let label = link.label.clone();
            view! {
                <li class="mb-2">
                    <a
                        href=link.href
                        class="text-gray-200 hover:text-white transition-colors duration-300 text-sm block"
                        aria-label=label
                    >
                        {link.label}
                    </a>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let hours = catalog::footer_hours()
        .iter()
        .map(|entry| view! { <li class="mb-2">{entry.summary()}</li> })
        .collect::<Vec<_>>();

    let socials = catalog::social_links()
        .into_iter()
        .map(|link| view! { <SocialIcon link=link /> })
        .collect::<Vec<_>>();

    view! {
        <footer class="bg-gray-800 text-white pt-12 pb-6 font-sans" dir="rtl">
            <div class="container mx-auto px-4">
                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-4 gap-8">
                    <div>
                        <h3 class="text-xl font-bold mb-4 text-[#96CEB4]">{STUDIO_NAME}</h3>
                        <p class="text-gray-300 mb-4 text-sm leading-relaxed">{STUDIO_BLURB}</p>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold mb-4 text-[#96CEB4]">"ניווט מהיר"</h3>
                        <ul>{links}</ul>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold mb-4 text-[#96CEB4]">"צור קשר"</h3>
                        <ul class="text-gray-300">
                            <li class="mb-3 flex items-center">
                                <span class="ml-2 text-[#96CEB4]" aria-hidden="true">"📍"</span>
                                <span class="text-sm">{footer_contact::ADDRESS}</span>
                            </li>
                            <li class="mb-3 flex items-center">
                                <span class="ml-2 text-[#96CEB4]" aria-hidden="true">"📞"</span>
                                <a class="text-sm hover:text-white" href=tel_href(footer_contact::PHONE)>
                                    {footer_contact::PHONE}
                                </a>
                            </li>
                            <li class="mb-3 flex items-center">
                                <span class="ml-2 text-[#96CEB4]" aria-hidden="true">"💬"</span>
                                <a class="text-sm hover:text-white" href=whatsapp_href(footer_contact::WHATSAPP)>
                                    {footer_contact::WHATSAPP}
                                </a>
                            </li>
                            <li class="mb-3 flex items-center">
                                <span class="ml-2 text-[#96CEB4]" aria-hidden="true">"✉"</span>
                                <a class="text-sm hover:text-white" href=mailto_href(footer_contact::EMAIL)>
                                    {footer_contact::EMAIL}
                                </a>
                            </li>
                        </ul>
                    </div>

                    <div>
                        <h3 class="text-xl font-bold mb-4 text-[#96CEB4]">"שעות פעילות"</h3>
                        <ul class="text-gray-300 text-sm">{hours}</ul>
                    </div>
                </div>

                <div class="mt-8 flex justify-center">{socials}</div>

                <div class="border-t border-gray-700 mt-8 pt-8">
                    <div class="text-center text-gray-400 text-sm">
                        <p>{catalog::copyright(current_year())}</p>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn SocialIcon(link: SocialLink) -> impl IntoView {
    view! {
        <a
            href=link.href
            target="_blank"
            rel="noopener noreferrer"
            class="bg-[#588C7E] hover:bg-[#96CEB4] text-white w-10 h-10 inline-flex items-center justify-center rounded-full mx-2 transition-transform duration-300 hover:scale-110"
            aria-label=link.label
        >
            <span class="text-sm font-bold" aria-hidden="true">{link.kind.glyph()}</span>
        </a>
    }
}
