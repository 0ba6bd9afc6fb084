//! Location block: embedded map plus contact details

use delta_core::config::{LocationConfig, MAP_FRAME_SANDBOX, MAP_REFERRER_POLICY, MapView};
use delta_core::contact::{mailto_href, tel_href};
use delta_core::models::BusinessHours;
use delta_core::reveal::RevealLatch;
use leptos::html;
use leptos::prelude::*;
use leptos::tachys::html::attribute::custom::CustomAttribute;

use crate::components::use_reveal;

/// Attributes the typed iframe builder has no setter for
const FRAME_ATTRIBUTES: [(&str, &str); 3] = [
    ("loading", "lazy"),
    ("referrerpolicy", MAP_REFERRER_POLICY),
    ("sandbox", MAP_FRAME_SANDBOX),
];

fn slide_in(visible: bool, base: &str) -> String {
    let state = if visible {
        "opacity-100 translate-x-0"
    } else {
        "opacity-0 translate-x-10"
    };
    format!("{base} {state}")
}

/// Applies per-field overrides on top of a base config
#[must_use]
pub fn resolve_location(
    base: Option<LocationConfig>,
    address: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    business_hours: Option<Vec<BusinessHours>>,
    map_embed_url: Option<String>,
) -> LocationConfig {
    let mut config = base.unwrap_or_default();
    if let Some(address) = address {
        config = config.with_address(address);
    }
    if let Some(phone) = phone {
        config = config.with_phone(phone);
    }
    if let Some(email) = email {
        config = config.with_email(email);
    }
    if let Some(hours) = business_hours {
        config = config.with_business_hours(hours);
    }
    if let Some(url) = map_embed_url {
        config = config.with_map_embed_url(url);
    }
    config
}

#[component]
pub fn LocationMap(
    /// Base settings; every field below overrides one of its fields
    #[prop(optional)]
    config: Option<LocationConfig>,
    #[prop(optional, into)] address: Option<String>,
    #[prop(optional, into)] phone: Option<String>,
    #[prop(optional, into)] email: Option<String>,
    #[prop(optional)] business_hours: Option<Vec<BusinessHours>>,
    /// An empty string renders the setup placeholder instead of a map
    #[prop(optional, into)]
    map_embed_url: Option<String>,
) -> impl IntoView {
    let config = resolve_location(config, address, phone, email, business_hours, map_embed_url);

    let section_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(section_ref, RevealLatch::default());

    let [loading, referrer, sandbox] = FRAME_ATTRIBUTES;
    let map = match config.map_view() {
        MapView::Frame { url } => view! {
            <iframe
                src=url
                title="מיקום הסטודיו"
                class="w-full h-full min-h-[320px] border-0"
                allowfullscreen=true
                aria-label="מפת מיקום הסטודיו"
            ></iframe>
        }
        .attr(loading.0, loading.1)
        .attr(referrer.0, referrer.1)
        .attr(sandbox.0, sandbox.1)
        .into_any(),
        MapView::Placeholder => view! { <MapPlaceholder /> }.into_any(),
    };

    let hours = config
        .business_hours
        .iter()
        .map(|entry| {
            view! {
                <li class="flex justify-between">
                    <span class="font-medium">{format!("{}:", entry.day)}</span>
                    <span class="mr-4">{entry.hours.clone()}</span>
                </li>
            }
        })
        .collect::<Vec<_>>();

    let tel = tel_href(&config.phone);
    let mailto = mailto_href(&config.email);

    view! {
        <section id="contact" class="w-full py-16 bg-gray-50 text-right" dir="rtl" aria-labelledby="location-heading">
            <div node_ref=section_ref class="container mx-auto px-4 md:px-8">
                <h2 id="location-heading" class="text-3xl font-bold mb-8 text-[#588C7E] border-r-4 border-[#96CEB4] pr-4">
                    "המיקום שלנו"
                </h2>

                <div class="grid grid-cols-1 lg:grid-cols-2 gap-8 items-start">
                    <div class=move || slide_in(visible.get(), "bg-white rounded-lg shadow-md overflow-hidden transition-all duration-700")>
                        <div class="aspect-video w-full">{map}</div>
                    </div>

                    <div class=move || slide_in(visible.get(), "bg-white rounded-lg shadow-md p-6 transition-all duration-700 delay-300")>
                        <div class="space-y-6">
                            <ContactRow glyph="📍" title="כתובת">
                                <p class="text-gray-700">{config.address.clone()}</p>
                            </ContactRow>
                            <ContactRow glyph="📞" title="טלפון">
                                <a href=tel class="text-gray-700 hover:text-[#588C7E] transition-colors">
                                    {config.phone.clone()}
                                </a>
                            </ContactRow>
                            <ContactRow glyph="✉" title="דוא״ל">
                                <a href=mailto class="text-gray-700 hover:text-[#588C7E] transition-colors">
                                    {config.email.clone()}
                                </a>
                            </ContactRow>
                            <ContactRow glyph="🕒" title="שעות פעילות">
                                <ul class="space-y-1 text-gray-700">{hours}</ul>
                            </ContactRow>
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ContactRow(glyph: &'static str, title: &'static str, children: Children) -> impl IntoView {
    view! {
        <div class="flex items-start gap-4">
            <div class="mt-1 bg-[#96CEB4] p-3 rounded-full text-white" aria-hidden="true">{glyph}</div>
            <div>
                <h3 class="font-bold text-lg text-[#588C7E]">{title}</h3>
                {children()}
            </div>
        </div>
    }
}

#[component]
fn MapPlaceholder() -> impl IntoView {
    view! {
        <div class="w-full h-full min-h-[320px] flex items-center justify-center bg-gray-200 text-gray-600">
            <div class="text-center p-4">
                <div class="mx-auto text-4xl mb-2 text-[#588C7E]" aria-hidden="true">"📍"</div>
                <p class="font-medium">"להטמעת המפה, הוסף את כתובת ה-URL של המפה מ-Google Maps"</p>
                <p class="text-sm mt-2">
                    "1. פתח את Google Maps והזן את כתובת העסק"
                    <br />
                    "2. לחץ על \"שתף\" ובחר \"הטמע מפה\""
                    <br />
                    "3. העתק את קוד ה-iframe והשתמש ב-src URL בהגדרת map_embed_url"
                </p>
            </div>
        </div>
    }
}
