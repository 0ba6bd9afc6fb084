//! Booking call-to-action block

use delta_core::catalog::{BOOKING_CTA, HEADLINE_ACCENT, HEADLINE_REST, TAGLINE};
use leptos::prelude::*;

/// Static block; the button carries no action
#[component]
pub fn ContactForm() -> impl IntoView {
    view! {
        <div class="w-full py-12 px-4 bg-white" dir="rtl">
            <div class="max-w-6xl mx-auto">
                <h2 class="text-3xl font-bold mb-6 text-center text-[#96CEB4]">{format!("{HEADLINE_ACCENT} {HEADLINE_REST}")}</h2>
                <p class="text-lg mb-8 text-center">{TAGLINE}</p>
                <div class="text-center">
                    <button
                        type="button"
                        class="px-6 py-3 rounded-md text-white font-medium bg-[#588C7E]"
                    >
                        {BOOKING_CTA}
                    </button>
                </div>
            </div>
        </div>
    }
}
