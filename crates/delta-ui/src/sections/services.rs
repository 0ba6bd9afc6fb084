//! Services grid, revealed as a whole the first time it scrolls into view

use delta_core::catalog;
use delta_core::models::Service;
use delta_core::reveal::RevealLatch;
use leptos::html;
use leptos::prelude::*;

use crate::components::use_reveal;

/// Gap between consecutive card entrances
const CARD_STAGGER_MS: usize = 200;

fn shown_or_hidden(visible: bool, shown: &str, hidden: &str) -> String {
    if visible {
        shown.to_string()
    } else {
        hidden.to_string()
    }
}

#[component]
pub fn ServicesSection() -> impl IntoView {
    let section_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(section_ref, RevealLatch::default());

    let cards = catalog::services()
        .into_iter()
        .enumerate()
        .map(|(position, service)| {
            view! { <ServiceCard service=service position=position visible=visible /> }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="services" dir="rtl" class="py-16 px-4 bg-gray-50" aria-labelledby="services-heading">
            <div node_ref=section_ref class="max-w-6xl mx-auto">
                <div class="text-center mb-12">
                    <h2
                        id="services-heading"
                        class=move || {
                            shown_or_hidden(
                                visible.get(),
                                "text-3xl md:text-4xl font-bold mb-4 text-gray-800 transition-all duration-700 opacity-100 translate-y-0",
                                "text-3xl md:text-4xl font-bold mb-4 text-gray-800 transition-all duration-700 opacity-0 -translate-y-5",
                            )
                        }
                    >
                        "השירותים שלנו"
                    </h2>
                    <div class=move || {
                        shown_or_hidden(
                            visible.get(),
                            "w-24 h-1 bg-[#96CEB4] mx-auto mb-6 transition-all duration-700",
                            "w-0 h-1 bg-[#96CEB4] mx-auto mb-6 transition-all duration-700",
                        )
                    }></div>
                    <p class=move || {
                        shown_or_hidden(
                            visible.get(),
                            "text-gray-600 max-w-2xl mx-auto text-lg transition-opacity duration-700 delay-200 opacity-100",
                            "text-gray-600 max-w-2xl mx-auto text-lg transition-opacity duration-700 delay-200 opacity-0",
                        )
                    }>
                        "אנו מציעים מגוון רחב של שירותי צילום מקצועיים המותאמים לצרכים האישיים והעסקיים שלך"
                    </p>
                </div>

                <div class="grid grid-cols-1 md:grid-cols-2 lg:grid-cols-3 gap-8">{cards}</div>

                <div class=move || {
                    shown_or_hidden(
                        visible.get(),
                        "text-center mt-16 transition-all duration-700 delay-500 opacity-100 translate-y-0",
                        "text-center mt-16 transition-all duration-700 delay-500 opacity-0 translate-y-8",
                    )
                }>
                    <a
                        href="#contact"
                        class="inline-block bg-[#588C7E] hover:bg-[#96CEB4] text-white font-medium py-3 px-8 rounded-lg transition-colors duration-300 shadow-md hover:shadow-lg"
                        aria-label="צור קשר לתיאום פגישה"
                    >
                        "צור קשר לתיאום פגישה"
                    </a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn ServiceCard(service: Service, position: usize, visible: ReadSignal<bool>) -> impl IntoView {
    let delay = format!("transition-delay: {}ms", position.saturating_mul(CARD_STAGGER_MS));
    let read_more = format!("קרא עוד על {}", service.title);

    view! {
        <div
            style=delay
            class=move || {
                shown_or_hidden(
                    visible.get(),
                    "bg-white rounded-lg shadow-lg overflow-hidden hover:shadow-xl hover:-translate-y-2 transition-all duration-500 flex flex-col h-full opacity-100 translate-y-0",
                    "bg-white rounded-lg shadow-lg overflow-hidden transition-all duration-500 flex flex-col h-full opacity-0 translate-y-12",
                )
            }
        >
            <div class="p-6 flex flex-col h-full">
                <div class="mb-4 bg-[#96CEB4] bg-opacity-20 w-16 h-16 rounded-full flex items-center justify-center mx-auto">
                    <svg class="w-8 h-8 text-[#588C7E]" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                        <path d=service.icon />
                    </svg>
                </div>
                <h3 class="text-xl font-bold mb-3 text-center text-gray-800">{service.title}</h3>
                <p class="text-gray-600 text-center flex-grow">{service.description}</p>
                <div class="mt-6 text-center">
                    <button
                        class="inline-flex items-center text-[#588C7E] hover:text-[#96CEB4] transition-colors duration-300 font-medium"
                        aria-label=read_more
                    >
                        <span>"קרא עוד"</span>
                        <svg class="w-5 h-5 mr-2 transform rotate-180" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                            <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M17 8l4 4m0 0l-4 4m4-4H3" />
                        </svg>
                    </button>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shown_or_hidden_picks_by_visibility() {
        assert_eq!(shown_or_hidden(true, "a", "b"), "a");
        assert_eq!(shown_or_hidden(false, "a", "b"), "b");
    }
}
