//! Product gallery with category filter pills

use delta_core::catalog;
use delta_core::gallery::{Category, Gallery};
use delta_core::models::Product;
use leptos::prelude::*;

/// Gap between consecutive card entrances
const CARD_STAGGER_MS: usize = 100;

const PILL_SELECTED: &str =
    "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 bg-[#588C7E] text-white shadow-md";
const PILL_IDLE: &str = "px-4 py-2 rounded-full text-sm font-medium transition-all duration-300 bg-white text-gray-700 hover:bg-[#96CEB4] hover:text-white";

/// Filter pill classes for a category
#[must_use]
pub const fn pill_class(selected: bool) -> &'static str {
    if selected { PILL_SELECTED } else { PILL_IDLE }
}

#[component]
pub fn ProductsGallery() -> impl IntoView {
    let gallery = RwSignal::new(Gallery::new(catalog::products()));

    let select = move |category: Category| {
        gallery.update(|gallery| {
            if let Err(e) = gallery.select(category) {
                tracing::warn!(error = %e, "category filter ignored");
            }
        });
    };

    let pills = gallery
        .with_untracked(|gallery| gallery.categories().to_vec())
        .into_iter()
        .map(|category| {
            let label = category.label().to_string();
            let for_class = category.clone();
            let for_pressed = category.clone();
            view! {
                <button
                    type="button"
                    class=move || pill_class(gallery.with(|gallery| gallery.is_selected(&for_class)))
                    aria-pressed=move || {
                        let pressed = gallery.with(|gallery| gallery.is_selected(&for_pressed));
                        if pressed { "true" } else { "false" }
                    }
                    on:click=move |_| select(category.clone())
                >
                    {label}
                </button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="gallery" class="w-full py-12 px-4 md:px-8 bg-gray-50" dir="rtl">
            <div class="max-w-7xl mx-auto">
                <h2 class="text-3xl md:text-4xl font-bold text-center mb-2 text-[#588C7E]">"המוצרים שלנו"</h2>
                <p class="text-center text-gray-600 mb-8 max-w-2xl mx-auto">
                    "אנו מציעים מגוון רחב של מוצרי צילום איכותיים המיוצרים בסטנדרטים הגבוהים ביותר"
                </p>

                <div class="flex flex-wrap justify-center gap-2 mb-10" role="group" aria-label="סינון לפי קטגוריה">
                    {pills}
                </div>

                <div class="grid grid-cols-1 sm:grid-cols-2 lg:grid-cols-3 xl:grid-cols-4 gap-6 md:gap-8">
                    {move || {
                        gallery
                            .with(|gallery| gallery.visible().into_iter().cloned().collect::<Vec<_>>())
                            .into_iter()
                            .enumerate()
                            .map(|(position, product)| view! { <ProductCard product=product position=position /> })
                            .collect::<Vec<_>>()
                    }}
                </div>
            </div>
        </section>
    }
}

#[component]
fn ProductCard(product: Product, position: usize) -> impl IntoView {
    let delay = format!("animation-delay: {}ms", position.saturating_mul(CARD_STAGGER_MS));
    let caption = product.image_caption();

    view! {
        <div
            style=delay
            class="bg-white rounded-lg overflow-hidden shadow-md hover:shadow-xl hover:scale-[1.03] active:scale-[0.98] transition-all duration-300 animate-fade-up"
        >
            <div class="relative h-64 overflow-hidden">
                <div class="absolute inset-0 bg-[#96CEB4] opacity-20"></div>
                <div class="w-full h-full bg-gradient-to-br from-[#96CEB4]/40 to-[#588C7E]/40 flex items-center justify-center">
                    <span class="text-[#588C7E] text-sm">{caption}</span>
                </div>
                <div class="absolute top-3 left-3 bg-[#588C7E] text-white text-xs py-1 px-2 rounded-full">
                    {product.category}
                </div>
            </div>
            <div class="p-5">
                <h3 class="text-xl font-bold text-gray-800 mb-2">{product.title}</h3>
                <p class="text-gray-600 text-sm mb-4">{product.description}</p>
                <button
                    type="button"
                    class="w-full bg-[#96CEB4] hover:bg-[#588C7E] text-white py-2 rounded-md transition-colors duration-300 font-medium"
                >
                    "לפרטים נוספים"
                </button>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pill_class_highlights_selection() {
        assert!(pill_class(true).contains("bg-[#588C7E]"));
        assert!(pill_class(false).contains("bg-white"));
    }
}
