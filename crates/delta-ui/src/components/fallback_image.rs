//! Image with a one-shot placeholder fallback

use delta_core::image::FallbackImage;
use leptos::prelude::*;

/// `<img>` that swaps to `fallback` the first time `src` fails to load
#[component]
pub fn FallbackImg(
    #[prop(into)] src: String,
    #[prop(into)] fallback: String,
    #[prop(into)] alt: String,
    #[prop(optional, into)] class: String,
) -> impl IntoView {
    let image = RwSignal::new(FallbackImage::new(src, fallback));

    let on_error = move |_| {
        image.update(|image| {
            image.on_error();
        });
    };

    view! {
        <img
            src=move || image.with(|image| image.current_src().to_string())
            alt=alt
            class=class
            on:error=on_error
        />
    }
}
