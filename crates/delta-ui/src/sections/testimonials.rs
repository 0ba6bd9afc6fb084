//! Testimonials carousel
//!
//! All index and timer decisions live in [`Carousel`]; this component only
//! turns [`TimerDirective`]s into a gloo [`Interval`]. Each interval carries
//! the token it was started with, so a tick from a replaced timer is ignored
//! by the state machine even if the browser delivers it late.

use std::time::Duration;

use delta_core::carousel::{Carousel, TimerDirective};
use delta_core::catalog;
use delta_core::config::default_auto_play_interval_ms;
use delta_core::image::placeholder_url;
use delta_core::models::Testimonial;
use gloo_timers::callback::Interval;
use leptos::prelude::*;

use crate::components::FallbackImg;
use crate::error::timer_millis;

type Reviews = Carousel<Testimonial>;
type IntervalSlot = StoredValue<Option<Interval>, LocalStorage>;

const QUOTE_ICON: &str = "M14.017 21v-7.391c0-5.704 3.731-9.57 8.983-10.609l.995 2.151c-2.432.917-3.995 3.638-3.995 5.849h4v10h-9.983zm-14.017 0v-7.391c0-5.704 3.748-9.57 9-10.609l.996 2.151c-2.433.917-3.996 3.638-3.996 5.849h3.983v10h-9.983z";

/// Classes for a pagination dot
#[must_use]
pub const fn dot_class(current: bool) -> &'static str {
    if current {
        "w-3 h-3 rounded-full focus:outline-none focus:ring-2 focus:ring-[#96CEB4] bg-[#588C7E]"
    } else {
        "w-3 h-3 rounded-full focus:outline-none focus:ring-2 focus:ring-[#96CEB4] bg-gray-300 hover:bg-gray-400"
    }
}

/// Classes for the autoplay toggle
#[must_use]
pub const fn toggle_class(auto_play: bool) -> &'static str {
    if auto_play {
        "inline-flex items-center px-4 py-2 rounded-md text-sm font-medium transition-colors duration-300 focus:outline-none focus:ring-2 focus:ring-[#96CEB4] bg-[#588C7E] text-white hover:bg-[#4a7a6b]"
    } else {
        "inline-flex items-center px-4 py-2 rounded-md text-sm font-medium transition-colors duration-300 focus:outline-none focus:ring-2 focus:ring-[#96CEB4] bg-gray-200 text-gray-700 hover:bg-gray-300"
    }
}

/// Applies a timer directive to the interval slot
fn drive(state: RwSignal<Reviews>, timer: IntervalSlot, directive: TimerDirective) {
    match directive {
        TimerDirective::Keep => {}
        TimerDirective::Stop => {
            drop(timer.try_update_value(Option::take));
        }
        TimerDirective::Start { token, period } => {
            let millis = match timer_millis(period) {
                Ok(millis) => millis,
                Err(e) => {
                    tracing::warn!(error = %e, "autoplay interval rejected");
                    return;
                }
            };
            let interval = Interval::new(millis, move || {
                let advanced = state.try_update(|carousel| carousel.on_tick(token));
                if advanced == Some(false) {
                    tracing::trace!(?token, "stale autoplay tick ignored");
                }
            });
            // replacing the slot drops, and so cancels, the previous interval
            drop(timer.try_set_value(Some(interval)));
        }
    }
}

#[component]
pub fn TestimonialsCarousel(
    /// Milliseconds between automatic advances
    #[prop(default = default_auto_play_interval_ms())]
    auto_play_interval: u64,
) -> impl IntoView {
    match Carousel::new(catalog::testimonials(), Duration::from_millis(auto_play_interval)) {
        Ok(carousel) => view! { <CarouselView carousel=carousel /> }.into_any(),
        Err(e) => {
            tracing::error!(error = %e, auto_play_interval, "testimonials carousel not rendered");
            ().into_any()
        }
    }
}

#[component]
fn CarouselView(carousel: Reviews) -> impl IntoView {
    let len = carousel.len();
    let state = RwSignal::new(carousel);
    let timer: IntervalSlot = StoredValue::new_local(None);

    let act = move |step: fn(&mut Reviews) -> TimerDirective| {
        let directive = state.try_update(step).unwrap_or(TimerDirective::Keep);
        drive(state, timer, directive);
    };

    act(Reviews::mount);

    on_cleanup(move || {
        let directive = state
            .try_update_untracked(Reviews::unmount)
            .unwrap_or(TimerDirective::Stop);
        drive(state, timer, directive);
    });

    let go_to = move |index: usize| match state.try_update(|carousel| carousel.go_to(index)) {
        Some(Ok(directive)) => drive(state, timer, directive),
        Some(Err(e)) => tracing::warn!(error = %e, "testimonial jump rejected"),
        None => {}
    };

    let dots = (0..len)
        .map(|index| {
            let current = move || state.with(|carousel| carousel.is_current(index));
            view! {
                <button
                    type="button"
                    class=move || dot_class(current())
                    aria-label=Reviews::dot_label(index)
                    aria-current=move || if current() { "true" } else { "false" }
                    on:click=move |_| go_to(index)
                ></button>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <section id="testimonials" class="w-full py-12 bg-white overflow-hidden" dir="rtl" aria-label="המלצות לקוחות">
            <div class="container mx-auto px-4">
                <h2 class="text-3xl font-semibold text-center mb-10 text-gray-800">"מה הלקוחות שלנו אומרים"</h2>

                <div
                    class="relative max-w-4xl mx-auto"
                    on:mouseenter=move |_| act(Reviews::pointer_enter)
                    on:mouseleave=move |_| act(Reviews::pointer_leave)
                >
                    <div class="overflow-hidden" aria-live="polite">
                        {move || {
                            state
                                .with(|carousel| carousel.current().cloned())
                                .map(|testimonial| view! { <TestimonialCard testimonial=testimonial /> })
                        }}
                    </div>

                    <div class="flex justify-between mt-8">
                        <button
                            type="button"
                            class="bg-white p-3 rounded-full shadow-md hover:bg-gray-50 transition-colors duration-300 focus:outline-none focus:ring-2 focus:ring-[#96CEB4]"
                            aria-label="המלצה קודמת"
                            on:click=move |_| state.update(Reviews::prev)
                        >
                            <svg class="h-6 w-6 text-[#588C7E]" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M9 5l7 7-7 7" />
                            </svg>
                        </button>

                        <div class="flex space-x-2 rtl:space-x-reverse">{dots}</div>

                        <button
                            type="button"
                            class="bg-white p-3 rounded-full shadow-md hover:bg-gray-50 transition-colors duration-300 focus:outline-none focus:ring-2 focus:ring-[#96CEB4]"
                            aria-label="המלצה הבאה"
                            on:click=move |_| state.update(Reviews::next)
                        >
                            <svg class="h-6 w-6 text-[#588C7E]" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M15 19l-7-7 7-7" />
                            </svg>
                        </button>
                    </div>

                    <div class="mt-6 text-center">
                        <button
                            type="button"
                            class=move || toggle_class(state.with(Reviews::auto_play))
                            aria-pressed=move || if state.with(Reviews::auto_play) { "true" } else { "false" }
                            on:click=move |_| act(Reviews::toggle_auto_play)
                        >
                            <Show
                                when=move || state.with(Reviews::auto_play)
                                fallback=|| view! {
                                    <svg class="h-4 w-4 ml-2" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M14.752 11.168l-3.197-2.132A1 1 0 0010 9.87v4.263a1 1 0 001.555.832l3.197-2.132a1 1 0 000-1.664z" />
                                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M21 12a9 9 0 11-18 0 9 9 0 0118 0z" />
                                    </svg>
                                    "הפעל החלפה אוטומטית"
                                }
                            >
                                <svg class="h-4 w-4 ml-2" fill="none" viewBox="0 0 24 24" stroke="currentColor">
                                    <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M10 9v6m4-6v6m7-3a9 9 0 11-18 0 9 9 0 0118 0z" />
                                </svg>
                                "השהה החלפה אוטומטית"
                            </Show>
                        </button>
                    </div>
                </div>
            </div>
        </section>
    }
}

/// Avatar edge in pixels, matching `w-14 h-14`
const AVATAR_SIZE: u32 = 56;

/// Placeholder shown when an avatar fails to load
fn avatar_fallback(name: &str) -> String {
    placeholder_url(AVATAR_SIZE, AVATAR_SIZE, name)
}

#[component]
fn TestimonialCard(testimonial: Testimonial) -> impl IntoView {
    let initial = testimonial.initial();
    let name = testimonial.name.clone();
    let avatar = testimonial.avatar.clone().map(|src| {
        let fallback = avatar_fallback(&name);
        view! {
            <div class="w-14 h-14 rounded-full overflow-hidden border-2 border-[#588C7E]">
                <FallbackImg src=src fallback=fallback alt=name class="w-full h-full object-cover" />
            </div>
        }
        .into_any()
    });
    let avatar = avatar.unwrap_or_else(|| {
        view! {
            <div class="w-14 h-14 rounded-full bg-[#96CEB4] flex items-center justify-center text-white text-xl font-semibold">
                {initial}
            </div>
        }
        .into_any()
    });

    view! {
        <div class="flex flex-col items-center animate-slide-in">
            <div class="bg-gray-50 rounded-lg p-8 shadow-md border border-gray-100 w-full">
                <div class="flex justify-end mb-4">
                    <svg class="w-10 h-10 text-[#96CEB4]" fill="currentColor" viewBox="0 0 24 24" aria-hidden="true">
                        <path d=QUOTE_ICON />
                    </svg>
                </div>
                <p class="text-gray-700 text-lg mb-6 leading-relaxed">{testimonial.quote}</p>
                <div class="flex items-center mt-4">
                    {avatar}
                    <div class="mr-4">
                        <h3 class="font-semibold text-lg text-gray-800">{testimonial.name}</h3>
                        <p class="text-[#588C7E] text-sm">"לקוח/ה מרוצה"</p>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dot_class_marks_current() {
        assert!(dot_class(true).contains("bg-[#588C7E]"));
        assert!(dot_class(false).contains("bg-gray-300"));
    }

    #[test]
    fn test_toggle_class_follows_auto_play() {
        assert!(toggle_class(true).contains("text-white"));
        assert!(toggle_class(false).contains("text-gray-700"));
    }

    #[test]
    fn test_avatar_fallback_is_sized_placeholder() {
        let url = avatar_fallback("Dana");
        assert!(url.contains("/56x56?"));
        assert!(url.ends_with("text=Dana"));
    }

    #[test]
    fn test_component_compiles() {
        let _ = TestimonialsCarousel;
    }
}
