//! Reveal-on-scroll
//!
//! `use_reveal` attaches an [`IntersectionWatcher`] to a node once it is in
//! the DOM and flips a signal to `true` after the element first crosses the
//! 10% threshold plus its delay. The watcher and any pending delay timer are
//! released on cleanup, so nothing fires after the owning component is gone.

use std::time::Duration;

use delta_core::reveal::{REVEAL_THRESHOLD, RevealController, RevealLatch, reveal_classes};
use gloo_timers::callback::Timeout;
use leptos::html;
use leptos::prelude::*;
use web_sys::Element;

use crate::dom::IntersectionWatcher;
use crate::error::{Result, timer_millis};

type ControllerSlot = StoredValue<Option<RevealController<IntersectionWatcher>>, LocalStorage>;
type TimeoutSlot = StoredValue<Option<Timeout>, LocalStorage>;

/// Tracks whether the element behind `node_ref` has been revealed
///
/// If the browser cannot create an observer the element is shown right away.
pub fn use_reveal(node_ref: NodeRef<html::Div>, latch: RevealLatch) -> ReadSignal<bool> {
    let (visible, set_visible) = signal(false);
    let controller: ControllerSlot = StoredValue::new_local(None);
    let pending: TimeoutSlot = StoredValue::new_local(None);

    Effect::new(move || {
        let Some(node) = node_ref.get() else {
            return;
        };
        if controller.with_value(Option::is_some) {
            return;
        }

        let element: Element = node.into();
        match attach(element, latch, controller, pending, set_visible) {
            Ok(mounted) => controller.set_value(Some(mounted)),
            Err(e) => {
                tracing::warn!(error = %e, "reveal observer unavailable, showing content");
                set_visible.set(true);
            }
        }
    });

    on_cleanup(move || {
        drop(pending.try_update_value(Option::take));
        controller.try_update_value(|slot| {
            if let Some(mut mounted) = slot.take() {
                mounted.unmount();
            }
        });
    });

    visible
}

fn attach(
    element: Element,
    latch: RevealLatch,
    controller: ControllerSlot,
    pending: TimeoutSlot,
    set_visible: WriteSignal<bool>,
) -> Result<RevealController<IntersectionWatcher>> {
    let watcher = IntersectionWatcher::new(REVEAL_THRESHOLD, move |is_intersecting| {
        let delay = controller
            .try_update_value(|slot| {
                slot.as_mut()
                    .and_then(|mounted| mounted.on_intersection(is_intersecting))
            })
            .flatten();

        if let Some(delay) = delay {
            schedule(delay, controller, pending, set_visible);
        }
    })?;

    Ok(RevealController::mount(watcher, element, latch))
}

fn schedule(
    delay: Duration,
    controller: ControllerSlot,
    pending: TimeoutSlot,
    set_visible: WriteSignal<bool>,
) {
    let reveal = move || {
        let revealed = controller
            .try_update_value(|slot| slot.as_mut().is_some_and(|mounted| mounted.on_delay_elapsed()))
            .unwrap_or(false);
        if revealed {
            set_visible.try_set(true);
        }
    };

    if delay.is_zero() {
        reveal();
        return;
    }

    match timer_millis(delay) {
        Ok(ms) => {
            pending.try_set_value(Some(Timeout::new(ms, reveal)));
        }
        Err(e) => {
            tracing::warn!(error = %e, "reveal delay too long, revealing now");
            reveal();
        }
    }
}

/// Wraps children in a block that fades up when scrolled into view
#[component]
pub fn Reveal(
    /// Delay in milliseconds between crossing the threshold and revealing
    #[prop(optional)]
    delay: u64,
    /// Extra classes kept on the wrapper in both states
    #[prop(optional, into)]
    class: String,
    children: Children,
) -> impl IntoView {
    let node_ref = NodeRef::<html::Div>::new();
    let visible = use_reveal(node_ref, RevealLatch::with_delay_ms(delay));

    view! {
        <div node_ref=node_ref class=move || reveal_classes(visible.get(), &class)>
            {children()}
        </div>
    }
}
