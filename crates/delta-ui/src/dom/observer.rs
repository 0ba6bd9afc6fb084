//! `IntersectionObserver` adapter
//!
//! Wraps `web_sys::IntersectionObserver` behind the core
//! [`ViewportObserver`] seam. The JS callback closure lives as long as the
//! watcher; dropping the watcher disconnects the observer, so no callback can
//! reach a component that has been torn down.

use delta_core::reveal::ViewportObserver;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

use crate::error::{Result, UiError};

/// Type alias for the observer callback closure
type EntriesClosure = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;

/// Browser-backed [`ViewportObserver`]
pub struct IntersectionWatcher {
    observer: IntersectionObserver,
    _callback: EntriesClosure,
    connected: bool,
}

impl IntersectionWatcher {
    /// Creates an observer reporting `is_intersecting` for every entry
    ///
    /// # Errors
    ///
    /// Returns [`UiError::ObserverFailed`] if the browser rejects the options.
    pub fn new<F>(threshold: f64, mut on_entry: F) -> Result<Self>
    where
        F: FnMut(bool) + 'static,
    {
        let callback: EntriesClosure = Closure::wrap(Box::new(
            move |entries: js_sys::Array, _observer: IntersectionObserver| {
                for entry in entries.iter() {
                    if let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() {
                        on_entry(entry.is_intersecting());
                    }
                }
            },
        ) as Box<dyn FnMut(js_sys::Array, IntersectionObserver)>);

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
                .map_err(|e| UiError::ObserverFailed(format!("{e:?}")))?;

        Ok(Self {
            observer,
            _callback: callback,
            connected: true,
        })
    }
}

impl ViewportObserver for IntersectionWatcher {
    type Target = Element;

    fn observe(&mut self, target: &Element) {
        if self.connected {
            self.observer.observe(target);
        }
    }

    fn unobserve(&mut self, target: &Element) {
        if self.connected {
            self.observer.unobserve(target);
        }
    }

    fn disconnect(&mut self) {
        if self.connected {
            self.observer.disconnect();
            self.connected = false;
        }
    }
}

impl Drop for IntersectionWatcher {
    fn drop(&mut self) {
        self.disconnect();
    }
}
