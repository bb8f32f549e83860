//! Viewport observation feeding `VisibilitySignal`s to reveal wrappers.
//!
//! `observe` returns `None` when no observer can be attached (native targets,
//! missing element, old browsers); callers must treat that as
//! `VisibilitySignal::Unavailable`. Dropping the returned handle disconnects
//! the observer so no callback outlives its wrapper.

use super::reveal::VisibilitySignal;

/// Observer tuning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ObserveOptions {
    /// Fraction of the element that must be visible to count as entered.
    pub threshold: f64,
    /// Pixels trimmed from the bottom of the viewport before intersecting.
    pub bottom_margin_px: u32,
}

impl Default for ObserveOptions {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            bottom_margin_px: 50,
        }
    }
}

impl ObserveOptions {
    pub fn root_margin(&self) -> String {
        format!("0px 0px -{}px 0px", self.bottom_margin_px)
    }
}

#[cfg(target_arch = "wasm32")]
pub use web::{observe, ViewportObserver};

#[cfg(not(target_arch = "wasm32"))]
pub use native::{observe, ViewportObserver};

#[cfg(target_arch = "wasm32")]
mod web {
    use super::{ObserveOptions, VisibilitySignal};
    use js_sys::Array;
    use wasm_bindgen::prelude::Closure;
    use wasm_bindgen::{JsCast, JsValue};
    use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};

    type ObserverCallback = Closure<dyn FnMut(Array, IntersectionObserver)>;

    pub struct ViewportObserver {
        observer: IntersectionObserver,
        // Kept alive for as long as the observer may call it.
        _callback: ObserverCallback,
    }

    impl Drop for ViewportObserver {
        fn drop(&mut self) {
            self.observer.disconnect();
        }
    }

    pub fn observe(
        element_id: &str,
        options: ObserveOptions,
        mut on_signal: impl FnMut(VisibilitySignal) + 'static,
    ) -> Option<ViewportObserver> {
        let element = web_sys::window()?
            .document()?
            .get_element_by_id(element_id)?;

        let callback: ObserverCallback =
            Closure::new(move |entries: Array, _observer: IntersectionObserver| {
                let entered = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .any(|entry| entry.is_intersecting());
                on_signal(if entered {
                    VisibilitySignal::Entered
                } else {
                    VisibilitySignal::Exited
                });
            });

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin());

        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)
                .map_err(|err| tracing::warn!(?err, "IntersectionObserver unavailable"))
                .ok()?;
        observer.observe(&element);

        Some(ViewportObserver {
            observer,
            _callback: callback,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
mod native {
    use super::{ObserveOptions, VisibilitySignal};

    /// Never constructed on native targets.
    pub struct ViewportObserver {
        _private: (),
    }

    pub fn observe(
        _element_id: &str,
        _options: ObserveOptions,
        _on_signal: impl FnMut(VisibilitySignal) + 'static,
    ) -> Option<ViewportObserver> {
        None
    }
}
