//! Thin `web-sys` wrappers for viewport, scrolling, and touch input.

#[cfg(test)]
#[path = "dom_test.rs"]
mod dom_test;

#[cfg(feature = "csr")]
use wasm_bindgen::JsCast;

#[cfg(feature = "csr")]
use crate::state::nav::scroll_target;

/// `window.innerWidth` in CSS pixels, or 0 outside a browser.
pub fn viewport_width() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window()
            .and_then(|w| w.inner_width().ok())
            .and_then(|v| v.as_f64())
            .unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// `window.scrollY`, or 0 outside a browser.
pub fn scroll_y() -> f64 {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0)
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

/// Stop or restore page scrolling by toggling `overflow: hidden` on `<body>`.
pub fn set_scroll_locked(locked: bool) {
    #[cfg(feature = "csr")]
    {
        let Some(body) = web_sys::window().and_then(|w| w.document()).and_then(|d| d.body()) else {
            return;
        };
        let style = body.style();
        let result = if locked {
            style.set_property("overflow", "hidden")
        } else {
            style.remove_property("overflow").map(|_| ())
        };
        if let Err(err) = result {
            log::warn!("could not update body overflow: {err:?}");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = locked;
    }
}

/// Smooth-scroll so the element with `id` sits just below the fixed navbar.
/// Returns `false` when no such element exists.
pub fn scroll_to_section(id: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        let Some(window) = web_sys::window() else {
            return false;
        };
        let Some(target) = window
            .document()
            .and_then(|d| d.get_element_by_id(id))
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
        else {
            return false;
        };
        let options = web_sys::ScrollToOptions::new();
        options.set_top(scroll_target(f64::from(target.offset_top())));
        options.set_behavior(web_sys::ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
        true
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = id;
        false
    }
}

/// Screen X of the first changed touch point of a touch event.
pub fn changed_touch_x(ev: &leptos::ev::TouchEvent) -> Option<f64> {
    #[cfg(feature = "csr")]
    {
        ev.changed_touches().get(0).map(|touch| f64::from(touch.screen_x()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = ev;
        None
    }
}
