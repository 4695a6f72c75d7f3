//! Host-side helpers for querying the browser environment and executing reducer effects.
//!
//! Viewport and device-class reads happen at render and event time; nothing here
//! subscribes to breakpoint changes. Non-WASM builds get inert fallbacks so the
//! reducer and geometry layers stay testable on the host toolchain.

use leptos::logging;

use crate::geometry::{DeviceClass, Viewport};
use crate::model::WindowId;
use crate::reducer::RuntimeEffect;

/// Returns the current browser viewport, or a desktop-sized default off-browser.
pub fn viewport() -> Viewport {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            let width = window
                .inner_width()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(1024);
            let height = window
                .inner_height()
                .ok()
                .and_then(|value| value.as_f64())
                .map(|value| value as i32)
                .unwrap_or(768);
            return Viewport { width, height };
        }
    }

    Viewport {
        width: 1280,
        height: 800,
    }
}

/// Device class derived from the current viewport width.
pub fn device_class() -> DeviceClass {
    DeviceClass::from_viewport_width(viewport().width)
}

/// Whether the host exposes a touch-capable pointer.
///
/// Touch devices activate desktop icons on a single tap instead of a double
/// click.
pub fn is_touch_device() -> bool {
    #[cfg(target_arch = "wasm32")]
    {
        if let Some(window) = web_sys::window() {
            if window.navigator().max_touch_points() > 0 {
                return true;
            }
            return js_sys::Reflect::has(&window, &wasm_bindgen::JsValue::from_str("ontouchstart"))
                .unwrap_or(false);
        }
    }
    false
}

/// Executes a single [`RuntimeEffect`] emitted by the reducer.
pub fn run_runtime_effect(effect: RuntimeEffect) {
    match effect {
        RuntimeEffect::FocusWindowInput(window_id) => focus_window_input(window_id),
        RuntimeEffect::OpenExternalUrl(url) => open_external_url(&url),
    }
}

/// Moves focus into the window's primary input, if the owning app rendered one.
///
/// Deferred a tick so the input exists in the DOM when a window opens and is
/// focused in the same update.
pub fn focus_window_input(window_id: WindowId) {
    #[cfg(target_arch = "wasm32")]
    {
        use wasm_bindgen::{closure::Closure, JsCast};

        let Some(window) = web_sys::window() else {
            return;
        };
        let Some(document) = window.document() else {
            return;
        };
        let dom_id = desktop_app_contract::window_primary_input_dom_id(window_id.0);
        let callback = Closure::once_into_js(move || {
            let Some(element) = document.get_element_by_id(&dom_id) else {
                return;
            };
            let Ok(element) = element.dyn_into::<web_sys::HtmlElement>() else {
                return;
            };
            let _ = element.focus();
        });
        let _ = window
            .set_timeout_with_callback_and_timeout_and_arguments_0(callback.unchecked_ref(), 0);
    }
    #[cfg(not(target_arch = "wasm32"))]
    let _ = window_id;
}

/// Opens a URL in a new browsing context.
pub fn open_external_url(url: &str) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(window) = web_sys::window() else {
            return;
        };
        if let Err(err) = window.open_with_url_and_target(url, "_blank") {
            logging::warn!("open external url failed for `{url}`: {err:?}");
        }
        return;
    }
    #[cfg(not(target_arch = "wasm32"))]
    logging::log!("open external url (no browser host): {url}");
}
