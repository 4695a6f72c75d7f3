//! Shared contract types between the desktop window manager runtime and managed apps.
//!
//! App crates depend on this crate instead of `desktop_runtime` so content views stay
//! decoupled from the window manager's model and reducer.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::{Callable, Callback};
use serde::{Deserialize, Serialize};

/// Stable identifier for a runtime-managed window.
pub type WindowRuntimeId = u64;

/// DOM id apps render on their primary text field so the runtime can move focus into it
/// when the owning window opens or is focused.
pub fn window_primary_input_dom_id(window_id: WindowRuntimeId) -> String {
    format!("window-primary-input-{window_id}")
}

/// Minimum content size an app asks its window to grow to.
///
/// The runtime applies `max(current, requested)` per axis; a window is never shrunk by
/// this request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MinimumWindowSize {
    /// Requested minimum width in pixels.
    pub width: i32,
    /// Requested minimum height in pixels.
    pub height: i32,
}

#[derive(Clone, Copy)]
/// Runtime services injected into a mounted app view.
pub struct AppHost {
    grow: Callback<MinimumWindowSize>,
}

impl AppHost {
    /// Creates a host bundle from the runtime's grow-window callback.
    pub fn new(grow: Callback<MinimumWindowSize>) -> Self {
        Self { grow }
    }

    /// Asks the runtime to enlarge the owning window to at least `width` x `height`.
    pub fn request_minimum_size(&self, width: i32, height: i32) {
        self.grow.call(MinimumWindowSize { width, height });
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn primary_input_dom_id_embeds_window_id() {
        assert_eq!(window_primary_input_dom_id(7), "window-primary-input-7");
    }
}
