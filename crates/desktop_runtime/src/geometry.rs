//! Initial window placement as a pure function of viewport geometry and device class.

use crate::model::{WindowPosition, WindowSize};

pub const DEFAULT_WINDOW_WIDTH: i32 = 700;
pub const DEFAULT_WINDOW_HEIGHT: i32 = 450;
/// Minimum allowed managed window width.
pub const MIN_WINDOW_WIDTH: i32 = 300;
/// Minimum allowed managed window height.
pub const MIN_WINDOW_HEIGHT: i32 = 180;
/// Viewports at or below this width get the full-screen mobile treatment.
pub const MOBILE_BREAKPOINT_PX: i32 = 600;
/// Height of the fixed menu bar on mobile; windows are pinned below it.
pub const MOBILE_HEADER_HEIGHT_PX: i32 = 48;
/// New desktop windows are never placed above this line, keeping the icon row clear.
pub const DESKTOP_TOP_MARGIN_PX: i32 = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: i32,
    pub height: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeviceClass {
    Desktop,
    Mobile,
}

impl DeviceClass {
    pub fn from_viewport_width(width: i32) -> Self {
        if width <= MOBILE_BREAKPOINT_PX {
            Self::Mobile
        } else {
            Self::Desktop
        }
    }

    pub fn is_mobile(self) -> bool {
        matches!(self, Self::Mobile)
    }
}

/// Computes where a freshly opened window goes and how big it is.
///
/// Desktop windows use one fixed default size, centered, floored at
/// [`DESKTOP_TOP_MARGIN_PX`] and never off-screen to the left. Mobile windows
/// fill the viewport below the header and are neither draggable nor resizable.
pub fn initial_placement(viewport: Viewport, device: DeviceClass) -> (WindowPosition, WindowSize) {
    match device {
        DeviceClass::Desktop => {
            let size = WindowSize {
                width: DEFAULT_WINDOW_WIDTH,
                height: DEFAULT_WINDOW_HEIGHT,
            };
            let position = WindowPosition {
                x: ((viewport.width - size.width) / 2).max(0),
                y: ((viewport.height - size.height) / 2).max(DESKTOP_TOP_MARGIN_PX),
            };
            (position, size)
        }
        DeviceClass::Mobile => {
            let size = WindowSize {
                width: viewport.width,
                height: viewport.height - MOBILE_HEADER_HEIGHT_PX,
            };
            let position = WindowPosition {
                x: 0,
                y: MOBILE_HEADER_HEIGHT_PX,
            };
            (position, size)
        }
    }
}
