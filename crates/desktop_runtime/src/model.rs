use serde::{Deserialize, Serialize};

use crate::geometry::{MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WindowId(pub u64);

/// Content variant rendered inside a managed window.
///
/// The known variants drive the app dispatch in [`crate::apps`]; `Other` keeps
/// externally supplied kinds (deep links, future apps) representable without a
/// schema change.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WindowKind {
    About,
    Experience,
    Resume,
    Terminal,
    Fun,
    Other(String),
}

impl WindowKind {
    pub fn token(&self) -> &str {
        match self {
            Self::About => "about",
            Self::Experience => "experience",
            Self::Resume => "resume",
            Self::Terminal => "terminal",
            Self::Fun => "fun",
            Self::Other(raw) => raw,
        }
    }

    pub fn from_token(raw: &str) -> Self {
        match raw {
            "about" => Self::About,
            "experience" => Self::Experience,
            "resume" => Self::Resume,
            "terminal" => Self::Terminal,
            "fun" => Self::Fun,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn default_title(&self) -> &str {
        match self {
            Self::About => "About Me",
            Self::Experience => "Experience",
            Self::Resume => "Resume",
            Self::Terminal => "Terminal",
            Self::Fun => "Fun Bits",
            Self::Other(raw) => raw,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowPosition {
    pub x: i32,
    pub y: i32,
}

impl WindowPosition {
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WindowSize {
    pub width: i32,
    pub height: i32,
}

impl WindowSize {
    pub fn clamped_min(self, min_width: i32, min_height: i32) -> Self {
        Self {
            width: self.width.max(min_width),
            height: self.height.max(min_height),
        }
    }
}

/// State record for one open window.
///
/// Presence in [`DesktopState::windows`] is what makes a window exist; closing
/// removes the record outright. `open` mirrors that (always true while the
/// record lives). `minimized` is carried but drives no behavior anywhere; the
/// titlebar renders its control as inert.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowRecord {
    pub id: WindowId,
    pub kind: WindowKind,
    pub title: String,
    pub open: bool,
    pub minimized: bool,
    pub position: WindowPosition,
    pub size: WindowSize,
    /// Stacking value; the numerically highest record renders topmost and owns
    /// input focus. Values are sparse: closing a window never renumbers the rest.
    pub stack_order: u32,
}

impl WindowRecord {
    pub fn apply_size(&mut self, size: WindowSize) {
        self.size = size.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT);
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DesktopState {
    pub next_window_id: u64,
    pub windows: Vec<WindowRecord>,
}

impl Default for DesktopState {
    fn default() -> Self {
        Self {
            next_window_id: 1,
            windows: Vec::new(),
        }
    }
}

impl DesktopState {
    pub fn window(&self, window_id: WindowId) -> Option<&WindowRecord> {
        self.windows.iter().find(|w| w.id == window_id)
    }

    pub fn max_stack_order(&self) -> u32 {
        self.windows.iter().map(|w| w.stack_order).max().unwrap_or(0)
    }

    pub fn focused_window_id(&self) -> Option<WindowId> {
        self.windows
            .iter()
            .max_by_key(|w| w.stack_order)
            .map(|w| w.id)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PointerPosition {
    pub x: i32,
    pub y: i32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DragSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizeSession {
    pub window_id: WindowId,
    pub pointer_start: PointerPosition,
    pub size_start: WindowSize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IconDragSession {
    pub icon_index: usize,
    pub pointer_start: PointerPosition,
    pub position_start: WindowPosition,
}

/// Active pointer interaction sessions. At most one session per kind; a
/// pointer-up anywhere in the shell clears whichever is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct InteractionState {
    pub window_drag: Option<DragSession>,
    pub resize: Option<ResizeSession>,
    pub icon_drag: Option<IconDragSession>,
}

/// One launcher icon on the desktop background. Icons are independent of
/// window records: they persist for the session and reset on reload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IconRecord {
    pub name: String,
    pub image: String,
    /// Window kind the icon activates; `None` for decorative icons.
    pub kind: Option<WindowKind>,
    pub position: WindowPosition,
}

pub fn default_desktop_icons() -> Vec<IconRecord> {
    const ICONS: [(&str, &str, &str, i32); 5] = [
        ("About Me", "/mac.png", "about", 32),
        ("Experience", "/coffee.png", "experience", 162),
        ("Resume", "/resume.png", "resume", 292),
        ("Terminal", "/terminal.png", "terminal", 422),
        ("Fun Bits", "/funbits.png", "fun", 552),
    ];

    ICONS
        .into_iter()
        .map(|(name, image, kind, x)| IconRecord {
            name: name.to_string(),
            image: image.to_string(),
            kind: Some(WindowKind::from_token(kind)),
            position: WindowPosition { x, y: 64 },
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn window_kind_round_trips_through_tokens() {
        for token in ["about", "experience", "resume", "terminal", "fun"] {
            assert_eq!(WindowKind::from_token(token).token(), token);
        }
        let custom = WindowKind::from_token("guestbook");
        assert_eq!(custom, WindowKind::Other("guestbook".to_string()));
        assert_eq!(custom.token(), "guestbook");
        assert_eq!(custom.default_title(), "guestbook");
    }

    #[test]
    fn size_clamp_raises_both_axes_independently() {
        let size = WindowSize {
            width: 120,
            height: 900,
        };
        assert_eq!(
            size.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
            WindowSize {
                width: MIN_WINDOW_WIDTH,
                height: 900,
            }
        );
    }

    #[test]
    fn default_icons_cover_all_known_kinds() {
        let icons = default_desktop_icons();
        assert_eq!(icons.len(), 5);
        assert!(icons.iter().all(|icon| icon.kind.is_some()));
        assert_eq!(icons[0].position, WindowPosition { x: 32, y: 64 });
        assert_eq!(icons[4].position, WindowPosition { x: 552, y: 64 });
    }

    #[test]
    fn max_stack_order_is_zero_for_empty_state() {
        assert_eq!(DesktopState::default().max_stack_order(), 0);
        assert_eq!(DesktopState::default().focused_window_id(), None);
    }
}
