//! Reducer actions, side-effect intents, and transition logic for the desktop runtime.

use crate::geometry::{initial_placement, DeviceClass, Viewport, MIN_WINDOW_HEIGHT, MIN_WINDOW_WIDTH};
use crate::model::{
    DesktopState, DragSession, IconDragSession, IconRecord, InteractionState, PointerPosition,
    ResizeSession, WindowId, WindowKind, WindowPosition, WindowRecord, WindowSize,
};

#[derive(Debug, Clone, PartialEq)]
/// Actions accepted by [`reduce_desktop`] to mutate the desktop runtime state.
///
/// Actions referencing a window id that is no longer present are silent no-ops:
/// the registry is a UI convenience layer with nothing useful to report to a
/// caller holding a stale id.
pub enum DesktopAction {
    /// Open a new window of `kind`, placed for the given viewport/device.
    OpenWindow {
        kind: WindowKind,
        title: String,
        viewport: Viewport,
        device: DeviceClass,
    },
    /// Close a window by id, removing its record.
    CloseWindow { window_id: WindowId },
    /// Merge a position and/or size into a window record.
    UpdateWindow {
        window_id: WindowId,
        position: Option<WindowPosition>,
        size: Option<WindowSize>,
    },
    /// Raise a window to the top of the stack.
    FocusWindow { window_id: WindowId },
    /// Grow a window to at least the requested size (app-initiated).
    GrowWindow {
        window_id: WindowId,
        minimum: WindowSize,
    },
    /// Begin dragging a window by its titlebar.
    BeginWindowDrag {
        window_id: WindowId,
        pointer: PointerPosition,
    },
    /// Update an in-progress window drag.
    UpdateWindowDrag { pointer: PointerPosition },
    /// End the active window drag.
    EndWindowDrag,
    /// Begin resizing a window from its corner handle.
    BeginResize {
        window_id: WindowId,
        pointer: PointerPosition,
    },
    /// Update an in-progress resize.
    UpdateResize { pointer: PointerPosition },
    /// End the active resize.
    EndResize,
    /// Begin dragging a desktop icon.
    BeginIconDrag {
        icon_index: usize,
        pointer: PointerPosition,
    },
    /// Update an in-progress icon drag.
    UpdateIconDrag { pointer: PointerPosition },
    /// End the active icon drag.
    EndIconDrag,
    /// Open a URL outside the shell (menu bar links).
    OpenExternalLink { url: String },
}

#[derive(Debug, Clone, PartialEq)]
/// Side-effect intents emitted by [`reduce_desktop`] for the host boundary to execute.
pub enum RuntimeEffect {
    /// Move focus into the newly opened/focused window's primary input.
    FocusWindowInput(WindowId),
    /// Open an external URL outside the shell.
    OpenExternalUrl(String),
}

/// Applies a [`DesktopAction`] to the desktop runtime state and collects resulting
/// side effects.
///
/// This function is the authoritative transition engine for window management:
/// every mutation of window records, icon positions, and interaction sessions
/// flows through here, so the size floor and stacking invariants are enforced in
/// one place.
pub fn reduce_desktop(
    state: &mut DesktopState,
    icons: &mut [IconRecord],
    interaction: &mut InteractionState,
    action: DesktopAction,
) -> Vec<RuntimeEffect> {
    let mut effects = Vec::new();
    match action {
        DesktopAction::OpenWindow {
            kind,
            title,
            viewport,
            device,
        } => {
            let window_id = next_window_id(state);
            let (position, size) = initial_placement(viewport, device);
            let record = WindowRecord {
                id: window_id,
                kind,
                title,
                open: true,
                minimized: false,
                position,
                size: size.clamped_min(MIN_WINDOW_WIDTH, MIN_WINDOW_HEIGHT),
                stack_order: state.max_stack_order() + 1,
            };
            state.windows.push(record);
            effects.push(RuntimeEffect::FocusWindowInput(window_id));
        }
        DesktopAction::CloseWindow { window_id } => {
            state.windows.retain(|w| w.id != window_id);
        }
        DesktopAction::UpdateWindow {
            window_id,
            position,
            size,
        } => {
            if let Some(window) = find_window_mut(state, window_id) {
                if let Some(position) = position {
                    window.position = position;
                }
                if let Some(size) = size {
                    window.apply_size(size);
                }
            }
        }
        DesktopAction::FocusWindow { window_id } => {
            if raise_window(state, window_id) {
                effects.push(RuntimeEffect::FocusWindowInput(window_id));
            }
        }
        DesktopAction::GrowWindow { window_id, minimum } => {
            if let Some(window) = find_window_mut(state, window_id) {
                let grown = WindowSize {
                    width: window.size.width.max(minimum.width),
                    height: window.size.height.max(minimum.height),
                };
                window.apply_size(grown);
            }
        }
        DesktopAction::BeginWindowDrag { window_id, pointer } => {
            if let Some(position_start) = state.window(window_id).map(|w| w.position) {
                interaction.window_drag = Some(DragSession {
                    window_id,
                    pointer_start: pointer,
                    position_start,
                });
                raise_window(state, window_id);
            }
        }
        DesktopAction::UpdateWindowDrag { pointer } => {
            if let Some(session) = interaction.window_drag {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                if let Some(window) = find_window_mut(state, session.window_id) {
                    window.position = session.position_start.offset(dx, dy);
                }
            }
        }
        DesktopAction::EndWindowDrag => {
            interaction.window_drag = None;
        }
        DesktopAction::BeginResize { window_id, pointer } => {
            if let Some(size_start) = state.window(window_id).map(|w| w.size) {
                interaction.resize = Some(ResizeSession {
                    window_id,
                    pointer_start: pointer,
                    size_start,
                });
                raise_window(state, window_id);
            }
        }
        DesktopAction::UpdateResize { pointer } => {
            if let Some(session) = interaction.resize {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                if let Some(window) = find_window_mut(state, session.window_id) {
                    window.apply_size(WindowSize {
                        width: session.size_start.width + dx,
                        height: session.size_start.height + dy,
                    });
                }
            }
        }
        DesktopAction::EndResize => {
            interaction.resize = None;
        }
        DesktopAction::BeginIconDrag {
            icon_index,
            pointer,
        } => {
            if let Some(icon) = icons.get(icon_index) {
                interaction.icon_drag = Some(IconDragSession {
                    icon_index,
                    pointer_start: pointer,
                    position_start: icon.position,
                });
            }
        }
        DesktopAction::UpdateIconDrag { pointer } => {
            if let Some(session) = interaction.icon_drag {
                let dx = pointer.x - session.pointer_start.x;
                let dy = pointer.y - session.pointer_start.y;
                if let Some(icon) = icons.get_mut(session.icon_index) {
                    icon.position = session.position_start.offset(dx, dy);
                }
            }
        }
        DesktopAction::EndIconDrag => {
            interaction.icon_drag = None;
        }
        DesktopAction::OpenExternalLink { url } => {
            effects.push(RuntimeEffect::OpenExternalUrl(url));
        }
    }
    effects
}

fn next_window_id(state: &mut DesktopState) -> WindowId {
    let id = WindowId(state.next_window_id);
    state.next_window_id = state.next_window_id.saturating_add(1);
    id
}

fn find_window_mut(state: &mut DesktopState, window_id: WindowId) -> Option<&mut WindowRecord> {
    state.windows.iter_mut().find(|w| w.id == window_id)
}

/// Raises `window_id` to `max + 1`, leaving every other record untouched.
///
/// The already-topmost window keeps its current value so repeated focus does
/// not inflate stack orders. Returns whether the id was present.
fn raise_window(state: &mut DesktopState, window_id: WindowId) -> bool {
    let max = state.max_stack_order();
    let topmost = state.focused_window_id();
    let Some(window) = find_window_mut(state, window_id) else {
        return false;
    };
    if topmost != Some(window_id) {
        window.stack_order = max + 1;
    }
    true
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::model::default_desktop_icons;

    const DESKTOP_VIEWPORT: Viewport = Viewport {
        width: 1280,
        height: 800,
    };

    struct Harness {
        state: DesktopState,
        icons: Vec<IconRecord>,
        interaction: InteractionState,
    }

    impl Harness {
        fn new() -> Self {
            Self {
                state: DesktopState::default(),
                icons: default_desktop_icons(),
                interaction: InteractionState::default(),
            }
        }

        fn dispatch(&mut self, action: DesktopAction) -> Vec<RuntimeEffect> {
            reduce_desktop(&mut self.state, &mut self.icons, &mut self.interaction, action)
        }

        fn open(&mut self, kind: WindowKind) -> WindowId {
            let title = kind.default_title().to_string();
            self.dispatch(DesktopAction::OpenWindow {
                kind,
                title,
                viewport: DESKTOP_VIEWPORT,
                device: DeviceClass::Desktop,
            });
            self.state.windows.last().expect("window").id
        }

        fn window(&self, id: WindowId) -> &WindowRecord {
            self.state.window(id).expect("window exists")
        }
    }

    #[test]
    fn open_assigns_unique_ids_across_any_sequence() {
        let mut h = Harness::new();
        let mut ids = Vec::new();
        for _ in 0..4 {
            ids.push(h.open(WindowKind::About));
        }
        h.dispatch(DesktopAction::CloseWindow { window_id: ids[1] });
        for _ in 0..4 {
            ids.push(h.open(WindowKind::Terminal));
        }
        let mut deduped = ids.clone();
        deduped.sort();
        deduped.dedup();
        assert_eq!(deduped.len(), ids.len());
    }

    #[test]
    fn open_places_first_about_window_per_desktop_defaults() {
        let mut h = Harness::new();
        let id = h.open(WindowKind::About);

        assert_eq!(h.state.windows.len(), 1);
        let record = h.window(id);
        assert_eq!(record.kind, WindowKind::About);
        assert_eq!(record.title, "About Me");
        assert!(record.open);
        assert!(!record.minimized);
        assert_eq!(
            record.size,
            WindowSize {
                width: 700,
                height: 450,
            }
        );
        assert_eq!(record.stack_order, 1);
    }

    #[test]
    fn open_stacks_each_new_window_above_all_others() {
        let mut h = Harness::new();
        let first = h.open(WindowKind::About);
        let second = h.open(WindowKind::Experience);
        let third = h.open(WindowKind::Fun);

        let orders: Vec<u32> = [first, second, third]
            .iter()
            .map(|id| h.window(*id).stack_order)
            .collect();
        assert!(orders[2] > orders[1] && orders[1] > orders[0]);
        assert_eq!(h.state.focused_window_id(), Some(third));
    }

    #[test]
    fn open_allows_multiple_windows_of_the_same_kind() {
        let mut h = Harness::new();
        let first = h.open(WindowKind::Terminal);
        let second = h.open(WindowKind::Terminal);
        assert_ne!(first, second);
        assert_eq!(h.state.windows.len(), 2);
    }

    #[test]
    fn open_emits_input_focus_effect() {
        let mut h = Harness::new();
        let effects = h.dispatch(DesktopAction::OpenWindow {
            kind: WindowKind::Terminal,
            title: "Terminal".to_string(),
            viewport: DESKTOP_VIEWPORT,
            device: DeviceClass::Desktop,
        });
        let id = h.state.windows[0].id;
        assert_eq!(effects, vec![RuntimeEffect::FocusWindowInput(id)]);
    }

    #[test]
    fn focus_raises_to_max_plus_one_and_leaves_others_alone() {
        let mut h = Harness::new();
        let first = h.open(WindowKind::About);
        let second = h.open(WindowKind::Experience);
        let second_order = h.window(second).stack_order;

        h.dispatch(DesktopAction::FocusWindow { window_id: first });

        assert_eq!(h.window(first).stack_order, second_order + 1);
        assert_eq!(h.window(second).stack_order, second_order);
        assert_eq!(h.state.focused_window_id(), Some(first));
    }

    #[test]
    fn focus_on_topmost_window_changes_nothing() {
        let mut h = Harness::new();
        let _first = h.open(WindowKind::About);
        let second = h.open(WindowKind::Experience);
        let before = h.state.clone();

        h.dispatch(DesktopAction::FocusWindow { window_id: second });

        assert_eq!(h.state, before);
    }

    #[test]
    fn focus_on_unknown_id_is_a_silent_noop() {
        let mut h = Harness::new();
        h.open(WindowKind::About);
        let before = h.state.clone();

        let effects = h.dispatch(DesktopAction::FocusWindow {
            window_id: WindowId(999),
        });

        assert_eq!(h.state, before);
        assert_eq!(effects, Vec::new());
    }

    #[test]
    fn close_removes_exactly_one_record_and_preserves_the_rest() {
        let mut h = Harness::new();
        let first = h.open(WindowKind::About);
        let second = h.open(WindowKind::Experience);
        let third = h.open(WindowKind::Fun);
        let first_before = h.window(first).clone();
        let third_before = h.window(third).clone();

        h.dispatch(DesktopAction::CloseWindow { window_id: second });

        assert_eq!(h.state.windows.len(), 2);
        assert_eq!(h.window(first), &first_before);
        assert_eq!(h.window(third), &third_before);
    }

    #[test]
    fn close_on_unknown_id_is_a_silent_noop() {
        let mut h = Harness::new();
        h.open(WindowKind::About);
        let before = h.state.clone();
        h.dispatch(DesktopAction::CloseWindow {
            window_id: WindowId(42),
        });
        assert_eq!(h.state, before);
    }

    #[test]
    fn update_clamps_size_to_minimums() {
        let mut h = Harness::new();
        let id = h.open(WindowKind::About);

        h.dispatch(DesktopAction::UpdateWindow {
            window_id: id,
            position: None,
            size: Some(WindowSize {
                width: 10,
                height: 10,
            }),
        });

        assert_eq!(
            h.window(id).size,
            WindowSize {
                width: MIN_WINDOW_WIDTH,
                height: MIN_WINDOW_HEIGHT,
            }
        );
    }

    #[test]
    fn update_merges_only_the_supplied_fields() {
        let mut h = Harness::new();
        let id = h.open(WindowKind::About);
        let size_before = h.window(id).size;

        h.dispatch(DesktopAction::UpdateWindow {
            window_id: id,
            position: Some(WindowPosition { x: -40, y: 900 }),
            size: None,
        });

        assert_eq!(h.window(id).position, WindowPosition { x: -40, y: 900 });
        assert_eq!(h.window(id).size, size_before);
    }

    #[test]
    fn drag_moves_window_by_exact_pointer_delta() {
        let mut h = Harness::new();
        let id = h.open(WindowKind::About);
        let start = h.window(id).position;

        h.dispatch(DesktopAction::BeginWindowDrag {
            window_id: id,
            pointer: PointerPosition { x: 400, y: 200 },
        });
        h.dispatch(DesktopAction::UpdateWindowDrag {
            pointer: PointerPosition { x: 433, y: 179 },
        });

        assert_eq!(h.window(id).position, start.offset(33, -21));
        h.dispatch(DesktopAction::EndWindowDrag);
        assert_eq!(h.interaction.window_drag, None);
    }

    #[test]
    fn drag_does_not_clamp_to_viewport_bounds() {
        let mut h = Harness::new();
        let id = h.open(WindowKind::About);

        h.dispatch(DesktopAction::BeginWindowDrag {
            window_id: id,
            pointer: PointerPosition { x: 0, y: 0 },
        });
        h.dispatch(DesktopAction::UpdateWindowDrag {
            pointer: PointerPosition { x: -5000, y: -5000 },
        });

        assert!(h.window(id).position.x < 0);
        assert!(h.window(id).position.y < 0);
    }

    #[test]
    fn begin_drag_raises_the_dragged_window() {
        let mut h = Harness::new();
        let first = h.open(WindowKind::About);
        let second = h.open(WindowKind::Experience);

        h.dispatch(DesktopAction::BeginWindowDrag {
            window_id: first,
            pointer: PointerPosition { x: 1, y: 1 },
        });

        assert!(h.window(first).stack_order > h.window(second).stack_order);
    }

    #[test]
    fn drag_updates_are_ignored_once_the_window_closes() {
        let mut h = Harness::new();
        let id = h.open(WindowKind::About);
        h.dispatch(DesktopAction::BeginWindowDrag {
            window_id: id,
            pointer: PointerPosition { x: 0, y: 0 },
        });
        h.dispatch(DesktopAction::CloseWindow { window_id: id });

        let before = h.state.clone();
        h.dispatch(DesktopAction::UpdateWindowDrag {
            pointer: PointerPosition { x: 50, y: 50 },
        });
        assert_eq!(h.state, before);
    }

    #[test]
    fn resize_clamps_to_exact_minimums_on_large_negative_delta() {
        let mut h = Harness::new();
        let id = h.open(WindowKind::About);
        assert_eq!(
            h.window(id).size,
            WindowSize {
                width: 700,
                height: 450,
            }
        );

        h.dispatch(DesktopAction::BeginResize {
            window_id: id,
            pointer: PointerPosition { x: 800, y: 600 },
        });
        h.dispatch(DesktopAction::UpdateResize {
            pointer: PointerPosition {
                x: 800 - 1000,
                y: 600 - 1000,
            },
        });

        assert_eq!(
            h.window(id).size,
            WindowSize {
                width: 300,
                height: 180,
            }
        );
        h.dispatch(DesktopAction::EndResize);
        assert_eq!(h.interaction.resize, None);
    }

    #[test]
    fn resize_grows_by_exact_pointer_delta() {
        let mut h = Harness::new();
        let id = h.open(WindowKind::About);

        h.dispatch(DesktopAction::BeginResize {
            window_id: id,
            pointer: PointerPosition { x: 100, y: 100 },
        });
        h.dispatch(DesktopAction::UpdateResize {
            pointer: PointerPosition { x: 180, y: 140 },
        });

        assert_eq!(
            h.window(id).size,
            WindowSize {
                width: 780,
                height: 490,
            }
        );
    }

    #[test]
    fn grow_window_never_shrinks() {
        let mut h = Harness::new();
        let id = h.open(WindowKind::Fun);

        h.dispatch(DesktopAction::GrowWindow {
            window_id: id,
            minimum: WindowSize {
                width: 700,
                height: 550,
            },
        });
        assert_eq!(
            h.window(id).size,
            WindowSize {
                width: 700,
                height: 550,
            }
        );

        h.dispatch(DesktopAction::GrowWindow {
            window_id: id,
            minimum: WindowSize {
                width: 320,
                height: 200,
            },
        });
        assert_eq!(
            h.window(id).size,
            WindowSize {
                width: 700,
                height: 550,
            }
        );
    }

    #[test]
    fn icon_drag_moves_icon_by_exact_pointer_delta() {
        let mut h = Harness::new();
        let start = h.icons[2].position;

        h.dispatch(DesktopAction::BeginIconDrag {
            icon_index: 2,
            pointer: PointerPosition { x: 300, y: 80 },
        });
        h.dispatch(DesktopAction::UpdateIconDrag {
            pointer: PointerPosition { x: 340, y: 150 },
        });
        h.dispatch(DesktopAction::EndIconDrag);

        assert_eq!(h.icons[2].position, start.offset(40, 70));
        assert_eq!(h.interaction.icon_drag, None);
    }

    #[test]
    fn icon_drag_with_out_of_range_index_is_a_noop() {
        let mut h = Harness::new();
        let before = h.icons.clone();
        h.dispatch(DesktopAction::BeginIconDrag {
            icon_index: 99,
            pointer: PointerPosition { x: 0, y: 0 },
        });
        assert_eq!(h.interaction.icon_drag, None);
        assert_eq!(h.icons, before);
    }

    #[test]
    fn mobile_open_pins_window_below_header() {
        let mut h = Harness::new();
        h.dispatch(DesktopAction::OpenWindow {
            kind: WindowKind::About,
            title: "About Me".to_string(),
            viewport: Viewport {
                width: 390,
                height: 844,
            },
            device: DeviceClass::Mobile,
        });
        let record = &h.state.windows[0];
        assert_eq!(record.position, WindowPosition { x: 0, y: 48 });
        assert_eq!(
            record.size,
            WindowSize {
                width: 390,
                height: 796,
            }
        );
    }

    #[test]
    fn external_link_action_emits_effect_only() {
        let mut h = Harness::new();
        let before = h.state.clone();
        let effects = h.dispatch(DesktopAction::OpenExternalLink {
            url: "https://github.com/VirajCommits".to_string(),
        });
        assert_eq!(
            effects,
            vec![RuntimeEffect::OpenExternalUrl(
                "https://github.com/VirajCommits".to_string()
            )]
        );
        assert_eq!(h.state, before);
    }
}
