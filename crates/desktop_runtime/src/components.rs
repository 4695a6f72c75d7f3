//! Desktop shell UI composition and interaction surfaces.

mod icons;
mod menubar;
mod window;

use leptos::*;

use self::{icons::DesktopIcons, menubar::MenuBar, window::DesktopWindow};
use crate::{
    host,
    model::{PointerPosition, WindowId, WindowKind},
    reducer::DesktopAction,
};

pub use crate::runtime_context::{use_desktop_runtime, DesktopProvider, DesktopRuntimeContext};

fn pointer_from_pointer_event(ev: &web_sys::PointerEvent) -> PointerPosition {
    PointerPosition {
        x: ev.client_x(),
        y: ev.client_y(),
    }
}

fn open_window_for(runtime: DesktopRuntimeContext, kind: WindowKind, title: String) {
    runtime.dispatch_action(DesktopAction::OpenWindow {
        kind,
        title,
        viewport: host::viewport(),
        device: host::device_class(),
    });
}

fn end_active_pointer_interaction(runtime: DesktopRuntimeContext) {
    let interaction = runtime.interaction.get_untracked();
    if interaction.window_drag.is_some() {
        runtime.dispatch_action(DesktopAction::EndWindowDrag);
    }
    if interaction.resize.is_some() {
        runtime.dispatch_action(DesktopAction::EndResize);
    }
    if interaction.icon_drag.is_some() {
        runtime.dispatch_action(DesktopAction::EndIconDrag);
    }
}

#[component]
/// Renders the full desktop shell UI.
///
/// Pointer move/up/cancel listeners live on this long-lived root element, not on
/// the dragged items: a drag or resize session started anywhere always ends on
/// pointer release anywhere in the document, even when the pointer outruns the
/// item or the item unmounts mid-session.
pub fn DesktopShell() -> impl IntoView {
    let runtime = use_desktop_runtime();

    let on_pointer_move = move |ev: web_sys::PointerEvent| {
        let pointer = pointer_from_pointer_event(&ev);
        let interaction = runtime.interaction.get_untracked();

        if interaction.window_drag.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateWindowDrag { pointer });
        }
        if interaction.resize.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateResize { pointer });
        }
        if interaction.icon_drag.is_some() {
            runtime.dispatch_action(DesktopAction::UpdateIconDrag { pointer });
        }
    };
    let on_pointer_end = move |_: web_sys::PointerEvent| end_active_pointer_interaction(runtime);

    view! {
        <div
            class="desktop"
            on:pointermove=on_pointer_move
            on:pointerup=on_pointer_end
            on:pointercancel=on_pointer_end
        >
            <MenuBar />
            <DesktopIcons />
            <For
                each=move || {
                    runtime
                        .state
                        .get()
                        .windows
                        .iter()
                        .map(|w| w.id)
                        .collect::<Vec<_>>()
                }
                key=|window_id| *window_id
                children=move |window_id: WindowId| view! { <DesktopWindow window_id=window_id /> }
            />
        </div>
    }
}
