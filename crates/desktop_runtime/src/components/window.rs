use super::*;
use desktop_app_contract::{AppHost, MinimumWindowSize};
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

use crate::geometry::MOBILE_HEADER_HEIGHT_PX;
use crate::model::WindowSize;

const CLOSE_GLYPH_SVG: &str = r##"<line x1="4" y1="4" x2="10" y2="10" stroke="#fff" stroke-width="2" stroke-linecap="round"/><line x1="10" y1="4" x2="4" y2="10" stroke="#fff" stroke-width="2" stroke-linecap="round"/>"##;

#[cfg(target_arch = "wasm32")]
fn try_set_pointer_capture(ev: &web_sys::PointerEvent) {
    if let Some(target) = ev.current_target() {
        if let Ok(element) = target.dyn_into::<web_sys::Element>() {
            let _ = element.set_pointer_capture(ev.pointer_id());
        }
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn try_set_pointer_capture(_: &web_sys::PointerEvent) {}

#[component]
pub(super) fn DesktopWindow(window_id: WindowId) -> impl IntoView {
    let runtime = use_desktop_runtime();

    let window = Signal::derive(move || {
        runtime
            .state
            .get()
            .windows
            .into_iter()
            .find(|w| w.id == window_id)
    });
    let close_hover = create_rw_signal(false);

    let focus = move |_: web_sys::PointerEvent| {
        runtime.dispatch_action(DesktopAction::FocusWindow { window_id });
    };
    let close = move |ev: web_sys::MouseEvent| {
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::CloseWindow { window_id });
    };
    let begin_move = move |ev: web_sys::PointerEvent| {
        if host::device_class().is_mobile() {
            return;
        }
        if ev.button() != 0 {
            return;
        }
        if ev.pointer_type() != "mouse" && !ev.is_primary() {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        runtime.dispatch_action(DesktopAction::BeginWindowDrag {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let begin_resize = move |ev: web_sys::PointerEvent| {
        if host::device_class().is_mobile() {
            return;
        }
        if ev.button() != 0 {
            return;
        }
        try_set_pointer_capture(&ev);
        ev.prevent_default();
        ev.stop_propagation();
        runtime.dispatch_action(DesktopAction::BeginResize {
            window_id,
            pointer: pointer_from_pointer_event(&ev),
        });
    };
    let stop_control_pointerdown = move |ev: web_sys::PointerEvent| {
        ev.prevent_default();
        ev.stop_propagation();
    };
    let grow = Callback::new(move |minimum: MinimumWindowSize| {
        runtime.dispatch_action(DesktopAction::GrowWindow {
            window_id,
            minimum: WindowSize {
                width: minimum.width,
                height: minimum.height,
            },
        });
    });

    // Kind and title never change after creation, so the content view mounts
    // once and keeps its local state across drags, resizes, and focus changes.
    let (title, contents) = {
        let state = runtime.state.get_untracked();
        let mobile = host::device_class().is_mobile();
        match state.windows.iter().find(|w| w.id == window_id) {
            Some(record) => (
                record.title.clone(),
                crate::apps::render_window_contents(record, AppHost::new(grow), mobile),
            ),
            None => (String::new(), ().into_view()),
        }
    };
    let titlebar_title = title.clone();

    let window_class = move || {
        let focused = runtime.state.get().focused_window_id() == Some(window_id);
        format!("window{}", if focused { " focused" } else { "" })
    };
    let window_style = move || {
        let Some(win) = window.get() else {
            return String::new();
        };
        if host::device_class().is_mobile() {
            format!(
                "left:3vw;top:{top}px;width:94vw;height:calc(100vh - {top}px);\
                 position:fixed;z-index:{z};",
                top = MOBILE_HEADER_HEIGHT_PX,
                z = win.stack_order
            )
        } else {
            let dragging = runtime
                .interaction
                .get()
                .window_drag
                .map(|session| session.window_id == win.id)
                .unwrap_or(false);
            format!(
                "left:{}px;top:{}px;width:{}px;height:{}px;z-index:{};cursor:{};",
                win.position.x,
                win.position.y,
                win.size.width,
                win.size.height,
                win.stack_order,
                if dragging { "grabbing" } else { "default" }
            )
        }
    };

    view! {
        <Show when=move || window.get().is_some() fallback=|| ()>
            <section
                class=window_class
                style=window_style
                on:pointerdown=focus
                role="dialog"
                aria-label=title.clone()
                tabindex="0"
            >
                <header class="window-titlebar" on:pointerdown=begin_move>
                    <div class="window-controls">
                        <button
                            class="window-control window-control-close"
                            title="Close"
                            aria-label="Close window"
                            on:pointerdown=stop_control_pointerdown
                            on:click=close
                            on:mouseenter=move |_| close_hover.set(true)
                            on:mouseleave=move |_| close_hover.set(false)
                        >
                            <Show when=move || close_hover.get() fallback=|| ()>
                                <svg
                                    class="window-control-glyph"
                                    viewBox="0 0 14 14"
                                    width="14"
                                    height="14"
                                    aria-hidden="true"
                                    inner_html=CLOSE_GLYPH_SVG
                                />
                            </Show>
                        </button>
                        <span
                            class="window-control window-control-minimize"
                            title="Minimize (not implemented)"
                        ></span>
                        <span
                            class="window-control window-control-zoom"
                            title="Zoom (not implemented)"
                        ></span>
                    </div>
                    <div class="window-title">{titlebar_title.clone()}</div>
                </header>
                <div class="window-content">{contents.clone()}</div>
                <Show when=move || !host::device_class().is_mobile() fallback=|| ()>
                    <div
                        class="window-resize-handle"
                        aria-label="Resize window"
                        on:pointerdown=begin_resize
                    ></div>
                </Show>
            </section>
        </Show>
    }
}
