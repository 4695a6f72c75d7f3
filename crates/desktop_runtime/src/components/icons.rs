use super::*;
use crate::model::IconRecord;

/// Icons per centered row in the mobile grid layout.
const MOBILE_ICON_ROW: usize = 4;

fn activate_icon(runtime: DesktopRuntimeContext, icon: &IconRecord) {
    if let Some(kind) = icon.kind.clone() {
        open_window_for(runtime, kind, icon.name.clone());
    }
}

#[component]
pub(super) fn DesktopIcons() -> impl IntoView {
    let runtime = use_desktop_runtime();
    // Touch devices activate on a single tap; pointer devices keep the classic
    // double click so a drag never launches a window.
    let touch = host::is_touch_device();

    move || {
        let icons = runtime.icons.get();
        let active_drag = runtime.interaction.get().icon_drag.map(|s| s.icon_index);
        if host::device_class().is_mobile() {
            let rows = icons
                .chunks(MOBILE_ICON_ROW)
                .map(|row| {
                    let row_icons = row
                        .iter()
                        .map(|icon| {
                            let activate = {
                                let icon = icon.clone();
                                move |_: web_sys::MouseEvent| activate_icon(runtime, &icon)
                            };
                            view! {
                                <div class="desktop-icon" on:click=activate>
                                    <img
                                        src=icon.image.clone()
                                        alt=icon.name.clone()
                                        class="desktop-icon-image"
                                    />
                                    <div class="desktop-icon-label">{icon.name.clone()}</div>
                                </div>
                            }
                        })
                        .collect_view();
                    view! { <div class="desktop-icon-row">{row_icons}</div> }
                })
                .collect_view();
            view! { <div class="desktop-icon-grid">{rows}</div> }.into_view()
        } else {
            icons
                .iter()
                .enumerate()
                .map(|(index, icon)| {
                    let dragging = active_drag == Some(index);
                    let begin_drag = move |ev: web_sys::PointerEvent| {
                        if ev.button() != 0 {
                            return;
                        }
                        runtime.dispatch_action(DesktopAction::BeginIconDrag {
                            icon_index: index,
                            pointer: pointer_from_pointer_event(&ev),
                        });
                    };
                    let activate = {
                        let icon = icon.clone();
                        move |_: web_sys::MouseEvent| {
                            if !touch {
                                activate_icon(runtime, &icon);
                            }
                        }
                    };
                    let activate_touch = {
                        let icon = icon.clone();
                        move |_: web_sys::MouseEvent| {
                            if touch {
                                activate_icon(runtime, &icon);
                            }
                        }
                    };
                    view! {
                        <div
                            class=format!(
                                "desktop-icon{}",
                                if dragging { " dragging" } else { "" }
                            )
                            style=format!(
                                "position:absolute;left:{}px;top:{}px;",
                                icon.position.x,
                                icon.position.y
                            )
                            on:pointerdown=begin_drag
                            on:dblclick=activate
                            on:click=activate_touch
                        >
                            <img
                                src=icon.image.clone()
                                alt=icon.name.clone()
                                class="desktop-icon-image"
                            />
                            <div class="desktop-icon-label">{icon.name.clone()}</div>
                        </div>
                    }
                })
                .collect_view()
                .into_view()
        }
    }
}
