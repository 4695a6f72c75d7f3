use std::time::Duration;

use super::*;

const LINKS: [(&str, &str); 5] = [
    ("LinkedIn", "https://www.linkedin.com/in/viraj-murab/"),
    ("Email", "mailto:virajmurabrc@gmail.com"),
    ("GitHub", "https://github.com/VirajCommits"),
    ("Leetcode", "https://leetcode.com/u/VariableViking/"),
    ("X", "https://x.com/virajmurab"),
];

const APPLE_MENU: [(&str, &str); 5] = [
    ("about", "About Me"),
    ("experience", "Experience"),
    ("resume", "Resume"),
    ("terminal", "Terminal"),
    ("fun", "Fun Bits"),
];

#[cfg(target_arch = "wasm32")]
fn formatted_time_now() -> String {
    let date = js_sys::Date::new_0();
    format!("{:02}:{:02}", date.get_hours(), date.get_minutes())
}

#[cfg(not(target_arch = "wasm32"))]
fn formatted_time_now() -> String {
    "00:00".to_string()
}

#[component]
pub(super) fn MenuBar() -> impl IntoView {
    let runtime = use_desktop_runtime();
    let time = create_rw_signal(formatted_time_now());
    let apple_open = create_rw_signal(false);
    let links_open = create_rw_signal(false);

    if let Ok(interval) =
        set_interval_with_handle(move || time.set(formatted_time_now()), Duration::from_secs(1))
    {
        on_cleanup(move || interval.clear());
    }

    // Any mousedown that is not swallowed by a dropdown anchor dismisses both
    // menus, so clicking the desktop or a window closes them.
    let dismiss = window_event_listener(ev::mousedown, move |_| {
        if apple_open.get_untracked() {
            apple_open.set(false);
        }
        if links_open.get_untracked() {
            links_open.set(false);
        }
    });
    on_cleanup(move || dismiss.remove());

    let keep_menu_open = |ev: web_sys::MouseEvent| ev.stop_propagation();

    let apple_items = move || {
        APPLE_MENU
            .into_iter()
            .map(|(token, label)| {
                let open_app = move |_: web_sys::MouseEvent| {
                    open_window_for(runtime, WindowKind::from_token(token), label.to_string());
                    apple_open.set(false);
                };
                view! {
                    <div class="dropdown-link" on:click=open_app>
                        {label}
                    </div>
                }
            })
            .collect_view()
    };

    let link_items = move || {
        LINKS
            .into_iter()
            .map(|(label, url)| {
                let open_link = move |_: web_sys::MouseEvent| {
                    runtime.dispatch_action(DesktopAction::OpenExternalLink {
                        url: url.to_string(),
                    });
                    links_open.set(false);
                };
                view! {
                    <div class="dropdown-link" on:click=open_link>
                        {label}
                    </div>
                }
            })
            .collect_view()
    };

    view! {
        <div class="menu-bar">
            <div class="menu-left">
                <div class="menu-dropdown-anchor" on:mousedown=keep_menu_open>
                    <img
                        src="/apple_logo.png"
                        alt="Apple"
                        class="apple-logo"
                        on:click=move |_| apple_open.update(|open| *open = !*open)
                    />
                    <Show when=move || apple_open.get() fallback=|| ()>
                        <div class="menu-dropdown apple-dropdown">{apple_items()}</div>
                    </Show>
                </div>
                <div class="menu-dropdown-anchor" on:mousedown=keep_menu_open>
                    <span
                        class="menu-item"
                        class:open=links_open
                        on:click=move |_| links_open.update(|open| *open = !*open)
                    >
                        "Links"
                    </span>
                    <Show when=move || links_open.get() fallback=|| ()>
                        <div class="menu-dropdown links-dropdown">{link_items()}</div>
                    </Show>
                </div>
                <span class="menu-item">"File"</span>
                <span class="menu-item">"Edit"</span>
                <span class="menu-item">"View"</span>
            </div>
            <div class="menu-right">
                <span class="menu-time">{move || time.get()}</span>
            </div>
        </div>
    }
}
