//! AI chat terminal app: a retro prompt that forwards questions about Viraj to a
//! hosted language model and streams the reply into the transcript.

mod client;
mod config;
mod error;
mod stream;

pub use client::{build_request, stream_chat, ChatMessage, ChatRequest};
pub use config::{from_build_env, resolve, ChatConfig, SYSTEM_PROMPT};
pub use error::ChatError;
pub use stream::{ChatStreamParser, StreamEvent, Utf8ChunkDecoder};

use desktop_app_contract::{window_primary_input_dom_id, WindowRuntimeId};
use leptos::*;

const PROMPT_PREFIX: &str = "viraj@vm.sh ~ $";

#[component]
pub fn TerminalApp(window_id: WindowRuntimeId) -> impl IntoView {
    let input = create_rw_signal(String::new());
    let transcript = create_rw_signal(Vec::<String>::new());
    let pending = create_rw_signal(false);
    // Provider and credential are fixed for the whole session.
    let chat_config = store_value(config::from_build_env());

    let append_to_reply = move |token: &str| {
        transcript.update(|lines| {
            if let Some(line) = lines.last_mut() {
                line.push_str(token);
            }
        });
    };

    let submit = move |ev: ev::SubmitEvent| {
        ev.prevent_default();
        if pending.get_untracked() {
            return;
        }
        let prompt = input.get_untracked().trim().to_string();
        if prompt.is_empty() {
            return;
        }
        input.set(String::new());
        transcript.update(|lines| {
            lines.push(format!("{PROMPT_PREFIX} {prompt}"));
            // The reply streams into this line token by token.
            lines.push(String::new());
        });

        let config = match chat_config.get_value() {
            Ok(config) => config,
            Err(err) => {
                append_to_reply(&format!("Error: {err}"));
                return;
            }
        };

        pending.set(true);
        spawn_local(async move {
            let outcome = client::stream_chat(&config, &prompt, |token| append_to_reply(token)).await;
            if let Err(err) = outcome {
                append_to_reply(&format!("Error: {err}"));
            }
            pending.set(false);
        });
    };

    view! {
        <div class="terminal-app">
            <div class="terminal-log">
                {move || {
                    transcript
                        .get()
                        .into_iter()
                        .map(|line| view! { <div class="terminal-line">{line}</div> })
                        .collect_view()
                }}
                <Show when=move || pending.get() fallback=|| ()>
                    <div class="terminal-line terminal-thinking">"Thinking..."</div>
                </Show>
            </div>
            <div class="terminal-hint">"Ask me anything about Viraj!"</div>
            <form class="terminal-input-row" on:submit=submit>
                <span class="terminal-prompt">{PROMPT_PREFIX}</span>
                <input
                    id=window_primary_input_dom_id(window_id)
                    class="terminal-input"
                    prop:value=input
                    on:input=move |ev| input.set(event_target_value(&ev))
                    prop:disabled=pending
                    autofocus=true
                />
            </form>
        </div>
    }
}
