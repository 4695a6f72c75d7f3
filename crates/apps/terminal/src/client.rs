//! One-shot streaming request against the configured chat completion endpoint.

use gloo_net::http::Request;
use serde::Serialize;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::ReadableStreamDefaultReader;

use crate::config::{ChatConfig, SYSTEM_PROMPT};
use crate::error::{truncate_error_body, ChatError};
use crate::stream::{ChatStreamParser, StreamEvent, Utf8ChunkDecoder};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub role: &'static str,
    pub content: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatRequest {
    pub model: &'static str,
    pub messages: Vec<ChatMessage>,
    pub temperature: f32,
    pub stream: bool,
}

/// Builds the wire request for one user prompt.
pub fn build_request(config: &ChatConfig, prompt: &str) -> ChatRequest {
    ChatRequest {
        model: config.model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: SYSTEM_PROMPT.to_string(),
            },
            ChatMessage {
                role: "user",
                content: prompt.to_string(),
            },
        ],
        temperature: 0.7,
        stream: true,
    }
}

/// Sends one prompt and feeds reply fragments to `on_token` as they arrive.
///
/// Fragments are delivered in network order. The call runs to completion or
/// failure; there is no retry and no cancellation hook. All failure modes are
/// mapped to a [`ChatError`] the caller renders inline.
pub async fn stream_chat(
    config: &ChatConfig,
    prompt: &str,
    mut on_token: impl FnMut(&str),
) -> Result<(), ChatError> {
    let request = build_request(config, prompt);
    let response = Request::post(config.url)
        .header("Authorization", &format!("Bearer {}", config.api_key))
        .json(&request)
        .map_err(|err| ChatError::Network(err.to_string()))?
        .send()
        .await
        .map_err(|err| ChatError::Network(err.to_string()))?;

    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(ChatError::Http(truncate_error_body(&body)));
    }

    let body = response.body().ok_or(ChatError::NoBody)?;
    let reader: ReadableStreamDefaultReader =
        body.get_reader().dyn_into().map_err(|_| ChatError::NoBody)?;

    let mut decoder = Utf8ChunkDecoder::new();
    let mut parser = ChatStreamParser::new();
    loop {
        let result = JsFuture::from(reader.read())
            .await
            .map_err(|err| ChatError::Network(js_error_message(&err)))?;
        if js_bool(&result, "done") {
            break;
        }
        let value = js_sys::Reflect::get(&result, &JsValue::from_str("value"))
            .map_err(|err| ChatError::Network(js_error_message(&err)))?;
        let text = decoder.decode(&js_sys::Uint8Array::new(&value).to_vec());
        for event in parser.push(&text) {
            match event {
                StreamEvent::Token(token) => on_token(&token),
                StreamEvent::Done => return Ok(()),
            }
        }
    }
    Ok(())
}

fn js_bool(object: &JsValue, key: &str) -> bool {
    js_sys::Reflect::get(object, &JsValue::from_str(key))
        .ok()
        .and_then(|value| value.as_bool())
        .unwrap_or(true)
}

fn js_error_message(err: &JsValue) -> String {
    js_sys::Reflect::get(err, &JsValue::from_str("message"))
        .ok()
        .and_then(|message| message.as_string())
        .unwrap_or_else(|| "Network issue".to_string())
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn request_carries_persona_and_streaming_options() {
        let config = crate::config::resolve(None, Some("sk-test"), None).expect("config");
        let request = build_request(&config, "What does Viraj do?");

        assert_eq!(request.model, "gpt-3.5-turbo");
        assert_eq!(request.temperature, 0.7);
        assert!(request.stream);
        assert_eq!(request.messages.len(), 2);
        assert_eq!(request.messages[0].role, "system");
        assert_eq!(request.messages[0].content, SYSTEM_PROMPT);
        assert_eq!(request.messages[1].role, "user");
        assert_eq!(request.messages[1].content, "What does Viraj do?");
    }

    #[test]
    fn request_serializes_to_the_expected_wire_shape() {
        let config = crate::config::resolve(None, Some("sk-test"), None).expect("config");
        let json =
            serde_json::to_value(build_request(&config, "hi")).expect("serializable request");

        assert_eq!(json["model"], "gpt-3.5-turbo");
        assert_eq!(json["stream"], true);
        assert_eq!(json["messages"][1]["role"], "user");
        assert_eq!(json["messages"][1]["content"], "hi");
    }
}
