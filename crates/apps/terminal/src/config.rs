//! Provider selection and credentials, resolved once at startup from
//! build-time environment values.

use crate::error::ChatError;

const OPENAI_CHAT_URL: &str = "https://api.openai.com/v1/chat/completions";
const OPENAI_MODEL: &str = "gpt-3.5-turbo";
const DEEPSEEK_CHAT_URL: &str = "https://api.deepseek.com/chat/completions";
const DEEPSEEK_MODEL: &str = "deepseek-chat";

/// Persona instructions sent as the system message with every request.
pub const SYSTEM_PROMPT: &str = "\
You are Viraj Murab's personal assistant. Respond in a friendly, human way using normal \
conversation. Keep responses concise and to the point. Avoid terminal jargon and hacker \
metaphors.

About Viraj:
- Software developer skilled in React, Python, and web development
- Created PriceTrackingWebScraper, PoeltlSolver, and BuddyCrush
- Enjoys building user-friendly apps and retro computing
- Works under Professor Mahmoud at the University of Alberta as a Machine Learning \
Assistant and published a paper on Real-Time Reinforcement Learning (RTRL); built eLSTM \
and RTU models, applied Actor-Critic methods to POMDPs, and developed scalable RL systems
- Interned at Questrade as a full stack developer on insurance microservices (Toronto)
- Starting at Air Canada in July as a Full Stack Developer in Toronto
- Solved 730+ LeetCode problems (contest rating: 1600) - Profile: \
https://leetcode.com/u/VariableViking/
- Built PalCrush social app (Next.js/React/TS), 300+ users day one, Top 50 Product Hunt
- Built low-level C systems (UNIX shell, file system, MapReduce)
- Led a team of 6 on a distributed social platform as Product Owner

Just answer questions naturally like a helpful colleague. No theatrics.";

/// One resolved endpoint: URL, model id, and bearer credential.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatConfig {
    pub url: &'static str,
    pub model: &'static str,
    pub api_key: String,
}

/// Resolves the provider toggle and credential from raw environment values.
///
/// The toggle selects DeepSeek when literally `"true"`, OpenAI otherwise. An
/// absent or empty credential for the selected provider short-circuits with
/// [`ChatError::MissingApiKey`]; no request is attempted in that case.
pub fn resolve(
    use_deepseek: Option<&str>,
    openai_key: Option<&str>,
    deepseek_key: Option<&str>,
) -> Result<ChatConfig, ChatError> {
    let deepseek = use_deepseek == Some("true");
    let (url, model, key) = if deepseek {
        (DEEPSEEK_CHAT_URL, DEEPSEEK_MODEL, deepseek_key)
    } else {
        (OPENAI_CHAT_URL, OPENAI_MODEL, openai_key)
    };
    let api_key = key
        .filter(|key| !key.is_empty())
        .ok_or(ChatError::MissingApiKey)?
        .to_string();
    Ok(ChatConfig { url, model, api_key })
}

/// Resolves the configuration baked in at compile time.
pub fn from_build_env() -> Result<ChatConfig, ChatError> {
    resolve(
        option_env!("SITE_USE_DEEPSEEK"),
        option_env!("SITE_OPENAI_KEY"),
        option_env!("SITE_DEEPSEEK_KEY"),
    )
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn defaults_to_openai_when_toggle_is_unset() {
        let config = resolve(None, Some("sk-test"), None).expect("config");
        assert_eq!(config.url, OPENAI_CHAT_URL);
        assert_eq!(config.model, OPENAI_MODEL);
        assert_eq!(config.api_key, "sk-test");
    }

    #[test]
    fn selects_deepseek_only_on_exact_true() {
        let config = resolve(Some("true"), None, Some("ds-test")).expect("config");
        assert_eq!(config.url, DEEPSEEK_CHAT_URL);
        assert_eq!(config.model, DEEPSEEK_MODEL);

        let config = resolve(Some("1"), Some("sk-test"), Some("ds-test")).expect("config");
        assert_eq!(config.url, OPENAI_CHAT_URL);
    }

    #[test]
    fn missing_or_empty_credential_short_circuits() {
        assert_eq!(resolve(None, None, None), Err(ChatError::MissingApiKey));
        assert_eq!(resolve(None, Some(""), None), Err(ChatError::MissingApiKey));
        // The unselected provider's key does not count.
        assert_eq!(
            resolve(Some("true"), Some("sk-test"), None),
            Err(ChatError::MissingApiKey)
        );
    }
}
