use super::constants::DEFAULT_MAX_TOKENS;
use super::types::{LlmProvider, LlmSettings, ModelSettings};

pub fn default_user_agent() -> String {
    format!("tripplan/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for LlmProvider {
    fn default() -> Self {
        LlmProvider::Gemini
    }
}

impl Default for LlmSettings {
    fn default() -> Self {
        let provider = LlmProvider::default();
        Self {
            provider,
            api_key: String::new(),
            timeout_secs: None,
            base_url: provider.default_base_url().to_string(),
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            name: LlmProvider::default().default_model().to_string(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}
