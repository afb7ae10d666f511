use anyhow::{Result, anyhow};

use super::types::Config;

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_key.trim().is_empty() {
        let provider = config.llm.provider;
        return Err(anyhow!(
            "{} API key not found. Set {} or run `tripplan config --api-key <KEY>` (stored in {})",
            provider.display_name(),
            provider.api_key_env_var(),
            Config::config_path()?.display()
        ));
    }

    if config.llm.base_url.trim().is_empty() {
        return Err(anyhow!("LLM base URL cannot be empty"));
    }

    if config.model.name.trim().is_empty() {
        return Err(anyhow!("Model name cannot be empty"));
    }

    if config.model.max_tokens == 0 {
        return Err(anyhow!("max_tokens must be greater than zero"));
    }

    Ok(())
}
