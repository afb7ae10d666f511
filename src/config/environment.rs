use anyhow::{Context, Result, anyhow};
use std::env;

use super::builder::ConfigBuilder;
use super::types::LlmProvider;

pub fn apply_env_overrides(mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
    if let Some(provider_raw) = env_string("TRIPPLAN_PROVIDER")? {
        let provider = provider_raw
            .parse::<LlmProvider>()
            .with_context(|| format!("Failed to parse TRIPPLAN_PROVIDER value '{provider_raw}'"))?;
        builder = builder.with_provider(provider);
    }

    if let Some(base_url) = env_string("TRIPPLAN_LLM_BASE_URL")? {
        builder = builder.with_llm(|llm| llm.base_url = base_url);
    }

    let key_var = builder.llm.provider.api_key_env_var();
    if let Some(api_key) = env_string(key_var)? {
        builder = builder.with_llm(|llm| llm.api_key = api_key);
    }

    if let Some(timeout) = env_u64("TRIPPLAN_TIMEOUT_SECS")? {
        builder = builder.with_llm(|llm| llm.timeout_secs = Some(timeout));
    }

    if let Some(max_tokens) = env_u32("TRIPPLAN_MAX_TOKENS")? {
        builder = builder.with_model(|model| model.max_tokens = max_tokens);
    }

    if let Some(name) = env_string("TRIPPLAN_MODEL")? {
        builder = builder.with_model(|model| model.name = name);
    }

    Ok(builder)
}

/// Reads a variable, treating an empty value the same as an unset one.
pub fn env_string(key: &str) -> Result<Option<String>> {
    match env::var(key) {
        Ok(val) if val.trim().is_empty() => Ok(None),
        Ok(val) => Ok(Some(val)),
        Err(env::VarError::NotPresent) => Ok(None),
        Err(env::VarError::NotUnicode(_)) => Err(anyhow!("{key} contains invalid UTF-8")),
    }
}

pub fn env_u64(key: &str) -> Result<Option<u64>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .trim()
            .parse::<u64>()
            .with_context(|| format!("Failed to parse {key} as u64"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}

pub fn env_u32(key: &str) -> Result<Option<u32>> {
    if let Some(value) = env_string(key)? {
        let parsed = value
            .trim()
            .parse::<u32>()
            .with_context(|| format!("Failed to parse {key} as u32"))?;
        Ok(Some(parsed))
    } else {
        Ok(None)
    }
}
