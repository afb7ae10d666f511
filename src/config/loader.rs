use anyhow::{Context, Result};
use dirs::home_dir;
use std::{fs, path::Path};
use tracing::debug;

use super::Config;
use super::builder::ConfigBuilder;
use super::environment::apply_env_overrides;
use super::types::{FileConfig, LlmProvider, PersistedConfig};
use super::validation::validate;

impl Config {
    pub fn config_path() -> Result<std::path::PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(".tripplan/config");
        Ok(path)
    }

    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::new()
    }

    /// Defaults plus the config file, without environment overrides. This is
    /// what `tripplan config` edits and writes back.
    pub fn load_file() -> Result<Self> {
        Self::file_builder()?.build()
    }

    pub fn load() -> Result<Self> {
        let config = apply_env_overrides(Self::file_builder()?)?.build()?;
        config.validate()?;
        Ok(config)
    }

    fn file_builder() -> Result<ConfigBuilder> {
        let path = Self::config_path()?;
        let builder = Self::builder();
        if !path.exists() {
            return Ok(builder);
        }

        debug!(path = %path.display(), "loading config file");
        Self::apply_file(builder, &path)
    }

    pub fn save(&self) -> Result<()> {
        let path = Self::config_path()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Unable to create config directory {}", parent.display())
            })?;
        }

        let payload = PersistedConfig::from(self);
        let json = serde_json::to_string_pretty(&payload)
            .context("Failed to serialize configuration to JSON")?;
        fs::write(&path, json)
            .with_context(|| format!("Failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        validate(self)
    }

    /// Switches provider the same way the builder does: endpoint and model
    /// fall back to the new provider's defaults. Returns whether anything
    /// changed.
    pub fn set_provider(&mut self, provider: LlmProvider) -> bool {
        if self.llm.provider == provider {
            return false;
        }
        self.llm.provider = provider;
        self.llm.base_url = provider.default_base_url().to_string();
        self.model.name = provider.default_model().to_string();
        true
    }

    fn apply_file(builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let file: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        file.apply(builder)
    }
}

impl FileConfig {
    pub fn apply(self, mut builder: ConfigBuilder) -> Result<ConfigBuilder> {
        if let Some(provider) = self.llm.provider.as_deref() {
            let parsed = provider
                .parse::<LlmProvider>()
                .with_context(|| format!("Invalid provider '{provider}' in config file"))?;
            builder = builder.with_provider(parsed);
        }

        let llm = self.llm;
        let builder = builder.with_llm(|settings| {
            if let Some(api_key) = llm.api_key {
                settings.api_key = api_key;
            }
            if let Some(timeout) = llm.timeout_secs {
                settings.timeout_secs = Some(timeout);
            }
            if let Some(base_url) = llm.base_url {
                settings.base_url = base_url;
            }
            if let Some(user_agent) = llm.user_agent {
                settings.user_agent = user_agent;
            }
        });

        let model = self.model;
        Ok(builder.with_model(|settings| {
            if let Some(name) = model.name {
                settings.name = name;
            }
            if let Some(max_tokens) = model.max_tokens {
                settings.max_tokens = max_tokens;
            }
        }))
    }
}
