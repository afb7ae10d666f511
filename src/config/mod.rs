//! Configuration management for the tripplan CLI.
//!
//! Settings are layered in this order, later layers winning:
//! - Built-in defaults
//! - The JSON config file at `~/.tripplan/config`
//! - Environment variable overrides
//!
//! The resulting [`Config`] is validated once and then passed explicitly to
//! the client and planner; nothing is held in global state.

mod builder;
mod constants;
mod defaults;
mod environment;
mod loader;
mod types;
mod validation;

pub use types::{Config, LlmProvider, LlmSettings, ModelSettings};

#[cfg(test)]
pub use constants::{
    DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL, DEFAULT_OPENROUTER_BASE_URL,
    DEFAULT_OPENROUTER_MODEL,
};
