use anyhow::Result;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::process::ExitCode;

use crate::trip::{BudgetTier, DEFAULT_DAYS, Interest};

use super::commands;

/// Entry point for the `tripplan` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "tripplan",
    about = "AI trip planner: day-by-day itinerary, map points and budget breakdown",
    version,
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Command>,

    /// Number of days (1-30)
    #[arg(
        short = 'd',
        long = "days",
        default_value_t = DEFAULT_DAYS,
        value_parser = clap::value_parser!(u32).range(1..=30)
    )]
    pub days: u32,

    /// Budget tier
    #[arg(
        short = 'b',
        long = "budget",
        value_enum,
        ignore_case = true,
        default_value_t = BudgetTier::default()
    )]
    pub budget: BudgetTier,

    /// Interest tags; repeat the flag or separate with commas
    #[arg(
        short = 'i',
        long = "interest",
        value_enum,
        ignore_case = true,
        value_delimiter = ','
    )]
    pub interests: Vec<Interest>,

    /// Fill in the trip form interactively
    #[arg(long = "form")]
    pub form: bool,

    /// How to print the itinerary
    #[arg(long = "format", value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,

    /// Enable verbose logging of model requests and pipeline state
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    /// Destination: words typed after `tripplan`
    #[arg(trailing_var_arg = true)]
    pub destination: Vec<String>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Show or update the stored model configuration.
    Config(ConfigArgs),
}

#[derive(Debug, Args, Default)]
pub struct ConfigArgs {
    /// Model provider (gemini or openrouter)
    #[arg(long)]
    pub provider: Option<String>,

    /// API key for the selected provider
    #[arg(long)]
    pub api_key: Option<String>,

    /// Model identifier
    #[arg(long)]
    pub model: Option<String>,

    /// Request timeout in seconds (0 clears it)
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Maximum completion tokens
    #[arg(long)]
    pub max_tokens: Option<u32>,

    /// Override the chat completions base URL
    #[arg(long)]
    pub base_url: Option<String>,
}

impl ConfigArgs {
    pub fn has_changes(&self) -> bool {
        self.provider.is_some()
            || self.api_key.is_some()
            || self.model.is_some()
            || self.timeout.is_some()
            || self.max_tokens.is_some()
            || self.base_url.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Colored sections, point table and bar chart
    Text,
    /// The shaped views as JSON, for external map and chart tools
    Json,
}

impl Cli {
    pub async fn run(self) -> Result<ExitCode> {
        commands::run(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parses_trip_flags() {
        let cli = Cli::try_parse_from([
            "tripplan",
            "-d",
            "3",
            "--budget",
            "moderate",
            "-i",
            "history,FOOD",
            "--interest",
            "art",
            "New",
            "York",
        ])
        .unwrap();

        assert_eq!(cli.days, 3);
        assert_eq!(cli.budget, BudgetTier::Moderate);
        assert_eq!(
            cli.interests,
            vec![Interest::History, Interest::Food, Interest::Art]
        );
        assert_eq!(cli.destination, vec!["New", "York"]);
        assert_eq!(cli.format, OutputFormat::Text);
        assert!(cli.command.is_none());
    }

    #[test]
    fn defaults_match_form() {
        let cli = Cli::try_parse_from(["tripplan", "Rome"]).unwrap();
        assert_eq!(cli.days, DEFAULT_DAYS);
        assert_eq!(cli.budget, BudgetTier::BudgetFriendly);
        assert!(cli.interests.is_empty());
    }

    #[test]
    fn rejects_out_of_range_days() {
        assert!(Cli::try_parse_from(["tripplan", "-d", "0", "Rome"]).is_err());
        assert!(Cli::try_parse_from(["tripplan", "-d", "31", "Rome"]).is_err());
    }

    #[test]
    fn rejects_unknown_interest() {
        assert!(Cli::try_parse_from(["tripplan", "-i", "skiing", "Rome"]).is_err());
    }

    #[test]
    fn parses_config_subcommand() {
        let cli = Cli::try_parse_from([
            "tripplan",
            "config",
            "--provider",
            "openrouter",
            "--api-key",
            "sk-test",
        ])
        .unwrap();

        match cli.command {
            Some(Command::Config(args)) => {
                assert_eq!(args.provider.as_deref(), Some("openrouter"));
                assert_eq!(args.api_key.as_deref(), Some("sk-test"));
                assert!(args.has_changes());
            }
            other => panic!("expected config subcommand, got {other:?}"),
        }
    }
}
