use anyhow::Result;
use std::process::ExitCode;
use tracing::debug;

use crate::config::Config;
use crate::trip::{BudgetTier, Interest, MAX_DAYS, MIN_DAYS};

use super::args::{Cli, Command};
use super::config_cmd;
use super::form::{self, FormAnswers};
use super::plan;
use super::util;

pub(crate) async fn run(cli: Cli) -> Result<ExitCode> {
    if let Some(Command::Config(args)) = &cli.command {
        config_cmd::handle_config(args)?;
        return Ok(ExitCode::SUCCESS);
    }

    let destination = cli.destination.join(" ").trim().to_owned();
    if destination.is_empty() && cli.interests.is_empty() && !cli.form {
        show_welcome_message();
        return Ok(ExitCode::SUCCESS);
    }

    let mut answers = FormAnswers {
        destination,
        days: cli.days,
        budget: cli.budget,
        interests: cli.interests,
    };

    if cli.form {
        let (mut input, mut output) = util::stdio();
        answers = form::fill_form(&mut input, &mut output, &answers)?;
    }
    debug!(?answers, "submitting trip form");

    plan::handle_plan(answers, cli.format).await
}

fn show_welcome_message() {
    println!("🧭 Welcome to tripplan - Your AI Trip Planner!");
    println!();
    println!("📖 What tripplan does:");
    println!("   • Builds a day-by-day itinerary for any destination");
    println!("   • Lists map coordinates for every activity");
    println!("   • Breaks down the estimated cost per day");
    println!("   • Powered by Google Gemini or OpenRouter");
    println!();

    match Config::config_path() {
        Ok(path) if !path.exists() => {
            println!("⚠️  No configuration file found.");
            println!("   Set GEMINI_API_KEY or run: tripplan config --api-key YOUR_KEY");
            println!();
        }
        _ => {}
    }

    println!("💡 How to use tripplan:");
    println!("   tripplan -i history,food Kyoto                  # 7-day budget-friendly trip");
    println!(
        "   tripplan -d 3 -b luxury -i art -i food Paris     # Choose length ({MIN_DAYS}-{MAX_DAYS}) and budget"
    );
    println!("   tripplan --form                                 # Fill in the trip form interactively");
    println!("   tripplan --format json -i nature Banff          # Views as JSON for map/chart tools");
    println!("   tripplan config --provider openrouter           # Switch model provider");
    println!("   tripplan config --api-key YOUR_KEY              # Store your API key");
    println!();

    let budgets: Vec<_> = BudgetTier::ALL
        .iter()
        .map(|tier| format!("{} ({})", tier.label(), tier.symbol()))
        .collect();
    let interests: Vec<_> = Interest::ALL.iter().map(|i| i.label()).collect();
    println!("💰 Budgets: {}", budgets.join(", "));
    println!("🎯 Interests: {}", interests.join(", "));
    println!();
    println!("❓ For more help: tripplan --help");
}
