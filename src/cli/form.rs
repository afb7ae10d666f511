use anyhow::Result;
use colored::Colorize;
use std::io::{BufRead, Write};

use crate::trip::{BudgetTier, Interest, MAX_DAYS, MIN_DAYS};

use super::util::{prompt_line, prompt_string_with_default};

/// Raw form values, before `TripRequest::new` checks them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct FormAnswers {
    pub destination: String,
    pub days: u32,
    pub budget: BudgetTier,
    pub interests: Vec<Interest>,
}

/// Walks the user through the trip form. Values already supplied on the
/// command line are offered as defaults.
pub(crate) fn fill_form<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    defaults: &FormAnswers,
) -> Result<FormAnswers> {
    writeln!(output, "{}", "Plan Your Adventure".bold())?;
    writeln!(output)?;

    let destination = if defaults.destination.trim().is_empty() {
        prompt_line(input, output, "Where do you want to go? ")?
    } else {
        prompt_string_with_default(
            input,
            output,
            "Where do you want to go?",
            defaults.destination.trim(),
        )?
    };

    let days = loop {
        let answer = prompt_string_with_default(
            input,
            output,
            &format!("How many days? ({MIN_DAYS}-{MAX_DAYS})"),
            &defaults.days.to_string(),
        )?;
        match parse_days(&answer) {
            Some(days) => break days,
            None => writeln!(
                output,
                "{}",
                format!("Please enter a whole number between {MIN_DAYS} and {MAX_DAYS}.").red()
            )?,
        }
    };

    writeln!(output, "What's your budget?")?;
    for (idx, tier) in BudgetTier::ALL.iter().enumerate() {
        writeln!(output, "  {}. {} ({})", idx + 1, tier.label(), tier.symbol())?;
    }
    let budget = loop {
        let answer = prompt_string_with_default(
            input,
            output,
            "Choose a budget",
            defaults.budget.label(),
        )?;
        match parse_budget_choice(&answer) {
            Some(tier) => break tier,
            None => writeln!(output, "{}", "Pick 1, 2 or 3, or type the tier name.".red())?,
        }
    };

    writeln!(output, "What are your interests?")?;
    for (idx, interest) in Interest::ALL.iter().enumerate() {
        writeln!(output, "  {}. {}", idx + 1, interest.label())?;
    }
    let interests = loop {
        let prompt = if defaults.interests.is_empty() {
            "Select interests (numbers or names, comma separated): ".to_string()
        } else {
            let current: Vec<_> = defaults.interests.iter().map(|i| i.label()).collect();
            format!(
                "Select interests (numbers or names, comma separated) (default: {}): ",
                current.join(", ")
            )
        };
        let answer = prompt_line(input, output, &prompt)?;
        if answer.is_empty() {
            break defaults.interests.clone();
        }
        match parse_interest_selection(&answer) {
            Ok(selection) => break selection,
            Err(message) => writeln!(output, "{}", message.red())?,
        }
    };

    Ok(FormAnswers {
        destination,
        days,
        budget,
        interests,
    })
}

pub(crate) fn parse_days(answer: &str) -> Option<u32> {
    answer
        .trim()
        .parse::<u32>()
        .ok()
        .filter(|days| (MIN_DAYS..=MAX_DAYS).contains(days))
}

/// Accepts a 1-based menu index, a tier name, or its dollar badge.
pub(crate) fn parse_budget_choice(answer: &str) -> Option<BudgetTier> {
    let answer = answer.trim();
    if let Ok(index) = answer.parse::<usize>() {
        return index
            .checked_sub(1)
            .and_then(|idx| BudgetTier::ALL.get(idx).copied());
    }
    answer.parse().ok()
}

/// Parses a comma or whitespace separated list of menu indices and tag
/// names. Repeats are kept; `TripRequest` drops them.
pub(crate) fn parse_interest_selection(answer: &str) -> Result<Vec<Interest>, String> {
    answer
        .split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .map(|token| {
            if let Ok(index) = token.parse::<usize>() {
                index
                    .checked_sub(1)
                    .and_then(|idx| Interest::ALL.get(idx).copied())
                    .ok_or_else(|| format!("No interest numbered {index}."))
            } else {
                token
                    .parse::<Interest>()
                    .map_err(|_| format!("Unknown interest '{token}'."))
            }
        })
        .collect()
}
