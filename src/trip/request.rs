use std::fmt;
use std::str::FromStr;

use anyhow::anyhow;
use clap::ValueEnum;

use crate::error::TripError;

pub const MIN_DAYS: u32 = 1;
pub const MAX_DAYS: u32 = 30;
pub const DEFAULT_DAYS: u32 = 7;

/// Cost expectation for the trip, ordered from cheapest to most expensive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, ValueEnum)]
pub enum BudgetTier {
    #[default]
    #[value(name = "budget-friendly")]
    BudgetFriendly,
    Moderate,
    Luxury,
}

impl BudgetTier {
    pub const ALL: [BudgetTier; 3] = [
        BudgetTier::BudgetFriendly,
        BudgetTier::Moderate,
        BudgetTier::Luxury,
    ];

    pub fn label(self) -> &'static str {
        match self {
            BudgetTier::BudgetFriendly => "Budget-Friendly",
            BudgetTier::Moderate => "Moderate",
            BudgetTier::Luxury => "Luxury",
        }
    }

    /// Dollar-sign badge shown next to the label.
    pub fn symbol(self) -> &'static str {
        match self {
            BudgetTier::BudgetFriendly => "$",
            BudgetTier::Moderate => "$$",
            BudgetTier::Luxury => "$$$",
        }
    }
}

impl fmt::Display for BudgetTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for BudgetTier {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace([' ', '_'], "-");
        match normalized.as_str() {
            "budget-friendly" | "budget" | "$" => Ok(BudgetTier::BudgetFriendly),
            "moderate" | "$$" => Ok(BudgetTier::Moderate),
            "luxury" | "$$$" => Ok(BudgetTier::Luxury),
            _ => Err(anyhow!("Unknown budget tier '{}'", s.trim())),
        }
    }
}

/// The fixed set of interest tags offered on the form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, ValueEnum)]
pub enum Interest {
    History,
    Food,
    Nightlife,
    Nature,
    Art,
    Adventure,
    Shopping,
    Relaxation,
}

impl Interest {
    pub const ALL: [Interest; 8] = [
        Interest::History,
        Interest::Food,
        Interest::Nightlife,
        Interest::Nature,
        Interest::Art,
        Interest::Adventure,
        Interest::Shopping,
        Interest::Relaxation,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Interest::History => "History",
            Interest::Food => "Food",
            Interest::Nightlife => "Nightlife",
            Interest::Nature => "Nature",
            Interest::Art => "Art",
            Interest::Adventure => "Adventure",
            Interest::Shopping => "Shopping",
            Interest::Relaxation => "Relaxation",
        }
    }
}

impl fmt::Display for Interest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for Interest {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Interest::ALL
            .into_iter()
            .find(|interest| interest.label().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| anyhow!("Unknown interest '{trimmed}'"))
    }
}

/// Submitted trip preferences. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TripRequest {
    destination: String,
    days: u32,
    budget: BudgetTier,
    interests: Vec<Interest>,
}

impl TripRequest {
    /// Checks the form rules: a destination and at least one interest are
    /// required and the day count must be within 1-30. Repeated interests are
    /// dropped, keeping first-seen order.
    pub fn new(
        destination: impl Into<String>,
        days: u32,
        budget: BudgetTier,
        interests: impl IntoIterator<Item = Interest>,
    ) -> Result<Self, TripError> {
        let destination = destination.into().trim().to_string();

        let mut unique = Vec::new();
        for interest in interests {
            if !unique.contains(&interest) {
                unique.push(interest);
            }
        }

        if destination.is_empty() {
            return Err(TripError::input_incomplete("a destination is required"));
        }
        if unique.is_empty() {
            return Err(TripError::input_incomplete(
                "at least one interest is required",
            ));
        }
        if !(MIN_DAYS..=MAX_DAYS).contains(&days) {
            return Err(TripError::InvalidDays { days });
        }

        Ok(Self {
            destination,
            days,
            budget,
            interests: unique,
        })
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }

    pub fn days(&self) -> u32 {
        self.days
    }

    pub fn budget(&self) -> BudgetTier {
        self.budget
    }

    /// Interest labels joined the way they appear in the prompt.
    pub fn interests_joined(&self) -> String {
        self.interests
            .iter()
            .map(|interest| interest.label())
            .collect::<Vec<_>>()
            .join(", ")
    }
}
