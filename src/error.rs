//! Error taxonomy for a single trip-planning submission.

use thiserror::Error;

/// Terminal failure of one submission. Nothing is rendered once one of these
/// is returned.
#[derive(Error, Debug)]
pub enum TripError {
    /// Required form fields were left empty; no request was sent.
    #[error("Incomplete input: {message}")]
    InputIncomplete { message: String },

    /// Day count outside the accepted range.
    #[error("Invalid trip length: {days} days (expected 1-30)")]
    InvalidDays { days: u32 },

    /// The model call failed (network, credentials, rate limit, provider error).
    #[error("Model request failed: {message}")]
    Transport { message: String },

    /// The model answered, but not with a decodable itinerary.
    #[error("Failed to parse itinerary JSON: {reason}")]
    Parse { reason: String, raw: String },
}

impl TripError {
    pub fn input_incomplete<S: Into<String>>(message: S) -> Self {
        Self::InputIncomplete {
            message: message.into(),
        }
    }

    pub fn transport(error: &anyhow::Error) -> Self {
        Self::Transport {
            message: format!("{error:#}"),
        }
    }

    pub fn parse<R: Into<String>, T: Into<String>>(reason: R, raw: T) -> Self {
        Self::Parse {
            reason: reason.into(),
            raw: raw.into(),
        }
    }

    /// The raw model output attached to a parse failure.
    pub fn raw_response(&self) -> Option<&str> {
        match self {
            TripError::Parse { raw, .. } => Some(raw),
            _ => None,
        }
    }

    /// Message shown to the user in place of the itinerary.
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            TripError::InputIncomplete { .. } => "Please fill in all the fields.".to_string(),
            TripError::InvalidDays { days } => {
                format!("Number of days must be between 1 and 30 (got {days}).")
            }
            TripError::Transport { message } => format!("An error occurred: {message}"),
            TripError::Parse { .. } => "The AI may have returned a response in an unexpected format. Please try again with a slightly different query.".to_string(),
        }
    }
}
