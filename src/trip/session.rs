use std::fmt;
use std::sync::Arc;

use tracing::{debug, info, trace, warn};

use crate::client::{ChatCompletionRequest, ChatMessage, ChatMessageRole, DynLlmClient};
use crate::config::ModelSettings;
use crate::error::TripError;

use super::parsing::parse_itinerary;
use super::presentation::{Presentation, present};
use super::projection::project;
use super::prompt::build_prompt;
use super::request::TripRequest;

/// Sampling temperature for itinerary generation. Above deterministic so
/// repeated requests suggest different activities.
pub const GENERATION_TEMPERATURE: f32 = 0.8;

/// Lifecycle of one submission. There is no transition out of a terminal
/// state; a new submission starts again from `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmissionState {
    Idle,
    Submitted,
    AwaitingResponse,
    Succeeded,
    Failed,
}

impl fmt::Display for SubmissionState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SubmissionState::Idle => "idle",
            SubmissionState::Submitted => "submitted",
            SubmissionState::AwaitingResponse => "awaiting-response",
            SubmissionState::Succeeded => "success",
            SubmissionState::Failed => "error",
        };
        write!(f, "{label}")
    }
}

/// Runs one request through prompt, model call, parse, projection and
/// presentation.
pub struct TripPlanner {
    client: Arc<DynLlmClient>,
    model: ModelSettings,
}

impl TripPlanner {
    pub fn new(client: Arc<DynLlmClient>, model: ModelSettings) -> Self {
        Self { client, model }
    }

    pub async fn plan(&self, request: &TripRequest) -> Result<Presentation, TripError> {
        let mut tracker = StateTracker::default();
        let result = self.run(request, &mut tracker).await;
        match &result {
            Ok(_) => tracker.advance(SubmissionState::Succeeded),
            Err(err) => {
                warn!(error = %err, "trip planning failed");
                tracker.advance(SubmissionState::Failed);
            }
        }
        result
    }

    async fn run(
        &self,
        request: &TripRequest,
        tracker: &mut StateTracker,
    ) -> Result<Presentation, TripError> {
        tracker.advance(SubmissionState::Submitted);
        let prompt = build_prompt(request);
        debug!(
            destination = request.destination(),
            days = request.days(),
            budget = %request.budget(),
            prompt_len = prompt.len(),
            "built itinerary prompt"
        );

        let completion = ChatCompletionRequest {
            model: self.model.name.clone(),
            messages: vec![ChatMessage {
                role: ChatMessageRole::User,
                content: prompt,
            }],
            max_tokens: Some(self.model.max_tokens),
            temperature: Some(GENERATION_TEMPERATURE),
        };

        tracker.advance(SubmissionState::AwaitingResponse);
        let response = self
            .client
            .chat_completion(completion)
            .await
            .map_err(|err| TripError::transport(&err))?;

        let Some(choice) = response.choices.into_iter().next() else {
            return Err(TripError::parse("model returned no choices", ""));
        };
        if let Some(reason) = choice.finish_reason.as_deref() {
            debug!(finish_reason = reason, "model finished");
        }

        let content = choice.message.content.unwrap_or_default();
        trace!(response = %content, "raw model response");
        if content.trim().is_empty() {
            return Err(TripError::parse("model response was empty", content));
        }

        let itinerary = parse_itinerary(&content)?;
        debug!(
            destination = ?itinerary.destination,
            duration = ?itinerary.duration,
            budget = ?itinerary.budget,
            interests = itinerary.interests.len(),
            "model echoed trip details"
        );
        let projection = project(&itinerary);
        let presentation = present(&itinerary, &projection);
        info!(
            days = projection.costs.days.len(),
            activities = projection.activities.len(),
            total_cost = projection.costs.total,
            "itinerary ready"
        );

        Ok(presentation)
    }
}

#[derive(Debug)]
struct StateTracker {
    state: SubmissionState,
}

impl Default for StateTracker {
    fn default() -> Self {
        Self {
            state: SubmissionState::Idle,
        }
    }
}

impl StateTracker {
    fn advance(&mut self, next: SubmissionState) {
        debug!(from = %self.state, to = %next, "submission state");
        self.state = next;
    }
}
