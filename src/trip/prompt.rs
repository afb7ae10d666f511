use serde_json::{Value, json};

use super::request::TripRequest;

/// Fills the itinerary template for one request.
pub fn build_prompt(request: &TripRequest) -> String {
    format!(
        r#"You are an expert travel agent AI. Your task is to create a highly detailed, personalized travel itinerary.
The user's request is for a trip to: {destination} for {days} days, with a {budget} budget, and interests in {interests}.

You must provide the following:
- A creative and catchy "tripName".
- A "destination" name.
- The "duration" in days.
- The "budget" level.
- A list of the user's "interests".
- A day-by-day "itinerary".

For each day in the itinerary, provide:
- The "day" number.
- A "theme" for the day.
- A list of "activities".

For each activity, you MUST provide:
1. "name": The activity name (string).
2. "description": A compelling 2-sentence description (string).
3. "latitude": The precise latitude coordinate (number).
4. "longitude": The precise longitude coordinate (number).
5. "estimated_cost_usd": A numeric estimated cost in USD (number). Do not use ranges, just a single number.

{format_instructions}
"#,
        destination = request.destination(),
        days = request.days(),
        budget = request.budget().label(),
        interests = request.interests_joined(),
        format_instructions = format_instructions(),
    )
}

/// Output-shape instructions appended to every prompt.
pub fn format_instructions() -> String {
    let schema = serde_json::to_string_pretty(&itinerary_schema())
        .unwrap_or_else(|_| itinerary_schema().to_string());
    format!(
        "OUTPUT FORMAT (STRICT JSON ONLY)\n\
         - Return exactly one JSON object that conforms to the JSON schema below.\n\
         - No prose, no markdown, no comments, no trailing text.\n\
         - All costs are plain numbers in USD; never strings or ranges.\n\n\
         {schema}"
    )
}

/// JSON schema of the expected model output.
pub fn itinerary_schema() -> Value {
    json!({
        "type": "object",
        "required": ["tripName", "destination", "duration", "budget", "interests", "itinerary"],
        "properties": {
            "tripName": {"type": "string"},
            "destination": {"type": "string"},
            "duration": {"type": "integer", "minimum": 1},
            "budget": {"type": "string"},
            "interests": {"type": "array", "items": {"type": "string"}},
            "itinerary": {
                "type": "array",
                "items": {
                    "type": "object",
                    "required": ["day", "theme", "activities"],
                    "properties": {
                        "day": {"type": "integer", "minimum": 1},
                        "theme": {"type": "string"},
                        "activities": {
                            "type": "array",
                            "items": {
                                "type": "object",
                                "required": ["name", "description", "latitude", "longitude", "estimated_cost_usd"],
                                "properties": {
                                    "name": {"type": "string"},
                                    "description": {"type": "string"},
                                    "latitude": {"type": "number"},
                                    "longitude": {"type": "number"},
                                    "estimated_cost_usd": {"type": "number", "minimum": 0}
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}
