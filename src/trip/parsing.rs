use tracing::{debug, warn};

use crate::error::TripError;

use super::itinerary::Itinerary;

/// Decodes a model response into an [`Itinerary`].
///
/// Reasoning blocks and Markdown fences around the object are tolerated; the
/// object itself must be complete, valid JSON. Anything else is a
/// [`TripError::Parse`] carrying the full response text.
pub fn parse_itinerary(raw: &str) -> Result<Itinerary, TripError> {
    let Some(fragment) = extract_json_object(raw) else {
        warn!(len = raw.len(), "model response contained no complete JSON object");
        return Err(TripError::parse(
            "response did not contain a complete JSON object",
            raw,
        ));
    };

    match serde_json::from_str::<Itinerary>(fragment) {
        Ok(itinerary) => {
            debug!(days = itinerary.days.len(), "decoded itinerary");
            Ok(itinerary)
        }
        Err(err) => {
            warn!(error = %err, "itinerary JSON did not match the expected shape");
            Err(TripError::parse(err.to_string(), raw))
        }
    }
}

/// Returns the first balanced top-level `{...}` in `input`, ignoring
/// `<think>` blocks and code fences. Braces inside string literals do not
/// count towards nesting.
pub(crate) fn extract_json_object(input: &str) -> Option<&str> {
    let cleaned = skip_think_blocks(input);
    let start = cleaned.find('{')?;

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;

    for (idx, ch) in cleaned[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }

        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    return Some(&cleaned[start..=start + idx]);
                }
            }
            _ => {}
        }
    }

    None
}

/// Slices past any leading `<think>...</think>` reasoning. An unterminated
/// block swallows the rest of the input.
fn skip_think_blocks(input: &str) -> &str {
    let mut rest = input;
    loop {
        let trimmed = rest.trim_start();
        let Some(after_open) = trimmed.strip_prefix("<think>") else {
            return trimmed;
        };
        match after_open.find("</think>") {
            Some(end) => rest = &after_open[end + "</think>".len()..],
            None => return "",
        }
    }
}
