use anyhow::Result;
use colored::Colorize;
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Arc;
use tracing::debug;

use crate::client::{AIClient, DynLlmClient};
use crate::config::Config;
use crate::error::TripError;
use crate::trip::{Presentation, TripPlanner, TripRequest};

use super::args::OutputFormat;
use super::form::FormAnswers;
use super::render::{render_json, render_text};

const BUSY_MESSAGE: &str = "Generating your personalized itinerary... This may take a moment.";

/// Runs one submission. Form problems are warnings and exit cleanly; a
/// failed model call or unreadable reply prints its user message and exits
/// with a failure code. Nothing is rendered in either case.
pub(crate) async fn handle_plan(answers: FormAnswers, format: OutputFormat) -> Result<ExitCode> {
    let request = match TripRequest::new(
        answers.destination,
        answers.days,
        answers.budget,
        answers.interests,
    ) {
        Ok(request) => request,
        Err(err) => {
            debug!(error = %err, "form rejected");
            eprintln!("{}", err.user_message().yellow());
            return Ok(ExitCode::SUCCESS);
        }
    };

    let config = Config::load()?;
    let client: Arc<DynLlmClient> = Arc::new(AIClient::new(&config.llm)?);
    let planner = TripPlanner::new(client, config.model);

    eprintln!("{}", BUSY_MESSAGE.dimmed());
    let view = match planner.plan(&request).await {
        Ok(view) => view,
        Err(err) => {
            report_failure(&mut io::stderr(), &err)?;
            return Ok(ExitCode::FAILURE);
        }
    };

    print!("{}", render(&view, format)?);
    Ok(ExitCode::SUCCESS)
}

pub(crate) fn report_failure<W: Write>(out: &mut W, err: &TripError) -> io::Result<()> {
    if let Some(raw) = err.raw_response() {
        debug!(raw = %raw, "unparsed model response");
    }
    writeln!(out, "{}", err.user_message().red())
}

pub(crate) fn render(view: &Presentation, format: OutputFormat) -> Result<String> {
    match format {
        OutputFormat::Text => Ok(render_text(view)),
        OutputFormat::Json => Ok(format!("{}\n", render_json(view)?)),
    }
}
