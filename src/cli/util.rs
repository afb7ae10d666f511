use anyhow::{Context, Result};
use std::io::{self, BufRead, Write};

/// Prints `prompt` and reads one trimmed line from `input`. End of input
/// yields an empty string.
pub(crate) fn prompt_line<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
) -> Result<String> {
    write!(output, "{prompt}")?;
    output.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .context("Failed to read from stdin")?;
    Ok(line.trim().to_string())
}

pub(crate) fn prompt_string_with_default<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    prompt: &str,
    default: &str,
) -> Result<String> {
    let answer = prompt_line(input, output, &format!("{prompt} (default: {default}): "))?;
    if answer.is_empty() {
        Ok(default.to_string())
    } else {
        Ok(answer)
    }
}

pub(crate) fn mask_api_key(key: &str) -> String {
    if key.is_empty() {
        return "(not set)".to_string();
    }

    let visible: String = key.chars().take(8).collect();
    format!("{visible}***")
}

pub(crate) fn stdio() -> (io::StdinLock<'static>, io::Stdout) {
    (io::stdin().lock(), io::stdout())
}
