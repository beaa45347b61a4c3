use crate::error::ClientError;
use crate::models::{AnsweredQuestion, QueryOutcome};
use serde::Serialize;
use std::error::Error as _;
use std::io::{self, Write};
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "text" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!("unknown output format '{other}' (expected text or json)")),
        }
    }
}

#[derive(Serialize)]
struct AnsweredReport<'a> {
    answers: &'a [AnsweredQuestion],
}

pub fn render_outcome<W: Write>(out: &mut W, outcome: &QueryOutcome, format: OutputFormat) -> io::Result<()> {
    match format {
        OutputFormat::Text => render_text(out, outcome),
        OutputFormat::Json => {
            let report = AnsweredReport {
                answers: &outcome.answered,
            };
            writeln!(out, "{}", serde_json::to_string_pretty(&report)?)
        }
    }
}

/// Raw response first, then numbered question/answer pairs in input order.
fn render_text<W: Write>(out: &mut W, outcome: &QueryOutcome) -> io::Result<()> {
    writeln!(out, "API Response:")?;
    writeln!(out, "{}", serde_json::to_string_pretty(&outcome.raw)?)?;

    writeln!(out)?;
    writeln!(out, "Questions and Answers:")?;
    for (i, pair) in outcome.answered.iter().enumerate() {
        let n = i + 1;
        writeln!(out)?;
        writeln!(out, "Q{}: {}", n, pair.question)?;
        writeln!(out, "A{}: {}", n, pair.answer)?;
    }

    Ok(())
}

pub fn render_error<W: Write>(out: &mut W, err: &ClientError) -> io::Result<()> {
    match err {
        ClientError::Remote { status, body } => {
            writeln!(out, "Error: API returned status code {}", status)?;
            writeln!(out, "Response: {}", body)
        }
        ClientError::ResponseShape { status, body, .. } => {
            writeln!(out, "Error: {} (status {})", err, status)?;
            writeln!(out, "Response: {}", body)
        }
        ClientError::Transport(cause) => {
            let mut message = cause.to_string();
            let mut source = cause.source();
            while let Some(inner) = source {
                message.push_str(": ");
                message.push_str(&inner.to_string());
                source = inner.source();
            }
            if err.is_timeout() {
                writeln!(out, "Error: request timed out ({})", message)
            } else {
                writeln!(out, "Error: {}", message)
            }
        }
        other => writeln!(out, "Error: {}", other),
    }
}
