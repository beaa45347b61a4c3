use crate::config::{ClientConfig, DEFAULT_TIMEOUT_SECS};
use crate::error::{ClientError, Result};
use crate::models::*;
use reqwest::header::{ACCEPT, CONTENT_TYPE};
use reqwest::{Client, Url};
use serde::Deserialize;
use serde_json::Value;
use std::time::{Duration, Instant};

/// Sends one question set to a `/hackrx/run` endpoint and pairs up the answers.
pub struct QueryClient {
    client: Client,
    config: ClientConfig,
}

impl QueryClient {
    pub fn new(config: ClientConfig) -> Result<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(ClientError::Transport)?;

        Ok(Self { client, config })
    }

    pub fn endpoint(&self) -> &Url {
        &self.config.endpoint
    }

    /// Makes exactly one POST. Nothing is retried or cached.
    pub async fn ask(&self, document_url: &str, questions: &[String]) -> Result<QueryOutcome> {
        if questions.is_empty() {
            return Err(ClientError::InvalidConfig(
                "at least one question is required".to_string(),
            ));
        }

        let request = HackRxRequest::new(document_url, questions);

        log::info!(
            "Sending {} question(s) to {}",
            questions.len(),
            self.config.endpoint
        );
        let start_time = Instant::now();

        let response = self
            .client
            .post(self.config.endpoint.clone())
            .header(CONTENT_TYPE, "application/json")
            .header(ACCEPT, "application/json")
            .bearer_auth(&self.config.api_key)
            .json(&request)
            .send()
            .await
            .map_err(ClientError::Transport)?;

        let status = response.status();
        log::info!(
            "Received {} after {} ms",
            status,
            start_time.elapsed().as_millis()
        );

        // The status line is in, but the body can still fail mid-stream; that
        // stays a transport failure.
        let body = response.text().await.map_err(ClientError::Transport)?;
        log::debug!("Response body is {} bytes", body.len());

        if !status.is_success() {
            return Err(ClientError::Remote {
                status: status.as_u16(),
                body,
            });
        }

        let shape_error = |reason: String| ClientError::ResponseShape {
            status: status.as_u16(),
            body: body.clone(),
            reason,
        };
        let raw: Value = serde_json::from_str(&body)
            .map_err(|e| shape_error(format!("body is not valid JSON: {e}")))?;
        let answered = pair_answers(questions, &raw).map_err(shape_error)?;

        Ok(QueryOutcome { raw, answered })
    }
}

/// One-shot helper: builds a client with the default timeout and runs a single query.
pub async fn run(
    endpoint: &str,
    api_key: &str,
    document_url: &str,
    questions: &[String],
) -> Result<Vec<AnsweredQuestion>> {
    let config = ClientConfig::new(
        endpoint,
        api_key,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS),
    )?;
    let outcome = QueryClient::new(config)?.ask(document_url, questions).await?;
    Ok(outcome.answered)
}

/// Pairs `questions[i]` with `answers[i]`. Surplus answers are dropped.
///
/// The error is a description of what is wrong with `raw`.
pub fn pair_answers(
    questions: &[String],
    raw: &Value,
) -> std::result::Result<Vec<AnsweredQuestion>, String> {
    if raw.get("answers").is_none() {
        return Err("response has no `answers` field".to_string());
    }

    let response = HackRxResponse::deserialize(raw)
        .map_err(|e| format!("`answers` is not a list of strings: {e}"))?;

    if response.answers.len() < questions.len() {
        return Err(format!(
            "expected {} answers, got {}",
            questions.len(),
            response.answers.len()
        ));
    }
    if response.answers.len() > questions.len() {
        log::warn!(
            "Server returned {} answers for {} questions; ignoring the extra ones",
            response.answers.len(),
            questions.len()
        );
    }

    Ok(questions
        .iter()
        .zip(response.answers)
        .map(|(question, answer)| AnsweredQuestion {
            question: question.clone(),
            answer,
        })
        .collect())
}
