use serde::{Deserialize, Serialize};

/// Body of a `POST /hackrx/run` call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HackRxRequest {
    pub document_urls: Vec<String>,
    pub queries: Vec<String>,
}

impl HackRxRequest {
    pub fn new(document_url: &str, questions: &[String]) -> Self {
        Self {
            document_urls: vec![document_url.to_string()],
            queries: questions.to_vec(),
        }
    }
}

/// Successful reply. Any metadata the server adds next to `answers` is ignored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HackRxResponse {
    pub answers: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub answer: String,
}

/// Everything a caller gets back from one successful run.
#[derive(Debug, Clone)]
pub struct QueryOutcome {
    /// The response body exactly as the server sent it, parsed as JSON.
    pub raw: serde_json::Value,
    pub answered: Vec<AnsweredQuestion>,
}
