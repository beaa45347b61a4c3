use clap::Parser;
use hackrx_client::samples;
use hackrx_client::{ConfigOverrides, OutputFormat};

#[derive(Parser, Debug)]
#[command(name = "hackrx-client")]
#[command(about = "Ask questions about a policy document through the HackRx API", long_about = None)]
pub struct Args {
    #[arg(long, help = "Endpoint URL (default: $HACKRX_ENDPOINT or http://localhost:8000/hackrx/run)")]
    pub endpoint: Option<String>,

    #[arg(long = "api-key", help = "Bearer token (default: $HACKRX_API_KEY)")]
    pub api_key: Option<String>,

    #[arg(long, help = "Request timeout in seconds (default: $HACKRX_TIMEOUT_SECS or 60)")]
    pub timeout: Option<u64>,

    #[arg(
        short = 'd',
        long = "document",
        default_value = samples::SAMPLE_DOCUMENT_URL,
        help = "Document URL to query"
    )]
    pub document: String,

    #[arg(short = 'q', long = "question", help = "Question to ask (repeatable)")]
    pub question: Vec<String>,

    #[arg(long = "questions", help = "Comma-separated list of questions to ask")]
    pub questions_csv: Option<String>,

    #[arg(
        short = 'a',
        long = "all",
        help = "Ask every sample question (overrides --question/--questions)"
    )]
    pub all: bool,

    #[arg(short = 'o', long = "output", default_value = "text", help = "Output format (text or json)")]
    pub output: OutputFormat,
}

impl Args {
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            endpoint: self.endpoint.clone(),
            api_key: self.api_key.clone(),
            timeout_secs: self.timeout,
        }
    }

    pub fn questions(&self) -> Vec<String> {
        if self.all {
            return samples::all_questions();
        }

        let mut questions = self.question.clone();
        if let Some(csv) = &self.questions_csv {
            questions.extend(
                csv.split(',')
                    .map(|q| q.trim())
                    .filter(|q| !q.is_empty())
                    .map(|q| q.to_string()),
            );
        }

        if questions.is_empty() {
            samples::default_questions()
        } else {
            questions
        }
    }
}
