pub mod config;
pub mod error;
pub mod models;
pub mod output;
pub mod query_client;
pub mod samples;

pub use config::{ClientConfig, ConfigOverrides};
pub use error::ClientError;
pub use models::*;
pub use output::OutputFormat;
pub use query_client::{pair_answers, run, QueryClient};
