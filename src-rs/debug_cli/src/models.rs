use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Clone, Debug)]
pub struct CLIConfig {
    pub base_url: String,
    pub model_a: Option<String>,
    pub model_b: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CompareRequest {
    pub model_a: String,
    pub model_b: String,
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct RatingsRequest {
    pub side: String,
    pub clarity: u8,
    pub accuracy: u8,
    pub conciseness: u8,
}

#[derive(Debug, Deserialize)]
pub struct ModelInfo {
    pub id: String,
    pub display_name: String,
    pub display_provider: String,
}

#[derive(Debug, Deserialize)]
pub struct ModelListing {
    pub closed_source: Vec<ModelInfo>,
    pub open_source: Vec<ModelInfo>,
}

#[derive(Debug, Deserialize)]
pub struct SummaryInfo {
    pub text: String,
    pub elapsed_ms: u64,
    pub display_name: String,
    pub display_provider: String,
}

#[derive(Debug, Deserialize)]
pub struct ContenderInfo {
    pub model_id: String,
    pub summary: SummaryInfo,
}

#[derive(Debug, Deserialize)]
pub struct RoundInfo {
    pub id: String,
    pub first: ContenderInfo,
    pub second: ContenderInfo,
    pub created_at: String,
}

#[derive(Debug, Deserialize)]
pub struct ErrorInfo {
    pub error: String,
    pub code: String,
}

/// Reports are rendered loosely so new fields don't break the CLI.
pub type ReportInfo = Value;
