use tracing::{debug, info};

use crate::comparison::{build_report, ComparisonError, Preference, Ratings, Report, Round, RoundStore, Side};
use crate::config::ShowdownConfig;
use crate::llm::{registry, CredentialSet, Dispatcher, ModelDescriptor, SummaryResult};

/// Runs comparison rounds: validates input, dispatches both models and keeps
/// the rated history.
pub struct Showdown {
    pub config: ShowdownConfig,
    dispatcher: Dispatcher,
    default_credentials: CredentialSet,
    store: RoundStore,
}

impl Showdown {
    pub fn new(
        config: ShowdownConfig,
        dispatcher: Dispatcher,
        default_credentials: CredentialSet,
        store: RoundStore,
    ) -> Self {
        debug!(credentials = ?default_credentials, "showdown configured");
        Self {
            config,
            dispatcher,
            default_credentials,
            store,
        }
    }

    pub fn models(&self) -> (Vec<ModelDescriptor>, Vec<ModelDescriptor>) {
        registry::list_by_category()
    }

    pub async fn summarize(
        &self,
        model_id: &str,
        text: &str,
        credentials: Option<&CredentialSet>,
    ) -> Result<SummaryResult, ComparisonError> {
        let credentials = self.credentials(credentials);
        Ok(self.dispatcher.dispatch(model_id, text, &credentials).await?)
    }

    /// A failed pairing leaves previously stored rounds untouched.
    pub async fn compare(
        &self,
        model_a: &str,
        model_b: &str,
        text: &str,
        credentials: Option<&CredentialSet>,
    ) -> Result<Round, ComparisonError> {
        let input_chars = self.validate(model_a, model_b, text)?;
        let credentials = self.credentials(credentials);
        info!(model_a = model_a, model_b = model_b, input_chars = input_chars, "comparison round started");

        let (first, second) = self
            .dispatcher
            .dispatch_pair(model_a, model_b, text, &credentials)
            .await?;
        let round = self.store.create(model_a, model_b, input_chars, first, second);
        info!(round = %round.id, "comparison round stored");
        Ok(round)
    }

    pub fn rate(&self, round_id: &str, side: Side, ratings: Ratings) -> Result<Round, ComparisonError> {
        ratings.validate()?;
        self.store
            .rate(round_id, side, ratings)
            .ok_or_else(|| ComparisonError::RoundNotFound(round_id.to_string()))
    }

    pub fn prefer(&self, round_id: &str, preference: Option<Preference>) -> Result<Round, ComparisonError> {
        self.store
            .prefer(round_id, preference)
            .ok_or_else(|| ComparisonError::RoundNotFound(round_id.to_string()))
    }

    pub fn report(&self, round_id: &str) -> Result<Report, ComparisonError> {
        self.store
            .get(round_id)
            .map(|round| build_report(&round))
            .ok_or_else(|| ComparisonError::RoundNotFound(round_id.to_string()))
    }

    pub fn rounds(&self, limit: usize) -> Vec<Round> {
        self.store.list(limit)
    }

    fn credentials(&self, supplied: Option<&CredentialSet>) -> CredentialSet {
        match supplied {
            Some(creds) => creds.merged_over(&self.default_credentials),
            None => self.default_credentials.clone(),
        }
    }

    fn validate(&self, model_a: &str, model_b: &str, text: &str) -> Result<usize, ComparisonError> {
        if model_a.trim().is_empty() || model_b.trim().is_empty() {
            return Err(ComparisonError::Validation(
                "Please select both models before comparing summaries.".to_string(),
            ));
        }
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return Err(ComparisonError::Validation(
                "Please provide input text for summarization.".to_string(),
            ));
        }
        let chars = trimmed.chars().count();
        if chars < self.config.min_input_chars {
            return Err(ComparisonError::Validation(format!(
                "Input text should be at least {} characters long for meaningful summarization.",
                self.config.min_input_chars
            )));
        }
        Ok(chars)
    }
}
