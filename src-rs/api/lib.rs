pub use crate::comparison::{ComparisonError, Preference, Ratings, Report, Round, Side, Winner};
pub use crate::config::ShowdownConfig;
pub use crate::llm::{CredentialSet, DispatchFailure, FailureKind, ModelDescriptor, SummaryResult};
pub use crate::result::ErrorResponse;
pub use crate::showdown::Showdown;

pub mod handlers;
pub mod server;
