pub mod config;
pub mod helpers;
pub mod result;
pub mod showdown;

#[path = "llm/lib.rs"]
pub mod llm;
#[path = "comparison/lib.rs"]
pub mod comparison;
#[path = "api/lib.rs"]
pub mod api;

pub use config::ShowdownConfig;
pub use llm::{CredentialSet, DispatchFailure, Dispatcher, FailureKind, SummaryResult};
pub use showdown::Showdown;
