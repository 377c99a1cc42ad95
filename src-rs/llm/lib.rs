pub mod anthropic_adapter;
pub mod huggingface_adapter;
pub mod openai_adapter;
pub mod registry;
pub mod router;
pub mod types;

pub use anthropic_adapter::{AnthropicAdapter, AnthropicConfig};
pub use huggingface_adapter::{HuggingFaceAdapter, HuggingFaceConfig};
pub use openai_adapter::{OpenAiAdapter, OpenAiConfig};
pub use registry::ModelDescriptor;
pub use router::Dispatcher;
pub use types::{Category, CredentialSet, DispatchFailure, FailureKind, ProviderFamily, SummaryResult};
