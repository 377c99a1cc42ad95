pub mod report;
pub mod store;
pub mod types;

pub use report::build_report;
pub use store::RoundStore;
pub use types::{ComparisonError, Contender, ContenderReport, Preference, Ratings, Report, Round, Side, Winner};
