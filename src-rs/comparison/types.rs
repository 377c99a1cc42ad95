use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::llm::{DispatchFailure, SummaryResult};

#[derive(Debug, Error)]
pub enum ComparisonError {
    #[error("{0}")]
    Validation(String),
    #[error(transparent)]
    Dispatch(#[from] DispatchFailure),
    #[error("round not found: {0}")]
    RoundNotFound(String),
    #[error("invalid {axis} rating {score}: expected 0-{max}", max = Ratings::MAX)]
    InvalidRating { axis: &'static str, score: u8 },
}

/// Star ratings on a 0-5 scale, 0 meaning "not rated yet".
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ratings {
    #[serde(default)]
    pub clarity: u8,
    #[serde(default)]
    pub accuracy: u8,
    #[serde(default)]
    pub conciseness: u8,
}

impl Ratings {
    pub const MAX: u8 = 5;

    pub fn validate(&self) -> Result<(), ComparisonError> {
        for (axis, score) in [
            ("clarity", self.clarity),
            ("accuracy", self.accuracy),
            ("conciseness", self.conciseness),
        ] {
            if score > Self::MAX {
                return Err(ComparisonError::InvalidRating { axis, score });
            }
        }
        Ok(())
    }

    pub fn is_rated(&self) -> bool {
        self.clarity > 0 || self.accuracy > 0 || self.conciseness > 0
    }

    pub fn average(&self) -> f64 {
        let total = self.clarity as f64 + self.accuracy as f64 + self.conciseness as f64;
        total / 3.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    First,
    Second,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Preference {
    First,
    Second,
    Tie,
}

/// One side of a comparison round.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Contender {
    pub model_id: String,
    pub summary: SummaryResult,
    pub ratings: Ratings,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Round {
    pub id: String,
    pub input_chars: usize,
    pub first: Contender,
    pub second: Contender,
    pub preference: Option<Preference>,
    pub created_at: DateTime<Utc>,
}

impl Round {
    pub fn contender_mut(&mut self, side: Side) -> &mut Contender {
        match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "outcome", content = "model")]
pub enum Winner {
    Model(String),
    Tie,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ContenderReport {
    pub model_id: String,
    pub display_name: String,
    pub display_provider: String,
    pub elapsed_ms: u64,
    pub ratings: Ratings,
    pub average: Option<f64>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Report {
    pub round_id: String,
    pub has_ratings: bool,
    pub first: ContenderReport,
    pub second: ContenderReport,
    pub difference: Option<f64>,
    pub preference: Option<Preference>,
    pub winner: Option<Winner>,
}
