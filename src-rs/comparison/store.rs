use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::RwLock;

use chrono::Utc;

use super::types::{Contender, Preference, Ratings, Round, Side};
use crate::llm::SummaryResult;

static COUNTER: AtomicUsize = AtomicUsize::new(1);

/// In-memory history of comparison rounds, bounded to `capacity` entries.
pub struct RoundStore {
    capacity: usize,
    rounds: RwLock<HashMap<String, Round>>,
}

impl RoundStore {
    pub fn new(capacity: usize) -> Self {
        Self {
            capacity: capacity.max(1),
            rounds: RwLock::new(HashMap::new()),
        }
    }

    /// Records a finished pairing. Ratings start empty and no preference is set.
    pub fn create(
        &self,
        model_a: &str,
        model_b: &str,
        input_chars: usize,
        first: SummaryResult,
        second: SummaryResult,
    ) -> Round {
        let round = Round {
            id: next_id(),
            input_chars,
            first: Contender {
                model_id: model_a.to_string(),
                summary: first,
                ratings: Ratings::default(),
            },
            second: Contender {
                model_id: model_b.to_string(),
                summary: second,
                ratings: Ratings::default(),
            },
            preference: None,
            created_at: Utc::now(),
        };
        if let Ok(mut map) = self.rounds.write() {
            map.insert(round.id.clone(), round.clone());
            while map.len() > self.capacity {
                let oldest = map
                    .values()
                    .min_by_key(|r| (r.created_at, sequence(&r.id)))
                    .map(|r| r.id.clone());
                let Some(id) = oldest else { break };
                map.remove(&id);
            }
        }
        round
    }

    pub fn rate(&self, id: &str, side: Side, ratings: Ratings) -> Option<Round> {
        let mut map = self.rounds.write().ok()?;
        let round = map.get_mut(id)?;
        round.contender_mut(side).ratings = ratings;
        Some(round.clone())
    }

    pub fn prefer(&self, id: &str, preference: Option<Preference>) -> Option<Round> {
        let mut map = self.rounds.write().ok()?;
        let round = map.get_mut(id)?;
        round.preference = preference;
        Some(round.clone())
    }

    pub fn get(&self, id: &str) -> Option<Round> {
        let map = self.rounds.read().ok()?;
        map.get(id).cloned()
    }

    pub fn list(&self, limit: usize) -> Vec<Round> {
        let map = match self.rounds.read() {
            Ok(lock) => lock,
            Err(_) => return vec![],
        };
        let mut items: Vec<Round> = map.values().cloned().collect();
        items.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| sequence(&b.id).cmp(&sequence(&a.id)))
        });
        items.truncate(limit);
        items
    }
}

fn next_id() -> String {
    let count = COUNTER.fetch_add(1, Ordering::SeqCst);
    format!("round_{}_{}", Utc::now().timestamp_millis(), count)
}

// Rounds created in the same instant are ordered by their counter suffix.
fn sequence(id: &str) -> usize {
    id.rsplit('_').next().and_then(|raw| raw.parse().ok()).unwrap_or(0)
}
