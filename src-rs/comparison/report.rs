use super::types::{Contender, ContenderReport, Preference, Report, Round, Winner};

/// Aggregates a round's ratings into averages and a verdict.
///
/// Nothing is scored until both sides carry at least one rating. An explicit
/// preference overrides the averages; equal averages are a tie.
pub fn build_report(round: &Round) -> Report {
    let has_ratings = round.first.ratings.is_rated() && round.second.ratings.is_rated();
    let first = contender_report(&round.first, has_ratings);
    let second = contender_report(&round.second, has_ratings);

    let (difference, winner) = match (first.average, second.average) {
        (Some(a), Some(b)) => {
            let winner = match round.preference {
                Some(Preference::First) => Winner::Model(first.display_name.clone()),
                Some(Preference::Second) => Winner::Model(second.display_name.clone()),
                Some(Preference::Tie) => Winner::Tie,
                None if a > b => Winner::Model(first.display_name.clone()),
                None if b > a => Winner::Model(second.display_name.clone()),
                None => Winner::Tie,
            };
            (Some(one_decimal((a - b).abs())), Some(winner))
        }
        _ => (None, None),
    };

    Report {
        round_id: round.id.clone(),
        has_ratings,
        first,
        second,
        difference,
        preference: round.preference,
        winner,
    }
}

fn contender_report(contender: &Contender, has_ratings: bool) -> ContenderReport {
    ContenderReport {
        model_id: contender.model_id.clone(),
        display_name: contender.summary.display_name.clone(),
        display_provider: contender.summary.display_provider.clone(),
        elapsed_ms: contender.summary.elapsed_ms,
        ratings: contender.ratings,
        average: has_ratings.then(|| one_decimal(contender.ratings.average())),
    }
}

fn one_decimal(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}
