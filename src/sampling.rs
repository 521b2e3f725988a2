/// Repeated generation and statistics over the visible score distribution

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::generator::generate_suppliers_with;
use crate::models::{MatchTier, TenderCriteria};
use crate::scoring::SCORE_FLOOR;

/// Upper bound on the score buffer reserved up front
const MAX_PREALLOCATED: usize = 1 << 20;

/// Score statistics across many generated lists
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreDistribution {
    pub runs: usize,
    pub candidates_per_run: usize,
    pub samples: usize,
    pub mean_score: f64,
    pub std_dev_score: f64,
    pub min_score: u8,
    pub max_score: u8,
    pub percentile_10: u8,
    pub percentile_25: u8,
    pub percentile_50: u8,
    pub percentile_75: u8,
    pub percentile_90: u8,
    pub high_tier: usize,
    pub medium_tier: usize,
    pub low_tier: usize,
    /// Share of scores pinned at the floor
    pub at_floor: f64,
}

/// Run the generator `runs` times and gather every candidate's score
pub fn sample_scores<R: Rng + ?Sized>(
    criteria: &TenderCriteria,
    count: usize,
    runs: usize,
    rng: &mut R,
    now: DateTime<Utc>,
) -> ScoreDistribution {
    if count == 0 || runs == 0 {
        return ScoreDistribution {
            runs,
            candidates_per_run: count,
            ..Default::default()
        };
    }

    let mut scores: Vec<u8> = Vec::with_capacity(sample_capacity(count, runs));

    for run in 0..runs {
        let suppliers = generate_suppliers_with(criteria, count, rng, now);
        debug!(run, top = suppliers.first().map(|s| s.match_score), "sampled run");
        scores.extend(suppliers.iter().map(|s| s.match_score));
    }

    scores.sort_unstable();

    let n = scores.len() as f64;
    let mean_score = scores.iter().map(|&s| s as f64).sum::<f64>() / n;
    let variance = scores
        .iter()
        .map(|&s| (s as f64 - mean_score).powi(2))
        .sum::<f64>()
        / n;

    let percentile = |p: f64| nearest_rank(&scores, p);

    let tier_count = |tier: MatchTier| scores.iter().filter(|&&s| MatchTier::from_score(s) == tier).count();

    ScoreDistribution {
        runs,
        candidates_per_run: count,
        samples: scores.len(),
        mean_score,
        std_dev_score: variance.sqrt(),
        min_score: scores[0],
        max_score: scores[scores.len() - 1],
        percentile_10: percentile(10.0),
        percentile_25: percentile(25.0),
        percentile_50: percentile(50.0),
        percentile_75: percentile(75.0),
        percentile_90: percentile(90.0),
        high_tier: tier_count(MatchTier::High),
        medium_tier: tier_count(MatchTier::Medium),
        low_tier: tier_count(MatchTier::Low),
        at_floor: scores.iter().filter(|&&s| s == SCORE_FLOOR).count() as f64 / n,
    }
}

fn sample_capacity(count: usize, runs: usize) -> usize {
    count.saturating_mul(runs).min(MAX_PREALLOCATED)
}

/// Nearest-rank percentile of an ascending, non-empty slice
fn nearest_rank(sorted: &[u8], p: f64) -> u8 {
    let rank = (p * sorted.len() as f64 / 100.0).ceil() as usize;
    sorted[rank.clamp(1, sorted.len()) - 1]
}
