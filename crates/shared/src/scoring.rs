use crate::aggregator::CandidatePhrase;
use crate::lexicon::is_important_term;

pub const DOCUMENT_FREQUENCY_WEIGHT: f64 = 40.0;
pub const POSITION_CEILING: f64 = 20.0;
pub const IMPORTANT_TERM_BONUS: f64 = 20.0;
pub const CONTINENT_COUNT: f64 = 7.0;
pub const GEO_SPREAD_WEIGHT: f64 = 10.0;
pub const CATEGORY_SPREAD_CAP: usize = 3;
pub const CATEGORY_SPREAD_WEIGHT: f64 = 3.0;
pub const MULTI_WORD_WEIGHT: f64 = 3.0;

pub const MIN_SOURCE_ARTICLES: usize = 2;
pub const MIN_SCORE: u8 = 30;
pub const MAX_KEYWORDS: usize = 50;

/// Relevance score in `0..=100`.
///
/// The caller guarantees `total_articles > 0`.
pub fn score(candidate: &CandidatePhrase, total_articles: usize) -> u8 {
    let mut score = 0.0;

    // Share of the corpus mentioning the phrase (max 40)
    score += candidate.document_frequency() as f64 / total_articles as f64
        * DOCUMENT_FREQUENCY_WEIGHT;

    // Earlier positions weigh more; zero once avg position reaches 10
    score += (POSITION_CEILING - candidate.average_position() * 2.0).max(0.0);

    if is_important_term(&candidate.text) {
        score += IMPORTANT_TERM_BONUS;
    }

    score += candidate.continents.len() as f64 / CONTINENT_COUNT * GEO_SPREAD_WEIGHT;

    score += candidate.categories.len().min(CATEGORY_SPREAD_CAP) as f64 * CATEGORY_SPREAD_WEIGHT;

    let words = candidate.word_count();
    if words > 1 {
        score += words as f64 * MULTI_WORD_WEIGHT;
    }

    score.clamp(0.0, 100.0).round() as u8
}

/// A candidate that survived selection, with its score
#[derive(Debug, Clone)]
pub struct ScoredCandidate {
    pub candidate: CandidatePhrase,
    pub score: u8,
}

/// Frequency floor, scoring, score threshold, stable ranking and top-50 cut.
pub fn select(candidates: Vec<CandidatePhrase>, total_articles: usize) -> Vec<ScoredCandidate> {
    if total_articles == 0 {
        return Vec::new();
    }

    let before = candidates.len();
    let frequent: Vec<CandidatePhrase> = candidates
        .into_iter()
        .filter(|c| {
            c.document_frequency() >= MIN_SOURCE_ARTICLES || is_important_term(&c.text)
        })
        .collect();
    log::debug!(
        "{}/{} candidates passed the frequency floor",
        frequent.len(),
        before
    );

    let mut scored: Vec<ScoredCandidate> = frequent
        .into_iter()
        .map(|candidate| {
            let score = score(&candidate, total_articles);
            ScoredCandidate { candidate, score }
        })
        .filter(|s| s.score >= MIN_SCORE)
        .collect();
    log::debug!("{} candidates scored at least {}", scored.len(), MIN_SCORE);

    // sort_by is stable: equal scores keep first-seen order
    scored.sort_by(|a, b| b.score.cmp(&a.score));
    scored.truncate(MAX_KEYWORDS);

    scored
}
