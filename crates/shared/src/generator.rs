use crate::aggregator::aggregate;
use crate::categorizer::{categorize, display_text};
use crate::models::{Article, Category, Keyword};
use crate::scoring::{select, ScoredCandidate};

pub struct KeywordGenerator;

impl KeywordGenerator {
    /// Derive the ranked trending keywords for an article collection.
    ///
    /// `known_categories` is accepted so callers can pass their category list,
    /// it does not influence the ranking. The result holds at most 50
    /// keywords, each scored at least 30, sorted by descending score.
    pub fn generate(articles: &[Article], known_categories: &[Category]) -> Vec<Keyword> {
        if articles.is_empty() {
            return Vec::new();
        }

        log::debug!(
            "Generating keywords from {} articles ({} known categories)",
            articles.len(),
            known_categories.len()
        );

        let candidates = aggregate(articles);
        let keywords: Vec<Keyword> = select(candidates, articles.len())
            .into_iter()
            .map(Self::to_keyword)
            .collect();

        log::debug!("Produced {} keywords", keywords.len());
        keywords
    }

    /// Recompute keywords after new articles arrived.
    ///
    /// Always a full recomputation over `all_articles`; the previous keywords
    /// and the new batch are not merged incrementally.
    pub fn refresh(
        existing_keywords: &[Keyword],
        new_articles: &[Article],
        all_articles: &[Article],
        known_categories: &[Category],
    ) -> Vec<Keyword> {
        log::debug!(
            "Refreshing {} keywords after {} new articles",
            existing_keywords.len(),
            new_articles.len()
        );
        Self::generate(all_articles, known_categories)
    }

    fn to_keyword(scored: ScoredCandidate) -> Keyword {
        let ScoredCandidate { candidate, score } = scored;
        Keyword {
            text: display_text(&candidate.text),
            value: score,
            category: categorize(&candidate.text, &candidate.categories),
            regions: candidate.regions.to_vec(),
            continents: candidate.continents.to_vec(),
            articles: candidate.source_articles.to_vec(),
        }
    }
}
