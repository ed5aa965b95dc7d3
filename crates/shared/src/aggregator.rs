use std::collections::{HashMap, HashSet};

use crate::extractor::extract_phrases;
use crate::models::Article;

/// Set of strings that remembers first-insertion order.
#[derive(Debug, Clone, Default)]
pub struct OrderedSet {
    items: Vec<String>,
    seen: HashSet<String>,
}

impl OrderedSet {
    pub fn insert(&mut self, value: &str) -> bool {
        if self.seen.contains(value) {
            return false;
        }
        self.seen.insert(value.to_string());
        self.items.push(value.to_string());
        true
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.items.first().map(|s| s.as_str())
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.items.clone()
    }
}

/// Per-phrase statistics accumulated over every article of one run
#[derive(Debug, Clone)]
pub struct CandidatePhrase {
    pub text: String,
    pub positions: Vec<f64>,
    pub source_articles: OrderedSet,
    pub regions: OrderedSet,
    pub continents: OrderedSet,
    pub categories: OrderedSet,
}

impl CandidatePhrase {
    fn new(text: &str) -> Self {
        Self {
            text: text.to_string(),
            positions: Vec::new(),
            source_articles: OrderedSet::default(),
            regions: OrderedSet::default(),
            continents: OrderedSet::default(),
            categories: OrderedSet::default(),
        }
    }

    fn record(&mut self, position: f64, article: &Article) {
        self.positions.push(position);
        self.source_articles.insert(&article.id);
        self.regions.insert(&article.region);
        self.continents.insert(&article.continent);
        self.categories.insert(&article.category);
    }

    pub fn document_frequency(&self) -> usize {
        self.source_articles.len()
    }

    pub fn average_position(&self) -> f64 {
        if self.positions.is_empty() {
            return 0.0;
        }
        self.positions.iter().sum::<f64>() / self.positions.len() as f64
    }

    pub fn word_count(&self) -> usize {
        self.text.split(' ').count()
    }
}

/// Folds articles into one candidate per distinct phrase.
///
/// Candidates keep the order in which their phrase was first seen, so a fixed
/// article order always yields the same candidate order.
#[derive(Debug, Default)]
pub struct CandidateAggregator {
    index: HashMap<String, usize>,
    candidates: Vec<CandidatePhrase>,
    articles_seen: usize,
}

impl CandidateAggregator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one article's title then summary phrases into the candidates.
    pub fn add_article(&mut self, article: &Article) {
        let title_phrases = extract_phrases(&article.title);
        let summary_phrases = extract_phrases(&article.summary);

        // Title positions are halved; summary positions start after the title slots
        for (i, phrase) in title_phrases.iter().enumerate() {
            self.record(phrase, i as f64 * 0.5, article);
        }

        let offset = title_phrases.len();
        for (j, phrase) in summary_phrases.iter().enumerate() {
            self.record(phrase, (j + offset) as f64, article);
        }

        self.articles_seen += 1;
    }

    fn record(&mut self, phrase: &str, position: f64, article: &Article) {
        let idx = match self.index.get(phrase) {
            Some(&idx) => idx,
            None => {
                self.candidates.push(CandidatePhrase::new(phrase));
                let idx = self.candidates.len() - 1;
                self.index.insert(phrase.to_string(), idx);
                idx
            }
        };
        self.candidates[idx].record(position, article);
    }

    pub fn articles_seen(&self) -> usize {
        self.articles_seen
    }

    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    pub fn finish(self) -> Vec<CandidatePhrase> {
        self.candidates
    }
}

/// Aggregate a whole article collection in input order.
pub fn aggregate(articles: &[Article]) -> Vec<CandidatePhrase> {
    let aggregator = articles
        .iter()
        .fold(CandidateAggregator::new(), |mut acc, article| {
            acc.add_article(article);
            acc
        });

    log::debug!(
        "Aggregated {} candidate phrases from {} articles",
        aggregator.len(),
        aggregator.articles_seen()
    );

    aggregator.finish()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;

    pub(crate) fn article(id: &str, title: &str, summary: &str) -> Article {
        Article {
            id: id.to_string(),
            title: title.to_string(),
            summary: summary.to_string(),
            source: "Test Source".to_string(),
            url: format!("https://example.com/{}", id),
            published_at: "2026-02-01T00:00:00Z".to_string(),
            region: "europe-west".to_string(),
            continent: "europe".to_string(),
            category: "technology".to_string(),
            keywords: Vec::new(),
        }
    }

    fn find<'a>(candidates: &'a [CandidatePhrase], text: &str) -> &'a CandidatePhrase {
        candidates
            .iter()
            .find(|c| c.text == text)
            .unwrap_or_else(|| panic!("missing candidate {}", text))
    }

    #[test]
    fn test_ordered_set_keeps_first_insertion() {
        let mut set = OrderedSet::default();
        assert!(set.insert("b"));
        assert!(set.insert("a"));
        assert!(!set.insert("b"));
        assert_eq!(set.to_vec(), vec!["b", "a"]);
        assert_eq!(set.first(), Some("b"));
    }

    #[test]
    fn test_title_positions_are_halved() {
        let candidates = aggregate(&[article("1", "Solar Power Surge", "")]);
        // title phrases: solar, power, surge, solar power, power surge
        assert_eq!(find(&candidates, "solar").positions, vec![0.0]);
        assert_eq!(find(&candidates, "surge").positions, vec![1.0]);
        assert_eq!(find(&candidates, "power surge").positions, vec![2.0]);
    }

    #[test]
    fn test_summary_positions_follow_title_slots() {
        let candidates = aggregate(&[article("1", "Solar Power", "Wind farms")]);
        // title phrases: solar, power, solar power (3 slots)
        assert_eq!(find(&candidates, "wind").positions, vec![3.0]);
        assert_eq!(find(&candidates, "farms").positions, vec![4.0]);
        assert_eq!(find(&candidates, "wind farms").positions, vec![5.0]);
    }

    #[test]
    fn test_candidates_shared_across_articles() {
        let mut second = article("2", "Climate Change Talks", "");
        second.continent = "asia".to_string();
        second.category = "environment".to_string();

        let candidates = aggregate(&[article("1", "Climate Change", ""), second]);
        let climate = find(&candidates, "climate change");

        assert_eq!(climate.document_frequency(), 2);
        assert_eq!(climate.continents.to_vec(), vec!["europe", "asia"]);
        assert_eq!(climate.categories.to_vec(), vec!["technology", "environment"]);
        assert_eq!(climate.positions.len(), 2);
    }

    #[test]
    fn test_repeated_phrase_in_one_article_counts_once() {
        let candidates = aggregate(&[article("1", "Market Rally", "Market rally continues")]);
        let market = find(&candidates, "market");
        assert_eq!(market.document_frequency(), 1);
        assert_eq!(market.positions.len(), 2);
    }

    #[test]
    fn test_first_seen_order_is_kept() {
        let candidates = aggregate(&[article("1", "Zebra Apple", "")]);
        let texts: Vec<&str> = candidates.iter().map(|c| c.text.as_str()).collect();
        assert_eq!(texts, vec!["zebra", "apple", "zebra apple"]);
    }

    #[test]
    fn test_every_candidate_has_a_source() {
        let candidates = aggregate(&[
            article("1", "Ocean Warming", "Coral reefs bleach"),
            article("2", "The And Or But", ""),
        ]);
        assert!(candidates.iter().all(|c| !c.source_articles.is_empty()));
        assert!(candidates.iter().all(|c| !c.positions.is_empty()));
    }

    #[test]
    fn test_empty_collection() {
        assert!(aggregate(&[]).is_empty());
    }
}
