//! Static word lists used by the keyword pipeline.
//!
//! All tables are read-only and safe to share across threads.

use std::collections::HashSet;
use std::sync::LazyLock;

/// Common function words that never start, end or join a candidate phrase.
pub static STOP_WORDS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "the", "a", "an", "and", "or", "but", "in", "on", "at", "to", "for", "of", "with", "by",
        "from", "as", "is", "was", "are", "were", "been", "be", "have", "has", "had", "do", "does",
        "did", "will", "would", "could", "should", "may", "might", "must", "can", "this", "that",
        "these", "those", "i", "you", "he", "she", "it", "we", "they", "what", "which", "who",
        "when", "where", "why", "how", "all", "each", "every", "both", "few", "more", "most",
        "other", "some", "such", "no", "nor", "not", "only", "own", "same", "so", "than", "too",
        "very", "after", "before", "between", "into", "through", "during", "above", "below", "up",
        "down", "out", "off", "over", "under", "again", "further", "then", "once", "here", "there",
        "also", "its", "their", "our", "his", "her", "my", "your",
    ]
    .into_iter()
    .collect()
});

/// Curated high-priority phrases. They skip the two-article floor and earn a score bonus.
pub static IMPORTANT_TERMS: LazyLock<HashSet<&'static str>> = LazyLock::new(|| {
    [
        "ai",
        "artificial intelligence",
        "machine learning",
        "deep learning",
        "climate change",
        "global warming",
        "sustainability",
        "renewable energy",
        "cryptocurrency",
        "blockchain",
        "bitcoin",
        "ethereum",
        "quantum computing",
        "quantum",
        "cybersecurity",
        "cyber",
        "pandemic",
        "vaccine",
        "covid",
        "health crisis",
        "geopolitics",
        "diplomacy",
        "war",
        "peace",
        "conflict",
        "economy",
        "recession",
        "inflation",
        "gdp",
        "market",
        "innovation",
        "technology",
        "breakthrough",
        "research",
        "biotechnology",
        "gene therapy",
        "crispr",
        "genomics",
        "space exploration",
        "mars",
        "satellite",
        "rocket",
    ]
    .into_iter()
    .collect()
});

/// Category id to marker substrings. Order matters: the first category with a hit wins.
pub const CATEGORY_MARKERS: &[(&str, &[&str])] = &[
    (
        "ai",
        &["ai", "artificial intelligence", "machine learning", "neural", "gpt", "llm", "algorithm"],
    ),
    (
        "technology",
        &["technology", "tech", "digital", "software", "hardware", "computing", "innovation"],
    ),
    (
        "economics",
        &["economy", "economic", "market", "trade", "finance", "financial", "investment", "gdp"],
    ),
    (
        "politics",
        &["politics", "political", "government", "policy", "election", "democracy", "parliament"],
    ),
    (
        "environment",
        &["climate", "environment", "pollution", "carbon", "emission", "ecosystem", "biodiversity"],
    ),
    (
        "health",
        &["health", "medical", "medicine", "disease", "treatment", "hospital", "vaccine", "pandemic"],
    ),
    (
        "energy",
        &["energy", "power", "electricity", "solar", "wind", "nuclear", "fossil", "renewable"],
    ),
    (
        "security",
        &["security", "defense", "military", "weapon", "army", "navy", "force"],
    ),
    (
        "cybersecurity",
        &["cyber", "cybersecurity", "hacking", "malware", "encryption", "breach", "attack"],
    ),
    (
        "crypto",
        &["crypto", "cryptocurrency", "bitcoin", "blockchain", "ethereum", "defi", "nft"],
    ),
    (
        "space",
        &["space", "mars", "satellite", "rocket", "astronaut", "orbit", "planet", "nasa"],
    ),
    (
        "education",
        &["education", "school", "university", "student", "learning", "teaching", "curriculum"],
    ),
    (
        "transportation",
        &["transport", "vehicle", "car", "train", "aviation", "mobility", "traffic"],
    ),
    (
        "agriculture",
        &["agriculture", "farming", "crop", "food", "harvest", "farm"],
    ),
    (
        "workforce",
        &["work", "employment", "job", "labor", "worker", "workplace", "remote work"],
    ),
    (
        "innovation",
        &["innovation", "innovative", "breakthrough", "research", "development", "discovery"],
    ),
    (
        "society",
        &["society", "social", "community", "culture", "people", "population"],
    ),
];

/// Words rendered fully uppercased in display text.
pub const ACRONYMS: &[&str] = &[
    "AI", "GDP", "EU", "UN", "US", "UK", "IT", "IOT", "API", "CEO", "CTO", "NFT",
];

pub fn is_stop_word(word: &str) -> bool {
    STOP_WORDS.contains(word)
}

pub fn is_important_term(phrase: &str) -> bool {
    IMPORTANT_TERMS.contains(phrase)
}
