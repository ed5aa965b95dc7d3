use crate::aggregator::OrderedSet;
use crate::lexicon::{ACRONYMS, CATEGORY_MARKERS};

pub const DEFAULT_CATEGORY: &str = "technology";

/// Pick a topic category for a phrase.
///
/// Marker table first (either string containing the other), then the first
/// category seen on a contributing article, then the default.
pub fn categorize(phrase: &str, article_categories: &OrderedSet) -> String {
    let lower = phrase.to_lowercase();

    for (category, markers) in CATEGORY_MARKERS {
        if markers
            .iter()
            .any(|m| lower.contains(m) || m.contains(lower.as_str()))
        {
            return category.to_string();
        }
    }

    article_categories
        .first()
        .unwrap_or(DEFAULT_CATEGORY)
        .to_string()
}

/// Display casing: known acronyms uppercased, other words get a capital first letter.
pub fn display_text(phrase: &str) -> String {
    phrase
        .split(' ')
        .map(|word| {
            let upper = word.to_uppercase();
            if ACRONYMS.contains(&upper.as_str()) {
                return upper;
            }
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
