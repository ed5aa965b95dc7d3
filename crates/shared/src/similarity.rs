use crate::models::Keyword;

pub const MAX_SIMILAR: usize = 5;

fn initials(text: &str) -> String {
    text.split_whitespace()
        .filter_map(|w| w.chars().next())
        .collect()
}

/// Does `keyword_text` relate to the (lowercased) query?
///
/// Matches when either text contains the other, when the query contains one
/// of the keyword's words, or when a single-word query spells the initials of
/// a multi-word keyword ("ai" for "Artificial Intelligence").
fn is_similar(query: &str, keyword_text: &str) -> bool {
    let text = keyword_text.to_lowercase();

    if text.contains(query) || query.contains(text.as_str()) {
        return true;
    }

    if text.split_whitespace().any(|word| query.contains(word)) {
        return true;
    }

    let query_words = query.split_whitespace().count();
    let text_words = text.split_whitespace().count();
    query_words == 1 && text_words > 1 && initials(&text) == query
}

/// Up to five keywords related to `query`, highest score first.
pub fn find_similar(query: &str, keywords: &[Keyword]) -> Vec<Keyword> {
    let query = query.trim().to_lowercase();

    let mut similar: Vec<Keyword> = keywords
        .iter()
        .filter(|k| is_similar(&query, &k.text))
        .cloned()
        .collect();

    similar.sort_by(|a, b| b.value.cmp(&a.value));
    similar.truncate(MAX_SIMILAR);
    similar
}
