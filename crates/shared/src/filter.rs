use crate::models::{Article, Category, Keyword};

pub const GLOBAL_CONTINENT: &str = "global";
pub const MAX_RELATED_KEYWORDS: usize = 10;

/// Narrowing applied to a keyword list. Empty fields (and `"global"`) do not restrict.
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    pub continent: String,
    pub region: String,
    pub category: String,
    pub search: String,
}

impl Default for KeywordFilter {
    fn default() -> Self {
        Self {
            continent: GLOBAL_CONTINENT.to_string(),
            region: String::new(),
            category: String::new(),
            search: String::new(),
        }
    }
}

impl KeywordFilter {
    pub fn matches(&self, keyword: &Keyword) -> bool {
        if !self.continent.is_empty()
            && self.continent != GLOBAL_CONTINENT
            && !keyword.continents.contains(&self.continent)
        {
            return false;
        }

        if !self.region.is_empty() && !keyword.regions.contains(&self.region) {
            return false;
        }

        if !self.category.is_empty() && keyword.category != self.category {
            return false;
        }

        if !self.search.is_empty() {
            return keyword
                .text
                .to_lowercase()
                .contains(&self.search.to_lowercase());
        }

        true
    }
}

pub fn filter_keywords(keywords: &[Keyword], filter: &KeywordFilter) -> Vec<Keyword> {
    keywords
        .iter()
        .filter(|k| filter.matches(k))
        .cloned()
        .collect()
}

/// Articles that contributed to a keyword, in article order.
pub fn related_articles<'a>(keyword: &Keyword, articles: &'a [Article]) -> Vec<&'a Article> {
    articles
        .iter()
        .filter(|a| keyword.articles.contains(&a.id))
        .collect()
}

/// Other keywords of the same category, in pool order.
pub fn related_keywords(keyword: &Keyword, pool: &[Keyword]) -> Vec<Keyword> {
    pool.iter()
        .filter(|k| k.category == keyword.category && k.text != keyword.text)
        .take(MAX_RELATED_KEYWORDS)
        .cloned()
        .collect()
}

pub fn category_name<'a>(keyword: &Keyword, known_categories: &'a [Category]) -> &'a str {
    known_categories
        .iter()
        .find(|c| c.id == keyword.category)
        .map(|c| c.name.as_str())
        .unwrap_or("Unknown")
}
