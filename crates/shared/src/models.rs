use serde::{Deserialize, Serialize};

/// A news article as handed over by the presentation layer
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: String,
    pub title: String,
    pub summary: String,
    pub source: String,
    pub url: String,
    pub published_at: String,
    pub region: String,
    pub continent: String,
    pub category: String,
    #[serde(default)]
    pub keywords: Vec<String>,
}

/// A ranked trending keyword
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Keyword {
    pub text: String,
    pub value: u8,
    pub category: String,
    pub regions: Vec<String>,
    pub continents: Vec<String>,
    pub articles: Vec<String>,
}

/// A topic category known to the caller
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub count: usize,
}

impl Category {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            count: 0,
        }
    }
}

/// Complete keyword run for serialization
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KeywordSnapshot {
    pub version: String,
    pub created_at: String,
    pub article_count: usize,
    pub keywords: Vec<Keyword>,
}

impl KeywordSnapshot {
    pub const VERSION: &'static str = "1.0";

    pub fn new(article_count: usize, keywords: Vec<Keyword>) -> Self {
        Self {
            version: Self::VERSION.to_string(),
            created_at: chrono::Utc::now().to_rfc3339(),
            article_count,
            keywords,
        }
    }
}
