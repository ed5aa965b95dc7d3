// Public modules
pub mod aggregator;
pub mod categorizer;
pub mod config;
pub mod extractor;
pub mod filter;
pub mod generator;
pub mod io;
pub mod lexicon;
pub mod models;
pub mod scoring;
pub mod similarity;
pub mod trends;

// Re-export commonly used types
pub use config::Config;
pub use extractor::extract_phrases;
pub use filter::{category_name, filter_keywords, related_articles, related_keywords, KeywordFilter};
pub use generator::KeywordGenerator;
pub use io::{list_snapshots, load_articles, load_categories, load_snapshot, save_snapshot};
pub use models::{Article, Category, Keyword, KeywordSnapshot};
pub use similarity::find_similar;
pub use trends::{classify_trend, ChangeRate, Trend, TrendReport};
