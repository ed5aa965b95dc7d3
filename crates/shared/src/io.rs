use anyhow::{Context, Result};
use chrono::DateTime;
use std::fs;
use std::path::{Path, PathBuf};

use crate::models::{Article, Category, KeywordSnapshot};

/// Load an article collection from a JSON array
pub fn load_articles(filepath: &Path) -> Result<Vec<Article>> {
    if !filepath.exists() {
        anyhow::bail!("Article file not found: {}", filepath.display());
    }

    let content = fs::read_to_string(filepath)
        .with_context(|| format!("Failed to read article file: {}", filepath.display()))?;

    let articles: Vec<Article> = serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse articles from {}. Expected a JSON array of article records.",
            filepath.display()
        )
    })?;

    Ok(articles)
}

/// Load the caller's known categories from a JSON array
pub fn load_categories(filepath: &Path) -> Result<Vec<Category>> {
    let content = fs::read_to_string(filepath)
        .with_context(|| format!("Failed to read categories file: {}", filepath.display()))?;

    serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse categories from {}", filepath.display()))
}

/// Save a keyword snapshot as pretty JSON inside `dir`
pub fn save_snapshot(data: &KeywordSnapshot, dir: &Path, filename: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)
        .with_context(|| format!("Failed to create snapshot directory: {}", dir.display()))?;

    let filepath = dir.join(filename);
    let json = serde_json::to_string_pretty(data).context("Failed to serialize keyword snapshot")?;

    fs::write(&filepath, json).context("Failed to write snapshot file")?;

    Ok(filepath)
}

/// Load a keyword snapshot from a JSON file
pub fn load_snapshot(filepath: &Path) -> Result<KeywordSnapshot> {
    if !filepath.exists() {
        anyhow::bail!("Snapshot file not found: {}", filepath.display());
    }

    let content = fs::read_to_string(filepath)
        .with_context(|| format!("Failed to read snapshot file: {}", filepath.display()))?;

    let data: KeywordSnapshot = serde_json::from_str(&content).with_context(|| {
        format!(
            "Failed to parse snapshot JSON from {}. The file may be corrupted or not a keyword snapshot.",
            filepath.display()
        )
    })?;

    if data.version != KeywordSnapshot::VERSION {
        anyhow::bail!(
            "Unsupported snapshot version: {}. Expected {}. Please regenerate it with generate-keywords.",
            data.version,
            KeywordSnapshot::VERSION
        );
    }

    Ok(data)
}

/// List all loadable snapshots in `dir`, newest first
pub fn list_snapshots(dir: &Path) -> Result<Vec<(PathBuf, KeywordSnapshot)>> {
    let mut files = Vec::new();

    if dir.exists() {
        for entry in fs::read_dir(dir).context("Failed to read snapshot directory")? {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) == Some("json") {
                match load_snapshot(&path) {
                    Ok(data) => files.push((path, data)),
                    Err(e) => log::warn!("Could not load {}: {:#}", path.display(), e),
                }
            }
        }
    }

    files.sort_by(|a, b| {
        let time_a = DateTime::parse_from_rfc3339(&a.1.created_at).ok();
        let time_b = DateTime::parse_from_rfc3339(&b.1.created_at).ok();
        time_b.cmp(&time_a)
    });

    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Keyword;

    fn temp_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "trending-keywords-{}-{}",
            name,
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        dir
    }

    fn keyword(text: &str) -> Keyword {
        Keyword {
            text: text.to_string(),
            value: 42,
            category: "ai".to_string(),
            regions: vec!["us".to_string()],
            continents: vec!["north-america".to_string()],
            articles: vec!["1".to_string(), "2".to_string()],
        }
    }

    #[test]
    fn test_save_and_load_snapshot() {
        let dir = temp_dir("roundtrip");
        let snapshot = KeywordSnapshot::new(2, vec![keyword("AI Ethics")]);

        let path = save_snapshot(&snapshot, &dir, "run.json").unwrap();
        let loaded = load_snapshot(&path).unwrap();

        assert_eq!(loaded.article_count, 2);
        assert_eq!(loaded.keywords, snapshot.keywords);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_snapshot_missing_file() {
        let err = load_snapshot(Path::new("/nonexistent/snapshot.json")).unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn test_load_snapshot_rejects_version() {
        let dir = temp_dir("version");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("old.json");
        fs::write(
            &path,
            r#"{"version":"0.9","createdAt":"2026-02-01T00:00:00Z","articleCount":0,"keywords":[]}"#,
        )
        .unwrap();

        let err = load_snapshot(&path).unwrap_err();
        assert!(err.to_string().contains("Unsupported snapshot version"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_list_snapshots_newest_first() {
        let dir = temp_dir("list");
        let mut older = KeywordSnapshot::new(1, Vec::new());
        older.created_at = "2026-01-01T00:00:00+00:00".to_string();
        let mut newer = KeywordSnapshot::new(1, Vec::new());
        newer.created_at = "2026-02-01T00:00:00+00:00".to_string();

        save_snapshot(&older, &dir, "older.json").unwrap();
        save_snapshot(&newer, &dir, "newer.json").unwrap();
        fs::write(dir.join("broken.json"), "not json").unwrap();
        fs::write(dir.join("notes.txt"), "ignored").unwrap();

        let files = list_snapshots(&dir).unwrap();
        assert_eq!(files.len(), 2);
        assert!(files[0].0.ends_with("newer.json"));
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_categories_defaults_count() {
        let dir = temp_dir("categories");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("categories.json");
        fs::write(&path, r#"[{"id":"ai","name":"Artificial Intelligence"}]"#).unwrap();

        let categories = load_categories(&path).unwrap();
        assert_eq!(categories[0].name, "Artificial Intelligence");
        assert_eq!(categories[0].count, 0);
        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn test_load_articles() {
        let dir = temp_dir("articles");
        fs::create_dir_all(&dir).unwrap();
        let path = dir.join("articles.json");
        fs::write(
            &path,
            r#"[{"id":"1","title":"Mars Mission","summary":"A rocket launch","source":"Wire",
                "url":"https://example.com/1","publishedAt":"2026-02-01","region":"us",
                "continent":"north-america","category":"space"}]"#,
        )
        .unwrap();

        let articles = load_articles(&path).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].published_at, "2026-02-01");
        assert!(articles[0].keywords.is_empty());
        let _ = fs::remove_dir_all(&dir);
    }
}
