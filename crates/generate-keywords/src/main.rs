use anyhow::{Context, Result};
use chrono::Utc;
use clap::Parser;
use shared::{
    classify_trend, list_snapshots, load_articles, load_categories, save_snapshot, Article,
    Category, Config, Keyword, KeywordGenerator, KeywordSnapshot, Trend,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "generate-keywords")]
#[command(about = "Derive ranked trending keywords from a collection of news articles")]
struct Args {
    /// JSON file with the article collection
    #[arg(short, long)]
    articles: PathBuf,

    /// JSON file with newly arrived articles; recomputes keywords over both files
    #[arg(short, long)]
    new_articles: Option<PathBuf>,

    /// JSON file with the known categories (id, name)
    #[arg(short, long)]
    categories: Option<PathBuf>,

    /// Number of keywords to print
    #[arg(short, long, default_value = "20")]
    top: usize,

    /// Print trend labels (placeholder until historical data exists)
    #[arg(long)]
    trends: bool,

    /// Do not write a keyword snapshot
    #[arg(long)]
    no_save: bool,
}

fn print_keywords(keywords: &[Keyword], categories: &[Category], top: usize) {
    for (rank, keyword) in keywords.iter().take(top).enumerate() {
        println!(
            "  {:>2}. {:<32} {:>3}  [{}]  {} article(s), {} continent(s)",
            rank + 1,
            keyword.text,
            keyword.value,
            shared::category_name(keyword, categories),
            keyword.articles.len(),
            keyword.continents.len()
        );
    }
    if keywords.len() > top {
        println!("  ... and {} more", keywords.len() - top);
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    let config = Config::from_env()?;
    log::debug!("Snapshot directory: {}", config.snapshot_dir.display());

    println!("📚 Loading articles from {}...", args.articles.display());
    let mut all_articles: Vec<Article> = load_articles(&args.articles)?;
    println!("✓ Loaded {} articles", all_articles.len());

    let categories = match &args.categories {
        Some(path) => load_categories(path)?,
        None => Vec::new(),
    };

    let keywords = if let Some(path) = &args.new_articles {
        let new_articles = load_articles(path)?;
        println!("✓ Loaded {} new articles", new_articles.len());
        all_articles.extend(new_articles.iter().cloned());

        let existing: Vec<Keyword> = list_snapshots(&config.snapshot_dir)?
            .into_iter()
            .next()
            .map(|(_, snapshot)| snapshot.keywords)
            .unwrap_or_default();

        println!("\n🔄 Refreshing keywords over {} articles...", all_articles.len());
        KeywordGenerator::refresh(&existing, &new_articles, &all_articles, &categories)
    } else {
        println!("\n🔑 Generating keywords...");
        KeywordGenerator::generate(&all_articles, &categories)
    };

    if keywords.is_empty() {
        println!("No trending keywords found in {} articles.", all_articles.len());
        return Ok(());
    }

    println!("✓ Found {} trending keywords\n", keywords.len());
    print_keywords(&keywords, &categories, args.top);

    if args.trends {
        println!("\n📈 Trends (placeholder, no historical data yet):");
        for report in classify_trend(&keywords, &all_articles, config.change_rate)
            .iter()
            .take(args.top)
        {
            let arrow = match report.trend {
                Trend::Rising => "↑",
                Trend::Stable => "→",
                Trend::Falling => "↓",
            };
            println!(
                "  {} {:<32} {:<8} {:+.1}%",
                arrow,
                report.keyword,
                report.trend.label(),
                report.change_rate
            );
        }
    }

    if !args.no_save {
        let snapshot = KeywordSnapshot::new(all_articles.len(), keywords);
        let filename = format!("keywords-{}.json", Utc::now().format("%Y-%m-%d-%H%M%S"));
        let path = save_snapshot(&snapshot, &config.snapshot_dir, &filename)
            .context("Failed to save keyword snapshot")?;
        println!("\n✅ Snapshot saved to: {}", path.display());
    }

    Ok(())
}
