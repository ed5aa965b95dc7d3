use anyhow::{Context, Result};
use chrono::{DateTime, Local};
use clap::Parser;
use shared::{
    filter_keywords, find_similar, list_snapshots, load_snapshot, related_keywords, Config,
    Keyword, KeywordFilter, KeywordSnapshot,
};
use std::io::{self, Write as _};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "find-similar")]
#[command(about = "Look up related trending keywords in a saved keyword snapshot")]
struct Args {
    /// Keyword or phrase to look up
    query: Option<String>,

    /// Snapshot file (if not provided, will list available snapshots)
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Only keywords seen on this continent ("global" for all)
    #[arg(long)]
    continent: Option<String>,

    /// Only keywords seen in this region
    #[arg(long)]
    region: Option<String>,

    /// Only keywords in this category
    #[arg(long)]
    category: Option<String>,
}

impl Args {
    fn filter(&self) -> Option<KeywordFilter> {
        if self.continent.is_none() && self.region.is_none() && self.category.is_none() {
            return None;
        }
        let defaults = KeywordFilter::default();
        Some(KeywordFilter {
            continent: self.continent.clone().unwrap_or(defaults.continent),
            region: self.region.clone().unwrap_or_default(),
            category: self.category.clone().unwrap_or_default(),
            search: String::new(),
        })
    }
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let snapshot_file = match &args.file {
        Some(path) => path.clone(),
        None => select_snapshot_file()?,
    };

    println!("📖 Reading snapshot: {}", snapshot_file.display());
    let snapshot = load_snapshot(&snapshot_file)?;
    println!(
        "✓ {} keywords from {} articles",
        snapshot.keywords.len(),
        snapshot.article_count
    );

    let pool = match args.filter() {
        Some(filter) => {
            log::debug!("Applying filter {:?}", filter);
            filter_keywords(&snapshot.keywords, &filter)
        }
        None => snapshot.keywords.clone(),
    };

    let Some(query) = args.query.as_deref() else {
        println!("\n🔎 {} keywords match the filters:", pool.len());
        print_keywords(&pool);
        return Ok(());
    };

    let similar = find_similar(query, &pool);
    if similar.is_empty() {
        println!("\nNo keywords similar to \"{}\".", query);
        return Ok(());
    }

    println!("\n🔎 Keywords similar to \"{}\":", query);
    print_keywords(&similar);

    let related = related_keywords(&similar[0], &pool);
    if !related.is_empty() {
        println!("\n🔗 More in {}:", similar[0].category);
        print_keywords(&related);
    }

    Ok(())
}

fn print_keywords(keywords: &[Keyword]) {
    for keyword in keywords {
        println!(
            "  {:>3}  {:<32} [{}]  {}",
            keyword.value,
            keyword.text,
            keyword.category,
            keyword.continents.join(", ")
        );
    }
}

fn select_snapshot_file() -> Result<PathBuf> {
    let config = Config::from_env()?;
    let snapshots: Vec<(PathBuf, KeywordSnapshot)> = list_snapshots(&config.snapshot_dir)?;

    if snapshots.is_empty() {
        anyhow::bail!(
            "No keyword snapshots found in {}. Run generate-keywords first.",
            config.snapshot_dir.display()
        );
    }

    println!("Available snapshots:\n");
    for (i, (path, snapshot)) in snapshots.iter().enumerate() {
        let filename = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_default();
        let created = DateTime::parse_from_rfc3339(&snapshot.created_at)
            .map(|dt| dt.with_timezone(&Local).format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|_| "unknown".to_string());

        println!(
            "  {}) {} ({} keywords, created: {})",
            i + 1,
            filename,
            snapshot.keywords.len(),
            created
        );
    }

    print!("\nSelect snapshot (1-{}): ", snapshots.len());
    io::stdout().flush()?;

    let mut input = String::new();
    io::stdin().read_line(&mut input)?;

    let selection: usize = input
        .trim()
        .parse()
        .context("Invalid selection. Please enter a number.")?;

    if selection < 1 || selection > snapshots.len() {
        anyhow::bail!(
            "Selection out of range. Please choose 1-{}",
            snapshots.len()
        );
    }

    Ok(snapshots[selection - 1].0.clone())
}
