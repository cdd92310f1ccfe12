use std::path::PathBuf;
use std::time::Instant;

use anyhow::Context;
use clap::{Parser, Subcommand};

use pdufa_scraper::config::Settings;
use pdufa_scraper::sources::{self, DataSource};
use pdufa_scraper::{fetch, scraper, snapshot, PdufaRecord, Snapshot};

#[derive(Parser)]
#[command(name = "pdufa_scraper", about = "Upcoming FDA/PDUFA decision dates from the RTTNews calendar")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch the calendar page and write a fresh snapshot
    Scrape {
        /// Calendar URL (default: PDUFA_SOURCE_URL or the RTTNews calendar)
        #[arg(long)]
        url: Option<String>,
        /// Snapshot path (default: PDUFA_OUTPUT_PATH or public/fda-data.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Run the extraction against a saved HTML page
    Extract {
        /// Saved calendar page
        #[arg(short, long)]
        input: PathBuf,
        /// Snapshot path (default: PDUFA_OUTPUT_PATH or public/fda-data.json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Print upcoming dates from the first available source
    Show {
        /// Try a live scrape before the snapshot file
        #[arg(long)]
        live: bool,
        /// Snapshot path to read (default: PDUFA_OUTPUT_PATH or public/fda-data.json)
        #[arg(short, long)]
        snapshot: Option<PathBuf>,
        /// Max rows to display
        #[arg(short = 'n', long, default_value = "50")]
        limit: usize,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let t0 = Instant::now();
    let cli = Cli::parse();
    let settings = Settings::load().context("Failed to load settings")?;

    match cli.command {
        Commands::Scrape { url, output } => {
            let url = url.unwrap_or(settings.source_url);
            let output = output.unwrap_or(settings.output_path);
            let client = fetch::client(&settings.user_agent)?;
            let snapshot = scraper::scrape(&client, &url)
                .await
                .with_context(|| format!("Failed to scrape {}", url))?;
            snapshot::write_snapshot(&output, &snapshot)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            print_summary(&snapshot, &output);
        }
        Commands::Extract { input, output } => {
            let output = output.unwrap_or(settings.output_path);
            let html = std::fs::read_to_string(&input)
                .with_context(|| format!("Failed to read {}", input.display()))?;
            let snapshot = scraper::build_snapshot(
                &html,
                &settings.source_url,
                scraper::today(),
                &scraper::timestamp_now(),
            );
            snapshot::write_snapshot(&output, &snapshot)
                .with_context(|| format!("Failed to write {}", output.display()))?;
            print_summary(&snapshot, &output);
        }
        Commands::Show { live, snapshot, limit } => {
            let mut chain = Vec::new();
            if live {
                chain.push(DataSource::Live {
                    url: settings.source_url.clone(),
                    user_agent: settings.user_agent.clone(),
                });
            }
            chain.push(DataSource::Snapshot {
                path: snapshot.unwrap_or(settings.output_path),
            });
            chain.push(DataSource::Embedded);

            let loaded = sources::load_first(&chain)
                .await
                .context("No data source could be loaded")?;
            if loaded.records.is_empty() {
                println!("No upcoming PDUFA dates ({}).", loaded.source);
            } else {
                print_table(&loaded.records, limit);
                println!("\n{} records | source: {}", loaded.records.len(), loaded.source);
            }
        }
    }

    let elapsed = t0.elapsed();
    if elapsed.as_secs() >= 1 {
        println!("\nDone in {:.1}s", elapsed.as_secs_f64());
    }
    Ok(())
}

fn print_summary(snapshot: &Snapshot, output: &std::path::Path) {
    println!("Scraping complete!");
    println!("Total items: {}", snapshot.meta.item_count);
    if let (Some(first), Some(last)) = (
        &snapshot.meta.date_range.earliest,
        &snapshot.meta.date_range.latest,
    ) {
        println!("Date range:  {} .. {}", first, last);
    }
    println!("Saved to:    {}", output.display());
}

fn print_table(records: &[PdufaRecord], limit: usize) {
    println!(
        "{:<10} | {:<6} | {:<24} | {:<20} | {:<20}",
        "Date", "Ticker", "Company", "Drug", "Category"
    );
    println!("{}", "-".repeat(92));
    for r in records.iter().take(limit) {
        println!(
            "{:<10} | {:<6} | {:<24} | {:<20} | {:<20}",
            r.pdufa_date,
            r.ticker,
            truncate(&r.company, 24),
            truncate(&r.drug, 20),
            r.category.label(),
        );
    }
}

fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let truncated: String = s.chars().take(max - 3).collect();
        format!("{}...", truncated)
    }
}
