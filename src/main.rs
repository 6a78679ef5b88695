// src/main.rs

use std::path::PathBuf;

use anyhow::Context;
use clap::{Parser, Subcommand};

use sitescore::leads::DEFAULT_LEAD_COUNT;
use sitescore::{generate_leads, lifecycle, AppConfig, LeadRecord, ScoreReport, SiteAnalyzer};

#[derive(Parser)]
#[command(
    name = "sitescore",
    about = "Score a website's on-page SEO and performance, or synthesize demo leads",
    version
)]
struct Cli {
    /// Path to a JSON settings file (fetch timeout, scoring thresholds).
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch one page and print its score report.
    Analyze {
        /// Page URL; `https://` is assumed when no scheme is given.
        url: String,

        /// Print the report as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Generate deterministic demo leads for an industry and city.
    Leads {
        industry: String,
        city: String,

        #[arg(short = 'n', long, default_value_t = DEFAULT_LEAD_COUNT)]
        count: usize,

        /// Print the leads as JSON.
        #[arg(long)]
        json: bool,
    },

    /// Liveness probe.
    Health,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    lifecycle::init_logging(&cli.log_level);

    let config = match &cli.config {
        Some(path) => AppConfig::load(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => AppConfig::default(),
    };

    match cli.command {
        Commands::Analyze { url, json } => {
            let analyzer =
                SiteAnalyzer::from_config(&config).context("Failed to set up analyzer")?;
            let report = analyzer.analyze(url.trim()).await;
            if json {
                println!("{}", serde_json::to_string_pretty(&report)?);
            } else {
                print_report(&report);
            }
        }
        Commands::Leads {
            industry,
            city,
            count,
            json,
        } => {
            let leads = generate_leads(industry.trim(), city.trim(), count);
            if json {
                println!("{}", serde_json::to_string_pretty(&leads)?);
            } else {
                print_leads(&leads);
            }
        }
        Commands::Health => println!("OK"),
    }

    Ok(())
}

fn print_report(report: &ScoreReport) {
    println!("Report for {}", report.url);
    if !report.ok {
        println!(
            "  Site unreachable: {}",
            report.metrics.error.as_deref().unwrap_or("unknown error")
        );
    }
    println!(
        "  Overall: {}/100 ({})",
        report.overall_score,
        report.overall_band.as_str()
    );
    println!(
        "  SEO: {}/100   Performance: {}/100",
        report.seo.seo_score, report.performance.perf_score
    );
    println!(
        "  Response: {:.2}s   Size: {:.1} KiB   Images: {} ({:.1}% with alt)",
        report.metrics.response_time_s,
        report.metrics.html_size_kib,
        report.metrics.images_total,
        report.metrics.images_alt_pct
    );
    println!("  Title: {:?}", report.seo.title);
    println!("  Meta description: {:?}", report.seo.meta_description);
    println!("  H1 ({}): {:?}", report.seo.h1_count, report.seo.h1_samples);

    if report.suggestions.is_empty() {
        println!("No suggestions.");
    } else {
        println!("Suggestions:");
        for note in &report.suggestions {
            println!("  - {}", note);
        }
    }
}

fn print_leads(leads: &[LeadRecord]) {
    for lead in leads {
        println!(
            "{:>3} [{}] {} ({})",
            lead.score, lead.score_color, lead.name, lead.domain
        );
        for reason in &lead.reasons {
            println!("      {}", reason);
        }
    }
}
