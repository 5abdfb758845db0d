use std::path::{Path, PathBuf};
use std::time::Instant;

use clap::Parser;
use firmscrape_core::{
    CompanyReport, CompanyTarget, ConfigLoader, ConfigLoaderBuilder, DEFAULT_NEWS_SUFFIX, FetchConfig, HttpFetcher,
    ReportFormat, Scraper, SiteTable, news_url, write_report,
};
use owo_colors::OwoColorize;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

mod echo;

const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Scrape company descriptions, offices, clients and news into a spreadsheet
#[derive(Parser, Debug)]
#[command(name = "firmscrape")]
#[command(version)]
#[command(about = "Scrape company profiles from marketing sites", long_about = None)]
struct Args {
    /// Output file (default: company_data.xlsx or company_data.json)
    #[arg(short, long, value_name = "FILE")]
    output: Option<PathBuf>,

    /// Output format (xlsx, excel, json)
    #[arg(short, long, default_value = "xlsx", value_name = "FORMAT")]
    format: ReportFormat,

    /// HTTP timeout in seconds
    #[arg(long, default_value = "30", value_name = "SECS")]
    timeout: u64,

    /// Custom User-Agent for HTTP requests
    #[arg(long, value_name = "UA")]
    user_agent: Option<String>,

    /// Directory of site descriptor files overriding the built-in table
    #[arg(long, value_name = "DIR")]
    config_dir: Option<PathBuf>,

    /// Path appended to each home page to reach its news listing
    #[arg(long, default_value = DEFAULT_NEWS_SUFFIX, value_name = "PATH")]
    news_suffix: String,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn init_tracing(verbose: bool) {
    let default_filter = if verbose { "warn,firmscrape_core=debug" } else { "warn" };

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr).with_target(false))
        .init();
}

/// Built-in descriptors, overridden by any descriptor files found for `targets`
fn site_table(targets: &[CompanyTarget], config_dir: Option<&Path>) -> SiteTable {
    let mut loader = match config_dir {
        Some(dir) => {
            let mut builder = ConfigLoaderBuilder::new().custom_dir(dir);
            if let Some(standard_dir) = ConfigLoader::default_standard_dir() {
                builder = builder.standard_dir(standard_dir);
            }
            builder.build()
        }
        None => ConfigLoader::default(),
    };

    let sites: Vec<&str> = targets.iter().map(|target| target.site.as_str()).collect();
    let mut table = SiteTable::builtin();
    table.apply_overrides(&mut loader, &sites);
    table
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    init_tracing(args.verbose);

    if args.verbose {
        echo::print_banner();
        echo::print_info("Debug logging enabled");
        eprintln!();
    }

    if let Some(dir) = &args.config_dir {
        anyhow::ensure!(dir.is_dir(), "Config directory not found: {}", dir.display());
    }

    let targets = CompanyTarget::defaults();
    let table = site_table(&targets, args.config_dir.as_deref());

    if args.verbose {
        eprintln!("  {} {}", "Descriptors:".dimmed(), table.len().to_string().bright_white());
        eprintln!("  {} {}", "News path:".dimmed(), args.news_suffix.bright_white());
        eprintln!();
    }

    let config = FetchConfig {
        timeout: args.timeout,
        user_agent: args.user_agent.unwrap_or_else(|| FetchConfig::default().user_agent),
    };

    let fetcher = match HttpFetcher::new(config) {
        Ok(fetcher) => fetcher,
        Err(e) => {
            echo::print_error(&format!("Failed to build HTTP client: {}", e));
            return Ok(());
        }
    };
    let scraper = Scraper::new(fetcher, table);

    let mut report = CompanyReport::new();
    for (i, target) in targets.iter().enumerate() {
        echo::print_step(i + 1, targets.len(), &format!("Scraping data for {}...", target.site));

        let started = Instant::now();
        let news_page = news_url(&target.home_url, &args.news_suffix);
        let record = scraper.scrape_one(&target.home_url, &news_page, &target.site).await;

        if args.verbose {
            echo::print_timing(&target.site, started.elapsed());
        }
        if record.is_empty() {
            echo::print_warning(&format!("No data extracted for {}", target.site));
        }

        println!("{:#}", record.to_json());
        report.insert(target.site.clone(), record);
    }

    let empty = report.iter().filter(|(_, record)| record.is_empty()).count();
    echo::print_summary(report.len(), empty, report.news_count());

    let path = args.output.unwrap_or_else(|| PathBuf::from(args.format.default_file_name()));
    tracing::debug!(path = %path.display(), format = ?args.format, "writing report");
    match write_report(&report, args.format, &path) {
        Ok(()) => echo::print_success(&format!("Report written to {}", path.display().bright_white())),
        Err(e) => echo::print_error(&format!("Failed to write report to {}: {}", path.display(), e)),
    }

    Ok(())
}
