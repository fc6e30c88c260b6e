use std::path::PathBuf;
use std::process::ExitCode;
use std::time::Duration;

use clap::Parser;
use coreinsights::{
    InsightsClientBuilder, InsightsError, Report, ReportRequest, Session, news::DEFAULT_NEWS_COUNT,
    presets,
};
use tracing_subscriber::EnvFilter;

/// Company overview from a stock quote, recent news and Wikipedia.
#[derive(Parser, Debug)]
#[command(name = "coreinsights", version, about)]
struct Cli {
    /// Stock ticker (e.g. TSLA)
    #[arg(short, long)]
    ticker: Option<String>,

    /// Company name used for news and page guessing
    #[arg(short, long)]
    company: Option<String>,

    /// Exact Wikipedia page name (e.g. "Tesla,_Inc.")
    #[arg(short, long)]
    page: Option<String>,

    /// Fill ticker, company and page from a well-known company; explicit flags win
    #[arg(long)]
    preset: Option<String>,

    /// Number of news articles
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_NEWS_COUNT,
        value_parser = clap::value_parser!(u32).range(3..=10)
    )]
    news: u32,

    /// Write the JSON report into this directory
    #[arg(short, long)]
    out: Option<PathBuf>,

    /// Print the JSON report instead of the text summary
    #[arg(long)]
    json: bool,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 10, value_parser = clap::value_parser!(u64).range(1..))]
    timeout: u64,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn request(&self) -> Result<ReportRequest, String> {
        let base = match self.preset.as_deref() {
            Some(label) => presets::find(label)
                .ok_or_else(|| format!("unknown preset: {label}"))?
                .request(self.news),
            None => ReportRequest {
                news_count: self.news,
                ..ReportRequest::default()
            },
        };
        Ok(ReportRequest {
            ticker: self.ticker.clone().or(base.ticker),
            company_name: self.company.clone().or(base.company_name),
            page_name: self.page.clone().or(base.page_name),
            news_count: self.news,
        })
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let log_level = match cli.verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(log_level));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(&cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            match e {
                InsightsError::MissingSearchInput | InsightsError::InvalidParams(_) => {
                    ExitCode::from(2)
                }
                _ => ExitCode::FAILURE,
            }
        }
    }
}

async fn run(cli: &Cli) -> Result<(), InsightsError> {
    let request = cli.request().map_err(InsightsError::InvalidParams)?;
    let client = InsightsClientBuilder::from_env()
        .timeout(Duration::from_secs(cli.timeout))
        .build()?;

    let mut session = Session::new();
    let report = session.generate(&client, request.clone()).await?;

    if cli.json {
        println!("{}", report.to_json()?);
    } else {
        render(report, &request);
    }

    if let Some(dir) = &cli.out {
        if report.has_data() {
            let path = report.write_to_dir(dir)?;
            eprintln!("Report written to {}", path.display());
        } else {
            eprintln!("Nothing to export: every section is empty");
        }
    }
    Ok(())
}

fn render(report: &Report, request: &ReportRequest) {
    println!("== Company Overview ==");
    match &report.stock {
        Some(q) => println!("{} ({}) on {}", q.name, q.symbol, q.exchange),
        None => {
            println!("{}", report.company.name);
            if let Some(t) = &request.ticker {
                println!("! Could not fetch stock data for ticker: {t}");
            }
        }
    }
    match &report.wikipedia {
        Some(w) => {
            if !w.description.is_empty() {
                println!("{}", w.description);
            }
            println!("{}", w.extract);
            println!("{}", w.url);
        }
        None => println!("! Wikipedia information not available for this company"),
    }

    if let Some(q) = &report.stock {
        println!("\n== Stock Performance ==");
        println!(
            "Price ${:.2}  {:+.2} ({:+.2}%)",
            q.price, q.change, q.change_percent
        );
        println!("Previous close ${:.2}", q.previous_close);
        println!("Day range ${:.2} - ${:.2}", q.low, q.high);
        if let (Some(hi), Some(lo)) = (q.fifty_two_week_high, q.fifty_two_week_low) {
            println!("52-week range ${lo:.2} - ${hi:.2}");
        }
    }

    println!("\n== Recent News ==");
    if report.news.is_empty() {
        println!("No recent news articles found");
    }
    for (i, a) in report.news.iter().enumerate() {
        println!("{}. {}", i + 1, a.title);
        println!("   {} | {}", a.source, a.published_at);
        println!("   {}", a.description);
        println!("   {}", a.url);
    }

    println!(
        "\nReport generated at: {}",
        report.generated_at.format(coreinsights::report::GENERATED_AT_FORMAT)
    );
}
