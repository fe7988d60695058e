use std::io::Read;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use fingenius::cli::commands::{Cli, Commands};
use fingenius::cli::play;
use fingenius::config::Config;
use fingenius::domain::ports::news_source::NewsSource;
use fingenius::domain::ports::portfolio_source::PortfolioSource;
use fingenius::infrastructure::feeds::news_proxy::{parse_headline_document, NewsProxyFeed};
use fingenius::infrastructure::portfolio::fixed::FixedPortfolio;
use fingenius::infrastructure::portfolio::trade_api::TradeApiPortfolio;
use fingenius::logging::{init_logging, LoggingConfig};
use fingenius::FinGenius;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Err(e) = init_logging(LoggingConfig::from_env()) {
        eprintln!("Error initializing logging: {e}");
    }

    let result = run_command(Config::from_env(), cli.command).await;
    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

async fn run_command(mut config: Config, cmd: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match cmd {
        Commands::Score { text } => {
            let fg = FinGenius::new(&config);
            println!("{}", serde_json::to_string_pretty(&fg.score(&text))?);
        }
        Commands::Analyze { input } => {
            let body = if input == "-" {
                let mut buf = String::new();
                std::io::stdin().read_to_string(&mut buf)?;
                buf
            } else {
                std::fs::read_to_string(&input)?
            };
            let headlines = parse_headline_document(&body)?;
            let fg = FinGenius::new(&config);
            let (analysis, keywords, recommendation) = fg.analyze_headlines(&headlines);
            let out = serde_json::json!({
                "ranked": analysis.ranked_headlines(),
                "analysis": analysis,
                "keywords": keywords,
                "recommendation": recommendation,
            });
            println!("{}", serde_json::to_string_pretty(&out)?);
        }
        Commands::News {
            ticker,
            limit,
            news_url,
        } => {
            if let Some(limit) = limit {
                config.news_limit = limit;
            }
            if let Some(url) = news_url {
                config.news_url = url;
            }
            let fg = FinGenius::new(&config);
            match fg.analyze_ticker(&ticker).await? {
                Some(report) => println!("{}", serde_json::to_string_pretty(&report)?),
                None => eprintln!("No news found for {ticker}"),
            }
        }
        Commands::Portfolio {
            limit,
            delay_ms,
            tickers,
        } => {
            if let Some(limit) = limit {
                config.news_limit = limit;
            }
            if let Some(ms) = delay_ms {
                config.request_delay = Duration::from_millis(ms);
            }
            let news: Arc<dyn NewsSource> = Arc::new(NewsProxyFeed::new(config.news_url.clone()));
            let portfolio: Arc<dyn PortfolioSource> = match tickers {
                Some(tickers) => Arc::new(FixedPortfolio::from_tickers(&tickers)),
                None => Arc::new(TradeApiPortfolio::new(config.session()?)),
            };
            let fg = FinGenius::with_providers(news, Some(portfolio), &config);
            let report = fg.analyze_portfolio().await?;
            println!("{}", serde_json::to_string_pretty(&report)?);
        }
        Commands::Budget => {
            let stdin = std::io::stdin();
            play::play_budget(&mut stdin.lock(), &mut std::io::stdout())?;
        }
        Commands::Escape => {
            let stdin = std::io::stdin();
            play::play_escape(&mut stdin.lock(), &mut std::io::stdout())?;
        }
    }
    Ok(())
}
