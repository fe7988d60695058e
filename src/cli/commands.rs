use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "fingenius", about = "News sentiment signals and finance learning games")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Score a single headline
    Score {
        /// Headline text
        text: String,
    },
    /// Analyze a news batch (news proxy JSON or a JSON array of headlines)
    Analyze {
        /// Path to the JSON file, or "-" for stdin
        input: String,
    },
    /// Fetch and analyze news for one ticker
    News {
        /// Ticker symbol, e.g. RELIANCE.NS
        ticker: String,
        /// Maximum headlines to fetch
        #[arg(long)]
        limit: Option<usize>,
        /// News proxy base URL (overrides FINGENIUS_NEWS_URL)
        #[arg(long)]
        news_url: Option<String>,
    },
    /// Analyze news for every holding in the portfolio
    Portfolio {
        /// Maximum headlines per ticker
        #[arg(long)]
        limit: Option<usize>,
        /// Pause between tickers in milliseconds
        #[arg(long)]
        delay_ms: Option<u64>,
        /// Comma-separated tickers to use instead of the trading backend
        #[arg(long, value_delimiter = ',')]
        tickers: Option<Vec<String>>,
    },
    /// Play the budget simulator
    Budget,
    /// Play the compound-interest escape room
    Escape,
}
