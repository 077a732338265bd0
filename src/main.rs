use std::io::Read;
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use product_agent::config::Config;
use product_agent::tagging::extractor::AttributeExtractor;
use product_agent::tagging::traits::Tagger;
use product_agent::trends::analyzer::TrendAnalyzer;
use product_agent::trends::traits::TrendDetector;

/// Product agent: catalog tagging and trend analysis for product copy.
///
/// Maps free-text descriptions onto a fixed attribute taxonomy and ranks
/// the most frequent keywords of a corpus.
#[derive(Parser)]
#[command(name = "product-agent", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web dashboard and JSON API
    Serve {
        /// Port to listen on (overrides PRODUCT_AGENT_PORT)
        #[arg(long)]
        port: Option<u16>,

        /// Address to bind (overrides PRODUCT_AGENT_BIND)
        #[arg(long)]
        bind: Option<String>,
    },

    /// Extract catalog attributes from a product description
    Tag {
        /// Description text (read from stdin when omitted)
        text: Option<String>,

        /// Print the tag set as JSON
        #[arg(long)]
        json: bool,
    },

    /// Rank the trending keywords of a text corpus
    Trends {
        /// Corpus text (read from --file or stdin when omitted)
        text: Option<String>,

        /// Read the corpus from a file
        #[arg(long, conflicts_with = "text")]
        file: Option<PathBuf>,

        /// Print the trend list as JSON
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Set up structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("product_agent=info")),
        )
        .init();

    let cli = Cli::parse();
    let mut config = Config::load()?;

    match cli.command {
        Commands::Serve { port, bind } => {
            if let Some(port) = port {
                config.port = port;
            }
            if let Some(bind) = bind {
                config.bind = bind;
            }
            config.validate()?;

            info!(
                trend_limit = config.trend_limit,
                max_body_bytes = config.max_body_bytes,
                "Starting web server"
            );
            product_agent::web::run_server(config).await?;
        }

        Commands::Tag { text, json } => {
            let text = match text {
                Some(text) => text,
                None => read_stdin()?,
            };

            let tags = AttributeExtractor::default().tag(&text);

            if json {
                println!("{}", serde_json::to_string_pretty(&tags)?);
            } else {
                product_agent::output::terminal::display_tags(&text, &tags);
            }
        }

        Commands::Trends { text, file, json } => {
            let corpus = match (text, file) {
                (Some(text), _) => text,
                (None, Some(path)) => std::fs::read_to_string(&path)
                    .with_context(|| format!("Failed to read corpus from {}", path.display()))?,
                (None, None) => read_stdin()?,
            };

            let analyzer = TrendAnalyzer {
                top_k: config.trend_limit,
            };
            let trends = analyzer.analyze(&corpus);

            if json {
                println!("{}", serde_json::to_string_pretty(&trends)?);
            } else {
                product_agent::output::terminal::display_trends(&trends);
            }
        }
    }

    Ok(())
}

fn read_stdin() -> Result<String> {
    let mut buf = String::new();
    std::io::stdin()
        .read_to_string(&mut buf)
        .context("Failed to read text from stdin")?;
    Ok(buf)
}
