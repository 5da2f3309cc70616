use anyhow::Context;
use clap::Parser;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use tf_core::{Article, FeedCatalog, Result};
use tf_feeds::{ArticleNormalizer, HttpFeedReader};
use tf_inference::{TagGenerator, DEFAULT_BACKEND, DEFAULT_MODEL_NAME};
use tf_web::AppState;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// A `CATEGORY=URL` pair given with `--feed`.
#[derive(Debug, Clone, PartialEq, Eq)]
struct FeedOverride {
    category: String,
    url: String,
}

impl FromStr for FeedOverride {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (category, url) = s
            .split_once('=')
            .ok_or_else(|| format!("expected CATEGORY=URL, got '{}'", s))?;
        let category = category.trim();
        let url = url.trim();
        if category.is_empty() || url.is_empty() {
            return Err(format!("expected CATEGORY=URL, got '{}'", s));
        }
        Ok(FeedOverride {
            category: category.to_string(),
            url: url.to_string(),
        })
    }
}

#[derive(Parser, Debug)]
#[command(author, version, about = "Serve RSS headlines annotated with model-generated tags", long_about = None)]
pub struct Cli {
    #[arg(long, default_value = DEFAULT_BACKEND, help = "Model backend for tag generation. Available: gemini (default), dummy")]
    model: String,
    #[arg(long, default_value = DEFAULT_MODEL_NAME)]
    model_name: String,
    /// Override the model API base URL
    #[arg(long)]
    model_url: Option<String>,
    #[arg(long, env = "GEMINI_API_KEY", hide_env_values = true)]
    api_key: Option<String>,
    /// Add or replace a feed category (repeatable)
    #[arg(long = "feed", value_name = "CATEGORY=URL")]
    feeds: Vec<FeedOverride>,
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Subcommand, Debug)]
enum Commands {
    /// Run the HTTP service
    Serve {
        #[arg(long, default_value = "127.0.0.1")]
        host: IpAddr,
        #[arg(long, default_value_t = 5000)]
        port: u16,
    },
    /// Process one category and print the articles as JSON
    Fetch {
        category: String,
    },
    /// List configured categories
    Categories,
}

fn build_catalog(overrides: &[FeedOverride]) -> Result<FeedCatalog> {
    let mut catalog = FeedCatalog::default();
    for feed in overrides {
        catalog.insert(&feed.category, &feed.url)?;
    }
    Ok(catalog)
}

fn inference_config(cli: &Cli) -> tf_inference::Config {
    tf_inference::Config {
        backend: cli.model.clone(),
        api_key: cli.api_key.clone(),
        model_name: Some(cli.model_name.clone()),
        model_url: cli.model_url.clone(),
    }
}

fn build_normalizer(cli: &Cli, catalog: FeedCatalog) -> Result<ArticleNormalizer> {
    let client = tf_feeds::http_client()?;
    let model = tf_inference::create_model(client.clone(), inference_config(cli))?;
    info!("🧠 Inference model initialized successfully (using {})", model.name());

    Ok(ArticleNormalizer::new(
        Arc::new(catalog),
        Arc::new(HttpFeedReader::with_client(client)),
        TagGenerator::new(model),
    ))
}

fn render_articles(articles: &[Article]) -> Result<String> {
    Ok(serde_json::to_string_pretty(articles)?)
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).with_target(false).init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_tracing();
    let cli = Cli::parse();

    let catalog = build_catalog(&cli.feeds).context("invalid --feed option")?;
    info!(
        "🗂️ Categories: {}",
        catalog.iter().map(|(key, _)| key).collect::<Vec<_>>().join(", ")
    );

    match &cli.command {
        Commands::Categories => {
            for (key, url) in catalog.iter() {
                println!("{}\t{}", key, url);
            }
        }
        Commands::Fetch { category } => {
            let normalizer = build_normalizer(&cli, catalog).context("failed to set up tag generation")?;
            let articles = normalizer
                .articles_for(category)
                .await
                .with_context(|| format!("failed to fetch news for '{}'", category))?;
            println!("{}", render_articles(&articles)?);
        }
        Commands::Serve { host, port } => {
            let normalizer = build_normalizer(&cli, catalog).context("failed to set up tag generation")?;
            let state = AppState::new(Arc::new(normalizer));
            tf_web::serve(SocketAddr::new(*host, *port), state)
                .await
                .context("HTTP server failed")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_feed_override_parsing() {
        let feed: FeedOverride = "tech = https://example.com/rss?a=b".parse().unwrap();
        assert_eq!(feed.category, "tech");
        assert_eq!(feed.url, "https://example.com/rss?a=b");

        assert!("no-separator".parse::<FeedOverride>().is_err());
        assert!("=https://example.com".parse::<FeedOverride>().is_err());
        assert!("tech=".parse::<FeedOverride>().is_err());
    }

    #[test]
    fn test_defaults() {
        let cli = Cli::try_parse_from(["tf", "serve"]).unwrap();
        assert_eq!(cli.model, "gemini");
        assert_eq!(cli.model_name, "gemini-2.5-flash-lite");
        assert!(cli.feeds.is_empty());
        match cli.command {
            Commands::Serve { host, port } => {
                assert_eq!(host.to_string(), "127.0.0.1");
                assert_eq!(port, 5000);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_feed_overrides_extend_catalog() {
        let cli = Cli::try_parse_from([
            "tf",
            "--feed",
            "tech=https://example.com/tech.xml",
            "--feed",
            "economy=https://example.com/economy.xml",
            "categories",
        ])
        .unwrap();
        let catalog = build_catalog(&cli.feeds).unwrap();
        assert_eq!(catalog.len(), 4);
        assert_eq!(catalog.get("tech"), Some("https://example.com/tech.xml"));
        assert_eq!(catalog.get("economy"), Some("https://example.com/economy.xml"));
    }

    #[test]
    fn test_invalid_feed_url_is_rejected() {
        let overrides = vec![FeedOverride {
            category: "tech".to_string(),
            url: "not a url".to_string(),
        }];
        assert!(build_catalog(&overrides).is_err());
    }

    #[test]
    fn test_dummy_backend_needs_no_key() {
        let cli = Cli::try_parse_from(["tf", "--model", "dummy", "fetch", "economy"]).unwrap();
        let normalizer = build_normalizer(&cli, FeedCatalog::default()).unwrap();
        assert_eq!(normalizer.tag_model_name(), "Dummy");
    }

    #[test]
    fn test_render_articles_matches_endpoint_shape() {
        let articles = vec![Article {
            title: "円安".to_string(),
            link: "https://example.com/1".to_string(),
            summary: "本文...".to_string(),
            tags: vec!["経済".to_string()],
        }];
        let rendered = render_articles(&articles).unwrap();
        let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();
        assert_eq!(value[0]["title"], "円安");
        assert_eq!(value[0]["tags"][0], "経済");
        assert_eq!(render_articles(&[]).unwrap(), "[]");
    }

    #[test]
    fn test_gemini_without_key_fails() {
        let cli = Cli {
            api_key: None,
            ..Cli::try_parse_from(["tf", "fetch", "economy"]).unwrap()
        };
        assert!(build_normalizer(&cli, FeedCatalog::default()).is_err());
    }
}
