//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `arec recommend <QUERY>` | Recommend assessments for a hiring need |
//! | `arec evaluate <LABELS>` | Mean recall@k over labeled queries |
//! | `arec predict <QUERIES>` | Write `Query,Assessment_url` rows to a CSV file |
//! | `arec serve` | Serve the HTTP API |
//! | `arec providers` | List registered providers |

use std::error::Error as StdError;
use std::path::{Path, PathBuf};

use arec_application::domain_services::{EvaluationReport, LabeledQuery, evaluate, predict};
use arec_domain::{RecommendationItem, RecommendationResult, RerankOutcome};
use arec_infrastructure::config::{AppConfig, ConfigLoader};
use arec_infrastructure::di::{ProviderResolver, init_app};
use arec_infrastructure::error_ext::ErrorContext;
use arec_infrastructure::logging::init_logging;
use arec_infrastructure::predictions::{read_queries, write_predictions};
use arec_server::{HttpServer, ServerState};
use clap::{Parser, Subcommand};
use serde::Serialize;

type CliResult<T> = Result<T, Box<dyn StdError>>;

/// Command line interface for arec
#[derive(Parser, Debug)]
#[command(name = "arec")]
#[command(about = "Assessment recommendation engine")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Catalog file, overriding `catalog.path`
    #[arg(long, global = true)]
    pub catalog: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Recommend assessments for a query
    Recommend {
        /// Hiring need or job description
        query: String,

        /// Number of results (clamped to the configured maximum)
        #[arg(short = 'k', long)]
        top_k: Option<usize>,

        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },

    /// Evaluate recall@k against labeled queries
    Evaluate {
        /// JSON file with `[{"query": ..., "relevant_urls": ...}]`
        labels: PathBuf,

        /// Cut-off for recall
        #[arg(short, long, default_value_t = 10)]
        k: usize,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Predict assessment URLs for every query in a CSV file
    Predict {
        /// CSV file with a query column (`query`, `text`, ...) or queries in
        /// the first column
        queries: PathBuf,

        /// Output CSV with `Query,Assessment_url` rows
        #[arg(short, long, default_value = "predictions.csv")]
        output: PathBuf,

        /// URLs per query; the top recommendation only by default
        #[arg(short = 'k', long, default_value_t = 1)]
        top_k: usize,
    },

    /// Serve recommendations over HTTP
    Serve {
        /// Bind address, overriding `server.host`
        #[arg(long)]
        host: Option<String>,

        /// Port, overriding `server.port`
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// List registered providers
    Providers,
}

/// JSON shape of a recommendation
#[derive(Debug, Serialize)]
struct RecommendOutput<'a> {
    query: &'a str,
    rerank: RerankOutcome,
    balanced: bool,
    recommendations: Vec<RecommendationItem>,
}

/// Run a parsed command line
pub async fn run(cli: Cli) -> CliResult<()> {
    if let Command::Providers = cli.command {
        print_providers();
        return Ok(());
    }

    let config = load_config(cli.config.as_deref(), cli.catalog)?;
    init_logging(&config.logging)?;

    match cli.command {
        Command::Recommend { query, top_k, json } => {
            let context = init_app(config).await?;
            let result = context.service().recommend_text(&query, top_k).await?;
            if json {
                print_json(&RecommendOutput {
                    query: &query,
                    rerank: result.rerank,
                    balanced: result.balanced,
                    recommendations: result.to_items(),
                })?;
            } else {
                print_table(&result);
            }
        }
        Command::Evaluate { labels, k, json } => {
            let labeled = read_labels(&labels).await?;
            let context = init_app(config).await?;
            let report = evaluate(context.service().as_ref(), &labeled, k).await;
            if json {
                print_json(&report)?;
            } else {
                print_report(&report);
            }
        }
        Command::Predict {
            queries,
            output,
            top_k,
        } => {
            let queries = read_queries(&queries)?;
            let context = init_app(config).await?;
            let predictions = predict(context.service().as_ref(), &queries, top_k).await;
            let rows = write_predictions(&output, &predictions)?;
            let failed = predictions.iter().filter(|p| p.error.is_some()).count();
            println!(
                "Wrote {rows} rows for {} queries to {} ({failed} failed)",
                predictions.len(),
                output.display()
            );
        }
        Command::Serve { host, port } => {
            let mut server_config = config.server.clone();
            if let Some(host) = host {
                server_config.host = host;
            }
            if let Some(port) = port {
                server_config.port = port;
            }
            let context = init_app(config).await?;
            HttpServer::new(server_config, ServerState::from_context(&context))
                .start()
                .await?;
        }
        Command::Providers => {}
    }
    Ok(())
}

fn load_config(path: Option<&Path>, catalog: Option<PathBuf>) -> CliResult<AppConfig> {
    let loader = match path {
        Some(path) => ConfigLoader::new().with_config_path(path),
        None => ConfigLoader::new(),
    };
    let mut config = loader.load()?;
    if let Some(catalog) = catalog {
        config.catalog.path = catalog;
    }
    Ok(config)
}

async fn read_labels(path: &Path) -> CliResult<Vec<LabeledQuery>> {
    let raw = tokio::fs::read_to_string(path)
        .await
        .io_context(format!("Failed to read labels {}", path.display()))?;
    let labeled: Vec<LabeledQuery> = serde_json::from_str(&raw)
        .with_context(|| format!("Labels {} are not a list of labeled queries", path.display()))?;
    Ok(labeled)
}

fn print_json<T: Serialize>(value: &T) -> CliResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_table(result: &RecommendationResult) {
    if result.is_empty() {
        println!("No recommendations");
        return;
    }
    for (rank, item) in result.to_items().iter().enumerate() {
        println!(
            "{:>2}. [{}] {} ({:.3})\n    {}",
            rank + 1,
            item.category_tag,
            item.name,
            item.similarity,
            item.url
        );
    }
    if result.rerank.is_fallback() {
        println!("note: reranking {}, similarity order used", result.rerank);
    }
}

fn print_report(report: &EvaluationReport) {
    for score in &report.per_query {
        let status = score.error.as_deref().unwrap_or("ok");
        println!(
            "{:.3}  {}/{}  {}  ({status})",
            score.recall, score.hits, score.relevant, score.query
        );
    }
    println!(
        "Mean Recall@{}: {:.4} over {} queries ({} skipped, {} failed)",
        report.k,
        report.mean_recall,
        report.per_query.len(),
        report.skipped,
        report.failed()
    );
}

fn print_providers() {
    for (kind, name, description) in ProviderResolver::list_available() {
        println!("{kind:<13} {name:<8} {description}");
    }
}
