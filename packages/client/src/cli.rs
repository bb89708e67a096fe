//! Command-line interface for the client.

use clap::{Parser, Subcommand};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use crate::config::{DEFAULT_BASE_URL, DEFAULT_MAX_NEW_TOKENS, DEFAULT_TOP_K};
use crate::error::Result;
use crate::panel::QueryPanel;
use crate::render::{render_panel, render_sources};
use crate::service::RagClient;
use crate::types::AnswerRequest;

/// LegalEase - Ask legal questions against the LegalEase RAG service.
#[derive(Parser)]
#[command(name = "legalease")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Base URL of the LegalEase backend
    #[arg(long, global = true, default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Ask a question and show the answer with its sources.
    Ask {
        /// The question to ask
        query: String,

        /// Number of sources to retrieve (1-20)
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: u32,

        /// Upper bound on generated answer length (32-1024)
        #[arg(short = 'm', long = "max-tokens", default_value_t = DEFAULT_MAX_NEW_TOKENS)]
        max_new_tokens: u32,
    },

    /// Ask the built-in demonstration question.
    Example,

    /// Retrieve matching sources without generating an answer.
    Search {
        /// The search query
        query: String,

        /// Number of sources to retrieve (1-20)
        #[arg(short = 'k', long, default_value_t = DEFAULT_TOP_K)]
        top_k: u32,
    },

    /// Ask the backend to (re)build its retrieval index.
    Build,

    /// Check backend health and model readiness.
    Status,
}

/// Run the CLI.
pub async fn run() -> Result<()> {
    let cli = Cli::parse();
    let client = RagClient::new(&cli.base_url)?;

    match cli.command {
        Commands::Ask {
            query,
            top_k,
            max_new_tokens,
        } => {
            let mut panel = QueryPanel::new();
            panel.set_query(query);
            panel.set_top_k(top_k);
            panel.set_max_new_tokens(max_new_tokens);
            ask_command(panel, &client).await
        }
        Commands::Example => example_command(&client).await,
        Commands::Search { query, top_k } => search_command(&client, &query, top_k).await,
        Commands::Build => build_command(&client).await,
        Commands::Status => status_command(&client).await,
    }
}

/// Spinner shown while a request is in flight.
fn spinner(message: &'static str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    #[allow(clippy::expect_used)] // Static template string that is guaranteed to be valid
    pb.set_style(
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .expect("valid template"),
    );
    pb.set_message(message);
    pb.enable_steady_tick(std::time::Duration::from_millis(100));
    pb
}

/// Submit the panel and render the settled result.
///
/// A settled error renders inline like the form it replaces; only
/// precondition failures (short query, bad ranges) abort the command.
async fn ask_command(mut panel: QueryPanel, client: &RagClient) -> Result<()> {
    let pb = spinner("Thinking...");
    let result = panel.submit(client).await;
    pb.finish_and_clear();
    result?;

    render_panel(&panel);
    Ok(())
}

/// Execute the example shortcut.
async fn example_command(client: &RagClient) -> Result<()> {
    let mut panel = QueryPanel::new();
    let pb = spinner("Thinking...");
    let result = panel.use_example(client).await;
    pb.finish_and_clear();
    result?;

    println!(
        "{} {}",
        style("Question:").bold(),
        style(panel.query()).cyan()
    );
    println!();
    render_panel(&panel);
    Ok(())
}

/// Execute the search command.
async fn search_command(client: &RagClient, query: &str, top_k: u32) -> Result<()> {
    let request = AnswerRequest::new(query, top_k, DEFAULT_MAX_NEW_TOKENS)?;

    let pb = spinner("Searching...");
    let response = match client.search(&request).await {
        Ok(response) => response,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    println!(
        "{} {}",
        style("Results for").bold(),
        style(&response.query).cyan()
    );
    println!();
    render_sources(&response.results);
    Ok(())
}

/// Execute the index build command.
async fn build_command(client: &RagClient) -> Result<()> {
    let pb = spinner("Building index...");
    let response = match client.build_index().await {
        Ok(response) => response,
        Err(e) => {
            pb.finish_and_clear();
            return Err(e);
        }
    };
    pb.finish_and_clear();

    println!("{}", style("Index built").green().bold());
    println!("  Chunks: {}", response.indexed_chunks);
    println!("  Model: {}", response.embedding_model);
    println!("  Path: {}", response.index_path);
    Ok(())
}

/// Execute the status command.
async fn status_command(client: &RagClient) -> Result<()> {
    let health = client.health().await?;
    println!(
        "{} {}",
        style("Backend:").bold(),
        style(&health.status).green()
    );

    let ready = client.llm_ready().await?;
    println!(
        "{} {}",
        style("Model:").bold(),
        style(&ready.status).green()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parse_ask() {
        let cli = Cli::parse_from(["legalease", "ask", "What is a charge?"]);

        let Commands::Ask {
            query,
            top_k,
            max_new_tokens,
        } = cli.command
        else {
            panic!("expected ask command");
        };
        assert_eq!(query, "What is a charge?");
        assert_eq!(top_k, DEFAULT_TOP_K);
        assert_eq!(max_new_tokens, DEFAULT_MAX_NEW_TOKENS);
        assert_eq!(cli.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn test_cli_parse_ask_with_options() {
        let cli = Cli::parse_from([
            "legalease",
            "ask",
            "director duties",
            "--top-k",
            "5",
            "--max-tokens",
            "256",
            "--base-url",
            "http://example.com:9000",
        ]);

        let Commands::Ask {
            query,
            top_k,
            max_new_tokens,
        } = cli.command
        else {
            panic!("expected ask command");
        };
        assert_eq!(query, "director duties");
        assert_eq!(top_k, 5);
        assert_eq!(max_new_tokens, 256);
        assert_eq!(cli.base_url, "http://example.com:9000");
    }

    #[test]
    fn test_cli_parse_example() {
        let cli = Cli::parse_from(["legalease", "example"]);
        assert!(matches!(cli.command, Commands::Example));
    }

    #[test]
    fn test_cli_parse_search() {
        let cli = Cli::parse_from(["legalease", "search", "charges", "-k", "10"]);

        let Commands::Search { query, top_k } = cli.command else {
            panic!("expected search command");
        };
        assert_eq!(query, "charges");
        assert_eq!(top_k, 10);
    }

    #[test]
    fn test_cli_parse_status_and_build() {
        assert!(matches!(
            Cli::parse_from(["legalease", "status"]).command,
            Commands::Status
        ));
        assert!(matches!(
            Cli::parse_from(["legalease", "build"]).command,
            Commands::Build
        ));
    }
}
