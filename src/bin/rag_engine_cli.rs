//! RAG Engine CLI：索引列表、检索问答、对话补全的命令行工具
//!
//! Usage:
//!   rag-engine-cli indexes                    List indexes
//!   rag-engine-cli query <index> <text>       Query an index
//!   rag-engine-cli chat <text> [index]        Chat completion, optionally over an index

use rag_engine_client::{ChatOptions, ClientBuilder, RagClient};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

const DEFAULT_BASE_URL: &str = "http://localhost:5000";

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "indexes" => cmd_indexes().await,
        "query" => cmd_query(&args[2..]).await,
        "chat" => cmd_chat(&args[2..]).await,
        "version" | "--version" | "-V" => {
            println!("rag-engine-cli {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"rag-engine-cli: RAG Engine 命令行工具

USAGE:
    rag-engine-cli <COMMAND> [ARGS]

COMMANDS:
    indexes                     List all indexes
    query <index> <text>        Query an index and print the answer with sources
    chat <text> [index]         Chat completion, retrieving from <index> when given
    version                     Show version information
    help                        Show this help message

ENVIRONMENT:
    RAG_ENGINE_BASE_URL         Engine base URL (default {DEFAULT_BASE_URL})
    RAG_ENGINE_TOKEN            Bearer token sent on every request
    RAG_ENGINE_TIMEOUT_SECS     Request timeout in seconds
    RAG_ENGINE_MODEL            Model name for chat completions
    RUST_LOG                    Log filter, e.g. rag_engine_client=debug"#
    );
}

fn connect() -> rag_engine_client::Result<RagClient> {
    let mut builder = ClientBuilder::from_env();
    if std::env::var("RAG_ENGINE_BASE_URL").is_err() {
        builder = builder.base_url(DEFAULT_BASE_URL);
    }
    let model = std::env::var("RAG_ENGINE_MODEL").unwrap_or_default();
    Ok(RagClient::from_client(builder.build()?, model))
}

fn print_json<T: Serialize>(value: &T) -> rag_engine_client::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn require<'a>(args: &'a [String], index: usize, name: &str) -> &'a str {
    match args.get(index) {
        Some(arg) => arg.as_str(),
        None => {
            eprintln!("Missing argument: <{name}>");
            std::process::exit(1);
        }
    }
}

async fn cmd_indexes() -> rag_engine_client::Result<()> {
    let rag = connect()?;
    print_json(&rag.list_indexes().await?)
}

async fn cmd_query(args: &[String]) -> rag_engine_client::Result<()> {
    let index = require(args, 0, "index");
    let text = require(args, 1, "text");
    let rag = connect()?;
    let response = rag.query(index, text, 0.7, -1, 5).await?;
    print_json(&response)
}

async fn cmd_chat(args: &[String]) -> rag_engine_client::Result<()> {
    let text = require(args, 0, "text");
    let rag = connect()?;
    if rag.model_name().is_empty() {
        eprintln!("Error: set RAG_ENGINE_MODEL to the model served by the engine.");
        std::process::exit(1);
    }
    let mut options = ChatOptions::new();
    if let Some(index) = args.get(1) {
        options = options.index(index.clone());
    }
    let response = rag.chat(text, options).await?;
    print_json(&response)
}
