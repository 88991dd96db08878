//! fd-assistant CLI: ask the assistant, chat interactively, inspect or
//! verify the context store. Config from env and optional `.env`.

use std::io::{BufRead, Write};

use anyhow::Result;
use clap::{Parser, Subcommand};

use assistant::{init_tracing, AssistantConfig, AssistantService};
use context_client::{ContextClient, ContextClientConfig};
use llm_client::{StreamChunk, StreamChunkCallback};
use prompt::ChatMessage;

#[derive(Parser)]
#[command(name = "fd-assistant")]
#[command(about = "Fascinante Digital assistant: ask, chat, context", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Ask a one-shot question (streams when USE_STREAMING=true).
    Ask {
        question: String,
        /// Skip the context freshness check (lower latency, maybe staler facts).
        #[arg(long)]
        quick: bool,
    },
    /// Interactive chat; history lives in-process only. /quit to exit.
    Chat,
    /// Context store operations (stats, refresh, prompt, verify).
    Context {
        #[command(subcommand)]
        command: ContextCommands,
    },
}

#[derive(Subcommand)]
enum ContextCommands {
    /// Show the store's staleness report.
    Stats,
    /// Trigger a corpus rebuild and report the result.
    Refresh,
    /// Print the live system prompt (or report a fetch failure).
    Prompt,
    /// Run the four-endpoint store contract checklist; exits 1 on failure.
    Verify,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Ask { question, quick } => {
            let (service, config) = build_service()?;
            handle_ask(&service, question, quick, config.llm.use_streaming).await
        }
        Commands::Chat => {
            let (service, _config) = build_service()?;
            handle_chat(&service).await
        }
        // Store commands only need the context side of the config; no LLM
        // key required to inspect the store.
        Commands::Context { command } => {
            let config = ContextClientConfig::from_env()?;
            config.validate()?;
            let client = ContextClient::new(config)?;
            handle_context(&client, command).await
        }
    }
}

/// Loads full config, initializes logging, and builds the service.
fn build_service() -> Result<(AssistantService, AssistantConfig)> {
    let config = AssistantConfig::load()?;
    config.validate()?;
    init_tracing(&config.log_file)?;
    let service = AssistantService::from_config(&config)?;
    Ok((service, config))
}

async fn handle_ask(
    service: &AssistantService,
    question: String,
    quick: bool,
    use_streaming: bool,
) -> Result<()> {
    let history = vec![ChatMessage::user(question)];

    if quick {
        let reply = service.answer_quick(history).await?;
        println!("{}", reply);
    } else if use_streaming {
        let mut callback = print_chunk_callback();
        service.answer_stream(history, callback.as_mut()).await?;
        println!();
    } else {
        let reply = service.answer(history).await?;
        println!("{}", reply);
    }
    Ok(())
}

async fn handle_chat(service: &AssistantService) -> Result<()> {
    println!("fd-assistant chat. /quit para salir.");
    let stdin = std::io::stdin();
    let mut history: Vec<ChatMessage> = Vec::new();

    loop {
        print!("you> ");
        std::io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "/quit" || line == "/exit" {
            break;
        }

        history.push(ChatMessage::user(line));
        match service.answer(history.clone()).await {
            Ok(reply) => {
                println!("assistant> {}", reply);
                history.push(ChatMessage::assistant(reply));
            }
            Err(err) => {
                // Keep the session alive on provider hiccups; the failed
                // user turn stays in history for the next attempt.
                eprintln!("error: {}", err);
            }
        }
    }
    Ok(())
}

/// Callback that prints stream deltas to stdout as they arrive.
fn print_chunk_callback() -> Box<StreamChunkCallback> {
    Box::new(|chunk: StreamChunk| {
        Box::pin(async move {
            print!("{}", chunk.content);
            std::io::stdout().flush()?;
            Ok(())
        })
    })
}

async fn handle_context(client: &ContextClient, command: ContextCommands) -> Result<()> {
    match command {
        ContextCommands::Stats => {
            let stats = client.fetch_stats().await?;
            println!("hasData: {}", stats.has_data);
            println!("stale:   {}", stats.stale);
            println!("sources: {}", stats.sources);
        }
        ContextCommands::Refresh => {
            let result = client.refresh().await?;
            println!("ok: {}, size: {} bytes", result.ok, result.size);
        }
        ContextCommands::Prompt => {
            let prompt = client.fetch_prompt().await?;
            println!("{}", prompt);
        }
        ContextCommands::Verify => {
            let report = client.verify_contract().await;
            for check in &report.checks {
                let status = if check.passed { "PASS" } else { "FAIL" };
                println!("{:4} {:9} {}", status, check.name, check.detail);
            }
            if !report.all_passed() {
                std::process::exit(1);
            }
        }
    }
    Ok(())
}
