//! MediaQ CLI - command-line player client
//!
//! Reads and pops a queue over the HTTP API, and derives queue ids locally.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use mediaq_core::application::IdentityDeriver;
use mediaq_sdk::{MediaqClient, QueueEntry, SdkError};
use tabled::{Table, Tabled};

const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

#[derive(Parser)]
#[command(name = "mediaq")]
#[command(about = "MediaQ queue client", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Server URL
    #[arg(long, env = "MEDIAQ_SERVER_URL", default_value = DEFAULT_SERVER_URL, global = true)]
    server: String,

    /// Queue id, as shown by the bot's /start (quote it, it has spaces)
    #[arg(short, long, env = "MEDIAQ_QUEUE_ID", global = true)]
    queue: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the head entry
    Current,

    /// Show the entry after the head
    Next,

    /// List the first entries of the queue
    List,

    /// Pop the head entry; fails unless ENTRY_ID is at the head
    Pop {
        /// Entry ID
        entry_id: String,
    },

    /// Print the head URL and pop it
    Consume,

    /// Compute the queue id for a chat without contacting the server
    Derive {
        /// Raw chat id
        #[arg(allow_hyphen_values = true)]
        chat_id: String,

        /// Pepper the server was started with
        #[arg(long, env = "MEDIAQ_PEPPER", hide_env_values = true)]
        pepper: Option<String>,
    },
}

#[derive(Tabled)]
struct EntryRow {
    #[tabled(rename = "#")]
    position: usize,
    id: String,
    url: String,
}

fn print_entry(label: &str, entry: Option<QueueEntry>) {
    match entry {
        Some(entry) => {
            println!("{} {}", label.bold(), entry.url);
            println!("  {} {}", "id:".dimmed(), entry.id);
        }
        None => println!("{}", "Queue slot is empty".yellow()),
    }
}

fn session(server: &str, queue: Option<String>) -> Result<(MediaqClient, String)> {
    let queue = queue.context("No queue id given (use --queue or MEDIAQ_QUEUE_ID)")?;
    let client = MediaqClient::connect(server).context("Invalid server URL")?;
    Ok((client, queue))
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Current => {
            let (client, queue) = session(&cli.server, cli.queue)?;
            print_entry("Current:", client.current(&queue).await?);
        }

        Commands::Next => {
            let (client, queue) = session(&cli.server, cli.queue)?;
            print_entry("Next:", client.next(&queue).await?);
        }

        Commands::List => {
            let (client, queue) = session(&cli.server, cli.queue)?;
            let entries = client.list(&queue).await?;
            if entries.is_empty() {
                println!("{}", "Queue is empty".yellow());
            } else {
                let rows: Vec<EntryRow> = entries
                    .into_iter()
                    .enumerate()
                    .map(|(position, e)| EntryRow {
                        position,
                        id: e.id,
                        url: e.url,
                    })
                    .collect();
                println!("{}", Table::new(rows));
            }
        }

        Commands::Pop { entry_id } => {
            let (client, queue) = session(&cli.server, cli.queue)?;
            let popped = client.pop(&queue, &entry_id).await?;
            println!("{}", format!("✓ Popped {}", popped.url).green().bold());
        }

        Commands::Consume => {
            let (client, queue) = session(&cli.server, cli.queue)?;
            let Some(head) = client.current(&queue).await? else {
                println!("{}", "Queue is empty".yellow());
                return Ok(());
            };
            println!("{}", head.url);

            match client.pop(&queue, &head.id).await {
                Ok(_) => {}
                // Someone else consumed it first
                Err(SdkError::EntryNotFound(_)) | Err(SdkError::QueueEmpty(_)) => {
                    eprintln!("{}", "Entry was already popped".yellow());
                }
                Err(e) => return Err(e.into()),
            }
        }

        Commands::Derive { chat_id, pepper } => {
            let deriver = IdentityDeriver::new(pepper);
            if !deriver.has_pepper() {
                eprintln!("{}", "No pepper given; this id is guessable".yellow());
            }
            println!("{}", deriver.derive(chat_id));
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_flags_after_subcommand() {
        let cli = Cli::try_parse_from([
            "mediaq",
            "list",
            "--server",
            "http://media.local:9000",
            "--queue",
            "Ada Grace Hopper-Lovelace",
        ])
        .unwrap();

        assert!(matches!(cli.command, Commands::List));
        assert_eq!(cli.server, "http://media.local:9000");
        assert_eq!(cli.queue.as_deref(), Some("Ada Grace Hopper-Lovelace"));
    }

    #[test]
    fn test_connection_flags_before_subcommand() {
        let cli = Cli::try_parse_from([
            "mediaq",
            "--server",
            "http://media.local:9000",
            "pop",
            "some-id",
        ])
        .unwrap();

        assert_eq!(cli.server, "http://media.local:9000");
        assert!(matches!(cli.command, Commands::Pop { ref entry_id } if entry_id == "some-id"));
    }
}
