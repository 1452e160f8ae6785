use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::LevelFilter;
use std::path::PathBuf;

use crate::application::{catalog, ExpenseService};
use crate::domain::PaymentMethod;

/// Expenses Tracker - CSV expense ledger for LLM agents
#[derive(Parser)]
#[command(name = "expenses-tracker")]
#[command(about = "Read and record personal expenses in a CSV ledger")]
#[command(version)]
pub struct Cli {
    /// Ledger file path
    #[arg(short, long, env = "EXPENSES_FILE", default_value = "expenses.csv")]
    pub ledger: PathBuf,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Show every recorded expense
    Expenses,

    /// Record a new expense
    Add {
        /// Date of the expense (YYYY-MM-DD)
        date: String,

        /// Amount spent (e.g., "42.50")
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Category (e.g., "Food", "Transport")
        #[arg(short, long)]
        category: String,

        /// What the money was spent on
        #[arg(short, long)]
        description: String,

        /// Payment method: amex, visa, cash
        #[arg(short, long)]
        payment: PaymentMethod,
    },

    /// Print the instructions an agent would receive to record an expense
    Prompt {
        /// Date of the expense
        date: String,

        /// Amount spent
        #[arg(allow_negative_numbers = true)]
        amount: f64,

        /// Category
        #[arg(short, long)]
        category: String,

        /// Description
        #[arg(short, long)]
        description: String,

        /// Payment method (free text)
        #[arg(short, long)]
        payment: String,
    },

    /// List the exposed resources, tools and prompts as JSON
    Catalog,

    /// Call a tool by name with JSON arguments
    Call {
        /// Tool name (e.g., "add_expense")
        name: String,

        /// JSON object with the tool arguments
        #[arg(default_value = "{}")]
        arguments: String,
    },

    /// Read a resource by URI
    Read {
        /// Resource URI (e.g., "resource://expenses")
        uri: String,
    },
}

impl Cli {
    /// Install the process-wide log sink. `RUST_LOG` takes precedence over
    /// the default `info` level; `--verbose` raises it to `debug`.
    pub fn init_logging(&self) {
        let mut builder = pretty_env_logger::formatted_timed_builder();
        match std::env::var("RUST_LOG") {
            Ok(filters) => {
                builder.parse_filters(&filters);
            }
            Err(_) => {
                builder.filter_level(LevelFilter::Info);
            }
        }
        if self.verbose {
            builder.filter_level(LevelFilter::Debug);
        }
        // A logger may already be installed when embedded in another process
        let _ = builder.try_init();
    }

    pub async fn run(self) -> Result<()> {
        log::debug!("Using ledger: {}", self.ledger.display());
        let service = ExpenseService::open(&self.ledger);

        match self.command {
            Commands::Expenses => {
                print_result(&service.get_expenses_data().await);
            }

            Commands::Add {
                date,
                amount,
                category,
                description,
                payment,
            } => {
                let message = service
                    .add_expense(&date, amount, &category, &description, payment)
                    .await;
                println!("{}", message);
            }

            Commands::Prompt {
                date,
                amount,
                category,
                description,
                payment,
            } => {
                println!(
                    "{}",
                    service.create_expense_prompt(&date, amount, &category, &description, &payment)
                );
            }

            Commands::Catalog => {
                let json = serde_json::to_string_pretty(&catalog())
                    .context("Failed to serialize catalog")?;
                println!("{}", json);
            }

            Commands::Call { name, arguments } => {
                let arguments: serde_json::Value = serde_json::from_str(&arguments)
                    .with_context(|| format!("Arguments for '{}' are not valid JSON", name))?;
                println!("{}", service.call_tool(&name, arguments).await);
            }

            Commands::Read { uri } => {
                print_result(&service.read_resource(&uri).await);
            }
        }

        Ok(())
    }
}

fn print_result(text: &str) {
    if text.ends_with('\n') {
        print!("{}", text);
    } else {
        println!("{}", text);
    }
}
