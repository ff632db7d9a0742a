use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use commands::{
    CartCommand, ConfigCommand, ContactCommand, InfoCommand, MenuCommand, OrderCommand,
    ReserveCommand,
};
use config::Config;
use tavola_core::{CartStore, CatalogReader, DocumentClient, LocalStore, OrderBook};

#[derive(Parser)]
#[command(name = "tavola")]
#[command(version)]
#[command(about = "Restaurant menu, cart, orders and reservations", long_about = None)]
struct Cli {
    /// Path to config file
    #[arg(long, short, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the menu
    Menu(MenuCommand),

    /// Show restaurant profile, hours and offers
    Info(InfoCommand),

    /// Manage the cart
    Cart(CartCommand),

    /// Place and track orders
    Order(OrderCommand),

    /// Request a table reservation
    Reserve(ReserveCommand),

    /// Send a message to the restaurant
    Contact(ContactCommand),

    /// Manage configuration
    Config(ConfigCommand),
}

#[tokio::main]
async fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tavola=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(cli.config)?;
    tracing::debug!(data_dir = %config.data_dir.display(), server_url = %config.server_url, "configuration loaded");

    match cli.command {
        Some(Commands::Menu(cmd)) => {
            let mut reader = catalog_reader(&config);
            cmd.run(&mut reader).await?;
        }
        Some(Commands::Info(cmd)) => {
            let mut reader = catalog_reader(&config);
            cmd.run(&mut reader).await?;
        }
        Some(Commands::Cart(cmd)) => {
            let mut cart = CartStore::load(local_store(&config));
            let mut reader = catalog_reader(&config);
            cmd.run(&mut cart, &mut reader).await?;
        }
        Some(Commands::Order(cmd)) => {
            let store = local_store(&config);
            let mut cart = CartStore::load(store.clone());
            let mut orders = OrderBook::load(store);
            cmd.run(&mut orders, &mut cart)?;
        }
        Some(Commands::Reserve(cmd)) => {
            let client = document_client(&config);
            cmd.run(&client).await?;
        }
        Some(Commands::Contact(cmd)) => {
            let client = document_client(&config);
            cmd.run(&client).await?;
        }
        Some(Commands::Config(cmd)) => {
            cmd.run(&config)?;
        }
        None => {
            println!("Use --help to see available commands");
        }
    }

    Ok(())
}

fn local_store(config: &Config) -> LocalStore {
    LocalStore::new(config.data_dir.clone())
}

fn document_client(config: &Config) -> DocumentClient {
    DocumentClient::new(config.server_url.clone(), config.api_key.clone())
}

fn catalog_reader(config: &Config) -> CatalogReader {
    CatalogReader::new(document_client(config), config.restaurant_doc.clone())
}
