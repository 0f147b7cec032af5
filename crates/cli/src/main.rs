//! KrishiBazaar CLI - Seeding and management tools.
//!
//! # Usage
//!
//! ```bash
//! # Seed missing collections in the data directory
//! kb-cli seed
//!
//! # Create a user account
//! kb-cli user create -e ramu@example.com -n "Ramu" -r farmer -p pass123
//!
//! # List products, with the same filters the API accepts
//! kb-cli products list --type fertilizer --search urea
//!
//! # List orders containing a merchant's items
//! kb-cli orders list --merchant m1
//! ```
//!
//! # Commands
//!
//! - `seed` - Seed missing collections with the demo data set
//! - `user create` - Create user accounts
//! - `products list` - Inspect the catalog
//! - `orders list` - Inspect a merchant's orders

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "kb-cli")]
#[command(author, version, about = "KrishiBazaar CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Seed missing collections with the demo data set
    Seed,
    /// Manage user accounts
    User {
        #[command(subcommand)]
        action: UserAction,
    },
    /// Inspect the product catalog
    Products {
        #[command(subcommand)]
        action: ProductsAction,
    },
    /// Inspect orders
    Orders {
        #[command(subcommand)]
        action: OrdersAction,
    },
}

#[derive(Subcommand)]
enum UserAction {
    /// Create a new account
    Create {
        /// Email address
        #[arg(short, long)]
        email: String,

        /// Display name
        #[arg(short, long)]
        name: String,

        /// Role (`farmer`, `merchant`)
        #[arg(short, long, default_value = "farmer")]
        role: String,

        /// Password, stored as given
        #[arg(short, long)]
        password: String,
    },
}

#[derive(Subcommand)]
enum ProductsAction {
    /// List products, promoted first
    List {
        /// Filter by product type (`fertilizer`, `pesticide`, `herbicide`)
        #[arg(long = "type")]
        kind: Option<String>,

        /// Case-insensitive name search
        #[arg(long)]
        search: Option<String>,

        /// Only products listed by this merchant
        #[arg(long)]
        merchant: Option<String>,
    },
}

#[derive(Subcommand)]
enum OrdersAction {
    /// List orders containing a merchant's items
    List {
        /// Merchant id to match against order items
        #[arg(long)]
        merchant: String,
    },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Seed => commands::seed::run().await?,
        Commands::User { action } => match action {
            UserAction::Create {
                email,
                name,
                role,
                password,
            } => {
                commands::user::create(&email, &name, &role, &password).await?;
            }
        },
        Commands::Products { action } => match action {
            ProductsAction::List {
                kind,
                search,
                merchant,
            } => {
                commands::products::list(kind.as_deref(), search.as_deref(), merchant.as_deref())
                    .await?;
            }
        },
        Commands::Orders { action } => match action {
            OrdersAction::List { merchant } => commands::orders::list(&merchant).await?,
        },
    }
    Ok(())
}
