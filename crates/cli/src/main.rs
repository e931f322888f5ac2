//! Autoparts CLI - storefront operations from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Seed the demo catalog
//! autoparts catalog seed
//!
//! # Browse products
//! autoparts catalog list
//!
//! # Guest cart operations (no --user flag)
//! autoparts cart add 3 --quantity 2
//! autoparts cart show
//!
//! # Sign-in hand-off: merge the guest cart into user 7's cart
//! autoparts --user 7 cart migrate
//!
//! # Checkout and order history
//! autoparts --user 7 order checkout --recipient "Juan Perez" --phone 987654321 \
//!     --street "Av. Industrial" --number 123 --district Miraflores
//! autoparts --user 7 order list
//! ```
//!
//! State lives under `AUTOPARTS_DATA_DIR` (default `./data`), one JSON file
//! per blob, mirroring the browser storage the storefront uses.

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use autoparts_core::{OrderStatus, PaymentMethod, ShippingMethod, UserId};

mod catalog;
mod commands;

use commands::CliError;

#[derive(Parser)]
#[command(name = "autoparts")]
#[command(author, version, about = "Autoparts storefront CLI")]
struct Cli {
    /// Authenticated user id; omit to act as the guest identity
    #[arg(long, global = true)]
    user: Option<i32>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse and seed the product catalog
    Catalog {
        #[command(subcommand)]
        action: CatalogAction,
    },
    /// Shopping cart operations
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Checkout and order history
    Order {
        #[command(subcommand)]
        action: OrderAction,
    },
}

#[derive(Subcommand)]
enum CatalogAction {
    /// Write the demo product catalog
    Seed,
    /// List catalog products
    List,
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart with its totals
    Show,
    /// Add a product to the cart
    Add {
        /// Catalog product id
        product_id: i32,

        /// Units to add
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a cart item (0 removes it)
    Update {
        /// Catalog product id
        product_id: i32,

        /// New quantity
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Catalog product id
        product_id: i32,
    },
    /// Delete the cart entirely
    Clear,
    /// Merge the guest cart into the signed-in user's cart
    Migrate,
}

#[derive(Subcommand)]
enum OrderAction {
    /// Turn the signed-in user's cart into an order
    Checkout {
        /// Recipient name
        #[arg(long)]
        recipient: String,

        /// Contact phone
        #[arg(long)]
        phone: String,

        /// Street name
        #[arg(long)]
        street: String,

        /// Street number
        #[arg(long)]
        number: String,

        /// Optional address reference
        #[arg(long)]
        reference: Option<String>,

        /// District (drives the shipping surcharge)
        #[arg(long)]
        district: String,

        /// Shipping method (`standard`, `express`, `store_pickup`)
        #[arg(long, default_value = "standard")]
        shipping: ShippingMethod,

        /// Payment method (`card`, `cash`, `bank_transfer`)
        #[arg(long, default_value = "card")]
        payment: PaymentMethod,
    },
    /// List the user's orders
    List,
    /// Show one order by reference
    Show {
        /// Order reference (`ORD-…`)
        order_ref: String,
    },
    /// Transition an order's status
    SetStatus {
        /// Order reference (`ORD-…`)
        order_ref: String,

        /// New status (`pending`, `processing`, `shipped`, `delivered`, `cancelled`)
        status: OrderStatus,
    },
}

/// Resolve the store directory from `AUTOPARTS_DATA_DIR`.
fn data_dir() -> PathBuf {
    std::env::var_os("AUTOPARTS_DATA_DIR")
        .map_or_else(|| PathBuf::from("./data"), PathBuf::from)
}

fn main() {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let store = autoparts_cart::JsonFileStore::open(data_dir())?;
    let user = cli.user.map(UserId::new);

    match cli.command {
        Commands::Catalog { action } => match action {
            CatalogAction::Seed => commands::catalog::seed(&store)?,
            CatalogAction::List => commands::catalog::list(&store)?,
        },
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&store, user)?,
            CartAction::Add {
                product_id,
                quantity,
            } => commands::cart::add(&store, user, product_id, quantity)?,
            CartAction::Update {
                product_id,
                quantity,
            } => commands::cart::update(&store, user, product_id, quantity)?,
            CartAction::Remove { product_id } => {
                commands::cart::remove(&store, user, product_id)?;
            }
            CartAction::Clear => commands::cart::clear(&store, user)?,
            CartAction::Migrate => commands::cart::migrate(&store, user)?,
        },
        Commands::Order { action } => match action {
            OrderAction::Checkout {
                recipient,
                phone,
                street,
                number,
                reference,
                district,
                shipping,
                payment,
            } => {
                let address = autoparts_orders::ShippingAddress {
                    recipient_name: recipient,
                    phone,
                    street,
                    number,
                    reference,
                    district,
                };
                commands::order::checkout(&store, user, address, shipping, payment)?;
            }
            OrderAction::List => commands::order::list(&store, user)?,
            OrderAction::Show { order_ref } => commands::order::show(&store, user, &order_ref)?,
            OrderAction::SetStatus { order_ref, status } => {
                commands::order::set_status(&store, user, &order_ref, status)?;
            }
        },
    }
    Ok(())
}
