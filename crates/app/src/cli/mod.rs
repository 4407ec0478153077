use clap::{Parser, Subcommand};
use storefront_app::{config::LoggingConfig, observability};

mod auth;
mod catalog;
mod checkout;
mod landing;
mod profile;

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront CLI", long_about = None)]
pub(crate) struct Cli {
    #[command(flatten)]
    logging: LoggingConfig,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// List a catalog, optionally filtered by category
    Catalog(catalog::CatalogArgs),

    /// Fill a cart, check out and print the order
    Checkout(checkout::CheckoutArgs),

    /// Sample the landing page scroll animation
    Landing(landing::LandingArgs),

    /// Submit an authentication form
    Auth(auth::AuthCommand),

    /// Fetch and print the signed-in profile, optionally signing in first
    Profile(profile::ProfileArgs),
}

impl Cli {
    pub(crate) async fn run(self) -> Result<(), String> {
        observability::init(&self.logging)
            .map_err(|error| format!("failed to initialise logging: {error}"))?;

        match self.command {
            Commands::Catalog(args) => catalog::run(&args),
            Commands::Checkout(args) => checkout::run(args),
            Commands::Landing(args) => landing::run(&args),
            Commands::Auth(command) => auth::run(command).await,
            Commands::Profile(args) => profile::run(args).await,
        }
    }
}
