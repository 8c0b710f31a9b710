mod actions;
mod render;

use clap::{Parser, Subcommand};
use storefront_catalog::CatalogClient;
use storefront_core::{CatalogQuery, Session};
use tracing_subscriber::EnvFilter;

use crate::actions::{BrowseArgs, CartArgs};

#[derive(Debug, Parser)]
#[command(name = "storefront")]
#[command(about = "Browse the storefront catalog from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the colors, sizes, price ranges and dates available for filtering
    Facets,
    /// Show the product shelf after sorting, filtering and paging
    Browse(BrowseArgs),
    /// Add and remove products, then show the minicart
    Cart(CartArgs),
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = storefront_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    tracing::debug!(env = %config.env, catalog = %config.catalog_base_url, "starting storefront");

    let client = CatalogClient::new(config.request_timeout_secs, &config.user_agent)?;
    let catalog = match client.fetch_products(&config.catalog_base_url).await {
        Ok(products) => products,
        Err(e) => {
            println!("{}", e.user_message());
            return Err(e.into());
        }
    };

    let mut session = Session::new(CatalogQuery::with_items_to_show(
        catalog,
        config.initial_items_to_show,
    ));

    let output = match cli.command {
        Some(Commands::Facets) => render::render_facets(&session.query().facets()),
        Some(Commands::Browse(args)) => {
            actions::run(&mut session, args.into_actions());
            render::render_shelf(&session.view())
        }
        Some(Commands::Cart(args)) => {
            actions::run(&mut session, args.into_actions());
            render::render_cart(session.cart())
        }
        None => render::render_shelf(&session.view()),
    };
    print!("{output}");

    Ok(())
}

#[cfg(test)]
mod tests;
