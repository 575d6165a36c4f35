mod browse;
mod show;

use clap::{Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "shopfront-cli")]
#[command(about = "Shopfront catalog command line interface")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Print one page of the product listing
    Browse {
        /// 1-indexed page to show (out-of-range values are clamped)
        #[arg(long, default_value_t = 1)]
        page: usize,
    },
    /// Print the detail view for a product slug
    Show {
        /// URL-safe product identifier, e.g. `gradient-graphic-t-shirt`
        slug: String,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt::init();

    let config = shopfront_core::load_app_config()?;

    let cli = Cli::parse();
    match cli.command {
        Commands::Browse { page } => browse::run(&config, page).await,
        Commands::Show { slug } => show::run(&config, &slug).await,
    }
}
