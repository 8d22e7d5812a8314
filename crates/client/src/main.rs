//! `stockroom` command-line entry point.

#[cfg(not(target_arch = "wasm32"))]
mod cli {
    use anyhow::{Context, Result};
    use clap::{Parser, Subcommand, ValueEnum};
    use serde::Serialize;

    use stockroom_client::{ApiClient, ClientConfig};
    use stockroom_core::{ProductId, StoreId};
    use stockroom_inventory::filter::select;
    use stockroom_inventory::{NewProduct, StockFilter};

    #[derive(Debug, Clone, Copy, ValueEnum)]
    enum LogFormat {
        Json,
        Pretty,
    }

    #[derive(Debug, Parser)]
    #[command(name = "stockroom")]
    #[command(about = "Inventory client for the Stockroom API")]
    struct Cli {
        /// Base URL of the API (overrides STOCKROOM_API_URL).
        #[arg(long, global = true)]
        api_url: Option<String>,

        /// Store to operate on (overrides STOCKROOM_STORE_ID).
        #[arg(long, global = true)]
        store: Option<StoreId>,

        /// Log output format.
        #[arg(long, global = true, value_enum, default_value_t = LogFormat::Pretty)]
        log_format: LogFormat,

        #[command(subcommand)]
        command: Commands,
    }

    #[derive(Debug, Subcommand)]
    enum Commands {
        /// Print total, low-stock and out-of-stock counts.
        Dashboard,

        /// List products, optionally filtered.
        List {
            /// Status filter: 0 = in stock, 1 = low stock, 2 = out of stock.
            #[arg(long, value_parser = clap::value_parser!(u8).range(0..=2))]
            status: Option<u8>,

            /// Case-insensitive name or SKU search.
            #[arg(long, default_value = "")]
            search: String,
        },

        /// Show one product.
        Show { id: ProductId },

        /// Register a new product.
        Register {
            name: String,

            #[arg(long)]
            stock: u32,

            /// Minimum stock level before the product counts as low stock.
            #[arg(long)]
            min: Option<u32>,
        },

        /// Add stock to a product.
        Restock {
            id: ProductId,

            #[arg(long, default_value_t = 1)]
            quantity: u32,
        },

        /// Remove stock from a product.
        StockOut {
            id: ProductId,

            #[arg(long, default_value_t = 1)]
            quantity: u32,
        },

        /// Check that the API is reachable.
        Ping,
    }

    fn print_json<T: Serialize>(value: &T) -> Result<()> {
        let out = serde_json::to_string_pretty(value).context("failed to encode output")?;
        println!("{out}");
        Ok(())
    }

    pub async fn run() -> Result<()> {
        let cli = Cli::parse();

        match cli.log_format {
            LogFormat::Json => stockroom_observability::init(),
            LogFormat::Pretty => stockroom_observability::init_pretty(),
        }

        let mut config = ClientConfig::from_env().context("invalid STOCKROOM_* environment")?;
        if let Some(url) = cli.api_url {
            config = config.with_api_url(url).context("invalid --api-url")?;
        }
        if let Some(store) = cli.store {
            config = config.with_store_id(store);
        }

        tracing::info!(api_url = %config.api_url, store_id = %config.store_id, "using API");
        let api = ApiClient::new(&config)?;

        match cli.command {
            Commands::Dashboard => print_json(&api.dashboard().await?)?,
            Commands::List { status, search } => {
                let products = api.list_products().await?;
                let filter = status.and_then(StockFilter::from_value);
                print_json(&select(&products, filter, &search))?;
            }
            Commands::Show { id } => print_json(&api.get_product(id).await?)?,
            Commands::Register { name, stock, min } => {
                let mut request = NewProduct::new(name, stock);
                if let Some(level) = min {
                    request = request.with_minimum_stock_level(level);
                }
                print_json(&api.create_product(&request).await?)?;
            }
            Commands::Restock { id, quantity } => {
                print_json(&api.restock(id, quantity).await?)?
            }
            Commands::StockOut { id, quantity } => {
                print_json(&api.stock_out(id, quantity).await?)?
            }
            Commands::Ping => {
                if !api.check_connectivity().await {
                    anyhow::bail!("API at {} is unreachable", api.base_url());
                }
                println!("ok");
            }
        }

        Ok(())
    }
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    cli::run().await
}

#[cfg(target_arch = "wasm32")]
fn main() {}
