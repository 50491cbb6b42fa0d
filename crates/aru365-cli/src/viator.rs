//! Raw Viator Partner API inspection.

use aru365_core::AppConfig;
use aru365_viator::ViatorClient;
use clap::Subcommand;

/// Sub-commands available under `viator`.
#[derive(Debug, Subcommand)]
pub enum ViatorCommands {
    /// POST /products/bulk for the given product codes
    Bulk {
        #[arg(required = true)]
        codes: Vec<String>,
    },
    /// GET /products/{code}
    Product { code: String },
}

pub(crate) async fn run_viator(config: &AppConfig, command: ViatorCommands) -> anyhow::Result<()> {
    let Some(api_key) = config.viator_api_key.as_deref() else {
        anyhow::bail!("VIATOR_API_KEY is not set; raw Viator commands need a key");
    };
    let client = ViatorClient::new(
        api_key,
        &config.viator_api_base_url,
        config.viator_request_timeout_secs,
    )?;

    let body = match command {
        ViatorCommands::Bulk { codes } => {
            tracing::info!(count = codes.len(), "fetching bulk products");
            client.bulk_products_raw(&codes).await?
        }
        ViatorCommands::Product { code } => {
            tracing::info!(product_code = %code, "fetching product");
            let Some(body) = client.product_raw(&code).await? else {
                anyhow::bail!("product {code} not found");
            };
            body
        }
    };

    println!("{}", serde_json::to_string_pretty(&body)?);
    Ok(())
}
