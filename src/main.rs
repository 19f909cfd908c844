//! Customer Console
//!
//! A terminal front end for a customer management REST service.

mod client;
mod config;
mod errors;
mod form;
mod models;
mod ui;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use client::HttpCustomerApi;
use config::Config;
use form::CustomerListForm;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Load configuration
    let config = Config::from_env();

    // Initialize logging
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    tracing::info!("Starting Customer Console");
    tracing::info!("API base URL: {}", config.api_url);

    // Build the HTTP collaborator and the form bound to it
    let api = HttpCustomerApi::new(&config)?;
    let mut form = CustomerListForm::new(api);

    // Initial snapshot of the remote collection
    form.load().await?;

    // Hand over to the interactive session
    ui::run(form).await?;

    Ok(())
}
