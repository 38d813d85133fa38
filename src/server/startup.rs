use tokio::net::TcpListener;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::server::{config::Config, error::Error, model::app::App};

/// Filter used when neither `RUST_LOG` nor the config provides one.
static DEFAULT_LOG_FILTER: &str = "usergate=info";

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the `log` directive of the configuration.
pub fn init_tracing(config: &Config) {
    let fallback = config.log.as_deref().unwrap_or(DEFAULT_LOG_FILTER).to_string();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| fallback.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Bind the configured address and serve the application until the process exits.
pub async fn serve(app: &App) -> Result<(), Error> {
    let router = app.router()?;
    let listener = TcpListener::bind(app.config().bind_address()).await?;

    tracing::info!(
        address = %listener.local_addr()?,
        profile = %app.config().profile,
        "Starting server"
    );

    axum::serve(listener, router).await?;

    Ok(())
}
