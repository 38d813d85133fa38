use std::sync::Arc;

use usergate::server::{
    config::Config, model::app::App, startup, token::StaticAccessToken,
};

/// Profile used when `APP_PROFILE` is not set.
static DEFAULT_PROFILE: &str = "development";

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let profile = std::env::var("APP_PROFILE").unwrap_or_else(|_| DEFAULT_PROFILE.to_string());
    let config = match Config::load(&profile) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    startup::init_tracing(&config);

    let access_token = match StaticAccessToken::from_env() {
        Ok(provider) => provider,
        Err(e) => {
            tracing::error!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let mut app = App::new(Arc::new(config));
    app.set_access_token(Arc::new(access_token));

    if let Err(e) = startup::serve(&app).await {
        tracing::error!("Server error: {}", e);
        std::process::exit(1);
    }
}
