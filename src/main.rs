use std::env;

use config::{Config, Environment, File};
use dotenvy::dotenv;

use client_registry::models::config::ServerConfig;

fn load_config() -> Result<ServerConfig, config::ConfigError> {
    let app_env = env::var("APP_ENV").unwrap_or_else(|_| "local".to_string());

    Config::builder()
        .add_source(File::with_name("config/default"))
        .add_source(File::with_name(&format!("config/{app_env}")).required(false))
        .add_source(Environment::with_prefix("APP"))
        .build()?
        .try_deserialize()
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Missing .env is fine, the variables may come from the environment.
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let server_config = load_config().map_err(|e| {
        log::error!("Failed to load configuration: {e}");
        std::io::Error::other(format!("Failed to load configuration: {e}"))
    })?;

    client_registry::run(server_config).await
}
