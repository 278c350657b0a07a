use std::sync::Arc;

use academy_ai::{config::AiConfig, GeminiClient};
use academy_api::{config::ApiConfig, ApiState};
use academy_store::{select_store, SessionCache};
use color_eyre::eyre::Result;
use dotenv::dotenv;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize error handling
    color_eyre::install()?;

    // Load environment variables
    dotenv().ok();

    // Load configuration
    let config = ApiConfig::from_env()?;

    // Select the backing store once, from the presence of remote config
    let store = select_store(config.remote.clone(), &config.data_dir);

    // Session cache lives next to the local collections
    let session = SessionCache::new(&config.data_dir);

    // AI tools are optional; without a key the endpoints answer 503
    let ai = AiConfig::from_env()
        .ok()
        .map(|ai_config| Arc::new(GeminiClient::new(ai_config)));

    let state = Arc::new(ApiState { store, session, ai });

    // Start API server
    academy_api::start_server(config, state).await?;

    Ok(())
}
