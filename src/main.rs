use datapad::{config::Config, startup};

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    startup::init_tracing();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::connect_to_database(&config).await {
        tracing::error!("Failed to prepare catalog database: {}", e);
        std::process::exit(1);
    }
}
