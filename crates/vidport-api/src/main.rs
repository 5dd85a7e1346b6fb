use vidport_api::setup;
use vidport_core::Config;

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    setup::init_tracing();

    // Load configuration
    let config = Config::from_env()?;

    // Initialize the application (data file, state, routes)
    let (_state, router) = setup::initialize_app(config.clone()).await?;

    // Start the server
    setup::server::start_server(&config, router).await?;

    Ok(())
}
