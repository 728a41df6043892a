use std::io;
use std::sync::Arc;

use clap::Parser;
use vk_link::application::services::LinkService;
use vk_link::cli::{self, Cli};
use vk_link::config;
use vk_link::logging;
use vk_link::infrastructure::http::ReqwestTransport;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let config = match config::load_from_env() {
        Ok(config) => config,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };

    logging::init(&config)?;
    config.print_summary();

    if let Err(e) = config.credential() {
        println!("{e}");
        return Ok(());
    }

    let cli = Cli::parse();

    let transport = match ReqwestTransport::from_config(&config) {
        Ok(transport) => transport,
        Err(e) => {
            println!("{e}");
            return Ok(());
        }
    };
    let service = LinkService::new(Arc::new(transport), config.api_settings());

    cli::run(&service, &config, &cli.url, &mut io::stdout().lock()).await?;

    Ok(())
}
