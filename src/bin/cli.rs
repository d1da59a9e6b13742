// src/bin/cli.rs
#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    lotto_scrape::cli::run().await
}
