use chrono::Local;
use iag_scrap::{info_time, process::process_site, Result};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder().with_env_filter(env).init();

    let start_time = Local::now();
    let pages = process_site().await?;
    for scraped in &pages {
        info_time!(
            "{:<16} | {} | {:>5} elements | {}",
            scraped.page.name,
            scraped.response.status,
            scraped.document.element_count(),
            scraped.document.title().unwrap_or_default()
        );
    }
    info_time!(start_time, "Full program time:");

    Ok(())
}
