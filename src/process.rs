use chrono::Local;
use reqwest::Client;

use crate::parse::Document;
use crate::request::{fetch, PageResponse};
use crate::{info_time, IndustryPage, Result, BLS_BASE_URL, INDUSTRY_PAGES};

/// One industry page after fetching and parsing.
#[derive(Debug, Clone)]
pub struct ScrapedPage {
    pub page: IndustryPage,
    pub response: PageResponse,
    pub document: Document,
}

/// Fetches and parses every page in [`INDUSTRY_PAGES`] from the live BLS site.
pub async fn process_site() -> Result<Vec<ScrapedPage>> {
    let client = reqwest::Client::new();
    process_pages(&client, BLS_BASE_URL, &INDUSTRY_PAGES).await
}

/// Fetches each page from `base_url` and parses it, one page at a time and in order.
/// The first request failure aborts the run.
pub async fn process_pages(
    client: &Client,
    base_url: &str,
    pages: &[IndustryPage],
) -> Result<Vec<ScrapedPage>> {
    let start_time = Local::now();
    info_time!("Started scraping {} pages", pages.len());

    let mut scraped = Vec::with_capacity(pages.len());
    for page in pages {
        let page_time = Local::now();

        let response = fetch(client, &page.url_on(base_url)).await?;
        let document = Document::parse(&response.body);
        info_time!(
            page_time,
            "Processed {} ({} elements)",
            page.name,
            document.element_count()
        );

        scraped.push(ScrapedPage {
            page: *page,
            response,
            document,
        });
    }

    info_time!(start_time, "Finished PROCESSING ALL pages.");
    Ok(scraped)
}
