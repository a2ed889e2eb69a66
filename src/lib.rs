//! Fetches the BLS "Industries at a Glance" pages and parses each one into a
//! [`Document`] so the series tables can be pulled out later.

mod error;
mod macros;
mod parse;
pub mod process;
mod request;

pub use error::{Error, Result};
pub use parse::Document;
pub use request::{fetch, PageResponse};

pub const BLS_BASE_URL: &str = "https://www.bls.gov";

/// The pages scraped on every run, in request order.
pub const INDUSTRY_PAGES: [IndustryPage; 4] = [
    IndustryPage::new("retail trade", "44-45"),
    IndustryPage::new("wholesale trade", "42"),
    IndustryPage::new("manufacturing", "31-33"),
    IndustryPage::new("finance", "50"),
];

/// An industry sector page, identified by its industry code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IndustryPage {
    pub name: &'static str,
    pub code: &'static str,
}

impl IndustryPage {
    pub const fn new(name: &'static str, code: &'static str) -> Self {
        Self { name, code }
    }

    /// Path of the page on the host, e.g. `/iag/tgs/iag42.htm`.
    pub fn path(&self) -> String {
        format!("/iag/tgs/iag{}.htm", self.code)
    }

    /// Full page URL on `base_url`. A trailing slash on the base is ignored.
    pub fn url_on(&self, base_url: &str) -> String {
        format!("{}{}", base_url.trim_end_matches('/'), self.path())
    }

    pub fn url(&self) -> String {
        self.url_on(BLS_BASE_URL)
    }
}
