use crate::model::{Posting, ScraperError};

use super::fetcher::Fetcher;

/// One posting source: fetches its pages and yields parsed postings.
#[async_trait::async_trait]
pub trait Collector: Send + Sync {
    fn name(&self) -> &str;
    async fn collect(&self, fetcher: &Fetcher) -> Result<Vec<Posting>, ScraperError>;
}
