use std::time::Duration;

use reqwest::Client;

use crate::model::ScraperError;

/// Job boards serve different markup to obvious bots; use a browser UA.
const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) \
     AppleWebKit/537.36 (KHTML, like Gecko) Chrome/122.0.0.0 Safari/537.36";

/// Shared HTTP client for all collectors.
pub struct Fetcher {
    client: Client,
}

impl Fetcher {
    pub fn new() -> Result<Self, ScraperError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(Duration::from_secs(20))
            .build()?;
        Ok(Self { client })
    }

    pub async fn get_text(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header("Accept-Language", "en-US,en;q=0.9")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::BadStatus { status, url: url.to_string() });
        }
        Ok(response.text().await?)
    }

    pub async fn get_json_text(&self, url: &str) -> Result<String, ScraperError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;
        let status = response.status();
        if !status.is_success() {
            return Err(ScraperError::BadStatus { status, url: url.to_string() });
        }
        Ok(response.text().await?)
    }
}
