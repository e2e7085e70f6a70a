// Collector implementations, one per source class.
use tracing::warn;

use crate::model::{Posting, ScraperError};
use crate::parser;

use super::fetcher::Fetcher;
use super::traits::Collector;

/// Cheap substring check used by API sources before classification; the
/// eligibility engine makes the real call later.
fn internship_hint(title: &str, text: &str) -> bool {
    let combined = format!("{title} {text}").to_lowercase();
    ["intern", "trainee", "apprentice"]
        .iter()
        .any(|w| combined.contains(w))
}

/// Internshala category listing pages (HTML).
pub struct InternshalaCollector {
    categories: Vec<String>,
}

impl InternshalaCollector {
    pub fn new() -> Self {
        Self {
            categories: ["software-development", "web-development", "computer-science"]
                .map(String::from)
                .to_vec(),
        }
    }
}

#[async_trait::async_trait]
impl Collector for InternshalaCollector {
    fn name(&self) -> &str {
        "Internshala"
    }

    async fn collect(&self, fetcher: &Fetcher) -> Result<Vec<Posting>, ScraperError> {
        let mut postings = Vec::new();
        for category in &self.categories {
            let url = format!("https://internshala.com/internships/{category}-internship/");
            let html = match fetcher.get_text(&url).await {
                Ok(html) => html,
                Err(e) => {
                    warn!("Internshala fetch failed [{category}]: {e}");
                    continue;
                }
            };
            match parser::internshala::parse(&html) {
                Ok(parsed) => postings.extend(parsed),
                Err(e) => warn!("Internshala parse failed [{category}]: {e}"),
            }
        }
        Ok(postings)
    }
}

/// Greenhouse board API (JSON).
pub struct GreenhouseCollector {
    company: String,
    url: String,
}

impl GreenhouseCollector {
    pub fn new(company: &str, url: &str) -> Self {
        Self { company: company.to_string(), url: url.to_string() }
    }
}

#[async_trait::async_trait]
impl Collector for GreenhouseCollector {
    fn name(&self) -> &str {
        &self.company
    }

    async fn collect(&self, fetcher: &Fetcher) -> Result<Vec<Posting>, ScraperError> {
        let json = fetcher.get_json_text(&self.url).await?;
        let postings = match parser::greenhouse::parse(&self.company, &json) {
            Ok(postings) => postings,
            Err(e) => {
                warn!("Greenhouse parse failed [{}]: {e}", self.company);
                Vec::new()
            }
        };
        Ok(postings
            .into_iter()
            .filter(|p| internship_hint(&p.title, &p.description))
            .collect())
    }
}

/// Lever postings API (JSON).
pub struct LeverCollector {
    company: String,
    url: String,
}

impl LeverCollector {
    pub fn new(company: &str, url: &str) -> Self {
        Self { company: company.to_string(), url: url.to_string() }
    }
}

#[async_trait::async_trait]
impl Collector for LeverCollector {
    fn name(&self) -> &str {
        &self.company
    }

    async fn collect(&self, fetcher: &Fetcher) -> Result<Vec<Posting>, ScraperError> {
        let json = fetcher.get_json_text(&self.url).await?;
        let postings = match parser::lever::parse(&self.company, &json) {
            Ok(postings) => postings,
            Err(e) => {
                warn!("Lever parse failed [{}]: {e}", self.company);
                Vec::new()
            }
        };
        Ok(postings
            .into_iter()
            .filter(|p| internship_hint(&p.title, &p.description))
            .collect())
    }
}

/// Direct career page (HTML anchors behind a configured selector).
pub struct CareerPageCollector {
    company: String,
    url: String,
    selector: String,
}

impl CareerPageCollector {
    pub fn new(company: &str, url: &str, selector: &str) -> Self {
        let selector = if selector.is_empty() {
            parser::career_page::DEFAULT_SELECTOR.to_string()
        } else {
            selector.to_string()
        };
        Self { company: company.to_string(), url: url.to_string(), selector }
    }
}

#[async_trait::async_trait]
impl Collector for CareerPageCollector {
    fn name(&self) -> &str {
        &self.company
    }

    async fn collect(&self, fetcher: &Fetcher) -> Result<Vec<Posting>, ScraperError> {
        let html = fetcher.get_text(&self.url).await?;
        let postings = match parser::career_page::parse(&self.company, &self.url, &self.selector, &html)
        {
            Ok(postings) => postings,
            Err(e) => {
                warn!("Career page parse failed [{}]: {e}", self.company);
                Vec::new()
            }
        };
        Ok(postings
            .into_iter()
            .filter(|p| internship_hint(&p.title, ""))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn internship_hint_scans_title_and_text() {
        assert!(internship_hint("Software Engineer Intern", ""));
        assert!(internship_hint("Software Engineer", "6-month internship"));
        assert!(internship_hint("Apprentice Developer", ""));
        assert!(!internship_hint("Senior Software Engineer", "5+ years"));
    }

    #[test]
    fn career_page_collector_defaults_its_selector() {
        let collector = CareerPageCollector::new("Acme", "https://acme.dev/careers", "");
        assert_eq!(collector.selector, parser::career_page::DEFAULT_SELECTOR);
    }
}
