// Collector layer: builds sources from config and fans out across them,
// tolerating per-source failures.

pub mod fetcher;
pub mod sources;
pub mod traits;

pub use fetcher::Fetcher;
pub use traits::Collector;

use futures::future::join_all;
use tracing::warn;

use crate::config::{AppConfig, PageKind};
use crate::model::Posting;

use sources::{CareerPageCollector, GreenhouseCollector, InternshalaCollector, LeverCollector};

/// Title prefilter applied to everything the collectors return, standing in
/// for the per-source search keywords.
pub struct KeywordFilter {
    keywords: Vec<String>,
    exclude: Vec<String>,
}

impl KeywordFilter {
    pub fn from_config(config: &AppConfig) -> Self {
        Self {
            keywords: config.keywords.iter().map(|k| k.to_lowercase()).collect(),
            exclude: config.exclude_keywords.iter().map(|k| k.to_lowercase()).collect(),
        }
    }

    pub fn matches_title(&self, title: &str) -> bool {
        let title = title.to_lowercase();
        if self.exclude.iter().any(|k| title.contains(k)) {
            return false;
        }
        self.keywords.is_empty() || self.keywords.iter().any(|k| title.contains(k))
    }
}

/// Builds the collector set: the Internshala board plus every configured
/// career page, routed by page kind.
pub fn build_collectors(config: &AppConfig) -> Vec<Box<dyn Collector>> {
    let mut collectors: Vec<Box<dyn Collector>> = vec![Box::new(InternshalaCollector::new())];
    for page in &config.career_pages {
        collectors.push(match page.kind {
            PageKind::Greenhouse => Box::new(GreenhouseCollector::new(&page.company, &page.url)),
            PageKind::Lever => Box::new(LeverCollector::new(&page.company, &page.url)),
            PageKind::Html => {
                Box::new(CareerPageCollector::new(&page.company, &page.url, &page.selector))
            }
        });
    }
    collectors
}

/// Runs every collector concurrently. A failed source contributes nothing;
/// partial results are normal, never an error.
pub async fn collect_all(
    collectors: &[Box<dyn Collector>],
    fetcher: &Fetcher,
    keywords: &KeywordFilter,
) -> Vec<Posting> {
    let tasks = collectors.iter().map(|collector| async move {
        match collector.collect(fetcher).await {
            Ok(postings) => postings,
            Err(e) => {
                warn!("Collector {} failed: {e}", collector.name());
                Vec::new()
            }
        }
    });
    join_all(tasks)
        .await
        .into_iter()
        .flatten()
        .filter(|posting| keywords.matches_title(&posting.title))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filter(keywords: &[&str], exclude: &[&str]) -> KeywordFilter {
        KeywordFilter {
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            exclude: exclude.iter().map(|k| k.to_string()).collect(),
        }
    }

    #[test]
    fn keyword_filter_requires_an_inclusion_match() {
        let f = filter(&["backend", "sde intern"], &[]);
        assert!(f.matches_title("Backend Developer Intern"));
        assert!(f.matches_title("SDE Intern - Payments"));
        assert!(!f.matches_title("Data Analyst"));
    }

    #[test]
    fn keyword_filter_exclusion_wins() {
        let f = filter(&["intern"], &["marketing", "unpaid"]);
        assert!(!f.matches_title("Marketing Intern"));
        assert!(!f.matches_title("Backend Intern (unpaid)"));
        assert!(f.matches_title("Backend Intern"));
    }

    #[test]
    fn empty_keyword_list_passes_everything() {
        let f = filter(&[], &["marketing"]);
        assert!(f.matches_title("Anything At All"));
        assert!(!f.matches_title("Marketing Lead"));
    }
}
