// Core structs: Posting, Verdict, per-layer errors
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// One raw job listing record from any source. Only the title is required;
/// everything else degrades to empty text rather than failing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Posting {
    pub title: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub stipend: String,
    #[serde(default)]
    pub tags: String,
    #[serde(default)]
    pub source: String,
    #[serde(default)]
    pub link: String,
    #[serde(default)]
    pub apply_url: String,
}

impl Posting {
    /// Lowercase merge of all text fields, rebuilt per classification call.
    pub fn combined_text(&self) -> String {
        [
            self.title.as_str(),
            self.location.as_str(),
            self.description.as_str(),
            self.tags.as_str(),
        ]
        .iter()
        .filter(|s| !s.is_empty())
        .copied()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
    }

    /// Stable dedup id: md5 over normalized title + company + link.
    pub fn id(&self) -> String {
        let raw = format!(
            "{}{}{}",
            self.title.trim().to_lowercase(),
            self.company.trim().to_lowercase(),
            self.link.trim()
        );
        format!("{:x}", md5::compute(raw.as_bytes()))
    }

    pub fn best_apply_url(&self) -> &str {
        if self.apply_url.is_empty() {
            &self.link
        } else {
            &self.apply_url
        }
    }
}

/// Accept/reject decision for one posting. Created fresh per posting and
/// never mutated; a rejection always carries exactly one reason.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub accepted: bool,
    pub reason: Option<String>,
}

impl Verdict {
    pub fn accept() -> Self {
        Self { accepted: true, reason: None }
    }

    pub fn reject(reason: impl Into<String>) -> Self {
        Self { accepted: false, reason: Some(reason.into()) }
    }
}

#[derive(Debug, Error)]
pub enum PolicyError {
    #[error("invalid rule pattern `{pattern}`: {source}")]
    BadPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
}

#[derive(Debug, Error)]
pub enum ScraperError {
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),
    #[error("unexpected response status {status} from {url}")]
    BadStatus {
        status: reqwest::StatusCode,
        url: String,
    },
}

#[derive(Debug, Error)]
pub enum ParserError {
    #[error("html parse error: {0}")]
    Html(String),
    #[error("json parse error: {0}")]
    Json(#[from] serde_json::Error),
}

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("database error: {0}")]
    Database(#[from] rusqlite::Error),
}

#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("telegram api error: {0}")]
    Api(String),
    #[error("telegram unreachable")]
    Unreachable,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn combined_text_skips_empty_fields() {
        let posting = Posting {
            title: "Backend Intern".into(),
            location: "Pune".into(),
            ..Default::default()
        };
        assert_eq!(posting.combined_text(), "backend intern pune");
    }

    #[test]
    fn id_ignores_case_and_padding() {
        let a = Posting {
            title: "SDE Intern".into(),
            company: "Acme".into(),
            link: "https://example.com/j/1".into(),
            ..Default::default()
        };
        let b = Posting {
            title: "  sde intern ".into(),
            company: "ACME".into(),
            link: "https://example.com/j/1".into(),
            ..Default::default()
        };
        assert_eq!(a.id(), b.id());
    }

    #[test]
    fn id_distinguishes_links() {
        let a = Posting { title: "SDE Intern".into(), link: "https://x/1".into(), ..Default::default() };
        let b = Posting { title: "SDE Intern".into(), link: "https://x/2".into(), ..Default::default() };
        assert_ne!(a.id(), b.id());
    }
}
