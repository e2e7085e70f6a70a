use serde::Deserialize;
use std::fs;

/// One monitored career page. `kind` routes to the right parser; `selector`
/// only matters for plain HTML pages.
#[derive(Debug, Deserialize)]
pub struct CareerPageConfig {
    pub company: String,
    pub url: String,
    #[serde(default)]
    pub selector: String,
    #[serde(default)]
    pub kind: PageKind,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageKind {
    #[default]
    Html,
    Greenhouse,
    Lever,
}

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    pub telegram_bot_token: String,
    pub telegram_chat_id: i64,
    /// Monthly INR; zero or negative disables the stipend filter.
    pub min_stipend: i64,
    pub check_interval_seconds: u64,
    pub keywords: Vec<String>,
    pub exclude_keywords: Vec<String>,
    #[serde(default)]
    pub career_pages: Vec<CareerPageConfig>,
}

pub fn load_config(path: &str) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let content = fs::read_to_string(path)?;
    let config: AppConfig = serde_json::from_str(&content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_a_minimal_config() {
        let raw = r#"{
            "telegram_bot_token": "123:abc",
            "telegram_chat_id": 42,
            "min_stipend": 40000,
            "check_interval_seconds": 1800,
            "keywords": ["backend", "sde intern"],
            "exclude_keywords": ["marketing"],
            "career_pages": [
                {"company": "Postman", "url": "https://boards-api.greenhouse.io/v1/boards/postman/jobs?content=true", "kind": "greenhouse"},
                {"company": "Vercel", "url": "https://api.lever.co/v0/postings/vercel?mode=json", "kind": "lever"},
                {"company": "Razorpay", "url": "https://razorpay.com/jobs/", "selector": "a[href*='job']"}
            ]
        }"#;
        let config: AppConfig = serde_json::from_str(raw).unwrap();
        assert_eq!(config.min_stipend, 40000);
        assert_eq!(config.career_pages.len(), 3);
        assert_eq!(config.career_pages[0].kind, PageKind::Greenhouse);
        assert_eq!(config.career_pages[1].kind, PageKind::Lever);
        // kind defaults to plain HTML when omitted
        assert_eq!(config.career_pages[2].kind, PageKind::Html);
    }
}
