// Generic anchor scan for direct career pages, driven by a configured selector.
use scraper::{Html, Selector};
use url::Url;

use crate::model::{ParserError, Posting};

pub const DEFAULT_SELECTOR: &str = "a[href*='job'], a[href*='career']";

pub fn parse(
    company: &str,
    base_url: &str,
    selector: &str,
    html: &str,
) -> Result<Vec<Posting>, ParserError> {
    let document = Html::parse_document(html);
    let link_sel = Selector::parse(selector).map_err(|e| ParserError::Html(e.to_string()))?;

    let mut postings = Vec::new();
    for el in document.select(&link_sel) {
        let title = el.text().collect::<String>().trim().to_string();
        // Too-short anchor text is navigation chrome, not a job title.
        if title.chars().count() < 5 {
            continue;
        }

        let href = el.value().attr("href").unwrap_or("");
        let link = if href.starts_with("http") {
            href.to_string()
        } else if href.starts_with('/') {
            match Url::parse(base_url).and_then(|base| base.join(href)) {
                Ok(joined) => joined.to_string(),
                Err(_) => continue,
            }
        } else {
            continue;
        };

        postings.push(Posting {
            title,
            company: company.to_string(),
            location: "Check listing".into(),
            stipend: "Check listing".into(),
            source: format!("Career Page ({company})"),
            link: link.clone(),
            apply_url: link,
            ..Default::default()
        });
    }

    Ok(postings)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"
        <html><body>
          <a href="/careers/job/123">Software Engineer Intern</a>
          <a href="https://other.example.com/job/456">Backend Intern - Platform</a>
          <a href="/careers/job/789">Jobs</a>
          <a href="mailto:hiring@acme.dev">Talk to us about roles</a>
        </body></html>
    "#;

    #[test]
    fn resolves_relative_links_and_skips_chrome() {
        let postings = parse("Acme", "https://acme.dev/careers", "a[href*='job']", SAMPLE).unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title, "Software Engineer Intern");
        assert_eq!(postings[0].link, "https://acme.dev/careers/job/123");
        assert_eq!(postings[1].link, "https://other.example.com/job/456");
        assert_eq!(postings[0].source, "Career Page (Acme)");
    }

    #[test]
    fn invalid_selector_is_an_error() {
        assert!(parse("Acme", "https://acme.dev", "a[unclosed", "<html></html>").is_err());
    }
}
