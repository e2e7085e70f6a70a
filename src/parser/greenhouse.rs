// Greenhouse board API payloads: /v1/boards/<org>/jobs?content=true
use serde::Deserialize;

use crate::model::{ParserError, Posting};
use crate::utils::truncate_chars;

#[derive(Debug, Deserialize)]
struct Board {
    #[serde(default)]
    jobs: Vec<BoardJob>,
}

#[derive(Debug, Deserialize)]
struct BoardJob {
    #[serde(default)]
    title: String,
    #[serde(default)]
    location: Option<JobLocation>,
    #[serde(default)]
    absolute_url: String,
    #[serde(default)]
    content: String,
}

#[derive(Debug, Deserialize)]
struct JobLocation {
    #[serde(default)]
    name: String,
}

pub fn parse(company: &str, json: &str) -> Result<Vec<Posting>, ParserError> {
    let board: Board = serde_json::from_str(json)?;
    Ok(board
        .jobs
        .into_iter()
        .filter(|job| !job.title.is_empty())
        .map(|job| {
            let description = truncate_chars(&job.content, 500);
            Posting {
                title: job.title,
                company: company.to_string(),
                location: job
                    .location
                    .map(|l| l.name)
                    .filter(|name| !name.is_empty())
                    .unwrap_or_else(|| "Remote".into()),
                description,
                stipend: "Check listing".into(),
                source: "Greenhouse".into(),
                link: job.absolute_url.clone(),
                apply_url: job.absolute_url,
                ..Default::default()
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "jobs": [
            {
                "id": 1,
                "title": "Backend Engineer Intern",
                "location": {"name": "Bengaluru, India"},
                "absolute_url": "https://boards.greenhouse.io/acme/jobs/1",
                "content": "Work on Go microservices."
            },
            {
                "id": 2,
                "title": "Software Engineer Intern",
                "absolute_url": "https://boards.greenhouse.io/acme/jobs/2"
            },
            {
                "id": 3,
                "title": "",
                "absolute_url": "https://boards.greenhouse.io/acme/jobs/3"
            }
        ]
    }"#;

    #[test]
    fn maps_jobs_and_skips_untitled() {
        let postings = parse("Acme", SAMPLE).unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title, "Backend Engineer Intern");
        assert_eq!(postings[0].location, "Bengaluru, India");
        assert_eq!(postings[0].company, "Acme");
        assert_eq!(postings[0].source, "Greenhouse");
        assert_eq!(postings[0].link, "https://boards.greenhouse.io/acme/jobs/1");
        // Missing location falls back to Remote
        assert_eq!(postings[1].location, "Remote");
    }

    #[test]
    fn rejects_malformed_payload() {
        assert!(parse("Acme", "<html>rate limited</html>").is_err());
    }
}
