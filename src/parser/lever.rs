// Lever postings API payloads: /v0/postings/<org>?mode=json
use serde::Deserialize;

use crate::model::{ParserError, Posting};
use crate::utils::truncate_chars;

/// Lever serves either a bare array or an object wrapping `postings`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum Payload {
    List(Vec<LeverPosting>),
    Wrapped {
        #[serde(default)]
        postings: Vec<LeverPosting>,
    },
}

#[derive(Debug, Deserialize)]
struct LeverPosting {
    #[serde(default)]
    text: String,
    #[serde(default)]
    categories: Categories,
    #[serde(default, rename = "applyUrl")]
    apply_url: String,
    #[serde(default, rename = "hostedUrl")]
    hosted_url: String,
    #[serde(default, rename = "descriptionPlain")]
    description_plain: String,
}

#[derive(Debug, Default, Deserialize)]
struct Categories {
    #[serde(default)]
    location: String,
}

pub fn parse(company: &str, json: &str) -> Result<Vec<Posting>, ParserError> {
    let payload: Payload = serde_json::from_str(json)?;
    let postings = match payload {
        Payload::List(postings) => postings,
        Payload::Wrapped { postings } => postings,
    };
    Ok(postings
        .into_iter()
        .filter(|p| !p.text.is_empty())
        .map(|p| {
            let description = truncate_chars(&p.description_plain, 500);
            let apply = if p.apply_url.is_empty() { p.hosted_url } else { p.apply_url };
            Posting {
                title: p.text,
                company: company.to_string(),
                location: if p.categories.location.is_empty() {
                    "Remote".into()
                } else {
                    p.categories.location
                },
                description,
                stipend: "Check listing".into(),
                source: "Lever".into(),
                link: apply.clone(),
                apply_url: apply,
                ..Default::default()
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    const BARE_LIST: &str = r#"[
        {
            "text": "Software Engineer Intern",
            "categories": {"location": "Remote - India"},
            "hostedUrl": "https://jobs.lever.co/acme/1",
            "descriptionPlain": "Backend internship on the platform team."
        },
        {
            "text": "Sales Lead",
            "categories": {},
            "applyUrl": "https://jobs.lever.co/acme/2/apply"
        }
    ]"#;

    #[test]
    fn maps_a_bare_list() {
        let postings = parse("Acme", BARE_LIST).unwrap();
        assert_eq!(postings.len(), 2);
        assert_eq!(postings[0].title, "Software Engineer Intern");
        assert_eq!(postings[0].location, "Remote - India");
        assert_eq!(postings[0].link, "https://jobs.lever.co/acme/1");
        assert_eq!(postings[1].apply_url, "https://jobs.lever.co/acme/2/apply");
        assert_eq!(postings[1].location, "Remote");
    }

    #[test]
    fn maps_a_wrapped_payload() {
        let wrapped = r#"{"postings": [{"text": "SDE Intern", "hostedUrl": "https://jobs.lever.co/acme/3"}]}"#;
        let postings = parse("Acme", wrapped).unwrap();
        assert_eq!(postings.len(), 1);
        assert_eq!(postings[0].title, "SDE Intern");
    }
}
