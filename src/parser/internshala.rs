// Internshala category listing pages
use scraper::{ElementRef, Html, Selector};

use crate::model::{ParserError, Posting};

fn sel(selector: &str) -> Result<Selector, ParserError> {
    Selector::parse(selector).map_err(|e| ParserError::Html(e.to_string()))
}

fn text_of(el: ElementRef<'_>) -> String {
    el.text().collect::<String>().trim().to_string()
}

pub fn parse(html: &str) -> Result<Vec<Posting>, ParserError> {
    let document = Html::parse_document(html);

    let card_sel = sel(".internship_meta")?;
    let title_sel = sel(".job-internship-name")?;
    let company_sel = sel(".company-name")?;
    let link_sel = sel("a.view_detail_button")?;
    let stipend_sel = sel(".stipend")?;
    let location_sel = sel(".locations")?;

    let mut postings = Vec::new();
    for card in document.select(&card_sel) {
        let title = match card.select(&title_sel).next() {
            Some(el) => text_of(el),
            None => continue,
        };
        let company = match card.select(&company_sel).next() {
            Some(el) => text_of(el),
            None => continue,
        };
        if title.is_empty() {
            continue;
        }

        let href = card
            .select(&link_sel)
            .next()
            .and_then(|el| el.value().attr("href"))
            .unwrap_or("")
            .to_string();
        let link = if href.starts_with('/') {
            format!("https://internshala.com{href}")
        } else {
            href
        };
        let stipend = card
            .select(&stipend_sel)
            .next()
            .map(text_of)
            .unwrap_or_else(|| "Not mentioned".into());
        let location = card
            .select(&location_sel)
            .next()
            .map(text_of)
            .unwrap_or_else(|| "Remote/WFH".into());

        postings.push(Posting {
            title,
            company,
            location,
            stipend,
            source: "Internshala".into(),
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
          <div class="internship_meta">
            <div class="job-internship-name">Backend Development Intern</div>
            <div class="company-name">Acme Labs</div>
            <a class="view_detail_button" href="/internship/detail/backend-1">View</a>
            <span class="stipend">₹ 40,000 /month</span>
            <div class="locations">Pune</div>
          </div>
          <div class="internship_meta">
            <div class="job-internship-name">Python Intern</div>
            <div class="company-name">Beta Inc</div>
          </div>
          <div class="internship_meta">
            <div class="company-name">No Title Corp</div>
          </div>
        </body></html>
    "#;

    #[test]
    fn extracts_cards_with_fallbacks() {
        let postings = parse(SAMPLE).unwrap();
        assert_eq!(postings.len(), 2);

        assert_eq!(postings[0].title, "Backend Development Intern");
        assert_eq!(postings[0].company, "Acme Labs");
        assert_eq!(postings[0].stipend, "₹ 40,000 /month");
        assert_eq!(postings[0].location, "Pune");
        assert_eq!(
            postings[0].link,
            "https://internshala.com/internship/detail/backend-1"
        );

        // Missing stipend/location fall back to the listing defaults.
        assert_eq!(postings[1].stipend, "Not mentioned");
        assert_eq!(postings[1].location, "Remote/WFH");
    }

    #[test]
    fn empty_page_yields_no_postings() {
        assert!(parse("<html></html>").unwrap().is_empty());
    }
}
