// Stipend normalization: messy compensation text -> canonical monthly INR.
use regex::Regex;

use crate::model::PolicyError;
use crate::utils::group_digits;

/// Applied whenever a dollar marker is present.
const USD_TO_INR: f64 = 83.0;

/// Markers meaning the stipend is unpaid or simply not stated.
const UNPAID_MARKERS: &[&str] = &[
    "unpaid",
    "no stipend",
    "not mentioned",
    "not disclosed",
    "n/a",
    "none",
    "performance based",
    "equity only",
];

pub struct StipendParser {
    re_number: Regex,
    re_k_suffix: Regex,
}

impl StipendParser {
    pub fn new() -> Result<Self, PolicyError> {
        Ok(Self {
            re_number: compile(r"\d+(?:\.\d+)?")?,
            re_k_suffix: compile(r"\d\s*k\b")?,
        })
    }

    /// Extracts a canonical monthly INR value, or `None` when the text is
    /// unpaid, undisclosed or unparseable. `None` is distinct from a stated
    /// zero, which is a valid paid value.
    pub fn parse(&self, text: &str) -> Option<i64> {
        let text = text.to_lowercase();
        let text = text.trim();
        if text.is_empty() {
            return None;
        }
        if UNPAID_MARKERS.iter().any(|marker| text.contains(marker)) {
            return None;
        }

        let stripped = text.replace(',', "");
        let mut value: f64 = self.re_number.find(&stripped)?.as_str().parse().ok()?;

        if self.re_k_suffix.is_match(text) {
            value *= 1000.0;
        }
        if text.contains('$') || text.contains("usd") || text.contains("dollar") {
            value *= USD_TO_INR;
        }

        // Exactly one periodicity rule applies; monthly is the default.
        if text.contains("week") || text.contains("/wk") {
            value *= 4.0;
        } else if text.contains("per day") || text.contains("/day") {
            value *= 22.0;
        } else if text.contains("lpa")
            || text.contains("per annum")
            || text.contains("per year")
            || text.contains("/yr")
        {
            if text.contains("lakh") || text.contains("lpa") {
                value = value * 100_000.0 / 12.0;
            } else {
                value /= 12.0;
            }
        }

        Some(value as i64)
    }

    /// True when the stated stipend clears `minimum`. Unknown stipends pass:
    /// a missing figure is never a rejection reason.
    pub fn passes_filter(&self, text: &str, minimum: i64) -> bool {
        if minimum <= 0 {
            return true;
        }
        match self.parse(text) {
            Some(value) => value >= minimum,
            None => true,
        }
    }

    /// Display string for alerts, tagging qualifying and high-end figures.
    pub fn format_display(&self, text: &str) -> String {
        let Some(value) = self.parse(text) else {
            return if text.trim().is_empty() {
                "Not mentioned".to_string()
            } else {
                text.to_string()
            };
        };
        if value >= 100_000 {
            format!("₹{:.1}L/month 🔥", value as f64 / 100_000.0)
        } else if value >= 40_000 {
            format!("₹{}/month ✅", group_digits(value))
        } else {
            format!("₹{}/month", group_digits(value))
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, PolicyError> {
    Regex::new(pattern).map_err(|source| PolicyError::BadPattern {
        pattern: pattern.to_string(),
        source,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parser() -> StipendParser {
        StipendParser::new().unwrap()
    }

    #[test]
    fn monthly_inr_with_separators() {
        assert_eq!(parser().parse("₹40,000/month"), Some(40000));
    }

    #[test]
    fn k_suffix_multiplies() {
        assert_eq!(parser().parse("40k"), Some(40000));
        assert_eq!(parser().parse("Rs. 25k per month"), Some(25000));
    }

    #[test]
    fn usd_converts_to_inr() {
        assert_eq!(parser().parse("$500"), Some(41500));
    }

    #[test]
    fn not_mentioned_is_unknown() {
        assert_eq!(parser().parse("Not mentioned"), None);
        assert_eq!(parser().parse(""), None);
        assert_eq!(parser().parse("just exposure"), None);
    }

    #[test]
    fn lakhs_per_annum() {
        assert_eq!(parser().parse("12 LPA"), Some(100000));
        assert_eq!(parser().parse("6 lakh per annum"), Some(50000));
    }

    #[test]
    fn weekly_and_daily_normalize_to_monthly() {
        assert_eq!(parser().parse("2000/week"), Some(8000));
        assert_eq!(parser().parse("1000 per day"), Some(22000));
    }

    #[test]
    fn plain_annual_divides_by_twelve() {
        assert_eq!(parser().parse("600000 per year"), Some(50000));
    }

    #[test]
    fn unpaid_wins_over_numerals() {
        assert_eq!(parser().parse("unpaid (₹5,000 travel allowance)"), None);
    }

    #[test]
    fn larger_numeral_never_yields_less() {
        let p = parser();
        let small = p.parse("20000/month").unwrap();
        let large = p.parse("45000/month").unwrap();
        assert!(large >= small);
    }

    #[test]
    fn filter_gives_unknown_benefit_of_doubt() {
        let p = parser();
        assert!(p.passes_filter("Not mentioned", 40000));
        assert!(!p.passes_filter("30000", 40000));
        assert!(p.passes_filter("30000", 0));
        assert!(p.passes_filter("50000", 40000));
    }

    #[test]
    fn display_tags_by_value() {
        let p = parser();
        assert_eq!(p.format_display("12 LPA"), "₹1.0L/month 🔥");
        assert_eq!(p.format_display("₹45,000 /month"), "₹45,000/month ✅");
        assert_eq!(p.format_display("10000"), "₹10,000/month");
        assert_eq!(p.format_display("Not mentioned"), "Not mentioned");
        assert_eq!(p.format_display(""), "Not mentioned");
    }
}
