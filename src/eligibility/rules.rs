//! Pattern rules. Every detector is a table of data records, not inline
//! conditionals, so policy can change without touching control flow.

use regex::Regex;

use crate::model::PolicyError;

/// How an exemption is applied relative to a match of the main pattern.
///
/// The `regex` crate has no lookaround, so suppression context is an explicit
/// field on the rule record instead.
#[derive(Debug, Clone, Copy)]
pub enum Exempt {
    /// Skip the match when the pattern occurs anywhere after it.
    After(&'static str),
    /// Skip the match when the pattern occurs immediately at its end.
    Ahead(&'static str),
}

/// One record of a pattern table.
#[derive(Debug, Clone, Copy)]
pub struct RuleSpec {
    pub pattern: &'static str,
    pub exempt: Option<Exempt>,
}

impl RuleSpec {
    pub const fn plain(pattern: &'static str) -> Self {
        Self { pattern, exempt: None }
    }

    pub const fn unless(pattern: &'static str, exempt: Exempt) -> Self {
        Self { pattern, exempt: Some(exempt) }
    }
}

enum CompiledExempt {
    After(Regex),
    Ahead(Regex),
}

struct Rule {
    re: Regex,
    exempt: Option<CompiledExempt>,
}

impl Rule {
    fn compile(spec: &RuleSpec) -> Result<Self, PolicyError> {
        let exempt = match spec.exempt {
            Some(Exempt::After(pattern)) => Some(CompiledExempt::After(compile(pattern)?)),
            Some(Exempt::Ahead(pattern)) => {
                Some(CompiledExempt::Ahead(compile(&format!("^(?:{pattern})"))?))
            }
            None => None,
        };
        Ok(Self { re: compile(spec.pattern)?, exempt })
    }

    /// A rule fires if any occurrence of its pattern survives the exemption.
    fn matches(&self, text: &str) -> bool {
        match &self.exempt {
            None => self.re.is_match(text),
            Some(exempt) => self.re.find_iter(text).any(|m| {
                let rest = &text[m.end()..];
                match exempt {
                    CompiledExempt::After(re) => !re.is_match(rest),
                    CompiledExempt::Ahead(re) => !re.is_match(rest),
                }
            }),
        }
    }
}

fn compile(pattern: &str) -> Result<Regex, PolicyError> {
    Regex::new(&format!("(?i){pattern}")).map_err(|source| PolicyError::BadPattern {
        pattern: pattern.to_string(),
        source,
    })
}

/// A named boolean predicate over pre-lowercased posting text.
pub struct SignalDetector {
    name: &'static str,
    rules: Vec<Rule>,
}

impl SignalDetector {
    pub fn compile(name: &'static str, specs: &[RuleSpec]) -> Result<Self, PolicyError> {
        let rules = specs
            .iter()
            .map(Rule::compile)
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { name, rules })
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn fires(&self, text: &str) -> bool {
        self.rules.iter().any(|rule| rule.matches(text))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn detector(specs: &[RuleSpec]) -> SignalDetector {
        SignalDetector::compile("test", specs).unwrap()
    }

    #[test]
    fn plain_rule_fires_on_any_match() {
        let d = detector(&[RuleSpec::plain(r"\bsenior\b")]);
        assert!(d.fires("senior backend engineer"));
        assert!(!d.fires("seniority is irrelevant"));
    }

    #[test]
    fn after_exemption_suppresses_a_match() {
        let d = detector(&[RuleSpec::unless(r"\bui[\s/]ux\b", Exempt::After("engineer"))]);
        assert!(d.fires("ui/ux designer wanted"));
        assert!(!d.fires("ui/ux engineer wanted"));
    }

    #[test]
    fn after_exemption_is_checked_per_occurrence() {
        let d = detector(&[RuleSpec::unless(r"\bui[\s/]ux\b", Exempt::After("engineer"))]);
        // The second occurrence has no exemption after it, so the rule fires.
        assert!(d.fires("ui/ux engineer and ui/ux designer"));
    }

    #[test]
    fn ahead_exemption_only_looks_at_the_match_end() {
        let d = detector(&[RuleSpec::unless(
            r"must\s+be\s+based\s+in\s+",
            Exempt::Ahead("india"),
        )]);
        assert!(!d.fires("must be based in india"));
        assert!(d.fires("must be based in berlin, india office later"));
    }

    #[test]
    fn bad_pattern_is_a_compile_error() {
        assert!(SignalDetector::compile("broken", &[RuleSpec::plain("(unclosed")]).is_err());
    }

    #[test]
    fn matching_is_case_insensitive() {
        let d = detector(&[RuleSpec::plain(r"\bhybrid\b")]);
        assert!(d.fires("Hybrid - Bangalore"));
    }
}
