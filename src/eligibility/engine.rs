//! The decision procedure: composes signal detectors into a single verdict,
//! and runs batches through it.

use tracing::{debug, info};

use crate::model::{PolicyError, Posting, Verdict};
use crate::stipend::StipendParser;

use super::rules::SignalDetector;
use super::tables::PolicyTables;

/// Location values that mean "the listing did not say".
const LOCATION_PLACEHOLDERS: &[&str] = &["check listing", "not mentioned", "n/a"];

pub struct EligibilityEngine {
    technical: SignalDetector,
    non_technical: SignalDetector,
    internship: SignalDetector,
    hard_reject: SignalDetector,
    intern_negation: SignalDetector,
    seniority: SignalDetector,
    experience: SignalDetector,
    degree: SignalDetector,
    location_allowed: SignalDetector,
    location_blocked: SignalDetector,
    stipend: StipendParser,
    min_stipend: i64,
}

impl EligibilityEngine {
    /// Compiles the default policy tables. A table that fails to compile is
    /// fatal: a half-built policy could silently accept or reject everything.
    pub fn new(min_stipend: i64) -> Result<Self, PolicyError> {
        Self::with_tables(&PolicyTables::default(), min_stipend)
    }

    /// Builds the engine from explicit tables, so alternate policy can be
    /// injected without global state.
    pub fn with_tables(tables: &PolicyTables, min_stipend: i64) -> Result<Self, PolicyError> {
        Ok(Self {
            technical: SignalDetector::compile("technical-role", tables.technical)?,
            non_technical: SignalDetector::compile("non-technical-role", tables.non_technical)?,
            internship: SignalDetector::compile("internship", tables.internship)?,
            hard_reject: SignalDetector::compile("hard-reject", tables.hard_reject)?,
            intern_negation: SignalDetector::compile("intern-negation", tables.intern_negation)?,
            seniority: SignalDetector::compile("seniority", tables.seniority)?,
            experience: SignalDetector::compile("experience", tables.experience)?,
            degree: SignalDetector::compile("degree", tables.degree)?,
            location_allowed: SignalDetector::compile("location-allowed", tables.location_allowed)?,
            location_blocked: SignalDetector::compile("location-blocked", tables.location_blocked)?,
            stipend: StipendParser::new()?,
            min_stipend,
        })
    }

    pub fn stipend(&self) -> &StipendParser {
        &self.stipend
    }

    pub fn min_stipend(&self) -> i64 {
        self.min_stipend
    }

    /// Classifies one posting. Checks run in fixed precedence order and
    /// short-circuit on the first failure, so the cheapest and most decisive
    /// signals are consulted first and every rejection has one reason.
    pub fn decide(&self, posting: &Posting) -> Verdict {
        let combined = posting.combined_text();
        let title = posting.title.to_lowercase();
        let location = posting.location.trim().to_lowercase();

        // 1. Technical role
        if self.non_technical.fires(&title) {
            return Verdict::reject("non-technical role in title");
        }
        if !self.technical.fires(&title) && !self.technical.fires(&combined) {
            return Verdict::reject("no technical engineering signal found");
        }

        // 2. Internship
        if self.hard_reject.fires(&combined) {
            return Verdict::reject("hard reject signal (new grad / graduate program / no freshers)");
        }
        if self.intern_negation.fires(&combined) {
            return Verdict::reject("internship negated in description");
        }
        if !self.internship.fires(&title) && !self.internship.fires(&combined) {
            return Verdict::reject("no internship signal in title or description");
        }

        // 3. Location. An unknown location is not penalized; only explicit
        // blockers in the rest of the text count against it.
        if location.is_empty() || LOCATION_PLACEHOLDERS.contains(&location.as_str()) {
            if self.location_blocked.fires(&combined) {
                return Verdict::reject("blocked location found in description");
            }
        } else {
            if self.location_blocked.fires(&location) {
                return Verdict::reject(format!("blocked location field: {location}"));
            }
            if self.location_blocked.fires(&combined) {
                return Verdict::reject("blocked location found in description");
            }
            if !self.location_allowed.fires(&location) && !self.location_allowed.fires(&combined) {
                return Verdict::reject(format!("no allowed location signal found: {location}"));
            }
        }

        // 4. Experience
        if self.experience.fires(&combined) {
            return Verdict::reject("experience requirement found");
        }

        // 5. Seniority
        if self.seniority.fires(&combined) {
            return Verdict::reject("seniority level found (senior/staff/lead/SDE3+/L4+)");
        }

        // 6. Degree
        if self.degree.fires(&combined) {
            return Verdict::reject("advanced degree required (Masters/PhD)");
        }

        Verdict::accept()
    }

    /// Runs a whole batch through `decide` plus the stipend threshold.
    /// Order-preserving; rejects keep their reason for diagnostics.
    pub fn filter(&self, postings: Vec<Posting>) -> FilterOutcome {
        let total = postings.len();
        let mut accepted = Vec::new();
        let mut rejected = Vec::new();

        for posting in postings {
            let verdict = self.decide(&posting);
            if !verdict.accepted {
                let reason = verdict.reason.unwrap_or_else(|| "unclassified rejection".into());
                debug!("Filtered [{}] {} — {}", posting.company, posting.title, reason);
                rejected.push((posting, reason));
                continue;
            }
            if !self.stipend.passes_filter(&posting.stipend, self.min_stipend) {
                let reason = format!("stipend below minimum: {}", posting.stipend);
                debug!("Filtered [{}] {} — {}", posting.company, posting.title, reason);
                rejected.push((posting, reason));
                continue;
            }
            accepted.push(posting);
        }

        info!("Eligibility filter: {}/{} postings passed", accepted.len(), total);
        FilterOutcome { accepted, rejected }
    }
}

/// Result of one batch run: survivors in input order, plus the drop list.
pub struct FilterOutcome {
    pub accepted: Vec<Posting>,
    pub rejected: Vec<(Posting, String)>,
}
