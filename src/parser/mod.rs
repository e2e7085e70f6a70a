// Source-specific parsing: HTML boards and JSON career APIs into Postings.
// Parsers are pure so they can be tested against canned pages and payloads.

pub mod career_page;
pub mod greenhouse;
pub mod internshala;
pub mod lever;
