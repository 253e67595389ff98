//! Context-tracking document scanner.
//!
//! Documents are processed line by line, top to bottom, with one piece of
//! carried state: the contract section the scanner is currently inside.
//! That context lets bare `**Address**` fields be attributed to the right
//! contract even when the line itself never names it. The context lives in
//! a local threaded through the per-line fold, so scans of different
//! documents are fully independent.

mod line;
pub mod report;

pub use report::{ChangeRecord, SyncReport};

use std::sync::LazyLock;

use regex::Regex;

use crate::registry::ContractBinding;

/// Bolded address field marker (`**Address**`)
static ADDRESS_LABEL: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*Address\*\*").unwrap());

/// Horizontal rule, which closes the current section
static HORIZONTAL_RULE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^---\s*$").unwrap());

/// Level-1/2 heading, which closes the current section
static MAJOR_HEADING: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"^#{1,2}\s").unwrap());

/// Rewrite one document's lines.
///
/// Returns the new lines plus the change records for the document. Joining
/// with the original separator is the caller's business; line order is
/// preserved.
pub fn rewrite_document(
    lines: &[&str],
    file: &str,
    bindings: &[ContractBinding],
) -> (Vec<String>, Vec<ChangeRecord>) {
    let mut section: Option<&ContractBinding> = None;
    let mut out = Vec::with_capacity(lines.len());
    let mut records = Vec::new();

    for (index, &line) in lines.iter().enumerate() {
        let (new_line, line_records) =
            rewrite_line_in_context(line, index + 1, file, bindings, &mut section);
        out.push(new_line);
        records.extend(line_records);
    }

    (out, records)
}

/// Process a single line against the binding table and the carried section
/// context, in this order:
///
/// 1. a heading matching a section pattern opens that section and is
///    returned untouched;
/// 2. the first binding whose inline pattern matches wins, overriding the
///    section context;
/// 3. failing that, an `**Address**` field inside an open section belongs
///    to that section's contract;
/// 4. a horizontal rule or level-1/2 heading closes the section. This runs
///    after matching, so the closing line itself is still substituted, and
///    headings that opened a section above are exempt entirely.
fn rewrite_line_in_context<'a>(
    line: &str,
    line_number: usize,
    file: &str,
    bindings: &'a [ContractBinding],
    section: &mut Option<&'a ContractBinding>,
) -> (String, Vec<ChangeRecord>) {
    for binding in bindings {
        if binding.section.is_match(line) {
            *section = Some(binding);
            // Heading lines are never rewritten
            return (line.to_string(), Vec::new());
        }
    }

    let mut matched = bindings.iter().find(|binding| binding.inline.is_match(line));

    if matched.is_none() && section.is_some() && ADDRESS_LABEL.is_match(line) {
        matched = *section;
    }

    if HORIZONTAL_RULE.is_match(line) || MAJOR_HEADING.is_match(line) {
        *section = None;
    }

    let canonical = matched.and_then(|binding| {
        binding
            .address
            .as_deref()
            .filter(|address| !address.is_empty())
            .map(|address| (binding, address))
    });

    match canonical {
        Some((binding, address)) => line::rewrite_line(line, file, line_number, binding.name, address),
        None => (line.to_string(), Vec::new()),
    }
}
