//! Per-line address substitution.
//!
//! Two address shapes are rewritten: full 40-hex-char addresses and the
//! truncated display form used in prose (`0x3b59...5153`). Comparison is
//! case-insensitive; output casing comes verbatim from the canonical
//! address.

use std::sync::LazyLock;

use regex::Regex;

use super::report::ChangeRecord;

/// Full 20-byte hex address
static FULL_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x[a-fA-F0-9]{40}").unwrap());

/// Truncated display form, e.g. `0x3b59...5153`
static TRUNCATED_ADDRESS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"0x([a-fA-F0-9]{4})\.\.\.([a-fA-F0-9]{3,4})").unwrap());

/// Truncated display form of a full address: first 4 hex chars after `0x`,
/// an ellipsis, then the last `end_len` chars.
fn truncate_address(address: &str, end_len: usize) -> String {
    format!("0x{}...{}", &address[2..6], &address[address.len() - end_len..])
}

/// Replace stale addresses on one line with `canonical`.
///
/// Full addresses: every value found on the original line that differs from
/// the canonical one is replaced in all its case-insensitive occurrences.
/// Truncated addresses: a differing occurrence is rewritten to the canonical
/// truncation with the suffix length preserved. One [`ChangeRecord`] is
/// appended per found stale occurrence.
pub fn rewrite_line(
    line: &str,
    file: &str,
    line_number: usize,
    contract: &'static str,
    canonical: &str,
) -> (String, Vec<ChangeRecord>) {
    let mut new_line = line.to_string();
    let mut records = Vec::new();

    for found in FULL_ADDRESS.find_iter(line) {
        let found = found.as_str();
        if found.eq_ignore_ascii_case(canonical) {
            continue;
        }

        // Escaped literal; hex only, so the pattern cannot fail to compile
        let literal = Regex::new(&format!("(?i){}", regex::escape(found))).unwrap();
        new_line = literal.replace_all(&new_line, canonical).into_owned();
        records.push(ChangeRecord {
            file: file.to_string(),
            line: line_number,
            contract,
            old: found.to_string(),
            new: canonical.to_string(),
        });
    }

    for caps in TRUNCATED_ADDRESS.captures_iter(line) {
        let found = &caps[0];
        let expected = truncate_address(canonical, caps[2].len());
        if found.eq_ignore_ascii_case(&expected) {
            continue;
        }

        new_line = new_line.replacen(found, &expected, 1);
        records.push(ChangeRecord {
            file: file.to_string(),
            line: line_number,
            contract,
            old: found.to_string(),
            new: expected,
        });
    }

    (new_line, records)
}
