//! Name recognition patterns for contract bindings.
//!
//! A few contract names need negative lookahead to disambiguate near-twins:
//! bare `StartUSD` must not match inside `StartUSD Bridge`, and bare `JUSD`
//! must not match the savings-vault spelling `JUSD (Savings...)`. The regex
//! crate has no lookaround, so a [`NamePattern`] is an ordered list of
//! alternatives, each a case-insensitive pattern plus an optional veto
//! pattern tested against the text right after the match.

use regex::Regex;

/// One alternative of a [`NamePattern`].
struct Alternative {
    /// Pattern for the name itself, compiled case-insensitively.
    base: Regex,
    /// Anchored pattern tested against the tail following a base match;
    /// a hit rejects that match (stand-in for negative lookahead).
    veto: Option<Regex>,
}

/// Ordered set of name alternatives with optional not-followed-by vetoes.
pub struct NamePattern {
    alternatives: Vec<Alternative>,
}

impl NamePattern {
    /// Build from `(pattern, not_followed_by)` pairs.
    ///
    /// Both parts are compiled case-insensitively. Veto patterns must be
    /// anchored with `^`; they run against the remainder of the line
    /// starting at the end of the base match.
    ///
    /// Panics on an invalid pattern; the tables in this crate are fixed
    /// string literals.
    pub fn new(alternatives: &[(&str, Option<&str>)]) -> Self {
        let alternatives = alternatives
            .iter()
            .map(|&(base, veto)| Alternative {
                base: Regex::new(&format!("(?i){base}")).unwrap(),
                veto: veto.map(|veto| Regex::new(&format!("(?i){veto}")).unwrap()),
            })
            .collect();
        Self { alternatives }
    }

    /// Whether `line` contains a non-vetoed match of any alternative.
    pub fn is_match(&self, line: &str) -> bool {
        self.alternatives.iter().any(|alt| {
            alt.base.find_iter(line).any(|m| match &alt.veto {
                Some(veto) => !veto.is_match(&line[m.end()..]),
                None => true,
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_word_match() {
        let pattern = NamePattern::new(&[(r"\bEquity\b", None)]);
        assert!(pattern.is_match("The Equity contract issues JUICE."));
        assert!(pattern.is_match("the equity reserve")); // case-insensitive
        assert!(!pattern.is_match("inequity"));
    }

    #[test]
    fn test_case_insensitive_word_boundary_patterns_build() {
        // Every table entry compiles to (?i) plus \b, which needs the
        // regex crate's unicode-case and unicode-perl features; building
        // and matching must not panic.
        let pattern = NamePattern::new(&[(r"\bJuiceDollar\b", None)]);
        assert!(pattern.is_match("JUICEDOLLAR mints JUSD"));
        assert!(!pattern.is_match("JuiceDollarV2"));
    }

    #[test]
    fn test_veto_rejects_followed_text() {
        let pattern = NamePattern::new(&[(r"\bStartUSD\b", Some(r"^\s*Bridge"))]);
        assert!(pattern.is_match("StartUSD is the underlying asset."));
        assert!(!pattern.is_match("The StartUSD Bridge holds deposits."));
        assert!(!pattern.is_match("startusd bridge")); // veto is case-insensitive too
    }

    #[test]
    fn test_veto_only_applies_to_its_occurrence() {
        let pattern = NamePattern::new(&[(r"\bJUSD\b", Some(r"^\s*\(Savings"))]);
        assert!(!pattern.is_match("JUSD (Savings Vault)"));
        // A later occurrence without the suffix still matches
        assert!(pattern.is_match("JUSD (Savings Vault) wraps JUSD deposits"));
    }

    #[test]
    fn test_multiple_alternatives() {
        let pattern = NamePattern::new(&[
            (r"\bJuiceDollar\b", None),
            (r"\bJUSD\b", Some(r"^\s*\(Savings")),
        ]);
        assert!(pattern.is_match("JuiceDollar (Savings era)")); // veto is per-alternative
        assert!(pattern.is_match("mint JUSD here"));
        assert!(!pattern.is_match("JUSD (SavingsVault)"));
    }

    #[test]
    fn test_heading_levels() {
        let pattern = NamePattern::new(&[(r"^#{1,4}\s*StartUSD(?:\s|$)", Some(r"^\s*Bridge"))]);
        assert!(pattern.is_match("# StartUSD"));
        assert!(pattern.is_match("#### StartUSD"));
        assert!(pattern.is_match("### StartUSD Token"));
        assert!(!pattern.is_match("##### StartUSD"));
        assert!(!pattern.is_match("#### StartUSD Bridge"));
        assert!(!pattern.is_match("prose mentioning StartUSD"));
    }
}
