//! Change records and the grouped replacement report.

use std::collections::BTreeMap;
use std::fmt;

use owo_colors::OwoColorize;

use crate::utils::plural_count;

/// A single address replacement, recorded for reporting. Never mutated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChangeRecord {
    /// Source file path, relative to the docs root.
    pub file: String,
    /// 1-based line number.
    pub line: usize,
    /// Contract whose canonical address drove the replacement.
    pub contract: &'static str,
    /// Text that was replaced.
    pub old: String,
    /// Text it was replaced with.
    pub new: String,
}

/// Replacement report for a whole run, grouped by file.
#[derive(Debug, Default)]
pub struct SyncReport {
    /// Changes grouped by source file; within a file they stay in the
    /// order they were recorded, which is line order.
    files: BTreeMap<String, Vec<ChangeRecord>>,
    /// Total replacement count.
    total: usize,
}

impl SyncReport {
    /// Append a batch of records (one document's worth).
    pub fn extend(&mut self, records: Vec<ChangeRecord>) {
        for record in records {
            self.total += 1;
            self.files
                .entry(record.file.clone())
                .or_default()
                .push(record);
        }
    }

    /// Total replacement count across all files.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of files that were modified.
    pub fn file_count(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Print the detailed before/after listing to stdout.
    ///
    /// Prints nothing when no changes were recorded.
    pub fn print(&self) {
        if self.is_empty() {
            return;
        }

        println!();
        println!("{}", "detailed changes:".bold());
        for (file, records) in &self.files {
            for record in records {
                println!(
                    "  {}{}{} {}",
                    file.cyan(),
                    ":".dimmed(),
                    record.line,
                    format!("[{}]", record.contract).dimmed()
                );
                println!("    {} {}", "-".red(), record.old.red());
                println!("    {} {}", "+".green(), record.new.green());
            }
        }
    }
}

impl fmt::Display for SyncReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            // The grand total is printed even for a no-op run
            write!(
                f,
                "{} {} {} {}",
                "total:".dimmed(),
                "0".bold(),
                "replacements".dimmed(),
                "(all addresses in sync)".green()
            )
        } else {
            write!(
                f,
                "{} {} {}",
                "total:".dimmed(),
                self.total.to_string().bold(),
                format!(
                    "replacement{} in {}",
                    crate::utils::plural_s(self.total),
                    plural_count(self.file_count(), "file")
                )
                .dimmed()
            )
        }
    }
}
