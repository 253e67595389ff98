//! Address synchronization command.
//!
//! Loads the canonical address book, walks the docs tree and rewrites every
//! stale address in place. Designed to run in CI for continuous
//! synchronization; version control is the safety net for the in-place
//! writes.

use std::fs;
use std::path::Path;

use anyhow::Result;

use crate::log;
use crate::registry::{self, ContractBinding, loader};
use crate::rewrite::{SyncReport, rewrite_document};
use crate::utils::{path::collect_files_with_extension, plural_count};

/// Documentation root scanned for documents
const DOCS_ROOT: &str = "src";

/// Extension of the documents to process
const DOC_EXTENSION: &str = "md";

/// Run the synchronizer against [`DOCS_ROOT`].
pub fn run_sync() -> Result<()> {
    let book = loader::load()?;
    let bindings = registry::bindings(&book);

    log!("sync"; "loaded canonical addresses from @juicedollar/jusd:");
    for binding in &bindings {
        println!(
            "  {}: {}",
            binding.name,
            binding.address.as_deref().unwrap_or("(unset)")
        );
    }

    let report = sync_tree(Path::new(DOCS_ROOT), &bindings)?;

    log!("sync"; "{report}");
    report.print();
    Ok(())
}

/// Rewrite every document under `root`, returning the aggregated report.
///
/// Documents are processed one at a time, in path order; a read or write
/// failure aborts the run.
fn sync_tree(root: &Path, bindings: &[ContractBinding]) -> Result<SyncReport> {
    let mut report = SyncReport::default();

    for path in collect_files_with_extension(root, DOC_EXTENSION) {
        let name = path
            .strip_prefix(root)
            .unwrap_or(&path)
            .to_string_lossy()
            .to_string();

        let content = fs::read_to_string(&path)?;
        let lines: Vec<&str> = content.split('\n').collect();
        let (new_lines, records) = rewrite_document(&lines, &name, bindings);

        if records.is_empty() {
            continue;
        }

        fs::write(&path, new_lines.join("\n"))?;
        log!("sync"; "updated {}: {}", name, plural_count(records.len(), "replacement"));
        report.extend(records);
    }

    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::loader::AddressBook;

    const EQUITY: &str = "0xAbC1230000000000000000000000000000000001";
    const STALE: &str = "0x1111111111111111111111111111111111111111";

    fn table() -> Vec<ContractBinding> {
        registry::bindings(&AddressBook {
            equity: Some(EQUITY.to_string()),
            ..AddressBook::default()
        })
    }

    #[test]
    fn test_sync_tree_rewrites_in_place() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir(dir.path().join("contracts")).unwrap();
        let doc = dir.path().join("contracts/equity.md");
        fs::write(&doc, format!("#### Equity\n\n**Address**: {STALE}\n")).unwrap();

        let report = sync_tree(dir.path(), &table()).unwrap();
        assert_eq!(report.total(), 1);

        let content = fs::read_to_string(&doc).unwrap();
        assert_eq!(content, format!("#### Equity\n\n**Address**: {EQUITY}\n"));
    }

    #[test]
    fn test_sync_tree_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("equity.md");
        fs::write(&doc, format!("The Equity contract: {STALE}")).unwrap();

        let first = sync_tree(dir.path(), &table()).unwrap();
        assert_eq!(first.total(), 1);

        let second = sync_tree(dir.path(), &table()).unwrap();
        assert_eq!(second.total(), 0);
    }

    #[test]
    fn test_untouched_document_not_rewritten() {
        let dir = tempfile::tempdir().unwrap();
        let doc = dir.path().join("guide.md");
        fs::write(&doc, "No addresses in this guide.\n").unwrap();
        let before = fs::metadata(&doc).unwrap().modified().unwrap();

        let report = sync_tree(dir.path(), &table()).unwrap();
        assert!(report.is_empty());

        let after = fs::metadata(&doc).unwrap().modified().unwrap();
        assert_eq!(before, after);
        assert_eq!(fs::read_to_string(&doc).unwrap(), "No addresses in this guide.\n");
    }

    #[test]
    fn test_empty_tree_is_a_no_op() {
        let dir = tempfile::tempdir().unwrap();
        let report = sync_tree(dir.path(), &table()).unwrap();
        assert_eq!(report.total(), 0);
    }
}
