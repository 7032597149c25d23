//! Hygiene — enforces coding standards at test time
//!
//! Scans the crate's production sources for antipatterns. Each pattern has a
//! budget (zero); if you must add an occurrence, fix an existing one first.
//! The budget never grows.

use std::fs;
use std::path::Path;

// (pattern, budget, why it is banned)
const BUDGETS: &[(&str, usize, &str)] = &[
    (".unwrap()", 0, "panics on malformed API data"),
    (".expect(", 0, "panics on malformed API data"),
    ("panic!(", 0, "crashes the page"),
    ("unreachable!(", 0, "crashes the page"),
    ("todo!(", 0, "stub left in production code"),
    ("unimplemented!(", 0, "stub left in production code"),
    ("let _ =", 0, "silently discards a result"),
    (".ok()", 0, "silently discards an error"),
    ("#[allow(dead_code)]", 0, "dead code should be deleted"),
];

struct SourceFile {
    path: String,
    content: String,
}

/// Collect production `.rs` files from `src/`, excluding `*_test.rs` modules.
fn source_files() -> Vec<SourceFile> {
    let mut files = Vec::new();
    collect_rs_files(Path::new("src"), &mut files);
    files
}

fn collect_rs_files(dir: &Path, out: &mut Vec<SourceFile>) {
    let Ok(entries) = fs::read_dir(dir) else {
        return;
    };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            collect_rs_files(&path, out);
        } else if path.extension().is_some_and(|e| e == "rs") {
            let path_str = path.to_string_lossy().to_string();
            if path_str.ends_with("_test.rs") {
                continue;
            }
            if let Ok(content) = fs::read_to_string(&path) {
                out.push(SourceFile {
                    path: path_str,
                    content,
                });
            }
        }
    }
}

#[test]
fn pattern_budgets() {
    let files = source_files();
    assert!(!files.is_empty(), "no sources found; run from the crate root");

    let mut report = String::new();
    for (pattern, budget, why) in BUDGETS {
        let hits: Vec<(String, usize)> = files
            .iter()
            .filter_map(|file| {
                let count = file
                    .content
                    .lines()
                    .filter(|line| line.contains(pattern))
                    .count();
                (count > 0).then(|| (file.path.clone(), count))
            })
            .collect();
        let total: usize = hits.iter().map(|(_, c)| c).sum();
        if total > *budget {
            report.push_str(&format!(
                "`{pattern}` budget exceeded: found {total}, max {budget} ({why})\n"
            ));
            for (path, count) in &hits {
                report.push_str(&format!("  {path}: {count}\n"));
            }
        }
    }
    assert!(report.is_empty(), "\n{report}");
}
