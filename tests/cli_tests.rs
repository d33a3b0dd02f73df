use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

struct TestContext {
    _dir: TempDir,
    store_path: PathBuf,
}

impl TestContext {
    fn new() -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let store_path = dir.path().join("thoughts.json");
        Self {
            _dir: dir,
            store_path,
        }
    }

    fn run(&self, args: &[&str]) -> Output {
        let mut final_args: Vec<&str> = args.to_vec();
        let store = self.store_path.to_str().unwrap();
        final_args.push("--store");
        final_args.push(store);

        Command::new(env!("CARGO_BIN_EXE_introspect"))
            .args(&final_args)
            .output()
            .expect("Failed to execute binary")
    }

    fn stdout(&self, args: &[&str]) -> String {
        let output = self.run(args);
        assert!(
            output.status.success(),
            "command {:?} failed: {}",
            args,
            String::from_utf8_lossy(&output.stderr)
        );
        String::from_utf8_lossy(&output.stdout).to_string()
    }
}

#[test]
fn test_cli_add_then_list() {
    let ctx = TestContext::new();
    ctx.stdout(&["add", "skipped the gym again", "--cause", "Habits", "--nature", "harmful"]);

    let listing = ctx.stdout(&["list"]);
    assert!(listing.contains("Recent Thoughts"));
    assert!(listing.contains("skipped the gym again"));
    assert!(listing.contains("Habits"));
    assert!(ctx.store_path.exists(), "store file was never written");
}

#[test]
fn test_cli_private_listing_redacts_content() {
    let ctx = TestContext::new();
    ctx.stdout(&["add", "something embarrassing", "--cause", "Needs", "--nature", "unsure"]);

    let listing = ctx.stdout(&["list", "--private"]);
    assert!(!listing.contains("something embarrassing"));
    assert!(listing.contains("•••"));
}

#[test]
fn test_cli_stats_on_empty_store() {
    let ctx = TestContext::new();
    let out = ctx.stdout(&["stats"]);
    assert!(out.contains("Log thoughts to see analytics"));
    assert!(!out.contains("Patterns"));
}

#[test]
fn test_cli_stats_sections_and_percentages() {
    let ctx = TestContext::new();
    for (content, cause, nature) in [
        ("a", "Habits", "harmful"),
        ("b", "Habits", "harmful"),
        ("c", "Habits", "good"),
        ("d", "Needs", "good"),
    ] {
        ctx.stdout(&["add", content, "--cause", cause, "--nature", nature]);
    }

    let out = ctx.stdout(&["stats"]);
    assert!(out.contains("Patterns"));
    assert!(out.contains("Root Cause"));
    assert!(out.contains("Nature"));
    // Habits carries 3 of 4 records, Needs 1 of 4.
    assert!(out.contains("Habits: 3 (75%)"));
    assert!(out.contains("Needs: 1 (25%)"));
    assert!(out.contains("Good"));
    assert!(out.contains("(50%)"));
}

#[test]
fn test_cli_clear_demands_exact_phrase() {
    let ctx = TestContext::new();
    ctx.stdout(&["add", "fleeting worry", "--cause", "Unknown", "--nature", "unsure"]);

    let refused = ctx.run(&["clear", "--confirm", "yes please"]);
    assert!(!refused.status.success());
    assert!(ctx.stdout(&["list"]).contains("fleeting worry"));

    ctx.stdout(&["clear", "--confirm", "DELETE"]);
    assert!(ctx.stdout(&["list"]).contains("No thoughts yet."));
}

#[test]
fn test_cli_export_import_roundtrip() {
    let ctx = TestContext::new();
    ctx.stdout(&["add", "kept replaying the argument", "--cause", "Others Impositions", "--nature", "harmful"]);

    let backup = ctx._dir.path().join("backup.json");
    ctx.stdout(&["export", "--out", backup.to_str().unwrap()]);

    ctx.stdout(&["clear", "--confirm", "DELETE"]);
    ctx.stdout(&["import", backup.to_str().unwrap()]);

    let listing = ctx.stdout(&["list"]);
    assert!(listing.contains("kept replaying the argument"));
    assert!(listing.contains("Others Impositions"));
}

#[test]
fn test_cli_vote_updates_recurrence() {
    let ctx = TestContext::new();
    ctx.stdout(&["add", "same worry as yesterday", "--cause", "Habits", "--nature", "unsure"]);

    let listing = ctx.stdout(&["list"]);
    let id = listing
        .split_whitespace()
        .find(|tok| tok.chars().all(|c| c.is_ascii_digit()) && tok.len() > 6)
        .expect("no id in listing")
        .to_string();

    let out = ctx.stdout(&["vote", &id, "up"]);
    assert!(out.contains("is now 1"));
    let out = ctx.stdout(&["vote", &id, "down"]);
    assert!(out.contains("is now 0"));
}

#[test]
fn test_cli_lang_switches_report_strings() {
    let ctx = TestContext::new();
    let out = ctx.stdout(&["list", "--lang", "hi"]);
    assert!(out.contains("हाल के विचार"));
    assert!(out.contains("अभी तक कोई विचार नहीं।"));
}
