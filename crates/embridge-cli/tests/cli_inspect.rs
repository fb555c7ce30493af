use std::fs;
use std::time::{SystemTime, UNIX_EPOCH};

use assert_cmd::cargo::cargo_bin_cmd;
use predicates::boolean::PredicateBooleanExt;
use predicates::str::contains;

fn fixture_path(name: &str) -> std::path::PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join("fixtures")
        .join(name)
}

fn temp_json(hint: &str, contents: &str) -> std::path::PathBuf {
    let pid = std::process::id();
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap()
        .as_nanos();
    let path = std::env::temp_dir().join(format!("embridge_{hint}_{pid}_{nanos}.json"));
    fs::write(&path, contents).unwrap();
    path
}

#[test]
fn cli_inspect_lists_blocks() {
    let input = fixture_path("document.json");

    let mut cmd = cargo_bin_cmd!("embridge");
    cmd.args(["inspect", input.to_str().unwrap()]);
    let out = cmd.assert().success().get_output().stdout.clone();
    let out = String::from_utf8(out).unwrap();

    let mut lines = out.lines();
    assert!(lines.next().unwrap().starts_with("blockId"));
    // Root first, remaining blocks after.
    assert!(lines.next().unwrap().starts_with("root"));

    assert!(out.contains("EmailLayout"));
    assert!(out.contains("MODERN_SANS"));
    assert!(out.contains("heading-1"));
    assert!(out.contains("Welcome aboard"));
    assert!(out.contains("Get started"));
}

#[test]
fn cli_inspect_rejects_malformed_documents() {
    let path = temp_json(
        "dangling",
        r##"{"root":{"type":"EmailLayout","data":{
            "backdropColor":"#F5F5F5","canvasColor":"#FFFFFF","textColor":"#262626",
            "fontFamily":"MODERN_SANS","childrenIds":["ghost-1"]}}}"##,
    );

    let mut cmd = cargo_bin_cmd!("embridge");
    cmd.args(["inspect", path.to_str().unwrap()]);

    cmd.assert()
        .failure()
        .code(2)
        .stderr(contains("unknown child id 'ghost-1'"));

    let _ = fs::remove_file(&path);
}

#[test]
fn cli_inspect_preview_is_bounded() {
    let long_text = "a".repeat(200);
    let doc_json = format!(
        r##"{{"root":{{"type":"EmailLayout","data":{{
            "backdropColor":"#F5F5F5","canvasColor":"#FFFFFF","textColor":"#262626",
            "fontFamily":"MODERN_SANS","childrenIds":["text-1"]}}}},
            "text-1":{{"type":"Text","data":{{"style":{{}},"props":{{"text":{long_text:?}}}}}}}}}"##,
    );
    let path = temp_json("long_preview", &doc_json);

    let mut cmd = cargo_bin_cmd!("embridge");
    cmd.args(["inspect", path.to_str().unwrap()]);

    // 60-char bound, with ellipsis when truncated.
    let bounded = format!("{}…", "a".repeat(59));
    cmd.assert()
        .success()
        .stdout(contains(bounded))
        .stdout(contains("a".repeat(60)).not());

    let _ = fs::remove_file(&path);
}
