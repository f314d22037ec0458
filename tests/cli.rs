//! Command line tests for the phrase-forge binary

use assert_cmd::Command;
use predicates::prelude::*;

fn phrase_forge() -> Command {
    let mut cmd = Command::cargo_bin("phrase-forge").unwrap();
    cmd.env_remove("PHRASE_FORGE_WORDS_DIR")
        .env_remove("PHRASE_FORGE_SETTINGS")
        .env("PHRASE_FORGE_LOG", "error");
    cmd
}

#[test]
fn test_search_builtin_lists() {
    phrase_forge()
        .args(["search", "___Z_B_L_"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FUZZY"))
        .stdout(predicate::str::contains("BALL"))
        .stdout(predicate::str::contains("Matching Adjectives"));
}

#[test]
fn test_search_json_output() {
    let output = phrase_forge()
        .args(["search", "___Z_B_L_", "--adjective", "fuzzy", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["template"], "___Z_B_L_");
    assert_eq!(json["length"], 9);

    let nouns: Vec<&str> = json["nouns"]["matches"]
        .as_array()
        .unwrap()
        .iter()
        .filter_map(|v| v.as_str())
        .collect();
    assert!(nouns.contains(&"BALL"));
    assert!(nouns.iter().all(|n| n.len() == 4));
    assert!(json["preview"].as_str().unwrap().starts_with("FUZZY"));
}

#[test]
fn test_search_without_letters_fails() {
    phrase_forge()
        .args(["search", "_________"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least one letter"));
}

#[test]
fn test_search_rejects_bad_pattern() {
    phrase_forge().args(["search", "AB1_"]).assert().failure();
    phrase_forge().args(["search", "A__"]).assert().failure();
}

#[test]
fn test_pin_must_be_a_candidate() {
    phrase_forge()
        .args(["search", "___Z_B_L_", "--noun", "GRAPE"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("GRAPE"));
}

#[test]
fn test_define_word() {
    phrase_forge()
        .args(["define", "fuzzy"])
        .assert()
        .success()
        .stdout(predicate::str::contains("FUZZY (adj.)"));

    phrase_forge()
        .args(["define", "QWERTY"])
        .assert()
        .success()
        .stdout(predicate::str::contains("not in any word list"));
}

#[test]
fn test_words_dir_option() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("single_nouns.json"), r#"["CAMEL", "GEL"]"#).unwrap();
    std::fs::write(dir.path().join("single_adjectives.json"), r#"["COOL", "MELLOW"]"#).unwrap();

    phrase_forge()
        .arg("--words")
        .arg(dir.path())
        .args(["search", "________L"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CAMEL"))
        .stdout(predicate::str::contains("MELLOW"))
        .stdout(predicate::str::contains("BALL").not());
}

#[test]
fn test_pinned_pair_must_fill_template() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("single_nouns.json"), r#"["CAMEL", "GEL"]"#).unwrap();
    std::fs::write(dir.path().join("single_adjectives.json"), r#"["COOL", "MELLOW"]"#).unwrap();

    phrase_forge()
        .arg("--words")
        .arg(dir.path())
        .args(["search", "________L", "--adjective", "MELLOW", "--noun", "CAMEL"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("does not complete"));

    phrase_forge()
        .arg("--words")
        .arg(dir.path())
        .args(["search", "________L", "--adjective", "MELLOW", "--noun", "GEL", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("MELLOWGEL"));
}

#[test]
fn test_missing_words_dir_fails() {
    let dir = tempfile::tempdir().unwrap();
    phrase_forge()
        .arg("--words")
        .arg(dir.path().join("nope"))
        .args(["search", "___Z_B_L_"])
        .assert()
        .failure();
}
