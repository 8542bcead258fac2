use assert_cmd::Command;
use predicates::prelude::*;

fn viralspark() -> Command {
    Command::cargo_bin("viralspark").unwrap()
}

#[test]
fn score_command_reports_heuristic_score() {
    // Under 40 chars, no emoji, hashtags, or CTA keywords: always 55.
    viralspark()
        .args(["score", "A quick note about the video."])
        .assert()
        .success()
        .stdout(predicate::str::contains("55/100"));
}

#[test]
fn score_command_reads_stdin() {
    viralspark()
        .arg("score")
        .write_stdin("A quick note about the video.")
        .assert()
        .success()
        .stdout(predicate::str::contains("55/100"));
}

#[test]
fn score_command_flags_viral_posts() {
    viralspark()
        .args([
            "score",
            "Big news today 🔥 #launch #rust subscribe and share with a friend, link in bio",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("Viral-ready"));
}

#[test]
fn platforms_command_lists_targets() {
    viralspark()
        .arg("platforms")
        .assert()
        .success()
        .stdout(predicate::str::contains("YouTube"))
        .stdout(predicate::str::contains("LinkedIn"));
}

#[test]
fn show_command_with_fresh_session() {
    let dir = tempfile::tempdir().unwrap();

    viralspark()
        .current_dir(dir.path())
        .arg("show")
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing analyzed yet"));
}

#[test]
fn reset_command_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();

    viralspark()
        .current_dir(dir.path())
        .arg("reset")
        .assert()
        .success()
        .stdout(predicate::str::contains("Session cleared"));
}

#[test]
fn analyze_without_input_warns_and_leaves_session_untouched() {
    let dir = tempfile::tempdir().unwrap();

    viralspark()
        .current_dir(dir.path())
        .arg("analyze")
        .assert()
        .success()
        .stdout(predicate::str::contains("provide a media file or paste some text"));

    // The warning path must not create a session file.
    assert!(!dir.path().join("viralspark.session.json").exists());
}

#[test]
fn analyze_with_blank_text_warns() {
    let dir = tempfile::tempdir().unwrap();

    viralspark()
        .current_dir(dir.path())
        .args(["analyze", "--text", "   "])
        .assert()
        .success()
        .stdout(predicate::str::contains("provide a media file or paste some text"));
}
