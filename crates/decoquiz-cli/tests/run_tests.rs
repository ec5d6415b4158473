//! End-to-end quiz sessions driven through stdin.
//!
//! End of input counts as an operator interrupt, so every script either
//! finishes the quiz or checks the clean early exit.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Correct keys of the built-in bank, in order.
const ANSWERS: [&str; 10] = ["b", "c", "b", "c", "b", "b", "b", "a", "b", "c"];

/// Run from an empty directory so no stray `decoquiz.toml` is picked up.
fn decoquiz(dir: &TempDir) -> Command {
    #[allow(deprecated)]
    let mut cmd = Command::cargo_bin("decoquiz").unwrap();
    cmd.current_dir(dir.path())
        .env_remove("DECOQUIZ_LOCALE")
        .env("HOME", dir.path());
    cmd
}

fn script(lines: &[&str]) -> String {
    lines.iter().map(|l| format!("{l}\n")).collect()
}

#[test]
fn perfect_run() {
    let dir = TempDir::new().unwrap();

    decoquiz(&dir)
        .args(["run", "--no-pause", "--no-retry"])
        .write_stdin(script(&ANSWERS))
        .assert()
        .success()
        .stdout(predicate::str::contains("PYTHON ADVANCED FEATURES QUIZ"))
        .stdout(predicate::str::contains("Total Questions: 10\nLet's begin!"))
        .stdout(predicate::str::contains("Question 1/10"))
        .stdout(predicate::str::contains("Question 10/10"))
        .stdout(predicate::str::contains("  a) To delete functions"))
        .stdout(predicate::str::contains("Your Score: 10/10 (100.0%)"))
        .stdout(predicate::str::contains("Perfect score!"));
}

#[test]
fn eighty_percent_is_excellent() {
    let dir = TempDir::new().unwrap();
    let mut answers = ANSWERS;
    answers[0] = "a";
    answers[1] = "a";

    decoquiz(&dir)
        .args(["run", "--no-pause", "--no-retry"])
        .write_stdin(script(&answers))
        .assert()
        .success()
        .stdout(predicate::str::contains("Incorrect. The correct answer is: b"))
        .stdout(predicate::str::contains("Your Score: 8/10 (80.0%)"))
        .stdout(predicate::str::contains("Excellent work!"));
}

#[test]
fn invalid_answers_are_retried_without_losing_a_turn() {
    let dir = TempDir::new().unwrap();
    let mut lines = vec!["x", "", "e", " B "];
    lines.extend_from_slice(&ANSWERS[1..]);

    decoquiz(&dir)
        .args(["run", "--no-pause", "--no-retry"])
        .write_stdin(script(&lines))
        .assert()
        .success()
        .stdout(predicate::str::contains("Invalid input. Please enter one of: a/b/c/d.").count(3))
        .stdout(predicate::str::contains("Question 2/10").count(1))
        .stdout(predicate::str::contains("Your Score: 10/10 (100.0%)"));
}

#[test]
fn end_of_input_is_a_clean_interrupt() {
    let dir = TempDir::new().unwrap();

    decoquiz(&dir)
        .args(["run", "--no-pause"])
        .write_stdin(script(&["b", "c"]))
        .assert()
        .success()
        .stdout(predicate::str::contains("Question 3/10"))
        .stdout(predicate::str::contains("Quiz interrupted. Goodbye!"))
        .stdout(predicate::str::contains("QUIZ COMPLETED!").not());
}

#[test]
fn pauses_wait_for_enter() {
    let dir = TempDir::new().unwrap();
    let mut lines = vec![""];
    for (i, answer) in ANSWERS.iter().enumerate() {
        lines.push(answer);
        if i + 1 < ANSWERS.len() {
            lines.push("");
        }
    }

    decoquiz(&dir)
        .args(["run", "--no-retry"])
        .write_stdin(script(&lines))
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter to start..."))
        .stdout(predicate::str::contains("Press Enter to continue").count(9))
        .stdout(predicate::str::contains("Your Score: 10/10 (100.0%)"));
}

#[test]
fn retry_runs_a_fresh_session() {
    let dir = TempDir::new().unwrap();
    let mut lines: Vec<&str> = ANSWERS.to_vec();
    lines.push("YES");
    lines.extend(["a"; 10]);
    lines.push("no");

    decoquiz(&dir)
        .args(["run", "--no-pause"])
        .write_stdin(script(&lines))
        .assert()
        .success()
        .stdout(predicate::str::contains("QUIZ COMPLETED!").count(2))
        .stdout(predicate::str::contains("Your Score: 10/10 (100.0%)"))
        .stdout(predicate::str::contains("Your Score: 1/10 (10.0%)"))
        .stdout(predicate::str::contains("Don't give up!"))
        .stdout(predicate::str::contains("Thanks for taking the quiz!"))
        .stderr(predicate::str::contains("Session"));
}

#[test]
fn turkish_locale() {
    let dir = TempDir::new().unwrap();

    decoquiz(&dir)
        .args(["run", "--locale", "tr", "--no-pause"])
        .write_stdin(script(&ANSWERS) + "hayır\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Hadi başlayalım!"))
        .stdout(predicate::str::contains("Soru 1/10"))
        .stdout(predicate::str::contains("Puanınız: 10/10 (%100.0)"))
        .stdout(predicate::str::contains("Tekrar denemek için 'evet' yazın"))
        .stdout(predicate::str::contains("Sınavı çözdüğünüz için teşekkürler!"));
}

#[test]
fn unknown_locale_fails_before_any_question() {
    let dir = TempDir::new().unwrap();

    decoquiz(&dir)
        .args(["run", "--locale", "fr"])
        .write_stdin("")
        .assert()
        .failure()
        .stdout(predicate::str::contains("Question").not())
        .stderr(predicate::str::contains(
            "no built-in question bank for locale 'fr'",
        ));
}

#[test]
fn invalid_custom_bank_fails_before_any_question() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("bad.toml");
    std::fs::write(
        &bank,
        r#"
[bank]
id = "bad"
title = "Bad"

[[questions]]
prompt = "Pick"
correct = "c"
options = { a = "one", b = "two" }
"#,
    )
    .unwrap();

    decoquiz(&dir)
        .args(["run", "--no-pause", "--bank"])
        .arg(&bank)
        .write_stdin("a\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("correct key 'c' is not among options"));
}

#[test]
fn blank_retry_token_fails_before_any_question() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("blank.toml");
    std::fs::write(
        &bank,
        r#"
[bank]
id = "blank"
title = "Blank"

[messages]
retry_token = "  "

[[questions]]
prompt = "Pick"
correct = "a"
options = { a = "one", b = "two" }
"#,
    )
    .unwrap();

    decoquiz(&dir)
        .args(["run", "--no-pause", "--bank"])
        .arg(&bank)
        .write_stdin("a\n\n")
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("'retry_token' must not be blank"));
}

#[test]
fn custom_bank_with_its_own_keys() {
    let dir = TempDir::new().unwrap();
    let bank = dir.path().join("yn.toml");
    std::fs::write(
        &bank,
        r#"
[bank]
id = "yes-no"
title = "YES OR NO"

[[questions]]
prompt = "Can a @staticmethod read self?"
correct = "n"
explanation = "It receives neither self nor cls."
options = { y = "Yes", n = "No" }
"#,
    )
    .unwrap();

    decoquiz(&dir)
        .args(["run", "--no-pause", "--no-retry", "--bank"])
        .arg(&bank)
        .write_stdin("a\nN\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Your answer (n/y): "))
        .stdout(predicate::str::contains("Please enter one of: n/y."))
        .stdout(predicate::str::contains("  n) No"))
        .stdout(predicate::str::contains("Your Score: 1/1 (100.0%)"));
}

#[test]
fn config_file_sets_locale_and_pauses() {
    let dir = TempDir::new().unwrap();
    std::fs::write(
        dir.path().join("decoquiz.toml"),
        "locale = \"tr\"\npause_between_questions = false\noffer_retry = false\nrule_width = 12\n",
    )
    .unwrap();

    decoquiz(&dir)
        .arg("run")
        .write_stdin(script(&ANSWERS))
        .assert()
        .success()
        .stdout(predicate::str::contains("Soru 10/10"))
        .stdout(predicate::str::contains("\n============\n"))
        .stdout(predicate::str::contains("Enter'a basın").not());
}
