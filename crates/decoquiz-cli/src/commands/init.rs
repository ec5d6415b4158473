//! The `decoquiz init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    // Create decoquiz.toml
    if std::path::Path::new("decoquiz.toml").exists() {
        println!("decoquiz.toml already exists, skipping.");
    } else {
        std::fs::write("decoquiz.toml", SAMPLE_CONFIG)?;
        println!("Created decoquiz.toml");
    }

    // Create example question bank
    std::fs::create_dir_all("banks")?;
    let example_path = std::path::Path::new("banks/example.toml");
    if example_path.exists() {
        println!("banks/example.toml already exists, skipping.");
    } else {
        std::fs::write(example_path, EXAMPLE_BANK)?;
        println!("Created banks/example.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit banks/example.toml with your own questions");
    println!("  2. Run: decoquiz validate --bank banks/example.toml");
    println!("  3. Run: decoquiz run --bank banks/example.toml");

    Ok(())
}

const SAMPLE_CONFIG: &str = r#"# decoquiz configuration

# Built-in bank to use: "en" or "tr"
locale = "en"

# Uncomment to use your own bank instead
# bank = "banks/example.toml"

pause_between_questions = true
offer_retry = true
rule_width = 70
"#;

const EXAMPLE_BANK: &str = r#"[bank]
id = "example"
locale = "en"
title = "EXAMPLE QUIZ"

# Every [messages] entry is optional; missing ones use the English defaults.
[messages]
retry_token = "yes"

[[questions]]
prompt = "Which decorator turns a method into a read-only attribute?"
correct = "a"
explanation = "@property exposes a method as an attribute accessed without parentheses."

[questions.options]
a = "@property"
b = "@staticmethod"
c = "@classmethod"

[[questions]]
prompt = "Which decorator marks a method that subclasses must implement?"
correct = "c"
explanation = "@abstractmethod prevents instantiation until every abstract method is overridden."

[questions.options]
a = "@final"
b = "@override"
c = "@abstractmethod"
"#;
