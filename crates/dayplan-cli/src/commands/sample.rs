//! Example tasks file, ready for `dayplan sample > tasks.toml`.

const SAMPLE: &str = r#"# dayplan tasks file
# Fields: title, duration_min (minutes), importance (1-5),
# optional due = "YYYY-MM-DD", optional status = "todo" | "done".

[[tasks]]
title = "Spend 60 minutes on tomorrow's most important thing"
duration_min = 60
importance = 5

[[tasks]]
title = "Reply to two mails"
duration_min = 30
importance = 3
due = "2026-08-31"

[[tasks]]
title = "Tidy desk and small chores"
duration_min = 30
importance = 2
"#;

pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    print!("{SAMPLE}");
    Ok(())
}
