//! Statement output and status reporting.

use anyhow::{Context, Result};
use colored::Colorize;
use std::io::Write;
use std::path::Path;

/// Join statements with a blank line between each, newline-terminated
pub fn render_statements(statements: &[String]) -> String {
    if statements.is_empty() {
        return String::new();
    }
    let mut rendered = statements.join("\n\n");
    rendered.push('\n');
    rendered
}

/// Write rendered statements to `dest`, or stdout when `None`
pub fn write_statements(statements: &[String], dest: Option<&Path>) -> Result<()> {
    let rendered = render_statements(statements);
    match dest {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout
                .write_all(rendered.as_bytes())
                .and_then(|()| stdout.flush())
                .context("Failed to write to stdout")
        }
    }
}

/// Print a one-line summary to stderr
pub fn report(action: &str, models: usize, statements: usize, dest: Option<&Path>) {
    let target = dest
        .map(|p| format!(" → {}", p.display().to_string().cyan()))
        .unwrap_or_default();
    eprintln!(
        "{} {} {} model(s), {} statement(s){}",
        "✓".green().bold(),
        action.bold(),
        models,
        statements,
        target
    );
}
