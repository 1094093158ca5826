//! `chat-tasks list` command.

use crate::tasks::{TaskInfo, CATALOG};

/// Execute the `list` command.
///
/// # Errors
///
/// Never fails; returns `Result` to match the other handlers.
pub fn run() -> Result<(), String> {
    println!("{}", format_catalog(&CATALOG));
    Ok(())
}

/// Renders one line per task: usage, description and prerequisites.
#[must_use]
pub fn format_catalog(tasks: &[TaskInfo]) -> String {
    let usages: Vec<String> = tasks
        .iter()
        .map(|t| {
            std::iter::once(t.name)
                .chain(t.params.iter().copied())
                .collect::<Vec<_>>()
                .join(" ")
        })
        .collect();
    let width = usages.iter().map(String::len).max().unwrap_or(0);

    let mut out = String::from("Available tasks:");
    for (task, usage) in tasks.iter().zip(&usages) {
        out.push_str(&format!("\n    {usage:<width$}  # {}", task.about));
        if !task.requires.is_empty() {
            out.push_str(&format!(" (after: {})", task.requires.join(", ")));
        }
    }
    out
}
