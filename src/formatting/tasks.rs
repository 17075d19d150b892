use colored::*;

use super::utils::*;
use crate::models::{Group, Task, TaskStatus};

pub fn format_status_color(status: TaskStatus) -> ColoredString {
    match status {
        TaskStatus::Todo => status.label().normal(),
        TaskStatus::InProgress => status.label().yellow(),
        TaskStatus::Done => status.label().green(),
    }
}

pub fn get_status_icon(status: TaskStatus) -> &'static str {
    match status {
        TaskStatus::Todo => "○",
        TaskStatus::InProgress => "◐",
        TaskStatus::Done => "✓",
    }
}

fn group_name<'a>(task: &Task, groups: &'a [Group]) -> Option<&'a str> {
    let group_id = task.group_id.as_deref()?;
    groups
        .iter()
        .find(|g| g.id == group_id)
        .map(|g| g.name.as_str())
}

pub fn print_tasks(tasks: &[Task], format: &str, groups: &[Group]) {
    if tasks.is_empty() {
        println!("{}", "No tasks found.".dimmed());
        return;
    }

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&tasks).unwrap();
            println!("{}", json);
        }
        "table" => {
            // Print header
            println!("{}", "─".repeat(100).dimmed());
            println!(
                "{:<10} {:<40} {:<14} {:<18} {:<14}",
                "ID".bold(),
                "Title".bold(),
                "Status".bold(),
                "Group".bold(),
                "Deadline".bold()
            );
            println!("{}", "─".repeat(100).dimmed());

            // Print rows
            for task in tasks {
                let group = group_name(task, groups).unwrap_or("personal");

                println!(
                    "{:<10} {:<40} {:<14} {:<18} {:<14}",
                    truncate(&task.id, 10).blue(),
                    truncate(&task.title, 40),
                    format_status_color(task.status),
                    if group == "personal" {
                        group.dimmed()
                    } else {
                        group.magenta()
                    },
                    task.deadline
                        .as_deref()
                        .map(format_deadline)
                        .unwrap_or_else(|| "—".dimmed())
                );
            }
            println!("{}", "─".repeat(100).dimmed());
        }
        _ => {
            // Group tasks by status, in progress first
            for status in TaskStatus::ORDERED {
                let in_status: Vec<&Task> =
                    tasks.iter().filter(|t| t.status == status).collect();
                if in_status.is_empty() {
                    continue;
                }

                // Print status header
                println!(
                    "\n{} {} ({})",
                    get_status_icon(status),
                    status.label().bold(),
                    in_status.len()
                );
                println!("{}", "─".repeat(50).dimmed());

                for task in in_status {
                    let group = group_name(task, groups)
                        .map(|name| format!(" [{}]", name.magenta()))
                        .unwrap_or_default();

                    let deadline = task
                        .deadline
                        .as_deref()
                        .map(|d| format!(" due {}", format_deadline(d)))
                        .unwrap_or_default();

                    // Format description preview
                    let desc_preview = task
                        .description
                        .as_deref()
                        .map(clean_description)
                        .filter(|c| !c.is_empty())
                        .map(|c| format!("\n    {}", c.dimmed()))
                        .unwrap_or_default();

                    println!(
                        "  {} - {}{}{}{}",
                        truncate(&task.id, 10).blue(),
                        task.title,
                        group,
                        deadline,
                        desc_preview
                    );
                }
            }
            println!();
        }
    }
}

pub fn print_single_task(task: &Task, groups: &[Group]) {
    println!();
    println!(
        "{} {}",
        get_status_icon(task.status),
        task.title.bold()
    );
    println!("{}", "─".repeat(50).dimmed());
    println!("{}: {}", "ID".bold(), task.id.blue());
    println!("{}: {}", "Status".bold(), format_status_color(task.status));

    match group_name(task, groups) {
        Some(name) => println!("{}: {}", "Group".bold(), name.magenta()),
        None => println!("{}: {}", "Group".bold(), "personal".dimmed()),
    }

    if let Some(deadline) = task.deadline.as_deref() {
        println!("{}: {}", "Deadline".bold(), format_deadline(deadline));
    }

    if let Some(description) = task.description.as_deref() {
        if !description.trim().is_empty() {
            println!("\n{}", description);
        }
    }
    println!();
}
