use colored::*;

use super::tasks::get_status_icon;
use super::utils::truncate;
use crate::models::{Group, GroupDetail, User};

pub fn print_groups(groups: &[Group], viewer: Option<&User>, format: &str) {
    if groups.is_empty() {
        println!("{}", "No groups yet.".dimmed());
        return;
    }

    match format {
        "json" => {
            let json = serde_json::to_string_pretty(&groups).unwrap();
            println!("{}", json);
        }
        _ => {
            println!("{}", "─".repeat(80).dimmed());
            println!(
                "{:<10} {:<24} {:<34} {:<10}",
                "ID".bold(),
                "Name".bold(),
                "Description".bold(),
                "Role".bold()
            );
            println!("{}", "─".repeat(80).dimmed());

            for group in groups {
                let role = match viewer {
                    Some(user) if group.is_owned_by(&user.id) => "owner".cyan(),
                    _ => "member".dimmed(),
                };

                println!(
                    "{:<10} {:<24} {:<34} {:<10}",
                    truncate(&group.id, 10).blue(),
                    truncate(&group.name, 24).magenta(),
                    truncate(group.description.as_deref().unwrap_or(""), 34),
                    role
                );
            }
            println!("{}", "─".repeat(80).dimmed());
        }
    }
}

pub fn print_group_detail(detail: &GroupDetail, viewer: Option<&User>) {
    let group = &detail.group;

    println!();
    println!("{}", group.name.magenta().bold());
    if let Some(description) = group.description.as_deref() {
        if !description.trim().is_empty() {
            println!("{}", description.dimmed());
        }
    }
    println!("{}: {}", "ID".bold(), group.id.blue());

    println!("\n{} ({})", "Members".bold(), detail.members.len());
    println!("{}", "─".repeat(50).dimmed());
    if detail.members.is_empty() {
        // Bare detail responses only carry member ids
        if group.member_ids.is_empty() {
            println!("{}", "No members listed.".dimmed());
        } else {
            for member_id in &group.member_ids {
                println!("  {}", member_id.blue());
            }
        }
    } else {
        for member in &detail.members {
            let badge = if group.is_owned_by(&member.id) {
                " owner".cyan().bold()
            } else {
                "".normal()
            };
            let you = match viewer {
                Some(user) if user.id == member.id => " (you)".dimmed(),
                _ => "".normal(),
            };
            println!(
                "  {} {}{}{}",
                member.name.green(),
                member.email.dimmed(),
                badge,
                you
            );
        }
    }

    println!("\n{} ({})", "Tasks".bold(), detail.tasks.len());
    println!("{}", "─".repeat(50).dimmed());
    if detail.tasks.is_empty() {
        println!("{}", "No tasks in this group.".dimmed());
    } else {
        for task in &detail.tasks {
            println!(
                "  {} {} - {}",
                get_status_icon(task.status),
                truncate(&task.id, 10).blue(),
                task.title
            );
        }
    }
    println!();
}
