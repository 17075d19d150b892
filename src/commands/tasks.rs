use chrono::NaiveDate;
use clap::ArgMatches;
use colored::*;
use std::io::{self, Write};

use crate::cli_context::CliContext;
use crate::commands::editor::edit_text;
use crate::config::load_config;
use crate::error::{ErrorContext, TaskHubError, TaskHubResult};
use crate::formatting::{format_status_color, print_single_task, print_tasks};
use crate::models::{Task, TaskCreate, TaskStatus, TaskUpdate};

/// Validate a deadline argument. Accepts `YYYY-MM-DD`, tolerating an RFC 3339
/// time suffix, and returns the bare date the API expects.
pub fn parse_deadline(input: &str) -> TaskHubResult<String> {
    let date_part = input.trim().split('T').next().unwrap_or(input);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map(|_| date_part.to_string())
        .map_err(|_| {
            TaskHubError::InvalidInput(format!(
                "Invalid deadline '{}'. Expected YYYY-MM-DD",
                input
            ))
        })
}

fn parse_status_arg(matches: &ArgMatches) -> TaskHubResult<Option<TaskStatus>> {
    match matches.get_one::<String>("status") {
        Some(raw) => raw
            .parse::<TaskStatus>()
            .map(Some)
            .map_err(TaskHubError::InvalidInput),
        None => Ok(None),
    }
}

pub async fn handle_tasks(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context
        .authenticated_client()
        .context("Failed to get API client")?;

    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("simple");
    let limit = matches
        .get_one::<String>("limit")
        .and_then(|s| s.parse::<usize>().ok())
        .unwrap_or(50);

    let mut tasks = if let Some(group_id) = matches.get_one::<String>("group") {
        client
            .get_group_tasks(group_id)
            .await
            .with_context(|| format!("Fetching tasks for group {}", group_id))?
    } else {
        client
            .get_tasks()
            .await
            .context("Fetching tasks")?
    };

    if let Some(status) = parse_status_arg(matches)? {
        tasks.retain(|t| t.status == status);
    }

    if let Some(search) = matches.get_one::<String>("search") {
        let query = search.to_lowercase();
        tasks.retain(|t| {
            t.title.to_lowercase().contains(&query)
                || t.description
                    .as_deref()
                    .map(|d| d.to_lowercase().contains(&query))
                    .unwrap_or(false)
        });
    }

    tasks.truncate(limit);

    if tasks.is_empty() {
        println!("No tasks found matching your criteria.");
        return Ok(());
    }

    // Groups are fetched alongside so group-scoped tasks print a name
    // instead of a raw id.
    let groups = client.get_groups().await.unwrap_or_default();

    println!("Found {} task(s):", tasks.len());
    print_tasks(&tasks, format, &groups);

    Ok(())
}

/// There is no single-task endpoint; resolve the id against the full list.
async fn find_task(client: &crate::ApiClient, task_id: &str) -> TaskHubResult<Task> {
    let tasks = client.get_tasks().await?;
    tasks
        .iter()
        .find(|t| t.id == task_id)
        .or_else(|| tasks.iter().find(|t| t.id.starts_with(task_id)))
        .cloned()
        .ok_or_else(|| TaskHubError::InvalidInput(format!("Task '{}' not found", task_id)))
}

pub async fn handle_task(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context
        .authenticated_client()
        .context("Failed to get API client")?;

    let task_id = matches
        .get_one::<String>("id")
        .ok_or_else(|| TaskHubError::InvalidInput("Task ID is required".to_string()))?;

    let task = find_task(&client, task_id).await?;
    let groups = client.get_groups().await.unwrap_or_default();
    print_single_task(&task, &groups);

    Ok(())
}

pub async fn handle_create_task(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_create_task_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_create_task_impl(matches: &ArgMatches) -> TaskHubResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context
        .authenticated_client()
        .context("Failed to get API client")?;

    let title = matches
        .get_one::<String>("title")
        .ok_or_else(|| TaskHubError::InvalidInput("Title is required".to_string()))?;
    if title.trim().is_empty() {
        return Err(TaskHubError::InvalidInput(
            "Title must not be empty".to_string(),
        ));
    }

    let mut description = matches.get_one::<String>("description").cloned();
    if matches.get_flag("edit") {
        description = edit_text(description.as_deref().unwrap_or(""))?
            .filter(|d| !d.is_empty())
            .or(description);
    }

    let status = parse_status_arg(matches)?.unwrap_or_default();

    let deadline = matches
        .get_one::<String>("deadline")
        .map(|d| parse_deadline(d))
        .transpose()?;

    // --group wins, then the configured default, personal otherwise
    let group_id = if matches.get_flag("personal") {
        None
    } else {
        matches
            .get_one::<String>("group")
            .cloned()
            .or_else(|| load_config().default_group_id)
    };

    let payload = TaskCreate {
        title: title.trim().to_string(),
        description,
        status,
        deadline,
        group_id,
    };

    let task = client.create_task(&payload).await?;

    println!(
        "{} {}",
        "✅".green(),
        "Task created successfully!".green().bold()
    );
    println!("{}: {}", "ID".bold(), task.id.blue());
    println!("{}: {}", "Title".bold(), task.title);
    println!("{}: {}", "Status".bold(), format_status_color(task.status));
    if let Some(deadline) = task.deadline_date() {
        println!("{}: {}", "Deadline".bold(), deadline);
    }
    if let Some(group_id) = task.group_id.as_deref() {
        println!("{}: {}", "Group".bold(), group_id.magenta());
    }

    Ok(())
}

pub async fn handle_update_task(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_update_task_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_update_task_impl(matches: &ArgMatches) -> TaskHubResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context
        .authenticated_client()
        .context("Failed to get API client")?;

    let task_id = matches
        .get_one::<String>("id")
        .ok_or_else(|| TaskHubError::InvalidInput("Task ID is required".to_string()))?;

    let mut description = matches.get_one::<String>("description").cloned();
    if matches.get_flag("edit") {
        // Seed the editor with the current description
        let current = find_task(&client, task_id).await?;
        let seed = description
            .clone()
            .or(current.description)
            .unwrap_or_default();
        if let Some(edited) = edit_text(&seed)? {
            description = Some(edited);
        }
    }

    let deadline = matches
        .get_one::<String>("deadline")
        .map(|d| parse_deadline(d))
        .transpose()?;

    // The backend treats an empty groupId as "make it personal"
    let group_id = if matches.get_flag("personal") {
        Some(String::new())
    } else {
        matches.get_one::<String>("group").cloned()
    };

    let update = TaskUpdate {
        title: matches.get_one::<String>("title").cloned(),
        description,
        status: parse_status_arg(matches)?,
        deadline,
        group_id,
    };

    if update.is_empty() {
        return Err(TaskHubError::InvalidInput(
            "No fields to update. Provide at least one field to update.".to_string(),
        ));
    }

    let task = client.update_task(task_id, &update).await?;

    println!(
        "{} {}",
        "✅".green(),
        "Task updated successfully!".green().bold()
    );
    println!("{}: {}", "ID".bold(), task.id.blue());
    println!("{}: {}", "Title".bold(), task.title);
    println!("{}: {}", "Status".bold(), format_status_color(task.status));
    if let Some(deadline) = task.deadline_date() {
        println!("{}: {}", "Deadline".bold(), deadline);
    }

    Ok(())
}

pub async fn handle_delete_task(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context
        .authenticated_client()
        .context("Failed to get API client")?;

    let task_id = matches
        .get_one::<String>("id")
        .ok_or("Task ID is required")?;

    if !matches.get_flag("yes") {
        print!("Delete task {}? [y/N] ", task_id);
        io::stdout().flush()?;
        let mut answer = String::new();
        io::stdin().read_line(&mut answer)?;
        if !matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
            println!("Aborted.");
            return Ok(());
        }
    }

    client
        .delete_task(task_id)
        .await
        .with_context(|| format!("Deleting task {}", task_id))?;

    println!("{} Task deleted successfully!", "✅".green());
    println!("Task ID: {}", task_id);

    Ok(())
}
