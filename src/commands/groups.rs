use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::load_config;
use crate::error::{ErrorContext, TaskHubError, TaskHubResult};
use crate::formatting::{print_group_detail, print_groups};

pub async fn handle_groups(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context
        .authenticated_client()
        .context("Failed to get API client")?;

    let format = matches
        .get_one::<String>("format")
        .map(|s| s.as_str())
        .unwrap_or("table");

    let groups = client
        .get_groups()
        .await
        .with_context(|| "Fetching groups".to_string())?;

    if groups.is_empty() {
        println!("No groups yet. Create one with 'taskhub create group --name <NAME>'.");
    } else {
        println!("Found {} group(s):", groups.len());
        let config = load_config();
        print_groups(&groups, config.user.as_ref(), format);
    }

    Ok(())
}

pub async fn handle_group(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context
        .authenticated_client()
        .context("Failed to get API client")?;

    let group_id = matches
        .get_one::<String>("id")
        .ok_or_else(|| TaskHubError::InvalidInput("Group ID is required".to_string()))?;

    let detail = client
        .get_group(group_id)
        .await
        .with_context(|| format!("Fetching group {}", group_id))?;

    let config = load_config();
    print_group_detail(&detail, config.user.as_ref());

    Ok(())
}

pub async fn handle_create_group(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_create_group_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_create_group_impl(matches: &ArgMatches) -> TaskHubResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context
        .authenticated_client()
        .context("Failed to get API client")?;

    let name = matches
        .get_one::<String>("name")
        .ok_or_else(|| TaskHubError::InvalidInput("Group name is required".to_string()))?;
    if name.trim().is_empty() {
        return Err(TaskHubError::InvalidInput(
            "Group name must not be empty".to_string(),
        ));
    }

    let description = matches
        .get_one::<String>("description")
        .map(|s| s.as_str())
        .unwrap_or("");

    let group = client.create_group(name.trim(), description).await?;

    println!(
        "{} {}",
        "✅".green(),
        "Group created successfully!".green().bold()
    );
    println!("{}: {}", "ID".bold(), group.id.blue());
    println!("{}: {}", "Name".bold(), group.name.magenta());
    if let Some(description) = group.description.as_deref() {
        if !description.is_empty() {
            println!("{}: {}", "Description".bold(), description);
        }
    }
    println!(
        "\nInvite members with 'taskhub invite create {}'.",
        group.id
    );

    Ok(())
}

pub async fn handle_remove_member(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context
        .authenticated_client()
        .context("Failed to get API client")?;

    let group_id = matches
        .get_one::<String>("group-id")
        .ok_or("Group ID is required")?;
    let user_id = matches
        .get_one::<String>("user-id")
        .ok_or("User ID is required")?;

    client
        .remove_member(group_id, user_id)
        .await
        .with_context(|| format!("Removing member {} from group {}", user_id, group_id))?;

    println!("{} Member removed.", "✅".green());

    // Re-fetch so the confirmation reflects server state
    let detail = client.get_group(group_id).await?;
    println!(
        "{} now has {} member(s).",
        detail.group.name.magenta(),
        detail.members.len()
    );

    Ok(())
}
