use clap::ArgMatches;
use colored::*;
use regex::Regex;

use crate::cli_context::CliContext;
use crate::error::{ErrorContext, TaskHubError, TaskHubResult};

/// Pull the invite token out of whatever the user pasted. Accepts a bare
/// code, or a full invite link with a `?token=` query parameter.
pub fn extract_invite_token(input: &str) -> TaskHubResult<String> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(TaskHubError::InvalidInput(
            "Please provide an invite code".to_string(),
        ));
    }

    if trimmed.contains("token=") {
        let re = Regex::new(r"(?:^|[?&])token=([^&\s]+)").expect("invalid token regex");
        if let Some(captures) = re.captures(trimmed) {
            return Ok(captures[1].to_string());
        }
        return Err(TaskHubError::InvalidInput(format!(
            "Could not find a token in '{}'",
            trimmed
        )));
    }

    Ok(trimmed.to_string())
}

pub async fn handle_invite_create(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context
        .authenticated_client()
        .context("Failed to get API client")?;

    let group_id = matches
        .get_one::<String>("group-id")
        .ok_or("Group ID is required")?;

    let invite = client
        .create_invite(group_id)
        .await
        .with_context(|| format!("Creating invite for group {}", group_id))?;

    println!(
        "{} {}",
        "✅".green(),
        "Invite code created!".green().bold()
    );
    println!("{}: {}", "Code".bold(), invite.token.bright_blue().bold());
    if let Some(link) = invite.link.as_deref() {
        println!("{}: {}", "Link".bold(), link.bright_black());
    }
    println!("\nAnyone with this code can join once via 'taskhub invite accept <CODE>'.");

    Ok(())
}

pub async fn handle_invite_accept(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    handle_invite_accept_impl(matches)
        .await
        .map_err(|e| Box::new(e) as Box<dyn std::error::Error>)
}

async fn handle_invite_accept_impl(matches: &ArgMatches) -> TaskHubResult<()> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context
        .authenticated_client()
        .context("Failed to get API client")?;

    let raw = matches
        .get_one::<String>("code")
        .ok_or_else(|| TaskHubError::InvalidInput("Invite code is required".to_string()))?;
    let token = extract_invite_token(raw)?;

    let accepted = client.accept_invite(&token).await?;

    if !accepted.success {
        return Err(TaskHubError::InvalidInput(
            accepted
                .error
                .unwrap_or_else(|| "Invitation was rejected".to_string()),
        ));
    }

    match accepted.group_id.as_deref() {
        Some(group_id) => match client.get_group(group_id).await {
            Ok(detail) => {
                println!(
                    "{} {}",
                    "✅".green(),
                    format!("You joined {}!", detail.group.name).green().bold()
                );
                println!(
                    "{} member(s), {} task(s). See 'taskhub group {}'.",
                    detail.members.len(),
                    detail.tasks.len(),
                    group_id
                );
            }
            // Membership is already granted at this point; the detail
            // fetch failing should not look like a failed accept.
            Err(_) => {
                println!(
                    "{} {}",
                    "✅".green(),
                    "Invitation accepted!".green().bold()
                );
                println!("Group ID: {}", group_id);
            }
        },
        None => {
            println!(
                "{} {}",
                "✅".green(),
                "Invitation accepted!".green().bold()
            );
            println!("Run 'taskhub groups' to see your groups.");
        }
    }

    Ok(())
}
