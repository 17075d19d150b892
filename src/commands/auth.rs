use clap::ArgMatches;
use colored::*;

use crate::cli_context::CliContext;
use crate::config::{load_config, save_config};
use crate::error::ErrorContext;
use crate::formatting::extract_first_name;

pub async fn handle_login(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let email = matches.get_one::<String>("email");
    let password = matches.get_one::<String>("password");

    let (Some(email), Some(password)) = (email, password) else {
        println!("Usage: taskhub login --email <EMAIL> --password <PASSWORD>");
        return Ok(());
    };

    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.anonymous_client();

    let auth = client.login(email, password).await?;
    let user = auth.user.clone();
    context.set_session(auth.token, auth.user)?;

    println!(
        "{} {}",
        "✅".green(),
        format!("Welcome back, {}!", extract_first_name(&user.name))
            .green()
            .bold()
    );
    println!("Logged in as: {} ({})", user.name, user.email);

    Ok(())
}

pub async fn handle_register(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let name = matches.get_one::<String>("name");
    let email = matches.get_one::<String>("email");
    let password = matches.get_one::<String>("password");

    let (Some(name), Some(email), Some(password)) = (name, email, password) else {
        println!("Usage: taskhub register --name <NAME> --email <EMAIL> --password <PASSWORD>");
        return Ok(());
    };

    let mut context = CliContext::load().context("Failed to load CLI context")?;
    let client = context.anonymous_client();

    let auth = client.register(name, email, password).await?;
    let user = auth.user.clone();
    context.set_session(auth.token, auth.user)?;

    println!(
        "{} {}",
        "✅".green(),
        format!("Welcome, {}!", extract_first_name(&user.name))
            .green()
            .bold()
    );
    println!("Account created for: {} ({})", user.name, user.email);

    Ok(())
}

pub async fn handle_logout(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = CliContext::load().context("Failed to load CLI context")?;

    if !context.has_token() {
        println!("Not logged in.");
        return Ok(());
    }

    context.clear_session()?;
    println!("Logged out.");

    Ok(())
}

pub async fn handle_auth(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(token) = matches.get_one::<String>("token") {
        let mut config = load_config();
        config.token = Some(token.clone());
        config.user = None;
        save_config(&config)?;
        println!("Token saved successfully!");

        // Test the token against the API
        let mut context = CliContext::load().context("Failed to load CLI context")?;
        let client = context.authenticated_client()?;
        match client.get_groups().await {
            Ok(groups) => println!(
                "{} Token verified ({} group(s) visible)",
                "✅".green(),
                groups.len()
            ),
            Err(e) => println!("{} Failed to authenticate: {}", "❌".red(), e),
        }
    } else if matches.get_flag("show") {
        let config = load_config();
        match config.token {
            Some(token) if token.len() > 12 => {
                println!("Token: {}...{}", &token[..8], &token[token.len() - 4..])
            }
            Some(_) => println!("Token: <set>"),
            None => println!("No token configured"),
        }
    } else {
        println!("Usage: taskhub auth --token <TOKEN> or taskhub auth --show");
    }
    Ok(())
}
