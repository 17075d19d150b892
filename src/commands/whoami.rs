use clap::ArgMatches;

use crate::config::load_config;

/// The API has no viewer endpoint; the principal is whatever the last
/// login/register response returned.
pub async fn handle_whoami(_matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let config = load_config();

    match config.user {
        Some(user) => {
            println!("Logged in as: {} ({})", user.name, user.email);
            println!("User ID: {}", user.id);
        }
        None => {
            if config.token.is_some() {
                println!("A token is configured but no user is cached. Run 'taskhub login' to refresh.");
            } else {
                println!("Not logged in. Run 'taskhub login' or 'taskhub register'.");
            }
        }
    }

    Ok(())
}
