use crate::client::ApiClient;
use crate::config::{api_base_url, get_token, load_config, save_config};
use crate::error::{TaskHubError, TaskHubResult};
use crate::models::User;
use std::sync::Arc;

/// Central context for CLI operations, managing the session token and client
/// instances shared across a command.
pub struct CliContext {
    api_url: String,
    token: Option<String>,
    client: Option<Arc<ApiClient>>,
}

impl CliContext {
    /// Create a new, empty context.
    pub fn new() -> Self {
        Self {
            api_url: api_base_url(),
            token: None,
            client: None,
        }
    }

    /// Load context from the saved session.
    pub fn load() -> TaskHubResult<Self> {
        let token = get_token().ok();
        let api_url = api_base_url();
        let client = token
            .as_ref()
            .map(|t| Arc::new(ApiClient::new(api_url.clone(), Some(t))));

        Ok(Self {
            api_url,
            token,
            client,
        })
    }

    /// Get or create a client carrying the bearer token (requires a session).
    pub fn authenticated_client(&mut self) -> TaskHubResult<Arc<ApiClient>> {
        if let Some(client) = &self.client {
            return Ok(client.clone());
        }

        let token = self.token()?.clone();
        let client = Arc::new(ApiClient::new(self.api_url.clone(), Some(&token)));
        self.client = Some(client.clone());
        Ok(client)
    }

    /// Client without credentials, for login/register.
    pub fn anonymous_client(&self) -> Arc<ApiClient> {
        Arc::new(ApiClient::anonymous(self.api_url.clone()))
    }

    /// Get the session token, loading from config if necessary.
    pub fn token(&mut self) -> TaskHubResult<&String> {
        if self.token.is_none() {
            self.token = Some(get_token().map_err(|_| TaskHubError::TokenNotFound)?);
        }

        self.token.as_ref().ok_or(TaskHubError::TokenNotFound)
    }

    /// Persist a fresh session after login/register.
    pub fn set_session(&mut self, token: String, user: User) -> TaskHubResult<()> {
        let mut config = load_config();
        config.token = Some(token.clone());
        config.user = Some(user);
        save_config(&config).map_err(|e| TaskHubError::ConfigError(e.to_string()))?;
        self.client = Some(Arc::new(ApiClient::new(
            self.api_url.clone(),
            Some(&token),
        )));
        self.token = Some(token);
        Ok(())
    }

    /// Drop the saved session (logout).
    pub fn clear_session(&mut self) -> TaskHubResult<()> {
        let mut config = load_config();
        config.token = None;
        config.user = None;
        save_config(&config).map_err(|e| TaskHubError::ConfigError(e.to_string()))?;
        self.token = None;
        self.client = None;
        Ok(())
    }

    /// Check if context has a session token.
    pub fn has_token(&self) -> bool {
        self.token.is_some() || get_token().is_ok()
    }
}

impl Default for CliContext {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder pattern for creating CLI contexts with specific configurations.
pub struct CliContextBuilder {
    api_url: Option<String>,
    token: Option<String>,
}

impl CliContextBuilder {
    pub fn new() -> Self {
        Self {
            api_url: None,
            token: None,
        }
    }

    pub fn with_api_url(mut self, api_url: String) -> Self {
        self.api_url = Some(api_url);
        self
    }

    pub fn with_token(mut self, token: String) -> Self {
        self.token = Some(token);
        self
    }

    pub fn build(self) -> TaskHubResult<CliContext> {
        let context = if let Some(token) = self.token {
            let api_url = self.api_url.unwrap_or_else(api_base_url);
            let client = Some(Arc::new(ApiClient::new(api_url.clone(), Some(&token))));
            CliContext {
                api_url,
                token: Some(token),
                client,
            }
        } else if let Some(api_url) = self.api_url {
            CliContext {
                api_url,
                token: None,
                client: None,
            }
        } else {
            CliContext::load()?
        };

        Ok(context)
    }
}

impl Default for CliContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}
