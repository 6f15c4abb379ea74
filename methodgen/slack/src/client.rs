use std::sync::Arc;

use methodgen_runtime::{HttpClient, TransportError};
use tracing::debug;

use crate::services::{
    AuthService, ChannelsService, ChatService, DialogService, IMService, OauthService,
    ReactionsService, UsersProfileService, UsersService,
};

/// Base URL of the Slack Web API.
pub const SLACK_API_URL: &str = "https://slack.com/api/";

const USER_AGENT: &str = concat!("methodgen-slack/", env!("CARGO_PKG_VERSION"));

/// Entry point to the Slack Web API.
///
/// Every service shares one HTTP client and token.
///
/// ## Examples
///
/// ```no_run
/// use methodgen_slack::{Client, Context};
///
/// # async fn run() -> Result<(), Box<dyn std::error::Error>> {
/// let client = Client::new("xoxb-token")?;
/// let message = client
///     .chat()
///     .post_message("C024BE91L")
///     .text("Hello from Rust")
///     .execute(&Context::background())
///     .await?;
/// println!("posted at {}", message.ts);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    auth: AuthService,
    channels: ChannelsService,
    chat: ChatService,
    dialog: DialogService,
    im: IMService,
    oauth: OauthService,
    reactions: ReactionsService,
    users: UsersService,
    users_profile: UsersProfileService,
}

impl Client {
    /// Creates a client for the public Slack API.
    ///
    /// ## Errors
    ///
    /// Returns an error if the HTTP client cannot be constructed.
    pub fn new(token: impl Into<String>) -> Result<Self, TransportError> {
        Self::with_base_url(token, SLACK_API_URL)
    }

    /// Creates a client that talks to `base_url` instead of the public API.
    ///
    /// ## Errors
    ///
    /// Returns an error if the base URL is invalid.
    pub fn with_base_url(
        token: impl Into<String>,
        base_url: impl Into<String>,
    ) -> Result<Self, TransportError> {
        let http = HttpClient::builder(base_url).user_agent(USER_AGENT).build()?;
        Ok(Self::with_http_client(token, Arc::new(http)))
    }

    /// Creates a client around an existing HTTP client.
    pub fn with_http_client(token: impl Into<String>, http: Arc<HttpClient>) -> Self {
        let token = token.into();
        debug!(base_url = %http.base_url(), "creating slack client");

        Self {
            auth: AuthService {
                client: Arc::clone(&http),
                token: token.clone(),
            },
            channels: ChannelsService {
                client: Arc::clone(&http),
                token: token.clone(),
            },
            chat: ChatService {
                client: Arc::clone(&http),
                token: token.clone(),
            },
            dialog: DialogService {
                client: Arc::clone(&http),
                token: token.clone(),
            },
            im: IMService {
                client: Arc::clone(&http),
                token: token.clone(),
            },
            oauth: OauthService {
                client: Arc::clone(&http),
                token: token.clone(),
            },
            reactions: ReactionsService {
                client: Arc::clone(&http),
                token: token.clone(),
            },
            users: UsersService {
                client: Arc::clone(&http),
                token: token.clone(),
            },
            users_profile: UsersProfileService { client: http, token },
        }
    }

    pub fn auth(&self) -> &AuthService {
        &self.auth
    }

    pub fn channels(&self) -> &ChannelsService {
        &self.channels
    }

    pub fn chat(&self) -> &ChatService {
        &self.chat
    }

    pub fn dialog(&self) -> &DialogService {
        &self.dialog
    }

    pub fn im(&self) -> &IMService {
        &self.im
    }

    pub fn oauth(&self) -> &OauthService {
        &self.oauth
    }

    pub fn reactions(&self) -> &ReactionsService {
        &self.reactions
    }

    pub fn users(&self) -> &UsersService {
        &self.users
    }

    /// Service for the `users.profile.*` endpoints.
    pub fn users_profile(&self) -> &UsersProfileService {
        &self.users_profile
    }
}
