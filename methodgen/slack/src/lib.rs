//! Slack Web API client.
//!
//! The service and call types are generated at build time from
//! `endpoints.json` by `methodgen-gen`. Each Slack namespace gets a module
//! (`chat`, `users_profile`, ...) holding its call types, and [`Client`]
//! hands out the services that create them.
//!
//! ```no_run
//! use methodgen_slack::{Client, Context};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let client = Client::new("xoxb-token")?;
//! let user = client.users().info("U024BE7LH").execute(&Context::background()).await?;
//! println!("{}", user.real_name);
//! # Ok(())
//! # }
//! ```

mod client;
pub mod objects;

pub use client::{Client, SLACK_API_URL};
pub use methodgen_runtime::{Context, MethodError, TransportError, Values};

/// Service handles, one per Slack namespace.
pub mod services {
    include!(concat!(env!("OUT_DIR"), "/services.rs"));
}

pub mod auth {
    include!(concat!(env!("OUT_DIR"), "/auth.rs"));
}

pub mod channels {
    include!(concat!(env!("OUT_DIR"), "/channels.rs"));
}

pub mod chat {
    include!(concat!(env!("OUT_DIR"), "/chat.rs"));
}

pub mod dialog {
    include!(concat!(env!("OUT_DIR"), "/dialog.rs"));
}

pub mod im {
    include!(concat!(env!("OUT_DIR"), "/im.rs"));
}

pub mod oauth {
    include!(concat!(env!("OUT_DIR"), "/oauth.rs"));
}

pub mod reactions {
    include!(concat!(env!("OUT_DIR"), "/reactions.rs"));
}

pub mod users {
    include!(concat!(env!("OUT_DIR"), "/users.rs"));
}

pub mod users_profile {
    include!(concat!(env!("OUT_DIR"), "/users_profile.rs"));
}
