use std::time::Duration;

use reqwest::Client;

use crate::prelude::*;

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Build a default client.
pub fn try_new() -> Result<Client> {
    Ok(Client::builder().user_agent(USER_AGENT).timeout(Duration::from_secs(10)).build()?)
}
