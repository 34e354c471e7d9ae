use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use reqwest::Client;

/// Shared HTTP client for both upstream services.
pub fn build_client<C: ConfigProvider + ?Sized>(config: &C) -> Result<Client> {
    let client = Client::builder()
        .timeout(config.request_timeout())
        .user_agent(config.user_agent())
        .build()?;
    Ok(client)
}
