use tracing::info;

use crate::error::{Result, ScrapeError};

pub fn client(user_agent: &str) -> Result<reqwest::Client> {
    let client = reqwest::Client::builder().user_agent(user_agent).build()?;
    Ok(client)
}

/// GET the calendar page. Any non-2xx status is an error; there are no retries.
pub async fn fetch_calendar(client: &reqwest::Client, url: &str) -> Result<String> {
    info!("Fetching FDA calendar: {}", url);
    let resp = client.get(url).send().await?;
    let status = resp.status();
    if !status.is_success() {
        return Err(ScrapeError::Status {
            status: status.as_u16(),
            url: url.to_string(),
        });
    }
    let html = resp.text().await?;
    info!(bytes = html.len(), "fetched calendar page");
    Ok(html)
}
