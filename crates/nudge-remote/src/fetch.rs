use log::debug;
use serde::Deserialize;

use nudge_core::UpdateInfo;

use crate::error::RemoteError;

const SELECT_COLUMNS: &str = "version,update_message,is_critical,app_store_url";

/// Where the published versions live and the static credential pair used to
/// read them. The same key is sent as both the `apikey` header and the
/// bearer token.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    pub base_url: String,
    pub table: String,
    pub api_key: String,
}

impl RemoteConfig {
    /// URL selecting the single newest row from the versions table.
    #[must_use]
    pub fn latest_version_url(&self) -> String {
        format!(
            "{}/rest/v1/{}?select={SELECT_COLUMNS}&order=released_at.desc&limit=1",
            self.base_url.trim_end_matches('/'),
            self.table,
        )
    }
}

#[derive(Deserialize)]
struct VersionRow {
    version: String,
    #[serde(default)]
    update_message: String,
    #[serde(default)]
    is_critical: bool,
    app_store_url: String,
}

impl From<VersionRow> for UpdateInfo {
    fn from(row: VersionRow) -> Self {
        UpdateInfo {
            version: row.version,
            message: row.update_message,
            is_critical: row.is_critical,
            store_url: row.app_store_url,
        }
    }
}

/// Fetch the newest published release from the remote versions table.
///
/// Returns `Ok(None)` when the table has no rows. Callers must treat any
/// error as "no update": never prompt on a failed check.
///
/// # Errors
/// Returns an error when the request fails, the server answers with a
/// non-success status, or the response body does not match the expected
/// row schema.
pub async fn fetch_latest(
    client: &reqwest::Client,
    config: &RemoteConfig,
) -> Result<Option<UpdateInfo>, RemoteError> {
    let url = config.latest_version_url();
    debug!("Checking for updates at {url}");

    let response = client
        .get(&url)
        .header("apikey", &config.api_key)
        .bearer_auth(&config.api_key)
        .send()
        .await
        .map_err(RemoteError::Request)?;

    if !response.status().is_success() {
        let status = response.status();
        let body_snippet = response
            .text()
            .await
            .ok()
            .map(|body| response_snippet(&body, 160))
            .unwrap_or_default();
        return Err(RemoteError::HttpStatus {
            status,
            body_snippet,
        });
    }

    let body = response.text().await.map_err(RemoteError::Request)?;
    parse_latest(&body)
}

fn parse_latest(body: &str) -> Result<Option<UpdateInfo>, RemoteError> {
    let rows: Vec<VersionRow> = serde_json::from_str(body).map_err(RemoteError::Parse)?;
    Ok(rows.into_iter().next().map(UpdateInfo::from))
}

fn response_snippet(body: &str, max_chars: usize) -> String {
    let snippet: String = body.chars().take(max_chars).collect();
    if snippet.is_empty() {
        String::new()
    } else {
        format!(": {snippet}")
    }
}
