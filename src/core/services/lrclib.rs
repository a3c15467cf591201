use std::time::Duration;

use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::FetchError;
use crate::signal::CancelToken;

/// A single track record as returned by the LRCLIB `/api/get` endpoint.
///
/// The upstream decoder is lenient: absent fields fall back to their
/// zero values instead of failing the whole response.
#[derive(Deserialize, Serialize, Debug, Clone, Default)]
#[serde(rename_all = "camelCase", default)]
pub struct LyricsRecord {
    pub id: i64,
    pub name: String,
    pub track_name: String,
    pub artist_name: String,
    pub album_name: String,
    pub duration: f64,
    pub instrumental: bool,
    pub plain_lyrics: Option<String>,
    pub synced_lyrics: Option<String>,
}

impl LyricsRecord {
    /// Synced lyrics win over plain; empty strings count as absent.
    pub fn best_lyrics(&self) -> Option<&str> {
        match self.synced_lyrics.as_deref() {
            Some(synced) if !synced.is_empty() => Some(synced),
            _ => match self.plain_lyrics.as_deref() {
                Some(plain) if !plain.is_empty() => Some(plain),
                _ => None,
            },
        }
    }
}

/// Query parameters for a `/api/get` lookup. `album_name` and `duration`
/// are only sent when they carry a value.
fn build_query(
    artist_name: &str,
    track_name: &str,
    album_name: &str,
    duration_seconds: i64,
) -> Vec<(&'static str, String)> {
    let mut params = vec![
        ("artist_name", artist_name.to_string()),
        ("track_name", track_name.to_string()),
    ];

    if !album_name.is_empty() {
        params.push(("album_name", album_name.to_string()));
    }
    if duration_seconds > 0 {
        params.push(("duration", duration_seconds.to_string()));
    }

    params
}

#[derive(Clone)]
pub struct LrclibClient {
    client: reqwest::Client,
    base_url: String,
}

impl LrclibClient {
    pub fn new(base_url: &str, timeout: Duration, user_agent: Option<&str>) -> Self {
        let default_agent = format!(
            "lrcfetch v{} (https://github.com/musicdock/lrcfetch)",
            env!("CARGO_PKG_VERSION")
        );
        let user_agent = user_agent.unwrap_or(&default_agent);

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()
            .expect("Failed to create HTTP client");

        Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    /// Look up a single track record. `Ok(None)` means the instance
    /// answered with a non-200 status, which LRCLIB uses for "no match".
    pub async fn get_record(
        &self,
        artist_name: &str,
        track_name: &str,
        album_name: &str,
        duration_seconds: i64,
    ) -> Result<Option<LyricsRecord>, FetchError> {
        let url = format!("{}/api/get", self.base_url);
        let params = build_query(artist_name, track_name, album_name, duration_seconds);

        debug!("GET {} params: {:?}", url, params);

        let response = self
            .client
            .get(&url)
            .query(&params)
            .send()
            .await
            .map_err(FetchError::from)?;

        let status = response.status();
        debug!("Response status: {}", status);

        if status != StatusCode::OK {
            return Ok(None);
        }

        let record: LyricsRecord = response
            .json()
            .await
            .map_err(|e| FetchError::InvalidResponse {
                reason: e.to_string(),
            })?;

        debug!(
            "Record: id={} track={:?} artist={:?} album={:?} duration={:.2} instrumental={}",
            record.id,
            record.track_name,
            record.artist_name,
            record.album_name,
            record.duration,
            record.instrumental
        );
        debug!(
            "Lyrics lengths: synced={:?} plain={:?}",
            record.synced_lyrics.as_ref().map(|s| s.len()),
            record.plain_lyrics.as_ref().map(|s| s.len())
        );

        Ok(Some(record))
    }
}

/// Best-effort lyrics lookup against a single LRCLIB instance.
///
/// `fetch` never fails from the caller's point of view: transport
/// errors, timeouts, cancellation, unexpected statuses, and decode
/// errors all come back as an empty string, with the reason visible
/// only in the debug log. Callers treat the result as found (non-empty)
/// or not found (empty).
#[derive(Clone)]
pub struct LyricsFetcher {
    client: LrclibClient,
}

impl LyricsFetcher {
    pub fn new(client: LrclibClient) -> Self {
        Self { client }
    }

    pub async fn fetch(
        &self,
        cancel: &CancelToken,
        artist_name: &str,
        track_name: &str,
        album_name: &str,
        duration_seconds: i64,
    ) -> String {
        debug!(
            "Lyrics lookup: artist={:?} track={:?} album={:?} duration={}",
            artist_name, track_name, album_name, duration_seconds
        );

        if cancel.is_cancelled() {
            debug!("Lookup skipped: already cancelled");
            return String::new();
        }

        let request = self
            .client
            .get_record(artist_name, track_name, album_name, duration_seconds);

        let record = tokio::select! {
            result = request => match result {
                Ok(Some(record)) => record,
                Ok(None) => {
                    debug!("No match from instance");
                    return String::new();
                }
                Err(e) => {
                    warn!("Lyrics lookup failed: {}", e);
                    return String::new();
                }
            },
            _ = cancel.cancelled() => {
                debug!("Lookup cancelled while in flight");
                return String::new();
            }
        };

        match record.best_lyrics() {
            Some(lyrics) => {
                if record.synced_lyrics.as_deref().is_some_and(|s| !s.is_empty()) {
                    debug!("Result: synced lyrics found");
                } else {
                    debug!("Result: plain lyrics found");
                }
                lyrics.to_string()
            }
            None => {
                if record.instrumental {
                    debug!("Result: track is instrumental, no lyrics text");
                } else {
                    debug!("Result: lyrics not found");
                }
                String::new()
            }
        }
    }
}
